use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::catalog::{ContentRecord, GroupKey};
use crate::config;
use crate::utils::dom::{self, bind_element, is_activation_key};
use crate::utils::throttle::{ClickGuard, RateLimiter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    fn when(shown: bool) -> Self {
        if shown {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

/// Horizontal scroll position of a strip, read from the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub max_offset: f64,
}

impl ScrollMetrics {
    fn read(strip: &HtmlElement) -> Self {
        Self {
            offset: strip.scroll_left() as f64,
            max_offset: (strip.scroll_width() - strip.client_width()).max(0) as f64,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowVisibility {
    pub prev: Visibility,
    pub next: Visibility,
}

impl ArrowVisibility {
    /// Both arrows off; what a carousel shows until it is bound.
    pub const HIDDEN: Self = Self {
        prev: Visibility::Hidden,
        next: Visibility::Hidden,
    };

    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        Self {
            prev: Visibility::when(metrics.offset > 0.0),
            next: Visibility::when(
                metrics.offset < metrics.max_offset - config::CAROUSEL_END_TOLERANCE,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Signed horizontal distance for one arrow press on a strip `width` wide.
pub fn scroll_step(direction: Direction, width: f64) -> f64 {
    let step = width * config::CAROUSEL_STEP_RATIO;
    match direction {
        Direction::Prev => -step,
        Direction::Next => step,
    }
}

/// One card of a strip: the record it opens, its Top 10 position if the row
/// is ranked, and the poster it shows.
#[derive(Clone, Debug, PartialEq)]
pub struct CardSpec<'a> {
    pub record: &'a ContentRecord,
    pub rank: Option<usize>,
    pub image: String,
}

/// Cards for `records`, one each and in catalog order.
pub fn row_cards(group: GroupKey, records: &[ContentRecord]) -> Vec<CardSpec<'_>> {
    let ranked = group.is_ranked();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| CardSpec {
            record,
            rank: ranked.then_some(index + 1),
            image: record.card_image_url(),
        })
        .collect()
}

fn scroll_strip(strip: &HtmlElement, direction: Direction) {
    let options = ScrollToOptions::new();
    options.set_left(scroll_step(direction, strip.client_width() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    strip.scroll_by_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct ContentRowProps {
    pub group: GroupKey,
    pub records: &'static [ContentRecord],
    pub on_select: Callback<ContentRecord>,
}

/// One titled carousel of cards.
#[function_component]
pub fn ContentRow(props: &ContentRowProps) -> Html {
    let strip_ref = use_node_ref();
    let arrows = use_state_eq(|| ArrowVisibility::HIDDEN);
    let prev_guard = use_memo(|_| ClickGuard::new(), ());
    let next_guard = use_memo(|_| ClickGuard::new(), ());

    {
        let strip_ref = strip_ref.clone();
        let arrows = arrows.clone();
        let group = props.group;
        use_effect_with_deps(
            move |_| {
                let mut teardown: Option<Box<dyn FnOnce()>> = None;
                let bound = bind_element::<HtmlElement>(&strip_ref, "carousel strip");
                if let (Some(strip), Ok(window)) = (
                    bound.report(group.key()),
                    dom::window(),
                ) {
                    let refresh = {
                        let strip = strip.clone();
                        let arrows = arrows.clone();
                        move || arrows.set(ArrowVisibility::from_metrics(ScrollMetrics::read(&strip)))
                    };
                    refresh();

                    let on_scroll =
                        Closure::<dyn FnMut()>::new(RateLimiter::for_scroll().wrap(refresh.clone()));
                    let on_resize =
                        Closure::<dyn FnMut()>::new(RateLimiter::for_resize().wrap(refresh));
                    let scroll_ok = strip
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                        .is_ok();
                    let resize_ok = window
                        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                        .is_ok();
                    if !(scroll_ok && resize_ok) {
                        log::warn!("{} carousel could not watch scroll position", group.key());
                    }
                    teardown = Some(Box::new(move || {
                        let _ = strip.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                    }));
                }
                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            props.records,
        );
    }

    let on_arrow = |direction: Direction, guard: Rc<ClickGuard>| {
        let strip_ref = strip_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if !guard.accept() {
                return;
            }
            if let Some(strip) = strip_ref.cast::<HtmlElement>() {
                scroll_strip(&strip, direction);
            }
        })
    };
    let arrow_class = |visibility: Visibility| {
        classes!(
            "handle",
            (visibility == Visibility::Hidden).then_some("hidden")
        )
    };

    html! {
        <section class="row" id={format!("{}-row", props.group.key())}>
            <h2 class="row-title">{props.group.heading()}</h2>
            <div class="row-container">
                <button
                    class={classes!(arrow_class(arrows.prev), "left-handle")}
                    aria-label="Previous titles"
                    onclick={on_arrow(Direction::Prev, prev_guard.clone())}
                >
                    {"‹"}
                </button>
                <div class="row-posters" ref={strip_ref.clone()}>
                    { for row_cards(props.group, props.records).into_iter().map(|card| html! {
                        <ContentCard
                            key={card.record.id}
                            record={card.record.clone()}
                            rank={card.rank}
                            image={card.image}
                            on_select={props.on_select.clone()}
                        />
                    }) }
                </div>
                <button
                    class={classes!(arrow_class(arrows.next), "right-handle")}
                    aria-label="Next titles"
                    onclick={on_arrow(Direction::Next, next_guard.clone())}
                >
                    {"›"}
                </button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentCardProps {
    pub record: ContentRecord,
    #[prop_or_default]
    pub rank: Option<usize>,
    pub image: AttrValue,
    pub on_select: Callback<ContentRecord>,
}

#[function_component]
pub fn ContentCard(props: &ContentCardProps) -> Html {
    let onclick = {
        let record = props.record.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(record.clone()))
    };
    let onkeydown = {
        let record = props.record.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                on_select.emit(record.clone());
            }
        })
    };

    html! {
        <div
            class={classes!("poster-card", props.rank.map(|_| "ranked"))}
            role="button"
            tabindex="0"
            aria-label={props.record.title.clone()}
            {onclick}
            {onkeydown}
        >
            if let Some(rank) = props.rank {
                <span class="rank-number">{rank.to_string()}</span>
            }
            <img
                class="row-poster"
                src={props.image.clone()}
                alt={props.record.title.clone()}
                loading="lazy"
            />
            <div class="poster-title">{&props.record.title}</div>
        </div>
    }
}
