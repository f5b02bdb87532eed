use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::catalog::ContentRecord;
use crate::config::fallback;
use crate::utils::dom;

/// Everything the overlay prints, already resolved against the display
/// defaults. Built fresh from a record every time so nothing carries over
/// between titles.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub banner: String,
    pub year: String,
    pub rating: String,
    pub duration: String,
    pub genres: Vec<String>,
    pub synopsis: String,
    pub cast: String,
    pub director: String,
}

fn or_fallback(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

impl DetailView {
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            title: record.title.clone(),
            banner: record.full_image_url().to_string(),
            year: record
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| fallback::YEAR.to_string()),
            rating: or_fallback(&record.rating, fallback::RATING),
            duration: or_fallback(&record.duration, fallback::DURATION),
            genres: record.genres.clone(),
            synopsis: or_fallback(&record.description, fallback::SYNOPSIS),
            cast: or_fallback(&record.cast, fallback::CAST),
            director: or_fallback(&record.director, fallback::DIRECTOR),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(DetailView),
}

impl OverlayState {
    pub fn open(record: &ContentRecord) -> Self {
        OverlayState::Open(DetailView::from_record(record))
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open(_))
    }
}

/// Keeps the page behind the overlay from scrolling while it is shown.
pub fn sync_body_scroll(state: &OverlayState) {
    if let Err(e) = dom::set_body_scroll_locked(state.is_open()) {
        log::error!("Detail overlay could not toggle page scrolling: {}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub state: OverlayState,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn DetailModal(props: &DetailModalProps) -> Html {
    let is_open = props.state.is_open();

    // Escape closes the overlay; only listen while it is up.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |is_open| {
                let destructor: Box<dyn FnOnce()> = match (*is_open, web_sys::window()) {
                    (true, Some(window)) => {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        });
                        match window
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                        {
                            Ok(()) => Box::new(move || {
                                let _ = window.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }),
                            Err(e) => {
                                log::warn!("Escape key will not close the overlay: {:?}", e);
                                Box::new(|| ())
                            }
                        }
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            is_open,
        );
    }

    let view = match &props.state {
        OverlayState::Open(view) => view,
        OverlayState::Closed => return html! {},
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal active" role="dialog" aria-modal="true" aria-labelledby="modal-title">
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-content">
                <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                <div class="modal-banner">
                    <img src={view.banner.clone()} alt={view.title.clone()} />
                    <div class="modal-banner-fade"></div>
                    <h2 id="modal-title" class="modal-title">{&view.title}</h2>
                </div>
                <div class="modal-body">
                    <div class="modal-meta">
                        <span class="modal-year">{&view.year}</span>
                        <span class="modal-rating">{&view.rating}</span>
                        <span class="modal-duration">{&view.duration}</span>
                    </div>
                    <div class="modal-genres">
                        { for view.genres.iter().map(|genre| html! {
                            <span class="genre-tag">{genre}</span>
                        }) }
                    </div>
                    <p class="modal-description">{&view.synopsis}</p>
                    <p class="modal-credit">
                        <span class="credit-label">{"Cast: "}</span>{&view.cast}
                    </p>
                    <p class="modal-credit">
                        <span class="credit-label">{"Director: "}</span>{&view.director}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, GroupKey};
    use pretty_assertions::assert_eq;

    fn bare_record() -> ContentRecord {
        ContentRecord {
            id: 9,
            title: "Bare".to_string(),
            image: "https://image.tmdb.org/t/p/original/bare.jpg".to_string(),
            year: None,
            rating: None,
            duration: None,
            genres: Vec::new(),
            description: None,
            cast: None,
            director: None,
        }
    }

    #[test]
    fn full_record_is_copied_verbatim() {
        let record = catalog().group(GroupKey::Trending)[0].clone();
        let view = DetailView::from_record(&record);

        assert_eq!(view.title, record.title);
        assert_eq!(view.banner, record.image);
        assert_eq!(Some(view.year.clone()), record.year.map(|y| y.to_string()));
        assert_eq!(Some(view.rating.clone()), record.rating.clone());
        assert_eq!(Some(view.duration.clone()), record.duration.clone());
        assert_eq!(view.genres, record.genres);
        assert_eq!(Some(view.synopsis.clone()), record.description.clone());
        assert_eq!(Some(view.cast.clone()), record.cast.clone());
        assert_eq!(Some(view.director.clone()), record.director.clone());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let view = DetailView::from_record(&bare_record());

        assert_eq!(
            view,
            DetailView {
                title: "Bare".to_string(),
                banner: "https://image.tmdb.org/t/p/original/bare.jpg".to_string(),
                year: "2024".to_string(),
                rating: "U/A 13+".to_string(),
                duration: "1 Season".to_string(),
                genres: Vec::new(),
                synopsis: "No description available.".to_string(),
                cast: "Not available".to_string(),
                director: "Not available".to_string(),
            }
        );
    }

    #[test]
    fn banner_uses_full_resolution_image() {
        let record = catalog().group(GroupKey::Popular)[0].clone();
        let view = DetailView::from_record(&record);
        assert!(view.banner.contains("/original/"));
        assert_ne!(view.banner, record.card_image_url());
    }

    #[test]
    fn reopening_shows_only_the_second_record() {
        let first = catalog().group(GroupKey::Trending)[0].clone();
        let second = bare_record();

        let state = OverlayState::open(&first);
        assert!(state.is_open());
        let state = OverlayState::open(&second);

        assert_eq!(state, OverlayState::Open(DetailView::from_record(&second)));
        if let OverlayState::Open(view) = state {
            assert!(view.genres.is_empty());
            assert_eq!(view.cast, "Not available");
        }
    }

    #[test]
    fn closed_is_the_default() {
        assert!(!OverlayState::default().is_open());
    }
}
