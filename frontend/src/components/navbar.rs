use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config;
use crate::utils::preference::Theme;
use crate::utils::throttle::RateLimiter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Solid,
}

impl HeaderStyle {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > config::NAVBAR_SOLID_THRESHOLD {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Transparent
        }
    }

    fn class(self) -> Option<&'static str> {
        match self {
            HeaderStyle::Transparent => None,
            HeaderStyle::Solid => Some("scrolled"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component]
pub fn Navbar(props: &NavbarProps) -> Html {
    let style = use_state_eq(|| HeaderStyle::Transparent);

    {
        let style = style.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let apply = {
                        let style = style.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    style.set(HeaderStyle::for_offset(scroll_y));
                                }
                            }
                        }
                    };
                    // Initial call
                    apply();
                    let callback = Closure::<dyn FnMut()>::new(RateLimiter::for_scroll().wrap(apply));
                    match window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        Ok(()) => Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }),
                        Err(e) => {
                            log::warn!("Navbar scroll watcher disabled: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    log::warn!("Navbar scroll watcher disabled: no window");
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <nav id="navbar" class={classes!("navbar", style.class())}>
            <div class="navbar-inner">
                <a href="/" class="nav-logo">{"REELVIEW"}</a>
                <div class="nav-actions">
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                    <select class="language-select" aria-label="Language">
                        <option value="en">{"English"}</option>
                        <option value="hi">{"हिन्दी"}</option>
                    </select>
                    <a href="#signup" class="sign-in-button">{"Sign In"}</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_transparent_up_to_threshold() {
        for y in [0.0, 12.5, 49.9, 50.0] {
            assert_eq!(HeaderStyle::for_offset(y), HeaderStyle::Transparent, "offset {}", y);
        }
    }

    #[test]
    fn header_is_solid_past_threshold() {
        for y in [50.01, 51.0, 400.0, 10_000.0] {
            assert_eq!(HeaderStyle::for_offset(y), HeaderStyle::Solid, "offset {}", y);
        }
    }

    #[test]
    fn repeated_offsets_give_the_same_style() {
        let first = HeaderStyle::for_offset(120.0);
        let second = HeaderStyle::for_offset(120.0);
        assert_eq!(first, second);
        assert_eq!(first.class(), Some("scrolled"));
    }
}
