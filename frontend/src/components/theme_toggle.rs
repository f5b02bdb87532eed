use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::utils::dom::is_activation_key;
use crate::utils::preference::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Switch between the light and dark look. The owner keeps the theme and
/// does the persisting; this only reports activations.
#[function_component]
pub fn ThemeToggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                on_toggle.emit(());
            }
        })
    };
    let (icon, label) = match props.theme {
        Theme::Dark => ("☀", "Switch to light theme"),
        Theme::Light => ("☾", "Switch to dark theme"),
    };

    html! {
        <div
            class="theme-toggle"
            role="button"
            tabindex="0"
            aria-label={label}
            title={label}
            {onclick}
            {onkeydown}
        >
            <span class="theme-icon">{icon}</span>
        </div>
    }
}
