use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod error;
mod components {
    pub mod accordion;
    pub mod carousel;
    pub mod detail_modal;
    pub mod email_form;
    pub mod navbar;
    pub mod theme_toggle;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}
mod utils {
    pub mod dom;
    pub mod preference;
    pub mod throttle;
}

use pages::landing::Landing;
use pages::not_found::NotFound;
use utils::preference::{apply_theme, toggle_theme, LocalStoragePreferences, PreferenceStore};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct RouteSwitchProps {
    theme: utils::preference::Theme,
    on_toggle_theme: Callback<()>,
}

#[function_component]
fn RouteSwitch(props: &RouteSwitchProps) -> Html {
    let theme = props.theme;
    let on_toggle_theme = props.on_toggle_theme.clone();
    html! {
        <Switch<Route> render={move |route: Route| match route {
            Route::Home => html! {
                <Landing {theme} on_toggle_theme={on_toggle_theme.clone()} />
            },
            Route::NotFound => html! { <NotFound /> },
        }} />
    }
}

#[function_component]
fn App() -> Html {
    let store = LocalStoragePreferences;
    // Read before the first paint so a saved light theme never flashes dark.
    let theme = use_state(|| store.load_theme());

    {
        use_effect_with_deps(
            move |theme| {
                apply_theme(*theme);
                || ()
            },
            *theme,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = toggle_theme(&store, *theme);
            log::info!("Theme switched to {}", next);
            theme.set(next);
        })
    };

    html! {
        <BrowserRouter>
            <RouteSwitch theme={*theme} {on_toggle_theme} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting Reelview");
    yew::Renderer::<App>::new().render();
}
