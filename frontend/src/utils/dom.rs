use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Node, Window};
use yew::NodeRef;

use crate::error::UiError;

/// Outcome of a component's binding step: either every handle it needs is
/// present, or the component runs disabled.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding<T> {
    Ready(T),
    Disabled(UiError),
}

impl<T> Binding<T> {
    pub fn from_result(result: Result<T, UiError>) -> Self {
        match result {
            Ok(value) => Binding::Ready(value),
            Err(err) => Binding::Disabled(err),
        }
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Binding::Ready(value) => Some(value),
            Binding::Disabled(_) => None,
        }
    }

    /// Logs the reason when disabled, tagged with the owning component.
    pub fn report(self, component: &str) -> Option<T> {
        if let Binding::Disabled(err) = &self {
            log::warn!("{} disabled: {}", component, err);
        }
        self.ready()
    }
}

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::MissingWindow)
}

pub fn bind_element<T>(node: &NodeRef, name: &'static str) -> Binding<T>
where
    T: AsRef<Node> + From<JsValue>,
{
    Binding::from_result(node.cast::<T>().ok_or(UiError::MissingElement(name)))
}

pub fn body() -> Result<HtmlElement, UiError> {
    window()?
        .document()
        .and_then(|doc| doc.body())
        .ok_or(UiError::MissingElement("body"))
}

/// Locks or releases page scrolling behind a modal.
pub fn set_body_scroll_locked(locked: bool) -> Result<(), UiError> {
    let style = body()?.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    result.map_err(|_| UiError::MissingElement("body style"))
}

/// Adds or removes a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) -> Result<(), UiError> {
    let classes = body()?.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    result.map_err(|_| UiError::MissingElement("body classList"))
}

/// Whether a key press should count as activating a focused control.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }

    #[test]
    fn binding_reports_ready_value() {
        let bound: Binding<u8> = Binding::from_result(Ok(3));
        assert_eq!(bound.ready(), Some(3));

        let missing: Binding<u8> =
            Binding::from_result(Err(UiError::MissingElement("strip")));
        assert_eq!(missing, Binding::Disabled(UiError::MissingElement("strip")));
        assert_eq!(missing.report("carousel"), None);
    }

    #[test]
    fn unmounted_ref_binds_disabled() {
        let strip = NodeRef::default();
        let bound = bind_element::<HtmlElement>(&strip, "carousel strip");
        assert!(matches!(
            bound,
            Binding::Disabled(UiError::MissingElement("carousel strip"))
        ));
    }
}
