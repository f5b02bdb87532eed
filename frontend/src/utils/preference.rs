use std::fmt;
use std::str::FromStr;

use crate::config;
use crate::error::UiError;
use crate::utils::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Durable per-browser storage for the one preference this page keeps.
pub trait PreferenceStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, UiError>;
    fn write_raw(&self, key: &str, value: &str) -> Result<(), UiError>;

    /// Stored theme, falling back to dark when unset, unreadable or garbage.
    fn load_theme(&self) -> Theme {
        match self.read_raw(config::THEME_STORAGE_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unknown stored theme {:?}", value);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                Theme::default()
            }
        }
    }

    fn save_theme(&self, theme: Theme) -> Result<(), UiError> {
        self.write_raw(config::THEME_STORAGE_KEY, theme.as_str())
    }
}

/// `window.localStorage`.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    fn storage(&self) -> Result<web_sys::Storage, UiError> {
        dom::window()?
            .local_storage()
            .map_err(|e| UiError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| UiError::Storage("localStorage is disabled".to_string()))
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn read_raw(&self, key: &str) -> Result<Option<String>, UiError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| UiError::Storage(format!("{:?}", e)))
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| UiError::Storage(format!("{:?}", e)))
    }
}

/// Reflects `theme` on the document. Dark is the stylesheet default, so only
/// light needs a marker class.
pub fn apply_theme(theme: Theme) {
    if let Err(e) = dom::set_body_class(config::LIGHT_THEME_CLASS, theme == Theme::Light) {
        log::warn!("Could not apply {} theme: {}", theme, e);
    }
}

/// Flips the theme and persists it. The returned theme is the one now in
/// effect, even if saving failed.
pub fn toggle_theme(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.save_theme(next) {
        log::error!("Failed to persist theme: {}", e);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryPreferences {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryPreferences {
        fn read_raw(&self, key: &str) -> Result<Option<String>, UiError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn write_raw(&self, key: &str, value: &str) -> Result<(), UiError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_preference_defaults_to_dark() {
        let store = MemoryPreferences::default();
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn invalid_preference_defaults_to_dark() {
        let store = MemoryPreferences::default();
        store.write_raw(config::THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn toggle_from_default_persists_light_for_next_load() {
        let store = MemoryPreferences::default();
        let initial = store.load_theme();

        let now = toggle_theme(&store, initial);

        assert_eq!(now, Theme::Light);
        assert_eq!(
            store.read_raw(config::THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );
        // a fresh load sees the saved value before any interaction
        assert_eq!(store.load_theme(), Theme::Light);
    }

    #[test]
    fn toggling_twice_returns_to_dark() {
        let store = MemoryPreferences::default();
        let theme = toggle_theme(&store, Theme::Dark);
        let theme = toggle_theme(&store, theme);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.load_theme(), Theme::Dark);
    }
}
