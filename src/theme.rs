use crate::config::THEME_KEY;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }

    /// The root element carries the `light` class in light mode and nothing in dark mode.
    pub fn root_has_light_class(self) -> bool {
        matches!(self, Self::Light)
    }
}

/// Durable key-value storage holding the theme preference.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// The stored preference wins; otherwise the document's own class state decides.
pub fn resolve_theme(store: &impl PreferenceStore, document_default: Theme) -> Theme {
    store
        .read(THEME_KEY)
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or(document_default)
}

pub fn persist_theme(store: &mut impl PreferenceStore, theme: Theme) {
    store.write(THEME_KEY, theme.as_str());
}

pub fn toggle_theme(store: &mut impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    persist_theme(store, next);
    next
}

#[cfg(target_arch = "wasm32")]
pub use web::{apply_theme, apply_theme_with_transition, document_theme, WebStorage};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{PreferenceStore, Theme};
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{window, Storage};

    /// `localStorage`, or nothing when the browser denies access.
    pub struct WebStorage(Option<Storage>);

    impl WebStorage {
        pub fn local() -> Self {
            Self(window().and_then(|w| w.local_storage().ok().flatten()))
        }
    }

    impl PreferenceStore for WebStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.0.as_ref()?.get_item(key).ok().flatten()
        }

        fn write(&mut self, key: &str, value: &str) {
            if let Some(storage) = self.0.as_ref() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    pub fn document_theme() -> Theme {
        let is_light = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.class_list().contains("light"))
            .unwrap_or(false);

        if is_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn apply_theme(theme: Theme) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root
                .class_list()
                .toggle_with_force("light", theme.root_has_light_class());
        }
    }

    fn prefers_reduced_motion() -> bool {
        window()
            .and_then(|w| {
                w.match_media("(prefers-reduced-motion: reduce)")
                    .ok()
                    .flatten()
            })
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    pub fn apply_theme_with_transition(theme: Theme) {
        if prefers_reduced_motion() {
            apply_theme(theme);
            return;
        }

        let Some(document) = window().and_then(|w| w.document()) else {
            apply_theme(theme);
            return;
        };

        let document_js: JsValue = document.into();
        let Ok(start_view_transition) =
            Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
        else {
            apply_theme(theme);
            return;
        };

        let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
            apply_theme(theme);
            return;
        };

        let callback = Closure::once_into_js(move || {
            apply_theme(theme);
        });

        if start_view_transition.call1(&document_js, &callback).is_err() {
            apply_theme(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn write(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn absent_preference_uses_document_default() {
        let store = MemoryStore::default();

        assert_eq!(resolve_theme(&store, Theme::Dark), Theme::Dark);
        assert_eq!(resolve_theme(&store, Theme::Light), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let mut store = MemoryStore::default();
        store.write(THEME_KEY, "sepia");

        assert_eq!(resolve_theme(&store, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut store = MemoryStore::default();

        let once = toggle_theme(&mut store, Theme::Dark);
        let twice = toggle_theme(&mut store, once);

        assert_eq!(once, Theme::Light);
        assert_eq!(twice, Theme::Dark);
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggled_theme_survives_reload() {
        let mut store = MemoryStore::default();
        let current = resolve_theme(&store, Theme::Dark);
        let chosen = toggle_theme(&mut store, current);

        let reloaded = resolve_theme(&store, Theme::Dark);
        assert_eq!(reloaded, chosen);
        assert_eq!(reloaded, Theme::Light);
        assert!(reloaded.root_has_light_class());
    }

    #[test]
    fn icon_reflects_current_mode() {
        assert_eq!(Theme::Light.icon(), "☀️");
        assert_eq!(Theme::Dark.icon(), "🌙");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
