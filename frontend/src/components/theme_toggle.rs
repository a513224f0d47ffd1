use log::{info, warn};
use yew::prelude::*;

use crate::dom;

pub const THEME_KEY: &str = "darkMode";
pub const DARK_CLASS: &str = "dark-mode";

/// Durable home of the dark-mode flag.
pub trait ThemeStore {
    fn load(&self) -> bool;
    fn save(&self, dark: bool);
}

/// `window.localStorage`, stored as the strings `"true"` / `"false"`.
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(THEME_KEY).ok())
            .flatten()
            .map_or(false, |value| value == "true")
    }

    fn save(&self, dark: bool) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        match storage {
            Some(storage) => {
                if let Err(e) = storage.set_item(THEME_KEY, if dark { "true" } else { "false" }) {
                    warn!("Could not persist theme: {:?}", e);
                }
            }
            None => warn!("localStorage unavailable, theme not persisted"),
        }
    }
}

/// Flips the flag, persists it and returns the new value.
pub fn toggle(store: &impl ThemeStore, dark: bool) -> bool {
    let next = !dark;
    store.save(next);
    next
}

/// Applies the persisted theme before the first render.
pub fn restore(store: &impl ThemeStore) -> bool {
    let dark = store.load();
    if dark {
        info!("Restoring dark mode");
        dom::set_root_class(DARK_CLASS, true);
    }
    dark
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub initial_dark: bool,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let initial_dark = props.initial_dark;
    let dark = use_state(move || initial_dark);

    let onclick = {
        let dark = dark.clone();
        Callback::from(move |_: MouseEvent| {
            let next = toggle(&LocalThemeStore, *dark);
            dom::set_root_class(DARK_CLASS, next);
            info!("Theme toggled, dark mode: {}", next);
            dark.set(next);
        })
    };

    html! {
        <button
            id="themeToggle"
            class={classes!("theme-toggle", (*dark).then(|| "active"))}
            aria-label="Toggle dark mode"
            aria-pressed={(*dark).to_string()}
            {onclick}
        >
            { if *dark { "☀️" } else { "🌙" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryThemeStore {
        value: RefCell<Option<String>>,
    }

    impl ThemeStore for MemoryThemeStore {
        fn load(&self) -> bool {
            self.value.borrow().as_deref() == Some("true")
        }

        fn save(&self, dark: bool) {
            *self.value.borrow_mut() = Some(dark.to_string());
        }
    }

    #[test]
    fn test_empty_store_is_light() {
        assert!(!MemoryThemeStore::default().load());
    }

    #[test]
    fn test_toggle_persists_new_value() {
        let store = MemoryThemeStore::default();
        assert!(toggle(&store, false));
        assert!(store.load());
        assert_eq!(store.value.borrow().as_deref(), Some("true"));
    }

    #[test]
    fn test_two_toggles_round_trip() {
        let store = MemoryThemeStore::default();
        store.save(true);
        let before = store.load();

        let once = toggle(&store, before);
        let twice = toggle(&store, once);

        assert_eq!(twice, before);
        assert_eq!(store.load(), before);
    }
}
