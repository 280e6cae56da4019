use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;
use crate::subscribers::{SubscriptionId, Subscribers};

pub const THEME_KEY: &str = "theme";
pub const DEFAULT_THEME: Theme = Theme::Dark;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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

    pub fn parse(value: &str) -> Option<Self> {
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

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "fa-solid fa-moon",
            Self::Dark => "fa-solid fa-sun",
        }
    }
}

pub trait ThemeStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub theme: Theme,
    pub initial: bool,
}

pub struct ThemeStore {
    storage: Box<dyn ThemeStorage>,
    current: Theme,
    subscribers: Subscribers<ThemeChange>,
}

impl ThemeStore {
    pub fn open(storage: Box<dyn ThemeStorage>) -> Self {
        let mut store = Self {
            storage,
            current: DEFAULT_THEME,
            subscribers: Subscribers::default(),
        };
        store.current = store.read();
        store
    }

    /// Persisted preference, or the default when nothing usable is stored.
    pub fn read(&self) -> Theme {
        self.try_read().ok().flatten().unwrap_or(DEFAULT_THEME)
    }

    pub fn try_read(&self) -> Result<Option<Theme>, StorageError> {
        read_theme(self.storage.as_ref())
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Updates the in-memory value and notifies subscribers even when persisting fails.
    pub fn write(&mut self, theme: Theme) -> Result<Theme, StorageError> {
        self.current = theme;
        let persisted = self.storage.save(THEME_KEY, theme.as_str());
        self.subscribers.notify(&ThemeChange {
            theme,
            initial: false,
        });
        persisted.map(|()| theme)
    }

    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.write(self.current.toggled())
    }

    /// The listener is invoked right away with the current value.
    pub fn subscribe(&mut self, listener: impl Fn(&ThemeChange) + 'static) -> SubscriptionId {
        listener(&ThemeChange {
            theme: self.current,
            initial: true,
        });
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

fn read_theme(storage: &dyn ThemeStorage) -> Result<Option<Theme>, StorageError> {
    Ok(storage
        .load(THEME_KEY)?
        .and_then(|value| Theme::parse(&value)))
}

#[cfg(target_arch = "wasm32")]
pub use browser::{apply_theme, apply_theme_with_transition, browser_storage};

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{window, Storage};

    use super::{MemoryStorage, Theme, ThemeStorage};
    use crate::error::StorageError;

    struct LocalStorage(Storage);

    impl ThemeStorage for LocalStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key).map_err(|_| StorageError::Read {
                key: key.to_string(),
            })
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set_item(key, value).map_err(|_| StorageError::Write {
                key: key.to_string(),
            })
        }
    }

    /// `localStorage` when the browser allows it, otherwise an in-memory map.
    pub fn browser_storage() -> Result<Box<dyn ThemeStorage>, (Box<dyn ThemeStorage>, StorageError)> {
        match window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => Ok(Box::new(LocalStorage(storage))),
            None => Err((Box::new(MemoryStorage::default()), StorageError::Unavailable)),
        }
    }

    pub fn apply_theme(theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let _ = root.set_attribute("data-theme", theme.as_str());
        let _ = root
            .class_list()
            .toggle_with_force("dark", matches!(theme, Theme::Dark));
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

        let callback = Closure::once_into_js(move || apply_theme(theme));

        if start_view_transition.call1(&document_js, &callback).is_err() {
            apply_theme(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
            })
        }

        fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
            })
        }
    }

    fn seeded(value: &str) -> Box<dyn ThemeStorage> {
        let storage = MemoryStorage::default();
        storage.save(THEME_KEY, value).expect("memory save");
        Box::new(storage)
    }

    #[test]
    fn empty_storage_reads_default_dark() {
        let store = ThemeStore::open(Box::new(MemoryStorage::default()));
        assert_eq!(store.read(), Theme::Dark);
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn stored_preference_is_restored() {
        let store = ThemeStore::open(seeded("light"));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_reads_as_default() {
        let store = ThemeStore::open(seeded("sepia"));
        assert_eq!(store.read(), Theme::Dark);
        assert_eq!(store.try_read(), Ok(None));
    }

    #[test]
    fn double_toggle_restores_original_value() {
        let mut store = ThemeStore::open(Box::new(MemoryStorage::default()));
        assert_eq!(store.toggle(), Ok(Theme::Light));
        assert_eq!(store.read(), Theme::Light);
        assert_eq!(store.toggle(), Ok(Theme::Dark));
        assert_eq!(store.read(), Theme::Dark);
    }

    #[test]
    fn persisted_value_tracks_every_toggle() {
        let mut store = ThemeStore::open(Box::new(MemoryStorage::default()));
        for _ in 0..7 {
            store.toggle().expect("memory storage never fails");
            assert_eq!(store.read(), store.current());
        }
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn unreadable_storage_falls_back_to_default() {
        let mut store = ThemeStore::open(Box::new(BrokenStorage));
        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(store.read(), Theme::Dark);

        let result = store.toggle();
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn subscribers_see_initial_value_then_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::open(Box::new(MemoryStorage::default()));

        let id = {
            let seen = Rc::clone(&seen);
            store.subscribe(move |change| seen.borrow_mut().push(*change))
        };
        store.toggle().expect("memory storage never fails");
        assert!(store.unsubscribe(id));
        store.toggle().expect("memory storage never fails");

        assert_eq!(
            *seen.borrow(),
            vec![
                ThemeChange { theme: Theme::Dark, initial: true },
                ThemeChange { theme: Theme::Light, initial: false },
            ]
        );
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
