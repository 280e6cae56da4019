#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod cursor;
mod error;
mod image;
mod loading;
mod log;
mod menu;
mod pointer;
mod profile;
mod reveal;
mod subscribers;
mod theme;
mod typewriter;

#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod hooks;
#[cfg(target_arch = "wasm32")]
mod sections;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use crate::config::SiteConfig;
    use crate::error::StorageError;
    use crate::loading::{LoadingGate, LoadingPhase};
    use crate::profile::Profile;
    use crate::theme::{MemoryStorage, Theme, ThemeStorage, ThemeStore, THEME_KEY};
    use crate::typewriter::{Typewriter, TypewriterTick};

    #[test]
    fn splash_then_tagline_then_theme_round_trip() {
        let config = SiteConfig::default();
        let profile = Profile::embedded().expect("embedded profile is valid");

        let mut gate = LoadingGate::new(config.loading_duration);
        assert!(!gate.advance(Duration::from_millis(1_499)));
        assert_eq!(gate.phase(), LoadingPhase::Splash);
        assert!(gate.advance(Duration::from_millis(1_500)));
        assert!(!gate.advance(Duration::from_millis(3_000)));

        let mut typewriter = Typewriter::new(&profile.tagline);
        let mut elapsed = Duration::ZERO;
        let mut shown = String::new();
        while let TypewriterTick::Reveal(visible) = typewriter.tick() {
            elapsed += config.typewriter_delay;
            shown = visible;
        }
        assert_eq!(shown, "Full Stack Developer | Game Dev Enthusiast | UI/UX Intern");
        assert_eq!(
            elapsed,
            config.typewriter_delay * profile.tagline.chars().count() as u32
        );

        let storage = Rc::new(MemoryStorage::default());
        let mut store = ThemeStore::open(Box::new(SharedStorage(Rc::clone(&storage))));
        assert_eq!(store.current(), Theme::Dark);

        store.toggle().expect("memory storage never fails");
        assert_eq!(storage.load(THEME_KEY), Ok(Some("light".to_string())));

        store.toggle().expect("memory storage never fails");
        assert_eq!(storage.load(THEME_KEY), Ok(Some("dark".to_string())));
    }

    struct SharedStorage(Rc<MemoryStorage>);

    impl ThemeStorage for SharedStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.load(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.save(key, value)
        }
    }
}
