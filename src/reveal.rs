//! One-shot scroll-into-view reveal for page sections.

use std::time::Duration;

const INITIAL_OFFSET_PX: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

impl RevealState {
    /// Without viewport observation content starts visible rather than stuck hidden.
    pub fn initial(observation_supported: bool) -> Self {
        if observation_supported {
            Self::Pending
        } else {
            Self::Revealed
        }
    }

    /// An edge-adjacent intersection may report a zero ratio while still intersecting.
    pub fn observe(self, intersecting: bool, visible_ratio: f64, threshold: f64) -> Self {
        match self {
            Self::Revealed => Self::Revealed,
            Self::Pending if intersecting && visible_ratio >= threshold => Self::Revealed,
            Self::Pending => Self::Pending,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }

    pub fn style(self, duration: Duration) -> String {
        let (opacity, offset) = match self {
            Self::Pending => (0.0, INITIAL_OFFSET_PX),
            Self::Revealed => (1.0, 0.0),
        };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;",
            ms = duration.as_millis(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn reveals_once_threshold_is_crossed() {
        let state = RevealState::initial(true)
            .observe(true, 0.05, 0.2)
            .observe(true, 0.1, 0.2);
        assert_eq!(state, RevealState::Pending);

        let state = state.observe(true, 0.25, 0.2);
        assert!(state.is_revealed());
    }

    #[test]
    fn section_taller_than_viewport_reveals_with_default_threshold() {
        let threshold = SiteConfig::default().reveal_threshold;
        // 400px viewport over a 2400px section caps the visible ratio at 1/6.
        let max_ratio = 400.0 / 2400.0;
        assert!(RevealState::initial(true).observe(true, max_ratio, threshold).is_revealed());
        assert!(RevealState::initial(true).observe(true, 0.0, threshold).is_revealed());
    }

    #[test]
    fn nothing_visible_keeps_section_pending() {
        let threshold = SiteConfig::default().reveal_threshold;
        assert_eq!(RevealState::Pending.observe(false, 0.0, threshold), RevealState::Pending);
    }

    #[test]
    fn never_hides_again_after_reveal() {
        let state = RevealState::Pending
            .observe(true, 1.0, 0.2)
            .observe(false, 0.0, 0.2);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn unsupported_observation_starts_visible() {
        assert_eq!(RevealState::initial(false), RevealState::Revealed);
    }

    #[test]
    fn pending_style_is_offset_and_transparent() {
        let style = RevealState::Pending.style(Duration::from_millis(600));
        assert!(style.starts_with("opacity: 0; transform: translateY(40px)"));
        assert!(style.contains("600ms"));

        let style = RevealState::Revealed.style(Duration::from_millis(600));
        assert!(style.starts_with("opacity: 1; transform: translateY(0px)"));
    }
}
