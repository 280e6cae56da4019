use std::time::Duration;

const MAX_SCROLL_ATTEMPTS: u32 = 120;

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Experience", href: "#experience" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub fn target_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

/// A pending smooth scroll to an in-page anchor, kept until its element exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollIntent {
    pub target_id: String,
    pub attempts: u32,
}

impl ScrollIntent {
    pub fn for_href(href: &str) -> Option<Self> {
        let target_id = href.strip_prefix('#')?.trim();
        if target_id.is_empty() {
            return None;
        }
        Some(Self {
            target_id: target_id.to_string(),
            attempts: 0,
        })
    }

    /// Another frame to wait for the target, or `None` once attempts are exhausted.
    pub fn retry(self) -> Option<Self> {
        let attempts = self.attempts + 1;
        (attempts < MAX_SCROLL_ATTEMPTS).then_some(Self { attempts, ..self })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
    Select(String),
    Retry,
    Scrolled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub pending_scroll: Option<ScrollIntent>,
}

impl MenuState {
    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        !self.open
    }

    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => Self {
                open: !self.open,
                ..self
            },
            MenuAction::Close => Self {
                open: false,
                ..self
            },
            MenuAction::Select(href) => Self {
                open: false,
                pending_scroll: ScrollIntent::for_href(&href).or(self.pending_scroll),
            },
            MenuAction::Retry => Self {
                pending_scroll: self.pending_scroll.and_then(ScrollIntent::retry),
                ..self
            },
            MenuAction::Scrolled => Self {
                pending_scroll: None,
                ..self
            },
        }
    }
}

pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * (index as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_link_closes_overlay_and_records_scroll_intent() {
        let state = MenuState::default().apply(MenuAction::Toggle);
        assert!(state.open);

        let state = state.apply(MenuAction::Select("#projects".to_string()));
        assert!(state.is_closed());
        assert_eq!(
            state.pending_scroll.as_ref().map(|intent| intent.target_id.as_str()),
            Some("projects")
        );
    }

    #[test]
    fn intent_survives_until_scroll_is_performed() {
        let state = MenuState::default()
            .apply(MenuAction::Toggle)
            .apply(MenuAction::Select("#contact".to_string()))
            .apply(MenuAction::Retry)
            .apply(MenuAction::Retry);
        assert_eq!(state.pending_scroll.as_ref().map(|intent| intent.attempts), Some(2));

        let state = state.apply(MenuAction::Scrolled);
        assert_eq!(state.pending_scroll, None);
    }

    #[test]
    fn retries_are_bounded() {
        let mut intent = ScrollIntent::for_href("#about");
        let mut frames = 0;
        while let Some(next) = intent.and_then(ScrollIntent::retry) {
            frames += 1;
            intent = Some(next);
        }
        assert_eq!(frames, MAX_SCROLL_ATTEMPTS - 1);
    }

    #[test]
    fn non_anchor_hrefs_do_not_scroll() {
        assert_eq!(ScrollIntent::for_href("https://example.com"), None);
        assert_eq!(ScrollIntent::for_href("#"), None);
    }

    #[test]
    fn links_stagger_in_order() {
        let step = Duration::from_millis(100);
        let delays: Vec<Duration> = (0..NAV_LINKS.len()).map(|i| stagger_delay(i, step)).collect();
        assert_eq!(delays.first(), Some(&Duration::from_millis(100)));
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(NAV_LINKS[3].target_id(), "projects");
    }
}
