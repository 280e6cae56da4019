use crate::pointer::PointerPosition;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Text,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorEvent {
    Enter(CursorVariant),
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub size: f64,
    pub color: &'static str,
    pub blend_mode: &'static str,
    pub opacity: f64,
}

impl CursorVariant {
    pub fn apply(self, event: CursorEvent) -> Self {
        match event {
            CursorEvent::Enter(next) => next,
            CursorEvent::Leave => Self::Default,
        }
    }

    pub fn style(self) -> CursorStyle {
        match self {
            Self::Default => CursorStyle {
                size: 16.0,
                color: "var(--cursor-color)",
                blend_mode: "normal",
                opacity: 1.0,
            },
            Self::Text => CursorStyle {
                size: 150.0,
                color: "var(--cursor-text-color)",
                blend_mode: "difference",
                opacity: 1.0,
            },
            Self::Hidden => CursorStyle {
                size: 0.0,
                color: "transparent",
                blend_mode: "normal",
                opacity: 0.0,
            },
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Default => "cursor--default",
            Self::Text => "cursor--text",
            Self::Hidden => "cursor--hidden",
        }
    }
}

/// Inline style centering the follower on the pointer.
pub fn follower_style(variant: CursorVariant, position: PointerPosition) -> String {
    let style = variant.style();
    let half = style.size / 2.0;
    format!(
        "width: {size:.0}px; height: {size:.0}px; background: {color}; mix-blend-mode: {blend}; opacity: {opacity}; transform: translate3d({x:.2}px, {y:.2}px, 0);",
        size = style.size,
        color = style.color,
        blend = style.blend_mode,
        opacity = style.opacity,
        x = position.x - half,
        y = position.y - half,
    )
}
