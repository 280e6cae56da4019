use crate::subscribers::{SubscriptionId, Subscribers};

pub const PREVIEW_WIDTH: f64 = 320.0;
pub const PREVIEW_HEIGHT: f64 = 204.0;
const PREVIEW_GUTTER: f64 = 14.0;
const PREVIEW_CURSOR_OFFSET_X: f64 = 18.0;
const PREVIEW_CURSOR_OFFSET_Y: f64 = 16.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Last raw pointer sample, republished to every subscriber.
#[derive(Default)]
pub struct PointerTracker {
    last: PointerPosition,
    subscribers: Subscribers<PointerPosition>,
}

impl PointerTracker {
    pub fn record(&mut self, x: f64, y: f64) {
        self.last = PointerPosition::new(x, y);
        self.subscribers.notify(&self.last);
    }

    #[cfg(test)]
    pub fn position(&self) -> PointerPosition {
        self.last
    }

    pub fn subscribe(&mut self, listener: impl Fn(&PointerPosition) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

pub fn clamp_preview_position(x: f64, y: f64, viewport: Viewport) -> PointerPosition {
    let min_x = PREVIEW_GUTTER;
    let min_y = PREVIEW_GUTTER;
    let max_x = (viewport.width - PREVIEW_WIDTH - PREVIEW_GUTTER).max(min_x);
    let max_y = (viewport.height - PREVIEW_HEIGHT - PREVIEW_GUTTER).max(min_y);

    PointerPosition::new(x.clamp(min_x, max_x), y.clamp(min_y, max_y))
}

pub fn pointer_preview_position(pointer: PointerPosition, viewport: Viewport) -> PointerPosition {
    clamp_preview_position(
        pointer.x + PREVIEW_CURSOR_OFFSET_X,
        pointer.y + PREVIEW_CURSOR_OFFSET_Y,
        viewport,
    )
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> Viewport {
    let Some(win) = web_sys::window() else {
        return Viewport::default();
    };
    let fallback = Viewport::default();

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(fallback.width);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(fallback.height);

    Viewport { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn records_exact_raw_sample() {
        let mut tracker = PointerTracker::default();
        tracker.record(120.0, 340.0);
        assert_eq!(tracker.position(), PointerPosition::new(120.0, 340.0));
    }

    #[test]
    fn subscribers_receive_each_sample_until_unsubscribed() {
        let mut tracker = PointerTracker::default();
        let last_x = Rc::new(Cell::new(0.0));

        let id = {
            let last_x = Rc::clone(&last_x);
            tracker.subscribe(move |position| last_x.set(position.x))
        };
        tracker.record(5.0, 6.0);
        assert_eq!(last_x.get(), 5.0);

        tracker.unsubscribe(id);
        tracker.record(9.0, 9.0);
        assert_eq!(last_x.get(), 5.0);
        assert_eq!(tracker.position(), PointerPosition::new(9.0, 9.0));
    }

    #[test]
    fn preview_follows_cursor_with_offset() {
        let position = pointer_preview_position(PointerPosition::new(100.0, 100.0), Viewport::default());
        assert_eq!(position, PointerPosition::new(118.0, 116.0));
    }

    #[test]
    fn preview_is_clamped_inside_viewport() {
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        let position = pointer_preview_position(PointerPosition::new(790.0, 590.0), viewport);
        assert_eq!(
            position,
            PointerPosition::new(800.0 - PREVIEW_WIDTH - 14.0, 600.0 - PREVIEW_HEIGHT - 14.0)
        );

        let position = clamp_preview_position(-50.0, -50.0, viewport);
        assert_eq!(position, PointerPosition::new(14.0, 14.0));
    }

    #[test]
    fn tiny_viewport_pins_preview_to_gutter() {
        let viewport = Viewport {
            width: 200.0,
            height: 100.0,
        };
        let position = clamp_preview_position(150.0, 80.0, viewport);
        assert_eq!(position, PointerPosition::new(14.0, 14.0));
    }
}
