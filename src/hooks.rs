use std::rc::Rc;
use std::time::Duration;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::{Interval, Timeout};
use js_sys::{Array, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::cursor::{CursorEvent, CursorVariant};
use crate::loading::{LoadingGate, LoadingPhase};
use crate::log::{log_event, LogLevel};
use crate::menu::{MenuAction, MenuState};
use crate::pointer::{PointerPosition, PointerTracker};
use crate::reveal::RevealState;
use crate::theme::{
    apply_theme, apply_theme_with_transition, browser_storage, Theme, ThemeStore, DEFAULT_THEME,
};
use crate::typewriter::{Typewriter, TypewriterTick};

fn millis_u32(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[hook]
pub fn use_typewriter(message: AttrValue, delay: Duration) -> String {
    let text = use_state_eq(String::new);
    let finished = use_state_eq(|| false);
    let interval = use_mut_ref(|| None::<Interval>);

    {
        let text = text.clone();
        let finished = finished.clone();
        let interval = interval.clone();
        use_effect_with((message, delay), move |(message, delay)| {
            let mut typewriter = Typewriter::new(message);
            // A new message restarts from blank so the `finished` effect fires again.
            text.set(typewriter.visible());
            finished.set(typewriter.is_finished());
            *interval.borrow_mut() = Some(Interval::new(millis_u32(*delay), move || {
                match typewriter.tick() {
                    TypewriterTick::Reveal(visible) => text.set(visible),
                    TypewriterTick::Finished => finished.set(true),
                }
            }));

            move || {
                interval.borrow_mut().take();
            }
        });
    }

    // The interval cannot drop itself from inside its own callback.
    use_effect_with(*finished, move |finished| {
        if *finished {
            interval.borrow_mut().take();
        }
        || ()
    });

    (*text).clone()
}

#[hook]
pub fn use_mouse_position() -> PointerPosition {
    let position = use_state(PointerPosition::default);
    let tracker = use_mut_ref(PointerTracker::default);

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let subscription = tracker
                .borrow_mut()
                .subscribe(move |sample| position.set(*sample));

            let listener = window().map(|win| {
                let tracker = Rc::clone(&tracker);
                EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        tracker
                            .borrow_mut()
                            .record(f64::from(event.client_x()), f64::from(event.client_y()));
                    }
                })
            });

            move || {
                drop(listener);
                tracker.borrow_mut().unsubscribe(subscription);
            }
        });
    }

    *position
}

pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme(config: Rc<SiteConfig>) -> ThemeHandle {
    let theme = use_state(|| DEFAULT_THEME);
    let store = {
        let config = Rc::clone(&config);
        use_mut_ref(move || {
            let storage = browser_storage().unwrap_or_else(|(fallback, error)| {
                log_event(
                    config.log_level,
                    LogLevel::Info,
                    "theme_storage_unavailable",
                    json!({ "error": error.to_string() }),
                );
                fallback
            });
            ThemeStore::open(storage)
        })
    };

    {
        let theme = theme.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            let subscription = store.borrow_mut().subscribe(move |change| {
                if change.initial {
                    apply_theme(change.theme);
                } else {
                    apply_theme_with_transition(change.theme);
                }
                theme.set(change.theme);
            });

            move || {
                store.borrow_mut().unsubscribe(subscription);
            }
        });
    }

    let toggle = use_callback((), move |(), _| {
        let result = store.borrow_mut().toggle();
        match result {
            Ok(next) => log_event(
                config.log_level,
                LogLevel::Info,
                "theme_changed",
                json!({ "theme": next.as_str(), "persisted": true }),
            ),
            Err(error) => log_event(
                config.log_level,
                LogLevel::Info,
                "theme_changed",
                json!({ "persisted": false, "error": error.to_string() }),
            ),
        }
    });

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}

#[hook]
pub fn use_loading_gate(config: Rc<SiteConfig>) -> LoadingPhase {
    let gate = use_state(|| LoadingGate::new(config.loading_duration));

    {
        let gate = gate.clone();
        use_effect_with((), move |_| {
            let duration = gate.duration();
            let timeout = Timeout::new(millis_u32(duration), move || {
                let mut next = *gate;
                if next.advance(duration) {
                    log_event(
                        config.log_level,
                        LogLevel::Info,
                        "loading_complete",
                        json!({ "elapsed_ms": duration.as_millis() as u64 }),
                    );
                    gate.set(next);
                }
            });

            move || drop(timeout)
        });
    }

    gate.phase()
}

impl Reducible for CursorVariant {
    type Action = CursorEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[hook]
pub fn use_cursor_variant() -> UseReducerHandle<CursorVariant> {
    use_reducer(CursorVariant::default)
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

/// Menu overlay state; a recorded scroll intent is retried each frame until its target exists.
#[hook]
pub fn use_menu(config: Rc<SiteConfig>) -> UseReducerHandle<MenuState> {
    let menu = use_reducer(MenuState::default);
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let dispatcher = menu.dispatcher();
        let pending = menu.pending_scroll.clone();
        use_effect_with(pending, move |pending| {
            if let Some(intent) = pending {
                if scroll_to_element(&intent.target_id) {
                    log_event(
                        config.log_level,
                        LogLevel::Info,
                        "menu_navigate",
                        json!({ "target": intent.target_id, "attempts": intent.attempts }),
                    );
                    dispatcher.dispatch(MenuAction::Scrolled);
                } else {
                    log_event(
                        config.log_level,
                        LogLevel::Debug,
                        "scroll_target_pending",
                        json!({ "target": intent.target_id, "attempts": intent.attempts }),
                    );
                    *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                        dispatcher.dispatch(MenuAction::Retry);
                    }));
                }
            }

            move || {
                frame.borrow_mut().take();
            }
        });
    }

    menu
}

fn scroll_to_element(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observation_supported() -> bool {
    window()
        .map(|win| {
            let win: JsValue = win.into();
            Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
        .unwrap_or(false)
}

fn observe_once(
    element: &Element,
    threshold: f64,
    state: UseStateHandle<RevealState>,
) -> Option<RevealObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let next = RevealState::Pending.observe(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                );
                if next.is_revealed() {
                    state.set(RevealState::Revealed);
                    observer.disconnect();
                    return;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> RevealState {
    let state = use_state(|| RevealState::initial(observation_supported()));

    {
        let state = state.clone();
        use_effect_with(node, move |node| {
            let mut guard = None;
            if !(*state).is_revealed() {
                guard = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, threshold, state.clone()));
                if guard.is_none() {
                    state.set(RevealState::Revealed);
                }
            }

            move || drop(guard)
        });
    }

    *state
}

#[hook]
pub fn use_document_title(title: String) {
    use_effect_with(title, |title| {
        if let Some(document) = window().and_then(|w| w.document()) {
            document.set_title(title);
        }
        || ()
    });
}
