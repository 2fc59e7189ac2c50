//! Press Gesture Utilities
//!
//! Distinguishes short taps from long-presses on mouse and touch input.
//! Uses a movement threshold to discard presses that turn into drags.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Tuning parameters for press detection
#[derive(Clone, Copy, Debug)]
pub struct PressConfig {
    /// How long a press must be held before it counts as a long-press
    pub hold_ms: u32,
    /// Movement beyond this many pixels discards the gesture
    pub tolerance_px: i32,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            hold_ms: 800,
            tolerance_px: 5,
        }
    }
}

/// Press phases. A press is either not happening, in flight, or already
/// resolved as a long-press (waiting for the pointer to lift).
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Pressing { start_x: i32, start_y: i32 },
    Fired,
}

/// Press state machine, independent of the event source.
///
/// Callers feed normalized positions from mouse or touch events and a timer
/// they run themselves. `begin` hands out a token so a stale timer callback
/// from an earlier press can never fire into a later one.
#[derive(Debug)]
pub struct PressTracker {
    config: PressConfig,
    phase: Phase,
    token: u64,
}

impl PressTracker {
    pub fn new(config: PressConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            token: 0,
        }
    }

    pub fn config(&self) -> PressConfig {
        self.config
    }

    /// Start tracking a press at the given position. Returns the token the
    /// timer callback must present to `timer_fired`.
    pub fn begin(&mut self, x: i32, y: i32) -> u64 {
        self.token += 1;
        self.phase = Phase::Pressing {
            start_x: x,
            start_y: y,
        };
        self.token
    }

    /// Feed a pointer movement. Returns true if the movement exceeded the
    /// tolerance and the gesture was discarded.
    pub fn movement(&mut self, x: i32, y: i32) -> bool {
        if let Phase::Pressing { start_x, start_y } = self.phase {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx > self.config.tolerance_px || dy > self.config.tolerance_px {
                self.phase = Phase::Idle;
                return true;
            }
        }
        false
    }

    /// Pointer lifted. Returns the start position if this resolved as a tap
    /// (released before the hold timer fired).
    pub fn release(&mut self) -> Option<(i32, i32)> {
        match self.phase {
            Phase::Pressing { start_x, start_y } => {
                self.phase = Phase::Idle;
                Some((start_x, start_y))
            }
            Phase::Fired => {
                self.phase = Phase::Idle;
                None
            }
            Phase::Idle => None,
        }
    }

    /// Hold timer elapsed. Returns the start position if the press is still
    /// in flight and the token matches the current press.
    pub fn timer_fired(&mut self, token: u64) -> Option<(i32, i32)> {
        if token != self.token {
            return None;
        }
        if let Phase::Pressing { start_x, start_y } = self.phase {
            self.phase = Phase::Fired;
            Some((start_x, start_y))
        } else {
            None
        }
    }

    pub fn is_pressing(&self) -> bool {
        matches!(self.phase, Phase::Pressing { .. })
    }
}

/// Shared handle used by the DOM glue closures
struct PressState {
    tracker: RefCell<PressTracker>,
    timer: RefCell<Option<Timeout>>,
    suppressed: Cell<bool>,
}

impl PressState {
    fn clear_timer(&self) {
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
    }
}

/// Extract a client position from a mouse or touch event.
fn event_position(ev: &web_sys::Event) -> Option<(i32, i32)> {
    if let Some(mouse) = ev.dyn_ref::<web_sys::MouseEvent>() {
        return Some((mouse.client_x(), mouse.client_y()));
    }
    if let Some(touch_ev) = ev.dyn_ref::<web_sys::TouchEvent>() {
        let touch = touch_ev.touches().get(0)?;
        return Some((touch.client_x(), touch.client_y()));
    }
    None
}

/// Bind press handlers on a DOM target, normalizing mouse and touch input.
///
/// `accept` filters the press-down event (e.g. to ignore presses on buttons
/// layered above the surface). `on_tap` fires on release before the hold
/// duration; `on_long_press` fires once when the hold duration elapses.
/// Both callbacks receive the client position recorded at press-down.
pub fn bind_press_handlers<A, T, L>(
    target: &web_sys::EventTarget,
    config: PressConfig,
    accept: A,
    on_tap: T,
    on_long_press: L,
) where
    A: Fn(&web_sys::Event) -> bool + 'static,
    T: Fn(i32, i32) + 'static,
    L: Fn(i32, i32) + Clone + 'static,
{
    let state = Rc::new(PressState {
        tracker: RefCell::new(PressTracker::new(config)),
        timer: RefCell::new(None),
        suppressed: Cell::new(false),
    });

    let on_down = {
        let state = state.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            if !accept(&ev) {
                state.suppressed.set(true);
                return;
            }
            state.suppressed.set(false);
            let Some((x, y)) = event_position(&ev) else {
                return;
            };
            state.clear_timer();
            let token = state.tracker.borrow_mut().begin(x, y);
            let fire_state = state.clone();
            let fire = on_long_press.clone();
            let timer = Timeout::new(config.hold_ms, move || {
                if let Some((sx, sy)) = fire_state.tracker.borrow_mut().timer_fired(token) {
                    fire(sx, sy);
                }
            });
            *state.timer.borrow_mut() = Some(timer);
        })
    };

    let on_move = {
        let state = state.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some((x, y)) = event_position(&ev) else {
                return;
            };
            if state.tracker.borrow_mut().movement(x, y) {
                state.clear_timer();
            }
        })
    };

    let on_up = {
        let state = state.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            state.clear_timer();
            if state.suppressed.replace(false) {
                return;
            }
            if let Some((x, y)) = state.tracker.borrow_mut().release() {
                on_tap(x, y);
            }
        })
    };

    for event in ["mousedown", "touchstart"] {
        let _ = target.add_event_listener_with_callback(event, on_down.as_ref().unchecked_ref());
    }
    for event in ["mousemove", "touchmove"] {
        let _ = target.add_event_listener_with_callback(event, on_move.as_ref().unchecked_ref());
    }
    for event in ["mouseup", "touchend"] {
        let _ = target.add_event_listener_with_callback(event, on_up.as_ref().unchecked_ref());
    }

    // Listeners live for the lifetime of the page
    on_down.forget();
    on_move.forget();
    on_up.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PressTracker {
        PressTracker::new(PressConfig::default())
    }

    #[test]
    fn release_before_timer_is_a_tap() {
        let mut t = tracker();
        t.begin(100, 200);
        assert_eq!(t.release(), Some((100, 200)));
        assert!(!t.is_pressing());
    }

    #[test]
    fn held_press_fires_long_press_exactly_once() {
        let mut t = tracker();
        let token = t.begin(10, 20);
        assert_eq!(t.timer_fired(token), Some((10, 20)));
        // A second timer fire or the trailing release must not produce anything
        assert_eq!(t.timer_fired(token), None);
        assert_eq!(t.release(), None);
    }

    #[test]
    fn movement_beyond_tolerance_discards_the_gesture() {
        let mut t = tracker();
        let token = t.begin(50, 50);
        assert!(!t.movement(53, 52));
        assert!(t.movement(60, 50));
        // Neither tap nor long-press after cancellation
        assert_eq!(t.timer_fired(token), None);
        assert_eq!(t.release(), None);
    }

    #[test]
    fn movement_within_tolerance_keeps_the_press_alive() {
        let mut t = tracker();
        let token = t.begin(50, 50);
        assert!(!t.movement(54, 54));
        assert_eq!(t.timer_fired(token), Some((50, 50)));
    }

    #[test]
    fn stale_timer_token_never_fires() {
        let mut t = tracker();
        let old = t.begin(1, 1);
        t.release();
        let _new = t.begin(2, 2);
        assert_eq!(t.timer_fired(old), None);
        assert!(t.is_pressing());
    }

    #[test]
    fn custom_tolerance_is_honored() {
        let mut t = PressTracker::new(PressConfig {
            hold_ms: 300,
            tolerance_px: 20,
        });
        t.begin(0, 0);
        assert!(!t.movement(20, 20));
        assert!(t.movement(21, 0));
    }
}
