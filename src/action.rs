//! Press-duration classifier for the action button.
//!
//! A hold of at least [`LONG_PRESS_THRESHOLD`] fires a long press while the
//! button is still down, exactly once per hold. Releasing earlier is a short
//! press. Releasing after a long press has fired does nothing.

use crate::buttons::Edge;
use crate::config::LONG_PRESS_THRESHOLD;
use crate::time::{
    Duration,
    Instant,
    elapsed,
};

/// Classified gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    Short,
    Long,
}

#[derive(Clone, Copy, Debug)]
pub struct PressClassifier {
    pressed_at: Option<Instant>,
    long_press_handled: bool,
    threshold: Duration,
}

impl Default for PressClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PressClassifier {
    pub const fn new() -> Self {
        Self {
            pressed_at: None,
            long_press_handled: false,
            threshold: LONG_PRESS_THRESHOLD,
        }
    }

    pub const fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub const fn long_press_handled(&self) -> bool {
        self.long_press_handled
    }

    /// Advance the classifier by one tick.
    ///
    /// `edge` is the debounced edge seen this tick, if any. The long press is
    /// only checked while the button is held, so a release that arrives past
    /// the threshold before any tick fired the long press produces nothing.
    pub fn update(&mut self, edge: Option<Edge>, now: Instant) -> Option<PressEvent> {
        if edge == Some(Edge::Pressed) && self.pressed_at.is_none() {
            self.pressed_at = Some(now);
            self.long_press_handled = false;
        }

        let pressed_at = self.pressed_at?;
        let held = elapsed(now, pressed_at);

        if edge == Some(Edge::Released) {
            self.pressed_at = None;
            if self.long_press_handled {
                return None;
            }
            return (held < self.threshold).then_some(PressEvent::Short);
        }

        if !self.long_press_handled && held >= self.threshold {
            self.long_press_handled = true;
            return Some(PressEvent::Long);
        }

        None
    }
}
