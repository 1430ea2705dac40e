//! Push-button input with non-blocking debouncing.
//!
//! The board has three active-low buttons with pull-ups: mode, action and
//! the on-board BOOT button (used as reset). The control loop samples all of
//! them once per tick and feeds each level through a [`Debouncer`], which
//! turns raw levels into clean press/release edges without ever waiting for
//! the button to be released.

use crate::config::BUTTON_DEBOUNCE;
use crate::time::{
    Duration,
    Instant,
    elapsed,
};

/// A debounced level transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Button went down (falling GPIO edge).
    Pressed,
    /// Button came back up (rising GPIO edge).
    Released,
}

/// One sample of all three buttons; `true` means held down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    pub mode: bool,
    pub action: bool,
    pub reset: bool,
}

/// Edge detector for a single button.
///
/// Tracks the stable level and when it last changed. A raw level that differs
/// from the stable one is accepted only once the debounce window since the
/// previous accepted change has passed; anything earlier is treated as
/// contact chatter and dropped.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    pressed: bool,
    last_change: Option<Instant>,
    window: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub const fn new() -> Self {
        Self::with_window(BUTTON_DEBOUNCE)
    }

    pub const fn with_window(window: Duration) -> Self {
        Self {
            pressed: false,
            last_change: None,
            window,
        }
    }

    /// Debounced level.
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Feed one raw sample, returning an edge if the stable level changed.
    pub fn sample(&mut self, pressed: bool, now: Instant) -> Option<Edge> {
        if pressed == self.pressed {
            return None;
        }

        if let Some(last) = self.last_change {
            if elapsed(now, last) <= self.window {
                return None;
            }
        }

        self.pressed = pressed;
        self.last_change = Some(now);
        Some(if pressed { Edge::Pressed } else { Edge::Released })
    }
}

#[cfg(feature = "hardware")]
pub use self::hardware::Buttons;

#[cfg(feature = "hardware")]
mod hardware {
    use esp_hal::gpio::{
        Input,
        InputConfig,
        Pull,
    };

    use super::Inputs;
    use crate::board::ButtonResources;

    /// The three board buttons as pulled-up GPIO inputs.
    pub struct Buttons {
        mode: Input<'static>,
        action: Input<'static>,
        boot: Input<'static>,
    }

    impl From<ButtonResources<'static>> for Buttons {
        fn from(res: ButtonResources<'static>) -> Self {
            let pull_up = InputConfig::default().with_pull(Pull::Up);
            Self {
                mode: Input::new(res.mode, pull_up),
                action: Input::new(res.action, pull_up),
                boot: Input::new(res.boot, pull_up),
            }
        }
    }

    impl Buttons {
        /// Read all three buttons. Active low: a low pin is a held button.
        pub fn sample(&self) -> Inputs {
            Inputs {
                mode: self.mode.is_low(),
                action: self.action.is_low(),
                reset: self.boot.is_low(),
            }
        }
    }
}
