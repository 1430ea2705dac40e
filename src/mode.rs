//! Lighting modes cycled by the mode button.

use crate::display::Status;

/// Active lighting pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightingMode {
    /// All LEDs dark.
    #[default]
    Off,
    /// One LED at a time, with a dark gap between them.
    Alternate,
    /// All LEDs at full duty.
    AllOn,
    /// Phase-shifted sinusoidal breathing on all three LEDs.
    Fade,
}

impl LightingMode {
    /// Number of modes in the cycle.
    pub const COUNT: usize = 4;

    const CYCLE: [Self; Self::COUNT] = [Self::Off, Self::Alternate, Self::AllOn, Self::Fade];

    /// Position in the cycle.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The mode after this one, wrapping back to [`Off`](Self::Off).
    pub const fn next(self) -> Self {
        Self::CYCLE[(self.index() + 1) % Self::COUNT]
    }

    /// Text shown on the display when this mode is entered.
    pub const fn status(self) -> Status {
        let message = match self {
            Self::Off => "All OFF",
            Self::Alternate => "Alternate",
            Self::AllOn => "All ON",
            Self::Fade => "PWM Fade",
        };
        Status::new("Mode:", message)
    }
}
