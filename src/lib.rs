//! # led-mode-controller
//!
//! Firmware logic for an ESP32 demo board with three LEDs, a buzzer, three
//! push-buttons and a 128×64 SSD1306 OLED:
//! - **Mode button**: cycles OFF → Alternate → All ON → PWM Fade → OFF
//! - **Action button**: short press toggles all LEDs, long press beeps
//! - **BOOT button**: resets to OFF
//! - **OLED**: shows a two-line status after every change
//!
//! The state machine ([`Controller`]) is hardware independent and runs on
//! the host in tests. Board support (pins, LEDC PWM, I²C display, GPIO
//! sampling) is behind the `hardware` feature.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = led_mode_controller::init();
//! let resources = led_mode_controller::split_resources!(peripherals);
//!
//! let (leds, buzzer) = led_mode_controller::pwm(resources.pwm)?;
//! let display = led_mode_controller::Oled::new(resources.display)?;
//! let buttons: led_mode_controller::Buttons = resources.buttons.into();
//!
//! let mut controller = Controller::new(leds, buzzer, display);
//! controller.start(now);
//! loop {
//!     controller.tick(now, buttons.sample());
//! }
//! ```

#![cfg_attr(not(test), no_std)]

/// StaticCell helper: moves a value into a `static` exactly once and returns
/// a `&'static mut` to it.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

pub mod action;
#[cfg(feature = "hardware")]
mod board;
pub mod buttons;
pub mod buzzer;
pub mod config;
mod controller;
pub mod display;
mod error;
pub mod leds;
pub mod lighting;
pub mod mode;
pub mod time;

pub use action::{
    PressClassifier,
    PressEvent,
};
#[cfg(feature = "hardware")]
pub use board::{
    ButtonResources,
    DisplayResources,
    PwmChannel,
    PwmResources,
    Resources,
    init,
    pwm,
};
#[cfg(feature = "hardware")]
pub use buttons::Buttons;
pub use buttons::{
    Debouncer,
    Edge,
    Inputs,
};
pub use buzzer::Buzzer;
pub use controller::{
    Controller,
    ManualOverride,
};
#[cfg(feature = "hardware")]
pub use display::Oled;
pub use display::{
    Status,
    StatusDisplay,
};
pub use error::Error;
pub use leds::{
    LED_COUNT,
    Leds,
};
pub use lighting::Renderer;
pub use mode::LightingMode;
