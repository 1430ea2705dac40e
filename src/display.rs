//! Two-line status display.
//!
//! Every mode change and button action is mirrored to the OLED as a small
//! header line and a larger message line. The layout is drawn with
//! `embedded-graphics`, so it works on any binary-colour [`DrawTarget`].

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{
            FONT_6X10,
            FONT_10X20,
        },
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{
        Baseline,
        Text,
    },
};

/// Text for one status screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    pub header: &'static str,
    pub message: &'static str,
}

impl Status {
    pub const fn new(header: &'static str, message: &'static str) -> Self {
        Self { header, message }
    }

    /// Shown once the hardware is up.
    pub const READY: Self = Self::new("System:", "Ready");
    /// Shown after the BOOT button forces everything off.
    pub const RESET: Self = Self::new("System:", "Reset (BOOT)");
    pub const LONG_PRESS: Self = Self::new("Action:", "Long Press");
    pub const SHORT_ON: Self = Self::new("Action:", "Short: ON");
    pub const SHORT_OFF: Self = Self::new("Action:", "Short: OFF");
}

/// Top edge of the message line.
pub const MESSAGE_Y: i32 = 20;

/// Anything that can put a [`Status`] in front of the user.
pub trait StatusDisplay {
    /// Replace whatever is shown with `status`.
    fn show(&mut self, status: &Status);
}

/// Clear `target` and draw `status`: header in 6x10 at the top-left, message
/// in 10x20 starting at [`MESSAGE_Y`].
pub fn draw_status<D>(target: &mut D, status: &Status) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let header_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    Text::with_baseline(status.header, Point::zero(), header_style, Baseline::Top).draw(target)?;

    let message_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    Text::with_baseline(
        status.message,
        Point::new(0, MESSAGE_Y),
        message_style,
        Baseline::Top,
    )
    .draw(target)?;

    Ok(())
}

#[cfg(feature = "hardware")]
pub use self::hardware::Oled;

#[cfg(feature = "hardware")]
mod hardware {
    use defmt::{
        error,
        info,
    };
    use esp_hal::{
        Blocking,
        i2c::master::{
            Config,
            I2c,
        },
        time::Rate,
    };
    use ssd1306::{
        I2CDisplayInterface,
        Ssd1306,
        mode::BufferedGraphicsMode,
        prelude::*,
    };

    use super::{
        Status,
        StatusDisplay,
        draw_status,
    };
    use crate::{
        Error,
        board::DisplayResources,
        config::{
            I2C_FREQUENCY_KHZ,
            OLED_I2C_ADDRESS,
        },
    };

    type Driver = Ssd1306<
        I2CInterface<I2c<'static, Blocking>>,
        DisplaySize128x64,
        BufferedGraphicsMode<DisplaySize128x64>,
    >;

    /// The board's 128×64 SSD1306 OLED on I2C0.
    pub struct Oled {
        driver: Driver,
    }

    impl Oled {
        /// Bring up the I²C bus and the panel.
        ///
        /// Fails if the bus cannot be configured or the panel does not
        /// acknowledge its init sequence.
        pub fn new(res: DisplayResources<'static>) -> Result<Self, Error> {
            let i2c = I2c::new(
                res.i2c,
                Config::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
            )
            .map_err(|_| Error::I2c)?
            .with_sda(res.sda)
            .with_scl(res.scl);

            let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_I2C_ADDRESS);
            let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
                .into_buffered_graphics_mode();
            driver.init().map_err(|_| Error::Display)?;
            driver.clear_buffer();
            driver.flush().map_err(|_| Error::Display)?;

            info!("OLED ready at {=u8:#x}", OLED_I2C_ADDRESS);
            Ok(Self { driver })
        }
    }

    impl StatusDisplay for Oled {
        fn show(&mut self, status: &Status) {
            if draw_status(&mut self.driver, status).is_err() {
                error!("OLED: failed to draw {}", status);
                return;
            }
            if self.driver.flush().is_err() {
                error!("OLED: flush failed");
            }
        }
    }
}
