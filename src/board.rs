//! ESP32 DevKit v1 pin assignment and peripheral bring-up.

use defmt::info;
use esp_hal::{
    assign_resources,
    clock::CpuClock,
    gpio::DriveMode,
    ledc::{
        LSGlobalClkSource,
        Ledc,
        LowSpeed,
        channel::{
            self,
            ChannelIFace as _,
        },
        timer::{
            self,
            TimerIFace as _,
        },
    },
    time::Rate,
};

use crate::{
    Buzzer,
    Error,
    Leds,
    config::{
        BUZZER_TONE_HZ,
        LED_PWM_FREQUENCY_HZ,
    },
};

/// One LEDC low-speed output.
pub type PwmChannel = channel::Channel<'static, LowSpeed>;

type PwmTimer = timer::Timer<'static, LowSpeed>;

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        pwm: PwmResources<'d> {
            red: GPIO19,
            green: GPIO18,
            yellow: GPIO5,
            buzzer: GPIO27,
            ledc: LEDC,
        },
        buttons: ButtonResources<'d> {
            mode: GPIO13,
            action: GPIO12,
            boot: GPIO0,
        },
        display: DisplayResources<'d> {
            sda: GPIO21,
            scl: GPIO22,
            i2c: I2C0,
        }
    }
}

/// Initialise the chip and return the raw peripheral set.
///
/// Call this once at the top of `main`, then use `split_resources!` to break
/// the peripherals into the groups above.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

fn configure_timer(timer: &mut PwmTimer, frequency: Rate) -> Result<(), Error> {
    timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency,
        })
        .map_err(|_| Error::Pwm)
}

fn configure_channel(channel: &mut PwmChannel, timer: &'static PwmTimer) -> Result<(), Error> {
    channel
        .configure(channel::config::Config {
            timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .map_err(|_| Error::Pwm)
}

/// Set up the LEDC peripheral: timer 0 at the LED carrier frequency feeding
/// the three LED channels, timer 1 at the buzzer tone feeding the buzzer.
pub fn pwm(res: PwmResources<'static>) -> Result<(Leds<PwmChannel>, Buzzer<PwmChannel>), Error> {
    let ledc = crate::mk_static!(Ledc<'static>, Ledc::new(res.ledc));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    let ledc: &'static Ledc<'static> = ledc;

    let led_timer = crate::mk_static!(PwmTimer, ledc.timer::<LowSpeed>(timer::Number::Timer0));
    configure_timer(led_timer, Rate::from_hz(LED_PWM_FREQUENCY_HZ))?;
    let led_timer: &'static PwmTimer = led_timer;

    let tone_timer = crate::mk_static!(PwmTimer, ledc.timer::<LowSpeed>(timer::Number::Timer1));
    configure_timer(tone_timer, Rate::from_hz(BUZZER_TONE_HZ))?;
    let tone_timer: &'static PwmTimer = tone_timer;

    let mut red = ledc.channel(channel::Number::Channel0, res.red);
    let mut green = ledc.channel(channel::Number::Channel1, res.green);
    let mut yellow = ledc.channel(channel::Number::Channel2, res.yellow);
    let mut buzzer = ledc.channel(channel::Number::Channel3, res.buzzer);

    for led in [&mut red, &mut green, &mut yellow] {
        configure_channel(led, led_timer)?;
    }
    configure_channel(&mut buzzer, tone_timer)?;

    info!(
        "PWM ready: LEDs at {} Hz, buzzer at {} Hz",
        LED_PWM_FREQUENCY_HZ, BUZZER_TONE_HZ
    );
    Ok((Leds::new([red, green, yellow]), Buzzer::new(buzzer)))
}
