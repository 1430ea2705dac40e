//! Firmware image: wires the board peripherals into the controller and runs
//! the control loop forever.

#![no_std]
#![no_main]

use defmt::{
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use led_mode_controller::*;

esp_bootloader_esp_idf::esp_app_desc!();

fn now() -> time::Instant {
    time::from_millis(embassy_time::Instant::now().as_millis())
}

/// Fail-stop: without the OLED or PWM the board is of no use, so idle forever.
async fn halt(err: Error) -> ! {
    error!("Startup failed: {}", err);
    loop {
        Timer::after(Duration::from_millis(100)).await;
    }
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = led_mode_controller::init();
    let resources = split_resources!(peripherals);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let (leds, buzzer) = match pwm(resources.pwm) {
        Ok(outputs) => outputs,
        Err(err) => halt(err).await,
    };
    let display = match Oled::new(resources.display) {
        Ok(display) => display,
        Err(err) => halt(err).await,
    };
    let buttons: Buttons = resources.buttons.into();

    let mut controller = Controller::new(leds, buzzer, display);
    controller.start(now());
    info!("Control loop running");

    let period = Duration::from_millis(config::LOOP_PERIOD.to_millis());
    loop {
        controller.tick(now(), buttons.sample());
        Timer::after(period).await;
    }
}
