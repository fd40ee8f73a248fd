// Strip Task - Scheduler-Schleife über LEDC, UART1 und Button
use defmt::{debug, info};
use embassy_time::{Instant, Timer};
use esp_core::{ButtonInput, Event, RandomSource, RgbOutput, Scheduler, SerialSource};
use esp_hal::gpio::{DriveMode, Input, InputConfig, Pull};
use esp_hal::ledc::channel::{self as ledc_channel, ChannelIFace as _};
use esp_hal::ledc::timer::{self as ledc_timer, TimerIFace as _};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::rng::Rng;
use esp_hal::time::Rate;
use esp_hal::uart::{Config as UartConfig, Uart};

use crate::config::{LOOP_INTERVAL, PWM_FREQUENCY_KHZ, SERIAL_BAUD, timing};
use crate::StripScheduler;
use crate::hal::{GpioButton, HwRandom, PwmRgbOutput, UartSerial};

/// Peripherals, die der Strip-Task exklusiv besitzt
pub struct StripPeripherals {
    pub ledc: esp_hal::peripherals::LEDC<'static>,
    pub red: esp_hal::peripherals::GPIO4<'static>,
    pub green: esp_hal::peripherals::GPIO5<'static>,
    pub blue: esp_hal::peripherals::GPIO6<'static>,
    pub uart: esp_hal::peripherals::UART1<'static>,
    pub uart_tx: esp_hal::peripherals::GPIO22<'static>,
    pub uart_rx: esp_hal::peripherals::GPIO23<'static>,
    pub button: esp_hal::peripherals::GPIO9<'static>,
}

/// Strip Logic - Testbare Schleife ohne Hardware-Abhängigkeit
///
/// Ruft pro Durchlauf genau eine Scheduler-Iteration auf, loggt deren
/// Events und wartet danach asynchron:
/// - nach einem Idle-Fade-Schritt die vom Scheduler verlangte Pause
/// - sonst `LOOP_INTERVAL`
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben echte Hardware (LEDC, UART, GPIO, RNG)
/// oder Mocks.
pub async fn strip_logic<O, S, B, R>(mut scheduler: Scheduler<O, S, B, R>)
where
    O: RgbOutput,
    S: SerialSource,
    B: ButtonInput,
    R: RandomSource,
{
    info!(
        "Strip: loop started (pattern {}, idle timeout {} ms)",
        scheduler.controller().pattern(),
        timing().idle_timeout.as_millis()
    );

    loop {
        let iteration = scheduler.run_once(Instant::now());

        for event in &iteration.events {
            match event {
                // Farbströme (z.B. Audio-Visualizer) nur im Debug-Level
                Event::Command(esp_core::Command::SetColor(_)) | Event::IdleFade(_) => {
                    debug!("Strip: {}", event)
                }
                _ => info!("Strip: {}", event),
            }
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(iteration.hold.unwrap_or(LOOP_INTERVAL)).await;
    }
}

/// Strip Task - Embassy Task für die Strip-Steuerung
///
/// Initialisiert LEDC (3 Kanäle, 8 Bit), UART1, den Button-Eingang und
/// den Hardware-RNG und übergibt alles an `strip_logic()`.
#[embassy_executor::task]
pub async fn strip_task(peripherals: StripPeripherals) {
    // LEDC: ein LowSpeed-Timer für alle drei Farbkanäle
    let mut ledc = Ledc::new(peripherals.ledc);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let mut pwm_timer = ledc.timer::<LowSpeed>(ledc_timer::Number::Timer0);
    pwm_timer
        .configure(ledc_timer::config::Config {
            duty: ledc_timer::config::Duty::Duty8Bit,
            clock_source: ledc_timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(PWM_FREQUENCY_KHZ),
        })
        .expect("LEDC timer");

    let mut red = ledc.channel::<LowSpeed>(ledc_channel::Number::Channel0, peripherals.red);
    red.configure(ledc_channel::config::Config {
        timer: &pwm_timer,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    })
    .expect("LEDC red channel");

    let mut green = ledc.channel::<LowSpeed>(ledc_channel::Number::Channel1, peripherals.green);
    green
        .configure(ledc_channel::config::Config {
            timer: &pwm_timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .expect("LEDC green channel");

    let mut blue = ledc.channel::<LowSpeed>(ledc_channel::Number::Channel2, peripherals.blue);
    blue.configure(ledc_channel::config::Config {
        timer: &pwm_timer,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    })
    .expect("LEDC blue channel");

    // UART1: Bluetooth-Serial-Bridge
    let uart = Uart::new(
        peripherals.uart,
        UartConfig::default().with_baudrate(SERIAL_BAUD),
    )
    .expect("UART1 config")
    .with_tx(peripherals.uart_tx)
    .with_rx(peripherals.uart_rx);
    info!("Strip: UART1 ready at {} baud", SERIAL_BAUD);

    // Button: active-low gegen GND
    let button = Input::new(
        peripherals.button,
        InputConfig::default().with_pull(Pull::Up),
    );

    let scheduler: StripScheduler<'_> = Scheduler::new(
        timing(),
        Instant::now(),
        PwmRgbOutput::new(red, green, blue),
        UartSerial::new(uart),
        GpioButton::new(button),
        HwRandom::new(Rng::new()),
    );

    strip_logic(scheduler).await;
}
