//! Kooperative Scheduler-Schleife
//!
//! Ein Aufruf von [`Scheduler::run_once`] ist eine Iteration der
//! Firmware-Schleife: Pattern-Schritt, Button abfragen, serielle Bytes
//! verarbeiten, Idle-Timeout prüfen und zum Schluss die Farbe ausgeben.
//! Keine dieser Stufen blockiert. Die einzige Pause (nach einem
//! Idle-Fade-Schritt) wird als [`Iteration::hold`] an den Aufrufer
//! zurückgegeben, der sie asynchron abwartet.

use embassy_time::{Duration, Instant};
use rgb::RGB8;

use crate::config::Timing;
use crate::controller::Controller;
use crate::traits::{ButtonInput, RandomSource, RgbOutput, SerialSource};
use crate::types::{Command, Pattern};

/// Obergrenze der pro Iteration gelesenen Bytes
pub const MAX_BYTES_PER_ITERATION: usize = 16;

/// Kapazität der Event-Liste: jedes Kommando hat mindestens 2 Bytes,
/// dazu Button und Idle-Fade
pub const MAX_EVENTS: usize = MAX_BYTES_PER_ITERATION / 2 + 2;

/// Was in einer Iteration passiert ist (für Logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Vollständig dekodiertes und angewendetes Kommando
    Command(Command),
    /// Bestätigter Button-Druck mit dem neuen Pattern
    ButtonAdvanced(Pattern),
    /// Idle-Fade-Schritt mit der neuen Farbe
    IdleFade(RGB8),
}

/// Ergebnis einer Iteration
#[derive(Debug, Clone, Default)]
pub struct Iteration {
    pub events: heapless::Vec<Event, MAX_EVENTS>,
    /// Pause vor der nächsten Iteration (nur nach einem Idle-Fade-Schritt)
    pub hold: Option<Duration>,
    /// Farbe, die in dieser Iteration auf die Kanäle geschrieben wurde
    pub written: Option<RGB8>,
}

/// Besitzt den Controller und die Hardware
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben echte Hardware im Firmware-Code
/// und Mocks in den Host-Tests.
pub struct Scheduler<O, S, B, R>
where
    O: RgbOutput,
    S: SerialSource,
    B: ButtonInput,
    R: RandomSource,
{
    controller: Controller,
    output: O,
    serial: S,
    button: B,
    rng: R,
    last_written: Option<RGB8>,
}

impl<O, S, B, R> Scheduler<O, S, B, R>
where
    O: RgbOutput,
    S: SerialSource,
    B: ButtonInput,
    R: RandomSource,
{
    /// Erstellt den Scheduler und schaltet die Kanäle aus
    pub fn new(timing: Timing, now: Instant, mut output: O, serial: S, button: B, rng: R) -> Self {
        let controller = Controller::new(timing, now);
        output.write(controller.color());
        Self {
            last_written: Some(controller.color()),
            controller,
            output,
            serial,
            button,
            rng,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    /// Eine Iteration der Firmware-Schleife
    pub fn run_once(&mut self, now: Instant) -> Iteration {
        let mut iteration = Iteration::default();

        self.controller.step_pattern(now, &mut self.rng);

        let pressed = self.button.is_pressed();
        if let Some(pattern) = self.controller.poll_button(pressed, now, &mut self.rng) {
            push(&mut iteration, Event::ButtonAdvanced(pattern));
        }

        for _ in 0..MAX_BYTES_PER_ITERATION {
            let Some(byte) = self.serial.read_byte() else {
                break;
            };
            if let Some(command) = self.controller.receive_byte(byte, now) {
                push(&mut iteration, Event::Command(command));
            }
        }

        if let Some(hold) = self.controller.check_idle(now) {
            push(&mut iteration, Event::IdleFade(self.controller.color()));
            iteration.hold = Some(hold);
        }

        let color = self.controller.color();
        if self.last_written != Some(color) {
            self.output.write(color);
            self.last_written = Some(color);
            iteration.written = Some(color);
        }

        iteration
    }
}

fn push(iteration: &mut Iteration, event: Event) {
    // MAX_EVENTS deckt die Obergrenze pro Iteration ab
    let _ = iteration.events.push(event);
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Event {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Event::Command(command) => defmt::write!(fmt, "Command {}", command),
            Event::ButtonAdvanced(pattern) => {
                defmt::write!(fmt, "ButtonAdvanced({})", pattern)
            }
            Event::IdleFade(color) => {
                defmt::write!(
                    fmt,
                    "IdleFade {{ rgb: ({}, {}, {}) }}",
                    color.r,
                    color.g,
                    color.b
                )
            }
        }
    }
}
