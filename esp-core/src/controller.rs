//! Gemeinsamer Zustand der Firmware und die Operationen darauf
//!
//! Der [`Controller`] ist der einzige Kontext, den die Scheduler-Schleife
//! herumreicht: Farbe, Pattern, Timeout-Flag, Zeitstempel der letzten
//! Aktivität sowie Decoder, Pattern-Engine, Debouncer und Idle-Fader.
//! Es gibt keine globalen Variablen und keinen zweiten Schreiber.

use embassy_time::{Duration, Instant};
use rgb::RGB8;

use crate::config::Timing;
use crate::debounce::Debouncer;
use crate::fader::IdleFader;
use crate::patterns::PatternEngine;
use crate::protocol::{Decoder, DecoderState};
use crate::traits::RandomSource;
use crate::types::{Command, Pattern};

/// Momentaufnahme des geteilten Zustands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripState {
    /// Aktuelle Ausgabe, einzige Quelle der Wahrheit für die PWM-Kanäle
    pub color: RGB8,
    pub pattern: Pattern,
    pub timeout_enabled: bool,
    /// Letztes vom Decoder verbrauchte Byte
    pub last_activity: Instant,
}

#[cfg(feature = "serde")]
impl serde::Serialize for StripState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("StripState", 4)?;
        state.serialize_field("color", &self.color)?;
        state.serialize_field("pattern", &self.pattern)?;
        state.serialize_field("timeout_enabled", &self.timeout_enabled)?;
        state.serialize_field("last_activity_ms", &self.last_activity.as_millis())?;
        state.end()
    }
}

pub struct Controller {
    state: StripState,
    decoder: Decoder,
    engine: PatternEngine,
    button: Debouncer,
    fader: IdleFader,
}

impl Controller {
    /// Startzustand: Farbe aus, Pattern `Off`, Timeout deaktiviert
    pub fn new(timing: Timing, now: Instant) -> Self {
        Self {
            state: StripState {
                color: RGB8::default(),
                pattern: Pattern::Off,
                timeout_enabled: false,
                last_activity: now,
            },
            decoder: Decoder::new(),
            engine: PatternEngine::new(&timing),
            button: Debouncer::new(timing.debounce),
            fader: IdleFader::new(
                timing.idle_timeout,
                timing.fade_amount,
                timing.fade_step_delay,
            ),
        }
    }

    pub fn state(&self) -> &StripState {
        &self.state
    }

    pub fn color(&self) -> RGB8 {
        self.state.color
    }

    pub fn pattern(&self) -> Pattern {
        self.state.pattern
    }

    pub fn timeout_enabled(&self) -> bool {
        self.state.timeout_enabled
    }

    pub fn last_activity(&self) -> Instant {
        self.state.last_activity
    }

    pub fn decoder_state(&self) -> DecoderState {
        self.decoder.state()
    }

    pub fn engine(&self) -> &PatternEngine {
        &self.engine
    }

    /// Verarbeitet ein empfangenes Byte
    ///
    /// Jedes verbrauchte Byte zählt als Aktivität, auch ein verworfenes.
    /// Ein vollständiges Kommando wird sofort angewendet und zurückgegeben.
    pub fn receive_byte(&mut self, byte: u8, now: Instant) -> Option<Command> {
        self.state.last_activity = now;
        let command = self.decoder.feed(byte)?;
        self.apply(command);
        Some(command)
    }

    /// Wendet ein Kommando auf den Zustand an
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetTimeout(enabled) => self.state.timeout_enabled = enabled,
            Command::SelectPattern(value) => self.select_pattern(value),
            Command::SetColor(color) => {
                self.state.color = color;
                // Pattern-Engine darf die manuelle Farbe nicht überschreiben
                self.state.pattern = Pattern::Manual;
            }
        }
    }

    /// Pattern-Auswahl per Wire-Wert
    ///
    /// 0, 6 und unbekannte Werte schalten aus und löschen die Farbe.
    pub fn select_pattern(&mut self, value: u8) {
        let pattern = Pattern::from_wire(value);
        if pattern == Pattern::Off {
            self.state.color = RGB8::default();
        }
        self.state.pattern = pattern;
    }

    /// `true` solange der Idle-Timeout aktiv ist und abgelaufen ist
    pub fn is_idle(&self, now: Instant) -> bool {
        self.state.timeout_enabled && self.fader.is_idle(self.state.last_activity, now)
    }

    /// Schritt des aktiven Patterns; `true` wenn sich die Farbe geändert hat
    ///
    /// Im Idle gehört die Farbe dem Fader, das Pattern pausiert bis zum
    /// nächsten empfangenen Byte.
    pub fn step_pattern(&mut self, now: Instant, rng: &mut dyn RandomSource) -> bool {
        if self.is_idle(now) {
            return false;
        }
        self.engine
            .step(self.state.pattern, now, &mut self.state.color, rng)
    }

    /// Tastet den Button ab
    ///
    /// Bei einem bestätigten Druck wird das nächste Pattern gewählt und
    /// sofort einmal ausgeführt. Die Farbe wird dabei nicht direkt
    /// angefasst und die Aktivitätszeit nicht erneuert.
    pub fn poll_button(
        &mut self,
        pressed: bool,
        now: Instant,
        rng: &mut dyn RandomSource,
    ) -> Option<Pattern> {
        if !self.button.update(pressed, now) {
            return None;
        }
        let next = self.state.pattern.next();
        self.state.pattern = next;
        self.step_pattern(now, rng);
        Some(next)
    }

    /// Prüft den Idle-Timeout und blendet ggf. einen Schritt aus
    ///
    /// Gibt die Pause zurück, die die Schleife danach einlegen soll.
    pub fn check_idle(&mut self, now: Instant) -> Option<Duration> {
        if !self.is_idle(now) {
            return None;
        }
        self.fader.fade(&mut self.state.color)
    }
}
