//! Button-Entprellung
//!
//! Jeder Wechsel des rohen Pegels startet den Entprell-Timer neu. Ein Pegel
//! gilt erst als stabil, wenn er länger als das Entprell-Intervall
//! unverändert anliegt.

use embassy_time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    last_reading: bool,
    stable: bool,
    last_change: Instant,
}

impl Debouncer {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_reading: false,
            stable: false,
            last_change: Instant::MIN,
        }
    }

    /// Entprellter Zustand (`true` = gedrückt)
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Verarbeitet eine Abtastung
    ///
    /// Gibt `true` genau einmal pro bestätigtem Druck zurück (Flanke
    /// des stabilen Zustands nach "gedrückt").
    pub fn update(&mut self, pressed: bool, now: Instant) -> bool {
        if pressed != self.last_reading {
            self.last_reading = pressed;
            self.last_change = now;
        }

        if now.saturating_duration_since(self.last_change) > self.interval
            && pressed != self.stable
        {
            self.stable = pressed;
            return pressed;
        }
        false
    }
}
