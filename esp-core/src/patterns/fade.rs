use embassy_time::{Duration, Instant};
use rgb::RGB8;

use super::{Effect, Ticker, Triangle};
use crate::traits::RandomSource;

/// Blendet einen Kanal nach dem anderen auf und ab (R, G, B)
///
/// Überschreibt bei jedem Schritt die komplette Farbe, auch eine vorher
/// manuell gesetzte: nur der aktuelle Kanal trägt den Rampenwert.
#[derive(Debug, Clone)]
pub struct Fade {
    ticker: Ticker,
    ramp: Triangle,
    channel: usize,
}

impl Fade {
    pub const fn new(amount: u8, step_delay: Duration) -> Self {
        Self {
            ticker: Ticker::new(step_delay),
            ramp: Triangle::new(amount),
            channel: 0,
        }
    }

    /// Index des gerade laufenden Kanals (0 = R, 1 = G, 2 = B)
    pub fn channel(&self) -> usize {
        self.channel
    }

    pub fn level(&self) -> u8 {
        self.ramp.level()
    }
}

impl Effect for Fade {
    fn step(&mut self, now: Instant, color: &mut RGB8, _rng: &mut dyn RandomSource) -> bool {
        if !self.ticker.ready(now) {
            return false;
        }

        let channel = self.channel;
        if self.ramp.advance() {
            self.channel = (self.channel + 1) % 3;
        }

        let level = self.ramp.level();
        *color = match channel {
            0 => RGB8 { r: level, g: 0, b: 0 },
            1 => RGB8 { r: 0, g: level, b: 0 },
            _ => RGB8 { r: 0, g: 0, b: level },
        };
        true
    }
}
