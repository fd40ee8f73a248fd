use embassy_time::{Duration, Instant};
use rgb::RGB8;

use super::{Effect, Ticker, Triangle};
use crate::traits::RandomSource;

/// Alle drei Kanäle gemeinsam 0 → 255 → 0
#[derive(Debug, Clone)]
pub struct Breathing {
    ticker: Ticker,
    ramp: Triangle,
}

impl Breathing {
    pub const fn new(amount: u8, step_delay: Duration) -> Self {
        Self {
            ticker: Ticker::new(step_delay),
            ramp: Triangle::new(amount),
        }
    }

    pub fn level(&self) -> u8 {
        self.ramp.level()
    }
}

impl Effect for Breathing {
    fn step(&mut self, now: Instant, color: &mut RGB8, _rng: &mut dyn RandomSource) -> bool {
        if !self.ticker.ready(now) {
            return false;
        }
        self.ramp.advance();
        let level = self.ramp.level();
        *color = RGB8 {
            r: level,
            g: level,
            b: level,
        };
        true
    }
}
