use embassy_time::{Duration, Instant};
use rgb::RGB8;

use super::{Effect, Ticker};
use crate::traits::RandomSource;

/// Setzt jeden Kanal pro Intervall auf einen Zufallswert
#[derive(Debug, Clone)]
pub struct RandomFlash {
    ticker: Ticker,
}

impl RandomFlash {
    pub const fn new(interval: Duration) -> Self {
        Self {
            ticker: Ticker::new(interval),
        }
    }
}

impl Effect for RandomFlash {
    fn step(&mut self, now: Instant, color: &mut RGB8, rng: &mut dyn RandomSource) -> bool {
        if !self.ticker.ready(now) {
            return false;
        }
        *color = RGB8 {
            r: rng.next_u8(),
            g: rng.next_u8(),
            b: rng.next_u8(),
        };
        true
    }
}
