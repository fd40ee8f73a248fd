use embassy_time::{Duration, Instant};
use rgb::RGB8;

use super::{Effect, Ticker};
use crate::traits::RandomSource;

/// Lineare Farbwanderung über drei Rampen: R → G, G → B, B → R
///
/// Pro Tick wandert eine Einheit vom fallenden zum steigenden Kanal.
/// An jeder Rampen-Grenze hält das Pattern für `pause` an.
#[derive(Debug, Clone)]
pub struct Cycle {
    ticker: Ticker,
    pause: Duration,
    segment: u8,
    position: u8,
    resume_at: Option<Instant>,
}

impl Cycle {
    pub const fn new(step_delay: Duration, pause: Duration) -> Self {
        Self {
            ticker: Ticker::new(step_delay),
            pause,
            segment: 0,
            position: 0,
            resume_at: None,
        }
    }

    /// Aktuelle Rampe (0 = R→G, 1 = G→B, 2 = B→R)
    pub fn segment(&self) -> u8 {
        self.segment
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn is_paused(&self, now: Instant) -> bool {
        self.resume_at.is_some_and(|resume_at| now < resume_at)
    }
}

impl Effect for Cycle {
    fn step(&mut self, now: Instant, color: &mut RGB8, _rng: &mut dyn RandomSource) -> bool {
        if let Some(resume_at) = self.resume_at {
            if now < resume_at {
                return false;
            }
            self.resume_at = None;
        }
        if !self.ticker.ready(now) {
            return false;
        }

        let rising = self.position;
        let falling = u8::MAX - self.position;
        *color = match self.segment {
            0 => RGB8 { r: falling, g: rising, b: 0 },
            1 => RGB8 { r: 0, g: falling, b: rising },
            _ => RGB8 { r: rising, g: 0, b: falling },
        };

        if self.position == u8::MAX {
            self.position = 0;
            self.segment = (self.segment + 1) % 3;
            self.resume_at = Some(now + self.pause);
        } else {
            self.position += 1;
        }
        true
    }
}
