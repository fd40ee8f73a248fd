use core::f32::consts::TAU;

use embassy_time::{Duration, Instant};
use rgb::RGB8;

use super::{Effect, Ticker};
use crate::traits::RandomSource;

/// Phasenverschiebung von Grün und Blau in Radiant
const GREEN_OFFSET: f32 = 2.0;
const BLUE_OFFSET: f32 = 4.0;

/// Weicher Regenbogen aus drei phasenverschobenen Sinuskurven
///
/// Die Phase läuft in 256 Schritten einmal um den Kreis.
#[derive(Debug, Clone)]
pub struct RainbowCycle {
    ticker: Ticker,
    phase: u8,
}

impl RainbowCycle {
    pub const fn new(step_delay: Duration) -> Self {
        Self {
            ticker: Ticker::new(step_delay),
            phase: 0,
        }
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Farbe zu einem Phasenindex, jeder Kanal in [1, 255]
    pub fn color_at(phase: u8) -> RGB8 {
        let angle = f32::from(phase) * TAU / 256.0;
        RGB8 {
            r: wave(angle),
            g: wave(angle + GREEN_OFFSET),
            b: wave(angle + BLUE_OFFSET),
        }
    }
}

/// 127 * sin(x) + 128
fn wave(angle: f32) -> u8 {
    let value = 127.0 * libm::sinf(angle) + 128.0;
    value.clamp(1.0, 255.0) as u8
}

impl Effect for RainbowCycle {
    fn step(&mut self, now: Instant, color: &mut RGB8, _rng: &mut dyn RandomSource) -> bool {
        if !self.ticker.ready(now) {
            return false;
        }
        *color = Self::color_at(self.phase);
        self.phase = self.phase.wrapping_add(1);
        true
    }
}
