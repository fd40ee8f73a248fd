//! Pattern-Engine
//!
//! Jedes Pattern besitzt seinen eigenen Cursor (Helligkeit, Richtung,
//! Phase, letzter Tick) und taktet sich selbst: ein Schritt passiert nur,
//! wenn seit dem letzten Tick die eigene Periode vergangen ist. Die Cursor
//! bleiben beim Umschalten erhalten, ein erneut gewähltes Pattern läuft
//! dort weiter, wo es aufgehört hat.

use embassy_time::{Duration, Instant};
use rgb::RGB8;

use crate::config::Timing;
use crate::traits::RandomSource;
use crate::types::Pattern;

mod breathing;
mod cycle;
mod fade;
mod rainbow;
mod random_flash;

pub use breathing::Breathing;
pub use cycle::Cycle;
pub use fade::Fade;
pub use rainbow::RainbowCycle;
pub use random_flash::RandomFlash;

/// Gemeinsame Schnittstelle aller animierten Patterns
pub trait Effect {
    /// Führt einen Animationsschritt aus, falls die eigene Periode abgelaufen ist
    ///
    /// Gibt `true` zurück, wenn `color` verändert wurde.
    fn step(&mut self, now: Instant, color: &mut RGB8, rng: &mut dyn RandomSource) -> bool;
}

/// Zeitsteuerung per Vergleich mit dem letzten Tick
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            last: Instant::MIN,
        }
    }

    /// `true` wenn die Periode abgelaufen ist; merkt sich dann `now`
    pub fn ready(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.period {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// Dreiecks-Rampe 0 → 255 → 0 mit festem Schritt
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    level: u8,
    rising: bool,
    amount: u8,
}

impl Triangle {
    pub const fn new(amount: u8) -> Self {
        Self {
            level: 0,
            rising: true,
            amount,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Ein Schritt; gibt `true` zurück, wenn die Rampe wieder bei 0 ankommt
    ///
    /// Überschreitet ein Schritt eine Grenze, bleibt der Wert auf der Grenze.
    pub fn advance(&mut self) -> bool {
        if self.rising {
            self.level = self.level.saturating_add(self.amount);
            if self.level == u8::MAX {
                self.rising = false;
            }
            false
        } else {
            self.level = self.level.saturating_sub(self.amount);
            if self.level == 0 {
                self.rising = true;
                return true;
            }
            false
        }
    }
}

/// Hält den Zustand aller Patterns und dispatcht auf das aktive
#[derive(Debug, Clone)]
pub struct PatternEngine {
    fade: Fade,
    cycle: Cycle,
    rainbow: RainbowCycle,
    breathing: Breathing,
    random_flash: RandomFlash,
}

impl PatternEngine {
    pub fn new(timing: &Timing) -> Self {
        Self {
            fade: Fade::new(timing.fade_amount, timing.fade_step_delay),
            cycle: Cycle::new(timing.cycle_delay, timing.cycle_pause),
            rainbow: RainbowCycle::new(timing.fade_step_delay),
            breathing: Breathing::new(timing.fade_amount, timing.fade_step_delay),
            random_flash: RandomFlash::new(timing.random_flash_interval),
        }
    }

    /// Schritt des gewählten Patterns
    ///
    /// `Off` und `Manual` lassen die Farbe unverändert; das Ausschalten
    /// erledigt, wer das Pattern auf `Off` setzt.
    pub fn step(
        &mut self,
        pattern: Pattern,
        now: Instant,
        color: &mut RGB8,
        rng: &mut dyn RandomSource,
    ) -> bool {
        match pattern {
            Pattern::Off | Pattern::Manual => false,
            Pattern::Fade => self.fade.step(now, color, rng),
            Pattern::Cycle => self.cycle.step(now, color, rng),
            Pattern::RainbowCycle => self.rainbow.step(now, color, rng),
            Pattern::Breathing => self.breathing.step(now, color, rng),
            Pattern::RandomFlash => self.random_flash.step(now, color, rng),
        }
    }

    pub fn fade(&self) -> &Fade {
        &self.fade
    }

    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    pub fn rainbow(&self) -> &RainbowCycle {
        &self.rainbow
    }

    pub fn breathing(&self) -> &Breathing {
        &self.breathing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_waits_for_period() {
        let mut ticker = Ticker::new(Duration::from_millis(30));
        assert!(!ticker.ready(Instant::from_millis(29)));
        assert!(ticker.ready(Instant::from_millis(30)));
        assert!(!ticker.ready(Instant::from_millis(59)));
        assert!(ticker.ready(Instant::from_millis(60)));
    }

    #[test]
    fn test_triangle_full_cycle() {
        let mut triangle = Triangle::new(15);
        let mut steps = 0;
        loop {
            steps += 1;
            if triangle.advance() {
                break;
            }
        }
        // 17 Schritte hoch, 17 runter
        assert_eq!(steps, 34);
        assert_eq!(triangle.level(), 0);
    }

    #[test]
    fn test_triangle_snaps_to_bounds() {
        let mut triangle = Triangle::new(100);
        triangle.advance();
        triangle.advance();
        triangle.advance();
        assert_eq!(triangle.level(), 255);
        triangle.advance();
        triangle.advance();
        triangle.advance();
        assert_eq!(triangle.level(), 0);
    }
}
