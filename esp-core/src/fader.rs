//! Idle-Timeout: blendet die Farbe aus, wenn zu lange nichts empfangen wurde

use embassy_time::{Duration, Instant};
use rgb::RGB8;

use crate::logic::{dim_channel, is_dark};

#[derive(Debug, Clone, Copy)]
pub struct IdleFader {
    threshold: Duration,
    amount: u8,
    hold: Duration,
}

impl IdleFader {
    /// `hold` ist die Pause, die die Schleife nach jedem Fade-Schritt einlegt
    pub const fn new(threshold: Duration, amount: u8, hold: Duration) -> Self {
        Self {
            threshold,
            amount,
            hold,
        }
    }

    /// `true` sobald seit der letzten Aktivität mehr als der Schwellwert vergangen ist
    pub fn is_idle(&self, last_activity: Instant, now: Instant) -> bool {
        now.saturating_duration_since(last_activity) > self.threshold
    }

    /// Ein Fade-Schritt; liefert die verlangte Pause oder `None` wenn schon dunkel
    pub fn fade(&self, color: &mut RGB8) -> Option<Duration> {
        if is_dark(*color) {
            return None;
        }
        *color = RGB8 {
            r: dim_channel(color.r, self.amount),
            g: dim_channel(color.g, self.amount),
            b: dim_channel(color.b, self.amount),
        };
        Some(self.hold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_strictly_after_threshold() {
        let fader = IdleFader::new(Duration::from_secs(5), 15, Duration::from_millis(30));
        let last = Instant::from_millis(1_000);
        assert!(!fader.is_idle(last, Instant::from_millis(6_000)));
        assert!(fader.is_idle(last, Instant::from_millis(6_001)));
    }

    #[test]
    fn test_fade_reaches_black_and_stops() {
        let fader = IdleFader::new(Duration::from_secs(5), 15, Duration::from_millis(30));
        let mut color = RGB8 { r: 40, g: 15, b: 0 };

        assert_eq!(fader.fade(&mut color), Some(Duration::from_millis(30)));
        assert_eq!(color, RGB8 { r: 25, g: 0, b: 0 });
        fader.fade(&mut color);
        fader.fade(&mut color);
        assert_eq!(color, RGB8::default());
        assert_eq!(fader.fade(&mut color), None);
    }
}
