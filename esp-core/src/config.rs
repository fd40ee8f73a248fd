//! Timing-Konfiguration der Patterns, des Buttons und des Idle-Timeouts

use embassy_time::Duration;

/// Helligkeits-Schritt für Fade, Breathing und Idle-Fade
pub const DEFAULT_FADE_AMOUNT: u8 = 15;

/// Tick-Periode für Fade, Breathing, RainbowCycle und Idle-Fade
pub const DEFAULT_FADE_STEP_DELAY: Duration = Duration::from_millis(30);

/// Tick-Periode des Cycle-Patterns
pub const DEFAULT_CYCLE_DELAY: Duration = Duration::from_millis(10);

/// Pause an jeder Rampen-Grenze des Cycle-Patterns
pub const DEFAULT_CYCLE_PAUSE: Duration = Duration::from_millis(100);

/// Intervall des RandomFlash-Patterns
pub const DEFAULT_RANDOM_FLASH_INTERVAL: Duration = Duration::from_millis(100);

/// Entprell-Intervall des Buttons
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Zeit ohne serielle Aktivität, nach der ausgeblendet wird
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Alle Zeit- und Schrittwerte der Firmware an einem Ort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub fade_amount: u8,
    pub fade_step_delay: Duration,
    pub cycle_delay: Duration,
    pub cycle_pause: Duration,
    pub random_flash_interval: Duration,
    pub debounce: Duration,
    pub idle_timeout: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            fade_amount: DEFAULT_FADE_AMOUNT,
            fade_step_delay: DEFAULT_FADE_STEP_DELAY,
            cycle_delay: DEFAULT_CYCLE_DELAY,
            cycle_pause: DEFAULT_CYCLE_PAUSE,
            random_flash_interval: DEFAULT_RANDOM_FLASH_INTERVAL,
            debounce: DEFAULT_DEBOUNCE,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

impl Timing {
    /// Setzt den Idle-Timeout (z.B. aus der Build-Konfiguration)
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }
}
