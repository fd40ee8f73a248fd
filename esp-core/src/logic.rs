//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Rechnet einen Kanal-Wert (0-255) linear in einen PWM-Duty um
///
/// # Beispiele
///
/// ```
/// # use esp_core::duty_from_level;
/// assert_eq!(duty_from_level(0, 1023), 0);
/// assert_eq!(duty_from_level(255, 1023), 1023);
/// assert_eq!(duty_from_level(255, 255), 255);
/// ```
pub fn duty_from_level(level: u8, max_duty: u32) -> u32 {
    (u64::from(level) * u64::from(max_duty) / 255) as u32
}

/// Verringert einen Kanal um `amount`, nie unter 0
pub fn dim_channel(level: u8, amount: u8) -> u8 {
    level.saturating_sub(amount)
}

/// `true` wenn alle drei Kanäle aus sind
pub fn is_dark(color: RGB8) -> bool {
    color.r == 0 && color.g == 0 && color.b == 0
}
