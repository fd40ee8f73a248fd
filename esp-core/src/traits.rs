//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** LEDC-PWM, UART, GPIO und Hardware-RNG in `esp-firmware`
//! - **Testing:** In-memory Mocks in `esp-tests`

use rgb::RGB8;

/// Trait für die drei PWM-Kanäle des Strips
pub trait RgbOutput {
    /// Schreibt eine RGB-Farbe auf die drei Kanäle
    ///
    /// Fire-and-forget: Implementierungen behandeln Hardware-Fehler selbst.
    fn write(&mut self, color: RGB8);
}

/// Nicht-blockierende Byte-Quelle (Bluetooth-UART-Bridge)
pub trait SerialSource {
    /// Liefert das nächste empfangene Byte oder `None`, wenn keins anliegt
    ///
    /// Darf niemals auf Daten warten.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Digitaler Eingang des Pattern-Buttons
pub trait ButtonInput {
    /// Roher Pegel: `true` wenn gedrückt (active-low Pin liegt auf LOW)
    fn is_pressed(&mut self) -> bool;
}

/// Zufallsquelle für das RandomFlash-Pattern
pub trait RandomSource {
    fn next_u8(&mut self) -> u8;
}
