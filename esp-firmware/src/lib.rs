// Library-Root: Hardware-Anbindung und Tasks der Strip-Firmware
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{Command, Event, Pattern, Scheduler, Timing};

use hal::{GpioButton, HwRandom, PwmRgbOutput, UartSerial};

// ============================================================================
// Type-Aliase
// ============================================================================

/// Scheduler mit der echten ESP32-C6 Hardware
///
/// Statt:  Scheduler<PwmRgbOutput<'d>, UartSerial<'d>, GpioButton<'d>, HwRandom>
/// Nutze:  StripScheduler<'d>
pub type StripScheduler<'d> = Scheduler<PwmRgbOutput<'d>, UartSerial<'d>, GpioButton<'d>, HwRandom>;
