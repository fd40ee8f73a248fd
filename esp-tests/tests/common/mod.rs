//! Mock-Hardware für die Host-Tests
//!
//! Ersetzt PWM, UART, Button-GPIO und Hardware-RNG durch In-Memory-Mocks.

#![allow(dead_code)] // Jede Test-Datei nutzt nur einen Teil der Mocks

use std::collections::VecDeque;

use embassy_time::Instant;
use esp_core::{ButtonInput, RandomSource, RgbOutput, Scheduler, SerialSource, Timing};
use rgb::RGB8;

// ============================================================================
// Mock Output
// ============================================================================

#[derive(Default)]
pub struct MockOutput {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub history: Vec<RGB8>,
}

impl RgbOutput for MockOutput {
    fn write(&mut self, color: RGB8) {
        self.last_color = Some(color);
        self.write_count += 1;
        self.history.push(color);
    }
}

// ============================================================================
// Mock Serial
// ============================================================================

#[derive(Default)]
pub struct MockSerial {
    pub rx: VecDeque<u8>,
}

impl MockSerial {
    pub fn inject(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }
}

impl SerialSource for MockSerial {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}

// ============================================================================
// Mock Button
// ============================================================================

#[derive(Default)]
pub struct MockButton {
    pub pressed: bool,
}

impl ButtonInput for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

// ============================================================================
// Mock RNG
// ============================================================================

/// Liefert die Werte der Reihe nach, danach wieder von vorn
pub struct SequenceRng {
    values: Vec<u8>,
    index: usize,
}

impl SequenceRng {
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.to_vec(),
            index: 0,
        }
    }
}

impl Default for SequenceRng {
    fn default() -> Self {
        Self::new(&[0])
    }
}

impl RandomSource for SequenceRng {
    fn next_u8(&mut self) -> u8 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestScheduler = Scheduler<MockOutput, MockSerial, MockButton, SequenceRng>;

pub fn ms(value: u64) -> Instant {
    Instant::from_millis(value)
}

pub fn scheduler() -> TestScheduler {
    scheduler_with(Timing::default())
}

pub fn scheduler_with(timing: Timing) -> TestScheduler {
    Scheduler::new(
        timing,
        ms(0),
        MockOutput::default(),
        MockSerial::default(),
        MockButton::default(),
        SequenceRng::default(),
    )
}
