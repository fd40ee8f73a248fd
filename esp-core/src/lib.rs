//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie enthält das serielle Protokoll, die Pattern-Engine, den Button-Debouncer,
//! den Idle-Fader und die Scheduler-Schleife, die alles zusammenführt.
//! Die Hardware wird über die Traits in [`traits`] angebunden.

#![no_std]

pub mod config;
pub mod controller;
pub mod debounce;
pub mod fader;
pub mod logic;
pub mod patterns;
pub mod protocol;
pub mod scheduler;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::Timing;
pub use controller::{Controller, StripState};
pub use debounce::Debouncer;
pub use fader::IdleFader;
pub use logic::{dim_channel, duty_from_level, is_dark};
pub use patterns::PatternEngine;
pub use protocol::{Decoder, DecoderState, Frame};
pub use scheduler::{Event, Iteration, Scheduler};
pub use traits::{ButtonInput, RandomSource, RgbOutput, SerialSource};
pub use types::{Command, Pattern};
