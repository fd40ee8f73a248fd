//! Core Types für die Strip-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Anzahl der Patterns, die über den Button durchgeschaltet werden (0-5)
pub const PATTERN_COUNT: u8 = 6;

/// Wire-Wert für "alles aus" (gleiches Verhalten wie 0)
pub const ALL_OFF: u8 = 6;

/// Aktives Licht-Pattern
///
/// Die Wire-Werte 0-5 entsprechen der Reihenfolge der Varianten.
/// `Manual` ist nicht über das Protokoll wählbar: der Zustand entsteht
/// nur durch ein Color-Set-Kommando und hält die gesetzte Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    #[default]
    Off,
    Fade,
    Cycle,
    RainbowCycle,
    Breathing,
    RandomFlash,
    Manual,
}

impl Pattern {
    /// Interpretiert einen Pattern-Byte vom Protokoll
    ///
    /// Unbekannte Werte und [`ALL_OFF`] ergeben `Off`.
    pub fn from_wire(value: u8) -> Self {
        match value {
            1 => Self::Fade,
            2 => Self::Cycle,
            3 => Self::RainbowCycle,
            4 => Self::Breathing,
            5 => Self::RandomFlash,
            _ => Self::Off,
        }
    }

    /// Wire-Wert des Patterns, `None` für `Manual`
    pub fn wire_value(self) -> Option<u8> {
        match self {
            Self::Off => Some(0),
            Self::Fade => Some(1),
            Self::Cycle => Some(2),
            Self::RainbowCycle => Some(3),
            Self::Breathing => Some(4),
            Self::RandomFlash => Some(5),
            Self::Manual => None,
        }
    }

    /// Nächstes Pattern für den Button: `(current + 1) mod 6`
    ///
    /// `Manual` zählt wie `Off`, der nächste Druck startet also `Fade`.
    ///
    /// ```
    /// # use esp_core::Pattern;
    /// assert_eq!(Pattern::RandomFlash.next(), Pattern::Off);
    /// assert_eq!(Pattern::Manual.next(), Pattern::Fade);
    /// ```
    pub fn next(self) -> Self {
        let current = self.wire_value().unwrap_or(0);
        Self::from_wire((current + 1) % PATTERN_COUNT)
    }
}

/// Mode-Namen, wie sie die Desktop-GUI verschickt
impl core::convert::TryFrom<&str> for Pattern {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            // "Solid" schaltet das Pattern ab, die Farbe kommt per Color-Set
            "OFF" | "Solid" => Ok(Self::Off),
            "Fade" => Ok(Self::Fade),
            "Cycle" => Ok(Self::Cycle),
            "Rainbow Cycle" => Ok(Self::RainbowCycle),
            "Breathing" => Ok(Self::Breathing),
            "Random" => Ok(Self::RandomFlash),
            _ => Err(()),
        }
    }
}

/// Dekodiertes Kommando vom seriellen Link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Idle-Timeout an/aus (Opcode 0x01)
    SetTimeout(bool),
    /// Pattern-Auswahl mit rohem Wire-Wert (Opcode 0x02)
    SelectPattern(u8),
    /// Farbe direkt setzen (Opcode 0x03)
    SetColor(RGB8),
}

impl Command {
    /// Kommando zur Auswahl eines Patterns
    ///
    /// `Manual` hat keinen Wire-Wert und wird als [`ALL_OFF`] gesendet.
    pub fn select(pattern: Pattern) -> Self {
        Self::SelectPattern(pattern.wire_value().unwrap_or(ALL_OFF))
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::SetTimeout(enabled) => {
                defmt::write!(fmt, "SetTimeout({})", enabled)
            }
            Command::SelectPattern(value) => {
                defmt::write!(
                    fmt,
                    "SelectPattern({} -> {})",
                    value,
                    Pattern::from_wire(*value)
                )
            }
            Command::SetColor(color) => {
                defmt::write!(
                    fmt,
                    "SetColor {{ rgb: ({}, {}, {}) }}",
                    color.r,
                    color.g,
                    color.b
                )
            }
        }
    }
}
