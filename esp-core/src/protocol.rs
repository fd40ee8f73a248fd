//! Serielles Steuerprotokoll
//!
//! Byte-Strom ohne Checksummen und ohne Antworten:
//!
//! | Opcode | Folgebytes | Wirkung |
//! |---|---|---|
//! | `0x01` | 1 Byte: 0 = aus, sonst an | Idle-Timeout |
//! | `0x02` | 1 Byte: Pattern 0-6 | Pattern-Auswahl |
//! | `0x03` | 3 Bytes: R, G, B | Farbe setzen |
//!
//! Alle anderen Bytes werden im Zustand `AwaitOpcode` verworfen. Es gibt
//! keine Resynchronisation: fehlt ein Byte mitten im Kommando, werden die
//! folgenden Bytes falsch interpretiert, bis wieder ein Opcode passt.

use rgb::RGB8;

use crate::types::Command;

pub const OPCODE_TIMEOUT: u8 = 0x01;
pub const OPCODE_PATTERN: u8 = 0x02;
pub const OPCODE_COLOR: u8 = 0x03;

/// Längstes Kommando auf dem Draht (Opcode + R, G, B)
pub const MAX_FRAME_LEN: usize = 4;

/// Ein kodiertes Kommando
pub type Frame = heapless::Vec<u8, MAX_FRAME_LEN>;

/// Position des Decoders im Framing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    #[default]
    AwaitOpcode,
    AwaitTimeoutFlag,
    AwaitPatternByte,
    AwaitRed,
    AwaitGreen { red: u8 },
    AwaitBlue { red: u8, green: u8 },
}

/// Byte-für-Byte Zustandsmaschine
///
/// Jeder Aufruf von [`Decoder::feed`] verbraucht genau ein Byte und
/// wartet nie auf weitere Daten.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    state: DecoderState,
}

impl Decoder {
    pub const fn new() -> Self {
        Self {
            state: DecoderState::AwaitOpcode,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Verarbeitet ein Byte und liefert ggf. ein vollständiges Kommando
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        let (next, command) = match self.state {
            DecoderState::AwaitOpcode => match byte {
                OPCODE_TIMEOUT => (DecoderState::AwaitTimeoutFlag, None),
                OPCODE_PATTERN => (DecoderState::AwaitPatternByte, None),
                OPCODE_COLOR => (DecoderState::AwaitRed, None),
                _ => (DecoderState::AwaitOpcode, None),
            },
            DecoderState::AwaitTimeoutFlag => {
                (DecoderState::AwaitOpcode, Some(Command::SetTimeout(byte != 0)))
            }
            DecoderState::AwaitPatternByte => {
                (DecoderState::AwaitOpcode, Some(Command::SelectPattern(byte)))
            }
            DecoderState::AwaitRed => (DecoderState::AwaitGreen { red: byte }, None),
            DecoderState::AwaitGreen { red } => {
                (DecoderState::AwaitBlue { red, green: byte }, None)
            }
            DecoderState::AwaitBlue { red, green } => (
                DecoderState::AwaitOpcode,
                Some(Command::SetColor(RGB8 {
                    r: red,
                    g: green,
                    b: byte,
                })),
            ),
        };
        self.state = next;
        command
    }
}

impl Command {
    /// Kodiert das Kommando für den seriellen Link
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use esp_core::Command;
    /// # use rgb::RGB8;
    /// let frame = Command::SetColor(RGB8 { r: 10, g: 20, b: 30 }).encode();
    /// assert_eq!(frame.as_slice(), &[0x03, 10, 20, 30]);
    /// ```
    pub fn encode(&self) -> Frame {
        let (bytes, len) = match *self {
            Command::SetTimeout(enabled) => ([OPCODE_TIMEOUT, u8::from(enabled), 0, 0], 2),
            Command::SelectPattern(value) => ([OPCODE_PATTERN, value, 0, 0], 2),
            Command::SetColor(color) => ([OPCODE_COLOR, color.r, color.g, color.b], 4),
        };
        // passt immer: len <= MAX_FRAME_LEN
        Frame::from_slice(&bytes[..len]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(decoder: &mut Decoder, bytes: &[u8]) -> Option<Command> {
        let mut last = None;
        for &byte in bytes {
            if let Some(command) = decoder.feed(byte) {
                last = Some(command);
            }
        }
        last
    }

    #[test]
    fn test_unknown_opcodes_are_ignored() {
        let mut decoder = Decoder::new();
        for byte in (0..=255u8).filter(|b| !(1..=3).contains(b)) {
            assert_eq!(decoder.feed(byte), None);
            assert_eq!(decoder.state(), DecoderState::AwaitOpcode);
        }
    }

    #[test]
    fn test_color_bytes_walk_through_states() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.feed(OPCODE_COLOR), None);
        assert_eq!(decoder.state(), DecoderState::AwaitRed);
        assert_eq!(decoder.feed(10), None);
        assert_eq!(decoder.state(), DecoderState::AwaitGreen { red: 10 });
        assert_eq!(decoder.feed(20), None);
        assert_eq!(decoder.state(), DecoderState::AwaitBlue { red: 10, green: 20 });
        assert_eq!(
            decoder.feed(30),
            Some(Command::SetColor(RGB8 { r: 10, g: 20, b: 30 }))
        );
        assert_eq!(decoder.state(), DecoderState::AwaitOpcode);
    }

    #[test]
    fn test_payload_bytes_may_look_like_opcodes() {
        let mut decoder = Decoder::new();
        let command = feed_all(&mut decoder, &[OPCODE_COLOR, 0x01, 0x02, 0x03]);
        assert_eq!(command, Some(Command::SetColor(RGB8 { r: 1, g: 2, b: 3 })));
    }

    #[test]
    fn test_encode_lengths() {
        assert_eq!(Command::SetTimeout(true).encode().as_slice(), &[0x01, 1]);
        assert_eq!(Command::SetTimeout(false).encode().as_slice(), &[0x01, 0]);
        assert_eq!(Command::SelectPattern(4).encode().as_slice(), &[0x02, 4]);
    }
}
