// Serieller Byte-Strom von der Bluetooth-Bridge

use defmt::{Debug2Format, warn};
use esp_core::SerialSource;
use esp_hal::Blocking;
use esp_hal::uart::Uart;

/// UART1 im Blocking-Modus, gelesen wird nur was schon im FIFO liegt
pub struct UartSerial<'d> {
    uart: Uart<'d, Blocking>,
}

impl<'d> UartSerial<'d> {
    pub fn new(uart: Uart<'d, Blocking>) -> Self {
        Self { uart }
    }
}

impl SerialSource for UartSerial<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        if !self.uart.read_ready() {
            return None;
        }

        let mut byte = [0u8; 1];
        match self.uart.read_buffered(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(e) => {
                // Overrun/Framing: Byte ist verloren, der Decoder läuft einfach weiter
                warn!("UART: receive error {}", Debug2Format(&e));
                None
            }
        }
    }
}
