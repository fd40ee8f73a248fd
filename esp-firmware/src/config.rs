// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use embassy_time::Duration;
use esp_core::Timing;

// ============================================================================
// Build-Zeit Overrides
// ============================================================================
//
// build.rs reicht SERIAL_BAUD und IDLE_TIMEOUT_MS aus der .env weiter.
// Fehlt ein Wert (oder ist er keine Zahl), gilt der Default.

const fn parse_u32(value: Option<&str>, default: u32) -> u32 {
    match value {
        Some(value) => match u32::from_str_radix(value, 10) {
            Ok(value) => value,
            Err(_) => default,
        },
        None => default,
    }
}

// Firmware läuft nicht auf dem Host: Parser zur Compile-Zeit prüfen
const _: () = {
    assert!(parse_u32(Some("115200"), 9600) == 115_200);
    assert!(parse_u32(Some("fast"), 9600) == 9600);
    assert!(parse_u32(Some(""), 5_000) == 5_000);
    assert!(parse_u32(None, 5_000) == 5_000);
};

// ============================================================================
// LED-Strip Konfiguration (LEDC PWM)
// ============================================================================

/// GPIO-Pins der drei PWM-Kanäle
pub const RED_GPIO_PIN: u8 = 4;
pub const GREEN_GPIO_PIN: u8 = 5;
pub const BLUE_GPIO_PIN: u8 = 6;

/// PWM-Frequenz in kHz (flimmerfrei, bei 8 Bit Auflösung über APB-Clock machbar)
pub const PWM_FREQUENCY_KHZ: u32 = 24;

/// Höchster Duty-Wert bei 8 Bit Auflösung
pub const PWM_MAX_DUTY: u32 = 255;

// ============================================================================
// Bluetooth-Serial-Bridge (HC-05 an UART1)
// ============================================================================

/// UART TX → RX der Bridge
pub const UART_TX_GPIO_PIN: u8 = 22;

/// UART RX ← TX der Bridge
pub const UART_RX_GPIO_PIN: u8 = 23;

/// Baudrate der Bridge (HC-05 Default: 9600)
pub const SERIAL_BAUD: u32 = parse_u32(option_env!("SERIAL_BAUD"), 9600);

// ============================================================================
// Button
// ============================================================================

/// Pattern-Button: BOOT-Taster des DevKits, active-low mit Pull-up
pub const BUTTON_GPIO_PIN: u8 = 9;

// ============================================================================
// Scheduler
// ============================================================================

/// Pause zwischen zwei Iterationen, wenn keine längere verlangt wird
pub const LOOP_INTERVAL: Duration = Duration::from_millis(1);

/// Zeit ohne serielle Aktivität bis zum Ausblenden (ms)
pub const IDLE_TIMEOUT_MS: u32 = parse_u32(option_env!("IDLE_TIMEOUT_MS"), 5_000);

/// Timing der Patterns, des Buttons und des Idle-Fades
pub fn timing() -> Timing {
    Timing::default().with_idle_timeout(Duration::from_millis(IDLE_TIMEOUT_MS as u64))
}
