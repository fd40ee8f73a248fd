// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core für die echte ESP32-C6 Hardware.
// Die Mocks für die Host-Tests liegen in esp-tests.

pub mod button;
pub mod pwm;
pub mod rng;
pub mod serial;

pub use button::GpioButton;
pub use pwm::PwmRgbOutput;
pub use rng::HwRandom;
pub use serial::UartSerial;
