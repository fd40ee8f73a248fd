// Pattern-Button (active-low, interner Pull-up)

use esp_core::ButtonInput;
use esp_hal::gpio::Input;

pub struct GpioButton<'d> {
    input: Input<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self { input }
    }
}

impl ButtonInput for GpioButton<'_> {
    fn is_pressed(&mut self) -> bool {
        // gedrückt zieht den Pin auf GND
        self.input.is_low()
    }
}
