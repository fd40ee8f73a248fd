// RGB-Ausgabe über drei LEDC-Kanäle
//
// Jeder Farbkanal des Strips hängt (über einen MOSFET) an einem eigenen
// PWM-Ausgang. Alle drei Kanäle teilen sich einen LowSpeed-Timer.

use esp_core::{RgbOutput, duty_from_level};
use esp_hal::ledc::LowSpeed;
use esp_hal::ledc::channel::{Channel, ChannelHW as _};
use rgb::RGB8;

use crate::config::PWM_MAX_DUTY;

/// Real Hardware RGB Output
///
/// Die Kanäle müssen bereits konfiguriert sein (Timer + Pin),
/// siehe `tasks::strip::strip_task`.
pub struct PwmRgbOutput<'a> {
    red: Channel<'a, LowSpeed>,
    green: Channel<'a, LowSpeed>,
    blue: Channel<'a, LowSpeed>,
}

impl<'a> PwmRgbOutput<'a> {
    pub fn new(
        red: Channel<'a, LowSpeed>,
        green: Channel<'a, LowSpeed>,
        blue: Channel<'a, LowSpeed>,
    ) -> Self {
        Self { red, green, blue }
    }
}

impl RgbOutput for PwmRgbOutput<'_> {
    fn write(&mut self, color: RGB8) {
        // 8 Bit Helligkeit → Duty-Register (linear)
        self.red.set_duty_hw(duty_from_level(color.r, PWM_MAX_DUTY));
        self.green.set_duty_hw(duty_from_level(color.g, PWM_MAX_DUTY));
        self.blue.set_duty_hw(duty_from_level(color.b, PWM_MAX_DUTY));
    }
}
