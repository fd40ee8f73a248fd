// Zufallsquelle für RandomFlash (Hardware-RNG)

use esp_core::RandomSource;
use esp_hal::rng::Rng;

pub struct HwRandom {
    rng: Rng,
}

impl HwRandom {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl RandomSource for HwRandom {
    fn next_u8(&mut self) -> u8 {
        (self.rng.random() & 0xFF) as u8
    }
}
