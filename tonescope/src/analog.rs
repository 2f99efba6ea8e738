use esp_hal::{
    analog::{
        adc::{Adc, AdcPin},
        dac::Dac,
    },
    peripherals::{ADC1, DAC1, GPIO36},
    Blocking,
};
use micro_dsp::{LevelSink, SampleSource};

use crate::config::DAC_SHIFT;

/// Analog microphone on GPIO36, read one conversion at a time.
pub struct Microphone {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    pin: AdcPin<GPIO36<'static>, ADC1<'static>>,
}

impl Microphone {
    pub fn new(
        adc: Adc<'static, ADC1<'static>, Blocking>,
        pin: AdcPin<GPIO36<'static>, ADC1<'static>>,
    ) -> Self {
        Self { adc, pin }
    }
}

impl SampleSource for Microphone {
    fn read_sample(&mut self) -> u16 {
        nb::block!(self.adc.read_oneshot(&mut self.pin)).expect("ADC1 conversion failed")
    }
}

/// 8-bit DAC code for a 12-bit level, saturating.
pub fn dac_code(level: u16) -> u8 {
    (level >> DAC_SHIFT).min(u8::MAX as u16) as u8
}

/// Peak-to-peak level on DAC1 (GPIO25).
pub struct LevelOutput {
    dac: Dac<'static, DAC1<'static>>,
}

impl LevelOutput {
    pub fn new(dac: Dac<'static, DAC1<'static>>) -> Self {
        Self { dac }
    }
}

impl LevelSink for LevelOutput {
    fn write_level(&mut self, level: u16) {
        self.dac.write(dac_code(level));
    }
}
