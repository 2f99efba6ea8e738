#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use micro_dsp::{
    CalibrationReading, LevelSink, MagnitudeSpectrum, PeakResult, SampleSource, SpectrumDisplay,
};
use wavegen::{dc_bias, sine, wf};

pub const TONE_AMPLITUDE: f32 = 1000.0;
pub const TONE_OFFSET: f32 = 2048.0;
// Enough for a few default calibration windows plus captures.
const TONE_SAMPLES: usize = 4 * (10_000 + 1024);

/// Pure tone around the ADC midpoint, sampled at `sample_rate_hz`.
pub struct SineSource {
    samples: Vec<u16>,
    pub reads: u64,
}

impl SineSource {
    pub fn new(frequency_hz: f32, sample_rate_hz: f32) -> Self {
        let tone = wf!(
            f32,
            sample_rate_hz,
            sine!(frequency_hz, TONE_AMPLITUDE),
            dc_bias!(TONE_OFFSET)
        );
        let samples = tone
            .iter()
            .take(TONE_SAMPLES)
            .map(|v| v.round().clamp(0.0, 4095.0) as u16)
            .collect();
        Self { samples, reads: 0 }
    }
}

impl SampleSource for SineSource {
    fn read_sample(&mut self) -> u16 {
        let sample = self.samples[self.reads as usize % self.samples.len()];
        self.reads += 1;
        sample
    }
}

pub struct ConstantSource {
    pub value: u16,
    pub reads: u64,
}

impl SampleSource for ConstantSource {
    fn read_sample(&mut self) -> u16 {
        self.reads += 1;
        self.value
    }
}

#[derive(Default)]
pub struct NoDelay {
    pub calls: u32,
    pub total_ns: u64,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += ns as u64;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Level(u16),
    Calibration(CalibrationReading),
    Spectrum { peak: PeakResult, dc: f32 },
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct JournalLevel(pub Journal);

impl LevelSink for JournalLevel {
    fn write_level(&mut self, level: u16) {
        self.0.borrow_mut().push(Event::Level(level));
    }
}

pub struct JournalDisplay(pub Journal);

impl<const N: usize> SpectrumDisplay<N> for JournalDisplay {
    type Error = ();

    fn show_calibration(&mut self, reading: &CalibrationReading) -> Result<(), ()> {
        self.0.borrow_mut().push(Event::Calibration(*reading));
        Ok(())
    }

    fn show_spectrum(&mut self, peak: &PeakResult, spectrum: &MagnitudeSpectrum<N>) -> Result<(), ()> {
        self.0.borrow_mut().push(Event::Spectrum {
            peak: *peak,
            dc: spectrum.bins()[0],
        });
        Ok(())
    }
}

/// Accepts the calibration readout, then fails on the spectrum.
pub struct BrokenDisplay;

#[derive(Debug, PartialEq)]
pub struct PanelGone;

impl<const N: usize> SpectrumDisplay<N> for BrokenDisplay {
    type Error = PanelGone;

    fn show_calibration(&mut self, _reading: &CalibrationReading) -> Result<(), PanelGone> {
        Ok(())
    }

    fn show_spectrum(
        &mut self,
        _peak: &PeakResult,
        _spectrum: &MagnitudeSpectrum<N>,
    ) -> Result<(), PanelGone> {
        Err(PanelGone)
    }
}

/// `cycles` periods of a sine spread over `len` samples.
pub fn sine_wave(len: usize, cycles: f32, amplitude: f32) -> Vec<f32> {
    wf!(f32, len as f32, sine!(cycles, amplitude))
        .iter()
        .take(len)
        .collect()
}
