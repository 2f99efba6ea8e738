use core::convert::Infallible;

#[cfg(feature = "logging")]
use defmt::info;
use embedded_hal::delay::DelayNs;

use crate::analyzer::SpectralAnalyzer;
use crate::calibration::{CalibrationReading, Calibrator};
use crate::capture::{capture, ComplexBuffer};
use crate::config::{CaptureConfig, PipelineConfig};
use crate::display::SpectrumDisplay;
use crate::error::ConfigError;
use crate::kernel::TransformKernel;
use crate::source::{LevelSink, SampleSource};
use crate::spectrum::{MagnitudeSpectrum, PeakResult};

/// What one pass of the main loop produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct CycleReport {
    pub calibration: CalibrationReading,
    pub peak: PeakResult,
}

/// The main loop: calibrate, then capture, analyze and render, forever.
///
/// The pipeline owns every collaborator and both buffers, so the phases
/// never contend for the sample source or the display.
pub struct Pipeline<S, L, D, K, V, const N: usize> {
    source: S,
    level: L,
    delay: D,
    display: V,
    calibrator: Calibrator,
    capture: CaptureConfig,
    analyzer: SpectralAnalyzer<K, N>,
    buffer: ComplexBuffer<N>,
    spectrum: MagnitudeSpectrum<N>,
}

impl<S, L, D, K, V, const N: usize> Pipeline<S, L, D, K, V, N>
where
    S: SampleSource,
    L: LevelSink,
    D: DelayNs,
    K: TransformKernel<N>,
    V: SpectrumDisplay<N>,
{
    pub fn new(
        config: PipelineConfig,
        source: S,
        level: L,
        delay: D,
        kernel: K,
        display: V,
    ) -> Result<Self, ConfigError> {
        config.validate::<N>()?;

        #[cfg(feature = "logging")]
        info!(
            "pipeline: {} point FFT, {} Hz per bin, {} reads per calibration window",
            N,
            config.capture.frequency_resolution::<N>(),
            config.calibration.window_size
        );

        Ok(Self {
            source,
            level,
            delay,
            display,
            calibrator: Calibrator::new(config.calibration),
            capture: config.capture,
            analyzer: SpectralAnalyzer::new(kernel, config.capture.frequency_resolution::<N>()),
            buffer: ComplexBuffer::new(),
            spectrum: MagnitudeSpectrum::new(),
        })
    }

    /// Runs one calibration window and writes the level output and readout.
    pub fn calibrate(&mut self) -> Result<CalibrationReading, V::Error> {
        let reading = self.calibrator.run_window(&mut self.source, &mut self.level);
        self.display.show_calibration(&reading)?;
        Ok(reading)
    }

    /// Captures a full buffer, analyzes it and renders the spectrum.
    pub fn analyze(&mut self) -> Result<PeakResult, V::Error> {
        capture(
            &mut self.source,
            &mut self.delay,
            &self.capture,
            &mut self.buffer,
        );
        let peak = self.analyzer.analyze(&mut self.buffer, &mut self.spectrum);
        self.display.show_spectrum(&peak, &self.spectrum)?;
        Ok(peak)
    }

    /// One pass of the main loop.
    pub fn step(&mut self) -> Result<CycleReport, V::Error> {
        let calibration = self.calibrate()?;
        let peak = self.analyze()?;
        Ok(CycleReport { calibration, peak })
    }

    /// Runs forever. Only returns if the display fails.
    pub fn run(&mut self) -> Result<Infallible, V::Error> {
        loop {
            self.step()?;
        }
    }

    /// Like [`Pipeline::run`], handing every cycle's report to `on_cycle`.
    pub fn run_with<F>(&mut self, mut on_cycle: F) -> Result<Infallible, V::Error>
    where
        F: FnMut(&CycleReport),
    {
        loop {
            let report = self.step()?;
            on_cycle(&report);
        }
    }

    pub fn spectrum(&self) -> &MagnitudeSpectrum<N> {
        &self.spectrum
    }

    pub fn display(&self) -> &V {
        &self.display
    }

    pub fn frequency_resolution(&self) -> f32 {
        self.analyzer.frequency_resolution()
    }

    /// Hands the collaborators back.
    pub fn into_parts(self) -> (S, L, D, V) {
        (self.source, self.level, self.delay, self.display)
    }
}
