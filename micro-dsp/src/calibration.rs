#[cfg(feature = "logging")]
use defmt::debug;

use crate::config::CalibrationConfig;
use crate::source::{LevelSink, SampleSource};

/// Running min/max over one calibration window.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationWindow {
    min_seen: u16,
    max_seen: u16,
    count: u32,
    window_size: u32,
    range_max: u16,
}

impl CalibrationWindow {
    pub fn new(window_size: u32, range_max: u16) -> Self {
        Self {
            min_seen: range_max,
            max_seen: 0,
            count: 0,
            window_size,
            range_max,
        }
    }

    pub fn reset(&mut self) {
        self.min_seen = self.range_max;
        self.max_seen = 0;
        self.count = 0;
    }

    /// Folds one sample into the window. Returns `true` once the window is full.
    pub fn observe(&mut self, sample: u16) -> bool {
        if sample > self.max_seen {
            self.max_seen = sample;
        }
        if sample < self.min_seen {
            self.min_seen = sample;
        }
        self.count += 1;
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.count >= self.window_size
    }

    pub fn min_seen(&self) -> u16 {
        self.min_seen
    }

    pub fn max_seen(&self) -> u16 {
        self.max_seen
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// `max_seen - min_seen`. Zero for a window that has seen nothing.
    pub fn peak_to_peak(&self) -> u16 {
        self.max_seen.saturating_sub(self.min_seen)
    }
}

/// Result of one completed window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct CalibrationReading {
    /// Peak-to-peak swing in raw ADC counts.
    pub peak_to_peak: u16,
    /// Peak-to-peak swing in millivolts.
    pub millivolts: f32,
    /// Value written to the level output.
    pub level: u16,
}

/// Tracks peak-to-peak amplitude by sampling at full speed over a fixed window.
pub struct Calibrator {
    config: CalibrationConfig,
    window: CalibrationWindow,
}

impl Calibrator {
    pub fn new(config: CalibrationConfig) -> Self {
        let window = CalibrationWindow::new(config.window_size, config.adc.max_reading);
        Self { config, window }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    pub fn window(&self) -> &CalibrationWindow {
        &self.window
    }

    /// Reads exactly `window_size` samples, writes the level output once and
    /// returns the reading for display.
    pub fn run_window<S, L>(&mut self, source: &mut S, level: &mut L) -> CalibrationReading
    where
        S: SampleSource + ?Sized,
        L: LevelSink + ?Sized,
    {
        self.window.reset();
        while !self.window.observe(source.read_sample()) {}

        let reading = self.reading();
        level.write_level(reading.level);

        #[cfg(feature = "logging")]
        debug!(
            "calibration: pk-pk {} counts, {} mV, level {}",
            reading.peak_to_peak, reading.millivolts, reading.level
        );

        reading
    }

    /// Derives the reading from the current window contents.
    pub fn reading(&self) -> CalibrationReading {
        let peak_to_peak = self.window.peak_to_peak();
        CalibrationReading {
            peak_to_peak,
            millivolts: self.config.adc.millivolts(peak_to_peak),
            level: peak_to_peak.saturating_add(self.config.level_offset),
        }
    }
}
