use crate::error::ConfigError;

// --- Transform Config ---
pub const FFT_SIZE: usize = 1024; // Complex points per transform
pub const MAX_FFT_SIZE: usize = 4096; // Largest size the microfft dispatch covers

// --- ADC Config ---
pub const ADC_MAX_READING: u16 = 4095; // 12-bit converter
pub const ADC_REFERENCE_MV: f32 = 3300.0; // Supply / reference voltage

// --- Calibration Config ---
// Must span at least one period of the lowest frequency of interest. Tuned by hand.
pub const CALIBRATION_WINDOW: u32 = 10_000; // Reads per window
pub const LEVEL_OFFSET: u16 = 2000; // Added to peak-to-peak before the level output

// --- Capture Config ---
pub const SAMPLE_INTERVAL_US: u32 = 21; // Wait before each capture read
pub const SAMPLE_RATE_HZ: f32 = 45_466.0; // Measured: 21us wait + conversion time

/// Conversion between raw ADC counts and millivolts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct AdcScale {
    /// Largest value `read_sample` can return.
    pub max_reading: u16,
    /// Voltage at full scale, in millivolts.
    pub reference_mv: f32,
}

impl AdcScale {
    pub const fn new(max_reading: u16, reference_mv: f32) -> Self {
        Self {
            max_reading,
            reference_mv,
        }
    }

    /// Number of distinct codes the converter produces.
    pub fn levels(&self) -> u32 {
        self.max_reading as u32 + 1
    }

    /// Centre of the code range, used to remove the microphone bias.
    pub fn midpoint(&self) -> f32 {
        self.levels() as f32 / 2.0
    }

    pub fn millivolts(&self, counts: u16) -> f32 {
        counts as f32 * (self.reference_mv / self.levels() as f32)
    }
}

impl Default for AdcScale {
    fn default() -> Self {
        Self::new(ADC_MAX_READING, ADC_REFERENCE_MV)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct CalibrationConfig {
    pub window_size: u32,
    pub adc: AdcScale,
    /// Compensates for the level output's dead zone near zero.
    pub level_offset: u16,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            window_size: CALIBRATION_WINDOW,
            adc: AdcScale::default(),
            level_offset: LEVEL_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct CaptureConfig {
    pub sample_interval_us: u32,
    /// Effective rate produced by `sample_interval_us` on the target.
    pub sample_rate_hz: f32,
    /// Subtracted from every reading before it enters the transform.
    pub bias: f32,
}

impl CaptureConfig {
    /// Width of one bin in Hz for an `N`-point transform.
    pub fn frequency_resolution<const N: usize>(&self) -> f32 {
        self.sample_rate_hz / N as f32
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_interval_us: SAMPLE_INTERVAL_US,
            sample_rate_hz: SAMPLE_RATE_HZ,
            bias: AdcScale::default().midpoint(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct PipelineConfig {
    pub calibration: CalibrationConfig,
    pub capture: CaptureConfig,
}

impl PipelineConfig {
    /// Checks everything the pipeline assumes for its whole lifetime.
    pub fn validate<const N: usize>(&self) -> Result<(), ConfigError> {
        validate_fft_size(N)?;
        if self.calibration.window_size == 0 {
            return Err(ConfigError::EmptyCalibrationWindow);
        }
        let adc = &self.calibration.adc;
        if adc.max_reading == 0 || !adc.reference_mv.is_finite() || adc.reference_mv <= 0.0 {
            return Err(ConfigError::ZeroAdcRange);
        }
        if !self.capture.sample_rate_hz.is_finite() || self.capture.sample_rate_hz <= 0.0 {
            return Err(ConfigError::InvalidSampleRate);
        }
        Ok(())
    }
}

pub fn validate_fft_size(size: usize) -> Result<(), ConfigError> {
    if size < 2 || !size.is_power_of_two() {
        return Err(ConfigError::FftSizeNotPowerOfTwo(size));
    }
    if size > MAX_FFT_SIZE {
        return Err(ConfigError::FftSizeTooLarge(size));
    }
    Ok(())
}
