use core::fmt;

/// Startup configuration problems. Nothing fails once the pipeline is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum ConfigError {
    FftSizeNotPowerOfTwo(usize),
    FftSizeTooLarge(usize),
    EmptyCalibrationWindow,
    ZeroAdcRange,
    InvalidSampleRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FftSizeNotPowerOfTwo(size) => {
                write!(f, "FFT size must be a power of two >= 2, got {}", size)
            }
            ConfigError::FftSizeTooLarge(size) => {
                write!(f, "FFT size {} is above the largest supported size", size)
            }
            ConfigError::EmptyCalibrationWindow => {
                write!(f, "calibration window must contain at least one read")
            }
            ConfigError::ZeroAdcRange => write!(f, "ADC range and reference must be non-zero"),
            ConfigError::InvalidSampleRate => write!(f, "sample rate must be finite and positive"),
        }
    }
}

impl core::error::Error for ConfigError {}
