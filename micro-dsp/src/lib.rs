#![no_std]
//! Signal chain for a single-microphone spectrum analyzer.
//!
//! One loop owns everything: a calibration window tracks peak-to-peak
//! amplitude, then a fixed-rate capture fills a complex buffer that is
//! transformed, reduced to magnitudes and handed to a display.

pub mod analyzer;
pub mod calibration;
pub mod capture;
pub mod config;
pub mod display;
pub mod error;
pub mod kernel;
pub mod pipeline;
pub mod source;
pub mod spectrum;

pub use analyzer::SpectralAnalyzer;
pub use calibration::{CalibrationReading, CalibrationWindow, Calibrator};
pub use capture::{capture, ComplexBuffer};
pub use config::{
    AdcScale, CalibrationConfig, CaptureConfig, PipelineConfig, FFT_SIZE, MAX_FFT_SIZE,
};
pub use display::SpectrumDisplay;
pub use error::ConfigError;
pub use kernel::{BitOrder, CfftKernel, Direction, TransformKernel};
pub use pipeline::{CycleReport, Pipeline};
pub use source::{LevelSink, SampleSource};
pub use spectrum::{MagnitudeSpectrum, PeakResult};
