#[cfg(feature = "logging")]
use defmt::debug;

use crate::capture::ComplexBuffer;
use crate::kernel::TransformKernel;
use crate::spectrum::{MagnitudeSpectrum, PeakResult};

/// Turns a captured buffer into a magnitude spectrum and its peak.
pub struct SpectralAnalyzer<K, const N: usize> {
    kernel: K,
    frequency_resolution: f32,
}

impl<K, const N: usize> SpectralAnalyzer<K, N>
where
    K: TransformKernel<N>,
{
    /// `frequency_resolution` is the width of one bin in Hz.
    pub fn new(kernel: K, frequency_resolution: f32) -> Self {
        Self {
            kernel,
            frequency_resolution,
        }
    }

    pub fn frequency_resolution(&self) -> f32 {
        self.frequency_resolution
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Transforms `buffer` in place, writes per-bin magnitudes into
    /// `spectrum` with the DC bin forced to zero, and returns the peak.
    pub fn analyze(
        &mut self,
        buffer: &mut ComplexBuffer<N>,
        spectrum: &mut MagnitudeSpectrum<N>,
    ) -> PeakResult {
        self.kernel.transform(buffer);
        self.kernel.magnitude(buffer, spectrum);

        // DC offset and acquisition bias would otherwise swamp every other bin.
        spectrum.bins_mut()[0] = 0.0;

        let peak = self.peak(spectrum);

        #[cfg(feature = "logging")]
        debug!(
            "peak: bin {} magnitude {} at {} Hz",
            peak.bin_index, peak.magnitude, peak.frequency_hz
        );

        peak
    }

    /// Strongest bin of an already computed spectrum.
    ///
    /// Every bin is searched, so `magnitude` is the spectrum maximum. A real
    /// capture mirrors across Nyquist; on an exact tie the lower bin wins.
    pub fn peak(&self, spectrum: &MagnitudeSpectrum<N>) -> PeakResult {
        let (magnitude, bin_index) = self.kernel.argmax(spectrum);
        PeakResult {
            bin_index,
            magnitude,
            frequency_hz: bin_index as f32 * self.frequency_resolution,
        }
    }
}
