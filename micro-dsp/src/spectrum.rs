/// One non-negative magnitude per frequency bin. Bin 0 is DC.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeSpectrum<const N: usize> {
    bins: [f32; N],
}

impl<const N: usize> MagnitudeSpectrum<N> {
    pub const fn new() -> Self {
        Self { bins: [0.0; N] }
    }

    pub fn from_bins(bins: [f32; N]) -> Self {
        Self { bins }
    }

    pub fn bins(&self) -> &[f32; N] {
        &self.bins
    }

    pub fn bins_mut(&mut self) -> &mut [f32; N] {
        &mut self.bins
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for MagnitudeSpectrum<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Strongest bin of one analysis cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct PeakResult {
    pub bin_index: usize,
    pub magnitude: f32,
    pub frequency_hz: f32,
}
