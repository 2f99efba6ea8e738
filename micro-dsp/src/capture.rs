use embedded_hal::delay::DelayNs;
use microfft::Complex32;

use crate::config::CaptureConfig;
use crate::source::SampleSource;

/// `N` complex samples, the in-place working buffer of the transform.
///
/// `Complex32` is `repr(C)`, so the memory is `2 * N` consecutive `f32`s:
/// even slots hold the centred real part, odd slots the imaginary part.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBuffer<const N: usize> {
    points: [Complex32; N],
}

impl<const N: usize> ComplexBuffer<N> {
    /// Number of `f32` slots (`2 * N`).
    pub const SLOTS: usize = 2 * N;

    pub const fn new() -> Self {
        Self {
            points: [Complex32 { re: 0.0, im: 0.0 }; N],
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn points(&self) -> &[Complex32; N] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Complex32; N] {
        &mut self.points
    }

    /// Flat view over all `2 * N` slots.
    pub fn slots(&self) -> &[f32] {
        // SAFETY: `Complex32` is `repr(C)` with two `f32` fields and no padding,
        // so `N` of them are exactly `2 * N` initialised `f32`s.
        unsafe { core::slice::from_raw_parts(self.points.as_ptr().cast::<f32>(), Self::SLOTS) }
    }

    pub fn re(&self, index: usize) -> f32 {
        self.points[index].re
    }

    pub fn im(&self, index: usize) -> f32 {
        self.points[index].im
    }

    /// Fills every point from `real`, zeroing the imaginary parts.
    pub fn fill_real<I>(&mut self, real: I)
    where
        I: IntoIterator<Item = f32>,
    {
        let mut real = real.into_iter();
        for point in self.points.iter_mut() {
            *point = Complex32::new(real.next().unwrap_or(0.0), 0.0);
        }
    }
}

impl<const N: usize> Default for ComplexBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Acquires `N` time-spaced readings into `buffer`.
///
/// Every read is preceded by a `sample_interval_us` wait, which fixes the
/// effective sample rate. Each reading has `bias` subtracted and goes into
/// the real slot; the imaginary slot is zeroed. The whole buffer is
/// overwritten on every call.
pub fn capture<S, D, const N: usize>(
    source: &mut S,
    delay: &mut D,
    config: &CaptureConfig,
    buffer: &mut ComplexBuffer<N>,
) where
    S: SampleSource + ?Sized,
    D: DelayNs + ?Sized,
{
    for point in buffer.points.iter_mut() {
        delay.delay_us(config.sample_interval_us);
        let reading = source.read_sample() as f32;
        *point = Complex32::new(reading - config.bias, 0.0);
    }
}
