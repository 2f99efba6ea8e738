use libm::sqrtf;
use microfft::{complex, Complex32};

use crate::capture::ComplexBuffer;
use crate::config::validate_fft_size;
use crate::error::ConfigError;
use crate::spectrum::MagnitudeSpectrum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum Direction {
    Forward,
    /// Forward transform of the conjugate, conjugated and scaled by `1/N`.
    Inverse,
}

/// Ordering of the transform output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum BitOrder {
    /// Bin `k` lands at index `k`.
    Natural,
    /// Bin `k` lands at index `bit_reverse(k)`.
    Reversed,
}

/// Numeric kernel behind the spectral analyzer.
///
/// Buffer and spectrum sizes are fixed by `N`, so the length preconditions
/// of a C-style kernel are enforced by the types.
pub trait TransformKernel<const N: usize> {
    /// Transforms `buffer` in place.
    fn transform(&mut self, buffer: &mut ComplexBuffer<N>);

    /// Writes `|X[k]|` for every bin.
    fn magnitude(&self, buffer: &ComplexBuffer<N>, out: &mut MagnitudeSpectrum<N>) {
        for (bin, point) in out.bins_mut().iter_mut().zip(buffer.points().iter()) {
            *bin = sqrtf(point.re * point.re + point.im * point.im);
        }
    }

    /// Largest bin and its index. Scans every bin low to high; the first
    /// maximum wins.
    fn argmax(&self, spectrum: &MagnitudeSpectrum<N>) -> (f32, usize) {
        let mut best = (0.0, 0);
        for (index, &value) in spectrum.bins().iter().enumerate() {
            if index == 0 || value > best.0 {
                best = (value, index);
            }
        }
        best
    }
}

/// Complex FFT backed by `microfft`'s radix-2 `cfft_*` functions.
#[derive(Debug, Clone, Copy)]
pub struct CfftKernel<const N: usize> {
    direction: Direction,
    bit_order: BitOrder,
    log2_size: u32,
}

impl<const N: usize> CfftKernel<N> {
    pub fn new(direction: Direction, bit_order: BitOrder) -> Result<Self, ConfigError> {
        validate_fft_size(N)?;
        Ok(Self {
            direction,
            bit_order,
            log2_size: N.trailing_zeros(),
        })
    }

    /// Forward transform with natural-order output.
    pub fn forward() -> Result<Self, ConfigError> {
        Self::new(Direction::Forward, BitOrder::Natural)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    fn scramble(&self, points: &mut [Complex32; N]) {
        for i in 0..N {
            let j = bit_reverse(i, self.log2_size);
            if i < j {
                points.swap(i, j);
            }
        }
    }
}

impl<const N: usize> TransformKernel<N> for CfftKernel<N> {
    fn transform(&mut self, buffer: &mut ComplexBuffer<N>) {
        let points = buffer.points_mut();
        match self.direction {
            Direction::Forward => cfft(points),
            Direction::Inverse => {
                // ifft(x) = conj(fft(conj(x))) / N
                for point in points.iter_mut() {
                    point.im = -point.im;
                }
                cfft(points);
                let scale = 1.0 / N as f32;
                for point in points.iter_mut() {
                    point.re *= scale;
                    point.im *= -scale;
                }
            }
        }
        if self.bit_order == BitOrder::Reversed {
            self.scramble(points);
        }
    }
}

/// In-place natural-order complex FFT over any size `validate_fft_size`
/// accepts. Other lengths are left untouched.
fn cfft(points: &mut [Complex32]) {
    macro_rules! dispatch {
        ($($size:literal => $fft:ident),* $(,)?) => {
            match points.len() {
                $($size => {
                    if let Ok(points) = <&mut [Complex32; $size]>::try_from(&mut *points) {
                        complex::$fft(points);
                    }
                })*
                _ => {}
            }
        };
    }

    dispatch! {
        2 => cfft_2,
        4 => cfft_4,
        8 => cfft_8,
        16 => cfft_16,
        32 => cfft_32,
        64 => cfft_64,
        128 => cfft_128,
        256 => cfft_256,
        512 => cfft_512,
        1024 => cfft_1024,
        2048 => cfft_2048,
        4096 => cfft_4096,
    }
}

/// Reverses the lowest `bits` bits of `index`.
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}
