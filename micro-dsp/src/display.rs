use crate::calibration::CalibrationReading;
use crate::spectrum::{MagnitudeSpectrum, PeakResult};

/// Where the pipeline sends its readings.
///
/// Both calls redraw in place; nothing is buffered between cycles.
pub trait SpectrumDisplay<const N: usize> {
    type Error;

    fn show_calibration(&mut self, reading: &CalibrationReading) -> Result<(), Self::Error>;

    fn show_spectrum(
        &mut self,
        peak: &PeakResult,
        spectrum: &MagnitudeSpectrum<N>,
    ) -> Result<(), Self::Error>;
}

impl<T, const N: usize> SpectrumDisplay<N> for &mut T
where
    T: SpectrumDisplay<N> + ?Sized,
{
    type Error = T::Error;

    fn show_calibration(&mut self, reading: &CalibrationReading) -> Result<(), Self::Error> {
        (**self).show_calibration(reading)
    }

    fn show_spectrum(
        &mut self,
        peak: &PeakResult,
        spectrum: &MagnitudeSpectrum<N>,
    ) -> Result<(), Self::Error> {
        (**self).show_spectrum(peak, spectrum)
    }
}
