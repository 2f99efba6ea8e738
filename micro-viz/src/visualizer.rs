use embedded_graphics::prelude::*;
use micro_dsp::{CalibrationReading, MagnitudeSpectrum, PeakResult, SpectrumDisplay};

#[cfg(feature = "logging")]
use defmt::trace;

use crate::bar::{bar_height, Bar};
use crate::layout::Layout;
use crate::readout::{draw_readout, format_readout, CALIBRATION_LABEL, FREQUENCY_LABEL};
use crate::theme::Theme;

/// Renders calibration readings and spectra onto a draw target it owns.
pub struct Visualizer<D: DrawTarget> {
    target: D,
    layout: Layout,
    theme: Theme<D::Color>,
}

impl<D: DrawTarget> Visualizer<D> {
    pub fn new(target: D, layout: Layout, theme: Theme<D::Color>) -> Self {
        Self {
            target,
            layout,
            theme,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn theme(&self) -> &Theme<D::Color> {
        &self.theme
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    /// Peak-to-peak voltage line.
    pub fn draw_calibration(&mut self, reading: &CalibrationReading) -> Result<(), D::Error> {
        let text = format_readout(
            CALIBRATION_LABEL,
            reading.millivolts,
            self.layout.readout_width,
        );
        draw_readout(
            &mut self.target,
            &text,
            self.layout.calibration_origin,
            self.layout.font,
            self.theme.calibration_text,
            self.theme.calibration_background,
        )
    }

    /// Peak frequency line.
    pub fn draw_frequency(&mut self, peak: &PeakResult) -> Result<(), D::Error> {
        let text = format_readout(
            FREQUENCY_LABEL,
            peak.frequency_hz,
            self.layout.readout_width,
        );
        draw_readout(
            &mut self.target,
            &text,
            self.layout.frequency_origin,
            self.layout.font,
            self.theme.frequency_text,
            self.theme.frequency_background,
        )
    }

    /// One bar per bin, scaled against `peak_magnitude`.
    ///
    /// Bars that fall outside the target's bounding box are skipped.
    pub fn draw_bars(&mut self, bins: &[f32], peak_magnitude: f32) -> Result<(), D::Error> {
        let bounds = self.target.bounding_box();
        let left = bounds.top_left.x;
        let right = left + bounds.size.width as i32;

        for (bin, &magnitude) in bins.iter().enumerate() {
            let x = self.layout.bar_x(bin);
            if x < left || x >= right {
                continue;
            }

            let bar = Bar {
                x,
                baseline_y: self.layout.baseline_y,
                max_height: self.layout.max_bar_height,
            };
            let height = bar_height(magnitude, peak_magnitude, bar.max_height);
            bar.draw(
                &mut self.target,
                height,
                self.theme.bar,
                self.theme.bar_background,
            )?;
        }

        #[cfg(feature = "logging")]
        trace!("bars drawn for x in {}..{}", left, right);

        Ok(())
    }
}

impl<D: DrawTarget, const N: usize> SpectrumDisplay<N> for Visualizer<D> {
    type Error = D::Error;

    fn show_calibration(&mut self, reading: &CalibrationReading) -> Result<(), Self::Error> {
        self.draw_calibration(reading)
    }

    fn show_spectrum(
        &mut self,
        peak: &PeakResult,
        spectrum: &MagnitudeSpectrum<N>,
    ) -> Result<(), Self::Error> {
        self.draw_frequency(peak)?;
        self.draw_bars(spectrum.bins(), peak.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        mock_display::MockDisplay,
        mono_font::ascii::FONT_6X10,
        pixelcolor::{raw::RawU16, Rgb565},
        primitives::Rectangle,
    };

    const BAR: Rgb565 = Rgb565::new(2, 17, 20);
    const EMPTY: Rgb565 = Rgb565::WHITE;

    fn small_layout() -> Layout {
        Layout {
            bars_origin_x: 2,
            bar_spacing: 2,
            baseline_y: 60,
            max_bar_height: 20,
            calibration_origin: Point::new(0, 0),
            frequency_origin: Point::new(0, 10),
            font: &FONT_6X10,
            readout_width: 12,
        }
    }

    fn theme() -> Theme<Rgb565> {
        Theme {
            bar: BAR,
            bar_background: EMPTY,
            ..Theme::default()
        }
    }

    fn visualizer() -> Visualizer<MockDisplay<Rgb565>> {
        Visualizer::new(MockDisplay::new(), small_layout(), theme())
    }

    fn column(display: &MockDisplay<Rgb565>, x: i32, from_y: i32, to_y: i32) -> usize {
        (from_y..=to_y)
            .filter(|&y| display.get_pixel(Point::new(x, y)) == Some(BAR))
            .count()
    }

    #[test]
    fn test_default_theme_palette() {
        let theme = Theme::<Rgb565>::default();
        assert_eq!(theme.bar, Rgb565::from(RawU16::new(0x1234)));
        assert_eq!(theme.bar_background, Rgb565::WHITE);
        assert_eq!(theme.calibration_text, Rgb565::BLACK);
        assert_eq!(theme.calibration_background, Rgb565::from(RawU16::new(0x051F)));
        assert_eq!(theme.frequency_background, Rgb565::from(RawU16::new(0xB723)));
    }

    #[test]
    fn test_bars_scale_against_peak() {
        let mut viz = visualizer();
        let mut bins = [0.0f32; 8];
        bins[1] = 100.0;
        bins[2] = 50.0;
        bins[3] = 25.0;

        viz.draw_bars(&bins, 100.0).unwrap();
        let display = viz.target();

        // bin 1 at x = 4, full height
        assert_eq!(column(display, 4, 41, 60), 20);
        // bin 2 at x = 6, half height from the baseline up
        assert_eq!(column(display, 6, 51, 60), 10);
        assert_eq!(column(display, 6, 41, 50), 0);
        assert_eq!(display.get_pixel(Point::new(6, 50)), Some(EMPTY));
        // bin 3 at x = 8
        assert_eq!(column(display, 8, 41, 60), 5);
        // bin 0 is empty but still painted
        assert_eq!(column(display, 2, 41, 60), 0);
        assert_eq!(display.get_pixel(Point::new(2, 41)), Some(EMPTY));
        // nothing above the bar area
        assert_eq!(display.get_pixel(Point::new(4, 40)), None);
        assert_eq!(display.get_pixel(Point::new(3, 60)), None);
    }

    #[test]
    fn test_silent_spectrum_draws_empty_bars() {
        let mut viz = visualizer();
        viz.draw_bars(&[0.0; 4], 0.0).unwrap();

        for bin in 0..4 {
            let x = viz.layout().bar_x(bin);
            assert_eq!(column(viz.target(), x, 41, 60), 0);
            assert_eq!(viz.target().get_pixel(Point::new(x, 60)), Some(EMPTY));
        }
    }

    #[test]
    fn test_bars_past_the_right_edge_are_skipped() {
        let mut viz = visualizer();
        let bins = [1.0f32; 64];

        // bars for bins 31.. would land at x >= 64
        viz.draw_bars(&bins, 1.0).unwrap();

        assert_eq!(column(viz.target(), 62, 41, 60), 20);
        assert_eq!(viz.target().get_pixel(Point::new(63, 60)), None);
        assert_eq!(
            viz.target().affected_area(),
            Rectangle::with_corners(Point::new(2, 41), Point::new(62, 60))
        );
    }

    #[test]
    fn test_shrinking_bar_erases_previous_frame() {
        let mut viz = visualizer();
        viz.target_mut().set_allow_overdraw(true);

        viz.draw_bars(&[0.0, 80.0], 80.0).unwrap();
        assert_eq!(column(viz.target(), 4, 41, 60), 20);

        viz.draw_bars(&[0.0, 20.0], 80.0).unwrap();
        assert_eq!(column(viz.target(), 4, 41, 60), 5);
        for y in 41..56 {
            assert_eq!(viz.target().get_pixel(Point::new(4, y)), Some(EMPTY));
        }
    }

    #[test]
    fn test_show_calibration_only_touches_its_line() {
        let mut viz = visualizer();
        viz.target_mut().set_allow_out_of_bounds_drawing(true);
        let reading = CalibrationReading {
            peak_to_peak: 1000,
            millivolts: 805.7,
            level: 3000,
        };

        SpectrumDisplay::<8>::show_calibration(&mut viz, &reading).unwrap();

        // "Voltage Pk-Pk (mV) = 805.7" is wider than the 64 px mock
        assert_eq!(
            viz.target().affected_area(),
            Rectangle::new(Point::new(0, 0), Size::new(64, 10))
        );
    }

    #[test]
    fn test_show_spectrum_draws_frequency_and_bars() {
        let mut viz = visualizer();
        viz.target_mut().set_allow_out_of_bounds_drawing(true);
        let mut bins = [0.0f32; 8];
        bins[3] = 40.0;
        let spectrum = MagnitudeSpectrum::from_bins(bins);
        let peak = PeakResult {
            bin_index: 3,
            magnitude: 40.0,
            frequency_hz: 133.2,
        };

        viz.show_spectrum(&peak, &spectrum).unwrap();
        let display = viz.into_inner();

        assert!(display.get_pixel(Point::new(0, 10)).is_some());
        assert!(display.get_pixel(Point::new(0, 19)).is_some());
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(column(&display, 8, 41, 60), 20);
        assert_eq!(column(&display, 6, 41, 60), 0);
    }
}
