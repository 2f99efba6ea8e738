use core::fmt::Write;

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyleBuilder},
    prelude::*,
    text::{Baseline, Text},
};
use heapless::String;

pub const CALIBRATION_LABEL: &str = "Voltage Pk-Pk (mV)";
pub const FREQUENCY_LABEL: &str = "FFT Frequency (Hz)";

/// Longest readout line, in characters.
pub const READOUT_CAPACITY: usize = 48;

pub type Readout = String<READOUT_CAPACITY>;

/// Formats `"<label> = <value>"` with one decimal, right-padded with spaces
/// to `width` characters.
///
/// With either label any `|value| < 1e24` fits, far above the millivolt and
/// frequency ranges shown. Larger values are cut short in release builds and
/// trip a debug assertion otherwise.
pub fn format_readout(label: &str, value: f32, width: usize) -> Readout {
    let mut text = Readout::new();
    let written = write!(text, "{} = {:.1}", label, value);
    debug_assert!(
        written.is_ok(),
        "readout overflow: {} does not fit in {} characters",
        label,
        READOUT_CAPACITY
    );
    while text.len() < width && text.push(' ').is_ok() {}
    text
}

/// Draws one line of text with its top-left corner at `origin`.
///
/// Every glyph cell is painted, background included, so a line drawn over
/// an older one of the same width replaces it.
pub fn draw_readout<D>(
    target: &mut D,
    text: &str,
    origin: Point,
    font: &MonoFont<'_>,
    foreground: D::Color,
    background: D::Color,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let style = MonoTextStyleBuilder::new()
        .font(font)
        .text_color(foreground)
        .background_color(background)
        .build();
    Text::with_baseline(text, origin, style, Baseline::Top).draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        mock_display::MockDisplay, mono_font::ascii::FONT_6X10, pixelcolor::BinaryColor,
        primitives::Rectangle,
    };

    #[test]
    fn test_frequency_readout() {
        let text = format_readout(FREQUENCY_LABEL, 444.0, 0);
        assert_eq!(text.as_str(), "FFT Frequency (Hz) = 444.0");
    }

    #[test]
    fn test_calibration_readout_rounds_to_one_decimal() {
        let text = format_readout(CALIBRATION_LABEL, 1611.328, 0);
        assert_eq!(text.as_str(), "Voltage Pk-Pk (mV) = 1611.3");
    }

    #[test]
    fn test_readout_is_padded() {
        let long = format_readout(FREQUENCY_LABEL, 12_345.6, 28);
        let short = format_readout(FREQUENCY_LABEL, 44.4, 28);

        assert_eq!(long.len(), 28);
        assert_eq!(short.len(), 28);
        assert_eq!(short.as_str(), "FFT Frequency (Hz) = 44.4   ");
    }

    #[test]
    fn test_extreme_readings_fit() {
        let frequency = format_readout(FREQUENCY_LABEL, 45_466.0, 28);
        assert_eq!(frequency.as_str(), "FFT Frequency (Hz) = 45466.0");

        let millivolts = format_readout(CALIBRATION_LABEL, -3300.0, 0);
        assert_eq!(millivolts.as_str(), "Voltage Pk-Pk (mV) = -3300.0");

        let huge = format_readout(FREQUENCY_LABEL, 1.0e23, 0);
        assert!(huge.ends_with(".0"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "readout overflow")]
    fn test_overflow_trips_debug_assertion() {
        format_readout(FREQUENCY_LABEL, f32::MAX, 0);
    }

    #[test]
    fn test_padding_stops_at_capacity() {
        let text = format_readout(FREQUENCY_LABEL, 1.0, 500);
        assert_eq!(text.len(), READOUT_CAPACITY);
    }

    #[test]
    fn test_draw_readout_fills_glyph_cells() {
        let mut display = MockDisplay::new();

        draw_readout(
            &mut display,
            "AB",
            Point::new(3, 4),
            &FONT_6X10,
            BinaryColor::On,
            BinaryColor::Off,
        )
        .unwrap();

        assert_eq!(
            display.affected_area(),
            Rectangle::new(Point::new(3, 4), Size::new(12, 10))
        );
        for point in display.affected_area().points() {
            assert!(display.get_pixel(point).is_some());
        }
    }
}
