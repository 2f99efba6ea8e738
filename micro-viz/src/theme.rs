use embedded_graphics::{
    pixelcolor::{raw::RawU16, Rgb565},
    prelude::*,
};

/// Colours for every element the visualizer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme<C> {
    pub bar: C,
    /// Paints the unfilled part of each bar column.
    pub bar_background: C,
    pub calibration_text: C,
    pub calibration_background: C,
    pub frequency_text: C,
    pub frequency_background: C,
}

impl Default for Theme<Rgb565> {
    /// ILI9341 palette: dark bars on white, black text on blue and green.
    fn default() -> Self {
        Self {
            bar: Rgb565::from(RawU16::new(0x1234)),
            bar_background: Rgb565::WHITE,
            calibration_text: Rgb565::BLACK,
            calibration_background: Rgb565::from(RawU16::new(0x051F)),
            frequency_text: Rgb565::BLACK,
            frequency_background: Rgb565::from(RawU16::new(0xB723)),
        }
    }
}
