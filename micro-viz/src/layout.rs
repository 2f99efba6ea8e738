use embedded_graphics::{
    geometry::Point,
    mono_font::{ascii::FONT_10X20, MonoFont},
};

/// Fixed screen positions, in pixels.
#[derive(Clone, Copy)]
pub struct Layout {
    /// x of the bar for bin 0.
    pub bars_origin_x: i32,
    /// Horizontal distance between neighbouring bars.
    pub bar_spacing: u32,
    /// Bottom row of every bar.
    pub baseline_y: i32,
    pub max_bar_height: u16,
    /// Top-left corner of the peak-to-peak voltage readout.
    pub calibration_origin: Point,
    /// Top-left corner of the peak frequency readout.
    pub frequency_origin: Point,
    pub font: &'static MonoFont<'static>,
    /// Readouts are space-padded to this many characters.
    pub readout_width: usize,
}

impl Layout {
    /// 320x240 panel in landscape.
    pub const LANDSCAPE_320X240: Layout = Layout {
        bars_origin_x: 30,
        bar_spacing: 2,
        baseline_y: 220,
        max_bar_height: 120,
        calibration_origin: Point::new(10, 10),
        frequency_origin: Point::new(10, 30),
        font: &FONT_10X20,
        readout_width: 28,
    };

    /// x position of the bar for `bin`.
    pub fn bar_x(&self, bin: usize) -> i32 {
        self.bars_origin_x + (self.bar_spacing as usize * bin) as i32
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::LANDSCAPE_320X240
    }
}
