use embedded_graphics::{
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};
#[allow(unused_imports)]
use micromath::F32Ext;

/// Pixel height of a bar showing `magnitude` against `peak_magnitude`.
///
/// Never exceeds `max_height`. A non-positive or non-finite peak (silence)
/// gives zero-height bars.
pub fn bar_height(magnitude: f32, peak_magnitude: f32, max_height: u16) -> u16 {
    if peak_magnitude <= 0.0 || !peak_magnitude.is_finite() {
        return 0;
    }
    let scaled = (magnitude / peak_magnitude * max_height as f32).round();
    scaled.clamp(0.0, max_height as f32) as u16
}

/// One vertical bar column, `max_height` pixels tall, ending at `baseline_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub x: i32,
    pub baseline_y: i32,
    pub max_height: u16,
}

impl Bar {
    /// Draws the bottom `height` pixels in `fill` and paints the rest of the
    /// column in `background`, so a bar that shrank since the last frame
    /// leaves nothing behind.
    pub fn draw<D>(
        &self,
        target: &mut D,
        height: u16,
        fill: D::Color,
        background: D::Color,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget,
    {
        let max = self.max_height as i32;
        let height = height.min(self.max_height) as i32;
        if max == 0 {
            return Ok(());
        }

        if height > 0 {
            Line::new(
                Point::new(self.x, self.baseline_y),
                Point::new(self.x, self.baseline_y - height + 1),
            )
            .into_styled(PrimitiveStyle::with_stroke(fill, 1))
            .draw(target)?;
        }
        if height < max {
            Line::new(
                Point::new(self.x, self.baseline_y - height),
                Point::new(self.x, self.baseline_y - max + 1),
            )
            .into_styled(PrimitiveStyle::with_stroke(background, 1))
            .draw(target)?;
        }
        Ok(())
    }
}
