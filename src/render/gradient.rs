use crate::foundation::core::Rgb8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// Varies per row, `color1` on the top row.
    Vertical,
    /// Varies per column, `color1` on the left column.
    Horizontal,
}

/// Channel value at `pos` of `extent`, truncated toward `c1`.
fn lerp_channel(c1: u8, c2: u8, pos: u32, extent: u32) -> u8 {
    let delta = i64::from(c2) - i64::from(c1);
    let step = (delta * i64::from(pos)).div_euclid(i64::from(extent.max(1)));
    (i64::from(c1) + step).clamp(0, 255) as u8
}

/// Color at `pos` along an axis of `extent` pixels.
pub fn gradient_color(c1: Rgb8, c2: Rgb8, pos: u32, extent: u32) -> Rgb8 {
    Rgb8::new(
        lerp_channel(c1.r, c2.r, pos, extent),
        lerp_channel(c1.g, c2.g, pos, extent),
        lerp_channel(c1.b, c2.b, pos, extent),
    )
}

/// Two-color linear gradient raster.
pub fn linear_gradient(
    width: u32,
    height: u32,
    color1: Rgb8,
    color2: Rgb8,
    direction: GradientDirection,
) -> image::RgbImage {
    match direction {
        GradientDirection::Vertical => {
            let rows: Vec<[u8; 3]> = (0..height)
                .map(|y| gradient_color(color1, color2, y, height).to_array())
                .collect();
            image::RgbImage::from_fn(width, height, |_, y| image::Rgb(rows[y as usize]))
        }
        GradientDirection::Horizontal => {
            let cols: Vec<[u8; 3]> = (0..width)
                .map(|x| gradient_color(color1, color2, x, width).to_array())
                .collect();
            image::RgbImage::from_fn(width, height, |x, _| image::Rgb(cols[x as usize]))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
