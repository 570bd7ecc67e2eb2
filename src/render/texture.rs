//! Procedural translucent overlays drawn over the card background.

use crate::{
    foundation::core::{CanvasSize, PixelRect, Rgba8},
    foundation::error::CardResult,
    foundation::math::Rng64,
    render::{composite, paint::Painter},
    style::registry::TexturePattern,
};

/// One translucent mark of a texture overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextureMark {
    Dot {
        center: (i32, i32),
        radius: u32,
        color: Rgba8,
    },
    Segment {
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Rgba8,
    },
    Square {
        rect: PixelRect,
        color: Rgba8,
    },
}

const STAR: Rgba8 = Rgba8::new(255, 255, 255, 30);
const BOLT: Rgba8 = Rgba8::new(255, 255, 255, 40);
const FLECK: Rgba8 = Rgba8::new(255, 100, 0, 25);
const TILE: Rgba8 = Rgba8::new(255, 255, 255, 20);

/// Seed derived from the wall clock, for callers that did not pin one.
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Marks for `pattern` scattered over `size`, fully determined by `seed`.
pub fn scatter(pattern: TexturePattern, size: CanvasSize, seed: u64) -> Vec<TextureMark> {
    let mut rng = Rng64::new(seed);
    let (w, h) = (size.width as i32, size.height as i32);
    let point = |rng: &mut Rng64| (rng.range_i32(0, w), rng.range_i32(0, h));

    match pattern {
        TexturePattern::None => Vec::new(),
        TexturePattern::Stars => (0..20)
            .map(|_| {
                let center = point(&mut rng);
                TextureMark::Dot {
                    center,
                    radius: rng.range_i32(1, 3) as u32,
                    color: STAR,
                }
            })
            .collect(),
        TexturePattern::Lightning => (0..10)
            .map(|_| {
                let from = point(&mut rng);
                let to = (
                    from.0 + rng.range_i32(-20, 20),
                    from.1 + rng.range_i32(10, 30),
                );
                TextureMark::Segment {
                    from,
                    to,
                    width: 2,
                    color: BOLT,
                }
            })
            .collect(),
        TexturePattern::Flame => (0..15)
            .map(|_| {
                let center = point(&mut rng);
                TextureMark::Dot {
                    center,
                    radius: rng.range_i32(2, 5) as u32,
                    color: FLECK,
                }
            })
            .collect(),
        TexturePattern::Geometric => (0..25)
            .map(|_| {
                let (x, y) = point(&mut rng);
                let s = rng.range_i32(1, 2);
                TextureMark::Square {
                    rect: PixelRect::new(x - s, y - s, (2 * s + 1) as u32, (2 * s + 1) as u32),
                    color: TILE,
                }
            })
            .collect(),
    }
}

/// Rasterize marks onto a transparent canvas as premultiplied RGBA8.
pub fn texture_overlay(size: CanvasSize, marks: &[TextureMark]) -> CardResult<Vec<u8>> {
    let mut painter = Painter::new(size)?;
    for mark in marks {
        match *mark {
            TextureMark::Dot {
                center,
                radius,
                color,
            } => painter.fill_circle(center, radius, color),
            TextureMark::Segment {
                from,
                to,
                width,
                color,
            } => painter.stroke_line(
                (f64::from(from.0), f64::from(from.1)),
                (f64::from(to.0), f64::from(to.1)),
                f64::from(width),
                color,
            ),
            TextureMark::Square { rect, color } => painter.fill_rect(rect, color),
        }
    }
    Ok(painter.finish())
}

/// Composite the seeded `pattern` over an opaque background in place.
pub fn apply_texture(
    background: &mut image::RgbImage,
    pattern: TexturePattern,
    seed: u64,
) -> CardResult<usize> {
    let size = CanvasSize {
        width: background.width(),
        height: background.height(),
    };
    let marks = scatter(pattern, size, seed);
    tracing::debug!(?pattern, seed, marks = marks.len(), "texture overlay");
    if marks.is_empty() {
        return Ok(0);
    }
    let overlay = texture_overlay(size, &marks)?;
    let mut base = composite::rgb_to_premul(background);
    composite::over_in_place(&mut base, &overlay, 1.0)?;
    *background = composite::flatten_to_rgb(&base, size.width, size.height)?;
    Ok(marks.len())
}

#[cfg(test)]
#[path = "../../tests/unit/render/texture.rs"]
mod tests;
