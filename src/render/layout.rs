//! Card geometry as a pure function of canvas size.
//!
//! Every region is derived from the canvas and the fixed constants below; nothing
//! here depends on content except the badge width, which is passed in measured.

use crate::{
    foundation::core::{CanvasSize, PixelRect},
    foundation::error::{CardError, CardResult},
};

pub const MARGIN: u32 = 20;

pub const HEADER_Y: u32 = 30;
pub const HEADER_HEIGHT: u32 = 80;
pub const HEADER_RADIUS: u32 = 10;
pub const TITLE_INSET: (u32, u32) = (15, 10);
pub const TITLE_SHADOW_OFFSET: (i32, i32) = (2, 2);

pub const BADGE_PADDING: u32 = 20;
pub const BADGE_RIGHT_INSET: u32 = 15;
pub const BADGE_TOP_INSET: u32 = 15;
pub const BADGE_HEIGHT: u32 = 30;
pub const BADGE_RADIUS: u32 = 8;
pub const BADGE_TEXT_INSET: (u32, u32) = (10, 5);

pub const IMAGE_GAP: u32 = 20;
pub const IMAGE_HEIGHT: u32 = 320;
pub const FRAME_STROKE: u32 = 4;
pub const FRAME_RADIUS: u32 = 12;
pub const INNER_INSET: u32 = 8;
pub const INNER_STROKE: u32 = 2;
pub const INNER_RADIUS: u32 = 8;
pub const PHOTO_RADIUS: u32 = 6;

pub const SECTION_GAP: u32 = 25;
pub const STATS_HEIGHT: u32 = 140;
pub const STATS_RADIUS: u32 = 12;
pub const STAT_CIRCLE_RADIUS: u32 = 45;
pub const STAT_LABEL_OFFSET: u32 = 25;

pub const ABILITY_MIN_HEIGHT: u32 = 140;
pub const ABILITY_MAX_HEIGHT: u32 = 180;
pub const ABILITY_RADIUS: u32 = 12;
pub const ABILITY_TEXT_INSET: (u32, u32) = (20, 15);

pub const GLOW_RINGS: u32 = 3;
pub const GLOW_RADIUS: u32 = 15;
pub const GLOW_WIDTH: u32 = 6;

/// Palette slot a glow ring is stroked with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowColor {
    Accent,
    Primary,
}

/// One border-glow stroke. `outer` is the ring's outside edge; the stroke lies inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlowRing {
    pub outer: PixelRect,
    pub radius: u32,
    pub width: u32,
    pub color: GlowColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCell {
    pub cell: PixelRect,
    pub circle_center: (i32, i32),
    pub circle_radius: u32,
    /// Top edge of the label drawn above the circle.
    pub label_y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLayout {
    pub canvas: CanvasSize,
    pub glow: Vec<GlowRing>,
    pub header: PixelRect,
    pub title_origin: (i32, i32),
    pub image_frame: PixelRect,
    pub image_inner: PixelRect,
    pub stats: PixelRect,
    pub stat_cells: [StatCell; 2],
    pub ability: PixelRect,
    pub ability_text: PixelRect,
}

impl CardLayout {
    pub fn compute(canvas: CanvasSize) -> Self {
        let w = canvas.width;
        let panel_w = w.saturating_sub(2 * MARGIN);

        let glow = (0..GLOW_RINGS)
            .map(|i| GlowRing {
                outer: PixelRect::new(
                    i as i32,
                    i as i32,
                    w.saturating_sub(2 * i),
                    canvas.height.saturating_sub(2 * i),
                ),
                radius: GLOW_RADIUS - i,
                width: GLOW_WIDTH - 2 * i,
                color: if i % 2 == 0 {
                    GlowColor::Accent
                } else {
                    GlowColor::Primary
                },
            })
            .collect();

        let header = PixelRect::new(MARGIN as i32, HEADER_Y as i32, panel_w, HEADER_HEIGHT);
        let title_origin = (
            (MARGIN + TITLE_INSET.0) as i32,
            (HEADER_Y + TITLE_INSET.1) as i32,
        );

        let image_y = header.bottom() + IMAGE_GAP as i32;
        let image_frame = PixelRect::new(
            (MARGIN + 10) as i32,
            image_y,
            panel_w.saturating_sub(20),
            IMAGE_HEIGHT,
        );
        let image_inner = image_frame.inset(INNER_INSET);

        let stats_y = image_frame.bottom() + SECTION_GAP as i32;
        let stats = PixelRect::new(MARGIN as i32, stats_y, panel_w, STATS_HEIGHT);
        let cell_w = panel_w.saturating_sub(20) / 2;
        let stat_cell = |i: u32| {
            let x = (MARGIN + 10 + i * cell_w) as i32;
            let cy = stats_y + (STATS_HEIGHT / 2) as i32 + (STAT_LABEL_OFFSET / 2) as i32;
            StatCell {
                cell: PixelRect::new(x, stats_y, cell_w, STATS_HEIGHT),
                circle_center: (x + (cell_w / 2) as i32, cy),
                circle_radius: STAT_CIRCLE_RADIUS,
                label_y: cy - (STAT_CIRCLE_RADIUS + STAT_LABEL_OFFSET) as i32,
            }
        };
        let stat_cells = [stat_cell(0), stat_cell(1)];

        let ability_y = stats.bottom() + SECTION_GAP as i32;
        let room = (canvas.height as i32 - ability_y - MARGIN as i32).max(0) as u32;
        let ability_h = room.min(ABILITY_MAX_HEIGHT);
        let ability = PixelRect::new(MARGIN as i32, ability_y, panel_w, ability_h);
        let ability_text = PixelRect::new(
            (MARGIN + ABILITY_TEXT_INSET.0) as i32,
            ability_y + ABILITY_TEXT_INSET.1 as i32,
            panel_w.saturating_sub(2 * ABILITY_TEXT_INSET.0 + 20),
            ability_h.saturating_sub(2 * ABILITY_TEXT_INSET.1),
        );

        Self {
            canvas,
            glow,
            header,
            title_origin,
            image_frame,
            image_inner,
            stats,
            stat_cells,
            ability,
            ability_text,
        }
    }

    pub fn card() -> Self {
        Self::compute(CanvasSize::CARD)
    }

    /// Badge box for a label of `text_width` x `text_height` pixels, right-aligned in
    /// the header. Grows taller than [`BADGE_HEIGHT`] for tall labels, up to the
    /// header's inset height.
    pub fn badge_rect(&self, text_width: u32, text_height: u32) -> PixelRect {
        let width = text_width + BADGE_PADDING;
        let x = self.canvas.width as i32 - (MARGIN + BADGE_RIGHT_INSET) as i32 - width as i32;
        let max_height = self.header.height.saturating_sub(2 * BADGE_TOP_INSET);
        let height = (text_height + 2 * BADGE_TEXT_INSET.1)
            .max(BADGE_HEIGHT)
            .min(max_height.max(BADGE_HEIGHT));
        PixelRect::new(x, self.header.y + BADGE_TOP_INSET as i32, width, height)
    }

    /// Top-level content regions, in drawing order.
    pub fn regions(&self) -> [(&'static str, PixelRect); 4] {
        [
            ("header", self.header),
            ("image", self.image_frame),
            ("stats", self.stats),
            ("ability", self.ability),
        ]
    }

    /// Check that regions fit the canvas, do not overlap, and the ability box is usable.
    pub fn validate(&self) -> CardResult<()> {
        let canvas = PixelRect::new(0, 0, self.canvas.width, self.canvas.height);
        let regions = self.regions();
        for (i, (name, rect)) in regions.iter().enumerate() {
            if !canvas.contains_rect(*rect) {
                return Err(CardError::config(format!(
                    "{name} region {rect:?} leaves the canvas"
                )));
            }
            if let Some((other, _)) = regions[i + 1..].iter().find(|(_, r)| r.intersects(*rect)) {
                return Err(CardError::config(format!(
                    "{name} region overlaps {other}"
                )));
            }
        }
        if self.ability.height < ABILITY_MIN_HEIGHT {
            return Err(CardError::config(format!(
                "ability region is {}px tall (min {ABILITY_MIN_HEIGHT})",
                self.ability.height
            )));
        }
        Ok(())
    }
}

/// Aspect-preserving size of `src` scaled to fit entirely inside `bounds`.
///
/// At least one dimension equals its bound; neither exceeds it.
pub fn contain_fit(src: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (sw, sh) = (u64::from(src.0.max(1)), u64::from(src.1.max(1)));
    let (bw, bh) = (u64::from(bounds.0), u64::from(bounds.1));
    let (w, h) = if sh * bw > bh * sw {
        (bh * sw / sh, bh)
    } else {
        (bw, bw * sh / sw)
    };
    (w.clamp(1, bw.max(1)) as u32, h.clamp(1, bh.max(1)) as u32)
}

/// Rectangle of `size` centered in `outer`, rounding offsets down.
pub fn center_in(outer: PixelRect, size: (u32, u32)) -> PixelRect {
    PixelRect::new(
        outer.x + (outer.width.saturating_sub(size.0) / 2) as i32,
        outer.y + (outer.height.saturating_sub(size.1) / 2) as i32,
        size.0,
        size.1,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
