use std::borrow::Cow;

use crate::foundation::error::{CardError, CardResult};

/// Glyph placed relative to the top-left corner of its text layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Shaped single-paragraph text, ready to be painted.
#[derive(Clone, Debug, Default)]
pub struct ShapedText {
    pub glyphs: Vec<PlacedGlyph>,
    pub width: f32,
    pub height: f32,
}

/// Stateful helper for measuring and shaping text with Parley from raw font bytes.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEngine").finish_non_exhaustive()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and return the family name they expose.
    ///
    /// Returns `None` when the bytes do not parse as a font with a named family.
    pub fn register(&mut self, font_bytes: &[u8]) -> Option<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let (family_id, _) = families.first()?;
        let name = self.font_ctx.collection.family_name(*family_id)?;
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    fn layout(&mut self, text: &str, family: &str, size_px: f32) -> CardResult<parley::Layout<()>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CardError::config("text size_px must be finite and > 0"));
        }
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Single(parley::style::FontFamily::Named(Cow::Owned(
                family.to_string(),
            ))),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Advance width of `text` laid out on one line.
    pub fn measure(&mut self, text: &str, family: &str, size_px: f32) -> CardResult<f32> {
        Ok(self.layout(text, family, size_px)?.width())
    }

    /// Height of one laid-out line of the face at `size_px`.
    pub fn line_height(&mut self, family: &str, size_px: f32) -> CardResult<f32> {
        Ok(self.layout("Ag", family, size_px)?.height())
    }

    pub fn shape(&mut self, text: &str, family: &str, size_px: f32) -> CardResult<ShapedText> {
        let layout = self.layout(text, family, size_px)?;
        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let mut x = run.offset();
                let baseline = run.baseline();
                for g in run.glyphs() {
                    glyphs.push(PlacedGlyph {
                        id: g.id,
                        x: x + g.x,
                        y: baseline - g.y,
                    });
                    x += g.advance;
                }
            }
        }
        Ok(ShapedText {
            glyphs,
            width: layout.width(),
            height: layout.height(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typography/engine.rs"]
mod tests;
