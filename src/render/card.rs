//! Card orchestration: style lookup, background, regions, and final raster.

use std::path::Path;

use crate::{
    assets::decode::{self, Photo},
    config::RenderConfig,
    content::record::ContentRecord,
    foundation::core::{PixelRect, Rgb8, Rgba8},
    foundation::error::{CardError, CardResult, RenderStage},
    render::{
        composite,
        fit::{FittedText, fit_to_box},
        gradient::{GradientDirection, linear_gradient},
        layout::{self, CardLayout, GlowColor},
        paint::{Painter, rgb_image_paint},
        texture,
    },
    style::registry::{Category, FontRole, Palette, Style, validate_tables},
    typography::{
        builtin,
        loader::{Font, FontFace, FontTier, TypographyLoader},
    },
};

const SHADOW: Rgba8 = Rgba8::new(0, 0, 0, 100);

/// What a render resolved, for diagnostics and tests. Never alters the output.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    pub category: Category,
    pub badge_text: String,
    pub title_tier: FontTier,
    pub text_tier: FontTier,
    pub ability_lines: Vec<String>,
    pub ability_truncated: bool,
    pub texture_seed: u64,
    /// Size the photo was resampled to inside its frame.
    pub photo_size: (u32, u32),
}

/// Final opaque card raster plus its render report.
#[derive(Clone, Debug)]
pub struct RenderedCard {
    pub image: image::RgbImage,
    pub report: RenderReport,
}

impl RenderedCard {
    pub fn to_png_bytes(&self) -> CardResult<Vec<u8>> {
        decode::encode_png(&self.image)
    }

    /// Encode and write atomically; on failure nothing is left at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> CardResult<()> {
        let bytes = self.to_png_bytes()?;
        decode::write_atomic(path.as_ref(), &bytes)
    }
}

/// Renders cards. Holds only immutable configuration, so one renderer may serve
/// concurrent calls; each call owns its canvas and font handles.
#[derive(Clone, Debug)]
pub struct CardRenderer {
    config: RenderConfig,
    layout: CardLayout,
}

impl CardRenderer {
    pub fn new(config: RenderConfig) -> CardResult<Self> {
        config.validate()?;
        validate_tables()?;
        let layout = CardLayout::card();
        layout.validate()?;
        Ok(Self { config, layout })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    /// Render `record` over `photo` using fonts from the configured directories.
    #[tracing::instrument(
        skip_all,
        fields(card = %record.name(), type_label = %record.type_label())
    )]
    pub fn render(&self, record: &ContentRecord, photo: &Photo) -> CardResult<RenderedCard> {
        let mut loader = TypographyLoader::from_config(&self.config);
        self.render_with_loader(record, photo, &mut loader)
    }

    /// Render with a caller-supplied font loader.
    pub fn render_with_loader(
        &self,
        record: &ContentRecord,
        photo: &Photo,
        loader: &mut TypographyLoader,
    ) -> CardResult<RenderedCard> {
        let style = Style::for_label(record.type_label());
        let palette = style.palette;
        let category = style.category;
        let canvas = self.layout.canvas;
        let seed = self.config.texture_seed.unwrap_or_else(texture::clock_seed);

        let mut background = linear_gradient(
            canvas.width,
            canvas.height,
            palette.background,
            palette.secondary,
            GradientDirection::Vertical,
        );
        texture::apply_texture(&mut background, style.texture, seed)
            .map_err(in_stage(RenderStage::Texture))?;

        let mut painter = Painter::new(canvas)?;
        let full = PixelRect::new(0, 0, canvas.width, canvas.height);
        let bg_paint = rgb_image_paint(&background).map_err(in_stage(RenderStage::Background))?;
        painter.image(&bg_paint, full, 0);

        self.draw_glow(&mut painter, &palette);

        let title_font = loader.font_for(FontRole::Title, category);
        self.draw_header(&mut painter, loader, &palette, &title_font, record.name())
            .map_err(in_stage(RenderStage::Header))?;

        let badge_text = record.type_label().as_str().to_string();
        self.draw_badge(&mut painter, loader, &palette, category, &badge_text)
            .map_err(in_stage(RenderStage::Badge))?;

        let photo_size = self
            .draw_photo(&mut painter, &palette, photo)
            .map_err(in_stage(RenderStage::Photo))?;

        let stat_font = loader.font_for(FontRole::Stat, category);
        self.draw_stats(&mut painter, loader, &palette, &stat_font, record)
            .map_err(in_stage(RenderStage::Stats))?;

        let text_font = loader.font_for(FontRole::Text, category);
        let fitted = self
            .draw_ability(&mut painter, loader, &palette, &text_font, record.description())
            .map_err(in_stage(RenderStage::Ability))?;

        let premul = painter.finish();
        let image = composite::flatten_to_rgb(&premul, canvas.width, canvas.height)?;

        tracing::debug!(
            %category,
            title_tier = %title_font.tier,
            text_tier = %text_font.tier,
            ability_lines = fitted.lines.len(),
            truncated = fitted.truncated,
            "card rendered"
        );

        Ok(RenderedCard {
            image,
            report: RenderReport {
                category,
                badge_text,
                title_tier: title_font.tier,
                text_tier: text_font.tier,
                ability_lines: fitted.lines,
                ability_truncated: fitted.truncated,
                texture_seed: seed,
                photo_size,
            },
        })
    }

    /// Open the photo, render, and save. The photo is decoded before anything is written.
    pub fn render_file(
        &self,
        record: &ContentRecord,
        photo_path: impl AsRef<Path>,
        out_path: impl AsRef<Path>,
    ) -> CardResult<RenderReport> {
        let photo = Photo::open(photo_path)?;
        let card = self.render(record, &photo)?;
        card.save_png(out_path)?;
        Ok(card.report)
    }

    fn draw_glow(&self, painter: &mut Painter, palette: &Palette) {
        for ring in &self.layout.glow {
            let c = match ring.color {
                GlowColor::Accent => palette.accent,
                GlowColor::Primary => palette.primary,
            };
            painter.stroke_rounded_rect_inside(ring.outer, ring.radius, ring.width, c.opaque());
        }
    }

    fn draw_header(
        &self,
        painter: &mut Painter,
        loader: &mut TypographyLoader,
        palette: &Palette,
        font: &Font,
        name: &str,
    ) -> CardResult<()> {
        gradient_panel(
            painter,
            self.layout.header,
            layout::HEADER_RADIUS,
            palette.primary,
            palette.secondary,
        )?;
        let (x, y) = self.layout.title_origin;
        let (dx, dy) = layout::TITLE_SHADOW_OFFSET;
        let limit = self.layout.header.right() - layout::BADGE_RIGHT_INSET as i32;
        let title = clip_to_width(loader, font, name, (limit - x - dx.max(0)).max(0) as f32);
        draw_text(painter, loader, font, &title, (x + dx, y + dy), SHADOW)?;
        draw_text(painter, loader, font, &title, (x, y), palette.text.opaque())
    }

    fn draw_badge(
        &self,
        painter: &mut Painter,
        loader: &mut TypographyLoader,
        palette: &Palette,
        category: Category,
        label: &str,
    ) -> CardResult<()> {
        let font = loader.badge_font(category, self.config.badge_font_size);
        let text_w = loader.text_width(&font, label).ceil().max(0.0) as u32;
        let ink_h = ink_height(loader, &font).ceil().max(0.0) as u32;
        let badge = self.layout.badge_rect(text_w, ink_h);
        painter.fill_rounded_rect(badge, layout::BADGE_RADIUS, palette.accent.opaque());
        let x = badge.x + layout::BADGE_TEXT_INSET.0 as i32;
        let y = badge.y + (badge.height as i32 - ink_h as i32) / 2;
        draw_text(
            painter,
            loader,
            &font,
            label,
            (x, y),
            palette.background.opaque(),
        )
    }

    fn draw_photo(
        &self,
        painter: &mut Painter,
        palette: &Palette,
        photo: &Photo,
    ) -> CardResult<(u32, u32)> {
        let frame = self.layout.image_frame;
        let inner = self.layout.image_inner;
        painter.stroke_rounded_rect_inside(
            frame,
            layout::FRAME_RADIUS,
            layout::FRAME_STROKE,
            palette.accent.opaque(),
        );
        painter.stroke_rounded_rect_inside(
            inner,
            layout::INNER_RADIUS,
            layout::INNER_STROKE,
            palette.primary.opaque(),
        );

        let size = layout::contain_fit(photo.dimensions(), (inner.width, inner.height));
        let resized = decode::resample(photo.image(), size.0, size.1);
        let placed = layout::center_in(inner, size);
        let paint = rgb_image_paint(&resized)?;
        painter.image(&paint, placed, layout::PHOTO_RADIUS);
        Ok(size)
    }

    fn draw_stats(
        &self,
        painter: &mut Painter,
        loader: &mut TypographyLoader,
        palette: &Palette,
        font: &Font,
        record: &ContentRecord,
    ) -> CardResult<()> {
        gradient_panel(
            painter,
            self.layout.stats,
            layout::STATS_RADIUS,
            palette.primary,
            palette.secondary,
        )?;
        for (cell, stat) in self.layout.stat_cells.iter().zip([record.stat1(), record.stat2()]) {
            let (cx, cy) = cell.circle_center;
            painter.fill_circle(cell.circle_center, cell.circle_radius, palette.accent.opaque());

            let label_w = loader.text_width(font, &stat.name) as i32;
            draw_text(
                painter,
                loader,
                font,
                &stat.name,
                (cx - label_w / 2, cell.label_y),
                palette.text.opaque(),
            )?;

            let value = stat.value.to_string();
            let value_w = loader.text_width(font, &value) as i32;
            let value_h = ink_height(loader, font) as i32;
            draw_text(
                painter,
                loader,
                font,
                &value,
                (cx - value_w / 2, cy - value_h / 2),
                palette.background.opaque(),
            )?;
        }
        Ok(())
    }

    fn draw_ability(
        &self,
        painter: &mut Painter,
        loader: &mut TypographyLoader,
        palette: &Palette,
        font: &Font,
        description: &str,
    ) -> CardResult<FittedText> {
        gradient_panel(
            painter,
            self.layout.ability,
            layout::ABILITY_RADIUS,
            palette.secondary,
            palette.primary,
        )?;
        let area = self.layout.ability_text;
        let fitted = fit_to_box(
            description,
            &mut loader.measurer(font),
            area.width as f32,
            area.height as f32,
        );
        let line_h = loader.line_height(font);
        for (i, line) in fitted.lines.iter().enumerate() {
            let y = area.y + (i as f32 * line_h).round() as i32;
            draw_text(painter, loader, font, line, (area.x, y), palette.text.opaque())?;
        }
        Ok(fitted)
    }
}

/// Vertical two-color gradient clipped to a rounded rectangle.
fn gradient_panel(
    painter: &mut Painter,
    rect: PixelRect,
    radius: u32,
    top: Rgb8,
    bottom: Rgb8,
) -> CardResult<()> {
    let fill = linear_gradient(rect.width, rect.height, top, bottom, GradientDirection::Vertical);
    let paint = rgb_image_paint(&fill)?;
    painter.image(&paint, rect, radius);
    Ok(())
}

/// Longest prefix of `text` no wider than `max_width_px`.
fn clip_to_width(
    loader: &mut TypographyLoader,
    font: &Font,
    text: &str,
    max_width_px: f32,
) -> String {
    let mut out = text.to_string();
    while !out.is_empty() && loader.text_width(font, &out) > max_width_px {
        out.pop();
    }
    out
}

/// Approximate ink height of a line, used to center text vertically.
fn ink_height(loader: &mut TypographyLoader, font: &Font) -> f32 {
    match font.face {
        FontFace::Builtin => font.builtin_em() as f32,
        FontFace::Outline { .. } => loader.line_height(font).min(font.size_px * 1.2),
    }
}

fn draw_text(
    painter: &mut Painter,
    loader: &mut TypographyLoader,
    font: &Font,
    text: &str,
    origin: (i32, i32),
    color: Rgba8,
) -> CardResult<()> {
    match &font.face {
        FontFace::Builtin => {
            let rects = builtin::coverage_rects(text, origin.0, origin.1, font.builtin_em());
            painter.fill_rects(&rects, color);
        }
        FontFace::Outline { data, .. } => {
            let shaped = loader.shape(font, text)?;
            painter.glyphs(data, font.size_px, &shaped, origin, color);
        }
    }
    Ok(())
}

/// Re-tag a failure with the stage it happened in.
fn in_stage(stage: RenderStage) -> impl FnOnce(CardError) -> CardError {
    move |err| match err {
        CardError::Render { source, .. } => CardError::Render { stage, source },
        other => CardError::render(stage, other),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/card.rs"]
mod tests;
