use std::sync::Arc;

use vello_cpu::kurbo::{Affine, Circle, Point, Rect, RoundedRect, Shape, Stroke};

use crate::{
    foundation::core::{CanvasSize, PixelRect, Rgba8},
    foundation::error::{CardError, CardResult, RenderStage},
    typography::engine::ShapedText,
};

const PATH_TOLERANCE: f64 = 0.1;

/// Vector drawing surface for one card, backed by a `vello_cpu` render context.
pub struct Painter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl std::fmt::Debug for Painter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Painter")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

fn color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rounded_path(rect: Rect, radius: f64) -> vello_cpu::kurbo::BezPath {
    RoundedRect::from_rect(rect, radius.max(0.0)).to_path(PATH_TOLERANCE)
}

impl Painter {
    pub fn new(size: CanvasSize) -> CardResult<Self> {
        let width: u16 = size.width.try_into().map_err(|_| {
            CardError::render_msg(RenderStage::Rasterize, "canvas width exceeds u16")
        })?;
        let height: u16 = size.height.try_into().map_err(|_| {
            CardError::render_msg(RenderStage::Rasterize, "canvas height exceeds u16")
        })?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
        })
    }

    fn reset_transforms(&mut self) {
        self.ctx.set_transform(Affine::IDENTITY);
        self.ctx.set_paint_transform(Affine::IDENTITY);
    }

    /// Paint `image` with its top-left at `at`, clipped to a rounded rectangle.
    pub fn image(&mut self, image: &vello_cpu::Image, at: PixelRect, radius: u32) {
        self.reset_transforms();
        self.ctx
            .set_transform(Affine::translate((f64::from(at.x), f64::from(at.y))));
        self.ctx.set_paint(image.clone());
        let local = Rect::new(0.0, 0.0, f64::from(at.width), f64::from(at.height));
        if radius == 0 {
            self.ctx.fill_rect(&local);
        } else {
            self.ctx.fill_path(&rounded_path(local, f64::from(radius)));
        }
        self.reset_transforms();
    }

    pub fn fill_rect(&mut self, rect: PixelRect, c: Rgba8) {
        self.reset_transforms();
        self.ctx.set_paint(color(c));
        self.ctx.fill_rect(&rect.to_kurbo());
    }

    pub fn fill_rects(&mut self, rects: &[PixelRect], c: Rgba8) {
        self.reset_transforms();
        self.ctx.set_paint(color(c));
        for r in rects {
            self.ctx.fill_rect(&r.to_kurbo());
        }
    }

    pub fn fill_rounded_rect(&mut self, rect: PixelRect, radius: u32, c: Rgba8) {
        self.reset_transforms();
        self.ctx.set_paint(color(c));
        self.ctx
            .fill_path(&rounded_path(rect.to_kurbo(), f64::from(radius)));
    }

    /// Stroke a rounded rectangle so the stroke lies entirely inside `outer`.
    pub fn stroke_rounded_rect_inside(&mut self, outer: PixelRect, radius: u32, width: u32, c: Rgba8) {
        if width == 0 {
            return;
        }
        self.reset_transforms();
        let half = f64::from(width) / 2.0;
        let rect = outer.to_kurbo().inset(-half);
        self.ctx.set_paint(color(c));
        self.ctx.set_stroke(Stroke::new(f64::from(width)));
        self.ctx
            .stroke_path(&rounded_path(rect, f64::from(radius) - half));
    }

    pub fn fill_circle(&mut self, center: (i32, i32), radius: u32, c: Rgba8) {
        self.reset_transforms();
        self.ctx.set_paint(color(c));
        let circle = Circle::new(
            Point::new(f64::from(center.0), f64::from(center.1)),
            f64::from(radius),
        );
        self.ctx.fill_path(&circle.to_path(PATH_TOLERANCE));
    }

    pub fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, c: Rgba8) {
        self.reset_transforms();
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(from);
        path.line_to(to);
        self.ctx.set_paint(color(c));
        self.ctx.set_stroke(Stroke::new(width));
        self.ctx.stroke_path(&path);
    }

    /// Fill shaped glyphs with the text block's top-left corner at `origin`.
    pub fn glyphs(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        size_px: f32,
        shaped: &ShapedText,
        origin: (i32, i32),
        c: Rgba8,
    ) {
        if shaped.glyphs.is_empty() {
            return;
        }
        self.reset_transforms();
        self.ctx.set_transform(Affine::translate((
            f64::from(origin.0),
            f64::from(origin.1),
        )));
        self.ctx.set_paint(color(c));
        let glyphs = shaped.glyphs.iter().map(|g| vello_cpu::Glyph {
            id: g.id,
            x: g.x,
            y: g.y,
        });
        self.ctx.glyph_run(font).font_size(size_px).fill_glyphs(glyphs);
        self.reset_transforms();
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8 bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

/// Image paint from premultiplied RGBA8 bytes.
pub fn image_paint(rgba8_premul: &[u8], width: u32, height: u32) -> CardResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::render_msg(RenderStage::Rasterize, "image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::render_msg(RenderStage::Rasterize, "image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CardError::render_msg(
            RenderStage::Rasterize,
            "image byte length mismatch",
        ));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

pub fn rgb_image_paint(img: &image::RgbImage) -> CardResult<vello_cpu::Image> {
    let premul = crate::render::composite::rgb_to_premul(img);
    image_paint(&premul, img.width(), img.height())
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
