//! Fixed-point alpha compositing on premultiplied RGBA8 buffers.

use crate::foundation::{
    error::{CardError, CardResult, RenderStage},
    math::mul_div255_u8,
};

pub type PremulRgba8 = [u8; 4];

/// Source-over of one premultiplied pixel, with `src` scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Composite `src` over `dst` pixel by pixel; both are premultiplied RGBA8 of equal length.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> CardResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CardError::render_msg(
            RenderStage::Texture,
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Opaque RGB image as premultiplied RGBA8 bytes (alpha 255, so channels are unchanged).
pub fn rgb_to_premul(img: &image::RgbImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(img.as_raw().len() / 3 * 4);
    for px in img.as_raw().chunks_exact(3) {
        out.extend_from_slice(&[px[0], px[1], px[2], 255]);
    }
    out
}

/// Flatten premultiplied RGBA8 over black into an opaque RGB image.
///
/// Premultiplied channels already are the over-black result, so alpha is dropped.
pub fn flatten_to_rgb(premul: &[u8], width: u32, height: u32) -> CardResult<image::RgbImage> {
    let expected = width as usize * height as usize * 4;
    if premul.len() != expected {
        return Err(CardError::render_msg(
            RenderStage::Rasterize,
            format!(
                "flatten expects {expected} bytes for {width}x{height}, got {}",
                premul.len()
            ),
        ));
    }
    let rgb: Vec<u8> = premul
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    image::RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
        CardError::render_msg(RenderStage::Rasterize, "rgb buffer does not match canvas")
    })
}
