use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{CardError, CardResult, RenderStage};

/// Decoded source photo, converted to opaque RGB.
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    image: image::RgbImage,
    path: Option<PathBuf>,
}

impl Photo {
    /// Read and decode a photo from disk.
    pub fn open(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read photo '{}'", path.display()))
            .map_err(|e| CardError::image_load(Some(path.to_path_buf()), e))?;
        let image = decode_rgb(&bytes, Some(path))?;
        Ok(Self {
            image,
            path: Some(path.to_path_buf()),
        })
    }

    /// Decode a photo from encoded bytes in any supported raster format.
    pub fn from_bytes(bytes: &[u8]) -> CardResult<Self> {
        Ok(Self {
            image: decode_rgb(bytes, None)?,
            path: None,
        })
    }

    /// Wrap an already decoded image.
    pub fn from_image(image: image::DynamicImage) -> CardResult<Self> {
        check_dimensions(image.width(), image.height(), None)?;
        Ok(Self {
            image: image.to_rgb8(),
            path: None,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &image::RgbImage {
        &self.image
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn check_dimensions(width: u32, height: u32, path: Option<&Path>) -> CardResult<()> {
    if width == 0 || height == 0 {
        return Err(CardError::image_load(
            path.map(Path::to_path_buf),
            anyhow::anyhow!("photo has zero size ({width}x{height})"),
        ));
    }
    Ok(())
}

pub fn decode_rgb(bytes: &[u8], path: Option<&Path>) -> CardResult<image::RgbImage> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode photo from memory")
        .map_err(|e| CardError::image_load(path.map(Path::to_path_buf), e))?;
    check_dimensions(dyn_img.width(), dyn_img.height(), path)?;
    Ok(dyn_img.to_rgb8())
}

/// High-quality resample to an exact size.
pub fn resample(img: &image::RgbImage, width: u32, height: u32) -> image::RgbImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    image::imageops::resize(img, width, height, image::imageops::FilterType::Lanczos3)
}

pub fn encode_png(img: &image::RgbImage) -> CardResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode card as png")
        .map_err(|e| CardError::render(RenderStage::Encode, e))?;
    Ok(buf)
}

/// Write `bytes` to `path` through a sibling temp file so readers never see a partial file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> CardResult<()> {
    let persist = |e: anyhow::Error| CardError::render(RenderStage::Persist, e);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))
            .map_err(persist)?;
    }
    let file_name = path
        .file_name()
        .ok_or_else(|| persist(anyhow::anyhow!("output path '{}' has no file name", path.display())))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp = path.with_file_name(tmp_name);

    let written = std::fs::write(&tmp, bytes)
        .with_context(|| format!("write '{}'", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, path)
                .with_context(|| format!("rename into '{}'", path.display()))
        });
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(persist(e));
    }
    Ok(())
}
