//! Tiered font resolution that always produces a drawable font.
//!
//! Resolution walks an ordered strategy list and stops at the first face that loads:
//! the category face, its alternates, the configured generic face, and finally the
//! built-in bitmap face at an enlarged per-role size.

use std::{collections::HashMap, path::PathBuf};

use crate::{
    config::RenderConfig,
    foundation::error::CardResult,
    style::registry::{Category, FontRole, font_set},
    typography::{
        builtin,
        engine::{ShapedText, TextEngine},
    },
};

/// Supplier of raw font bytes for a resource file name.
pub trait FontSource {
    /// Bytes for `name`, or `None` when the resource is unavailable.
    fn load(&self, name: &str) -> Option<Vec<u8>>;
}

/// Looks font file names up in an ordered list of directories.
#[derive(Clone, Debug, Default)]
pub struct DirFontSource {
    dirs: Vec<PathBuf>,
}

impl DirFontSource {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl FontSource for DirFontSource {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        self.dirs
            .iter()
            .find_map(|dir| std::fs::read(dir.join(name)).ok())
    }
}

/// Which rung of the fallback chain produced a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontTier {
    Category,
    Alternate,
    Generic,
    Builtin,
}

impl FontTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Alternate => "alternate",
            Self::Generic => "generic",
            Self::Builtin => "builtin",
        }
    }
}

impl std::fmt::Display for FontTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub enum FontFace {
    Outline {
        /// Resource file name the face was loaded from.
        resource: String,
        /// Family name registered with the text engine.
        family: String,
        data: vello_cpu::peniko::FontData,
    },
    Builtin,
}

/// A drawable font handle: a face at a concrete pixel size.
#[derive(Clone, Debug)]
pub struct Font {
    pub face: FontFace,
    pub size_px: f32,
    pub role: FontRole,
    pub tier: FontTier,
}

impl Font {
    fn builtin(role: FontRole) -> Self {
        Self {
            face: FontFace::Builtin,
            size_px: role.fallback_size_px(),
            role,
            tier: FontTier::Builtin,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin)
    }

    /// Em of the built-in face at this size, in whole pixels.
    pub fn builtin_em(&self) -> u32 {
        builtin::em_for(self.size_px)
    }
}

#[derive(Clone, Debug)]
struct LoadedFace {
    family: String,
    data: vello_cpu::peniko::FontData,
}

/// Per-render font resolver. Owns the text engine every resolved outline face is
/// registered with, so measurement and shaping go through the same loader.
pub struct TypographyLoader {
    source: Box<dyn FontSource>,
    generic_font: String,
    engine: TextEngine,
    faces: HashMap<String, Option<LoadedFace>>,
}

impl std::fmt::Debug for TypographyLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypographyLoader")
            .field("generic_font", &self.generic_font)
            .field("cached_faces", &self.faces.len())
            .finish_non_exhaustive()
    }
}

impl TypographyLoader {
    pub fn new(source: Box<dyn FontSource>, generic_font: impl Into<String>) -> Self {
        Self {
            source,
            generic_font: generic_font.into(),
            engine: TextEngine::new(),
            faces: HashMap::new(),
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            Box::new(DirFontSource::new(config.font_dirs.clone())),
            config.generic_font.clone(),
        )
    }

    fn load_face(&mut self, resource: &str) -> Option<LoadedFace> {
        if let Some(cached) = self.faces.get(resource) {
            return cached.clone();
        }
        let loaded = self.source.load(resource).and_then(|bytes| {
            let family = self.engine.register(&bytes)?;
            let data =
                vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
            Some(LoadedFace { family, data })
        });
        tracing::debug!(resource, available = loaded.is_some(), "font resource probed");
        self.faces.insert(resource.to_string(), loaded.clone());
        loaded
    }

    fn outline(
        &mut self,
        resource: &str,
        role: FontRole,
        size_px: f32,
        tier: FontTier,
    ) -> Option<Font> {
        let face = self.load_face(resource)?;
        Some(Font {
            face: FontFace::Outline {
                resource: resource.to_string(),
                family: face.family,
                data: face.data,
            },
            size_px,
            role,
            tier,
        })
    }

    /// Resolve a font for `role` in `category` at `size_px`. Never fails.
    pub fn get_font(&mut self, role: FontRole, category: Category, size_px: f32) -> Font {
        let candidates = font_set(category).candidates(role);
        let mut strategies: Vec<(FontTier, &str)> = Vec::with_capacity(candidates.len() + 1);
        for (i, &name) in candidates.iter().enumerate() {
            let tier = if i == 0 {
                FontTier::Category
            } else {
                FontTier::Alternate
            };
            strategies.push((tier, name));
        }
        let generic = self.generic_font.clone();
        strategies.push((FontTier::Generic, generic.as_str()));

        let size_px = if size_px.is_finite() && size_px > 0.0 {
            size_px
        } else {
            role.size_px()
        };
        if let Some(font) = strategies
            .into_iter()
            .find_map(|(tier, name)| self.outline(name, role, size_px, tier))
        {
            return font;
        }

        tracing::warn!(
            role = role.as_str(),
            %category,
            size_px = role.fallback_size_px(),
            "no outline font available, using built-in face"
        );
        Font::builtin(role)
    }

    /// Font for `role` at its standard size.
    pub fn font_for(&mut self, role: FontRole, category: Category) -> Font {
        self.get_font(role, category, role.size_px())
    }

    /// Generic face at `size_px`, falling back to the category header font.
    pub fn badge_font(&mut self, category: Category, size_px: f32) -> Font {
        let generic = self.generic_font.clone();
        self.outline(&generic, FontRole::Header, size_px, FontTier::Generic)
            .unwrap_or_else(|| self.font_for(FontRole::Header, category))
    }

    /// Advance width of `text` on one line.
    pub fn text_width(&mut self, font: &Font, text: &str) -> f32 {
        match &font.face {
            FontFace::Builtin => builtin::text_width(text, font.builtin_em()) as f32,
            FontFace::Outline { family, .. } => self
                .engine
                .measure(text, family, font.size_px)
                .unwrap_or_else(|_| estimate_width(text, font.size_px)),
        }
    }

    pub fn line_height(&mut self, font: &Font) -> f32 {
        match &font.face {
            FontFace::Builtin => builtin::line_height(font.builtin_em()) as f32,
            FontFace::Outline { family, .. } => self
                .engine
                .line_height(family, font.size_px)
                .unwrap_or(font.size_px * 1.2),
        }
    }

    /// Shape `text` with an outline face; built-in faces have nothing to shape.
    pub fn shape(&mut self, font: &Font, text: &str) -> CardResult<ShapedText> {
        match &font.face {
            FontFace::Builtin => Ok(ShapedText::default()),
            FontFace::Outline { family, .. } => self.engine.shape(text, family, font.size_px),
        }
    }

    /// Bind `font` to this loader for measuring.
    pub fn measurer<'a>(&'a mut self, font: &'a Font) -> MeasuredFont<'a> {
        MeasuredFont { loader: self, font }
    }
}

fn estimate_width(text: &str, size_px: f32) -> f32 {
    text.chars().count() as f32 * size_px * 0.6
}

/// Width and line-height queries used by text fitting.
pub trait TextMeasure {
    fn text_width(&mut self, text: &str) -> f32;
    fn line_height(&mut self) -> f32;
}

/// A font paired with the loader that can measure it.
pub struct MeasuredFont<'a> {
    loader: &'a mut TypographyLoader,
    font: &'a Font,
}

impl TextMeasure for MeasuredFont<'_> {
    fn text_width(&mut self, text: &str) -> f32 {
        self.loader.text_width(self.font, text)
    }

    fn line_height(&mut self) -> f32 {
        self.loader.line_height(self.font)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typography/loader.rs"]
mod tests;
