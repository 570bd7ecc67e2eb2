use std::path::{Path, PathBuf};

use crate::foundation::error::{CardError, CardResult};

pub const ENV_FONT_DIRS: &str = "CARDSMITH_FONT_DIRS";
pub const ENV_GENERIC_FONT: &str = "CARDSMITH_GENERIC_FONT";
pub const ENV_TEXTURE_SEED: &str = "CARDSMITH_TEXTURE_SEED";

/// Renderer configuration, passed explicitly to [`crate::CardRenderer::new`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directories searched, in order, for font resource file names.
    pub font_dirs: Vec<PathBuf>,
    /// Generic face shared by every category once its own fonts are unavailable.
    pub generic_font: String,
    /// Pixel size of the type-badge label.
    pub badge_font_size: f32,
    /// Texture overlay seed; `None` derives one from the clock.
    pub texture_seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_dirs: Self::default_font_dirs(),
            generic_font: "arial.ttf".to_string(),
            badge_font_size: 20.0,
            texture_seed: None,
        }
    }
}

impl RenderConfig {
    pub fn default_font_dirs() -> Vec<PathBuf> {
        [
            "./fonts",
            "C:/Windows/Fonts",
            "/usr/share/fonts/truetype/dejavu",
            "/usr/share/fonts/TTF",
            "/usr/share/fonts/truetype/msttcorefonts",
            "/Library/Fonts",
            "/System/Library/Fonts/Supplemental",
        ]
        .into_iter()
        .map(PathBuf::from)
        .collect()
    }

    /// Defaults overridden by `CARDSMITH_*` environment variables.
    pub fn from_env() -> CardResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the process environment in [`Self::from_env`]).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> CardResult<Self> {
        if let Some(dirs) = lookup(ENV_FONT_DIRS).filter(|v| !v.trim().is_empty()) {
            self.font_dirs = std::env::split_paths(&dirs).collect();
        }
        if let Some(name) = lookup(ENV_GENERIC_FONT) {
            self.generic_font = name.trim().to_string();
        }
        if let Some(seed) = lookup(ENV_TEXTURE_SEED) {
            let seed = seed.trim();
            self.texture_seed = Some(seed.parse::<u64>().map_err(|e| {
                CardError::config(format!("{ENV_TEXTURE_SEED}='{seed}' is not a u64: {e}"))
            })?);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn from_json_file(path: &Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CardError::config(format!("read config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_str(&text).map_err(|e| {
            CardError::config(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.generic_font.trim().is_empty() {
            return Err(CardError::config("generic_font must be non-empty"));
        }
        if !self.badge_font_size.is_finite() || self.badge_font_size <= 0.0 {
            return Err(CardError::config("badge_font_size must be finite and > 0"));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.texture_seed = Some(seed);
        self
    }

    pub fn with_font_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.font_dirs = dirs;
        self
    }
}
