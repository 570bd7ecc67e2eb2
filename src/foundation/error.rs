use std::path::PathBuf;

/// Convenience result type used across cardsmith.
pub type CardResult<T> = Result<T, CardError>;

/// Pipeline stage a [`CardError::Render`] failure originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderStage {
    /// Gradient background construction.
    Background,
    /// Procedural texture overlay.
    Texture,
    /// Border glow rings.
    Border,
    /// Header panel and title.
    Header,
    /// Type badge.
    Badge,
    /// Photo frame and placement.
    Photo,
    /// Stats panel.
    Stats,
    /// Ability panel.
    Ability,
    /// Vector scene rasterization.
    Rasterize,
    /// PNG encoding.
    Encode,
    /// Writing the encoded card to its destination.
    Persist,
}

impl RenderStage {
    /// Stable lowercase name used in messages and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Texture => "texture",
            Self::Border => "border",
            Self::Header => "header",
            Self::Badge => "badge",
            Self::Photo => "photo",
            Self::Stats => "stats",
            Self::Ability => "ability",
            Self::Rasterize => "rasterize",
            Self::Encode => "encode",
            Self::Persist => "persist",
        }
    }
}

impl std::fmt::Display for RenderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// The source photo is missing, unreadable or not a decodable raster.
    #[error("image load error ({}): {source}", display_path(.path))]
    ImageLoad {
        /// Path of the photo, when it came from disk.
        path: Option<PathBuf>,
        /// Underlying decode or IO failure.
        source: anyhow::Error,
    },

    /// Any drawing or encoding failure, tagged with the stage that failed.
    #[error("render error in {stage} stage: {source}")]
    Render {
        /// Stage that failed.
        stage: RenderStage,
        /// Underlying failure.
        source: anyhow::Error,
    },

    /// Content record rejected at the boundary, before rendering starts.
    #[error("content validation error: {0}")]
    ContentValidation(String),

    /// Invalid renderer configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::ImageLoad`] value.
    pub fn image_load(path: Option<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::ImageLoad {
            path,
            source: source.into(),
        }
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(stage: RenderStage, source: impl Into<anyhow::Error>) -> Self {
        Self::Render {
            stage,
            source: source.into(),
        }
    }

    /// Build a [`CardError::Render`] value from a plain message.
    pub fn render_msg(stage: RenderStage, msg: impl Into<String>) -> Self {
        Self::Render {
            stage,
            source: anyhow::anyhow!(msg.into()),
        }
    }

    /// Build a [`CardError::ContentValidation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ContentValidation(msg.into())
    }

    /// Build a [`CardError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stage of a render failure, if this is one.
    pub fn stage(&self) -> Option<RenderStage> {
        match self {
            Self::Render { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Message safe to show an end user: no paths, no internal diagnostics.
    pub fn user_message(&self) -> String {
        match self {
            Self::ImageLoad { .. } => {
                "Could not read the uploaded photo. Please try again.".to_string()
            }
            Self::ContentValidation(msg) => format!("The card content was rejected: {msg}"),
            Self::Render { .. } | Self::Config(_) | Self::Other(_) => {
                "Could not create the card. Please try again.".to_string()
            }
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "<memory>".to_string(), |p| p.display().to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
