//! cardsmith renders 600x840 trading cards from a short content record and a photo.
//!
//! A render is a fixed pipeline over one canvas:
//!
//! 1. **Style**: the record's type label picks a category palette, font set, and texture.
//! 2. **Background**: vertical gradient plus a seeded translucent texture overlay.
//! 3. **Regions**: glow border, header with title and badge, framed photo, stats, ability.
//! 4. **Output**: the scene is flattened to opaque RGB and encoded as PNG.
//!
//! Font loading never fails a render: every role falls back through alternate and
//! generic faces down to a built-in bitmap face.
//!
//! ```no_run
//! use cardsmith::{CardRenderer, ContentRecord, Photo, RenderConfig, TypeLabel};
//!
//! # fn main() -> cardsmith::CardResult<()> {
//! let record = ContentRecord::new(
//!     "Doom Waffle",
//!     TypeLabel::Ghost,
//!     ("Syrup", 1200),
//!     ("Crunch", 800),
//!     "Haunts breakfast tables.",
//! )?;
//! let renderer = CardRenderer::new(RenderConfig::from_env()?)?;
//! let card = renderer.render(&record, &Photo::open("photo.jpg")?)?;
//! card.save_png("card.png")?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod assets;
pub mod config;
pub mod content;
pub mod foundation;
pub mod render;
pub mod style;
pub mod typography;

pub use crate::assets::decode::Photo;
pub use crate::config::RenderConfig;
pub use crate::content::record::{ContentRecord, RawContentRecord, StatValue, TypeLabel};
pub use crate::foundation::core::{CanvasSize, PixelRect, Rgb8, Rgba8};
pub use crate::foundation::error::{CardError, CardResult, RenderStage};
pub use crate::render::card::{CardRenderer, RenderReport, RenderedCard};
pub use crate::style::registry::{Category, Palette, Style, TexturePattern};
pub use crate::typography::loader::{DirFontSource, FontSource, FontTier, TypographyLoader};
