//! Static style tables: type label → category → palette, fonts and texture.
//!
//! All tables are exhaustive `match`es over closed enums, so a missing entry is a
//! compile error; [`validate_tables`] additionally checks the data itself (non-empty
//! candidate lists, well-formed file names) once at renderer construction.

use crate::{
    content::record::TypeLabel,
    foundation::core::Rgb8,
    foundation::error::{CardError, CardResult},
};

/// Style cluster governing palette, fonts and texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Cute,
    Cool,
    Heroic,
    Legendary,
    Mystical,
    Chaotic,
    Fierce,
    Wise,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Cute,
        Self::Cool,
        Self::Heroic,
        Self::Legendary,
        Self::Mystical,
        Self::Chaotic,
        Self::Fierce,
        Self::Wise,
    ];

    /// Category used for labels outside the 20-label domain.
    pub const DEFAULT: Category = Category::Cool;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cute => "cute",
            Self::Cool => "cool",
            Self::Heroic => "heroic",
            Self::Legendary => "legendary",
            Self::Mystical => "mystical",
            Self::Chaotic => "chaotic",
            Self::Fierce => "fierce",
            Self::Wise => "wise",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TexturePattern {
    None,
    Stars,
    Lightning,
    Flame,
    Geometric,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb8,
    pub secondary: Rgb8,
    pub accent: Rgb8,
    pub text: Rgb8,
    pub background: Rgb8,
}

impl Palette {
    pub fn colors(&self) -> [Rgb8; 5] {
        [
            self.primary,
            self.secondary,
            self.accent,
            self.text,
            self.background,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Header,
    Stat,
    Text,
}

impl FontRole {
    pub const ALL: [FontRole; 4] = [Self::Title, Self::Header, Self::Stat, Self::Text];

    /// Size requested from outline faces.
    pub fn size_px(self) -> f32 {
        match self {
            Self::Title => 14.0,
            Self::Header => 16.0,
            Self::Stat => 12.0,
            Self::Text => 10.0,
        }
    }

    /// Size used when only the built-in face is left; it does not read at small sizes.
    pub fn fallback_size_px(self) -> f32 {
        match self {
            Self::Title => 28.0,
            Self::Header => 32.0,
            Self::Stat => 24.0,
            Self::Text => 20.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Header => "header",
            Self::Stat => "stat",
            Self::Text => "text",
        }
    }
}

/// Per-role font candidates. The first entry of each list is the category face,
/// the rest are alternates tried when it is unavailable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSet {
    pub title: &'static [&'static str],
    pub header: &'static [&'static str],
    pub stat: &'static [&'static str],
    pub text: &'static [&'static str],
}

impl FontSet {
    pub fn candidates(&self, role: FontRole) -> &'static [&'static str] {
        match role {
            FontRole::Title => self.title,
            FontRole::Header => self.header,
            FontRole::Stat => self.stat,
            FontRole::Text => self.text,
        }
    }
}

pub fn category_for(label: TypeLabel) -> Category {
    use TypeLabel as L;
    match label {
        L::Mood | L::Vibe | L::Simp => Category::Cute,
        L::Npc | L::Glitch | L::Ghost | L::Cringe => Category::Mystical,
        L::Lag | L::Ping | L::Firewall => Category::Cool,
        L::Debug | L::Sus | L::Iykyk => Category::Wise,
        L::Main | L::Flex | L::Juice => Category::Legendary,
        L::Spicy | L::Clapback => Category::Chaotic,
        L::Cap | L::Send => Category::Heroic,
    }
}

/// Total over every string: labels outside the domain resolve to [`Category::DEFAULT`].
pub fn resolve_category(type_label: &str) -> Category {
    match TypeLabel::parse(type_label) {
        Some(label) => category_for(label),
        None => {
            tracing::debug!(
                type_label,
                fallback = %Category::DEFAULT,
                "unknown type label, using default category"
            );
            Category::DEFAULT
        }
    }
}

pub fn palette(category: Category) -> Palette {
    let p = |primary, secondary, accent, text, background| Palette {
        primary: Rgb8::hex(primary),
        secondary: Rgb8::hex(secondary),
        accent: Rgb8::hex(accent),
        text: Rgb8::hex(text),
        background: Rgb8::hex(background),
    };
    match category {
        Category::Cute => p(0xFFB6C1, 0xFFC0CB, 0xFF69B4, 0x8B008B, 0xFFF0F5),
        Category::Cool => p(0x87CEEB, 0xB0E0E6, 0x4169E1, 0x191970, 0xF0F8FF),
        Category::Heroic => p(0xFFD700, 0xFFA500, 0xFF8C00, 0x8B4513, 0xFFFACD),
        Category::Legendary => p(0xDDA0DD, 0xDA70D6, 0x9370DB, 0x4B0082, 0xF8F8FF),
        Category::Mystical => p(0x9370DB, 0xBA55D3, 0x8A2BE2, 0x4B0082, 0xF0E6FF),
        Category::Chaotic => p(0xFF4500, 0xFF6347, 0xDC143C, 0x8B0000, 0xFFF5EE),
        Category::Fierce => p(0xB22222, 0xDC143C, 0x8B0000, 0x2F0000, 0xFFE4E1),
        Category::Wise => p(0x4682B4, 0x87CEEB, 0x191970, 0x2F4F4F, 0xF0F8FF),
    }
}

pub fn font_set(category: Category) -> FontSet {
    match category {
        Category::Cute => FontSet {
            title: &["comicbd.ttf", "comic.ttf"],
            header: &["comic.ttf"],
            stat: &["verdanab.ttf", "verdana.ttf"],
            text: &["calibri.ttf"],
        },
        Category::Cool => FontSet {
            title: &["calibrib.ttf", "calibri.ttf"],
            header: &["arialbd.ttf", "arial.ttf"],
            stat: &["consola.ttf"],
            text: &["calibri.ttf"],
        },
        Category::Heroic => FontSet {
            title: &["impact.ttf"],
            header: &["impact.ttf"],
            stat: &["arialbd.ttf", "arial.ttf"],
            text: &["tahoma.ttf"],
        },
        Category::Legendary => FontSet {
            title: &["timesbd.ttf", "times.ttf"],
            header: &["georgiab.ttf", "georgia.ttf"],
            stat: &["georgia.ttf"],
            text: &["times.ttf"],
        },
        Category::Mystical => FontSet {
            title: &["georgiab.ttf", "georgia.ttf"],
            header: &["timesbd.ttf", "times.ttf"],
            stat: &["georgia.ttf"],
            text: &["trebuc.ttf"],
        },
        Category::Chaotic => FontSet {
            title: &["impact.ttf"],
            header: &["trebucbd.ttf", "trebuc.ttf"],
            stat: &["consola.ttf"],
            text: &["calibri.ttf"],
        },
        Category::Fierce => FontSet {
            title: &["impact.ttf"],
            header: &["arialbd.ttf", "arial.ttf"],
            stat: &["verdanab.ttf", "verdana.ttf"],
            text: &["tahoma.ttf"],
        },
        Category::Wise => FontSet {
            title: &["timesbd.ttf", "times.ttf"],
            header: &["georgiab.ttf", "georgia.ttf"],
            stat: &["consola.ttf", "consolas.ttf"],
            text: &["georgia.ttf"],
        },
    }
}

pub fn texture_pattern(category: Category) -> TexturePattern {
    match category {
        Category::Mystical => TexturePattern::Stars,
        Category::Chaotic => TexturePattern::Lightning,
        Category::Fierce => TexturePattern::Flame,
        Category::Wise => TexturePattern::Geometric,
        Category::Cute | Category::Cool | Category::Heroic | Category::Legendary => {
            TexturePattern::None
        }
    }
}

/// Resolved style bundle for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub category: Category,
    pub palette: Palette,
    pub fonts: FontSet,
    pub texture: TexturePattern,
}

impl Style {
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            palette: palette(category),
            fonts: font_set(category),
            texture: texture_pattern(category),
        }
    }

    pub fn for_label(label: TypeLabel) -> Self {
        Self::for_category(category_for(label))
    }
}

/// Check every table entry is populated and well-formed.
pub fn validate_tables() -> CardResult<()> {
    for label in TypeLabel::ALL {
        let category = category_for(label);
        if resolve_category(label.as_str()) != category {
            return Err(CardError::config(format!(
                "label '{label}' does not resolve through its own name"
            )));
        }
    }
    for category in Category::ALL {
        let fonts = font_set(category);
        for role in FontRole::ALL {
            let candidates = fonts.candidates(role);
            if candidates.is_empty() {
                return Err(CardError::config(format!(
                    "category {category} has no {} font candidates",
                    role.as_str()
                )));
            }
            if let Some(bad) = candidates
                .iter()
                .find(|c| c.is_empty() || c.contains(['/', '\\']))
            {
                return Err(CardError::config(format!(
                    "category {category} {} font '{bad}' must be a bare file name",
                    role.as_str()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/style/registry.rs"]
mod tests;
