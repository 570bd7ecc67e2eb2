use crate::foundation::error::{CardError, CardResult};

pub const MAX_NAME_CHARS: usize = 25;
pub const MAX_STAT_NAME_CHARS: usize = 25;
pub const MAX_DESCRIPTION_CHARS: usize = 280;
pub const STAT_MIN: u32 = 100;
pub const STAT_MAX: u32 = 3000;
pub const STAT_STEP: u32 = 100;

const ELLIPSIS: &str = "...";

/// The 20 type labels a content generator may assign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeLabel {
    Mood,
    Vibe,
    Simp,
    Npc,
    Glitch,
    Ghost,
    Lag,
    Ping,
    Firewall,
    Debug,
    Sus,
    Iykyk,
    Main,
    Flex,
    Cringe,
    Spicy,
    Clapback,
    Cap,
    Send,
    Juice,
}

impl TypeLabel {
    pub const ALL: [TypeLabel; 20] = [
        Self::Mood,
        Self::Vibe,
        Self::Simp,
        Self::Npc,
        Self::Glitch,
        Self::Ghost,
        Self::Lag,
        Self::Ping,
        Self::Firewall,
        Self::Debug,
        Self::Sus,
        Self::Iykyk,
        Self::Main,
        Self::Flex,
        Self::Cringe,
        Self::Spicy,
        Self::Clapback,
        Self::Cap,
        Self::Send,
        Self::Juice,
    ];

    /// Label text exactly as printed on the badge.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mood => "Mood",
            Self::Vibe => "Vibe",
            Self::Simp => "Simp",
            Self::Npc => "NPC",
            Self::Glitch => "Glitch",
            Self::Ghost => "Ghost",
            Self::Lag => "Lag",
            Self::Ping => "Ping",
            Self::Firewall => "Firewall",
            Self::Debug => "Debug",
            Self::Sus => "Sus",
            Self::Iykyk => "IYKYK",
            Self::Main => "Main",
            Self::Flex => "Flex",
            Self::Cringe => "Cringe",
            Self::Spicy => "Spicy",
            Self::Clapback => "Clapback",
            Self::Cap => "Cap",
            Self::Send => "Send",
            Self::Juice => "Juice",
        }
    }

    /// Exact, case-sensitive match against [`TypeLabel::as_str`].
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

impl std::fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stat value in `100..=3000`, multiple of 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatValue(u32);

impl StatValue {
    pub fn new(v: u32) -> CardResult<Self> {
        if !(STAT_MIN..=STAT_MAX).contains(&v) {
            return Err(CardError::validation(format!(
                "stat value {v} outside {STAT_MIN}..={STAT_MAX}"
            )));
        }
        if v % STAT_STEP != 0 {
            return Err(CardError::validation(format!(
                "stat value {v} is not a multiple of {STAT_STEP}"
            )));
        }
        Ok(Self(v))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub value: StatValue,
}

/// Validated, immutable card content consumed by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRecord {
    name: String,
    type_label: TypeLabel,
    stat1: Stat,
    stat2: Stat,
    description: String,
}

impl ContentRecord {
    /// Strict constructor: every field must already satisfy the content bounds.
    pub fn new(
        name: impl Into<String>,
        type_label: TypeLabel,
        stat1: (impl Into<String>, u32),
        stat2: (impl Into<String>, u32),
        description: impl Into<String>,
    ) -> CardResult<Self> {
        let name = name.into();
        check_text("name", &name, MAX_NAME_CHARS, false)?;
        let description = description.into();
        check_text("description", &description, MAX_DESCRIPTION_CHARS, true)?;

        let stat1 = Stat {
            name: stat1.0.into(),
            value: StatValue::new(stat1.1)?,
        };
        let stat2 = Stat {
            name: stat2.0.into(),
            value: StatValue::new(stat2.1)?,
        };
        check_text("stat1_name", &stat1.name, MAX_STAT_NAME_CHARS, false)?;
        check_text("stat2_name", &stat2.name, MAX_STAT_NAME_CHARS, false)?;

        Ok(Self {
            name,
            type_label,
            stat1,
            stat2,
            description,
        })
    }

    /// Sanitize a loosely typed generator record, fill defaults, then validate strictly.
    pub fn from_raw(raw: RawContentRecord) -> CardResult<Self> {
        let name = raw.card_name.unwrap_or_else(|| "Unknown Card".to_string());
        let name: String = sanitize_ascii(&name)
            .replace('\n', " ")
            .trim()
            .chars()
            .take(MAX_NAME_CHARS)
            .collect();
        let name = if name.is_empty() {
            "Unknown Card".to_string()
        } else {
            name
        };

        let type_label = match raw.custom_type.as_deref().map(str::trim) {
            None | Some("") => TypeLabel::Vibe,
            Some(s) => TypeLabel::parse(s)
                .ok_or_else(|| CardError::validation(format!("unknown type label '{s}'")))?,
        };

        let stat_name = |v: Option<String>, default: &str| -> String {
            let cleaned: String = sanitize_ascii(v.as_deref().unwrap_or(default))
                .replace('\n', " ")
                .trim()
                .chars()
                .take(MAX_STAT_NAME_CHARS)
                .collect();
            if cleaned.is_empty() {
                default.to_string()
            } else {
                cleaned
            }
        };

        let description = raw
            .effect_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "No description available.".to_string());
        let description = shorten_to_chars(&sanitize_ascii(&description), MAX_DESCRIPTION_CHARS);

        Self::new(
            name,
            type_label,
            (
                stat_name(raw.stat1_name, "Power"),
                raw.stat1_value.unwrap_or(1000),
            ),
            (
                stat_name(raw.stat2_name, "Defense"),
                raw.stat2_value.unwrap_or(1000),
            ),
            description,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_label(&self) -> TypeLabel {
        self.type_label
    }

    pub fn stat1(&self) -> &Stat {
        &self.stat1
    }

    pub fn stat2(&self) -> &Stat {
        &self.stat2
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Record shape emitted by the content generator; every field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RawContentRecord {
    pub card_name: Option<String>,
    pub custom_type: Option<String>,
    pub stat1_name: Option<String>,
    pub stat1_value: Option<u32>,
    pub stat2_name: Option<String>,
    pub stat2_value: Option<u32>,
    pub effect_description: Option<String>,
}

impl RawContentRecord {
    pub fn from_json(s: &str) -> CardResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| CardError::validation(format!("malformed content record: {e}")))
    }
}

pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | ',' | '!' | '?' | '\'' | '-' | '\n')
}

/// Drop every character outside the allowed card alphabet.
pub fn sanitize_ascii(text: &str) -> String {
    text.chars().filter(|&c| is_allowed_char(c)).collect()
}

/// Cut `text` to at most `max_chars`, marking the cut with a trailing `...`.
pub fn shorten_to_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let head: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    format!("{}{ELLIPSIS}", head.trim_end())
}

fn check_text(field: &str, value: &str, max_chars: usize, allow_newline: bool) -> CardResult<()> {
    if value.trim().is_empty() {
        return Err(CardError::validation(format!("{field} must be non-empty")));
    }
    let n = value.chars().count();
    if n > max_chars {
        return Err(CardError::validation(format!(
            "{field} has {n} characters (max {max_chars})"
        )));
    }
    if let Some(bad) = value
        .chars()
        .find(|&c| !is_allowed_char(c) || (c == '\n' && !allow_newline))
    {
        return Err(CardError::validation(format!(
            "{field} contains disallowed character {bad:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/content/record.rs"]
mod tests;
