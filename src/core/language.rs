//! Language proficiency levels on the CEFR scale plus `native`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a proficiency level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageLevelError {
    #[error("unknown language level: {0:?}")]
    UnknownLevel(String),
}

/// Ordered proficiency scale: `A1 < A2 < B1 < B2 < C1 < C2 < Native`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    Native,
}

impl LanguageLevel {
    /// Position on the scale, 1 for `A1` up to 7 for `Native`
    pub fn rank(self) -> u8 {
        match self {
            LanguageLevel::A1 => 1,
            LanguageLevel::A2 => 2,
            LanguageLevel::B1 => 3,
            LanguageLevel::B2 => 4,
            LanguageLevel::C1 => 5,
            LanguageLevel::C2 => 6,
            LanguageLevel::Native => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageLevel::A1 => "A1",
            LanguageLevel::A2 => "A2",
            LanguageLevel::B1 => "B1",
            LanguageLevel::B2 => "B2",
            LanguageLevel::C1 => "C1",
            LanguageLevel::C2 => "C2",
            LanguageLevel::Native => "native",
        }
    }
}

impl FromStr for LanguageLevel {
    type Err = LanguageLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a1" => Ok(LanguageLevel::A1),
            "a2" => Ok(LanguageLevel::A2),
            "b1" => Ok(LanguageLevel::B1),
            "b2" => Ok(LanguageLevel::B2),
            "c1" => Ok(LanguageLevel::C1),
            "c2" => Ok(LanguageLevel::C2),
            "native" => Ok(LanguageLevel::Native),
            _ => Err(LanguageLevelError::UnknownLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a held level satisfies a required level.
///
/// Fails closed: an unknown token on either side never satisfies.
pub fn meets_requirement(held: &str, required: &str) -> bool {
    match (held.parse::<LanguageLevel>(), required.parse::<LanguageLevel>()) {
        (Ok(held), Ok(required)) => held.rank() >= required.rank(),
        _ => false,
    }
}
