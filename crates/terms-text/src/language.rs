//! Supported agreement languages

use crate::{Result, TermsTextError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Language an agreement is rendered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    /// All supported languages, in table order
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Marathi];

    /// Short code stored with submissions (`en`, `hi`, `mr`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    /// Key used for the language in a form's terms mapping
    pub fn key(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Marathi => "marathi",
        }
    }

    /// Whether the language is written in Devanagari script
    pub fn is_devanagari(&self) -> bool {
        matches!(self, Language::Hindi | Language::Marathi)
    }

    /// Parse a language code, treating anything unknown as English
    ///
    /// Submissions carry free-form language values; an unrecognised one must
    /// never block a document, so it renders in English.
    pub fn from_code_lossy(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = TermsTextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            "mr" | "marathi" => Ok(Language::Marathi),
            other => Err(TermsTextError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code.as_deref().map(Language::from_code_lossy).unwrap_or_default())
    }
}
