//! Terms resolution with language fallback

use crate::{declaration, Language, LocaleStrings};
use serde::{Deserialize, Deserializer, Serialize};

/// Terms text of one form, keyed by language
///
/// Missing and `null` entries both read as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedTerms {
    #[serde(deserialize_with = "null_as_empty")]
    pub english: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub hindi: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub marathi: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl LocalizedTerms {
    pub fn new(
        english: impl Into<String>,
        hindi: impl Into<String>,
        marathi: impl Into<String>,
    ) -> Self {
        Self {
            english: english.into(),
            hindi: hindi.into(),
            marathi: marathi.into(),
        }
    }

    /// Stored text for a language, `None` when blank
    pub fn get(&self, lang: Language) -> Option<&str> {
        let text = match lang {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
            Language::Marathi => &self.marathi,
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Where the resolved terms text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermsSource {
    /// Text in the requested language
    Requested,
    /// Requested language was blank, English text used
    EnglishFallback,
    /// No text at all, localized placeholder used
    Placeholder,
}

/// Final terms text for one applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTerms {
    text: String,
    language: Language,
    source: TermsSource,
}

impl ResolvedTerms {
    /// Terms text, never empty
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language the document is rendered in (not necessarily the text's)
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> TermsSource {
        self.source
    }

    /// Whether the closing declaration clause was appended
    pub fn has_declaration(&self) -> bool {
        self.source != TermsSource::Placeholder
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Resolve the terms text for an applicant
///
/// Fallback order is requested language, then English, then the placeholder
/// in the requested language. Unless the placeholder is used, the declaration
/// clause naming the applicant is appended as the last line.
pub fn resolve_terms(terms: &LocalizedTerms, lang: Language, full_name: &str) -> ResolvedTerms {
    let (base, source) = match terms.get(lang) {
        Some(text) => (text, TermsSource::Requested),
        None => match terms.get(Language::English) {
            Some(text) => {
                log::debug!("no {} terms, falling back to english", lang.key());
                (text, TermsSource::EnglishFallback)
            }
            None => {
                log::debug!("no {} or english terms, using placeholder", lang.key());
                (
                    LocaleStrings::for_language(lang).terms_unavailable,
                    TermsSource::Placeholder,
                )
            }
        },
    };

    let text = if source == TermsSource::Placeholder {
        base.to_string()
    } else {
        format!("{}\n{}", base.trim_end(), declaration(lang, full_name))
    };

    ResolvedTerms {
        text,
        language: lang,
        source,
    }
}
