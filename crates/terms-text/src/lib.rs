//! Terms Text - localized agreement text processing
//!
//! This crate provides:
//! - The supported agreement languages and their fixed page text
//! - Per-language capacity budgets for one terms region
//! - Terms resolution with English/placeholder fallback and the closing declaration
//! - Clause-aware pagination of long terms text
//! - Agreement date and applicant identifier formatting
//!
//! # Example
//!
//! ```ignore
//! use terms_text::{resolve_terms, CapacityTable, Language, LocalizedTerms, Paginator};
//!
//! let terms = LocalizedTerms::new("1) Pay on time.\n2) Keep the receipt.", "", "");
//! let resolved = resolve_terms(&terms, Language::Hindi, "Asha Patil");
//! let chunks = Paginator::for_language(&CapacityTable::default(), Language::Hindi)
//!     .paginate(resolved.text());
//! ```

mod capacity;
mod clause;
mod formatter;
mod language;
mod locale;
mod paginate;
mod resolver;

pub use capacity::CapacityTable;
pub use clause::{clause_number, is_devanagari_char, is_devanagari_digit, opens_clause};
pub use formatter::{
    capitalize_first, category_subtitle, format_agreement_date, format_applicant_code,
    full_name,
};
pub use language::Language;
pub use locale::{declaration, LocaleStrings};
pub use paginate::{Paginator, TermsChunk};
pub use resolver::{resolve_terms, LocalizedTerms, ResolvedTerms, TermsSource};

use thiserror::Error;

/// Errors that can occur during terms text processing
#[derive(Debug, Error)]
pub enum TermsTextError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Invalid capacity budget: {0}")]
    InvalidCapacity(String),
}

/// Result type for terms text operations
pub type Result<T> = std::result::Result<T, TermsTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_then_paginate_short_terms() {
        let terms = LocalizedTerms::new("1) Pay on time.", "", "");
        let resolved = resolve_terms(&terms, Language::English, "Asha Patil");
        let chunks = Paginator::for_language(&CapacityTable::default(), Language::English)
            .paginate(resolved.text());

        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].is_terminal());
        assert!(chunks[0].text().ends_with("and I agree to them."));
    }

    #[test]
    fn test_error_display() {
        let err = TermsTextError::UnknownLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Unknown language code: fr");
    }
}
