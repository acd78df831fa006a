//! Agreement date, name, and identifier formatting

use chrono::{Datelike, NaiveDate};

/// Format an agreement date as `DD-MM-YYYY`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use terms_text::format_agreement_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
/// assert_eq!(format_agreement_date(date), "07-01-2025");
/// ```
pub fn format_agreement_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// Format an applicant identifier for display (e.g. `SDC-00042`)
///
/// # Arguments
/// * `id` - Numeric applicant identifier
/// * `prefix` - Text printed before the number
/// * `width` - Minimum digit count, zero-padded
pub fn format_applicant_code(id: u64, prefix: &str, width: usize) -> String {
    format!("{prefix}{id:0>width$}")
}

/// Join given and family name, trimming stray whitespace
pub fn full_name(given: &str, family: &str) -> String {
    format!("{} {}", given.trim(), family.trim())
        .trim()
        .to_string()
}

/// Upper-case the first character of a string
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cover subtitle for a draw category (e.g. `Gold Agreement`)
pub fn category_subtitle(category: &str) -> String {
    format!("{} Agreement", capitalize_first(category.trim()))
}
