//! Fixed page text for each agreement language

use crate::Language;

/// Static text printed around the applicant data on agreement pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStrings {
    pub name_label: &'static str,
    pub user_id_label: &'static str,
    pub mobile_label: &'static str,
    pub token_label: &'static str,
    pub draw_label: &'static str,
    pub category_label: &'static str,
    pub agreement_date_label: &'static str,
    /// Heading above the terms region
    pub terms_heading: &'static str,
    /// Suffix appended to the terms heading on continuation pages
    pub continued_suffix: &'static str,
    pub section_title: &'static str,
    /// Used in place of terms when no text exists for the form
    pub terms_unavailable: &'static str,
    pub photo_unavailable: &'static str,
    pub front_image_title: &'static str,
    pub back_image_title: &'static str,
    pub front_image_unavailable: &'static str,
    pub back_image_unavailable: &'static str,
    // Declaration clause: "<prefix><name><suffix>"
    declaration_prefix: &'static str,
    declaration_suffix: &'static str,
}

const ENGLISH: LocaleStrings = LocaleStrings {
    name_label: "Name:",
    user_id_label: "User ID:",
    mobile_label: "Mobile No:",
    token_label: "Token number(s):",
    draw_label: "Draw Name:",
    category_label: "Draw Category:",
    agreement_date_label: "Agreement Date :",
    terms_heading: "Terms and conditions",
    continued_suffix: " (Continued)",
    section_title: "Shree Datta Capital - Terms and Conditions Agreement",
    terms_unavailable: "Terms and conditions not available",
    photo_unavailable: "User Photo Not Available",
    front_image_title: "Aadhaar Card - Front",
    back_image_title: "Aadhaar Card - Back",
    front_image_unavailable: "Front Aadhaar Image Not Available",
    back_image_unavailable: "Back Aadhaar Image Not Available",
    declaration_prefix: "I, ",
    declaration_suffix: ", have read all the above terms and conditions and I agree to them.",
};

const HINDI: LocaleStrings = LocaleStrings {
    name_label: "नाम:",
    user_id_label: "यूज़र आईडी:",
    mobile_label: "मोबाइल नंबर:",
    token_label: "टोकन संख्या:",
    draw_label: "ड्रॉ का नाम:",
    category_label: "ड्रॉ श्रेणी:",
    agreement_date_label: "समझौते की तारीख :",
    terms_heading: "नियम और शर्तें",
    section_title: "श्री दत्त कैपिटल - नियम और शर्तें समझौता",
    terms_unavailable: "नियम और शर्तें उपलब्ध नहीं हैं",
    declaration_prefix: "मैं, ",
    declaration_suffix: ", उपरोक्त सभी नियम और शर्तें पढ़कर उनसे सहमत हूं।",
    ..IDENTITY_PAGES
};

const MARATHI: LocaleStrings = LocaleStrings {
    name_label: "नाव:",
    user_id_label: "यूजर आयडी:",
    mobile_label: "मोबाईल क्र.:",
    token_label: "टोकन क्रमांक:",
    draw_label: "ड्रॉचे नाव:",
    category_label: "ड्रॉ श्रेणी:",
    agreement_date_label: "करार दिनांक :",
    terms_heading: "अटी व शर्ती",
    section_title: "श्री दत्त कॅपिटल - अटी व शर्ती करार",
    terms_unavailable: "अटी व शर्ती उपलब्ध नाहीत",
    declaration_prefix: "मी, ",
    declaration_suffix: ", सर्व अटी व शर्ती वाचल्या आहेत व त्या मला मान्य आहेत.",
    ..IDENTITY_PAGES
};

// Identity pages and the continuation marker are printed in English for every language.
const IDENTITY_PAGES: LocaleStrings = ENGLISH;

impl LocaleStrings {
    /// Text table for a language
    pub fn for_language(lang: Language) -> &'static LocaleStrings {
        match lang {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
            Language::Marathi => &MARATHI,
        }
    }

    /// Terms heading used on continuation pages
    pub fn continued_heading(&self) -> String {
        format!("{}{}", self.terms_heading, self.continued_suffix)
    }
}

/// Closing declaration clause naming the applicant
///
/// # Examples
/// ```
/// use terms_text::{declaration, Language};
/// assert_eq!(
///     declaration(Language::English, "Asha Patil"),
///     "I, Asha Patil, have read all the above terms and conditions and I agree to them."
/// );
/// ```
pub fn declaration(lang: Language, full_name: &str) -> String {
    let strings = LocaleStrings::for_language(lang);
    format!(
        "{}{}{}",
        strings.declaration_prefix, full_name, strings.declaration_suffix
    )
}
