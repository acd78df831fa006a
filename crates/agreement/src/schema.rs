//! Applicant input and page output types

use crate::parser::{
    deserialize_category, deserialize_terms, deserialize_tokens, null_as_default, timestamp,
    DEFAULT_CATEGORY,
};
use crate::TokenLayoutPlan;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use terms_text::{Language, LocalizedTerms, TermsChunk};

/// Numeric applicant identifier
pub type ApplicantId = u64;

/// One applicant submission, as loaded from the submissions store
///
/// Text columns read `null` as blank, since joined rows may lack them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub id: ApplicantId,

    #[serde(alias = "first_name")]
    #[serde(deserialize_with = "null_as_default")]
    pub given_name: String,

    #[serde(alias = "last_name")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub family_name: String,

    #[serde(alias = "mobileno")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobile: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub draw_name: String,

    /// Token numbers, as an array or a comma-separated string
    #[serde(alias = "token_no")]
    #[serde(default, deserialize_with = "deserialize_tokens")]
    pub tokens: Vec<String>,

    #[serde(alias = "date_time")]
    #[serde(default, with = "timestamp")]
    pub submitted_at: Option<NaiveDateTime>,

    /// Preferred language; unknown codes fall back to English
    #[serde(default)]
    pub language: Language,

    /// Parent form identifier
    #[serde(alias = "forms_aggri_id")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub form_id: u64,
}

impl ApplicantRecord {
    /// Given and family name joined
    pub fn full_name(&self) -> String {
        terms_text::full_name(&self.given_name, &self.family_name)
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Category form an applicant registered against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,

    /// Category display name
    #[serde(alias = "form_name")]
    #[serde(default = "default_category", deserialize_with = "deserialize_category")]
    pub category: String,

    /// Terms text per language, as an object or its JSON-encoded string
    #[serde(alias = "languages")]
    #[serde(default, deserialize_with = "deserialize_terms")]
    pub terms: LocalizedTerms,
}

/// Stored identity images for an applicant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityDocuments {
    pub live_photo: Option<Vec<u8>>,
    #[serde(alias = "front_addhar")]
    pub front: Option<Vec<u8>>,
    #[serde(alias = "back_addhar")]
    pub back: Option<Vec<u8>>,
}

impl IdentityDocuments {
    pub fn live_photo(&self) -> Option<&[u8]> {
        non_empty(&self.live_photo)
    }

    pub fn front(&self) -> Option<&[u8]> {
        non_empty(&self.front)
    }

    pub fn back(&self) -> Option<&[u8]> {
        non_empty(&self.back)
    }
}

fn non_empty(data: &Option<Vec<u8>>) -> Option<&[u8]> {
    data.as_deref().filter(|bytes| !bytes.is_empty())
}

/// Everything the applicant lookup returns for one identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedApplicant {
    pub record: ApplicantRecord,
    pub form: FormDefinition,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: IdentityDocuments,
}

/// Rectangle in page coordinates (millimetres from the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// One label/value row of the applicant details block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
    pub label_x: f64,
    pub value_x: f64,
    pub y: f64,
}

/// Token numbers row, possibly wrapped over several lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenBlock {
    pub label: String,
    pub label_x: f64,
    pub y: f64,
    pub plan: TokenLayoutPlan,
}

/// Acknowledgement mark plus the applicant name, placed once per document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureBlock {
    pub name: String,
    /// Area for the acknowledgement mark
    pub mark: Rect,
    /// Baseline of the printed name
    pub name_y: f64,
}

/// An image region that is either filled or shows a placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageSlot {
    Available {
        mime: String,
        #[serde(serialize_with = "crate::images::serialize_base64")]
        data: Vec<u8>,
        /// Where the image is drawn, fitted inside the region
        placement: Rect,
    },
    NotAvailable {
        message: String,
        region: Rect,
    },
}

impl ImageSlot {
    pub fn is_available(&self) -> bool {
        matches!(self, ImageSlot::Available { .. })
    }

    /// `data:` URI for HTML-style renderers
    pub fn data_uri(&self) -> Option<String> {
        match self {
            ImageSlot::Available { mime, data, .. } => {
                Some(crate::images::data_uri(mime, data))
            }
            ImageSlot::NotAvailable { .. } => None,
        }
    }
}

/// Which side of the identity card a page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentitySide {
    Front,
    Back,
}

/// First page: header, applicant details, photo, and first terms chunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverPage {
    pub title: String,
    pub subtitle: String,
    pub section_title: String,
    pub details: Vec<DetailRow>,
    pub tokens: TokenBlock,
    pub photo: ImageSlot,
    pub terms_heading: String,
    /// Top of the terms region, below the last detail row
    pub terms_top: f64,
    pub terms: TermsChunk,
    pub signature: Option<SignatureBlock>,
}

/// Follow-on page holding one more terms chunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermsContinuationPage {
    pub heading: String,
    pub terms_top: f64,
    pub terms: TermsChunk,
    pub signature: Option<SignatureBlock>,
}

/// Page showing one side of the identity card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityImagePage {
    pub side: IdentitySide,
    pub title: String,
    pub image: ImageSlot,
}

/// One printable page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Page {
    Cover(CoverPage),
    TermsContinuation(TermsContinuationPage),
    IdentityImage(IdentityImagePage),
}

impl Page {
    /// Terms chunk on this page, if it carries terms
    pub fn terms(&self) -> Option<&TermsChunk> {
        match self {
            Page::Cover(p) => Some(&p.terms),
            Page::TermsContinuation(p) => Some(&p.terms),
            Page::IdentityImage(_) => None,
        }
    }

    pub fn signature(&self) -> Option<&SignatureBlock> {
        match self {
            Page::Cover(p) => p.signature.as_ref(),
            Page::TermsContinuation(p) => p.signature.as_ref(),
            Page::IdentityImage(_) => None,
        }
    }

    pub fn is_terms_page(&self) -> bool {
        self.terms().is_some()
    }
}

/// Ordered pages for one applicant
///
/// Always non-empty, with exactly one signature block on the terminal terms page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    applicant_id: ApplicantId,
    language: Language,
    pages: Vec<Page>,
}

impl Document {
    pub(crate) fn new(applicant_id: ApplicantId, language: Language, pages: Vec<Page>) -> Self {
        Self {
            applicant_id,
            language,
            pages,
        }
    }

    pub fn applicant_id(&self) -> ApplicantId {
        self.applicant_id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages carrying terms text
    pub fn terms_page_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_terms_page()).count()
    }

    pub fn signature_count(&self) -> usize {
        self.pages.iter().filter(|p| p.signature().is_some()).count()
    }

    /// Index of the page holding the signature block
    pub fn signature_page(&self) -> Option<usize> {
        self.pages.iter().position(|p| p.signature().is_some())
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}
