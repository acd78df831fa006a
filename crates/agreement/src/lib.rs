//! Agreement - document composition for draw registrations
//!
//! This crate provides:
//! - Applicant, form, and page data types
//! - Layout configuration (JSON or builder)
//! - Token number layout for the applicant details block
//! - Identity image placement
//! - Document assembly for one applicant
//! - Batch rendering across many applicants
//!
//! # Example
//!
//! ```ignore
//! use agreement::{parse_applicant, BatchRenderer, DocumentAssembler, EngineConfig};
//!
//! let config = EngineConfig::default();
//! let applicant = parse_applicant(applicant_json)?;
//! let document = DocumentAssembler::new(&config).assemble(&applicant);
//!
//! let batch = BatchRenderer::new(&config, &store).render_csv("5,999,7")?;
//! ```

mod assembler;
mod batch;
mod config;
mod images;
pub mod parser;
mod schema;
mod tokens;

pub use assembler::DocumentAssembler;
pub use batch::{ApplicantSource, BatchRender, BatchRenderer, SequenceItem};
pub use config::{EngineConfig, IdentifierFormat, LayoutParams, LayoutParamsBuilder};
pub use images::{fit_within, image_slot, probe_image, ImageInfo};
pub use parser::{parse_applicant, parse_config, parse_id_list};
pub use schema::*;
pub use tokens::{TokenLayout, TokenLayoutPlan, TokenLine};

pub use terms_text::{CapacityTable, Language, LocalizedTerms, TermsChunk};

use thiserror::Error;

/// Errors that can occur while preparing a render
///
/// Rendering itself never fails; these only come from parsing inputs and
/// validating configuration.
#[derive(Debug, Error)]
pub enum AgreementError {
    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Invalid applicant id list: {0}")]
    InvalidIdList(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terms error: {0}")]
    TermsError(#[from] terms_text::TermsTextError),
}

/// Result type for agreement operations
pub type Result<T> = std::result::Result<T, AgreementError>;
