//! Page geometry and engine configuration

use crate::{AgreementError, Rect, Result};
use serde::{Deserialize, Serialize};
use terms_text::CapacityTable;

/// Page geometry in millimetres, measured from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub page_width: f64,
    pub page_height: f64,
    /// Baseline of the first detail row
    pub details_top: f64,
    pub label_x: f64,
    pub value_x: f64,
    /// Width available to values, including the first token line
    pub value_width: f64,
    pub line_height: f64,
    /// Width reserved for one token number
    pub token_width: f64,
    /// Width of the separator between two tokens
    pub token_separator_width: f64,
    pub photo: Rect,
    /// Lowest allowed top edge of the cover terms region
    pub terms_top: f64,
    /// Space between the last detail row and the terms heading
    pub terms_gap: f64,
    pub continuation_terms_top: f64,
    pub signature_mark_size: f64,
    /// Distance from the page bottom to the signature mark
    pub signature_margin: f64,
    pub identity_region: Rect,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            details_top: 53.0,
            label_x: 20.0,
            value_x: 70.0,
            value_width: 120.0,
            line_height: 7.0,
            token_width: 9.0,
            token_separator_width: 1.0,
            photo: Rect::new(160.0, 53.0, 35.0, 35.0),
            terms_top: 120.0,
            terms_gap: 10.0,
            continuation_terms_top: 15.0,
            signature_mark_size: 15.0,
            signature_margin: 25.0,
            identity_region: Rect::new(20.0, 40.0, 170.0, 230.0),
        }
    }
}

impl LayoutParams {
    pub fn builder() -> LayoutParamsBuilder {
        LayoutParamsBuilder::new()
    }

    /// Check that every dimension is usable
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("value_width", self.value_width),
            ("line_height", self.line_height),
            ("token_width", self.token_width),
            ("signature_mark_size", self.signature_mark_size),
            ("photo.width", self.photo.width),
            ("photo.height", self.photo.height),
            ("identity_region.width", self.identity_region.width),
            ("identity_region.height", self.identity_region.height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AgreementError::ConfigError(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.token_separator_width.is_finite() && self.token_separator_width >= 0.0) {
            return Err(AgreementError::ConfigError(format!(
                "token_separator_width must not be negative, got {}",
                self.token_separator_width
            )));
        }

        if self.value_x <= self.label_x {
            return Err(AgreementError::ConfigError(format!(
                "value_x ({}) must be right of label_x ({})",
                self.value_x, self.label_x
            )));
        }

        if self.signature_margin + self.signature_mark_size >= self.page_height {
            return Err(AgreementError::ConfigError(
                "signature block does not fit on the page".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for [`LayoutParams`], starting from the defaults
#[derive(Debug, Clone, Default)]
pub struct LayoutParamsBuilder {
    params: LayoutParams,
}

impl LayoutParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, width: f64, height: f64) -> Self {
        self.params.page_width = width;
        self.params.page_height = height;
        self
    }

    pub fn details_top(mut self, y: f64) -> Self {
        self.params.details_top = y;
        self
    }

    pub fn columns(mut self, label_x: f64, value_x: f64) -> Self {
        self.params.label_x = label_x;
        self.params.value_x = value_x;
        self
    }

    pub fn value_width(mut self, width: f64) -> Self {
        self.params.value_width = width;
        self
    }

    pub fn line_height(mut self, height: f64) -> Self {
        self.params.line_height = height;
        self
    }

    pub fn token_metrics(mut self, token_width: f64, separator_width: f64) -> Self {
        self.params.token_width = token_width;
        self.params.token_separator_width = separator_width;
        self
    }

    pub fn photo(mut self, rect: Rect) -> Self {
        self.params.photo = rect;
        self
    }

    pub fn terms_top(mut self, y: f64) -> Self {
        self.params.terms_top = y;
        self
    }

    pub fn terms_gap(mut self, gap: f64) -> Self {
        self.params.terms_gap = gap;
        self
    }

    pub fn continuation_terms_top(mut self, y: f64) -> Self {
        self.params.continuation_terms_top = y;
        self
    }

    pub fn signature(mut self, mark_size: f64, margin: f64) -> Self {
        self.params.signature_mark_size = mark_size;
        self.params.signature_margin = margin;
        self
    }

    pub fn identity_region(mut self, rect: Rect) -> Self {
        self.params.identity_region = rect;
        self
    }

    /// Validate and return the parameters
    pub fn build(self) -> Result<LayoutParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}

/// How applicant identifiers are printed (e.g. `SDC-00005`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierFormat {
    pub prefix: String,
    /// Minimum digit count, zero-padded
    pub width: usize,
}

impl Default for IdentifierFormat {
    fn default() -> Self {
        Self {
            prefix: "SDC-".to_string(),
            width: 5,
        }
    }
}

impl IdentifierFormat {
    pub fn format(&self, id: u64) -> String {
        terms_text::format_applicant_code(id, &self.prefix, self.width)
    }
}

fn default_company_title() -> String {
    "Shree Datta Capital Agreement".to_string()
}

/// Everything needed to assemble documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub layout: LayoutParams,

    /// Terms characters per page, per language
    #[serde(default)]
    pub capacity: CapacityTable,

    #[serde(default)]
    pub identifier: IdentifierFormat,

    /// Cover page title
    #[serde(default = "default_company_title")]
    pub company_title: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: LayoutParams::default(),
            capacity: CapacityTable::default(),
            identifier: IdentifierFormat::default(),
            company_title: default_company_title(),
        }
    }
}

impl EngineConfig {
    /// Check layout geometry and capacity budgets
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.capacity.validate()?;
        Ok(())
    }
}
