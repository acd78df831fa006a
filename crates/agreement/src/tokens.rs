//! Token number wrapping for the applicant details block
//!
//! The first line starts at the value column. Wrapped lines start back at the
//! label column, so they hold more tokens than the first.

use crate::LayoutParams;
use serde::Serialize;

/// One printed line of token numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenLine {
    pub x: f64,
    pub y: f64,
    pub tokens: Vec<String>,
}

impl TokenLine {
    /// Tokens joined for printing
    pub fn text(&self) -> String {
        self.tokens.join(", ")
    }
}

/// Positioned token lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenLayoutPlan {
    lines: Vec<TokenLine>,
    line_height: f64,
}

impl TokenLayoutPlan {
    pub fn lines(&self) -> &[TokenLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn token_count(&self) -> usize {
        self.lines.iter().map(|l| l.tokens.len()).sum()
    }

    /// Tokens in print order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .flat_map(|l| l.tokens.iter().map(String::as_str))
    }

    /// Baseline of the last line
    pub fn last_y(&self) -> f64 {
        self.lines.last().map(|l| l.y).unwrap_or_default()
    }

    /// Baseline of the row that follows the token block
    pub fn next_y(&self) -> f64 {
        self.last_y() + self.line_height
    }
}

/// Greedy line filler for token numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenLayout {
    label_x: f64,
    value_x: f64,
    first_width: f64,
    token_width: f64,
    separator_width: f64,
    line_height: f64,
}

impl TokenLayout {
    pub fn new(
        label_x: f64,
        value_x: f64,
        first_width: f64,
        token_width: f64,
        separator_width: f64,
        line_height: f64,
    ) -> Self {
        Self {
            label_x,
            value_x,
            first_width,
            token_width,
            separator_width,
            line_height,
        }
    }

    pub fn from_params(params: &LayoutParams) -> Self {
        Self::new(
            params.label_x,
            params.value_x,
            params.value_width,
            params.token_width,
            params.token_separator_width,
            params.line_height,
        )
    }

    fn slot_width(&self) -> f64 {
        self.token_width + self.separator_width
    }

    fn capacity(&self, width: f64) -> usize {
        let slots = (width / self.slot_width()).floor();
        if slots.is_finite() && slots >= 1.0 {
            slots as usize
        } else {
            1
        }
    }

    /// Tokens that fit on the first line
    pub fn first_line_capacity(&self) -> usize {
        self.capacity(self.first_width)
    }

    /// Tokens that fit on each wrapped line
    pub fn subsequent_line_capacity(&self) -> usize {
        self.capacity(self.first_width + (self.value_x - self.label_x))
    }

    /// Place tokens starting at `origin_y`
    ///
    /// No tokens still yields one empty line, so the row keeps its height.
    pub fn layout(&self, tokens: &[String], origin_y: f64) -> TokenLayoutPlan {
        let first = self.first_line_capacity();
        let head_len = first.min(tokens.len());
        let (head, rest) = tokens.split_at(head_len);

        let mut lines = vec![TokenLine {
            x: self.value_x,
            y: origin_y,
            tokens: head.to_vec(),
        }];

        let mut y = origin_y;
        for group in rest.chunks(self.subsequent_line_capacity()) {
            y += self.line_height;
            lines.push(TokenLine {
                x: self.label_x,
                y,
                tokens: group.to_vec(),
            });
        }

        TokenLayoutPlan {
            lines,
            line_height: self.line_height,
        }
    }
}
