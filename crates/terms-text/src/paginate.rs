//! Clause-aware pagination of terms text

use crate::{opens_clause, CapacityTable, Language};
use serde::{Deserialize, Serialize};

/// A page-sized slice of resolved terms text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsChunk {
    /// Position within the terms sequence (0-based)
    index: usize,
    /// Trimmed text for this page
    text: String,
    /// Last chunk of the sequence; carries the signature block
    terminal: bool,
}

impl TermsChunk {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Lines of this chunk in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Greedy splitter that prefers breaking between enumerated clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// Maximum characters per terms region
    budget: usize,
}

impl Paginator {
    /// Create a paginator with an explicit character budget
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }

    /// Create a paginator using the budget for a language
    pub fn for_language(table: &CapacityTable, lang: Language) -> Self {
        Self::new(table.get(lang))
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Split terms into ordered chunks
    ///
    /// Never returns an empty sequence. A clause longer than the whole budget
    /// stays intact in a single oversized chunk.
    pub fn paginate(&self, text: &str) -> Vec<TermsChunk> {
        let pages = self.split(text);
        let last = pages.len() - 1;

        log::debug!(
            "paginated {} chars into {} chunk(s) with budget {}",
            text.chars().count(),
            pages.len(),
            self.budget
        );

        pages
            .into_iter()
            .enumerate()
            .map(|(index, text)| TermsChunk {
                index,
                text,
                terminal: index == last,
            })
            .collect()
    }

    fn split(&self, text: &str) -> Vec<String> {
        if text.chars().count() <= self.budget {
            return vec![text.trim().to_string()];
        }

        let mut pages = Vec::new();
        let mut current_page = String::new();
        let mut current_len = 0;

        for line in text.lines() {
            // +1 for the line break
            let line_len = line.chars().count() + 1;
            let overflows = current_len + line_len > self.budget && !current_page.is_empty();

            // Break before a new clause, or anywhere once past 80% of the budget
            if overflows && (opens_clause(line) || current_len * 5 > self.budget * 4) {
                push_trimmed(&mut pages, &current_page);
                current_page.clear();
                current_len = 0;
            }

            current_page.push_str(line);
            current_page.push('\n');
            current_len += line_len;
        }

        push_trimmed(&mut pages, &current_page);

        if pages.is_empty() {
            pages.push(text.to_string());
        }

        pages
    }
}

fn push_trimmed(pages: &mut Vec<String>, page: &str) {
    let trimmed = page.trim();
    if !trimmed.is_empty() {
        pages.push(trimmed.to_string());
    }
}
