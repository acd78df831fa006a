//! Rendering many applicants into one page sequence

use crate::{
    parse_id_list, ApplicantId, Document, DocumentAssembler, EngineConfig, Page,
    ResolvedApplicant, Result,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Looks up everything needed to render one applicant
///
/// `None` means the applicant does not exist or could not be loaded.
pub trait ApplicantSource {
    fn fetch(&self, id: ApplicantId) -> Option<ResolvedApplicant>;
}

impl<F> ApplicantSource for F
where
    F: Fn(ApplicantId) -> Option<ResolvedApplicant>,
{
    fn fetch(&self, id: ApplicantId) -> Option<ResolvedApplicant> {
        self(id)
    }
}

impl ApplicantSource for HashMap<ApplicantId, ResolvedApplicant> {
    fn fetch(&self, id: ApplicantId) -> Option<ResolvedApplicant> {
        self.get(&id).cloned()
    }
}

/// One element of a batch output stream
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum SequenceItem {
    Page(Page),
    /// Boundary between two applicants' documents
    PageBreak,
}

/// Result of a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchRender {
    items: Vec<SequenceItem>,
    rendered: Vec<ApplicantId>,
    skipped: Vec<ApplicantId>,
}

impl BatchRender {
    pub fn items(&self) -> &[SequenceItem] {
        &self.items
    }

    /// True when no applicant could be rendered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages().count()
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.items.iter().filter_map(|item| match item {
            SequenceItem::Page(page) => Some(page),
            SequenceItem::PageBreak => None,
        })
    }

    pub fn page_break_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, SequenceItem::PageBreak))
            .count()
    }

    /// Ids that produced a document, in output order
    pub fn rendered(&self) -> &[ApplicantId] {
        &self.rendered
    }

    /// Ids the source could not resolve
    pub fn skipped(&self) -> &[ApplicantId] {
        &self.skipped
    }

    pub fn into_items(self) -> Vec<SequenceItem> {
        self.items
    }

    fn push_document(&mut self, document: Document) {
        if !self.items.is_empty() {
            self.items.push(SequenceItem::PageBreak);
        }
        self.rendered.push(document.applicant_id());
        self.items
            .extend(document.into_pages().into_iter().map(SequenceItem::Page));
    }
}

/// Runs the assembler over a list of applicant ids
pub struct BatchRenderer<'a, S: ApplicantSource + ?Sized> {
    assembler: DocumentAssembler<'a>,
    source: &'a S,
}

impl<'a, S: ApplicantSource + ?Sized> BatchRenderer<'a, S> {
    pub fn new(config: &'a EngineConfig, source: &'a S) -> Self {
        Self {
            assembler: DocumentAssembler::new(config),
            source,
        }
    }

    /// Date printed for submissions without a timestamp
    pub fn with_render_date(mut self, date: NaiveDate) -> Self {
        self.assembler = self.assembler.with_render_date(date);
        self
    }

    /// Render a single applicant, `None` if the source has no such id
    pub fn render_one(&self, id: ApplicantId) -> Option<Document> {
        let applicant = self.source.fetch(id)?;
        Some(self.assembler.assemble(&applicant))
    }

    /// Render ids in order, skipping ones that do not resolve
    pub fn render(&self, ids: &[ApplicantId]) -> BatchRender {
        let mut batch = BatchRender::default();

        for &id in ids {
            match self.render_one(id) {
                Some(document) => batch.push_document(document),
                None => {
                    log::warn!("skipping applicant {}: not found", id);
                    batch.skipped.push(id);
                }
            }
        }

        log::info!(
            "batch rendered {} applicant(s), {} page(s), skipped {}",
            batch.rendered.len(),
            batch.page_count(),
            batch.skipped.len()
        );

        batch
    }

    /// Render a comma-delimited id list such as `"5,999,7"`
    pub fn render_csv(&self, ids: &str) -> Result<BatchRender> {
        let ids = parse_id_list(ids)?;
        Ok(self.render(&ids))
    }
}
