//! Document assembly for one applicant

use crate::{
    image_slot, CoverPage, DetailRow, Document, EngineConfig, IdentityImagePage, IdentitySide,
    Page, Rect, ResolvedApplicant, SignatureBlock, TermsContinuationPage, TokenBlock, TokenLayout,
};
use chrono::NaiveDate;
use terms_text::{
    category_subtitle, format_agreement_date, resolve_terms, LocaleStrings, Paginator, TermsChunk,
};

// Gap between the acknowledgement mark and the printed name
const SIGNATURE_NAME_GAP: f64 = 2.0;

/// Turns a resolved applicant into an ordered page sequence
///
/// Assembly never fails: missing text, images, or timestamps fall back to
/// placeholders.
#[derive(Debug, Clone)]
pub struct DocumentAssembler<'a> {
    config: &'a EngineConfig,
    render_date: Option<NaiveDate>,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            config,
            render_date: None,
        }
    }

    /// Date printed when the submission has no timestamp
    pub fn with_render_date(mut self, date: NaiveDate) -> Self {
        self.render_date = Some(date);
        self
    }

    /// Resolve, paginate, and lay out the full document
    pub fn assemble(&self, applicant: &ResolvedApplicant) -> Document {
        let record = &applicant.record;
        let language = record.language;

        let resolved = resolve_terms(&applicant.form.terms, language, &record.full_name());
        let chunks =
            Paginator::for_language(&self.config.capacity, language).paginate(resolved.text());

        self.compose(applicant, chunks)
    }

    /// Lay out pages for already paginated terms
    ///
    /// The first chunk goes on the cover, the rest on continuation pages, and
    /// the signature on the last one regardless of chunk flags. An empty list
    /// is replaced by the localized placeholder. The two identity pages always
    /// follow, front then back.
    pub fn compose(&self, applicant: &ResolvedApplicant, chunks: Vec<TermsChunk>) -> Document {
        let record = &applicant.record;
        let strings = LocaleStrings::for_language(record.language);
        let layout = &self.config.layout;
        let full_name = record.full_name();

        let chunks = if chunks.is_empty() {
            Paginator::for_language(&self.config.capacity, record.language)
                .paginate(strings.terms_unavailable)
        } else {
            chunks
        };
        let last = chunks.len() - 1;

        let mut pages: Vec<Page> = Vec::with_capacity(chunks.len() + 2);
        for (position, chunk) in chunks.into_iter().enumerate() {
            let signature = (position == last).then(|| self.signature_block(&full_name));

            let page = if position == 0 {
                Page::Cover(self.cover_page(applicant, strings, chunk, signature))
            } else {
                Page::TermsContinuation(TermsContinuationPage {
                    heading: strings.continued_heading(),
                    terms_top: layout.continuation_terms_top,
                    terms: chunk,
                    signature,
                })
            };
            pages.push(page);
        }

        let documents = &applicant.documents;
        pages.push(Page::IdentityImage(IdentityImagePage {
            side: IdentitySide::Front,
            title: strings.front_image_title.to_string(),
            image: image_slot(
                documents.front(),
                layout.identity_region,
                strings.front_image_unavailable,
            ),
        }));
        pages.push(Page::IdentityImage(IdentityImagePage {
            side: IdentitySide::Back,
            title: strings.back_image_title.to_string(),
            image: image_slot(
                documents.back(),
                layout.identity_region,
                strings.back_image_unavailable,
            ),
        }));

        log::debug!(
            "assembled {} page(s) for applicant {}",
            pages.len(),
            record.id
        );

        Document::new(record.id, record.language, pages)
    }

    fn cover_page(
        &self,
        applicant: &ResolvedApplicant,
        strings: &LocaleStrings,
        terms: TermsChunk,
        signature: Option<SignatureBlock>,
    ) -> CoverPage {
        let record = &applicant.record;
        let layout = &self.config.layout;

        let row = |label: &str, value: String, y: f64| DetailRow {
            label: label.to_string(),
            value,
            label_x: layout.label_x,
            value_x: layout.value_x,
            y,
        };

        let mut y = layout.details_top;
        let mut details = Vec::with_capacity(6);
        details.push(row(strings.name_label, record.full_name(), y));
        y += layout.line_height;
        details.push(row(
            strings.user_id_label,
            self.config.identifier.format(record.id),
            y,
        ));
        y += layout.line_height;
        details.push(row(strings.mobile_label, record.mobile.clone(), y));
        y += layout.line_height;

        let plan = TokenLayout::from_params(layout).layout(&record.tokens, y);
        let tokens = TokenBlock {
            label: strings.token_label.to_string(),
            label_x: layout.label_x,
            y,
            plan,
        };
        y = tokens.plan.next_y();

        details.push(row(strings.draw_label, record.draw_name.clone(), y));
        y += layout.line_height;
        details.push(row(
            strings.category_label,
            applicant.form.category.clone(),
            y,
        ));
        y += layout.line_height;
        details.push(row(strings.agreement_date_label, self.agreement_date(applicant), y));

        CoverPage {
            title: self.config.company_title.clone(),
            subtitle: category_subtitle(&applicant.form.category),
            section_title: strings.section_title.to_string(),
            details,
            tokens,
            photo: image_slot(
                applicant.documents.live_photo(),
                layout.photo,
                strings.photo_unavailable,
            ),
            terms_heading: strings.terms_heading.to_string(),
            terms_top: layout.terms_top.max(y + layout.terms_gap),
            terms,
            signature,
        }
    }

    fn agreement_date(&self, applicant: &ResolvedApplicant) -> String {
        applicant
            .record
            .submitted_at
            .map(|dt| dt.date())
            .or(self.render_date)
            .map(format_agreement_date)
            .unwrap_or_default()
    }

    fn signature_block(&self, full_name: &str) -> SignatureBlock {
        let layout = &self.config.layout;
        let size = layout.signature_mark_size;
        let mark = Rect::new(
            layout.page_width - layout.signature_margin - size,
            layout.page_height - layout.signature_margin - size,
            size,
            size,
        );

        SignatureBlock {
            name: full_name.to_string(),
            name_y: mark.bottom() + SIGNATURE_NAME_GAP,
            mark,
        }
    }
}
