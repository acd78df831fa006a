//! Integration tests for document assembly and batch rendering

use agreement::{
    parse_applicant, parse_config, ApplicantId, ApplicantRecord, BatchRenderer, Document,
    DocumentAssembler, EngineConfig, FormDefinition, IdentityDocuments, ImageSlot, Language,
    LocalizedTerms, Page, ResolvedApplicant, SequenceItem,
};
use image::{DynamicImage, ImageFormat, RgbImage};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::io::Cursor;

fn record(id: ApplicantId, language: Language, tokens: usize) -> ApplicantRecord {
    ApplicantRecord {
        id,
        given_name: "Asha".to_string(),
        family_name: "Patil".to_string(),
        mobile: "9876543210".to_string(),
        draw_name: "Diwali Draw".to_string(),
        tokens: (1..=tokens).map(|n| format!("{:03}", n)).collect(),
        submitted_at: None,
        language,
        form_id: 1,
    }
}

fn applicant(
    id: ApplicantId,
    language: Language,
    tokens: usize,
    terms: LocalizedTerms,
) -> ResolvedApplicant {
    ResolvedApplicant {
        record: record(id, language, tokens),
        form: FormDefinition {
            id: 1,
            category: "gold".to_string(),
            terms,
        },
        documents: IdentityDocuments::default(),
    }
}

/// `count` single-line clauses of roughly `width` characters each
fn clauses(count: usize, width: usize, fill: &str) -> String {
    (1..=count)
        .map(|n| format!("{n}) {}", fill.repeat(width)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

fn assert_single_signature_on_last_terms_page(document: &Document) {
    assert_eq!(document.signature_count(), 1);
    assert_eq!(
        document.signature_page(),
        Some(document.terms_page_count() - 1)
    );
}

#[test]
fn test_short_english_terms_three_pages() {
    let terms = LocalizedTerms::new(clauses(10, 100, "a"), "", "");
    assert!(terms.english.chars().count() < 1800);

    let config = EngineConfig::default();
    let document =
        DocumentAssembler::new(&config).assemble(&applicant(5, Language::English, 3, terms));

    assert_eq!(document.page_count(), 3);
    assert_eq!(document.signature_page(), Some(0));
    assert!(matches!(document.pages()[1], Page::IdentityImage(_)));
    assert!(matches!(document.pages()[2], Page::IdentityImage(_)));

    match &document.pages()[0] {
        Page::Cover(cover) => {
            assert_eq!(cover.tokens.plan.line_count(), 1);
            assert_eq!(cover.tokens.plan.lines()[0].text(), "001, 002, 003");
            assert!(cover.terms.text().ends_with(
                "I, Asha Patil, have read all the above terms and conditions and I agree to them."
            ));
        }
        other => panic!("expected cover, got {other:?}"),
    }
}

#[test]
fn test_long_hindi_terms_two_chunks() {
    let hindi = clauses(60, 96, "क");
    assert!(hindi.chars().count() >= 6000);

    let config = EngineConfig::default();
    let document = DocumentAssembler::new(&config).assemble(&applicant(
        5,
        Language::Hindi,
        3,
        LocalizedTerms::new("", hindi, ""),
    ));

    assert_eq!(document.terms_page_count(), 2);
    assert_eq!(document.page_count(), 4);
    assert_eq!(document.signature_page(), Some(1));

    match &document.pages()[1] {
        Page::TermsContinuation(page) => {
            assert_eq!(page.heading, "नियम और शर्तें (Continued)");
            assert!(page.terms.is_terminal());
            assert!(page.terms.text().starts_with(|c: char| c.is_ascii_digit()));
        }
        other => panic!("expected continuation page, got {other:?}"),
    }
}

#[test]
fn test_twenty_tokens_wrap_twelve_then_eight() {
    let config = EngineConfig::default();
    let document = DocumentAssembler::new(&config).assemble(&applicant(
        5,
        Language::English,
        20,
        LocalizedTerms::new("1) Rule.", "", ""),
    ));

    let Page::Cover(cover) = &document.pages()[0] else {
        panic!("expected cover");
    };
    let sizes: Vec<usize> = cover
        .tokens
        .plan
        .lines()
        .iter()
        .map(|line| line.tokens.len())
        .collect();

    assert_eq!(sizes, vec![12, 8]);
    assert_eq!(cover.tokens.plan.lines()[0].x, config.layout.value_x);
    assert_eq!(cover.tokens.plan.lines()[1].x, config.layout.label_x);
}

#[test]
fn test_marathi_without_any_terms_uses_placeholder() {
    let config = EngineConfig::default();
    let document = DocumentAssembler::new(&config).assemble(&applicant(
        5,
        Language::Marathi,
        1,
        LocalizedTerms::default(),
    ));

    assert_eq!(document.page_count(), 3);
    let terms = document.pages()[0].terms().unwrap();
    assert_eq!(terms.text(), "अटी व शर्ती उपलब्ध नाहीत");
    assert!(!terms.text().contains("मी, Asha Patil"));
    assert_single_signature_on_last_terms_page(&document);
}

#[test]
fn test_batch_skips_missing_id() {
    let config = EngineConfig::default();
    let terms = LocalizedTerms::new("1) Rule.", "", "");
    let store: HashMap<ApplicantId, ResolvedApplicant> = [
        (5, applicant(5, Language::English, 2, terms.clone())),
        (7, applicant(7, Language::Hindi, 2, terms)),
    ]
    .into_iter()
    .collect();

    let batch = BatchRenderer::new(&config, &store)
        .render_csv("5,999,7")
        .unwrap();

    assert_eq!(batch.rendered(), &[5, 7]);
    assert_eq!(batch.skipped(), &[999]);
    assert_eq!(batch.page_break_count(), 1);
    assert_eq!(batch.page_count(), 6);

    let kinds: Vec<&str> = batch
        .items()
        .iter()
        .map(|item| match item {
            SequenceItem::Page(Page::Cover(_)) => "cover",
            SequenceItem::Page(Page::TermsContinuation(_)) => "continuation",
            SequenceItem::Page(Page::IdentityImage(_)) => "identity",
            SequenceItem::PageBreak => "break",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["cover", "identity", "identity", "break", "cover", "identity", "identity"]
    );
}

#[test]
fn test_single_signature_across_lengths() {
    let config = EngineConfig::default();
    let assembler = DocumentAssembler::new(&config);

    for count in [0, 1, 17, 18, 40, 120] {
        let text = clauses(count, 100, "b");
        for language in Language::ALL {
            let document = assembler.assemble(&applicant(
                1,
                language,
                count,
                LocalizedTerms::new(text.clone(), text.clone(), text.clone()),
            ));
            assert_single_signature_on_last_terms_page(&document);
            assert_eq!(document.page_count(), document.terms_page_count() + 2);
        }
    }
}

#[test]
fn test_chunks_preserve_clause_order() {
    let text = clauses(50, 100, "c");
    let config = EngineConfig::default();
    let document = DocumentAssembler::new(&config).assemble(&applicant(
        1,
        Language::English,
        1,
        LocalizedTerms::new(text.clone(), "", ""),
    ));

    let rendered: Vec<&str> = document
        .pages()
        .iter()
        .filter_map(|page| page.terms())
        .flat_map(|chunk| chunk.lines())
        .collect();

    let mut expected: Vec<&str> = text.lines().collect();
    let declaration =
        "I, Asha Patil, have read all the above terms and conditions and I agree to them.";
    expected.push(declaration);

    assert_eq!(rendered, expected);
}

#[test]
fn test_identity_images_fitted_and_encoded() {
    let config = EngineConfig::default();
    let mut resolved = applicant(3, Language::English, 1, LocalizedTerms::new("1) Rule.", "", ""));
    resolved.documents.front = Some(png_bytes(340, 170));

    let document = DocumentAssembler::new(&config).assemble(&resolved);
    let Page::IdentityImage(front) = &document.pages()[1] else {
        panic!("expected identity page");
    };

    match &front.image {
        ImageSlot::Available {
            mime, placement, ..
        } => {
            assert_eq!(mime, "image/png");
            assert_eq!(placement.width, 170.0);
            assert_eq!(placement.height, 85.0);
        }
        other => panic!("expected available image, got {other:?}"),
    }
    assert!(front
        .image
        .data_uri()
        .unwrap()
        .starts_with("data:image/png;base64,"));

    let value = serde_json::to_value(&document.pages()[2]).unwrap();
    assert_eq!(value["image"]["message"], "Back Aadhaar Image Not Available");
}

#[test]
fn test_json_inputs_end_to_end() {
    let config = parse_config(
        r#"{ "capacity": { "english": 2100, "hindi": 5100, "marathi": 4700 } }"#,
    )
    .unwrap();
    let applicant = parse_applicant(
        &json!({
            "record": {
                "id": 42,
                "first_name": "Ravi",
                "last_name": "Kulkarni",
                "mobileno": "9000000000",
                "token_no": "101,102",
                "draw_name": "Spring Draw",
                "date_time": "2025-02-14 09:15:00",
                "language": "xx"
            },
            "form": {
                "form_name": "silver",
                "languages": { "english": "1) Rule one.\n2) Rule two." }
            }
        })
        .to_string(),
    )
    .unwrap();

    let document = DocumentAssembler::new(&config).assemble(&applicant);
    assert_eq!(document.language(), Language::English);

    let Page::Cover(cover) = &document.pages()[0] else {
        panic!("expected cover");
    };
    assert_eq!(cover.subtitle, "Silver Agreement");
    assert_eq!(cover.details[1].value, "SDC-00042");
    assert_eq!(cover.details[5].value, "14-02-2025");
    assert_eq!(cover.tokens.plan.lines()[0].text(), "101, 102");
}

#[test]
fn test_batch_renders_rows_with_null_columns() {
    let config = EngineConfig::default();
    let source = |id: ApplicantId| {
        parse_applicant(
            &json!({
                "record": {
                    "id": id,
                    "first_name": "Asha",
                    "last_name": null,
                    "mobileno": null,
                    "draw_name": null,
                    "token_no": null,
                    "language": null
                },
                "form": {
                    "form_name": null,
                    "languages": "{\"english\":\"1) Rule one.\"}"
                },
                "documents": null
            })
            .to_string(),
        )
        .ok()
    };

    let batch = BatchRenderer::new(&config, &source).render(&[5, 7]);

    assert_eq!(batch.rendered(), &[5, 7]);
    assert!(batch.skipped().is_empty());

    let Some(Page::Cover(cover)) = batch.pages().next() else {
        panic!("expected cover");
    };
    assert_eq!(cover.subtitle, "Gold Agreement");
    assert!(cover.terms.text().starts_with("1) Rule one."));
}
