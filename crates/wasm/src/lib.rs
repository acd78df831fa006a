//! WASM bindings for draw agreement rendering
//!
//! This crate provides JavaScript-friendly API for:
//! - Assembling one applicant's agreement pages
//! - Batch rendering with a JavaScript lookup callback
//! - Terms resolution and pagination helpers
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { AgreementEngine, AgreementTerms } from 'draw-agreement-wasm';
//!
//! await init();
//!
//! // Defaults, or AgreementEngine.fromConfig(configJson)
//! const engine = new AgreementEngine();
//!
//! // One applicant: { record, form, documents }
//! const pages = engine.renderDocument(applicant);
//!
//! // Many applicants from a synchronous lookup (null when missing)
//! const batch = engine.renderBatch("5,999,7", (id) => cache.get(id) ?? null);
//!
//! // Or from a lookup returning Promises
//! const fetched = await engine.renderBatchAsync("5,999,7", (id) => api.applicant(id));
//! ```

use agreement::{ApplicantId, BatchRenderer, DocumentAssembler, EngineConfig, ResolvedApplicant};
use js_sys::{Function, Promise};
use serde::Serialize;
use std::collections::HashMap;
use terms_text::{CapacityTable, Language, LocalizedTerms, Paginator};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

// Panic hook and console logger for the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A logger may already be installed by the host page
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(to_js_error)
}

fn parse_language(code: &str) -> Result<Language, JsValue> {
    code.parse::<Language>().map_err(to_js_error)
}

fn call_fetch(fetch: &Function, id: ApplicantId) -> Option<JsValue> {
    match fetch.call1(&JsValue::NULL, &JsValue::from_f64(id as f64)) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("fetch threw for applicant {}: {:?}", id, e);
            None
        }
    }
}

fn applicant_from_js(id: ApplicantId, value: JsValue) -> Option<ResolvedApplicant> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| log::warn!("invalid applicant {}: {}", id, e))
        .ok()
}

/// Agreement document renderer
#[wasm_bindgen]
pub struct AgreementEngine {
    config: EngineConfig,
}

#[wasm_bindgen]
impl AgreementEngine {
    /// Create an engine with the default layout and capacities
    #[wasm_bindgen(constructor)]
    pub fn new() -> AgreementEngine {
        AgreementEngine {
            config: EngineConfig::default(),
        }
    }

    /// Create an engine from a JSON configuration
    ///
    /// @param json - Partial configuration; omitted fields keep their defaults
    /// @returns AgreementEngine instance
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<AgreementEngine, JsValue> {
        let config = agreement::parse_config(json).map_err(to_js_error)?;
        Ok(AgreementEngine { config })
    }

    /// Current configuration as JSON
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config).map_err(to_js_error)
    }

    /// Assemble pages for one applicant
    ///
    /// @param applicant - Object with `record`, `form` and optional `documents`
    /// @returns Document object with its ordered pages
    #[wasm_bindgen(js_name = renderDocument)]
    pub fn render_document(&self, applicant: JsValue) -> Result<JsValue, JsValue> {
        let applicant: ResolvedApplicant = serde_wasm_bindgen::from_value(applicant)?;
        let document = DocumentAssembler::new(&self.config).assemble(&applicant);
        to_js(&document)
    }

    /// Render several applicants into one page sequence
    ///
    /// @param ids - Comma-delimited applicant ids (e.g. "5,999,7")
    /// @param fetch - Called with each id; returns an applicant object or null.
    ///   Promises are not awaited here, use `renderBatchAsync` for those.
    /// @returns Object with `items`, `rendered` and `skipped`
    #[wasm_bindgen(js_name = renderBatch)]
    pub fn render_batch(&self, ids: &str, fetch: &Function) -> Result<JsValue, JsValue> {
        let source = |id: ApplicantId| -> Option<ResolvedApplicant> {
            let value = call_fetch(fetch, id)?;
            if value.is_instance_of::<Promise>() {
                log::warn!(
                    "fetch returned a Promise for applicant {}; use renderBatchAsync",
                    id
                );
                return None;
            }
            applicant_from_js(id, value)
        };

        let batch = BatchRenderer::new(&self.config, &source)
            .render_csv(ids)
            .map_err(to_js_error)?;
        to_js(&batch)
    }

    /// Render several applicants, awaiting each lookup in turn
    ///
    /// @param ids - Comma-delimited applicant ids (e.g. "5,999,7")
    /// @param fetch - Called with each id; returns an applicant object, null, or
    ///   a Promise of either
    /// @returns Promise of an object with `items`, `rendered` and `skipped`
    #[wasm_bindgen(js_name = renderBatchAsync)]
    pub fn render_batch_async(&self, ids: &str, fetch: &Function) -> Promise {
        let config = self.config.clone();
        let ids = ids.to_string();
        let fetch = fetch.clone();

        future_to_promise(async move {
            let ids = agreement::parse_id_list(&ids).map_err(to_js_error)?;

            let mut fetched: HashMap<ApplicantId, ResolvedApplicant> = HashMap::new();
            for &id in &ids {
                if fetched.contains_key(&id) {
                    continue;
                }
                let Some(value) = call_fetch(&fetch, id) else {
                    continue;
                };
                let value = if value.is_instance_of::<Promise>() {
                    match JsFuture::from(Promise::from(value)).await {
                        Ok(value) => value,
                        Err(e) => {
                            log::warn!("fetch rejected for applicant {}: {:?}", id, e);
                            continue;
                        }
                    }
                } else {
                    value
                };
                if let Some(applicant) = applicant_from_js(id, value) {
                    fetched.insert(id, applicant);
                }
            }

            let batch = BatchRenderer::new(&config, &fetched).render(&ids);
            to_js(&batch)
        })
    }
}

impl Default for AgreementEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Terms text utilities
#[wasm_bindgen]
pub struct AgreementTerms;

#[wasm_bindgen]
impl AgreementTerms {
    /// Resolve terms with English/placeholder fallback and the declaration
    ///
    /// @param terms - Object with `english`, `hindi`, `marathi` text
    /// @param language - Language code ("en", "hi", "mr")
    /// @param fullName - Applicant name for the declaration
    /// @returns Final terms text
    pub fn resolve(terms: JsValue, language: &str, full_name: &str) -> Result<String, JsValue> {
        let terms: LocalizedTerms = serde_wasm_bindgen::from_value(terms)?;
        let language = parse_language(language)?;
        Ok(terms_text::resolve_terms(&terms, language, full_name).into_text())
    }

    /// Split terms into page-sized chunks using the default budget
    ///
    /// @param text - Resolved terms text
    /// @param language - Language code ("en", "hi", "mr")
    /// @returns Array of chunk strings
    pub fn paginate(text: &str, language: &str) -> Result<Vec<JsValue>, JsValue> {
        let language = parse_language(language)?;
        Ok(Paginator::for_language(&CapacityTable::default(), language)
            .paginate(text)
            .iter()
            .map(|chunk| JsValue::from_str(chunk.text()))
            .collect())
    }

    /// Default character budget for one terms page
    ///
    /// @param language - Language code ("en", "hi", "mr")
    #[wasm_bindgen(js_name = capacityFor)]
    pub fn capacity_for(language: &str) -> Result<usize, JsValue> {
        let language = parse_language(language)?;
        Ok(CapacityTable::default().get(language))
    }
}
