//! JSON and list parsing at the engine boundary

use crate::{AgreementError, ApplicantId, EngineConfig, ResolvedApplicant, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use terms_text::LocalizedTerms;

/// Parse an engine configuration from JSON, filling omitted fields with defaults
pub fn parse_config(json: &str) -> Result<EngineConfig> {
    let config: EngineConfig =
        serde_json::from_str(json).map_err(|e| AgreementError::ParseError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Parse one resolved applicant (record, form, and documents) from JSON
pub fn parse_applicant(json: &str) -> Result<ResolvedApplicant> {
    serde_json::from_str(json).map_err(|e| AgreementError::ParseError(e.to_string()))
}

/// Parse a comma-delimited applicant id list
///
/// Anything other than digits and commas is stripped first, then zero and
/// unparsable entries are dropped. Order and repeats are kept.
///
/// # Examples
/// ```
/// use agreement::parse_id_list;
/// assert_eq!(parse_id_list(" 5, 999 ,x7").unwrap(), vec![5, 999, 7]);
/// assert!(parse_id_list("abc").is_err());
/// ```
pub fn parse_id_list(input: &str) -> Result<Vec<ApplicantId>> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();

    let ids: Vec<ApplicantId> = cleaned
        .split(',')
        .filter_map(|part| part.parse::<ApplicantId>().ok())
        .filter(|id| *id > 0)
        .collect();

    if ids.is_empty() {
        return Err(AgreementError::InvalidIdList(format!(
            "no valid ids in {input:?}"
        )));
    }

    Ok(ids)
}

/// Split a stored comma-separated token string into trimmed, non-blank entries
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenValue {
    Text(String),
    Number(u64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenField {
    Csv(String),
    List(Vec<TokenValue>),
}

/// Deserialize tokens from either `"12,13"` or `["12", 13]`
pub fn deserialize_tokens<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tokens = match Option::<TokenField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TokenField::Csv(raw)) => split_tokens(&raw),
        Some(TokenField::List(values)) => values
            .into_iter()
            .map(|value| match value {
                TokenValue::Text(text) => text.trim().to_string(),
                TokenValue::Number(n) => n.to_string(),
            })
            .filter(|t| !t.is_empty())
            .collect(),
    };
    Ok(tokens)
}

/// Read `null` the same as a missing value
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) const DEFAULT_CATEGORY: &str = "Gold";

/// Category name, with `null` and blank reading as the default category
pub fn deserialize_category<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TermsField {
    Map(LocalizedTerms),
    Encoded(String),
}

/// Terms per language, as an object or a JSON-encoded object string
///
/// `null` and undecodable strings read as no terms, which renders the placeholder.
pub fn deserialize_terms<'de, D>(deserializer: D) -> std::result::Result<LocalizedTerms, D::Error>
where
    D: Deserializer<'de>,
{
    let terms = match Option::<TermsField>::deserialize(deserializer)? {
        None => LocalizedTerms::default(),
        Some(TermsField::Map(terms)) => terms,
        Some(TermsField::Encoded(raw)) if raw.trim().is_empty() => LocalizedTerms::default(),
        Some(TermsField::Encoded(raw)) => {
            match serde_json::from_str::<Option<LocalizedTerms>>(&raw) {
                Ok(terms) => terms.unwrap_or_default(),
                Err(e) => {
                    log::warn!("ignoring undecodable terms text: {}", e);
                    LocalizedTerms::default()
                }
            }
        }
    };
    Ok(terms)
}

const STORED_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a submission timestamp
///
/// Accepts the stored `YYYY-MM-DD HH:MM:SS` form, ISO 8601 with or without an
/// offset, and a bare `YYYY-MM-DD` date (taken as midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    NaiveDateTime::parse_from_str(raw, STORED_TIMESTAMP)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Serde adapter for optional submission timestamps
pub mod timestamp {
    use super::{parse_timestamp, STORED_TIMESTAMP};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(STORED_TIMESTAMP).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Blank, `null`, and unrecognised values read as no timestamp
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match Option::<String>::deserialize(deserializer)? {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => {
                let parsed = parse_timestamp(&raw);
                if parsed.is_none() {
                    log::warn!("ignoring unrecognised timestamp {:?}", raw);
                }
                parsed
            }
        };
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use terms_text::Language;

    #[test]
    fn test_parse_id_list_strips_noise() {
        assert_eq!(parse_id_list("5,999,7").unwrap(), vec![5, 999, 7]);
        assert_eq!(parse_id_list("[5, 0, 7]").unwrap(), vec![5, 7]);
        assert_eq!(parse_id_list("5,,5").unwrap(), vec![5, 5]);
    }

    #[test]
    fn test_parse_id_list_empty_is_error() {
        let err = parse_id_list(" , 0 ").unwrap_err();
        assert!(matches!(err, AgreementError::InvalidIdList(_)));
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(split_tokens(" 12, 13,,14 "), vec!["12", "13", "14"]);
        assert!(split_tokens("").is_empty());
    }

    #[test]
    fn test_deserialize_tokens_forms() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "deserialize_tokens")]
            tokens: Vec<String>,
        }

        let from_list: Holder =
            serde_json::from_value(json!({ "tokens": ["A1", 7, " "] })).unwrap();
        assert_eq!(from_list.tokens, vec!["A1", "7"]);

        let from_null: Holder = serde_json::from_value(json!({ "tokens": null })).unwrap();
        assert!(from_null.tokens.is_empty());

        let missing: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(missing.tokens.is_empty());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 22)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        assert_eq!(parse_timestamp("2025-01-22 10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-22T10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-22T10:30:00+05:30"), Some(expected));
        assert_eq!(
            parse_timestamp("2025-01-22"),
            NaiveDate::from_ymd_opt(2025, 1, 22).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("22/01/2025"), None);
    }

    #[test]
    fn test_parse_config_rejects_invalid() {
        assert!(parse_config("{}").is_ok());
        assert!(matches!(
            parse_config(r#"{ "capacity": { "hindi": 0 } }"#),
            Err(AgreementError::TermsError(_))
        ));
        assert!(matches!(
            parse_config("not json"),
            Err(AgreementError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_applicant_minimal() {
        let applicant = parse_applicant(
            r#"{
                "record": { "id": 7, "given_name": "Ravi" },
                "form": { "category": "bike" }
            }"#,
        )
        .unwrap();

        assert_eq!(applicant.record.id, 7);
        assert_eq!(applicant.form.category, "bike");
        assert_eq!(applicant.documents.front(), None);
    }

    #[test]
    fn test_parse_applicant_tolerates_null_columns() {
        let applicant = parse_applicant(
            &json!({
                "record": {
                    "id": 5,
                    "first_name": "Asha",
                    "last_name": null,
                    "mobileno": null,
                    "draw_name": null,
                    "token_no": null,
                    "date_time": "22/01/2025",
                    "language": null,
                    "forms_aggri_id": null
                },
                "form": { "id": null, "form_name": null, "languages": null }
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(applicant.record.full_name(), "Asha");
        assert_eq!(applicant.record.mobile, "");
        assert_eq!(applicant.record.draw_name, "");
        assert_eq!(applicant.record.language, Language::English);
        assert_eq!(applicant.record.form_id, 0);
        assert_eq!(applicant.record.submitted_at, None);
        assert_eq!(applicant.form.category, "Gold");
        assert_eq!(applicant.form.terms, LocalizedTerms::default());
    }

    #[test]
    fn test_parse_applicant_terms_as_encoded_string() {
        let applicant = parse_applicant(
            &json!({
                "record": { "id": 5, "first_name": "Asha", "language": "hi" },
                "form": {
                    "form_name": "  ",
                    "languages": "{\"english\":\"1) x\",\"hindi\":null}"
                }
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(applicant.form.category, "Gold");
        assert_eq!(applicant.form.terms.get(Language::English), Some("1) x"));
        assert_eq!(applicant.form.terms.get(Language::Hindi), None);
    }

    #[test]
    fn test_parse_applicant_undecodable_terms_string() {
        let applicant = parse_applicant(
            &json!({
                "record": { "id": 5, "first_name": "Asha" },
                "form": { "languages": "{not json" }
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(applicant.form.terms, LocalizedTerms::default());
    }
}
