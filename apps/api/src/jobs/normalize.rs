//! Record normalizer: turns one untrusted feed record into a canonical [`Job`].
//!
//! Normalization is total. Each field is read through a typed extractor that
//! either copies a value of the expected kind or falls back to a default, so a
//! malformed upstream record degrades field by field instead of failing.

use serde_json::Value;
use uuid::Uuid;

use crate::jobs::models::{Job, RawRecord, DEFAULT_COMPANY, DEFAULT_CURRENCY, DEFAULT_TITLE};

/// Builds a canonical job from a raw record and assigns it a fresh identity.
///
/// Any identity-like key in `raw` (`id`, `uuid`, ...) is ignored.
pub fn normalize_job(raw: &RawRecord) -> Job {
    Job {
        id: Uuid::new_v4(),
        title: text_or(raw, "title", DEFAULT_TITLE),
        company_name: text_or(raw, "companyName", DEFAULT_COMPANY),
        min_salary: number_or_null(raw, "minSalary"),
        max_salary: number_or_null(raw, "maxSalary"),
        salary_currency: text_or(raw, "salaryCurrency", DEFAULT_CURRENCY),
        salary_period: optional_text(raw, "salaryPeriod"),
        job_type: optional_text(raw, "jobType"),
        location: optional_text(raw, "location"),
        remote: bool_or_absent(raw, "remote"),
        description: optional_text(raw, "description"),
        apply_url: optional_text(raw, "applyUrl"),
        tags: sequence_or_empty(raw, "tags"),
        date_posted: optional_text(raw, "datePosted"),
    }
}

/// Text copied verbatim (no trimming), or `default` when absent or not a string.
pub fn text_or(raw: &RawRecord, key: &str, default: &str) -> String {
    optional_text(raw, key).unwrap_or_else(|| default.to_string())
}

/// Text copied verbatim, present only when the source value is a string.
pub fn optional_text(raw: &RawRecord, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Numeric value, `None` when absent or not a JSON number.
pub fn number_or_null(raw: &RawRecord, key: &str) -> Option<f64> {
    match raw.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
}

/// Boolean value, `None` when absent or not a JSON boolean.
pub fn bool_or_absent(raw: &RawRecord, key: &str) -> Option<bool> {
    raw.get(key).and_then(Value::as_bool)
}

/// Sequence of text. Only arrays are accepted; anything else yields an empty
/// sequence. Elements are not filtered: strings are kept verbatim and any
/// other element is kept as its compact JSON text, so the length and order of
/// the source array are preserved.
pub fn sequence_or_empty(raw: &RawRecord, key: &str) -> Vec<String> {
    match raw.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}
