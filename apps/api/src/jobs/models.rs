use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One untrusted job posting exactly as the feed delivered it.
/// No key is guaranteed present and no value is guaranteed well-typed;
/// it may not even be an object.
pub type RawRecord = serde_json::Value;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_COMPANY: &str = "Unknown Company";
pub const DEFAULT_CURRENCY: &str = "$";

/// Canonical job posting. Every field holds a value of its declared kind
/// regardless of what the raw record contained.
///
/// `id` is minted at normalization time and lives only as long as the
/// in-memory listing it came from; a refresh mints new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub salary_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,
}
