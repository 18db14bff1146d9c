//! Card-level view of a job: the labels a listing row shows.

use serde::Serialize;
use uuid::Uuid;

use crate::jobs::models::{Job, DEFAULT_COMPANY};

const MAX_PREVIEW_TAGS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    pub location_label: String,
    pub job_type: Option<String>,
    pub salary_label: String,
    /// "Remote" / "On-site"; absent when the feed said nothing.
    pub remote_label: Option<String>,
    pub tags: Vec<String>,
    /// Number of tags beyond the preview.
    pub extra_tags: usize,
    pub saved: bool,
}

impl JobSummary {
    pub fn new(job: &Job, saved: bool) -> Self {
        let title = if job.title.is_empty() {
            "Untitled Position".to_string()
        } else {
            job.title.clone()
        };
        let company_name = if job.company_name.is_empty() {
            DEFAULT_COMPANY.to_string()
        } else {
            job.company_name.clone()
        };
        let location_label = match job.location.as_deref() {
            Some(loc) if !loc.is_empty() => loc.to_string(),
            _ => "Location not specified".to_string(),
        };
        let job_type = job.job_type.clone().filter(|t| !t.is_empty());
        let remote_label = job
            .remote
            .map(|remote| if remote { "Remote" } else { "On-site" }.to_string());

        Self {
            id: job.id,
            title,
            company_name,
            location_label,
            job_type,
            salary_label: format_salary(job),
            remote_label,
            tags: job.tags.iter().take(MAX_PREVIEW_TAGS).cloned().collect(),
            extra_tags: job.tags.len().saturating_sub(MAX_PREVIEW_TAGS),
            saved,
        }
    }
}

/// Human salary range. A bound of zero counts as not disclosed.
pub fn format_salary(job: &Job) -> String {
    let min = job.min_salary.filter(|v| *v != 0.0);
    let max = job.max_salary.filter(|v| *v != 0.0);
    let cur = &job.salary_currency;
    let period = job
        .salary_period
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!("/{p}"))
        .unwrap_or_default();

    match (min, max) {
        (Some(min), Some(max)) => format!(
            "{cur}{} – {cur}{}{period}",
            format_amount(min),
            format_amount(max)
        ),
        (Some(min), None) => format!("From {cur}{}{period}", format_amount(min)),
        (None, Some(max)) => format!("Up to {cur}{}{period}", format_amount(max)),
        (None, None) => "Salary not disclosed".to_string(),
    }
}

/// "1 job found" / "12 jobs found".
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 job found".to_string()
    } else {
        format!("{count} jobs found")
    }
}

/// en-US style grouping with at most three fraction digits: 85000 -> "85,000".
fn format_amount(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}
