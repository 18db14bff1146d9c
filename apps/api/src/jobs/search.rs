use crate::jobs::models::Job;

/// Narrows `jobs` to those matching a free-text query, preserving order.
///
/// The query is trimmed and lowercased once. A blank query keeps every job.
/// Otherwise a job is kept when the query is a case-insensitive substring of
/// its title, company, location, job type, or any one tag. No ranking.
pub fn filter_jobs<'a>(jobs: &'a [Job], query: &str) -> Vec<&'a Job> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return jobs.iter().collect();
    }
    jobs.iter().filter(|job| matches_query(job, &q)).collect()
}

/// `needle` must already be trimmed and lowercased.
fn matches_query(job: &Job, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&job.title)
        || contains(&job.company_name)
        || contains(job.location.as_deref().unwrap_or(""))
        || contains(job.job_type.as_deref().unwrap_or(""))
        || job.tags.iter().any(|tag| contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::normalize::normalize_job;
    use serde_json::json;

    fn fixture() -> Vec<Job> {
        [
            json!({ "title": "Rust Engineer", "companyName": "Ferrous", "location": "Berlin", "tags": ["systems"] }),
            json!({ "title": "Designer", "companyName": "Pixel Co", "jobType": "Contract" }),
            json!({ "title": "Backend Dev", "companyName": "Acme", "tags": ["Go", "RUST"] }),
            json!({ "title": "Nurse", "companyName": "City Hospital", "location": "Manila" }),
        ]
        .iter()
        .map(normalize_job)
        .collect()
    }

    fn titles(jobs: &[&Job]) -> Vec<String> {
        jobs.iter().map(|j| j.title.clone()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let jobs = fixture();
        assert_eq!(filter_jobs(&jobs, "").len(), 4);
        assert_eq!(filter_jobs(&jobs, "   \t").len(), 4);
    }

    #[test]
    fn test_matches_title_and_tags_case_insensitively_in_order() {
        let jobs = fixture();
        let hits = filter_jobs(&jobs, "  rust ");
        assert_eq!(titles(&hits), vec!["Rust Engineer", "Backend Dev"]);
    }

    #[test]
    fn test_matches_company_location_and_job_type() {
        let jobs = fixture();
        assert_eq!(titles(&filter_jobs(&jobs, "pixel")), vec!["Designer"]);
        assert_eq!(titles(&filter_jobs(&jobs, "MANILA")), vec!["Nurse"]);
        assert_eq!(titles(&filter_jobs(&jobs, "contract")), vec!["Designer"]);
    }

    #[test]
    fn test_description_is_not_searched() {
        let jobs = vec![normalize_job(&json!({
            "title": "Analyst",
            "description": "kubernetes everywhere"
        }))];
        assert!(filter_jobs(&jobs, "kubernetes").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let jobs = fixture();
        let once: Vec<Job> = filter_jobs(&jobs, "e").into_iter().cloned().collect();
        let twice = filter_jobs(&once, "e");
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(twice).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_no_match_yields_empty() {
        let jobs = fixture();
        assert!(filter_jobs(&jobs, "astronaut").is_empty());
    }
}
