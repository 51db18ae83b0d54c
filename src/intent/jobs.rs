//! Job-search intent extraction.

use crate::types::{ToolArgs, ToolCall, ToolKind};

/// Generic job-hunting trigger words.
const JOB_KEYWORDS: &[&str] = &["job", "position", "career", "hiring", "vacancy"];

/// Known role phrases; a role alone is a sufficient trigger.
const ROLE_KEYWORDS: &[&str] = &[
    "software engineer",
    "developer",
    "ai engineer",
    "machine learning engineer",
    "frontend developer",
    "backend developer",
    "full stack developer",
    "swe",
];

/// Known hiring companies.
const COMPANY_KEYWORDS: &[&str] = &[
    "optimizely",
    "google",
    "amazon",
    "meta",
    "nvidia",
    "openai",
    "delivery hero",
];

/// Known locations.
const LOCATION_KEYWORDS: &[&str] = &[
    "dhaka",
    "bangladesh",
    "usa",
    "uk",
    "canada",
    "remote",
    "new york",
    "california",
    "australia",
    "germany",
    "india",
];

/// Date phrases recognized at extraction time; bucket mapping happens in the
/// executor, and some of these (e.g. "yesterday") map to no bucket at all.
const DATE_KEYWORDS: &[&str] = &[
    "24h",
    "24 hours",
    "recently",
    "1 day",
    "yesterday",
    "1 week",
    "7 days",
    "last week",
    "1 month",
    "30 days",
];

fn first_match<'a>(query: &str, keywords: &[&'a str]) -> Option<&'a str> {
    keywords.iter().copied().find(|k| query.contains(k))
}

/// Emits a job-search call when a job keyword or a known role phrase
/// appears. Filters are the first match from each keyword table; absent
/// filters are omitted and treated downstream as "no constraint".
pub fn extract(query: &str) -> Option<ToolCall> {
    let role = first_match(query, ROLE_KEYWORDS);
    if role.is_none() && !JOB_KEYWORDS.iter().any(|k| query.contains(k)) {
        return None;
    }

    let mut args = ToolArgs::new();
    if let Some(role) = role {
        args.insert("role".to_string(), role.to_string());
    }
    if let Some(company) = first_match(query, COMPANY_KEYWORDS) {
        args.insert("company".to_string(), company.to_string());
    }
    if let Some(location) = first_match(query, LOCATION_KEYWORDS) {
        args.insert("location".to_string(), location.to_string());
    }
    if let Some(date) = first_match(query, DATE_KEYWORDS) {
        args.insert("date_posted".to_string(), date.to_string());
    }
    Some(ToolCall::new(ToolKind::JobSearch, args))
}
