//! Job-search tool.

use crate::context::Context;
use crate::sources::JobBoard;
use crate::tools::Tool;
use crate::types::{Answer, Job, Result, ToolArgs};
use async_trait::async_trait;

/// Synonym groups mapping free-text date phrases onto posting-age buckets.
const DATE_BUCKETS: &[(&[&str], &str)] = &[
    (&["24h", "24 hours", "today", "recently"], "24h"),
    (&["1 week", "last week", "7 days"], "1w"),
    (&["1 month", "last month", "30 days"], "1m"),
];

/// Maps a raw date phrase onto a bucket, or `None` for no date constraint.
fn map_date_bucket(raw: &str) -> Option<&'static str> {
    let raw = raw.to_lowercase();
    DATE_BUCKETS
        .iter()
        .find(|(synonyms, _)| synonyms.iter().any(|s| raw.contains(s)))
        .map(|(_, bucket)| *bucket)
}

/// Filters the job board by role, location, company, and posting age.
///
/// Absent filters mean "no constraint"; a missing or unreadable listings
/// file degrades to an empty result. The tool writes nothing into the
/// context: a job list is neither a number nor text.
pub struct JobSearchTool {
    board: JobBoard,
}

impl JobSearchTool {
    /// Creates the tool over the given job board.
    pub fn new(board: JobBoard) -> Self {
        Self { board }
    }
}

fn matches_filter(field: &str, filter: Option<&str>) -> bool {
    filter.is_none_or(|f| field.eq_ignore_ascii_case(f))
}

#[async_trait]
impl Tool for JobSearchTool {
    fn name(&self) -> &str {
        "job_search"
    }

    fn description(&self) -> &str {
        "Search job listings by role, company, location, and posting age"
    }

    async fn execute(&self, args: &ToolArgs, _context: &mut Context) -> Result<Answer> {
        let role = args.get("role").map(String::as_str);
        let location = args.get("location").map(String::as_str);
        let company = args.get("company").map(String::as_str);
        let date_bucket = args
            .get("date_posted")
            .and_then(|raw| map_date_bucket(raw));

        let jobs = match self.board.jobs().await {
            Ok(jobs) => jobs,
            Err(e) => {
                tracing::warn!(error = %e, "job listings unavailable, returning no results");
                Vec::new()
            }
        };

        let results: Vec<Job> = jobs
            .into_iter()
            .filter(|job| {
                matches_filter(&job.role, role)
                    && matches_filter(&job.location, location)
                    && matches_filter(&job.company, company)
                    && matches_filter(&job.date_posted, date_bucket)
            })
            .collect();

        Ok(Answer::Jobs(results))
    }
}
