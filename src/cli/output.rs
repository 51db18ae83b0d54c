//! Colored output helpers for the CLI.

use crate::types::Answer;
use owo_colors::OwoColorize;

/// Output style configuration.
pub struct Output {
    /// Whether to use colored output.
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled.
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled.
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print an answer as pretty JSON.
    pub fn answer_json(&self, answer: &Answer) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(answer)?);
        Ok(())
    }

    /// Print an answer for humans.
    pub fn answer(&self, answer: &Answer) {
        match answer {
            Answer::Number(_) | Answer::Text(_) => {
                if self.colored {
                    println!("{}", answer.to_string().bold());
                } else {
                    println!("{}", answer);
                }
            }
            Answer::Jobs(jobs) if jobs.is_empty() => {
                if self.colored {
                    println!("{}", "No matching jobs found.".yellow());
                } else {
                    println!("No matching jobs found.");
                }
            }
            Answer::Jobs(jobs) => {
                for job in jobs {
                    if self.colored {
                        println!(
                            "  {} {} at {} ({}) [{}]",
                            "•".green(),
                            job.role.bold(),
                            job.company,
                            job.location,
                            job.date_posted.dimmed()
                        );
                    } else {
                        println!(
                            "  - {} at {} ({}) [{}]",
                            job.role, job.company, job.location, job.date_posted
                        );
                    }
                }
            }
        }
    }
}
