//! Static data sources backing the tools.
//!
//! Each source is a thin, path- or table-backed client injected into the
//! tools that consume it. File-backed sources are read per consultation and
//! surface read failures as `Result` so callers can choose how to degrade:
//! extraction treats a failure as "no entries", while the knowledge-base
//! executor renders it as a `"KB error: "` answer.

/// Job-listings file access.
pub mod jobs;
/// Knowledge-base file access.
pub mod knowledge;
/// Fixed temperature and sky-condition tables.
pub mod weather;

pub use jobs::JobBoard;
pub use knowledge::{KbEntry, KnowledgeBase};
pub use weather::WeatherTable;
