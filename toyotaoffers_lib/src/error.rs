//! Error types for the scraping library.

/// Errors that abort a scrape run.
///
/// Selector and pattern misses are not errors: extraction degrades to
/// sentinel values and the run continues.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// A network-level HTTP failure (connect, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// An extraction ruleset (CSS selector or regex) failed to compile.
    #[error("extraction ruleset error: {0}")]
    Rules(String),
}
