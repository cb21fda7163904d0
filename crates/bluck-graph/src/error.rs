//! Error types for graph building and querying.

use std::fmt;

use bluck_catalog::SourceError;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// No ingested movie has this title.
    #[error("movie not found for title: {0}")]
    MovieNotFound(String),

    /// The request cannot be answered with the arguments given.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// One or more catalog pages failed during the build.
    #[error("graph build incomplete: {0}")]
    PartialBuild(#[from] BuildFailure),

    /// A custom populate function failed.
    #[error("graph population failed: {0}")]
    Populate(String),
}

/// One catalog page that could not be fetched.
#[derive(Debug)]
pub struct PageFailure {
    pub page: String,
    pub error: SourceError,
}

/// Every page failure from a single build, in page order.
#[derive(Debug, Default)]
pub struct BuildFailure {
    failures: Vec<PageFailure>,
}

impl BuildFailure {
    pub fn push(&mut self, page: impl Into<String>, error: SourceError) {
        self.failures.push(PageFailure {
            page: page.into(),
            error,
        });
    }

    pub fn failures(&self) -> &[PageFailure] {
        &self.failures
    }

    pub fn failed_pages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.page.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// `Err(self)` when anything failed.
    pub fn into_result(self) -> std::result::Result<(), BuildFailure> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} page(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  page {}: {}", failure.page, failure.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for BuildFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_failure_lists_every_page() {
        let mut failure = BuildFailure::default();
        failure.push(
            "B",
            SourceError::Io(std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout")),
        );
        failure.push(
            "Q",
            SourceError::PageUnavailable {
                page: "Q".into(),
                reason: "throttled".into(),
            },
        );

        let msg = GraphError::from(failure).to_string();
        assert!(msg.contains("2 page(s) failed"));
        assert!(msg.contains("page B: I/O error: timeout"));
        assert!(msg.contains("throttled"));
    }

    #[test]
    fn empty_build_failure_is_ok() {
        assert!(BuildFailure::default().into_result().is_ok());
    }
}
