//! The error for messages that are not conventional commits.

use std::fmt;

/// The error returned when parsing a commit message fails.
///
/// A message either parses in full or not at all, so this error carries no
/// rule or position information.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    commit: Option<String>,
}

impl Error {
    pub(crate) fn new() -> Self {
        Self { commit: None }
    }

    pub(crate) fn with_commit(commit: &str) -> Self {
        Self {
            commit: Some(commit.to_owned()),
        }
    }

    /// The message that failed to parse, when it was recorded.
    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("message does not conform to the Conventional Commit specification")
    }
}

impl std::error::Error for Error {}
