use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a run. A missing target or a failing predicate is not
/// one of them; both end up in the report as failed
/// [`super::models::CheckResult`]s instead.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl VerifyError {
    /// Exit status for a run aborted by this error. Kept apart from the `1` of
    /// a failed check so callers can tell the two outcomes apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            VerifyError::Io { .. } | VerifyError::Config(_) => 2,
        }
    }
}
