use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Verdict of a single check against a file's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
}

/// Aggregated outcome for one file.
///
/// Only [`crate::services::verifier::aggregate`] builds this, so a report for a
/// missing file never carries content checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub file_exists: bool,
    pub checks: Vec<CheckResult>,
    pub overall_passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteOutcome {
    pub suite: String,
    pub title: String,
    pub file: String,
    pub existence: CheckResult,
    pub report: VerificationReport,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub overall_passed: bool,
    pub suites: Vec<SuiteOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// Case-sensitive; passes when any phrase occurs in the content.
    ContainsAny { phrases: Vec<String> },
    /// Passes when the lower-cased content does not contain the needle.
    ExcludesIgnoreCase { needle: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    #[serde(flatten)]
    pub predicate: Predicate,
    #[serde(rename = "pass")]
    pub pass_message: String,
    #[serde(rename = "fail")]
    pub fail_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,
    pub file: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub exists_message: Option<String>,
    #[serde(default)]
    pub missing_message: Option<String>,
    pub checks: Vec<Check>,
}

impl Suite {
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} HTML", self.name))
    }

    pub fn exists_message(&self) -> String {
        self.exists_message
            .clone()
            .unwrap_or_else(|| format!("{} file exists", self.file))
    }

    pub fn missing_message(&self) -> String {
        self.missing_message
            .clone()
            .unwrap_or_else(|| format!("{} file does not exist", self.file))
    }
}

#[derive(Serialize)]
pub struct SuiteListing {
    pub name: String,
    pub file: String,
    pub checks: Vec<String>,
}
