//! Suite configuration.
//!
//! Suites come from `--config`, else from `pagecheck.toml` in the base
//! directory, else from the built-in greeting/goodbye pair.

use crate::domain::errors::VerifyError;
use crate::domain::models::{Check, Predicate, Suite};
use crate::services::predicate::{contains_any, excludes_ignore_case};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "pagecheck.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub suites: Vec<Suite>,
}

fn no_hello() -> Check {
    Check {
        name: "no_hello".to_string(),
        predicate: excludes_ignore_case("hello"),
        pass_message: "HTML does not contain \"hello\"".to_string(),
        fail_message: "HTML contains \"hello\"".to_string(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suites: vec![
                Suite {
                    name: "greeting".to_string(),
                    file: "index.html".to_string(),
                    title: Some("greeting HTML".to_string()),
                    exists_message: None,
                    missing_message: None,
                    checks: vec![
                        Check {
                            name: "has_greeting".to_string(),
                            predicate: contains_any(&["Welcome", "glad to see you"]),
                            pass_message: "HTML contains a greeting".to_string(),
                            fail_message: "HTML does not contain a greeting".to_string(),
                        },
                        no_hello(),
                    ],
                },
                Suite {
                    name: "goodbye".to_string(),
                    file: "goodbye.html".to_string(),
                    title: Some("goodbye HTML".to_string()),
                    exists_message: None,
                    missing_message: None,
                    checks: vec![
                        Check {
                            name: "has_goodbye".to_string(),
                            predicate: contains_any(&["Farewell", "Goodbye", "see you again"]),
                            pass_message: "HTML contains a goodbye message".to_string(),
                            fail_message: "HTML does not contain a goodbye message".to_string(),
                        },
                        no_hello(),
                    ],
                },
            ],
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), VerifyError> {
        if self.suites.is_empty() {
            return Err(VerifyError::Config("at least one suite is required".to_string()));
        }
        let mut seen = HashSet::new();
        for suite in &self.suites {
            if !seen.insert(suite.name.as_str()) {
                return Err(VerifyError::Config(format!(
                    "duplicate suite name `{}`",
                    suite.name
                )));
            }
            if suite.file.trim().is_empty() {
                return Err(VerifyError::Config(format!(
                    "suite `{}` has an empty file",
                    suite.name
                )));
            }
            if suite.checks.is_empty() {
                return Err(VerifyError::Config(format!(
                    "suite `{}` has no checks",
                    suite.name
                )));
            }
            for check in &suite.checks {
                match &check.predicate {
                    Predicate::ContainsAny { phrases } => {
                        if phrases.is_empty() || phrases.iter().any(|p| p.is_empty()) {
                            return Err(VerifyError::Config(format!(
                                "check `{}.{}` needs non-empty phrases",
                                suite.name, check.name
                            )));
                        }
                    }
                    Predicate::ExcludesIgnoreCase { needle } => {
                        if needle.is_empty() {
                            return Err(VerifyError::Config(format!(
                                "check `{}.{}` has an empty needle",
                                suite.name, check.name
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn from_toml(raw: &str) -> Result<Self, VerifyError> {
        let config: Self = toml::from_str(raw).map_err(|e| VerifyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, VerifyError> {
        let raw = std::fs::read_to_string(path).map_err(|source| VerifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Explicit path wins; otherwise `pagecheck.toml` under `base_dir` if present.
    pub fn resolve(explicit: Option<&Path>, base_dir: &Path) -> Result<Self, VerifyError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }
        let local = base_dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            debug!(path = %local.display(), "loading config from base dir");
            Self::load(&local)
        } else {
            Ok(Self::default())
        }
    }

    /// Suites in configured order, or the named subset in the order given.
    pub fn select(&self, names: &[String]) -> Result<Vec<&Suite>, VerifyError> {
        if names.is_empty() {
            return Ok(self.suites.iter().collect());
        }
        names
            .iter()
            .map(|n| {
                self.suites
                    .iter()
                    .find(|s| &s.name == n)
                    .ok_or_else(|| VerifyError::Config(format!("unknown suite `{n}`")))
            })
            .collect()
    }
}

/// Directory holding the running executable; target files resolve against it.
pub fn default_base_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("executable has no parent directory"))?;
    Ok(dir.to_path_buf())
}
