use crate::domain::errors::VerifyError;
use crate::domain::models::{Check, CheckResult, Suite, SuiteOutcome, VerificationReport};
use std::path::Path;
use tracing::{debug, info};

/// Fails closed: anything that prevents confirming the path reads as absent.
pub fn verify_file_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

/// Any read or decode failure is fatal, including a file that vanished after
/// [`verify_file_exists`] saw it.
pub fn load_content(path: &Path) -> Result<String, VerifyError> {
    let bytes = std::fs::read(path).map_err(|source| VerifyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| VerifyError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}

/// Runs every check, in declaration order, regardless of earlier failures.
pub fn evaluate(content: &str, checks: &[Check]) -> Vec<CheckResult> {
    checks
        .iter()
        .map(|check| {
            let result = check.run(content);
            debug!(check = %result.name, passed = result.passed, "evaluated check");
            result
        })
        .collect()
}

pub fn aggregate(file_exists: bool, checks: Vec<CheckResult>) -> VerificationReport {
    if !file_exists {
        return VerificationReport {
            file_exists: false,
            checks: Vec::new(),
            overall_passed: false,
        };
    }
    let overall_passed = checks.iter().all(|c| c.passed);
    VerificationReport {
        file_exists,
        checks,
        overall_passed,
    }
}

pub fn verify_suite(base_dir: &Path, suite: &Suite) -> Result<SuiteOutcome, VerifyError> {
    let path = base_dir.join(&suite.file);
    let file_exists = verify_file_exists(&path);

    let existence = CheckResult {
        name: "file_exists".to_string(),
        passed: file_exists,
        message: if file_exists {
            suite.exists_message()
        } else {
            suite.missing_message()
        },
    };

    let checks = if file_exists {
        let content = load_content(&path)?;
        evaluate(&content, &suite.checks)
    } else {
        debug!(suite = %suite.name, path = %path.display(), "target file missing, skipping checks");
        Vec::new()
    };

    let report = aggregate(file_exists, checks);
    info!(
        suite = %suite.name,
        passed = report.overall_passed,
        "suite verified"
    );

    Ok(SuiteOutcome {
        suite: suite.name.clone(),
        title: suite.title(),
        file: suite.file.clone(),
        existence,
        report,
    })
}
