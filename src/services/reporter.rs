use crate::domain::errors::VerifyError;
use crate::domain::models::{CheckResult, SuiteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

/// Sink for report lines plus the process exit status.
pub trait Reporter {
    fn line(&mut self, stream: Stream, text: &str);
    fn set_exit_code(&mut self, code: u8);
}

#[derive(Default)]
pub struct ConsoleReporter {
    exit_code: u8,
}

impl ConsoleReporter {
    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl Reporter for ConsoleReporter {
    fn line(&mut self, stream: Stream, text: &str) {
        match stream {
            Stream::Out => println!("{text}"),
            Stream::Err => eprintln!("{text}"),
        }
    }

    fn set_exit_code(&mut self, code: u8) {
        self.exit_code = code;
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryReporter {
    pub lines: Vec<(Stream, String)>,
    pub exit_code: Option<u8>,
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn line(&mut self, stream: Stream, text: &str) {
        self.lines.push((stream, text.to_string()));
    }

    fn set_exit_code(&mut self, code: u8) {
        self.exit_code = Some(code);
    }
}

fn check_line(reporter: &mut dyn Reporter, check: &CheckResult) {
    if check.passed {
        reporter.line(Stream::Out, &format!("✅ Test passed: {}", check.message));
    } else {
        reporter.line(Stream::Err, &format!("❌ Test failed: {}", check.message));
    }
}

/// Prints one outcome and returns the exit code it implies.
pub fn report(outcome: &SuiteOutcome, reporter: &mut dyn Reporter) -> u8 {
    reporter.line(Stream::Out, &format!("Running tests for {}...", outcome.title));
    check_line(reporter, &outcome.existence);
    for check in &outcome.report.checks {
        check_line(reporter, check);
    }

    let code = if outcome.report.overall_passed {
        reporter.line(Stream::Out, "🎉 All tests passed!");
        0
    } else {
        reporter.line(Stream::Err, "⚠️ Some tests failed.");
        1
    };
    reporter.set_exit_code(code);
    code
}

/// Reports outcomes as they are produced; the run fails if any suite failed.
///
/// A fatal error stops the run, but only after every earlier outcome has been
/// printed.
pub fn report_all<I>(outcomes: I, reporter: &mut dyn Reporter) -> Result<u8, VerifyError>
where
    I: IntoIterator<Item = Result<SuiteOutcome, VerifyError>>,
{
    let mut code = 0;
    for outcome in outcomes {
        code = code.max(report(&outcome?, reporter));
    }
    reporter.set_exit_code(code);
    Ok(code)
}
