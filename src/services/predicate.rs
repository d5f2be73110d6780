use crate::domain::models::{Check, CheckResult, Predicate};

impl Predicate {
    pub fn test(&self, content: &str) -> bool {
        match self {
            Predicate::ContainsAny { phrases } => phrases.iter().any(|p| content.contains(p.as_str())),
            Predicate::ExcludesIgnoreCase { needle } => {
                !content.to_lowercase().contains(&needle.to_lowercase())
            }
        }
    }
}

impl Check {
    pub fn run(&self, content: &str) -> CheckResult {
        let passed = self.predicate.test(content);
        CheckResult {
            name: self.name.clone(),
            passed,
            message: if passed {
                self.pass_message.clone()
            } else {
                self.fail_message.clone()
            },
        }
    }
}

pub fn contains_any(phrases: &[&str]) -> Predicate {
    Predicate::ContainsAny {
        phrases: phrases.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn excludes_ignore_case(needle: &str) -> Predicate {
    Predicate::ExcludesIgnoreCase {
        needle: needle.to_string(),
    }
}
