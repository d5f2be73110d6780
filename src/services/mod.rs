//! Service layer containing verification logic and side-effect helpers.
//!
//! ## Service map
//! - `predicate.rs` — predicate evaluation and check verdicts.
//! - `verifier.rs` — exists/load/evaluate/aggregate pipeline per suite.
//! - `reporter.rs` — report lines and exit code through an injectable sink.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod output;
pub mod predicate;
pub mod reporter;
pub mod verifier;
