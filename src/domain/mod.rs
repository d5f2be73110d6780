//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep suite definitions and report structs in one place.
//! - Avoid cyclic imports between services and command handlers.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — suites, checks, predicates and report/output structs.
//! - `errors.rs` — fatal error taxonomy for a run.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in report structs affect `--json` output.
//! Keep them synchronized with `docs/contracts/run.schema.json`.

pub mod errors;
pub mod models;
