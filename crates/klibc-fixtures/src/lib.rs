//! Self-checking C fixture generator for klib.
//!
//! This crate provides:
//! - Case tables for 15 `<string.h>` and `<stdio.h>` routines
//! - Rendering of one `<routine>_test.c` program per routine, asserting
//!   through the harness `check` macro from `trap.h`
//! - Re-derivation of every embedded expectation against `klibc_ref`
//! - Structured JSONL logging and a SHA-256 artifact index per run

#![forbid(unsafe_code)]

pub mod c_source;
pub mod emitter;
pub mod error;
pub mod fixtures;
pub mod payload;
pub mod routines;
pub mod structured_log;
pub mod verify;

pub use emitter::{DEFAULT_OUTPUT_DIR, EmitReport, FixtureEmitter, generate_tests};
pub use error::{CaseError, EmitError};
pub use fixtures::{Expected, FixtureCase, FixtureFile, Probe, Routine};
pub use payload::{DEFAULT_SEED, parse_seed};
pub use verify::{VerificationResult, VerificationSummary, verify_all};
