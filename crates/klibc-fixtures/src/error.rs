//! Emitter error taxonomy.
//!
//! Inputs are compiled-in literals, so in practice the only failure is an
//! output path the emitter cannot write to. [`CaseError`] guards the case
//! tables themselves and is exercised by tests only.

use std::path::PathBuf;

use klibc_ref::stdio::FormatError;
use thiserror::Error;

use crate::fixtures::Routine;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write fixture {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("structured log: {0}")]
    Log(#[from] std::io::Error),
    #[error(transparent)]
    Case(#[from] CaseError),
}

/// A case whose expected value cannot be derived.
#[derive(Debug, Error)]
#[error("{routine:?} case '{label}': {source}")]
pub struct CaseError {
    pub routine: Routine,
    pub label: String,
    #[source]
    pub source: FormatError,
}
