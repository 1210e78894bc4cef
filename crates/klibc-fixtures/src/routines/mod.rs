//! Case tables and fixture builders, one builder per routine.

pub mod format;
pub mod memory;
pub mod strings;

use crate::error::CaseError;
use crate::fixtures::{FixtureFile, Routine};

/// Build the fixture for `routine`. `seed` only affects `memcpy`.
pub fn build(routine: Routine, seed: u64) -> Result<FixtureFile, CaseError> {
    Ok(match routine {
        Routine::Memset => memory::memset_fixture(),
        Routine::Memcpy => memory::memcpy_fixture(seed),
        Routine::Memmove => memory::memmove_fixture(),
        Routine::Memcmp => memory::memcmp_fixture(),
        Routine::Strlen => strings::strlen_fixture(),
        Routine::Strcat => strings::strcat_fixture(),
        Routine::Strcpy => strings::strcpy_fixture(),
        Routine::Strncpy => strings::strncpy_fixture(),
        Routine::Strcmp => strings::strcmp_fixture(),
        Routine::Strncmp => strings::strncmp_fixture(),
        Routine::Printf => format::printf_fixture()?,
        Routine::Sprintf => format::sprintf_fixture()?,
        Routine::Snprintf => format::snprintf_fixture()?,
        Routine::Vsprintf => format::vsprintf_fixture()?,
        Routine::Vsnprintf => format::vsnprintf_fixture()?,
    })
}

/// Build every fixture in [`Routine::ALL`] order.
pub fn build_all(seed: u64) -> Result<Vec<FixtureFile>, CaseError> {
    Routine::ALL
        .into_iter()
        .map(|routine| build(routine, seed))
        .collect()
}
