//! Standard I/O formatting.
//!
//! Only the formatting half of `<stdio.h>` is modelled: the printf engine and
//! the `sprintf`/`snprintf` buffer contracts. Console `printf` reduces to the
//! length of [`format_bytes`]'s output.

pub mod printf;

pub use printf::{FormatArg, FormatError, format_bytes, snprintf, sprintf};
