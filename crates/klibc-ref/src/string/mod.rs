//! String and memory operations.
//!
//! Implements the `<string.h>` functions covered by the fixtures as safe Rust
//! operating on slices.

pub mod mem;
pub mod str;

pub use mem::{memcmp, memcpy, memmove, memmove_within, memset};
pub use str::{strcat, strcmp, strcpy, strlen, strncmp, strncpy};
