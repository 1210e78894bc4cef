//! # klibc-ref
//!
//! Safe Rust reference semantics for the `<string.h>` and `<stdio.h>` routines
//! exercised by the generated klib fixtures.
//!
//! Every function operates on byte slices that model C arrays. A NUL byte
//! (`0x00`) marks the logical end of a C string. No `unsafe` code is permitted
//! at the crate level.

#![deny(unsafe_code)]

pub mod stdio;
pub mod string;
