//! Memory operations: memset, memcpy, memmove, memcmp.
//!
//! These are safe Rust implementations operating on byte slices.
//! They correspond to the `<string.h>` memory functions in POSIX/C.

use core::cmp::Ordering;

/// Fills the first `n` bytes of `dest` with the byte `value`.
///
/// Equivalent to C `memset(dest, c, n)`. Returns the number of bytes set,
/// which is `min(n, dest.len())`.
pub fn memset(dest: &mut [u8], value: u8, n: usize) -> usize {
    let count = n.min(dest.len());
    dest[..count].fill(value);
    count
}

/// Copies `n` bytes from `src` to `dest`.
///
/// Equivalent to C `memcpy`. Only copies `min(n, src.len(), dest.len())`
/// bytes and returns that count.
pub fn memcpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let count = n.min(dest.len()).min(src.len());
    dest[..count].copy_from_slice(&src[..count]);
    count
}

/// Copies `n` bytes between two distinct buffers.
///
/// Separate Rust slices never alias, so this is [`memcpy`] at the API level.
/// Overlapping moves inside one array go through [`memmove_within`].
pub fn memmove(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    memcpy(dest, src, n)
}

/// Moves `n` bytes inside `buf` from offset `src` to offset `dst`.
///
/// Models `memmove(buf + dst, buf + src, n)` where both ranges live in the
/// same C array and may overlap. Returns `None` when either range would run
/// past the end of `buf`, leaving the buffer untouched.
pub fn memmove_within(buf: &mut [u8], dst: usize, src: usize, n: usize) -> Option<usize> {
    let src_end = src.checked_add(n)?;
    let dst_end = dst.checked_add(n)?;
    if src_end > buf.len() || dst_end > buf.len() {
        return None;
    }
    buf.copy_within(src..src_end, dst);
    Some(n)
}

/// Compares the first `n` bytes of `a` and `b`.
///
/// Equivalent to C `memcmp`, reporting only the sign as an [`Ordering`]. The
/// comparison stops at the first differing byte. Only
/// `min(n, a.len(), b.len())` bytes take part.
pub fn memcmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    let count = n.min(a.len()).min(b.len());
    a[..count].cmp(&b[..count])
}
