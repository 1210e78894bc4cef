//! String operations: strlen, strcmp, strncmp, strcpy, strncpy, strcat.
//!
//! These are safe Rust implementations operating on byte slices that represent
//! NUL-terminated C strings. A slice with no NUL is treated as if a NUL
//! followed its last byte.

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Equivalent to C `strlen`. If no NUL is found, returns the full slice length.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Compares two NUL-terminated byte strings lexicographically.
///
/// Equivalent to C `strcmp`. Returns a negative value if `s1 < s2`, zero if
/// equal, positive if `s1 > s2`. Bytes compare as `unsigned char`.
pub fn strcmp(s1: &[u8], s2: &[u8]) -> i32 {
    let mut i = 0;
    loop {
        let a = byte_at(s1, i);
        let b = byte_at(s2, i);

        if a != b {
            return i32::from(a) - i32::from(b);
        }
        if a == 0 {
            return 0;
        }
        i += 1;
    }
}

/// Compares at most `n` bytes of two NUL-terminated byte strings.
///
/// Equivalent to C `strncmp`. Like [`strcmp`], but stops after `n` bytes.
pub fn strncmp(s1: &[u8], s2: &[u8], n: usize) -> i32 {
    for i in 0..n {
        let a = byte_at(s1, i);
        let b = byte_at(s2, i);

        if a != b {
            return i32::from(a) - i32::from(b);
        }
        if a == 0 {
            return 0;
        }
    }
    0
}

/// Copies a NUL-terminated string from `src` into `dest`.
///
/// Equivalent to C `strcpy`. Returns the number of bytes written including
/// the NUL, or `None` if `dest` cannot hold the string plus terminator.
pub fn strcpy(dest: &mut [u8], src: &[u8]) -> Option<usize> {
    let src_len = strlen(src);
    if dest.len() <= src_len {
        return None;
    }
    dest[..src_len].copy_from_slice(&src[..src_len]);
    dest[src_len] = 0;
    Some(src_len + 1)
}

/// Copies at most `n` bytes from `src` into `dest`.
///
/// Equivalent to C `strncpy`. If `src` is shorter than `n`, the remainder of
/// the first `n` bytes of `dest` is filled with NUL bytes. If `src` is `n` or
/// longer, `dest` is NOT NUL-terminated.
///
/// Returns the number of bytes written (always `min(n, dest.len())`).
pub fn strncpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let count = n.min(dest.len());
    let copy_len = strlen(src).min(count);

    dest[..copy_len].copy_from_slice(&src[..copy_len]);
    dest[copy_len..count].fill(0);

    count
}

/// Appends `src` to the end of the NUL-terminated string in `dest`.
///
/// Equivalent to C `strcat`. Returns the length of the resulting string, or
/// `None` if `dest` is too small for the result plus NUL.
pub fn strcat(dest: &mut [u8], src: &[u8]) -> Option<usize> {
    let dest_len = strlen(dest);
    let src_len = strlen(src);
    let total = dest_len + src_len;
    if dest.len() <= total {
        return None;
    }
    dest[dest_len..total].copy_from_slice(&src[..src_len]);
    dest[total] = 0;
    Some(total)
}

fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strlen_basic() {
        assert_eq!(strlen(b"hello\0"), 5);
        assert_eq!(strlen(b"\0"), 0);
        assert_eq!(strlen(b"abc"), 3);
    }

    #[test]
    fn test_strcmp_signs() {
        assert_eq!(strcmp(b"hello\0", b"hello\0"), 0);
        assert!(strcmp(b"hello\0", b"Hello\0") > 0);
        assert!(strcmp(b"hello\0", b"world\0") < 0);
        assert!(strcmp(b"hello\0", b"hello world\0") < 0);
        assert!(strcmp(b"hello\0", b"\0") > 0);
    }

    #[test]
    fn test_strcmp_high_bytes_are_unsigned() {
        assert!(strcmp(&[0xFF, 0], b"a\0") > 0);
    }

    #[test]
    fn test_strncmp_bounded() {
        assert_eq!(strncmp(b"hello world\0", b"hello there\0", 5), 0);
        assert!(strncmp(b"apple\0", b"apricot\0", 3) < 0);
        assert_eq!(strncmp(b"hello\0", b"world\0", 0), 0);
        assert!(strncmp(b"short\0", b"shorter\0", 10) < 0);
    }

    #[test]
    fn test_strcpy_writes_terminator() {
        let mut dest = [0xAAu8; 8];
        assert_eq!(strcpy(&mut dest, b"abc\0"), Some(4));
        assert_eq!(&dest[..4], b"abc\0");
        assert_eq!(dest[4], 0xAA);
    }

    #[test]
    fn test_strcpy_rejects_small_dest() {
        let mut dest = [0u8; 3];
        assert_eq!(strcpy(&mut dest, b"abc\0"), None);
    }

    #[test]
    fn test_strncpy_pads_with_nul() {
        let mut dest = [0xAAu8; 12];
        assert_eq!(strncpy(&mut dest, b"hello\0", 10), 10);
        assert_eq!(&dest[..10], b"hello\0\0\0\0\0");
        assert_eq!(dest[10], 0xAA);
    }

    #[test]
    fn test_strncpy_truncates_without_terminator() {
        let mut dest = [0xAAu8; 8];
        strncpy(&mut dest, b"hello world\0", 5);
        assert_eq!(&dest[..6], b"hello\xAA");
    }

    #[test]
    fn test_strcat_appends() {
        let mut dest = [0u8; 16];
        dest[..5].copy_from_slice(b"hello");
        assert_eq!(strcat(&mut dest, b"world\0"), Some(10));
        assert_eq!(&dest[..11], b"helloworld\0");
    }

    #[test]
    fn test_strcat_rejects_overflow() {
        let mut dest = *b"abc\0\0";
        assert_eq!(strcat(&mut dest, b"de\0"), None);
    }
}
