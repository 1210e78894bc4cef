//! String routine fixtures: strlen, strcat, strcpy, strncpy, strcmp, strncmp.

use crate::c_source::{CBlock, string_literal};
use crate::fixtures::{Expected, FixtureCase, FixtureFile, Probe, Routine, sign_operator};

/// Destination capacity for the copy and concatenation fixtures.
pub const DST_CAPACITY: usize = 100;

const PLAIN_STRINGS: &[(&str, &str)] = &[
    ("empty string", ""),
    ("short string", "hello"),
    (
        "long string",
        "this is a much longer string that will test boundary conditions",
    ),
    ("string with spaces", "string with spaces"),
    ("special chars", "!@#$%^&*()"),
];

const CONCAT_PAIRS: &[(&str, &str, &str)] = &[
    ("empty + empty", "", ""),
    ("empty + non-empty", "", "world"),
    ("non-empty + empty", "hello", ""),
    ("regular strings", "hello", "world"),
    (
        "long strings",
        "this is a long string",
        " and this is another long string",
    ),
];

const BOUNDED_COPIES: &[(&str, &str, usize)] = &[
    ("full copy", "hello world", 11),
    ("partial copy", "hello world", 5),
    ("zero copy", "hello world", 0),
    ("copy more than length", "hello", 10),
    ("empty string", "", 5),
];

const COMPARE_PAIRS: &[(&str, &str, &str)] = &[
    ("equal strings", "hello", "hello"),
    ("different case", "hello", "Hello"),
    ("different strings", "hello", "world"),
    ("empty strings", "", ""),
    ("one empty", "hello", ""),
    ("different lengths", "hello", "hello world"),
];

const BOUNDED_COMPARES: &[(&str, &str, &str, usize)] = &[
    ("equal strings", "hello", "hello", 5),
    ("partial equal", "hello world", "hello there", 5),
    ("different", "apple", "apricot", 3),
    ("different case", "Hello", "hello", 5),
    ("zero length", "hello", "world", 0),
    ("compare beyond length", "short", "shorter", 10),
];

#[must_use]
pub fn strlen_fixture() -> FixtureFile {
    let mut file = FixtureFile::new(Routine::Strlen);
    for &(label, s) in PLAIN_STRINGS {
        let case = FixtureCase::new(
            label,
            Probe::Length { s: s.to_string() },
            Expected::Length(s.len()),
        );
        let name = format!("str_{}", case.ident);
        let mut block = CBlock::titled(label);
        block
            .stmt(format!("char {name}[] = {};", string_literal(s.as_bytes())))
            .check(format!("strlen({name}) == {}", s.len()));
        file.push(case, block);
    }
    file
}

#[must_use]
pub fn strcat_fixture() -> FixtureFile {
    let mut file = FixtureFile::new(Routine::Strcat);
    for &(label, prefix, suffix) in CONCAT_PAIRS {
        let expected = format!("{prefix}{suffix}");
        let expected_literal = string_literal(expected.as_bytes());
        let case = FixtureCase::new(
            label,
            Probe::Concat {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
                capacity: DST_CAPACITY,
            },
            Expected::Bytes(expected.into_bytes()),
        );
        let src = format!("src_{}", case.ident);
        let dst = format!("dst_{}", case.ident);
        let mut block = CBlock::titled(label);
        block
            .stmt(format!("char {src}[] = {};", string_literal(suffix.as_bytes())))
            .stmt(format!(
                "char {dst}[{DST_CAPACITY}] = {};",
                string_literal(prefix.as_bytes())
            ))
            .check(format!(
                "strcmp(strcat({dst}, {src}), {expected_literal}) == 0"
            ));
        file.push(case, block);
    }
    file
}

#[must_use]
pub fn strcpy_fixture() -> FixtureFile {
    let mut file = FixtureFile::new(Routine::Strcpy);
    file.prologue.stmt(format!("char dst[{DST_CAPACITY}];"));
    for &(label, s) in PLAIN_STRINGS {
        let case = FixtureCase::new(
            label,
            Probe::StrCopy {
                s: s.to_string(),
                capacity: DST_CAPACITY,
            },
            Expected::Bytes(s.as_bytes().to_vec()),
        );
        let src = format!("src_{}", case.ident);
        let literal = string_literal(s.as_bytes());
        let mut block = CBlock::titled(label);
        block
            .stmt(format!("char {src}[] = {literal};"))
            .check(format!("strcmp(strcpy(dst, {src}), {literal}) == 0"));
        file.push(case, block);
    }
    file
}

#[must_use]
pub fn strncpy_fixture() -> FixtureFile {
    let mut file = FixtureFile::new(Routine::Strncpy);
    file.prologue.stmt(format!("char dst[{DST_CAPACITY}];"));
    for &(label, src_text, n) in BOUNDED_COPIES {
        let expected = bounded_copy(src_text.as_bytes(), n);
        let expected_literal = string_literal(&expected);
        let case = FixtureCase::new(
            label,
            Probe::BoundedCopy {
                src: src_text.to_string(),
                n,
                capacity: DST_CAPACITY,
            },
            Expected::Bytes(expected),
        );
        let src = format!("src_{}", case.ident);
        let mut block = CBlock::titled(label);
        block
            .stmt(format!(
                "char {src}[] = {};",
                string_literal(src_text.as_bytes())
            ))
            .stmt("memset(dst, '\\0', sizeof(dst));")
            .stmt(format!("strncpy(dst, {src}, {n});"))
            .check(format!("memcmp(dst, {expected_literal}, {n}) == 0"));
        file.push(case, block);
    }
    file
}

/// Slice to the limit, or pad with NUL bytes up to it.
fn bounded_copy(src: &[u8], n: usize) -> Vec<u8> {
    if n <= src.len() {
        src[..n].to_vec()
    } else {
        let mut out = src.to_vec();
        out.resize(n, 0);
        out
    }
}

#[must_use]
pub fn strcmp_fixture() -> FixtureFile {
    let mut file = FixtureFile::new(Routine::Strcmp);
    for &(label, lhs, rhs) in COMPARE_PAIRS {
        push_compare(&mut file, label, lhs, rhs, None);
    }
    file
}

#[must_use]
pub fn strncmp_fixture() -> FixtureFile {
    let mut file = FixtureFile::new(Routine::Strncmp);
    for &(label, lhs, rhs, n) in BOUNDED_COMPARES {
        push_compare(&mut file, label, lhs, rhs, Some(n));
    }
    file
}

fn push_compare(file: &mut FixtureFile, label: &str, lhs: &str, rhs: &str, bound: Option<usize>) {
    let (a, b) = match bound {
        Some(n) => (truncate(lhs, n), truncate(rhs, n)),
        None => (lhs.as_bytes(), rhs.as_bytes()),
    };
    let ordering = a.cmp(b);
    let case = FixtureCase::new(
        label,
        Probe::StrCompare {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            bound,
        },
        Expected::Sign(ordering),
    );
    let s1 = format!("s1_{}", case.ident);
    let s2 = format!("s2_{}", case.ident);
    let call = match bound {
        Some(n) => format!("strncmp({s1}, {s2}, {n})"),
        None => format!("strcmp({s1}, {s2})"),
    };
    let mut block = CBlock::titled(label);
    block
        .stmt(format!("char {s1}[] = {};", string_literal(lhs.as_bytes())))
        .stmt(format!("char {s2}[] = {};", string_literal(rhs.as_bytes())))
        .check(format!("{call} {}", sign_operator(ordering)));
    file.push(case, block);
}

fn truncate(s: &str, n: usize) -> &[u8] {
    let bytes = s.as_bytes();
    &bytes[..n.min(bytes.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strlen_counts_bytes() {
        let source = strlen_fixture().to_c_source();
        assert!(source.contains("char str_empty_string[] = \"\";"));
        assert!(source.contains("check(strlen(str_empty_string) == 0);"));
        assert!(source.contains("check(strlen(str_long_string) == 63);"));
        assert!(source.contains("check(strlen(str_special_chars) == 10);"));
    }

    #[test]
    fn strcat_labels_become_valid_identifiers() {
        let source = strcat_fixture().to_c_source();
        assert!(source.contains("char dst_empty_non_empty[100] = \"\";"));
        assert!(source.contains(
            "check(strcmp(strcat(dst_regular_strings, src_regular_strings), \"helloworld\") == 0);"
        ));
        assert!(
            source
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .all(|line| !line.contains('+')),
            "labels leaked into identifiers"
        );
    }

    #[test]
    fn strcat_results_fit_destination() {
        for case in strcat_fixture().cases() {
            let Expected::Bytes(result) = &case.expected else {
                panic!("strcat expects bytes");
            };
            assert!(result.len() < DST_CAPACITY, "{}", case.label);
        }
    }

    #[test]
    fn strcpy_shares_destination() {
        let file = strcpy_fixture();
        assert_eq!(file.prologue.lines(), &["    char dst[100];".to_string()]);
        assert!(
            file.to_c_source()
                .contains("check(strcmp(strcpy(dst, src_short_string), \"hello\") == 0);")
        );
    }

    #[test]
    fn strncpy_pads_beyond_source() {
        let source = strncpy_fixture().to_c_source();
        assert!(source.contains("strncpy(dst, src_copy_more_than_length, 10);"));
        assert!(source.contains("check(memcmp(dst, \"hello\\000\\000\\000\\000\\000\", 10) == 0);"));
        assert!(source.contains("check(memcmp(dst, \"hello\", 5) == 0);"));
        assert!(source.contains("check(memcmp(dst, \"\", 0) == 0);"));
    }

    #[test]
    fn bounded_copy_rules() {
        assert_eq!(bounded_copy(b"hello world", 11), b"hello world");
        assert_eq!(bounded_copy(b"hello world", 5), b"hello");
        assert_eq!(bounded_copy(b"hello", 10), b"hello\0\0\0\0\0");
        assert_eq!(bounded_copy(b"", 5), b"\0\0\0\0\0");
    }

    #[test]
    fn strcmp_asserts_signs_only() {
        let source = strcmp_fixture().to_c_source();
        assert!(source.contains("check(strcmp(s1_equal_strings, s2_equal_strings) == 0);"));
        assert!(source.contains("check(strcmp(s1_different_case, s2_different_case) > 0);"));
        assert!(source.contains("check(strcmp(s1_different_strings, s2_different_strings) < 0);"));
        assert!(source.contains("check(strcmp(s1_one_empty, s2_one_empty) > 0);"));
        assert!(source.contains("check(strcmp(s1_different_lengths, s2_different_lengths) < 0);"));
        assert!(!source.contains("== 1") && !source.contains("== -1"));
    }

    #[test]
    fn strncmp_truncates_operands() {
        let source = strncmp_fixture().to_c_source();
        assert!(source.contains("check(strncmp(s1_partial_equal, s2_partial_equal, 5) == 0);"));
        assert!(source.contains("check(strncmp(s1_different, s2_different, 3) < 0);"));
        assert!(source.contains("check(strncmp(s1_different_case, s2_different_case, 5) < 0);"));
        assert!(source.contains("check(strncmp(s1_zero_length, s2_zero_length, 0) == 0);"));
        assert!(source.contains(
            "check(strncmp(s1_compare_beyond_length, s2_compare_beyond_length, 10) < 0);"
        ));
    }
}
