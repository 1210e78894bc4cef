//! Independent re-derivation of every embedded expectation.
//!
//! Each case's C block is simulated against the reference routines in
//! `klibc_ref`: the declared arrays are allocated at their C sizes, the
//! routine runs into them, and the compared region is read back.

use klibc_ref::stdio::{self, FormatArg};
use klibc_ref::string;
use serde::Serialize;

use crate::fixtures::{CArg, Expected, FixtureCase, FixtureFile, FormatSink, Probe, Routine};

/// Result of verifying a single case.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub routine: Routine,
    pub case_name: String,
    pub passed: bool,
    /// Expectation embedded in the fixture.
    pub expected: String,
    /// Expectation re-derived by simulation.
    pub actual: String,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &VerificationResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

/// Verify every case of every fixture.
#[must_use]
pub fn verify_all(fixtures: &[FixtureFile]) -> VerificationSummary {
    let results = fixtures
        .iter()
        .flat_map(|file| file.cases().map(move |case| verify_case(file.routine, case)))
        .collect();
    VerificationSummary::from_results(results)
}

#[must_use]
pub fn verify_case(routine: Routine, case: &FixtureCase) -> VerificationResult {
    let (passed, actual) = match simulate(&case.probe, &case.expected) {
        Ok(actual) => (actual == case.expected, actual.describe()),
        Err(reason) => (false, format!("error: {reason}")),
    };
    VerificationResult {
        routine,
        case_name: case.label.clone(),
        passed,
        expected: case.expected.describe(),
        actual,
    }
}

/// Run the probe the way its C block does and report what it observes.
///
/// `expected` only selects the observation for in-place moves, where
/// overlapping ranges are checked for completion rather than contents.
fn simulate(probe: &Probe, expected: &Expected) -> Result<Expected, String> {
    match probe {
        Probe::Fill { size, byte } => {
            let mut buf = vec![0u8; size + 1];
            string::memset(&mut buf, *byte, *size);
            buf[*size] = 0;
            Ok(Expected::Bytes(buf[..*size].to_vec()))
        }
        Probe::Copy { payload } => {
            let src = c_string(payload);
            let n = payload.len();
            let mut dst = vec![0u8; n + 1];
            if string::memcpy(&mut dst, &src, n) != n {
                return Err(format!("copied fewer than {n} bytes"));
            }
            dst[n] = 0;
            Ok(Expected::Bytes(dst[..n].to_vec()))
        }
        Probe::MoveBetween { src, dst_capacity } => {
            let src = c_string(src);
            let n = string::strlen(&src) + 1;
            if n > *dst_capacity {
                return Err(format!("{n} bytes overflow a {dst_capacity}-byte array"));
            }
            let mut dst = vec![0u8; *dst_capacity];
            string::memmove(&mut dst, &src, n);
            Ok(Expected::Bytes(dst[..n].to_vec()))
        }
        Probe::MoveWithin {
            init,
            capacity,
            dst,
            src,
            n,
        } => {
            let mut buf = padded(init, *capacity)?;
            string::memmove_within(&mut buf, *dst, *src, *n)
                .ok_or_else(|| format!("move of {n} bytes leaves the {capacity}-byte array"))?;
            if *expected == Expected::Smoke {
                return Ok(Expected::Smoke);
            }
            Ok(Expected::Bytes(c_contents(&buf)))
        }
        Probe::Compare { lhs, rhs, n } => {
            let a = lhs.array.storage();
            let b = rhs.array.storage();
            if *n > a.len() || *n > b.len() {
                return Err(format!("compare of {n} bytes reads past an operand"));
            }
            Ok(Expected::Sign(string::memcmp(&a, &b, *n)))
        }
        Probe::Length { s } => Ok(Expected::Length(string::strlen(&c_string(s)))),
        Probe::Concat {
            prefix,
            suffix,
            capacity,
        } => {
            let mut dst = padded(prefix, *capacity)?;
            string::strcat(&mut dst, &c_string(suffix))
                .ok_or_else(|| format!("result overflows the {capacity}-byte array"))?;
            Ok(Expected::Bytes(c_contents(&dst)))
        }
        Probe::StrCopy { s, capacity } => {
            let mut dst = vec![0u8; *capacity];
            string::strcpy(&mut dst, &c_string(s))
                .ok_or_else(|| format!("string overflows the {capacity}-byte array"))?;
            Ok(Expected::Bytes(c_contents(&dst)))
        }
        Probe::BoundedCopy { src, n, capacity } => {
            if n > capacity {
                return Err(format!("limit {n} exceeds the {capacity}-byte array"));
            }
            let mut dst = vec![0u8; *capacity];
            string::strncpy(&mut dst, &c_string(src), *n);
            Ok(Expected::Bytes(dst[..*n].to_vec()))
        }
        Probe::StrCompare { lhs, rhs, bound } => {
            let (a, b) = (c_string(lhs), c_string(rhs));
            let raw = match bound {
                Some(n) => string::strncmp(&a, &b, *n),
                None => string::strcmp(&a, &b),
            };
            Ok(Expected::Sign(raw.cmp(&0)))
        }
        Probe::Format { format, args, sink } => simulate_format(format, args, *sink),
    }
}

fn simulate_format(format: &str, args: &[CArg], sink: FormatSink) -> Result<Expected, String> {
    let args: Vec<FormatArg<'_>> = args.iter().map(CArg::as_format_arg).collect();
    let fmt = format.as_bytes();
    let (len, content) = match sink {
        FormatSink::Console => {
            let out = stdio::format_bytes(fmt, &args).map_err(|e| e.to_string())?;
            (out.len(), None)
        }
        FormatSink::Buffer { capacity } => {
            let mut dst = vec![0u8; capacity];
            let len = stdio::sprintf(&mut dst, fmt, &args).map_err(|e| e.to_string())?;
            (len, Some(c_contents(&dst)))
        }
        FormatSink::Bounded { capacity, bound } => {
            let mut dst = vec![0u8; capacity];
            let len = stdio::snprintf(&mut dst, bound, fmt, &args).map_err(|e| e.to_string())?;
            let content = (bound > 0).then(|| c_contents(&dst));
            (len, content)
        }
    };
    Ok(Expected::Formatted { len, content })
}

/// `s` plus its terminator.
fn c_string(s: &str) -> Vec<u8> {
    let mut bytes = s.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

/// `char x[capacity] = "init";`
fn padded(init: &str, capacity: usize) -> Result<Vec<u8>, String> {
    if init.len() >= capacity {
        return Err(format!("initializer does not fit a {capacity}-byte array"));
    }
    let mut buf = c_string(init);
    buf.resize(capacity, 0);
    Ok(buf)
}

/// The C string at the start of `buf`.
fn c_contents(buf: &[u8]) -> Vec<u8> {
    buf[..string::strlen(buf)].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::DEFAULT_SEED;
    use crate::routines;
    use std::cmp::Ordering;

    fn sign(raw: i32) -> Ordering {
        raw.cmp(&0)
    }

    #[test]
    fn every_generated_case_verifies() {
        let fixtures = routines::build_all(DEFAULT_SEED).unwrap();
        let summary = verify_all(&fixtures);
        let failures: Vec<_> = summary.failures().collect();
        assert!(failures.is_empty(), "{failures:#?}");
        assert_eq!(summary.total, 80);
        assert_eq!(summary.passed, summary.total);
    }

    #[test]
    fn tampered_expectation_is_caught() {
        let case = FixtureCase::new(
            "bad length",
            Probe::Length { s: "hello".into() },
            Expected::Length(6),
        );
        let result = verify_case(Routine::Strlen, &case);
        assert!(!result.passed);
        assert_eq!(result.expected, "length 6");
        assert_eq!(result.actual, "length 5");
    }

    #[test]
    fn overflowing_probe_reports_error() {
        let case = FixtureCase::new(
            "too long",
            Probe::StrCopy {
                s: "abcdef".into(),
                capacity: 4,
            },
            Expected::Bytes(b"abcdef".to_vec()),
        );
        let result = verify_case(Routine::Strcpy, &case);
        assert!(!result.passed);
        assert!(result.actual.starts_with("error:"), "{}", result.actual);
    }

    #[test]
    fn out_of_range_move_fails_even_for_smoke() {
        let case = FixtureCase::new(
            "escape",
            Probe::MoveWithin {
                init: "abc".into(),
                capacity: 8,
                dst: 4,
                src: 0,
                n: 6,
            },
            Expected::Smoke,
        );
        assert!(!verify_case(Routine::Memmove, &case).passed);
    }

    #[test]
    fn bounded_format_zero_bound_observes_length_only() {
        let got = simulate_format(
            "Hello",
            &[],
            FormatSink::Bounded {
                capacity: 10,
                bound: 0,
            },
        )
        .unwrap();
        assert_eq!(
            got,
            Expected::Formatted {
                len: 5,
                content: None
            }
        );
    }

    #[test]
    fn strcmp_sign_only() {
        assert_eq!(sign(string::strcmp(b"hello\0", b"Hello\0")), Ordering::Greater);
        assert_eq!(sign(string::strncmp(b"apple\0", b"apricot\0", 3)), Ordering::Less);
    }

    #[test]
    fn summary_counts() {
        let case = FixtureCase::new("x", Probe::Length { s: String::new() }, Expected::Length(0));
        let ok = verify_case(Routine::Strlen, &case);
        let mut bad = ok.clone();
        bad.passed = false;
        let summary = VerificationSummary::from_results(vec![ok, bad]);
        assert_eq!((summary.total, summary.passed, summary.failed), (2, 1, 1));
        assert!(!summary.all_passed());
    }
}
