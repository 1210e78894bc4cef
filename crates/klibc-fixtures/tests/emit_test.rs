//! Integration test: fixture emission end to end.
//!
//! Validates that:
//! 1. Exactly one `<routine>_test.c` per routine is written.
//! 2. Re-emitting is byte-identical; another seed only touches memcpy.
//! 3. The boundary scenarios appear verbatim in the written files.
//! 4. Every embedded expectation re-derives.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use klibc_fixtures::structured_log::LogEmitter;
use klibc_fixtures::{FixtureEmitter, Routine, generate_tests, verify_all};

fn unique_tmp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after UNIX_EPOCH")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}-{}-{nanos}", std::process::id()))
}

fn read(dir: &std::path::Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("read {name}: {e}"))
}

fn listing(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read output dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn writes_exactly_fifteen_fixtures() {
    let dir = unique_tmp_dir("klibc-fixtures-count");
    let report = generate_tests(&dir).expect("emit");
    assert_eq!(report.file_count(), 15);

    let mut expected: Vec<String> = Routine::ALL.iter().map(|r| r.file_name()).collect();
    expected.sort();
    assert_eq!(listing(&dir), expected);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn emission_is_idempotent() {
    let dir = unique_tmp_dir("klibc-fixtures-idem");
    generate_tests(&dir).expect("first emit");
    let first: Vec<String> = Routine::ALL.iter().map(|r| read(&dir, &r.file_name())).collect();
    generate_tests(&dir).expect("second emit");
    let second: Vec<String> = Routine::ALL.iter().map(|r| read(&dir, &r.file_name())).collect();
    assert_eq!(first, second);
    assert_eq!(listing(&dir).len(), 15);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn other_seed_changes_only_memcpy() {
    let a = unique_tmp_dir("klibc-fixtures-seed-a");
    let b = unique_tmp_dir("klibc-fixtures-seed-b");
    FixtureEmitter::new(&a, 1)
        .emit(&mut LogEmitter::sink("a"))
        .expect("emit a");
    FixtureEmitter::new(&b, 2)
        .emit(&mut LogEmitter::sink("b"))
        .expect("emit b");
    for routine in Routine::ALL {
        let name = routine.file_name();
        let same = read(&a, &name) == read(&b, &name);
        assert_eq!(same, routine != Routine::Memcpy, "{name}");
    }
    let _ = std::fs::remove_dir_all(&a);
    let _ = std::fs::remove_dir_all(&b);
}

#[test]
fn boundary_scenarios_are_present() {
    let dir = unique_tmp_dir("klibc-fixtures-scenarios");
    generate_tests(&dir).expect("emit");

    let memset = read(&dir, "memset_test.c");
    assert!(memset.starts_with("#include \"trap.h\"\n"));
    assert!(memset.contains("memset(buf_small_buffer, 'A', 10);"));
    assert!(memset.contains("check(memcmp(buf_small_buffer, \"AAAAAAAAAA\", 10) == 0);"));
    assert!(memset.contains("memset(buf_zero_buffer, 'D', 0);"));

    let strncpy = read(&dir, "strncpy_test.c");
    assert!(strncpy.contains("check(memcmp(dst, \"hello\\000\\000\\000\\000\\000\", 10) == 0);"));
    assert!(strncpy.contains("strncpy(dst, src_full_copy, 11);"));

    let snprintf = read(&dir, "snprintf_test.c");
    assert!(snprintf.contains("char buf[10];"));
    assert!(snprintf.contains("len = snprintf(buf, sizeof(buf), \"Hello, world!\");"));
    assert!(snprintf.contains("check(len == 13);"));
    assert!(snprintf.contains("check(strncmp(buf, \"Hello, wo\", sizeof(buf) - 1) == 0);"));
    assert!(snprintf.contains("check(buf[sizeof(buf) - 1] == '\\0');"));

    let memcmp = read(&dir, "memcmp_test.c");
    assert!(memcmp.contains("check(memcmp(str1, str5, 3) == 0);"));
    assert!(memcmp.contains("check(memcmp(str1, str5, 4) < 0);"));

    let vsnprintf = read(&dir, "vsnprintf_test.c");
    assert!(vsnprintf.contains("#include <stdarg.h>"));
    assert!(vsnprintf.contains("va_start(args, format);"));

    for routine in Routine::ALL {
        let source = read(&dir, &routine.file_name());
        assert!(source.contains("check("), "{routine:?} has no checks");
        assert!(source.ends_with("    return 0;\n}\n"), "{routine:?}");
        assert!(!source.contains('\0'), "{routine:?} embeds a raw NUL");
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn every_case_reverifies() {
    let dir = unique_tmp_dir("klibc-fixtures-verify");
    let report = generate_tests(&dir).expect("emit");
    let summary = verify_all(&report.fixtures);
    assert!(summary.all_passed(), "{:#?}", summary.failures().collect::<Vec<_>>());
    assert_eq!(summary.total, report.case_count());
    let _ = std::fs::remove_dir_all(&dir);
}
