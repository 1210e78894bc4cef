//! printf-family fixtures: printf, sprintf, snprintf, vsprintf, vsnprintf.
//!
//! Expected text comes from the reference printf engine; the bounded
//! variants then slice that text the way `snprintf` truncates.

use klibc_ref::stdio::{FormatArg, format_bytes};

use crate::c_source::{CBlock, string_literal};
use crate::error::CaseError;
use crate::fixtures::{CArg, Expected, FixtureCase, FixtureFile, FormatSink, Probe, Routine};

/// Capacity of `buf` in the unbounded fixtures.
pub const WIDE_BUFFER: usize = 100;
/// Capacity of `buf` in the bounded fixtures.
pub const NARROW_BUFFER: usize = 10;

const VSPRINTF_WRAPPER: &str = "int test_vsprintf(char *buf, const char *format, ...) {
    va_list args;
    va_start(args, format);
    int len = vsprintf(buf, format, args);
    va_end(args);
    return len;
}";

const VSNPRINTF_WRAPPER: &str = "int test_vsnprintf(char *buf, size_t size, const char *format, ...) {
    va_list args;
    va_start(args, format);
    int len = vsnprintf(buf, size, format, args);
    va_end(args);
    return len;
}";

struct FormatCase {
    label: &'static str,
    format: &'static str,
    args: Vec<CArg>,
}

fn case(label: &'static str, format: &'static str, args: Vec<CArg>) -> FormatCase {
    FormatCase {
        label,
        format,
        args,
    }
}

fn specifier_args() -> Vec<CArg> {
    vec![CArg::Int(42), CArg::Str("test".into()), CArg::Char(b'X')]
}

fn integer_args() -> Vec<CArg> {
    vec![
        CArg::Int(-17),
        CArg::Uint(4_000_000_000),
        CArg::Uint(255),
        CArg::Uint(48879),
    ]
}

#[must_use]
fn console_cases() -> Vec<FormatCase> {
    vec![
        case("basic string", "Hello, world!\n", vec![]),
        case(
            "format specifiers",
            "Int: %d, String: %s, Char: %c\n",
            specifier_args(),
        ),
        case(
            "integer conversions",
            "Neg: %d, Unsigned: %u, Hex: %x, HEX: %X\n",
            integer_args(),
        ),
        case("empty format", "", vec![]),
        case("percent escape", "%%", vec![]),
    ]
}

#[must_use]
fn buffer_cases() -> Vec<FormatCase> {
    vec![
        case("basic string", "Hello, world!", vec![]),
        case(
            "format specifiers",
            "Int: %d, String: %s, Char: %c",
            specifier_args(),
        ),
        case(
            "integer conversions",
            "Neg: %d, Unsigned: %u, Hex: %x, HEX: %X",
            integer_args(),
        ),
        case("empty format", "", vec![]),
        case("percent escape", "%%", vec![]),
    ]
}

#[must_use]
fn bounded_cases() -> Vec<(FormatCase, usize)> {
    vec![
        (case("string that fits", "Hello", vec![]), NARROW_BUFFER),
        (case("string that is too long", "Hello, world!", vec![]), NARROW_BUFFER),
        (case("exact fit", "123456789", vec![]), NARROW_BUFFER),
        (case("zero size", "Hello", vec![]), 0),
        (
            case("formatted fit", "%s=%d", vec![CArg::Str("ab".into()), CArg::Int(42)]),
            NARROW_BUFFER,
        ),
        (
            case("formatted overflow", "Value: %d", vec![CArg::Int(123_456)]),
            NARROW_BUFFER,
        ),
    ]
}

pub fn printf_fixture() -> Result<FixtureFile, CaseError> {
    let mut file = FixtureFile::new(Routine::Printf);
    file.prologue.stmt("int len;");
    for c in console_cases() {
        push_format_case(&mut file, c, FormatSink::Console)?;
    }
    Ok(file)
}

pub fn sprintf_fixture() -> Result<FixtureFile, CaseError> {
    let mut file = FixtureFile::new(Routine::Sprintf);
    file.prologue
        .stmt(format!("char buf[{WIDE_BUFFER}];"))
        .stmt("int len;");
    for c in buffer_cases() {
        let sink = FormatSink::Buffer {
            capacity: WIDE_BUFFER,
        };
        push_format_case(&mut file, c, sink)?;
    }
    Ok(file)
}

pub fn snprintf_fixture() -> Result<FixtureFile, CaseError> {
    let mut file = FixtureFile::new(Routine::Snprintf);
    file.prologue
        .stmt(format!("char buf[{NARROW_BUFFER}];"))
        .stmt("int len;");
    for (c, bound) in bounded_cases() {
        let sink = FormatSink::Bounded {
            capacity: NARROW_BUFFER,
            bound,
        };
        push_format_case(&mut file, c, sink)?;
    }
    Ok(file)
}

pub fn vsprintf_fixture() -> Result<FixtureFile, CaseError> {
    let mut file = FixtureFile::new(Routine::Vsprintf);
    file.helpers.push(VSPRINTF_WRAPPER.to_string());
    file.prologue
        .stmt(format!("char buf[{WIDE_BUFFER}];"))
        .stmt("int len;");
    for c in buffer_cases().into_iter().take(3) {
        let sink = FormatSink::Buffer {
            capacity: WIDE_BUFFER,
        };
        push_format_case(&mut file, c, sink)?;
    }
    Ok(file)
}

pub fn vsnprintf_fixture() -> Result<FixtureFile, CaseError> {
    let mut file = FixtureFile::new(Routine::Vsnprintf);
    file.helpers.push(VSNPRINTF_WRAPPER.to_string());
    file.prologue
        .stmt(format!("char buf[{NARROW_BUFFER}];"))
        .stmt("int len;");
    for (c, bound) in bounded_cases().into_iter().filter(|(_, bound)| *bound > 0) {
        let sink = FormatSink::Bounded {
            capacity: NARROW_BUFFER,
            bound,
        };
        push_format_case(&mut file, c, sink)?;
    }
    Ok(file)
}

fn push_format_case(
    file: &mut FixtureFile,
    c: FormatCase,
    sink: FormatSink,
) -> Result<(), CaseError> {
    let routine = file.routine;
    let args: Vec<FormatArg<'_>> = c.args.iter().map(CArg::as_format_arg).collect();
    let full = format_bytes(c.format.as_bytes(), &args).map_err(|source| CaseError {
        routine,
        label: c.label.to_string(),
        source,
    })?;
    let len = full.len();

    let content = match sink {
        FormatSink::Console => None,
        FormatSink::Buffer { .. } => Some(full.clone()),
        FormatSink::Bounded { bound: 0, .. } => None,
        FormatSink::Bounded { bound, .. } => Some(full[..len.min(bound - 1)].to_vec()),
    };

    let mut call_args = vec![string_literal(c.format.as_bytes())];
    call_args.extend(c.args.iter().map(CArg::c_expr));
    let bound_expr = match sink {
        FormatSink::Bounded { capacity, bound } if bound == capacity => "sizeof(buf)".to_string(),
        FormatSink::Bounded { bound, .. } => bound.to_string(),
        _ => String::new(),
    };
    let callee = match routine {
        Routine::Vsprintf => "test_vsprintf",
        Routine::Vsnprintf => "test_vsnprintf",
        other => other.symbol(),
    };
    let call = match sink {
        FormatSink::Console => format!("{callee}({})", call_args.join(", ")),
        FormatSink::Buffer { .. } => format!("{callee}(buf, {})", call_args.join(", ")),
        FormatSink::Bounded { .. } => {
            format!("{callee}(buf, {bound_expr}, {})", call_args.join(", "))
        }
    };

    let mut block = CBlock::titled(c.label);
    block.stmt(format!("len = {call};")).check(format!("len == {len}"));
    match (&content, sink) {
        (Some(text), FormatSink::Bounded { bound, .. }) if len >= bound => {
            block
                .check(format!(
                    "strncmp(buf, {}, {bound_expr} - 1) == 0",
                    string_literal(text)
                ))
                .check(format!("buf[{bound_expr} - 1] == '\\0'"));
        }
        (Some(text), _) => {
            block.check(format!("strcmp(buf, {}) == 0", string_literal(text)));
        }
        (None, _) => {}
    }

    let case = FixtureCase::new(
        c.label,
        Probe::Format {
            format: c.format.to_string(),
            args: c.args,
            sink,
        },
        Expected::Formatted { len, content },
    );
    file.push(case, block);
    Ok(())
}
