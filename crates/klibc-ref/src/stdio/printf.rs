//! printf formatting engine.
//!
//! Parses format directives and renders typed arguments to byte buffers with
//! width, precision and flag support. Covers the conversions implemented by
//! the freestanding klib: `%d %i %u %x %X %o %c %s %p %%`. Floating-point
//! conversions are not part of that surface and are passed through as
//! literal text.
//!
//! Padding emitted for one directive is capped at 4096 bytes.

use core::fmt;

// ---------------------------------------------------------------------------
// Format spec types
// ---------------------------------------------------------------------------

/// Flags parsed from a printf format directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags {
    pub left_justify: bool, // '-'
    pub force_sign: bool,   // '+'
    pub space_sign: bool,   // ' '
    pub alt_form: bool,     // '#'
    pub zero_pad: bool,     // '0'
}

/// Width specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    None,
    Fixed(usize),
    FromArg, // '*'
}

/// Precision specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    None,
    Fixed(usize),
    FromArg, // '.*'
}

/// Length modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMod {
    None,
    Hh, // 'hh'
    H,  // 'h'
    L,  // 'l'
    Ll, // 'll'
    Z,  // 'z'
    T,  // 't'
    J,  // 'j'
}

/// A parsed printf format specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub flags: FormatFlags,
    pub width: Width,
    pub precision: Precision,
    pub length: LengthMod,
    pub conversion: u8,
}

// ---------------------------------------------------------------------------
// Format arguments
// ---------------------------------------------------------------------------

/// Typed argument value, one per consumed variadic slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg<'a> {
    SignedInt(i64),
    UnsignedInt(u64),
    Char(u8),
    /// String contents without the NUL terminator.
    Str(&'a [u8]),
    Pointer(usize),
}

/// Errors raised while rendering a format string against its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A directive consumed more arguments than were supplied.
    MissingArgument { index: usize },
    /// The argument at `index` cannot satisfy the directive's conversion.
    ArgumentMismatch { index: usize, conversion: u8 },
    /// The destination cannot hold the output the call would write.
    BufferTooSmall { needed: usize, capacity: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { index } => write!(f, "missing argument #{index}"),
            Self::ArgumentMismatch { index, conversion } => write!(
                f,
                "argument #{index} does not match conversion '%{}'",
                char::from(*conversion)
            ),
            Self::BufferTooSmall { needed, capacity } => write!(
                f,
                "destination holds {capacity} bytes, {needed} required"
            ),
        }
    }
}

impl std::error::Error for FormatError {}

// ---------------------------------------------------------------------------
// Segment: parsed pieces of a format string
// ---------------------------------------------------------------------------

/// A segment of a parsed format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment<'a> {
    /// Literal bytes to emit verbatim.
    Literal(&'a [u8]),
    /// A `%%` escape (emit a single '%').
    Percent,
    /// A conversion specifier requiring an argument.
    Spec(FormatSpec),
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Byte cursor over a directive body.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consume `b` if it is next.
    fn eat(&mut self, b: u8) -> bool {
        let hit = self.peek() == Some(b);
        if hit {
            self.pos += 1;
        }
        hit
    }

    /// Consume a run of ASCII digits, returning their value if any were seen.
    fn number(&mut self) -> Option<usize> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        (self.pos > start).then(|| parse_decimal(&self.bytes[start..self.pos]))
    }
}

/// Parse a single format specifier starting after the '%' character.
///
/// Returns the spec and the number of bytes it spans, or `None` when the
/// directive is malformed or names a conversion outside the klib surface.
pub fn parse_format_spec(fmt: &[u8]) -> Option<(FormatSpec, usize)> {
    let mut cur = Cursor { bytes: fmt, pos: 0 };

    let mut flags = FormatFlags::default();
    loop {
        match cur.peek() {
            Some(b'-') => flags.left_justify = true,
            Some(b'+') => flags.force_sign = true,
            Some(b' ') => flags.space_sign = true,
            Some(b'#') => flags.alt_form = true,
            Some(b'0') => flags.zero_pad = true,
            _ => break,
        }
        cur.pos += 1;
    }
    // '+' wins over ' ' and '-' wins over '0'.
    flags.space_sign &= !flags.force_sign;
    flags.zero_pad &= !flags.left_justify;

    let width = if cur.eat(b'*') {
        Width::FromArg
    } else {
        cur.number().map_or(Width::None, Width::Fixed)
    };

    let precision = if !cur.eat(b'.') {
        Precision::None
    } else if cur.eat(b'*') {
        Precision::FromArg
    } else {
        Precision::Fixed(cur.number().unwrap_or(0))
    };

    let length = if cur.eat(b'h') {
        if cur.eat(b'h') { LengthMod::Hh } else { LengthMod::H }
    } else if cur.eat(b'l') {
        if cur.eat(b'l') { LengthMod::Ll } else { LengthMod::L }
    } else if cur.eat(b'z') {
        LengthMod::Z
    } else if cur.eat(b't') {
        LengthMod::T
    } else if cur.eat(b'j') {
        LengthMod::J
    } else {
        LengthMod::None
    };

    let conversion = cur.peek()?;
    if !b"diuxXoscp".contains(&conversion) {
        return None;
    }
    cur.pos += 1;

    Some((
        FormatSpec {
            flags,
            width,
            precision,
            length,
            conversion,
        },
        cur.pos,
    ))
}

/// Iterate over segments of a printf format string.
///
/// Yields `FormatSegment::Literal` for literal runs and `FormatSegment::Spec`
/// for each `%`-directive. `%%` yields `FormatSegment::Percent`. Parsing stops
/// at the first NUL byte, as C does.
pub fn parse_format_string(fmt: &[u8]) -> Vec<FormatSegment<'_>> {
    let fmt = &fmt[..crate::string::strlen(fmt)];
    let mut segments = Vec::new();
    let mut pos = 0;
    let len = fmt.len();

    while pos < len {
        // Find the next '%' or end of string.
        let start = pos;
        while pos < len && fmt[pos] != b'%' {
            pos += 1;
        }
        if pos > start {
            segments.push(FormatSegment::Literal(&fmt[start..pos]));
        }
        if pos >= len {
            break;
        }
        // Skip the '%'.
        pos += 1;
        if pos >= len {
            // Trailing '%' with nothing after: treat as literal.
            segments.push(FormatSegment::Literal(&fmt[pos - 1..pos]));
            break;
        }
        if fmt[pos] == b'%' {
            segments.push(FormatSegment::Percent);
            pos += 1;
            continue;
        }
        if let Some((spec, consumed)) = parse_format_spec(&fmt[pos..]) {
            pos += consumed;
            segments.push(FormatSegment::Spec(spec));
        } else {
            // Malformed spec: emit the '%' as literal and continue.
            segments.push(FormatSegment::Literal(&fmt[pos - 1..pos]));
        }
    }
    segments
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Render `fmt` against `args`, returning the complete output without a NUL.
///
/// The output length is what C `printf` returns for the same call.
pub fn format_bytes(fmt: &[u8], args: &[FormatArg<'_>]) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::new();
    let mut next = 0usize;

    for segment in parse_format_string(fmt) {
        match segment {
            FormatSegment::Literal(bytes) => out.extend_from_slice(bytes),
            FormatSegment::Percent => out.push(b'%'),
            FormatSegment::Spec(mut spec) => {
                if spec.width == Width::FromArg {
                    let w = int_arg(args, &mut next, b'*')?;
                    if w < 0 {
                        spec.flags.left_justify = true;
                        spec.flags.zero_pad = false;
                    }
                    spec.width = Width::Fixed(w.unsigned_abs() as usize);
                }
                if spec.precision == Precision::FromArg {
                    let p = int_arg(args, &mut next, b'*')?;
                    spec.precision = if p < 0 {
                        Precision::None
                    } else {
                        Precision::Fixed(p as usize)
                    };
                }
                let index = next;
                let arg = *args
                    .get(index)
                    .ok_or(FormatError::MissingArgument { index })?;
                next += 1;
                render_spec(&spec, arg, index, &mut out)?;
            }
        }
    }
    Ok(out)
}

/// Writes the formatted output plus NUL into `dest`, like C `sprintf`.
///
/// Returns the number of bytes written, not counting the NUL.
pub fn sprintf(dest: &mut [u8], fmt: &[u8], args: &[FormatArg<'_>]) -> Result<usize, FormatError> {
    let out = format_bytes(fmt, args)?;
    if dest.len() <= out.len() {
        return Err(FormatError::BufferTooSmall {
            needed: out.len() + 1,
            capacity: dest.len(),
        });
    }
    dest[..out.len()].copy_from_slice(&out);
    dest[out.len()] = 0;
    Ok(out.len())
}

/// Writes at most `bound` bytes (including the NUL) into `dest`, like C
/// `snprintf`.
///
/// Returns the length the complete output would have had. When the output
/// does not fit, the first `bound - 1` bytes are kept and `dest[bound - 1]`
/// receives the NUL. A `bound` of zero writes nothing.
pub fn snprintf(
    dest: &mut [u8],
    bound: usize,
    fmt: &[u8],
    args: &[FormatArg<'_>],
) -> Result<usize, FormatError> {
    if bound > dest.len() {
        return Err(FormatError::BufferTooSmall {
            needed: bound,
            capacity: dest.len(),
        });
    }
    let out = format_bytes(fmt, args)?;
    if bound > 0 {
        let kept = out.len().min(bound - 1);
        dest[..kept].copy_from_slice(&out[..kept]);
        dest[kept] = 0;
    }
    Ok(out.len())
}

fn int_arg(args: &[FormatArg<'_>], next: &mut usize, conversion: u8) -> Result<i64, FormatError> {
    let index = *next;
    let value = match args.get(index) {
        Some(FormatArg::SignedInt(v)) => *v,
        Some(FormatArg::UnsignedInt(v)) => *v as i64,
        Some(_) => return Err(FormatError::ArgumentMismatch { index, conversion }),
        None => return Err(FormatError::MissingArgument { index }),
    };
    *next += 1;
    Ok(value)
}

fn render_spec(
    spec: &FormatSpec,
    arg: FormatArg<'_>,
    index: usize,
    buf: &mut Vec<u8>,
) -> Result<(), FormatError> {
    let mismatch = FormatError::ArgumentMismatch {
        index,
        conversion: spec.conversion,
    };
    match (spec.conversion, arg) {
        (b'd' | b'i', FormatArg::SignedInt(v)) => format_signed(narrow_signed(v, spec.length), spec, buf),
        (b'd' | b'i', FormatArg::UnsignedInt(v)) => {
            format_signed(narrow_signed(v as i64, spec.length), spec, buf)
        }
        (b'd' | b'i', FormatArg::Char(c)) => format_signed(i64::from(c), spec, buf),
        (b'u' | b'x' | b'X' | b'o', FormatArg::UnsignedInt(v)) => {
            format_unsigned(narrow_unsigned(v, spec.length), spec, buf)
        }
        (b'u' | b'x' | b'X' | b'o', FormatArg::SignedInt(v)) => {
            format_unsigned(narrow_unsigned(v as u64, spec.length), spec, buf)
        }
        (b'c', FormatArg::Char(c)) => format_char(c, spec, buf),
        (b'c', FormatArg::SignedInt(v)) => format_char(v as u8, spec, buf),
        (b's', FormatArg::Str(s)) => format_str(s, spec, buf),
        (b'p', FormatArg::Pointer(addr)) => format_pointer(addr, spec, buf),
        _ => return Err(mismatch),
    }
    Ok(())
}

/// Apply C default argument promotion for the length modifier.
fn narrow_signed(value: i64, length: LengthMod) -> i64 {
    match length {
        LengthMod::Hh => i64::from(value as i8),
        LengthMod::H => i64::from(value as i16),
        LengthMod::None => i64::from(value as i32),
        _ => value,
    }
}

fn narrow_unsigned(value: u64, length: LengthMod) -> u64 {
    match length {
        LengthMod::Hh => u64::from(value as u8),
        LengthMod::H => u64::from(value as u16),
        LengthMod::None => u64::from(value as u32),
        _ => value,
    }
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Most padding a single directive may emit.
const MAX_PAD: usize = 4096;

/// Render a signed integer to `buf` according to `spec`.
pub fn format_signed(value: i64, spec: &FormatSpec, buf: &mut Vec<u8>) {
    let sign: &[u8] = if value < 0 {
        b"-"
    } else if spec.flags.force_sign {
        b"+"
    } else if spec.flags.space_sign {
        b" "
    } else {
        b""
    };
    let digits = digits_of(value.unsigned_abs(), 10, false);
    emit_integer(sign, &digits, spec, buf);
}

/// Render an unsigned integer (`%u %o %x %X`) to `buf` according to `spec`.
pub fn format_unsigned(value: u64, spec: &FormatSpec, buf: &mut Vec<u8>) {
    let (radix, upper, alt): (u64, bool, &[u8]) = match spec.conversion {
        b'o' => (8, false, &b"0"[..]),
        b'x' => (16, false, &b"0x"[..]),
        b'X' => (16, true, &b"0X"[..]),
        _ => (10, false, &b""[..]),
    };
    let prefix = if spec.flags.alt_form && value != 0 {
        alt
    } else {
        b""
    };
    let digits = digits_of(value, radix, upper);
    emit_integer(prefix, &digits, spec, buf);
}

/// Render a string argument; a precision caps how many bytes are shown.
pub fn format_str(s: &[u8], spec: &FormatSpec, buf: &mut Vec<u8>) {
    let shown = match spec.precision {
        Precision::Fixed(p) => &s[..s.len().min(p)],
        _ => s,
    };
    pad_around(shown, spec, buf);
}

pub fn format_char(c: u8, spec: &FormatSpec, buf: &mut Vec<u8>) {
    pad_around(&[c], spec, buf);
}

/// Render a pointer as `0x...`, or `(nil)` for null.
pub fn format_pointer(addr: usize, spec: &FormatSpec, buf: &mut Vec<u8>) {
    if addr == 0 {
        pad_around(b"(nil)", spec, buf);
        return;
    }
    let mut body = b"0x".to_vec();
    body.extend(digits_of(addr as u64, 16, false));
    pad_around(&body, spec, buf);
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Lay out `lead` (sign or radix prefix), precision zeros and `digits`
/// inside the field width.
fn emit_integer(lead: &[u8], digits: &[u8], spec: &FormatSpec, buf: &mut Vec<u8>) {
    // "%.0d" of zero prints no digits at all.
    let digits = if digits == b"0" && spec.precision == Precision::Fixed(0) {
        &[][..]
    } else {
        digits
    };
    let zeros = match spec.precision {
        Precision::Fixed(p) => p.saturating_sub(digits.len()),
        _ => 0,
    };
    let fill = field_width(spec).saturating_sub(lead.len() + zeros + digits.len());
    // An explicit precision turns the '0' flag off for integers.
    let zero_fill =
        spec.flags.zero_pad && !spec.flags.left_justify && spec.precision == Precision::None;

    if !spec.flags.left_justify && !zero_fill {
        pad(buf, b' ', fill);
    }
    buf.extend_from_slice(lead);
    if zero_fill {
        pad(buf, b'0', fill);
    }
    pad(buf, b'0', zeros);
    buf.extend_from_slice(digits);
    if spec.flags.left_justify {
        pad(buf, b' ', fill);
    }
}

fn pad_around(body: &[u8], spec: &FormatSpec, buf: &mut Vec<u8>) {
    let fill = field_width(spec).saturating_sub(body.len());
    if spec.flags.left_justify {
        buf.extend_from_slice(body);
        pad(buf, b' ', fill);
    } else {
        pad(buf, b' ', fill);
        buf.extend_from_slice(body);
    }
}

fn field_width(spec: &FormatSpec) -> usize {
    match spec.width {
        Width::Fixed(w) => w,
        _ => 0,
    }
}

fn parse_decimal(digits: &[u8]) -> usize {
    digits.iter().fold(0usize, |acc, &d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    })
}

/// Digits of `value` in `radix`, most significant first.
fn digits_of(mut value: u64, radix: u64, upper: bool) -> Vec<u8> {
    let table: &[u8; 16] = if upper {
        b"0123456789ABCDEF"
    } else {
        b"0123456789abcdef"
    };
    let mut out = Vec::with_capacity(22);
    loop {
        out.push(table[(value % radix) as usize]);
        value /= radix;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    out
}

fn pad(buf: &mut Vec<u8>, byte: u8, count: usize) {
    buf.resize(buf.len() + count.min(MAX_PAD), byte);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(conversion: u8) -> FormatSpec {
        FormatSpec {
            flags: FormatFlags::default(),
            width: Width::None,
            precision: Precision::None,
            length: LengthMod::None,
            conversion,
        }
    }

    #[test]
    fn test_parse_format_string_segments() {
        let segments = parse_format_string(b"hello %d world %s!");
        assert_eq!(segments.len(), 5);
        assert!(matches!(segments[0], FormatSegment::Literal(b"hello ")));
        assert!(matches!(&segments[1], FormatSegment::Spec(s) if s.conversion == b'd'));
        assert!(matches!(segments[2], FormatSegment::Literal(b" world ")));
        assert!(matches!(&segments[3], FormatSegment::Spec(s) if s.conversion == b's'));
        assert!(matches!(segments[4], FormatSegment::Literal(b"!")));
    }

    #[test]
    fn test_parse_percent_escape() {
        let segments = parse_format_string(b"100%%");
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0], FormatSegment::Literal(b"100")));
        assert!(matches!(segments[1], FormatSegment::Percent));
    }

    #[test]
    fn test_parse_stops_at_nul() {
        let segments = parse_format_string(b"ab\0%d");
        assert_eq!(segments, vec![FormatSegment::Literal(b"ab")]);
    }

    #[test]
    fn test_parse_float_conversion_is_literal() {
        let out = format_bytes(b"%f", &[]).unwrap();
        assert_eq!(out, b"%f");
    }

    #[test]
    fn test_parse_flags_and_width() {
        let (spec, consumed) = parse_format_spec(b"-08.3lx").unwrap();
        assert!(spec.flags.left_justify);
        assert!(!spec.flags.zero_pad);
        assert_eq!(spec.width, Width::Fixed(8));
        assert_eq!(spec.precision, Precision::Fixed(3));
        assert_eq!(spec.length, LengthMod::L);
        assert_eq!(spec.conversion, b'x');
        assert_eq!(consumed, 7);
    }

    #[test]
    fn test_format_signed_basic() {
        let mut buf = Vec::new();
        format_signed(42, &spec(b'd'), &mut buf);
        assert_eq!(&buf, b"42");
    }

    #[test]
    fn test_format_signed_negative() {
        let mut buf = Vec::new();
        format_signed(-123, &spec(b'd'), &mut buf);
        assert_eq!(&buf, b"-123");
    }

    #[test]
    fn test_format_signed_width_pad() {
        let mut buf = Vec::new();
        let s = FormatSpec {
            width: Width::Fixed(8),
            ..spec(b'd')
        };
        format_signed(42, &s, &mut buf);
        assert_eq!(&buf, b"      42");
    }

    #[test]
    fn test_format_signed_zero_pad_after_sign() {
        let mut buf = Vec::new();
        let s = FormatSpec {
            flags: FormatFlags {
                zero_pad: true,
                ..Default::default()
            },
            width: Width::Fixed(6),
            ..spec(b'd')
        };
        format_signed(-42, &s, &mut buf);
        assert_eq!(&buf, b"-00042");
    }

    #[test]
    fn test_format_unsigned_hex_alt() {
        let mut buf = Vec::new();
        let s = FormatSpec {
            flags: FormatFlags {
                alt_form: true,
                ..Default::default()
            },
            ..spec(b'X')
        };
        format_unsigned(48879, &s, &mut buf);
        assert_eq!(&buf, b"0XBEEF");
    }

    #[test]
    fn test_format_precision_zero_suppresses_zero() {
        let mut buf = Vec::new();
        let s = FormatSpec {
            precision: Precision::Fixed(0),
            ..spec(b'd')
        };
        format_signed(0, &s, &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_format_str_precision_and_left_justify() {
        let mut buf = Vec::new();
        let s = FormatSpec {
            flags: FormatFlags {
                left_justify: true,
                ..Default::default()
            },
            width: Width::Fixed(6),
            precision: Precision::Fixed(3),
            ..spec(b's')
        };
        format_str(b"abcdef", &s, &mut buf);
        assert_eq!(&buf, b"abc   ");
    }

    #[test]
    fn test_format_pointer_null_and_hex() {
        let mut buf = Vec::new();
        format_pointer(0, &spec(b'p'), &mut buf);
        assert_eq!(&buf, b"(nil)");
        buf.clear();
        format_pointer(0x1000, &spec(b'p'), &mut buf);
        assert_eq!(&buf, b"0x1000");
    }

    #[test]
    fn test_format_bytes_mixed() {
        let out = format_bytes(
            b"Int: %d, String: %s, Char: %c\n",
            &[
                FormatArg::SignedInt(42),
                FormatArg::Str(b"test"),
                FormatArg::Char(b'X'),
            ],
        )
        .unwrap();
        assert_eq!(out, b"Int: 42, String: test, Char: X\n");
        assert_eq!(out.len(), 31);
    }

    #[test]
    fn test_format_bytes_star_width() {
        let out = format_bytes(
            b"[%*d]",
            &[FormatArg::SignedInt(-4), FormatArg::SignedInt(7)],
        )
        .unwrap();
        assert_eq!(out, b"[7   ]");
    }

    #[test]
    fn test_format_bytes_default_int_is_32_bit() {
        let out = format_bytes(b"%u", &[FormatArg::SignedInt(-1)]).unwrap();
        assert_eq!(out, b"4294967295");
    }

    #[test]
    fn test_format_bytes_missing_argument() {
        let err = format_bytes(b"%d %d", &[FormatArg::SignedInt(1)]).unwrap_err();
        assert_eq!(err, FormatError::MissingArgument { index: 1 });
    }

    #[test]
    fn test_format_bytes_mismatch() {
        let err = format_bytes(b"%s", &[FormatArg::SignedInt(1)]).unwrap_err();
        assert_eq!(
            err,
            FormatError::ArgumentMismatch {
                index: 0,
                conversion: b's'
            }
        );
    }

    #[test]
    fn test_sprintf_terminates() {
        let mut dest = [0xAAu8; 8];
        assert_eq!(sprintf(&mut dest, b"%%", &[]), Ok(1));
        assert_eq!(&dest[..2], b"%\0");
    }

    #[test]
    fn test_sprintf_rejects_small_dest() {
        let mut dest = [0u8; 3];
        assert!(matches!(
            sprintf(&mut dest, b"abc", &[]),
            Err(FormatError::BufferTooSmall { needed: 4, capacity: 3 })
        ));
    }

    #[test]
    fn test_snprintf_truncates() {
        let mut dest = [0xAAu8; 10];
        assert_eq!(snprintf(&mut dest, 10, b"Hello, world!", &[]), Ok(13));
        assert_eq!(&dest, b"Hello, wo\0");
    }

    #[test]
    fn test_snprintf_exact_fit() {
        let mut dest = [0xAAu8; 10];
        assert_eq!(snprintf(&mut dest, 10, b"123456789", &[]), Ok(9));
        assert_eq!(&dest, b"123456789\0");
    }

    #[test]
    fn test_snprintf_zero_bound_writes_nothing() {
        let mut dest = [0xAAu8; 4];
        assert_eq!(snprintf(&mut dest, 0, b"Hello", &[]), Ok(5));
        assert_eq!(dest, [0xAAu8; 4]);
    }
}
