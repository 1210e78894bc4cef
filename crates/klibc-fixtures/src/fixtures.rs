//! Fixture model: routines, cases, expected values and rendered files.

use std::cmp::Ordering;

use klibc_ref::stdio::FormatArg;
use serde::Serialize;

use crate::c_source::{self, CBlock};

/// Header every fixture includes; it defines `check`.
pub const TRAP_HEADER: &str = "trap.h";

/// A routine under test. One fixture file is generated per routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Routine {
    Memset,
    Memcpy,
    Memmove,
    Memcmp,
    Strlen,
    Strcat,
    Strcpy,
    Strncpy,
    Strcmp,
    Strncmp,
    Printf,
    Sprintf,
    Snprintf,
    Vsprintf,
    Vsnprintf,
}

impl Routine {
    /// Every covered routine, in emission order.
    pub const ALL: [Routine; 15] = [
        Routine::Memset,
        Routine::Memcpy,
        Routine::Memmove,
        Routine::Memcmp,
        Routine::Strlen,
        Routine::Strcat,
        Routine::Strcpy,
        Routine::Strncpy,
        Routine::Strcmp,
        Routine::Strncmp,
        Routine::Printf,
        Routine::Sprintf,
        Routine::Snprintf,
        Routine::Vsprintf,
        Routine::Vsnprintf,
    ];

    /// C symbol name.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Routine::Memset => "memset",
            Routine::Memcpy => "memcpy",
            Routine::Memmove => "memmove",
            Routine::Memcmp => "memcmp",
            Routine::Strlen => "strlen",
            Routine::Strcat => "strcat",
            Routine::Strcpy => "strcpy",
            Routine::Strncpy => "strncpy",
            Routine::Strcmp => "strcmp",
            Routine::Strncmp => "strncmp",
            Routine::Printf => "printf",
            Routine::Sprintf => "sprintf",
            Routine::Snprintf => "snprintf",
            Routine::Vsprintf => "vsprintf",
            Routine::Vsnprintf => "vsnprintf",
        }
    }

    /// API family the routine belongs to (`string` or `stdio`).
    #[must_use]
    pub const fn family(self) -> &'static str {
        match self {
            Routine::Printf
            | Routine::Sprintf
            | Routine::Snprintf
            | Routine::Vsprintf
            | Routine::Vsnprintf => "stdio",
            _ => "string",
        }
    }

    /// Output file name, `<routine>_test.c`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}_test.c", self.symbol())
    }

    /// Headers included at the top of the fixture, in order.
    #[must_use]
    pub fn headers(self) -> Vec<String> {
        let mut headers = vec![format!("\"{TRAP_HEADER}\"")];
        if self.family() == "stdio" {
            headers.push("<stdio.h>".to_string());
            headers.push("<string.h>".to_string());
        }
        if matches!(self, Routine::Vsprintf | Routine::Vsnprintf) {
            headers.push("<stdarg.h>".to_string());
        }
        headers
    }

    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.symbol() == symbol)
    }
}

/// How a C `char` array is declared, which fixes its in-memory contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CArray {
    /// `char x[] = "...";` storage is the text plus its terminator.
    Text(String),
    /// `char x[] = {0x.., ...};` storage is exactly these bytes.
    Bytes(Vec<u8>),
}

impl CArray {
    /// Bytes the array occupies in memory.
    #[must_use]
    pub fn storage(&self) -> Vec<u8> {
        match self {
            CArray::Text(s) => {
                let mut bytes = s.as_bytes().to_vec();
                bytes.push(0);
                bytes
            }
            CArray::Bytes(b) => b.clone(),
        }
    }

    /// `char <name>[] = <initializer>;`
    #[must_use]
    pub fn declaration(&self, name: &str) -> String {
        match self {
            CArray::Text(s) => format!("char {name}[] = {};", c_source::string_literal(s.as_bytes())),
            CArray::Bytes(b) => format!("char {name}[] = {};", c_source::byte_initializer(b)),
        }
    }
}

/// A named array shared by several comparison cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArray {
    pub name: String,
    pub array: CArray,
}

impl NamedArray {
    #[must_use]
    pub fn text(name: &str, s: &str) -> Self {
        Self {
            name: name.to_string(),
            array: CArray::Text(s.to_string()),
        }
    }

    #[must_use]
    pub fn bytes(name: &str, b: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            array: CArray::Bytes(b.to_vec()),
        }
    }
}

/// A variadic argument passed to a printf-family call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CArg {
    Int(i64),
    Uint(u64),
    Char(u8),
    Str(String),
}

impl CArg {
    /// The argument as it appears in the C call.
    #[must_use]
    pub fn c_expr(&self) -> String {
        match self {
            CArg::Int(v) => v.to_string(),
            CArg::Uint(v) => format!("{v}u"),
            CArg::Char(c) => c_source::char_literal(*c),
            CArg::Str(s) => c_source::string_literal(s.as_bytes()),
        }
    }

    #[must_use]
    pub fn as_format_arg(&self) -> FormatArg<'_> {
        match self {
            CArg::Int(v) => FormatArg::SignedInt(*v),
            CArg::Uint(v) => FormatArg::UnsignedInt(*v),
            CArg::Char(c) => FormatArg::Char(*c),
            CArg::Str(s) => FormatArg::Str(s.as_bytes()),
        }
    }
}

/// Destination of a printf-family call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSink {
    /// Console output; only the returned count is observable.
    Console,
    /// Unbounded write into a `capacity`-byte buffer.
    Buffer { capacity: usize },
    /// Write of at most `bound` bytes into a `capacity`-byte buffer.
    Bounded { capacity: usize, bound: usize },
}

/// Typed inputs of one case, exactly as the C block sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// `memset(buf, byte, size)` on a `size + 1` array.
    Fill { size: usize, byte: u8 },
    /// `memcpy(dst, src, len)` where `src` holds `payload`.
    Copy { payload: String },
    /// `memmove(dst, src, strlen(src) + 1)` between two arrays.
    MoveBetween { src: String, dst_capacity: usize },
    /// `memmove(buf + dst, buf + src, n)` inside one array.
    MoveWithin {
        init: String,
        capacity: usize,
        dst: usize,
        src: usize,
        n: usize,
    },
    /// `memcmp(lhs, rhs, n)`.
    Compare {
        lhs: NamedArray,
        rhs: NamedArray,
        n: usize,
    },
    /// `strlen(s)`.
    Length { s: String },
    /// `strcat(dst, suffix)` with `dst` initialised to `prefix`.
    Concat {
        prefix: String,
        suffix: String,
        capacity: usize,
    },
    /// `strcpy(dst, s)`.
    StrCopy { s: String, capacity: usize },
    /// `strncpy(dst, src, n)` after zeroing `dst`.
    BoundedCopy {
        src: String,
        n: usize,
        capacity: usize,
    },
    /// `strcmp(lhs, rhs)` or, with a bound, `strncmp(lhs, rhs, bound)`.
    StrCompare {
        lhs: String,
        rhs: String,
        bound: Option<usize>,
    },
    /// A printf-family call.
    Format {
        format: String,
        args: Vec<CArg>,
        sink: FormatSink,
    },
}

/// Outcome the fixture asserts for a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// The compared region must hold exactly these bytes.
    Bytes(Vec<u8>),
    /// The routine returns this length.
    Length(usize),
    /// The comparison has this sign.
    Sign(Ordering),
    /// A printf-family call returns `len`; `content` is the C string left in
    /// the destination, `None` when nothing observable is written.
    Formatted { len: usize, content: Option<Vec<u8>> },
    /// Only completion is asserted.
    Smoke,
}

impl Expected {
    /// Stable textual form used in verification reports.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Expected::Bytes(b) => format!("bytes {}", c_source::string_literal(b)),
            Expected::Length(n) => format!("length {n}"),
            Expected::Sign(o) => format!("sign {}", sign_operator(*o)),
            Expected::Formatted { len, content } => match content {
                Some(c) => format!("len {len}, content {}", c_source::string_literal(c)),
                None => format!("len {len}"),
            },
            Expected::Smoke => "completes".to_string(),
        }
    }
}

/// C comparison operator asserting `ordering` against zero.
#[must_use]
pub fn sign_operator(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "< 0",
        Ordering::Equal => "== 0",
        Ordering::Greater => "> 0",
    }
}

/// One test case with its derived expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    /// Human label, used in the `// Test` comment.
    pub label: String,
    /// C identifier fragment derived from the label.
    pub ident: String,
    pub probe: Probe,
    pub expected: Expected,
}

impl FixtureCase {
    #[must_use]
    pub fn new(label: &str, probe: Probe, expected: Expected) -> Self {
        Self {
            label: label.to_string(),
            ident: c_source::identifier(label),
            probe,
            expected,
        }
    }
}

/// A case together with the C statements that exercise it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureBlock {
    pub case: FixtureCase,
    pub block: CBlock,
}

/// A fully derived fixture for one routine, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    pub routine: Routine,
    /// Top-level C definitions placed between the includes and `main`.
    pub helpers: Vec<String>,
    /// Declarations at the top of `main`, shared by all blocks.
    pub prologue: CBlock,
    pub blocks: Vec<FixtureBlock>,
}

impl FixtureFile {
    #[must_use]
    pub fn new(routine: Routine) -> Self {
        Self {
            routine,
            helpers: Vec::new(),
            prologue: CBlock::new(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, case: FixtureCase, block: CBlock) {
        self.blocks.push(FixtureBlock { case, block });
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        self.routine.file_name()
    }

    pub fn cases(&self) -> impl Iterator<Item = &FixtureCase> {
        self.blocks.iter().map(|b| &b.case)
    }

    /// Render the complete C translation unit.
    #[must_use]
    pub fn to_c_source(&self) -> String {
        let mut out = String::new();
        for header in self.routine.headers() {
            out.push_str(&format!("#include {header}\n"));
        }
        out.push('\n');
        for helper in &self.helpers {
            out.push_str(helper);
            out.push_str("\n\n");
        }
        out.push_str("int main() {\n");
        for line in self.prologue.lines() {
            out.push_str(line);
            out.push('\n');
        }
        for block in &self.blocks {
            out.push('\n');
            for line in block.block.lines() {
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str("\n    return 0;\n}\n");
        out
    }
}
