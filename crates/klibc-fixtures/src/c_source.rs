//! C source rendering primitives.
//!
//! Everything that ends up between quotes or braces in a fixture goes
//! through here, so escaping rules live in one place.

use std::fmt::Write as _;

/// Render `bytes` as a C string literal.
///
/// Non-printable bytes (NUL included) become three-digit octal escapes. A
/// three-digit escape cannot absorb a following digit, unlike `\0` or `\x`.
#[must_use]
pub fn string_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        push_escaped(&mut out, b, b'"');
    }
    out.push('"');
    out
}

/// Render `byte` as a C character literal.
#[must_use]
pub fn char_literal(byte: u8) -> String {
    let mut out = String::with_capacity(6);
    out.push('\'');
    push_escaped(&mut out, byte, b'\'');
    out.push('\'');
    out
}

/// Render `bytes` as a brace initializer of hex bytes: `{0x00, 0x01}`.
#[must_use]
pub fn byte_initializer(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(|b| format!("0x{b:02x}")).collect();
    format!("{{{}}}", items.join(", "))
}

/// Turn a human case label into a C identifier fragment.
///
/// Lowercases, maps every run of non-alphanumerics to a single `_` and trims
/// underscores at both ends. A label with no alphanumerics becomes `case`.
#[must_use]
pub fn identifier(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("case");
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

fn push_escaped(out: &mut String, b: u8, quote: u8) {
    match b {
        b'\\' => out.push_str("\\\\"),
        b'\n' => out.push_str("\\n"),
        b'\t' => out.push_str("\\t"),
        b'\r' => out.push_str("\\r"),
        // Keeps "??x" from being read as a trigraph.
        b'?' => out.push_str("\\?"),
        _ if b == quote => {
            out.push('\\');
            out.push(char::from(b));
        }
        0x20..=0x7e => out.push(char::from(b)),
        _ => {
            let _ = write!(out, "\\{b:03o}");
        }
    }
}

/// Statement list for one `// Test ...` block inside `main`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CBlock {
    lines: Vec<String>,
}

impl CBlock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Block opened with the conventional `// Test <label>` comment.
    #[must_use]
    pub fn titled(label: &str) -> Self {
        let mut block = Self::new();
        block.comment(&format!("Test {label}"));
        block
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("    // {text}"));
        self
    }

    pub fn stmt(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.lines.push(format!("    {}", text.as_ref()));
        self
    }

    /// `check(<condition>);`
    pub fn check(&mut self, condition: impl AsRef<str>) -> &mut Self {
        self.stmt(format!("check({});", condition.as_ref()))
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
