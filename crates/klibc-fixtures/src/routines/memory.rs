//! Memory routine fixtures: memset, memcpy, memmove, memcmp.

use std::cmp::Ordering;

use crate::c_source::{CBlock, char_literal, string_literal};
use crate::fixtures::{Expected, FixtureCase, FixtureFile, NamedArray, Probe, Routine};
use crate::payload::PayloadRng;

const FILL_CASES: &[(&str, usize, u8)] = &[
    ("small buffer", 10, b'A'),
    ("medium buffer", 100, b'B'),
    ("large buffer", 1000, b'C'),
    ("zero buffer", 0, b'D'),
    ("single byte", 1, b'E'),
];

const COPY_CASES: &[(&str, usize)] = &[
    ("small copy", 10),
    ("medium copy", 100),
    ("large copy", 1000),
    ("zero copy", 0),
    ("single byte copy", 1),
];

/// `memset` over buffers of 0, 1, 10, 100 and 1000 bytes.
#[must_use]
pub fn memset_fixture() -> FixtureFile {
    let mut file = FixtureFile::new(Routine::Memset);
    for &(label, size, byte) in FILL_CASES {
        let expected = vec![byte; size];
        let block_expected = string_literal(&expected);
        let case = FixtureCase::new(label, Probe::Fill { size, byte }, Expected::Bytes(expected));
        let buf = format!("buf_{}", case.ident);

        let mut block = CBlock::titled(label);
        block
            .stmt(format!("char {buf}[{}];", size + 1))
            .stmt(format!("memset({buf}, {}, {size});", char_literal(byte)))
            .stmt(format!("{buf}[{size}] = '\\0';"))
            .check(format!("memcmp({buf}, {block_expected}, {size}) == 0"));
        file.push(case, block);
    }
    file
}

/// `memcpy` of seeded alphanumeric payloads.
#[must_use]
pub fn memcpy_fixture(seed: u64) -> FixtureFile {
    let mut rng = PayloadRng::new(seed);
    let mut file = FixtureFile::new(Routine::Memcpy);
    for &(label, size) in COPY_CASES {
        let payload = rng.alphanumeric(size);
        let literal = string_literal(payload.as_bytes());
        let expected = payload.as_bytes().to_vec();
        let case = FixtureCase::new(label, Probe::Copy { payload }, Expected::Bytes(expected));
        let src = format!("src_{}", case.ident);
        let dst = format!("dst_{}", case.ident);

        let mut block = CBlock::titled(label);
        block
            .stmt(format!("char {src}[] = {literal};"))
            .stmt(format!("char {dst}[{}];", size + 1))
            .stmt(format!("memcpy({dst}, {src}, {size});"))
            .stmt(format!("{dst}[{size}] = '\\0';"))
            .check(format!("memcmp({dst}, {src}, {size}) == 0"))
            .check(format!("memcmp({dst}, {literal}, {size}) == 0"));
        file.push(case, block);
    }
    file
}

/// `memmove` between arrays and inside one array, overlapping or not.
#[must_use]
pub fn memmove_fixture() -> FixtureFile {
    let mut file = FixtureFile::new(Routine::Memmove);

    let label = "non-overlapping regions";
    let text = "This is a test string for memmove";
    let mut expected = text.as_bytes().to_vec();
    expected.push(0);
    let case = FixtureCase::new(
        label,
        Probe::MoveBetween {
            src: text.to_string(),
            dst_capacity: 50,
        },
        Expected::Bytes(expected),
    );
    let src = format!("src_{}", case.ident);
    let dst = format!("dst_{}", case.ident);
    let mut block = CBlock::titled(label);
    block
        .stmt(format!("char {src}[] = {};", string_literal(text.as_bytes())))
        .stmt(format!("char {dst}[50];"))
        .stmt(format!("memmove({dst}, {src}, strlen({src}) + 1);"))
        .check(format!("memcmp({dst}, {src}, strlen({src}) + 1) == 0"))
        .check(format!("strcmp({dst}, {}) == 0", string_literal(text.as_bytes())));
    file.push(case, block);

    let within: &[(&str, &str, usize, usize, usize, usize)] = &[
        ("overlapping regions (src < dst)", "Overlapping test string", 100, 10, 0, 15),
        ("overlapping regions (dst < src)", "Another overlapping test string", 100, 0, 5, 15),
        ("zero-length move", "Test", 10, 0, 0, 0),
    ];
    for &(label, init, capacity, dst, src, n) in within {
        let expected = derive_move_within(init, capacity, dst, src, n);
        let case = FixtureCase::new(
            label,
            Probe::MoveWithin {
                init: init.to_string(),
                capacity,
                dst,
                src,
                n,
            },
            expected,
        );
        let buf = format!("buf_{}", case.ident);
        let mut block = CBlock::titled(label);
        block
            .stmt(format!(
                "char {buf}[{capacity}] = {};",
                string_literal(init.as_bytes())
            ))
            .stmt(format!(
                "memmove({}, {}, {n});",
                offset_expr(&buf, dst),
                offset_expr(&buf, src)
            ));
        match &case.expected {
            Expected::Bytes(contents) => {
                block.check(format!("strcmp({buf}, {}) == 0", string_literal(contents)));
            }
            _ => {
                block.comment("Overlapping ranges: only completion is checked");
            }
        }
        file.push(case, block);
    }
    file
}

/// Expected C string left in the array after an in-place move.
///
/// Zero-length moves leave the array untouched. Overlapping moves are
/// smoke-tested only.
fn derive_move_within(init: &str, capacity: usize, dst: usize, src: usize, n: usize) -> Expected {
    if n == 0 {
        return Expected::Bytes(init.as_bytes().to_vec());
    }
    if src < dst + n && dst < src + n {
        return Expected::Smoke;
    }
    let mut storage = init.as_bytes().to_vec();
    storage.resize(capacity, 0);
    let moved = storage[src..src + n].to_vec();
    storage[dst..dst + n].copy_from_slice(&moved);
    let end = storage.iter().position(|&b| b == 0).unwrap_or(storage.len());
    Expected::Bytes(storage[..end].to_vec())
}

fn offset_expr(base: &str, offset: usize) -> String {
    if offset == 0 {
        base.to_string()
    } else {
        format!("{base} + {offset}")
    }
}

/// `memcmp` over string-initialised and binary arrays.
#[must_use]
pub fn memcmp_fixture() -> FixtureFile {
    let operands = [
        NamedArray::text("str1", "ABC"),
        NamedArray::text("str2", "ABC"),
        NamedArray::text("str3", "ABD"),
        NamedArray::text("str4", "ABB"),
        NamedArray::text("str5", "ABCD"),
        NamedArray::bytes("bin1", &[0x00, 0x01, 0x02, 0x03]),
        NamedArray::bytes("bin2", &[0x00, 0x01, 0x02, 0x04]),
    ];
    let cases: &[(&str, usize, usize, usize)] = &[
        ("equal strings", 0, 1, 3),
        ("zero-length compare", 0, 1, 0),
        ("lower last byte", 0, 2, 3),
        ("higher last byte", 2, 0, 3),
        ("above smaller string", 0, 3, 3),
        ("below larger string", 3, 0, 3),
        ("shared prefix", 0, 4, 3),
        ("shorter string", 0, 4, 4),
        ("binary prefix", 5, 6, 3),
        ("binary with null bytes", 5, 6, 4),
    ];

    let mut file = FixtureFile::new(Routine::Memcmp);
    for operand in &operands {
        file.prologue.stmt(operand.array.declaration(&operand.name));
    }
    for &(label, lhs, rhs, n) in cases {
        let lhs = operands[lhs].clone();
        let rhs = operands[rhs].clone();
        let ordering = byte_order(&lhs.array.storage(), &rhs.array.storage(), n);
        let call = format!("memcmp({}, {}, {n})", lhs.name, rhs.name);
        let case = FixtureCase::new(label, Probe::Compare { lhs, rhs, n }, Expected::Sign(ordering));

        let mut block = CBlock::titled(label);
        block.check(format!(
            "{call} {}",
            crate::fixtures::sign_operator(ordering)
        ));
        file.push(case, block);
    }
    file
}

/// Sign of the first differing byte within the first `n` bytes.
fn byte_order(lhs: &[u8], rhs: &[u8], n: usize) -> Ordering {
    lhs.iter()
        .zip(rhs)
        .take(n)
        .find(|(a, b)| a != b)
        .map_or(Ordering::Equal, |(a, b)| a.cmp(b))
}
