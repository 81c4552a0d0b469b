//! Windows-1252 codec, known to PDF readers as `WinAnsiEncoding`.
//!
//! The encoder is lossy on purpose: every character that has no code point in
//! the charset is replaced with [`REPLACEMENT`], so encoding never fails.

/// Byte written for characters that can't be represented.
pub const REPLACEMENT: u8 = b'?';

/// Characters of the 0x80..=0x9F block. `None` marks the five unassigned
/// code points.
const HIGH_CONTROL_BLOCK: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// Encode a single character, `None` if the charset has no code point for it.
pub fn encode_char(c: char) -> Option<u8> {
    match c {
        '\u{0000}'..='\u{007F}' | '\u{00A0}'..='\u{00FF}' => Some(c as u8),
        _ => HIGH_CONTROL_BLOCK
            .iter()
            .position(|&mapped| mapped == Some(c))
            .map(|index| 0x80 + index as u8),
    }
}

/// Encode a string, replacing every unrepresentable character with
/// [`REPLACEMENT`].
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    encode_into(s, &mut out);
    out
}

/// Same as [`encode`] but appends to `out`. Returns the number of characters
/// that got replaced.
pub fn encode_into(s: &str, out: &mut Vec<u8>) -> usize {
    let mut replaced = 0;
    for c in s.chars() {
        match encode_char(c) {
            Some(byte) => out.push(byte),
            None => {
                replaced += 1;
                out.push(REPLACEMENT);
            }
        }
    }
    replaced
}

/// Decode a single byte, `None` for the unassigned code points.
pub fn decode_byte(b: u8) -> Option<char> {
    match b {
        0x80..=0x9F => HIGH_CONTROL_BLOCK[usize::from(b - 0x80)],
        _ => Some(char::from(b)),
    }
}

/// Decode bytes, mapping unassigned code points to U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| decode_byte(b).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
