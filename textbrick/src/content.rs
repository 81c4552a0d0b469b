//! Page content streams.
//!
//! A page is drawn as one text object: select the font, move to the top left
//! of the text area, then show each display line one line height below the
//! previous one. The operator bytes are zlib compressed.

use flate2::{write::ZlibEncoder, Compression};

use crate::{
    config::DocumentConfig,
    error::Result,
    layout::Page,
    pdf::{Name, TbString},
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

/// Text operators used by the content streams.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// `BT`
    BeginText,
    /// `/F1 10 Tf`
    SetFont { resource: Name, size: i32 },
    /// `1 0 0 1 x y Tm`
    SetTextMatrix { x: i32, y: i32 },
    /// `dx dy Td`
    MoveText { dx: i32, dy: i32 },
    /// `(…) Tj`
    ShowText(TbString),
    /// `ET`
    EndText,
}

impl Encoder<Operation> for SimpleEncoder {
    fn write_to(op: &Operation, writer: &mut dyn Writer) {
        match op {
            Operation::BeginText => writer.write(b"BT"),
            Operation::SetFont { resource, size } => {
                Self::write_to(resource, writer);
                writer.write(format!(" {} Tf", size).as_bytes());
            }
            Operation::SetTextMatrix { x, y } => writer.write(format!("1 0 0 1 {} {} Tm", x, y).as_bytes()),
            Operation::MoveText { dx, dy } => writer.write(format!("{} {} Td", dx, dy).as_bytes()),
            Operation::ShowText(text) => {
                Self::write_to(text, writer);
                writer.write(b" Tj");
            }
            Operation::EndText => writer.write(b"ET"),
        }
    }
}

/// Encode a display line into WinAnsi bytes.
///
/// Characters outside the charset become `?`. Escaping of `\`, `(` and `)`
/// happens later, on these bytes, when the string is written.
pub fn encode_text(line: &str) -> TbString {
    let mut bytes = Vec::with_capacity(line.len());
    let replaced = aw_winansi::encode_into(line, &mut bytes);
    if replaced > 0 {
        log::trace!("replaced {} characters not representable in WinAnsi", replaced);
    }
    TbString::from(bytes)
}

/// Operators for one page, grouped by stream line.
pub fn page_operations(page: &Page, config: &DocumentConfig) -> Vec<Vec<Operation>> {
    let (x, y) = config.text_origin();
    let mut lines = Vec::with_capacity(page.len() + 4);
    lines.push(vec![Operation::BeginText]);
    lines.push(vec![Operation::SetFont {
        resource: Name::from(config.font_resource.as_str()),
        size: config.font_size,
    }]);
    lines.push(vec![Operation::SetTextMatrix { x, y }]);

    for (i, line) in page.lines().iter().enumerate() {
        let show = Operation::ShowText(encode_text(line));
        if i == 0 {
            lines.push(vec![show]);
        } else {
            lines.push(vec![
                Operation::MoveText {
                    dx: 0,
                    dy: -config.line_height,
                },
                show,
            ]);
        }
    }

    lines.push(vec![Operation::EndText]);
    lines
}

/// Uncompressed operator bytes. Lines are separated by `\n`, operators on
/// the same line by a space; there is no trailing newline.
pub fn content_bytes(page: &Page, config: &DocumentConfig) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, line) in page_operations(page, config).iter().enumerate() {
        if i != 0 {
            out.write(b"\n");
        }
        for (j, op) in line.iter().enumerate() {
            if j != 0 {
                out.write(b" ");
            }
            SimpleEncoder::write_to(op, &mut out);
        }
    }
    out
}

/// zlib compress, as expected by `/FlateDecode`.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    use std::io::Write;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Compressed content stream body for one page.
pub fn encode_page(page: &Page, config: &DocumentConfig) -> Result<Vec<u8>> {
    let raw = content_bytes(page, config);
    let compressed = compress(&raw)?;
    log::trace!(
        "content stream: {} lines, {} bytes, {} compressed",
        page.len(),
        raw.len(),
        compressed.len()
    );
    Ok(compressed)
}
