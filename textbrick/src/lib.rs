use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

pub use config::DocumentConfig;
pub use error::{Result, TbError};
pub use inspect::Inspection;
pub use simple_encode::SimpleEncoder;

pub mod config;
pub mod content;
mod error;
pub mod graph;
pub mod inspect;
pub mod layout;
pub mod markup;
pub mod parse;
pub mod pdf;
pub mod simple_encode;
pub mod writer;

/// Lay out, encode and serialize already normalized lines.
///
/// No lines give a valid document with zero pages.
pub fn render_lines<I>(lines: I, config: &DocumentConfig) -> Result<Vec<u8>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let pages = layout::paginate(lines, config);

    log::debug!("encode {} content streams", pages.len());
    let contents = pages
        .iter()
        .map(|page| content::encode_page(page, config))
        .collect::<Result<Vec<_>>>()?;

    let graph = graph::build_document(contents, config)?;
    let out = simple_encode::to_bytes(&graph);
    log::debug!("document has {} bytes", out.len());
    Ok(out)
}

/// Normalize light markup (headings, bullets) and render it.
pub fn render_markdown(text: &str, config: &DocumentConfig) -> Result<Vec<u8>> {
    render_lines(markup::normalize(text), config)
}

/// Read a UTF-8 text file and write it as a PDF with the default layout.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let mut text = String::new();
    File::open(input)?.read_to_string(&mut text)?;

    let out = render_markdown(&text, &DocumentConfig::default())?;

    File::create(output)?.write_all(&out)?;
    log::info!("wrote {} ({} bytes)", output.display(), out.len());
    Ok(())
}

/// Read a PDF file written by this crate and verify its structure.
pub fn read_file(file_path: &Path) -> Result<Inspection> {
    let mut input_file = File::open(file_path)?;
    let mut buf = Vec::new();
    input_file.read_to_end(&mut buf)?;

    Inspection::from_bytes(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn heading_bullet_and_filler() {
        let mut text = String::from("# Title\n- item one\n");
        for _ in 0..60 {
            text.push_str(&"f".repeat(70));
            text.push('\n');
        }

        let pdf = render_markdown(&text, &DocumentConfig::default()).unwrap();
        let inspection = Inspection::from_bytes(&pdf).unwrap();

        assert!(inspection.page_count().unwrap() >= 2);
        let first = inspection.page_lines(0).unwrap();
        assert_eq!(first[0], "Title");
        assert_eq!(first[1], "• item one");
        assert!(!first.iter().any(|l| l == "- item one"));
    }

    #[test]
    fn long_line_is_hard_wrapped() {
        let pdf = render_lines([&"w".repeat(250)], &DocumentConfig::default()).unwrap();
        let lines = Inspection::from_bytes(&pdf).unwrap().page_lines(0).unwrap();
        let lens: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert_eq!(lens, vec![100, 100, 50]);
    }

    #[test]
    fn no_input_gives_zero_pages() {
        let pdf = render_markdown("", &DocumentConfig::default()).unwrap();
        assert!(contains(&pdf, b"<< /Type /Pages /Kids [] /Count 0 >>"));
        assert!(contains(&pdf, b"3 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica"));
        assert_eq!(Inspection::from_bytes(&pdf).unwrap().page_count().unwrap(), 0);
    }

    #[test]
    fn offsets_and_lengths_are_exact() {
        let lines: Vec<String> = (0..120).map(|i| format!("line {} (with) \\ escapes ä", i)).collect();
        let pdf = render_lines(&lines, &DocumentConfig::default()).unwrap();
        let inspection = Inspection::from_bytes(&pdf).unwrap();

        for used in inspection.xref.used_objects() {
            let header = format!("{} 0 obj\n", used.number);
            assert!(pdf[used.byte_offset..].starts_with(header.as_bytes()));
        }
        assert!(pdf[inspection.start_xref..].starts_with(b"xref\n"));

        // 120 lines on 53 line pages
        assert_eq!(inspection.page_count().unwrap(), 3);
        assert_eq!(inspection.xref.len(), 1 + 2 + 2 * 3 + 1);
    }

    #[test]
    fn document_frame() {
        let pdf = render_lines(["x"], &DocumentConfig::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n1 0 obj\n"));
        assert!(pdf.ends_with(b"%%EOF\n"));
        assert!(contains(&pdf, b"trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n"));
    }

    #[test]
    fn convert_and_read_back() {
        let dir = std::env::temp_dir().join(format!("textbrick-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("notes.md");
        let output = dir.join("notes.pdf");
        std::fs::write(&input, "\u{feff}## Notes\n- one\n- two\n").unwrap();

        convert_file(&input, &output).unwrap();
        let inspection = read_file(&output).unwrap();
        assert_eq!(inspection.page_lines(0).unwrap(), vec!["Notes", "• one", "• two"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input_is_io_error() {
        let missing = std::env::temp_dir().join("textbrick-does-not-exist.md");
        let output = std::env::temp_dir().join("textbrick-does-not-exist.pdf");
        assert!(matches!(convert_file(&missing, &output), Err(TbError::Io(_))));
    }
}
