use std::path::PathBuf;
use structopt::StructOpt;

/// Read a PDF written by textbrick, verify it and print its pages.
///
/// Build with `--features trace` to get a histogram of the parser calls.
#[derive(StructOpt, Debug)]
#[structopt(name = "inspect")]
struct Opt {
    /// Input file
    #[structopt(short, long, parse(from_os_str))]
    input: PathBuf,

    /// Also print the shown text of every page
    #[structopt(short, long)]
    text: bool,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let inspection = match textbrick::read_file(opt.input.as_path()) {
        Ok(inspection) => inspection,
        Err(e) => {
            log::error!("Error while parsing: {}", e);
            std::process::exit(1);
        }
    };

    #[cfg(feature = "trace")]
    nom_tracable::histogram();

    let pages = match inspection.page_count() {
        Ok(pages) => pages,
        Err(e) => {
            log::error!("Invalid page tree: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "PDF-{}.{}, {} objects, xref at {}, {} pages",
        inspection.header.version.0,
        inspection.header.version.1,
        inspection.xref.len().saturating_sub(1),
        inspection.start_xref,
        pages
    );
    for used in inspection.xref.used_objects() {
        println!("{:>6} @ {}", used.number, used.byte_offset);
    }

    if opt.text {
        for page in 0..pages {
            println!("--- page {}", page + 1);
            match inspection.page_lines(page) {
                Ok(lines) => lines.iter().for_each(|l| println!("{}", l)),
                Err(e) => log::error!("Page {}: {}", page + 1, e),
            }
        }
    }
}
