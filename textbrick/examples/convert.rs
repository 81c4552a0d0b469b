use std::path::PathBuf;
use structopt::StructOpt;

/// Convert a text or light markdown file into a PDF.
#[derive(StructOpt, Debug)]
#[structopt(name = "convert")]
struct Opt {
    /// Input file
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Output file, defaults to the input with a `.pdf` extension
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();
    let output = opt.output.unwrap_or_else(|| opt.input.with_extension("pdf"));

    log::debug!("Convert {} to {}", opt.input.display(), output.display());
    if let Err(e) = textbrick::convert_file(&opt.input, &output) {
        log::error!("Error while converting: {}", e);
        std::process::exit(1);
    }
    println!("{}", output.display());
}
