use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;
use std::path::PathBuf;

use crate::options::{FormatMode, Options, ReportVariant};

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const AFTER_STRING: &str = "
   ──────────────────────────────────
   per-record sequence lengths and length statistics (mean, median, N50)
   for FASTA and FASTQ files, plain or gzip-compressed";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    name = "seqlen",
    version = VERSION,
    about = "Get sequence length",
    after_help = AFTER_STRING,
    styles = STYLES
)]
pub struct Cli {
    /// path to the query file (.fasta or .fastq, optionally .gz)
    #[arg(short = 'i', long = "input", value_parser = existing_file)]
    pub input: PathBuf,

    /// output file for the per-record lengths [default: standard output]
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// keep sequence annotation (by default the header is cut after the first space)
    #[arg(short = 'n', long = "full-name")]
    pub full_name: bool,

    /// input is a fastq file and not a fasta file
    #[arg(short = 'f', long)]
    pub fastq: bool,

    /// which summary statistics to print after the per-record lengths
    #[arg(short = 'r', long, value_enum, default_value_t = ReportVariant::Full)]
    pub report: ReportVariant,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            format: if self.fastq {
                FormatMode::Fastq
            } else {
                FormatMode::Fasta
            },
            keep_annotation: self.full_name,
            report: self.report,
        }
    }
}

/// Checks that `path` is an existing regular file.
fn existing_file(path: &str) -> Result<PathBuf, String> {
    let p = PathBuf::from(path);
    if p.is_file() {
        Ok(p)
    } else if p.is_dir() {
        Err(format!("{path} is a directory"))
    } else {
        Err(format!("{path} does not exist."))
    }
}
