/// Input format, fixed for the whole run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatMode {
    Fasta,
    Fastq,
}

/// Which summary block is printed after the per-record lines.
#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ReportVariant {
    /// mean, median, max, min and N50
    #[default]
    Full,

    /// mean and median only
    Reduced,
}

#[derive(Copy, Clone, Debug)]
pub struct Options {
    pub format: FormatMode,
    pub keep_annotation: bool,
    pub report: ReportVariant,
}
