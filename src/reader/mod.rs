pub mod bytes;
pub mod fasta;
pub mod fastq;

use crate::error::ParseError;
use crate::options::FormatMode;
use crate::record::Record;
use std::io::BufRead;

pub use fasta::FastaReader;
pub use fastq::FastqReader;

pub type RecordIter<'a> = Box<dyn Iterator<Item = Result<Record, ParseError>> + 'a>;

/// Returns a lazy iterator over the records of `reader`, parsed according to `format`.
/// The iterator stops after the first error.
pub fn records<'a, R: BufRead + 'a>(reader: R, format: FormatMode) -> RecordIter<'a> {
    match format {
        FormatMode::Fasta => Box::new(FastaReader::new(reader)),
        FormatMode::Fastq => Box::new(FastqReader::new(reader)),
    }
}
