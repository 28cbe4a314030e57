use crate::error::SeqLenError;
use crate::record::Record;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{stdout, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputKind {
    Plain,
    Gzip,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Plain => f.write_str("plain text"),
            InputKind::Gzip => f.write_str("gzip"),
        }
    }
}

fn not_readable(path: &Path, source: std::io::Error) -> SeqLenError {
    SeqLenError::InputNotReadable {
        path: path.to_path_buf(),
        source,
    }
}

/// Classifies the input from its path and its first buffered bytes. An empty file is always
/// plain; otherwise a `.gz` suffix or the gzip magic bytes mean gzip.
pub fn detect_input_kind(path: &Path, head: &[u8]) -> InputKind {
    if head.is_empty() {
        return InputKind::Plain;
    }

    let gz_suffix = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if gz_suffix || head.starts_with(&GZIP_MAGIC) {
        InputKind::Gzip
    } else {
        InputKind::Plain
    }
}

/// Opens the input as a buffered character stream, transparently decompressing gzip.
///
/// # Errors
///
/// * `InputNotFound` if `path` does not exist or is not a regular file.
/// * `InputNotReadable` if the file cannot be opened or its first bytes cannot be read.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, SeqLenError> {
    if !path.is_file() {
        return Err(SeqLenError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| not_readable(path, e))?;
    let mut reader = BufReader::new(file);
    let head = reader.fill_buf().map_err(|e| not_readable(path, e))?;
    let kind = detect_input_kind(path, head);
    info!("Reading {} ({kind})", path.display());

    let reader: Box<dyn BufRead> = match kind {
        InputKind::Plain => Box::new(reader),
        InputKind::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(reader))),
    };
    Ok(reader)
}

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// # Errors
///
/// `OutputWriteFailure` if the output file cannot be created.
pub fn get_writer(output: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>, SeqLenError> {
    let sink: Box<dyn Write> = match output {
        Some(path) => {
            let file =
                File::create(path).map_err(|source| SeqLenError::OutputWriteFailure { source })?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };
    Ok(BufWriter::new(sink))
}

/// Writes one record as `id<TAB>length`, or `id<TAB>annotation<TAB>length` when annotations
/// are kept.
pub fn write_record(
    writer: &mut impl Write,
    record: &Record,
    keep_annotation: bool,
) -> std::io::Result<()> {
    if keep_annotation {
        writeln!(
            writer,
            "{}\t{}\t{}",
            record.id, record.annotation, record.length
        )
    } else {
        writeln!(writer, "{}\t{}", record.id, record.length)
    }
}
