use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions of a run. None of these are retried; the binary reports them and exits
/// with a non-zero status.
#[derive(Error, Debug)]
pub enum SeqLenError {
    #[error("{} does not exist or is not a regular file", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Error cannot open {}", .path.display())]
    InputNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "truncated record:
line {line}
    `{id}`
the input ended before the 4-line FASTQ group was complete"
    )]
    TruncatedRecord { line: u64, id: String },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("no records were found in the input, so no statistics can be computed")]
    EmptyDataset,

    #[error("unable to write output")]
    OutputWriteFailure {
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while turning lines into records.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("read failed at line {line}")]
    Io {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("truncated record `{id}` at line {line}")]
    Truncated { line: u64, id: String },

    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

impl ParseError {
    /// Lift a parser failure into the run-level error, attaching the input path to read errors.
    pub fn into_run_error(self, path: &std::path::Path) -> SeqLenError {
        match self {
            ParseError::Io { source, .. } => SeqLenError::InputNotReadable {
                path: path.to_path_buf(),
                source,
            },
            ParseError::Truncated { line, id } => SeqLenError::TruncatedRecord { line, id },
            ParseError::Malformed { line, reason } => SeqLenError::MalformedRecord { line, reason },
        }
    }
}
