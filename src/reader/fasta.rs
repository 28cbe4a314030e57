use super::bytes::LineReader;
use crate::error::ParseError;
use crate::record::{sequence_len, Header, Record};
use std::io::BufRead;

/// A record whose header has been seen but whose sequence body is still being read.
#[derive(Debug)]
struct PendingRecord {
    header: Header,
    length: usize,
}

impl PendingRecord {
    fn finish(self) -> Record {
        Record {
            id: self.header.id,
            annotation: self.header.annotation,
            length: self.length,
        }
    }
}

#[derive(Debug, Default)]
enum State {
    /// No header seen yet
    #[default]
    Idle,
    Accumulating(PendingRecord),
}

impl State {
    /// Finalises the pending record, if any, and returns to `Idle`.
    fn finish(&mut self) -> Option<Record> {
        match std::mem::take(self) {
            State::Accumulating(pending) => Some(pending.finish()),
            State::Idle => None,
        }
    }
}

/// Iterates over the records of a FASTA stream. Sequences may be wrapped over any number of
/// lines; a record is emitted once the next header, or the end of input, is reached.
pub struct FastaReader<R: BufRead> {
    lines: LineReader<R>,
    state: State,
    skipped: u64,
    eof: bool,
    /// Error to return once the record it interrupted has been emitted
    deferred: Option<ParseError>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
            state: State::Idle,
            skipped: 0,
            eof: false,
            deferred: None,
        }
    }

    fn at_eof(&mut self) -> Option<Record> {
        self.eof = true;
        if self.skipped > 0 {
            warn!(
                "Skipped {} sequence line(s) which appeared before the first header",
                self.skipped
            );
        }
        self.state.finish()
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.eof {
            return self.deferred.take().map(Err);
        }

        loop {
            let line = match self.lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return self.at_eof().map(Ok),
                Err(source) => {
                    self.eof = true;
                    return Some(Err(ParseError::Io {
                        line: self.lines.line_number() + 1,
                        source,
                    }));
                }
            };

            if let Some(text) = line.strip_prefix(b">") {
                let Some(header) = Header::parse(text) else {
                    let err = ParseError::Malformed {
                        line: self.lines.line_number(),
                        reason: String::from("header has an empty identifier"),
                    };
                    self.eof = true;
                    // the previous record is complete, so it is emitted before the error
                    return match self.state.finish() {
                        Some(record) => {
                            self.deferred = Some(err);
                            Some(Ok(record))
                        }
                        None => Some(Err(err)),
                    };
                };

                let previous = self.state.finish();
                self.state = State::Accumulating(PendingRecord { header, length: 0 });

                if let Some(record) = previous {
                    return Some(Ok(record));
                }
            } else {
                match &mut self.state {
                    State::Accumulating(pending) => pending.length += sequence_len(line),
                    State::Idle => {
                        if !line.is_empty() {
                            self.skipped += 1;
                        }
                    }
                }
            }
        }
    }
}
