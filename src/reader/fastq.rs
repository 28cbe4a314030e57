use super::bytes::LineReader;
use crate::error::ParseError;
use crate::record::{sequence_len, Header, Record};
use std::io::BufRead;

/// Iterates over the records of a FASTQ stream, one 4-line group at a time:
/// `@id`, sequence, `+`, quality. The annotation of a FASTQ record is always empty.
pub struct FastqReader<R: BufRead> {
    lines: LineReader<R>,
    eof: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
            eof: false,
        }
    }

    fn io_error(&self, source: std::io::Error) -> ParseError {
        ParseError::Io {
            line: self.lines.line_number() + 1,
            source,
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> ParseError {
        ParseError::Malformed {
            line: self.lines.line_number(),
            reason: reason.into(),
        }
    }

    /// Reads one line of a group which has already started. End of input here means the
    /// group is incomplete.
    fn group_line(&mut self, id: &str) -> Result<&[u8], ParseError> {
        match self.lines.next_line() {
            Ok(Some(_)) => (),
            Ok(None) => {
                return Err(ParseError::Truncated {
                    line: self.lines.line_number(),
                    id: id.to_string(),
                })
            }
            Err(e) => return Err(self.io_error(e)),
        }
        Ok(self.lines.current())
    }

    fn read_record(&mut self) -> Option<Result<Record, ParseError>> {
        // line 1: identifier, skipping any blank lines between groups
        let header = loop {
            match self.lines.next_line() {
                Ok(Some(line)) if line.is_empty() => continue,
                Ok(Some(line)) => match line.strip_prefix(b"@") {
                    Some(text) => break Header::parse(text),
                    None => {
                        return Some(Err(
                            self.malformed("FASTQ record should start with an @ line")
                        ))
                    }
                },
                Ok(None) => return None,
                Err(e) => return Some(Err(self.io_error(e))),
            }
        };
        let Some(header) = header else {
            return Some(Err(self.malformed("header has an empty identifier")));
        };
        let id = header.id;

        Some(self.read_body(id))
    }

    fn read_body(&mut self, id: String) -> Result<Record, ParseError> {
        // line 2: sequence
        let length = sequence_len(self.group_line(&id)?);

        // line 3: expect a +
        if !self.group_line(&id)?.starts_with(b"+") {
            return Err(self.malformed("3rd line of each FASTQ record should start with a +"));
        }

        // line 4: quality, one score per base
        let qual_len = sequence_len(self.group_line(&id)?);
        if qual_len != length {
            return Err(self.malformed(format!(
                "quality length {qual_len} does not match sequence length {length} for `{id}`"
            )));
        }

        Ok(Record {
            id,
            annotation: String::new(),
            length,
        })
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.eof {
            return None;
        }

        let item = self.read_record();
        if !matches!(item, Some(Ok(_))) {
            self.eof = true;
        }
        item
    }
}
