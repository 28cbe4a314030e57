use std::io::BufRead;

/// Reads a byte stream one line at a time into a reused buffer.
pub struct LineReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    line: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            line: 0,
        }
    }

    /// 1-based number of the line most recently returned by `next_line`.
    pub fn line_number(&self) -> u64 {
        self.line
    }

    /// The line most recently returned by `next_line`.
    pub fn current(&self) -> &[u8] {
        &self.buf
    }

    /// Copy bytes into `self.buf` until `delim` (consumed, not copied) or EOF.
    ///
    /// Returns the number of bytes consumed from the reader; 0 means EOF was already reached.
    // modified from https://doc.rust-lang.org/src/std/io/mod.rs.html#1910-1936
    fn fill_until_byte(&mut self, delim: u8) -> std::io::Result<usize> {
        let mut read = 0;
        loop {
            let (done, used) = {
                let available = match self.reader.fill_buf() {
                    Ok(n) => n,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };

                match memchr::memchr(delim, available) {
                    Some(i) => {
                        self.buf.extend_from_slice(&available[..i]);
                        (true, i + 1)
                    }
                    None => {
                        self.buf.extend_from_slice(available);
                        (false, available.len())
                    }
                }
            };

            self.reader.consume(used);
            read += used;

            if done || used == 0 {
                return Ok(read);
            }
        }
    }

    /// Returns the next line with its trailing `\n` and `\r` characters removed, or `None`
    /// at end of input. A final line without a newline is still returned.
    pub fn next_line(&mut self) -> std::io::Result<Option<&[u8]>> {
        self.buf.clear();
        if self.fill_until_byte(b'\n')? == 0 {
            return Ok(None);
        }
        self.line += 1;

        while let Some(b'\r' | b'\n') = self.buf.last() {
            self.buf.pop();
        }
        Ok(Some(&self.buf))
    }
}
