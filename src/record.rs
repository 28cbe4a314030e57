/// A finalised sequence record: the header split into identifier and annotation, plus the
/// number of sequence characters that followed it.
#[derive(PartialEq, Eq, Debug, Default, Clone)]
pub struct Record {
    pub id: String,
    pub annotation: String,
    pub length: usize,
}

/// The identifier and annotation of a header line, without the leading `>` or `@` marker.
#[derive(PartialEq, Eq, Debug, Default, Clone)]
pub struct Header {
    pub id: String,
    pub annotation: String,
}

impl Header {
    /// Splits a header at the first whitespace character. Everything before it is the
    /// identifier; the remainder, with its leading whitespace removed, is the annotation.
    ///
    /// Returns `None` if the identifier is empty.
    pub fn parse(text: &[u8]) -> Option<Self> {
        let split_loc = text
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(text.len());

        if split_loc == 0 {
            return None;
        }

        let (id, rest) = text.split_at(split_loc);
        let rest = match rest.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(start) => &rest[start..],
            None => &[],
        };

        Some(Header {
            id: String::from_utf8_lossy(id).into_owned(),
            annotation: String::from_utf8_lossy(rest).into_owned(),
        })
    }
}

/// Number of sequence characters on a line, ignoring any whitespace.
pub fn sequence_len(line: &[u8]) -> usize {
    line.iter().filter(|b| !b.is_ascii_whitespace()).count()
}
