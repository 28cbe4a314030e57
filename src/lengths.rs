use crate::error::{ParseError, SeqLenError};
use crate::io::write_record;
use crate::record::Record;
use std::io::Write;
use std::path::Path;

const PROGRESS_INTERVAL: usize = 100_000;

/// Utility function to extract the error from an iterator and stop iteration immediately. Useful
/// for iterators which yield a Result<T>.
///
/// If the item is `Err`, `err` is updated with the error and `None` is returned, which ends a
/// `scan`.
pub fn until_err<T, E>(err: &mut &mut Result<(), E>, item: Result<T, E>) -> Option<T> {
    match item {
        Ok(item) => Some(item),
        Err(e) => {
            **err = Err(e);
            None
        }
    }
}

/// Streams `records` to `writer`, one line per record as soon as it is finalised, and returns
/// every length in input order.
///
/// Records written before an error stay written. `input` is only used to name the file in
/// read errors.
pub fn collect_lengths(
    records: impl Iterator<Item = Result<Record, ParseError>>,
    writer: &mut impl Write,
    keep_annotation: bool,
    input: &Path,
) -> Result<Vec<usize>, SeqLenError> {
    // Start with a placeholder error object. This will be mutated if a record cannot be parsed.
    let mut err = Ok(());
    let mut lengths = Vec::new();

    records
        .scan(&mut err, until_err)
        .try_for_each(|rec| -> Result<(), SeqLenError> {
            write_record(writer, &rec, keep_annotation)
                .map_err(|source| SeqLenError::OutputWriteFailure { source })?;
            lengths.push(rec.length);

            if lengths.len() % PROGRESS_INTERVAL == 0 {
                info!("Processed: {}", lengths.len());
            }
            Ok(())
        })?;

    err.map_err(|e| e.into_run_error(input))?;

    debug!("Read {} records", lengths.len());
    Ok(lengths)
}
