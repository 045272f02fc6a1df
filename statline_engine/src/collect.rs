//! Collect newline-delimited numeric text into a sequence of values.
//!
//! Every line is trimmed. Blank lines are skipped, anything else must parse as
//! an `f64`. The first line that does not parse fails the whole collection;
//! there is no partial result.

use std::io::BufRead;

use tracing::debug;

use crate::Error;

/// Collect values from a line-oriented reader.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for the first non-blank line that is not a
/// number and [`Error::Io`] if the reader fails.
pub fn collect<R>(reader: R) -> Result<Vec<f64>, Error>
where
    R: BufRead,
{
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        push(&mut values, idx + 1, &line)?;
    }
    debug!("collected {} values", values.len());
    Ok(values)
}

/// Collect values from already split lines.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for the first non-blank line that is not a
/// number.
pub fn collect_lines<I, S>(lines: I) -> Result<Vec<f64>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        push(&mut values, idx + 1, line.as_ref())?;
    }
    debug!("collected {} values", values.len());
    Ok(values)
}

fn push(values: &mut Vec<f64>, line: usize, raw: &str) -> Result<(), Error> {
    let item = raw.trim();
    if item.is_empty() {
        return Ok(());
    }
    let value = item.parse::<f64>().map_err(|_| Error::InvalidInput {
        line,
        value: item.to_string(),
    })?;
    values.push(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn accepts_signs_decimals_and_exponents() {
        let values = collect_lines(["-1", "2.5", "  3e2 ", "+4", "1.5E-3", ".5"])
            .expect("all lines are numeric");
        assert_eq!(values, vec![-1.0, 2.5, 300.0, 4.0, 0.0015, 0.5]);
    }

    #[test]
    fn skips_blank_lines() {
        let values = collect(Cursor::new("1\n\n   \n\t\n2\n")).expect("blank lines are not errors");
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(collect(Cursor::new("")).expect("empty input").is_empty());
        assert!(collect(Cursor::new("\n\n")).expect("blank input").is_empty());
    }

    #[test]
    fn first_malformed_line_wins() {
        match collect(Cursor::new("1\n\nabc\n1.2.3\n")) {
            Err(Error::InvalidInput { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["abc", "1.2.3", "1,5", "1 2", "0x10", "--1", "1e"] {
            assert!(
                matches!(collect_lines([bad]), Err(Error::InvalidInput { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn reader_failure_is_io_error() {
        let res = collect(io::BufReader::new(Broken));
        assert!(matches!(res, Err(Error::Io(_))));
    }

    proptest! {
        #[test]
        fn keeps_input_order(values in prop::collection::vec(-1e12f64..1e12, 0..64)) {
            let text: String = values.iter().map(|v| format!("{v}\n")).collect();
            let collected = collect(Cursor::new(text)).expect("formatted floats parse");
            prop_assert_eq!(collected, values);
        }
    }
}
