//! Line Sources
//!
//! Adapt raw input into a lazy sequence of rows split on a row separator.
//! Separators are stripped, and a trailing separator does not produce a
//! final empty row.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Anything that can be read as a sequence of rows
pub trait LineSource {
    type Lines: Iterator<Item = io::Result<String>>;

    /// Split the input on `row_separator`, lazily
    fn read_lines(self, row_separator: &str) -> Self::Lines;
}

/// Rows from in-memory text
#[derive(Debug, Clone, Copy)]
pub struct TextSource<'a>(pub &'a str);

/// Iterator over the rows of a `TextSource`
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    rest: Option<&'a str>,
    separator: String,
}

impl<'a> Iterator for TextLines<'a> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;
        if rest.is_empty() {
            return None;
        }

        if self.separator.is_empty() {
            return Some(Ok(rest.to_string()));
        }

        match rest.split_once(self.separator.as_str()) {
            Some((line, tail)) => {
                self.rest = Some(tail);
                Some(Ok(line.to_string()))
            }
            None => Some(Ok(rest.to_string())),
        }
    }
}

impl<'a> LineSource for TextSource<'a> {
    type Lines = TextLines<'a>;

    fn read_lines(self, row_separator: &str) -> Self::Lines {
        TextLines {
            rest: Some(self.0),
            separator: row_separator.to_string(),
        }
    }
}

impl<'a> LineSource for &'a str {
    type Lines = TextLines<'a>;

    fn read_lines(self, row_separator: &str) -> Self::Lines {
        TextSource(self).read_lines(row_separator)
    }
}

/// Rows that are already split; the separator is ignored
#[derive(Debug, Clone)]
pub struct LinesSource<I>(pub I);

impl<I> LineSource for LinesSource<I>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    type Lines = std::iter::Map<I::IntoIter, fn(I::Item) -> io::Result<String>>;

    fn read_lines(self, _row_separator: &str) -> Self::Lines {
        self.0
            .into_iter()
            .map(to_line::<I::Item> as fn(I::Item) -> io::Result<String>)
    }
}

fn to_line<T: Into<String>>(line: T) -> io::Result<String> {
    Ok(line.into())
}

/// Rows streamed from a buffered reader
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderSource<BufReader<File>> {
    /// Open a file for streaming
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    type Lines = ReaderLines<R>;

    fn read_lines(self, row_separator: &str) -> Self::Lines {
        ReaderLines {
            reader: self.reader,
            separator: row_separator.as_bytes().to_vec(),
            done: false,
        }
    }
}

/// Iterator over the rows of a `ReaderSource`
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    separator: Vec<u8>,
    done: bool,
}

impl<R: BufRead> ReaderLines<R> {
    /// Read up to and including the next separator, or to EOF.
    ///
    /// Returns the row bytes with the separator stripped, or `None` at EOF.
    fn read_row(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();

        let Some(&last) = self.separator.last() else {
            self.reader.read_to_end(&mut buf)?;
            self.done = true;
            return Ok((!buf.is_empty()).then_some(buf));
        };

        loop {
            let read = self.reader.read_until(last, &mut buf)?;
            if read == 0 {
                self.done = true;
                return Ok((!buf.is_empty()).then_some(buf));
            }
            if buf.ends_with(&self.separator) {
                buf.truncate(buf.len() - self.separator.len());
                return Ok(Some(buf));
            }
        }
    }
}

impl<R: BufRead> Iterator for ReaderLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_row() {
            Ok(Some(bytes)) => Some(
                String::from_utf8(bytes)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            ),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
