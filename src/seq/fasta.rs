// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Write};
use std::path::Path;

use crate::errors::{ReheadError, Result};
use crate::seq::record::SeqRecord;

/// Streams FastA records out of a buffered reader, one at a time.
///
/// Only the current record is held in memory. Once the input is exhausted (or an error has been
/// returned) the iterator yields `None`; to read the file again, make a new reader.
pub struct FastaReader<R: BufRead> {
    lines: Lines<R>,
    line_num: usize,
    // Header line of the next record, already read while collecting the previous one's residues.
    next_header: Option<(usize, String)>,
    done: bool,
}

impl FastaReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReheadError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        FastaReader {
            lines: reader.lines(),
            line_num: 0,
            next_header: None,
            done: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Ok(l)) => {
                self.line_num += 1;
                Ok(Some(l))
            }
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                Err(ReheadError::MalformedInput {
                    line: self.line_num + 1,
                    msg: String::from("input is not valid UTF-8"),
                })
            }
            Some(Err(e)) => Err(ReheadError::Io(e)),
        }
    }

    // Finds the next header line, skipping blank lines. Anything else before the first header is
    // an error.
    fn header_line(&mut self) -> Result<Option<(usize, String)>> {
        if let Some(hdr) = self.next_header.take() {
            return Ok(Some(hdr));
        }
        while let Some(l) = self.next_line()? {
            if l.trim().is_empty() {
                continue;
            }
            if l.starts_with('>') {
                return Ok(Some((self.line_num, l)));
            }
            return Err(ReheadError::MalformedInput {
                line: self.line_num,
                msg: String::from("expected a header line starting with '>'"),
            });
        }
        Ok(None)
    }

    fn read_record(&mut self) -> Result<Option<SeqRecord>> {
        let Some((hdr_line_num, hdr_line)) = self.header_line()? else {
            return Ok(None);
        };
        let title = hdr_line[1..].trim();
        let (id, description) = match title.split_once(char::is_whitespace) {
            Some((id, rest)) => {
                let rest = rest.trim();
                (id, (!rest.is_empty()).then(|| rest.to_string()))
            }
            None => (title, None),
        };
        if id.is_empty() {
            return Err(ReheadError::MalformedInput {
                line: hdr_line_num,
                msg: String::from("header has no identifier"),
            });
        }

        let mut sequence = String::new();
        while let Some(l) = self.next_line()? {
            if l.starts_with('>') {
                self.next_header = Some((self.line_num, l));
                break;
            }
            sequence.extend(l.trim_end().chars().filter(|c| *c != ' '));
        }

        Ok(Some(SeqRecord {
            id: id.to_string(),
            description,
            sequence,
        }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Writes one record with an empty description. The sequence is split into lines of `width`
/// characters; `width == 0` puts it all on one line. An empty sequence writes only the header.
pub fn write_fasta_record<W: Write>(w: &mut W, id: &str, sequence: &str, width: usize) -> io::Result<()> {
    writeln!(w, ">{}", id)?;
    if sequence.is_empty() {
        return Ok(());
    }
    if width == 0 {
        return writeln!(w, "{}", sequence);
    }
    let mut start = 0;
    for (count, (i, _)) in sequence.char_indices().enumerate() {
        if count > 0 && count % width == 0 {
            writeln!(w, "{}", &sequence[start..i])?;
            start = i;
        }
    }
    writeln!(w, "{}", &sequence[start..])
}
