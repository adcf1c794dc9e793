// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;
use std::str::{from_utf8, FromStr, SplitAsciiWhitespace};

use crate::{Coordinate, Cost, NodeId};

/// Represents a single line of a DIMACS coordinate (`.co`) or arc (`.gr`) file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// `v <id> <longitude> <latitude>`
    Node { id: NodeId, position: Coordinate },

    /// `a <from> <to> <cost>`
    Arc { from: NodeId, to: NodeId, cost: Cost },

    /// A `v` line with missing or unparsable fields.
    MalformedNode,

    /// An `a` line with missing or unparsable fields.
    MalformedArc,

    /// Comments (`c`), problem lines (`p`), blank lines and unknown tags.
    Ignored,
}

impl Record {
    /// Interprets a single line of a DIMACS file.
    pub fn parse(line: &str) -> Self {
        let mut fields = line.split_ascii_whitespace();
        match fields.next() {
            Some("v") => Self::parse_node(fields).unwrap_or(Self::MalformedNode),
            Some("a") => Self::parse_arc(fields).unwrap_or(Self::MalformedArc),
            _ => Self::Ignored,
        }
    }

    /// Interprets a single raw line of a DIMACS file. The tag is read before
    /// decoding, so only `v` and `a` lines with invalid UTF-8 are malformed.
    pub fn parse_bytes(line: &[u8]) -> Self {
        match from_utf8(line) {
            Ok(line) => Self::parse(line),
            Err(_) => match line.split(u8::is_ascii_whitespace).find(|f| !f.is_empty()) {
                Some(b"v") => Self::MalformedNode,
                Some(b"a") => Self::MalformedArc,
                _ => Self::Ignored,
            },
        }
    }

    fn parse_node(mut fields: SplitAsciiWhitespace<'_>) -> Option<Self> {
        let id = next_field(&mut fields)?;
        let lon = next_field(&mut fields)?;
        let lat = next_field(&mut fields)?;
        Some(Self::Node {
            id,
            position: Coordinate { lat, lon },
        })
    }

    fn parse_arc(mut fields: SplitAsciiWhitespace<'_>) -> Option<Self> {
        let from = next_field(&mut fields)?;
        let to = next_field(&mut fields)?;
        let cost = next_field(&mut fields)?;
        Some(Self::Arc { from, to, cost })
    }
}

#[inline]
fn next_field<T: FromStr>(fields: &mut SplitAsciiWhitespace<'_>) -> Option<T> {
    fields.next().and_then(|f| f.parse().ok())
}

/// Streams [Records](Record), together with their 1-based line numbers,
/// from a buffered reader.
///
/// See [Record::parse_bytes] for lines which are not valid UTF-8.
pub struct Records<R: io::BufRead> {
    reader: R,
    buffer: Vec<u8>,
    line_no: usize,
}

impl<R: io::BufRead> Records<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::default(),
            line_no: 0,
        }
    }
}

impl<R: io::BufRead> Iterator for Records<R> {
    type Item = io::Result<(usize, Record)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                Some(Ok((self.line_no, Record::parse_bytes(&self.buffer))))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
