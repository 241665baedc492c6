use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::{TableError, TravelTimeTable};

/// Header keys, in the order they must appear
const HEADER_KEYS: [&str; 2] = ["phase", "model"];

/// Parser for the line-oriented travel-time table emitted by the external
/// table generator.
///
/// One value per line, row-major over `(distance, depth)`, optionally
/// preceded by a two-line header:
///
/// ```text
/// # phase: P
/// # model: iasp91
/// 0.0
/// 1.71
/// ...
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TableParser {
    nd: usize,
    nz: usize,
    with_metadata: bool,
}

impl TableParser {
    /// Create a parser expecting `nd * nz` values
    pub fn new(nd: usize, nz: usize) -> Self {
        Self {
            nd,
            nz,
            with_metadata: false,
        }
    }

    /// Expect the phase/model header before the numeric rows
    pub fn with_metadata(mut self, with_metadata: bool) -> Self {
        self.with_metadata = with_metadata;
        self
    }

    /// Parse a table from in-memory lines.
    ///
    /// The row count is validated before any value is parsed, so a short or
    /// long table always reports [`TableError::Shape`].
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<TravelTimeTable, TableError> {
        let (nd, nz) = (self.nd, self.nz);
        if nd == 0 || nz == 0 {
            return Err(TableError::InvalidDimensions { nd, nz });
        }
        let expected = nd
            .checked_mul(nz)
            .ok_or(TableError::InvalidDimensions { nd, nz })?;

        let (phase, model, body_start) = if self.with_metadata {
            let (phase, model) = parse_header(lines)?;
            (Some(phase), Some(model), HEADER_KEYS.len())
        } else {
            (None, None, 0)
        };

        let body = &lines[body_start..];
        if body.len() != expected {
            return Err(TableError::Shape {
                nd,
                nz,
                expected,
                actual: body.len(),
            });
        }

        let values = body
            .iter()
            .enumerate()
            .map(|(i, line)| parse_value(body_start + i + 1, line.as_ref()))
            .collect::<Result<Vec<f64>, _>>()?;

        debug!("Parsed {}x{} travel-time table", nd, nz);

        Ok(TravelTimeTable {
            nd,
            nz,
            values,
            phase,
            model,
        })
    }

    /// Parse a table from a string
    pub fn parse_str(&self, text: &str) -> Result<TravelTimeTable, TableError> {
        let lines: Vec<&str> = text.lines().collect();
        self.parse(&lines)
    }

    /// Parse a table from a buffered reader
    pub fn from_reader<R: BufRead>(&self, reader: R) -> Result<TravelTimeTable, TableError> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        self.parse(&lines)
    }

    /// Parse a table file
    pub fn from_file<P: AsRef<Path>>(&self, path: P) -> Result<TravelTimeTable, TableError> {
        let path = path.as_ref();
        debug!("Reading travel-time table {}", path.display());
        let file = File::open(path)?;
        self.from_reader(BufReader::new(file))
    }
}

fn parse_value(line: usize, content: &str) -> Result<f64, TableError> {
    let mut tokens = content.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.parse::<f64>().map_err(|_| TableError::Parse {
            line,
            content: content.to_string(),
        }),
        _ => Err(TableError::Parse {
            line,
            content: content.to_string(),
        }),
    }
}

fn parse_header<S: AsRef<str>>(lines: &[S]) -> Result<(String, String), TableError> {
    let phase = parse_header_line(lines, 0, HEADER_KEYS[0])?;
    let model = parse_header_line(lines, 1, HEADER_KEYS[1])?;
    Ok((phase, model))
}

fn is_separator(c: char) -> bool {
    c == ':' || c == '=' || c.is_whitespace()
}

fn parse_header_line<S: AsRef<str>>(
    lines: &[S],
    index: usize,
    key: &str,
) -> Result<String, TableError> {
    let line = index + 1;
    let content: &str = lines.get(index).map(|l| l.as_ref()).unwrap_or_default();
    let header_error = |reason: String| TableError::Header {
        line,
        content: content.to_string(),
        reason,
    };

    if lines.len() <= index {
        return Err(header_error(format!("missing '{}' line", key)));
    }

    let entry = content.trim().trim_start_matches('#').trim_start();
    let split_at = entry
        .find(is_separator)
        .ok_or_else(|| header_error(format!("expected '{}: <value>'", key)))?;
    let (found_key, rest) = entry.split_at(split_at);

    if !found_key.eq_ignore_ascii_case(key) {
        return Err(header_error(format!("expected '{}' key", key)));
    }

    let value = rest.trim_start_matches(is_separator).trim();
    if value.is_empty() {
        return Err(header_error(format!("empty '{}' value", key)));
    }

    Ok(value.to_string())
}
