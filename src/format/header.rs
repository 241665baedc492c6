use std::str::FromStr;

use crate::grid::{GridError, GridGeometry, GridHeader, GridType, ScalarType};

use super::HEADER_LINES;

/// Errors that can occur while decoding a header file
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeaderError {
    /// A line is missing or does not hold the expected field
    #[error("Header line {line}: {message}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Fields parse individually but do not form a valid grid
    #[error("Header describes an invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
}

/// Render a header in the fixed seven-line layout
pub fn encode_header(header: &GridHeader) -> String {
    let geometry = header.geometry();
    let [nx, ny, nz] = geometry.counts();
    let [ox, oy, oz] = geometry.origin();
    let [dx, dy, dz] = geometry.spacing();

    format!(
        "{} {} {}\n{:?} {:?} {:?}\n{:?} {:?} {:?}\n{}\n{}\n{}\n{}\n",
        nx,
        ny,
        nz,
        ox,
        oy,
        oz,
        dx,
        dy,
        dz,
        header.scalar_type().tag(),
        header.grid_type().tag(),
        header.wave_label(),
        header.station_label().unwrap_or(""),
    )
}

/// Parse header text produced by [`encode_header`].
///
/// Line endings may be `\n` or `\r\n`. Surplus trailing blank lines are
/// ignored; any other surplus content is an error.
pub fn decode_header(text: &str) -> Result<GridHeader, HeaderError> {
    let lines: Vec<&str> = text.lines().collect();

    if let Some(extra) = lines
        .iter()
        .enumerate()
        .skip(HEADER_LINES)
        .find(|(_, l)| !l.trim().is_empty())
    {
        return Err(malformed(extra.0 + 1, "unexpected content after station label"));
    }

    let counts: [usize; 3] = parse_triple(&lines, 1, "axis counts")?;
    let origin: [f64; 3] = parse_triple(&lines, 2, "origin")?;
    let spacing: [f64; 3] = parse_triple(&lines, 3, "spacing")?;

    let scalar_type = ScalarType::from_str(required(&lines, 4, "scalar type")?)
        .map_err(|e| malformed(4, e.to_string()))?;
    let grid_type = GridType::from_str(required(&lines, 5, "grid type")?)
        .map_err(|e| malformed(5, e.to_string()))?;
    let wave_label = required(&lines, 6, "wave label")?.to_string();

    // a header written without a trailing station line is still complete
    let station_label = lines
        .get(6)
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string);

    let geometry = GridGeometry::new(counts, origin, spacing)?;
    Ok(GridHeader::new(
        geometry,
        scalar_type,
        grid_type,
        wave_label,
        station_label,
    )?)
}

fn malformed(line: usize, message: impl Into<String>) -> HeaderError {
    HeaderError::Malformed {
        line,
        message: message.into(),
    }
}

/// Trimmed, non-empty content of 1-based `line`
fn required<'a>(lines: &[&'a str], line: usize, field: &str) -> Result<&'a str, HeaderError> {
    let content = lines
        .get(line - 1)
        .map(|l| l.trim())
        .ok_or_else(|| malformed(line, format!("missing {}", field)))?;
    if content.is_empty() {
        return Err(malformed(line, format!("empty {}", field)));
    }
    Ok(content)
}

fn parse_triple<T: FromStr + Copy + Default>(
    lines: &[&str],
    line: usize,
    field: &str,
) -> Result<[T; 3], HeaderError> {
    let content = required(lines, line, field)?;
    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(malformed(
            line,
            format!("expected 3 values for {}, found {}", field, tokens.len()),
        ));
    }

    let mut values = [T::default(); 3];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .map_err(|_| malformed(line, format!("invalid {} value '{}'", field, token)))?;
    }
    Ok(values)
}
