//! Reading delimited records from a file or stdin.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Records read from the input, with the header split off when requested.
#[derive(Debug, Default, PartialEq)]
pub struct Records {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Open `path` for reading, or stdin when it is absent or `-`.
pub fn open(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p)
                .with_context(|| format!("cannot open input {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Read every record from `reader`.
///
/// Records may have differing lengths; blank lines are skipped. Quoted
/// fields spanning several lines are flattened with [`single_line`]. When
/// `header` is set the first record is returned separately.
pub fn read_records<R: Read>(reader: R, delimiter: u8, header: bool) -> Result<Records> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.context(format!("malformed record {}", i + 1))?;
        rows.push(record.iter().map(single_line).collect::<Vec<_>>());
    }
    log::debug!("read {} records", rows.len());

    let header = if header && !rows.is_empty() {
        Some(rows.remove(0))
    } else {
        None
    };
    Ok(Records { header, rows })
}

/// Replace line breaks, tabs and other control characters with spaces.
///
/// A table cell occupies one physical line per row, so a raw `\n` would
/// break the grid.
pub fn single_line(field: &str) -> String {
    field.replace(|c: char| c.is_control(), " ")
}

/// Parse a delimiter argument: a single ASCII character, or `\t` / `tab`.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => bail!("delimiter must be a single ASCII character, got '{}'", s),
    }
}
