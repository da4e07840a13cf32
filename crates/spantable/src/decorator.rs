//! Border glyphs and horizontal rules.
//!
//! Every glyph is a single `char`, so a rule drawn over a set of resolved
//! widths is exactly as wide as the rows between it.
//!
//! # Example
//!
//! ```rust
//! use spantable::{BorderStyle, ResolvedWidths, RuleKind};
//! use spantable::decorator::write_rule;
//!
//! let widths = ResolvedWidths { widths: vec![3, 2] };
//! let mut out = String::new();
//! write_rule(&mut out, &widths, BorderStyle::Ascii, RuleKind::Header).unwrap();
//! assert_eq!(out, "|===+==|\n");
//! ```

use std::io;

use serde::Deserialize;

use crate::resolve::ResolvedWidths;
use crate::sink::Sink;

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// ASCII borders: `|`, `+`, `=` under the header, `-` between rows.
    #[default]
    Ascii,
    /// Light Unicode box-drawing characters, double rule under the header.
    Light,
    /// Double-line Unicode box-drawing characters.
    Double,
}

/// Which horizontal rule to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Above and below the title row.
    Header,
    /// After every data row.
    Row,
}

/// Glyphs making up one horizontal rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleChars {
    pub left: char,
    pub fill: char,
    pub cross: char,
    pub right: char,
}

impl BorderStyle {
    /// Vertical border drawn between and around cells.
    pub fn vertical(&self) -> char {
        match self {
            BorderStyle::Ascii => '|',
            BorderStyle::Light => '│',
            BorderStyle::Double => '║',
        }
    }

    /// Glyphs for a horizontal rule of the given kind.
    pub fn rule(&self, kind: RuleKind) -> RuleChars {
        match (self, kind) {
            (BorderStyle::Ascii, RuleKind::Header) => RuleChars {
                left: '|',
                fill: '=',
                cross: '+',
                right: '|',
            },
            (BorderStyle::Ascii, RuleKind::Row) => RuleChars {
                left: '|',
                fill: '-',
                cross: '+',
                right: '|',
            },
            (BorderStyle::Light, RuleKind::Header) => RuleChars {
                left: '╞',
                fill: '═',
                cross: '╪',
                right: '╡',
            },
            (BorderStyle::Light, RuleKind::Row) => RuleChars {
                left: '├',
                fill: '─',
                cross: '┼',
                right: '┤',
            },
            (BorderStyle::Double, RuleKind::Header) => RuleChars {
                left: '╠',
                fill: '═',
                cross: '╬',
                right: '╣',
            },
            (BorderStyle::Double, RuleKind::Row) => RuleChars {
                left: '╟',
                fill: '─',
                cross: '╫',
                right: '╢',
            },
        }
    }
}

impl std::str::FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(BorderStyle::Ascii),
            "light" => Ok(BorderStyle::Light),
            "double" => Ok(BorderStyle::Double),
            other => Err(format!(
                "unknown border style '{}' (expected ascii, light or double)",
                other
            )),
        }
    }
}

/// Write one horizontal rule followed by a line terminator.
///
/// The opening glyph, each column's fill and each junction are written as
/// separate segments.
pub fn write_rule<S: Sink + ?Sized>(
    sink: &mut S,
    widths: &ResolvedWidths,
    style: BorderStyle,
    kind: RuleKind,
) -> io::Result<()> {
    let chars = style.rule(kind);
    let last = widths.len().saturating_sub(1);
    let mut glyph = [0u8; 4];

    sink.write(chars.left.encode_utf8(&mut glyph))?;
    for (i, width) in widths.iter().enumerate() {
        let fill: String = std::iter::repeat_n(chars.fill, width).collect();
        sink.write(&fill)?;
        let joint = if i == last { chars.right } else { chars.cross };
        sink.write(joint.encode_utf8(&mut glyph))?;
    }
    sink.write("\n")
}
