//! Row-per-point text format for control-point lists.
//!
//! Each line is `x,y,z` optionally followed by `,label`. Whitespace around
//! fields is ignored; blank lines and lines starting with `#` are skipped.
//!
//! Inside a label, `\,`, `\n`, `\r` and `\\` stand for a comma, a line
//! feed, a carriage return and a backslash. Any other escaped character
//! stands for itself. Labels are trimmed like the other fields, and an
//! empty label reads back as no label.

use std::fmt::Write as _;

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::math::Point3;

/// A control point read from or written to the row format.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    /// Position of the point.
    pub position: Point3,
    /// Optional display label.
    pub label: Option<String>,
}

impl ControlPoint {
    /// Creates an unlabelled control point.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            label: None,
        }
    }
}

const AXES: [&str; 3] = ["x", "y", "z"];

fn parse_coordinate(
    line: usize,
    field: &'static str,
    value: Option<&str>,
) -> std::result::Result<f64, ParseError> {
    let value = value.ok_or(ParseError::MissingField { line, field })?;
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: value.to_owned(),
    })
}

/// Splits a row at every comma not preceded by a backslash.
fn split_fields(row: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in row.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ',' {
            fields.push(&row[start..i]);
            start = i + 1;
        }
    }
    fields.push(&row[start..]);
    fields
}

fn unescape_label(raw: &str) -> String {
    let mut label = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            label.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => label.push('\n'),
            Some('r') => label.push('\r'),
            Some(other) => label.push(other),
            None => label.push('\\'),
        }
    }
    label
}

fn escape_label(label: &str, out: &mut String) {
    for c in label.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
}

/// Parses control points, one per line.
///
/// # Errors
///
/// Returns an error naming the 1-based line of the first row that has a
/// missing or non-numeric coordinate or more than four fields.
pub fn parse_control_points(input: &str) -> Result<Vec<ControlPoint>> {
    let mut points = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let row = raw.trim();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = split_fields(row).into_iter().map(str::trim).collect();
        if fields.len() > 4 {
            return Err(ParseError::TooManyFields {
                line,
                count: fields.len(),
            }
            .into());
        }

        let mut coords = [0.0; 3];
        for (axis, (coord, name)) in coords.iter_mut().zip(AXES).enumerate() {
            *coord = parse_coordinate(line, name, fields.get(axis).copied())?;
        }
        let label = fields
            .get(3)
            .filter(|label| !label.is_empty())
            .map(|label| unescape_label(label));

        points.push(ControlPoint {
            position: Point3::new(coords[0], coords[1], coords[2]),
            label,
        });
    }

    debug!(count = points.len(), "parsed control points");
    Ok(points)
}

/// Writes control points in the format read by [`parse_control_points`].
#[must_use]
pub fn format_control_points(points: &[ControlPoint]) -> String {
    let mut out = String::new();
    for point in points {
        let p = point.position;
        let _ = write!(out, "{},{},{}", p.x, p.y, p.z);
        if let Some(label) = point.label.as_deref().filter(|label| !label.is_empty()) {
            out.push(',');
            escape_label(label, &mut out);
        }
        out.push('\n');
    }
    out
}
