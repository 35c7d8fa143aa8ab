use thiserror::Error;

/// Top-level error type for railkit.
#[derive(Debug, Error)]
pub enum RailkitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised while constructing shapes.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("sphere radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to curves and the curve store.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("curve not found")]
    NotFound,

    #[error("control point index {index} is out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while reading control-point rows.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: missing {field} coordinate")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid {field} coordinate `{value}`")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: expected at most 4 fields, got {count}")]
    TooManyFields { line: usize, count: usize },
}

/// Convenience type alias for results using [`RailkitError`].
pub type Result<T> = std::result::Result<T, RailkitError>;
