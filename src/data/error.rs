use thiserror::Error;

// ---------------------------------------------------------------------------
// Load-time errors
// ---------------------------------------------------------------------------

/// Errors raised while reading and reshaping a source table.
///
/// Schema and record errors are fatal for the load: no partial dataset is
/// ever installed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("reading source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The `country` column is missing, or a year-column header is not an
    /// integer.
    #[error("malformed schema: {0}")]
    MalformedSchema(String),

    /// A value cell could not be coerced to a non-negative whole number.
    #[error("malformed record: {country}/{column}: cannot parse value {token:?}")]
    MalformedRecord {
        country: String,
        column: String,
        token: String,
    },
}

// ---------------------------------------------------------------------------
// Query-time errors
// ---------------------------------------------------------------------------

/// Errors raised by a single filter query. These never affect the dataset or
/// later queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid year range: {low} > {high}")]
    InvalidRange { low: i32, high: i32 },
}
