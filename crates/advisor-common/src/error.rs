/// Error types shared across the advisor crates.
///
/// `CommonError` covers dataset loading, which is fatal at startup.
/// `RecommendError` covers the per-request failures; its `Display` output is the
/// exact message shown to the user. Binary crates define their own `AppError`
/// and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("malformed row at line {line}: expected at most {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid value at line {line}, column {column}: {message}")]
    InvalidValue {
        line: usize,
        column: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendError {
    #[error("Please enter input in format: <product> by <company>")]
    MalformedQuery,

    #[error("No matching product found for '{query}'")]
    NoMatch { query: String },
}

impl RecommendError {
    /// Stable machine-readable code used by the JSON surfaces.
    pub fn code(&self) -> &'static str {
        match self {
            RecommendError::MalformedQuery => "malformed_query",
            RecommendError::NoMatch { .. } => "no_match",
        }
    }
}
