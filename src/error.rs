//! Error types for quillmark

/// Result type alias for quillmark operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which configured quote pair an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Double,
    Single,
}

impl std::fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteKind::Double => f.write_str("double"),
            QuoteKind::Single => f.write_str("single"),
        }
    }
}

/// Highlighter error types
///
/// Everything here is raised while building configuration or rules.
/// Highlighting a block never fails.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Rule '{rule}' failed to compile: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("The {which} quote pair has an empty delimiter")]
    EmptyQuote { which: QuoteKind },

    #[error("Text size must be a positive number, got {0}")]
    InvalidTextSize(f32),

    #[error("{0}")]
    Message(String),
}
