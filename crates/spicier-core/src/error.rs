use thiserror::Error;

/// Errors surfaced while building or assembling a circuit model.
///
/// Lexing and grammar errors live in `spicier-parser`; this enum covers the
/// semantic layer once a netlist has a typed element list, plus the
/// device-support boundary enforced at stamp time.
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("line {line}: unknown controller label '{label}'")]
    SemanticError { line: usize, label: String },

    #[error("element '{label}' ({kind}) is parsed but not supported by the solver")]
    UnsupportedElement { label: String, kind: String },

    #[error("matrix/vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("singular matrix: zero pivot at row {row}")]
    SingularMatrix { row: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
