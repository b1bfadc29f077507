#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    GridTooLarge {
        rows: usize,
        cols: usize,
    },
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    CellCountMismatch {
        expected: usize,
        actual: usize,
    },
    OutOfBounds {
        row: usize,
        col: usize,
    },
    InvalidAnnotation(u8),
    UnknownPatternBias(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Error::GridTooLarge { rows, cols } => {
                write!(f, "{}x{} grid is too large", rows, cols)
            },
            Error::RaggedRow { row, expected, actual } => {
                write!(
                    f,
                    "row {} has {} cells, expected {}",
                    row, actual, expected
                )
            },
            Error::CellCountMismatch { expected, actual } => {
                write!(f, "expected {} cells, found {}", expected, actual)
            },
            Error::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            },
            Error::InvalidAnnotation(code) => write!(f, "invalid annotation code: {}", code),
            Error::UnknownPatternBias(mode) => write!(f, "unknown pattern bias mode: {}", mode),
        }
    }
}

impl std::error::Error for Error {}
