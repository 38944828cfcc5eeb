use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a generator or walking its
/// solutions. Running out of solutions is not an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed template: {0}")]
    MalformedTemplate(#[from] MalformedTemplate),
    #[error("Internal consistency violation: {0}")]
    Inconsistent(#[from] Inconsistency),
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum MalformedTemplate {
    #[error("All rows must have the same length (row {row} has {found}, expected {expected})")]
    UnequalRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid character '{character}' in template row {row}, column {column}")]
    InvalidCharacter {
        row: usize,
        column: usize,
        character: char,
    },
}

/// Defects in the parser or the search. None of these are reachable from a
/// well-formed template; they abort the whole operation.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Inconsistency {
    #[error("Cell ({row}, {col}) already belongs to another entry in the same direction")]
    CellAlreadyClaimed { row: usize, col: usize },
    #[error("Cell ({row}, {col}) is not covered by entry {entry}")]
    InvalidIntersection { entry: usize, row: usize, col: usize },
    #[error("Entry {entry} already has an intersection at position {position}")]
    AlreadyLinked { entry: usize, position: usize },
    #[error("Cell ({row}, {col}) holds '{found}' but the placed word needs '{expected}'")]
    LetterConflict {
        row: usize,
        col: usize,
        expected: char,
        found: char,
    },
}

impl Error {
    pub fn is_malformed_template(&self) -> bool {
        matches!(self, Error::MalformedTemplate(_))
    }

    pub fn is_inconsistent(&self) -> bool {
        matches!(self, Error::Inconsistent(_))
    }
}
