use thiserror::Error;

/// A grammar violation, annotated with which production failed.
///
/// The reasons form a small fixed set; they exist for diagnostics, not for
/// programmatic recovery. Every grammar error is terminal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TapeError {
    #[error("no key in first object field")]
    NoKeyInFirstField,
    #[error("missing colon after key in object")]
    MissingColon,
    #[error("key string missing at beginning of field in object")]
    MissingKeyString,
    #[error("no comma between object fields")]
    MissingCommaInObject,
    #[error("missing comma between array values")]
    MissingCommaInArray,
    #[error("root array not closed")]
    RootArrayNotClosed,
    #[error("more than one JSON value at the root of the document, or extra characters at the end of the JSON")]
    TrailingContent,
}

/// Outcome of a failed walk.
///
/// `E` is the visitor's error type; visitor errors pass through the engine
/// unchanged. [`WalkError::Empty`] is distinct from success so callers can
/// tell "no document" apart from a valid empty object or array.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WalkError<E> {
    #[error("no structural characters in input")]
    Empty,
    #[error("tape error: {0}")]
    Tape(#[from] TapeError),
    #[error("visitor error: {0}")]
    Visitor(E),
}
