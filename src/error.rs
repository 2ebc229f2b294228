//! Error types for puzzle configuration and data loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::state::State;

/// A configuration mistake, reported at the offending call.
///
/// A well-formed puzzle with no solution is not an error; the search
/// reports that outcome through `Solution::found`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The roster must name the ferry operator at index 0.
    #[error("item roster is empty")]
    EmptyRoster,

    /// A configuration's flag count must match the roster length.
    #[error("configuration has {got} flags but the roster has {expected} items")]
    LengthMismatch { expected: usize, got: usize },

    /// `solve` was called before a source was assigned.
    #[error("source configuration is not set")]
    SourceNotSet,

    /// `solve` was called before a target was assigned.
    #[error("target configuration is not set")]
    TargetNotSet,

    /// The requested source is in the forbidden set.
    #[error("source configuration `{0}` is forbidden")]
    SourceForbidden(State),

    /// The requested target is in the forbidden set.
    #[error("target configuration `{0}` is forbidden")]
    TargetForbidden(State),

    /// Forbidding the current source would make the puzzle unsolvable
    /// by construction.
    #[error("cannot forbid `{0}`: it is the source configuration")]
    ForbiddenIsSource(State),

    /// Forbidding the current target would make the puzzle unsolvable
    /// by construction.
    #[error("cannot forbid `{0}`: it is the target configuration")]
    ForbiddenIsTarget(State),
}

/// A failure while reading one of the flat-file puzzle formats.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file ended before the named line.
    #[error("missing {0} line")]
    MissingLine(&'static str),

    /// A configuration token other than `0` or `1`.
    #[error("line {line}: expected a 0/1 flag, found `{token}`")]
    BadFlag { line: usize, token: String },

    /// A configuration line with the wrong number of tokens.
    #[error("line {line}: expected {expected} flags, found {got}")]
    FlagCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// The forbidden-states count header is not a number.
    #[error("line {line}: expected a state count, found `{token}`")]
    BadCount { line: usize, token: String },

    /// Fewer forbidden states than the header declared.
    #[error("forbidden-states file declares {declared} states but lists only {got}")]
    StateCount { declared: usize, got: usize },

    /// A parsed configuration violated the puzzle's own rules.
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
