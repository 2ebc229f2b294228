//! Flat-file puzzle formats.
//!
//! Two text formats feed the solver. A puzzle definition is three lines:
//! whitespace-separated item names (index 0 = operator), then the source
//! and target configurations as `0`/`1` tokens, `1` meaning left bank.
//! A forbidden-states file starts with a count line followed by that
//! many configuration lines.
//!
//! Parsing is string-level (`parse_*`) so it can be tested without
//! touching the filesystem; the `read_*` wrappers add the I/O.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::puzzle::{Puzzle, Roster};
use crate::state::State;

/// Parses a puzzle definition: roster line, source line, target line.
///
/// Blank lines are skipped, so trailing newlines are harmless; content
/// past the third line is ignored.
pub fn parse_puzzle(text: &str) -> Result<Puzzle, LoadError> {
    let mut lines = non_blank_lines(text);

    let (_, names) = lines.next().ok_or(LoadError::MissingLine("item roster"))?;
    let roster = Roster::new(names.split_whitespace().map(str::to_string).collect())?;

    let (line, source) = lines
        .next()
        .ok_or(LoadError::MissingLine("source configuration"))?;
    let source = parse_flags(source, line, Some(roster.len()))?;

    let (line, target) = lines
        .next()
        .ok_or(LoadError::MissingLine("target configuration"))?;
    let target = parse_flags(target, line, Some(roster.len()))?;

    let mut puzzle = Puzzle::new(roster);
    puzzle.set_source(source)?;
    puzzle.set_target(target)?;
    Ok(puzzle)
}

/// Parses a forbidden-states list: a count line, then that many
/// configurations.
///
/// Lines beyond the declared count are ignored. Configuration lengths
/// are not checked here; the file does not know the roster, so that
/// validation happens when the states are added to a puzzle.
pub fn parse_forbidden(text: &str) -> Result<Vec<State>, LoadError> {
    let mut lines = non_blank_lines(text);

    let (line, header) = lines.next().ok_or(LoadError::MissingLine("state count"))?;
    let declared: usize = header.parse().map_err(|_| LoadError::BadCount {
        line,
        token: header.to_string(),
    })?;

    // `declared` is file input; cap what it can pre-allocate.
    let mut states = Vec::with_capacity(declared.min(1024));
    for _ in 0..declared {
        let (line, flags) = lines.next().ok_or(LoadError::StateCount {
            declared,
            got: states.len(),
        })?;
        states.push(parse_flags(flags, line, None)?);
    }
    Ok(states)
}

/// Reads and parses a puzzle definition file.
pub fn read_puzzle(path: impl AsRef<Path>) -> Result<Puzzle, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let puzzle = parse_puzzle(&text)?;
    debug!(
        path = %path.display(),
        items = puzzle.roster().len(),
        "loaded puzzle definition"
    );
    Ok(puzzle)
}

/// Reads and parses a forbidden-states file.
pub fn read_forbidden(path: impl AsRef<Path>) -> Result<Vec<State>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let states = parse_forbidden(&text)?;
    debug!(
        path = %path.display(),
        states = states.len(),
        "loaded forbidden states"
    );
    Ok(states)
}

/// Trimmed, non-empty lines paired with their 1-based line numbers.
fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parses one whitespace-separated `0`/`1` configuration line.
fn parse_flags(line: &str, number: usize, expected: Option<usize>) -> Result<State, LoadError> {
    let mut flags = Vec::new();
    for token in line.split_whitespace() {
        match token {
            "0" => flags.push(false),
            "1" => flags.push(true),
            _ => {
                return Err(LoadError::BadFlag {
                    line: number,
                    token: token.to_string(),
                })
            }
        }
    }
    if let Some(expected) = expected {
        if flags.len() != expected {
            return Err(LoadError::FlagCount {
                line: number,
                expected,
                got: flags.len(),
            });
        }
    }
    Ok(State::new(flags))
}
