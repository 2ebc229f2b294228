//! Translation of a solved path into per-crossing actions.
//!
//! Each consecutive pair of states is diffed flag by flag: items whose
//! flag went `false -> true` moved to the left bank, `true -> false` to
//! the right. A legal crossing moves everything the same way, so each
//! step normally yields exactly one action.

use std::fmt;

use crate::puzzle::Roster;
use crate::state::State;

/// The bank a group of items moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// One reported crossing: which roster indices moved, and where to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub items: Vec<usize>,
    pub direction: Direction,
}

impl Move {
    /// Renders the action with item names: `move Farmer, Goat left`.
    pub fn describe(&self, roster: &Roster) -> String {
        let names: Vec<&str> = self.items.iter().map(|&i| roster.name(i)).collect();
        format!("move {} {}", names.join(", "), self.direction)
    }
}

/// Diffs each consecutive pair of states into grouped actions.
///
/// Left and right groups are emitted independently per step; a step never
/// suppresses one direction because the other already matched.
pub fn from_path(path: &[State]) -> Vec<Move> {
    let mut moves = Vec::new();
    for pair in path.windows(2) {
        let (curr, next) = (&pair[0], &pair[1]);
        let mut went_left = Vec::new();
        let mut went_right = Vec::new();
        for (i, (&was, &now)) in curr.flags().iter().zip(next.flags()).enumerate() {
            match (was, now) {
                (false, true) => went_left.push(i),
                (true, false) => went_right.push(i),
                _ => {}
            }
        }
        if !went_left.is_empty() {
            moves.push(Move {
                items: went_left,
                direction: Direction::Left,
            });
        }
        if !went_right.is_empty() {
            moves.push(Move {
                items: went_right,
                direction: Direction::Right,
            });
        }
    }
    moves
}
