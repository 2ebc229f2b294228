//! The puzzle aggregate: item roster, forbidden set, and endpoints.
//!
//! `Puzzle` owns everything one solve needs and validates its inputs at
//! the offending call, so a malformed setup never reaches the search.
//! Item names live here rather than in any global registry; independent
//! puzzles never share naming.

use std::collections::HashSet;

use tracing::debug;

use crate::error::PuzzleError;
use crate::solver::{self, Solution};
use crate::state::State;

/// The ordered item names of one puzzle; index 0 is the ferry operator.
///
/// Names are display-only and never take part in state identity.
/// Distinctness is not enforced.
#[derive(Debug, Clone)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Builds a roster. Fails on an empty list: index 0 must name the
    /// operator.
    pub fn new(names: Vec<String>) -> Result<Self, PuzzleError> {
        if names.is_empty() {
            return Err(PuzzleError::EmptyRoster);
        }
        Ok(Self { names })
    }

    /// Number of items, equal to the flag count of every valid state.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Name of item `i`.
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    /// All names in roster order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the ferry operator.
    pub fn operator(&self) -> &str {
        &self.names[0]
    }

    /// Lists the items on the left bank: `[Farmer, Goat]`.
    pub fn describe(&self, state: &State) -> String {
        let names: Vec<&str> = self
            .names
            .iter()
            .zip(state.flags())
            .filter(|(_, &left)| left)
            .map(|(name, _)| name.as_str())
            .collect();
        format!("[{}]", names.join(", "))
    }
}

/// One generalized river-crossing puzzle.
///
/// Source, target, and the forbidden set cross-check each other on every
/// assignment: a puzzle whose source or target is forbidden would be
/// unsolvable by construction, so those combinations are rejected here
/// instead of surfacing as a mysterious no-path result later.
#[derive(Debug, Clone)]
pub struct Puzzle {
    roster: Roster,
    forbidden: HashSet<State>,
    source: Option<State>,
    target: Option<State>,
}

impl Puzzle {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            forbidden: HashSet::new(),
            source: None,
            target: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn source(&self) -> Option<&State> {
        self.source.as_ref()
    }

    pub fn target(&self) -> Option<&State> {
        self.target.as_ref()
    }

    pub fn forbidden(&self) -> &HashSet<State> {
        &self.forbidden
    }

    /// Assigns the starting configuration. Repeated calls overwrite, each
    /// validated afresh.
    pub fn set_source(&mut self, source: State) -> Result<(), PuzzleError> {
        self.check_length(&source)?;
        if self.forbidden.contains(&source) {
            return Err(PuzzleError::SourceForbidden(source));
        }
        self.source = Some(source);
        Ok(())
    }

    /// Assigns the configuration the search must reach.
    pub fn set_target(&mut self, target: State) -> Result<(), PuzzleError> {
        self.check_length(&target)?;
        if self.forbidden.contains(&target) {
            return Err(PuzzleError::TargetForbidden(target));
        }
        self.target = Some(target);
        Ok(())
    }

    /// Adds configurations the search must never visit, not even
    /// transiently. Stops at the first state equal to the current source
    /// or target; states accepted before that point stay in the set.
    pub fn add_forbidden(
        &mut self,
        states: impl IntoIterator<Item = State>,
    ) -> Result<(), PuzzleError> {
        for state in states {
            self.check_length(&state)?;
            if self.source.as_ref() == Some(&state) {
                return Err(PuzzleError::ForbiddenIsSource(state));
            }
            if self.target.as_ref() == Some(&state) {
                return Err(PuzzleError::ForbiddenIsTarget(state));
            }
            self.forbidden.insert(state);
        }
        debug!(forbidden = self.forbidden.len(), "extended forbidden set");
        Ok(())
    }

    /// Runs the breadth-first search from source to target.
    ///
    /// Both endpoints must already be assigned; a missing one is a
    /// configuration error, never a search outcome. A well-formed puzzle
    /// with no solution is reported through `Solution::found`.
    pub fn solve(&self) -> Result<Solution, PuzzleError> {
        let source = self.source.as_ref().ok_or(PuzzleError::SourceNotSet)?;
        let target = self.target.as_ref().ok_or(PuzzleError::TargetNotSet)?;
        Ok(solver::find_shortest_path(source, target, &self.forbidden))
    }

    fn check_length(&self, state: &State) -> Result<(), PuzzleError> {
        if state.len() != self.roster.len() {
            return Err(PuzzleError::LengthMismatch {
                expected: self.roster.len(),
                got: state.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves;

    fn roster(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn classic() -> Puzzle {
        let mut puzzle = Puzzle::new(roster(&["Farmer", "Wolf", "Goat", "Cabbage"]));
        puzzle.set_source(State::new([false; 4])).unwrap();
        puzzle.set_target(State::new([true; 4])).unwrap();
        puzzle
            .add_forbidden([
                State::new([false, true, true, false]),
                State::new([false, true, true, true]),
                State::new([false, false, true, true]),
                State::new([true, false, false, true]),
                State::new([true, false, false, false]),
                State::new([true, true, false, false]),
            ])
            .unwrap();
        puzzle
    }

    #[test]
    fn test_roster_must_not_be_empty() {
        assert_eq!(Roster::new(Vec::new()).unwrap_err(), PuzzleError::EmptyRoster);
    }

    #[test]
    fn test_roster_names_the_operator() {
        let roster = roster(&["Farmer", "Wolf"]);
        assert_eq!(roster.operator(), "Farmer");
        assert_eq!(roster.name(1), "Wolf");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_describe_lists_left_bank_items() {
        let roster = roster(&["Farmer", "Wolf", "Goat", "Cabbage"]);
        assert_eq!(
            roster.describe(&State::new([true, true, true, true])),
            "[Farmer, Wolf, Goat, Cabbage]"
        );
        assert_eq!(
            roster.describe(&State::new([true, false, true, false])),
            "[Farmer, Goat]"
        );
        assert_eq!(roster.describe(&State::new([false; 4])), "[]");
    }

    #[test]
    fn test_setters_reject_length_mismatch() {
        let mut puzzle = Puzzle::new(roster(&["Farmer", "Wolf"]));
        let err = puzzle.set_source(State::new([false; 3])).unwrap_err();
        assert_eq!(err, PuzzleError::LengthMismatch { expected: 2, got: 3 });

        let err = puzzle.set_target(State::new([true])).unwrap_err();
        assert_eq!(err, PuzzleError::LengthMismatch { expected: 2, got: 1 });

        let err = puzzle.add_forbidden([State::new([true; 4])]).unwrap_err();
        assert_eq!(err, PuzzleError::LengthMismatch { expected: 2, got: 4 });
    }

    #[test]
    fn test_source_and_target_must_not_be_forbidden() {
        let mut puzzle = Puzzle::new(roster(&["Farmer", "Wolf"]));
        puzzle.add_forbidden([State::new([true, false])]).unwrap();

        let err = puzzle.set_source(State::new([true, false])).unwrap_err();
        assert_eq!(err, PuzzleError::SourceForbidden(State::new([true, false])));

        let err = puzzle.set_target(State::new([true, false])).unwrap_err();
        assert_eq!(err, PuzzleError::TargetForbidden(State::new([true, false])));
    }

    #[test]
    fn test_forbidding_the_endpoints_is_rejected() {
        let mut puzzle = Puzzle::new(roster(&["Farmer", "Wolf"]));
        puzzle.set_source(State::new([false, false])).unwrap();
        puzzle.set_target(State::new([true, true])).unwrap();

        let err = puzzle.add_forbidden([State::new([false, false])]).unwrap_err();
        assert_eq!(err, PuzzleError::ForbiddenIsSource(State::new([false, false])));

        let err = puzzle.add_forbidden([State::new([true, true])]).unwrap_err();
        assert_eq!(err, PuzzleError::ForbiddenIsTarget(State::new([true, true])));

        // States accepted before the rejected one stay in the set.
        let err = puzzle
            .add_forbidden([State::new([false, true]), State::new([true, true])])
            .unwrap_err();
        assert_eq!(err, PuzzleError::ForbiddenIsTarget(State::new([true, true])));
        assert!(puzzle.forbidden().contains(&State::new([false, true])));
    }

    #[test]
    fn test_solve_requires_both_endpoints() {
        let mut puzzle = Puzzle::new(roster(&["Farmer", "Wolf"]));
        assert_eq!(puzzle.solve().unwrap_err(), PuzzleError::SourceNotSet);

        puzzle.set_source(State::new([false, false])).unwrap();
        assert_eq!(puzzle.solve().unwrap_err(), PuzzleError::TargetNotSet);
    }

    #[test]
    fn test_setters_can_reassign() {
        let mut puzzle = Puzzle::new(roster(&["Farmer", "Wolf"]));
        puzzle.set_source(State::new([false, false])).unwrap();
        puzzle.set_source(State::new([false, true])).unwrap();
        assert_eq!(puzzle.source(), Some(&State::new([false, true])));
    }

    #[test]
    fn test_classic_puzzle_through_the_aggregate() {
        let puzzle = classic();
        let solution = puzzle.solve().unwrap();

        assert!(solution.found);
        assert_eq!(solution.crossings(), 7);

        let moves = moves::from_path(&solution.path);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0].describe(puzzle.roster()), "move Farmer, Goat left");
        assert_eq!(moves[1].describe(puzzle.roster()), "move Farmer right");
    }

    #[test]
    fn test_solution_avoids_the_forbidden_set() {
        let puzzle = classic();
        let solution = puzzle.solve().unwrap();
        for state in &solution.path {
            assert!(!puzzle.forbidden().contains(state));
        }
    }
}
