//! Breadth-first shortest-path search over crossing configurations.
//!
//! The graph is implicit: nodes are configurations, edges the legal
//! one-crossing moves from `State::successors`. Visited nodes live in an
//! arena so each can point back at its parent by index; following those
//! links from the matched target reconstructs the path.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use tracing::debug;

use crate::state::State;

/// Counters reported alongside a search result.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// States dequeued and expanded.
    pub states_expanded: usize,
    /// States that entered the frontier, the source included.
    pub states_enqueued: usize,
    /// Wall-clock time of the whole search.
    pub time_elapsed_ms: u64,
}

/// Outcome of a shortest-path search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Source-to-target states inclusive; empty when `found` is false.
    pub path: Vec<State>,
    /// Whether the target was reached.
    pub found: bool,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of crossings in the path (one less than its state count).
    pub fn crossings(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A visited configuration plus the arena index it was generated from.
/// Parent links always point toward the source, so the chain is acyclic.
#[derive(Debug)]
struct SearchNode {
    state: State,
    parent: Option<usize>,
}

/// Finds a shortest crossing sequence from `source` to `target`.
///
/// Standard breadth-first search: every edge costs one crossing, so the
/// first time the target is dequeued its path is minimal. `forbidden`
/// configurations are dropped at enqueue time and therefore never
/// visited, not even transiently. The source itself is not checked
/// against `forbidden`; the puzzle aggregate rejects that combination
/// when the source is assigned.
///
/// Ties between equal-length paths are fixed by FIFO processing and the
/// successor enumeration order, so identical inputs always return the
/// identical path.
pub fn find_shortest_path(
    source: &State,
    target: &State,
    forbidden: &HashSet<State>,
) -> Solution {
    let started = Instant::now();
    debug!(
        items = source.len(),
        forbidden = forbidden.len(),
        "starting breadth-first search"
    );

    let mut nodes = vec![SearchNode {
        state: source.clone(),
        parent: None,
    }];
    let mut visited: HashSet<State> = HashSet::new();
    visited.insert(source.clone());
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);

    let mut expanded = 0usize;

    while let Some(index) = frontier.pop_front() {
        if nodes[index].state == *target {
            let path = backtrack(&nodes, index);
            let stats = SearchStats {
                states_expanded: expanded,
                states_enqueued: nodes.len(),
                time_elapsed_ms: started.elapsed().as_millis() as u64,
            };
            debug!(
                crossings = path.len() - 1,
                expanded = stats.states_expanded,
                "target reached"
            );
            return Solution {
                path,
                found: true,
                stats,
            };
        }

        expanded += 1;
        let successors = nodes[index].state.successors();
        for state in successors {
            if visited.contains(&state) || forbidden.contains(&state) {
                continue;
            }
            visited.insert(state.clone());
            nodes.push(SearchNode {
                state,
                parent: Some(index),
            });
            frontier.push_back(nodes.len() - 1);
        }
    }

    let stats = SearchStats {
        states_expanded: expanded,
        states_enqueued: nodes.len(),
        time_elapsed_ms: started.elapsed().as_millis() as u64,
    };
    debug!(
        expanded = stats.states_expanded,
        "frontier exhausted without reaching the target"
    );
    Solution {
        path: Vec::new(),
        found: false,
        stats,
    }
}

/// Walks parent links from `end` back to the root, then reverses the
/// chain so the source comes first.
fn backtrack(nodes: &[SearchNode], end: usize) -> Vec<State> {
    let mut path = Vec::new();
    let mut cursor = Some(end);
    while let Some(index) = cursor {
        path.push(nodes[index].state.clone());
        cursor = nodes[index].parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Farmer, Wolf, Goat, Cabbage with the six classic forbidden
    /// configurations (hungry pairs unsupervised on either bank).
    fn classic_forbidden() -> HashSet<State> {
        [
            [false, true, true, false],
            [false, true, true, true],
            [false, false, true, true],
            [true, false, false, true],
            [true, false, false, false],
            [true, true, false, false],
        ]
        .into_iter()
        .map(State::new)
        .collect()
    }

    #[test]
    fn test_classic_puzzle_takes_seven_crossings() {
        let source = State::new([false; 4]);
        let target = State::new([true; 4]);
        let solution = find_shortest_path(&source, &target, &classic_forbidden());

        assert!(solution.found);
        assert_eq!(solution.crossings(), 7);
        assert_eq!(
            solution.path,
            vec![
                State::new([false, false, false, false]),
                State::new([true, false, true, false]),
                State::new([false, false, true, false]),
                State::new([true, true, true, false]),
                State::new([false, true, false, false]),
                State::new([true, true, false, true]),
                State::new([false, true, false, true]),
                State::new([true, true, true, true]),
            ]
        );
    }

    #[test]
    fn test_path_steps_are_legal_and_avoid_forbidden_states() {
        let source = State::new([false; 4]);
        let target = State::new([true; 4]);
        let forbidden = classic_forbidden();
        let solution = find_shortest_path(&source, &target, &forbidden);

        for state in &solution.path {
            assert!(!forbidden.contains(state));
        }
        for pair in solution.path.windows(2) {
            assert!(pair[0].successors().contains(&pair[1]));
        }
    }

    #[test]
    fn test_source_equal_to_target_is_a_one_state_path() {
        let state = State::new([false, true, false, true]);
        let solution = find_shortest_path(&state, &state, &HashSet::new());

        assert!(solution.found);
        assert_eq!(solution.path, vec![state]);
        assert_eq!(solution.crossings(), 0);
        assert_eq!(solution.stats.states_expanded, 0);
    }

    #[test]
    fn test_forbidding_every_first_move_exhausts_the_frontier() {
        let source = State::new([false; 4]);
        let target = State::new([true; 4]);
        let forbidden: HashSet<State> = source.successors().into_iter().collect();

        let solution = find_shortest_path(&source, &target, &forbidden);
        assert!(!solution.found);
        assert!(solution.path.is_empty());
        assert_eq!(solution.stats.states_expanded, 1);
    }

    #[test]
    fn test_forbidden_target_is_never_enqueued() {
        let source = State::new([false, false]);
        let target = State::new([true, true]);
        let forbidden: HashSet<State> = [target.clone()].into_iter().collect();

        let solution = find_shortest_path(&source, &target, &forbidden);
        assert!(!solution.found);
    }

    #[test]
    fn test_identical_inputs_return_the_identical_path() {
        let source = State::new([false; 4]);
        let target = State::new([true; 4]);
        let forbidden = classic_forbidden();

        let first = find_shortest_path(&source, &target, &forbidden);
        let second = find_shortest_path(&source, &target, &forbidden);
        assert_eq!(first.path, second.path);
        assert_eq!(first.stats.states_enqueued, second.stats.states_enqueued);
    }

    #[test]
    fn test_unconstrained_two_item_puzzle_is_one_crossing() {
        let source = State::new([false, false]);
        let target = State::new([true, true]);
        let solution = find_shortest_path(&source, &target, &HashSet::new());

        assert!(solution.found);
        assert_eq!(solution.crossings(), 1);
    }
}
