//! A plan is the sequence of boards from the start to the goal together with
//! the moves of the blank between them. This module provides the [`Plan`]
//! struct and the predecessor walk that builds it.

use crate::{
    search::{to_directions, Board, Direction, StateKey},
    PuzzleError,
};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::Deref;

/// Follows predecessor links from `goal` back to the key with no
/// predecessor, returning the keys in start-to-goal order.
pub fn backtrack(
    predecessors: &HashMap<StateKey, StateKey>,
    goal: StateKey,
) -> Result<Vec<StateKey>, PuzzleError> {
    let mut path = vec![goal];
    let mut visited = HashSet::from([goal]);
    let mut current = goal;
    while let Some(&previous) = predecessors.get(&current) {
        if !visited.insert(previous) {
            return Err(PuzzleError::InconsistentPath(previous));
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    Ok(path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    boards: Vec<Board>,
    directions: Vec<Direction>,
}

impl Plan {
    /// Builds the plan ending in `goal` from a predecessor map.
    pub fn from_predecessors(
        predecessors: &HashMap<StateKey, StateKey>,
        goal: StateKey,
    ) -> Result<Self, PuzzleError> {
        let boards = backtrack(predecessors, goal)?
            .into_iter()
            .map(StateKey::decode)
            .collect::<Result<Vec<Board>, _>>()?;
        Self::from_boards(boards)
    }

    pub fn from_boards(boards: Vec<Board>) -> Result<Self, PuzzleError> {
        let directions = to_directions(&boards)?;
        Ok(Self { boards, directions })
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn start(&self) -> Option<&Board> {
        self.boards.first()
    }

    pub fn end(&self) -> Option<&Board> {
        self.boards.last()
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

impl Deref for Plan {
    type Target = [Direction];

    fn deref(&self) -> &Self::Target {
        &self.directions
    }
}

/// Writes the moves separated by spaces, e.g. `R D R D`.
impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, direction) in self.directions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", direction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn backtrack_orders_start_to_goal() {
        let start = board_from(TWO_MOVES_DOWN).key();
        let middle = board_from(ONE_MOVE_DOWN).key();
        let goal = Board::goal().key();
        let predecessors = HashMap::from([(goal, middle), (middle, start)]);
        assert_eq!(
            backtrack(&predecessors, goal).unwrap(),
            vec![start, middle, goal]
        );
    }

    #[test]
    fn backtrack_without_predecessor_is_single_key() {
        let goal = Board::goal().key();
        assert_eq!(backtrack(&HashMap::new(), goal).unwrap(), vec![goal]);
    }

    #[test]
    fn backtrack_detects_cycle() {
        let a = board_from(ONE_MOVE_DOWN).key();
        let goal = Board::goal().key();
        let predecessors = HashMap::from([(goal, a), (a, goal)]);
        assert!(matches!(
            backtrack(&predecessors, goal),
            Err(PuzzleError::InconsistentPath(_))
        ));
    }

    #[test]
    fn from_predecessors_works() {
        let start = board_from(TWO_MOVES_DOWN).key();
        let middle = board_from(ONE_MOVE_DOWN).key();
        let goal = Board::goal().key();
        let predecessors = HashMap::from([(goal, middle), (middle, start)]);
        let plan = Plan::from_predecessors(&predecessors, goal).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.start(), Some(&board_from(TWO_MOVES_DOWN)));
        assert_eq!(plan.end(), Some(&Board::goal()));
        assert_eq!(plan.to_string(), "D D");
    }

    #[test]
    fn empty_plan() {
        let plan = Plan::from_boards(vec![Board::goal()]).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.to_string(), "");
    }
}
