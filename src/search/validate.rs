use crate::{
    search::{successors, Board, Plan},
    PuzzleError,
};

/// Checks that `plan` starts at `start`, that every step is a single legal
/// move, that its directions match its boards, and that it ends at the goal.
pub fn validate(plan: &Plan, start: &Board) -> Result<(), PuzzleError> {
    let boards = plan.boards();
    match boards.first() {
        Some(first) if first == start => {}
        Some(first) => {
            return Err(PuzzleError::Format(format!(
                "plan starts at\n{}\ninstead of\n{}",
                first, start
            )))
        }
        None => return Err(PuzzleError::Format("plan has no boards".to_string())),
    }

    if plan.directions().len() + 1 != boards.len() {
        return Err(PuzzleError::Format(format!(
            "plan has {} boards but {} directions",
            boards.len(),
            plan.directions().len()
        )));
    }

    for pair in boards.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        if !successors(from)?.any(|neighbour| neighbour == *to) {
            return Err(PuzzleError::InvalidTransition {
                from: *from,
                to: *to,
            });
        }
    }

    let last = &boards[boards.len() - 1];
    if !last.is_goal() {
        return Err(PuzzleError::Format(format!(
            "plan does not reach the goal, final board is:\n{}",
            last
        )));
    }

    Ok(())
}
