//! Autonomous per-tick decision pipeline
//!
//! Each tick the agent routes toward the food with A* over an occupancy view
//! of its own body, vets the first step with a tail-reachability check, and
//! falls back to the direction preserving the most flood-filled free space.
//! Only when no vetted direction exists does it take any in-bounds free
//! cell, and only when even that fails does the tick end the game.
//!
//! One ranked-direction routine serves every fallback stage; the stages
//! differ only in which predicates they apply.

use std::collections::VecDeque;

use rand::Rng;

use crate::io::error::{Result, invalid_parameter};
use crate::snake::food::place_food;
use crate::snake::game::{SnakeState, TickOutcome};
use crate::solver::{Algorithm, solve};
use crate::spatial::{Cell, CellSet, Direction, Grid, Position};

/// Advance the game by one tick, fully autonomously
///
/// The returned outcome owns the next state; the input state is never
/// mutated. A tick that would produce an out-of-bounds or self-colliding
/// head returns the input state unchanged with `game_over` set, never an
/// invalid body.
///
/// # Errors
///
/// Returns [`crate::EngineError::InvalidParameter`] for an empty body and
/// [`crate::EngineError::FoodExhausted`] when food is eaten on a full arena.
pub fn step<R: Rng>(state: &SnakeState, rng: &mut R) -> Result<TickOutcome> {
    let Some(head) = state.head() else {
        return Err(invalid_parameter("body", &"[]", &"body must be non-empty"));
    };

    let occupancy = state.occupancy();
    let heading = choose_direction(state, &occupancy, head).unwrap_or(state.heading);

    let candidate = heading
        .apply(head)
        .filter(|pos| pos.row < state.rows && pos.col < state.cols);
    let Some(new_head) = candidate else {
        // Wall hit; the pre-move state is the terminal one
        return Ok(TickOutcome {
            state: state.clone(),
            game_over: true,
            score: state.score(),
        });
    };

    let mut body = Vec::with_capacity(state.body.len() + 1);
    body.push(new_head);
    body.extend(state.body.iter().copied());

    let ate = new_head == state.food;
    if !ate {
        body.pop();
    }

    if body.iter().skip(1).any(|segment| *segment == new_head) {
        return Ok(TickOutcome {
            state: state.clone(),
            game_over: true,
            score: body.len().saturating_sub(1),
        });
    }

    let food = if ate {
        let grid = Grid::occupancy(state.rows, state.cols, &body);
        place_food(&body, &grid, rng)?
    } else {
        state.food
    };

    let next = SnakeState {
        body,
        heading,
        food,
        rows: state.rows,
        cols: state.cols,
    };
    let score = next.score();
    Ok(TickOutcome {
        state: next,
        game_over: false,
        score,
    })
}

/// Run the decision pipeline; `None` means no direction qualified at all
fn choose_direction(state: &SnakeState, occupancy: &Grid, head: Position) -> Option<Direction> {
    route_step(state, occupancy, head)
        .or_else(|| most_spacious_direction(state, occupancy, head))
        .or_else(|| last_resort(occupancy, head))
}

/// First step of an A* route to the food, if one exists and passes vetting
///
/// Routing runs over the occupancy view with the head cell freed as the
/// start; the body is otherwise impassable.
fn route_step(state: &SnakeState, occupancy: &Grid, head: Position) -> Option<Direction> {
    let mut route_grid = occupancy.clone();
    route_grid.set(head, Cell::Path);
    let result = solve(Algorithm::AStar, &route_grid, head, state.food).ok()?;
    let next = result.path.get(1).copied()?;
    let dir = Direction::between(head, next)?;
    (is_safe_step(state, occupancy, next) && can_reach_tail(state, next)).then_some(dir)
}

/// Basic safety for a candidate head: in bounds and not on the body
///
/// The tail cell is the one exception: it is allowed when the tail vacates
/// this tick, which it does unless the candidate is the food.
fn is_safe_step(state: &SnakeState, occupancy: &Grid, candidate: Position) -> bool {
    if !occupancy.contains(candidate) {
        return false;
    }
    if occupancy.is_path(candidate) {
        return true;
    }
    state.tail() == Some(candidate) && candidate != state.food && state.body.len() > 1
}

/// Tail reachability after a simulated move to `candidate`
///
/// The candidate head counts as occupied; the tail cell is freed unless the
/// move eats the food (growth keeps the tail in place). Reaching the tail
/// cell, occupied or not, satisfies the check: being adjacent to the new
/// tail is what prevents the agent from sealing itself into a dead region.
fn can_reach_tail(state: &SnakeState, candidate: Position) -> bool {
    let Some(tail) = state.tail() else {
        return false;
    };
    if candidate == tail {
        return true;
    }

    let mut sim = state.occupancy();
    if candidate != state.food {
        sim.set(tail, Cell::Path);
    }
    sim.set(candidate, Cell::Wall);

    let mut visited = CellSet::for_grid(&sim);
    let mut queue = VecDeque::new();
    visited.insert(candidate);
    queue.push_back(candidate);
    while let Some(current) = queue.pop_front() {
        for dir in Direction::ALL {
            let Some(next) = dir.apply(current) else {
                continue;
            };
            if !sim.contains(next) || visited.contains(next) {
                continue;
            }
            if next == tail {
                return true;
            }
            if sim.is_path(next) {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }
    false
}

/// Rank vetted directions by flood-filled free space and take the maximum
///
/// Ties keep the earlier direction in the fixed priority order, making the
/// fallback deterministic.
fn most_spacious_direction(
    state: &SnakeState,
    occupancy: &Grid,
    head: Position,
) -> Option<Direction> {
    let mut best: Option<(usize, Direction)> = None;
    for dir in Direction::ALL {
        let Some(candidate) = dir.apply(head) else {
            continue;
        };
        if !is_safe_step(state, occupancy, candidate) || !can_reach_tail(state, candidate) {
            continue;
        }
        let space = reachable_space(occupancy, candidate);
        if best.is_none_or(|(max, _)| space > max) {
            best = Some((space, dir));
        }
    }
    best.map(|(_, dir)| dir)
}

/// First direction that is merely in bounds and unoccupied
fn last_resort(occupancy: &Grid, head: Position) -> Option<Direction> {
    Direction::ALL.into_iter().find(|dir| {
        dir.apply(head)
            .is_some_and(|candidate| occupancy.is_path(candidate))
    })
}

/// Count free cells reachable from `from`, the candidate cell included
///
/// Depth-first flood fill over the occupancy grid; the count is a proxy for
/// how much room a move leaves.
fn reachable_space(occupancy: &Grid, from: Position) -> usize {
    let mut visited = CellSet::for_grid(occupancy);
    let mut stack = vec![from];
    visited.insert(from);

    while let Some(current) = stack.pop() {
        for dir in Direction::ALL {
            let Some(next) = dir.apply(current) else {
                continue;
            };
            if occupancy.is_path(next) && !visited.contains(next) {
                visited.insert(next);
                stack.push(next);
            }
        }
    }
    visited.count()
}
