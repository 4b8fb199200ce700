/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorState;
use crate::motion::Motion;
use crate::registry::WaitingRegistry;
use crate::shared::{Action, Direction, ElevatorId, Floor};

/// Everything the policies read. Passed explicitly so every decision is a
/// plain function of shared state, with no hidden captures.
pub struct PolicyContext<'a, M: Motion> {
    pub registry: &'a WaitingRegistry,
    pub elevators: &'a [ElevatorState],
    pub motion: &'a M,
    pub bottom: Floor,
    pub top: Floor,
}

/// Stopping policy, evaluated as an elevator approaches a non-terminal
/// floor. Rules are ordered; the first match wins.
pub fn stop_action<M: Motion>(
    ctx: &PolicyContext<M>,
    elevator: ElevatorId,
    floor: Floor,
) -> Action {
    let state = &ctx.elevators[elevator];
    let direction = match state.direction() {
        Some(direction) => direction,
        None => {
            warn!("stop decision requested for idle elevator {}", elevator);
            return Action::Pass;
        }
    };

    // A passenger aboard asked for this floor.
    if state.has_stop(floor) {
        return Action::Stop;
    }

    // No room for another passenger, and nobody is getting off here.
    if ctx.motion.residual_capacity(elevator) == 0 {
        return Action::Pass;
    }

    // Pickup in the direction of travel, unless another cab already
    // committed to it.
    if ctx.registry.has_waiting(floor, direction)
        && !committed_elsewhere(ctx, elevator, floor, direction)
    {
        return Action::Stop;
    }

    // Still work further along: drop-offs pending, or demand only this cab
    // covers.
    if state.has_stops() || needed_beyond(ctx, elevator, floor, direction) {
        return Action::Pass;
    }

    // Nothing ahead; take a pickup in the opposite direction if it is still
    // unclaimed.
    let opposite = direction.opposite();
    if ctx.registry.has_waiting(floor, opposite)
        && !committed_elsewhere(ctx, elevator, floor, opposite)
    {
        return Action::Stop;
    }

    // Reverse without visiting the floor.
    Action::Turn
}

/// Turning policy decision: the direction the elevator departs `floor`
/// with. Rules are ordered; the first match wins. The caller applies the
/// side effects (stop removal, registry clear).
pub fn departure_direction<M: Motion>(
    ctx: &PolicyContext<M>,
    elevator: ElevatorId,
    floor: Floor,
) -> Direction {
    if floor == ctx.bottom {
        return Direction::Up;
    }
    if floor == ctx.top {
        return Direction::Down;
    }

    let state = &ctx.elevators[elevator];
    let direction = match state.direction() {
        Some(direction) => direction,
        None => {
            // Idle cabs rest at the bottom floor, which the first rule
            // already resolves; a mid-shaft idle cab is a collaborator
            // contract violation.
            warn!(
                "turn decision for idle elevator {} at mid-shaft floor {}",
                elevator, floor
            );
            return Direction::Up;
        }
    };

    if state.has_stops() {
        return direction;
    }
    if ctx.registry.has_waiting(floor, direction) {
        return direction;
    }
    if !needed_beyond(ctx, elevator, floor, direction) {
        return direction.opposite();
    }
    direction
}

/// Whether continuing past `floor` in `direction` serves a waiting
/// passenger that no other elevator covers. Rules are ordered; the first
/// match wins.
pub fn needed_beyond<M: Motion>(
    ctx: &PolicyContext<M>,
    elevator: ElevatorId,
    floor: Floor,
    direction: Direction,
) -> bool {
    // Nobody is waiting anywhere past this floor.
    if !ctx.registry.has_waiting_past(floor, direction) {
        return false;
    }

    // Downward demand converges on the bottom floor; a single cab cannot be
    // trusted to cover it, so never prune a downward run.
    if direction == Direction::Down {
        return true;
    }

    if ctx.registry.has_waiting_above(floor, Direction::Up) {
        return true;
    }

    // A higher upward cab will reach the upward waiters first.
    if highest_heading(ctx, Direction::Up) != Some(elevator) {
        return false;
    }

    // The highest downward cab sweeps everything at or below its position.
    if let Some(highest_down) = highest_heading(ctx, Direction::Down) {
        let position = ctx.motion.current_floor(highest_down);
        if !ctx.registry.has_waiting_above(position - 1, Direction::Down) {
            return false;
        }
    }

    true
}

/// True iff some other elevator traveling `direction` has already committed
/// to stop at `floor`.
fn committed_elsewhere<M: Motion>(
    ctx: &PolicyContext<M>,
    elevator: ElevatorId,
    floor: Floor,
    direction: Direction,
) -> bool {
    ctx.elevators.iter().enumerate().any(|(id, other)| {
        id != elevator && other.direction() == Some(direction) && other.has_stop(floor)
    })
}

/// Highest-positioned elevator currently heading `direction`. The
/// comparison floor starts at the bottom, so a cab sitting exactly at the
/// bottom never holds the title; ties keep the earliest id.
fn highest_heading<M: Motion>(ctx: &PolicyContext<M>, direction: Direction) -> Option<ElevatorId> {
    let mut best = None;
    let mut best_floor = ctx.bottom;
    for (id, state) in ctx.elevators.iter().enumerate() {
        if state.direction() != Some(direction) {
            continue;
        }
        let position = ctx.motion.current_floor(id);
        if position > best_floor {
            best = Some(id);
            best_floor = position;
        }
    }
    best
}
