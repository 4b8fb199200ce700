/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Floor identifier. Identifiers are plain integers with no contiguity or
/// ordering guarantee; only the minimum and maximum of the configured set
/// ("bottom" and "top") have special status.
pub type Floor = i32;

/// Elevator identity, assigned in registration order. Ascending id is the
/// canonical iteration order used by every tie-break.
pub type ElevatorId = usize;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Travel state of an elevator. `Idle` means it has never been dispatched;
/// once moving it only ever flips between the two `Moving` variants.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Idle,
    Moving(Direction),
}

impl Heading {
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Heading::Moving(direction) => Some(direction),
            Heading::Idle => None,
        }
    }
}

/// Outcome of the stopping decision for one approached floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pass,
    Stop,
    Turn,
}

/// External events consumed by the dispatcher. Button events only mutate the
/// request bookkeeping; approach and stop events drive the policies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    CallButton { floor: Floor, direction: Direction },
    DestinationButton { elevator: ElevatorId, floor: Floor },
    Approaching { elevator: ElevatorId, floor: Floor },
    StoppedAt { elevator: ElevatorId, floor: Floor },
}
