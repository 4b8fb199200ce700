use std::collections::BTreeSet;

use crate::shared::{Direction, Floor, Heading};

/**
 * Dispatcher-owned attributes of a single elevator.
 *
 * The motion collaborator owns the cab's physical readings (current floor,
 * capacity); this struct holds what the dispatcher decides: the travel
 * heading and the set of floors the cab is committed to stop at.
 *
 * # Fields
 * - `heading`: `Idle` until the first assignment, then `Moving(..)` forever.
 * - `stops`:   floors requested by passengers aboard plus pickup floors the
 *              stopping policy committed to; a floor leaves the set when the
 *              cab reaches it.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    heading: Heading,
    stops: BTreeSet<Floor>,
}

impl ElevatorState {
    pub fn new() -> ElevatorState {
        ElevatorState {
            heading: Heading::Idle,
            stops: BTreeSet::new(),
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn direction(&self) -> Option<Direction> {
        self.heading.direction()
    }

    pub fn is_idle(&self) -> bool {
        self.heading == Heading::Idle
    }

    /// Finalizes the travel direction. There is no way back to `Idle`.
    pub fn set_direction(&mut self, direction: Direction) {
        self.heading = Heading::Moving(direction);
    }

    pub fn has_stops(&self) -> bool {
        !self.stops.is_empty()
    }

    pub fn has_stop(&self, floor: Floor) -> bool {
        self.stops.contains(&floor)
    }

    /// Commits the cab to stop at `floor`. Idempotent.
    pub fn add_stop(&mut self, floor: Floor) {
        self.stops.insert(floor);
    }

    /// Drops the commitment for a reached floor. Idempotent.
    pub fn remove_stop(&mut self, floor: Floor) {
        self.stops.remove(&floor);
    }

    /// Committed stops, ascending.
    pub fn stops(&self) -> Vec<Floor> {
        self.stops.iter().copied().collect()
    }
}

impl Default for ElevatorState {
    fn default() -> ElevatorState {
        ElevatorState::new()
    }
}
