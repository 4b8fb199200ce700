/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Floor};

/**
 * Registry of floors with waiting passengers, kept per travel direction.
 *
 * A floor is present in the up (down) set iff at least one passenger is
 * waiting there to travel up (down) and no elevator has committed to the
 * pickup yet. Entries are created by call-button events and removed by the
 * turning decision at the moment an elevator commits to stop for them.
 *
 * The ordered sets make the "above"/"past" queries plain range scans, so an
 * empty registry answers false without any sentinel arithmetic.
 */
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WaitingRegistry {
    waiting_up: BTreeSet<Floor>,
    waiting_down: BTreeSet<Floor>,
}

impl WaitingRegistry {
    pub fn new() -> WaitingRegistry {
        WaitingRegistry {
            waiting_up: BTreeSet::new(),
            waiting_down: BTreeSet::new(),
        }
    }

    fn set(&self, direction: Direction) -> &BTreeSet<Floor> {
        match direction {
            Direction::Up => &self.waiting_up,
            Direction::Down => &self.waiting_down,
        }
    }

    fn set_mut(&mut self, direction: Direction) -> &mut BTreeSet<Floor> {
        match direction {
            Direction::Up => &mut self.waiting_up,
            Direction::Down => &mut self.waiting_down,
        }
    }

    /// Records a waiting passenger at `floor`. Idempotent.
    pub fn set_waiting(&mut self, floor: Floor, direction: Direction) {
        self.set_mut(direction).insert(floor);
    }

    /// Removes the entry for `floor`, if any. Removing an absent entry is a
    /// no-op.
    pub fn clear_waiting(&mut self, floor: Floor, direction: Direction) {
        self.set_mut(direction).remove(&floor);
    }

    pub fn has_waiting(&self, floor: Floor, direction: Direction) -> bool {
        self.set(direction).contains(&floor)
    }

    /// True iff some floor strictly above `floor` has a passenger waiting to
    /// travel `direction`.
    pub fn has_waiting_above(&self, floor: Floor, direction: Direction) -> bool {
        self.set(direction)
            .range((Excluded(floor), Unbounded))
            .next()
            .is_some()
    }

    /// True iff any waiting floor, in either direction, lies past `floor`
    /// along `direction` of travel: strictly above for up, strictly below
    /// for down.
    pub fn has_waiting_past(&self, floor: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up => {
                self.waiting_up
                    .range((Excluded(floor), Unbounded))
                    .next()
                    .is_some()
                    || self
                        .waiting_down
                        .range((Excluded(floor), Unbounded))
                        .next()
                        .is_some()
            }
            Direction::Down => {
                self.waiting_up.range(..floor).next().is_some()
                    || self.waiting_down.range(..floor).next().is_some()
            }
        }
    }

    /// Floors currently waiting in `direction`, ascending. Read-only view
    /// for rendering and monitoring collaborators.
    pub fn waiting_floors(&self, direction: Direction) -> Vec<Floor> {
        self.set(direction).iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting_up.is_empty() && self.waiting_down.is_empty()
    }
}
