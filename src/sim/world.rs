/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use std::sync::{Arc, Mutex};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::motion::Motion;
use crate::shared::{ElevatorId, Event, Floor};

/**
 * Deterministic tick-based motion model standing in for real cab hardware.
 *
 * Cabs travel one floor slot per tick toward their commanded destination and
 * report the same events real machinery would: an approach when they enter a
 * non-terminal floor they are not targeting, and a stop one tick after they
 * reach their target. The model makes no dispatch decisions; it only obeys
 * destination and indicator commands.
 *
 * Occupancy is not modeled: cabs always report their full residual capacity.
 */
struct Cab {
    position: usize,
    destination: Option<usize>,
    indicators: (bool, bool),
}

pub struct SimWorld {
    floors: Vec<Floor>,
    cabs: Vec<Cab>,
    capacity: usize,
}

impl SimWorld {
    fn new(floors: &[Floor], n_elevators: usize, capacity: usize) -> SimWorld {
        let mut sorted = floors.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let cabs = (0..n_elevators)
            .map(|_| Cab {
                position: 0,
                destination: None,
                indicators: (false, false),
            })
            .collect();

        SimWorld {
            floors: sorted,
            cabs,
            capacity,
        }
    }

    fn floor_index(&self, floor: Floor) -> Option<usize> {
        self.floors.iter().position(|&f| f == floor)
    }

    fn is_terminal(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.floors.len()
    }

    /// Advances every cab one slot and collects the motion events the
    /// dispatcher should see, in cab order.
    fn step(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        for id in 0..self.cabs.len() {
            let destination = match self.cabs[id].destination {
                Some(destination) => destination,
                None => continue,
            };
            let position = self.cabs[id].position;

            if destination == position {
                // Arrived on the previous tick; report the stop and wait
                // for the next command.
                self.cabs[id].destination = None;
                events.push(Event::StoppedAt {
                    elevator: id,
                    floor: self.floors[position],
                });
                continue;
            }

            let next = if destination > position {
                position + 1
            } else {
                position - 1
            };
            self.cabs[id].position = next;

            if next != destination && !self.is_terminal(next) {
                events.push(Event::Approaching {
                    elevator: id,
                    floor: self.floors[next],
                });
            }
        }
        events
    }
}

/**
 * Cloneable handle to the shared simulation world. The dispatcher drives
 * cabs through the `Motion` half while the event loop advances ticks and
 * reads positions for reporting.
 */
#[derive(Clone)]
pub struct SimHandle {
    world: Arc<Mutex<SimWorld>>,
}

impl SimHandle {
    pub fn new(floors: &[Floor], n_elevators: usize, capacity: usize) -> SimHandle {
        SimHandle {
            world: Arc::new(Mutex::new(SimWorld::new(floors, n_elevators, capacity))),
        }
    }

    /// Advances the world one tick.
    pub fn step(&self) -> Vec<Event> {
        self.world.lock().unwrap().step()
    }

    pub fn position(&self, elevator: ElevatorId) -> Floor {
        let world = self.world.lock().unwrap();
        world.floors[world.cabs[elevator].position]
    }

    pub fn indicators(&self, elevator: ElevatorId) -> (bool, bool) {
        self.world.lock().unwrap().cabs[elevator].indicators
    }
}

impl Motion for SimHandle {
    fn current_floor(&self, elevator: ElevatorId) -> Floor {
        self.position(elevator)
    }

    fn residual_capacity(&self, _elevator: ElevatorId) -> usize {
        self.world.lock().unwrap().capacity
    }

    fn set_indicators(&mut self, elevator: ElevatorId, up: bool, down: bool) {
        self.world.lock().unwrap().cabs[elevator].indicators = (up, down);
    }

    fn set_destination(&mut self, elevator: ElevatorId, floor: Floor) {
        let mut world = self.world.lock().unwrap();
        match world.floor_index(floor) {
            Some(index) => world.cabs[elevator].destination = Some(index),
            None => warn!("destination command for unknown floor {}", floor),
        }
    }
}
