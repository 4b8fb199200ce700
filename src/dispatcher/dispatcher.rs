/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use super::policies::{self, PolicyContext};
use crate::elevator::ElevatorState;
use crate::motion::Motion;
use crate::registry::WaitingRegistry;
use crate::shared::{Action, Direction, ElevatorId, Event, Floor, Heading};

/**
 * Routes external events to the dispatch policies and issues movement
 * commands back to the motion collaborator.
 *
 * Button events only mutate the waiting registry and per-elevator state;
 * approach events drive the stopping policy and stop events the turning
 * policy. Every handler runs to completion before the next event is
 * processed, which is what makes the commit-then-clear sequence atomic and
 * keeps two cabs from claiming the same waiting passenger.
 *
 * # Fields
 * - `registry`:  floors with unclaimed waiting passengers, per direction.
 * - `elevators`: dispatcher-owned state per cab, indexed by elevator id.
 * - `floors`:    the configured floor identifiers, in no particular order.
 * - `bottom`:    minimum floor identifier, found by scanning `floors`.
 * - `top`:       maximum floor identifier, found by scanning `floors`.
 * - `motion`:    command/query handle to the motion collaborator.
 */
pub struct Dispatcher<M: Motion> {
    registry: WaitingRegistry,
    elevators: Vec<ElevatorState>,
    floors: Vec<Floor>,
    bottom: Floor,
    top: Floor,
    motion: M,
}

impl<M: Motion> Dispatcher<M> {
    pub fn new(floors: &[Floor], n_elevators: usize, motion: M) -> Dispatcher<M> {
        assert!(!floors.is_empty(), "at least one floor must be configured");

        // The identifier set may be sparse, so the extremes come from a full
        // scan rather than from the count.
        let mut bottom = floors[0];
        let mut top = floors[0];
        for &floor in floors {
            if floor < bottom {
                bottom = floor;
            }
            if floor > top {
                top = floor;
            }
        }

        info!(
            "dispatcher managing {} elevators over {} floors (bottom {}, top {})",
            n_elevators,
            floors.len(),
            bottom,
            top
        );

        Dispatcher {
            registry: WaitingRegistry::new(),
            elevators: vec![ElevatorState::new(); n_elevators],
            floors: floors.to_vec(),
            bottom,
            top,
            motion,
        }
    }

    /// Feeds one external event through the policies. Synchronous: all
    /// decisions and mutations complete before this returns.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::CallButton { floor, direction } => self.call_button_pressed(floor, direction),
            Event::DestinationButton { elevator, floor } => {
                self.destination_button_pressed(elevator, floor)
            }
            Event::Approaching { elevator, floor } => self.approaching_floor(elevator, floor),
            Event::StoppedAt { elevator, floor } => self.stopped_at_floor(elevator, floor),
        }
    }

    /// Actor deployment of the same dispatcher: one event queue feeding one
    /// thread is the single ordering authority required for the
    /// no-double-pickup property. Hands the dispatcher back on terminate so
    /// the embedder can inspect final state.
    pub fn run(
        mut self,
        event_rx: cbc::Receiver<Event>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Dispatcher<M> {
        loop {
            cbc::select! {
                recv(event_rx) -> event => {
                    match event {
                        Ok(event) => self.handle_event(event),
                        Err(_) => {
                            info!("event channel closed, dispatcher stopping");
                            return self;
                        }
                    }
                }
                recv(terminate_rx) -> _ => {
                    info!("dispatcher terminated");
                    return self;
                }
            }
        }
    }

    /// A passenger on `floor` wants to travel `direction`.
    pub fn call_button_pressed(&mut self, floor: Floor, direction: Direction) {
        debug!("call button pressed: floor {} going {:?}", floor, direction);
        self.registry.set_waiting(floor, direction);

        // Resting cabs sit at the bottom; wake one for any call it cannot
        // serve from where it stands. The first idle id wins the tie-break.
        if floor != self.bottom {
            if let Some(idle) = self.first_idle() {
                info!("starting idle elevator {} for call at floor {}", idle, floor);
                self.stopped_at_floor(idle, self.bottom);
            }
        }
    }

    /// A passenger aboard `elevator` requested `floor`.
    pub fn destination_button_pressed(&mut self, elevator: ElevatorId, floor: Floor) {
        if !self.known(elevator) {
            return;
        }
        debug!(
            "destination button pressed: elevator {} to floor {}",
            elevator, floor
        );
        self.elevators[elevator].add_stop(floor);

        // An idle cab rests at the bottom floor; the generic stop path
        // starts it upward.
        if self.elevators[elevator].is_idle() {
            self.stopped_at_floor(elevator, self.bottom);
        }
    }

    /// The cab is about to reach a non-terminal `floor`; decide whether to
    /// intercept the shuttle run there.
    pub fn approaching_floor(&mut self, elevator: ElevatorId, floor: Floor) {
        if !self.known(elevator) {
            return;
        }
        let action = policies::stop_action(&self.context(), elevator, floor);
        debug!(
            "elevator {} approaching floor {}: {:?}",
            elevator, floor, action
        );
        match action {
            Action::Stop => self.commit_stop(elevator, floor),
            Action::Turn => self.turn_back(elevator, floor),
            Action::Pass => {}
        }
    }

    /// The cab halted at `floor`. Finalizes the departure direction and
    /// re-arms the shuttle run toward the matching extreme.
    pub fn stopped_at_floor(&mut self, elevator: ElevatorId, floor: Floor) {
        if !self.known(elevator) {
            return;
        }
        // The floor is reached: the commitment is spent.
        self.elevators[elevator].remove_stop(floor);

        let direction = policies::departure_direction(&self.context(), elevator, floor);
        self.elevators[elevator].set_direction(direction);
        self.registry.clear_waiting(floor, direction);

        debug!(
            "elevator {} stopped at floor {}, departing {:?}",
            elevator, floor, direction
        );
        self.emit_shuttle(elevator, direction);
    }

    /// Commits this cab to stop at `floor`: the stop set marks the claim for
    /// other cabs' decisions, the direction is finalized before the cab
    /// physically arrives, and the registry entry is cleared so no second
    /// cab commits to the same passenger.
    fn commit_stop(&mut self, elevator: ElevatorId, floor: Floor) {
        self.elevators[elevator].add_stop(floor);

        let direction = policies::departure_direction(&self.context(), elevator, floor);
        self.elevators[elevator].set_direction(direction);
        self.registry.clear_waiting(floor, direction);

        self.motion
            .set_indicators(elevator, direction == Direction::Up, direction == Direction::Down);
        self.motion.set_destination(elevator, floor);
    }

    /// Reverses without visiting `floor`: flip the heading and re-issue the
    /// shuttle destination.
    fn turn_back(&mut self, elevator: ElevatorId, floor: Floor) {
        if let Some(direction) = self.elevators[elevator].direction() {
            let reversed = direction.opposite();
            debug!(
                "elevator {} turning {:?} at floor {}",
                elevator, reversed, floor
            );
            self.elevators[elevator].set_direction(reversed);
            self.emit_shuttle(elevator, reversed);
        }
    }

    /// Indicators plus the shuttle destination: the extreme floor for
    /// `direction`.
    fn emit_shuttle(&mut self, elevator: ElevatorId, direction: Direction) {
        self.motion
            .set_indicators(elevator, direction == Direction::Up, direction == Direction::Down);
        let extreme = match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
        };
        self.motion.set_destination(elevator, extreme);
    }

    fn first_idle(&self) -> Option<ElevatorId> {
        self.elevators.iter().position(|state| state.is_idle())
    }

    fn known(&self, elevator: ElevatorId) -> bool {
        if elevator < self.elevators.len() {
            true
        } else {
            warn!("event for unknown elevator {}", elevator);
            false
        }
    }

    fn context(&self) -> PolicyContext<M> {
        PolicyContext {
            registry: &self.registry,
            elevators: &self.elevators,
            motion: &self.motion,
            bottom: self.bottom,
            top: self.top,
        }
    }

    /***************************************/
    /*        Read-only snapshots          */
    /***************************************/

    pub fn heading(&self, elevator: ElevatorId) -> Heading {
        self.elevators[elevator].heading()
    }

    pub fn stops(&self, elevator: ElevatorId) -> Vec<Floor> {
        self.elevators[elevator].stops()
    }

    pub fn registry(&self) -> &WaitingRegistry {
        &self.registry
    }

    pub fn motion(&self) -> &M {
        &self.motion
    }

    pub fn n_elevators(&self) -> usize {
        self.elevators.len()
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn bottom_floor(&self) -> Floor {
        self.bottom
    }

    pub fn top_floor(&self) -> Floor {
        self.top
    }
}
