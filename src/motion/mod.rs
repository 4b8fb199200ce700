use crate::shared::{ElevatorId, Floor};

/**
 * Command and query seam to the motion collaborator.
 *
 * The motion system (hardware driver or simulation) owns cab positions,
 * capacity and travel timing. The dispatcher reads those through the query
 * half and drives the cabs through the command half; it never learns about
 * acceleration or arrival timing, only the events the collaborator fires.
 */
pub trait Motion {
    /// Floor the cab last registered at or passed.
    fn current_floor(&self, elevator: ElevatorId) -> Floor;

    /// Remaining passenger slots in the cab; 0 means full.
    fn residual_capacity(&self, elevator: ElevatorId) -> usize;

    /// Sets the two travel indicator lights.
    fn set_indicators(&mut self, elevator: ElevatorId, up: bool, down: bool);

    /// Replaces the cab's destination queue with the single given floor.
    fn set_destination(&mut self, elevator: ElevatorId, floor: Floor);
}

/***************************************/
/*            Test support             */
/***************************************/
