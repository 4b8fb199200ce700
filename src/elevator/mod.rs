pub mod state;

pub use state::ElevatorState;
