pub mod macros;
pub mod structs;

pub use structs::Action;
pub use structs::Direction;
pub use structs::ElevatorId;
pub use structs::Event;
pub use structs::Floor;
pub use structs::Heading;
