pub mod waiting;

pub use waiting::WaitingRegistry;
