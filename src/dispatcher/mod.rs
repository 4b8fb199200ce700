pub mod dispatcher;
pub mod dispatcher_tests;
pub mod policies;

pub use dispatcher::Dispatcher;
