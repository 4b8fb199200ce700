pub mod scenario;
pub mod world;

pub use scenario::load_scenario;
pub use scenario::ScenarioStep;
pub use world::SimHandle;
