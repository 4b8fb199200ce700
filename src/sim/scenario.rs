/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Event;
use crate::unwrap_or_exit;

/// One scripted button press, fired when the simulation reaches `tick`.
/// Motion events are never scripted; the world generates them itself.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioStep {
    pub tick: u64,
    pub event: Event,
}

/// Loads a JSON scenario file and returns its steps in firing order.
pub fn load_scenario(path: &str) -> Vec<ScenarioStep> {
    let scenario_str = unwrap_or_exit!(fs::read_to_string(path), "failed to read scenario file");
    let mut steps: Vec<ScenarioStep> =
        unwrap_or_exit!(serde_json::from_str(&scenario_str), "failed to parse scenario file");
    steps.sort_by_key(|step| step.tick);
    steps
}
