/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;
use crate::unwrap_or_exit;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub building: BuildingConfig,
    pub fleet: FleetConfig,
    pub sim: SimConfig,
}

#[derive(Deserialize, Clone)]
pub struct BuildingConfig {
    /// Floor identifiers served by the fleet. Neither contiguous nor sorted;
    /// the dispatcher finds the extremes itself.
    pub floors: Vec<Floor>,
}

#[derive(Deserialize, Clone)]
pub struct FleetConfig {
    pub n_elevators: usize,
    pub capacity: usize,
}

#[derive(Deserialize, Clone)]
pub struct SimConfig {
    pub max_ticks: u64,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Config {
    let config_str = unwrap_or_exit!(fs::read_to_string(path), "failed to read configuration file");
    let config: Config = unwrap_or_exit!(toml::from_str(&config_str), "failed to parse configuration file");

    if config.building.floors.is_empty() {
        log::error!("configuration lists no floors");
        std::process::exit(1);
    }
    if config.fleet.n_elevators == 0 {
        log::error!("configuration lists no elevators");
        std::process::exit(1);
    }

    config
}
