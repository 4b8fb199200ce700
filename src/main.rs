/* 3rd party libraries */
use clap::{Arg, Command};
use log::info;

/* Custom libraries */
use group_dispatch::config;
use group_dispatch::dispatcher::Dispatcher;
use group_dispatch::shared::Direction;
use group_dispatch::sim::{load_scenario, SimHandle};

/* Main */
fn main() {
    env_logger::init();

    let matches = Command::new("group-dispatch")
        .about("Group-dispatch controller demo over the tick-based motion model")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .takes_value(true)
                .default_value("scenarios/basic.json")
                .help("Path to the JSON button-press scenario"),
        )
        .get_matches();

    // Load the configuration and the scripted button presses
    let config = config::load_config(matches.value_of("config").unwrap());
    let scenario = load_scenario(matches.value_of("scenario").unwrap());

    // The simulated motion collaborator, shared with the dispatcher
    let world = SimHandle::new(
        &config.building.floors,
        config.fleet.n_elevators,
        config.fleet.capacity,
    );
    let mut dispatcher = Dispatcher::new(
        &config.building.floors,
        config.fleet.n_elevators,
        world.clone(),
    );

    // Cooperative event loop: the world invokes the dispatcher synchronously
    // per event, so every decision completes before the next event lands.
    let mut steps = scenario.iter().peekable();
    for tick in 0..config.sim.max_ticks {
        while let Some(step) = steps.peek() {
            if step.tick > tick {
                break;
            }
            info!("tick {}: {:?}", tick, step.event);
            dispatcher.handle_event(step.event);
            steps.next();
        }

        for event in world.step() {
            dispatcher.handle_event(event);
        }
    }

    // Final fleet report
    for elevator in 0..dispatcher.n_elevators() {
        info!(
            "elevator {}: floor {}, heading {:?}, pending stops {:?}",
            elevator,
            world.position(elevator),
            dispatcher.heading(elevator),
            dispatcher.stops(elevator),
        );
    }
    let unserved_up = dispatcher.registry().waiting_floors(Direction::Up);
    let unserved_down = dispatcher.registry().waiting_floors(Direction::Down);
    if unserved_up.is_empty() && unserved_down.is_empty() {
        info!("all calls served after {} ticks", config.sim.max_ticks);
    } else {
        info!(
            "unserved calls after {} ticks: up {:?}, down {:?}",
            config.sim.max_ticks, unserved_up, unserved_down
        );
    }
}
