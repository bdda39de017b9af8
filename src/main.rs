/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use std::io::{self, BufRead};
use std::path::Path;
use std::thread::Builder;

/* Custom libraries */
use config::Config;
use coordinator::{Coordinator, Dispatcher, FleetClient, Request};
use elevator::{Lift, LiftUnit};
use shared::CallError;

/* Modules */
mod config;
mod coordinator;
mod elevator;
mod shared;

/* Commands read from stdin */
#[derive(Debug, PartialEq)]
enum Input {
    Call(i32),
    Obstruct(usize, bool),
    Status,
    Quit,
}

fn parse_command(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let command = match (words.next()?, words.next()) {
        ("call", Some(floor)) => Input::Call(floor.parse().ok()?),
        ("status", None) => Input::Status,
        ("obstruct", Some(lift)) => {
            Input::Obstruct(lift.parse().ok()?, parse_switch(words.next()?)?)
        }
        ("quit", None) | ("exit", None) => Input::Quit,
        _ => return None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

fn parse_switch(word: &str) -> Option<bool> {
    match word {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

fn load(config_path: Option<&str>) -> Config {
    match config_path {
        Some(path) => unwrap_or_exit!(config::load_config(Path::new(path))),
        None if Path::new(config::DEFAULT_CONFIG_PATH).exists() => {
            unwrap_or_exit!(config::load_config(Path::new(config::DEFAULT_CONFIG_PATH)))
        }
        None => {
            log::info!("No configuration file, using the reference fleet");
            Config::reference()
        }
    }
}

fn serve(client: &FleetClient) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Input::Call(floor)) => match client.call(floor) {
                Ok(dispatch) if dispatch.faulted() => println!(
                    "{} (#{}) faulted at floor {} on the way to {}",
                    dispatch.name, dispatch.lift, dispatch.floor, floor
                ),
                Ok(dispatch) => println!(
                    "called {} (#{}) to {} ({})",
                    dispatch.name, dispatch.lift, dispatch.floor, dispatch.status
                ),
                Err(CallError::NoLiftAvailable { floor }) => {
                    println!("no lift available for floor {}", floor)
                }
                Err(e) => {
                    log::error!("{}", e);
                    break;
                }
            },
            Some(Input::Obstruct(lift, obstructed)) => {
                match client.set_obstruction(lift, obstructed) {
                    Ok(()) => println!("lift #{} obstruction {}", lift, obstructed),
                    Err(CallError::CoordinatorGone) => {
                        log::error!("{}", CallError::CoordinatorGone);
                        break;
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Some(Input::Status) => match client.status() {
                Ok(status) => println!("{}", unwrap_or_exit!(serde_json::to_string(&status))),
                Err(e) => {
                    log::error!("{}", e);
                    break;
                }
            },
            Some(Input::Quit) => break,
            None => log::warn!("Unknown command: {:?}", line),
        }
    }

    Ok(())
}

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("lift-fleet")
        .about("Dispatches floor calls to a fleet of lifts")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .value_name("PATH")
                .help("Fleet configuration file"),
        )
        .get_matches();

    // Load the configuration
    let config = load(matches.value_of("config"));

    // Build the fleet
    let lifts = config
        .fleet
        .lifts
        .iter()
        .map(|lift| Lift::from_config(&config.fleet, lift))
        .collect::<Vec<Lift>>();
    for lift in &lifts {
        log::info!(
            "{} ({:?}) travel time {:?}",
            lift.name(),
            lift.kind(),
            lift.travel_time()
        );
    }
    let dispatcher = unwrap_or_exit!(Dispatcher::new(lifts));

    // Initialize channels
    let (request_tx, request_rx) = cbc::unbounded::<Request>();
    let (coordinator_terminate_tx, coordinator_terminate_rx) = cbc::unbounded::<()>();

    // Start the coordinator
    let coordinator = Coordinator::new(dispatcher, request_rx, coordinator_terminate_rx);
    let coordinator_thread = Builder::new()
        .name("coordinator".into())
        .spawn(move || coordinator.run())?;

    let client = FleetClient::new(request_tx);
    serve(&client)?;

    let _ = coordinator_terminate_tx.send(());
    if coordinator_thread.join().is_err() {
        log::error!("Coordinator thread panicked");
    }

    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
