/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::path::PathBuf;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::fsm::Event;
use crate::shared::LiftState;

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration contains no lifts")]
    EmptyFleet,

    #[error("Lift name '{0}' is configured more than once")]
    DuplicateLift(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FleetError {
    #[error("A dispatcher needs at least one lift")]
    EmptyFleet,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("No lift available for floor {floor}")]
    NoLiftAvailable { floor: i32 },

    #[error("No lift with index {lift}")]
    UnknownLift { lift: usize },

    #[error("Coordinator is no longer running")]
    CoordinatorGone,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Event {event:?} is not permitted in state {state}")]
    NotPermitted { state: LiftState, event: Event },
}
