/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftState {
    Stopped,
    Moving,
    OutOfService,
}

impl LiftState {
    pub fn name(&self) -> &'static str {
        match *self {
            LiftState::Stopped => "Stopped",
            LiftState::Moving => "Moving",
            LiftState::OutOfService => "OutOfService",
        }
    }
}

impl fmt::Display for LiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LiftKind {
    #[default]
    Standard,
    Express,
}

// One entry of the fleet snapshot handed to the presentation layer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub floor: i32,
    pub status: String,
}

impl StatusRecord {
    pub fn new(floor: i32, status: LiftState) -> StatusRecord {
        StatusRecord {
            floor,
            status: status.name().to_string(),
        }
    }
}

/**
 * Outcome of an accepted call.
 *
 * # Fields
 * - `lift`:    Index of the commanded lift in fleet order.
 * - `name`:    Configured name of the commanded lift.
 * - `floor`:   Floor the lift reports after the move.
 * - `status`:  State the lift ended in. `OutOfService` means the move faulted.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub lift: usize,
    pub name: String,
    pub floor: i32,
    pub status: LiftState,
}

impl Dispatch {
    pub fn faulted(&self) -> bool {
        self.status == LiftState::OutOfService
    }
}
