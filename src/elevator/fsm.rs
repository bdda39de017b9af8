use crate::config::{FleetConfig, LiftConfig};
use crate::shared::{LiftKind, LiftState, TransitionError};
use std::thread::sleep;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Call(i32),
    Arrived,
    Malfunction,
}

// Entry action run when a state is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Move(i32),
    OpenDoors,
    Fault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: LiftState,
    pub entry: Option<Entry>,
}

/// The transition table. Pure: looks only at the state and the event.
pub fn transition(state: LiftState, event: &Event) -> Result<Transition, TransitionError> {
    match (state, event) {
        (LiftState::Stopped, Event::Call(floor)) => Ok(Transition {
            next: LiftState::Moving,
            entry: Some(Entry::Move(*floor)),
        }),
        (LiftState::Moving, Event::Arrived) => Ok(Transition {
            next: LiftState::Stopped,
            entry: Some(Entry::OpenDoors),
        }),
        (LiftState::Moving, Event::Malfunction) => Ok(Transition {
            next: LiftState::OutOfService,
            entry: Some(Entry::Fault),
        }),
        // Re-entry without side effects
        (LiftState::OutOfService, _) => Ok(Transition {
            next: LiftState::OutOfService,
            entry: None,
        }),
        (state, event) => Err(TransitionError::NotPermitted {
            state,
            event: *event,
        }),
    }
}

pub trait LiftUnit: Send {
    fn name(&self) -> &str;
    fn current_floor(&self) -> i32;
    fn are_doors_open(&self) -> bool;
    fn status(&self) -> LiftState;
    fn move_to(&mut self, floor: i32);
    fn set_obstruction(&mut self, obstructed: bool);
}

/**
 * Controls a single lift.
 *
 * The `Lift` owns one finite state machine. The public surface is a single command, `move_to`,
 * plus read access to floor, doors and state. Doors are only ever operated by the entry actions
 * of the state machine.
 *
 * A fault never reaches the caller as an error. When the lift tries to travel with its doors
 * open it fires `Malfunction` and stays in `OutOfService` for good. Callers inspect `status()`.
 *
 * # Fields
 * - `name`:            Configured name of the lift.
 * - `kind`:            Standard or express unit.
 * - `travel_time`:     Fixed cost of one move, independent of distance.
 * - `state`:           Current state of the machine.
 * - `current_floor`:   Floor the lift is at.
 * - `doors_open`:      Whether the doors are open.
 * - `obstructed`:      Door obstruction sensor. An obstructed door cannot be closed.
 */
#[derive(Debug)]
pub struct Lift {
    name: String,
    kind: LiftKind,
    travel_time: Duration,
    state: LiftState,
    current_floor: i32,
    doors_open: bool,
    obstructed: bool,
}

impl Lift {
    pub fn new(name: impl Into<String>, kind: LiftKind, travel_time: Duration) -> Lift {
        Lift {
            name: name.into(),
            kind,
            travel_time,
            state: LiftState::Stopped,
            current_floor: 0,
            doors_open: false,
            obstructed: false,
        }
    }

    pub fn from_config(fleet: &FleetConfig, config: &LiftConfig) -> Lift {
        Lift::new(config.name.clone(), config.kind, fleet.travel_time_of(config))
    }

    pub fn kind(&self) -> LiftKind {
        self.kind
    }

    pub fn travel_time(&self) -> Duration {
        self.travel_time
    }

    /// Fires `event` and every follow-up event produced by entry actions.
    pub(crate) fn fire(&mut self, event: Event) -> Result<LiftState, TransitionError> {
        let mut pending = Some(event);

        while let Some(event) = pending.take() {
            let step = transition(self.state, &event)?;
            log::debug!(
                "{}: {} --{:?}--> {}",
                self.name,
                self.state,
                event,
                step.next
            );
            self.state = step.next;

            pending = match step.entry {
                Some(entry) => self.enter(entry),
                None => None,
            };
        }

        Ok(self.state)
    }

    fn enter(&mut self, entry: Entry) -> Option<Event> {
        match entry {
            Entry::Move(floor) => self.travel(floor),
            Entry::OpenDoors => {
                self.open_doors();
                None
            }
            Entry::Fault => {
                log::error!(
                    "{} is out of service at floor {} (doors open: {})",
                    self.name,
                    self.current_floor,
                    self.doors_open
                );
                None
            }
        }
    }

    // Entry action of Moving. Returns the event that ends the move.
    fn travel(&mut self, floor: i32) -> Option<Event> {
        if self.doors_open {
            self.close_doors();
        }

        if floor == self.current_floor {
            return Some(Event::Arrived);
        }

        self.go_directly_to_floor(floor)
    }

    fn go_directly_to_floor(&mut self, floor: i32) -> Option<Event> {
        if self.doors_open {
            return Some(Event::Malfunction);
        }

        sleep(self.travel_time);
        self.current_floor = floor;

        Some(Event::Arrived)
    }

    fn open_doors(&mut self) {
        self.doors_open = true;
    }

    fn close_doors(&mut self) {
        if self.obstructed {
            log::warn!("{}: doors obstructed, cannot close", self.name);
            return;
        }
        self.doors_open = false;
    }
}

impl LiftUnit for Lift {
    fn name(&self) -> &str {
        &self.name
    }

    fn current_floor(&self) -> i32 {
        self.current_floor
    }

    fn are_doors_open(&self) -> bool {
        self.doors_open
    }

    fn status(&self) -> LiftState {
        self.state
    }

    // The command is always accepted. Whether it completed shows in `status()`.
    fn move_to(&mut self, floor: i32) {
        if let Err(e) = self.fire(Event::Call(floor)) {
            log::warn!("{}: call to floor {} rejected: {}", self.name, floor, e);
        }
    }

    // Door obstruction sensor input
    fn set_obstruction(&mut self, obstructed: bool) {
        self.obstructed = obstructed;
    }
}
