/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::Dispatcher;
use crate::elevator::LiftUnit;
use crate::shared::{CallError, Dispatch, StatusRecord};

/***************************************/
/*               Enums                 */
/***************************************/
pub enum Request {
    Call {
        floor: i32,
        reply: cbc::Sender<Result<Dispatch, CallError>>,
    },
    Obstruction {
        lift: usize,
        obstructed: bool,
        reply: cbc::Sender<Result<(), CallError>>,
    },
    Status {
        reply: cbc::Sender<Vec<StatusRecord>>,
    },
}

enum Event {
    RequestReceived(Request),
    Terminate,
}

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Owns the dispatcher and serializes every fleet operation.
 *
 * Requests are handled one at a time in arrival order, so a lift never has more than one move
 * in flight. The loop ends on a terminate signal or once every `FleetClient` is dropped.
 *
 * # Fields
 * - `dispatcher`:              The fleet and its selection policy.
 * - `request_rx`:              Receives calls and status queries from clients.
 * - `coordinator_terminate_rx`: Stops the main loop.
 */
pub struct Coordinator<L: LiftUnit> {
    dispatcher: Dispatcher<L>,
    request_rx: cbc::Receiver<Request>,
    coordinator_terminate_rx: cbc::Receiver<()>,
}

impl<L: LiftUnit> Coordinator<L> {
    pub fn new(
        dispatcher: Dispatcher<L>,
        request_rx: cbc::Receiver<Request>,
        coordinator_terminate_rx: cbc::Receiver<()>,
    ) -> Coordinator<L> {
        Coordinator {
            dispatcher,
            request_rx,
            coordinator_terminate_rx,
        }
    }

    /// Runs until terminated and hands the dispatcher back.
    pub fn run(mut self) -> Dispatcher<L> {
        log::info!(
            "Coordinator started with {} lifts",
            self.dispatcher.lifts().len()
        );

        // Main loop
        loop {
            match self.wait_for_event() {
                Event::RequestReceived(request) => self.handle_request(request),
                Event::Terminate => break,
            }
        }

        log::info!("Coordinator terminated");
        self.dispatcher
    }

    fn handle_request(&mut self, request: Request) {
        match request {
            Request::Call { floor, reply } => {
                let result = self.dispatcher.call(floor);
                if reply.send(result).is_err() {
                    log::warn!("Caller for floor {} left before the reply", floor);
                }
            }
            Request::Obstruction {
                lift,
                obstructed,
                reply,
            } => {
                let result = self.dispatcher.set_obstruction(lift, obstructed);
                if reply.send(result).is_err() {
                    log::warn!("Caller left before the obstruction reply");
                }
            }
            Request::Status { reply } => {
                if reply.send(self.dispatcher.get_status()).is_err() {
                    log::warn!("Caller left before the status reply");
                }
            }
        }
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.request_rx) -> request => {
                match request {
                    Ok(request) => Event::RequestReceived(request),
                    // Every client is gone, nobody can reach the fleet anymore
                    Err(_) => Event::Terminate,
                }
            },

            recv(self.coordinator_terminate_rx) -> _ => Event::Terminate,
        }
    }
}

/// Cloneable handle for talking to a running `Coordinator`.
#[derive(Clone)]
pub struct FleetClient {
    request_tx: cbc::Sender<Request>,
}

impl FleetClient {
    pub fn new(request_tx: cbc::Sender<Request>) -> FleetClient {
        FleetClient { request_tx }
    }

    /// Blocks until the selected lift has finished (or faulted) its move.
    pub fn call(&self, floor: i32) -> Result<Dispatch, CallError> {
        let (reply, reply_rx) = cbc::bounded(1);
        self.request_tx
            .send(Request::Call { floor, reply })
            .map_err(|_| CallError::CoordinatorGone)?;
        reply_rx.recv().map_err(|_| CallError::CoordinatorGone)?
    }

    pub fn set_obstruction(&self, lift: usize, obstructed: bool) -> Result<(), CallError> {
        let (reply, reply_rx) = cbc::bounded(1);
        self.request_tx
            .send(Request::Obstruction {
                lift,
                obstructed,
                reply,
            })
            .map_err(|_| CallError::CoordinatorGone)?;
        reply_rx.recv().map_err(|_| CallError::CoordinatorGone)?
    }

    pub fn status(&self) -> Result<Vec<StatusRecord>, CallError> {
        let (reply, reply_rx) = cbc::bounded(1);
        self.request_tx
            .send(Request::Status { reply })
            .map_err(|_| CallError::CoordinatorGone)?;
        reply_rx.recv().map_err(|_| CallError::CoordinatorGone)
    }
}
