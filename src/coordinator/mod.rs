pub mod coordinator;
pub mod coordinator_tests;
pub mod dispatcher;

pub use coordinator::Coordinator;
pub use coordinator::FleetClient;
pub use coordinator::Request;
pub use dispatcher::Dispatcher;
