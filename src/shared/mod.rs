pub mod error;
pub mod macros;
pub mod structs;

pub use error::CallError;
pub use error::ConfigError;
pub use error::FleetError;
pub use error::TransitionError;
pub use structs::Dispatch;
pub use structs::LiftKind;
pub use structs::LiftState;
pub use structs::StatusRecord;
