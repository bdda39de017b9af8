pub mod fsm;

pub use fsm::Lift;
pub use fsm::LiftUnit;
