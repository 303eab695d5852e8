pub mod gate_decision;
pub mod token;

pub use gate_decision::GateDecision;
pub use token::{Token, TOKEN_HEADER};
