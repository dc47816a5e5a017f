//! Core data models for the bracket scorer.

mod bracket;
mod entrant;
mod match_ref;
mod participant;
mod results;
mod rounds;

pub use bracket::*;
pub use entrant::*;
pub use match_ref::*;
pub use participant::*;
pub use results::*;
pub use rounds::*;
