mod checkers;
pub mod messages;

pub use checkers::*;
