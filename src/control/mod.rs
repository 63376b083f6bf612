pub mod input;
pub mod parameters;
pub mod simulation;
