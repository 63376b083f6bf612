pub mod integrator;
pub mod physics;
pub mod state;
