pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::input::{acquire_parameters, prompt_parameters, ARGUMENTS_REJECTED};
pub use control::parameters::{LaunchArgs, LaunchParameters};
pub use control::simulation::{FlightSummary, Simulation, Termination};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::integrator::{evaluate, evaluate_at, step, Rk4};
pub use trajectory_system::physics::{
    horizontal_acceleration, vertical_acceleration, AccelerationModel, AltitudeGravity,
    UniformGravity,
};
pub use trajectory_system::state::{Derivative, State};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{Telemetry, TrajectoryReporter};
