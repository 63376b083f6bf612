use std::ffi::OsString;

use clap::Parser;

use crate::constants::{MAX_FIRING_ANGLE, MIN_FIRING_ANGLE};
use crate::errors::SimulationError;
use crate::trajectory_system::state::State;

/// Positional command line of the `main` binary.
#[derive(Parser, Debug)]
#[command(name = "main")]
#[command(about = "Fixed-step RK4 projectile simulator under altitude-dependent gravity", long_about = None)]
pub struct LaunchArgs {
    /// Initial altitude (m)
    #[arg(allow_negative_numbers = true)]
    pub altitude: f64,

    /// Initial velocity (m/s)
    #[arg(allow_negative_numbers = true)]
    pub velocity: f64,

    /// Firing angle in degrees (0-90)
    #[arg(allow_negative_numbers = true)]
    pub angle: f64,

    /// Time step (s) per integration
    #[arg(allow_negative_numbers = true)]
    pub time_step: f64,

    /// Final time (s)
    #[arg(allow_negative_numbers = true)]
    pub final_time: f64,
}

impl From<LaunchArgs> for LaunchParameters {
    fn from(args: LaunchArgs) -> Self {
        LaunchParameters::new(
            args.altitude,
            args.velocity,
            args.angle,
            args.time_step,
            args.final_time,
        )
    }
}

/// Initial conditions of a single shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub initial_altitude: f64, // m
    pub initial_velocity: f64, // m/s
    pub firing_angle: f64,     // degrees above horizontal
    pub time_step: f64,        // s
    pub final_time: f64,       // s
}

impl LaunchParameters {
    pub fn new(
        initial_altitude: f64,
        initial_velocity: f64,
        firing_angle: f64,
        time_step: f64,
        final_time: f64,
    ) -> Self {
        LaunchParameters {
            initial_altitude,
            initial_velocity,
            firing_angle,
            time_step,
            final_time,
        }
    }

    /// Parses a full command line (program name first) holding altitude,
    /// velocity, angle, time step and final time, then validates the result.
    pub fn from_args<I, T>(args: I) -> Result<Self, SimulationError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let parameters = LaunchParameters::from(LaunchArgs::try_parse_from(args)?);
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("initial altitude", self.initial_altitude),
            ("initial velocity", self.initial_velocity),
            ("firing angle", self.firing_angle),
            ("time step", self.time_step),
            ("final time", self.final_time),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::InvalidParameter(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        validate_firing_angle(self.firing_angle)?;
        validate_time_step(self.time_step)?;
        validate_final_time(self.final_time)?;
        Ok(())
    }

    pub fn firing_angle_radians(&self) -> f64 {
        self.firing_angle.to_radians()
    }

    pub fn initial_state(&self) -> State {
        State::from_launch(
            self.initial_altitude,
            self.initial_velocity,
            self.firing_angle_radians(),
        )
    }
}

pub fn parse_value(text: &str) -> Result<f64, SimulationError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| SimulationError::InvalidNumber(text.to_string()))
}

pub fn validate_firing_angle(angle: f64) -> Result<(), SimulationError> {
    if !(MIN_FIRING_ANGLE..=MAX_FIRING_ANGLE).contains(&angle) {
        return Err(SimulationError::InvalidParameter(format!(
            "firing angle must be between {} and {} degrees, got {}",
            MIN_FIRING_ANGLE, MAX_FIRING_ANGLE, angle
        )));
    }
    Ok(())
}

pub fn validate_time_step(time_step: f64) -> Result<(), SimulationError> {
    if time_step.is_nan() || time_step <= 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "time step must be positive, got {}",
            time_step
        )));
    }
    Ok(())
}

pub fn validate_final_time(final_time: f64) -> Result<(), SimulationError> {
    if final_time.is_nan() || final_time < 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "final time must not be negative, got {}",
            final_time
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clap::error::ErrorKind;

    fn argument_error_kind(result: Result<LaunchParameters, SimulationError>) -> ErrorKind {
        match result {
            Err(SimulationError::Arguments(e)) => e.kind(),
            other => panic!("Expected an argument error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_args_reads_positional_order() {
        let parameters =
            LaunchParameters::from_args(["main", "10", "100", "45", "0.01", "20"]).unwrap();

        assert_eq!(parameters.initial_altitude, 10.0);
        assert_eq!(parameters.initial_velocity, 100.0);
        assert_eq!(parameters.firing_angle, 45.0);
        assert_eq!(parameters.time_step, 0.01);
        assert_eq!(parameters.final_time, 20.0);
    }

    #[test]
    fn test_from_args_rejects_wrong_count() {
        let missing = LaunchParameters::from_args(["main", "10", "100", "45", "0.01"]);
        assert_eq!(argument_error_kind(missing), ErrorKind::MissingRequiredArgument);

        let none = LaunchParameters::from_args(["main"]);
        assert_eq!(argument_error_kind(none), ErrorKind::MissingRequiredArgument);

        let extra = LaunchParameters::from_args(["main", "1", "2", "3", "4", "5", "6"]);
        assert_eq!(argument_error_kind(extra), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_from_args_rejects_garbage() {
        let result = LaunchParameters::from_args(["main", "10", "fast", "45", "0.01", "20"]);
        assert_eq!(argument_error_kind(result), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_from_args_accepts_negative_altitude() {
        let parameters =
            LaunchParameters::from_args(["main", "-5", "100", "45", "0.01", "20"]).unwrap();
        assert_eq!(parameters.initial_altitude, -5.0);
    }

    #[test]
    fn test_from_args_validates_range() {
        let result = LaunchParameters::from_args(["main", "0", "100", "95", "0.01", "20"]);
        assert!(matches!(result, Err(SimulationError::InvalidParameter(_))));

        let result = LaunchParameters::from_args(["main", "0", "100", "45", "inf", "20"]);
        assert!(matches!(result, Err(SimulationError::InvalidParameter(_))));
    }

    #[test]
    fn test_help_is_reported_as_argument_error() {
        let result = LaunchParameters::from_args(["main", "--help"]);
        assert_eq!(argument_error_kind(result), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_angle_bounds_are_inclusive() {
        assert!(validate_firing_angle(0.0).is_ok());
        assert!(validate_firing_angle(90.0).is_ok());
        assert!(validate_firing_angle(-0.1).is_err());
        assert!(validate_firing_angle(90.1).is_err());
        assert!(validate_firing_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_time_step_must_be_positive() {
        assert!(validate_time_step(0.001).is_ok());
        assert!(validate_time_step(0.0).is_err());
        assert!(validate_time_step(-0.01).is_err());
    }

    #[test]
    fn test_final_time_may_be_zero() {
        assert!(validate_final_time(0.0).is_ok());
        assert!(validate_final_time(-1.0).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let parameters = LaunchParameters::new(f64::INFINITY, 100.0, 45.0, 0.01, 10.0);
        assert!(parameters.validate().is_err());

        let parameters = LaunchParameters::new(0.0, f64::NAN, 45.0, 0.01, 10.0);
        assert!(parameters.validate().is_err());
    }

    #[test]
    fn test_initial_state_from_parameters() {
        let parameters = LaunchParameters::new(25.0, 200.0, 30.0, 0.1, 10.0);
        let state = parameters.initial_state();

        assert_eq!(state.vert_pos, 25.0);
        assert_eq!(state.horz_pos, 0.0);
        assert_relative_eq!(state.vert_vel, 100.0, epsilon = 1e-9);
        assert_relative_eq!(state.horz_vel, 173.20508075688772, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_value_trims_whitespace() {
        assert_eq!(parse_value("  12.5\n").unwrap(), 12.5);
        assert!(parse_value("").is_err());
    }
}
