use log::{debug, info, trace};

use super::parameters::LaunchParameters;
use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::TrajectoryReporter;
use crate::trajectory_system::integrator::Rk4;
use crate::trajectory_system::physics::{AccelerationModel, AltitudeGravity};
use crate::trajectory_system::state::State;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// Simulation time ran out while the projectile was still airborne.
    TimeElapsed,
    /// Altitude went below ground level.
    GroundImpact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSummary {
    pub steps: usize,
    pub elapsed_time: f64,
    pub max_altitude: f64,
    pub time_of_max_altitude: f64,
    pub downrange_distance: f64,
    pub final_state: State,
    pub termination: Termination,
}

impl FlightSummary {
    pub fn impacted(&self) -> bool {
        self.termination == Termination::GroundImpact
    }
}

/// Fixed-step driving loop around the integrator.
pub struct Simulation<M: AccelerationModel = AltitudeGravity> {
    integrator: Rk4<M>,
    state: State,
    elapsed_time: f64,
    time_step: f64,
    final_time: f64,
    steps: usize,
}

impl Simulation<AltitudeGravity> {
    pub fn new(parameters: &LaunchParameters) -> Result<Self, SimulationError> {
        Simulation::with_integrator(parameters, Rk4::default())
    }
}

impl<M: AccelerationModel> Simulation<M> {
    pub fn with_integrator(
        parameters: &LaunchParameters,
        integrator: Rk4<M>,
    ) -> Result<Self, SimulationError> {
        parameters.validate()?;

        Ok(Simulation {
            integrator,
            state: parameters.initial_state(),
            elapsed_time: 0.0,
            time_step: parameters.time_step,
            final_time: parameters.final_time,
            steps: 0,
        })
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// True while time remains and the projectile has not gone below ground.
    pub fn should_continue(&self) -> bool {
        self.elapsed_time < self.final_time && self.state.is_above_ground()
    }

    /// Takes one integration step and advances the clock.
    pub fn advance(&mut self) {
        self.integrator.step(&mut self.state, self.time_step);
        self.elapsed_time += self.time_step;
        self.steps += 1;
        trace!(
            "t = {:.5}: y = {:.3}, x = {:.3}",
            self.elapsed_time,
            self.state.vert_pos,
            self.state.horz_pos
        );
    }

    /// Steps until time runs out or the projectile hits the ground, reporting
    /// every step.
    pub fn run<R: TrajectoryReporter>(
        &mut self,
        reporter: &mut R,
    ) -> Result<FlightSummary, SimulationError> {
        info!(
            "Starting simulation: dt = {} s, final time = {} s, altitude = {} m",
            self.time_step, self.final_time, self.state.vert_pos
        );

        let mut max_altitude = self.state.vert_pos;
        let mut time_of_max_altitude = self.elapsed_time;

        while self.should_continue() {
            self.advance();
            reporter.report(self.elapsed_time, &self.state)?;

            if self.state.vert_pos > max_altitude {
                max_altitude = self.state.vert_pos;
                time_of_max_altitude = self.elapsed_time;
            }
        }

        let termination = if self.state.is_above_ground() {
            Termination::TimeElapsed
        } else {
            debug!(
                "Ground impact after {} steps at t = {:.5} s, x = {:.3} m",
                self.steps, self.elapsed_time, self.state.horz_pos
            );
            Termination::GroundImpact
        };

        let summary = FlightSummary {
            steps: self.steps,
            elapsed_time: self.elapsed_time,
            max_altitude,
            time_of_max_altitude,
            downrange_distance: self.state.horz_pos,
            final_state: self.state,
            termination,
        };
        info!(
            "Simulation finished ({:?}): {} steps, apex {:.3} m, downrange {:.3} m",
            summary.termination, summary.steps, summary.max_altitude, summary.downrange_distance
        );

        Ok(summary)
    }
}
