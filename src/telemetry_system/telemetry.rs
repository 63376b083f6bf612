use std::io::Write;

use log::info;

use crate::constants::{STATE_PRECISION, TIME_PRECISION};
use crate::control::simulation::FlightSummary;
use crate::errors::SimulationError;
use crate::trajectory_system::state::State;

pub const END_OF_SIMULATION: &str = "End of simulation...";

/// Receives the state after every completed integration step.
pub trait TrajectoryReporter {
    fn report(&mut self, elapsed_time: f64, state: &State) -> Result<(), SimulationError>;
}

/// Writes each step as fixed-point text and keeps a few running figures.
pub struct Telemetry<W: Write> {
    writer: W,
    records: usize,
    max_speed: f64,
}

impl<W: Write> Telemetry<W> {
    pub fn new(writer: W) -> Self {
        Telemetry {
            writer,
            records: 0,
            max_speed: 0.0,
        }
    }

    fn format_step(elapsed_time: f64, state: &State) -> String {
        format!(
            "t = {:.tp$}\n\
             \ty = {:.sp$}\ty' = {:.sp$}\n\
             \tx = {:.sp$}\tx' = {:.sp$}\n",
            elapsed_time,
            state.vert_pos,
            state.vert_vel,
            state.horz_pos,
            state.horz_vel,
            tp = TIME_PRECISION,
            sp = STATE_PRECISION
        )
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn summary_lines(&self, summary: &FlightSummary) -> Vec<String> {
        vec![
            format!("Steps: {}", summary.steps),
            format!("Elapsed Time: {:.5} s", summary.elapsed_time),
            format!(
                "Max Altitude: {:.3} m at t = {:.5} s",
                summary.max_altitude, summary.time_of_max_altitude
            ),
            format!("Downrange Distance: {:.3} m", summary.downrange_distance),
            format!("Max Speed: {:.3} m/s", self.max_speed),
            format!("Ground Impact: {}", summary.impacted()),
        ]
    }

    /// Sends the flight summary to the log, leaving the record stream untouched.
    pub fn log_summary(&self, summary: &FlightSummary) {
        info!("--- Flight Summary ---");
        for line in self.summary_lines(summary) {
            info!("{}", line);
        }
    }

    /// Writes the closing line and hands back the writer.
    pub fn finish(mut self) -> Result<W, SimulationError> {
        writeln!(self.writer, "{}", END_OF_SIMULATION)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TrajectoryReporter for Telemetry<W> {
    fn report(&mut self, elapsed_time: f64, state: &State) -> Result<(), SimulationError> {
        self.writer.write_all(Self::format_step(elapsed_time, state).as_bytes())?;

        self.records += 1;
        let speed = state.speed();
        if speed > self.max_speed {
            self.max_speed = speed;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::simulation::Termination;

    #[test]
    fn test_step_format_is_fixed_point() {
        let state = State::new(0.706507, 0.707107, 70.612612, 70.710678);
        let text = Telemetry::<Vec<u8>>::format_step(0.01, &state);

        assert_eq!(
            text,
            "t = 0.01000\n\
             \ty = 0.706507000\ty' = 70.612612000\n\
             \tx = 0.707107000\tx' = 70.710678000\n"
        );
    }

    #[test]
    fn test_report_writes_and_tracks() {
        let mut telemetry = Telemetry::new(Vec::new());

        telemetry.report(0.5, &State::new(10.0, 2.0, 3.0, 4.0)).unwrap();
        telemetry.report(1.0, &State::new(12.0, 4.0, 0.0, 1.0)).unwrap();

        assert_eq!(telemetry.records(), 2);
        assert_eq!(telemetry.max_speed(), 5.0);

        let output = String::from_utf8(telemetry.finish().unwrap()).unwrap();
        assert!(output.starts_with("t = 0.50000\n"));
        assert!(output.contains("t = 1.00000\n\ty = 12.000000000\ty' = 0.000000000\n"));
        assert!(output.ends_with("End of simulation...\n"));
    }

    #[test]
    fn test_negative_values_keep_sign() {
        let text = Telemetry::<Vec<u8>>::format_step(4.55, &State::new(-0.5, 0.0, -44.6, 0.0));
        assert!(text.contains("\ty = -0.500000000\ty' = -44.600000000\n"));
    }

    fn dropped_ball_summary() -> FlightSummary {
        FlightSummary {
            steps: 91,
            elapsed_time: 4.55,
            max_altitude: 100.0,
            time_of_max_altitude: 0.0,
            downrange_distance: 0.0,
            final_state: State::new(-1.5, 0.0, -44.6, 0.0),
            termination: Termination::GroundImpact,
        }
    }

    #[test]
    fn test_summary_lines() {
        let mut telemetry = Telemetry::new(Vec::new());
        telemetry.report(4.55, &State::new(-1.5, 0.0, -44.6, 0.0)).unwrap();

        let lines = telemetry.summary_lines(&dropped_ball_summary());

        assert_eq!(lines[0], "Steps: 91");
        assert_eq!(lines[2], "Max Altitude: 100.000 m at t = 0.00000 s");
        assert_eq!(lines[4], "Max Speed: 44.600 m/s");
        assert_eq!(lines.last().unwrap(), "Ground Impact: true");
    }

    #[test]
    fn test_summary_stays_out_of_the_record_stream() {
        let state = State::new(-1.5, 0.0, -44.6, 0.0);
        let mut telemetry = Telemetry::new(Vec::new());

        telemetry.report(4.55, &state).unwrap();
        telemetry.log_summary(&dropped_ball_summary());
        let output = String::from_utf8(telemetry.finish().unwrap()).unwrap();

        let expected = format!(
            "{}{}\n",
            Telemetry::<Vec<u8>>::format_step(4.55, &state),
            END_OF_SIMULATION
        );
        assert_eq!(output, expected);
    }
}
