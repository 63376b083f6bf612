use std::collections::VecDeque;
use std::ffi::OsString;
use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use log::warn;

use super::parameters::{
    parse_value, validate_final_time, validate_firing_angle, validate_time_step, LaunchParameters,
};
use crate::errors::SimulationError;

pub const ARGUMENTS_REJECTED: &str = "Command line arguments error or not provided.";

const ALTITUDE_PROMPT: &str = "Enter initial altitude/elevation: ";
const ANGLE_PROMPT: &str = "Enter firing angle in degrees (0-90): ";
const VELOCITY_PROMPT: &str = "Enter initial velocity (m/s): ";
const TIME_STEP_PROMPT: &str = "Enter the time step (s) per integration: ";
const FINAL_TIME_PROMPT: &str = "Enter final time (s): ";
const INVALID_INPUT: &str = "Error - Invalid input.";

/// Takes launch parameters from the command line, or asks for them when the
/// arguments are missing, malformed or out of range.
///
/// A request for help is returned as `SimulationError::Arguments` so the
/// caller can print it instead of prompting.
pub fn acquire_parameters<I, T, R, W>(
    args: I,
    input: &mut R,
    output: &mut W,
) -> Result<LaunchParameters, SimulationError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    match LaunchParameters::from_args(args) {
        Ok(parameters) => Ok(parameters),
        Err(SimulationError::Arguments(e)) if e.kind() == ErrorKind::DisplayHelp => {
            Err(SimulationError::Arguments(e))
        }
        Err(e) => {
            warn!("Falling back to interactive input: {}", e);
            writeln!(output, "{}", ARGUMENTS_REJECTED)?;
            prompt_parameters(input, output)
        }
    }
}

/// Interactively asks for every launch parameter.
///
/// Answers are whitespace-separated, so several may share a line. A value
/// that fails to parse or falls outside its range is dropped and asked for
/// again. Running out of input is an error.
pub fn prompt_parameters<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<LaunchParameters, SimulationError> {
    let mut tokens = Tokens::new(input);

    let initial_altitude = prompt_value(&mut tokens, output, ALTITUDE_PROMPT, |_| Ok(()))?;
    let firing_angle = prompt_value(&mut tokens, output, ANGLE_PROMPT, validate_firing_angle)?;
    let initial_velocity = prompt_value(&mut tokens, output, VELOCITY_PROMPT, |_| Ok(()))?;
    let time_step = prompt_value(&mut tokens, output, TIME_STEP_PROMPT, validate_time_step)?;
    let final_time = prompt_value(&mut tokens, output, FINAL_TIME_PROMPT, validate_final_time)?;

    let parameters = LaunchParameters::new(
        initial_altitude,
        initial_velocity,
        firing_angle,
        time_step,
        final_time,
    );
    parameters.validate()?;
    Ok(parameters)
}

/// Whitespace-separated words read lazily, one line at a time.
struct Tokens<'a, R> {
    input: &'a mut R,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead> Tokens<'a, R> {
    fn new(input: &'a mut R) -> Self {
        Tokens {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, SimulationError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SimulationError::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn prompt_value<R, W, F>(
    tokens: &mut Tokens<'_, R>,
    output: &mut W,
    prompt: &str,
    validate: F,
) -> Result<f64, SimulationError>
where
    R: BufRead,
    W: Write,
    F: Fn(f64) -> Result<(), SimulationError>,
{
    loop {
        writeln!(output, "{}", prompt)?;
        output.flush()?;

        let token = tokens.next_token()?;
        let accepted = parse_value(&token).and_then(|value| {
            if !value.is_finite() {
                return Err(SimulationError::InvalidNumber(token.clone()));
            }
            validate(value).map(|_| value)
        });

        match accepted {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("Rejected input {:?}: {}", token, e);
                writeln!(output, "{}", INVALID_INPUT)?;
            }
        }
    }
}
