use projectile_simulation::*;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let parameters = match acquire_parameters(std::env::args_os(), &mut input, &mut output) {
        Ok(parameters) => parameters,
        Err(SimulationError::Arguments(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };
    log::info!("Launch parameters: {:?}", parameters);

    let mut simulation = Simulation::new(&parameters)?;
    let stdout = io::stdout();
    let mut telemetry = Telemetry::new(io::BufWriter::new(stdout.lock()));

    let summary = simulation.run(&mut telemetry)?;
    telemetry.log_summary(&summary);
    telemetry.finish()?;

    Ok(())
}
