mod cli;
mod error;
mod logging;
mod runner;
mod scaffold;
mod util;

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let app = match cli::parse() {
        Ok(app) => app,
        Err(err) => {
            println!("{err}");
            return Ok(ExitCode::from(1));
        }
    };
    logging::init(app.verbose);
    runner::run(app)?;
    Ok(ExitCode::SUCCESS)
}
