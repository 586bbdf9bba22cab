use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dirsize::cli::Cli;
use dirsize::config::RunConfig;
use dirsize::driver;

fn main() -> ExitCode {
    // Usage errors exit 1; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::from_cli(cli)?;
    let summary = driver::run(&config, io::stdout().lock())?;

    if config.progress {
        eprintln!(
            "Measured {} directories ({} failed)",
            summary.reported, summary.failed
        );
    }
    Ok(())
}
