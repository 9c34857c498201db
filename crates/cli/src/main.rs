use std::io;
use std::process::ExitCode;

use clap::Parser;

use brenoerp_cli::Cli;
use brenoerp_observability::ObservabilityConfig;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let config = ObservabilityConfig::from_env().with_default_filter(default_filter);
    brenoerp_observability::init_with(&config);

    let stdout = io::stdout();
    let all_valid = brenoerp_cli::run(&cli, &mut stdout.lock())?;

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
