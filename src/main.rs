use hubview::cli::{parse_args, run_load, version_string, CliCommand, USAGE};

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "hubview=info";

/// Log to stderr so stdout carries only the view model JSON.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = match command {
        CliCommand::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Load(config) => config,
    };

    color_eyre::install()?;
    init_tracing();

    let runtime = tokio::runtime::Runtime::new()?;
    let json = runtime.block_on(run_load(config))?;
    println!("{}", json);
    Ok(())
}
