mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bookly_core::Bookshelf;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a server connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "bookly", &mut std::io::stdout());
            Ok(())
        }

        // Everything else talks to the server through the Bookshelf
        cmd => {
            let mut shelf = build_shelf(&cli.global)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &mut shelf, &cli.global).await
        }
    }
}

/// Build a `Bookshelf` from the config file, environment, and CLI
/// overrides. Configuration is resolved once, here.
fn build_shelf(global: &cli::GlobalOpts) -> Result<Bookshelf, CliError> {
    let mut config = bookly_config::load()?;

    if let Some(ref base_url) = global.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = global.timeout {
        config.timeout_secs = timeout;
    }

    let client = config.client()?;
    Ok(Bookshelf::new(client, config.defaults))
}
