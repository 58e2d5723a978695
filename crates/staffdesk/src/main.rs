mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use staffdesk_core::Console;

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

/// Logs go to stderr so they never mix with rendered output.
///
/// `RUST_LOG` wins over `-v`. Store failures are logged at `warn`, so the
/// underlying request error shows up from `-v` on.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if std::env::var("STAFFDESK_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { mut global, command } = cli;

    match command {
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "staffdesk", &mut std::io::stdout());
            Ok(())
        }

        Command::Routes(args) => commands::routes::handle(args, &global),

        Command::Config(args) => {
            let cfg = config::load_config()?;
            config::apply_defaults(&mut global, &cfg);
            commands::config_cmd::handle(args, &global, cfg)
        }

        cmd => {
            let cfg = config::load_config()?;
            config::apply_defaults(&mut global, &cfg);

            let console = Console::new(config::build_client_config(&global, &cfg)?)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &console, &global).await
        }
    }
}
