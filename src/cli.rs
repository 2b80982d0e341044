//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use slackbox::config::Config;
use slackbox::server;

/// slackbox - Slack events, slash commands, and health endpoints
#[derive(Parser, Debug)]
#[command(
    name = "slackbox",
    version,
    about = "Slack events, slash commands, and health endpoints",
    long_about = "Serve the HTTP endpoints behind a Slack app.\n\n\
                  Signed Slack deliveries are verified, parsed, and answered;\n\
                  readiness and liveness endpoints report service health."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Listen port (overrides the PORT environment variable)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Some(Command::Serve { port }) => {
            let mut config = Config::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }
            server::serve(config)
        }
        Some(Command::Version) => {
            println!("slackbox v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("slackbox v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'slackbox --help' for usage");
            println!("Run 'slackbox serve' to start the server");
            Ok(())
        }
    }
}
