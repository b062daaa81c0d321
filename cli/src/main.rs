//! Consignment service - register shipments against transport vessels
//!
//! Runs the consignment service over HTTP and provides client commands
//! for creating and listing consignments on a running instance.

mod commands;
mod logging;
mod server;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "consignment")]
#[command(author, version, about = "Register consignments against transport vessels")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the configuration file
    #[arg(long, global = true, env = "CONSIGNMENT_CONFIG")]
    config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the consignment service
    Serve {
        /// Address to listen on (overrides the config file)
        #[arg(short, long, env = "CONSIGNMENT_LISTEN")]
        listen: Option<String>,

        /// Base URL of the vessel service (overrides the config file)
        #[arg(long, env = "VESSEL_SERVICE_URL")]
        vessel_url: Option<String>,

        /// Emit logs as JSON lines
        #[arg(long)]
        json_logs: bool,
    },

    /// Create a consignment on a running service
    Create {
        /// Total weight of the consignment
        #[arg(short, long)]
        weight: i32,

        /// Container identifier (repeat for several containers)
        #[arg(short, long = "container")]
        containers: Vec<String>,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,

        /// Service base URL
        #[arg(long, env = "CONSIGNMENT_SERVER", default_value = commands::DEFAULT_SERVER)]
        server: String,
    },

    /// List all consignments on a running service
    #[command(alias = "ls")]
    List {
        /// Only show consignments on this vessel
        #[arg(long)]
        vessel: Option<String>,

        /// Service base URL
        #[arg(long, env = "CONSIGNMENT_SERVER", default_value = commands::DEFAULT_SERVER)]
        server: String,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let json_logs = matches!(cli.command, Commands::Serve { json_logs: true, .. });
    logging::init(cli.verbose, json_logs);

    match cli.command {
        Commands::Serve {
            listen,
            vessel_url,
            json_logs: _,
        } => {
            commands::serve::run(cli.config, listen, vessel_url).await?;
        }
        Commands::Create {
            weight,
            containers,
            description,
            server,
        } => {
            commands::create::run(&server, weight, containers, description, cli.json).await?;
        }
        Commands::List { vessel, server } => {
            commands::list::run(&server, vessel, cli.json).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(cli.config, cli.json).await?,
            ConfigAction::Init { force } => commands::config::init(cli.config, force).await?,
        },
    }

    Ok(())
}
