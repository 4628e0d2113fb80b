use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pizza-pricing", version, about = "Pizza price per square inch calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "PIZZA_PRICING_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the pricing server (default)
    Start,

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Price a pizza without starting the server
    Calc {
        /// Pizza diameter in inches
        #[arg(short, long)]
        size: f64,

        /// Pizza cost
        #[arg(short = 'p', long)]
        cost: f64,

        /// Crust size in inches
        #[arg(short = 'k', long)]
        crust: Option<f64>,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
