use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use pizza_pricing::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing(args.log_json);

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
        },
        cli::Commands::Calc { size, cost, crust } => {
            commands::calc::execute(size, cost, crust)?;
        }
        cli::Commands::Version => {
            println!("Pizza Pricing v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
