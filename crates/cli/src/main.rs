//! Todo API CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! todo-cli migrate
//!
//! # Insert 25 sample goals
//! todo-cli seed --count 25
//!
//! # Delete all goals and restart ids at 1
//! todo-cli reset
//! ```
//!
//! # Environment Variables
//!
//! The database URL is resolved like the server's: `TODO_API_DATABASE_URL`,
//! then `DATABASE_URL`, then `APP_DB_USERNAME`/`APP_DB_PASSWORD`/`APP_DB_NAME`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "todo-cli")]
#[command(author, version, about = "Todo API CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert sample goals
    Seed {
        /// Number of goals to insert (at least 1)
        #[arg(short, long, default_value_t = 10)]
        count: u32,
    },
    /// Delete all goals and restart id assignment at 1
    Reset,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { count } => {
            commands::seed::run(count).await?;
        }
        Commands::Reset => commands::reset::run().await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_default_count() {
        let cli = Cli::try_parse_from(["todo-cli", "seed"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Commands::Seed { count: 10 }));
    }

    #[test]
    fn test_seed_count_flag() {
        let cli = Cli::try_parse_from(["todo-cli", "seed", "-c", "3"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Commands::Seed { count: 3 }));
    }
}
