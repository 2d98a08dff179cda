//! CLI administration tool for shorturl.
//!
//! Registers and inspects entries directly against PostgreSQL without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a URL (same validation policy as the server)
//! cargo run --bin admin -- shorten https://www.freecodecamp.org
//!
//! # Look up a short id
//! cargo run --bin admin -- resolve 1
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `shorturl::config`). A database must be configured;
//! the in-memory store is private to a server process.

use shorturl::application::services::{ShortenerRegistry, UrlValidator, Verdict};
use shorturl::config::{self, Config};
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgEntryRepository;
use shorturl::server::connect_pool;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Register a URL and print its short id
    Shorten {
        /// URL to register
        url: String,

        /// Skip the configured validation policy
        #[arg(long)]
        no_validate: bool,
    },

    /// Print the URL registered under a short id
    Resolve {
        /// Short id
        short_url: i64,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let Some(database_url) = config.database_url.as_deref() else {
        bail!("DATABASE_URL (or DB_* components) must be set");
    };

    let pool = connect_pool(&config, database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    let registry = ShortenerRegistry::new(Arc::new(PgEntryRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::Shorten { url, no_validate } => {
            shorten(&registry, &config, &url, no_validate).await?
        }
        Commands::Resolve { short_url } => resolve(&registry, short_url).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Validates and registers a URL, printing the resulting short id.
async fn shorten(
    registry: &ShortenerRegistry,
    config: &Config,
    url: &str,
    no_validate: bool,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    if no_validate {
        println!("{}", "⚠️  Skipping validation".yellow());
    } else {
        let validator = UrlValidator::new(config.validation_policy, config.validation_timeout());

        if let Verdict::Rejected(reason) = validator.validate(url).await {
            bail!("invalid url ({reason}, policy: {})", config.validation_policy);
        }
    }

    let entry = registry
        .register_or_get(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register URL: {}", e))?;

    println!("  URL:       {}", entry.original.cyan());
    println!(
        "  Short id:  {}",
        entry.short_id.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints the URL registered under `short_url`.
async fn resolve(registry: &ShortenerRegistry, short_url: i64) -> Result<()> {
    match registry.resolve(short_url).await {
        Ok(entry) => {
            println!("  {} -> {}", short_url.to_string().bright_white(), entry.original.cyan());
            Ok(())
        }
        Err(AppError::NotFound) => {
            println!("{}", format!("❌ No entry for {short_url}").red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Displays storage statistics.
///
/// Shows:
/// - Total number of registered URLs
/// - Next short id to be assigned
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let next_value: i64 = sqlx::query_scalar("SELECT next_value FROM url_counter WHERE id = 1")
        .fetch_one(pool)
        .await?;

    println!(
        "  URLs:          {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Next short id: {}",
        next_value.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
