//! CLI administration tool for datetime-endpoint.
//!
//! Inspects and manages the response cache without going through HTTP,
//! using the same configuration and key derivation as the server.
//!
//! # Usage
//!
//! ```bash
//! # Check the cache backend
//! cargo run --bin admin -- cache ping
//!
//! # Show the cached body of /hour
//! cargo run --bin admin -- cache get /hour
//!
//! # Drop one cached view
//! cargo run --bin admin -- cache delete /hour
//!
//! # Drop every cached view
//! cargo run --bin admin -- cache flush
//!
//! # Print the route table
//! cargo run --bin admin -- routes
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`datetime_endpoint::config`].

use datetime_endpoint::config;
use datetime_endpoint::prelude::*;
use datetime_endpoint::routes::ROUTES;
use datetime_endpoint::server::build_cache;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing datetime-endpoint.
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
    /// Manage the response cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Print the route table
    Routes,
}

/// Cache management subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Check that the cache backend answers
    Ping,

    /// Show the cached body for a route path
    Get {
        /// Route path, e.g. /hour
        #[arg(default_value = paths::HOUR)]
        path: String,
    },

    /// Drop the cached body for a route path
    Delete {
        /// Route path, e.g. /hour
        path: String,
    },

    /// Drop every cached entry under the configured key prefix
    Flush {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cache { action } => {
            let config = config::load_from_env()?;
            let cache = build_cache(&config).await?;
            handle_cache_action(action, cache, &config).await?
        }
        Commands::Routes => print_routes(),
    }

    Ok(())
}

/// Dispatches cache management commands.
async fn handle_cache_action(
    action: CacheAction,
    cache: Arc<dyn CacheService>,
    config: &Config,
) -> Result<()> {
    let view_cache = ViewCache::new(cache.clone(), config.cache_default_timeout);

    match action {
        CacheAction::Ping => ping(cache).await,
        CacheAction::Get { path } => show_entry(cache, &view_cache, &path).await?,
        CacheAction::Delete { path } => delete_entry(&view_cache, &path).await?,
        CacheAction::Flush { yes } => flush(cache, yes).await?,
    }

    Ok(())
}

async fn ping(cache: Arc<dyn CacheService>) {
    println!("{}", "🔌 Cache health".bright_blue().bold());
    println!();

    if cache.health_check().await {
        println!("  Backend: {} {}", cache.backend().cyan(), "OK".green().bold());
    } else {
        println!("  Backend: {} {}", cache.backend().cyan(), "UNREACHABLE".red().bold());
    }
    println!();
}

/// Prints the cached body for `path`, or a notice on a miss.
async fn show_entry(
    cache: Arc<dyn CacheService>,
    view_cache: &ViewCache,
    path: &str,
) -> Result<()> {
    let key = ViewCache::key_for(path);

    println!("{}", "🔎 Cache entry".bright_blue().bold());
    println!();
    println!("  Path: {}", path.cyan());
    println!("  Key:  {}", key.bright_black());
    println!("  TTL:  {}s", view_cache.timeout_seconds().to_string().bright_black());
    println!();

    match cache.get(&key).await? {
        Some(body) => println!("  {}", body.bright_yellow()),
        None => println!("{}", "  Not cached".yellow()),
    }
    println!();

    Ok(())
}

async fn delete_entry(view_cache: &ViewCache, path: &str) -> Result<()> {
    view_cache
        .invalidate(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete cache entry: {}", e))?;

    println!("{} {}", "✅ Dropped cached view".green().bold(), path.cyan());
    Ok(())
}

/// Removes every entry under the key prefix with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
async fn flush(cache: Arc<dyn CacheService>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Flush cache".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all cached entries from {}?", cache.backend()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = cache.clear().await?;

    println!();
    println!(
        "{} {} entries removed",
        "✅ Cache flushed:".green().bold(),
        removed.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the route table.
///
/// # Output Format
///
/// ```text
/// 🗺  Routes
///
///   Method  Path          Endpoint        Cached
///   ──────────────────────────────────────────────
///   GET     /             home            no
///   GET     /hour         hour            yes
/// ```
fn print_routes() {
    println!("{}", "🗺  Routes".bright_blue().bold());
    println!();
    println!(
        "  {:<7} {:<13} {:<15} {}",
        "Method".bright_white().bold(),
        "Path".bright_white().bold(),
        "Endpoint".bright_white().bold(),
        "Cached".bright_white().bold()
    );
    println!("  {}", "─".repeat(46).bright_black());

    for route in ROUTES {
        let cached = if route.cached {
            "yes".green()
        } else {
            "no".bright_black()
        };

        println!(
            "  {:<7} {:<13} {:<15} {}",
            route.method,
            route.path.cyan(),
            route.endpoint,
            cached
        );
    }
    println!();
}
