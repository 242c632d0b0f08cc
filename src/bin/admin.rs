//! CLI administration tool for redirect-service.
//!
//! Runs the same cache-aside resolution as the HTTP service, without going
//! through HTTP. Useful for checking what a short code resolves to and for
//! evicting stale cache entries.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a short code (reads through the cache)
//! cargo run --bin admin -- resolve abc123
//!
//! # Evict a cached record
//! cargo run --bin admin -- evict abc123
//!
//! # Check cache connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the service, see `redirect_service::config`.

use redirect_service::application::services::ResolutionService;
use redirect_service::config::{self, Config, mask_connection_string};
use redirect_service::infrastructure::cache::RedisCache;
use redirect_service::server::{build_resolution_service, connect_cache};
use redirect_service::utils::url_norm::ensure_scheme;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing redirect-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a short code through the cache and the URL service
    Resolve {
        /// Short code to resolve
        code: String,
    },

    /// Evict the cached record for a short code
    Evict {
        /// Short code to evict
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check cache connectivity and print effective configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Resolve { code } => {
            let service = service(&config).await?;
            resolve(&service, code.trim()).await?
        }
        Commands::Evict { code, yes } => {
            let service = service(&config).await?;
            evict(&service, code.trim(), yes).await?
        }
        Commands::Check => check(&config).await?,
    }

    Ok(())
}

async fn service(config: &Config) -> Result<ResolutionService> {
    let cache = connect_cache(config).await;
    build_resolution_service(config, cache)
}

/// Resolves a short code and prints the record with its redirect target.
async fn resolve(service: &ResolutionService, code: &str) -> Result<()> {
    println!("{} {}", "🔎 Resolving".bright_blue().bold(), code.cyan());
    println!();

    let record = service
        .resolve_url(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", code, e))?;

    println!("  Title:       {}", record.title.bright_white());
    if let Some(description) = &record.description {
        println!("  Description: {}", description);
    }
    println!("  Stored URL:  {}", record.destination_url.bright_black());
    println!(
        "  Redirect to: {}",
        ensure_scheme(&record.destination_url).bright_green().bold()
    );
    println!("  Owner:       {}", record.user_id);
    println!(
        "  Created:     {}",
        record.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Evicts a cached record after confirmation.
async fn evict(service: &ResolutionService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Evict cache entry".bright_blue().bold());
    println!();
    println!("  Short code: {}", code.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete the cached record?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .evict(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete cache entry: {}", e))?;

    println!(
        "{}",
        format!("✅ Cache for short code '{}' deleted successfully", code)
            .green()
            .bold()
    );
    println!();

    Ok(())
}

/// Connects to Redis directly, without the NullCache fallback.
async fn check(config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking cache connection...".bright_blue());
    println!("  Redis:       {}", mask_connection_string(&config.redis_url));
    println!("  URL service: {}", config.url_service_base_url);
    println!("  Cache TTL:   {}s", config.cache_ttl_seconds);
    println!();

    match RedisCache::connect(&config.redis_url, config.cache_timeout()).await {
        Ok(_) => {
            println!("{}", "✅ Redis connection OK".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ Redis unreachable: {}", e).red().bold());
            anyhow::bail!("cache check failed")
        }
    }
}
