//! CLI administration tool for kv-shortener.
//!
//! Provides commands for preparing secrets, inspecting and deleting links,
//! and checking the store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Hash a password for STATS_PASSWORD_HASH
//! cargo run --bin admin -- hash-password
//!
//! # List live links
//! cargo run --bin admin -- links list
//!
//! # Delete a link
//! cargo run --bin admin -- links delete my-link
//!
//! # Check the store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same store settings as the server (`REDIS_URL` or `REDIS_HOST`, ...).
//! Without them the commands run against an empty in-memory store.

use kv_shortener::application::services::LinkService;
use kv_shortener::application::services::access_service::hash_password;
use kv_shortener::config::{Config, mask_connection_string};
use kv_shortener::domain::clock::SystemClock;
use kv_shortener::domain::error::LinkError;
use kv_shortener::domain::store::KvStore;
use kv_shortener::server::connect_store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Password};
use std::sync::Arc;

/// CLI tool for managing kv-shortener.
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
    /// Print the SHA-256 hash of a password for STATS_PASSWORD_HASH
    HashPassword {
        /// Password to hash (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List all live links
    List,

    /// Delete a link
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::HashPassword { password } => handle_hash_password(password)?,
        Commands::Links { action } => {
            let config = Config::from_env()?;
            let store = open_store(&config).await?;
            let service = LinkService::new(store, Arc::new(SystemClock));
            handle_links_action(action, &service).await?;
        }
        Commands::Store { action } => {
            let config = Config::from_env()?;
            handle_store_action(action, &config).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    if !config.is_redis_enabled() {
        println!(
            "{}",
            "⚠️  No Redis configured, using an empty in-memory store".yellow()
        );
    }
    connect_store(config).await
}

/// Prints the hash of a password, prompting for it when not given.
///
/// # Flow
///
/// 1. Read the password (prompt with confirmation if not provided)
/// 2. Hash it with SHA-256
/// 3. Print the `STATS_PASSWORD_HASH` line to put in the environment
fn handle_hash_password(password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Stats password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    println!();
    println!(
        "  {}={}",
        "STATS_PASSWORD_HASH".bright_cyan(),
        hash_password(&password).bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Dispatches link management commands.
async fn handle_links_action(action: LinksAction, service: &LinkService<dyn KvStore>) -> Result<()> {
    match action {
        LinksAction::List => list_links(service).await?,
        LinksAction::Delete { code, yes } => delete_link(service, code, yes).await?,
    }

    Ok(())
}

/// Lists every live link.
///
/// # Output Format
///
/// ```text
/// 📋 Live Links
///
///   Code         Clicks  Expires            Content
///   ──────────────────────────────────────────────────────────────
///   abc123       12      never              https://example.com
///   notes        3       2025-01-02 10:30   remember the milk
/// ```
///
/// Listing also purges expired links and rewrites the index.
async fn list_links(service: &LinkService<dyn KvStore>) -> Result<()> {
    println!("{}", "📋 Live Links".bright_blue().bold());
    println!();

    let links = service
        .list_live()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<7} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Content".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        let expires = link
            .record
            .expires_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        let content = if link.record.content.chars().count() > 40 {
            let head: String = link.record.content.chars().take(39).collect();
            format!("{}…", head)
        } else {
            link.record.content.clone()
        };
        let content = content.replace(['\n', '\r'], " ");

        println!(
            "  {:<12} {:<7} {:<18} {}",
            link.code.cyan(),
            link.record.clicks.to_string().bright_green(),
            expires.bright_black(),
            if link.record.is_url {
                content.normal()
            } else {
                content.italic()
            }
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a link with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
async fn delete_link(service: &LinkService<dyn KvStore>, code: String, yes: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();
    println!("  Code: {}", code.cyan());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.delete(&code).await {
        Ok(()) => {
            println!("{}", "✅ Link deleted".green().bold());
            Ok(())
        }
        Err(LinkError::NotFound(_)) => {
            println!("{}", "⚠️  No link with this code".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to delete link: {}", e)),
    }
}

/// Handles store diagnostic commands.
async fn handle_store_action(action: StoreAction, config: &Config) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("{}", "🔍 Checking store connection...".bright_blue());

            match &config.redis_url {
                Some(url) => println!("  Redis: {}", mask_connection_string(url).bright_white()),
                None => println!("  {}", "In-memory store (no Redis configured)".yellow()),
            }

            let store = connect_store(config)
                .await
                .context("Store connection failed")?;

            if !store.health_check().await {
                anyhow::bail!("Store health check failed");
            }

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}
