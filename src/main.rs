mod auth;
mod client;
mod config;
mod error;
mod key;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// ─── CLI ─────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "asc-connect",
    version,
    about = "Authenticate against the App Store Connect API"
)]
struct Cli {
    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: Format,

    /// Override data directory (default: ./asc-connect or ~/.asc-connect).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Clone, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Cmd {
    /// Create a new data directory with a template config.
    Init {
        /// Create in ~/.asc-connect instead of ./asc-connect.
        #[arg(long)]
        global: bool,
    },

    /// Mint a bearer token and print it to stdout.
    Token,

    /// Verify API credentials by listing the apps visible to them.
    Apps,
}

// ─── Entry ───────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asc_connect=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // `init` doesn't need an existing data dir
    if let Cmd::Init { global } = &cli.cmd {
        return cmd_init(*global);
    }

    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    if !data_dir.join("config.toml").exists() {
        anyhow::bail!(
            "No config found. Run `asc-connect init` first.\n\
             Looked in: {}",
            data_dir.display()
        );
    }

    let cfg = config::Config::load(&data_dir)?;

    match cli.cmd {
        Cmd::Init { .. } => unreachable!(),
        Cmd::Token => cmd_token(&cfg),
        Cmd::Apps => cmd_apps(&cfg, &cli.format).await,
    }
}

// ─── init ────────────────────────────────────────────────────────────────────

fn cmd_init(global: bool) -> Result<()> {
    let dir = config::init_data_dir(global)?;
    std::fs::create_dir_all(&dir)?;

    let cfg_path = dir.join("config.toml");
    if cfg_path.exists() {
        eprintln!("Config already exists: {}", cfg_path.display());
    } else {
        std::fs::write(&cfg_path, config::CONFIG_TEMPLATE)?;
        eprintln!("Created {}", cfg_path.display());
    }

    eprintln!("Initialized in {}", dir.display());
    eprintln!();
    eprintln!("Next steps:");
    eprintln!("  1. Edit {} with your API credentials", cfg_path.display());
    eprintln!("  2. Run `asc-connect apps` to verify they work");
    Ok(())
}

// ─── token ───────────────────────────────────────────────────────────────────

fn cmd_token(cfg: &config::Config) -> Result<()> {
    let token = auth::generate_token(
        &cfg.api.key_id,
        &cfg.api.profile(),
        &cfg.api.private_key,
    )?;
    println!("{token}");
    Ok(())
}

// ─── apps ────────────────────────────────────────────────────────────────────

async fn cmd_apps(cfg: &config::Config, fmt: &Format) -> Result<()> {
    let client = client::AscClient::new(
        cfg.api.key_id.clone(),
        cfg.api.profile(),
        cfg.api.private_key.clone(),
    )?;
    let apps = client.list_apps().await?.data;

    match fmt {
        Format::Json => {
            let out: Vec<serde_json::Value> = apps
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "id": a.id,
                        "bundle_id": a.attributes.as_ref().and_then(|x| x.bundle_id.as_deref()),
                        "name": a.attributes.as_ref().and_then(|x| x.name.as_deref()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Text => {
            if apps.is_empty() {
                println!("No apps visible to this API key.");
                return Ok(());
            }
            println!("{:<40} {:<30} NAME", "APP ID", "BUNDLE ID");
            println!("{}", "-".repeat(90));
            for a in &apps {
                let at = a.attributes.as_ref();
                println!(
                    "{:<40} {:<30} {}",
                    a.id,
                    at.and_then(|x| x.bundle_id.as_deref()).unwrap_or("-"),
                    at.and_then(|x| x.name.as_deref()).unwrap_or("-"),
                );
            }
        }
    }
    Ok(())
}
