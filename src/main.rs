//! Management CLI for the TRON energy-rental admin API.
//!
//! Talks to the same primary / mock / default backend chain as the
//! dashboards and keeps the login token in a local session file between
//! invocations.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use tron_admin_client::config::load_config;
use tron_admin_client::observability::logging::init_logging;
use tron_admin_client::session::{FileStorage, LogRedirect, Session};
use tron_admin_client::{AdminApi, ResilientClient};

#[derive(Parser)]
#[command(name = "admin-cli")]
#[command(about = "Management CLI for the TRON energy-rental admin API", long_about = None)]
struct Cli {
    /// TOML configuration file. Environment variables override it.
    #[arg(short, long, env = "ADMIN_API_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the access token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "ADMIN_API_PASSWORD")]
        password: String,
    },
    /// Drop the stored access token
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Dashboard summary statistics
    Stats,
    /// List partners
    Partners {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    /// Show one partner
    Partner { id: u64 },
    /// Energy pool snapshot
    EnergyPool,
    /// Fee configurations
    Fees,
    /// Fee revenue records
    Revenue {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// List system administrators
    Admins {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Delete a system administrator
    DeleteAdmin { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.observability)?;

    tracing::debug!(
        mode = ?config.mode,
        use_primary = config.use_primary,
        primary = %config.primary.base_url,
        secondary = %config.secondary.base_url,
        tertiary = %config.tertiary.base_url,
        "Configuration loaded"
    );

    let session = Arc::new(Session::new(
        Arc::new(FileStorage::new(&config.token_path)),
        config.mode,
        Arc::new(LogRedirect::new(&config.login_url)),
    ));
    let api = AdminApi::new(ResilientClient::with_http(&config, session)?);

    match cli.command {
        Commands::Login { email, password } => {
            let resp = api.login(&email, &password).await?;
            print_json(&resp.user)?;
        }
        Commands::Logout => api.logout().await,
        Commands::Whoami => print_json(&api.current_user().await?)?,
        Commands::Stats => print_json(&api.dashboard_stats().await)?,
        Commands::Partners { page, size } => print_json(&api.partners(page, size).await?)?,
        Commands::Partner { id } => print_json(&api.partner(id).await?)?,
        Commands::EnergyPool => print_json(&api.energy_pool().await)?,
        Commands::Fees => print_json(&api.fee_configs().await?)?,
        Commands::Revenue { page, limit } => print_json(&api.fee_revenue(page, limit).await?)?,
        Commands::Admins { page, size } => print_json(&api.admins(page, size).await?)?,
        Commands::DeleteAdmin { id } => {
            api.delete_admin(id).await?;
            println!("Deleted administrator {}", id);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
