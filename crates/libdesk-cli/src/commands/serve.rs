//! Start the LibDesk server.

use clap::Args;

use libdesk_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the number of PCs in the pool
    #[arg(long)]
    pub total_pcs: Option<u32>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(total_pcs) = args.total_pcs {
        config.occupancy.total_pcs = total_pcs;
    }
    config.validate()?;

    println!("Starting LibDesk server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  PCs:  {}", config.occupancy.total_pcs);

    let pool = super::create_db_pool(&config).await?;

    if !args.no_migrate && config.database.auto_migrate {
        println!("Running database migrations...");
        libdesk_database::migration::run_migrations(&pool).await?;
        println!("  Migrations applied successfully.");
    }

    libdesk_api::run_server(config, pool).await
}
