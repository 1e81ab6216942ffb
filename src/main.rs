use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "gigdb",
    about = "A booking directory for venues, artists and shows",
    version
)]
struct Args {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    config_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::try_load_from_file_or_default(args.config_file.as_deref())?;

    log::info!("Opening database {}", config.db.conn_sqlite);
    let connections = gigdb_db_sqlite::Connections::init(
        &config.db.conn_sqlite,
        config.db.conn_pool_size.into(),
    )?;
    gigdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    gigdb_webserver::run(connections).await;
    Ok(())
}
