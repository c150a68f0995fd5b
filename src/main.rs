//! Fundweb main entry point

use clap::Parser;
use fundweb_api::start_server;
use fundweb_client::{BackendClient, BackendRef};
use fundweb_config::{Config, ConfigError};
use fundweb_core::{CreatorDirectory, DonationHistory, FileSessionStore, SessionRef};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "fundweb")]
#[command(author = "Fundweb Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web interface for a donation platform's admin and donor screens", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound { path }) => {
            eprintln!("[WARN] Config file not found: {}, using defaults", path);
            Config::default()
        }
        Err(e) => {
            eprintln!("[ERROR] Failed to load configuration:\n{}", e.to_details());
            std::process::exit(1);
        }
    };

    // RUST_LOG still wins; the config level is only the default
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    eprintln!(
        "[INFO] Config loaded: backend={}, confirm_mode={}",
        config.backend.base_url, config.ui.confirm_mode
    );

    let rt = Runtime::new()?;

    rt.block_on(async {
        let backend: BackendRef = Arc::new(
            BackendClient::new(
                &config.backend.base_url,
                Duration::from_secs(config.backend.timeout_secs),
            )
            .expect("Invalid backend configuration"),
        );

        let session: SessionRef =
            Arc::new(FileSessionStore::new(config.session.donor_file.clone()));

        let directory = Arc::new(RwLock::new(CreatorDirectory::new(Arc::clone(&backend))));
        let history = Arc::new(RwLock::new(DonationHistory::new(Arc::clone(&backend))));

        // Warm the creator directory; the screens retry on mount if this fails
        eprintln!(
            "[INFO] Fetching creator directory from {}",
            config.backend.base_url
        );
        {
            let mut directory_guard = directory.write().await;
            match directory_guard.load().await {
                Ok(_) => eprintln!("[INFO] Creator directory loaded successfully"),
                Err(e) => eprintln!("[ERROR] Failed to load creator directory: {}", e),
            }
        }

        start_server(config, directory, history, session).await
    });

    Ok(())
}
