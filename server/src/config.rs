use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(name = "brandarchitect", about = "BrandArchitect game server")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long)]
    pub addr: Option<String>,

    /// SQLite database file.
    #[arg(long)]
    pub database_url: Option<String>,

    /// Brand catalog seed file.
    #[arg(long)]
    pub seed_path: Option<PathBuf>,

    /// Optional YAML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    addr: Option<String>,
    database_url: Option<String>,
    seed_path: Option<PathBuf>,
    logo_api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub database_url: Option<String>,
    pub seed_path: PathBuf,
    pub logo_api_key: Option<String>,
}

impl ServerConfig {
    /// Resolve each setting CLI arg first, then environment, then the YAML
    /// file, then the built-in default.
    pub fn load(cli: Cli) -> Self {
        let file = match &cli.config {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(raw) => match serde_yaml::from_str::<FileConfig>(&raw) {
                    Ok(parsed) => parsed,
                    Err(e) => {
                        log::warn!("Ignoring malformed config file {}: {e}", path.display());
                        FileConfig::default()
                    }
                },
                Err(e) => {
                    log::warn!("Cannot read config file {}: {e}", path.display());
                    FileConfig::default()
                }
            },
            None => FileConfig::default(),
        };

        let addr = cli
            .addr
            .or_else(|| std::env::var("BIND_ADDR").ok())
            .or(file.addr)
            .unwrap_or_else(|| "127.0.0.1:3000".to_string());

        let database_url = cli
            .database_url
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .or(file.database_url);

        let seed_path = cli
            .seed_path
            .or_else(|| std::env::var("BRANDS_SEED_PATH").ok().map(PathBuf::from))
            .or(file.seed_path)
            .unwrap_or_else(|| PathBuf::from("data/brands.json"));

        let logo_api_key = std::env::var("LOGODEV_API_KEY").ok().or(file.logo_api_key);

        Self {
            addr,
            database_url,
            seed_path,
            logo_api_key,
        }
    }
}
