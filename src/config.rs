// src/config.rs
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Crate-level configuration — loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: Paths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub database: PathBuf,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing.
///
/// The file path comes from `CIPHERNOTE_CONFIG`, defaulting to
/// `ciphernote.toml` in the working directory.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("CIPHERNOTE_CONFIG").unwrap_or_else(|_| "ciphernote.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("failed to read ciphernote config");
            toml::from_str(&content).expect("invalid TOML in ciphernote config")
        } else {
            log::debug!("no config file at {config_path}, using built-in defaults");
            Config {
                paths: Paths {
                    database: default_database_path(),
                },
            }
        }
    })
}

/// `<platform data dir>/ciphernote/notebook.db`, or the working directory
/// when no data dir is known.
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ciphernote")
        .join("notebook.db")
}
