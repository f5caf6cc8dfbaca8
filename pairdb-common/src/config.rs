//! Configuration loading and root folder resolution

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable naming the root folder
pub const ROOT_FOLDER_ENV: &str = "PAIRDB_ROOT_FOLDER";

/// Name of the database file inside the root folder
pub const DATABASE_FILE: &str = "pairdb.db";

/// Optional TOML configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub root_folder: Option<PathBuf>,
}

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(contents) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<ConfigFile>(&contents) {
                if let Some(root_folder) = config.root_folder {
                    return root_folder;
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Path of the database file for a resolved root folder
pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join(DATABASE_FILE)
}

/// Get default configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/pairdb/config.toml first, then /etc/pairdb/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("pairdb").join("config.toml"));
        let system_config = PathBuf::from("/etc/pairdb/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("pairdb").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_path
        )))
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/pairdb (or /var/lib/pairdb for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("pairdb"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/pairdb"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/pairdb
        dirs::data_dir()
            .map(|d| d.join("pairdb"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/pairdb"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\pairdb
        dirs::data_local_dir()
            .map(|d| d.join("pairdb"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\pairdb"))
    } else {
        PathBuf::from("./pairdb_data")
    }
}
