use crate::error::{ErrorBackend, Result};
use fg_core::server::default_config::{
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_PRIMARY_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_FALLBACK_MODEL: &str = "gemini-1.5-flash-8b";
pub const DEFAULT_DATA_DIR: &str = ".finguru";

/// Which backend the persistence store writes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    File,
    Memory,
    Disabled,
}

impl FromStr for StorageKind {
    type Err = ErrorBackend;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageKind::File),
            "memory" => Ok(StorageKind::Memory),
            "disabled" | "none" => Ok(StorageKind::Disabled),
            other => Err(ErrorBackend::InvalidConfig(format!(
                "FINGURU_STORAGE must be one of file, memory, disabled (got {other})"
            ))),
        }
    }
}

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub primary_model: String,
    pub fallback_model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("primary_model", &self.primary_model)
            .field("fallback_model", &self.fallback_model)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub host: String,
    pub port: String,
    pub protocol: String,
    pub gemini: GeminiConfig,
    pub storage: StorageKind,
    pub data_dir: PathBuf,
}

/// Loads `<dir>/.env` into the process environment when present. Variables
/// already set are left alone. `Ok(false)` when there is no file.
pub fn load_dotenv_from(dir: &Path) -> std::result::Result<bool, dotenv::Error> {
    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(false);
    }
    dotenv::from_path(&path).map(|()| true)
}

/// Must run before the logger is installed so `RUST_LOG` and
/// `FINGURU_DEBUG` may come from `.env`.
pub fn load_dotenv() -> std::result::Result<bool, dotenv::Error> {
    match env::current_dir() {
        Ok(dir) => load_dotenv_from(&dir),
        Err(_) => Ok(false),
    }
}

impl BackendConfig {
    /// Reads the process environment. Call [`load_dotenv`] first.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage = match lookup("FINGURU_STORAGE") {
            Some(kind) => kind.parse()?,
            None => StorageKind::File,
        };

        Ok(BackendConfig {
            host: var("SERVER_BACKEND_HOST", DEFAULT_SERVER_BACKEND_HOST),
            port: var("SERVER_BACKEND_PORT", DEFAULT_SERVER_BACKEND_PORT),
            protocol: var("SERVER_BACKEND_PROTOCOL", DEFAULT_SERVER_BACKEND_PROTOCOL),
            gemini: GeminiConfig {
                api_key: lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()),
                base_url: var("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
                primary_model: var("GEMINI_PRIMARY_MODEL", DEFAULT_GEMINI_PRIMARY_MODEL),
                fallback_model: var("GEMINI_FALLBACK_MODEL", DEFAULT_GEMINI_FALLBACK_MODEL),
            },
            storage,
            data_dir: PathBuf::from(var("FINGURU_DATA_DIR", DEFAULT_DATA_DIR)),
        })
    }
}
