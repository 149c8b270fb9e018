//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/menucard/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default duration of the "Menu updated" flash (700ms in, 500ms out)
pub const DEFAULT_FLASH_MS: u64 = 1200;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Heading shown in the title bar
    pub title: String,

    /// Currency symbol prefixed to prices (display only)
    pub currency_symbol: String,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// How long the "Menu updated" flash stays on screen, in milliseconds
    pub flash_ms: u64,

    /// Seed the menu with sample dishes on startup
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Christoffel's Menu".to_string(),
            currency_symbol: "R".to_string(),
            theme: "dark".to_string(),
            flash_ms: DEFAULT_FLASH_MS,
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub title: Option<String>,
    pub currency_symbol: Option<String>,
    pub theme: Option<String>,
    pub flash_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/menucard/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("menucard").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Ignore write errors - config is optional
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be read or
    /// parsed.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `menucard config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with environment overrides
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let title = file.title.unwrap_or(defaults.title);

        // Currency: env > file > default
        let currency_symbol = env("MENUCARD_CURRENCY")
            .or(file.currency_symbol)
            .unwrap_or(defaults.currency_symbol);

        // Theme: env > file > default
        let theme = env("MENUCARD_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let flash_ms = file.flash_ms.unwrap_or(defaults.flash_ms);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("MENUCARD_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            title,
            currency_symbol,
            theme,
            flash_ms,
            demo_mode,
            logging,
        }
    }
}
