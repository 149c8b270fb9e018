//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# menucard configuration

# Heading shown in the title bar
title = {title:?}

# Currency symbol shown before prices (display only)
currency_symbol = {currency:?}

# Theme: dark, light
theme = {theme:?}

# How long the "Menu updated" flash stays visible (milliseconds)
flash_ms = {flash_ms}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level:?}
# File logging (in addition to the in-app log line)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix:?}
"#,
            title = self.title,
            currency = self.currency_symbol,
            theme = self.theme,
            flash_ms = self.flash_ms,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
