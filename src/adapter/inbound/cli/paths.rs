//! Path utilities for purchase-ledger.
//!
//! User settings live under `~/.purchase-ledger/`:
//! - `~/.purchase-ledger/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the purchase-ledger home directory (`~/.purchase-ledger/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".purchase-ledger")
}

/// Returns the default config file path (`~/.purchase-ledger/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_home() {
        let config = default_config();

        assert!(config.starts_with(home_dir()));
        assert!(config.ends_with(".purchase-ledger/config.toml"));
    }
}
