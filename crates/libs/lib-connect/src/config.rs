//! # Connection Configuration
//!
//! Presentation settings for the connector modal. Native hosts can load them
//! from environment variables; the web front end builds them from
//! compile-time constants.
//!
//! | variable | default |
//! |---|---|
//! | `WALLET_MODAL_TITLE` | `Connect a wallet` |
//! | `WALLET_MODAL_DISMISSIBLE` | `true` |
//! | `WALLET_KNOWN_WALLET` | `MetaMask` |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_connect::config::{connect_config, init_config};
//!
//! init_config().unwrap();
//! let title = &connect_config().modal_title;
//! ```

use std::env;
use std::sync::OnceLock;

use crate::error::{ConnectError, Result};

pub const DEFAULT_MODAL_TITLE: &str = "Connect a wallet";
pub const DEFAULT_KNOWN_WALLET: &str = "MetaMask";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectConfig {
    /// Heading shown above the connector tiles
    pub modal_title: String,

    /// Whether clicking the overlay or pressing Escape closes the modal.
    ///
    /// Closing never cancels a connection attempt already handed to the client.
    pub dismissible: bool,

    /// Connector display name that gets the MetaMask artwork; every other
    /// connector falls back to the WalletConnect artwork.
    pub known_wallet: String,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            modal_title: DEFAULT_MODAL_TITLE.to_string(),
            dismissible: true,
            known_wallet: DEFAULT_KNOWN_WALLET.to_string(),
        }
    }
}

impl ConnectConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let modal_title = lookup("WALLET_MODAL_TITLE").unwrap_or(defaults.modal_title);

        let dismissible = match lookup("WALLET_MODAL_DISMISSIBLE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConnectError::Config(format!(
                    "WALLET_MODAL_DISMISSIBLE must be true or false, got `{}`",
                    raw
                ))
            })?,
            None => defaults.dismissible,
        };

        let known_wallet = lookup("WALLET_KNOWN_WALLET").unwrap_or(defaults.known_wallet);

        Ok(Self {
            modal_title,
            dismissible,
            known_wallet,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.modal_title.trim().is_empty() {
            return Err(ConnectError::Config("modal title must not be empty".to_string()));
        }

        if self.known_wallet.trim().is_empty() {
            return Err(ConnectError::Config("known wallet name must not be empty".to_string()));
        }

        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

static CONFIG: OnceLock<ConnectConfig> = OnceLock::new();

/// Load, validate and install the global configuration.
///
/// # Errors
///
/// Fails if an environment variable is malformed, validation fails, or the
/// configuration was already installed.
pub fn init_config() -> Result<()> {
    let config = ConnectConfig::from_env()?;
    install_config(config)
}

/// Install an already-built configuration as the global one.
pub fn install_config(config: ConnectConfig) -> Result<()> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| ConnectError::Config("config has already been initialized".to_string()))
}

/// The global configuration, or the defaults if none was installed.
pub fn connect_config() -> &'static ConnectConfig {
    CONFIG.get_or_init(ConnectConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ConnectConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConnectConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_overrides() {
        let config = ConnectConfig::from_lookup(lookup_from(&[
            ("WALLET_MODAL_TITLE", "Pick a wallet"),
            ("WALLET_MODAL_DISMISSIBLE", "off"),
            ("WALLET_KNOWN_WALLET", "Rabby"),
        ]))
        .unwrap();
        assert_eq!(config.modal_title, "Pick a wallet");
        assert!(!config.dismissible);
        assert_eq!(config.known_wallet, "Rabby");
    }

    #[test]
    fn test_rejects_bad_bool() {
        let err = ConnectConfig::from_lookup(lookup_from(&[("WALLET_MODAL_DISMISSIBLE", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConnectError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let config = ConnectConfig {
            modal_title: "  ".to_string(),
            ..ConnectConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
