//! Application constants

use lib_connect::ConnectConfig;

pub const MODAL_TITLE: &str = "Connect a wallet";

/// Connector name that gets the MetaMask artwork
pub const KNOWN_WALLET: &str = "MetaMask";

pub const MODAL_DISMISSIBLE: bool = true;

pub fn web_config() -> ConnectConfig {
    ConnectConfig {
        modal_title: MODAL_TITLE.to_string(),
        dismissible: MODAL_DISMISSIBLE,
        known_wallet: KNOWN_WALLET.to_string(),
    }
}
