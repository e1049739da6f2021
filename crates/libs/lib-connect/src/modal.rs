//! # Modal Presenter
//!
//! View-model for the connector-selection dialog. It turns the client's
//! connector list into tiles and forwards tile activations to the store;
//! it never changes modal visibility on activation.

use shared::dto::wallet::ConnectorDescriptor;

use crate::error::{ConnectError, Result};
use crate::store::ConnectionStore;

/// Artwork shown on a connector tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletIcon {
    MetaMask,
    WalletConnect,
}

impl WalletIcon {
    /// Picks artwork by display name only. Anything that is not the known
    /// wallet gets the WalletConnect artwork.
    pub fn for_name(name: &str, known_wallet: &str) -> Self {
        if name == known_wallet {
            WalletIcon::MetaMask
        } else {
            WalletIcon::WalletConnect
        }
    }

    pub fn asset_path(&self) -> &'static str {
        match self {
            WalletIcon::MetaMask => "/icons/metamask.svg",
            WalletIcon::WalletConnect => "/icons/walletconnect.svg",
        }
    }

    pub fn alt_text(&self) -> &'static str {
        match self {
            WalletIcon::MetaMask => "MetaMask logo",
            WalletIcon::WalletConnect => "WalletConnect logo",
        }
    }
}

/// One selectable entry in the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorTile {
    pub id: String,
    pub title: String,
    pub label: String,
    pub icon: WalletIcon,
}

impl ConnectorTile {
    pub fn new(connector: &ConnectorDescriptor, known_wallet: &str) -> Self {
        Self {
            id: connector.id.clone(),
            title: connector.name.clone(),
            label: format!("Connect to {}", connector.name),
            icon: WalletIcon::for_name(&connector.name, known_wallet),
        }
    }
}

pub struct ModalPresenter<'a> {
    store: &'a ConnectionStore,
}

impl<'a> ModalPresenter<'a> {
    pub fn new(store: &'a ConnectionStore) -> Self {
        Self { store }
    }

    pub fn is_visible(&self) -> bool {
        self.store.is_modal_open()
    }

    pub fn title(&self) -> &str {
        &self.store.config().modal_title
    }

    /// One tile per connector, in client order
    pub fn tiles(&self) -> Vec<ConnectorTile> {
        let known_wallet = &self.store.config().known_wallet;
        self.store
            .connectors()
            .iter()
            .map(|connector| ConnectorTile::new(connector, known_wallet))
            .collect()
    }

    /// Hand the connector with `id` to the client.
    pub fn activate(&self, id: &str) -> Result<()> {
        let snapshot = self.store.snapshot();
        let Some(connector) = snapshot.connector(id) else {
            log::warn!("ignoring activation of unknown connector `{}`", id);
            return Err(ConnectError::UnknownConnector(id.to_string()));
        };
        self.store.connect(connector)
    }

    /// Overlay click or Escape. Returns whether the modal was closed.
    pub fn dismiss(&self) -> bool {
        if !self.store.config().dismissible {
            return false;
        }
        self.store.close_wallet_modal();
        true
    }
}
