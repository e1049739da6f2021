//! # Wallet Connection Core
//!
//! Framework-agnostic connection state for the wallet front end.
//!
//! A [`ConnectionStore`] wraps an injected [`WalletClient`] (the external
//! wallet library), projects its live state into a [`ConnectionState`] and
//! owns the visibility of the connector-selection modal. The store never
//! negotiates with wallets itself: selecting a connector forwards the call
//! to the client, and the modal closes once a later [`ConnectionStore::sync`]
//! observes the connection.
//!
//! ```rust
//! use std::rc::Rc;
//! use lib_connect::{ConnectConfig, ConnectionStore, MemoryWalletClient, ModalPresenter};
//! use shared::dto::wallet::{Account, ConnectorDescriptor};
//!
//! let client = Rc::new(MemoryWalletClient::new(vec![
//!     ConnectorDescriptor::new("mm", "MetaMask"),
//! ]));
//! let store = ConnectionStore::new(client.clone(), ConnectConfig::default());
//! store.set_mounted(true);
//!
//! store.open_wallet_modal();
//! ModalPresenter::new(&store).activate("mm").unwrap();
//! client.complete_connect(Account::new("0x1"));
//! store.sync();
//!
//! assert!(store.is_connected());
//! assert!(!store.is_modal_open());
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod modal;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use client::{ClientSnapshot, Listener, ListenerSet, Subscription, WalletClient};
pub use config::ConnectConfig;
pub use error::{ConnectError, Result};
pub use memory::MemoryWalletClient;
pub use modal::{ConnectorTile, ModalPresenter, WalletIcon};
pub use state::{ConnectionState, ConnectionStatus, Transition};
pub use store::ConnectionStore;
