//! # Connection State Store
//!
//! [`ConnectionStore`] is the single owner of the modal flag and the cached
//! [`ConnectionState`]. Hosts hold it by `Rc` and pass it down explicitly;
//! the web front end wraps one store in a reactive context.
//!
//! State only moves through [`ConnectionStore::sync`]: it re-reads the
//! client, derives the new state, and applies the one automatic transition
//! this store owns: a connected wallet closes the modal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use shared::dto::wallet::{Account, ConnectorDescriptor};

use crate::client::{ClientSnapshot, Subscription, WalletClient};
use crate::config::ConnectConfig;
use crate::error::Result;
use crate::state::{ConnectionState, ConnectionStatus, Transition};

#[derive(Debug, Default)]
struct StoreInner {
    mounted: bool,
    modal_open: bool,
    state: ConnectionState,
}

pub struct ConnectionStore {
    client: Rc<dyn WalletClient>,
    config: ConnectConfig,
    inner: RefCell<StoreInner>,
}

impl ConnectionStore {
    /// Create an unmounted store. Nothing reports connected until
    /// [`set_mounted`](Self::set_mounted) is called.
    pub fn new(client: Rc<dyn WalletClient>, config: ConnectConfig) -> Self {
        Self {
            client,
            config,
            inner: RefCell::new(StoreInner::default()),
        }
    }

    pub fn config(&self) -> &ConnectConfig {
        &self.config
    }

    pub fn client(&self) -> &Rc<dyn WalletClient> {
        &self.client
    }

    pub fn snapshot(&self) -> ClientSnapshot {
        self.client.snapshot()
    }

    pub fn connectors(&self) -> Vec<ConnectorDescriptor> {
        self.client.snapshot().connectors
    }

    // -- projected state --------------------------------------------------

    pub fn state(&self) -> ConnectionState {
        self.inner.borrow().state.clone()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.inner.borrow().state.status()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.borrow().state.is_connected
    }

    pub fn is_connecting(&self) -> bool {
        self.inner.borrow().state.is_connecting
    }

    pub fn account(&self) -> Option<Account> {
        self.inner.borrow().state.account.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    pub fn is_modal_open(&self) -> bool {
        self.inner.borrow().modal_open
    }

    // -- operations -------------------------------------------------------

    /// Record that the UI finished mounting (or was torn down) and resync.
    pub fn set_mounted(&self, mounted: bool) -> Option<Transition> {
        self.inner.borrow_mut().mounted = mounted;
        self.sync()
    }

    /// Show the connector modal.
    ///
    /// Ignored while connected, since a connected wallet keeps the modal closed.
    pub fn open_wallet_modal(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_connected {
            log::debug!("wallet modal not opened: already connected");
            return;
        }
        if !inner.modal_open {
            log::debug!("wallet modal opened");
        }
        inner.modal_open = true;
    }

    /// Hide the connector modal. A connection already handed to the client
    /// keeps running.
    pub fn close_wallet_modal(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.modal_open {
            log::debug!("wallet modal closed");
        }
        inner.modal_open = false;
    }

    /// Forward a connector selection to the client.
    ///
    /// No local state changes here; the modal closes on the sync that
    /// observes the finished connection.
    pub fn connect(&self, connector: &ConnectorDescriptor) -> Result<()> {
        log::info!("connecting through {} ({})", connector.name, connector.id);
        self.client.connect(connector)
    }

    pub fn disconnect(&self) -> Option<Transition> {
        log::info!("disconnecting wallet");
        self.client.disconnect();
        self.sync()
    }

    /// Re-read the client and apply the resulting state.
    ///
    /// Returns the status change, if any. Whenever the new state is
    /// connected the modal is forced closed, whether or not the status
    /// changed on this sync.
    pub fn sync(&self) -> Option<Transition> {
        let snapshot = self.client.snapshot();

        let mut inner = self.inner.borrow_mut();
        let next = ConnectionState::derive(&snapshot, inner.mounted);

        if next.is_connected && inner.modal_open {
            log::debug!("wallet modal closed: wallet connected");
            inner.modal_open = false;
        }

        let from = inner.state.status();
        let to = next.status();
        inner.state = next;

        if from == to {
            return None;
        }

        log::info!("wallet {} -> {}", from.name(), to);
        Some(Transition { from, to })
    }

    /// Subscribe to the client so every change resyncs this store, then
    /// runs `on_change` with the resulting transition.
    ///
    /// The subscription holds only a weak reference; once the store is
    /// dropped the listener does nothing.
    pub fn watch(
        self: &Rc<Self>,
        on_change: impl Fn(&ConnectionStore, Option<Transition>) + 'static,
    ) -> Subscription {
        let store: Weak<Self> = Rc::downgrade(self);
        self.client.subscribe(Rc::new(move || {
            if let Some(store) = store.upgrade() {
                let transition = store.sync();
                on_change(&store, transition);
            }
        }))
    }
}
