//! In-process wallet client.
//!
//! [`MemoryWalletClient`] keeps the connector list, account and connecting
//! flag in memory and lets the host drive them directly. Connect attempts
//! stay pending until [`complete_connect`](MemoryWalletClient::complete_connect)
//! or [`reject_connect`](MemoryWalletClient::reject_connect) settles them.
//! Used by native hosts and the test suites.

use std::cell::RefCell;

use shared::dto::wallet::{Account, ConnectorDescriptor};

use crate::client::{ClientSnapshot, Listener, ListenerSet, Subscription, WalletClient};
use crate::error::{ConnectError, Result};

#[derive(Default)]
struct MemoryInner {
    snapshot: ClientSnapshot,
    pending: Option<ConnectorDescriptor>,
    connect_calls: Vec<String>,
}

#[derive(Default)]
pub struct MemoryWalletClient {
    inner: RefCell<MemoryInner>,
    listeners: ListenerSet,
}

impl MemoryWalletClient {
    pub fn new(connectors: Vec<ConnectorDescriptor>) -> Self {
        let client = Self::default();
        client.inner.borrow_mut().snapshot.connectors = connectors;
        client
    }

    pub fn set_connectors(&self, connectors: Vec<ConnectorDescriptor>) {
        self.update(|inner| inner.snapshot.connectors = connectors);
    }

    pub fn set_account(&self, account: Option<Account>) {
        self.update(|inner| inner.snapshot.account = account);
    }

    pub fn set_active_connector(&self, connector: Option<ConnectorDescriptor>) {
        self.update(|inner| inner.snapshot.active_connector = connector);
    }

    pub fn set_connecting(&self, connecting: bool) {
        self.update(|inner| inner.snapshot.is_connecting = connecting);
    }

    /// Settle the pending attempt successfully with `account`.
    ///
    /// Without a pending attempt the account is attached to whatever
    /// connector is already active.
    pub fn complete_connect(&self, account: Account) {
        self.update(|inner| {
            if let Some(connector) = inner.pending.take() {
                inner.snapshot.active_connector = Some(connector);
            }
            inner.snapshot.is_connecting = false;
            inner.snapshot.account = Some(account);
        });
    }

    /// Settle the pending attempt as refused by the wallet.
    pub fn reject_connect(&self) {
        self.update(|inner| {
            inner.pending = None;
            inner.snapshot.is_connecting = false;
        });
    }

    pub fn pending_connector(&self) -> Option<ConnectorDescriptor> {
        self.inner.borrow().pending.clone()
    }

    /// Connector ids passed to `connect`, in call order
    pub fn connect_calls(&self) -> Vec<String> {
        self.inner.borrow().connect_calls.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn update(&self, change: impl FnOnce(&mut MemoryInner)) {
        change(&mut *self.inner.borrow_mut());
        self.listeners.notify();
    }
}

impl WalletClient for MemoryWalletClient {
    fn snapshot(&self) -> ClientSnapshot {
        self.inner.borrow().snapshot.clone()
    }

    fn connect(&self, connector: &ConnectorDescriptor) -> Result<()> {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.snapshot.connector(&connector.id).is_none() {
                return Err(ConnectError::Client(format!(
                    "connector `{}` is not available",
                    connector.id
                )));
            }
            inner.connect_calls.push(connector.id.clone());
            inner.pending = Some(connector.clone());
            inner.snapshot.is_connecting = true;
        }
        self.listeners.notify();
        Ok(())
    }

    fn disconnect(&self) {
        self.update(|inner| {
            inner.pending = None;
            inner.snapshot.is_connecting = false;
            inner.snapshot.account = None;
            inner.snapshot.active_connector = None;
        });
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.add(listener)
    }
}
