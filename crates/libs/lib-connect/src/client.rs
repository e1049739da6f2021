//! The wallet client seam.
//!
//! A [`WalletClient`] is the external wallet-connection library: it owns the
//! connector list, performs connection handshakes, and holds the live
//! account. The store only reads it through [`WalletClient::snapshot`] and
//! listens for changes through [`WalletClient::subscribe`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use shared::dto::wallet::{Account, ConnectorDescriptor};

use crate::error::Result;

/// Change callback registered with a client.
pub type Listener = Rc<dyn Fn()>;

/// One read of the client's live state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSnapshot {
    pub account: Option<Account>,
    pub is_connecting: bool,
    pub active_connector: Option<ConnectorDescriptor>,
    pub connectors: Vec<ConnectorDescriptor>,
}

impl ClientSnapshot {
    pub fn connector(&self, id: &str) -> Option<&ConnectorDescriptor> {
        self.connectors.iter().find(|c| c.id == id)
    }
}

pub trait WalletClient {
    /// Current state of the client.
    fn snapshot(&self) -> ClientSnapshot;

    /// Start a connection through `connector`.
    ///
    /// Returns once the attempt has been handed off; completion is reported
    /// later through subscribers. An `Err` means the attempt never started.
    fn connect(&self, connector: &ConnectorDescriptor) -> Result<()>;

    fn disconnect(&self);

    /// Register `listener` to run after every state change.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

/// Keeps a listener registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unregisters the listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn cancel(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Registry {
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Listener bookkeeping shared by client implementations.
///
/// Clones share the same registry.
#[derive(Clone, Default)]
pub struct ListenerSet {
    registry: Rc<RefCell<Registry>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Listener) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, listener));
            id
        };

        let registry: Weak<RefCell<Registry>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        })
    }

    /// Run every listener.
    ///
    /// Listeners usually read the client back, so the registry is not
    /// borrowed while they run.
    pub fn notify(&self) {
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscription_runs_once_on_drop() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));
        drop(sub);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancel_does_not_double_run() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        Subscription::new(move || c.set(c.get() + 1)).cancel();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_listener_set_add_notify_remove() {
        let set = ListenerSet::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = set.add(Rc::new(move || h.set(h.get() + 1)));
        let _other = set.add(Rc::new(|| {}));

        set.notify();
        assert_eq!(hits.get(), 1);
        assert_eq!(set.len(), 2);

        drop(sub);
        set.notify();
        assert_eq!(hits.get(), 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_listener_may_subscribe_during_notify() {
        let set = ListenerSet::new();
        let inner = set.clone();
        let keep = Rc::new(RefCell::new(Vec::new()));
        let k = keep.clone();
        let _sub = set.add(Rc::new(move || {
            k.borrow_mut().push(inner.add(Rc::new(|| {})));
        }));

        set.notify();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_snapshot_connector_lookup() {
        let snapshot = ClientSnapshot {
            connectors: vec![
                ConnectorDescriptor::new("mm", "MetaMask"),
                ConnectorDescriptor::new("wc", "WalletConnect"),
            ],
            ..ClientSnapshot::default()
        };
        assert_eq!(snapshot.connector("wc").map(|c| c.name.as_str()), Some("WalletConnect"));
        assert!(snapshot.connector("ledger").is_none());
    }
}
