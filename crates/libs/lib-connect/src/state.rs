//! Connection state projection and status machine

use std::fmt;

use shared::dto::wallet::{Account, ConnectorDescriptor};

use crate::client::ClientSnapshot;

/// What descendant UI sees. Derived from a [`ClientSnapshot`] and the mount
/// flag on every sync, never mutated directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub is_connected: bool,
    pub is_connecting: bool,
    pub account: Option<Account>,
    pub connector: Option<ConnectorDescriptor>,
}

impl ConnectionState {
    /// Project client state for the UI.
    ///
    /// Before the UI has mounted everything reports disconnected, so that
    /// markup rendered ahead of hydration matches what the client renders
    /// first.
    pub fn derive(snapshot: &ClientSnapshot, mounted: bool) -> Self {
        if !mounted {
            return Self::default();
        }

        let is_connected = snapshot.active_connector.is_some() && snapshot.account.is_some();

        Self {
            is_connected,
            is_connecting: snapshot.is_connecting,
            account: snapshot.account.clone(),
            connector: snapshot.active_connector.clone(),
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        match (&self.account, &self.connector) {
            (Some(account), Some(connector)) if self.is_connected => ConnectionStatus::Connected {
                account: account.clone(),
                connector: connector.clone(),
            },
            _ if self.is_connecting => ConnectionStatus::Connecting,
            _ => ConnectionStatus::Disconnected,
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.address.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        account: Account,
        connector: ConnectorDescriptor,
    },
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected { .. } => "connected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Connected { account, connector } => {
                write!(f, "connected to {} via {}", account.display_name(), connector.name)
            }
            other => f.write_str(other.name()),
        }
    }
}

/// A status change observed by [`ConnectionStore::sync`](crate::ConnectionStore::sync)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: ConnectionStatus,
    pub to: ConnectionStatus,
}

impl Transition {
    /// The wallet just became connected
    pub fn connected(&self) -> bool {
        !self.from.is_connected() && self.to.is_connected()
    }

    pub fn disconnected(&self) -> bool {
        self.from.is_connected() && !self.to.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_snapshot() -> ClientSnapshot {
        ClientSnapshot {
            account: Some(Account::new("0x1")),
            is_connecting: false,
            active_connector: Some(ConnectorDescriptor::new("mm", "MetaMask")),
            connectors: vec![ConnectorDescriptor::new("mm", "MetaMask")],
        }
    }

    #[test]
    fn test_unmounted_hides_everything() {
        let mut snapshot = live_snapshot();
        snapshot.is_connecting = true;
        let state = ConnectionState::derive(&snapshot, false);
        assert_eq!(state, ConnectionState::default());
        assert_eq!(state.status(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_connected_needs_account_and_connector() {
        let state = ConnectionState::derive(&live_snapshot(), true);
        assert!(state.is_connected);
        assert_eq!(state.address(), Some("0x1"));

        let mut no_connector = live_snapshot();
        no_connector.active_connector = None;
        assert!(!ConnectionState::derive(&no_connector, true).is_connected);

        let mut no_account = live_snapshot();
        no_account.account = None;
        assert!(!ConnectionState::derive(&no_account, true).is_connected);
    }

    #[test]
    fn test_status_prefers_connected_over_connecting() {
        let mut snapshot = live_snapshot();
        snapshot.is_connecting = true;
        let status = ConnectionState::derive(&snapshot, true).status();
        assert!(status.is_connected());
        assert_eq!(status.to_string(), "connected to 0x1 via MetaMask");
    }

    #[test]
    fn test_connecting_status() {
        let snapshot = ClientSnapshot {
            is_connecting: true,
            ..ClientSnapshot::default()
        };
        let state = ConnectionState::derive(&snapshot, true);
        assert!(state.is_connecting);
        assert_eq!(state.status(), ConnectionStatus::Connecting);
    }

    #[test]
    fn test_transition_direction() {
        let connected = ConnectionState::derive(&live_snapshot(), true).status();
        let up = Transition {
            from: ConnectionStatus::Connecting,
            to: connected.clone(),
        };
        assert!(up.connected());
        assert!(!up.disconnected());

        let down = Transition {
            from: connected,
            to: ConnectionStatus::Disconnected,
        };
        assert!(down.disconnected());
    }
}
