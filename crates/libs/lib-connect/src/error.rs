//! # Connection Errors
//!
//! The store surfaces very few errors of its own. Wallet-side failures
//! (rejected requests, locked extensions) stay inside the [`WalletClient`]
//! and show up only as state; what remains here are wiring defects and
//! requests the client refused to start.
//!
//! [`WalletClient`]: crate::client::WalletClient
//!
//! ```rust
//! use lib_connect::error::ConnectError;
//!
//! let err = ConnectError::MissingProvider {
//!     hook: "use_wallet_context",
//!     provider: "WalletProvider",
//! };
//! assert_eq!(
//!     err.to_string(),
//!     "Must call `use_wallet_context` within a `WalletProvider` component."
//! );
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, ConnectError>`.
pub type Result<T> = std::result::Result<T, ConnectError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// The connection context was looked up outside its provider's subtree.
    ///
    /// This is a programming error in the component tree, not a runtime
    /// condition to recover from.
    #[error("Must call `{hook}` within a `{provider}` component.")]
    MissingProvider {
        hook: &'static str,
        provider: &'static str,
    },

    /// No connector with this id is offered by the wallet client.
    #[error("Unknown connector: {0}")]
    UnknownConnector(String),

    /// The wallet client refused to start a connection attempt.
    #[error("Wallet client error: {0}")]
    Client(String),

    /// Invalid connection configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConnectError {
    /// True for errors that indicate broken wiring rather than user action.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, ConnectError::MissingProvider { .. } | ConnectError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConnectError::UnknownConnector("ledger".into()).to_string(),
            "Unknown connector: ledger"
        );
        assert_eq!(
            ConnectError::Client("no provider injected".into()).to_string(),
            "Wallet client error: no provider injected"
        );
    }

    #[test]
    fn test_usage_errors() {
        let missing = ConnectError::MissingProvider {
            hook: "use_wallet_context",
            provider: "WalletProvider",
        };
        assert!(missing.is_usage_error());
        assert!(!ConnectError::UnknownConnector("x".into()).is_usage_error());
    }
}
