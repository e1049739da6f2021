//! Injected Browser Wallet Client via wasm-bindgen
//!
//! Implements [`WalletClient`] on top of EIP-1193 providers injected into the
//! page (`window.ethereum`, or each entry of `window.ethereum.providers`
//! when several extensions are installed). Every injected provider becomes
//! one connector.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use lib_connect::{
    ClientSnapshot, ConnectError, Listener, ListenerSet, Result, Subscription, WalletClient,
};
use serde::Deserialize;
use shared::dto::wallet::{Account, ConnectorDescriptor};
use wasm_bindgen::prelude::*;

// ============================================================================
// PROVIDER DETECTION AND REQUESTS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function injectedProviders() {
    const eth = window.ethereum;
    if (!eth) {
        return [];
    }
    if (Array.isArray(eth.providers) && eth.providers.length > 0) {
        return eth.providers;
    }
    return [eth];
}

export function injectedProviderFlags() {
    return injectedProviders().map((p, index) => ({
        index: index,
        isMetaMask: !!p.isMetaMask,
        isCoinbaseWallet: !!p.isCoinbaseWallet,
        isBraveWallet: !!p.isBraveWallet,
        isRabby: !!p.isRabby,
    }));
}

export async function requestAccounts(index) {
    const provider = injectedProviders()[index];
    if (!provider) {
        throw new Error('wallet provider ' + index + ' is no longer injected');
    }
    return await provider.request({ method: 'eth_requestAccounts' });
}

export function watchAccounts(index, callback) {
    const provider = injectedProviders()[index];
    if (!provider || typeof provider.on !== 'function') {
        return function() {};
    }
    provider.on('accountsChanged', callback);
    return function() {
        if (typeof provider.removeListener === 'function') {
            provider.removeListener('accountsChanged', callback);
        }
    };
}
")]
extern "C" {
    /// Flags of every injected provider, in injection order
    #[wasm_bindgen(js_name = injectedProviderFlags)]
    fn injected_provider_flags() -> JsValue;

    /// Prompt the provider at `index` for account access
    #[wasm_bindgen(js_name = requestAccounts, catch)]
    async fn request_accounts(index: u32) -> std::result::Result<JsValue, JsValue>;

    /// Register an `accountsChanged` callback; returns the function that removes it
    #[wasm_bindgen(js_name = watchAccounts)]
    fn watch_accounts(index: u32, callback: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;
}

/// Identity flags an injected provider sets on itself
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFlags {
    pub index: u32,
    #[serde(default)]
    pub is_meta_mask: bool,
    #[serde(default)]
    pub is_coinbase_wallet: bool,
    #[serde(default)]
    pub is_brave_wallet: bool,
    #[serde(default)]
    pub is_rabby: bool,
}

impl ProviderFlags {
    /// Several wallets also set `isMetaMask` for compatibility, so the more
    /// specific flags are checked first.
    pub fn wallet_name(&self) -> &'static str {
        if self.is_rabby {
            "Rabby"
        } else if self.is_brave_wallet {
            "Brave Wallet"
        } else if self.is_coinbase_wallet {
            "Coinbase Wallet"
        } else if self.is_meta_mask {
            "MetaMask"
        } else {
            "Browser Wallet"
        }
    }
}

/// Turn detected providers into connectors, numbering repeated names.
pub fn connectors_from_flags(flags: &[ProviderFlags]) -> Vec<(ConnectorDescriptor, u32)> {
    let mut connectors: Vec<(ConnectorDescriptor, u32)> = Vec::with_capacity(flags.len());

    for provider in flags {
        let base = provider.wallet_name();
        let seen = connectors
            .iter()
            .filter(|(c, _)| c.name == base || c.name.starts_with(&format!("{} (", base)))
            .count();
        let name = if seen == 0 {
            base.to_string()
        } else {
            format!("{} ({})", base, seen + 1)
        };
        let id = format!("injected-{}", provider.index);
        connectors.push((ConnectorDescriptor::new(id, name), provider.index));
    }

    connectors
}

/// First address of an `eth_requestAccounts` / `accountsChanged` payload
pub fn first_account(accounts: JsValue) -> Option<String> {
    serde_wasm_bindgen::from_value::<Vec<String>>(accounts)
        .ok()
        .and_then(|list| list.into_iter().next())
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

// ============================================================================
// WALLET CLIENT
// ============================================================================

/// Keeps an `accountsChanged` callback registered with the provider
struct AccountWatch {
    _callback: Closure<dyn FnMut(JsValue)>,
    unregister: js_sys::Function,
}

impl Drop for AccountWatch {
    fn drop(&mut self) {
        if let Err(err) = self.unregister.call0(&JsValue::NULL) {
            log::warn!("failed to remove accountsChanged listener: {}", js_error_message(&err));
        }
    }
}

/// How a finished `eth_requestAccounts` call changed the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settlement {
    /// A later connect or a disconnect superseded the attempt
    Stale,
    Failed,
    Connected,
}

#[derive(Default)]
struct BrowserInner {
    snapshot: ClientSnapshot,
    providers: Vec<(ConnectorDescriptor, u32)>,
    // Bumped by every connect and disconnect; stale results are dropped.
    attempt: u64,
    watch: Option<AccountWatch>,
}

impl BrowserInner {
    /// Start a connect attempt and return its number.
    fn begin_connect(&mut self) -> u64 {
        self.attempt += 1;
        self.snapshot.is_connecting = true;
        self.attempt
    }

    /// Apply the result of attempt `attempt`. `outcome` carries the first
    /// returned address, or the provider's error message.
    fn settle(
        &mut self,
        attempt: u64,
        outcome: std::result::Result<Option<String>, String>,
        connector: ConnectorDescriptor,
    ) -> Settlement {
        if self.attempt != attempt {
            log::debug!("dropping stale result from {}", connector.name);
            return Settlement::Stale;
        }
        self.snapshot.is_connecting = false;

        match outcome {
            Ok(Some(address)) => {
                log::info!("{} connected", connector.name);
                self.snapshot.account = Some(Account::new(address));
                self.snapshot.active_connector = Some(connector);
                Settlement::Connected
            }
            Ok(None) => {
                log::warn!("{} returned no accounts", connector.name);
                Settlement::Failed
            }
            Err(message) => {
                log::warn!("{} connection failed: {}", connector.name, message);
                Settlement::Failed
            }
        }
    }

    /// `accountsChanged` from the connected provider.
    fn accounts_changed(&mut self, address: Option<String>) {
        match address {
            Some(address) => {
                log::info!("wallet switched account");
                self.snapshot.account = Some(Account::new(address));
            }
            None => {
                // Locked or revoked from inside the extension. The watch
                // stays registered until the next connect or disconnect
                // replaces it.
                log::info!("wallet revoked account access");
                self.snapshot.account = None;
                self.snapshot.active_connector = None;
            }
        }
    }

    /// Forget the session and invalidate any attempt in flight.
    fn forget(&mut self) -> Option<AccountWatch> {
        self.attempt += 1;
        self.snapshot.is_connecting = false;
        self.snapshot.account = None;
        self.snapshot.active_connector = None;
        self.watch.take()
    }
}

#[derive(Clone, Default)]
pub struct BrowserWalletClient {
    inner: Rc<RefCell<BrowserInner>>,
    listeners: ListenerSet,
}

impl BrowserWalletClient {
    /// Detect injected providers once; the connector list does not change
    /// afterwards.
    pub fn detect() -> Self {
        let flags: Vec<ProviderFlags> = serde_wasm_bindgen::from_value(injected_provider_flags())
            .unwrap_or_else(|err| {
                log::warn!("could not read injected wallet providers: {}", err);
                vec![]
            });
        let providers = connectors_from_flags(&flags);
        log::info!("detected {} injected wallet provider(s)", providers.len());

        let client = Self::default();
        {
            let mut inner = client.inner.borrow_mut();
            inner.snapshot.connectors = providers.iter().map(|(c, _)| c.clone()).collect();
            inner.providers = providers;
        }
        client
    }

    fn provider_index(&self, connector_id: &str) -> Option<u32> {
        self.inner
            .borrow()
            .providers
            .iter()
            .find(|(c, _)| c.id == connector_id)
            .map(|(_, index)| *index)
    }

    fn watch(index: u32, inner: Weak<RefCell<BrowserInner>>, listeners: ListenerSet) -> AccountWatch {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::new(move |accounts: JsValue| {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            inner.borrow_mut().accounts_changed(first_account(accounts));
            listeners.notify();
        });
        let unregister = watch_accounts(index, &callback);

        AccountWatch {
            _callback: callback,
            unregister,
        }
    }
}

impl WalletClient for BrowserWalletClient {
    fn snapshot(&self) -> ClientSnapshot {
        self.inner.borrow().snapshot.clone()
    }

    fn connect(&self, connector: &ConnectorDescriptor) -> Result<()> {
        let index = self.provider_index(&connector.id).ok_or_else(|| {
            ConnectError::Client(format!("{} is not injected in this browser", connector.name))
        })?;

        let attempt = self.inner.borrow_mut().begin_connect();
        self.listeners.notify();

        let inner = self.inner.clone();
        let listeners = self.listeners.clone();
        let connector = connector.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = request_accounts(index)
                .await
                .map(first_account)
                .map_err(|err| js_error_message(&err));

            let settlement = inner.borrow_mut().settle(attempt, outcome, connector);
            match settlement {
                Settlement::Stale => return,
                Settlement::Connected => {
                    let watch = Self::watch(index, Rc::downgrade(&inner), listeners.clone());
                    inner.borrow_mut().watch = Some(watch);
                }
                Settlement::Failed => {}
            }

            listeners.notify();
        });

        Ok(())
    }

    /// EIP-1193 has no disconnect request; the client forgets the session.
    fn disconnect(&self) {
        let watch = self.inner.borrow_mut().forget();
        drop(watch);
        self.listeners.notify();
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.add(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(index: u32) -> ProviderFlags {
        ProviderFlags {
            index,
            ..ProviderFlags::default()
        }
    }

    #[test]
    fn test_wallet_name_prefers_specific_flags() {
        let brave = ProviderFlags {
            is_meta_mask: true,
            is_brave_wallet: true,
            ..flags(0)
        };
        assert_eq!(brave.wallet_name(), "Brave Wallet");

        let metamask = ProviderFlags {
            is_meta_mask: true,
            ..flags(0)
        };
        assert_eq!(metamask.wallet_name(), "MetaMask");
        assert_eq!(flags(0).wallet_name(), "Browser Wallet");
    }

    #[test]
    fn test_connectors_from_flags() {
        let detected = vec![
            ProviderFlags {
                is_meta_mask: true,
                ..flags(0)
            },
            ProviderFlags {
                is_coinbase_wallet: true,
                ..flags(1)
            },
        ];
        let connectors = connectors_from_flags(&detected);

        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[0].0, ConnectorDescriptor::new("injected-0", "MetaMask"));
        assert_eq!(connectors[1].0, ConnectorDescriptor::new("injected-1", "Coinbase Wallet"));
        assert_eq!(connectors[1].1, 1);
    }

    #[test]
    fn test_repeated_names_are_numbered() {
        let connectors = connectors_from_flags(&[flags(0), flags(1), flags(2)]);
        let names: Vec<&str> = connectors.iter().map(|(c, _)| c.name.as_str()).collect();
        assert_eq!(names, vec!["Browser Wallet", "Browser Wallet (2)", "Browser Wallet (3)"]);
    }

    fn mm() -> ConnectorDescriptor {
        ConnectorDescriptor::new("injected-0", "MetaMask")
    }

    fn connected(inner: &BrowserInner) -> bool {
        inner.snapshot.account.is_some() && inner.snapshot.active_connector.is_some()
    }

    #[test]
    fn test_settle_success_connects() {
        let mut inner = BrowserInner::default();
        let attempt = inner.begin_connect();
        assert!(inner.snapshot.is_connecting);

        let settlement = inner.settle(attempt, Ok(Some("0xabc".to_string())), mm());

        assert_eq!(settlement, Settlement::Connected);
        assert!(!inner.snapshot.is_connecting);
        assert_eq!(inner.snapshot.account, Some(Account::new("0xabc")));
        assert_eq!(inner.snapshot.active_connector, Some(mm()));
    }

    #[test]
    fn test_settle_without_accounts_stays_disconnected() {
        let mut inner = BrowserInner::default();
        let attempt = inner.begin_connect();

        assert_eq!(inner.settle(attempt, Ok(None), mm()), Settlement::Failed);
        assert!(!inner.snapshot.is_connecting);
        assert!(!connected(&inner));
    }

    #[test]
    fn test_settle_rejection_stays_disconnected() {
        let mut inner = BrowserInner::default();
        let attempt = inner.begin_connect();

        let settlement = inner.settle(attempt, Err("User rejected the request.".to_string()), mm());
        assert_eq!(settlement, Settlement::Failed);
        assert!(!inner.snapshot.is_connecting);
        assert!(!connected(&inner));
    }

    #[test]
    fn test_superseded_attempt_is_dropped() {
        let mut inner = BrowserInner::default();
        let first = inner.begin_connect();
        let second = inner.begin_connect();

        assert_eq!(inner.settle(first, Ok(Some("0x1".to_string())), mm()), Settlement::Stale);
        assert!(inner.snapshot.is_connecting);
        assert!(!connected(&inner));

        assert_eq!(inner.settle(second, Ok(Some("0x2".to_string())), mm()), Settlement::Connected);
        assert_eq!(inner.snapshot.account, Some(Account::new("0x2")));
    }

    #[test]
    fn test_disconnect_mid_attempt_drops_result() {
        let mut inner = BrowserInner::default();
        let attempt = inner.begin_connect();
        assert!(inner.forget().is_none());
        assert!(!inner.snapshot.is_connecting);

        assert_eq!(inner.settle(attempt, Ok(Some("0x1".to_string())), mm()), Settlement::Stale);
        assert!(!connected(&inner));
    }

    #[test]
    fn test_accounts_changed_switches_account() {
        let mut inner = BrowserInner::default();
        let attempt = inner.begin_connect();
        inner.settle(attempt, Ok(Some("0x1".to_string())), mm());

        inner.accounts_changed(Some("0x2".to_string()));
        assert_eq!(inner.snapshot.account, Some(Account::new("0x2")));
        assert_eq!(inner.snapshot.active_connector, Some(mm()));
    }

    #[test]
    fn test_revoked_access_clears_connector() {
        let mut inner = BrowserInner::default();
        let attempt = inner.begin_connect();
        inner.settle(attempt, Ok(Some("0x1".to_string())), mm());

        inner.accounts_changed(None);
        assert_eq!(inner.snapshot.account, None);
        assert_eq!(inner.snapshot.active_connector, None);
    }
}
