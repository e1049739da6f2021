//! Wallet state management
//!
//! [`WalletContext`] is a `Copy` handle around one [`ConnectionStore`]. The
//! store stays the source of truth; the signals here mirror it so views
//! re-render when the client or the modal flag changes.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use lib_connect::{
    ConnectConfig, ConnectError, ConnectionState, ConnectionStore, ConnectorTile, ModalPresenter,
    WalletClient,
};
use shared::dto::wallet::{Account, ConnectorDescriptor};

const HOOK_NAME: &str = "use_wallet_context";
const PROVIDER_NAME: &str = "WalletProvider";

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    store: StoredValue<Rc<ConnectionStore>, LocalStorage>,
    state: RwSignal<ConnectionState>,
    modal_open: RwSignal<bool>,
    connectors: RwSignal<Vec<ConnectorDescriptor>>,
}

impl WalletContext {
    pub fn new(client: Rc<dyn WalletClient>, config: ConnectConfig) -> Self {
        let store = Rc::new(ConnectionStore::new(client, config));

        let context = Self {
            store: StoredValue::new_local(store.clone()),
            state: RwSignal::new(store.state()),
            modal_open: RwSignal::new(store.is_modal_open()),
            connectors: RwSignal::new(store.connectors()),
        };

        // Lives as long as the reactive owner that created the context.
        let subscription = store.watch(move |store, _| context.publish(store));
        StoredValue::new_local(subscription);

        context
    }

    fn store(&self) -> Rc<ConnectionStore> {
        self.store.get_value()
    }

    fn publish(&self, store: &ConnectionStore) {
        let state = store.state();
        if self.state.with_untracked(|current| *current != state) {
            self.state.set(state);
        }

        let open = store.is_modal_open();
        if self.modal_open.get_untracked() != open {
            self.modal_open.set(open);
        }

        let connectors = store.connectors();
        if self.connectors.with_untracked(|current| *current != connectors) {
            self.connectors.set(connectors);
        }
    }

    // -- reads (tracked) ---------------------------------------------------

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.is_connected)
    }

    pub fn is_connecting(&self) -> bool {
        self.state.with(|state| state.is_connecting)
    }

    pub fn account(&self) -> Option<Account> {
        self.state.with(|state| state.account.clone())
    }

    pub fn address(&self) -> Option<String> {
        self.state.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open.get()
    }

    pub fn tiles(&self) -> Vec<ConnectorTile> {
        self.connectors.track();
        ModalPresenter::new(&self.store()).tiles()
    }

    pub fn modal_title(&self) -> String {
        ModalPresenter::new(&self.store()).title().to_string()
    }

    // -- actions -----------------------------------------------------------

    pub fn open_wallet_modal(&self) {
        let store = self.store();
        store.open_wallet_modal();
        self.publish(&store);
    }

    pub fn close_wallet_modal(&self) {
        let store = self.store();
        store.close_wallet_modal();
        self.publish(&store);
    }

    /// Overlay click or Escape; a no-op when the modal is not dismissible.
    pub fn dismiss_wallet_modal(&self) {
        let store = self.store();
        ModalPresenter::new(&store).dismiss();
        self.publish(&store);
    }

    /// Escape while the modal is open dismisses it. Returns whether the key
    /// was consumed.
    pub fn handle_modal_key(&self, key: &str) -> bool {
        if key != "Escape" || !self.modal_open.get_untracked() {
            return false;
        }
        self.dismiss_wallet_modal();
        true
    }

    /// Hand the connector with `id` to the wallet client.
    pub fn connect(&self, id: &str) -> Result<(), ConnectError> {
        let store = self.store();
        let result = ModalPresenter::new(&store).activate(id);
        self.publish(&store);
        result
    }

    pub fn disconnect(&self) {
        let store = self.store();
        store.disconnect();
        self.publish(&store);
    }

    pub fn set_mounted(&self, mounted: bool) {
        let store = self.store();
        store.set_mounted(mounted);
        self.publish(&store);
    }
}

pub fn provide_wallet_context(client: Rc<dyn WalletClient>, config: ConnectConfig) -> WalletContext {
    let context = WalletContext::new(client, config);
    provide_context(context);
    context
}

/// Look up the wallet context provided by an enclosing `WalletProvider`.
pub fn try_use_wallet_context() -> Result<WalletContext, ConnectError> {
    use_context::<WalletContext>().ok_or(ConnectError::MissingProvider {
        hook: HOOK_NAME,
        provider: PROVIDER_NAME,
    })
}

/// Like [`try_use_wallet_context`], but panics outside a `WalletProvider`.
///
/// A missing provider is a wiring defect in the component tree, so it
/// fails the render instead of being handled.
pub fn use_wallet_context() -> WalletContext {
    match try_use_wallet_context() {
        Ok(context) => context,
        Err(err) => panic!("{}", err),
    }
}
