//! Wallet Provider Component
//!
//! Owns the connection store for its subtree and renders the connector
//! modal next to its children.

use std::rc::Rc;

use leptos::prelude::*;
use lib_connect::{config::connect_config, ConnectConfig, WalletClient};

use crate::components::WalletModal;
use crate::hooks::use_is_mounted;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn WalletProvider(
    /// Wallet library the store reads from and forwards connects to
    client: Rc<dyn WalletClient>,
    /// Falls back to the global configuration
    #[prop(optional)]
    config: Option<ConnectConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(|| connect_config().clone());
    let wallet_ctx = provide_wallet_context(client, config);

    let mounted = use_is_mounted();
    Effect::new(move || {
        wallet_ctx.set_mounted(mounted.get());
    });

    view! {
        {children()}
        <WalletModal/>
    }
}
