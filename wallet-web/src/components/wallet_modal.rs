//! Connector Selection Modal
//!
//! One tile per connector the wallet client offers. Clicking a tile only
//! forwards the connector to the client; the modal closes when the
//! connection lands.

use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use lib_connect::{ConnectorTile, WalletIcon};

use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletModal() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    // Focus usually stays on the button that opened the modal, outside the
    // dialog, so Escape is caught at the window.
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if wallet_ctx.handle_modal_key(&ev.key()) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || keydown.remove());

    move || {
        wallet_ctx.is_modal_open().then(|| {
            view! {
                <div class="wallet-modal" role="dialog" aria-modal="true">
                    <div class="wallet-modal-overlay" on:click=move |_| wallet_ctx.dismiss_wallet_modal()></div>
                    <div class="wallet-modal-panel">
                        <h2 class="wallet-modal-title">{wallet_ctx.modal_title()}</h2>
                        {move || {
                            wallet_ctx.is_connecting().then(|| view! {
                                <p class="wallet-modal-status">"Waiting for your wallet..."</p>
                            })
                        }}
                        <div class="wallet-modal-grid">
                            <For
                                each=move || wallet_ctx.tiles()
                                key=|tile| tile.id.clone()
                                children=move |tile: ConnectorTile| view! { <ConnectorTileView tile=tile/> }
                            />
                        </div>
                        {move || {
                            wallet_ctx.tiles().is_empty().then(|| view! {
                                <p class="wallet-modal-empty">
                                    "No wallet detected. Install a browser wallet extension and reload the page."
                                </p>
                            })
                        }}
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ConnectorTileView(tile: ConnectorTile) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let ConnectorTile { id, title, label, icon } = tile;
    let aria_label = label.clone();

    let on_click = move |_| {
        if let Err(e) = wallet_ctx.connect(&id) {
            log::warn!("Wallet connection not started: {}", e);
        }
    };

    let icon_class = match icon {
        WalletIcon::MetaMask => "wallet-tile-icon metamask",
        WalletIcon::WalletConnect => "wallet-tile-icon walletconnect",
    };

    view! {
        <div class="wallet-tile">
            <p class="wallet-tile-title">{title}</p>
            <p class="wallet-tile-label">{label}</p>
            <img class=icon_class src=icon.asset_path() alt=icon.alt_text()/>
            <button class="wallet-tile-button" aria-label=aria_label on:click=on_click></button>
        </div>
    }
}
