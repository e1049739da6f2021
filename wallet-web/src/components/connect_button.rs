//! Connect Button - opens the wallet modal or shows the connected account

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    move || {
        if let Some(account) = wallet_ctx.account().filter(|_| wallet_ctx.is_connected()) {
            view! {
                <div class="wallet-connected">
                    <span class="wallet-address" title=account.address.clone()>
                        {account.display_name()}
                    </span>
                    <button class="btn btn-secondary" on:click=move |_| wallet_ctx.disconnect()>
                        "Disconnect"
                    </button>
                </div>
            }
            .into_any()
        } else if wallet_ctx.is_connecting() {
            view! {
                <button class="btn" disabled=true>
                    "Connecting..."
                </button>
            }
            .into_any()
        } else {
            view! {
                <button class="btn" on:click=move |_| wallet_ctx.open_wallet_modal()>
                    "Connect Wallet"
                </button>
            }
            .into_any()
        }
    }
}
