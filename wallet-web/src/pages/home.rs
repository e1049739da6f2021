//! Landing page - prompts for a wallet until one is connected

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                {move || {
                    match wallet_ctx.account().filter(|_| wallet_ctx.is_connected()) {
                        Some(account) => view! {
                            <h1 class="card-title">"Welcome back"</h1>
                            <p style="font-family: monospace;">{account.display_name()}</p>
                        }
                        .into_any(),
                        None => view! {
                            <h1 class="card-title">"Connect your wallet"</h1>
                            <p style="margin-bottom: 24px;">
                                "Pick one of the wallets installed in this browser to continue."
                            </p>
                            <button class="btn" on:click=move |_| wallet_ctx.open_wallet_modal()>
                                "Choose wallet"
                            </button>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </div>
    }
}
