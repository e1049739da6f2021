//! Wallet Status Page - Show connected wallet info

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn StatusPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let navigate = use_navigate();

    let on_disconnect = move |_| {
        wallet_ctx.disconnect();
        navigate("/", Default::default());
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 500px;">
                <h1 class="card-title" style="text-align: center;">
                    "Wallet Status"
                </h1>

                {move || {
                    let state = wallet_ctx.state();
                    let disconnect = on_disconnect.clone();

                    match (state.account, state.connector) {
                        (Some(account), Some(connector)) if state.is_connected => view! {
                            <div>
                                <p class="label">"Status"</p>
                                <p style="color: var(--price-up); font-weight: bold;">"Connected"</p>

                                <p class="label">"Wallet"</p>
                                <p>{connector.name}</p>

                                <p class="label">"Address"</p>
                                <p style="font-family: monospace; word-break: break-all;">{account.address}</p>

                                <button class="btn" style="width: 100%; background: var(--bg-error);" on:click=disconnect>
                                    "Disconnect Wallet"
                                </button>
                            </div>
                        }
                        .into_any(),
                        _ if state.is_connecting => view! {
                            <p style="text-align: center;">"Waiting for your wallet to respond..."</p>
                        }
                        .into_any(),
                        _ => view! {
                            <div>
                                <p style="text-align: center; margin-bottom: 24px;">"No wallet connected"</p>
                                <button class="btn" style="width: 100%;" on:click=move |_| wallet_ctx.open_wallet_modal()>
                                    "Connect Wallet"
                                </button>
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </div>
    }
}
