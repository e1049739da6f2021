//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::ConnectButton;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Wallet"</span>
                </A>
                <div style="display: flex; gap: 16px; align-items: center;">
                    <A href="/status" attr:class="nav-link-clean">"Status"</A>
                    <ConnectButton/>
                </div>
            </div>
        </nav>
    }
}
