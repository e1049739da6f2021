//! Wallet Web App - Leptos Frontend

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use lib_connect::WalletClient;

use crate::components::{Navbar, WalletProvider};
use crate::pages::{HomePage, StatusPage};
use crate::services::wallet::BrowserWalletClient;
use crate::utils::constants::web_config;

#[component]
pub fn App() -> impl IntoView {
    let client: Rc<dyn WalletClient> = Rc::new(BrowserWalletClient::detect());

    view! {
        <WalletProvider client=client config=web_config()>
            <Router>
                <div class="app-container">
                    <Navbar/>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/status") view=StatusPage/>
                    </Routes>
                </div>
            </Router>
        </WalletProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
