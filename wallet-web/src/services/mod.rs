//! Wallet client implementations backed by the browser

pub mod wallet;
