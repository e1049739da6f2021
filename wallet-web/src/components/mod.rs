//! UI Components

pub mod connect_button;
pub mod navbar;
pub mod wallet_modal;
pub mod wallet_provider;

pub use connect_button::ConnectButton;
pub use navbar::Navbar;
pub use wallet_modal::WalletModal;
pub use wallet_provider::WalletProvider;
