//! # Data Transfer Objects (DTOs)
//!
//! - [`wallet`] - accounts and connectors as reported by a wallet client
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, matching what injected browser providers expose
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//!
//! ```text
//! { "address": "0x71c7656ec7ab88b098defb751b7401b5f6d8976f", "ensName": "alice.eth" }
//! { "id": "injected", "name": "MetaMask" }
//! ```

pub mod wallet;

pub use wallet::*;
