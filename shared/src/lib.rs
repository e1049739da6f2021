//! # Shared Wallet Types
//!
//! Types exchanged between the connection core (`lib-connect`) and the
//! front end (`wallet-web`), plus the address helpers both use for display.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::wallet`]**: accounts and connector descriptors reported by a wallet client
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! DTOs serialize with `serde`. Browser wallet adapters hand back plain JS
//! objects with camelCase keys, so the structs rename accordingly:
//!
//! ```rust
//! use shared::dto::wallet::ConnectorDescriptor;
//!
//! let mm = ConnectorDescriptor::new("mm", "MetaMask");
//! assert_eq!(mm.name, "MetaMask");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
