use serde::{Deserialize, Serialize};

use crate::utils::truncate_address;

/// Identity of the currently connected wallet account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens_name: Option<String>,
}

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ens_name: None,
        }
    }

    pub fn with_ens_name(mut self, name: impl Into<String>) -> Self {
        self.ens_name = Some(name.into());
        self
    }

    /// ENS name when known, otherwise the shortened address
    pub fn display_name(&self) -> String {
        match &self.ens_name {
            Some(name) => name.clone(),
            None => truncate_address(&self.address),
        }
    }
}

/// A named strategy for establishing a wallet connection.
///
/// Owned by the wallet client; the UI only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ConnectorDescriptor {
    pub id: String,
    pub name: String,
}

impl ConnectorDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_json_uses_camel_case() {
        let account = Account::new("0x1").with_ens_name("alice.eth");
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, r#"{"address":"0x1","ensName":"alice.eth"}"#);
    }

    #[test]
    fn test_account_without_ens_omits_field() {
        let account: Account = serde_json::from_str(r#"{"address":"0xabc"}"#).unwrap();
        assert_eq!(account, Account::new("0xabc"));
        assert_eq!(serde_json::to_string(&account).unwrap(), r#"{"address":"0xabc"}"#);
    }

    #[test]
    fn test_display_name() {
        let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
        assert_eq!(Account::new(addr).display_name(), "0x71C7...976F");
        assert_eq!(
            Account::new(addr).with_ens_name("vitalik.eth").display_name(),
            "vitalik.eth"
        );
    }
}
