//! Account address type — the caller identity for every ballot operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account address, as asserted by the surrounding caller context.
///
/// The core treats addresses as opaque identity keys; it never derives,
/// validates, or signs them (key management is an external collaborator).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Create a new account address from a raw string.
    ///
    /// # Panics
    /// Panics if the string is empty.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(!s.is_empty(), "account address must not be empty");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_roundtrips_raw_string() {
        let a = AccountAddress::new("0x00a1");
        assert_eq!(a.as_str(), "0x00a1");
        assert_eq!(a.to_string(), "0x00a1");
        assert!(a.is_valid());
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_address_rejected() {
        AccountAddress::new("");
    }
}
