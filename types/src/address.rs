//! Wallet address type with `mrt_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A MERIT wallet address, always prefixed with `mrt_`.
///
/// The address is an opaque identity as far as this workspace is concerned —
/// derivation from key material belongs to the host wallet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// The standard prefix for all MERIT wallet addresses.
    pub const PREFIX: &'static str = "mrt_";

    /// Create a new wallet address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `mrt_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with mrt_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address_roundtrip() {
        let addr = WalletAddress::new("mrt_alice");
        assert!(addr.is_valid());
        assert_eq!(addr.as_str(), "mrt_alice");
        assert_eq!(addr.to_string(), "mrt_alice");
    }

    #[test]
    #[should_panic(expected = "address must start with mrt_")]
    fn test_missing_prefix_panics() {
        let _ = WalletAddress::new("alice");
    }

    #[test]
    fn test_bare_prefix_is_invalid() {
        let addr = WalletAddress::new("mrt_");
        assert!(!addr.is_valid());
    }
}
