//! The `RewardLedger` trait — the mutable ledger contract settlement runs
//! against.

use crate::error::LedgerError;
use merit_types::WalletAddress;
use serde::{Deserialize, Serialize};

/// A single credit produced by settlement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintInstruction {
    /// The wallet to credit.
    pub recipient: WalletAddress,
    /// The amount of newly created units.
    pub amount: u128,
}

/// Mutable reward-token ledger.
///
/// Implementors must treat `mint_batch` as transactional: either every
/// instruction is credited or the ledger is left untouched. Settlement
/// depends on this for its all-or-nothing contract.
pub trait RewardLedger {
    /// Current balance of an address. Unknown addresses hold zero.
    fn balance_of(&self, address: &WalletAddress) -> u128;

    /// Credit `amount` newly created units to `address`.
    ///
    /// Fails only when the credited balance would overflow.
    fn mint(&mut self, address: &WalletAddress, amount: u128) -> Result<(), LedgerError>;

    /// Apply a batch of mints atomically.
    fn mint_batch(&mut self, mints: &[MintInstruction]) -> Result<(), LedgerError>;
}
