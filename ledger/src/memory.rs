//! In-memory reference ledger.

use std::collections::HashMap;

use crate::error::LedgerError;
use crate::ledger::{MintInstruction, RewardLedger};
use merit_types::WalletAddress;
use serde::{Deserialize, Serialize};

/// A `HashMap`-backed ledger for tests, simulations, and single-process
/// deployments.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryLedger {
    pub(crate) balances: HashMap<WalletAddress, u128>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite an address's balance (genesis seeding / test setup).
    pub fn set_balance(&mut self, address: WalletAddress, amount: u128) {
        if amount == 0 {
            self.balances.remove(&address);
        } else {
            self.balances.insert(address, amount);
        }
    }

    /// Number of addresses holding a non-zero balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Sum of all balances.
    pub fn total_supply(&self) -> u128 {
        self.balances.values().sum()
    }
}

impl RewardLedger for InMemoryLedger {
    fn balance_of(&self, address: &WalletAddress) -> u128 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    fn mint(&mut self, address: &WalletAddress, amount: u128) -> Result<(), LedgerError> {
        let entry = self.balances.entry(address.clone()).or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow {
                address: address.to_string(),
                amount,
            })?;
        Ok(())
    }

    fn mint_batch(&mut self, mints: &[MintInstruction]) -> Result<(), LedgerError> {
        // Stage every new balance first so a failing instruction leaves the
        // ledger untouched.
        let mut staged: HashMap<&WalletAddress, u128> = HashMap::new();
        for instruction in mints {
            let current = staged
                .get(&instruction.recipient)
                .copied()
                .unwrap_or_else(|| self.balance_of(&instruction.recipient));
            let next = current.checked_add(instruction.amount).ok_or_else(|| {
                LedgerError::BalanceOverflow {
                    address: instruction.recipient.to_string(),
                    amount: instruction.amount,
                }
            })?;
            staged.insert(&instruction.recipient, next);
        }
        for (address, balance) in staged {
            self.balances.insert(address.clone(), balance);
        }
        Ok(())
    }
}
