//! Ledger-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("balance overflow crediting {amount} to {address}")]
    BalanceOverflow { address: String, amount: u128 },
}
