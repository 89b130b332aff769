//! Reward-token ledger for the MERIT protocol.
//!
//! The poll engine only ever touches the ledger through the [`RewardLedger`]
//! trait: balance lookup, single mint, and atomic batch mint. Voting
//! eligibility is answered through [`EligibilityOracle`], which must reflect
//! live balances at call time.
//!
//! [`InMemoryLedger`] is the reference implementation of both.

pub mod error;
pub mod ledger;
pub mod memory;
pub mod ranking;

pub use error::LedgerError;
pub use ledger::{MintInstruction, RewardLedger};
pub use memory::InMemoryLedger;
pub use ranking::EligibilityOracle;
