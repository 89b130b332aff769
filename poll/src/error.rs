//! Poll-specific errors.
//!
//! Every rejection maps to its own stable variant so callers can retry with
//! corrected input; nothing is swallowed.

use merit_ledger::LedgerError;
use merit_types::WalletAddress;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollError {
    #[error("{0} is already a candidate in this round")]
    AlreadyCandidate(WalletAddress),

    #[error("ballot names no candidates")]
    EmptyCandidateList,

    #[error("ballot has {candidates} candidates but {points} point values")]
    MismatchedLengths { candidates: usize, points: usize },

    #[error("{0} is not a candidate in this round")]
    UnknownCandidate(WalletAddress),

    #[error("{0} has already voted in this round")]
    DuplicateVote(WalletAddress),

    #[error("point value {points} exceeds the per-candidate maximum {max}")]
    PointOutOfRange { points: u32, max: u32 },

    #[error("{0} is not among the top balance holders")]
    NotEligibleVoter(WalletAddress),

    #[error("{0} lacks the administrative capability")]
    NotAdmin(WalletAddress),

    #[error("arithmetic overflow in settlement")]
    Overflow,

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
