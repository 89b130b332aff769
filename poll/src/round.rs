//! Round data model.

use merit_types::WalletAddress;
use serde::{Deserialize, Serialize};

/// Monotonically increasing round identifier, starting at 0.
pub type RoundId = u64;

/// A single point allocation within a ballot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub candidate: WalletAddress,
    pub points: u32,
}

/// One voter's ballot — point allocations across candidates, supplied
/// atomically in one submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub voter: WalletAddress,
    pub allocations: Vec<Allocation>,
}

impl Vote {
    /// Zip parallel candidate and point lists into a ballot.
    /// The gate has already checked that both lists have equal length.
    pub fn new(voter: WalletAddress, candidates: &[WalletAddress], points: &[u32]) -> Self {
        let allocations = candidates
            .iter()
            .cloned()
            .zip(points.iter().copied())
            .map(|(candidate, points)| Allocation { candidate, points })
            .collect();
        Self { voter, allocations }
    }

    /// Sum of all points on this ballot.
    pub fn total_points(&self) -> u64 {
        self.allocations.iter().map(|a| a.points as u64).sum()
    }
}

/// The single active round: candidate set and cast ballots.
///
/// `candidates` is insertion-ordered and unique; each address appears at most
/// once as a `Vote.voter`. Both invariants are enforced by the gate before
/// any mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round_id: RoundId,
    pub candidates: Vec<WalletAddress>,
    pub votes: Vec<Vote>,
}

impl Round {
    pub fn new(round_id: RoundId) -> Self {
        Self {
            round_id,
            candidates: Vec::new(),
            votes: Vec::new(),
        }
    }

    /// Whether `addr` is nominated in this round.
    pub fn is_candidate(&self, addr: &WalletAddress) -> bool {
        self.candidates.iter().any(|c| c == addr)
    }

    /// Whether `addr` has already cast a ballot this round.
    pub fn has_voted(&self, addr: &WalletAddress) -> bool {
        self.votes.iter().any(|v| v.voter == *addr)
    }

    /// The empty successor round.
    pub fn next(&self) -> Round {
        Round::new(self.round_id + 1)
    }
}
