//! Candidacy and ballot validation.

use crate::error::PollError;
use crate::round::Round;
use merit_ledger::EligibilityOracle;
use merit_types::WalletAddress;

/// Check that `addr` may nominate itself in the open round.
///
/// Candidacy carries no holdings gate — anyone may nominate themselves; only
/// top holders rank nominees.
pub fn validate_candidacy(round: &Round, addr: &WalletAddress) -> Result<(), PollError> {
    if round.is_candidate(addr) {
        return Err(PollError::AlreadyCandidate(addr.clone()));
    }
    Ok(())
}

/// Check a ballot against the open round.
///
/// Checks run in a fixed order and short-circuit with a distinct error each.
/// Eligibility is evaluated last, against live balances: a voter's rights
/// track their holdings up to the moment they vote.
pub fn validate_ballot(
    round: &Round,
    voter: &WalletAddress,
    candidates: &[WalletAddress],
    points: &[u32],
    max_points: u32,
    rank: u32,
    oracle: &dyn EligibilityOracle,
) -> Result<(), PollError> {
    if candidates.is_empty() {
        return Err(PollError::EmptyCandidateList);
    }
    if candidates.len() != points.len() {
        return Err(PollError::MismatchedLengths {
            candidates: candidates.len(),
            points: points.len(),
        });
    }
    if let Some(unknown) = candidates.iter().find(|&c| !round.is_candidate(c)) {
        return Err(PollError::UnknownCandidate(unknown.clone()));
    }
    if round.has_voted(voter) {
        return Err(PollError::DuplicateVote(voter.clone()));
    }
    if let Some(points_value) = points.iter().copied().find(|&p| p > max_points) {
        return Err(PollError::PointOutOfRange {
            points: points_value,
            max: max_points,
        });
    }
    if !oracle.is_top_holder(voter, rank) {
        return Err(PollError::NotEligibleVoter(voter.clone()));
    }
    Ok(())
}
