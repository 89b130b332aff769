//! Settlement arithmetic — tallying a drained round into mint instructions.
//!
//! Two pools are distributed per settlement:
//! - the **supporter pool** is split evenly across voters with floor
//!   division; the remainder is intentionally not distributed;
//! - the **contributor pool** is first floor-divided into one budget per
//!   voter, then each budget is apportioned by that ballot's own point
//!   ratios. Budgets are never pooled across voters — a voter's influence is
//!   bounded to their own share no matter how other voters spread points.
//!   Cross-voter aggregation happens only by summing each candidate's
//!   independently computed shares.

use crate::error::PollError;
use crate::round::{Round, RoundId};
use merit_ledger::MintInstruction;
use merit_types::WalletAddress;

/// Outcome of settling one round.
#[derive(Clone, Debug)]
pub struct SettlementReport {
    /// The round that was drained.
    pub round_id: RoundId,
    /// Number of ballots tallied.
    pub voters: usize,
    /// Total units minted to voters (`floor(pool / voters) * voters`).
    pub supporter_total: u128,
    /// Total units minted to candidates (at most `floor(pool / voters) * voters`).
    pub contributor_total: u128,
    /// Credits to execute, merged per recipient, zero amounts dropped.
    pub mints: Vec<MintInstruction>,
}

/// Tally a round into its mint instructions. Pure — the round is not
/// consumed and no ledger is touched.
pub fn compute_mints(
    round: &Round,
    supporter_pool: u128,
    contributor_pool: u128,
) -> Result<SettlementReport, PollError> {
    let mut mints: Vec<MintInstruction> = Vec::new();
    let mut supporter_total = 0u128;
    let mut contributor_total = 0u128;

    let num_voters = round.votes.len();
    if num_voters > 0 {
        let per_voter_share = supporter_pool / num_voters as u128;
        for vote in &round.votes {
            supporter_total = supporter_total
                .checked_add(per_voter_share)
                .ok_or(PollError::Overflow)?;
            accumulate(&mut mints, &vote.voter, per_voter_share)?;
        }

        let per_voter_budget = contributor_pool / num_voters as u128;
        for vote in &round.votes {
            let total_points = vote.total_points() as u128;
            if total_points == 0 {
                // A zero-point ballot withholds its entire budget.
                continue;
            }
            for allocation in &vote.allocations {
                let share = per_voter_budget
                    .checked_mul(allocation.points as u128)
                    .ok_or(PollError::Overflow)?
                    / total_points;
                contributor_total = contributor_total
                    .checked_add(share)
                    .ok_or(PollError::Overflow)?;
                accumulate(&mut mints, &allocation.candidate, share)?;
            }
        }
    }

    Ok(SettlementReport {
        round_id: round.round_id,
        voters: num_voters,
        supporter_total,
        contributor_total,
        mints,
    })
}

/// Merge a credit into the instruction list, keeping first-touched order.
fn accumulate(
    mints: &mut Vec<MintInstruction>,
    recipient: &WalletAddress,
    amount: u128,
) -> Result<(), PollError> {
    if amount == 0 {
        return Ok(());
    }
    if let Some(existing) = mints.iter_mut().find(|m| m.recipient == *recipient) {
        existing.amount = existing
            .amount
            .checked_add(amount)
            .ok_or(PollError::Overflow)?;
    } else {
        mints.push(MintInstruction {
            recipient: recipient.clone(),
            amount,
        });
    }
    Ok(())
}
