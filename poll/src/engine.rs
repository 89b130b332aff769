//! The poll engine — owns the active round and drives the reward lifecycle.

use crate::error::PollError;
use crate::gate;
use crate::round::{Round, RoundId, Vote};
use crate::settlement::{self, SettlementReport};
use crate::snapshot::{PollSnapshot, SNAPSHOT_VERSION};
use merit_ledger::{EligibilityOracle, RewardLedger};
use merit_types::{PollParams, WalletAddress};

/// One open round at a time, replaced wholesale at settlement.
///
/// The engine is the single synchronization boundary for round state: every
/// mutation takes `&mut self` and runs to completion, so a host embedding it
/// in a concurrent environment serializes writers by wrapping the engine in a
/// mutex or a single-writer task. Caller identity is always an explicit
/// parameter — the engine never consults ambient call context.
pub struct PollEngine {
    round: Round,
    params: PollParams,
    admin: WalletAddress,
}

impl PollEngine {
    /// Create an engine with default parameters. `admin` holds the
    /// administrative capability for parameter changes.
    pub fn new(admin: WalletAddress) -> Self {
        Self::with_params(admin, PollParams::default())
    }

    pub fn with_params(admin: WalletAddress, params: PollParams) -> Self {
        Self {
            round: Round::new(0),
            params,
            admin,
        }
    }

    /// Identifier of the currently open round.
    pub fn round_id(&self) -> RoundId {
        self.round.round_id
    }

    /// Candidates nominated in the current round, in nomination order.
    pub fn candidates(&self) -> &[WalletAddress] {
        &self.round.candidates
    }

    /// Ballots cast in the current round, in submission order.
    pub fn votes(&self) -> &[Vote] {
        &self.round.votes
    }

    pub fn params(&self) -> &PollParams {
        &self.params
    }

    /// Nominate `caller` as a contributor candidate for the current round.
    pub fn register_candidate(&mut self, caller: &WalletAddress) -> Result<(), PollError> {
        gate::validate_candidacy(&self.round, caller)?;
        self.round.candidates.push(caller.clone());
        tracing::debug!(candidate = %caller, round = self.round.round_id, "candidate registered");
        Ok(())
    }

    /// Cast `voter`'s ballot: parallel candidate and point lists, validated
    /// as a whole before any state changes.
    pub fn submit_vote(
        &mut self,
        voter: &WalletAddress,
        candidates: &[WalletAddress],
        points: &[u32],
        oracle: &dyn EligibilityOracle,
    ) -> Result<(), PollError> {
        gate::validate_ballot(
            &self.round,
            voter,
            candidates,
            points,
            PollParams::MAX_POINTS,
            self.params.voter_rank_threshold,
            oracle,
        )?;
        let vote = Vote::new(voter.clone(), candidates, points);
        tracing::debug!(
            voter = %voter,
            allocations = vote.allocations.len(),
            round = self.round.round_id,
            "ballot accepted"
        );
        self.round.votes.push(vote);
        Ok(())
    }

    /// Settle the current round: tally ballots into mint instructions, apply
    /// them atomically against the ledger, then open the next round.
    ///
    /// All-or-nothing: if any mint fails, the error is propagated, no credit
    /// is durable, and the round is left open and unchanged.
    pub fn settle(&mut self, ledger: &mut dyn RewardLedger) -> Result<SettlementReport, PollError> {
        let report = settlement::compute_mints(
            &self.round,
            self.params.supporter_reward_pool,
            PollParams::CONTRIBUTOR_REWARD_POOL,
        )?;
        ledger.mint_batch(&report.mints)?;
        self.round = self.round.next();
        tracing::info!(
            round = report.round_id,
            voters = report.voters,
            supporter_total = %report.supporter_total,
            contributor_total = %report.contributor_total,
            "round settled"
        );
        Ok(report)
    }

    /// Overwrite the supporter reward pool for the current and all
    /// subsequent rounds.
    pub fn set_supporter_reward_pool(
        &mut self,
        caller: &WalletAddress,
        value: u128,
    ) -> Result<(), PollError> {
        if *caller != self.admin {
            return Err(PollError::NotAdmin(caller.clone()));
        }
        self.params.supporter_reward_pool = value;
        Ok(())
    }

    /// Capture the open round and parameters for restart recovery.
    pub fn to_snapshot(&self) -> PollSnapshot {
        PollSnapshot {
            version: SNAPSHOT_VERSION,
            round: self.round.clone(),
            params: self.params.clone(),
            admin: self.admin.clone(),
        }
    }

    /// Restore an engine from a snapshot.
    pub fn from_snapshot(snapshot: PollSnapshot) -> Self {
        Self {
            round: snapshot.round,
            params: snapshot.params,
            admin: snapshot.admin,
        }
    }
}
