//! Protocol parameters — the tunable values plus the protocol constants.

use serde::{Deserialize, Serialize};

/// Parameters governing a voting round.
///
/// `supporter_reward_pool` and `voter_rank_threshold` are tunable at runtime
/// (admin-gated); the contributor pool and the per-candidate point cap are
/// protocol constants with no configuration path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollParams {
    /// Total reward pool minted to voters per settlement, split evenly.
    /// Default: 3000.
    pub supporter_reward_pool: u128,

    /// Rank cutoff for voting eligibility: a voter must be among the top-K
    /// balance holders at submission time. Default: 10.
    pub voter_rank_threshold: u32,
}

impl PollParams {
    /// Total reward pool minted to candidates per settlement, apportioned
    /// per-ballot by point ratios. Protocol constant.
    pub const CONTRIBUTOR_REWARD_POOL: u128 = 5000;

    /// Maximum points a single ballot may assign to one candidate.
    pub const MAX_POINTS: u32 = 20;

    /// MERIT defaults — the intended configuration for the live network.
    pub fn merit_defaults() -> Self {
        Self {
            supporter_reward_pool: 3000,
            voter_rank_threshold: 10,
        }
    }
}

/// Default is the MERIT configuration.
impl Default for PollParams {
    fn default() -> Self {
        Self::merit_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PollParams::default();
        assert_eq!(params.supporter_reward_pool, 3000);
        assert_eq!(params.voter_rank_threshold, 10);
        assert_eq!(PollParams::CONTRIBUTOR_REWARD_POOL, 5000);
        assert_eq!(PollParams::MAX_POINTS, 20);
    }
}
