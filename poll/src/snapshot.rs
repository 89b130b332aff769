//! Engine snapshots — persist the open round across restarts.
//!
//! Only the current round is captured; settled rounds are gone for good.

use crate::error::PollError;
use crate::round::Round;
use merit_types::{PollParams, WalletAddress};
use serde::{Deserialize, Serialize};

/// Snapshot format version, bumped on layout changes.
pub(crate) const SNAPSHOT_VERSION: u32 = 1;

/// A serializable capture of the engine: the open round, the parameters, and
/// the administrative wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSnapshot {
    pub version: u32,
    pub round: Round,
    pub params: PollParams,
    pub admin: WalletAddress,
}

impl PollSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, PollError> {
        bincode::serialize(self).map_err(|e| PollError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PollError> {
        let snapshot: PollSnapshot =
            bincode::deserialize(bytes).map_err(|e| PollError::Snapshot(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PollError::Snapshot(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }
}
