//! Poll lifecycle for the MERIT protocol — candidacy, weighted voting, and
//! reward settlement.
//!
//! Participants nominate themselves as contributors for the open round; top
//! token-holders rank them with point ballots; settlement mints supporter and
//! contributor rewards from two pools and opens the next round.
//!
//! This crate handles:
//! - The round data model (candidates, ballots, wholesale replacement)
//! - Ballot validation (ordered checks, live top-holder eligibility)
//! - Settlement arithmetic (floor division, per-ballot apportionment)
//! - Engine snapshots for restart recovery

pub mod engine;
pub mod error;
pub mod gate;
pub mod round;
pub mod settlement;
pub mod snapshot;

pub use engine::PollEngine;
pub use error::PollError;
pub use round::{Allocation, Round, RoundId, Vote};
pub use settlement::SettlementReport;
pub use snapshot::PollSnapshot;
