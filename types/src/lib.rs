//! Fundamental types for the MERIT protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: wallet addresses and protocol parameters.

pub mod address;
pub mod params;

pub use address::WalletAddress;
pub use params::PollParams;
