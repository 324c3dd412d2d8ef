//! Configuration module for leaderboard data structures
//!
//! This module holds the input and output records and handles loading them
//! from JSON documents or, with the `python` feature, from Python objects.

mod participant;
#[cfg(feature = "python")]
mod python;
mod thresholds;

pub use participant::*;
#[cfg(feature = "python")]
pub use python::*;
pub use thresholds::*;

use crate::error::Result;

/// Upper bound on the number of participants in one competition
pub const MAX_PARTICIPANTS: usize = 100;

/// Parse a threshold record from JSON
///
/// Accepts both `{"first": .., "second": .., "third": ..}` and the
/// `FirstPlaceMinScore` style field names.
pub fn thresholds_from_json(json: &str) -> Result<ThresholdConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a participant list from JSON
/// Expected format: `[{"id": "..", "score": ..}, ...]`
pub fn participants_from_json(json: &str) -> Result<Vec<Participant>> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize standings as a JSON array of `{"id", "place"}` records
pub fn standings_to_json(standings: &[RankedParticipant]) -> Result<String> {
    Ok(serde_json::to_string(standings)?)
}
