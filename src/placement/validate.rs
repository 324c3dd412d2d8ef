//! Input checks for the validated placement entry point

use super::assign_places;
use crate::config::{Participant, RankedParticipant, ThresholdConfig, MAX_PARTICIPANTS};
use crate::error::{LeaderboardError, Result};
use ahash::AHashSet;
use std::hash::Hash;
use tracing::debug;

/// Check participants and thresholds against the placement preconditions
pub fn validate_input<I: Eq + Hash>(
    participants: &[Participant<I>],
    thresholds: &ThresholdConfig,
) -> Result<()> {
    let outcome = check(participants, thresholds);
    if let Err(LeaderboardError::InvalidInput(reason)) = &outcome {
        debug!(%reason, "leaderboard input rejected");
    }
    outcome
}

fn check<I: Eq + Hash>(participants: &[Participant<I>], thresholds: &ThresholdConfig) -> Result<()> {
    if !thresholds.is_strictly_decreasing() {
        return Err(LeaderboardError::InvalidInput(format!(
            "thresholds must satisfy first > second > third > 0, got {}/{}/{}",
            thresholds.first, thresholds.second, thresholds.third
        )));
    }

    if participants.is_empty() {
        return Err(LeaderboardError::InvalidInput(
            "at least one participant is required".to_string(),
        ));
    }

    if participants.len() > MAX_PARTICIPANTS {
        return Err(LeaderboardError::InvalidInput(format!(
            "at most {} participants are allowed, got {}",
            MAX_PARTICIPANTS,
            participants.len()
        )));
    }

    let mut scores = AHashSet::with_capacity(participants.len());
    let mut ids = AHashSet::with_capacity(participants.len());

    for participant in participants {
        if participant.score == 0 {
            return Err(LeaderboardError::InvalidInput(
                "scores must be positive".to_string(),
            ));
        }
        if !scores.insert(participant.score) {
            return Err(LeaderboardError::InvalidInput(format!(
                "duplicate score: {}",
                participant.score
            )));
        }
        if !ids.insert(&participant.id) {
            return Err(LeaderboardError::InvalidInput(
                "duplicate participant id".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate, then assign places. Nothing is computed for rejected input.
pub fn assign_places_checked<I: Clone + Eq + Hash>(
    participants: &[Participant<I>],
    thresholds: &ThresholdConfig,
) -> Result<Vec<RankedParticipant<I>>> {
    validate_input(participants, thresholds)?;
    Ok(assign_places(participants, thresholds))
}
