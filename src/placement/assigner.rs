//! Award-gated place assignment

use crate::config::{Participant, RankedParticipant, ThresholdConfig, AWARD_PLACES};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// First place handed out to participants without an award place
pub const FIRST_REMAINDER_PLACE: u32 = AWARD_PLACES as u32 + 1;

/// Anything that turns scores into places
pub trait PlaceCalculator<I> {
    fn calculate_places(
        &self,
        participants: &[Participant<I>],
        thresholds: &ThresholdConfig,
    ) -> Vec<RankedParticipant<I>>;
}

/// Default calculator backed by [`assign_places`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaderboardCalculator;

impl<I: Clone> PlaceCalculator<I> for LeaderboardCalculator {
    fn calculate_places(
        &self,
        participants: &[Participant<I>],
        thresholds: &ThresholdConfig,
    ) -> Vec<RankedParticipant<I>> {
        assign_places(participants, thresholds)
    }
}

/// Assign a place to every participant
///
/// Participants are ordered by descending score. The leading run of up to
/// three participants scoring at least `thresholds.third` compete for award
/// places: each takes the best open place (1, then 2, then 3) whose threshold
/// it meets. Everyone left over, including candidates that found no open place
/// they qualify for, is numbered from 4 in score order.
///
/// Scores are expected to be distinct and thresholds strictly decreasing.
/// Nothing is checked here; see [`assign_places_checked`](super::assign_places_checked).
///
/// Award holders come first in the returned vector, then the remainder.
pub fn assign_places<I: Clone>(
    participants: &[Participant<I>],
    thresholds: &ThresholdConfig,
) -> Vec<RankedParticipant<I>> {
    let mut ordered: Vec<&Participant<I>> = participants.iter().collect();
    ordered.sort_by(|a, b| b.score.cmp(&a.score));

    let candidates = award_candidate_count(&ordered, thresholds);

    let mut taken = [false; AWARD_PLACES];
    let mut awarded: SmallVec<[usize; AWARD_PLACES]> = SmallVec::new();
    let mut standings = Vec::with_capacity(ordered.len());

    for (index, participant) in ordered.iter().take(candidates).enumerate() {
        if let Some(place) = claim_award_place(participant.score, thresholds, &mut taken) {
            trace!(score = participant.score, place, "award place granted");
            awarded.push(index);
            standings.push(RankedParticipant::new(participant.id.clone(), place));
        }
    }

    let remainder = ordered
        .iter()
        .enumerate()
        .filter(|(index, _)| !awarded.contains(index))
        .map(|(_, participant)| participant);

    for (offset, participant) in remainder.enumerate() {
        standings.push(RankedParticipant::new(
            participant.id.clone(),
            FIRST_REMAINDER_PLACE + offset as u32,
        ));
    }

    debug!(
        participants = ordered.len(),
        candidates,
        awarded = awarded.len(),
        "places assigned"
    );

    standings
}

/// Length of the leading run (at most three) of a score-descending slice
/// whose scores reach the third-place threshold
pub(crate) fn award_candidate_count<I>(
    ordered: &[&Participant<I>],
    thresholds: &ThresholdConfig,
) -> usize {
    ordered
        .iter()
        .take(AWARD_PLACES)
        .take_while(|p| p.score >= thresholds.third)
        .count()
}

/// Take the first open award place the score qualifies for, in order 1, 2, 3
#[inline]
fn claim_award_place(
    score: u32,
    thresholds: &ThresholdConfig,
    taken: &mut [bool; AWARD_PLACES],
) -> Option<u32> {
    for (min_score, place) in thresholds.tiers() {
        let slot = &mut taken[(place - 1) as usize];
        if *slot || score < min_score {
            continue;
        }
        *slot = true;
        return Some(place);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn places(standings: &[RankedParticipant<&'static str>]) -> HashMap<&'static str, u32> {
        standings.iter().map(|r| (r.id, r.place)).collect()
    }

    fn run(scores: &[(&'static str, u32)], thresholds: ThresholdConfig) -> HashMap<&'static str, u32> {
        let participants: Vec<_> = scores
            .iter()
            .map(|&(id, score)| Participant::new(id, score))
            .collect();
        places(&assign_places(&participants, &thresholds))
    }

    #[test]
    fn test_all_award_places_filled() {
        let result = run(
            &[("A", 100), ("B", 90), ("C", 80), ("D", 10)],
            ThresholdConfig::new(95, 85, 75),
        );
        assert_eq!(result["A"], 1);
        assert_eq!(result["B"], 2);
        assert_eq!(result["C"], 3);
        assert_eq!(result["D"], 4);
    }

    #[test]
    fn test_unsorted_input() {
        let result = run(
            &[("D", 10), ("B", 90), ("A", 100), ("C", 80)],
            ThresholdConfig::new(95, 85, 75),
        );
        assert_eq!(result["A"], 1);
        assert_eq!(result["B"], 2);
        assert_eq!(result["C"], 3);
        assert_eq!(result["D"], 4);
    }

    #[test]
    fn test_second_place_skipped() {
        // Thresholds intentionally out of order: B clears third but not second
        let result = run(&[("A", 100), ("B", 90)], ThresholdConfig::new(95, 98, 10));
        assert_eq!(result["A"], 1);
        assert_eq!(result["B"], 3);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_single_participant_below_third() {
        let result = run(&[("A", 50)], ThresholdConfig::new(95, 85, 75));
        assert_eq!(result["A"], 4);
    }

    #[test]
    fn test_top_scorer_takes_lower_place() {
        let result = run(
            &[("A", 90), ("B", 80), ("C", 20)],
            ThresholdConfig::new(95, 85, 75),
        );
        assert_eq!(result["A"], 2);
        assert_eq!(result["B"], 3);
        assert_eq!(result["C"], 4);
    }

    #[test]
    fn test_candidate_without_open_place_joins_remainder() {
        // A takes 3; B and C only clear third, which is gone
        let result = run(
            &[("A", 80), ("B", 78), ("C", 76), ("D", 10)],
            ThresholdConfig::new(95, 85, 75),
        );
        assert_eq!(result["A"], 3);
        assert_eq!(result["B"], 4);
        assert_eq!(result["C"], 5);
        assert_eq!(result["D"], 6);
    }

    #[test]
    fn test_only_first_place_granted() {
        let result = run(
            &[("A", 100), ("B", 50), ("C", 40)],
            ThresholdConfig::new(95, 85, 75),
        );
        assert_eq!(result["A"], 1);
        assert_eq!(result["B"], 4);
        assert_eq!(result["C"], 5);
    }

    #[test]
    fn test_fourth_best_never_candidate() {
        let result = run(
            &[("A", 100), ("B", 99), ("C", 98), ("D", 97)],
            ThresholdConfig::new(10, 5, 1),
        );
        assert_eq!(result["A"], 1);
        assert_eq!(result["B"], 2);
        assert_eq!(result["C"], 3);
        assert_eq!(result["D"], 4);
    }

    #[test]
    fn test_nobody_qualifies() {
        let result = run(
            &[("A", 5), ("B", 4), ("C", 3)],
            ThresholdConfig::new(30, 20, 10),
        );
        assert_eq!(result["A"], 4);
        assert_eq!(result["B"], 5);
        assert_eq!(result["C"], 6);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let result = run(
            &[("A", 30), ("B", 20), ("C", 10)],
            ThresholdConfig::new(30, 20, 10),
        );
        assert_eq!(result["A"], 1);
        assert_eq!(result["B"], 2);
        assert_eq!(result["C"], 3);
    }

    #[test]
    fn test_award_holders_listed_first() {
        let participants = vec![
            Participant::new("low", 1),
            Participant::new("high", 100),
        ];
        let standings = assign_places(&participants, &ThresholdConfig::new(95, 85, 75));
        assert_eq!(
            standings,
            vec![
                RankedParticipant::new("high", 1),
                RankedParticipant::new("low", 4),
            ]
        );
        assert!(standings[0].is_award());
        assert!(!standings[1].is_award());
    }

    #[test]
    fn test_calculator_trait() {
        let participants = vec![
            Participant::new("A".to_string(), 100),
            Participant::new("B".to_string(), 90),
        ];
        let thresholds = ThresholdConfig::new(95, 85, 75);
        let calculator: &dyn PlaceCalculator<String> = &LeaderboardCalculator;
        assert_eq!(
            calculator.calculate_places(&participants, &thresholds),
            assign_places(&participants, &thresholds)
        );
    }

    #[test]
    fn test_claim_award_place_order() {
        let thresholds = ThresholdConfig::new(95, 85, 75);
        let mut taken = [false; AWARD_PLACES];
        assert_eq!(claim_award_place(99, &thresholds, &mut taken), Some(1));
        assert_eq!(claim_award_place(98, &thresholds, &mut taken), Some(2));
        assert_eq!(claim_award_place(97, &thresholds, &mut taken), Some(3));
        assert_eq!(claim_award_place(96, &thresholds, &mut taken), None);
    }
}
