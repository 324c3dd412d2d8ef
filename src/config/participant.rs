//! Participant and standing structures

use serde::{Deserialize, Serialize};

/// A scored competitor. `I` is an opaque identifier supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant<I = String> {
    #[serde(alias = "user_id", alias = "userId", alias = "UserId")]
    pub id: I,
    #[serde(alias = "Score")]
    pub score: u32,
}

impl<I> Participant<I> {
    pub fn new(id: I, score: u32) -> Self {
        Self { id, score }
    }
}

/// A participant with its final place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedParticipant<I = String> {
    #[serde(alias = "user_id", alias = "userId", alias = "UserId")]
    pub id: I,
    #[serde(alias = "Place")]
    pub place: u32,
}

impl<I> RankedParticipant<I> {
    pub fn new(id: I, place: u32) -> Self {
        Self { id, place }
    }

    /// Places 1, 2 and 3 are award places
    #[inline]
    pub fn is_award(&self) -> bool {
        (1..=super::AWARD_PLACES as u32).contains(&self.place)
    }
}
