//! Deserialization of leaderboard input from Python dicts and objects

use super::{Participant, ThresholdConfig};
use crate::error::LeaderboardError;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods};
use pyo3::{Bound, PyAny, PyResult};

/// Helper to get attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, PyAny>, name: &str) -> Option<Bound<'py, PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

/// First attribute present under any of the given names
fn get_any_attr<'py>(obj: &Bound<'py, PyAny>, names: &[&str]) -> PyResult<Bound<'py, PyAny>> {
    names
        .iter()
        .find_map(|name| get_attr_opt(obj, name).filter(|v| !v.is_none()))
        .ok_or_else(|| {
            LeaderboardError::DeserializationError(format!("missing field: {}", names[0])).into()
        })
}

/// Deserialize thresholds from a dict or an object with attributes
/// Expected format: {"first": 95, "second": 85, "third": 75}
pub fn deserialize_thresholds(obj: &Bound<'_, PyAny>) -> PyResult<ThresholdConfig> {
    Ok(ThresholdConfig {
        first: get_any_attr(obj, &["first", "FirstPlaceMinScore", "first_place_min_score"])?
            .extract()?,
        second: get_any_attr(obj, &["second", "SecondPlaceMinScore", "second_place_min_score"])?
            .extract()?,
        third: get_any_attr(obj, &["third", "ThirdPlaceMinScore", "third_place_min_score"])?
            .extract()?,
    })
}

/// Deserialize participants from a sequence of dicts or objects
/// Expected format: [{"user_id": "id1", "score": 10}, ...]
pub fn deserialize_participants(users: &Bound<'_, PyAny>) -> PyResult<Vec<Participant>> {
    let mut participants = Vec::new();

    for user in users.try_iter()? {
        let user = user?;
        let id_obj = get_any_attr(&user, &["user_id", "id", "UserId"])?;
        // Support both string and integer ids
        let id: String = match id_obj.extract::<String>() {
            Ok(id) => id,
            Err(_) => id_obj.str()?.extract()?,
        };
        let score: u32 = get_any_attr(&user, &["score", "Score"])?.extract()?;
        participants.push(Participant::new(id, score));
    }

    Ok(participants)
}
