//! Leaderboard Core - Award-gated place assignment for scored competitions
//!
//! Given participant scores and minimum scores for the first three places,
//! this crate assigns a final place to every participant. Python bindings via
//! PyO3 are available behind the `python` feature.
//!
//! ```
//! use leaderboard_core::config::{Participant, ThresholdConfig};
//! use leaderboard_core::placement::assign_places;
//!
//! let participants = vec![Participant::new("a", 100), Participant::new("b", 50)];
//! let standings = assign_places(&participants, &ThresholdConfig::new(95, 85, 75));
//! assert_eq!(standings[0].place, 1);
//! assert_eq!(standings[1].place, 4);
//! ```

pub mod config;
pub mod error;
pub mod placement;

pub use crate::config::{Participant, RankedParticipant, ThresholdConfig};
pub use crate::error::{LeaderboardError, Result};
pub use crate::placement::{assign_places, assign_places_checked, LeaderboardCalculator, PlaceCalculator};

#[cfg(feature = "python")]
mod python {
    use crate::config::{deserialize_participants, deserialize_thresholds, ThresholdConfig};
    use crate::placement::assign_places_checked;
    use once_cell::sync::OnceCell;
    use parking_lot::RwLock;
    use pyo3::prelude::*;
    use tracing::debug;

    // ========================================================================
    // Cached Configuration
    // ========================================================================

    /// Thresholds cached by `init_thresholds`
    static CACHED_THRESHOLDS: OnceCell<RwLock<ThresholdConfig>> = OnceCell::new();

    // ========================================================================
    // Python Functions
    // ========================================================================

    /// Cache the award thresholds (call once at startup, again to replace)
    ///
    /// # Arguments
    /// * `thresholds` - dict or object with `first`/`second`/`third`
    ///   (or `FirstPlaceMinScore`/`SecondPlaceMinScore`/`ThirdPlaceMinScore`)
    #[pyfunction]
    fn init_thresholds(thresholds: &Bound<'_, PyAny>) -> PyResult<()> {
        let thresholds = deserialize_thresholds(thresholds)?;
        debug!(?thresholds, "award thresholds initialized");

        // If already initialized, update the config
        let cached = CACHED_THRESHOLDS.get_or_init(|| RwLock::new(thresholds));
        *cached.write() = thresholds;

        Ok(())
    }

    /// Check if thresholds are initialized
    #[pyfunction]
    fn is_thresholds_initialized() -> bool {
        CACHED_THRESHOLDS.get().is_some()
    }

    /// Assign places to users
    ///
    /// # Arguments
    /// * `users` - list of dicts/objects with `user_id` (or `id`) and `score`
    /// * `thresholds` - optional thresholds; the cached ones are used if omitted
    ///
    /// # Returns
    /// A list of `(user_id, place)` tuples
    ///
    /// # Raises
    /// RuntimeError if no thresholds are given and `init_thresholds` was not called,
    /// ValueError if the input violates the placement preconditions
    #[pyfunction]
    #[pyo3(signature = (users, thresholds=None))]
    fn calculate_places(
        users: &Bound<'_, PyAny>,
        thresholds: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<Vec<(String, u32)>> {
        let thresholds = match thresholds {
            Some(obj) => deserialize_thresholds(obj)?,
            None => *CACHED_THRESHOLDS
                .get()
                .ok_or_else(|| {
                    PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                        "Thresholds not initialized. Call init_thresholds() first.",
                    )
                })?
                .read(),
        };

        let participants = deserialize_participants(users)?;
        let standings = assign_places_checked(&participants, &thresholds)?;

        Ok(standings.into_iter().map(|r| (r.id, r.place)).collect())
    }

    // ========================================================================
    // Python Module Definition
    // ========================================================================

    /// Python module definition
    #[pymodule]
    fn leaderboard_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(init_thresholds, m)?)?;
        m.add_function(wrap_pyfunction!(is_thresholds_initialized, m)?)?;
        m.add_function(wrap_pyfunction!(calculate_places, m)?)?;
        Ok(())
    }
}
