use std::sync::Arc;

use tracing::debug;

use super::domain::Reservation;
use super::source::{ReservationSource, ReservationSourceError};

/// Returns the reference of the first reservation in `existing` whose stay
/// intersects the candidate's, or `None` when the calendar is free.
///
/// A cancelled candidate never conflicts, whatever its dates.
pub fn find_overlap_reference<'a, I>(candidate: &Reservation, existing: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    if candidate.is_cancelled() {
        return None;
    }

    let window = candidate.window();
    existing
        .into_iter()
        .find(|other| window.overlaps(&other.window()))
        .map(|other| other.reference.clone())
}

/// Checks a proposed reservation against the owner's active calendar.
pub struct OverlapChecker<S> {
    source: Arc<S>,
}

impl<S> OverlapChecker<S>
where
    S: ReservationSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Looks up the owner's active reservations and returns the first
    /// conflicting reference.
    ///
    /// Entries sharing the candidate's id are treated as the candidate itself
    /// and skipped, so a not-yet-stored candidate must carry an id no stored
    /// reservation uses (a placeholder such as `0` would hide reservation `0`).
    pub fn find_overlap(
        &self,
        candidate: &Reservation,
    ) -> Result<Option<String>, OverlapCheckError> {
        if candidate.is_cancelled() {
            return Ok(None);
        }

        let existing = self.source.active_reservations(candidate.owner_id)?;
        let conflict = find_overlap_reference(
            candidate,
            existing.iter().filter(|other| other.id != candidate.id),
        );

        if let Some(reference) = &conflict {
            debug!(
                reservation_id = candidate.id.0,
                owner_id = candidate.owner_id.0,
                conflicting_reference = %reference,
                "reservation overlaps an active booking"
            );
        }

        Ok(conflict)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OverlapCheckError {
    #[error(transparent)]
    Source(#[from] ReservationSourceError),
}
