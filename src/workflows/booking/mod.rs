//! Reservation conflict detection for a single owner's calendar.

pub mod domain;
mod overlap;
pub mod source;

pub use domain::{OwnerId, Reservation, ReservationId, ReservationStatus, StayWindow};
pub use overlap::{find_overlap_reference, OverlapCheckError, OverlapChecker};
pub use source::{InMemoryReservationBook, ReservationSource, ReservationSourceError};
