use std::sync::RwLock;

use super::domain::{OwnerId, Reservation};

/// Lookup of the reservations currently occupying an owner's calendar.
///
/// Implementations decide what "active" means (cancelled and expired stays are
/// normally excluded) and return reservations in a stable order.
pub trait ReservationSource: Send + Sync {
    fn active_reservations(
        &self,
        owner_id: OwnerId,
    ) -> Result<Vec<Reservation>, ReservationSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReservationSourceError {
    #[error("reservation source unavailable: {0}")]
    Unavailable(String),
}

fn poisoned() -> ReservationSourceError {
    ReservationSourceError::Unavailable("reservation book poisoned".to_string())
}

/// Insertion-ordered reservation store that treats every non-cancelled entry as active.
#[derive(Debug, Default)]
pub struct InMemoryReservationBook {
    reservations: RwLock<Vec<Reservation>>,
}

impl InMemoryReservationBook {
    pub fn new(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: RwLock::new(reservations),
        }
    }

    pub fn record(&self, reservation: Reservation) -> Result<(), ReservationSourceError> {
        self.reservations
            .write()
            .map_err(|_| poisoned())?
            .push(reservation);
        Ok(())
    }
}

impl ReservationSource for InMemoryReservationBook {
    fn active_reservations(
        &self,
        owner_id: OwnerId,
    ) -> Result<Vec<Reservation>, ReservationSourceError> {
        let guard = self.reservations.read().map_err(|_| poisoned())?;

        Ok(guard
            .iter()
            .filter(|reservation| {
                reservation.owner_id == owner_id && !reservation.is_cancelled()
            })
            .cloned()
            .collect())
    }
}
