use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub i64);

/// Identifier of the resource owner whose calendar a reservation occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub i64);

/// Booking status as labelled by the booking subsystem.
///
/// Only the exact label `"Cancelled"` marks a cancellation; any other label is
/// kept verbatim in `Other` and counts as active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    #[default]
    Active,
    Cancelled,
    Other(String),
}

impl ReservationStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
            Self::Other(label) => label,
        }
    }

    pub fn from_label(value: &str) -> Self {
        match value {
            "Active" => Self::Active,
            "Cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<String> for ReservationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Active" => Self::Active,
            "Cancelled" => Self::Cancelled,
            _ => Self::Other(value),
        }
    }
}

impl From<ReservationStatus> for String {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Half-open stay interval `[arrival, departure)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayWindow {
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
}

impl StayWindow {
    /// Touching endpoints do not overlap: a departure at the same instant as
    /// the next arrival leaves the calendar free.
    pub fn overlaps(&self, other: &StayWindow) -> bool {
        self.arrival < other.departure && self.departure > other.arrival
    }
}

/// Snapshot of a reservation as handed over by the booking subsystem.
///
/// `arrival < departure` is assumed, not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub owner_id: OwnerId,
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
    pub reference: String,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn window(&self) -> StayWindow {
        StayWindow {
            arrival: self.arrival,
            departure: self.departure,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.is_cancelled()
    }
}
