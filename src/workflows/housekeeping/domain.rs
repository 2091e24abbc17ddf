use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// External identifier of a housekeeper in the payroll system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HousekeeperId(pub i64);

impl std::fmt::Display for HousekeeperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only snapshot of a housekeeper taken at the start of a dispatch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Housekeeper {
    pub id: HousekeeperId,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub statement_email_body: String,
}

impl Housekeeper {
    /// The stored address, untouched, if it is present and non-blank.
    pub fn eligible_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|address| !address.trim().is_empty())
    }

    pub(crate) fn statement_request(&self, cutoff: NaiveDate) -> StatementRequest {
        StatementRequest {
            housekeeper_id: self.id,
            full_name: self.full_name.clone(),
            cutoff,
        }
    }
}

/// Arguments for generating one housekeeper's statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRequest {
    pub housekeeper_id: HousekeeperId,
    pub full_name: String,
    pub cutoff: NaiveDate,
}

/// Outbound message carrying a generated statement as attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementEmail {
    pub to: String,
    pub body: String,
    pub attachment: PathBuf,
    pub subject: String,
}
