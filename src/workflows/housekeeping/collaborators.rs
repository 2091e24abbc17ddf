use super::domain::{Housekeeper, StatementEmail, StatementRequest};

/// Storage abstraction listing every housekeeper, unfiltered.
pub trait HousekeeperSource: Send + Sync {
    fn all_housekeepers(&self) -> Result<Vec<Housekeeper>, HousekeeperSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HousekeeperSourceError {
    #[error("housekeeper source unavailable: {0}")]
    Unavailable(String),
}

/// Produces a statement document and reports where it was written.
///
/// `Ok(None)` (or a blank path) means nothing was produced for this housekeeper.
pub trait StatementGenerator: Send + Sync {
    fn generate_statement(
        &self,
        request: &StatementRequest,
    ) -> Result<Option<String>, StatementError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    #[error("statement rendering failed: {0}")]
    Rendering(String),
    #[error("statement storage failed: {0}")]
    Storage(String),
}

/// Outbound mail hook (SMTP relay, transactional mail API, ...).
pub trait EmailSender: Send + Sync {
    fn email_file(&self, email: StatementEmail) -> Result<(), EmailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("email rejected: {0}")]
    Rejected(String),
    #[error("email transport unavailable: {0}")]
    Transport(String),
}
