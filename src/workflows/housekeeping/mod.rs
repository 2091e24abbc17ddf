//! Monthly statement generation and delivery for housekeepers.

pub mod collaborators;
pub mod domain;
mod dispatcher;

#[cfg(test)]
mod tests;

pub use collaborators::{
    EmailError, EmailSender, HousekeeperSource, HousekeeperSourceError, StatementError,
    StatementGenerator,
};
pub use dispatcher::{
    DispatchConfig, DispatchSummary, StatementDispatchError, StatementDispatcher,
};
pub use domain::{Housekeeper, HousekeeperId, StatementEmail, StatementRequest};
