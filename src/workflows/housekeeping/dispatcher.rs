use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use super::collaborators::{
    EmailError, EmailSender, HousekeeperSource, HousekeeperSourceError, StatementError,
    StatementGenerator,
};
use super::domain::{Housekeeper, HousekeeperId, StatementEmail};

/// Settings for outbound statement mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub subject_prefix: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            subject_prefix: "Sandpiper Statement".to_string(),
        }
    }
}

impl DispatchConfig {
    pub fn subject_for(&self, housekeeper: &Housekeeper, cutoff: NaiveDate) -> String {
        format!(
            "{} {} {}",
            self.subject_prefix,
            cutoff.format("%Y-%m"),
            housekeeper.full_name
        )
    }
}

/// Counts of what happened during one dispatch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub considered: usize,
    pub skipped_without_email: usize,
    pub generated: usize,
    pub skipped_without_artifact: usize,
    pub emailed: usize,
}

/// Service composing the housekeeper source, statement generator, and mail sender.
pub struct StatementDispatcher<H, G, E> {
    housekeepers: Arc<H>,
    generator: Arc<G>,
    sender: Arc<E>,
    config: DispatchConfig,
}

impl<H, G, E> StatementDispatcher<H, G, E>
where
    H: HousekeeperSource + 'static,
    G: StatementGenerator + 'static,
    E: EmailSender + 'static,
{
    pub fn new(housekeepers: Arc<H>, generator: Arc<G>, sender: Arc<E>) -> Self {
        Self::with_config(housekeepers, generator, sender, DispatchConfig::default())
    }

    pub fn with_config(
        housekeepers: Arc<H>,
        generator: Arc<G>,
        sender: Arc<E>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            housekeepers,
            generator,
            sender,
            config,
        }
    }

    /// Generate and mail a statement for every housekeeper with a usable address.
    ///
    /// Housekeepers are handled in source order. The first collaborator failure
    /// aborts the run; housekeepers after it are not processed.
    pub fn send_statement_emails(
        &self,
        cutoff: NaiveDate,
    ) -> Result<DispatchSummary, StatementDispatchError> {
        let span = info_span!("statement_dispatch", %cutoff);
        let _entered = span.enter();

        let housekeepers = self.housekeepers.all_housekeepers().map_err(|source| {
            warn!(error = %source, "could not load housekeepers");
            StatementDispatchError::Housekeepers(source)
        })?;

        let mut summary = DispatchSummary {
            considered: housekeepers.len(),
            ..DispatchSummary::default()
        };

        for housekeeper in &housekeepers {
            let Some(address) = housekeeper.eligible_email() else {
                summary.skipped_without_email += 1;
                continue;
            };

            let artifact = self
                .generator
                .generate_statement(&housekeeper.statement_request(cutoff))
                .map_err(|source| {
                    warn!(
                        housekeeper_id = housekeeper.id.0,
                        error = %source,
                        "statement generation failed"
                    );
                    StatementDispatchError::Generation {
                        housekeeper_id: housekeeper.id,
                        source,
                    }
                })?;
            summary.generated += 1;

            let Some(path) = artifact.filter(|path| !path.trim().is_empty()) else {
                summary.skipped_without_artifact += 1;
                continue;
            };

            let email = StatementEmail {
                to: address.to_string(),
                body: housekeeper.statement_email_body.clone(),
                attachment: PathBuf::from(path),
                subject: self.config.subject_for(housekeeper, cutoff),
            };

            self.sender.email_file(email).map_err(|source| {
                warn!(
                    housekeeper_id = housekeeper.id.0,
                    error = %source,
                    "statement email failed"
                );
                StatementDispatchError::Email {
                    housekeeper_id: housekeeper.id,
                    source,
                }
            })?;
            summary.emailed += 1;
        }

        info!(
            considered = summary.considered,
            generated = summary.generated,
            emailed = summary.emailed,
            "statement dispatch complete"
        );

        Ok(summary)
    }
}

/// Error raised by the statement dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum StatementDispatchError {
    #[error(transparent)]
    Housekeepers(#[from] HousekeeperSourceError),
    #[error("statement for housekeeper {housekeeper_id} could not be generated: {source}")]
    Generation {
        housekeeper_id: HousekeeperId,
        #[source]
        source: StatementError,
    },
    #[error("statement for housekeeper {housekeeper_id} could not be emailed: {source}")]
    Email {
        housekeeper_id: HousekeeperId,
        #[source]
        source: EmailError,
    },
}
