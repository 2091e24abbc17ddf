use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::housekeeping::{
    EmailError, EmailSender, Housekeeper, HousekeeperId, HousekeeperSource,
    HousekeeperSourceError, StatementDispatcher, StatementEmail, StatementError,
    StatementGenerator, StatementRequest,
};

pub(super) fn cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 27).expect("valid date")
}

pub(super) fn housekeeper(id: i64, email: Option<&str>) -> Housekeeper {
    Housekeeper {
        id: HousekeeperId(id),
        full_name: format!("Housekeeper {id}"),
        email: email.map(str::to_string),
        statement_email_body: format!("body-{id}"),
    }
}

pub(super) type TestDispatcher =
    StatementDispatcher<MemoryHousekeepers, MemoryGenerator, MemoryMailbox>;

pub(super) fn build_dispatcher(
    housekeepers: Vec<Housekeeper>,
    generator: MemoryGenerator,
) -> (TestDispatcher, Arc<MemoryGenerator>, Arc<MemoryMailbox>) {
    let generator = Arc::new(generator);
    let mailbox = Arc::new(MemoryMailbox::default());
    let dispatcher = StatementDispatcher::new(
        Arc::new(MemoryHousekeepers::new(housekeepers)),
        generator.clone(),
        mailbox.clone(),
    );
    (dispatcher, generator, mailbox)
}

pub(super) struct MemoryHousekeepers {
    housekeepers: Vec<Housekeeper>,
}

impl MemoryHousekeepers {
    pub(super) fn new(housekeepers: Vec<Housekeeper>) -> Self {
        Self { housekeepers }
    }
}

impl HousekeeperSource for MemoryHousekeepers {
    fn all_housekeepers(&self) -> Result<Vec<Housekeeper>, HousekeeperSourceError> {
        Ok(self.housekeepers.clone())
    }
}

pub(super) struct UnavailableHousekeepers;

impl HousekeeperSource for UnavailableHousekeepers {
    fn all_housekeepers(&self) -> Result<Vec<Housekeeper>, HousekeeperSourceError> {
        Err(HousekeeperSourceError::Unavailable("database offline".to_string()))
    }
}

/// Generator double returning a canned outcome per housekeeper.
///
/// Housekeepers without a canned outcome get `statements/<id>.pdf`.
#[derive(Default)]
pub(super) struct MemoryGenerator {
    outcomes: HashMap<HousekeeperId, Result<Option<String>, String>>,
    requests: Mutex<Vec<StatementRequest>>,
}

impl MemoryGenerator {
    pub(super) fn returning(mut self, id: i64, path: Option<&str>) -> Self {
        self.outcomes
            .insert(HousekeeperId(id), Ok(path.map(str::to_string)));
        self
    }

    pub(super) fn failing(mut self, id: i64, reason: &str) -> Self {
        self.outcomes
            .insert(HousekeeperId(id), Err(reason.to_string()));
        self
    }

    pub(super) fn requests(&self) -> Vec<StatementRequest> {
        self.requests.lock().expect("generator mutex poisoned").clone()
    }
}

impl StatementGenerator for MemoryGenerator {
    fn generate_statement(
        &self,
        request: &StatementRequest,
    ) -> Result<Option<String>, StatementError> {
        self.requests
            .lock()
            .expect("generator mutex poisoned")
            .push(request.clone());

        match self.outcomes.get(&request.housekeeper_id) {
            Some(Ok(path)) => Ok(path.clone()),
            Some(Err(reason)) => Err(StatementError::Rendering(reason.clone())),
            None => Ok(Some(format!("statements/{}.pdf", request.housekeeper_id))),
        }
    }
}

#[derive(Default)]
pub(super) struct MemoryMailbox {
    sent: Mutex<Vec<StatementEmail>>,
    reject: Option<String>,
}

impl MemoryMailbox {
    pub(super) fn rejecting(address: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject: Some(address.to_string()),
        }
    }

    pub(super) fn sent(&self) -> Vec<StatementEmail> {
        self.sent.lock().expect("mailbox mutex poisoned").clone()
    }
}

impl EmailSender for MemoryMailbox {
    fn email_file(&self, email: StatementEmail) -> Result<(), EmailError> {
        if self.reject.as_deref() == Some(email.to.as_str()) {
            return Err(EmailError::Rejected(format!("{} bounced", email.to)));
        }
        self.sent
            .lock()
            .expect("mailbox mutex poisoned")
            .push(email);
        Ok(())
    }
}
