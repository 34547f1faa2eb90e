//! Hand-off point for submitted registrations.

use chrono::Utc;

use crate::model::RegistrationRecord;

/// Receives a registration once the form is valid and submitted.
///
/// Fire-and-forget: the form does not wait for or react to the outcome.
pub trait SubmitSink {
    fn accept(&mut self, record: RegistrationRecord);
}

/// Writes each submitted record as a JSON line to the application log.
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn accept(&mut self, record: RegistrationRecord) {
        match serde_json::to_string(&record) {
            Ok(json) => log::info!("registration submitted at {}: {json}", Utc::now().to_rfc3339()),
            Err(e) => log::error!("registration submitted but could not be serialized: {e}"),
        }
    }
}

/// Keeps submitted records in memory.
impl SubmitSink for Vec<RegistrationRecord> {
    fn accept(&mut self, record: RegistrationRecord) {
        self.push(record);
    }
}
