use super::record::{Field, PhotoFile, RecordError, RegistrationRecord};
use super::validation::is_valid;

/// Owns the current [`RegistrationRecord`] and its validity flag.
///
/// Every edit replaces the whole record and recomputes the flag in the same
/// call, so `is_valid` is never stale.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    record: RegistrationRecord,
    valid: bool,
}

impl RegistrationForm {
    /// Creates a form holding the all-empty default record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current record.
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    /// Returns the validity gate for the current record.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Replaces one field. On error the record is left unchanged.
    pub fn update(&mut self, field: Field, raw: &str) -> Result<(), RecordError> {
        let next = self.record.with_field(field, raw)?;
        self.commit(next);
        Ok(())
    }

    /// Stores the selected photo file reference.
    pub fn attach_photo(&mut self, photo: PhotoFile) {
        let next = self.record.with_photo(Some(photo));
        self.commit(next);
    }

    /// Returns the record to hand off if the form is valid right now.
    ///
    /// Does not wait for any photo preview; only the file reference counts.
    pub fn submit(&self) -> Option<RegistrationRecord> {
        self.valid.then(|| self.record.clone())
    }

    fn commit(&mut self, next: RegistrationRecord) {
        self.valid = is_valid(&next);
        self.record = next;
    }
}
