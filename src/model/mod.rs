mod country;
mod form;
mod gender;
mod record;
pub mod validation;

pub use country::CountryCode;
pub use form::RegistrationForm;
pub use gender::Gender;
pub use record::{
    Field, PHONE_DIGITS, PhotoFile, RecordError, RegistrationRecord, parse_birthday, sanitize_phone,
};
pub use validation::{FieldStatus, Requirement, is_required, is_valid};
