use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::country::CountryCode;
use super::gender::Gender;

/// Number of digits in a valid phone number (excluding the dialing code).
pub const PHONE_DIGITS: usize = 10;

/// Errors raised when a raw value cannot be stored in a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unknown gender: {0}")]
    UnknownGender(String),
    #[error("unsupported country code: {0}")]
    UnknownCountryCode(String),
}

/// An editable text or choice field of a [`RegistrationRecord`].
///
/// The passport photo is not listed here; it is a file reference rather
/// than typed text, see [`RegistrationRecord::with_photo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Surname,
    Firstname,
    OtherName,
    Birthday,
    Gender,
    CountryCode,
    PhoneNumber,
    Address,
    Occupation,
    CourseOfStudy,
    StateOfOrigin,
    AdditionalInfo,
}

static ALL_FIELDS: &[Field] = &[
    Field::Surname,
    Field::Firstname,
    Field::OtherName,
    Field::Birthday,
    Field::Gender,
    Field::CountryCode,
    Field::PhoneNumber,
    Field::Address,
    Field::Occupation,
    Field::CourseOfStudy,
    Field::StateOfOrigin,
    Field::AdditionalInfo,
];

impl Field {
    /// Returns every field in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the label shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Surname => "Surname",
            Field::Firstname => "Firstname",
            Field::OtherName => "Other Name (Optional)",
            Field::Birthday => "Birthday (YYYY-MM-DD)",
            Field::Gender => "Gender",
            Field::CountryCode => "Country Code",
            Field::PhoneNumber => "Phone Number",
            Field::Address => "Address",
            Field::Occupation => "Occupation (Optional)",
            Field::CourseOfStudy => "Course of Study",
            Field::StateOfOrigin => "State of Origin",
            Field::AdditionalInfo => "Additional Information (Optional)",
        }
    }
}

/// A reference to a locally selected photo file.
///
/// Holding the reference does not read the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoFile {
    pub path: PathBuf,
    pub name: String,
}

impl PhotoFile {
    /// Creates a reference to the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Returns the path of the referenced file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Every value collected by the registration form at one point in time.
///
/// All keys are always present; "unset" is an empty string or `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub surname: String,
    pub firstname: String,
    pub other_name: String,
    pub birthday: String,
    pub gender: Option<Gender>,
    pub country_code: CountryCode,
    pub phone_number: String,
    pub address: String,
    pub occupation: String,
    pub course_of_study: String,
    pub state_of_origin: String,
    pub additional_info: String,
    pub passport_photo: Option<PhotoFile>,
}

impl RegistrationRecord {
    /// Returns a copy of this record with `field` replaced by `raw`.
    ///
    /// Text is stored verbatim (no trimming). The phone number is passed
    /// through [`sanitize_phone`]. Gender and country code are parsed; on a
    /// parse error no record is produced.
    pub fn with_field(&self, field: Field, raw: &str) -> Result<Self, RecordError> {
        let mut next = self.clone();
        match field {
            Field::Surname => next.surname = raw.to_string(),
            Field::Firstname => next.firstname = raw.to_string(),
            Field::OtherName => next.other_name = raw.to_string(),
            Field::Birthday => next.birthday = raw.to_string(),
            Field::Gender => next.gender = Gender::parse(raw)?,
            Field::CountryCode => next.country_code = CountryCode::parse(raw)?,
            Field::PhoneNumber => next.phone_number = sanitize_phone(raw),
            Field::Address => next.address = raw.to_string(),
            Field::Occupation => next.occupation = raw.to_string(),
            Field::CourseOfStudy => next.course_of_study = raw.to_string(),
            Field::StateOfOrigin => next.state_of_origin = raw.to_string(),
            Field::AdditionalInfo => next.additional_info = raw.to_string(),
        }
        Ok(next)
    }

    /// Returns a copy of this record with the passport photo replaced.
    pub fn with_photo(&self, photo: Option<PhotoFile>) -> Self {
        Self {
            passport_photo: photo,
            ..self.clone()
        }
    }

    /// Returns the stored value of `field` in the textual form accepted by
    /// [`with_field`](Self::with_field).
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::Firstname => &self.firstname,
            Field::OtherName => &self.other_name,
            Field::Birthday => &self.birthday,
            Field::Gender => self.gender.map(|g| g.as_str()).unwrap_or(""),
            Field::CountryCode => self.country_code.dial_code(),
            Field::PhoneNumber => &self.phone_number,
            Field::Address => &self.address,
            Field::Occupation => &self.occupation,
            Field::CourseOfStudy => &self.course_of_study,
            Field::StateOfOrigin => &self.state_of_origin,
            Field::AdditionalInfo => &self.additional_info,
        }
    }

    /// Parses the birthday as an ISO calendar date, if it is one.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_birthday(&self.birthday)
    }
}

/// Parses a complete `YYYY-MM-DD` calendar date.
pub fn parse_birthday(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Keeps only ASCII digits from `raw`, truncated to [`PHONE_DIGITS`].
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}
