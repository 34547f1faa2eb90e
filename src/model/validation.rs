use std::sync::LazyLock;

use regex::Regex;

use super::record::{Field, RegistrationRecord};

/// Outcome of checking one required entry of a [`RegistrationRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Ok,
    /// The entry is empty (after trimming, for free text).
    Missing,
    /// The entry is present but has the wrong shape.
    Malformed,
}

/// An entry the validity gate depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Surname,
    Firstname,
    Birthday,
    Gender,
    PhoneNumber,
    Address,
    CourseOfStudy,
    StateOfOrigin,
    PassportPhoto,
}

static ALL_REQUIREMENTS: &[Requirement] = &[
    Requirement::Surname,
    Requirement::Firstname,
    Requirement::Birthday,
    Requirement::Gender,
    Requirement::PhoneNumber,
    Requirement::Address,
    Requirement::CourseOfStudy,
    Requirement::StateOfOrigin,
    Requirement::PassportPhoto,
];

impl Requirement {
    /// Returns all nine requirements.
    pub fn all() -> &'static [Requirement] {
        ALL_REQUIREMENTS
    }

    /// Returns the form field this requirement covers, or `None` for the photo.
    pub fn field(&self) -> Option<Field> {
        match self {
            Requirement::Surname => Some(Field::Surname),
            Requirement::Firstname => Some(Field::Firstname),
            Requirement::Birthday => Some(Field::Birthday),
            Requirement::Gender => Some(Field::Gender),
            Requirement::PhoneNumber => Some(Field::PhoneNumber),
            Requirement::Address => Some(Field::Address),
            Requirement::CourseOfStudy => Some(Field::CourseOfStudy),
            Requirement::StateOfOrigin => Some(Field::StateOfOrigin),
            Requirement::PassportPhoto => None,
        }
    }
}

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid hardcoded regex"));

/// Returns `true` if `field` must be filled in for the form to be valid.
pub fn is_required(field: Field) -> bool {
    Requirement::all().iter().any(|r| r.field() == Some(field))
}

/// Checks a single requirement against `record`.
pub fn check(record: &RegistrationRecord, requirement: Requirement) -> FieldStatus {
    match requirement {
        Requirement::Surname => non_blank(&record.surname),
        Requirement::Firstname => non_blank(&record.firstname),
        Requirement::Birthday => present(!record.birthday.is_empty()),
        Requirement::Gender => present(record.gender.is_some()),
        Requirement::PhoneNumber => match record.phone_number.as_str() {
            "" => FieldStatus::Missing,
            phone if PHONE_RE.is_match(phone) => FieldStatus::Ok,
            _ => FieldStatus::Malformed,
        },
        Requirement::Address => non_blank(&record.address),
        Requirement::CourseOfStudy => non_blank(&record.course_of_study),
        Requirement::StateOfOrigin => non_blank(&record.state_of_origin),
        Requirement::PassportPhoto => present(record.passport_photo.is_some()),
    }
}

/// Checks every requirement, in [`Requirement::all`] order.
pub fn report(record: &RegistrationRecord) -> Vec<(Requirement, FieldStatus)> {
    Requirement::all()
        .iter()
        .map(|&r| (r, check(record, r)))
        .collect()
}

/// The validity gate: `true` only when every entry of [`report`] is `Ok`.
pub fn is_valid(record: &RegistrationRecord) -> bool {
    report(record)
        .iter()
        .all(|(_, status)| *status == FieldStatus::Ok)
}

fn non_blank(value: &str) -> FieldStatus {
    present(!value.trim().is_empty())
}

fn present(is_set: bool) -> FieldStatus {
    if is_set {
        FieldStatus::Ok
    } else {
        FieldStatus::Missing
    }
}
