use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::RecordError;

/// Gender option offered by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

static ALL_GENDERS: &[Gender] = &[Gender::Male, Gender::Female];

impl Gender {
    /// Returns the stored value (`male` / `female`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Returns all options in display order.
    pub fn all() -> &'static [Gender] {
        ALL_GENDERS
    }

    /// Parses a stored value. The empty string is the "Select Gender"
    /// placeholder and yields `None`.
    pub fn parse(raw: &str) -> Result<Option<Gender>, RecordError> {
        match raw {
            "" => Ok(None),
            "male" => Ok(Some(Gender::Male)),
            "female" => Ok(Some(Gender::Female)),
            other => Err(RecordError::UnknownGender(other.to_string())),
        }
    }
}

#[mutants::skip]
impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_values() {
        assert_eq!(Gender::parse("male"), Ok(Some(Gender::Male)));
        assert_eq!(Gender::parse("female"), Ok(Some(Gender::Female)));
    }

    #[test]
    fn parse_placeholder_is_none() {
        assert_eq!(Gender::parse(""), Ok(None));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            Gender::parse("Male"),
            Err(RecordError::UnknownGender("Male".to_string()))
        );
    }

    #[test]
    fn parse_round_trips_as_str() {
        for gender in Gender::all() {
            assert_eq!(Gender::parse(gender.as_str()), Ok(Some(*gender)));
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }
}
