use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::RecordError;

/// International dialing code offered next to the phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CountryCode {
    #[default]
    #[serde(rename = "+234")]
    Nigeria,
    #[serde(rename = "+1")]
    UnitedStates,
    #[serde(rename = "+44")]
    UnitedKingdom,
    #[serde(rename = "+91")]
    India,
    #[serde(rename = "+86")]
    China,
    #[serde(rename = "+61")]
    Australia,
}

static ALL_COUNTRY_CODES: &[CountryCode] = &[
    CountryCode::Nigeria,
    CountryCode::UnitedStates,
    CountryCode::UnitedKingdom,
    CountryCode::India,
    CountryCode::China,
    CountryCode::Australia,
];

impl CountryCode {
    /// Returns the dialing prefix, e.g. `+234`.
    pub fn dial_code(&self) -> &'static str {
        match self {
            CountryCode::Nigeria => "+234",
            CountryCode::UnitedStates => "+1",
            CountryCode::UnitedKingdom => "+44",
            CountryCode::India => "+91",
            CountryCode::China => "+86",
            CountryCode::Australia => "+61",
        }
    }

    /// Returns the country name shown beside the code.
    pub fn country(&self) -> &'static str {
        match self {
            CountryCode::Nigeria => "Nigeria",
            CountryCode::UnitedStates => "United States",
            CountryCode::UnitedKingdom => "United Kingdom",
            CountryCode::India => "India",
            CountryCode::China => "China",
            CountryCode::Australia => "Australia",
        }
    }

    /// Returns every supported code in display order.
    pub fn all() -> &'static [CountryCode] {
        ALL_COUNTRY_CODES
    }

    /// Looks up a code by its dialing prefix.
    pub fn parse(raw: &str) -> Result<CountryCode, RecordError> {
        Self::all()
            .iter()
            .copied()
            .find(|code| code.dial_code() == raw)
            .ok_or_else(|| RecordError::UnknownCountryCode(raw.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.dial_code(), self.country())
    }
}
