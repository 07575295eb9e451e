//! Grammatical gender selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LashonError;

/// Grammatical gender used to resolve multi-gender text.
///
/// The *selector* passed around the crate is `Option<Gender>`; `None` means
/// no transformation is applied and text stays as authored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Masculine inflection
    Male,
    /// Feminine inflection
    Female,
    /// Combined multi-gender spelling
    Neutral,
}

impl Gender {
    /// All selectable genders, in display order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Neutral];

    /// Machine-readable name (CLI flags, preferences file)
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }

    /// Hebrew label shown in the gender switcher
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "לשון זכר",
            Gender::Female => "לשון נקבה",
            Gender::Neutral => "לשון מעורבת",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = LashonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "neutral" | "n" => Ok(Gender::Neutral),
            other => Err(LashonError::UnknownGender(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_as_str() {
        assert_eq!(Gender::Male.as_str(), "male");
        assert_eq!(Gender::Female.as_str(), "female");
        assert_eq!(Gender::Neutral.as_str(), "neutral");
    }

    #[test]
    fn gender_from_str_accepts_short_names() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("n".parse::<Gender>().unwrap(), Gender::Neutral);
    }

    #[test]
    fn gender_from_str_rejects_unknown() {
        let err = "plural".parse::<Gender>().unwrap_err();
        assert!(matches!(err, LashonError::UnknownGender(_)));
    }

    #[test]
    fn gender_serde_roundtrip() {
        for gender in Gender::ALL {
            let json = serde_json::to_string(&gender).unwrap();
            let back: Gender = serde_json::from_str(&json).unwrap();
            assert_eq!(back, gender);
        }
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }
}
