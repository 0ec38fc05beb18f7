use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form doubles as the serde wire name.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use str_enum;

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(SmokingHistory {
    Never => "never",
    Former => "former",
    Current => "current",
});

str_enum!(AlcoholUse {
    Abstains => "none",
    Occasional => "occasional",
    Moderate => "moderate",
    Heavy => "heavy",
});

str_enum!(ExerciseFrequency {
    Sedentary => "none",
    OneToTwo => "1-2",
    ThreeToFour => "3-4",
    FivePlus => "5plus",
});

str_enum!(ItemCategory {
    Condition => "conditions",
    Medication => "medications",
    Allergy => "allergies",
    Surgery => "surgeries",
    Symptom => "symptoms",
});

impl ItemCategory {
    pub const ALL: [ItemCategory; 5] = [
        Self::Condition,
        Self::Medication,
        Self::Allergy,
        Self::Surgery,
        Self::Symptom,
    ];
}

str_enum!(SymptomSeverity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(SymptomFrequency {
    Occasional => "occasional",
    Frequent => "frequent",
    Constant => "constant",
});

/// Parse an optional form value: blank means "not set".
pub fn parse_optional<T>(value: &str) -> Result<Option<T>, ModelError>
where
    T: std::str::FromStr<Err = ModelError>,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn smoking_history_round_trip() {
        for (variant, s) in [
            (SmokingHistory::Never, "never"),
            (SmokingHistory::Former, "former"),
            (SmokingHistory::Current, "current"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(SmokingHistory::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn exercise_frequency_uses_form_values() {
        assert_eq!(ExerciseFrequency::from_str("1-2").unwrap(), ExerciseFrequency::OneToTwo);
        assert_eq!(ExerciseFrequency::FivePlus.as_str(), "5plus");
    }

    #[test]
    fn item_category_serializes_as_list_name() {
        let json = serde_json::to_string(&ItemCategory::Symptom).unwrap();
        assert_eq!(json, "\"symptoms\"");
        let parsed: ItemCategory = serde_json::from_str("\"allergies\"").unwrap();
        assert_eq!(parsed, ItemCategory::Allergy);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Gender::from_str("Male").is_err());
        assert!(SmokingHistory::from_str("sometimes").is_err());
        let ModelError::InvalidEnum { field, value } = AlcoholUse::from_str("").unwrap_err();
        assert_eq!(field, "AlcoholUse");
        assert_eq!(value, "");
    }

    #[test]
    fn parse_optional_treats_blank_as_unset() {
        assert_eq!(parse_optional::<Gender>("").unwrap(), None);
        assert_eq!(parse_optional::<Gender>("   ").unwrap(), None);
        assert_eq!(parse_optional::<Gender>("female").unwrap(), Some(Gender::Female));
        assert!(parse_optional::<Gender>("unknown").is_err());
    }
}
