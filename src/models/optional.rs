//! Tri-state optional string used for deployment metadata.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A string that may be missing, not yet known, or set.
///
/// Only [`OptionalValue::Present`] takes part in sanitization and tag assembly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionalValue {
    #[default]
    Absent,
    /// Will only be known later (e.g. computed at apply time).
    Unknown,
    Present(String),
}

impl OptionalValue {
    pub fn present(value: impl Into<String>) -> Self {
        OptionalValue::Present(value.into())
    }

    /// The value, if it is present.
    pub fn as_present(&self) -> Option<&str> {
        match self {
            OptionalValue::Present(v) => Some(v),
            OptionalValue::Absent | OptionalValue::Unknown => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, OptionalValue::Present(_))
    }

    /// Returns `self` if present, otherwise `fallback`.
    pub fn or<'a>(&'a self, fallback: &'a OptionalValue) -> &'a OptionalValue {
        if self.is_present() {
            self
        } else {
            fallback
        }
    }
}

impl From<Option<String>> for OptionalValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(OptionalValue::Absent, OptionalValue::Present)
    }
}

impl From<&str> for OptionalValue {
    fn from(value: &str) -> Self {
        OptionalValue::Present(value.to_string())
    }
}

impl Serialize for OptionalValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_present() {
            Some(v) => serializer.serialize_str(v),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for OptionalValue {
    fn deserialize<D>(deserializer: D) -> Result<OptionalValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.into())
    }
}
