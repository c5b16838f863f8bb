use crate::core::errors::SettingsError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A user identity. Stored without the leading `~`, displayed with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ship(String);

impl Ship {
    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let trimmed = raw.trim();
        let name = trimmed.strip_prefix('~').unwrap_or(trimmed);
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SettingsError::InvalidShip(raw.to_string()));
        }
        Ok(Ship(name.to_string()))
    }

    /// Name without the sig, e.g. `zod`.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}", self.0)
    }
}

impl FromStr for Ship {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ship::parse(s)
    }
}

impl Serialize for Ship {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ship {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ship::parse(&raw).map_err(serde::de::Error::custom)
    }
}
