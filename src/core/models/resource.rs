use super::ship::Ship;
use crate::core::errors::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Service-scoped identifier of a group or association, `/ship/~host/name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub ship: Ship,
    pub name: String,
}

impl Resource {
    pub fn new(ship: Ship, name: impl Into<String>) -> Self {
        Resource {
            ship,
            name: name.into(),
        }
    }

    pub fn from_path(path: &str) -> Result<Self, SettingsError> {
        let invalid = || SettingsError::InvalidResourcePath(path.to_string());
        let mut parts = path.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(""), Some("ship"), Some(ship), Some(name), None) if !name.is_empty() => {
                let ship = Ship::parse(ship).map_err(|_| invalid())?;
                Ok(Resource::new(ship, name))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_path(&self) -> String {
        format!("/ship/{}/{}", self.ship, self.name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
