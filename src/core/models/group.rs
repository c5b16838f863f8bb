use super::policy::Policy;
use super::ship::Ship;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleTag {
    Admin,
    Moderator,
    Janitor,
}

impl std::fmt::Display for RoleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoleTag::Admin => "admin",
            RoleTag::Moderator => "moderator",
            RoleTag::Janitor => "janitor",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Resource path, `/ship/~host/name`.
    pub resource: String,
    pub policy: Policy,
    #[serde(default)]
    pub members: BTreeSet<Ship>,
    #[serde(default)]
    pub tags: BTreeMap<RoleTag, BTreeSet<Ship>>,
    #[serde(default)]
    pub hidden: bool,
}

impl Group {
    pub fn new(resource: impl Into<String>, policy: Policy) -> Self {
        Group {
            resource: resource.into(),
            policy,
            members: BTreeSet::new(),
            tags: BTreeMap::new(),
            hidden: false,
        }
    }

    /// Highest role the ship holds, `admin` first.
    pub fn role_for_ship(&self, ship: &Ship) -> Option<RoleTag> {
        [RoleTag::Admin, RoleTag::Moderator, RoleTag::Janitor]
            .into_iter()
            .find(|role| self.tags.get(role).is_some_and(|ships| ships.contains(ship)))
    }

    pub fn grant(&mut self, role: RoleTag, ship: Ship) {
        self.members.insert(ship.clone());
        self.tags.entry(role).or_default().insert(ship);
    }
}
