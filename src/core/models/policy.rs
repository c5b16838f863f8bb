use super::ship::Ship;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Czar,
    King,
    Duke,
    Earl,
    Pawn,
}

/// Access policy of a group. The variant decides visibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Invite {
        pending: BTreeSet<Ship>,
    },
    Open {
        #[serde(rename = "banRanks")]
        ban_ranks: BTreeSet<Rank>,
        banned: BTreeSet<Ship>,
    },
}

impl Policy {
    /// Invite-only with an empty pending list.
    pub fn invite_only() -> Self {
        Policy::Invite {
            pending: BTreeSet::new(),
        }
    }

    /// Open with no banned ranks or ships.
    pub fn open() -> Self {
        Policy::Open {
            ban_ranks: BTreeSet::new(),
            banned: BTreeSet::new(),
        }
    }

    pub fn is_invite(&self) -> bool {
        matches!(self, Policy::Invite { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Policy::Invite { .. } => "invite",
            Policy::Open { .. } => "open",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyDiff {
    Replace(Policy),
}

impl PolicyDiff {
    /// The policy that results from applying this diff.
    pub fn into_policy(self) -> Policy {
        match self {
            PolicyDiff::Replace(policy) => policy,
        }
    }
}
