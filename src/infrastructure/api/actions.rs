//! JSON actions as the remote service receives them.

use crate::core::models::{Association, Metadata, PolicyDiff, Resource};
use serde_json::{Value, json};

/// `metadata-update` action carrying the full merged metadata record.
pub fn metadata_add(association: &Association, metadata: &Metadata) -> Value {
    json!({
        "add": {
            "group": association.group,
            "resource": {
                "resource": association.resource,
                "app-name": association.app_name,
            },
            "metadata": metadata,
        }
    })
}

/// `group-update` action replacing a group's policy.
pub fn change_policy(resource: &Resource, diff: &PolicyDiff) -> Value {
    json!({
        "changePolicy": {
            "resource": resource,
            "diff": diff,
        }
    })
}
