use crate::core::errors::SettingsError;
use crate::core::models::{Association, EditableFields, Group, MetadataUpdate, Policy, PolicyDiff, Resource};
use crate::core::transforms::{encode_color, restriction_to_vip};
use crate::infrastructure::api::GroupApi;
use log::{debug, info, warn};

/// What a successful commit changed beyond metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitReport {
    /// Replacement policy sent in phase two, if visibility changed.
    pub policy_changed: Option<Policy>,
}

impl CommitReport {
    pub fn remote_calls(&self) -> usize {
        1 + usize::from(self.policy_changed.is_some())
    }
}

/// Commit edited settings: metadata always, then the policy when
/// `is_private` differs from the snapshot taken when the form was opened.
///
/// Phases run in order and a phase-one failure means phase two is never
/// attempted. A phase-two failure leaves the metadata update in place.
pub async fn submit<A: GroupApi + ?Sized>(
    api: &A,
    association: &Association,
    group: &Group,
    previous: &EditableFields,
    new: &EditableFields,
) -> Result<CommitReport, SettingsError> {
    let color = encode_color(&new.color)?;
    let vip = restriction_to_vip(new.admin_metadata_restriction);
    let update = MetadataUpdate {
        title: new.title.clone(),
        description: new.description.clone(),
        picture: new.picture.clone(),
        color,
        vip,
    };

    debug!("Updating metadata of {} (vip {:?})", association.group, vip.as_wire());
    api.update_metadata(association, &update).await.map_err(|e| {
        warn!("Metadata update for {} failed: {}", association.group, e);
        SettingsError::MetadataUpdateFailed(e.to_string())
    })?;

    if new.is_private == previous.is_private {
        info!("Updated metadata of {}", association.group);
        return Ok(CommitReport { policy_changed: None });
    }

    let resource = Resource::from_path(&association.group)?;
    // Replacing the variant resets pending invites or bans.
    let policy = if new.is_private {
        Policy::invite_only()
    } else {
        Policy::open()
    };
    debug!(
        "Replacing policy of {} ({} -> {})",
        resource,
        group.policy.kind(),
        policy.kind()
    );
    api.change_group_policy(&resource, &PolicyDiff::Replace(policy.clone()))
        .await
        .map_err(|e| {
            warn!("Policy change for {} failed after metadata update: {}", resource, e);
            SettingsError::PolicyChangeFailed(e.to_string())
        })?;

    info!("Updated metadata and policy of {}", association.group);
    Ok(CommitReport {
        policy_changed: Some(policy),
    })
}
