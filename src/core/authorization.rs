use crate::core::errors::SettingsError;
use crate::core::models::{Association, Group, Resource, RoleTag, Ship};

/// Whether `viewer` may change the settings of `group`.
///
/// The host ship of the association's group resource and any ship tagged
/// `admin` in the group pass. Everyone else gets no settings surface at all.
pub fn is_authorized(group: &Group, association: &Association, viewer: &Ship) -> bool {
    let is_host = Resource::from_path(&association.group)
        .map(|resource| resource.ship == *viewer)
        .unwrap_or(false);
    is_host || group.role_for_ship(viewer) == Some(RoleTag::Admin)
}

pub fn ensure_authorized(
    group: &Group,
    association: &Association,
    viewer: &Ship,
) -> Result<(), SettingsError> {
    if is_authorized(group, association, viewer) {
        Ok(())
    } else {
        Err(SettingsError::Unauthorized(viewer.to_string()))
    }
}
