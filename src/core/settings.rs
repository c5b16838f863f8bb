use crate::core::errors::SettingsError;
use crate::core::models::{Association, EditableFields, Group};
use crate::core::transforms::vip_to_restriction;

/// Editable field set for the settings surface of `group`.
pub fn derive_initial_fields(group: &Group, association: &Association) -> EditableFields {
    let metadata = &association.metadata;
    EditableFields {
        title: metadata.title.clone(),
        description: metadata.description.clone(),
        color: metadata.color.clone(),
        picture: metadata.picture.clone(),
        is_private: group.policy.is_invite(),
        admin_metadata_restriction: vip_to_restriction(metadata.vip.as_wire()),
    }
}

impl EditableFields {
    /// A group must have a name; every other field may be left empty.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.title.trim().is_empty() {
            return Err(SettingsError::invalid_input(
                "title",
                "Invalid title",
                "Group must have a name",
            ));
        }
        Ok(())
    }
}
