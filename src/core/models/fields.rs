use serde::{Deserialize, Serialize};

/// Form-scoped view over a group's metadata and policy.
///
/// Built fresh each time the settings surface opens and never persisted;
/// only its transformed projection reaches the remote service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableFields {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Color as entered, `#rrggbb`, `rrggbb`, `#rgb` or an `0x` literal.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub picture: String,
    /// "Restrict channel adding to admins".
    #[serde(default)]
    pub admin_metadata_restriction: bool,
}
