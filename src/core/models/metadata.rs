use super::ship::Ship;
use serde::{Deserialize, Serialize};

/// Who may add channels to a group.
///
/// On the wire this is the legacy `vip` string: `""` for [`AdminsOnly`] and
/// `"member-metadata"` for [`Unrestricted`]. See `core::transforms`.
///
/// [`AdminsOnly`]: ChannelAddRestriction::AdminsOnly
/// [`Unrestricted`]: ChannelAddRestriction::Unrestricted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChannelAddRestriction {
    #[default]
    AdminsOnly,
    Unrestricted,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metadata {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Wire color, six lowercase hex digits.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub vip: ChannelAddRestriction,
    #[serde(default)]
    pub date_created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Ship>,
    #[serde(default)]
    pub preview: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// The fields a settings commit writes. Everything else on [`Metadata`]
/// is left as the service holds it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataUpdate {
    pub title: String,
    pub description: String,
    pub picture: String,
    pub color: String,
    pub vip: ChannelAddRestriction,
}

impl Metadata {
    pub fn apply(&mut self, update: &MetadataUpdate) {
        self.title = update.title.clone();
        self.description = update.description.clone();
        self.picture = update.picture.clone();
        self.color = update.color.clone();
        self.vip = update.vip;
    }
}

/// Binds a group resource to its display metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Association {
    /// Path of the owning group, `/ship/~host/name`.
    pub group: String,
    pub resource: String,
    pub app_name: String,
    pub metadata: Metadata,
}
