pub const GROUP_SETTINGS_UPDATED: &str = "GROUP_SETTINGS_UPDATED";
pub const GROUP_SETTINGS_UPDATE_FAILED: &str = "GROUP_SETTINGS_UPDATE_FAILED";

/// App name under which group metadata is associated.
pub const DEFAULT_METADATA_APP_NAME: &str = "groups";
