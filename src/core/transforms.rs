//! Conversions between the values a settings form edits and the values the
//! remote service stores.

use crate::core::errors::SettingsError;
use crate::core::models::ChannelAddRestriction;

/// Legacy `vip` sentinel that lets members add channels.
pub const MEMBER_METADATA_VIP: &str = "member-metadata";

impl ChannelAddRestriction {
    pub fn as_wire(self) -> &'static str {
        match self {
            ChannelAddRestriction::AdminsOnly => "",
            ChannelAddRestriction::Unrestricted => MEMBER_METADATA_VIP,
        }
    }

    pub fn from_wire(vip: &str) -> Result<Self, SettingsError> {
        match vip {
            "" => Ok(ChannelAddRestriction::AdminsOnly),
            MEMBER_METADATA_VIP => Ok(ChannelAddRestriction::Unrestricted),
            other => Err(SettingsError::invalid_input(
                "vip",
                "Invalid vip",
                format!("unrecognized vip sentinel {:?}", other),
            )),
        }
    }
}

impl From<ChannelAddRestriction> for String {
    fn from(restriction: ChannelAddRestriction) -> Self {
        restriction.as_wire().to_string()
    }
}

impl TryFrom<String> for ChannelAddRestriction {
    type Error = SettingsError;

    fn try_from(vip: String) -> Result<Self, Self::Error> {
        ChannelAddRestriction::from_wire(&vip)
    }
}

/// Checked "restrict channel adding to admins" maps to the empty sentinel.
pub fn restriction_to_vip(admin_metadata_restriction: bool) -> ChannelAddRestriction {
    if admin_metadata_restriction {
        ChannelAddRestriction::AdminsOnly
    } else {
        ChannelAddRestriction::Unrestricted
    }
}

pub fn vip_to_restriction(vip: &str) -> bool {
    vip != MEMBER_METADATA_VIP
}

/// Encode a form color as six lowercase hex digits.
///
/// Accepts up to six hex digits, bare or behind `#`, and `0x` literals with
/// optional `.` grouping (`0xff.ffff`). Shorter values are left-padded with
/// zeros, so `abc` encodes to `000abc` and an empty value to black.
pub fn encode_color(ui_color: &str) -> Result<String, SettingsError> {
    let raw = ui_color.trim();
    let invalid = |reason: &str| {
        SettingsError::invalid_input(
            "color",
            "Invalid color",
            format!("{:?} is not a valid color: {}", ui_color, reason),
        )
    };

    let digits: String = if let Some(ux) = raw.strip_prefix("0x") {
        if ux.is_empty() || ux.starts_with('.') || ux.ends_with('.') || ux.contains("..") {
            return Err(invalid("malformed hex literal"));
        }
        ux.chars().filter(|c| *c != '.').collect()
    } else {
        raw.strip_prefix('#').unwrap_or(raw).to_string()
    };

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("non-hex digit"));
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > 6 {
        return Err(invalid("value exceeds 24 bits"));
    }
    Ok(format!("{:0>6}", significant.to_ascii_lowercase()))
}
