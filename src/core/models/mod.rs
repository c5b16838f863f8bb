pub mod audit;
pub mod fields;
pub mod group;
pub mod metadata;
pub mod policy;
pub mod resource;
pub mod ship;

pub use audit::AppLog;
pub use fields::EditableFields;
pub use group::{Group, RoleTag};
pub use metadata::{Association, ChannelAddRestriction, Metadata, MetadataUpdate};
pub use policy::{Policy, PolicyDiff, Rank};
pub use resource::Resource;
pub use ship::Ship;
