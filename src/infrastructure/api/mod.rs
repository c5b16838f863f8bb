use crate::core::errors::ApiError;
use crate::core::models::{Association, Group, MetadataUpdate, PolicyDiff, Resource};
use async_trait::async_trait;

/// Remote group and metadata service. It owns all durable group state;
/// settings code only reads it and issues updates through this trait.
#[async_trait]
pub trait GroupApi: Send + Sync {
    async fn update_metadata(&self, association: &Association, update: &MetadataUpdate) -> Result<(), ApiError>;
    async fn change_group_policy(&self, resource: &Resource, diff: &PolicyDiff) -> Result<(), ApiError>;
    async fn get_group(&self, resource: &Resource) -> Result<Option<Group>, ApiError>;
    async fn get_association(&self, resource: &Resource) -> Result<Option<Association>, ApiError>;
}

pub mod actions;
pub mod in_memory;
