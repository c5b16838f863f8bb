use crate::core::errors::ApiError;
use crate::core::models::{Association, Group, MetadataUpdate, PolicyDiff, Resource};
use crate::infrastructure::api::{GroupApi, actions};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Group service kept in process memory. Records every action it accepts
/// and can be told to reject the next calls of either kind.
#[derive(Clone, Default)]
pub struct InMemoryGroupApi {
    groups: Arc<RwLock<HashMap<String, Group>>>,
    associations: Arc<RwLock<HashMap<String, Association>>>,
    actions: Arc<RwLock<Vec<Value>>>,
    metadata_failure: Arc<RwLock<Option<ApiError>>>,
    policy_failure: Arc<RwLock<Option<ApiError>>>,
}

impl InMemoryGroupApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_group(&self, group: Group) {
        self.groups.write().await.insert(group.resource.clone(), group);
    }

    /// Associations are keyed by the path of the group they describe.
    pub async fn insert_association(&self, association: Association) {
        self.associations
            .write()
            .await
            .insert(association.group.clone(), association);
    }

    pub async fn fail_metadata_with(&self, error: ApiError) {
        *self.metadata_failure.write().await = Some(error);
    }

    pub async fn fail_policy_with(&self, error: ApiError) {
        *self.policy_failure.write().await = Some(error);
    }

    pub async fn clear_failures(&self) {
        *self.metadata_failure.write().await = None;
        *self.policy_failure.write().await = None;
    }

    /// Accepted actions, oldest first.
    pub async fn actions(&self) -> Vec<Value> {
        self.actions.read().await.clone()
    }

    pub async fn metadata_actions(&self) -> Vec<Value> {
        self.actions_with_key("add").await
    }

    pub async fn policy_actions(&self) -> Vec<Value> {
        self.actions_with_key("changePolicy").await
    }

    async fn actions_with_key(&self, key: &str) -> Vec<Value> {
        self.actions
            .read()
            .await
            .iter()
            .filter(|action| action.get(key).is_some())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl GroupApi for InMemoryGroupApi {
    async fn update_metadata(&self, association: &Association, update: &MetadataUpdate) -> Result<(), ApiError> {
        if let Some(error) = self.metadata_failure.read().await.clone() {
            return Err(error);
        }
        let mut associations = self.associations.write().await;
        let stored = associations
            .get_mut(&association.group)
            .ok_or_else(|| ApiError::Rejected(format!("no association for {}", association.group)))?;
        stored.metadata.apply(update);
        self.actions
            .write()
            .await
            .push(actions::metadata_add(stored, &stored.metadata));
        Ok(())
    }

    async fn change_group_policy(&self, resource: &Resource, diff: &PolicyDiff) -> Result<(), ApiError> {
        if let Some(error) = self.policy_failure.read().await.clone() {
            return Err(error);
        }
        let mut groups = self.groups.write().await;
        let group = groups
            .get_mut(&resource.to_path())
            .ok_or_else(|| ApiError::Rejected(format!("no group {}", resource)))?;
        group.policy = diff.clone().into_policy();
        self.actions.write().await.push(actions::change_policy(resource, diff));
        Ok(())
    }

    async fn get_group(&self, resource: &Resource) -> Result<Option<Group>, ApiError> {
        Ok(self.groups.read().await.get(&resource.to_path()).cloned())
    }

    async fn get_association(&self, resource: &Resource) -> Result<Option<Association>, ApiError> {
        Ok(self.associations.read().await.get(&resource.to_path()).cloned())
    }
}
