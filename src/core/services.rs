use crate::constants::{GROUP_SETTINGS_UPDATED, GROUP_SETTINGS_UPDATE_FAILED};
use crate::core::authorization::{ensure_authorized, is_authorized};
use crate::core::commit::{self, CommitReport};
use crate::core::errors::SettingsError;
use crate::core::models::{AppLog, Association, EditableFields, Group, Resource, Ship};
use crate::core::settings::derive_initial_fields;
use crate::core::status::{CommitStatus, StatusReceiver, StatusSender, status_channel};
use crate::infrastructure::api::GroupApi;
use crate::infrastructure::logging::LoggingService;
use log::{debug, info, warn};
use serde_json::json;

/// One opening of a group's settings surface.
///
/// Holds the records it was opened from, the field snapshot taken at that
/// moment and the status channel for submissions made through it.
pub struct SettingsPanel {
    viewer: Ship,
    group: Group,
    association: Association,
    initial: EditableFields,
    status: StatusSender,
}

impl SettingsPanel {
    pub fn viewer(&self) -> &Ship {
        &self.viewer
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn association(&self) -> &Association {
        &self.association
    }

    /// Fields as they were when the panel was opened.
    pub fn initial(&self) -> &EditableFields {
        &self.initial
    }

    pub fn status(&self) -> CommitStatus {
        self.status.current()
    }

    pub fn subscribe(&self) -> StatusReceiver {
        self.status.subscribe()
    }
}

pub struct SettingsService<A: GroupApi, L: LoggingService> {
    api: A,
    logging: L,
}

impl<A: GroupApi, L: LoggingService> SettingsService<A, L> {
    pub fn new(api: A, logging: L) -> Self {
        SettingsService { api, logging }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Open the settings surface for `viewer`, or nothing when the viewer is
    /// neither the group's host nor one of its admins.
    pub fn open_settings(&self, viewer: &Ship, group: Group, association: Association) -> Option<SettingsPanel> {
        if !is_authorized(&group, &association, viewer) {
            debug!("Suppressing settings of {} for {}", association.group, viewer);
            return None;
        }
        let initial = derive_initial_fields(&group, &association);
        let (status, _) = status_channel();
        Some(SettingsPanel {
            viewer: viewer.clone(),
            group,
            association,
            initial,
            status,
        })
    }

    /// Fetch the group and its association from the remote service and open
    /// the settings surface over them.
    pub async fn load_settings(&self, viewer: &Ship, resource: &Resource) -> Result<Option<SettingsPanel>, SettingsError> {
        let group = self
            .api
            .get_group(resource)
            .await?
            .ok_or_else(|| SettingsError::GroupNotFound(resource.to_path()))?;
        let association = self
            .api
            .get_association(resource)
            .await?
            .ok_or_else(|| SettingsError::AssociationNotFound(resource.to_path()))?;
        Ok(self.open_settings(viewer, group, association))
    }

    /// Submit against the snapshot taken when `panel` was opened.
    pub async fn submit(&self, panel: &SettingsPanel, fields: &EditableFields) -> Result<CommitReport, SettingsError> {
        self.submit_fields(panel, panel.initial(), fields).await
    }

    /// Validate and commit `fields`, publishing the outcome on the panel's
    /// status channel. The caller must not start a second submission on the
    /// same panel while one is in flight.
    pub async fn submit_fields(
        &self,
        panel: &SettingsPanel,
        previous: &EditableFields,
        fields: &EditableFields,
    ) -> Result<CommitReport, SettingsError> {
        ensure_authorized(&panel.group, &panel.association, &panel.viewer)?;

        panel.status.set(CommitStatus::Submitting);
        let result = match fields.validate() {
            Ok(()) => commit::submit(&self.api, &panel.association, &panel.group, previous, fields).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(report) => {
                info!(
                    "{} updated settings of {} ({} remote call(s))",
                    panel.viewer,
                    panel.association.group,
                    report.remote_calls()
                );
                panel.status.set(CommitStatus::Success);
            }
            Err(e) => {
                warn!("{} failed to update settings of {}: {}", panel.viewer, panel.association.group, e);
                panel.status.set(CommitStatus::Failure(e.user_message()));
            }
        }

        self.record(panel, fields, &result).await;
        result
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SettingsError> {
        self.logging.get_logs().await
    }

    async fn record(&self, panel: &SettingsPanel, fields: &EditableFields, result: &Result<CommitReport, SettingsError>) {
        let viewer = panel.viewer.to_string();
        let (action, details) = match result {
            Ok(report) => (
                GROUP_SETTINGS_UPDATED,
                json!({
                    "group": panel.association.group,
                    "title": fields.title,
                    "is_private": fields.is_private,
                    "policy": report.policy_changed.as_ref().map(|p| p.kind()),
                }),
            ),
            Err(e) => (
                GROUP_SETTINGS_UPDATE_FAILED,
                json!({ "group": panel.association.group, "error": e.to_string() }),
            ),
        };
        if let Err(e) = self.logging.log_action(action, details, Some(viewer.as_str())).await {
            warn!("Could not record {} for {}: {}", action, panel.association.group, e);
        }
    }
}
