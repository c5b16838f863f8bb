use crate::constants::{GROUP_SETTINGS_UPDATE_FAILED, GROUP_SETTINGS_UPDATED};
use crate::core::errors::{ApiError, SettingsError};
use crate::core::models::{ChannelAddRestriction, Policy, Resource};
use crate::core::status::CommitStatus;
use crate::tests::{GROUP_PATH, create_test_service, fixture, seeded_api, ship};

#[tokio::test]
async fn test_open_settings_is_suppressed_for_non_admins() {
    let (group, association) = fixture(Policy::open(), ChannelAddRestriction::AdminsOnly);
    let service = create_test_service(seeded_api(&group, &association).await);

    assert!(service.open_settings(&ship("~nec"), group.clone(), association.clone()).is_none());
    let panel = service.open_settings(&ship("~bus"), group, association).unwrap();
    assert_eq!(panel.status(), CommitStatus::Idle);
    assert_eq!(panel.initial().title, "Old");
}

#[tokio::test]
async fn test_scenario_rename_and_lift_restriction() {
    let (group, association) = fixture(Policy::open(), ChannelAddRestriction::Unrestricted);
    let service = create_test_service(seeded_api(&group, &association).await);
    let panel = service.open_settings(&ship("~zod"), group, association).unwrap();

    let mut fields = panel.initial().clone();
    fields.title = "New".to_string();
    fields.admin_metadata_restriction = true;
    let report = service.submit(&panel, &fields).await.unwrap();

    assert_eq!(report.remote_calls(), 1);
    assert_eq!(panel.status(), CommitStatus::Success);
    let metadata_actions = service.api().metadata_actions().await;
    assert_eq!(metadata_actions.len(), 1);
    assert_eq!(metadata_actions[0]["add"]["metadata"]["vip"], "");
    assert!(service.api().policy_actions().await.is_empty());

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, GROUP_SETTINGS_UPDATED);
    assert_eq!(logs[0].ship.as_deref(), Some("~zod"));
    assert_eq!(logs[0].details["title"], "New");
}

#[tokio::test]
async fn test_failure_is_reported_on_status_channel() {
    let (group, association) = fixture(Policy::open(), ChannelAddRestriction::AdminsOnly);
    let api = seeded_api(&group, &association).await;
    api.fail_metadata_with(ApiError::Rejected("permission denied".to_string()))
        .await;
    let service = create_test_service(api);
    let panel = service.open_settings(&ship("~bus"), group, association).unwrap();
    let status = panel.subscribe();

    let mut fields = panel.initial().clone();
    fields.is_private = true;
    let err = service.submit(&panel, &fields).await.unwrap_err();

    assert_eq!(err, SettingsError::MetadataUpdateFailed("permission denied".to_string()));
    assert_eq!(*status.borrow(), CommitStatus::Failure("permission denied".to_string()));
    assert!(service.api().actions().await.is_empty());

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs[0].action, GROUP_SETTINGS_UPDATE_FAILED);
    assert_eq!(logs[0].details["error"], "permission denied");
}

#[tokio::test]
async fn test_success_clears_previous_failure() {
    let (group, association) = fixture(Policy::open(), ChannelAddRestriction::AdminsOnly);
    let api = seeded_api(&group, &association).await;
    api.fail_policy_with(ApiError::Rejected("busy".to_string())).await;
    let service = create_test_service(api);
    let panel = service.open_settings(&ship("~zod"), group, association).unwrap();

    let mut fields = panel.initial().clone();
    fields.is_private = true;
    assert!(service.submit(&panel, &fields).await.is_err());
    assert_eq!(panel.status(), CommitStatus::Failure("busy".to_string()));

    service.api().clear_failures().await;
    service.submit(&panel, &fields).await.unwrap();
    assert_eq!(panel.status(), CommitStatus::Success);
}

#[tokio::test]
async fn test_blank_title_is_rejected_before_any_remote_call() {
    let (group, association) = fixture(Policy::open(), ChannelAddRestriction::AdminsOnly);
    let service = create_test_service(seeded_api(&group, &association).await);
    let panel = service.open_settings(&ship("~zod"), group, association).unwrap();

    let mut fields = panel.initial().clone();
    fields.title = String::new();
    let err = service.submit(&panel, &fields).await.unwrap_err();

    assert!(matches!(err, SettingsError::InvalidInput(..)));
    assert_eq!(panel.status(), CommitStatus::Failure("Group must have a name".to_string()));
    assert!(service.api().actions().await.is_empty());
}

#[tokio::test]
async fn test_long_multiline_title_is_committed() {
    let (group, association) = fixture(Policy::open(), ChannelAddRestriction::AdminsOnly);
    let service = create_test_service(seeded_api(&group, &association).await);
    let panel = service.open_settings(&ship("~zod"), group, association).unwrap();

    let mut fields = panel.initial().clone();
    fields.title = format!("{}\nsecond line", "a".repeat(300));
    service.submit(&panel, &fields).await.unwrap();

    assert_eq!(panel.status(), CommitStatus::Success);
    let actions = service.api().metadata_actions().await;
    assert_eq!(actions[0]["add"]["metadata"]["title"], fields.title.as_str());
}

#[tokio::test]
async fn test_load_settings_reads_remote_state() {
    let (group, association) = fixture(Policy::invite_only(), ChannelAddRestriction::AdminsOnly);
    let service = create_test_service(seeded_api(&group, &association).await);
    let resource = Resource::from_path(GROUP_PATH).unwrap();

    let panel = service.load_settings(&ship("~bus"), &resource).await.unwrap().unwrap();
    assert!(panel.initial().is_private);
    assert!(service.load_settings(&ship("~nec"), &resource).await.unwrap().is_none());

    let missing = Resource::from_path("/ship/~zod/elsewhere").unwrap();
    assert!(matches!(
        service.load_settings(&ship("~zod"), &missing).await,
        Err(SettingsError::GroupNotFound(path)) if path == "/ship/~zod/elsewhere"
    ));
}

#[tokio::test]
async fn test_reopening_after_toggle_sees_new_policy() {
    let (group, association) = fixture(Policy::open(), ChannelAddRestriction::AdminsOnly);
    let service = create_test_service(seeded_api(&group, &association).await);
    let resource = Resource::from_path(GROUP_PATH).unwrap();

    let panel = service.load_settings(&ship("~zod"), &resource).await.unwrap().unwrap();
    let mut fields = panel.initial().clone();
    fields.is_private = true;
    service.submit(&panel, &fields).await.unwrap();

    let reopened = service.load_settings(&ship("~zod"), &resource).await.unwrap().unwrap();
    assert!(reopened.initial().is_private);
    assert_eq!(reopened.status(), CommitStatus::Idle);

    // Submitting the reopened snapshot unchanged touches metadata only.
    let report = service.submit(&reopened, reopened.initial()).await.unwrap();
    assert_eq!(report.remote_calls(), 1);
}
