mod handler_tests;
mod service_tests;

use crate::core::models::{Association, ChannelAddRestriction, Group, Metadata, Policy, RoleTag, Ship};
use crate::core::services::SettingsService;
use crate::infrastructure::api::in_memory::InMemoryGroupApi;
use crate::infrastructure::logging::in_memory::InMemoryLogging;

pub const GROUP_PATH: &str = "/ship/~zod/my-group";

pub fn ship(name: &str) -> Ship {
    Ship::parse(name).unwrap()
}

/// `~zod/my-group` with `~bus` as admin, `~wes` as moderator and `~nec` as a
/// plain member.
pub fn fixture(policy: Policy, vip: ChannelAddRestriction) -> (Group, Association) {
    let mut group = Group::new(GROUP_PATH, policy);
    group.members.insert(ship("~zod"));
    group.members.insert(ship("~nec"));
    group.grant(RoleTag::Admin, ship("~bus"));
    group.grant(RoleTag::Moderator, ship("~wes"));
    let association = Association {
        group: GROUP_PATH.to_string(),
        resource: GROUP_PATH.to_string(),
        app_name: "groups".to_string(),
        metadata: Metadata {
            title: "Old".to_string(),
            description: "A group".to_string(),
            color: "0x12.3456".to_string(),
            picture: "https://example.com/pic.png".to_string(),
            vip,
            date_created: "~2021.1.1".to_string(),
            creator: Some(ship("~zod")),
            preview: true,
            hidden: false,
        },
    };
    (group, association)
}

pub async fn seeded_api(group: &Group, association: &Association) -> InMemoryGroupApi {
    let api = InMemoryGroupApi::new();
    api.insert_group(group.clone()).await;
    api.insert_association(association.clone()).await;
    api
}

pub fn create_test_service(api: InMemoryGroupApi) -> SettingsService<InMemoryGroupApi, InMemoryLogging> {
    let _ = env_logger::try_init();
    SettingsService::new(api, InMemoryLogging::new())
}
