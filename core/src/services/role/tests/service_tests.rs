//! Unit tests for the role service

use std::sync::Arc;

use crate::domain::entities::role::{Role, ROLE_ADMIN, ROLE_USER};
use crate::errors::ServiceError;
use crate::repositories::role::MockRoleRepository;
use crate::services::role::RoleService;

fn service() -> RoleService<MockRoleRepository> {
    RoleService::new(Arc::new(MockRoleRepository::new()))
}

#[tokio::test]
async fn test_add_and_get_by_name() {
    let service = service();

    service.add(Role::new(ROLE_USER)).await.unwrap();
    service.add(Role::new(ROLE_ADMIN)).await.unwrap();

    let fetched = service.get_by_name(ROLE_ADMIN).await.unwrap();
    assert_eq!(fetched.name, "ROLE_ADMIN");
    assert_eq!(service.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_by_name_missing_is_get_failure() {
    let service = service();

    match service.get_by_name("ROLE_NOBODY").await.unwrap_err() {
        ServiceError::Get { message } => assert!(message.contains("ROLE_NOBODY")),
        other => panic!("expected GetFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_modify_requires_id() {
    let service = service();

    match service.modify(Role::new(ROLE_USER)).await.unwrap_err() {
        ServiceError::Modify { message } => assert!(message.contains("id is required")),
        other => panic!("expected ModifyFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_admin_rename_round_trips() {
    let service = service();

    let mut role = service.add(Role::new("ROLE_MODERATOR")).await.unwrap();
    role.name = "ROLE_LIBRARIAN".to_string();
    service.modify(role.clone()).await.unwrap();

    let fetched = service.get_by_id(role.id.unwrap()).await.unwrap();
    assert_eq!(fetched.name, "ROLE_LIBRARIAN");
}
