use std::sync::Arc;

use qorehr_core::{AppError, AppResult};
use qorehr_domain::{BranchId, DepartmentId};

use crate::test_support::FakeOrganization;

use super::{BranchChanges, DepartmentChanges, OrganizationService};

fn service() -> OrganizationService {
    OrganizationService::new(Arc::new(FakeOrganization::default()))
}

#[tokio::test]
async fn create_branch_requires_name_and_defaults_active() -> AppResult<()> {
    let service = service();

    let missing = service.create_branch(BranchChanges::default()).await;
    assert!(matches!(missing, Err(AppError::Validation(message)) if message == "name is required"));

    let branch = service
        .create_branch(BranchChanges {
            name: Some("  Head Office ".to_owned()),
            code: Some("HQ".to_owned()),
            email: Some("HQ@Example.com".to_owned()),
            ..BranchChanges::default()
        })
        .await?;
    assert_eq!(branch.name, "Head Office");
    assert_eq!(branch.email.as_deref(), Some("hq@example.com"));
    assert!(branch.is_active);
    Ok(())
}

#[tokio::test]
async fn update_branch_keeps_omitted_fields() -> AppResult<()> {
    let service = service();
    let branch = service
        .create_branch(BranchChanges {
            name: Some("Head Office".to_owned()),
            city: Some("Austin".to_owned()),
            ..BranchChanges::default()
        })
        .await?;

    let updated = service
        .update_branch(
            branch.id,
            BranchChanges {
                is_active: Some(false),
                ..BranchChanges::default()
            },
        )
        .await?;

    assert_eq!(updated.city.as_deref(), Some("Austin"));
    assert!(!updated.is_active);
    Ok(())
}

#[tokio::test]
async fn missing_branch_and_department_are_not_found() {
    let service = service();

    assert!(matches!(
        service.delete_branch(BranchId::new(7)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .update_department(DepartmentId::new(7), DepartmentChanges::default())
            .await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn department_lifecycle() -> AppResult<()> {
    let service = service();
    let department = service
        .create_department(DepartmentChanges {
            name: Some("Engineering".to_owned()),
            short_code: Some("ENG".to_owned()),
            ..DepartmentChanges::default()
        })
        .await?;

    let renamed = service
        .update_department(
            department.id,
            DepartmentChanges {
                name: Some("Platform Engineering".to_owned()),
                ..DepartmentChanges::default()
            },
        )
        .await?;
    assert_eq!(renamed.short_code.as_deref(), Some("ENG"));
    assert_eq!(renamed.name, "Platform Engineering");

    service.delete_department(department.id).await?;
    assert!(service.list_departments().await?.is_empty());
    Ok(())
}
