use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use qorehr_core::{AppError, AppResult};
use qorehr_domain::{
    BranchId, CrudFlags, EmployeeId, PermissionCategory, PermissionCategoryId, PermissionEntry,
    PermissionEntryId, Role, RoleAssignment, RoleAssignmentId, RoleId,
};

use crate::access_ports::{RoleAdminRepository, RoleAssignmentInput, RoleInput};
use crate::test_support::{FakeEmployees, FakeOrganization, branch, employee_details, stored};

use super::{AssignRoleRequest, RoleAdminService, RoleChanges};

#[derive(Default)]
struct FakeRoles {
    roles: Mutex<Vec<Role>>,
    categories: Vec<PermissionCategory>,
    entries: Mutex<Vec<PermissionEntry>>,
    assignments: Mutex<Vec<RoleAssignment>>,
}

#[async_trait]
impl RoleAdminRepository for FakeRoles {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.lock().await.clone())
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.id == role_id)
            .cloned())
    }

    async fn create_role(&self, input: RoleInput) -> AppResult<Role> {
        let mut roles = self.roles.lock().await;
        if roles.iter().any(|role| role.slug == input.slug) {
            return Err(AppError::Conflict(format!("slug '{}' exists", input.slug)));
        }
        let role = Role {
            id: RoleId::new(roles.len() as i64 + 1),
            name: input.name,
            slug: input.slug,
            description: input.description,
            priority: input.priority,
            is_system: false,
            is_active: true,
        };
        roles.push(role.clone());
        Ok(role)
    }

    async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role> {
        let mut roles = self.roles.lock().await;
        let role = roles
            .iter_mut()
            .find(|role| role.id == role_id)
            .ok_or_else(|| AppError::NotFound("role".to_owned()))?;
        role.name = input.name;
        role.slug = input.slug;
        role.description = input.description;
        role.priority = input.priority;
        Ok(role.clone())
    }

    async fn set_role_active(&self, role_id: RoleId, is_active: bool) -> AppResult<()> {
        if let Some(role) = self
            .roles
            .lock()
            .await
            .iter_mut()
            .find(|role| role.id == role_id)
        {
            role.is_active = is_active;
        }
        Ok(())
    }

    async fn list_permission_categories(&self) -> AppResult<Vec<PermissionCategory>> {
        Ok(self.categories.clone())
    }

    async fn find_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Option<PermissionCategory>> {
        Ok(self
            .categories
            .iter()
            .find(|category| category.id == permission_category_id)
            .cloned())
    }

    async fn list_role_permission_entries(
        &self,
        role_id: RoleId,
    ) -> AppResult<Vec<PermissionEntry>> {
        Ok(self
            .entries
            .lock()
            .await
            .iter()
            .filter(|entry| entry.role_id == role_id)
            .cloned()
            .collect())
    }

    async fn save_permission_entry(
        &self,
        role_id: RoleId,
        permission_category_id: PermissionCategoryId,
        flags: CrudFlags,
    ) -> AppResult<PermissionEntry> {
        let mut entries = self.entries.lock().await;
        if let Some(entry) = entries.iter_mut().find(|entry| {
            entry.role_id == role_id && entry.permission_category_id == permission_category_id
        }) {
            entry.flags = flags;
            return Ok(entry.clone());
        }
        let entry = PermissionEntry {
            id: PermissionEntryId::new(entries.len() as i64 + 1),
            role_id,
            permission_category_id,
            flags,
            is_active: true,
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn create_role_assignment(
        &self,
        input: RoleAssignmentInput,
    ) -> AppResult<RoleAssignment> {
        let mut assignments = self.assignments.lock().await;
        let assignment = RoleAssignment {
            id: RoleAssignmentId::new(assignments.len() as i64 + 1),
            employee_id: input.employee_id,
            role_id: input.role_id,
            branch_scope: input.branch_scope,
            is_primary: input.is_primary,
            is_active: true,
            assigned_at: Utc::now(),
            deleted_at: None,
        };
        assignments.push(assignment.clone());
        Ok(assignment)
    }

    async fn find_role_assignment(
        &self,
        assignment_id: RoleAssignmentId,
    ) -> AppResult<Option<RoleAssignment>> {
        Ok(self
            .assignments
            .lock()
            .await
            .iter()
            .find(|assignment| assignment.id == assignment_id)
            .cloned())
    }

    async fn soft_delete_role_assignment(
        &self,
        assignment_id: RoleAssignmentId,
        deleted_at: DateTime<Utc>,
    ) -> AppResult<()> {
        if let Some(assignment) = self
            .assignments
            .lock()
            .await
            .iter_mut()
            .find(|assignment| assignment.id == assignment_id)
        {
            assignment.is_active = false;
            assignment.deleted_at = Some(deleted_at);
        }
        Ok(())
    }
}

fn system_role(id: i64, slug: &str) -> Role {
    Role {
        id: RoleId::new(id),
        name: slug.to_owned(),
        slug: slug.to_owned(),
        description: None,
        priority: 100,
        is_system: true,
        is_active: true,
    }
}

fn category(id: i64, name: &str) -> PermissionCategory {
    PermissionCategory {
        id: PermissionCategoryId::new(id),
        name: name.to_owned(),
        short_code: None,
        description: None,
    }
}

async fn service_with(roles: FakeRoles) -> (Arc<FakeRoles>, RoleAdminService) {
    let roles = Arc::new(roles);
    let employees = Arc::new(FakeEmployees::default());
    employees
        .employees
        .lock()
        .await
        .push(stored(1, employee_details("EMP-1", "Ada")));
    let organization = FakeOrganization::default();
    organization.branches.lock().await.push(branch(3, "Austin"));

    let service = RoleAdminService::new(roles.clone(), employees, Arc::new(organization));
    (roles, service)
}

#[tokio::test]
async fn create_role_derives_slug_from_name() -> AppResult<()> {
    let (_, service) = service_with(FakeRoles::default()).await;

    let role = service
        .create_role(RoleChanges {
            name: Some("  HR Manager (EU) ".to_owned()),
            ..RoleChanges::default()
        })
        .await?;

    assert_eq!(role.name, "HR Manager (EU)");
    assert_eq!(role.slug, "hr-manager-eu");
    assert_eq!(role.priority, 0);
    assert!(role.is_active && !role.is_system);
    Ok(())
}

#[tokio::test]
async fn create_role_rejects_blank_name_and_empty_slug() {
    let (_, service) = service_with(FakeRoles::default()).await;

    let blank = service.create_role(RoleChanges::default()).await;
    assert!(matches!(blank, Err(AppError::Validation(message)) if message == "name is required"));

    let symbols = service
        .create_role(RoleChanges {
            name: Some("Ops".to_owned()),
            slug: Some("!!!".to_owned()),
            ..RoleChanges::default()
        })
        .await;
    assert!(matches!(symbols, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn system_roles_are_immutable() -> AppResult<()> {
    let roles = FakeRoles::default();
    roles.roles.lock().await.push(system_role(1, "admin"));
    let (_, service) = service_with(roles).await;

    let update = service
        .update_role(
            RoleId::new(1),
            RoleChanges {
                name: Some("Root".to_owned()),
                ..RoleChanges::default()
            },
        )
        .await;
    assert!(matches!(update, Err(AppError::Conflict(_))));

    let deactivate = service.deactivate_role(RoleId::new(1)).await;
    assert!(matches!(deactivate, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn update_and_deactivate_custom_role() -> AppResult<()> {
    let (roles, service) = service_with(FakeRoles::default()).await;
    let role = service
        .create_role(RoleChanges {
            name: Some("Recruiter".to_owned()),
            description: Some("Hiring".to_owned()),
            ..RoleChanges::default()
        })
        .await?;

    let updated = service
        .update_role(
            role.id,
            RoleChanges {
                priority: Some(5),
                ..RoleChanges::default()
            },
        )
        .await?;
    assert_eq!(updated.slug, "recruiter");
    assert_eq!(updated.description.as_deref(), Some("Hiring"));
    assert_eq!(updated.priority, 5);

    service.deactivate_role(role.id).await?;
    assert!(!roles.roles.lock().await[0].is_active);
    Ok(())
}

#[tokio::test]
async fn assign_role_validates_employee_role_and_branch() -> AppResult<()> {
    let roles = FakeRoles::default();
    roles.roles.lock().await.push(system_role(1, "admin"));
    let (_, service) = service_with(roles).await;

    let request = AssignRoleRequest {
        role_id: RoleId::new(1),
        branch_scope: Some(BranchId::new(3)),
        is_primary: true,
    };

    let missing_employee = service.assign_role(EmployeeId::new(9), request).await;
    assert!(matches!(missing_employee, Err(AppError::NotFound(_))));

    let missing_role = service
        .assign_role(
            EmployeeId::new(1),
            AssignRoleRequest {
                role_id: RoleId::new(8),
                ..request
            },
        )
        .await;
    assert!(matches!(missing_role, Err(AppError::Validation(_))));

    let missing_branch = service
        .assign_role(
            EmployeeId::new(1),
            AssignRoleRequest {
                branch_scope: Some(BranchId::new(4)),
                ..request
            },
        )
        .await;
    assert!(matches!(missing_branch, Err(AppError::Validation(_))));

    let assignment = service.assign_role(EmployeeId::new(1), request).await?;
    assert!(assignment.is_effective());
    assert_eq!(assignment.branch_scope, Some(BranchId::new(3)));
    Ok(())
}

#[tokio::test]
async fn removing_an_assignment_twice_is_not_found() -> AppResult<()> {
    let roles = FakeRoles::default();
    roles.roles.lock().await.push(system_role(1, "admin"));
    let (roles, service) = service_with(roles).await;
    let assignment = service
        .assign_role(
            EmployeeId::new(1),
            AssignRoleRequest {
                role_id: RoleId::new(1),
                branch_scope: None,
                is_primary: false,
            },
        )
        .await?;

    service.remove_assignment(assignment.id).await?;
    assert!(!roles.assignments.lock().await[0].is_effective());

    let again = service.remove_assignment(assignment.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn save_role_permission_upserts_flags() -> AppResult<()> {
    let roles = FakeRoles {
        categories: vec![category(7, "Employees")],
        ..FakeRoles::default()
    };
    roles.roles.lock().await.push(system_role(1, "admin"));
    let (_, service) = service_with(roles).await;

    let first = service
        .save_role_permission(
            RoleId::new(1),
            PermissionCategoryId::new(7),
            CrudFlags {
                can_view: true,
                ..CrudFlags::default()
            },
        )
        .await?;
    let second = service
        .save_role_permission(RoleId::new(1), PermissionCategoryId::new(7), CrudFlags::all())
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(
        service.role_permissions(RoleId::new(1)).await?,
        vec![second]
    );

    let unknown = service
        .save_role_permission(RoleId::new(1), PermissionCategoryId::new(8), CrudFlags::all())
        .await;
    assert!(matches!(unknown, Err(AppError::Validation(_))));
    Ok(())
}
