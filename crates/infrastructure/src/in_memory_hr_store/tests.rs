use std::sync::Arc;

use chrono::{TimeZone, Utc};
use qorehr_application::{
    BranchInput, DepartmentInput, EmployeeFilter, EmployeeRepository, JobPostingRepository,
    OrganizationRepository, ProfileService, RoleAdminRepository, ScreeningFilter, ScreeningInput,
    ScreeningRepository,
};
use qorehr_core::{AppError, AppResult, PageRequest};
use qorehr_domain::{
    CrudFlags, Employee, EmployeeDetails, EmployeeId, JobPostingDetails,
    PermissionCategory, PermissionCategoryId, PermissionEntry, PermissionEntryId, Role,
    RoleAssignment, RoleAssignmentId, RoleId, ScreeningStatus, SidebarMenu, SidebarMenuId,
    SidebarSubMenu, SidebarSubMenuId,
};

use super::InMemoryHrStore;

fn employee(id: i64, first_name: &str, is_superadmin: bool) -> Employee {
    let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap_or_default();
    Employee {
        id: EmployeeId::new(id),
        details: EmployeeDetails {
            employee_code: format!("E{id}"),
            first_name: first_name.to_owned(),
            is_superadmin,
            ..EmployeeDetails::default()
        },
        is_active: true,
        date_of_leaving: None,
        created_at,
        updated_at: created_at,
    }
}

fn branch_input(name: &str, code: &str) -> BranchInput {
    BranchInput {
        name: name.to_owned(),
        code: Some(code.to_owned()),
        address: None,
        city: None,
        state: None,
        country: None,
        phone: None,
        email: None,
        is_active: true,
    }
}

fn department_input(name: &str) -> DepartmentInput {
    DepartmentInput {
        name: name.to_owned(),
        short_code: None,
        description: None,
        is_active: true,
    }
}

async fn seed_single_grant(store: &InMemoryHrStore) {
    store.insert_employee(employee(1, "Ada", false)).await;
    store
        .insert_role(Role {
            id: RoleId::new(1),
            name: "R1".to_owned(),
            slug: "r1".to_owned(),
            description: None,
            priority: 0,
            is_system: false,
            is_active: true,
        })
        .await;
    store
        .insert_role_assignment(RoleAssignment {
            id: RoleAssignmentId::new(1),
            employee_id: EmployeeId::new(1),
            role_id: RoleId::new(1),
            branch_scope: None,
            is_primary: true,
            is_active: true,
            assigned_at: Utc::now(),
            deleted_at: None,
        })
        .await;
    store
        .insert_permission_category(PermissionCategory {
            id: PermissionCategoryId::new(1),
            name: "C1".to_owned(),
            short_code: None,
            description: None,
        })
        .await;
    store
        .insert_permission_entry(PermissionEntry {
            id: PermissionEntryId::new(1),
            role_id: RoleId::new(1),
            permission_category_id: PermissionCategoryId::new(1),
            flags: CrudFlags {
                can_view: true,
                ..CrudFlags::default()
            },
            is_active: true,
        })
        .await;
    store
        .insert_sidebar_menu(SidebarMenu {
            id: SidebarMenuId::new(1),
            menu: "Menu1".to_owned(),
            icon: None,
            url: None,
            lang_key: None,
            display_order: 1,
            level: 0,
            is_active: true,
            sidebar_display: true,
        })
        .await;
    store
        .insert_sidebar_sub_menu(SidebarSubMenu {
            id: SidebarSubMenuId::new(1),
            sidebar_menu_id: SidebarMenuId::new(1),
            permission_category_id: Some(PermissionCategoryId::new(1)),
            sub_menu: "SubMenu1".to_owned(),
            icon: None,
            url: None,
            lang_key: None,
            display_order: 1,
            level: 1,
            is_active: true,
            sidebar_display: true,
        })
        .await;
}

#[tokio::test]
async fn resolver_builds_single_grant_sidebar_from_store() -> AppResult<()> {
    let store = Arc::new(InMemoryHrStore::new());
    seed_single_grant(&store).await;
    let service = ProfileService::new(store);

    let access = service.resolve_profile(EmployeeId::new(1)).await?;

    assert_eq!(access.role_details.len(), 1);
    let role = access.role_details.first().map(|view| (view.role.id, view.is_primary));
    assert_eq!(role, Some((RoleId::new(1), true)));

    assert_eq!(access.sidebar_menus.len(), 1);
    let menu = access.sidebar_menus.first();
    assert_eq!(menu.map(|view| view.menu.menu.as_str()), Some("Menu1"));
    let grants = menu
        .and_then(|view| view.sub_menus.first())
        .map(|sub_menu| sub_menu.permission_categories.clone())
        .unwrap_or_default();
    assert_eq!(grants.len(), 1);
    assert_eq!(
        grants.first().map(|grant| grant.flags),
        Some(CrudFlags {
            can_view: true,
            ..CrudFlags::default()
        })
    );
    Ok(())
}

#[tokio::test]
async fn resolver_gives_superadmin_every_seeded_menu() -> AppResult<()> {
    let store = Arc::new(InMemoryHrStore::with_default_catalog());
    store.insert_employee(employee(1, "Root", true)).await;
    let service = ProfileService::new(store);

    let access = service.resolve_profile(EmployeeId::new(1)).await?;

    let sub_menu_count: usize = access
        .sidebar_menus
        .iter()
        .map(|menu| menu.sub_menus.len())
        .sum();
    assert_eq!(access.sidebar_menus.len(), 3);
    assert_eq!(sub_menu_count, 7);
    assert!(
        access
            .sidebar_menus
            .iter()
            .flat_map(|menu| &menu.sub_menus)
            .flat_map(|sub_menu| &sub_menu.permission_categories)
            .all(|grant| grant.flags == CrudFlags::all())
    );
    Ok(())
}

#[tokio::test]
async fn resolver_reports_missing_principal() {
    let service = ProfileService::new(Arc::new(InMemoryHrStore::with_default_catalog()));

    let result = service.resolve_profile(EmployeeId::new(404)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn employee_identity_must_be_unique() -> AppResult<()> {
    let store = InMemoryHrStore::new();
    let details = EmployeeDetails {
        employee_code: "EMP-1".to_owned(),
        first_name: "Grace".to_owned(),
        ..EmployeeDetails::default()
    };
    store
        .create_employee(details.clone(), "hash".to_owned())
        .await?;

    let duplicate = store.create_employee(details, "hash".to_owned()).await;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn employees_are_listed_by_name_and_paginated() -> AppResult<()> {
    let store = InMemoryHrStore::new();
    for (id, name) in [(1, "Carol"), (2, "alice"), (3, "Bob")] {
        store.insert_employee(employee(id, name, false)).await;
    }

    let page = store
        .list_employees(&EmployeeFilter::default(), PageRequest::new(Some(1), Some(2)))
        .await?;

    let names: Vec<&str> = page
        .items
        .iter()
        .map(|employee| employee.details.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["Bob", "Carol"]);
    assert_eq!(page.total, 3);
    assert_eq!(page.pages(), 2);
    Ok(())
}

#[tokio::test]
async fn deleting_branch_detaches_employees() -> AppResult<()> {
    let store = InMemoryHrStore::new();
    let branch = store.create_branch(branch_input("North", "N1")).await?;
    let mut staff = employee(1, "Dana", false);
    staff.details.branch_id = Some(branch.id);
    store.insert_employee(staff).await;

    store.delete_branch(branch.id).await?;

    let stored = store.find_employee(EmployeeId::new(1)).await?;
    assert_eq!(stored.and_then(|employee| employee.details.branch_id), None);
    assert!(matches!(
        store.delete_branch(branch.id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn branch_code_and_department_name_conflict() -> AppResult<()> {
    let store = InMemoryHrStore::new();
    store.create_branch(branch_input("North", "N1")).await?;
    store.create_department(department_input("Finance")).await?;

    let branch = store.create_branch(branch_input("Other", "N1")).await;
    let department = store.create_department(department_input("Finance")).await;

    assert!(matches!(branch, Err(AppError::Conflict(_))));
    assert!(matches!(department, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn department_with_job_postings_cannot_be_deleted() -> AppResult<()> {
    let store = InMemoryHrStore::new();
    let department = store.create_department(department_input("Hiring")).await?;
    store
        .create_job_posting(JobPostingDetails {
            job_title: "Engineer".to_owned(),
            job_description: "Builds things".to_owned(),
            department_id: department.id,
            status: "Open".to_owned(),
            priority: "High".to_owned(),
            assigned_to_employee_id: None,
            min_salary: None,
            max_salary: None,
            employment_type: "Full-time".to_owned(),
            application_deadline: None,
            is_remote: false,
            client_budget_hourly: None,
            internal_budget_hourly: None,
            candidate_split_percentage: None,
            company_split_percentage: None,
            requirements: None,
            responsibilities: None,
            benefits: None,
        })
        .await?;

    let result = store.delete_department(department.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(
        store
            .find_department(department.id)
            .await?
            .is_some()
    );
    Ok(())
}

#[tokio::test]
async fn saving_permission_entry_updates_existing_grant() -> AppResult<()> {
    let store = InMemoryHrStore::with_default_catalog();
    let roles = store.list_roles().await?;
    let Some(recruiter) = roles.iter().find(|role| role.slug == "recruiter") else {
        panic!("seeded catalog should contain the recruiter role");
    };
    let before = store.list_role_permission_entries(recruiter.id).await?;
    let Some(existing) = before.first() else {
        panic!("recruiter should have seeded grants");
    };

    let saved = store
        .save_permission_entry(
            recruiter.id,
            existing.permission_category_id,
            CrudFlags::all(),
        )
        .await?;

    let after = store.list_role_permission_entries(recruiter.id).await?;
    assert_eq!(saved.id, existing.id);
    assert_eq!(after.len(), before.len());
    assert_eq!(saved.flags, CrudFlags::all());
    Ok(())
}

#[tokio::test]
async fn screenings_filter_by_status_newest_first() -> AppResult<()> {
    let store = InMemoryHrStore::new();
    for call_id in ["call-a", "call-b"] {
        store
            .create_screening(ScreeningInput {
                call_id: Some(call_id.to_owned()),
                status: ScreeningStatus::Completed,
                ..ScreeningInput::default()
            })
            .await?;
    }
    store
        .create_screening(ScreeningInput {
            call_id: Some("call-c".to_owned()),
            ..ScreeningInput::default()
        })
        .await?;

    let completed = store
        .find_screenings(&ScreeningFilter {
            status: Some(ScreeningStatus::Completed),
            ..ScreeningFilter::default()
        })
        .await?;

    let call_ids: Vec<Option<&str>> = completed
        .iter()
        .map(|screening| screening.call_id.as_deref())
        .collect();
    assert_eq!(call_ids, vec![Some("call-b"), Some("call-a")]);
    Ok(())
}

#[tokio::test]
async fn user_lookup_returns_earliest_screening() -> AppResult<()> {
    let store = InMemoryHrStore::new();
    let first = store
        .create_screening(ScreeningInput {
            call_id: Some("call-a".to_owned()),
            user_id: Some("12".to_owned()),
            ..ScreeningInput::default()
        })
        .await?;
    store
        .create_screening(ScreeningInput {
            call_id: Some("call-b".to_owned()),
            user_id: Some("12".to_owned()),
            ..ScreeningInput::default()
        })
        .await?;

    let found = store.find_screening_for_user("12").await?;
    assert_eq!(found.map(|screening| screening.id), Some(first.id));
    assert!(store.find_screening_for_user("99").await?.is_none());
    Ok(())
}
