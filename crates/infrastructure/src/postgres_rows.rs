//! Row shapes shared by the PostgreSQL repositories.

use chrono::{DateTime, NaiveDate, Utc};
use qorehr_core::{AppError, AppResult};
use qorehr_domain::{
    Branch, BranchId, CrudFlags, Department, DepartmentId, Designation, DesignationId,
    EmailAddress, Employee, EmployeeDetails, EmployeeId, InterviewScreening, JobId, JobPosting,
    JobPostingDetails, PermissionCategory, PermissionCategoryId, PermissionEntry,
    PermissionEntryId, Role, RoleAssignment, RoleAssignmentId, RoleId, ScreeningId,
    ScreeningStatus, SidebarMenu, SidebarMenuId, SidebarSubMenu, SidebarSubMenuId,
};
use sqlx::FromRow;

pub(crate) const EMPLOYEE_COLUMNS: &str = "id, employee_code, first_name, last_name, email, phone, \
    gender, date_of_birth, branch_id, department_id, designation_id, position, qualification, \
    work_experience, hire_date, employment_status, contract_type, work_shift, reporting_to, \
    emergency_contact, marital_status, local_address, permanent_address, basic_salary, notes, \
    is_superadmin, is_active, date_of_leaving, created_at, updated_at";

pub(crate) const JOB_POSTING_COLUMNS: &str = "job_id, job_title, job_description, department_id, \
    status, priority, assigned_to_employee_id, min_salary, max_salary, employment_type, \
    application_deadline, is_remote, client_budget_hourly, internal_budget_hourly, \
    candidate_split_percentage, company_split_percentage, requirements, responsibilities, \
    benefits, created_at, updated_at";

pub(crate) const SCREENING_COLUMNS: &str =
    "id, call_id, user_id, join_url, job_id, status, created_at, updated_at";

/// Maps a unique violation to a conflict and anything else to an internal error.
pub(crate) fn write_error(error: sqlx::Error, conflict: impl FnOnce() -> String, action: &str) -> AppError {
    if let sqlx::Error::Database(database_error) = &error {
        match database_error.code().as_deref() {
            Some("23505") => return AppError::Conflict(conflict()),
            Some("23503") => {
                return AppError::Conflict(format!("cannot {action}: record is still referenced"));
            }
            _ => {}
        }
    }

    AppError::Internal(format!("failed to {action}: {error}"))
}

#[derive(Debug, FromRow)]
pub(crate) struct EmployeeRow {
    id: i64,
    employee_code: String,
    first_name: String,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    gender: Option<String>,
    date_of_birth: Option<NaiveDate>,
    branch_id: Option<i64>,
    department_id: Option<i64>,
    designation_id: Option<i64>,
    position: Option<String>,
    qualification: Option<String>,
    work_experience: Option<String>,
    hire_date: Option<NaiveDate>,
    employment_status: Option<String>,
    contract_type: Option<String>,
    work_shift: Option<String>,
    reporting_to: Option<i64>,
    emergency_contact: Option<String>,
    marital_status: Option<String>,
    local_address: Option<String>,
    permanent_address: Option<String>,
    basic_salary: Option<f64>,
    notes: Option<String>,
    is_superadmin: bool,
    is_active: bool,
    date_of_leaving: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = AppError;

    fn try_from(row: EmployeeRow) -> AppResult<Self> {
        let email = row
            .email
            .map(EmailAddress::new)
            .transpose()
            .map_err(|error| {
                AppError::Internal(format!("stored email of employee '{}' is invalid: {error}", row.id))
            })?;

        Ok(Self {
            id: EmployeeId::new(row.id),
            details: EmployeeDetails {
                employee_code: row.employee_code,
                first_name: row.first_name,
                last_name: row.last_name,
                email,
                phone: row.phone,
                gender: row.gender,
                date_of_birth: row.date_of_birth,
                branch_id: row.branch_id.map(BranchId::new),
                department_id: row.department_id.map(DepartmentId::new),
                designation_id: row.designation_id.map(DesignationId::new),
                position: row.position,
                qualification: row.qualification,
                work_experience: row.work_experience,
                hire_date: row.hire_date,
                employment_status: row.employment_status,
                contract_type: row.contract_type,
                work_shift: row.work_shift,
                reporting_to: row.reporting_to.map(EmployeeId::new),
                emergency_contact: row.emergency_contact,
                marital_status: row.marital_status,
                local_address: row.local_address,
                permanent_address: row.permanent_address,
                basic_salary: row.basic_salary,
                notes: row.notes,
                is_superadmin: row.is_superadmin,
            },
            is_active: row.is_active,
            date_of_leaving: row.date_of_leaving,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub(crate) fn employees_from_rows(rows: Vec<EmployeeRow>) -> AppResult<Vec<Employee>> {
    rows.into_iter().map(Employee::try_from).collect()
}

#[derive(Debug, FromRow)]
pub(crate) struct BranchRow {
    id: i64,
    name: String,
    code: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    is_active: bool,
}

impl From<BranchRow> for Branch {
    fn from(row: BranchRow) -> Self {
        Self {
            id: BranchId::new(row.id),
            name: row.name,
            code: row.code,
            address: row.address,
            city: row.city,
            state: row.state,
            country: row.country,
            phone: row.phone,
            email: row.email,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct DepartmentRow {
    id: i64,
    name: String,
    short_code: Option<String>,
    description: Option<String>,
    is_active: bool,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: DepartmentId::new(row.id),
            name: row.name,
            short_code: row.short_code,
            description: row.description,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct DesignationRow {
    id: i64,
    name: String,
    short_code: Option<String>,
    description: Option<String>,
}

impl From<DesignationRow> for Designation {
    fn from(row: DesignationRow) -> Self {
        Self {
            id: DesignationId::new(row.id),
            name: row.name,
            short_code: row.short_code,
            description: row.description,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct RoleRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    priority: i32,
    is_system: bool,
    is_active: bool,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Self {
            id: RoleId::new(row.id),
            name: row.name,
            slug: row.slug,
            description: row.description,
            priority: row.priority,
            is_system: row.is_system,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct RoleAssignmentRow {
    id: i64,
    employee_id: i64,
    role_id: i64,
    branch_scope: Option<i64>,
    is_primary: bool,
    is_active: bool,
    assigned_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<RoleAssignmentRow> for RoleAssignment {
    fn from(row: RoleAssignmentRow) -> Self {
        Self {
            id: RoleAssignmentId::new(row.id),
            employee_id: EmployeeId::new(row.employee_id),
            role_id: RoleId::new(row.role_id),
            branch_scope: row.branch_scope.map(BranchId::new),
            is_primary: row.is_primary,
            is_active: row.is_active,
            assigned_at: row.assigned_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PermissionCategoryRow {
    id: i64,
    name: String,
    short_code: Option<String>,
    description: Option<String>,
}

impl From<PermissionCategoryRow> for PermissionCategory {
    fn from(row: PermissionCategoryRow) -> Self {
        Self {
            id: PermissionCategoryId::new(row.id),
            name: row.name,
            short_code: row.short_code,
            description: row.description,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PermissionEntryRow {
    id: i64,
    role_id: i64,
    permission_category_id: i64,
    can_view: bool,
    can_add: bool,
    can_edit: bool,
    can_delete: bool,
    is_active: bool,
}

impl From<PermissionEntryRow> for PermissionEntry {
    fn from(row: PermissionEntryRow) -> Self {
        Self {
            id: PermissionEntryId::new(row.id),
            role_id: RoleId::new(row.role_id),
            permission_category_id: PermissionCategoryId::new(row.permission_category_id),
            flags: CrudFlags {
                can_view: row.can_view,
                can_add: row.can_add,
                can_edit: row.can_edit,
                can_delete: row.can_delete,
            },
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct SidebarMenuRow {
    id: i64,
    menu: String,
    icon: Option<String>,
    url: Option<String>,
    lang_key: Option<String>,
    display_order: i32,
    level: i32,
    is_active: bool,
    sidebar_display: bool,
}

impl From<SidebarMenuRow> for SidebarMenu {
    fn from(row: SidebarMenuRow) -> Self {
        Self {
            id: SidebarMenuId::new(row.id),
            menu: row.menu,
            icon: row.icon,
            url: row.url,
            lang_key: row.lang_key,
            display_order: row.display_order,
            level: row.level,
            is_active: row.is_active,
            sidebar_display: row.sidebar_display,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct SidebarSubMenuRow {
    id: i64,
    sidebar_menu_id: i64,
    permission_category_id: Option<i64>,
    sub_menu: String,
    icon: Option<String>,
    url: Option<String>,
    lang_key: Option<String>,
    display_order: i32,
    level: i32,
    is_active: bool,
    sidebar_display: bool,
}

impl From<SidebarSubMenuRow> for SidebarSubMenu {
    fn from(row: SidebarSubMenuRow) -> Self {
        Self {
            id: SidebarSubMenuId::new(row.id),
            sidebar_menu_id: SidebarMenuId::new(row.sidebar_menu_id),
            permission_category_id: row.permission_category_id.map(PermissionCategoryId::new),
            sub_menu: row.sub_menu,
            icon: row.icon,
            url: row.url,
            lang_key: row.lang_key,
            display_order: row.display_order,
            level: row.level,
            is_active: row.is_active,
            sidebar_display: row.sidebar_display,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct JobPostingRow {
    job_id: i64,
    job_title: String,
    job_description: String,
    department_id: i64,
    status: String,
    priority: String,
    assigned_to_employee_id: Option<i64>,
    min_salary: Option<f64>,
    max_salary: Option<f64>,
    employment_type: String,
    application_deadline: Option<NaiveDate>,
    is_remote: bool,
    client_budget_hourly: Option<f64>,
    internal_budget_hourly: Option<f64>,
    candidate_split_percentage: Option<i32>,
    company_split_percentage: Option<i32>,
    requirements: Option<String>,
    responsibilities: Option<String>,
    benefits: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<JobPostingRow> for JobPosting {
    fn from(row: JobPostingRow) -> Self {
        Self {
            job_id: JobId::new(row.job_id),
            details: JobPostingDetails {
                job_title: row.job_title,
                job_description: row.job_description,
                department_id: DepartmentId::new(row.department_id),
                status: row.status,
                priority: row.priority,
                assigned_to_employee_id: row.assigned_to_employee_id.map(EmployeeId::new),
                min_salary: row.min_salary,
                max_salary: row.max_salary,
                employment_type: row.employment_type,
                application_deadline: row.application_deadline,
                is_remote: row.is_remote,
                client_budget_hourly: row.client_budget_hourly,
                internal_budget_hourly: row.internal_budget_hourly,
                candidate_split_percentage: row.candidate_split_percentage,
                company_split_percentage: row.company_split_percentage,
                requirements: row.requirements,
                responsibilities: row.responsibilities,
                benefits: row.benefits,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct ScreeningRow {
    id: i64,
    call_id: Option<String>,
    user_id: Option<String>,
    join_url: Option<String>,
    job_id: Option<i64>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ScreeningRow> for InterviewScreening {
    type Error = AppError;

    fn try_from(row: ScreeningRow) -> AppResult<Self> {
        let status = row.status.parse::<ScreeningStatus>().map_err(|error| {
            AppError::Internal(format!("stored status of screening '{}' is invalid: {error}", row.id))
        })?;

        Ok(Self {
            id: ScreeningId::new(row.id),
            call_id: row.call_id,
            user_id: row.user_id,
            join_url: row.join_url,
            job_id: row.job_id.map(JobId::new),
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub(crate) fn screenings_from_rows(rows: Vec<ScreeningRow>) -> AppResult<Vec<InterviewScreening>> {
    rows.into_iter().map(InterviewScreening::try_from).collect()
}

/// Converts page bounds to the `i64` values bound into LIMIT and OFFSET.
pub(crate) fn page_bounds(page: qorehr_core::PageRequest) -> AppResult<(i64, i64)> {
    let limit = i64::from(page.limit());
    let offset = i64::try_from(page.offset())
        .map_err(|error| AppError::Validation(format!("invalid page offset: {error}")))?;
    Ok((limit, offset))
}

/// Total row count returned alongside paged queries.
pub(crate) fn page_total(total: i64) -> u64 {
    u64::try_from(total).unwrap_or_default()
}
