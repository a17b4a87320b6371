use qorehr_application::{BranchChanges, DepartmentChanges};
use qorehr_domain::{Branch, Department, Designation};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of a branch office.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/branch-response.ts"
)]
pub struct BranchResponse {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

/// Incoming payload for branch create and update.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/branch-request.ts"
)]
pub struct BranchRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

/// API representation of a department.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/department-response.ts"
)]
pub struct DepartmentResponse {
    pub id: i64,
    pub name: String,
    pub short_code: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Incoming payload for department create and update.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/department-request.ts"
)]
pub struct DepartmentRequest {
    pub name: Option<String>,
    pub short_code: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// API representation of a designation.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/designation-response.ts"
)]
pub struct DesignationResponse {
    pub id: i64,
    pub name: String,
    pub short_code: Option<String>,
    pub description: Option<String>,
}

impl From<Branch> for BranchResponse {
    fn from(branch: Branch) -> Self {
        Self {
            id: branch.id.value(),
            name: branch.name,
            code: branch.code,
            address: branch.address,
            city: branch.city,
            state: branch.state,
            country: branch.country,
            phone: branch.phone,
            email: branch.email,
            is_active: branch.is_active,
        }
    }
}

impl From<BranchRequest> for BranchChanges {
    fn from(value: BranchRequest) -> Self {
        Self {
            name: value.name,
            code: value.code,
            address: value.address,
            city: value.city,
            state: value.state,
            country: value.country,
            phone: value.phone,
            email: value.email,
            is_active: value.is_active,
        }
    }
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id.value(),
            name: department.name,
            short_code: department.short_code,
            description: department.description,
            is_active: department.is_active,
        }
    }
}

impl From<DepartmentRequest> for DepartmentChanges {
    fn from(value: DepartmentRequest) -> Self {
        Self {
            name: value.name,
            short_code: value.short_code,
            description: value.description,
            is_active: value.is_active,
        }
    }
}

impl From<Designation> for DesignationResponse {
    fn from(designation: Designation) -> Self {
        Self {
            id: designation.id.value(),
            name: designation.name,
            short_code: designation.short_code,
            description: designation.description,
        }
    }
}
