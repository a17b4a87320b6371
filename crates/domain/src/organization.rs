//! Branches, departments and designations.

use serde::{Deserialize, Serialize};

use crate::{BranchId, DepartmentId, DesignationId};

/// Branch office an employee or role assignment can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Stable identifier.
    pub id: BranchId,
    /// Display name.
    pub name: String,
    /// Short unique code.
    pub code: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or region.
    pub state: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Inactive branches stay referenced but are hidden from pickers.
    pub is_active: bool,
}

/// Organizational department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Stable identifier.
    pub id: DepartmentId,
    /// Unique display name.
    pub name: String,
    /// Short code.
    pub short_code: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Inactive departments stay referenced but are hidden from pickers.
    pub is_active: bool,
}

/// Job designation lookup value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    /// Stable identifier.
    pub id: DesignationId,
    /// Display name.
    pub name: String,
    /// Short code.
    pub short_code: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}
