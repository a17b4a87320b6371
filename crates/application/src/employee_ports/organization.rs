use async_trait::async_trait;
use qorehr_core::AppResult;
use qorehr_domain::{Branch, BranchId, Department, DepartmentId, Designation, DesignationId};

/// Validated branch attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInput {
    /// Display name.
    pub name: String,
    /// Unique short code.
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
    /// Active flag.
    pub is_active: bool,
}

/// Validated department attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentInput {
    /// Unique display name.
    pub name: String,
    /// Short code.
    pub short_code: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Active flag.
    pub is_active: bool,
}

/// Persistence port for branches, departments and designations.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Lists branches ordered by name.
    async fn list_branches(&self) -> AppResult<Vec<Branch>>;

    /// Loads one branch.
    async fn find_branch(&self, branch_id: BranchId) -> AppResult<Option<Branch>>;

    /// Inserts a branch. Duplicate codes are conflicts.
    async fn create_branch(&self, input: BranchInput) -> AppResult<Branch>;

    /// Replaces a branch's attributes.
    async fn update_branch(&self, branch_id: BranchId, input: BranchInput) -> AppResult<Branch>;

    /// Deletes a branch and clears references to it.
    async fn delete_branch(&self, branch_id: BranchId) -> AppResult<()>;

    /// Lists departments ordered by name.
    async fn list_departments(&self) -> AppResult<Vec<Department>>;

    /// Loads one department.
    async fn find_department(&self, department_id: DepartmentId) -> AppResult<Option<Department>>;

    /// Inserts a department. Duplicate names are conflicts.
    async fn create_department(&self, input: DepartmentInput) -> AppResult<Department>;

    /// Replaces a department's attributes.
    async fn update_department(
        &self,
        department_id: DepartmentId,
        input: DepartmentInput,
    ) -> AppResult<Department>;

    /// Deletes a department and clears employee references to it.
    async fn delete_department(&self, department_id: DepartmentId) -> AppResult<()>;

    /// Lists designations ordered by name.
    async fn list_designations(&self) -> AppResult<Vec<Designation>>;

    /// Loads one designation.
    async fn find_designation(
        &self,
        designation_id: DesignationId,
    ) -> AppResult<Option<Designation>>;
}
