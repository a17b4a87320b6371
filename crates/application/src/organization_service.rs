//! Branch, department and designation administration.

use std::sync::Arc;

use qorehr_core::{AppError, AppResult, NonEmptyString};
use qorehr_domain::{
    Branch, BranchId, Department, DepartmentId, Designation, EmailAddress,
};
use tracing::info;

use crate::employee_ports::{BranchInput, DepartmentInput, OrganizationRepository};

/// Partial branch attributes. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchChanges {
    /// Display name, required on create.
    pub name: Option<String>,
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
    /// Active flag, defaults to active on create.
    pub is_active: Option<bool>,
}

/// Partial department attributes. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentChanges {
    /// Unique name, required on create.
    pub name: Option<String>,
    /// Short code.
    pub short_code: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Active flag, defaults to active on create.
    pub is_active: Option<bool>,
}

/// Application service for the organization structure.
#[derive(Clone)]
pub struct OrganizationService {
    repository: Arc<dyn OrganizationRepository>,
}

impl OrganizationService {
    /// Creates a new organization service.
    #[must_use]
    pub fn new(repository: Arc<dyn OrganizationRepository>) -> Self {
        Self { repository }
    }

    /// Lists branches by name.
    pub async fn list_branches(&self) -> AppResult<Vec<Branch>> {
        self.repository.list_branches().await
    }

    /// Loads one branch.
    pub async fn get_branch(&self, branch_id: BranchId) -> AppResult<Branch> {
        self.repository
            .find_branch(branch_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("branch '{branch_id}' not found")))
    }

    /// Creates a branch.
    pub async fn create_branch(&self, changes: BranchChanges) -> AppResult<Branch> {
        let input = branch_input(
            BranchInput {
                name: String::new(),
                code: None,
                address: None,
                city: None,
                state: None,
                country: None,
                phone: None,
                email: None,
                is_active: true,
            },
            changes,
        )?;
        let branch = self.repository.create_branch(input).await?;
        info!(branch_id = %branch.id, "branch created");
        Ok(branch)
    }

    /// Applies a partial update to a branch.
    pub async fn update_branch(
        &self,
        branch_id: BranchId,
        changes: BranchChanges,
    ) -> AppResult<Branch> {
        let current = self.get_branch(branch_id).await?;
        let input = branch_input(
            BranchInput {
                name: current.name,
                code: current.code,
                address: current.address,
                city: current.city,
                state: current.state,
                country: current.country,
                phone: current.phone,
                email: current.email,
                is_active: current.is_active,
            },
            changes,
        )?;
        self.repository.update_branch(branch_id, input).await
    }

    /// Deletes a branch. Employees and role scopes pointing at it are cleared.
    pub async fn delete_branch(&self, branch_id: BranchId) -> AppResult<()> {
        self.get_branch(branch_id).await?;
        self.repository.delete_branch(branch_id).await?;
        info!(branch_id = %branch_id, "branch deleted");
        Ok(())
    }

    /// Lists departments by name.
    pub async fn list_departments(&self) -> AppResult<Vec<Department>> {
        self.repository.list_departments().await
    }

    /// Loads one department.
    pub async fn get_department(&self, department_id: DepartmentId) -> AppResult<Department> {
        self.repository
            .find_department(department_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("department '{department_id}' not found")))
    }

    /// Creates a department.
    pub async fn create_department(&self, changes: DepartmentChanges) -> AppResult<Department> {
        let input = department_input(
            DepartmentInput {
                name: String::new(),
                short_code: None,
                description: None,
                is_active: true,
            },
            changes,
        )?;
        let department = self.repository.create_department(input).await?;
        info!(department_id = %department.id, "department created");
        Ok(department)
    }

    /// Applies a partial update to a department.
    pub async fn update_department(
        &self,
        department_id: DepartmentId,
        changes: DepartmentChanges,
    ) -> AppResult<Department> {
        let current = self.get_department(department_id).await?;
        let input = department_input(
            DepartmentInput {
                name: current.name,
                short_code: current.short_code,
                description: current.description,
                is_active: current.is_active,
            },
            changes,
        )?;
        self.repository.update_department(department_id, input).await
    }

    /// Deletes a department.
    pub async fn delete_department(&self, department_id: DepartmentId) -> AppResult<()> {
        self.get_department(department_id).await?;
        self.repository.delete_department(department_id).await?;
        info!(department_id = %department_id, "department deleted");
        Ok(())
    }

    /// Lists designations by name.
    pub async fn list_designations(&self) -> AppResult<Vec<Designation>> {
        self.repository.list_designations().await
    }
}

fn branch_input(mut input: BranchInput, changes: BranchChanges) -> AppResult<BranchInput> {
    if let Some(name) = changes.name {
        input.name = name;
    }
    input.name = NonEmptyString::for_field("name", input.name)?.into();

    if let Some(email) = changes.email {
        input.email = if email.trim().is_empty() {
            None
        } else {
            Some(EmailAddress::new(email)?.into())
        };
    }

    input.code = changes.code.or(input.code);
    input.address = changes.address.or(input.address);
    input.city = changes.city.or(input.city);
    input.state = changes.state.or(input.state);
    input.country = changes.country.or(input.country);
    input.phone = changes.phone.or(input.phone);
    input.is_active = changes.is_active.unwrap_or(input.is_active);
    Ok(input)
}

fn department_input(
    mut input: DepartmentInput,
    changes: DepartmentChanges,
) -> AppResult<DepartmentInput> {
    if let Some(name) = changes.name {
        input.name = name;
    }
    input.name = NonEmptyString::for_field("name", input.name)?.into();
    input.short_code = changes.short_code.or(input.short_code);
    input.description = changes.description.or(input.description);
    input.is_active = changes.is_active.unwrap_or(input.is_active);
    Ok(input)
}

#[cfg(test)]
mod tests;
