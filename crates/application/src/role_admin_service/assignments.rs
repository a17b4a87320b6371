use super::*;

impl RoleAdminService {
    /// Grants an active role to an employee.
    pub async fn assign_role(
        &self,
        employee_id: EmployeeId,
        request: AssignRoleRequest,
    ) -> AppResult<RoleAssignment> {
        if self.employees.find_employee(employee_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "employee '{employee_id}' not found"
            )));
        }

        let role = self
            .roles
            .find_role(request.role_id)
            .await?
            .ok_or_else(|| {
                AppError::Validation(format!("role '{}' does not exist", request.role_id))
            })?;
        if !role.is_active {
            return Err(AppError::Validation(format!(
                "role '{}' is inactive",
                role.slug
            )));
        }

        if let Some(branch_id) = request.branch_scope
            && self.organization.find_branch(branch_id).await?.is_none()
        {
            return Err(AppError::Validation(format!(
                "branch '{branch_id}' does not exist"
            )));
        }

        let assignment = self
            .roles
            .create_role_assignment(RoleAssignmentInput {
                employee_id,
                role_id: request.role_id,
                branch_scope: request.branch_scope,
                is_primary: request.is_primary,
            })
            .await?;
        info!(
            assignment_id = %assignment.id,
            employee_id = %employee_id,
            role = %role.slug,
            "role assigned"
        );
        Ok(assignment)
    }

    /// Soft-removes a role assignment.
    pub async fn remove_assignment(&self, assignment_id: RoleAssignmentId) -> AppResult<()> {
        let assignment = self
            .roles
            .find_role_assignment(assignment_id)
            .await?
            .filter(|assignment| assignment.deleted_at.is_none())
            .ok_or_else(|| {
                AppError::NotFound(format!("role assignment '{assignment_id}' not found"))
            })?;

        self.roles
            .soft_delete_role_assignment(assignment.id, Utc::now())
            .await?;
        info!(assignment_id = %assignment_id, "role assignment removed");
        Ok(())
    }
}
