use super::*;

impl RoleAdminService {
    /// Lists every permission category.
    pub async fn list_permission_categories(&self) -> AppResult<Vec<PermissionCategory>> {
        self.roles.list_permission_categories().await
    }

    /// Lists a role's permission entries.
    pub async fn role_permissions(&self, role_id: RoleId) -> AppResult<Vec<PermissionEntry>> {
        self.require_role(role_id).await?;
        self.roles.list_role_permission_entries(role_id).await
    }

    /// Sets a role's flags for one category, creating the entry when needed.
    pub async fn save_role_permission(
        &self,
        role_id: RoleId,
        permission_category_id: PermissionCategoryId,
        flags: CrudFlags,
    ) -> AppResult<PermissionEntry> {
        self.require_role(role_id).await?;
        if self
            .roles
            .find_permission_category(permission_category_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation(format!(
                "permission category '{permission_category_id}' does not exist"
            )));
        }

        let entry = self
            .roles
            .save_permission_entry(role_id, permission_category_id, flags)
            .await?;
        info!(
            role_id = %role_id,
            permission_category_id = %permission_category_id,
            can_view = flags.can_view,
            "role permission saved"
        );
        Ok(entry)
    }
}
