use super::*;

impl RoleAdminService {
    /// Lists all roles, highest priority first.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.roles.list_roles().await
    }

    /// Creates a custom role.
    pub async fn create_role(&self, changes: RoleChanges) -> AppResult<Role> {
        let name = NonEmptyString::for_field("name", changes.name.unwrap_or_default())?;
        let slug = role_slug(changes.slug.as_deref().unwrap_or(name.as_str()))?;

        let role = self
            .roles
            .create_role(RoleInput {
                name: name.into(),
                slug,
                description: changes.description,
                priority: changes.priority.unwrap_or_default(),
            })
            .await?;
        info!(role_id = %role.id, slug = %role.slug, "role created");
        Ok(role)
    }

    /// Applies a partial update to a custom role.
    pub async fn update_role(&self, role_id: RoleId, changes: RoleChanges) -> AppResult<Role> {
        let current = self.require_mutable_role(role_id).await?;

        let name = NonEmptyString::for_field("name", changes.name.unwrap_or(current.name))?;
        let slug = match changes.slug {
            Some(slug) => role_slug(&slug)?,
            None => current.slug,
        };

        self.roles
            .update_role(
                role_id,
                RoleInput {
                    name: name.into(),
                    slug,
                    description: changes.description.or(current.description),
                    priority: changes.priority.unwrap_or(current.priority),
                },
            )
            .await
    }

    /// Deactivates a custom role.
    pub async fn deactivate_role(&self, role_id: RoleId) -> AppResult<()> {
        self.require_mutable_role(role_id).await?;
        self.roles.set_role_active(role_id, false).await?;
        info!(role_id = %role_id, "role deactivated");
        Ok(())
    }

    async fn require_mutable_role(&self, role_id: RoleId) -> AppResult<Role> {
        let role = self.require_role(role_id).await?;
        if role.is_system {
            return Err(AppError::Conflict(format!(
                "role '{}' is a system role and cannot be modified",
                role.slug
            )));
        }

        Ok(role)
    }
}

fn role_slug(value: &str) -> AppResult<String> {
    let slug = slugify(value);
    if slug.is_empty() {
        return Err(AppError::Validation(format!(
            "slug '{value}' must contain at least one letter or digit"
        )));
    }

    Ok(slug)
}
