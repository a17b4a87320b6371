use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qorehr_application::{RoleAdminRepository, RoleAssignmentInput, RoleInput};
use qorehr_domain::CrudFlags;

use super::*;

impl HrState {
    fn ensure_unique_slug(&self, slug: &str, except: Option<RoleId>) -> AppResult<()> {
        let clash = self
            .roles
            .values()
            .any(|role| Some(role.id) != except && role.slug == slug);
        ensure(!clash, || format!("role slug '{slug}' already exists"))
    }
}

#[async_trait]
impl RoleAdminRepository for InMemoryHrStore {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let state = self.state.read().await;
        let mut roles: Vec<Role> = state.roles.values().cloned().collect();
        roles.sort_by(|left, right| {
            right
                .priority
                .cmp(&left.priority)
                .then_with(|| left.name.cmp(&right.name))
                .then(left.id.cmp(&right.id))
        });
        Ok(roles)
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self.state.read().await.roles.get(&role_id).cloned())
    }

    async fn create_role(&self, input: RoleInput) -> AppResult<Role> {
        let mut state = self.state.write().await;
        state.ensure_unique_slug(&input.slug, None)?;

        let id = RoleId::new(state.allocate("roles"));
        let role = Role {
            id,
            name: input.name,
            slug: input.slug,
            description: input.description,
            priority: input.priority,
            is_system: false,
            is_active: true,
        };
        state.roles.insert(id, role.clone());
        Ok(role)
    }

    async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role> {
        let mut state = self.state.write().await;
        state.ensure_unique_slug(&input.slug, Some(role_id))?;

        let role = state
            .roles
            .get_mut(&role_id)
            .ok_or_else(|| not_found("role", role_id))?;
        role.name = input.name;
        role.slug = input.slug;
        role.description = input.description;
        role.priority = input.priority;
        Ok(role.clone())
    }

    async fn set_role_active(&self, role_id: RoleId, is_active: bool) -> AppResult<()> {
        let mut state = self.state.write().await;
        let role = state
            .roles
            .get_mut(&role_id)
            .ok_or_else(|| not_found("role", role_id))?;
        role.is_active = is_active;
        Ok(())
    }

    async fn list_permission_categories(&self) -> AppResult<Vec<PermissionCategory>> {
        let state = self.state.read().await;
        let mut categories: Vec<PermissionCategory> = state.categories.values().cloned().collect();
        categories.sort_by(|left, right| (&left.name, left.id).cmp(&(&right.name, right.id)));
        Ok(categories)
    }

    async fn find_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Option<PermissionCategory>> {
        Ok(self
            .state
            .read()
            .await
            .categories
            .get(&permission_category_id)
            .cloned())
    }

    async fn list_role_permission_entries(
        &self,
        role_id: RoleId,
    ) -> AppResult<Vec<PermissionEntry>> {
        let state = self.state.read().await;
        let mut entries: Vec<PermissionEntry> = state
            .entries
            .values()
            .filter(|entry| entry.role_id == role_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| (entry.permission_category_id, entry.id));
        Ok(entries)
    }

    async fn save_permission_entry(
        &self,
        role_id: RoleId,
        permission_category_id: PermissionCategoryId,
        flags: CrudFlags,
    ) -> AppResult<PermissionEntry> {
        let mut state = self.state.write().await;

        let mut saved = None;
        for entry in state.entries.values_mut().filter(|entry| {
            entry.role_id == role_id && entry.permission_category_id == permission_category_id
        }) {
            entry.flags = flags;
            entry.is_active = true;
            saved.get_or_insert_with(|| entry.clone());
        }

        if let Some(entry) = saved {
            return Ok(entry);
        }

        let id = PermissionEntryId::new(state.allocate("role_permissions"));
        let entry = PermissionEntry {
            id,
            role_id,
            permission_category_id,
            flags,
            is_active: true,
        };
        state.entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn create_role_assignment(
        &self,
        input: RoleAssignmentInput,
    ) -> AppResult<RoleAssignment> {
        let mut state = self.state.write().await;
        let id = RoleAssignmentId::new(state.allocate("role_assignments"));
        let assignment = RoleAssignment {
            id,
            employee_id: input.employee_id,
            role_id: input.role_id,
            branch_scope: input.branch_scope,
            is_primary: input.is_primary,
            is_active: true,
            assigned_at: Utc::now(),
            deleted_at: None,
        };
        state.assignments.insert(id, assignment.clone());
        Ok(assignment)
    }

    async fn find_role_assignment(
        &self,
        assignment_id: RoleAssignmentId,
    ) -> AppResult<Option<RoleAssignment>> {
        Ok(self
            .state
            .read()
            .await
            .assignments
            .get(&assignment_id)
            .cloned())
    }

    async fn soft_delete_role_assignment(
        &self,
        assignment_id: RoleAssignmentId,
        deleted_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut state = self.state.write().await;
        let assignment = state
            .assignments
            .get_mut(&assignment_id)
            .filter(|assignment| assignment.deleted_at.is_none())
            .ok_or_else(|| not_found("role assignment", assignment_id))?;

        assignment.is_active = false;
        assignment.deleted_at = Some(deleted_at);
        Ok(())
    }
}
