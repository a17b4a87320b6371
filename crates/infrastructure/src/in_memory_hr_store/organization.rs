use async_trait::async_trait;
use qorehr_application::{BranchInput, DepartmentInput, OrganizationRepository};

use super::*;

fn branch_from_input(id: BranchId, input: BranchInput) -> Branch {
    Branch {
        id,
        name: input.name,
        code: input.code,
        address: input.address,
        city: input.city,
        state: input.state,
        country: input.country,
        phone: input.phone,
        email: input.email,
        is_active: input.is_active,
    }
}

fn department_from_input(id: DepartmentId, input: DepartmentInput) -> Department {
    Department {
        id,
        name: input.name,
        short_code: input.short_code,
        description: input.description,
        is_active: input.is_active,
    }
}

impl HrState {
    fn ensure_unique_branch_code(&self, input: &BranchInput, except: Option<BranchId>) -> AppResult<()> {
        let Some(code) = input.code.as_deref() else {
            return Ok(());
        };

        let clash = self
            .branches
            .values()
            .any(|branch| Some(branch.id) != except && branch.code.as_deref() == Some(code));
        ensure(!clash, || format!("branch code '{code}' already exists"))
    }

    fn ensure_unique_department_name(
        &self,
        input: &DepartmentInput,
        except: Option<DepartmentId>,
    ) -> AppResult<()> {
        let clash = self
            .departments
            .values()
            .any(|department| Some(department.id) != except && department.name == input.name);
        ensure(!clash, || format!("department '{}' already exists", input.name))
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryHrStore {
    async fn list_branches(&self) -> AppResult<Vec<Branch>> {
        let state = self.state.read().await;
        let mut branches: Vec<Branch> = state.branches.values().cloned().collect();
        branches.sort_by(|left, right| (&left.name, left.id).cmp(&(&right.name, right.id)));
        Ok(branches)
    }

    async fn find_branch(&self, branch_id: BranchId) -> AppResult<Option<Branch>> {
        Ok(self.state.read().await.branches.get(&branch_id).cloned())
    }

    async fn create_branch(&self, input: BranchInput) -> AppResult<Branch> {
        let mut state = self.state.write().await;
        state.ensure_unique_branch_code(&input, None)?;

        let id = BranchId::new(state.allocate("branches"));
        let branch = branch_from_input(id, input);
        state.branches.insert(id, branch.clone());
        Ok(branch)
    }

    async fn update_branch(&self, branch_id: BranchId, input: BranchInput) -> AppResult<Branch> {
        let mut state = self.state.write().await;
        if !state.branches.contains_key(&branch_id) {
            return Err(not_found("branch", branch_id));
        }
        state.ensure_unique_branch_code(&input, Some(branch_id))?;

        let branch = branch_from_input(branch_id, input);
        state.branches.insert(branch_id, branch.clone());
        Ok(branch)
    }

    async fn delete_branch(&self, branch_id: BranchId) -> AppResult<()> {
        let mut state = self.state.write().await;
        if state.branches.remove(&branch_id).is_none() {
            return Err(not_found("branch", branch_id));
        }

        for employee in state.employees.values_mut() {
            if employee.details.branch_id == Some(branch_id) {
                employee.details.branch_id = None;
            }
        }
        for assignment in state.assignments.values_mut() {
            if assignment.branch_scope == Some(branch_id) {
                assignment.branch_scope = None;
            }
        }

        Ok(())
    }

    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        let state = self.state.read().await;
        let mut departments: Vec<Department> = state.departments.values().cloned().collect();
        departments.sort_by(|left, right| (&left.name, left.id).cmp(&(&right.name, right.id)));
        Ok(departments)
    }

    async fn find_department(&self, department_id: DepartmentId) -> AppResult<Option<Department>> {
        Ok(self
            .state
            .read()
            .await
            .departments
            .get(&department_id)
            .cloned())
    }

    async fn create_department(&self, input: DepartmentInput) -> AppResult<Department> {
        let mut state = self.state.write().await;
        state.ensure_unique_department_name(&input, None)?;

        let id = DepartmentId::new(state.allocate("departments"));
        let department = department_from_input(id, input);
        state.departments.insert(id, department.clone());
        Ok(department)
    }

    async fn update_department(
        &self,
        department_id: DepartmentId,
        input: DepartmentInput,
    ) -> AppResult<Department> {
        let mut state = self.state.write().await;
        if !state.departments.contains_key(&department_id) {
            return Err(not_found("department", department_id));
        }
        state.ensure_unique_department_name(&input, Some(department_id))?;

        let department = department_from_input(department_id, input);
        state.departments.insert(department_id, department.clone());
        Ok(department)
    }

    async fn delete_department(&self, department_id: DepartmentId) -> AppResult<()> {
        let mut state = self.state.write().await;
        if !state.departments.contains_key(&department_id) {
            return Err(not_found("department", department_id));
        }

        let referenced = state
            .job_postings
            .values()
            .any(|posting| posting.details.department_id == department_id);
        ensure(!referenced, || {
            "cannot delete department: record is still referenced".to_owned()
        })?;

        state.departments.remove(&department_id);
        for employee in state.employees.values_mut() {
            if employee.details.department_id == Some(department_id) {
                employee.details.department_id = None;
            }
        }

        Ok(())
    }

    async fn list_designations(&self) -> AppResult<Vec<Designation>> {
        let state = self.state.read().await;
        let mut designations: Vec<Designation> = state.designations.values().cloned().collect();
        designations.sort_by(|left, right| (&left.name, left.id).cmp(&(&right.name, right.id)));
        Ok(designations)
    }

    async fn find_designation(
        &self,
        designation_id: DesignationId,
    ) -> AppResult<Option<Designation>> {
        Ok(self
            .state
            .read()
            .await
            .designations
            .get(&designation_id)
            .cloned())
    }
}
