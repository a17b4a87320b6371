use super::*;

impl EmployeeService {
    /// Lists employees matching the filter.
    pub async fn list_employees(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<Page<Employee>> {
        self.employees.list_employees(filter, page).await
    }

    /// Loads one employee.
    pub async fn get_employee(&self, employee_id: EmployeeId) -> AppResult<Employee> {
        self.require_employee(employee_id).await
    }

    /// Groups matching employees by home branch.
    ///
    /// Each group is paged independently. Groups with no employees on the
    /// requested page are omitted.
    pub async fn list_employees_by_branch(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<EmployeesByBranch> {
        let branches = self.organization.list_branches().await?;
        let mut groups = Vec::with_capacity(branches.len() + 1);
        let mut total = 0;

        let candidates = branches
            .into_iter()
            .map(Some)
            .chain(std::iter::once(None));
        for branch in candidates {
            let branch_filter = filter.for_branch(branch.as_ref().map(|branch| branch.id));
            let employees = self.employees.list_employees(&branch_filter, page).await?;
            total += employees.total;
            if !employees.items.is_empty() {
                groups.push(BranchEmployees { branch, employees });
            }
        }

        Ok(EmployeesByBranch { groups, total })
    }

    /// Lists employees of one branch.
    pub async fn list_branch_employees(
        &self,
        branch_id: BranchId,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<BranchEmployees> {
        let branch = self
            .organization
            .find_branch(branch_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("branch '{branch_id}' not found")))?;

        let employees = self
            .employees
            .list_employees(&filter.for_branch(Some(branch_id)), page)
            .await?;

        Ok(BranchEmployees {
            branch: Some(branch),
            employees,
        })
    }
}
