//! Ports for employee records and the organization structure around them.

mod employees;
mod organization;

pub use employees::{EmployeeFilter, EmployeeRepository, PasswordHasher};
pub use organization::{BranchInput, DepartmentInput, OrganizationRepository};
