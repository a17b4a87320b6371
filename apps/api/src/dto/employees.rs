mod conversions;
mod types;

pub use types::{
    BranchEmployeesResponse, BranchGroupResponse, BranchSummaryResponse, EmployeeListQuery,
    EmployeeRequest, EmployeeResponse,
};
