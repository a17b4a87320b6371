//! Integer identifiers for persisted records.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use qorehr_core::AppError;
use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a stored identifier value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the stored identifier value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                value.trim().parse::<i64>().map(Self).map_err(|_| {
                    AppError::Validation(format!("invalid {} '{value}'", $label))
                })
            }
        }
    };
}

entity_id!(
    /// Identifier of an employee (the principal resolved by profile lookups).
    EmployeeId,
    "employee id"
);
entity_id!(
    /// Identifier of a branch office.
    BranchId,
    "branch id"
);
entity_id!(
    /// Identifier of a department.
    DepartmentId,
    "department id"
);
entity_id!(
    /// Identifier of a designation.
    DesignationId,
    "designation id"
);
entity_id!(
    /// Identifier of a role.
    RoleId,
    "role id"
);
entity_id!(
    /// Identifier of one employee-to-role link.
    RoleAssignmentId,
    "role assignment id"
);
entity_id!(
    /// Identifier of one role permission row.
    PermissionEntryId,
    "permission entry id"
);
entity_id!(
    /// Identifier of a permission category.
    PermissionCategoryId,
    "permission category id"
);
entity_id!(
    /// Identifier of a top-level sidebar menu.
    SidebarMenuId,
    "sidebar menu id"
);
entity_id!(
    /// Identifier of a sidebar submenu.
    SidebarSubMenuId,
    "sidebar submenu id"
);
entity_id!(
    /// Identifier of a job posting.
    JobId,
    "job id"
);
entity_id!(
    /// Identifier of an interview screening record.
    ScreeningId,
    "screening id"
);

#[cfg(test)]
mod tests {
    use super::{EmployeeId, JobId};

    #[test]
    fn parses_trimmed_integers() {
        assert_eq!("  42 ".parse::<EmployeeId>().ok(), Some(EmployeeId::new(42)));
    }

    #[test]
    fn rejects_non_numeric_values() {
        let result = "abc".parse::<JobId>();
        assert!(result.is_err());
    }
}
