//! Employee records and contact validation.

use chrono::{DateTime, NaiveDate, Utc};
use qorehr_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{BranchId, DepartmentId, DesignationId, EmployeeId};

/// Longest email accepted for an employee.
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Lower-cased email address with a basic structural check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and normalizes an email address.
    ///
    /// Requires one `@`, a non-empty local part and a dotted domain.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let normalized = value.into().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AppError::Validation("email must not be empty".to_owned()));
        }

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(AppError::Validation(format!(
                "email '{normalized}' must contain '@'"
            )));
        };

        if local.is_empty() || domain.contains('@') {
            return Err(AppError::Validation(format!(
                "email '{normalized}' must contain exactly one '@' after a local part"
            )));
        }

        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(AppError::Validation(format!(
                "email domain '{domain}' must contain a '.' between labels"
            )));
        }

        if normalized.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "email must not exceed {EMAIL_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Editable employee attributes shared by create and update flows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// Human-facing employee code, unique across the company.
    pub employee_code: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: Option<String>,
    /// Work email, unique when present.
    pub email: Option<EmailAddress>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-form gender value.
    pub gender: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Home branch.
    pub branch_id: Option<BranchId>,
    /// Department membership.
    pub department_id: Option<DepartmentId>,
    /// Job designation.
    pub designation_id: Option<DesignationId>,
    /// Free-form position title.
    pub position: Option<String>,
    /// Highest qualification.
    pub qualification: Option<String>,
    /// Prior work experience summary.
    pub work_experience: Option<String>,
    /// First working day.
    pub hire_date: Option<NaiveDate>,
    /// Employment status label such as `Permanent` or `Probation`.
    pub employment_status: Option<String>,
    /// Contract type label.
    pub contract_type: Option<String>,
    /// Work shift label.
    pub work_shift: Option<String>,
    /// Manager the employee reports to.
    pub reporting_to: Option<EmployeeId>,
    /// Emergency contact details.
    pub emergency_contact: Option<String>,
    /// Marital status label.
    pub marital_status: Option<String>,
    /// Current address.
    pub local_address: Option<String>,
    /// Permanent address.
    pub permanent_address: Option<String>,
    /// Monthly base salary.
    pub basic_salary: Option<f64>,
    /// Free-form HR notes.
    pub notes: Option<String>,
    /// Superadmins see every menu regardless of role assignments.
    pub is_superadmin: bool,
}

/// Persisted employee, the principal of profile resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable identifier.
    pub id: EmployeeId,
    /// Editable attributes.
    pub details: EmployeeDetails,
    /// Inactive employees are soft-deleted.
    pub is_active: bool,
    /// Set when the employee is deactivated.
    pub date_of_leaving: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns first and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.details.last_name.as_deref().map(str::trim) {
            Some(last_name) if !last_name.is_empty() => {
                format!("{} {last_name}", self.details.first_name)
            }
            _ => self.details.first_name.clone(),
        }
    }

    /// Returns whether the employee bypasses role-based resolution.
    #[must_use]
    pub fn is_superadmin(&self) -> bool {
        self.details.is_superadmin
    }

    /// Case-insensitive match over names, employee code and email.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        let details = &self.details;
        [
            Some(details.first_name.as_str()),
            details.last_name.as_deref(),
            Some(details.employee_code.as_str()),
            details.email.as_ref().map(EmailAddress::as_str),
        ]
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(term.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn employee(first_name: &str, last_name: Option<&str>) -> Employee {
        Employee {
            id: EmployeeId::new(1),
            details: EmployeeDetails {
                employee_code: "EMP-001".to_owned(),
                first_name: first_name.to_owned(),
                last_name: last_name.map(ToOwned::to_owned),
                email: EmailAddress::new("ana.lopez@qore.example").ok(),
                ..EmployeeDetails::default()
            },
            is_active: true,
            date_of_leaving: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn email_is_normalized() {
        let email = EmailAddress::new("  Ana.Lopez@Qore.Example ");
        assert_eq!(
            email.map(String::from).unwrap_or_default(),
            "ana.lopez@qore.example"
        );
    }

    #[test]
    fn email_requires_dotted_domain() {
        assert!(EmailAddress::new("ana@localhost").is_err());
        assert!(EmailAddress::new("ana@.example").is_err());
    }

    #[test]
    fn email_rejects_second_at_sign() {
        assert!(EmailAddress::new("ana@lopez@qore.example").is_err());
    }

    #[test]
    fn full_name_skips_missing_last_name() {
        assert_eq!(employee("Ana", Some("Lopez")).full_name(), "Ana Lopez");
        assert_eq!(employee("Ana", None).full_name(), "Ana");
    }

    #[test]
    fn search_covers_code_and_email() {
        let ana = employee("Ana", Some("Lopez"));
        assert!(ana.matches_search("emp-00"));
        assert!(ana.matches_search("QORE.example"));
        assert!(ana.matches_search("lop"));
        assert!(!ana.matches_search("smith"));
    }
}
