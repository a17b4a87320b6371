use qorehr_core::NonEmptyString;

use super::*;

pub(super) fn required_password(password: Option<&str>) -> AppResult<&str> {
    match password {
        Some(password) if !password.trim().is_empty() => Ok(password),
        _ => Err(AppError::Validation("password is required".to_owned())),
    }
}

pub(super) fn require_identity(details: &EmployeeDetails) -> AppResult<()> {
    NonEmptyString::for_field("employee_code", details.employee_code.as_str())?;
    NonEmptyString::for_field("first_name", details.first_name.as_str())?;
    Ok(())
}

/// Overlays provided values onto the current details.
pub(super) fn apply_changes(
    mut details: EmployeeDetails,
    changes: EmployeeChanges,
) -> AppResult<EmployeeDetails> {
    if let Some(code) = changes.employee_code {
        details.employee_code = code.trim().to_owned();
    }
    if let Some(first_name) = changes.first_name {
        details.first_name = first_name.trim().to_owned();
    }
    if let Some(email) = changes.email {
        details.email = if email.trim().is_empty() {
            None
        } else {
            Some(EmailAddress::new(email)?)
        };
    }
    if let Some(salary) = changes.basic_salary {
        if !salary.is_finite() || salary < 0.0 {
            return Err(AppError::Validation(
                "basic_salary must be a non-negative number".to_owned(),
            ));
        }
        details.basic_salary = Some(salary);
    }

    overlay(&mut details.last_name, changes.last_name);
    overlay(&mut details.phone, changes.phone);
    overlay(&mut details.gender, changes.gender);
    overlay(&mut details.date_of_birth, changes.date_of_birth);
    overlay(&mut details.branch_id, changes.branch_id);
    overlay(&mut details.department_id, changes.department_id);
    overlay(&mut details.designation_id, changes.designation_id);
    overlay(&mut details.position, changes.position);
    overlay(&mut details.qualification, changes.qualification);
    overlay(&mut details.work_experience, changes.work_experience);
    overlay(&mut details.hire_date, changes.hire_date);
    overlay(&mut details.employment_status, changes.employment_status);
    overlay(&mut details.contract_type, changes.contract_type);
    overlay(&mut details.work_shift, changes.work_shift);
    overlay(&mut details.reporting_to, changes.reporting_to);
    overlay(&mut details.emergency_contact, changes.emergency_contact);
    overlay(&mut details.marital_status, changes.marital_status);
    overlay(&mut details.local_address, changes.local_address);
    overlay(&mut details.permanent_address, changes.permanent_address);
    overlay(&mut details.notes, changes.notes);
    if let Some(is_superadmin) = changes.is_superadmin {
        details.is_superadmin = is_superadmin;
    }

    Ok(details)
}

fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
