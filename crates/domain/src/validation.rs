// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::directory::{Department, Employee};
use crate::error::DomainError;
use crate::ids::EmployeeId;
use crate::role::Role;

/// Normalises an email address for comparison.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates that an employee's required fields are present and well-formed.
///
/// This function does NOT check uniqueness or references (that requires
/// the rest of the directory).
///
/// # Errors
///
/// Returns an error if:
/// - The first or last name is empty
/// - The email is empty or not of the form `local@domain`
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    if employee.first_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "First name cannot be empty",
        )));
    }

    if employee.last_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Last name cannot be empty",
        )));
    }

    let email: &str = employee.email.trim();
    if email.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(DomainError::InvalidEmail(format!(
            "'{email}' is not a valid email address"
        ))),
    }
}

/// Validates that no other employee uses `email`.
///
/// # Errors
///
/// Returns `DomainError::DuplicateEmail` if a record other than `exclude`
/// already has the address, compared case-insensitively.
pub fn validate_email_unique(
    email: &str,
    exclude: Option<EmployeeId>,
    existing: &[Employee],
) -> Result<(), DomainError> {
    let wanted: String = normalize_email(email);
    let taken: bool = existing
        .iter()
        .filter(|e| Some(e.id) != exclude)
        .any(|e| normalize_email(&e.email) == wanted);

    if taken {
        return Err(DomainError::DuplicateEmail(email.trim().to_string()));
    }
    Ok(())
}

/// Validates the supervisor and manager references of `candidate`.
///
/// Rules:
/// - `supervisor_id` is only allowed on the employee tier and must point at
///   a supervisor
/// - `manager_id` is only allowed on the supervisor and employee tiers and
///   must point at a manager
/// - A newly set reference must point at an active record
///
/// `candidate`'s own previous version in `existing` is never used to
/// satisfy a reference. A reference the previous version already held is
/// kept even if its target has since been deactivated.
///
/// # Errors
///
/// Returns `DomainError::InvalidReportingLine` describing the first rule
/// that fails.
pub fn validate_reporting_lines(
    candidate: &Employee,
    existing: &[Employee],
) -> Result<(), DomainError> {
    let fail = |reason: String| DomainError::InvalidReportingLine {
        employee_id: Some(candidate.id),
        reason,
    };
    let lookup = |id: EmployeeId| {
        existing
            .iter()
            .find(|e| e.id == id && e.id != candidate.id)
    };
    let previous: Option<&Employee> = existing.iter().find(|e| e.id == candidate.id);
    let unchanged_supervisor: bool =
        previous.is_some_and(|p| p.supervisor_id == candidate.supervisor_id);
    let unchanged_manager: bool = previous.is_some_and(|p| p.manager_id == candidate.manager_id);

    if let Some(supervisor_id) = candidate.supervisor_id {
        if !candidate.role.may_have_supervisor() {
            return Err(fail(format!(
                "a {} cannot have a supervisor",
                candidate.role
            )));
        }
        match lookup(supervisor_id) {
            Some(supervisor) if !supervisor.role.is_supervisor() => {
                return Err(fail(format!(
                    "supervisor {supervisor_id} has role {}, expected supervisor",
                    supervisor.role
                )));
            }
            Some(supervisor) if !supervisor.active && !unchanged_supervisor => {
                return Err(fail(format!("supervisor {supervisor_id} is deactivated")));
            }
            Some(_) => {}
            None => {
                return Err(fail(format!("supervisor {supervisor_id} does not exist")));
            }
        }
    }

    if let Some(manager_id) = candidate.manager_id {
        if !candidate.role.may_have_manager() {
            return Err(fail(format!("a {} cannot have a manager", candidate.role)));
        }
        match lookup(manager_id) {
            Some(manager) if !manager.role.is_manager() => {
                return Err(fail(format!(
                    "manager {manager_id} has role {}, expected manager",
                    manager.role
                )));
            }
            Some(manager) if !manager.active && !unchanged_manager => {
                return Err(fail(format!("manager {manager_id} is deactivated")));
            }
            Some(_) => {}
            None => {
                return Err(fail(format!("manager {manager_id} does not exist")));
            }
        }
    }

    Ok(())
}

/// Validates that changing `current`'s role to `new_role` leaves no
/// dangling reporting references.
///
/// # Errors
///
/// Returns `DomainError::ReportingLineInUse` if `current` is a supervisor or
/// manager that other records reference and `new_role` differs.
pub fn validate_role_change(
    current: &Employee,
    new_role: Role,
    existing: &[Employee],
) -> Result<(), DomainError> {
    if current.role == new_role {
        return Ok(());
    }

    let dependents: usize = match current.role {
        Role::Supervisor => existing
            .iter()
            .filter(|e| e.supervisor_id == Some(current.id))
            .count(),
        Role::Manager => existing
            .iter()
            .filter(|e| e.manager_id == Some(current.id))
            .count(),
        Role::Admin | Role::HrManager | Role::Employee => 0,
    };

    if dependents > 0 {
        return Err(DomainError::ReportingLineInUse {
            employee_id: current.id,
            role: current.role,
            dependents,
        });
    }
    Ok(())
}

/// Validates a department name and its uniqueness.
///
/// # Errors
///
/// Returns an error if:
/// - The trimmed name is empty
/// - Another department has the same name, ignoring case
pub fn validate_department_name(name: &str, existing: &[Department]) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Department name cannot be empty",
        )));
    }

    let wanted: String = trimmed.to_lowercase();
    if existing
        .iter()
        .any(|d| d.name.trim().to_lowercase() == wanted)
    {
        return Err(DomainError::DuplicateDepartmentName(trimmed.to_string()));
    }
    Ok(())
}

/// Validates that a department head exists, is active and holds the
/// manager role.
///
/// # Errors
///
/// Returns `DomainError::InvalidReportingLine` otherwise.
pub fn validate_department_manager(
    manager_id: EmployeeId,
    existing: &[Employee],
) -> Result<(), DomainError> {
    match existing.iter().find(|e| e.id == manager_id) {
        Some(manager) if !manager.role.is_manager() => Err(DomainError::InvalidReportingLine {
            employee_id: None,
            reason: format!(
                "department manager {manager_id} has role {}, expected manager",
                manager.role
            ),
        }),
        Some(manager) if !manager.active => Err(DomainError::InvalidReportingLine {
            employee_id: None,
            reason: format!("department manager {manager_id} is deactivated"),
        }),
        Some(_) => Ok(()),
        None => Err(DomainError::InvalidReportingLine {
            employee_id: None,
            reason: format!("department manager {manager_id} does not exist"),
        }),
    }
}
