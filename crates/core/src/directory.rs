// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use hrdesk_domain::{
    Department, DepartmentId, DomainError, Employee, EmployeeCounts, EmployeeId, EmployeePatch,
    NewEmployee, OrgNode, build_org_tree, employee_counts, normalize_email,
    validate_department_manager, validate_department_name, validate_email_unique,
    validate_employee_fields, validate_reporting_lines, validate_role_change,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Owns every employee and department record.
///
/// All writes validate against a candidate copy first; stored state is only
/// replaced once every rule passes.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    next_employee_id: i64,
    next_department_id: i64,
}

impl DirectoryStore {
    /// Creates an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
            departments: Vec::new(),
            next_employee_id: 1,
            next_department_id: 1,
        }
    }

    /// Returns all departments in creation order.
    #[must_use]
    pub fn list_departments(&self) -> &[Department] {
        &self.departments
    }

    /// Looks up a department.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DepartmentNotFound` if `id` is unknown.
    pub fn get_department(&self, id: DepartmentId) -> Result<&Department, CoreError> {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .ok_or(CoreError::DomainViolation(DomainError::DepartmentNotFound(
                id,
            )))
    }

    /// Creates a department.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank, or matches an existing name ignoring case
    /// - `manager_id` does not reference an existing manager
    pub fn create_department(
        &mut self,
        name: &str,
        description: Option<String>,
        manager_id: Option<EmployeeId>,
    ) -> Result<Department, CoreError> {
        validate_department_name(name, &self.departments)?;
        if let Some(manager_id) = manager_id {
            validate_department_manager(manager_id, &self.employees)?;
        }

        let department: Department = Department {
            id: DepartmentId::new(self.next_department_id),
            name: name.trim().to_string(),
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            manager_id,
        };
        self.next_department_id += 1;
        self.departments.push(department.clone());

        info!(
            department_id = %department.id,
            name = %department.name,
            "Created department"
        );
        Ok(department)
    }

    /// Returns all employees, active and inactive, in creation order.
    #[must_use]
    pub fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns active employees in creation order.
    #[must_use]
    pub fn list_active_employees(&self) -> Vec<&Employee> {
        self.employees.iter().filter(|e| e.active).collect()
    }

    /// Looks up an employee.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmployeeNotFound` if `id` is unknown.
    pub fn get_employee(&self, id: EmployeeId) -> Result<&Employee, CoreError> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(CoreError::DomainViolation(DomainError::EmployeeNotFound(id)))
    }

    /// Creates an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A name is blank or the email is malformed
    /// - The email is already used by another employee
    /// - The supervisor or manager reference is invalid for the role
    /// - The department does not exist
    pub fn create_employee(&mut self, new: NewEmployee) -> Result<Employee, CoreError> {
        let mut candidate: Employee =
            Employee::from_new(EmployeeId::new(self.next_employee_id), new);
        candidate.first_name = candidate.first_name.trim().to_string();
        candidate.last_name = candidate.last_name.trim().to_string();
        candidate.email = candidate.email.trim().to_string();

        validate_employee_fields(&candidate)?;
        validate_email_unique(&candidate.email, None, &self.employees)?;
        validate_reporting_lines(&candidate, &self.employees)?;
        self.validate_department_reference(&candidate)?;

        self.next_employee_id += 1;
        self.employees.push(candidate.clone());

        info!(
            employee_id = %candidate.id,
            role = %candidate.role,
            "Created employee"
        );
        Ok(candidate)
    }

    /// Applies a partial update to an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is unknown
    /// - The patch changes the email to one used by a different employee
    /// - The resulting record breaks a field or reporting-line rule
    /// - The patch changes the role of a supervisor or manager others report to
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        patch: &EmployeePatch,
    ) -> Result<Employee, CoreError> {
        let index: usize = self.index_of(id)?;
        let current: &Employee = &self.employees[index];

        if patch.is_empty() {
            debug!(employee_id = %id, "Empty employee patch, nothing to do");
            return Ok(current.clone());
        }

        let mut candidate: Employee = patch.applied_to(current);
        candidate.first_name = candidate.first_name.trim().to_string();
        candidate.last_name = candidate.last_name.trim().to_string();
        candidate.email = candidate.email.trim().to_string();

        validate_employee_fields(&candidate)?;
        if normalize_email(&candidate.email) != normalize_email(&current.email) {
            validate_email_unique(&candidate.email, Some(id), &self.employees)?;
        }
        validate_role_change(current, candidate.role, &self.employees)?;
        validate_reporting_lines(&candidate, &self.employees)?;
        self.validate_department_reference(&candidate)?;

        self.employees[index] = candidate.clone();

        info!(employee_id = %id, "Updated employee");
        Ok(candidate)
    }

    /// Marks an employee inactive. Calling this on an inactive employee is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmployeeNotFound` if `id` is unknown.
    pub fn deactivate_employee(&mut self, id: EmployeeId) -> Result<Employee, CoreError> {
        let index: usize = self.index_of(id)?;
        let employee: &mut Employee = &mut self.employees[index];

        if employee.active {
            employee.active = false;
            info!(employee_id = %id, "Deactivated employee");
        } else {
            debug!(employee_id = %id, "Employee already inactive");
        }
        Ok(employee.clone())
    }

    /// Derives the org tree from the current directory.
    #[must_use]
    pub fn org_tree(&self) -> Vec<OrgNode> {
        build_org_tree(&self.employees)
    }

    /// Counts active employees by tier.
    #[must_use]
    pub fn employee_counts(&self) -> EmployeeCounts {
        employee_counts(&self.employees)
    }

    /// Counts active employees per department. Departments with nobody
    /// assigned are reported with zero.
    #[must_use]
    pub fn department_head_counts(&self) -> BTreeMap<DepartmentId, usize> {
        let mut counts: BTreeMap<DepartmentId, usize> =
            self.departments.iter().map(|d| (d.id, 0)).collect();
        for department_id in self
            .employees
            .iter()
            .filter(|e| e.active)
            .filter_map(|e| e.department_id)
        {
            *counts.entry(department_id).or_insert(0) += 1;
        }
        counts
    }

    /// Drops every record and restarts identifiers at 1.
    ///
    /// Intended for test setup only.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn index_of(&self, id: EmployeeId) -> Result<usize, CoreError> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(CoreError::DomainViolation(DomainError::EmployeeNotFound(id)))
    }

    fn validate_department_reference(&self, candidate: &Employee) -> Result<(), DomainError> {
        match candidate.department_id {
            Some(department_id) if !self.departments.iter().any(|d| d.id == department_id) => {
                Err(DomainError::InvalidReportingLine {
                    employee_id: Some(candidate.id),
                    reason: format!("department {department_id} does not exist"),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}
