// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee and department records.

use crate::ids::{DepartmentId, EmployeeId};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use time::Date;

/// An employee record held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email, unique across the directory (case-insensitive).
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Organisational role.
    pub role: Role,
    /// Owning department.
    pub department_id: Option<DepartmentId>,
    /// Direct supervisor. Only meaningful for the employee tier.
    pub supervisor_id: Option<EmployeeId>,
    /// Manager. Only meaningful for the supervisor and employee tiers.
    pub manager_id: Option<EmployeeId>,
    /// First day of employment.
    pub hire_date: Option<Date>,
    /// Soft-delete flag.
    pub active: bool,
}

impl Employee {
    /// Materialises a new record from creation input.
    #[must_use]
    pub fn from_new(id: EmployeeId, new: NewEmployee) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            position: new.position,
            role: new.role,
            department_id: new.department_id,
            supervisor_id: new.supervisor_id,
            manager_id: new.manager_id,
            hire_date: new.hire_date,
            active: true,
        }
    }

    /// Returns "first last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Organisational role.
    pub role: Role,
    /// Owning department.
    pub department_id: Option<DepartmentId>,
    /// Direct supervisor.
    pub supervisor_id: Option<EmployeeId>,
    /// Manager.
    pub manager_id: Option<EmployeeId>,
    /// First day of employment.
    pub hire_date: Option<Date>,
}

/// A partial update to an employee record.
///
/// `None` leaves a field untouched. For nullable fields the inner option
/// distinguishes "clear" (`Some(None)`) from "set" (`Some(Some(_))`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeePatch {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone.
    pub phone: Option<Option<String>>,
    /// New job title.
    pub position: Option<Option<String>>,
    /// New role.
    pub role: Option<Role>,
    /// New department.
    pub department_id: Option<Option<DepartmentId>>,
    /// New supervisor.
    pub supervisor_id: Option<Option<EmployeeId>>,
    /// New manager.
    pub manager_id: Option<Option<EmployeeId>>,
    /// New hire date.
    pub hire_date: Option<Option<Date>>,
    /// New active flag.
    pub active: Option<bool>,
}

impl EmployeePatch {
    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.position.is_none()
            && self.role.is_none()
            && self.department_id.is_none()
            && self.supervisor_id.is_none()
            && self.manager_id.is_none()
            && self.hire_date.is_none()
            && self.active.is_none()
    }

    /// Returns a copy of `employee` with this patch applied.
    #[must_use]
    pub fn applied_to(&self, employee: &Employee) -> Employee {
        let mut updated: Employee = employee.clone();
        if let Some(first_name) = &self.first_name {
            updated.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &self.last_name {
            updated.last_name.clone_from(last_name);
        }
        if let Some(email) = &self.email {
            updated.email.clone_from(email);
        }
        if let Some(phone) = &self.phone {
            updated.phone.clone_from(phone);
        }
        if let Some(position) = &self.position {
            updated.position.clone_from(position);
        }
        if let Some(role) = self.role {
            updated.role = role;
        }
        if let Some(department_id) = self.department_id {
            updated.department_id = department_id;
        }
        if let Some(supervisor_id) = self.supervisor_id {
            updated.supervisor_id = supervisor_id;
        }
        if let Some(manager_id) = self.manager_id {
            updated.manager_id = manager_id;
        }
        if let Some(hire_date) = self.hire_date {
            updated.hire_date = hire_date;
        }
        if let Some(active) = self.active {
            updated.active = active;
        }
        updated
    }
}

/// A department record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Store-assigned identifier.
    pub id: DepartmentId,
    /// Unique display name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Department head; must hold the manager role.
    pub manager_id: Option<EmployeeId>,
}
