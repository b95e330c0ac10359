// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organisational hierarchy derivation.
//!
//! The org tree is a read-only view over the flat directory: one node per
//! active manager, each holding the manager's supervisors, each of those
//! holding the supervisor's employees. It is recomputed on every call and
//! has no identity across calls.
//!
//! Only active records take part. A supervisor or employee whose reference
//! is absent, dangling, or points at an inactive record is simply not
//! placed; this is never an error.

use crate::directory::Employee;
use crate::ids::EmployeeId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A supervisor and the employees reporting to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorGroup {
    /// The supervisor's record.
    pub supervisor: Employee,
    /// Active employees whose `supervisor_id` is this supervisor, in
    /// directory order.
    pub employees: Vec<Employee>,
}

/// A manager and the supervisor groups below them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNode {
    /// The manager's record.
    pub manager: Employee,
    /// Active supervisors whose `manager_id` is this manager, in directory
    /// order.
    pub supervisors: Vec<SupervisorGroup>,
}

impl OrgNode {
    /// Total number of people below this manager.
    #[must_use]
    pub fn headcount(&self) -> usize {
        self.supervisors
            .iter()
            .map(|group| 1 + group.employees.len())
            .sum()
    }
}

/// Counts of active records by hierarchy tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeCounts {
    /// Active managers.
    pub managers: usize,
    /// Active supervisors.
    pub supervisors: usize,
    /// Active employees (employee tier only).
    pub employees: usize,
    /// All active records, including admins and HR managers.
    pub total: usize,
}

/// Builds the org tree with managers in directory order.
#[must_use]
pub fn build_org_tree(employees: &[Employee]) -> Vec<OrgNode> {
    build_org_tree_by(employees, |_, _| Ordering::Equal)
}

/// Builds the org tree with managers ordered by `compare`.
///
/// The sort is stable, so managers that compare equal keep directory
/// order. Supervisors and employees always keep directory order.
#[must_use]
pub fn build_org_tree_by<F>(employees: &[Employee], compare: F) -> Vec<OrgNode>
where
    F: FnMut(&&Employee, &&Employee) -> Ordering,
{
    let mut supervisors_by_manager: HashMap<EmployeeId, Vec<&Employee>> = HashMap::new();
    let mut employees_by_supervisor: HashMap<EmployeeId, Vec<&Employee>> = HashMap::new();
    let mut managers: Vec<&Employee> = Vec::new();

    for record in employees.iter().filter(|e| e.active) {
        if record.role.is_manager() {
            managers.push(record);
        } else if record.role.is_supervisor() {
            if let Some(manager_id) = record.manager_id {
                supervisors_by_manager
                    .entry(manager_id)
                    .or_default()
                    .push(record);
            }
        } else if record.role.is_employee()
            && let Some(supervisor_id) = record.supervisor_id
        {
            employees_by_supervisor
                .entry(supervisor_id)
                .or_default()
                .push(record);
        }
    }

    managers.sort_by(compare);

    managers
        .into_iter()
        .map(|manager| {
            let supervisors: Vec<SupervisorGroup> = supervisors_by_manager
                .get(&manager.id)
                .map(|group| {
                    group
                        .iter()
                        .map(|supervisor| SupervisorGroup {
                            supervisor: (*supervisor).clone(),
                            employees: employees_by_supervisor
                                .get(&supervisor.id)
                                .map(|list| list.iter().map(|e| (*e).clone()).collect())
                                .unwrap_or_default(),
                        })
                        .collect()
                })
                .unwrap_or_default();

            OrgNode {
                manager: manager.clone(),
                supervisors,
            }
        })
        .collect()
}

/// Counts active records by tier.
#[must_use]
pub fn employee_counts(employees: &[Employee]) -> EmployeeCounts {
    employees
        .iter()
        .filter(|e| e.active)
        .fold(EmployeeCounts::default(), |mut counts, e| {
            if e.role.is_manager() {
                counts.managers += 1;
            } else if e.role.is_supervisor() {
                counts.supervisors += 1;
            } else if e.role.is_employee() {
                counts.employees += 1;
            }
            counts.total += 1;
            counts
        })
}
