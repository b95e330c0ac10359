// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_employee, create_test_report, create_test_supervisor};
use crate::{Employee, EmployeeCounts, EmployeeId, OrgNode, Role, build_org_tree, build_org_tree_by, employee_counts};

fn ids(list: &[Employee]) -> Vec<i64> {
    list.iter().map(|e| e.id.value()).collect()
}

#[test]
fn test_single_manager_supervisor_and_two_reports() {
    let directory: Vec<Employee> = vec![
        create_test_employee(1, Role::Manager),
        create_test_supervisor(2, 1),
        create_test_report(3, 2),
        create_test_report(4, 2),
    ];

    let tree: Vec<OrgNode> = build_org_tree(&directory);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].manager.id, EmployeeId::new(1));
    assert_eq!(tree[0].supervisors.len(), 1);
    assert_eq!(tree[0].supervisors[0].supervisor.id, EmployeeId::new(2));
    assert_eq!(ids(&tree[0].supervisors[0].employees), vec![3, 4]);
    assert_eq!(tree[0].headcount(), 3);
}

#[test]
fn test_manager_without_supervisors_still_produces_node() {
    let directory: Vec<Employee> = vec![
        create_test_employee(1, Role::Manager),
        create_test_employee(2, Role::Manager),
        create_test_supervisor(3, 2),
    ];

    let tree: Vec<OrgNode> = build_org_tree(&directory);

    assert_eq!(tree.len(), 2);
    assert!(tree[0].supervisors.is_empty());
    assert_eq!(tree[1].supervisors.len(), 1);
    assert!(tree[1].supervisors[0].employees.is_empty());
}

#[test]
fn test_dangling_and_missing_references_are_not_placed() {
    let mut orphan: Employee = create_test_employee(5, Role::Employee);
    orphan.supervisor_id = None;
    let directory: Vec<Employee> = vec![
        create_test_employee(1, Role::Manager),
        create_test_supervisor(2, 1),
        create_test_supervisor(3, 99),
        create_test_report(4, 42),
        orphan,
        create_test_report(6, 3),
    ];

    let tree: Vec<OrgNode> = build_org_tree(&directory);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].supervisors.len(), 1);
    assert!(tree[0].supervisors[0].employees.is_empty());
}

#[test]
fn test_inactive_records_are_excluded() {
    let mut inactive_manager: Employee = create_test_employee(1, Role::Manager);
    inactive_manager.active = false;
    let mut inactive_report: Employee = create_test_report(5, 3);
    inactive_report.active = false;
    let directory: Vec<Employee> = vec![
        inactive_manager,
        create_test_supervisor(2, 1),
        create_test_employee(10, Role::Manager),
        create_test_supervisor(3, 10),
        create_test_report(4, 3),
        inactive_report,
    ];

    let tree: Vec<OrgNode> = build_org_tree(&directory);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].manager.id, EmployeeId::new(10));
    assert_eq!(ids(&tree[0].supervisors[0].employees), vec![4]);
}

#[test]
fn test_every_valid_record_appears_exactly_once() {
    let directory: Vec<Employee> = vec![
        create_test_employee(1, Role::Manager),
        create_test_employee(2, Role::Manager),
        create_test_supervisor(3, 1),
        create_test_supervisor(4, 2),
        create_test_supervisor(5, 1),
        create_test_report(6, 3),
        create_test_report(7, 4),
        create_test_report(8, 5),
        create_test_report(9, 3),
        create_test_employee(10, Role::Admin),
    ];

    let tree: Vec<OrgNode> = build_org_tree(&directory);

    let mut placed: Vec<i64> = Vec::new();
    for node in &tree {
        placed.push(node.manager.id.value());
        for group in &node.supervisors {
            placed.push(group.supervisor.id.value());
            placed.extend(ids(&group.employees));
        }
    }
    placed.sort_unstable();
    assert_eq!(placed, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert_eq!(
        tree[0]
            .supervisors
            .iter()
            .map(|g| g.supervisor.id.value())
            .collect::<Vec<i64>>(),
        vec![3, 5]
    );
}

#[test]
fn test_custom_manager_order_keeps_groups_in_directory_order() {
    let directory: Vec<Employee> = vec![
        create_test_employee(1, Role::Manager),
        create_test_employee(2, Role::Manager),
        create_test_supervisor(3, 2),
        create_test_supervisor(4, 2),
    ];

    let tree: Vec<OrgNode> = build_org_tree_by(&directory, |a, b| b.id.cmp(&a.id));

    assert_eq!(tree[0].manager.id, EmployeeId::new(2));
    assert_eq!(tree[1].manager.id, EmployeeId::new(1));
    assert_eq!(
        tree[0]
            .supervisors
            .iter()
            .map(|g| g.supervisor.id.value())
            .collect::<Vec<i64>>(),
        vec![3, 4]
    );
}

#[test]
fn test_employee_counts_by_tier() {
    let mut inactive: Employee = create_test_report(7, 2);
    inactive.active = false;
    let directory: Vec<Employee> = vec![
        create_test_employee(1, Role::Manager),
        create_test_supervisor(2, 1),
        create_test_report(3, 2),
        create_test_report(4, 2),
        create_test_employee(5, Role::Admin),
        create_test_employee(6, Role::HrManager),
        inactive,
    ];

    let counts: EmployeeCounts = employee_counts(&directory);

    assert_eq!(
        counts,
        EmployeeCounts {
            managers: 1,
            supervisors: 1,
            employees: 2,
            total: 6,
        }
    );
    assert!(counts.managers + counts.supervisors + counts.employees <= counts.total);
}

#[test]
fn test_employee_counts_equal_total_when_only_tiers_present() {
    let directory: Vec<Employee> = vec![
        create_test_employee(1, Role::Manager),
        create_test_supervisor(2, 1),
        create_test_report(3, 2),
    ];

    let counts: EmployeeCounts = employee_counts(&directory);

    assert_eq!(counts.managers + counts.supervisors + counts.employees, counts.total);
}

#[test]
fn test_empty_directory_builds_empty_tree() {
    assert!(build_org_tree(&[]).is_empty());
    assert_eq!(employee_counts(&[]), EmployeeCounts::default());
}
