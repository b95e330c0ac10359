// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CreateEmployeeRequest, EmployeeInfo, create_employee};
use hrdesk::{DirectoryStore, LeaveLedger, ManualClock, MessagingSession};
use hrdesk_domain::EmployeeId;
use std::sync::Arc;
use time::macros::datetime;

pub fn create_test_clock() -> ManualClock {
    ManualClock::new(datetime!(2024-01-10 08:30 UTC))
}

pub fn employee_request(name: &str, role: &str) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        first_name: name.to_string(),
        last_name: String::from("Tester"),
        email: format!("{}@example.com", name.to_lowercase()),
        role: Some(role.to_string()),
        ..CreateEmployeeRequest::default()
    }
}

/// Ids of the people created by [`create_test_directory`].
pub struct TestPeople {
    pub admin: i64,
    pub manager: i64,
    pub supervisor: i64,
    pub employee: i64,
}

/// Builds a directory with an admin and one reporting line.
pub fn create_test_directory() -> (DirectoryStore, TestPeople) {
    let mut directory: DirectoryStore = DirectoryStore::new();
    let admin: EmployeeInfo =
        create_employee(&mut directory, employee_request("Ada", "admin")).unwrap();
    let manager: EmployeeInfo =
        create_employee(&mut directory, employee_request("Mia", "manager")).unwrap();
    let supervisor: EmployeeInfo = create_employee(
        &mut directory,
        CreateEmployeeRequest {
            manager_id: Some(manager.employee_id),
            ..employee_request("Sam", "supervisor")
        },
    )
    .unwrap();
    let employee: EmployeeInfo = create_employee(
        &mut directory,
        CreateEmployeeRequest {
            supervisor_id: Some(supervisor.employee_id),
            ..employee_request("Eve", "employee")
        },
    )
    .unwrap();

    (
        directory,
        TestPeople {
            admin: admin.employee_id,
            manager: manager.employee_id,
            supervisor: supervisor.employee_id,
            employee: employee.employee_id,
        },
    )
}

pub fn create_test_ledger(clock: &ManualClock) -> LeaveLedger {
    LeaveLedger::new(Arc::new(clock.clone()))
}

pub fn create_test_session(user: i64, clock: &ManualClock) -> MessagingSession {
    MessagingSession::new(EmployeeId::new(user), Arc::new(clock.clone()))
}
