// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Employee, EmployeeId, Role};

pub fn create_test_employee(id: i64, role: Role) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("person{id}@example.com"),
        phone: None,
        position: None,
        role,
        department_id: None,
        supervisor_id: None,
        manager_id: None,
        hire_date: None,
        active: true,
    }
}

pub fn create_test_supervisor(id: i64, manager: i64) -> Employee {
    let mut supervisor: Employee = create_test_employee(id, Role::Supervisor);
    supervisor.manager_id = Some(EmployeeId::new(manager));
    supervisor
}

pub fn create_test_report(id: i64, supervisor: i64) -> Employee {
    let mut employee: Employee = create_test_employee(id, Role::Employee);
    employee.supervisor_id = Some(EmployeeId::new(supervisor));
    employee
}
