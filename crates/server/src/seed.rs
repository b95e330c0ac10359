// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data loaded at startup unless `--no-seed` is given.

use hrdesk::{CoreError, DirectoryStore, LeaveLedger, SessionRegistry, SubmitLeave};
use hrdesk_domain::{
    ConversationId, ConversationKind, Department, Employee, EmployeeId, EmployeePatch,
    LeaveBalance, LeaveType, MessageKind, NewEmployee, Role,
};
use time::{Date, Duration};
use tracing::info;

/// Where the simulated inbound source should post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationTarget {
    pub conversation_id: ConversationId,
    pub sender_id: EmployeeId,
    pub sender_name: String,
}

fn person(first: &str, last: &str, role: Role, position: &str) -> NewEmployee {
    NewEmployee {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!(
            "{}.{}@hrdesk.example",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        position: Some(position.to_string()),
        role,
        ..NewEmployee::default()
    }
}

/// Loads departments, employees, balances, one pending leave request and
/// the demo user's conversations.
///
/// Returns the conversation the simulated inbound source should target,
/// or `None` when `demo_user` is not among the seeded employees.
///
/// # Errors
///
/// Returns an error if any store rejects the demo records, which only
/// happens when the stores were not empty.
pub fn seed_demo_data(
    directory: &mut DirectoryStore,
    ledger: &mut LeaveLedger,
    sessions: &mut SessionRegistry,
    demo_user: EmployeeId,
    today: Date,
) -> Result<Option<SimulationTarget>, CoreError> {
    let people: Department = directory.create_department(
        "People Operations",
        Some(String::from("Hiring, payroll and leave")),
        None,
    )?;
    let hana: Employee = directory.create_employee(NewEmployee {
        department_id: Some(people.id),
        hire_date: Some(today.saturating_sub(Duration::days(6 * 365))),
        ..person("Hana", "Reyes", Role::HrManager, "HR Manager")
    })?;

    let marco: Employee =
        directory.create_employee(person("Marco", "Diaz", Role::Manager, "Engineering Manager"))?;
    let engineering: Department = directory.create_department(
        "Engineering",
        Some(String::from("Product development")),
        Some(marco.id),
    )?;
    directory.update_employee(
        marco.id,
        &EmployeePatch {
            department_id: Some(Some(engineering.id)),
            ..EmployeePatch::default()
        },
    )?;

    let sofia: Employee = directory.create_employee(NewEmployee {
        department_id: Some(engineering.id),
        manager_id: Some(marco.id),
        ..person("Sofia", "Lind", Role::Supervisor, "Team Lead")
    })?;
    let mut team: Vec<Employee> = vec![marco.clone(), sofia.clone()];
    for (first, last, position) in [
        ("Omar", "Haddad", "Backend Engineer"),
        ("Lena", "Park", "Frontend Engineer"),
    ] {
        team.push(directory.create_employee(NewEmployee {
            department_id: Some(engineering.id),
            supervisor_id: Some(sofia.id),
            manager_id: Some(marco.id),
            ..person(first, last, Role::Employee, position)
        })?);
    }

    for employee in directory.list_employees() {
        ledger.set_balance(
            LeaveBalance::new(employee.id)
                .with(LeaveType::Annual, 20)
                .with(LeaveType::Sick, 10)
                .with(LeaveType::Personal, 3),
        );
    }

    if let Some(omar) = team.iter().find(|e| e.first_name == "Omar") {
        let start: Date = today.saturating_add(Duration::days(14));
        ledger.submit_request(SubmitLeave {
            employee_id: omar.id,
            employee_name: omar.full_name(),
            leave_type: LeaveType::Annual,
            start_date: start,
            end_date: start.saturating_add(Duration::days(4)),
            reason: String::from("Family trip"),
        })?;
    }

    info!(
        departments = directory.list_departments().len(),
        employees = directory.list_employees().len(),
        "Seeded directory and leave ledger"
    );

    let Some(peer) = [&sofia, &hana, &marco]
        .into_iter()
        .find(|e| e.id != demo_user)
        .cloned()
    else {
        return Ok(None);
    };
    if directory.get_employee(demo_user).is_err() {
        info!(demo_user = %demo_user, "Demo user not seeded, skipping conversations");
        return Ok(None);
    }

    let session = sessions.session_mut(demo_user);
    let direct = session.create_conversation(ConversationKind::Direct, &[peer.id], None)?;
    session.send_message(
        direct.id,
        "Morning! Do you have a minute to go over the schedule?",
        MessageKind::Text,
        Vec::new(),
    )?;

    let members: Vec<EmployeeId> = team.iter().map(|e| e.id).collect();
    session.create_conversation(
        ConversationKind::Group,
        &members,
        Some(String::from("Engineering")),
    )?;

    info!(
        demo_user = %demo_user,
        conversations = session.list_conversations().len(),
        "Seeded demo conversations"
    );

    Ok(Some(SimulationTarget {
        conversation_id: direct.id,
        sender_id: peer.id,
        sender_name: peer.full_name(),
    }))
}
