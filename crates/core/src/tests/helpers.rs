// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DirectoryStore, ManualClock, MessagingSession};
use hrdesk_domain::{Conversation, ConversationKind, Employee, EmployeeId, NewEmployee, Role};
use std::sync::Arc;
use time::OffsetDateTime;
use time::macros::datetime;

pub const TEST_START: OffsetDateTime = datetime!(2024-01-15 09:00 UTC);

pub fn create_test_clock() -> ManualClock {
    ManualClock::new(TEST_START)
}

pub fn new_employee(name: &str, role: Role) -> NewEmployee {
    NewEmployee {
        first_name: name.to_string(),
        last_name: String::from("Tester"),
        email: format!("{}@example.com", name.to_lowercase()),
        role,
        ..NewEmployee::default()
    }
}

/// Builds M1 <- S1 <- {E1, E2} and returns the store with their ids.
pub fn create_test_hierarchy() -> (DirectoryStore, [EmployeeId; 4]) {
    let mut store: DirectoryStore = DirectoryStore::new();
    let manager: Employee = store
        .create_employee(new_employee("Mia", Role::Manager))
        .unwrap();
    let supervisor: Employee = store
        .create_employee(NewEmployee {
            manager_id: Some(manager.id),
            ..new_employee("Sam", Role::Supervisor)
        })
        .unwrap();
    let first: Employee = store
        .create_employee(NewEmployee {
            supervisor_id: Some(supervisor.id),
            ..new_employee("Eve", Role::Employee)
        })
        .unwrap();
    let second: Employee = store
        .create_employee(NewEmployee {
            supervisor_id: Some(supervisor.id),
            ..new_employee("Eli", Role::Employee)
        })
        .unwrap();
    (store, [manager.id, supervisor.id, first.id, second.id])
}

pub fn create_test_session(user: i64, clock: &ManualClock) -> MessagingSession {
    MessagingSession::new(EmployeeId::new(user), Arc::new(clock.clone()))
}

/// Opens a direct conversation between the session user and `other`.
pub fn open_direct(session: &mut MessagingSession, other: i64) -> Conversation {
    session
        .create_conversation(ConversationKind::Direct, &[EmployeeId::new(other)], None)
        .unwrap()
}
