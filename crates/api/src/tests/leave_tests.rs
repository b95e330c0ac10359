// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_clock, create_test_directory, create_test_ledger};
use crate::{
    ApiError, LeaveQuery, LeaveRequestInfo, ReviewLeaveRequest, SubmitLeaveRequest,
    approve_leave_request, deactivate_employee, get_leave_balance, get_leave_summary,
    list_leave_requests, reject_leave_request, submit_leave_request,
};
use hrdesk::{LeaveLedger, ManualClock};
use hrdesk_domain::{EmployeeId, LeaveBalance, LeaveType};

fn vacation_request(employee_id: i64) -> SubmitLeaveRequest {
    SubmitLeaveRequest {
        employee_id,
        leave_type: String::from("annual"),
        start_date: String::from("2024-01-15"),
        end_date: String::from("2024-01-19"),
        reason: String::from("Ski week"),
    }
}

#[test]
fn test_submit_leave_uses_directory_name() {
    let (directory, people) = create_test_directory();
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);

    let request: LeaveRequestInfo =
        submit_leave_request(&directory, &mut ledger, vacation_request(people.employee)).unwrap();

    assert_eq!(request.employee_name, "Eve Tester");
    assert_eq!(request.total_days, 5);
    assert_eq!(request.status, "pending");
    assert_eq!(request.start_date, "2024-01-15");
    assert_eq!(request.submitted_at, "2024-01-10T08:30:00Z");
    assert_eq!(request.reviewed_by, None);
}

#[test]
fn test_submit_leave_reversed_range_is_rejected() {
    let (directory, people) = create_test_directory();
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);

    let result: Result<LeaveRequestInfo, ApiError> = submit_leave_request(
        &directory,
        &mut ledger,
        SubmitLeaveRequest {
            start_date: String::from("2024-01-19"),
            end_date: String::from("2024-01-15"),
            ..vacation_request(people.employee)
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "valid_date_range"
    ));
    assert_eq!(get_leave_summary(&ledger).pending, 0);
}

#[test]
fn test_submit_leave_for_unknown_or_inactive_employee() {
    let (mut directory, people) = create_test_directory();
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);

    assert!(matches!(
        submit_leave_request(&directory, &mut ledger, vacation_request(99)),
        Err(ApiError::ResourceNotFound { .. })
    ));

    deactivate_employee(&mut directory, people.employee).unwrap();
    assert!(matches!(
        submit_leave_request(&directory, &mut ledger, vacation_request(people.employee)),
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "active_employee"
    ));
}

#[test]
fn test_submit_leave_rejects_unknown_type() {
    let (directory, people) = create_test_directory();
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);

    assert!(matches!(
        submit_leave_request(
            &directory,
            &mut ledger,
            SubmitLeaveRequest {
                leave_type: String::from("sabbatical-ish"),
                ..vacation_request(people.employee)
            }
        ),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "leave_type"
    ));
}

#[test]
fn test_review_requires_approving_role() {
    let (directory, people) = create_test_directory();
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);
    let request: LeaveRequestInfo =
        submit_leave_request(&directory, &mut ledger, vacation_request(people.employee)).unwrap();

    let by_employee = approve_leave_request(
        &directory,
        &mut ledger,
        request.request_id,
        ReviewLeaveRequest {
            reviewer_id: people.employee,
            comments: None,
        },
    );
    assert!(matches!(by_employee, Err(ApiError::Unauthorized { .. })));

    let by_stranger = reject_leave_request(
        &directory,
        &mut ledger,
        request.request_id,
        ReviewLeaveRequest {
            reviewer_id: 404,
            comments: None,
        },
    );
    assert!(matches!(by_stranger, Err(ApiError::Unauthorized { .. })));
    assert_eq!(get_leave_summary(&ledger).pending, 1);
}

#[test]
fn test_second_review_is_rejected() {
    let (directory, people) = create_test_directory();
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);
    let request: LeaveRequestInfo =
        submit_leave_request(&directory, &mut ledger, vacation_request(people.employee)).unwrap();

    let approved: LeaveRequestInfo = approve_leave_request(
        &directory,
        &mut ledger,
        request.request_id,
        ReviewLeaveRequest {
            reviewer_id: people.supervisor,
            comments: Some(String::from("Have fun")),
        },
    )
    .unwrap();
    assert_eq!(approved.status, "approved");
    assert_eq!(approved.reviewed_by, Some(people.supervisor));
    assert_eq!(approved.comments.as_deref(), Some("Have fun"));

    let again = reject_leave_request(
        &directory,
        &mut ledger,
        request.request_id,
        ReviewLeaveRequest {
            reviewer_id: people.admin,
            comments: None,
        },
    );
    assert!(matches!(
        again,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "pending_only_review"
    ));
    assert_eq!(get_leave_summary(&ledger).approved, 1);
}

#[test]
fn test_review_unknown_request_is_not_found() {
    let (directory, people) = create_test_directory();
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);

    assert!(matches!(
        approve_leave_request(
            &directory,
            &mut ledger,
            5,
            ReviewLeaveRequest {
                reviewer_id: people.manager,
                comments: None,
            }
        ),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_list_leave_requests_query() {
    let (directory, people) = create_test_directory();
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);
    submit_leave_request(&directory, &mut ledger, vacation_request(people.employee)).unwrap();
    submit_leave_request(
        &directory,
        &mut ledger,
        SubmitLeaveRequest {
            leave_type: String::from("sick"),
            start_date: String::from("2024-03-04"),
            end_date: String::from("2024-03-04"),
            reason: String::from("Dentist"),
            ..vacation_request(people.supervisor)
        },
    )
    .unwrap();

    let sick = list_leave_requests(
        &ledger,
        &LeaveQuery {
            leave_type: Some(String::from("Sick")),
            ..LeaveQuery::default()
        },
    )
    .unwrap();
    assert_eq!(sick.requests.len(), 1);
    assert_eq!(sick.requests[0].employee_name, "Sam Tester");

    let from_only = list_leave_requests(
        &ledger,
        &LeaveQuery {
            from: Some(String::from("2024-02-01")),
            ..LeaveQuery::default()
        },
    )
    .unwrap();
    assert_eq!(from_only.requests.len(), 1);

    let search = list_leave_requests(
        &ledger,
        &LeaveQuery {
            search: Some(String::from("ski")),
            status: Some(String::from("pending")),
            ..LeaveQuery::default()
        },
    )
    .unwrap();
    assert_eq!(search.requests.len(), 1);

    let reversed = list_leave_requests(
        &ledger,
        &LeaveQuery {
            from: Some(String::from("2024-02-01")),
            to: Some(String::from("2024-01-01")),
            ..LeaveQuery::default()
        },
    );
    assert!(matches!(reversed, Err(ApiError::InvalidInput { .. })));

    let bad_status = list_leave_requests(
        &ledger,
        &LeaveQuery {
            status: Some(String::from("maybe")),
            ..LeaveQuery::default()
        },
    );
    assert!(matches!(bad_status, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_leave_balance_lookup() {
    let clock: ManualClock = create_test_clock();
    let mut ledger: LeaveLedger = create_test_ledger(&clock);

    assert!(matches!(
        get_leave_balance(&ledger, 3),
        Err(ApiError::ResourceNotFound { .. })
    ));

    ledger.set_balance(
        LeaveBalance::new(EmployeeId::new(3))
            .with(LeaveType::Annual, 12)
            .with(LeaveType::Sick, 5),
    );
    let balance = get_leave_balance(&ledger, 3).unwrap();
    assert_eq!(balance.balances.get("annual"), Some(&12));
    assert_eq!(balance.balances.get("sick"), Some(&5));
}
