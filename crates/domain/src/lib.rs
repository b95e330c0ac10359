// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod directory;
mod error;
mod ids;
mod leave;
mod messaging;
mod org_tree;
mod role;
mod validation;

#[cfg(test)]
mod tests;

pub use directory::{Department, Employee, EmployeePatch, NewEmployee};
pub use error::{DomainError, ErrorKind};
pub use ids::{
    ConversationId, DepartmentId, EmployeeId, LeaveRequestId, MessageId, NotificationId,
};
pub use leave::{
    LeaveBalance, LeaveFilter, LeaveRequest, LeaveReview, LeaveStatus, LeaveSummary, LeaveType,
    count_leave_days, parse_iso_date,
};
pub use messaging::{
    Attachment, Conversation, ConversationKind, Message, MessageKind, Notification,
    NotificationKind, Participation, TypingIndicator,
};
pub use org_tree::{
    EmployeeCounts, OrgNode, SupervisorGroup, build_org_tree, build_org_tree_by, employee_counts,
};
pub use role::Role;
pub use validation::{
    normalize_email, validate_department_manager, validate_department_name,
    validate_email_unique, validate_employee_fields, validate_reporting_lines,
    validate_role_change,
};
