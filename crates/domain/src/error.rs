// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{
    ConversationId, DepartmentId, EmployeeId, LeaveRequestId, MessageId, NotificationId,
};
use crate::leave::LeaveStatus;
use crate::role::Role;

/// Coarse classification of a [`DomainError`].
///
/// Boundary layers use this to choose a response status without matching
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced entity does not exist.
    NotFound,
    /// A uniqueness rule was violated on write.
    Duplicate,
    /// A date range ends before it starts.
    InvalidRange,
    /// A leave request is no longer pending.
    InvalidTransition,
    /// A messaging action targets a conversation the user is not part of.
    NotJoined,
    /// Any other field or relationship validation failure.
    Invalid,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Employee does not exist.
    EmployeeNotFound(EmployeeId),
    /// Department does not exist.
    DepartmentNotFound(DepartmentId),
    /// Leave request does not exist.
    LeaveRequestNotFound(LeaveRequestId),
    /// No leave balance has been recorded for the employee.
    LeaveBalanceNotFound(EmployeeId),
    /// Conversation does not exist.
    ConversationNotFound(ConversationId),
    /// Message does not exist in the conversation.
    MessageNotFound {
        /// The conversation that was searched.
        conversation_id: ConversationId,
        /// The missing message.
        message_id: MessageId,
    },
    /// Notification does not exist.
    NotificationNotFound(NotificationId),
    /// A department with the same name (ignoring case) already exists.
    DuplicateDepartmentName(String),
    /// Another employee already uses this email address.
    DuplicateEmail(String),
    /// A name field is empty or invalid.
    InvalidName(String),
    /// An email address is empty or malformed.
    InvalidEmail(String),
    /// A role string could not be parsed.
    InvalidRole(String),
    /// A leave type string could not be parsed.
    InvalidLeaveType(String),
    /// A leave status string could not be parsed.
    InvalidLeaveStatus(String),
    /// A message type string could not be parsed.
    InvalidMessageKind(String),
    /// A date range ends before it starts.
    InvalidRange {
        /// The first day of the range.
        start_date: time::Date,
        /// The last day of the range.
        end_date: time::Date,
    },
    /// A leave request can only be reviewed while pending.
    InvalidTransition {
        /// The request being reviewed.
        request_id: LeaveRequestId,
        /// The request's current status.
        status: LeaveStatus,
    },
    /// The user is not a participant of the conversation.
    NotJoined {
        /// The conversation.
        conversation_id: ConversationId,
        /// The user attempting the action.
        user_id: EmployeeId,
    },
    /// A supervisor, manager or department reference is inconsistent.
    InvalidReportingLine {
        /// The record being written, if it already has an id.
        employee_id: Option<EmployeeId>,
        /// Description of the inconsistency.
        reason: String,
    },
    /// A role change would orphan records that report to this employee.
    ReportingLineInUse {
        /// The employee whose role would change.
        employee_id: EmployeeId,
        /// The role currently held.
        role: Role,
        /// Number of active or inactive records referencing the employee.
        dependents: usize,
    },
    /// Conversation participants are invalid for the conversation kind.
    InvalidParticipants(String),
    /// A message has neither content nor attachments.
    EmptyMessage,
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl DomainError {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmployeeNotFound(_)
            | Self::DepartmentNotFound(_)
            | Self::LeaveRequestNotFound(_)
            | Self::LeaveBalanceNotFound(_)
            | Self::ConversationNotFound(_)
            | Self::MessageNotFound { .. }
            | Self::NotificationNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateDepartmentName(_) | Self::DuplicateEmail(_) => ErrorKind::Duplicate,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Self::NotJoined { .. } => ErrorKind::NotJoined,
            Self::InvalidName(_)
            | Self::InvalidEmail(_)
            | Self::InvalidRole(_)
            | Self::InvalidLeaveType(_)
            | Self::InvalidLeaveStatus(_)
            | Self::InvalidMessageKind(_)
            | Self::InvalidReportingLine { .. }
            | Self::ReportingLineInUse { .. }
            | Self::InvalidParticipants(_)
            | Self::EmptyMessage
            | Self::DateParseError { .. } => ErrorKind::Invalid,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmployeeNotFound(id) => write!(f, "Employee {id} not found"),
            Self::DepartmentNotFound(id) => write!(f, "Department {id} not found"),
            Self::LeaveRequestNotFound(id) => write!(f, "Leave request {id} not found"),
            Self::LeaveBalanceNotFound(id) => {
                write!(f, "No leave balance recorded for employee {id}")
            }
            Self::ConversationNotFound(id) => write!(f, "Conversation {id} not found"),
            Self::MessageNotFound {
                conversation_id,
                message_id,
            } => {
                write!(
                    f,
                    "Message {message_id} not found in conversation {conversation_id}"
                )
            }
            Self::NotificationNotFound(id) => write!(f, "Notification {id} not found"),
            Self::DuplicateDepartmentName(name) => {
                write!(f, "Department '{name}' already exists")
            }
            Self::DuplicateEmail(email) => {
                write!(f, "Email '{email}' is already in use by another employee")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidRole(value) => write!(f, "Invalid role: '{value}'"),
            Self::InvalidLeaveType(value) => write!(f, "Invalid leave type: '{value}'"),
            Self::InvalidLeaveStatus(value) => write!(f, "Invalid leave status: '{value}'"),
            Self::InvalidMessageKind(value) => write!(f, "Invalid message type: '{value}'"),
            Self::InvalidRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "End date {end_date} is before start date {start_date}"
                )
            }
            Self::InvalidTransition { request_id, status } => {
                write!(
                    f,
                    "Leave request {request_id} is already {status} and cannot be reviewed again"
                )
            }
            Self::NotJoined {
                conversation_id,
                user_id,
            } => {
                write!(
                    f,
                    "User {user_id} is not a participant of conversation {conversation_id}"
                )
            }
            Self::InvalidReportingLine {
                employee_id: Some(id),
                reason,
            } => write!(f, "Invalid reporting line for employee {id}: {reason}"),
            Self::InvalidReportingLine {
                employee_id: None,
                reason,
            } => write!(f, "Invalid reporting line: {reason}"),
            Self::ReportingLineInUse {
                employee_id,
                role,
                dependents,
            } => {
                write!(
                    f,
                    "Employee {employee_id} cannot stop being a {role}: {dependents} record(s) report to them"
                )
            }
            Self::InvalidParticipants(msg) => write!(f, "Invalid participants: {msg}"),
            Self::EmptyMessage => write!(f, "Message must have content or attachments"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
