// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use hrdesk::CoreError;
use hrdesk_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The caller's role does not permit the action.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

fn not_found(resource_type: &str, err: &DomainError) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: err.to_string(),
    }
}

fn invalid(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn violation(rule: &str, err: &DomainError) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: rule.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::EmployeeNotFound(_) => not_found("Employee", &err),
        DomainError::DepartmentNotFound(_) => not_found("Department", &err),
        DomainError::LeaveRequestNotFound(_) => not_found("Leave request", &err),
        DomainError::LeaveBalanceNotFound(_) => not_found("Leave balance", &err),
        DomainError::ConversationNotFound(_) => not_found("Conversation", &err),
        DomainError::MessageNotFound { .. } => not_found("Message", &err),
        DomainError::NotificationNotFound(_) => not_found("Notification", &err),
        DomainError::DuplicateDepartmentName(_) => violation("unique_department_name", &err),
        DomainError::DuplicateEmail(_) => violation("unique_email", &err),
        DomainError::InvalidRange { .. } => violation("valid_date_range", &err),
        DomainError::InvalidTransition { .. } => violation("pending_only_review", &err),
        DomainError::NotJoined { .. } => violation("conversation_participant", &err),
        DomainError::InvalidReportingLine { .. } => violation("reporting_line", &err),
        DomainError::ReportingLineInUse { .. } => violation("reporting_line_in_use", &err),
        DomainError::InvalidParticipants(msg) => invalid("participants", msg.clone()),
        DomainError::InvalidName(msg) => invalid("name", msg.clone()),
        DomainError::InvalidEmail(msg) => invalid("email", msg.clone()),
        DomainError::InvalidRole(_) => invalid("role", err.to_string()),
        DomainError::InvalidLeaveType(_) => invalid("leave_type", err.to_string()),
        DomainError::InvalidLeaveStatus(_) => invalid("status", err.to_string()),
        DomainError::InvalidMessageKind(_) => invalid("kind", err.to_string()),
        DomainError::EmptyMessage => invalid("content", err.to_string()),
        DomainError::DateParseError { .. } => invalid("date", err.to_string()),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}
