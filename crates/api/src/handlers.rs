// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations over the stores.
//!
//! Each function validates and translates its request, calls exactly one
//! store operation that may mutate, and converts the result into a response
//! DTO. Callers hold whatever locks the stores need.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AttachmentInfo, ConversationInfo, CreateConversationRequest, CreateDepartmentRequest,
    CreateEmployeeRequest, DeactivateEmployeeResponse, DepartmentInfo, EmployeeCountsResponse,
    EmployeeInfo, EmployeeSummary, LeaveBalanceResponse, LeaveQuery, LeaveRequestInfo,
    LeaveSummaryResponse, ListConversationsResponse, ListDepartmentsResponse,
    ListEmployeesResponse, ListLeaveRequestsResponse, ListMessagesResponse,
    ListNotificationsResponse, MarkNotificationReadResponse, MarkReadResponse, MessageInfo,
    NotificationInfo, OrgNodeInfo, OrgTreeResponse, ReviewLeaveRequest, SendMessageRequest,
    SubmitLeaveRequest, SupervisorGroupInfo, TypingResponse, UpdateEmployeeRequest,
};
use hrdesk::{DirectoryStore, LeaveLedger, MessagingSession, SubmitLeave};
use hrdesk_domain::{
    Attachment, Conversation, ConversationId, ConversationKind, Department, DepartmentId,
    Employee, EmployeeCounts, EmployeeId, EmployeePatch, LeaveFilter, LeaveRequest,
    LeaveRequestId, LeaveStatus, LeaveSummary, LeaveType, Message, MessageId, MessageKind,
    NewEmployee, Notification, NotificationId, OrgNode, Role, TypingIndicator, parse_iso_date,
};
use std::collections::BTreeMap;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};
use tracing::{debug, info, warn};

/// Formats an instant as RFC 3339.
#[must_use]
pub fn format_instant(instant: OffsetDateTime) -> String {
    instant
        .format(&Rfc3339)
        .unwrap_or_else(|_| instant.to_string())
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<Date>, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse_iso_date)
        .transpose()
        .map_err(translate_domain_error)
}

fn parse_role(value: Option<&str>) -> Result<Role, ApiError> {
    value
        .map_or(Ok(Role::default()), str::parse::<Role>)
        .map_err(translate_domain_error)
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Converts an `Employee` to its API representation.
#[must_use]
pub fn employee_to_info(employee: &Employee) -> EmployeeInfo {
    EmployeeInfo {
        employee_id: employee.id.value(),
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        full_name: employee.full_name(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        position: employee.position.clone(),
        role: employee.role.as_str().to_string(),
        department_id: employee.department_id.map(DepartmentId::value),
        supervisor_id: employee.supervisor_id.map(EmployeeId::value),
        manager_id: employee.manager_id.map(EmployeeId::value),
        hire_date: employee.hire_date.as_ref().map(ToString::to_string),
        active: employee.active,
    }
}

fn employee_to_summary(employee: &Employee) -> EmployeeSummary {
    EmployeeSummary {
        employee_id: employee.id.value(),
        full_name: employee.full_name(),
        position: employee.position.clone(),
        role: employee.role.as_str().to_string(),
    }
}

fn department_to_info(department: &Department, head_count: usize) -> DepartmentInfo {
    DepartmentInfo {
        department_id: department.id.value(),
        name: department.name.clone(),
        description: department.description.clone(),
        manager_id: department.manager_id.map(EmployeeId::value),
        head_count,
    }
}

fn org_node_to_info(node: &OrgNode) -> OrgNodeInfo {
    OrgNodeInfo {
        manager: employee_to_summary(&node.manager),
        headcount: node.headcount(),
        supervisors: node
            .supervisors
            .iter()
            .map(|group| SupervisorGroupInfo {
                supervisor: employee_to_summary(&group.supervisor),
                employees: group.employees.iter().map(employee_to_summary).collect(),
            })
            .collect(),
    }
}

/// Converts a `LeaveRequest` to its API representation.
#[must_use]
pub fn leave_request_to_info(request: &LeaveRequest) -> LeaveRequestInfo {
    LeaveRequestInfo {
        request_id: request.id.value(),
        employee_id: request.employee_id.value(),
        employee_name: request.employee_name.clone(),
        leave_type: request.leave_type.as_str().to_string(),
        start_date: request.start_date.to_string(),
        end_date: request.end_date.to_string(),
        total_days: request.total_days,
        reason: request.reason.clone(),
        status: request.status.as_str().to_string(),
        submitted_at: format_instant(request.submitted_at),
        reviewed_by: request.review.as_ref().map(|r| r.reviewed_by.value()),
        reviewed_at: request
            .review
            .as_ref()
            .map(|r| format_instant(r.reviewed_at)),
        comments: request.review.as_ref().and_then(|r| r.comments.clone()),
    }
}

/// Converts a `Conversation` to its API representation.
#[must_use]
pub fn conversation_to_info(conversation: &Conversation) -> ConversationInfo {
    ConversationInfo {
        conversation_id: conversation.id.value(),
        kind: conversation.kind.as_str().to_string(),
        name: conversation.name.clone(),
        participants: conversation
            .participants
            .iter()
            .copied()
            .map(EmployeeId::value)
            .collect(),
        last_message_id: conversation.last_message_id.map(MessageId::value),
        unread_count: conversation.unread_count,
        pinned: conversation.pinned,
        archived: conversation.archived,
        updated_at: format_instant(conversation.updated_at),
    }
}

/// Converts a `Message` to its API representation.
#[must_use]
pub fn message_to_info(message: &Message) -> MessageInfo {
    MessageInfo {
        message_id: message.id.value(),
        conversation_id: message.conversation_id.value(),
        sender_id: message.sender_id.value(),
        content: message.content.clone(),
        kind: message.kind.as_str().to_string(),
        sent_at: format_instant(message.sent_at),
        read: message.read,
        attachments: message
            .attachments
            .iter()
            .map(|a| AttachmentInfo {
                name: a.name.clone(),
                url: a.url.clone(),
                size_bytes: a.size_bytes,
                mime_type: a.mime_type.clone(),
            })
            .collect(),
    }
}

/// Converts a `Notification` to its API representation.
#[must_use]
pub fn notification_to_info(notification: &Notification) -> NotificationInfo {
    NotificationInfo {
        notification_id: notification.id.value(),
        kind: notification.kind.as_str().to_string(),
        title: notification.title.clone(),
        body: notification.body.clone(),
        read: notification.read,
        created_at: format_instant(notification.created_at),
        conversation_id: notification.conversation_id.map(ConversationId::value),
        message_id: notification.message_id.map(MessageId::value),
    }
}

fn typing_to_response(indicator: &TypingIndicator) -> TypingResponse {
    TypingResponse {
        conversation_id: indicator.conversation_id.value(),
        user_id: indicator.user_id.value(),
        typing: true,
        expires_at: Some(format_instant(indicator.expires_at)),
    }
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// Lists departments with their active head counts.
#[must_use]
pub fn list_departments(directory: &DirectoryStore) -> ListDepartmentsResponse {
    let counts: BTreeMap<DepartmentId, usize> = directory.department_head_counts();
    ListDepartmentsResponse {
        departments: directory
            .list_departments()
            .iter()
            .map(|d| department_to_info(d, counts.get(&d.id).copied().unwrap_or(0)))
            .collect(),
    }
}

/// Returns one department.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the department does not exist.
pub fn get_department(
    directory: &DirectoryStore,
    department_id: i64,
) -> Result<DepartmentInfo, ApiError> {
    let id: DepartmentId = DepartmentId::new(department_id);
    let department: &Department = directory.get_department(id).map_err(translate_core_error)?;
    let head_count: usize = directory
        .department_head_counts()
        .get(&id)
        .copied()
        .unwrap_or(0);
    Ok(department_to_info(department, head_count))
}

/// Creates a department.
///
/// # Errors
///
/// Returns an error if:
/// - The name is missing, or duplicates an existing name ignoring case
/// - The manager does not exist or is not a manager
pub fn create_department(
    directory: &mut DirectoryStore,
    request: CreateDepartmentRequest,
) -> Result<DepartmentInfo, ApiError> {
    let department: Department = directory
        .create_department(
            &request.name,
            request.description,
            request.manager_id.map(EmployeeId::new),
        )
        .map_err(|e| {
            warn!(name = %request.name, error = %e, "Rejected department");
            translate_core_error(e)
        })?;
    Ok(department_to_info(&department, 0))
}

/// Lists every employee, active or not.
#[must_use]
pub fn list_employees(directory: &DirectoryStore) -> ListEmployeesResponse {
    ListEmployeesResponse {
        employees: directory
            .list_employees()
            .iter()
            .map(employee_to_info)
            .collect(),
    }
}

/// Returns one employee.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the employee does not exist.
pub fn get_employee(directory: &DirectoryStore, employee_id: i64) -> Result<EmployeeInfo, ApiError> {
    directory
        .get_employee(EmployeeId::new(employee_id))
        .map(employee_to_info)
        .map_err(translate_core_error)
}

/// Creates an employee.
///
/// # Errors
///
/// Returns an error if:
/// - A required field is missing or malformed
/// - The role or hire date cannot be parsed
/// - The email is already in use
/// - A reporting line or department reference is invalid
pub fn create_employee(
    directory: &mut DirectoryStore,
    request: CreateEmployeeRequest,
) -> Result<EmployeeInfo, ApiError> {
    let role: Role = parse_role(request.role.as_deref())?;
    let hire_date: Option<Date> = parse_optional_date(request.hire_date.as_deref())?;

    let new: NewEmployee = NewEmployee {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        phone: request.phone,
        position: request.position,
        role,
        department_id: request.department_id.map(DepartmentId::new),
        supervisor_id: request.supervisor_id.map(EmployeeId::new),
        manager_id: request.manager_id.map(EmployeeId::new),
        hire_date,
    };

    let employee: Employee = directory.create_employee(new).map_err(|e| {
        warn!(error = %e, "Rejected new employee");
        translate_core_error(e)
    })?;
    Ok(employee_to_info(&employee))
}

/// Applies a partial update to an employee.
///
/// # Errors
///
/// Returns an error if:
/// - The employee does not exist
/// - The role or hire date cannot be parsed
/// - The resulting record breaks a directory rule
pub fn update_employee(
    directory: &mut DirectoryStore,
    employee_id: i64,
    request: UpdateEmployeeRequest,
) -> Result<EmployeeInfo, ApiError> {
    let role: Option<Role> = match request.role.as_deref() {
        Some(raw) => Some(raw.parse::<Role>().map_err(translate_domain_error)?),
        None => None,
    };
    let hire_date: Option<Option<Date>> = match request.hire_date {
        Some(raw) => Some(parse_optional_date(raw.as_deref())?),
        None => None,
    };

    let patch: EmployeePatch = EmployeePatch {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        phone: request.phone,
        position: request.position,
        role,
        department_id: request.department_id.map(|d| d.map(DepartmentId::new)),
        supervisor_id: request.supervisor_id.map(|s| s.map(EmployeeId::new)),
        manager_id: request.manager_id.map(|m| m.map(EmployeeId::new)),
        hire_date,
        active: None,
    };

    let employee: Employee = directory
        .update_employee(EmployeeId::new(employee_id), &patch)
        .map_err(|e| {
            warn!(employee_id, error = %e, "Rejected employee update");
            translate_core_error(e)
        })?;
    Ok(employee_to_info(&employee))
}

/// Soft-deactivates an employee. The record is kept.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the employee does not exist.
pub fn deactivate_employee(
    directory: &mut DirectoryStore,
    employee_id: i64,
) -> Result<DeactivateEmployeeResponse, ApiError> {
    let employee: Employee = directory
        .deactivate_employee(EmployeeId::new(employee_id))
        .map_err(translate_core_error)?;
    Ok(DeactivateEmployeeResponse {
        employee_id: employee.id.value(),
        active: employee.active,
        message: format!("Employee {} ({}) deactivated", employee.id, employee.full_name()),
    })
}

/// Derives the org tree.
#[must_use]
pub fn get_org_tree(directory: &DirectoryStore) -> OrgTreeResponse {
    OrgTreeResponse {
        nodes: directory.org_tree().iter().map(org_node_to_info).collect(),
    }
}

/// Counts active employees per tier.
#[must_use]
pub fn get_employee_counts(directory: &DirectoryStore) -> EmployeeCountsResponse {
    let counts: EmployeeCounts = directory.employee_counts();
    EmployeeCountsResponse {
        managers: counts.managers,
        supervisors: counts.supervisors,
        employees: counts.employees,
        total: counts.total,
    }
}

// ---------------------------------------------------------------------------
// Leave
// ---------------------------------------------------------------------------

fn parse_leave_filter(query: &LeaveQuery) -> Result<LeaveFilter, ApiError> {
    let status: Option<LeaveStatus> = query
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<LeaveStatus>)
        .transpose()
        .map_err(translate_domain_error)?;
    let leave_type: Option<LeaveType> = query
        .leave_type
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<LeaveType>)
        .transpose()
        .map_err(translate_domain_error)?;
    let from: Option<Date> = parse_optional_date(query.from.as_deref())?;
    let to: Option<Date> = parse_optional_date(query.to.as_deref())?;

    let date_range: Option<(Date, Date)> = match (from, to) {
        (None, None) => None,
        (Some(from), Some(to)) if to < from => {
            return Err(ApiError::InvalidInput {
                field: String::from("to"),
                message: format!("End of range {to} is before start {from}"),
            });
        }
        (from, to) => Some((from.unwrap_or(Date::MIN), to.unwrap_or(Date::MAX))),
    };

    Ok(LeaveFilter {
        status,
        leave_type,
        search: query.search.clone().filter(|s| !s.trim().is_empty()),
        date_range,
    })
}

/// Lists leave requests matching the query.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a status, type or date in the query
/// cannot be parsed, or the date window is reversed.
pub fn list_leave_requests(
    ledger: &LeaveLedger,
    query: &LeaveQuery,
) -> Result<ListLeaveRequestsResponse, ApiError> {
    let filter: LeaveFilter = parse_leave_filter(query)?;
    Ok(ListLeaveRequestsResponse {
        requests: ledger
            .list_requests(&filter)
            .into_iter()
            .map(leave_request_to_info)
            .collect(),
    })
}

/// Submits a leave request for an active employee.
///
/// # Errors
///
/// Returns an error if:
/// - The employee does not exist or is inactive
/// - The leave type or a date cannot be parsed
/// - The end date is before the start date
pub fn submit_leave_request(
    directory: &DirectoryStore,
    ledger: &mut LeaveLedger,
    request: SubmitLeaveRequest,
) -> Result<LeaveRequestInfo, ApiError> {
    let employee: &Employee = directory
        .get_employee(EmployeeId::new(request.employee_id))
        .map_err(translate_core_error)?;
    if !employee.active {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("active_employee"),
            message: format!("Employee {} is inactive and cannot request leave", employee.id),
        });
    }

    let leave_type: LeaveType = request
        .leave_type
        .parse()
        .map_err(translate_domain_error)?;
    let start_date: Date = parse_iso_date(&request.start_date).map_err(translate_domain_error)?;
    let end_date: Date = parse_iso_date(&request.end_date).map_err(translate_domain_error)?;

    let submitted: LeaveRequest = ledger
        .submit_request(SubmitLeave {
            employee_id: employee.id,
            employee_name: employee.full_name(),
            leave_type,
            start_date,
            end_date,
            reason: request.reason,
        })
        .map_err(|e| {
            warn!(employee_id = %employee.id, error = %e, "Rejected leave request");
            translate_core_error(e)
        })?;
    Ok(leave_request_to_info(&submitted))
}

fn authorize_reviewer(directory: &DirectoryStore, reviewer_id: i64) -> Result<EmployeeId, ApiError> {
    let unauthorized = || ApiError::Unauthorized {
        action: String::from("review_leave"),
        required_role: String::from("supervisor, manager, HR manager or admin"),
    };
    let reviewer: &Employee = directory
        .get_employee(EmployeeId::new(reviewer_id))
        .map_err(|_| unauthorized())?;
    if !reviewer.active || !reviewer.role.can_approve_leave() {
        warn!(reviewer_id, role = %reviewer.role, "Reviewer may not approve leave");
        return Err(unauthorized());
    }
    Ok(reviewer.id)
}

/// Approves a pending leave request.
///
/// # Errors
///
/// Returns an error if:
/// - The reviewer is unknown, inactive, or may not approve leave
/// - The request does not exist or is no longer pending
pub fn approve_leave_request(
    directory: &DirectoryStore,
    ledger: &mut LeaveLedger,
    request_id: i64,
    request: ReviewLeaveRequest,
) -> Result<LeaveRequestInfo, ApiError> {
    let reviewer: EmployeeId = authorize_reviewer(directory, request.reviewer_id)?;
    ledger
        .approve(LeaveRequestId::new(request_id), reviewer, request.comments)
        .map(|r| leave_request_to_info(&r))
        .map_err(translate_core_error)
}

/// Rejects a pending leave request.
///
/// # Errors
///
/// Returns an error if:
/// - The reviewer is unknown, inactive, or may not approve leave
/// - The request does not exist or is no longer pending
pub fn reject_leave_request(
    directory: &DirectoryStore,
    ledger: &mut LeaveLedger,
    request_id: i64,
    request: ReviewLeaveRequest,
) -> Result<LeaveRequestInfo, ApiError> {
    let reviewer: EmployeeId = authorize_reviewer(directory, request.reviewer_id)?;
    ledger
        .reject(LeaveRequestId::new(request_id), reviewer, request.comments)
        .map(|r| leave_request_to_info(&r))
        .map_err(translate_core_error)
}

/// Counts leave requests by status.
#[must_use]
pub fn get_leave_summary(ledger: &LeaveLedger) -> LeaveSummaryResponse {
    let summary: LeaveSummary = ledger.summary();
    LeaveSummaryResponse {
        pending: summary.pending,
        approved: summary.approved,
        rejected: summary.rejected,
    }
}

/// Returns an employee's informational leave balance.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no balance is recorded.
pub fn get_leave_balance(
    ledger: &LeaveLedger,
    employee_id: i64,
) -> Result<LeaveBalanceResponse, ApiError> {
    let balance = ledger
        .get_balance(EmployeeId::new(employee_id))
        .map_err(translate_core_error)?;
    Ok(LeaveBalanceResponse {
        employee_id,
        balances: balance
            .remaining
            .iter()
            .map(|(t, days)| (t.as_str().to_string(), *days))
            .collect(),
    })
}

// ---------------------------------------------------------------------------
// Messaging
// ---------------------------------------------------------------------------

fn conversation_or_not_found(
    session: &MessagingSession,
    conversation_id: i64,
) -> Result<ConversationId, ApiError> {
    session
        .get_conversation(ConversationId::new(conversation_id))
        .map(|c| c.id)
        .map_err(translate_core_error)
}

/// Lists the caller's non-archived conversations.
#[must_use]
pub fn list_conversations(session: &MessagingSession) -> ListConversationsResponse {
    ListConversationsResponse {
        conversations: session
            .list_conversations()
            .into_iter()
            .map(conversation_to_info)
            .collect(),
    }
}

/// Opens a conversation between the caller and active employees.
///
/// # Errors
///
/// Returns an error if:
/// - The kind cannot be parsed
/// - A participant does not exist or is inactive
/// - A direct conversation does not have exactly one other participant
pub fn create_conversation(
    directory: &DirectoryStore,
    session: &mut MessagingSession,
    request: CreateConversationRequest,
) -> Result<ConversationInfo, ApiError> {
    let kind: ConversationKind = request
        .kind
        .as_deref()
        .map_or(Ok(ConversationKind::Direct), str::parse)
        .map_err(translate_domain_error)?;

    let mut participants: Vec<EmployeeId> = Vec::with_capacity(request.participants.len());
    for raw in request.participants {
        let employee: &Employee = directory
            .get_employee(EmployeeId::new(raw))
            .map_err(translate_core_error)?;
        if !employee.active {
            return Err(ApiError::DomainRuleViolation {
                rule: String::from("active_participant"),
                message: format!("Employee {} is inactive", employee.id),
            });
        }
        participants.push(employee.id);
    }

    let conversation: Conversation = session
        .create_conversation(kind, &participants, request.name)
        .map_err(translate_core_error)?;
    Ok(conversation_to_info(&conversation))
}

/// Lists a conversation's messages in send order.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the caller has no such
/// conversation.
pub fn list_messages(
    session: &MessagingSession,
    conversation_id: i64,
) -> Result<ListMessagesResponse, ApiError> {
    let id: ConversationId = conversation_or_not_found(session, conversation_id)?;
    Ok(ListMessagesResponse {
        conversation_id,
        messages: session.messages(id).iter().map(message_to_info).collect(),
    })
}

/// Sends a message as the caller.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not a participant
/// - The kind cannot be parsed
/// - Content is empty and nothing is attached
pub fn send_message(
    session: &mut MessagingSession,
    conversation_id: i64,
    request: SendMessageRequest,
) -> Result<MessageInfo, ApiError> {
    let kind: MessageKind = request
        .kind
        .as_deref()
        .map_or(Ok(MessageKind::Text), str::parse)
        .map_err(translate_domain_error)?;
    let attachments: Vec<Attachment> = request
        .attachments
        .into_iter()
        .map(|a| Attachment {
            name: a.name,
            url: a.url,
            size_bytes: a.size_bytes,
            mime_type: a.mime_type,
        })
        .collect();

    let message: Message = session
        .send_message(
            ConversationId::new(conversation_id),
            &request.content,
            kind,
            attachments,
        )
        .map_err(translate_core_error)?;
    Ok(message_to_info(&message))
}

/// Marks one message read for the caller.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the conversation or message does
/// not exist.
pub fn mark_message_read(
    session: &mut MessagingSession,
    conversation_id: i64,
    message_id: i64,
) -> Result<MarkReadResponse, ApiError> {
    let unread_count: u32 = session
        .mark_read(
            ConversationId::new(conversation_id),
            MessageId::new(message_id),
        )
        .map_err(translate_core_error)?;
    Ok(MarkReadResponse {
        conversation_id,
        message_id,
        unread_count,
    })
}

/// Shows the caller as typing.
///
/// # Errors
///
/// Returns an error if the caller is not a participant.
pub fn start_typing(
    session: &mut MessagingSession,
    conversation_id: i64,
) -> Result<TypingResponse, ApiError> {
    let indicator: TypingIndicator = session
        .start_typing(ConversationId::new(conversation_id))
        .map_err(translate_core_error)?;
    debug!(conversation_id, user_id = %indicator.user_id, "Typing started");
    Ok(typing_to_response(&indicator))
}

/// Clears the caller's typing indicator.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the caller has no such
/// conversation.
pub fn stop_typing(
    session: &mut MessagingSession,
    conversation_id: i64,
) -> Result<TypingResponse, ApiError> {
    let id: ConversationId = conversation_or_not_found(session, conversation_id)?;
    let was_typing: bool = session.stop_typing(id);
    debug!(conversation_id, was_typing, "Typing stopped");
    Ok(TypingResponse {
        conversation_id,
        user_id: session.user_id().value(),
        typing: false,
        expires_at: None,
    })
}

/// Lists the caller's notifications, newest first.
#[must_use]
pub fn list_notifications(session: &MessagingSession) -> ListNotificationsResponse {
    ListNotificationsResponse {
        notifications: session
            .notifications()
            .into_iter()
            .map(notification_to_info)
            .collect(),
        unread_count: session.unread_notification_count(),
    }
}

/// Marks a notification read.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the notification does not exist.
pub fn mark_notification_read(
    session: &mut MessagingSession,
    notification_id: i64,
) -> Result<MarkNotificationReadResponse, ApiError> {
    let unread_count: u32 = session
        .mark_notification_as_read(NotificationId::new(notification_id))
        .map_err(translate_core_error)?;
    info!(
        user_id = %session.user_id(),
        notification_id,
        unread_count,
        "Notification read"
    );
    Ok(MarkNotificationReadResponse {
        notification_id,
        unread_count,
    })
}
