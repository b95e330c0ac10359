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
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    approve_leave_request, conversation_to_info, create_conversation, create_department,
    create_employee, deactivate_employee, employee_to_info, format_instant, get_department,
    get_employee, get_employee_counts, get_leave_balance, get_leave_summary, get_org_tree,
    leave_request_to_info, list_conversations, list_departments, list_employees,
    list_leave_requests, list_messages, list_notifications, mark_message_read,
    mark_notification_read, message_to_info, notification_to_info, reject_leave_request,
    send_message, start_typing, stop_typing, submit_leave_request, update_employee,
};
pub use request_response::{
    AttachmentInfo, ConversationInfo, CreateConversationRequest, CreateDepartmentRequest,
    CreateEmployeeRequest, DeactivateEmployeeResponse, DepartmentInfo, EmployeeCountsResponse,
    EmployeeInfo, EmployeeSummary, LeaveBalanceResponse, LeaveQuery, LeaveRequestInfo,
    LeaveSummaryResponse, ListConversationsResponse, ListDepartmentsResponse,
    ListEmployeesResponse, ListLeaveRequestsResponse, ListMessagesResponse,
    ListNotificationsResponse, MarkNotificationReadResponse, MarkReadResponse, MessageInfo,
    NotificationInfo, OrgNodeInfo, OrgTreeResponse, ReviewLeaveRequest, SendMessageRequest,
    SubmitLeaveRequest, SupervisorGroupInfo, TypingResponse, UpdateEmployeeRequest,
};
