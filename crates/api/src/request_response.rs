// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Calendar dates travel as `YYYY-MM-DD` strings and instants as RFC 3339
//! strings. Identifiers travel as plain integers.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Distinguishes an absent field from an explicit `null`.
///
/// Used with `#[serde(default)]` on `Option<Option<T>>` fields: absent
/// stays `None`, `null` becomes `Some(None)`.
fn explicit_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// API request to create a department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    /// Department name; must be unique ignoring case.
    #[serde(default)]
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional department head; must be a manager.
    #[serde(default)]
    pub manager_id: Option<i64>,
}

/// A department as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentInfo {
    pub department_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<i64>,
    /// Active employees assigned to the department.
    pub head_count: usize,
}

/// API response listing departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDepartmentsResponse {
    pub departments: Vec<DepartmentInfo>,
}

/// API request to create an employee.
///
/// Missing string fields deserialize as empty and are rejected by
/// validation, so a request without an email fails as invalid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    /// Role name such as `employee` or `hr_manager`. Defaults to `employee`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub supervisor_id: Option<i64>,
    #[serde(default)]
    pub manager_id: Option<i64>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub hire_date: Option<String>,
}

/// API request to update an employee. Absent fields are left unchanged;
/// an explicit `null` clears a nullable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub position: Option<Option<String>>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub department_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub supervisor_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub manager_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub hire_date: Option<Option<String>>,
}

/// An employee as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub role: String,
    pub department_id: Option<i64>,
    pub supervisor_id: Option<i64>,
    pub manager_id: Option<i64>,
    pub hire_date: Option<String>,
    pub active: bool,
}

/// API response listing employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    pub employees: Vec<EmployeeInfo>,
}

/// API response for a soft deactivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivateEmployeeResponse {
    pub employee_id: i64,
    pub active: bool,
    pub message: String,
}

/// Compact employee record used inside the org tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub employee_id: i64,
    pub full_name: String,
    pub position: Option<String>,
    pub role: String,
}

/// A supervisor and their direct reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorGroupInfo {
    pub supervisor: EmployeeSummary,
    pub employees: Vec<EmployeeSummary>,
}

/// A manager and the groups below them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNodeInfo {
    pub manager: EmployeeSummary,
    pub headcount: usize,
    pub supervisors: Vec<SupervisorGroupInfo>,
}

/// API response for the org tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgTreeResponse {
    pub nodes: Vec<OrgNodeInfo>,
}

/// API response for tier counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCountsResponse {
    pub managers: usize,
    pub supervisors: usize,
    pub employees: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Leave
// ---------------------------------------------------------------------------

/// API request to submit a leave request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitLeaveRequest {
    pub employee_id: i64,
    /// Leave type name such as `annual` or `sick`.
    pub leave_type: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`, inclusive.
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
}

/// API request to approve or reject a leave request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewLeaveRequest {
    pub reviewer_id: i64,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Query parameters for listing leave requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveQuery {
    pub status: Option<String>,
    pub leave_type: Option<String>,
    pub search: Option<String>,
    /// Start of an inclusive overlap window, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// End of an inclusive overlap window, `YYYY-MM-DD`.
    pub to: Option<String>,
}

/// A leave request as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestInfo {
    pub request_id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub total_days: u32,
    pub reason: String,
    pub status: String,
    pub submitted_at: String,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<String>,
    pub comments: Option<String>,
}

/// API response listing leave requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLeaveRequestsResponse {
    pub requests: Vec<LeaveRequestInfo>,
}

/// API response with request counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummaryResponse {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// API response with an employee's remaining days per leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalanceResponse {
    pub employee_id: i64,
    pub balances: BTreeMap<String, u32>,
}

// ---------------------------------------------------------------------------
// Messaging
// ---------------------------------------------------------------------------

/// API request to open a conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConversationRequest {
    /// `direct` or `group`. Defaults to `direct`.
    #[serde(default)]
    pub kind: Option<String>,
    /// Other participants; the caller is added automatically.
    #[serde(default)]
    pub participants: Vec<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A conversation as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationInfo {
    pub conversation_id: i64,
    pub kind: String,
    pub name: Option<String>,
    pub participants: Vec<i64>,
    pub last_message_id: Option<i64>,
    pub unread_count: u32,
    pub pinned: bool,
    pub archived: bool,
    pub updated_at: String,
}

/// API response listing conversations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConversationsResponse {
    pub conversations: Vec<ConversationInfo>,
}

/// A file or image attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentInfo {
    pub name: String,
    pub url: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// API request to send a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub content: String,
    /// `text`, `image`, `file` or `system`. Defaults to `text`.
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub attachments: Vec<AttachmentInfo>,
}

/// A message as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub message_id: i64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub kind: String,
    pub sent_at: String,
    pub read: bool,
    pub attachments: Vec<AttachmentInfo>,
}

/// API response listing a conversation's messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    pub conversation_id: i64,
    pub messages: Vec<MessageInfo>,
}

/// API response after marking a message read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkReadResponse {
    pub conversation_id: i64,
    pub message_id: i64,
    pub unread_count: u32,
}

/// API response for typing start/stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingResponse {
    pub conversation_id: i64,
    pub user_id: i64,
    pub typing: bool,
    pub expires_at: Option<String>,
}

/// A notification as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationInfo {
    pub notification_id: i64,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: String,
    pub conversation_id: Option<i64>,
    pub message_id: Option<i64>,
}

/// API response listing notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNotificationsResponse {
    pub notifications: Vec<NotificationInfo>,
    pub unread_count: u32,
}

/// API response after marking a notification read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkNotificationReadResponse {
    pub notification_id: i64,
    pub unread_count: u32,
}
