// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave requests, review state and balances.

use crate::error::DomainError;
use crate::ids::{EmployeeId, LeaveRequestId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Category of leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Personal leave.
    Personal,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
    /// Emergency leave.
    Emergency,
    /// Study leave.
    Study,
}

impl LeaveType {
    /// Every leave type.
    pub const ALL: [Self; 7] = [
        Self::Annual,
        Self::Sick,
        Self::Personal,
        Self::Maternity,
        Self::Paternity,
        Self::Emergency,
        Self::Study,
    ];

    /// Converts this leave type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Personal => "personal",
            Self::Maternity => "maternity",
            Self::Paternity => "paternity",
            Self::Emergency => "emergency",
            Self::Study => "study",
        }
    }
}

impl FromStr for LeaveType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidLeaveType(s.to_string()))
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review state of a leave request.
///
/// `Pending` is initial; `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting review.
    #[default]
    Pending,
    /// Approved by a reviewer.
    Approved,
    /// Rejected by a reviewer.
    Rejected,
}

impl LeaveStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Approved
    /// - Pending → Rejected
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Approved | Self::Rejected)
        )
    }
}

impl FromStr for LeaveStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidLeaveStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The reviewer's decision record.
///
/// Present on a request exactly when its status is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveReview {
    /// Who reviewed the request.
    pub reviewed_by: EmployeeId,
    /// When the review happened.
    pub reviewed_at: OffsetDateTime,
    /// Optional reviewer comments.
    pub comments: Option<String>,
}

/// A request for leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Ledger-assigned identifier.
    pub id: LeaveRequestId,
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// The requesting employee's display name at submission time.
    pub employee_name: String,
    /// Category of leave.
    pub leave_type: LeaveType,
    /// First day of leave.
    pub start_date: Date,
    /// Last day of leave (inclusive).
    pub end_date: Date,
    /// Inclusive calendar-day count of the range.
    pub total_days: u32,
    /// Free-text reason.
    pub reason: String,
    /// Review state.
    pub status: LeaveStatus,
    /// When the request was submitted.
    pub submitted_at: OffsetDateTime,
    /// Review record; `None` while pending.
    pub review: Option<LeaveReview>,
}

impl LeaveRequest {
    /// Returns whether `[from, to]` overlaps this request's range.
    #[must_use]
    pub fn overlaps(&self, from: Date, to: Date) -> bool {
        self.start_date <= to && self.end_date >= from
    }
}

/// Remaining days per leave type for one employee.
///
/// Balances are informational. Approving a request does not deduct from
/// the balance; the two are maintained independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee this balance belongs to.
    pub employee_id: EmployeeId,
    /// Remaining days by type. Missing types read as zero.
    pub remaining: BTreeMap<LeaveType, u32>,
}

impl LeaveBalance {
    /// Creates a balance with every type at zero.
    #[must_use]
    pub fn new(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            remaining: LeaveType::ALL.into_iter().map(|t| (t, 0)).collect(),
        }
    }

    /// Sets the remaining days for one type.
    #[must_use]
    pub fn with(mut self, leave_type: LeaveType, days: u32) -> Self {
        self.remaining.insert(leave_type, days);
        self
    }

    /// Returns the remaining days for one type.
    #[must_use]
    pub fn days(&self, leave_type: LeaveType) -> u32 {
        self.remaining.get(&leave_type).copied().unwrap_or(0)
    }
}

/// Criteria for listing leave requests. Empty criteria match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeaveFilter {
    /// Only requests in this status.
    pub status: Option<LeaveStatus>,
    /// Only requests of this type.
    pub leave_type: Option<LeaveType>,
    /// Case-insensitive substring of the employee name or reason.
    pub search: Option<String>,
    /// Only requests whose range overlaps this inclusive range.
    pub date_range: Option<(Date, Date)>,
}

impl LeaveFilter {
    /// Returns whether `request` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, request: &LeaveRequest) -> bool {
        if self.status.is_some_and(|s| s != request.status) {
            return false;
        }
        if self.leave_type.is_some_and(|t| t != request.leave_type) {
            return false;
        }
        if let Some(search) = &self.search {
            let needle: String = search.trim().to_lowercase();
            if !needle.is_empty()
                && !request.employee_name.to_lowercase().contains(&needle)
                && !request.reason.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some((from, to)) = self.date_range
            && !request.overlaps(from, to)
        {
            return false;
        }
        true
    }
}

/// Request counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// Requests awaiting review.
    pub pending: usize,
    /// Approved requests.
    pub approved: usize,
    /// Rejected requests.
    pub rejected: usize,
}

/// Counts the calendar days in `[start_date, end_date]`, inclusive.
///
/// Weekends are counted.
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `end_date` is before `start_date`.
pub fn count_leave_days(start_date: Date, end_date: Date) -> Result<u32, DomainError> {
    if end_date < start_date {
        return Err(DomainError::InvalidRange {
            start_date,
            end_date,
        });
    }
    let span: i64 = (end_date - start_date).whole_days();
    u32::try_from(span + 1).map_err(|_| DomainError::InvalidRange {
        start_date,
        end_date,
    })
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}
