// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::error::CoreError;
use hrdesk_domain::{
    DomainError, EmployeeId, LeaveBalance, LeaveFilter, LeaveRequest, LeaveRequestId, LeaveReview,
    LeaveStatus, LeaveSummary, LeaveType, count_leave_days,
};
use std::collections::HashMap;
use std::sync::Arc;
use time::Date;
use tracing::{debug, info};

/// Input for a new leave request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLeave {
    /// Employee taking the leave.
    pub employee_id: EmployeeId,
    /// Display name captured at submission time.
    pub employee_name: String,
    /// Kind of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave.
    pub start_date: Date,
    /// Last day of leave, inclusive.
    pub end_date: Date,
    /// Free-text reason shown to reviewers.
    pub reason: String,
}

/// Leave requests and per-employee balances.
///
/// Balances are informational. Approving a request does not deduct from
/// them.
#[derive(Debug)]
pub struct LeaveLedger {
    requests: Vec<LeaveRequest>,
    balances: HashMap<EmployeeId, LeaveBalance>,
    next_request_id: i64,
    clock: Arc<dyn Clock>,
}

impl LeaveLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            requests: Vec::new(),
            balances: HashMap::new(),
            next_request_id: 1,
            clock,
        }
    }

    /// Returns requests matching `filter`, in submission order.
    #[must_use]
    pub fn list_requests(&self, filter: &LeaveFilter) -> Vec<&LeaveRequest> {
        let matched: Vec<&LeaveRequest> =
            self.requests.iter().filter(|r| filter.matches(r)).collect();
        debug!(
            total = self.requests.len(),
            matched = matched.len(),
            "Listed leave requests"
        );
        matched
    }

    /// Looks up a single request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LeaveRequestNotFound` if `id` is unknown.
    pub fn get_request(&self, id: LeaveRequestId) -> Result<&LeaveRequest, CoreError> {
        self.requests
            .iter()
            .find(|r| r.id == id)
            .ok_or(CoreError::DomainViolation(
                DomainError::LeaveRequestNotFound(id),
            ))
    }

    /// Records a new pending request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRange` if the end date precedes the start
    /// date. The ledger is unchanged on failure.
    pub fn submit_request(&mut self, submit: SubmitLeave) -> Result<LeaveRequest, CoreError> {
        let total_days: u32 = count_leave_days(submit.start_date, submit.end_date)?;

        let request: LeaveRequest = LeaveRequest {
            id: LeaveRequestId::new(self.next_request_id),
            employee_id: submit.employee_id,
            employee_name: submit.employee_name,
            leave_type: submit.leave_type,
            start_date: submit.start_date,
            end_date: submit.end_date,
            total_days,
            reason: submit.reason.trim().to_string(),
            status: LeaveStatus::Pending,
            submitted_at: self.clock.now(),
            review: None,
        };
        self.next_request_id += 1;
        self.requests.push(request.clone());

        info!(
            request_id = %request.id,
            employee_id = %request.employee_id,
            leave_type = %request.leave_type,
            total_days,
            "Submitted leave request"
        );
        Ok(request)
    }

    /// Approves a pending request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request does not exist or is not pending.
    pub fn approve(
        &mut self,
        id: LeaveRequestId,
        reviewer: EmployeeId,
        comments: Option<String>,
    ) -> Result<LeaveRequest, CoreError> {
        self.review(id, LeaveStatus::Approved, reviewer, comments)
    }

    /// Rejects a pending request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request does not exist or is not pending.
    pub fn reject(
        &mut self,
        id: LeaveRequestId,
        reviewer: EmployeeId,
        comments: Option<String>,
    ) -> Result<LeaveRequest, CoreError> {
        self.review(id, LeaveStatus::Rejected, reviewer, comments)
    }

    /// Returns the balance record for an employee.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LeaveBalanceNotFound` if no record exists.
    pub fn get_balance(&self, employee_id: EmployeeId) -> Result<&LeaveBalance, CoreError> {
        self.balances
            .get(&employee_id)
            .ok_or(CoreError::DomainViolation(
                DomainError::LeaveBalanceNotFound(employee_id),
            ))
    }

    /// Stores or replaces the balance record for its employee.
    pub fn set_balance(&mut self, balance: LeaveBalance) {
        debug!(employee_id = %balance.employee_id, "Set leave balance");
        self.balances.insert(balance.employee_id, balance);
    }

    /// Counts requests per status.
    #[must_use]
    pub fn summary(&self) -> LeaveSummary {
        self.requests
            .iter()
            .fold(LeaveSummary::default(), |mut acc, r| {
                match r.status {
                    LeaveStatus::Pending => acc.pending += 1,
                    LeaveStatus::Approved => acc.approved += 1,
                    LeaveStatus::Rejected => acc.rejected += 1,
                }
                acc
            })
    }

    /// Drops every request and balance.
    pub fn reset(&mut self) {
        self.requests.clear();
        self.balances.clear();
        self.next_request_id = 1;
    }

    fn review(
        &mut self,
        id: LeaveRequestId,
        target: LeaveStatus,
        reviewer: EmployeeId,
        comments: Option<String>,
    ) -> Result<LeaveRequest, CoreError> {
        let now = self.clock.now();
        let request: &mut LeaveRequest = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::DomainViolation(
                DomainError::LeaveRequestNotFound(id),
            ))?;

        if !request.status.can_transition_to(target) {
            return Err(CoreError::DomainViolation(DomainError::InvalidTransition {
                request_id: id,
                status: request.status,
            }));
        }

        request.status = target;
        request.review = Some(LeaveReview {
            reviewed_by: reviewer,
            reviewed_at: now,
            comments: comments
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        });

        info!(
            request_id = %id,
            reviewer_id = %reviewer,
            status = %target,
            "Reviewed leave request"
        );
        Ok(request.clone())
    }
}
