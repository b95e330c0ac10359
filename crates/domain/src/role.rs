// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role an employee holds in the organisation.
///
/// All role-dependent decisions go through the helpers on this type so
/// that callers never compare role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System administrator.
    Admin,
    /// Human-resources manager.
    HrManager,
    /// Top tier of the reporting hierarchy.
    Manager,
    /// Middle tier; reports to a manager.
    Supervisor,
    /// Bottom tier; reports to a supervisor.
    #[default]
    Employee,
}

impl Role {
    /// Every role, in hierarchy order.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::HrManager,
        Self::Manager,
        Self::Supervisor,
        Self::Employee,
    ];

    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HrManager => "hr_manager",
            Self::Manager => "manager",
            Self::Supervisor => "supervisor",
            Self::Employee => "employee",
        }
    }

    /// Returns whether this is the manager tier.
    #[must_use]
    pub const fn is_manager(&self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Returns whether this is the supervisor tier.
    #[must_use]
    pub const fn is_supervisor(&self) -> bool {
        matches!(self, Self::Supervisor)
    }

    /// Returns whether this is the employee tier.
    #[must_use]
    pub const fn is_employee(&self) -> bool {
        matches!(self, Self::Employee)
    }

    /// Returns whether a record with this role may carry a `supervisor_id`.
    #[must_use]
    pub const fn may_have_supervisor(&self) -> bool {
        matches!(self, Self::Employee)
    }

    /// Returns whether a record with this role may carry a `manager_id`.
    #[must_use]
    pub const fn may_have_manager(&self) -> bool {
        matches!(self, Self::Supervisor | Self::Employee)
    }

    /// Returns whether this role may approve or reject leave requests.
    #[must_use]
    pub const fn can_approve_leave(&self) -> bool {
        match self {
            Self::Admin | Self::HrManager | Self::Manager | Self::Supervisor => true,
            Self::Employee => false,
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "admin" => Ok(Self::Admin),
            "hr_manager" | "hrmanager" | "hr" => Ok(Self::HrManager),
            "manager" => Ok(Self::Manager),
            "supervisor" => Ok(Self::Supervisor),
            "employee" => Ok(Self::Employee),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
