// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity for the messaging routes.
//!
//! The caller names themselves with the `X-Employee-Id` header. The id must
//! belong to an active employee in the directory.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use hrdesk_domain::{Employee, EmployeeId};
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

/// Header carrying the caller's employee id.
pub const EMPLOYEE_ID_HEADER: &str = "X-Employee-Id";

/// The employee a messaging request acts as.
///
/// ```ignore
/// async fn handler(CurrentUser(user_id): CurrentUser) -> impl IntoResponse {
///     // user_id: EmployeeId
/// }
/// ```
///
/// Rejects with 401 when the header is missing or not an integer, or when
/// the id is unknown or deactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub EmployeeId);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = IdentityError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw: &str = parts
            .headers
            .get(EMPLOYEE_ID_HEADER)
            .ok_or_else(|| {
                debug!("Missing {EMPLOYEE_ID_HEADER} header");
                IdentityError::MissingHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid {EMPLOYEE_ID_HEADER} header encoding");
                IdentityError::MalformedHeader
            })?;

        let id: i64 = raw.trim().parse().map_err(|_| {
            warn!(value = raw, "{EMPLOYEE_ID_HEADER} is not an integer");
            IdentityError::MalformedHeader
        })?;
        let employee_id: EmployeeId = EmployeeId::new(id);

        let active: Option<bool> = state
            .directory
            .lock()
            .await
            .get_employee(employee_id)
            .ok()
            .map(|e: &Employee| e.active);

        match active {
            Some(true) => {
                debug!(employee_id = id, "Caller identified");
                Ok(Self(employee_id))
            }
            Some(false) => {
                warn!(employee_id = id, "Deactivated caller");
                Err(IdentityError::InactiveEmployee(employee_id))
            }
            None => {
                warn!(employee_id = id, "Unknown caller");
                Err(IdentityError::UnknownEmployee(employee_id))
            }
        }
    }
}

/// Why a request carried no usable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    MissingHeader,
    MalformedHeader,
    UnknownEmployee(EmployeeId),
    InactiveEmployee(EmployeeId),
}

impl IdentityError {
    fn message(self) -> String {
        match self {
            Self::MissingHeader => format!("Missing {EMPLOYEE_ID_HEADER} header"),
            Self::MalformedHeader => {
                format!("Invalid {EMPLOYEE_ID_HEADER} header. Expected an employee id")
            }
            Self::UnknownEmployee(id) => format!("Unknown employee {id}"),
            Self::InactiveEmployee(id) => format!("Employee {id} is deactivated"),
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        let body = axum::Json(ErrorResponse {
            error: true,
            message: self.message(),
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
