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
#![allow(clippy::multiple_crate_versions)]

mod background;
mod live;
mod seed;
mod session;

use axum::{
    Json, Router,
    extract::{FromRef, Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use hrdesk::{Clock, DirectoryStore, LeaveLedger, SessionRegistry, SimulatedInbound, SystemClock};
use hrdesk_api::{
    ApiError, ConversationInfo, CreateConversationRequest, CreateDepartmentRequest,
    CreateEmployeeRequest, DeactivateEmployeeResponse, DepartmentInfo, EmployeeCountsResponse,
    EmployeeInfo, LeaveBalanceResponse, LeaveQuery, LeaveRequestInfo, LeaveSummaryResponse,
    ListConversationsResponse, ListDepartmentsResponse, ListEmployeesResponse,
    ListLeaveRequestsResponse, ListMessagesResponse, ListNotificationsResponse,
    MarkNotificationReadResponse, MarkReadResponse, MessageInfo, OrgTreeResponse,
    ReviewLeaveRequest, SendMessageRequest, SubmitLeaveRequest, TypingResponse,
    UpdateEmployeeRequest,
};
use hrdesk_domain::EmployeeId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use crate::session::CurrentUser;

/// HR Desk Server - HTTP server for the HR directory, leave desk and messaging
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Start with empty stores instead of demo data
    #[arg(long)]
    no_seed: bool,

    /// Employee id whose session receives simulated inbound messages
    #[arg(long, default_value_t = 1)]
    demo_user: i64,

    /// Seconds between polls of the inbound source
    #[arg(long, default_value_t = 5)]
    inbound_interval_secs: u64,

    /// Disable the simulated inbound source
    #[arg(long)]
    no_simulation: bool,
}

/// Application state shared across handlers and background tasks.
///
/// Locks are always taken in the order directory, leave, sessions.
#[derive(Clone)]
struct AppState {
    directory: Arc<Mutex<DirectoryStore>>,
    leave: Arc<Mutex<LeaveLedger>>,
    sessions: Arc<Mutex<SessionRegistry>>,
    broadcaster: Arc<LiveEventBroadcaster>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            directory: Arc::new(Mutex::new(DirectoryStore::new())),
            leave: Arc::new(Mutex::new(LeaveLedger::new(Arc::clone(&clock)))),
            sessions: Arc::new(Mutex::new(SessionRegistry::new(Arc::clone(&clock)))),
            broadcaster: Arc::new(LiveEventBroadcaster::new()),
            clock,
        }
    }
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.broadcaster)
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always `true`.
    error: bool,
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } | ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Internal server error"),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

async fn handle_list_departments(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListDepartmentsResponse> {
    let directory = app_state.directory.lock().await;
    Json(hrdesk_api::list_departments(&directory))
}

async fn handle_get_department(
    AxumState(app_state): AxumState<AppState>,
    Path(department_id): Path<i64>,
) -> Result<Json<DepartmentInfo>, HttpError> {
    let directory = app_state.directory.lock().await;
    Ok(Json(hrdesk_api::get_department(&directory, department_id)?))
}

/// Handler for POST `/departments`.
async fn handle_create_department(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentInfo>), HttpError> {
    info!(name = %req.name, "Handling create_department request");

    let mut directory = app_state.directory.lock().await;
    let department: DepartmentInfo = hrdesk_api::create_department(&mut directory, req)?;
    drop(directory);

    app_state.broadcaster.broadcast(&LiveEvent::DepartmentCreated {
        department_id: department.department_id,
        name: department.name.clone(),
    });
    Ok((StatusCode::CREATED, Json(department)))
}

async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListEmployeesResponse> {
    let directory = app_state.directory.lock().await;
    Json(hrdesk_api::list_employees(&directory))
}

async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    let directory = app_state.directory.lock().await;
    Ok(Json(hrdesk_api::get_employee(&directory, employee_id)?))
}

/// Handler for POST `/employees`.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeInfo>), HttpError> {
    info!(email = %req.email, "Handling create_employee request");

    let mut directory = app_state.directory.lock().await;
    let employee: EmployeeInfo = hrdesk_api::create_employee(&mut directory, req)?;
    drop(directory);

    app_state.broadcaster.broadcast(&LiveEvent::EmployeeCreated {
        employee_id: employee.employee_id,
    });
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for PUT `/employees/{id}`.
async fn handle_update_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    info!(employee_id, "Handling update_employee request");

    let mut directory = app_state.directory.lock().await;
    let employee: EmployeeInfo = hrdesk_api::update_employee(&mut directory, employee_id, req)?;
    drop(directory);

    app_state
        .broadcaster
        .broadcast(&LiveEvent::EmployeeUpdated { employee_id });
    Ok(Json(employee))
}

/// Handler for DELETE `/employees/{id}`. Records are deactivated, never
/// removed.
async fn handle_deactivate_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<DeactivateEmployeeResponse>, HttpError> {
    info!(employee_id, "Handling deactivate_employee request");

    let mut directory = app_state.directory.lock().await;
    let response: DeactivateEmployeeResponse =
        hrdesk_api::deactivate_employee(&mut directory, employee_id)?;
    drop(directory);

    app_state
        .broadcaster
        .broadcast(&LiveEvent::EmployeeDeactivated { employee_id });
    Ok(Json(response))
}

async fn handle_get_org_tree(AxumState(app_state): AxumState<AppState>) -> Json<OrgTreeResponse> {
    let directory = app_state.directory.lock().await;
    Json(hrdesk_api::get_org_tree(&directory))
}

async fn handle_get_employee_counts(
    AxumState(app_state): AxumState<AppState>,
) -> Json<EmployeeCountsResponse> {
    let directory = app_state.directory.lock().await;
    Json(hrdesk_api::get_employee_counts(&directory))
}

// ---------------------------------------------------------------------------
// Leave
// ---------------------------------------------------------------------------

async fn handle_list_leave_requests(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<LeaveQuery>,
) -> Result<Json<ListLeaveRequestsResponse>, HttpError> {
    let ledger = app_state.leave.lock().await;
    Ok(Json(hrdesk_api::list_leave_requests(&ledger, &query)?))
}

/// Handler for POST `/leave/requests`.
async fn handle_submit_leave_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmitLeaveRequest>,
) -> Result<(StatusCode, Json<LeaveRequestInfo>), HttpError> {
    info!(
        employee_id = req.employee_id,
        leave_type = %req.leave_type,
        "Handling submit_leave_request request"
    );

    let directory = app_state.directory.lock().await;
    let mut ledger = app_state.leave.lock().await;
    let request: LeaveRequestInfo =
        hrdesk_api::submit_leave_request(&directory, &mut ledger, req)?;
    drop(ledger);
    drop(directory);

    app_state.broadcaster.broadcast(&LiveEvent::LeaveSubmitted {
        request_id: request.request_id,
        employee_id: request.employee_id,
    });
    Ok((StatusCode::CREATED, Json(request)))
}

/// Handler for POST `/leave/requests/{id}/approve`.
async fn handle_approve_leave_request(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
    Json(req): Json<ReviewLeaveRequest>,
) -> Result<Json<LeaveRequestInfo>, HttpError> {
    info!(request_id, reviewer_id = req.reviewer_id, "Handling approve_leave request");

    let directory = app_state.directory.lock().await;
    let mut ledger = app_state.leave.lock().await;
    let request: LeaveRequestInfo =
        hrdesk_api::approve_leave_request(&directory, &mut ledger, request_id, req)?;
    drop(ledger);
    drop(directory);

    broadcast_review(&app_state, &request);
    Ok(Json(request))
}

/// Handler for POST `/leave/requests/{id}/reject`.
async fn handle_reject_leave_request(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
    Json(req): Json<ReviewLeaveRequest>,
) -> Result<Json<LeaveRequestInfo>, HttpError> {
    info!(request_id, reviewer_id = req.reviewer_id, "Handling reject_leave request");

    let directory = app_state.directory.lock().await;
    let mut ledger = app_state.leave.lock().await;
    let request: LeaveRequestInfo =
        hrdesk_api::reject_leave_request(&directory, &mut ledger, request_id, req)?;
    drop(ledger);
    drop(directory);

    broadcast_review(&app_state, &request);
    Ok(Json(request))
}

fn broadcast_review(app_state: &AppState, request: &LeaveRequestInfo) {
    app_state.broadcaster.broadcast(&LiveEvent::LeaveReviewed {
        request_id: request.request_id,
        status: request.status.clone(),
    });
}

async fn handle_get_leave_summary(
    AxumState(app_state): AxumState<AppState>,
) -> Json<LeaveSummaryResponse> {
    let ledger = app_state.leave.lock().await;
    Json(hrdesk_api::get_leave_summary(&ledger))
}

async fn handle_get_leave_balance(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<LeaveBalanceResponse>, HttpError> {
    let ledger = app_state.leave.lock().await;
    Ok(Json(hrdesk_api::get_leave_balance(&ledger, employee_id)?))
}

// ---------------------------------------------------------------------------
// Messaging
// ---------------------------------------------------------------------------

async fn handle_list_conversations(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Json<ListConversationsResponse> {
    let mut sessions = app_state.sessions.lock().await;
    Json(hrdesk_api::list_conversations(sessions.session_mut(user_id)))
}

/// Handler for POST `/conversations`.
async fn handle_create_conversation(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<CreateConversationRequest>,
) -> Result<(StatusCode, Json<ConversationInfo>), HttpError> {
    info!(user_id = %user_id, "Handling create_conversation request");

    let directory = app_state.directory.lock().await;
    let mut sessions = app_state.sessions.lock().await;
    let conversation: ConversationInfo =
        hrdesk_api::create_conversation(&directory, sessions.session_mut(user_id), req)?;
    drop(sessions);
    drop(directory);

    Ok((StatusCode::CREATED, Json(conversation)))
}

async fn handle_list_messages(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(conversation_id): Path<i64>,
) -> Result<Json<ListMessagesResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    Ok(Json(hrdesk_api::list_messages(
        sessions.session_mut(user_id),
        conversation_id,
    )?))
}

/// Handler for POST `/conversations/{id}/messages`.
async fn handle_send_message(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(conversation_id): Path<i64>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageInfo>), HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let message: MessageInfo =
        hrdesk_api::send_message(sessions.session_mut(user_id), conversation_id, req)?;
    drop(sessions);

    app_state.broadcaster.broadcast(&LiveEvent::MessageDelivered {
        user_id: user_id.value(),
        conversation_id,
        message_id: message.message_id,
    });
    Ok((StatusCode::CREATED, Json(message)))
}

async fn handle_mark_message_read(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path((conversation_id, message_id)): Path<(i64, i64)>,
) -> Result<Json<MarkReadResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    Ok(Json(hrdesk_api::mark_message_read(
        sessions.session_mut(user_id),
        conversation_id,
        message_id,
    )?))
}

async fn handle_start_typing(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(conversation_id): Path<i64>,
) -> Result<Json<TypingResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    Ok(Json(hrdesk_api::start_typing(
        sessions.session_mut(user_id),
        conversation_id,
    )?))
}

async fn handle_stop_typing(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(conversation_id): Path<i64>,
) -> Result<Json<TypingResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    Ok(Json(hrdesk_api::stop_typing(
        sessions.session_mut(user_id),
        conversation_id,
    )?))
}

async fn handle_list_notifications(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Json<ListNotificationsResponse> {
    let mut sessions = app_state.sessions.lock().await;
    Json(hrdesk_api::list_notifications(
        sessions.session_mut(user_id),
    ))
}

async fn handle_mark_notification_read(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(notification_id): Path<i64>,
) -> Result<Json<MarkNotificationReadResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    Ok(Json(hrdesk_api::mark_notification_read(
        sessions.session_mut(user_id),
        notification_id,
    )?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/departments",
            get(handle_list_departments).post(handle_create_department),
        )
        .route("/departments/{id}", get(handle_get_department))
        .route(
            "/employees",
            get(handle_list_employees).post(handle_create_employee),
        )
        .route(
            "/employees/{id}",
            get(handle_get_employee)
                .put(handle_update_employee)
                .delete(handle_deactivate_employee),
        )
        .route("/org/tree", get(handle_get_org_tree))
        .route("/org/counts", get(handle_get_employee_counts))
        .route(
            "/leave/requests",
            get(handle_list_leave_requests).post(handle_submit_leave_request),
        )
        .route(
            "/leave/requests/{id}/approve",
            post(handle_approve_leave_request),
        )
        .route(
            "/leave/requests/{id}/reject",
            post(handle_reject_leave_request),
        )
        .route("/leave/summary", get(handle_get_leave_summary))
        .route(
            "/leave/balances/{employee_id}",
            get(handle_get_leave_balance),
        )
        .route(
            "/conversations",
            get(handle_list_conversations).post(handle_create_conversation),
        )
        .route(
            "/conversations/{id}/messages",
            get(handle_list_messages).post(handle_send_message),
        )
        .route(
            "/conversations/{id}/messages/{message_id}/read",
            post(handle_mark_message_read),
        )
        .route(
            "/conversations/{id}/typing",
            post(handle_start_typing).delete(handle_stop_typing),
        )
        .route("/notifications", get(handle_list_notifications))
        .route(
            "/notifications/{id}/read",
            post(handle_mark_notification_read),
        )
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing HR Desk server");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let app_state: AppState = AppState::new(Arc::clone(&clock));
    let demo_user: EmployeeId = EmployeeId::new(args.demo_user);

    let target = if args.no_seed {
        info!("Starting with empty stores");
        None
    } else {
        let mut directory = app_state.directory.lock().await;
        let mut ledger = app_state.leave.lock().await;
        let mut sessions = app_state.sessions.lock().await;
        seed::seed_demo_data(
            &mut directory,
            &mut ledger,
            &mut sessions,
            demo_user,
            clock.now().date(),
        )?
    };

    let _sweeper = background::start_typing_sweeper(app_state.clone());
    match target {
        Some(target) if !args.no_simulation => {
            info!(
                demo_user = %demo_user,
                conversation_id = %target.conversation_id,
                sender = %target.sender_name,
                "Simulated inbound traffic enabled"
            );
            let source: SimulatedInbound =
                SimulatedInbound::new(target.conversation_id, target.sender_id, &target.sender_name);
            let _pump = background::start_inbound_pump(
                app_state.clone(),
                demo_user,
                Box::new(source),
                Duration::from_secs(args.inbound_interval_secs.max(1)),
            );
        }
        _ => info!("Simulated inbound traffic disabled"),
    }

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
