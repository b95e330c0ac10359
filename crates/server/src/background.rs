// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Periodic tasks that mutate the session registry outside of a request.

use hrdesk::{InboundEvent, InboundOutcome, InboundSource};
use hrdesk_domain::{EmployeeId, TypingIndicator};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::AppState;
use crate::live::LiveEvent;

/// How often expired typing indicators are swept.
pub const TYPING_SWEEP_INTERVAL: Duration = Duration::from_millis(250);

/// Polls `source` every `period` and applies what it yields to `user_id`'s
/// session.
pub fn start_inbound_pump(
    state: AppState,
    user_id: EmployeeId,
    mut source: Box<dyn InboundSource>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            user_id = %user_id,
            interval_ms = period.as_millis(),
            "Inbound pump started"
        );
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            let now = state.clock.now();
            let Some(event) = source.poll(now) else {
                continue;
            };
            apply_inbound(&state, user_id, event).await;
        }
    })
}

/// Applies one inbound event under the registry lock.
pub async fn apply_inbound(state: &AppState, user_id: EmployeeId, event: InboundEvent) {
    let mut sessions = state.sessions.lock().await;
    let outcome = sessions.session_mut(user_id).receive(event);
    drop(sessions);

    match outcome {
        Ok(InboundOutcome::Delivered { message, .. }) => {
            state.broadcaster.broadcast(&LiveEvent::MessageDelivered {
                user_id: user_id.value(),
                conversation_id: message.conversation_id.value(),
                message_id: message.id.value(),
            });
        }
        Ok(InboundOutcome::Duplicate) => {
            debug!(user_id = %user_id, "Inbound delivery already applied");
        }
        Ok(InboundOutcome::Typing(indicator)) => {
            debug!(
                user_id = %user_id,
                conversation_id = %indicator.conversation_id,
                typist_id = %indicator.user_id,
                "Inbound typing"
            );
        }
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Dropped inbound event");
        }
    }
}

/// Clears typing indicators whose deadline has passed, in every session.
pub fn start_typing_sweeper(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TYPING_SWEEP_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            sweep_typing(&state).await;
        }
    })
}

/// Runs one sweep and returns what expired.
pub async fn sweep_typing(state: &AppState) -> Vec<(EmployeeId, TypingIndicator)> {
    let expired = state.sessions.lock().await.expire_typing_all();
    for (user_id, indicator) in &expired {
        debug!(
            user_id = %user_id,
            conversation_id = %indicator.conversation_id,
            typist_id = %indicator.user_id,
            "Typing indicator expired"
        );
        state.broadcaster.broadcast(&LiveEvent::TypingExpired {
            user_id: user_id.value(),
            conversation_id: indicator.conversation_id.value(),
            typist_id: indicator.user_id.value(),
        });
    }
    expired
}
