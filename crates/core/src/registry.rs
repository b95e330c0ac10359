// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::messaging::MessagingSession;
use hrdesk_domain::{EmployeeId, TypingIndicator};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Messaging sessions keyed by user, created on first use.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<EmployeeId, MessagingSession>,
    clock: Arc<dyn Clock>,
}

impl SessionRegistry {
    /// Creates an empty registry whose sessions share `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: HashMap::new(),
            clock,
        }
    }

    /// Returns the session for `user_id` if one exists.
    #[must_use]
    pub fn session(&self, user_id: EmployeeId) -> Option<&MessagingSession> {
        self.sessions.get(&user_id)
    }

    /// Returns the session for `user_id`, creating it if needed.
    pub fn session_mut(&mut self, user_id: EmployeeId) -> &mut MessagingSession {
        let clock: &Arc<dyn Clock> = &self.clock;
        self.sessions.entry(user_id).or_insert_with(|| {
            debug!(user_id = %user_id, "Opened messaging session");
            MessagingSession::new(user_id, Arc::clone(clock))
        })
    }

    /// Sweeps expired typing indicators out of every session.
    pub fn expire_typing_all(&mut self) -> Vec<(EmployeeId, TypingIndicator)> {
        let mut expired: Vec<(EmployeeId, TypingIndicator)> = Vec::new();
        for (user_id, session) in &mut self.sessions {
            expired.extend(session.expire_typing().into_iter().map(|t| (*user_id, t)));
        }
        expired.sort_by_key(|(user_id, t)| (*user_id, t.conversation_id, t.user_id));
        expired
    }

    /// Number of users with an open session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session has been opened yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drops every session.
    pub fn reset(&mut self) {
        self.sessions.clear();
    }
}
