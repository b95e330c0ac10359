// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::error::CoreError;
use crate::inbound::{InboundEvent, InboundMessage};
use hrdesk_domain::{
    Attachment, Conversation, ConversationId, ConversationKind, DomainError, EmployeeId, Message,
    MessageId, MessageKind, Notification, NotificationId, NotificationKind, Participation,
    TypingIndicator,
};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

/// How long a typing indicator stays up without a refresh.
pub const TYPING_TIMEOUT: Duration = Duration::seconds(3);

/// Number of recent inbound delivery ids remembered for deduplication.
/// A delivery older than this window is treated as new if replayed.
pub const DELIVERY_WINDOW: usize = 1024;

/// Result of applying an inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundOutcome {
    /// A new message was appended.
    Delivered {
        message: Message,
        notification: Option<Notification>,
    },
    /// The delivery id had already been applied; nothing changed.
    Duplicate,
    /// A remote participant's typing indicator was refreshed.
    Typing(TypingIndicator),
}

/// One user's view of their conversations, messages and notifications.
#[derive(Debug)]
pub struct MessagingSession {
    user_id: EmployeeId,
    conversations: Vec<Conversation>,
    messages: HashMap<ConversationId, Vec<Message>>,
    notifications: Vec<Notification>,
    unread_notifications: u32,
    typing: HashMap<(ConversationId, EmployeeId), TypingIndicator>,
    seen_deliveries: HashSet<String>,
    /// Insertion order of `seen_deliveries`, oldest first.
    delivery_order: VecDeque<String>,
    next_conversation_id: i64,
    next_message_id: i64,
    next_notification_id: i64,
    clock: Arc<dyn Clock>,
}

impl MessagingSession {
    /// Creates an empty session for `user_id`.
    #[must_use]
    pub fn new(user_id: EmployeeId, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_id,
            conversations: Vec::new(),
            messages: HashMap::new(),
            notifications: Vec::new(),
            unread_notifications: 0,
            typing: HashMap::new(),
            seen_deliveries: HashSet::new(),
            delivery_order: VecDeque::new(),
            next_conversation_id: 1,
            next_message_id: 1,
            next_notification_id: 1,
            clock,
        }
    }

    /// The user this session belongs to.
    #[must_use]
    pub const fn user_id(&self) -> EmployeeId {
        self.user_id
    }

    /// Opens a conversation. The session's user is added if absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidParticipants` if a direct conversation
    /// does not end up with exactly two distinct participants.
    pub fn create_conversation(
        &mut self,
        kind: ConversationKind,
        participants: &[EmployeeId],
        name: Option<String>,
    ) -> Result<Conversation, CoreError> {
        let mut members: Vec<EmployeeId> = participants.to_vec();
        if !members.contains(&self.user_id) {
            members.insert(0, self.user_id);
        }

        let conversation: Conversation = Conversation::new(
            ConversationId::new(self.next_conversation_id),
            kind,
            name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            &members,
            self.clock.now(),
        )?;
        self.next_conversation_id += 1;
        self.messages.insert(conversation.id, Vec::new());
        self.conversations.push(conversation.clone());

        info!(
            user_id = %self.user_id,
            conversation_id = %conversation.id,
            participants = conversation.participants.len(),
            "Created conversation"
        );
        Ok(conversation)
    }

    /// Looks up a conversation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversationNotFound` if `id` is unknown.
    pub fn get_conversation(&self, id: ConversationId) -> Result<&Conversation, CoreError> {
        self.conversations
            .iter()
            .find(|c| c.id == id)
            .ok_or(CoreError::DomainViolation(
                DomainError::ConversationNotFound(id),
            ))
    }

    /// The session user's relationship to a conversation. Unknown
    /// conversations count as not joined.
    #[must_use]
    pub fn participation(&self, id: ConversationId) -> Participation {
        self.conversations
            .iter()
            .find(|c| c.id == id)
            .map_or(Participation::NotJoined, |c| c.participation(self.user_id))
    }

    /// Non-archived conversations, pinned first, then most recently
    /// updated.
    #[must_use]
    pub fn list_conversations(&self) -> Vec<&Conversation> {
        let mut listed: Vec<&Conversation> =
            self.conversations.iter().filter(|c| !c.archived).collect();
        listed.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then_with(|| b.updated_at.cmp(&a.updated_at))
        });
        listed
    }

    /// Archived conversations, most recently updated first.
    #[must_use]
    pub fn list_archived(&self) -> Vec<&Conversation> {
        let mut listed: Vec<&Conversation> =
            self.conversations.iter().filter(|c| c.archived).collect();
        listed.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        listed
    }

    /// Messages of a conversation in send order; empty when unknown.
    #[must_use]
    pub fn messages(&self, id: ConversationId) -> &[Message] {
        self.messages.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Appends a message from the session user.
    ///
    /// The sender's own message is stored as read and clears their typing
    /// indicator in that conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user does not participate in the conversation
    /// - Content is blank and there are no attachments
    pub fn send_message(
        &mut self,
        conversation_id: ConversationId,
        content: &str,
        kind: MessageKind,
        attachments: Vec<Attachment>,
    ) -> Result<Message, CoreError> {
        self.ensure_joined(conversation_id, self.user_id)?;
        let content: &str = content.trim();
        if content.is_empty() && attachments.is_empty() {
            return Err(CoreError::DomainViolation(DomainError::EmptyMessage));
        }

        let now: OffsetDateTime = self.clock.now();
        let message: Message = Message {
            id: MessageId::new(self.next_message_id),
            conversation_id,
            sender_id: self.user_id,
            content: content.to_string(),
            sent_at: now,
            kind,
            attachments,
            read: true,
            edited_at: None,
        };
        self.next_message_id += 1;
        self.append(message.clone(), now, false)?;
        self.typing.remove(&(conversation_id, self.user_id));

        info!(
            user_id = %self.user_id,
            conversation_id = %conversation_id,
            message_id = %message.id,
            "Sent message"
        );
        Ok(message)
    }

    /// Marks one message read and returns the conversation's remaining
    /// unread count. Repeating the call changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversation or message does not exist.
    pub fn mark_read(
        &mut self,
        conversation_id: ConversationId,
        message_id: MessageId,
    ) -> Result<u32, CoreError> {
        let index: usize = self.conversation_index(conversation_id)?;
        let message: &mut Message = self
            .messages
            .get_mut(&conversation_id)
            .and_then(|list| list.iter_mut().find(|m| m.id == message_id))
            .ok_or(CoreError::DomainViolation(DomainError::MessageNotFound {
                conversation_id,
                message_id,
            }))?;

        let conversation: &mut Conversation = &mut self.conversations[index];
        if message.read {
            debug!(
                conversation_id = %conversation_id,
                message_id = %message_id,
                "Message already read"
            );
        } else {
            message.read = true;
            conversation.unread_count = conversation.unread_count.saturating_sub(1);
            debug!(
                conversation_id = %conversation_id,
                message_id = %message_id,
                unread = conversation.unread_count,
                "Marked message read"
            );
        }
        Ok(conversation.unread_count)
    }

    /// Marks every message in a conversation read.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversationNotFound` if `id` is unknown.
    pub fn mark_conversation_read(&mut self, id: ConversationId) -> Result<(), CoreError> {
        let index: usize = self.conversation_index(id)?;
        if let Some(list) = self.messages.get_mut(&id) {
            for message in list.iter_mut() {
                message.read = true;
            }
        }
        self.conversations[index].unread_count = 0;
        debug!(conversation_id = %id, "Marked conversation read");
        Ok(())
    }

    /// Pins or unpins a conversation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversationNotFound` if `id` is unknown.
    pub fn set_pinned(&mut self, id: ConversationId, pinned: bool) -> Result<(), CoreError> {
        let index: usize = self.conversation_index(id)?;
        self.conversations[index].pinned = pinned;
        Ok(())
    }

    /// Archives or restores a conversation. Messages are kept either way.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversationNotFound` if `id` is unknown.
    pub fn set_archived(&mut self, id: ConversationId, archived: bool) -> Result<(), CoreError> {
        let index: usize = self.conversation_index(id)?;
        self.conversations[index].archived = archived;
        info!(conversation_id = %id, archived, "Changed conversation archive state");
        Ok(())
    }

    /// Shows the session user as typing, restarting the expiry window.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not participate in the conversation.
    pub fn start_typing(&mut self, id: ConversationId) -> Result<TypingIndicator, CoreError> {
        self.ensure_joined(id, self.user_id)?;
        Ok(self.upsert_typing(id, self.user_id))
    }

    /// Clears the session user's typing indicator. Returns whether one was
    /// present.
    pub fn stop_typing(&mut self, id: ConversationId) -> bool {
        self.typing.remove(&(id, self.user_id)).is_some()
    }

    /// Unexpired typing indicators for a conversation, ordered by user.
    #[must_use]
    pub fn typing_indicators(&self, id: ConversationId) -> Vec<TypingIndicator> {
        let now: OffsetDateTime = self.clock.now();
        let mut active: Vec<TypingIndicator> = self
            .typing
            .values()
            .filter(|t| t.conversation_id == id && t.expires_at > now)
            .copied()
            .collect();
        active.sort_by_key(|t| t.user_id);
        active
    }

    /// Removes and returns every indicator whose deadline has passed.
    pub fn expire_typing(&mut self) -> Vec<TypingIndicator> {
        let now: OffsetDateTime = self.clock.now();
        let mut expired: Vec<TypingIndicator> = Vec::new();
        self.typing.retain(|_, indicator| {
            if now >= indicator.expires_at {
                expired.push(*indicator);
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|t| (t.conversation_id, t.user_id));
        if !expired.is_empty() {
            debug!(
                user_id = %self.user_id,
                expired = expired.len(),
                "Expired typing indicators"
            );
        }
        expired
    }

    /// Notifications, newest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().rev().collect()
    }

    /// Number of unread notifications.
    #[must_use]
    pub const fn unread_notification_count(&self) -> u32 {
        self.unread_notifications
    }

    /// Adds an unread notification for the session user.
    pub fn notify(
        &mut self,
        kind: NotificationKind,
        title: &str,
        body: &str,
        conversation_id: Option<ConversationId>,
        message_id: Option<MessageId>,
    ) -> Notification {
        let notification: Notification = Notification {
            id: NotificationId::new(self.next_notification_id),
            user_id: self.user_id,
            kind,
            title: title.to_string(),
            body: body.to_string(),
            read: false,
            created_at: self.clock.now(),
            conversation_id,
            message_id,
        };
        self.next_notification_id += 1;
        self.unread_notifications += 1;
        self.notifications.push(notification.clone());
        notification
    }

    /// Marks a notification read and returns the remaining unread count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotificationNotFound` if `id` is unknown.
    pub fn mark_notification_as_read(&mut self, id: NotificationId) -> Result<u32, CoreError> {
        let notification: &mut Notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(CoreError::DomainViolation(
                DomainError::NotificationNotFound(id),
            ))?;

        if !notification.read {
            notification.read = true;
            self.unread_notifications = self.unread_notifications.saturating_sub(1);
        }
        Ok(self.unread_notifications)
    }

    /// Marks every notification read.
    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread_notifications = 0;
    }

    /// Applies an event delivered by an inbound source.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotJoined` if the session user or the remote
    /// sender does not participate in the conversation.
    pub fn receive(&mut self, event: InboundEvent) -> Result<InboundOutcome, CoreError> {
        match event {
            InboundEvent::Message(inbound) => self.receive_message(inbound),
            InboundEvent::Typing {
                conversation_id,
                user_id,
            } => {
                self.ensure_joined(conversation_id, self.user_id)?;
                self.ensure_joined(conversation_id, user_id)?;
                Ok(InboundOutcome::Typing(
                    self.upsert_typing(conversation_id, user_id),
                ))
            }
        }
    }

    /// Drops all conversations, messages, notifications and indicators.
    pub fn reset(&mut self) {
        *self = Self::new(self.user_id, Arc::clone(&self.clock));
    }

    fn receive_message(&mut self, inbound: InboundMessage) -> Result<InboundOutcome, CoreError> {
        if self.seen_deliveries.contains(&inbound.delivery_id) {
            debug!(
                delivery_id = %inbound.delivery_id,
                "Ignoring duplicate delivery"
            );
            return Ok(InboundOutcome::Duplicate);
        }
        self.ensure_joined(inbound.conversation_id, self.user_id)?;
        self.ensure_joined(inbound.conversation_id, inbound.sender_id)?;

        let message: Message = Message {
            id: MessageId::new(self.next_message_id),
            conversation_id: inbound.conversation_id,
            sender_id: inbound.sender_id,
            content: inbound.content,
            sent_at: inbound.sent_at,
            kind: inbound.kind,
            attachments: Vec::new(),
            read: inbound.sender_id == self.user_id,
            edited_at: None,
        };
        self.next_message_id += 1;
        let unread: bool = !message.read;
        self.append(message.clone(), self.clock.now(), unread)?;
        self.typing
            .remove(&(inbound.conversation_id, inbound.sender_id));
        self.remember_delivery(&inbound.delivery_id);

        let notification: Option<Notification> = unread.then(|| {
            self.notify(
                NotificationKind::Message,
                &format!("New message from {}", inbound.sender_name),
                &message.content,
                Some(message.conversation_id),
                Some(message.id),
            )
        });

        info!(
            user_id = %self.user_id,
            conversation_id = %message.conversation_id,
            message_id = %message.id,
            delivery_id = %inbound.delivery_id,
            "Received message"
        );
        Ok(InboundOutcome::Delivered {
            message,
            notification,
        })
    }

    fn remember_delivery(&mut self, delivery_id: &str) {
        if !self.seen_deliveries.insert(delivery_id.to_string()) {
            return;
        }
        self.delivery_order.push_back(delivery_id.to_string());
        while self.delivery_order.len() > DELIVERY_WINDOW {
            if let Some(oldest) = self.delivery_order.pop_front() {
                self.seen_deliveries.remove(&oldest);
            }
        }
    }

    fn append(
        &mut self,
        message: Message,
        now: OffsetDateTime,
        unread: bool,
    ) -> Result<(), CoreError> {
        let index: usize = self.conversation_index(message.conversation_id)?;
        let conversation: &mut Conversation = &mut self.conversations[index];
        conversation.last_message_id = Some(message.id);
        conversation.updated_at = now;
        if unread {
            conversation.unread_count += 1;
        }
        self.messages
            .entry(message.conversation_id)
            .or_default()
            .push(message);
        Ok(())
    }

    fn upsert_typing(&mut self, id: ConversationId, user_id: EmployeeId) -> TypingIndicator {
        let now: OffsetDateTime = self.clock.now();
        let indicator: TypingIndicator = TypingIndicator {
            conversation_id: id,
            user_id,
            started_at: now,
            expires_at: now + TYPING_TIMEOUT,
        };
        self.typing.insert((id, user_id), indicator);
        indicator
    }

    // Unknown conversations are reported as not joined.
    fn ensure_joined(&self, id: ConversationId, user_id: EmployeeId) -> Result<(), CoreError> {
        let joined: bool = self
            .conversations
            .iter()
            .any(|c| c.id == id && c.has_participant(user_id));
        if joined {
            Ok(())
        } else {
            Err(CoreError::DomainViolation(DomainError::NotJoined {
                conversation_id: id,
                user_id,
            }))
        }
    }

    fn conversation_index(&self, id: ConversationId) -> Result<usize, CoreError> {
        self.conversations
            .iter()
            .position(|c| c.id == id)
            .ok_or(CoreError::DomainViolation(
                DomainError::ConversationNotFound(id),
            ))
    }
}
