// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversations, messages and notifications.

use crate::error::DomainError;
use crate::ids::{ConversationId, EmployeeId, MessageId, NotificationId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Whether a conversation is one-to-one or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationKind {
    /// Exactly two participants.
    Direct,
    /// Any number of participants.
    Group,
}

impl ConversationKind {
    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Group => "group",
        }
    }
}

impl FromStr for ConversationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "group" => Ok(Self::Group),
            _ => Err(DomainError::InvalidParticipants(format!(
                "unknown conversation kind '{s}'"
            ))),
        }
    }
}

/// The current user's relationship to a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participation {
    /// The user is not a participant.
    NotJoined,
    /// The user participates and the conversation is listed.
    Joined,
    /// The user participates but has archived the conversation.
    Archived,
}

/// A conversation as seen by one user's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Session-assigned identifier.
    pub id: ConversationId,
    /// Direct or group.
    pub kind: ConversationKind,
    /// Display name, usually only set for groups.
    pub name: Option<String>,
    /// Participants in join order, without duplicates.
    pub participants: Vec<EmployeeId>,
    /// The most recent message.
    pub last_message_id: Option<MessageId>,
    /// Messages not yet read by the session user.
    pub unread_count: u32,
    /// Pinned conversations list first.
    pub pinned: bool,
    /// Archived conversations are hidden from the default listing.
    pub archived: bool,
    /// When the conversation was created.
    pub created_at: OffsetDateTime,
    /// When the conversation last changed.
    pub updated_at: OffsetDateTime,
}

impl Conversation {
    /// Creates a conversation after validating its participants.
    ///
    /// Duplicate participants are dropped, keeping first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidParticipants` if:
    /// - There are no participants
    /// - A direct conversation does not have exactly two distinct participants
    pub fn new(
        id: ConversationId,
        kind: ConversationKind,
        name: Option<String>,
        participants: &[EmployeeId],
        now: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        let mut unique: Vec<EmployeeId> = Vec::with_capacity(participants.len());
        for participant in participants {
            if !unique.contains(participant) {
                unique.push(*participant);
            }
        }

        if unique.is_empty() {
            return Err(DomainError::InvalidParticipants(String::from(
                "a conversation needs at least one participant",
            )));
        }
        if kind == ConversationKind::Direct && unique.len() != 2 {
            return Err(DomainError::InvalidParticipants(format!(
                "a direct conversation needs exactly 2 participants, got {}",
                unique.len()
            )));
        }

        Ok(Self {
            id,
            kind,
            name,
            participants: unique,
            last_message_id: None,
            unread_count: 0,
            pinned: false,
            archived: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns whether `user_id` participates.
    #[must_use]
    pub fn has_participant(&self, user_id: EmployeeId) -> bool {
        self.participants.contains(&user_id)
    }

    /// Returns `user_id`'s relationship to this conversation.
    #[must_use]
    pub fn participation(&self, user_id: EmployeeId) -> Participation {
        if !self.has_participant(user_id) {
            Participation::NotJoined
        } else if self.archived {
            Participation::Archived
        } else {
            Participation::Joined
        }
    }
}

/// Payload kind of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain text.
    #[default]
    Text,
    /// Image with optional caption.
    Image,
    /// File with optional caption.
    File,
    /// System-generated notice.
    System,
}

impl MessageKind {
    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::File => "file",
            Self::System => "system",
        }
    }
}

impl FromStr for MessageKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "file" => Ok(Self::File),
            "system" => Ok(Self::System),
            _ => Err(DomainError::InvalidMessageKind(s.to_string())),
        }
    }
}

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name.
    pub name: String,
    /// Where the file can be fetched.
    pub url: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// MIME type.
    pub mime_type: String,
}

/// A message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Session-assigned identifier.
    pub id: MessageId,
    /// Owning conversation.
    pub conversation_id: ConversationId,
    /// Author.
    pub sender_id: EmployeeId,
    /// Body text.
    pub content: String,
    /// When the message was sent.
    pub sent_at: OffsetDateTime,
    /// Payload kind.
    pub kind: MessageKind,
    /// Attachments in upload order.
    pub attachments: Vec<Attachment>,
    /// Whether the session user has read it.
    pub read: bool,
    /// When the message was last edited.
    pub edited_at: Option<OffsetDateTime>,
}

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A new message arrived.
    Message,
    /// The user was mentioned.
    Mention,
    /// Someone reacted to the user's message.
    Reaction,
    /// System announcement.
    System,
}

impl NotificationKind {
    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Mention => "mention",
            Self::Reaction => "reaction",
            Self::System => "system",
        }
    }
}

/// A notification addressed to the session user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Session-assigned identifier.
    pub id: NotificationId,
    /// Recipient.
    pub user_id: EmployeeId,
    /// Category.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Whether the recipient has read it.
    pub read: bool,
    /// When it was created.
    pub created_at: OffsetDateTime,
    /// Related conversation.
    pub conversation_id: Option<ConversationId>,
    /// Related message.
    pub message_id: Option<MessageId>,
}

/// A typing indicator for one user in one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingIndicator {
    /// The conversation being typed in.
    pub conversation_id: ConversationId,
    /// The user typing.
    pub user_id: EmployeeId,
    /// When typing was last signalled.
    pub started_at: OffsetDateTime,
    /// When the indicator lapses without a fresh signal.
    pub expires_at: OffsetDateTime,
}
