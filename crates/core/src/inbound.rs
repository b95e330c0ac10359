// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inbound traffic for a messaging session.
//!
//! A real transport and the simulated generator both implement
//! [`InboundSource`]; the session applies whatever they yield through
//! [`crate::MessagingSession::receive`].

use hrdesk_domain::{ConversationId, EmployeeId, MessageKind};
use time::{Duration, OffsetDateTime};

/// How often the server polls an inbound source.
pub const SIMULATED_INBOUND_INTERVAL: Duration = Duration::seconds(5);

/// Chance that a single poll of [`SimulatedInbound`] yields a message.
pub const SIMULATED_INBOUND_PROBABILITY: f64 = 0.10;

const DEFAULT_REPLIES: [&str; 5] = [
    "Thanks, I'll take a look.",
    "Sounds good to me.",
    "Can we talk about this tomorrow?",
    "Got it, will update the team.",
    "Let me check and get back to you.",
];

/// A message delivered by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Transport-unique id used for de-duplication.
    pub delivery_id: String,
    /// Conversation the message belongs to.
    pub conversation_id: ConversationId,
    /// Employee who wrote the message.
    pub sender_id: EmployeeId,
    /// Display name used in the notification title.
    pub sender_name: String,
    /// Message body.
    pub content: String,
    /// Message kind.
    pub kind: MessageKind,
    /// When the sender sent it.
    pub sent_at: OffsetDateTime,
}

/// Something that happened elsewhere and must be applied to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Message(InboundMessage),
    Typing {
        conversation_id: ConversationId,
        user_id: EmployeeId,
    },
}

/// A source of inbound events, polled on a fixed interval.
pub trait InboundSource: Send {
    /// Returns the next event, if any, for this tick.
    fn poll(&mut self, now: OffsetDateTime) -> Option<InboundEvent>;
}

/// Emits canned replies into one conversation at random.
pub struct SimulatedInbound {
    conversation_id: ConversationId,
    sender_id: EmployeeId,
    sender_name: String,
    probability: f64,
    replies: Vec<String>,
    cursor: usize,
    sequence: u64,
    roll: Box<dyn FnMut() -> f64 + Send>,
}

impl SimulatedInbound {
    /// Creates a generator posting into `conversation_id` as `sender_id`.
    #[must_use]
    pub fn new(conversation_id: ConversationId, sender_id: EmployeeId, sender_name: &str) -> Self {
        Self {
            conversation_id,
            sender_id,
            sender_name: sender_name.to_string(),
            probability: SIMULATED_INBOUND_PROBABILITY,
            replies: DEFAULT_REPLIES.iter().map(|r| (*r).to_string()).collect(),
            cursor: 0,
            sequence: 0,
            roll: Box::new(rand::random::<f64>),
        }
    }

    /// Replaces the random roll. The source fires when the roll is below
    /// the configured probability.
    #[must_use]
    pub fn with_roll(mut self, roll: impl FnMut() -> f64 + Send + 'static) -> Self {
        self.roll = Box::new(roll);
        self
    }

    /// Overrides the per-poll probability, clamped to `0.0..=1.0`. A
    /// non-finite value falls back to [`SIMULATED_INBOUND_PROBABILITY`].
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            SIMULATED_INBOUND_PROBABILITY
        };
        self
    }

    /// Replaces the reply pool. An empty pool keeps the default one.
    #[must_use]
    pub fn with_replies(mut self, replies: Vec<String>) -> Self {
        if !replies.is_empty() {
            self.replies = replies;
            self.cursor = 0;
        }
        self
    }

    fn next_reply(&mut self) -> String {
        let reply: String = self.replies[self.cursor % self.replies.len()].clone();
        self.cursor = (self.cursor + 1) % self.replies.len();
        reply
    }
}

impl std::fmt::Debug for SimulatedInbound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedInbound")
            .field("conversation_id", &self.conversation_id)
            .field("sender_id", &self.sender_id)
            .field("probability", &self.probability)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl InboundSource for SimulatedInbound {
    fn poll(&mut self, now: OffsetDateTime) -> Option<InboundEvent> {
        if (self.roll)() >= self.probability {
            return None;
        }

        self.sequence += 1;
        let content: String = self.next_reply();
        Some(InboundEvent::Message(InboundMessage {
            delivery_id: format!("sim-{}-{}", self.conversation_id, self.sequence),
            conversation_id: self.conversation_id,
            sender_id: self.sender_id,
            sender_name: self.sender_name.clone(),
            content,
            kind: MessageKind::Text,
            sent_at: now,
        }))
    }
}
