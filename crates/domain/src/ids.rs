// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed identifiers.
//!
//! Every entity is keyed by a store-assigned numeric identifier. The
//! newtypes keep an employee id from being passed where a conversation id
//! is expected; on the wire they are plain integers.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifies an employee (and, for messaging, a user).
    EmployeeId
);
entity_id!(
    /// Identifies a department.
    DepartmentId
);
entity_id!(
    /// Identifies a leave request.
    LeaveRequestId
);
entity_id!(
    /// Identifies a conversation.
    ConversationId
);
entity_id!(
    /// Identifies a message.
    MessageId
);
entity_id!(
    /// Identifies a notification.
    NotificationId
);
