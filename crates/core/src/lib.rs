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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod directory;
mod error;
mod inbound;
mod leave_ledger;
mod messaging;
mod registry;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use clock::{Clock, ManualClock, SystemClock};
pub use directory::DirectoryStore;
pub use error::CoreError;
pub use inbound::{
    InboundEvent, InboundMessage, InboundSource, SIMULATED_INBOUND_INTERVAL,
    SIMULATED_INBOUND_PROBABILITY, SimulatedInbound,
};
pub use leave_ledger::{LeaveLedger, SubmitLeave};
pub use messaging::{DELIVERY_WINDOW, InboundOutcome, MessagingSession, TYPING_TIMEOUT};
pub use registry::SessionRegistry;
