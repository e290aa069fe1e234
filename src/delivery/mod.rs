//! Delivery of rendered lines to operator sessions.
//!
//! The core never talks to the network itself; it hands each rendered line
//! to a [`Messenger`] the embedding proxy provides. Nothing flows back:
//! a miss is a per-recipient skip, never a registry mutation.

mod messenger;

pub use messenger::{DeliveryStatus, Messenger, SessionId};
