//! The session-messaging seam.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

/// Opaque identifier of an operator session.
///
/// The broadcaster never interprets the contents; it only stores ids in the
/// subscriber registry and hands them back to the [`Messenger`]. Cloning is
/// cheap (shared string).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(Arc<str>);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        SessionId(Arc::from(id))
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        SessionId(Arc::from(id))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of one delivery attempt.
///
/// `SessionNotFound` is an expected state, not a failure: operators
/// disconnect whenever they like, and their registry entry is cleaned up by
/// the embedder's session-lifecycle hook, not by the broadcast cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The line was handed to the session.
    Delivered,
    /// No live session exists under this id; the recipient was skipped.
    SessionNotFound,
}

/// Hands one rendered line to one session.
///
/// Implementations wrap the proxy's in-process messaging primitive and are
/// expected to be fire-and-forget: resolve the session, push the text,
/// return. The broadcast cycle awaits each delivery in turn, so an
/// implementation that blocks will stall the whole cycle.
#[async_trait]
pub trait Messenger: Send + Sync + 'static {
    /// Attempts to show `line` to `session`.
    async fn deliver(&self, session: &SessionId, line: &str) -> DeliveryStatus;
}
