//! # The subscriber registry.
//!
//! Holds the set of sessions that opted into the status line. Mutated by
//! operator command handlers while broadcasts are in flight, so every
//! operation goes through one lock; the engine iterates a copied snapshot,
//! never the live set, which keeps subscribe/unsubscribe bounded even while
//! a broadcast is delivering.
//!
//! Membership changes become visible to the next broadcast that snapshots
//! after the change lands. Delivery misses never mutate the set; removal on
//! disconnect is the embedder's session-lifecycle hook calling
//! [`unsubscribe`](SubscriberRegistry::unsubscribe).

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::delivery::SessionId;

/// Concurrent set of subscribed session ids.
///
/// All operations are total: subscribing twice or unsubscribing a stranger
/// is a no-op, reported through the return value rather than an error.
#[derive(Clone, Default)]
pub struct SubscriberRegistry {
    inner: Arc<RwLock<HashSet<SessionId>>>,
}

impl SubscriberRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session. Returns `false` if it was already subscribed.
    pub async fn subscribe(&self, session: SessionId) -> bool {
        self.inner.write().await.insert(session)
    }

    /// Removes a session. Returns `false` if it was not subscribed.
    pub async fn unsubscribe(&self, session: &SessionId) -> bool {
        self.inner.write().await.remove(session)
    }

    /// Whether a session is currently subscribed.
    pub async fn is_subscribed(&self, session: &SessionId) -> bool {
        self.inner.read().await.contains(session)
    }

    /// Point-in-time copy of the membership for one broadcast.
    ///
    /// The copy is taken under the lock and iterated outside it, so a
    /// mutation mid-broadcast either fully precedes or fully follows the
    /// snapshot.
    pub async fn snapshot(&self) -> Vec<SessionId> {
        self.inner.read().await.iter().cloned().collect()
    }

    /// Number of subscribed sessions.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// True if nobody is subscribed.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribe_is_idempotent() {
        let registry = SubscriberRegistry::new();
        assert!(registry.subscribe("ops-1".into()).await);
        assert!(!registry.subscribe("ops-1".into()).await);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_unsubscribe_absent_is_noop() {
        let registry = SubscriberRegistry::new();
        assert!(!registry.unsubscribe(&"ghost".into()).await);
        assert!(registry.is_empty().await);

        registry.subscribe("ops-1".into()).await;
        assert!(registry.unsubscribe(&"ops-1".into()).await);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let registry = SubscriberRegistry::new();
        registry.subscribe("a".into()).await;
        registry.subscribe("b".into()).await;

        let snapshot = registry.snapshot().await;
        registry.unsubscribe(&"a".into()).await;

        // The earlier snapshot is unaffected by the mutation.
        assert_eq!(snapshot.len(), 2);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_churn_settles_to_net_effect() {
        let registry = SubscriberRegistry::new();
        let mut joins = Vec::new();

        for i in 0..16 {
            let reg = registry.clone();
            joins.push(tokio::spawn(async move {
                let id: SessionId = format!("ops-{i}").into();
                for _ in 0..50 {
                    reg.subscribe(id.clone()).await;
                    reg.snapshot().await;
                    reg.unsubscribe(&id).await;
                }
                reg.subscribe(id).await;
            }));
        }
        for join in joins {
            join.await.expect("churn task panicked");
        }

        // Every task ends on a final subscribe.
        assert_eq!(registry.len().await, 16);
    }
}
