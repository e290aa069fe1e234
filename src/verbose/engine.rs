//! # The broadcast engine.
//!
//! One [`tick`](BroadcastEngine::tick) is one broadcast cycle: fetch the
//! layout, snapshot the registry and the metrics, render a single line, and
//! hand it to every subscribed session. The engine owns the registry and
//! the animation cycle; everything else is an injected collaborator.
//!
//! ## Failure discipline
//! Nothing a collaborator does can break the driving scheduler:
//! - layout unavailable → the whole cycle is skipped before any delivery
//!   and before the animation advances;
//! - one metric unavailable → that field renders as zero, the rest are live;
//! - a session disappeared → that recipient is skipped, the set is not
//!   touched.
//!
//! A delivered line is always fully rendered; there is no path that sends a
//! half-substituted layout.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::delivery::{DeliveryStatus, Messenger, SessionId};
use crate::format::{format_count, format_memory};
use crate::metrics::{MetricSources, MetricsSnapshot};
use crate::template::{render, RenderedValues};
use crate::verbose::{AnimationCycle, ConfigSource, SubscriberRegistry};

/// What one broadcast cycle did.
///
/// Informational only. `tick()` never returns an error; a cycle that could
/// not run reports itself as skipped and the next one proceeds normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A broadcast ran: the line reached `delivered` sessions and `missed`
    /// subscribers had no live session.
    Broadcast { delivered: usize, missed: usize },
    /// The cycle was skipped before any delivery (layout unavailable).
    Skipped,
}

impl TickOutcome {
    /// True if the cycle was skipped without delivering anything.
    pub fn is_skipped(&self) -> bool {
        matches!(self, TickOutcome::Skipped)
    }
}

/// Periodic status-line broadcaster.
///
/// Constructed with explicit handles to every collaborator it reads, which
/// makes the dependencies visible at the call site and substitutable with
/// test doubles. The engine holds no background tasks; whoever owns it
/// calls [`tick`](Self::tick) on their own cadence (or wraps it in a
/// [`VerboseRunner`](crate::VerboseRunner)).
pub struct BroadcastEngine {
    config: Arc<dyn ConfigSource>,
    sources: MetricSources,
    messenger: Arc<dyn Messenger>,
    registry: SubscriberRegistry,
    animation: AnimationCycle,
}

impl BroadcastEngine {
    /// Creates an engine with an empty subscriber set.
    pub fn new(
        config: Arc<dyn ConfigSource>,
        sources: MetricSources,
        messenger: Arc<dyn Messenger>,
        animation: AnimationCycle,
    ) -> Self {
        Self {
            config,
            sources,
            messenger,
            registry: SubscriberRegistry::new(),
            animation,
        }
    }

    /// The subscriber registry, for session-lifecycle hooks and commands.
    pub fn registry(&self) -> &SubscriberRegistry {
        &self.registry
    }

    /// Subscribes a session. Returns `false` if it was already subscribed.
    pub async fn subscribe(&self, session: SessionId) -> bool {
        self.registry.subscribe(session).await
    }

    /// Unsubscribes a session. Returns `false` if it was not subscribed.
    pub async fn unsubscribe(&self, session: &SessionId) -> bool {
        self.registry.unsubscribe(session).await
    }

    /// Runs one broadcast cycle.
    ///
    /// Delivery happens inline on the caller's context; with zero
    /// subscribers the cycle still renders and still advances the
    /// animation, so every viewer sees the same frame sequence no matter
    /// when they join.
    pub async fn tick(&self) -> TickOutcome {
        let layout = match self.config.action_bar_layout() {
            Ok(layout) => layout,
            Err(err) => {
                warn!(error = %err, label = err.as_label(), "status broadcast skipped");
                return TickOutcome::Skipped;
            }
        };

        let recipients = self.registry.snapshot().await;
        let snapshot = MetricsSnapshot::collect(&self.sources);
        let line = render(&layout, &self.rendered_values(&snapshot));

        let mut delivered = 0;
        let mut missed = 0;
        for session in &recipients {
            match self.messenger.deliver(session, &line).await {
                DeliveryStatus::Delivered => delivered += 1,
                DeliveryStatus::SessionNotFound => {
                    debug!(session = %session, "status line dropped, session is gone");
                    missed += 1;
                }
            }
        }

        TickOutcome::Broadcast { delivered, missed }
    }

    /// Formats one cycle's snapshot, advancing the animation one frame.
    fn rendered_values(&self, snapshot: &MetricsSnapshot) -> RenderedValues {
        RenderedValues {
            queued: format_count(snapshot.queued),
            verifying: format_count(snapshot.verifying),
            verified: format_count(snapshot.verified),
            blacklisted: format_count(snapshot.blacklisted),
            total: format_count(snapshot.total),
            used_memory: format_memory(snapshot.memory.used()),
            free_memory: format_memory(snapshot.memory.free),
            total_memory: format_memory(snapshot.memory.total),
            max_memory: format_memory(snapshot.memory.max),
            animation: self.animation.next().to_string(),
        }
    }
}
