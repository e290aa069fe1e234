//! Read-only trait seams for the subsystems that own the live counters.
//!
//! Each trait covers one collaborator. The methods are synchronous: every
//! figure is a counter or cached size whose owner handles its own
//! synchronization, so reads are cheap and never block on I/O. A single
//! object may implement several of these traits and be handed to
//! [`MetricSources`] multiple times.

use std::sync::Arc;

use crate::error::MetricError;
use crate::metrics::HeapUsage;

/// Counter key under which the aggregate connection total is kept.
pub const TOTAL_COUNTER_KEY: &str = "total";

/// Size of the verification queue.
pub trait QueueSource: Send + Sync + 'static {
    /// Number of connections waiting to be verified.
    fn queued(&self) -> Result<u64, MetricError>;
}

/// Size of the set of connections currently being verified.
pub trait VerifyingSource: Send + Sync + 'static {
    /// Number of in-flight verifications.
    fn verifying(&self) -> Result<u64, MetricError>;
}

/// Size of the set of verified connections.
pub trait VerifiedSource: Send + Sync + 'static {
    /// Number of connections that passed verification.
    fn verified(&self) -> Result<u64, MetricError>;
}

/// Size of the blacklist cache.
pub trait BlacklistSource: Send + Sync + 'static {
    /// Estimated number of blacklisted addresses.
    ///
    /// The backing cache trades exactness for speed; treat the value as
    /// approximate, unlike the other counts.
    fn blacklisted_estimate(&self) -> Result<u64, MetricError>;
}

/// Keyed store of aggregate counters.
pub trait CounterStore: Send + Sync + 'static {
    /// Value under `key`, or `default` when the key has never been written.
    fn get(&self, key: &str, default: u64) -> Result<u64, MetricError>;
}

/// Process memory figures.
pub trait MemorySource: Send + Sync + 'static {
    /// Current heap usage. `used` is derived as `total - free`.
    fn heap(&self) -> Result<HeapUsage, MetricError>;
}

/// The full set of collaborator handles the engine reads each cycle.
///
/// Cloning is cheap; the handles are shared references into the embedding
/// proxy's subsystems.
#[derive(Clone)]
pub struct MetricSources {
    /// Verification queue.
    pub queue: Arc<dyn QueueSource>,
    /// In-flight verification set.
    pub verifying: Arc<dyn VerifyingSource>,
    /// Verified set.
    pub verified: Arc<dyn VerifiedSource>,
    /// Blacklist cache (size-estimating).
    pub blacklist: Arc<dyn BlacklistSource>,
    /// Aggregate counter store, read under [`TOTAL_COUNTER_KEY`].
    pub counters: Arc<dyn CounterStore>,
    /// Process memory figures.
    pub memory: Arc<dyn MemorySource>,
}
