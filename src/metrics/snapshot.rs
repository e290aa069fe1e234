//! One cycle's worth of metric values.

use tracing::debug;

use crate::error::MetricError;
use crate::metrics::{MetricSources, TOTAL_COUNTER_KEY};

/// Process heap figures at a point in time, in bytes.
///
/// `used` is not stored; it is always derived as `total - free` so the two
/// rendered fields can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapUsage {
    /// Bytes of committed heap not currently in use.
    pub free: u64,
    /// Bytes of heap currently committed.
    pub total: u64,
    /// Upper bound the heap may grow to. Not rendered on its own merits,
    /// only through the `%max-memory%` placeholder.
    pub max: u64,
}

impl HeapUsage {
    /// Bytes of heap in use.
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }
}

/// Read-only bundle of every figure the status line can show, pulled from
/// the collaborators at the start of a cycle.
///
/// The values come from independently-mutated subsystems, so there is no
/// cross-field consistency guarantee beyond "read back to back"; brief skew
/// between fields is expected and harmless for an operational readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Connections waiting in the verification queue.
    pub queued: u64,
    /// In-flight verifications.
    pub verifying: u64,
    /// Connections that passed verification.
    pub verified: u64,
    /// Blacklist size. Approximate: sourced from a size-estimating cache.
    pub blacklisted: u64,
    /// Aggregate total of handled connections.
    pub total: u64,
    /// Process memory figures.
    pub memory: HeapUsage,
}

impl MetricsSnapshot {
    /// Reads every field from its collaborator.
    ///
    /// A failed read is logged at debug level and the field falls back to
    /// zero; partial data beats no data for an operational status line.
    pub fn collect(sources: &MetricSources) -> Self {
        Self {
            queued: read_or_zero("queue", sources.queue.queued()),
            verifying: read_or_zero("verifying", sources.verifying.verifying()),
            verified: read_or_zero("verified", sources.verified.verified()),
            blacklisted: read_or_zero("blacklist", sources.blacklist.blacklisted_estimate()),
            total: read_or_zero("counters", sources.counters.get(TOTAL_COUNTER_KEY, 0)),
            memory: match sources.memory.heap() {
                Ok(heap) => heap,
                Err(err) => {
                    debug!(source = "memory", error = %err, "metric read failed, rendering zeros");
                    HeapUsage::default()
                }
            },
        }
    }
}

fn read_or_zero(source: &'static str, read: Result<u64, MetricError>) -> u64 {
    match read {
        Ok(value) => value,
        Err(err) => {
            debug!(source, error = %err, "metric read failed, rendering zero");
            0
        }
    }
}
