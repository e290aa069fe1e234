//! Live metric collaborators and the per-cycle snapshot.
//!
//! The broadcaster never owns a counter. Every figure on the status line is
//! read from a collaborator that the embedding proxy injects at
//! construction, which keeps each dependency visible and trivially
//! substitutable in tests.
//!
//! ## Contents
//! - source traits: [`QueueSource`], [`VerifyingSource`], [`VerifiedSource`],
//!   [`BlacklistSource`], [`CounterStore`], [`MemorySource`]
//! - [`MetricSources`] the bundle of handles the engine is built with
//! - [`MetricsSnapshot`] / [`HeapUsage`] one cycle's worth of values
//!
//! ## Failure model
//! Each read is independently fallible. A failed read costs only its own
//! field, which renders as zero for that cycle; the snapshot itself always
//! succeeds.

mod snapshot;
mod sources;

#[cfg(feature = "system")]
mod system;

pub use snapshot::{HeapUsage, MetricsSnapshot};
pub use sources::{
    BlacklistSource, CounterStore, MemorySource, MetricSources, QueueSource, VerifiedSource,
    VerifyingSource, TOTAL_COUNTER_KEY,
};

#[cfg(feature = "system")]
pub use system::SystemMemory;
