//! # statline
//!
//! **Statline** is a live status-line broadcaster for proxies that run a
//! bot-mitigation pipeline.
//!
//! Once per tick it renders one short line of operator telemetry (queue
//! depth, in-flight and completed verifications, blacklist size, traffic
//! total, process memory, a cycling glyph) and pushes it to every
//! subscribed operator session as transient heads-up text. The crate is a
//! building block: it owns the subscriber set and the rendering, while the
//! counters, the configuration store and the session messaging stay with
//! the embedding proxy and are injected as trait handles.
//!
//! ## Architecture
//! ```text
//!  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//!  │ ConfigSource │ │ MetricSources│ │  Messenger   │   (embedder-owned)
//!  └──────┬───────┘ └──────┬───────┘ └──────▲───────┘
//!         │ layout         │ counters       │ rendered line
//!         ▼                ▼                │
//! ┌───────────────────────────────────────────────────┐
//! │ BroadcastEngine                                   │
//! │  - SubscriberRegistry (concurrent join/leave)     │
//! │  - MetricsSnapshot (per-tick, zero on failure)    │
//! │  - template::render (single pass)                 │
//! │  - AnimationCycle (one frame per tick)            │
//! └───────────────────▲───────────────────────────────┘
//!                     │ tick()
//!          VerboseRunner, or the embedder's scheduler
//! ```
//!
//! ## Failure discipline
//! | Failure                   | Effect                                    |
//! |---------------------------|-------------------------------------------|
//! | layout unavailable        | cycle skipped, nothing delivered          |
//! | one metric unavailable    | that field renders `0`, rest stay live    |
//! | session disconnected      | recipient skipped, registry untouched     |
//!
//! No collaborator failure ever reaches the scheduler driving `tick()`.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use statline::{
//!     AnimationCycle, BroadcastEngine, DeliveryStatus, HeapUsage, Messenger,
//!     MetricError, MetricSources, SessionId, VerboseConfig, VerboseRunner,
//! };
//!
//! struct Pipeline;
//!
//! impl statline::QueueSource for Pipeline {
//!     fn queued(&self) -> Result<u64, MetricError> { Ok(3) }
//! }
//! impl statline::VerifyingSource for Pipeline {
//!     fn verifying(&self) -> Result<u64, MetricError> { Ok(1) }
//! }
//! impl statline::VerifiedSource for Pipeline {
//!     fn verified(&self) -> Result<u64, MetricError> { Ok(10) }
//! }
//! impl statline::BlacklistSource for Pipeline {
//!     fn blacklisted_estimate(&self) -> Result<u64, MetricError> { Ok(5) }
//! }
//! impl statline::CounterStore for Pipeline {
//!     fn get(&self, _key: &str, default: u64) -> Result<u64, MetricError> { Ok(default) }
//! }
//! impl statline::MemorySource for Pipeline {
//!     fn heap(&self) -> Result<HeapUsage, MetricError> { Ok(HeapUsage::default()) }
//! }
//!
//! struct Console;
//!
//! #[async_trait]
//! impl Messenger for Console {
//!     async fn deliver(&self, session: &SessionId, line: &str) -> DeliveryStatus {
//!         println!("[{session}] {line}");
//!         DeliveryStatus::Delivered
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let pipeline = Arc::new(Pipeline);
//!     let sources = MetricSources {
//!         queue: pipeline.clone(),
//!         verifying: pipeline.clone(),
//!         verified: pipeline.clone(),
//!         blacklist: pipeline.clone(),
//!         counters: pipeline.clone(),
//!         memory: pipeline,
//!     };
//!
//!     let config = Arc::new(VerboseConfig::default());
//!     let engine = Arc::new(BroadcastEngine::new(
//!         config.clone(),
//!         sources,
//!         Arc::new(Console),
//!         AnimationCycle::new(config.animation.clone()),
//!     ));
//!     engine.subscribe("console".into()).await;
//!
//!     let token = CancellationToken::new();
//!     let runner = VerboseRunner::new(engine, config.interval, token.clone()).spawn();
//!
//!     tokio::time::sleep(Duration::from_secs(3)).await;
//!     token.cancel();
//!     let _ = runner.await;
//! }
//! ```
//!
//! ## Features
//! - `system`: ships [`SystemMemory`], a `sysinfo`-backed
//!   [`MemorySource`] for embedders without their own heap accounting.

mod delivery;
mod error;
mod format;
mod metrics;
mod template;
mod verbose;

pub use delivery::{DeliveryStatus, Messenger, SessionId};
pub use error::{ConfigError, MetricError};
pub use format::{format_count, format_memory};
pub use metrics::{
    BlacklistSource, CounterStore, HeapUsage, MemorySource, MetricSources, MetricsSnapshot,
    QueueSource, VerifiedSource, VerifyingSource, TOTAL_COUNTER_KEY,
};
pub use template::{render, Placeholder, RenderedValues};
pub use verbose::{
    AnimationCycle, BroadcastEngine, ConfigSource, SubscriberRegistry, TickOutcome, VerboseConfig,
    VerboseRunner,
};

#[cfg(feature = "system")]
pub use metrics::SystemMemory;
