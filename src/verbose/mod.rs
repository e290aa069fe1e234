//! The broadcast core: registry, engine, and the pieces that feed it.
//!
//! ## Architecture
//! ```text
//!  operator commands                  periodic driver
//!  (subscribe/unsubscribe)            (VerboseRunner or embedder's own)
//!        │                                  │
//!        ▼                                  ▼
//!  ┌───────────────────┐   snapshot   ┌───────────────────────────────┐
//!  │ SubscriberRegistry│ ───────────► │ BroadcastEngine::tick()       │
//!  └───────────────────┘              │  1. layout from ConfigSource  │
//!                                     │  2. registry snapshot         │
//!                                     │  3. MetricsSnapshot::collect  │
//!                                     │  4. format + AnimationCycle   │
//!                                     │  5. render (single pass)      │
//!                                     │  6. Messenger::deliver each   │
//!                                     └───────────────────────────────┘
//! ```
//!
//! ## Contents
//! - [`SubscriberRegistry`] the mutable set of subscribed sessions
//! - [`BroadcastEngine`] one `tick()` = one best-effort broadcast
//! - [`TickOutcome`] what a cycle did (informational, never an error)
//! - [`AnimationCycle`] the cycling glyph
//! - [`VerboseConfig`] / [`ConfigSource`] the configuration surface
//! - [`VerboseRunner`] optional interval driver for embedders without
//!   their own scheduler

mod animation;
mod config;
mod engine;
mod registry;
mod runner;

pub use animation::AnimationCycle;
pub use config::{ConfigSource, VerboseConfig};
pub use engine::{BroadcastEngine, TickOutcome};
pub use registry::SubscriberRegistry;
pub use runner::VerboseRunner;
