//! # Interval driver for the broadcast engine.
//!
//! Embedders with their own scheduler call
//! [`BroadcastEngine::tick`](crate::BroadcastEngine::tick) directly and
//! never construct a runner. For everyone else, [`VerboseRunner`] owns the
//! cadence: it ticks the engine on a fixed interval until its cancellation
//! token fires.
//!
//! ```text
//! loop {
//!   select! {
//!     token.cancelled() => break,
//!     interval.tick()   => engine.tick().await,
//!   }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::verbose::BroadcastEngine;

/// Drives [`BroadcastEngine::tick`] on a fixed cadence.
pub struct VerboseRunner {
    engine: Arc<BroadcastEngine>,
    interval: Duration,
    token: CancellationToken,
}

impl VerboseRunner {
    /// Creates a runner. The interval is clamped to at least one
    /// millisecond (a zero interval is not a valid timer period).
    pub fn new(engine: Arc<BroadcastEngine>, interval: Duration, token: CancellationToken) -> Self {
        Self {
            engine,
            interval: interval.max(Duration::from_millis(1)),
            token,
        }
    }

    /// Spawns the broadcast loop on the current runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Runs the broadcast loop until the token is cancelled.
    ///
    /// A tick that overruns the interval (slow messenger, huge subscriber
    /// set) delays the next one instead of bursting to catch up; the status
    /// line shows the present, there is no value in replaying the past.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = self.token.cancelled() => break,
                _ = ticker.tick() => {
                    self.engine.tick().await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::delivery::{DeliveryStatus, Messenger, SessionId};
    use crate::error::MetricError;
    use crate::metrics::{
        BlacklistSource, CounterStore, HeapUsage, MemorySource, MetricSources, QueueSource,
        VerifiedSource, VerifyingSource,
    };
    use crate::verbose::{AnimationCycle, VerboseConfig};

    struct Zeros;

    impl QueueSource for Zeros {
        fn queued(&self) -> Result<u64, MetricError> {
            Ok(0)
        }
    }
    impl VerifyingSource for Zeros {
        fn verifying(&self) -> Result<u64, MetricError> {
            Ok(0)
        }
    }
    impl VerifiedSource for Zeros {
        fn verified(&self) -> Result<u64, MetricError> {
            Ok(0)
        }
    }
    impl BlacklistSource for Zeros {
        fn blacklisted_estimate(&self) -> Result<u64, MetricError> {
            Ok(0)
        }
    }
    impl CounterStore for Zeros {
        fn get(&self, _key: &str, default: u64) -> Result<u64, MetricError> {
            Ok(default)
        }
    }
    impl MemorySource for Zeros {
        fn heap(&self) -> Result<HeapUsage, MetricError> {
            Ok(HeapUsage::default())
        }
    }

    struct CountingMessenger {
        deliveries: AtomicUsize,
    }

    #[async_trait]
    impl Messenger for CountingMessenger {
        async fn deliver(&self, _session: &SessionId, _line: &str) -> DeliveryStatus {
            self.deliveries.fetch_add(1, Ordering::Relaxed);
            DeliveryStatus::Delivered
        }
    }

    fn engine(messenger: Arc<CountingMessenger>) -> Arc<BroadcastEngine> {
        let zeros = Arc::new(Zeros);
        let sources = MetricSources {
            queue: zeros.clone(),
            verifying: zeros.clone(),
            verified: zeros.clone(),
            blacklist: zeros.clone(),
            counters: zeros.clone(),
            memory: zeros,
        };
        Arc::new(BroadcastEngine::new(
            Arc::new(VerboseConfig::default()),
            sources,
            messenger,
            AnimationCycle::default(),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_cadence_until_cancelled() {
        let messenger = Arc::new(CountingMessenger {
            deliveries: AtomicUsize::new(0),
        });
        let engine = engine(messenger.clone());
        engine.subscribe("ops".into()).await;

        let token = CancellationToken::new();
        let handle =
            VerboseRunner::new(engine, Duration::from_secs(1), token.clone()).spawn();

        // The first interval tick fires immediately, then once per second.
        tokio::time::sleep(Duration::from_millis(3500)).await;
        let after_run = messenger.deliveries.load(Ordering::Relaxed);
        assert_eq!(after_run, 4);

        token.cancel();
        handle.await.expect("runner task panicked");

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(messenger.deliveries.load(Ordering::Relaxed), after_run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_is_clamped() {
        let messenger = Arc::new(CountingMessenger {
            deliveries: AtomicUsize::new(0),
        });
        let engine = engine(messenger.clone());
        engine.subscribe("ops".into()).await;

        let token = CancellationToken::new();
        let handle = VerboseRunner::new(engine, Duration::ZERO, token.clone()).spawn();

        tokio::time::sleep(Duration::from_millis(5)).await;
        token.cancel();
        handle.await.expect("runner task panicked");

        assert!(messenger.deliveries.load(Ordering::Relaxed) >= 1);
    }
}
