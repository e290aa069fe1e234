//! # Demo: action_bar
//!
//! Drives a [`BroadcastEngine`] against in-memory collaborators and prints
//! the rendered status line to stdout once per second.
//!
//! Shows how to:
//! - Implement the metric source traits over live counters.
//! - Implement [`Messenger`] for the embedder's session transport.
//! - Wire everything into [`BroadcastEngine`] and a [`VerboseRunner`].
//!
//! ## Flow
//! ```text
//! fake pipeline task ──► bumps counters every 300ms
//! VerboseRunner ───────► engine.tick() every second
//!     ├─► layout from VerboseConfig
//!     ├─► MetricsSnapshot over the counters
//!     └─► ConsoleMessenger.deliver() per subscriber
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example action_bar
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use statline::{
    AnimationCycle, BlacklistSource, BroadcastEngine, CounterStore, DeliveryStatus, HeapUsage,
    Messenger, MetricError, MetricSources, MemorySource, QueueSource, SessionId, VerboseConfig,
    VerboseRunner, VerifiedSource, VerifyingSource,
};

/// Counters a real proxy would own; here a background task bumps them.
#[derive(Default)]
struct FakePipeline {
    queued: AtomicU64,
    verifying: AtomicU64,
    verified: AtomicU64,
    blacklisted: AtomicU64,
    total: AtomicU64,
}

impl FakePipeline {
    fn churn(self: Arc<Self>, token: CancellationToken) {
        let pipeline = self;
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = tokio::time::sleep(Duration::from_millis(300)) => {
                        pipeline.total.fetch_add(3, Ordering::Relaxed);
                        pipeline.queued.store(pipeline.total.load(Ordering::Relaxed) % 17, Ordering::Relaxed);
                        pipeline.verifying.store(pipeline.total.load(Ordering::Relaxed) % 5, Ordering::Relaxed);
                        pipeline.verified.fetch_add(2, Ordering::Relaxed);
                        pipeline.blacklisted.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        });
    }
}

impl QueueSource for FakePipeline {
    fn queued(&self) -> Result<u64, MetricError> {
        Ok(self.queued.load(Ordering::Relaxed))
    }
}
impl VerifyingSource for FakePipeline {
    fn verifying(&self) -> Result<u64, MetricError> {
        Ok(self.verifying.load(Ordering::Relaxed))
    }
}
impl VerifiedSource for FakePipeline {
    fn verified(&self) -> Result<u64, MetricError> {
        Ok(self.verified.load(Ordering::Relaxed))
    }
}
impl BlacklistSource for FakePipeline {
    fn blacklisted_estimate(&self) -> Result<u64, MetricError> {
        Ok(self.blacklisted.load(Ordering::Relaxed))
    }
}
impl CounterStore for FakePipeline {
    fn get(&self, key: &str, default: u64) -> Result<u64, MetricError> {
        if key == statline::TOTAL_COUNTER_KEY {
            Ok(self.total.load(Ordering::Relaxed))
        } else {
            Ok(default)
        }
    }
}
impl MemorySource for FakePipeline {
    fn heap(&self) -> Result<HeapUsage, MetricError> {
        Ok(HeapUsage {
            free: 1_610_612_736,
            total: 2_147_483_648,
            max: 4_294_967_296,
        })
    }
}

/// "Session transport" that writes to stdout.
struct ConsoleMessenger;

#[async_trait::async_trait]
impl Messenger for ConsoleMessenger {
    async fn deliver(&self, session: &SessionId, line: &str) -> DeliveryStatus {
        println!("[{session}] {line}");
        DeliveryStatus::Delivered
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let pipeline = Arc::new(FakePipeline::default());
    let token = CancellationToken::new();
    pipeline.clone().churn(token.clone());

    let sources = MetricSources {
        queue: pipeline.clone(),
        verifying: pipeline.clone(),
        verified: pipeline.clone(),
        blacklist: pipeline.clone(),
        counters: pipeline.clone(),
        memory: pipeline.clone(),
    };

    let config = Arc::new(VerboseConfig::default());
    let engine = Arc::new(BroadcastEngine::new(
        config.clone(),
        sources,
        Arc::new(ConsoleMessenger),
        AnimationCycle::new(config.animation.clone()),
    ));

    engine.subscribe("operator-1".into()).await;
    engine.subscribe("operator-2".into()).await;

    let runner = VerboseRunner::new(engine.clone(), config.interval, token.clone()).spawn();

    // Let it broadcast for a bit, drop one viewer halfway through.
    tokio::time::sleep(Duration::from_secs(4)).await;
    engine.unsubscribe(&"operator-2".into()).await;
    println!("-- operator-2 unsubscribed --");
    tokio::time::sleep(Duration::from_secs(4)).await;

    token.cancel();
    let _ = runner.await;
    println!("done");
}
