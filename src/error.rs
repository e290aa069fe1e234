//! Error types used by the broadcast core.
//!
//! This module defines two error enums:
//!
//! - [`ConfigError`]: the layout template could not be fetched; the current
//!   broadcast cycle is skipped and nothing is delivered.
//! - [`MetricError`]: a single metric collaborator could not be read; the
//!   affected field falls back to zero and the cycle continues.
//!
//! Both types provide `as_label` for stable snake_case identifiers in
//! logs/metrics. Neither error ever crosses `tick()`: configuration loss is
//! reported through [`TickOutcome::Skipped`](crate::TickOutcome) and metric
//! loss is absorbed during snapshot collection.

use thiserror::Error;

/// # Errors raised while fetching the broadcast configuration.
///
/// The layout template is re-read from the configuration source on every
/// cycle so that live edits apply without a restart. When the source cannot
/// produce it (store mid-reload, missing key), the cycle is skipped.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The action-bar layout is currently not available.
    #[error("action-bar layout unavailable: {reason}")]
    Unavailable {
        /// Why the source could not produce the layout.
        reason: String,
    },
}

impl ConfigError {
    /// Convenience constructor for [`ConfigError::Unavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        ConfigError::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use statline::ConfigError;
    ///
    /// let err = ConfigError::unavailable("store is reloading");
    /// assert_eq!(err.as_label(), "config_unavailable");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::Unavailable { .. } => "config_unavailable",
        }
    }
}

/// # Errors raised by individual metric collaborators.
///
/// Each counter is owned by another subsystem and read independently; a
/// failed read only affects its own field, which renders as zero for that
/// cycle.
#[non_exhaustive]
#[derive(Debug)]
pub enum MetricError {
    /// The collaborator exists but is not ready to serve reads yet
    /// (typically mid-initialization or already shutting down).
    NotReady {
        /// Name of the collaborator that was asked.
        source: &'static str,
    },

    /// The read itself failed.
    Failed {
        /// Name of the collaborator that was asked.
        source: &'static str,
        /// The underlying failure message.
        reason: String,
    },
}

// `Display`/`Error` are implemented by hand rather than derived: the `source`
// field holds a collaborator *name* (`&'static str`), and thiserror's derive
// would try to treat any field literally named `source` as an underlying
// `std::error::Error` source. The messages below match the original
// `#[error(...)]` templates exactly.
impl std::fmt::Display for MetricError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricError::NotReady { source } => {
                write!(f, "metric source not ready: {source}")
            }
            MetricError::Failed { source, reason } => {
                write!(f, "metric read failed ({source}): {reason}")
            }
        }
    }
}

impl std::error::Error for MetricError {}

impl MetricError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            MetricError::NotReady { .. } => "metric_not_ready",
            MetricError::Failed { .. } => "metric_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            MetricError::NotReady { source } => format!("{source} not ready"),
            MetricError::Failed { source, reason } => format!("{source}: {reason}"),
        }
    }
}
