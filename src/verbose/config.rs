//! # Broadcast configuration.
//!
//! Provides [`VerboseConfig`], the static settings bundle, and
//! [`ConfigSource`], the seam through which the engine fetches the layout.
//!
//! The layout is fetched fresh on every cycle rather than captured at
//! construction, so a configuration store that reloads at runtime changes
//! the status line without touching the engine. [`VerboseConfig`] itself
//! implements [`ConfigSource`] for the common fixed-layout case.

use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;

/// Layout used when the embedder does not configure one.
pub const DEFAULT_LAYOUT: &str = "Queued %queued%  Verifying %verifying%  \
    Blacklisted %blacklisted%  Traffic %total%  Memory \u{2245} %used-memory%  %animation%";

/// Where the engine gets the current layout each cycle.
///
/// Implementations are expected to be cheap (an in-memory read); a failed
/// fetch skips the cycle entirely, so "temporarily unavailable" is a safe
/// answer during reloads.
pub trait ConfigSource: Send + Sync + 'static {
    /// The current action-bar layout string.
    fn action_bar_layout(&self) -> Result<Arc<str>, ConfigError>;
}

/// Settings for the status-line broadcaster.
///
/// ## Field semantics
/// - `action_bar_layout`: template with `%key%` placeholder tokens
/// - `animation`: glyph frames cycled one step per broadcast
/// - `interval`: cadence for [`VerboseRunner`](crate::VerboseRunner);
///   ignored by embedders that drive `tick()` themselves
#[derive(Clone, Debug)]
pub struct VerboseConfig {
    /// Layout template with placeholder tokens.
    pub action_bar_layout: Arc<str>,
    /// Animation frames, advanced one position per broadcast.
    ///
    /// An empty list would leave `%animation%` nothing to show; the
    /// [`AnimationCycle`](crate::AnimationCycle) falls back to the default
    /// frames in that case.
    pub animation: Vec<Arc<str>>,
    /// Time between broadcasts when a runner drives the engine.
    pub interval: Duration,
}

impl VerboseConfig {
    /// Default animation frames.
    pub fn default_frames() -> Vec<Arc<str>> {
        ["\u{25DC}", "\u{25DD}", "\u{25DE}", "\u{25DF}"]
            .into_iter()
            .map(Arc::from)
            .collect()
    }
}

impl Default for VerboseConfig {
    /// Default configuration:
    /// - the stock layout showing queue, verifying, blacklist, traffic,
    ///   used memory and the animation glyph
    /// - quarter-circle animation frames
    /// - `interval = 1s`
    fn default() -> Self {
        Self {
            action_bar_layout: Arc::from(DEFAULT_LAYOUT),
            animation: Self::default_frames(),
            interval: Duration::from_secs(1),
        }
    }
}

impl ConfigSource for VerboseConfig {
    fn action_bar_layout(&self) -> Result<Arc<str>, ConfigError> {
        Ok(self.action_bar_layout.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_mentions_core_counters() {
        let cfg = VerboseConfig::default();
        let layout = cfg.action_bar_layout().expect("static layout");
        assert!(layout.contains("%queued%"));
        assert!(layout.contains("%animation%"));
    }

    #[test]
    fn test_default_animation_has_four_frames() {
        assert_eq!(VerboseConfig::default().animation.len(), 4);
    }
}
