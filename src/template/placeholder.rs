//! The fixed set of tokens recognized in a status-line layout.

/// A placeholder token in the action-bar layout.
///
/// Tokens are written `%key%` in the layout string. Anything between two
/// `%` characters that does not match a variant is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Connections currently waiting in the verification queue.
    Queued,
    /// Connections in the middle of verification.
    Verifying,
    /// Connections that completed verification.
    Verified,
    /// Blacklist size. Approximate: the backing cache only estimates it.
    Blacklisted,
    /// Aggregate total of handled connections.
    Total,
    /// Process heap in use.
    UsedMemory,
    /// Process heap still free.
    FreeMemory,
    /// Process heap currently committed.
    TotalMemory,
    /// Upper bound the heap may grow to.
    MaxMemory,
    /// The cycling animation glyph.
    Animation,
}

impl Placeholder {
    /// All placeholders in substitution order. If a layout somehow made one
    /// token produce another token's text, the later entry would win.
    pub const ALL: [Placeholder; 10] = [
        Placeholder::Queued,
        Placeholder::Verifying,
        Placeholder::Verified,
        Placeholder::Blacklisted,
        Placeholder::Total,
        Placeholder::UsedMemory,
        Placeholder::FreeMemory,
        Placeholder::TotalMemory,
        Placeholder::MaxMemory,
        Placeholder::Animation,
    ];

    /// The key as written between `%` characters in the layout.
    pub fn key(&self) -> &'static str {
        match self {
            Placeholder::Queued => "queued",
            Placeholder::Verifying => "verifying",
            Placeholder::Verified => "verified",
            Placeholder::Blacklisted => "blacklisted",
            Placeholder::Total => "total",
            Placeholder::UsedMemory => "used-memory",
            Placeholder::FreeMemory => "free-memory",
            Placeholder::TotalMemory => "total-memory",
            Placeholder::MaxMemory => "max-memory",
            Placeholder::Animation => "animation",
        }
    }

    /// The full token including the surrounding `%` characters.
    ///
    /// # Example
    /// ```
    /// use statline::Placeholder;
    ///
    /// assert_eq!(Placeholder::Queued.token(), "%queued%");
    /// ```
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Queued => "%queued%",
            Placeholder::Verifying => "%verifying%",
            Placeholder::Verified => "%verified%",
            Placeholder::Blacklisted => "%blacklisted%",
            Placeholder::Total => "%total%",
            Placeholder::UsedMemory => "%used-memory%",
            Placeholder::FreeMemory => "%free-memory%",
            Placeholder::TotalMemory => "%total-memory%",
            Placeholder::MaxMemory => "%max-memory%",
            Placeholder::Animation => "%animation%",
        }
    }

    /// Looks up the placeholder for a bare key (no `%` characters).
    pub fn from_key(key: &str) -> Option<Placeholder> {
        Placeholder::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::from_key(p.key()), Some(p));
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert_eq!(Placeholder::from_key("queue"), None);
        assert_eq!(Placeholder::from_key(""), None);
        assert_eq!(Placeholder::from_key("QUEUED"), None);
    }

    #[test]
    fn test_token_wraps_key() {
        for p in Placeholder::ALL {
            assert_eq!(p.token(), format!("%{}%", p.key()));
        }
    }
}
