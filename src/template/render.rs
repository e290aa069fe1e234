//! Single-pass layout rendering.
//!
//! The renderer walks the layout string once. On every `%` it looks ahead to
//! the next `%`; if the text between the two is a recognized key, the whole
//! token is replaced, otherwise only the leading `%` is emitted and scanning
//! resumes at the character after it. That way `%%queued%` renders as a
//! literal `%` followed by the queued count, and a trailing unpaired `%`
//! survives untouched.

use crate::template::Placeholder;

/// Formatted value for every placeholder, built once per broadcast cycle.
#[derive(Debug, Clone, Default)]
pub struct RenderedValues {
    pub queued: String,
    pub verifying: String,
    pub verified: String,
    pub blacklisted: String,
    pub total: String,
    pub used_memory: String,
    pub free_memory: String,
    pub total_memory: String,
    pub max_memory: String,
    pub animation: String,
}

impl RenderedValues {
    /// The formatted text for one placeholder.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Queued => &self.queued,
            Placeholder::Verifying => &self.verifying,
            Placeholder::Verified => &self.verified,
            Placeholder::Blacklisted => &self.blacklisted,
            Placeholder::Total => &self.total,
            Placeholder::UsedMemory => &self.used_memory,
            Placeholder::FreeMemory => &self.free_memory,
            Placeholder::TotalMemory => &self.total_memory,
            Placeholder::MaxMemory => &self.max_memory,
            Placeholder::Animation => &self.animation,
        }
    }
}

/// Substitutes every recognized placeholder in `layout` with its value.
///
/// Unrecognized tokens pass through verbatim; the scan is a single pass, so
/// cost is linear in the layout length.
///
/// # Example
/// ```
/// use statline::{render, RenderedValues};
///
/// let values = RenderedValues {
///     queued: "3".into(),
///     verifying: "1".into(),
///     ..RenderedValues::default()
/// };
/// assert_eq!(render("Q:%queued% V:%verifying%", &values), "Q:3 V:1");
/// ```
pub fn render(layout: &str, values: &RenderedValues) -> String {
    let mut out = String::with_capacity(layout.len() + 16);
    let mut rest = layout;

    loop {
        match rest.find('%') {
            None => {
                out.push_str(rest);
                break;
            }
            Some(start) => {
                out.push_str(&rest[..start]);
                let after = &rest[start + 1..];
                match after.find('%') {
                    None => {
                        // Unpaired '%', nothing left to substitute.
                        out.push_str(&rest[start..]);
                        break;
                    }
                    Some(end) => {
                        if let Some(placeholder) = Placeholder::from_key(&after[..end]) {
                            out.push_str(values.get(placeholder));
                            rest = &after[end + 1..];
                        } else {
                            out.push('%');
                            rest = after;
                        }
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> RenderedValues {
        RenderedValues {
            queued: "1,234".into(),
            verifying: "7".into(),
            verified: "10".into(),
            blacklisted: "5".into(),
            total: "16".into(),
            used_memory: "512.0 MB".into(),
            free_memory: "1.5 GB".into(),
            total_memory: "2.0 GB".into(),
            max_memory: "4.0 GB".into(),
            animation: "◜".into(),
        }
    }

    #[test]
    fn test_no_placeholders_unchanged() {
        let layout = "all quiet on the proxy front";
        assert_eq!(render(layout, &sample_values()), layout);
    }

    #[test]
    fn test_every_placeholder_substituted() {
        let layout = "%queued% %verifying% %verified% %blacklisted% %total% \
                      %used-memory% %free-memory% %total-memory% %max-memory% %animation%";
        let rendered = render(layout, &sample_values());
        assert_eq!(
            rendered,
            "1,234 7 10 5 16 512.0 MB 1.5 GB 2.0 GB 4.0 GB ◜"
        );
        for p in Placeholder::ALL {
            assert!(
                !rendered.contains(p.token()),
                "token {} survived rendering",
                p.token()
            );
        }
    }

    #[test]
    fn test_repeated_token_replaced_everywhere() {
        let rendered = render("%queued% and again %queued%", &sample_values());
        assert_eq!(rendered, "1,234 and again 1,234");
    }

    #[test]
    fn test_unrecognized_token_passes_through() {
        let rendered = render("%queued% %player% %animation%", &sample_values());
        assert_eq!(rendered, "1,234 %player% ◜");
    }

    #[test]
    fn test_stray_percent_survives() {
        assert_eq!(render("100% done", &sample_values()), "100% done");
        assert_eq!(render("trailing %", &sample_values()), "trailing %");
        assert_eq!(render("%", &sample_values()), "%");
    }

    #[test]
    fn test_doubled_percent_before_token() {
        // The first '%' pairs with the token's opening '%', yielding an
        // empty (unrecognized) key, then the token itself matches.
        assert_eq!(render("%%queued%", &sample_values()), "%1,234");
    }

    #[test]
    fn test_adjacent_tokens() {
        assert_eq!(render("%queued%%verifying%", &sample_values()), "1,2347");
    }

    #[test]
    fn test_empty_layout() {
        assert_eq!(render("", &sample_values()), "");
    }
}
