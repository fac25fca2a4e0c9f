//! Font string policies.

/// How [`RenderSurface::set_font`](crate::RenderSurface::set_font) combines a
/// requested font with the one already in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontPolicy {
    /// The requested string becomes the font as-is.
    #[default]
    Replace,
    /// Legacy shorthand: a request without spaces (e.g. `"24px"`) is taken as
    /// a size and joined with the last space-separated token of the current
    /// font, which is assumed to be the family. Requests containing a space
    /// replace the font outright.
    ///
    /// Breaks on multi-word families and on fonts that end in anything but a
    /// family name.
    MergeSizeOrFamily,
}

/// Default font string of a freshly created canvas context.
pub const DEFAULT_FONT: &str = "10px sans-serif";

/// Compute the font string that results from requesting `requested` while
/// `current` is in effect.
pub fn resolve_font(policy: FontPolicy, current: &str, requested: &str) -> String {
    match policy {
        FontPolicy::Replace => requested.to_string(),
        FontPolicy::MergeSizeOrFamily => {
            if requested.contains(' ') {
                return requested.to_string();
            }
            match current.split(' ').next_back().filter(|f| !f.is_empty()) {
                Some(family) => format!("{requested} {family}"),
                None => requested.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_ignores_current_font() {
        assert_eq!(
            resolve_font(FontPolicy::Replace, "12px arial", "24px"),
            "24px"
        );
    }

    #[test]
    fn merge_splices_size_with_current_family() {
        assert_eq!(
            resolve_font(FontPolicy::MergeSizeOrFamily, "italic 12px arial", "24px"),
            "24px arial"
        );
    }

    #[test]
    fn merge_replaces_when_request_has_space() {
        assert_eq!(
            resolve_font(FontPolicy::MergeSizeOrFamily, "12px arial", "bold 16px serif"),
            "bold 16px serif"
        );
    }

    #[test]
    fn merge_with_empty_current_keeps_request() {
        assert_eq!(resolve_font(FontPolicy::MergeSizeOrFamily, "", "24px"), "24px");
    }
}
