//! Display mode resolution

/// Which of the two mutually exclusive views a session drives
///
/// Resolved once from the embedding page's query string and immutable for the
/// session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Interactive view: toggles, device selectors, and a live preview
    Control,
    /// Status-only view intended for embedding as a broadcast overlay
    #[default]
    Obs,
}

impl DisplayMode {
    /// Resolve the display mode from a URL-style query string
    ///
    /// Looks for a `mode` key; `mode=control` selects [`DisplayMode::Control`],
    /// anything else (including an absent key) selects [`DisplayMode::Obs`].
    /// A leading `?` is tolerated.
    pub fn from_query(query: &str) -> Self {
        let value = query
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.split_once('=').filter(|(key, _)| *key == "mode"))
            .map(|(_, value)| value);

        match value {
            Some("control") => DisplayMode::Control,
            _ => DisplayMode::Obs,
        }
    }

    /// Whether this is the interactive control view
    pub fn is_control(&self) -> bool {
        matches!(self, DisplayMode::Control)
    }
}
