//! Configuration types and defaults

use crate::mode::DisplayMode;

/// Session configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Display mode for this session
    pub mode: DisplayMode,
    /// Camera id to prefer once devices are enumerated
    pub preferred_camera: Option<String>,
    /// Microphone id to prefer once devices are enumerated
    pub preferred_microphone: Option<String>,
}

impl SessionConfig {
    /// Configuration for a session whose mode comes from a query string
    pub fn from_query(query: &str) -> Self {
        Self {
            mode: DisplayMode::from_query(query),
            ..Self::default()
        }
    }
}
