//! Status lines and toggle affordance labels

/// Semantic color of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    /// Everything is fine (rendered green)
    Affirmative,
    /// Attention required (rendered red)
    Alert,
    /// Intentionally inactive (rendered orange)
    Warning,
}

impl StatusColor {
    /// CSS rendering of the color
    pub fn css(&self) -> &'static str {
        match self {
            StatusColor::Affirmative => "#0f0",
            StatusColor::Alert => "#f00",
            StatusColor::Warning => "#f80",
        }
    }
}

/// One status line: text plus its semantic color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    /// Status text
    pub text: &'static str,
    /// Semantic color
    pub color: StatusColor,
}

/// Camera status line for the given toggle position
pub fn camera_status(camera_on: bool) -> StatusLine {
    if camera_on {
        StatusLine {
            text: "\u{2705} Camera active",
            color: StatusColor::Affirmative,
        }
    } else {
        StatusLine {
            text: "Camera offline, please wait...",
            color: StatusColor::Alert,
        }
    }
}

/// Microphone status line for the given mute position
pub fn microphone_status(mic_muted: bool) -> StatusLine {
    if mic_muted {
        StatusLine {
            text: "\u{1f507} Microphone muted",
            color: StatusColor::Warning,
        }
    } else {
        StatusLine {
            text: "\u{1f3a4} Microphone active",
            color: StatusColor::Affirmative,
        }
    }
}

/// Camera toggle affordance label, reflecting the next action
pub fn camera_toggle_label(camera_on: bool) -> &'static str {
    if camera_on {
        "Turn Camera Off"
    } else {
        "Turn Camera On"
    }
}

/// Microphone toggle affordance label, reflecting the next action
pub fn microphone_toggle_label(mic_muted: bool) -> &'static str {
    if mic_muted {
        "Unmute Microphone"
    } else {
        "Mute Microphone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_status_pair() {
        let on = camera_status(true);
        assert_eq!(on.color, StatusColor::Affirmative);
        assert!(on.text.contains("Camera active"));

        let off = camera_status(false);
        assert_eq!(off.color, StatusColor::Alert);
        assert_eq!(off.text, "Camera offline, please wait...");
    }

    #[test]
    fn test_microphone_status_pair() {
        let muted = microphone_status(true);
        assert_eq!(muted.color, StatusColor::Warning);
        assert!(muted.text.contains("Microphone muted"));

        let active = microphone_status(false);
        assert_eq!(active.color, StatusColor::Affirmative);
        assert!(active.text.contains("Microphone active"));
    }

    #[test]
    fn test_toggle_labels_reflect_next_action() {
        assert_eq!(camera_toggle_label(true), "Turn Camera Off");
        assert_eq!(camera_toggle_label(false), "Turn Camera On");
        assert_eq!(microphone_toggle_label(true), "Unmute Microphone");
        assert_eq!(microphone_toggle_label(false), "Mute Microphone");
    }

    #[test]
    fn test_color_css_values() {
        assert_eq!(StatusColor::Affirmative.css(), "#0f0");
        assert_eq!(StatusColor::Alert.css(), "#f00");
        assert_eq!(StatusColor::Warning.css(), "#f80");
    }
}
