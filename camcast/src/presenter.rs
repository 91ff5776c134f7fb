//! The UI surface seam
//!
//! The session controller never touches a concrete UI. It drives a
//! [`Presenter`], which a host binds to its actual surface: DOM nodes, a
//! terminal, an overlay renderer. [`NullPresenter`] is the no-op default and
//! [`RecordingPresenter`] captures every call for inspection in tests and
//! headless embeddings.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use camcast_media::{DeviceInfo, MediaStream};

use crate::mode::DisplayMode;
use crate::status::StatusLine;

/// UI surface driven by the session controller
pub trait Presenter: Send {
    /// Show the panel for the given mode and hide the other one
    fn show_mode(&mut self, mode: DisplayMode);

    /// Update the camera status line
    fn set_camera_status(&mut self, line: StatusLine);

    /// Update the microphone status line
    fn set_microphone_status(&mut self, line: StatusLine);

    /// Rebuild the camera selection list
    ///
    /// `devices` carry display-ready labels; `selected` is the id of the
    /// currently selected camera, if any.
    fn set_camera_options(&mut self, devices: &[DeviceInfo], selected: Option<&str>);

    /// Rebuild the microphone selection list
    fn set_microphone_options(&mut self, devices: &[DeviceInfo], selected: Option<&str>);

    /// Update the camera toggle affordance label
    fn set_camera_toggle_label(&mut self, label: &str);

    /// Update the microphone toggle affordance label
    fn set_microphone_toggle_label(&mut self, label: &str);

    /// Attach a stream to the preview surface, or clear it
    fn set_preview(&mut self, stream: Option<&MediaStream>);

    /// Raise a user-visible alert
    fn alert(&mut self, message: &str);
}

/// Presenter that ignores every call
///
/// The default when a controller is built without a presenter, and the usual
/// choice for headless status-only embeddings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show_mode(&mut self, _mode: DisplayMode) {}
    fn set_camera_status(&mut self, _line: StatusLine) {}
    fn set_microphone_status(&mut self, _line: StatusLine) {}
    fn set_camera_options(&mut self, _devices: &[DeviceInfo], _selected: Option<&str>) {}
    fn set_microphone_options(&mut self, _devices: &[DeviceInfo], _selected: Option<&str>) {}
    fn set_camera_toggle_label(&mut self, _label: &str) {}
    fn set_microphone_toggle_label(&mut self, _label: &str) {}
    fn set_preview(&mut self, _stream: Option<&MediaStream>) {}
    fn alert(&mut self, _message: &str) {}
}

/// One captured presenter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    /// `show_mode` was called
    ModeShown(DisplayMode),
    /// `set_camera_status` was called
    CameraStatus(StatusLine),
    /// `set_microphone_status` was called
    MicrophoneStatus(StatusLine),
    /// `set_camera_options` was called
    CameraOptions {
        /// Display labels, in list order
        labels: Vec<String>,
        /// Selected camera id, if any
        selected: Option<String>,
    },
    /// `set_microphone_options` was called
    MicrophoneOptions {
        /// Display labels, in list order
        labels: Vec<String>,
        /// Selected microphone id, if any
        selected: Option<String>,
    },
    /// `set_camera_toggle_label` was called
    CameraToggleLabel(String),
    /// `set_microphone_toggle_label` was called
    MicrophoneToggleLabel(String),
    /// `set_preview` was called; carries the attached stream's id, if any
    Preview(Option<Uuid>),
    /// `alert` was called
    Alert(String),
}

/// Presenter that records every call
///
/// Cloning shares the underlying log, so a handle kept by the caller observes
/// everything the controller-owned clone receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    events: Arc<Mutex<Vec<PresenterEvent>>>,
}

impl RecordingPresenter {
    /// Create an empty recording presenter
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every captured call, in order
    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events.lock().clone()
    }

    /// The mode most recently shown, if any
    pub fn last_mode(&self) -> Option<DisplayMode> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::ModeShown(mode) => Some(*mode),
            _ => None,
        })
    }

    /// The camera status most recently set, if any
    pub fn last_camera_status(&self) -> Option<StatusLine> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::CameraStatus(line) => Some(*line),
            _ => None,
        })
    }

    /// The microphone status most recently set, if any
    pub fn last_microphone_status(&self) -> Option<StatusLine> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::MicrophoneStatus(line) => Some(*line),
            _ => None,
        })
    }

    /// Labels of the most recent camera option rebuild, if any
    pub fn camera_option_labels(&self) -> Option<Vec<String>> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::CameraOptions { labels, .. } => Some(labels.clone()),
            _ => None,
        })
    }

    /// Labels of the most recent microphone option rebuild, if any
    pub fn microphone_option_labels(&self) -> Option<Vec<String>> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::MicrophoneOptions { labels, .. } => Some(labels.clone()),
            _ => None,
        })
    }

    /// The camera toggle label most recently set, if any
    pub fn last_camera_toggle_label(&self) -> Option<String> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::CameraToggleLabel(label) => Some(label.clone()),
            _ => None,
        })
    }

    /// The microphone toggle label most recently set, if any
    pub fn last_microphone_toggle_label(&self) -> Option<String> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::MicrophoneToggleLabel(label) => Some(label.clone()),
            _ => None,
        })
    }

    /// The most recent preview attachment: `Some(Some(id))` attached,
    /// `Some(None)` cleared, `None` never touched
    pub fn last_preview(&self) -> Option<Option<Uuid>> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::Preview(stream_id) => Some(*stream_id),
            _ => None,
        })
    }

    /// The most recent alert message, if any
    pub fn last_alert(&self) -> Option<String> {
        self.events.lock().iter().rev().find_map(|e| match e {
            PresenterEvent::Alert(message) => Some(message.clone()),
            _ => None,
        })
    }

    /// Number of alerts raised so far
    pub fn alert_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, PresenterEvent::Alert(_)))
            .count()
    }

    fn push(&self, event: PresenterEvent) {
        self.events.lock().push(event);
    }
}

impl Presenter for RecordingPresenter {
    fn show_mode(&mut self, mode: DisplayMode) {
        self.push(PresenterEvent::ModeShown(mode));
    }

    fn set_camera_status(&mut self, line: StatusLine) {
        self.push(PresenterEvent::CameraStatus(line));
    }

    fn set_microphone_status(&mut self, line: StatusLine) {
        self.push(PresenterEvent::MicrophoneStatus(line));
    }

    fn set_camera_options(&mut self, devices: &[DeviceInfo], selected: Option<&str>) {
        self.push(PresenterEvent::CameraOptions {
            labels: devices.iter().map(|d| d.label.clone()).collect(),
            selected: selected.map(str::to_owned),
        });
    }

    fn set_microphone_options(&mut self, devices: &[DeviceInfo], selected: Option<&str>) {
        self.push(PresenterEvent::MicrophoneOptions {
            labels: devices.iter().map(|d| d.label.clone()).collect(),
            selected: selected.map(str::to_owned),
        });
    }

    fn set_camera_toggle_label(&mut self, label: &str) {
        self.push(PresenterEvent::CameraToggleLabel(label.to_string()));
    }

    fn set_microphone_toggle_label(&mut self, label: &str) {
        self.push(PresenterEvent::MicrophoneToggleLabel(label.to_string()));
    }

    fn set_preview(&mut self, stream: Option<&MediaStream>) {
        self.push(PresenterEvent::Preview(stream.map(|s| s.id())));
    }

    fn alert(&mut self, message: &str) {
        self.push(PresenterEvent::Alert(message.to_string()));
    }
}
