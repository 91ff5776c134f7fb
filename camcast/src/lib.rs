//! # camcast
//!
//! Webcam and microphone session controller with two display modes: an
//! interactive control panel (toggles, device selectors, live preview) and a
//! status-only display intended for embedding as a broadcast overlay.
//!
//! The controller owns the session state and the active stream handle. The
//! platform media surface and the UI surface both sit behind injectable
//! seams ([`MediaProvider`] and [`Presenter`]), so the decision logic runs
//! identically against real hardware bindings and in-memory test doubles.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use camcast::SessionController;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Mode comes from the embedding page's query string; the default
//!     // provider and presenter are in-memory stand-ins.
//!     let mut session = SessionController::builder()
//!         .query("mode=control")
//!         .build();
//!
//!     session.start().await;
//!
//!     // Turn the camera on: the previous stream (if any) is stopped, a new
//!     // one is acquired pinned to the selected camera, and the status lines
//!     // are refreshed.
//!     session.toggle_camera().await;
//!     assert!(session.is_camera_on());
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export the media layer types callers interact with
pub use camcast_media::{
    DeviceCatalog, DeviceEvent, DeviceInfo, DeviceKind, MediaError, MediaProvider, MediaResult,
    MediaStream, MediaTrack, MockMediaProvider, StreamConstraints, TrackKind,
};

// Public API modules
pub mod config;
pub mod mode;
pub mod presenter;
pub mod session;
pub mod status;

// Re-export main API types
pub use config::SessionConfig;
pub use mode::DisplayMode;
pub use presenter::{NullPresenter, Presenter, PresenterEvent, RecordingPresenter};
pub use session::{SessionController, SessionControllerBuilder, SessionState};
pub use status::{
    camera_status, camera_toggle_label, microphone_status, microphone_toggle_label, StatusColor,
    StatusLine,
};
