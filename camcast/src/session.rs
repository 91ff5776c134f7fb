//! Session state and the device session controller

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use camcast_media::{
    DeviceCatalog, DeviceEvent, DeviceKind, MediaProvider, MediaStream, MockMediaProvider,
    StreamConstraints,
};

use crate::config::SessionConfig;
use crate::mode::DisplayMode;
use crate::presenter::{NullPresenter, Presenter};
use crate::status::{
    camera_status, camera_toggle_label, microphone_status, microphone_toggle_label,
};

/// The two toggles of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the camera is toggled on
    pub camera_on: bool,
    /// Whether the microphone is muted
    pub mic_muted: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            camera_on: false,
            mic_muted: true,
        }
    }
}

/// Fluent builder for a [`SessionController`]
pub struct SessionControllerBuilder {
    config: SessionConfig,
    provider: Option<Arc<dyn MediaProvider>>,
    presenter: Option<Box<dyn Presenter>>,
}

impl SessionControllerBuilder {
    fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            provider: None,
            presenter: None,
        }
    }

    /// Set the display mode directly
    pub fn mode(mut self, mode: DisplayMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Resolve the display mode from a URL-style query string
    pub fn query(mut self, query: &str) -> Self {
        self.config.mode = DisplayMode::from_query(query);
        self
    }

    /// Prefer this camera id once devices are enumerated
    pub fn preferred_camera(mut self, device_id: &str) -> Self {
        self.config.preferred_camera = Some(device_id.to_string());
        self
    }

    /// Prefer this microphone id once devices are enumerated
    pub fn preferred_microphone(mut self, device_id: &str) -> Self {
        self.config.preferred_microphone = Some(device_id.to_string());
        self
    }

    /// Use the given configuration wholesale
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject the platform media provider
    pub fn provider(mut self, provider: Arc<dyn MediaProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Inject the UI surface
    pub fn presenter(mut self, presenter: Box<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Build the controller
    ///
    /// Falls back to a mock provider and a no-op presenter when none were
    /// injected.
    pub fn build(self) -> SessionController {
        let provider = self
            .provider
            .unwrap_or_else(|| Arc::new(MockMediaProvider::with_default_devices()));
        let presenter = self.presenter.unwrap_or_else(|| Box::new(NullPresenter));

        let selected_camera = self.config.preferred_camera.clone();
        let selected_microphone = self.config.preferred_microphone.clone();

        SessionController {
            config: self.config,
            provider,
            presenter,
            state: SessionState::default(),
            catalog: DeviceCatalog::default(),
            selected_camera,
            selected_microphone,
            active_stream: None,
        }
    }
}

/// Device session controller
///
/// Owns the session state and the active stream handle, talks to the platform
/// through a [`MediaProvider`], and reflects state into a [`Presenter`].
/// Every mutating operation takes `&mut self`, so invocations are strictly
/// serialized by exclusive ownership; an overlapping reconciliation cannot
/// start while a previous one is still pending.
pub struct SessionController {
    config: SessionConfig,
    provider: Arc<dyn MediaProvider>,
    presenter: Box<dyn Presenter>,
    state: SessionState,
    catalog: DeviceCatalog,
    selected_camera: Option<String>,
    selected_microphone: Option<String>,
    active_stream: Option<MediaStream>,
}

impl SessionController {
    /// Start building a controller
    pub fn builder() -> SessionControllerBuilder {
        SessionControllerBuilder::new()
    }

    /// Display mode of this session
    pub fn mode(&self) -> DisplayMode {
        self.config.mode
    }

    /// Current toggle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the camera is toggled on
    pub fn is_camera_on(&self) -> bool {
        self.state.camera_on
    }

    /// Whether the microphone is muted
    pub fn is_microphone_muted(&self) -> bool {
        self.state.mic_muted
    }

    /// The held stream, if any
    pub fn active_stream(&self) -> Option<&MediaStream> {
        self.active_stream.as_ref()
    }

    /// Current device catalog
    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    /// Id of the selected camera, if any
    pub fn selected_camera(&self) -> Option<&str> {
        self.selected_camera.as_deref()
    }

    /// Id of the selected microphone, if any
    pub fn selected_microphone(&self) -> Option<&str> {
        self.selected_microphone.as_deref()
    }

    /// Subscribe to the provider's device-change notifications
    ///
    /// The host's event loop should call
    /// [`refresh_devices`](Self::refresh_devices) whenever an event arrives,
    /// mirroring the platform's device-change listener.
    pub fn device_events(&self) -> broadcast::Receiver<DeviceEvent> {
        self.provider.subscribe_device_events()
    }

    /// Bring the presenter up to date and run the first device enumeration
    ///
    /// Shows the mode's panel, pushes the initial toggle labels and status
    /// lines, then refreshes the device lists.
    pub async fn start(&mut self) {
        info!(mode = ?self.config.mode, "session starting");
        self.presenter.show_mode(self.config.mode);
        self.presenter
            .set_camera_toggle_label(camera_toggle_label(self.state.camera_on));
        self.presenter
            .set_microphone_toggle_label(microphone_toggle_label(self.state.mic_muted));
        self.push_status();
        self.refresh_devices().await;
    }

    /// Re-enumerate devices and rebuild the selection lists
    ///
    /// On failure the previous catalog and presenter lists stay in effect.
    pub async fn refresh_devices(&mut self) {
        match self.provider.enumerate_devices().await {
            Ok(devices) => {
                debug!(count = devices.len(), "devices enumerated");
                self.catalog = DeviceCatalog::from_devices(devices);
                self.repair_selections();
                self.push_device_options();
            }
            Err(err) => {
                warn!(error = %err, "device enumeration failed, keeping previous lists");
            }
        }
    }

    /// Flip the camera toggle and reconcile the stream
    pub async fn toggle_camera(&mut self) {
        self.state.camera_on = !self.state.camera_on;
        info!(camera_on = self.state.camera_on, "camera toggled");
        self.presenter
            .set_camera_toggle_label(camera_toggle_label(self.state.camera_on));
        self.reconcile().await;
    }

    /// Flip the microphone mute toggle and reconcile the stream
    pub async fn toggle_microphone(&mut self) {
        self.state.mic_muted = !self.state.mic_muted;
        info!(mic_muted = self.state.mic_muted, "microphone toggled");
        self.presenter
            .set_microphone_toggle_label(microphone_toggle_label(self.state.mic_muted));
        self.reconcile().await;
    }

    /// Select a different camera and reconcile the stream
    pub async fn select_camera(&mut self, device_id: &str) {
        self.selected_camera = Some(device_id.to_string());
        self.reconcile().await;
    }

    /// Select a different microphone and reconcile the stream
    pub async fn select_microphone(&mut self, device_id: &str) {
        self.selected_microphone = Some(device_id.to_string());
        self.reconcile().await;
    }

    /// Re-acquire the stream to match the current toggles and selections
    ///
    /// Any held stream is fully stopped first, so camera and microphone
    /// hardware is released before a new acquisition engages it. Acquisition
    /// failure leaves the handle empty, raises a presenter alert, and keeps
    /// the toggles as the user set them. Both status lines are refreshed
    /// unconditionally at the end.
    pub async fn reconcile(&mut self) {
        if let Some(mut stream) = self.active_stream.take() {
            stream.stop_all();
        }

        let constraints = self.request_constraints();
        if constraints.is_empty() {
            if self.config.mode.is_control() {
                self.presenter.set_preview(None);
            }
        } else {
            match self.provider.acquire_stream(&constraints).await {
                Ok(stream) => {
                    debug!(stream_id = %stream.id(), "stream acquired");
                    if self.config.mode.is_control() {
                        if constraints.video().is_some() {
                            self.presenter.set_preview(Some(&stream));
                        } else {
                            self.presenter.set_preview(None);
                        }
                    }
                    self.active_stream = Some(stream);
                }
                Err(err) => {
                    error!(error = %err, "stream acquisition failed");
                    self.presenter
                        .alert(&format!("Failed to access camera/mic: {err}"));
                }
            }
        }

        self.push_status();
    }

    /// The constraints the current toggles and selections map to
    ///
    /// Video is requested iff the camera is on, audio iff the microphone is
    /// unmuted, each pinned to its selected device id. A toggle that is on
    /// with no selection pins the empty id, which providers reject.
    pub fn request_constraints(&self) -> StreamConstraints {
        let video = self
            .state
            .camera_on
            .then(|| self.selected_camera.clone().unwrap_or_default());
        let audio = (!self.state.mic_muted)
            .then(|| self.selected_microphone.clone().unwrap_or_default());
        StreamConstraints::new(video, audio)
    }

    // A selection that vanished from the catalog falls back to the first
    // same-kind device.
    fn repair_selections(&mut self) {
        let camera_present = self
            .selected_camera
            .as_deref()
            .is_some_and(|id| self.catalog.contains(DeviceKind::VideoInput, id));
        if !camera_present {
            self.selected_camera = self
                .catalog
                .first_id(DeviceKind::VideoInput)
                .map(str::to_owned);
        }

        let microphone_present = self
            .selected_microphone
            .as_deref()
            .is_some_and(|id| self.catalog.contains(DeviceKind::AudioInput, id));
        if !microphone_present {
            self.selected_microphone = self
                .catalog
                .first_id(DeviceKind::AudioInput)
                .map(str::to_owned);
        }
    }

    fn push_device_options(&mut self) {
        self.presenter
            .set_camera_options(self.catalog.cameras(), self.selected_camera.as_deref());
        self.presenter.set_microphone_options(
            self.catalog.microphones(),
            self.selected_microphone.as_deref(),
        );
    }

    fn push_status(&mut self) {
        self.presenter
            .set_camera_status(camera_status(self.state.camera_on));
        self.presenter
            .set_microphone_status(microphone_status(self.state.mic_muted));
    }
}
