//! The platform media seam
//!
//! [`MediaProvider`] abstracts the platform's media surface: device
//! enumeration, constrained stream acquisition, and device-change
//! notifications. The session controller only ever talks to this trait, so the
//! decision logic is testable without hardware; [`MockMediaProvider`] is the
//! in-memory implementation used by tests and as the default backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::debug;

use crate::devices::{DeviceEvent, DeviceInfo, DeviceKind};
use crate::error::{MediaError, MediaResult};
use crate::stream::{HardwareLease, MediaStream, MediaTrack, StreamConstraints, TrackKind};

/// Platform media surface
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Enumerate the currently available capture input devices
    async fn enumerate_devices(&self) -> MediaResult<Vec<DeviceInfo>>;

    /// Acquire a combined stream matching the constraints
    ///
    /// Each requested side is pinned to its exact device id. The returned
    /// stream engages the hardware until its tracks are stopped.
    async fn acquire_stream(&self, constraints: &StreamConstraints) -> MediaResult<MediaStream>;

    /// Subscribe to device-change notifications
    fn subscribe_device_events(&self) -> broadcast::Receiver<DeviceEvent>;
}

/// In-memory media provider for tests and unsupported platforms
///
/// Devices, failure injection, and hardware accounting are all configurable
/// after construction, so a single provider handle can drive an entire
/// session scenario.
pub struct MockMediaProvider {
    devices: Mutex<Vec<DeviceInfo>>,
    enumeration_failure: Mutex<Option<String>>,
    acquisition_failure: Mutex<Option<String>>,
    acquisitions: Mutex<Vec<StreamConstraints>>,
    live_tracks: Arc<AtomicUsize>,
    event_tx: broadcast::Sender<DeviceEvent>,
}

impl MockMediaProvider {
    /// Create a provider with no devices
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(16);
        Self {
            devices: Mutex::new(Vec::new()),
            enumeration_failure: Mutex::new(None),
            acquisition_failure: Mutex::new(None),
            acquisitions: Mutex::new(Vec::new()),
            live_tracks: Arc::new(AtomicUsize::new(0)),
            event_tx,
        }
    }

    /// Create a provider with one mock camera and one mock microphone
    pub fn with_default_devices() -> Self {
        let provider = Self::new();
        provider.set_devices(vec![
            DeviceInfo::new("mock-camera-0", "Mock Camera", DeviceKind::VideoInput),
            DeviceInfo::new("mock-mic-0", "Mock Microphone", DeviceKind::AudioInput),
        ]);
        provider
    }

    /// Replace the device set
    ///
    /// Does not fire a device-change event on its own; pair with
    /// [`notify_devices_changed`](Self::notify_devices_changed) to simulate a
    /// platform hotplug.
    pub fn set_devices(&self, devices: Vec<DeviceInfo>) {
        *self.devices.lock() = devices;
    }

    /// Make every enumeration fail with the given reason
    pub fn fail_enumeration(&self, reason: impl Into<String>) {
        *self.enumeration_failure.lock() = Some(reason.into());
    }

    /// Make every acquisition fail with the given reason
    pub fn fail_acquisition(&self, reason: impl Into<String>) {
        *self.acquisition_failure.lock() = Some(reason.into());
    }

    /// Clear any injected failures
    pub fn clear_failures(&self) {
        *self.enumeration_failure.lock() = None;
        *self.acquisition_failure.lock() = None;
    }

    /// Fire a device-change notification to all subscribers
    pub fn notify_devices_changed(&self) {
        debug!("mock provider: devices changed");
        let _ = self.event_tx.send(DeviceEvent::DevicesChanged);
    }

    /// Number of tracks whose hardware is currently engaged
    pub fn live_track_count(&self) -> usize {
        self.live_tracks.load(Ordering::SeqCst)
    }

    /// Constraints of every acquisition request received, in order
    pub fn acquisitions(&self) -> Vec<StreamConstraints> {
        self.acquisitions.lock().clone()
    }

    /// Constraints of the most recent acquisition request
    pub fn last_acquisition(&self) -> Option<StreamConstraints> {
        self.acquisitions.lock().last().cloned()
    }

    fn resolve(&self, kind: DeviceKind, device_id: &str) -> MediaResult<String> {
        let devices = self.devices.lock();
        devices
            .iter()
            .find(|d| d.kind == kind && d.id == device_id)
            .map(|d| d.id.clone())
            .ok_or_else(|| MediaError::DeviceNotFound {
                device_id: device_id.to_string(),
            })
    }
}

impl Default for MockMediaProvider {
    fn default() -> Self {
        Self::with_default_devices()
    }
}

#[async_trait]
impl MediaProvider for MockMediaProvider {
    async fn enumerate_devices(&self) -> MediaResult<Vec<DeviceInfo>> {
        if let Some(reason) = self.enumeration_failure.lock().clone() {
            return Err(MediaError::EnumerationFailed { reason });
        }
        Ok(self.devices.lock().clone())
    }

    async fn acquire_stream(&self, constraints: &StreamConstraints) -> MediaResult<MediaStream> {
        self.acquisitions.lock().push(constraints.clone());

        if let Some(reason) = self.acquisition_failure.lock().clone() {
            return Err(MediaError::AcquisitionFailed { reason });
        }
        if constraints.is_empty() {
            return Err(MediaError::AcquisitionFailed {
                reason: "no tracks requested".to_string(),
            });
        }

        let mut tracks = Vec::new();
        if let Some(device_id) = constraints.video() {
            let device_id = self.resolve(DeviceKind::VideoInput, device_id)?;
            let lease = HardwareLease::new(self.live_tracks.clone());
            tracks.push(MediaTrack::new(TrackKind::Video, device_id, lease));
        }
        if let Some(device_id) = constraints.audio() {
            let device_id = self.resolve(DeviceKind::AudioInput, device_id)?;
            let lease = HardwareLease::new(self.live_tracks.clone());
            tracks.push(MediaTrack::new(TrackKind::Audio, device_id, lease));
        }

        debug!(tracks = tracks.len(), "mock provider: stream acquired");
        Ok(MediaStream::new(tracks))
    }

    fn subscribe_device_events(&self) -> broadcast::Receiver<DeviceEvent> {
        self.event_tx.subscribe()
    }
}
