//! Capture device descriptors and the partitioned device catalog

use std::fmt;

/// Kind of a capture input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Camera / video input
    VideoInput,
    /// Microphone / audio input
    AudioInput,
}

impl DeviceKind {
    /// Human-readable fallback label prefix for devices of this kind
    pub fn fallback_prefix(&self) -> &'static str {
        match self {
            DeviceKind::VideoInput => "Camera",
            DeviceKind::AudioInput => "Microphone",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::VideoInput => write!(f, "videoinput"),
            DeviceKind::AudioInput => write!(f, "audioinput"),
        }
    }
}

/// Descriptor for one capture input device
///
/// A read-only snapshot as reported by the platform. The label may be empty
/// when the platform withholds it (e.g. before a permission grant); catalogs
/// substitute a positional fallback label in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Stable platform identifier
    pub id: String,
    /// Human-readable label, possibly empty
    pub label: String,
    /// Device kind
    pub kind: DeviceKind,
}

impl DeviceInfo {
    /// Create a new device descriptor
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Device-change notifications emitted by a media provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// The set of available capture devices changed
    DevicesChanged,
}

/// An enumeration snapshot partitioned into ordered camera and microphone lists
///
/// Devices keep their enumeration order within each kind. Devices reporting an
/// empty label get a display label of the form `Camera N` / `Microphone N`,
/// where `N` is the 1-based position among same-kind devices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceCatalog {
    cameras: Vec<DeviceInfo>,
    microphones: Vec<DeviceInfo>,
}

impl DeviceCatalog {
    /// Partition an enumeration snapshot into a catalog
    pub fn from_devices(devices: Vec<DeviceInfo>) -> Self {
        let mut cameras = Vec::new();
        let mut microphones = Vec::new();

        for device in devices {
            match device.kind {
                DeviceKind::VideoInput => cameras.push(device),
                DeviceKind::AudioInput => microphones.push(device),
            }
        }

        apply_fallback_labels(&mut cameras);
        apply_fallback_labels(&mut microphones);

        Self {
            cameras,
            microphones,
        }
    }

    /// Available cameras, in enumeration order
    pub fn cameras(&self) -> &[DeviceInfo] {
        &self.cameras
    }

    /// Available microphones, in enumeration order
    pub fn microphones(&self) -> &[DeviceInfo] {
        &self.microphones
    }

    /// Whether a device with the given kind and id is present
    pub fn contains(&self, kind: DeviceKind, id: &str) -> bool {
        self.of_kind(kind).iter().any(|d| d.id == id)
    }

    /// Id of the first device of the given kind, if any
    pub fn first_id(&self, kind: DeviceKind) -> Option<&str> {
        self.of_kind(kind).first().map(|d| d.id.as_str())
    }

    /// Whether the catalog holds no devices at all
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty() && self.microphones.is_empty()
    }

    fn of_kind(&self, kind: DeviceKind) -> &[DeviceInfo] {
        match kind {
            DeviceKind::VideoInput => &self.cameras,
            DeviceKind::AudioInput => &self.microphones,
        }
    }
}

fn apply_fallback_labels(devices: &mut [DeviceInfo]) {
    for (index, device) in devices.iter_mut().enumerate() {
        if device.label.trim().is_empty() {
            device.label = format!("{} {}", device.kind.fallback_prefix(), index + 1);
        }
    }
}
