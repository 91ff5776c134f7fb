//! Stream handles, tracks, and acquisition constraints

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use uuid::Uuid;

/// Kind of a media track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// Video track
    Video,
    /// Audio track
    Audio,
}

/// Constraints for a combined stream request
///
/// Each side is either absent (not requested) or pinned to the exact device id
/// the caller selected. A request with neither side present is never sent to a
/// provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamConstraints {
    video: Option<String>,
    audio: Option<String>,
}

impl StreamConstraints {
    /// Build constraints from optional exact device ids
    pub fn new(video: Option<String>, audio: Option<String>) -> Self {
        Self { video, audio }
    }

    /// Exact video device id, if video is requested
    pub fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }

    /// Exact audio device id, if audio is requested
    pub fn audio(&self) -> Option<&str> {
        self.audio.as_deref()
    }

    /// Whether neither video nor audio is requested
    pub fn is_empty(&self) -> bool {
        self.video.is_none() && self.audio.is_none()
    }
}

/// Hardware lease held by a live track
///
/// Increments a shared live-track counter on creation and decrements it
/// exactly once, on explicit release or on drop.
#[derive(Debug)]
pub(crate) struct HardwareLease {
    live_tracks: Arc<AtomicUsize>,
    released: bool,
}

impl HardwareLease {
    pub(crate) fn new(live_tracks: Arc<AtomicUsize>) -> Self {
        live_tracks.fetch_add(1, Ordering::SeqCst);
        Self {
            live_tracks,
            released: false,
        }
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.live_tracks.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl Drop for HardwareLease {
    fn drop(&mut self) {
        self.release();
    }
}

/// One live capture track within a stream
///
/// Holds the hardware lease for its device. Stopping the track ends it and
/// releases the lease; the lease is also released when the track is dropped.
#[derive(Debug)]
pub struct MediaTrack {
    /// Track identifier
    pub id: String,
    /// Track kind
    pub kind: TrackKind,
    /// Id of the device this track captures from
    pub device_id: String,
    ended: bool,
    lease: Option<HardwareLease>,
}

impl MediaTrack {
    pub(crate) fn new(kind: TrackKind, device_id: impl Into<String>, lease: HardwareLease) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            device_id: device_id.into(),
            ended: false,
            lease: Some(lease),
        }
    }

    /// Stop the track and release its device
    ///
    /// Idempotent.
    pub fn stop(&mut self) {
        self.ended = true;
        self.lease.take();
    }

    /// Whether the track has been stopped
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

/// An acquired audio/video capture session
///
/// Owns one or more tracks whose hardware must be released by stopping them;
/// at most one stream handle is meant to be live at a time, with the previous
/// handle fully stopped before a new acquisition.
#[derive(Debug)]
pub struct MediaStream {
    id: Uuid,
    tracks: Vec<MediaTrack>,
}

impl MediaStream {
    pub(crate) fn new(tracks: Vec<MediaTrack>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tracks,
        }
    }

    /// Stream identity
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The stream's tracks
    pub fn tracks(&self) -> &[MediaTrack] {
        &self.tracks
    }

    /// Stop every track, releasing camera/microphone hardware
    ///
    /// Idempotent.
    pub fn stop_all(&mut self) {
        for track in &mut self.tracks {
            track.stop();
        }
    }

    /// Whether any track is still live
    pub fn is_live(&self) -> bool {
        self.tracks.iter().any(|t| !t.is_ended())
    }

    /// Whether the stream carries a video track
    pub fn has_video(&self) -> bool {
        self.tracks.iter().any(|t| t.kind == TrackKind::Video)
    }

    /// Whether the stream carries an audio track
    pub fn has_audio(&self) -> bool {
        self.tracks.iter().any(|t| t.kind == TrackKind::Audio)
    }
}
