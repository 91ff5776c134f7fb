//! End-to-end session scenarios
//!
//! Full journeys through load, toggling, device hotplug, and acquisition
//! failure, asserting what the user-facing surface sees at each step.

use std::sync::Arc;

use camcast::{
    DeviceInfo, DeviceKind, DisplayMode, MockMediaProvider, PresenterEvent, RecordingPresenter,
    SessionController, StatusColor,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("camcast=debug,camcast_media=debug")
        .with_test_writer()
        .try_init();
}

fn provider() -> Arc<MockMediaProvider> {
    let provider = MockMediaProvider::new();
    provider.set_devices(vec![
        DeviceInfo::new("cam-front", "Front Camera", DeviceKind::VideoInput),
        DeviceInfo::new("mic-usb", "USB Microphone", DeviceKind::AudioInput),
    ]);
    Arc::new(provider)
}

// ============================================================================
// LOAD SCENARIOS
// ============================================================================

#[tokio::test]
async fn test_load_without_query_shows_obs_display() {
    init_tracing();
    let provider = provider();
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .query("")
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;

    assert_eq!(presenter.last_mode(), Some(DisplayMode::Obs));
    assert_eq!(
        presenter.last_camera_status().unwrap().color,
        StatusColor::Alert
    );
    assert_eq!(
        presenter.last_microphone_status().unwrap().color,
        StatusColor::Warning
    );
    assert!(session.active_stream().is_none());
    assert!(provider.acquisitions().is_empty());
}

#[tokio::test]
async fn test_load_with_control_query_shows_control_panel() {
    init_tracing();
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .query("mode=control")
        .provider(provider())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;

    assert_eq!(presenter.last_mode(), Some(DisplayMode::Control));
    assert!(session.mode().is_control());
}

// ============================================================================
// FULL TOGGLE JOURNEY
// ============================================================================

#[tokio::test]
async fn test_camera_then_microphone_journey() {
    init_tracing();
    let provider = provider();
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .query("mode=control")
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;

    // Turn the camera on: video-only request, preview attached, status green.
    session.toggle_camera().await;
    let constraints = provider.last_acquisition().unwrap();
    assert_eq!(constraints.video(), Some("cam-front"));
    assert_eq!(constraints.audio(), None);

    let stream_id = session.active_stream().unwrap().id();
    assert_eq!(presenter.last_preview(), Some(Some(stream_id)));
    assert_eq!(
        presenter.last_camera_status().unwrap().color,
        StatusColor::Affirmative
    );

    // Unmute the microphone: one combined request replaces the stream.
    session.toggle_microphone().await;
    let constraints = provider.last_acquisition().unwrap();
    assert_eq!(constraints.video(), Some("cam-front"));
    assert_eq!(constraints.audio(), Some("mic-usb"));

    let replacement_id = session.active_stream().unwrap().id();
    assert_ne!(stream_id, replacement_id);
    assert_eq!(provider.live_track_count(), 2);
    assert_eq!(presenter.last_preview(), Some(Some(replacement_id)));
}

#[tokio::test]
async fn test_preview_cleared_when_nothing_requested() {
    init_tracing();
    let provider = provider();
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .query("mode=control")
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;
    session.toggle_camera().await;
    assert!(presenter.last_preview().unwrap().is_some());

    session.toggle_camera().await;
    assert_eq!(presenter.last_preview(), Some(None));
    assert_eq!(provider.live_track_count(), 0);
}

#[tokio::test]
async fn test_audio_only_stream_does_not_occupy_the_preview() {
    init_tracing();
    let provider = provider();
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .query("mode=control")
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;
    session.toggle_microphone().await;

    assert!(session.active_stream().unwrap().has_audio());
    assert_eq!(presenter.last_preview(), Some(None));
}

#[tokio::test]
async fn test_obs_mode_never_touches_the_preview() {
    init_tracing();
    let provider = provider();
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;
    session.toggle_camera().await;
    session.toggle_camera().await;

    assert!(!presenter
        .events()
        .iter()
        .any(|e| matches!(e, PresenterEvent::Preview(_))));
}

// ============================================================================
// FAILURE SCENARIOS
// ============================================================================

#[tokio::test]
async fn test_acquisition_failure_alerts_and_leaves_no_stream() {
    init_tracing();
    let provider = provider();
    provider.fail_acquisition("Permission denied");
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .query("mode=control")
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;
    session.toggle_camera().await;

    let alert = presenter.last_alert().unwrap();
    assert!(alert.starts_with("Failed to access camera/mic: "));
    assert!(alert.contains("Permission denied"));

    assert!(session.active_stream().is_none());
    assert_eq!(provider.live_track_count(), 0);

    // The toggle stays as the user set it, and the status line reflects that
    // intent even though no hardware is engaged.
    assert!(session.is_camera_on());
    assert_eq!(
        presenter.last_camera_status().unwrap().color,
        StatusColor::Affirmative
    );
}

#[tokio::test]
async fn test_session_recovers_after_acquisition_failure() {
    init_tracing();
    let provider = provider();
    provider.fail_acquisition("device busy");
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;
    session.toggle_camera().await;
    assert_eq!(presenter.alert_count(), 1);
    assert!(session.active_stream().is_none());

    // The user retries once the device frees up.
    provider.clear_failures();
    session.reconcile().await;

    assert!(session.active_stream().is_some());
    assert_eq!(provider.live_track_count(), 1);
    assert_eq!(presenter.alert_count(), 1);
}

#[tokio::test]
async fn test_acquisition_with_no_devices_surfaces_device_not_found() {
    init_tracing();
    let provider = Arc::new(MockMediaProvider::new());
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;
    session.toggle_camera().await;

    // No camera exists, so the request pins the empty id and the provider
    // rejects it; the session stays consistent.
    let alert = presenter.last_alert().unwrap();
    assert!(alert.starts_with("Failed to access camera/mic: "));
    assert!(session.active_stream().is_none());
    assert!(session.is_camera_on());
}

// ============================================================================
// DEVICE HOTPLUG SCENARIOS
// ============================================================================

#[tokio::test]
async fn test_device_change_event_drives_a_refresh() {
    init_tracing();
    let provider = provider();
    let presenter = RecordingPresenter::new();
    let mut session = SessionController::builder()
        .query("mode=control")
        .provider(provider.clone())
        .presenter(Box::new(presenter.clone()))
        .build();

    session.start().await;
    let mut events = session.device_events();
    assert_eq!(
        presenter.camera_option_labels().unwrap(),
        vec!["Front Camera".to_string()]
    );

    provider.set_devices(vec![
        DeviceInfo::new("cam-front", "Front Camera", DeviceKind::VideoInput),
        DeviceInfo::new("cam-usb", "", DeviceKind::VideoInput),
        DeviceInfo::new("mic-usb", "USB Microphone", DeviceKind::AudioInput),
    ]);
    provider.notify_devices_changed();

    // The host's event loop reacts to the notification with a refresh.
    events.recv().await.unwrap();
    session.refresh_devices().await;

    assert_eq!(
        presenter.camera_option_labels().unwrap(),
        vec!["Front Camera".to_string(), "Camera 2".to_string()]
    );
}
