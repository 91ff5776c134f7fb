//! Media layer error types
//!
//! This module defines the error types used by the device and stream layer,
//! providing clear error messages for logging and user-facing alerts.

use thiserror::Error;

/// Main error type for media layer operations
#[derive(Error, Debug)]
pub enum MediaError {
    /// Device enumeration failed
    #[error("Device enumeration failed: {reason}")]
    EnumerationFailed {
        /// Failure reason
        reason: String,
    },

    /// Stream acquisition failed
    #[error("Stream acquisition failed: {reason}")]
    AcquisitionFailed {
        /// Failure reason
        reason: String,
    },

    /// Requested device is not present
    #[error("Device not found: {device_id:?}")]
    DeviceNotFound {
        /// Device identifier
        device_id: String,
    },

    /// Permission to use a device was denied
    #[error("Permission denied: {operation}")]
    PermissionDenied {
        /// Operation that was denied
        operation: String,
    },
}

/// Result type alias for media operations
pub type MediaResult<T> = Result<T, MediaError>;

impl MediaError {
    /// Check if error is recoverable
    ///
    /// Every media layer error is recoverable: the session stays usable and a
    /// retry (toggling again or picking another device) may succeed.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Whether this error should be surfaced to the user
    ///
    /// Acquisition-side failures are alerted; enumeration failures are only
    /// logged and the previous device lists stay in effect.
    pub fn is_user_visible(&self) -> bool {
        match self {
            MediaError::EnumerationFailed { .. } => false,
            MediaError::AcquisitionFailed { .. } => true,
            MediaError::DeviceNotFound { .. } => true,
            MediaError::PermissionDenied { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MediaError::DeviceNotFound {
            device_id: "cam-7".to_string(),
        };
        assert_eq!(error.to_string(), "Device not found: \"cam-7\"");

        let error = MediaError::AcquisitionFailed {
            reason: "device busy".to_string(),
        };
        assert_eq!(error.to_string(), "Stream acquisition failed: device busy");
    }

    #[test]
    fn test_visibility_split() {
        let enumeration = MediaError::EnumerationFailed {
            reason: "backend gone".to_string(),
        };
        assert!(!enumeration.is_user_visible());
        assert!(enumeration.is_recoverable());

        let acquisition = MediaError::PermissionDenied {
            operation: "getUserMedia".to_string(),
        };
        assert!(acquisition.is_user_visible());
        assert!(acquisition.is_recoverable());
    }
}
