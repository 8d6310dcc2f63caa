use log::{info, warn};
use thiserror::Error;

/// Why a pointer-capture request failed.
///
/// All capture failures are recoverable: the controller stays in crosshair
/// mode and the host may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("pointer capture request was denied")]
    Denied,
    #[error("capture surface is detached or unavailable")]
    SurfaceUnavailable,
    #[error("pointer capture is not supported by the host")]
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureStatus {
    /// Pointer is free; it acts as the pick crosshair.
    #[default]
    Released,
    /// A capture request is in flight; the outcome arrives on a later tick.
    Pending,
    /// Pointer is captured; deltas drive free-look rotation.
    Captured,
}

/// Two-phase pointer-capture state machine.
///
/// The platform request is asynchronous and can fail or be revoked outside
/// our control, so the frame loop never waits on it: `request` returns
/// immediately and the host reports the outcome later through `resolve` or
/// `revoked`.
#[derive(Debug, Default)]
pub struct PointerCapture {
    status: CaptureStatus,
    last_error: Option<CaptureError>,
}

impl PointerCapture {
    /// Ask for capture. Returns true when the host should now issue the
    /// platform request; false when one is already in flight or held.
    pub fn request(&mut self) -> bool {
        match self.status {
            CaptureStatus::Released => {
                self.status = CaptureStatus::Pending;
                true
            }
            CaptureStatus::Pending | CaptureStatus::Captured => false,
        }
    }

    /// Apply the outcome of a pending request.
    ///
    /// Outcomes that arrive with no request pending are ignored; a stale
    /// resolution must not flip the mode underneath the user.
    pub fn resolve(&mut self, outcome: Result<(), CaptureError>) {
        if self.status != CaptureStatus::Pending {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = CaptureStatus::Captured;
                info!("pointer capture acquired");
            }
            Err(err) => {
                self.status = CaptureStatus::Released;
                self.last_error = Some(err);
                warn!("pointer capture failed: {err}");
            }
        }
    }

    /// Voluntarily give capture back.
    pub fn release(&mut self) {
        self.status = CaptureStatus::Released;
    }

    /// The host lost capture without us asking (e.g. the platform revoked
    /// it). Safe to call in any state.
    pub fn revoked(&mut self) {
        if self.status == CaptureStatus::Captured {
            info!("pointer capture revoked by host");
        }
        self.status = CaptureStatus::Released;
    }

    pub fn status(&self) -> CaptureStatus {
        self.status
    }

    pub fn is_captured(&self) -> bool {
        self.status == CaptureStatus::Captured
    }

    /// Most recent failure, cleared on read.
    pub fn take_error(&mut self) -> Option<CaptureError> {
        self.last_error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_then_success_captures() {
        let mut capture = PointerCapture::default();
        assert!(capture.request());
        assert_eq!(capture.status(), CaptureStatus::Pending);
        capture.resolve(Ok(()));
        assert!(capture.is_captured());
        assert!(capture.take_error().is_none());
    }

    #[test]
    fn failure_releases_and_records_the_error() {
        let mut capture = PointerCapture::default();
        capture.request();
        capture.resolve(Err(CaptureError::Denied));
        assert_eq!(capture.status(), CaptureStatus::Released);
        assert_eq!(capture.take_error(), Some(CaptureError::Denied));
        // Error is cleared on read.
        assert!(capture.take_error().is_none());
    }

    #[test]
    fn duplicate_requests_do_not_restart_the_handshake() {
        let mut capture = PointerCapture::default();
        assert!(capture.request());
        assert!(!capture.request());
        capture.resolve(Ok(()));
        assert!(!capture.request());
    }

    #[test]
    fn stale_resolution_is_ignored() {
        let mut capture = PointerCapture::default();
        capture.resolve(Ok(()));
        assert_eq!(capture.status(), CaptureStatus::Released);
    }

    #[test]
    fn external_revocation_releases_capture() {
        let mut capture = PointerCapture::default();
        capture.request();
        capture.resolve(Ok(()));
        capture.revoked();
        assert_eq!(capture.status(), CaptureStatus::Released);
    }
}
