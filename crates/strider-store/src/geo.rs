//! # Geolocation Source
//!
//! One-shot position capability used to stamp submissions with where the
//! rep was standing. Geolocation is best-effort by contract: any failure
//! degrades to a sentinel string, never to a blocked submission.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strider_core::types::LocationFix;
use thiserror::Error;
use tracing::debug;

// =============================================================================
// Types
// =============================================================================

/// A decimal-degree position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why a position could not be read.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The user refused the permission prompt.
    #[error("geolocation permission denied")]
    Denied,

    /// The capability exists but no position came back (timeout, no fix).
    #[error("position unavailable")]
    Unavailable,

    /// The platform has no geolocation capability at all.
    #[error("geolocation not supported on this platform")]
    Unsupported,
}

// =============================================================================
// Contract
// =============================================================================

/// Source of the device position.
#[async_trait]
pub trait GeolocationSource: Send + Sync {
    /// Attempts one position read.
    async fn current_position(&self) -> Result<Coordinates, GeoError>;
}

/// Resolves a position attempt into the string-backed [`LocationFix`]
/// recorded on submissions.
///
/// `Denied` and `Unavailable` collapse into the same fix: from the order's
/// point of view both mean "no coordinates", and the distinction lives in
/// the logs.
pub async fn resolve_fix(source: &dyn GeolocationSource) -> LocationFix {
    match source.current_position().await {
        Ok(coords) => {
            debug!(lat = coords.latitude, lon = coords.longitude, "position acquired");
            LocationFix::Acquired {
                latitude: coords.latitude,
                longitude: coords.longitude,
            }
        }
        Err(GeoError::Unsupported) => {
            debug!("geolocation unsupported");
            LocationFix::Unsupported
        }
        Err(err) => {
            debug!(reason = %err, "position unavailable");
            LocationFix::Unavailable
        }
    }
}

// =============================================================================
// Stub Implementations
// =============================================================================

/// Always reports the same position. The prototype's default source.
pub struct FixedPosition(pub Coordinates);

impl FixedPosition {
    /// Colombo city centre, where the demo data lives.
    pub fn colombo() -> Self {
        FixedPosition(Coordinates {
            latitude: 6.9271,
            longitude: 79.8612,
        })
    }
}

#[async_trait]
impl GeolocationSource for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Ok(self.0)
    }
}

/// Simulates a user refusing the permission prompt.
pub struct DeniedPosition;

#[async_trait]
impl GeolocationSource for DeniedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Err(GeoError::Denied)
    }
}

/// Simulates a platform with no geolocation capability.
pub struct NoGeolocation;

#[async_trait]
impl GeolocationSource for NoGeolocation {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Err(GeoError::Unsupported)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
