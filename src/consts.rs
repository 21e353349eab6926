//! Shared numeric constants for the interaction crate.

// ── Sensitivities ───────────────────────────────────────────────

/// Degrees of camera roll/pitch per pixel of orbit drag.
pub const ORBIT_DEGREES_PER_PIXEL: f64 = 0.1;

/// Zoom levels per pixel of vertical wheel delta.
pub const WHEEL_ZOOM_PER_PIXEL: f64 = 0.01;

// ── Projection ──────────────────────────────────────────────────

/// WGS84 equatorial radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Half the equatorial circumference, i.e. the Mercator extent from 0 to ±180°.
pub const HALF_CIRCUMFERENCE_M: f64 = std::f64::consts::PI * EARTH_RADIUS_M;

/// Edge length of a map tile in pixels.
pub const TILE_SIZE_PX: f64 = 256.0;
