//! Points in screen, projected-meter, and geographic space, plus the
//! projection that converts between them.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::consts::{EARTH_RADIUS_M, HALF_CIRCUMFERENCE_M, TILE_SIZE_PX};

/// A point (or delta) in screen space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Component-wise `self + other`.
    #[must_use]
    pub fn offset_by(self, delta: Point) -> Point {
        Point { x: self.x + delta.x, y: self.y + delta.y }
    }
}

/// A position in projected Web Mercator meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Meters {
    pub x: f64,
    pub y: f64,
}

impl Meters {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    #[must_use]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Conversions the controller needs from the map's projection.
pub trait Projection {
    /// Ground distance covered by one screen pixel at `zoom`.
    fn meters_per_pixel(&self, zoom: f64) -> f64;

    /// Unproject a meter position to longitude/latitude.
    fn meters_to_lng_lat(&self, meters: Meters) -> LngLat;

    /// Project longitude/latitude to meters.
    fn lng_lat_to_meters(&self, lng_lat: LngLat) -> Meters;
}

/// Spherical Web Mercator on a 256-pixel tile pyramid (EPSG:3857).
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl WebMercator {
    /// Meters per pixel at zoom 0, where one tile spans the whole world.
    #[must_use]
    pub fn min_zoom_meters_per_pixel() -> f64 {
        HALF_CIRCUMFERENCE_M * 2.0 / TILE_SIZE_PX
    }
}

impl Projection for WebMercator {
    fn meters_per_pixel(&self, zoom: f64) -> f64 {
        Self::min_zoom_meters_per_pixel() / zoom.exp2()
    }

    fn meters_to_lng_lat(&self, meters: Meters) -> LngLat {
        let lng = meters.x / HALF_CIRCUMFERENCE_M * 180.0;
        let lat = (2.0 * (meters.y / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2).to_degrees();
        LngLat { lng, lat }
    }

    fn lng_lat_to_meters(&self, lng_lat: LngLat) -> Meters {
        let x = lng_lat.lng * HALF_CIRCUMFERENCE_M / 180.0;
        let y = (lng_lat.lat.to_radians() / 2.0 + FRAC_PI_4).tan().ln() * EARTH_RADIUS_M;
        Meters { x, y }
    }
}

/// Rotate a screen-aligned meter delta into map space for a view rolled by `roll` radians.
///
/// Screen y grows downward while map y grows northward, so the two axes
/// pick up the roll with opposite handedness.
#[must_use]
pub fn rotate_by_roll(delta: Meters, roll: f64) -> Meters {
    let cos_roll = roll.cos();
    Meters {
        x: delta.x * cos_roll + delta.y * (roll + PI).sin(),
        y: delta.y * cos_roll + delta.x * roll.sin(),
    }
}
