//! The view/camera collaborator the controller writes to.
//!
//! [`MapView`] is the narrow surface the renderer exposes: zoom, roll and
//! pitch on the view, the camera's own angles plus its recompute hook, the
//! map center, and the label manager's redraw hook. [`SceneView`] is a
//! plain-data implementation that hosts can render from directly.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::geo::{LngLat, Meters, Projection, WebMercator};

/// Everything the interaction controller reads from or writes to the renderer.
pub trait MapView {
    /// Current zoom level.
    fn zoom(&self) -> f64;

    /// Replace the zoom level. Bounds, if any, are the view's concern.
    fn set_zoom(&mut self, zoom: f64);

    /// View roll in radians.
    fn roll(&self) -> f64;

    /// View pitch in radians.
    fn pitch(&self) -> f64;

    /// Write roll/pitch (radians) to the view.
    fn set_view_angles(&mut self, roll: f64, pitch: f64);

    /// Write roll/pitch (radians) to the camera.
    fn set_camera_angles(&mut self, roll: f64, pitch: f64);

    /// Map center in projected meters.
    fn center_meters(&self) -> Meters;

    /// Move the map center.
    fn set_view(&mut self, center: LngLat);

    /// Ask the camera to recompute its matrices from the current state.
    fn update_camera(&mut self);

    /// Ask the tile/label manager to redraw labels for the new camera.
    fn update_labels(&mut self);
}

/// In-memory scene: view state, camera angles, and redraw bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneView {
    pub zoom: f64,
    pub roll: f64,
    pub pitch: f64,
    pub camera_roll: f64,
    pub camera_pitch: f64,
    pub center: LngLat,
    pub center_meters: Meters,
    /// Number of camera recomputes requested since creation.
    #[serde(skip)]
    pub camera_updates: u64,
    /// Number of label redraws requested since creation.
    #[serde(skip)]
    pub label_updates: u64,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(LngLat::default(), 0.0)
    }
}

impl SceneView {
    /// A level, unrotated view centered on `center` at `zoom`.
    #[must_use]
    pub fn new(center: LngLat, zoom: f64) -> Self {
        Self {
            zoom,
            roll: 0.0,
            pitch: 0.0,
            camera_roll: 0.0,
            camera_pitch: 0.0,
            center,
            center_meters: WebMercator.lng_lat_to_meters(center),
            camera_updates: 0,
            label_updates: 0,
        }
    }
}

impl MapView for SceneView {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    fn roll(&self) -> f64 {
        self.roll
    }

    fn pitch(&self) -> f64 {
        self.pitch
    }

    fn set_view_angles(&mut self, roll: f64, pitch: f64) {
        self.roll = roll;
        self.pitch = pitch;
    }

    fn set_camera_angles(&mut self, roll: f64, pitch: f64) {
        self.camera_roll = roll;
        self.camera_pitch = pitch;
    }

    fn center_meters(&self) -> Meters {
        self.center_meters
    }

    fn set_view(&mut self, center: LngLat) {
        self.center = center;
        self.center_meters = WebMercator.lng_lat_to_meters(center);
    }

    fn update_camera(&mut self) {
        self.camera_updates += 1;
    }

    fn update_labels(&mut self) {
        self.label_updates += 1;
    }
}
