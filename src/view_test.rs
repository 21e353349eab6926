#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn default_scene_is_level_at_null_island() {
    let view = SceneView::default();
    assert_eq!(view.zoom, 0.0);
    assert_eq!(view.roll, 0.0);
    assert_eq!(view.pitch, 0.0);
    assert_eq!(view.center, LngLat::new(0.0, 0.0));
    assert!(view.center_meters.x.abs() < 1e-6);
    assert!(view.center_meters.y.abs() < 1e-6);
}

#[test]
fn new_projects_center_to_meters() {
    let view = SceneView::new(LngLat::new(180.0, 0.0), 3.0);
    assert!((view.center_meters.x - crate::consts::HALF_CIRCUMFERENCE_M).abs() < 1e-6);
    assert_eq!(view.zoom(), 3.0);
}

#[test]
fn set_view_keeps_meters_in_sync() {
    let mut view = SceneView::default();
    view.set_view(LngLat::new(-74.0, 40.7));
    let expected = WebMercator.lng_lat_to_meters(LngLat::new(-74.0, 40.7));
    assert_eq!(view.center_meters(), expected);
}

#[test]
fn view_and_camera_angles_are_independent() {
    let mut view = SceneView::default();
    view.set_camera_angles(0.1, 0.2);
    assert_eq!(view.roll(), 0.0);
    assert_eq!(view.pitch(), 0.0);
    view.set_view_angles(0.3, 0.4);
    assert_eq!(view.camera_roll, 0.1);
    assert_eq!(view.camera_pitch, 0.2);
    assert_eq!(view.roll(), 0.3);
    assert_eq!(view.pitch(), 0.4);
}

#[test]
fn set_zoom_replaces_zoom() {
    let mut view = SceneView::default();
    view.set_zoom(14.25);
    assert_eq!(view.zoom(), 14.25);
}

#[test]
fn update_hooks_count_requests() {
    let mut view = SceneView::default();
    view.update_camera();
    view.update_camera();
    view.update_labels();
    assert_eq!(view.camera_updates, 2);
    assert_eq!(view.label_updates, 1);
}

#[test]
fn serialization_skips_counters() {
    let mut view = SceneView::new(LngLat::new(1.0, 2.0), 5.0);
    view.update_camera();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["zoom"], 5.0);
    assert!(json.get("camera_updates").is_none());

    let back: SceneView = serde_json::from_value(json).unwrap();
    assert_eq!(back.camera_updates, 0);
    assert_eq!(back.center, view.center);
}
