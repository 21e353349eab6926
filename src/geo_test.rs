#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn meters_approx_eq(a: Meters, b: Meters) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_delta_from() {
    let d = Point::new(110.0, 105.0).delta_from(Point::new(100.0, 100.0));
    assert_eq!(d, Point::new(10.0, 5.0));
}

#[test]
fn point_offset_by() {
    let p = Point::new(-2.0, 3.0).offset_by(Point::new(5.0, -1.0));
    assert_eq!(p, Point::new(3.0, 2.0));
}

// --- WebMercator scale ---

#[test]
fn meters_per_pixel_at_zoom_zero_spans_world() {
    let mpp = WebMercator.meters_per_pixel(0.0);
    assert!((mpp - 156_543.033_928_041).abs() < 1e-6);
}

#[test]
fn meters_per_pixel_halves_per_zoom_level() {
    let z10 = WebMercator.meters_per_pixel(10.0);
    let z11 = WebMercator.meters_per_pixel(11.0);
    assert!(approx_eq(z10 / z11, 2.0));
}

#[test]
fn meters_per_pixel_fractional_zoom() {
    let z = WebMercator.meters_per_pixel(10.5);
    let expected = WebMercator.meters_per_pixel(10.0) / 2.0_f64.sqrt();
    assert!(approx_eq(z, expected));
}

// --- WebMercator conversions ---

#[test]
fn origin_unprojects_to_null_island() {
    let ll = WebMercator.meters_to_lng_lat(Meters::new(0.0, 0.0));
    assert!(approx_eq(ll.lng, 0.0));
    assert!(approx_eq(ll.lat, 0.0));
}

#[test]
fn half_circumference_is_antimeridian() {
    let ll = WebMercator.meters_to_lng_lat(Meters::new(HALF_CIRCUMFERENCE_M, 0.0));
    assert!(approx_eq(ll.lng, 180.0));
}

#[test]
fn top_of_square_world_is_mercator_limit() {
    let ll = WebMercator.meters_to_lng_lat(Meters::new(0.0, HALF_CIRCUMFERENCE_M));
    assert!((ll.lat - 85.051_128_779_806_6).abs() < 1e-9);
}

#[test]
fn northern_latitude_projects_positive() {
    let m = WebMercator.lng_lat_to_meters(LngLat::new(-74.0, 40.7));
    assert!(m.x < 0.0);
    assert!(m.y > 0.0);
}

#[test]
fn projection_round_trip() {
    let ll = LngLat::new(13.405, 52.52);
    let back = WebMercator.meters_to_lng_lat(WebMercator.lng_lat_to_meters(ll));
    assert!(approx_eq(ll.lng, back.lng));
    assert!(approx_eq(ll.lat, back.lat));
}

// --- rotate_by_roll ---

#[test]
fn zero_roll_is_identity() {
    let m = Meters::new(12.0, -7.0);
    assert!(meters_approx_eq(rotate_by_roll(m, 0.0), m));
}

#[test]
fn quarter_roll_moves_x_into_y() {
    let rotated = rotate_by_roll(Meters::new(10.0, 0.0), std::f64::consts::FRAC_PI_2);
    assert!(meters_approx_eq(rotated, Meters::new(0.0, 10.0)));
}

#[test]
fn quarter_roll_moves_y_into_negative_x() {
    let rotated = rotate_by_roll(Meters::new(0.0, 10.0), std::f64::consts::FRAC_PI_2);
    assert!(meters_approx_eq(rotated, Meters::new(-10.0, 0.0)));
}

#[test]
fn half_roll_negates() {
    let rotated = rotate_by_roll(Meters::new(3.0, 4.0), PI);
    assert!(meters_approx_eq(rotated, Meters::new(-3.0, -4.0)));
}

#[test]
fn roll_preserves_length() {
    let m = Meters::new(3.0, 4.0);
    let rotated = rotate_by_roll(m, 0.7);
    assert!(approx_eq(rotated.x.hypot(rotated.y), 5.0));
}
