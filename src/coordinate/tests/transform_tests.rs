//! Tests for the polar/rectangular transforms

extern crate std;

use std::f64::consts::{FRAC_PI_2, PI};
use crate::coordinate::{polar_to_rect, rect_to_polar, PolarCoordinate, RectangularCoordinate};
use super::test_utils::{assert_close, assert_same_angle, TOLERANCE};

#[test]
fn test_polar_to_rect_worked_example() {
    let rect = polar_to_rect(&PolarCoordinate::new(5.0, 0.785398163));
    assert_close(rect.northing(), 3.5355, 1e-4);
    assert_close(rect.easting(), 3.5355, 1e-4);
}

#[test]
fn test_polar_to_rect_zero_angle_points_north() {
    let rect = polar_to_rect(&PolarCoordinate::new(12.5, 0.0));
    std::assert_eq!(rect.northing(), 12.5);
    std::assert_eq!(rect.easting(), 0.0);
}

#[test]
fn test_rect_to_polar_worked_example() {
    let polar = rect_to_polar(&RectangularCoordinate::new(3.0, 4.0));
    assert_close(polar.distance(), 5.0, TOLERANCE);
    assert_close(polar.angle(), 0.9273, 1e-4);
}

#[test]
fn test_rect_to_polar_due_east() {
    let polar = rect_to_polar(&RectangularCoordinate::new(0.0, 4.0));
    assert_close(polar.distance(), 4.0, TOLERANCE);
    assert_close(polar.angle(), FRAC_PI_2, TOLERANCE);
}

#[test]
fn test_rect_to_polar_third_quadrant() {
    let polar = rect_to_polar(&RectangularCoordinate::new(-3.0, -4.0));
    assert_close(polar.distance(), 5.0, TOLERANCE);
    assert_close(polar.angle(), -2.214, 1e-3);
    std::assert!(polar.angle() < -FRAC_PI_2 && polar.angle() > -PI);
}

#[test]
fn test_rect_to_polar_due_south_is_positive_pi() {
    let polar = rect_to_polar(&RectangularCoordinate::new(-2.0, 0.0));
    assert_close(polar.distance(), 2.0, TOLERANCE);
    std::assert_eq!(polar.angle(), PI);
}

#[test]
fn test_rect_to_polar_origin() {
    let polar = rect_to_polar(&RectangularCoordinate::new(0.0, 0.0));
    std::assert_eq!(polar.distance(), 0.0);
    std::assert_eq!(polar.angle(), 0.0);
}

#[test]
fn test_negative_distance_is_accepted() {
    let rect = polar_to_rect(&PolarCoordinate::new(-2.0, 0.0));
    std::assert_eq!(rect.northing(), -2.0);
}

#[test]
fn test_polar_round_trip() {
    let angles = [-3.0, -PI / 3.0, 0.1, 1.0, FRAC_PI_2, 2.5, 4.0, 7.5];
    for &distance in &[0.001, 1.0, 42.0, 1000.0] {
        for &angle in &angles {
            let rect: RectangularCoordinate = PolarCoordinate::new(distance, angle).into();
            let back: PolarCoordinate = rect.into();
            assert_close(back.distance(), distance, TOLERANCE);
            assert_same_angle(back.angle(), angle);
        }
    }
}

#[test]
fn test_rectangular_round_trip() {
    let samples = [(3.0, 4.0), (-3.0, -4.0), (0.0, 4.0), (-7.25, 0.0), (1e-3, -250.0), (812.5, -0.5)];
    for &(northing, easting) in &samples {
        let back = polar_to_rect(&rect_to_polar(&RectangularCoordinate::new(northing, easting)));
        assert_close(back.northing(), northing, TOLERANCE);
        assert_close(back.easting(), easting, TOLERANCE);
    }
}
