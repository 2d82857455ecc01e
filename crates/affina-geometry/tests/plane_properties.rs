use affina_algebra::{Mat4F32, QuatF32, Vec3F32};
use affina_geometry::Plane;
use approx::assert_relative_eq;

#[test]
fn plane_from_unit_triangle() {
    let plane = Plane::from_vertices(
        Vec3F32::ZERO,
        Vec3F32::new(1.0, 0.0, 0.0),
        Vec3F32::new(0.0, 1.0, 0.0),
    );
    assert_relative_eq!(plane.normal.z, 1.0);
    assert_relative_eq!(plane.d, 0.0);
    // Every input vertex lies on the plane.
    assert_relative_eq!(plane.dot_coordinate(Vec3F32::ZERO), 0.0);
    assert_relative_eq!(plane.dot_coordinate(Vec3F32::new(1.0, 0.0, 0.0)), 0.0);
}

#[test]
fn plane_round_trips_through_inverse_transforms() {
    let plane = Plane::from_vertices(
        Vec3F32::new(0.0, 0.0, 1.0),
        Vec3F32::new(1.0, 0.0, 1.0),
        Vec3F32::new(0.0, 1.0, 1.0),
    );

    let mut m = Mat4F32::IDENTITY;
    m.set_translation(Vec3F32::new(3.0, -1.0, 2.0));
    let inv = m.invert().unwrap();

    let there = plane.transform(&m).unwrap();
    let back = there.transform(&inv).unwrap();
    assert_relative_eq!(back.normal.x, plane.normal.x, epsilon = 1e-5);
    assert_relative_eq!(back.normal.y, plane.normal.y, epsilon = 1e-5);
    assert_relative_eq!(back.normal.z, plane.normal.z, epsilon = 1e-5);
    assert_relative_eq!(back.d, plane.d, epsilon = 1e-5);
}

#[test]
fn rotated_plane_agrees_with_rotated_points() {
    let plane = Plane::new(Vec3F32::UNIT_X, -1.0);
    let q = QuatF32::from_axis_angle(Vec3F32::UNIT_Z, std::f32::consts::FRAC_PI_2);
    let rotated = plane.rotate(q);

    // The point (1, 0, 0) lies on the original plane; its rotated image
    // must lie on the rotated plane.
    let image = Vec3F32::UNIT_X.rotate(q);
    assert_relative_eq!(rotated.dot_coordinate(image), 0.0, epsilon = 1e-6);
}

#[test]
fn frozen_plane_reads_back() {
    let frozen = Plane::new(Vec3F32::UNIT_Y, 2.0).freeze();
    assert_eq!(frozen.d, 2.0);
    assert_eq!(frozen.dot_normal(Vec3F32::UNIT_Y), 1.0);
}
