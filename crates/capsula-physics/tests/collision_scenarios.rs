//! End-to-end collision scenarios through the public API.

use approx::assert_relative_eq;
use capsula_physics::{
    AbstractShape, Capsule, Capsule3D, CollisionError, Point, Shape, Shape2D, Shape3D, ShapeType,
    Sphere,
};
use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

fn rod() -> Capsule3D {
    Capsule::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), 1.0).unwrap()
}

#[test]
fn sphere_centered_on_the_segment_collides() {
    let capsule: Shape3D = rod().into();
    let sphere: Shape3D = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap().into();
    assert_eq!(capsule.collides(&sphere), Ok(true));
    assert_eq!(sphere.collides(&capsule), Ok(true));
}

#[test]
fn identity_pose_matches_untransformed_capsule_sphere_test() {
    let mut capsule: Shape3D =
        Capsule::new(Vec3::new(-2.0, 1.0, 0.0), Vec3::new(4.0, 1.0, 3.0), 0.6)
            .unwrap()
            .into();
    // (center, radius, expected): beside the midpoint, well above it, past b.
    let cases = [
        (Vec3::new(1.0, 1.5, 1.5), 0.2, true),
        (Vec3::new(1.0, 4.0, 1.5), 0.5, false),
        (Vec3::new(6.0, 1.0, 4.0), 1.8, true),
    ];
    let mut spheres = Vec::new();
    for (center, radius, expected) in cases {
        let sphere: Shape3D = Sphere::new(center, radius).unwrap().into();
        assert_eq!(capsule.collides(&sphere), Ok(expected));
        spheres.push((sphere, expected));
    }

    capsule.apply_transformation_matrix(&Mat4::IDENTITY);
    for (mut sphere, expected) in spheres {
        sphere.apply_transformation_matrix(&Mat4::IDENTITY);
        assert_eq!(capsule.collides(&sphere), Ok(expected));
        assert_eq!(sphere.collides(&capsule), Ok(expected));
    }
}

#[test]
fn long_capsule_touching_at_radius_does_not_collide() {
    let capsule: Shape3D = Capsule::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4000.0), 1.0)
        .unwrap()
        .into();
    let point: Shape3D = Point::new(Vec3::new(1.0, 0.0, 1200.7)).into();
    assert_eq!(capsule.collides(&point), Ok(false));
    assert_eq!(point.collides(&capsule), Ok(false));

    let inside: Shape3D = Point::new(Vec3::new(0.99, 0.0, 1200.7)).into();
    assert_eq!(capsule.collides(&inside), Ok(true));
}

#[test]
fn sphere_off_to_the_side_misses() {
    let capsule: Shape3D = rod().into();
    let sphere: Shape3D = Sphere::new(Vec3::new(3.0, 0.0, 5.0), 1.0).unwrap().into();
    assert_eq!(capsule.collides(&sphere), Ok(false));
}

#[test]
fn uniform_scale_doubles_radius_under_rotation() {
    let mut capsule = rod();
    let m = Mat4::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.9),
        Vec3::new(-4.0, 0.0, 1.0),
    );
    capsule.apply_transformation_matrix(&m);
    assert_relative_eq!(capsule.transformed_radius(), 2.0, epsilon = 1e-5);
}

#[test]
fn scaled_capsule_reaches_further() {
    let mut capsule: Shape3D = rod().into();
    let point: Shape3D = Point::new(Vec3::new(1.5, 0.0, 5.0)).into();
    assert_eq!(capsule.collides(&point), Ok(false));

    capsule.apply_transformation_matrix(&Mat4::from_scale(Vec3::splat(2.0)));
    // Segment now spans z in [0, 20] with radius 2.
    assert_eq!(capsule.collides(&point), Ok(true));
}

#[test]
fn frame_loop_updates_then_queries() {
    let mut shapes: Vec<Shape2D> = vec![
        Capsule::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), 0.25)
            .unwrap()
            .into(),
        Sphere::new(Vec2::ZERO, 0.5).unwrap().into(),
        Point::new(Vec2::ZERO).into(),
    ];

    let mut contacts_per_frame = Vec::new();
    for frame in 0..4u8 {
        let offset = f32::from(frame);
        shapes[1].apply_transformation_matrix(&Mat3::from_translation(Vec2::new(0.0, offset)));
        shapes[2].apply_transformation_matrix(&Mat3::from_translation(Vec2::new(offset, 0.0)));

        let mut contacts = 0;
        for (i, a) in shapes.iter().enumerate() {
            for b in &shapes[i + 1..] {
                if a.shape_type().has_test_against(b.shape_type()) && a.collides(b).unwrap() {
                    contacts += 1;
                }
            }
        }
        contacts_per_frame.push(contacts);
    }
    // frame 0: all three overlap at the origin
    // frame 1: sphere at (0, 1) clears the capsule, point at (1, 0) still on it
    // frame 2+: everything apart
    assert_eq!(contacts_per_frame, vec![3, 1, 0, 0]);
}

#[test]
fn capsule_pairs_are_rejected() {
    let a: Shape3D = rod().into();
    let b: Shape3D = rod().into();
    assert_eq!(
        a.collides(&b),
        Err(CollisionError::UnsupportedPair {
            first: ShapeType::Capsule,
            second: ShapeType::Capsule,
        })
    );
    assert!(!ShapeType::Capsule.has_test_against(ShapeType::Capsule));
}

#[test]
fn every_pair_is_symmetric() {
    let shapes: Vec<Shape<Vec3>> = vec![
        Point::new(Vec3::new(0.0, 1.2, 4.0)).into(),
        Sphere::new(Vec3::new(0.0, 1.5, 9.0), 0.3).unwrap().into(),
        rod().into(),
        Sphere::new(Vec3::new(2.0, 0.0, -1.0), 1.3).unwrap().into(),
    ];
    for a in &shapes {
        for b in &shapes {
            assert_eq!(a.collides(b), b.collides(a).map_err(|err| match err {
                CollisionError::UnsupportedPair { first, second } => {
                    CollisionError::UnsupportedPair {
                        first: second,
                        second: first,
                    }
                }
                other => other,
            }));
        }
    }
}
