//! Queries issued the way a simulated sensor and a ground-truth map generator do: over a whole
//! collection of objects, aggregated by the caller.

use itertools::iproduct;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use voxsim::math::assert_le;
use voxsim::math::float::Float;
use voxsim::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn room() -> Vec<Object> {
    vec![
        Plane::new(Point3::ORIGIN, Vec3::Z).with_color(Color::gray(128)).into(),
        Sphere::new(point3(2.0, 0.0, 1.0), 1.0).with_color(Color::RED).into(),
        Sphere::new(point3(-2.0, 3.0, 0.5), 0.5).with_color(Color::BLUE).into(),
    ]
}

/// Minimum distance over all objects, as a distance-field generator samples it.
fn scene_distance(scene: &[Object], p: Point3) -> f32 {
    scene
        .iter()
        .map(|o| o.distance_to(p))
        .fold(f32::INFINITY, f32::min)
}

/// Nearest hit over all objects. An object that cannot be ray-cast makes the whole cast fail.
fn cast(scene: &[Object], ray: &Ray) -> Result<Option<(RayHit, Color)>, ShapeError> {
    let mut nearest: Option<(RayHit, Color)> = None;
    for o in scene {
        if let Some(hit) = o.intersect_ray(ray)? {
            if nearest.map_or(true, |(best, _)| hit.distance < best.distance) {
                nearest = Some((hit, o.color()));
            }
        }
    }
    Ok(nearest)
}

#[test]
fn objects_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Object>();
    assert_send_sync::<Sphere>();
    assert_send_sync::<Cuboid>();
    assert_send_sync::<Plane>();
}

#[test]
fn distance_field_takes_nearest_surface() {
    init_logger();
    let scene = room();
    assert!(scene_distance(&scene, point3(2.0, 0.0, 1.0)).dist_to(-1.0) < 1e-6);
    assert!(scene_distance(&scene, point3(10.0, 10.0, 3.0)).dist_to(3.0) < 1e-6);
    assert!(scene_distance(&scene, point3(2.0, 0.0, 2.5)).dist_to(0.5) < 1e-6);
    assert!(scene_distance(&scene, point3(0.0, 0.0, -1.0)).dist_to(-1.0) < 1e-6);
}

#[test]
fn distance_field_grid_is_bounded_by_floor() {
    let scene = room();
    let coords = [-4.0f32, -2.0, 0.0, 2.0, 4.0];
    for (x, y, z) in iproduct!(coords.iter(), coords.iter(), [0.5f32, 1.0, 3.0].iter()) {
        let p = point3(*x, *y, *z);
        let d = scene_distance(&scene, p);
        // The floor is at z = 0, so nothing can be farther than the height above it.
        assert_le!(d, *z + 1e-6);
    }
}

#[test]
fn depth_scan_reports_nearest_object_and_its_color() {
    let scene = room();
    let origin = point3(-6.0, 0.0, 1.0);

    // Straight along +x at height 1: hits the red sphere's near side.
    let ray = Ray::new(origin, Vec3::X).with_extent(20.0);
    let (hit, color) = cast(&scene, &ray).unwrap().unwrap();
    assert_eq!(color, Color::RED);
    assert!(hit.distance.dist_to(7.0) < 1e-5, "{}", hit);

    // Aimed at the blue sphere's center: it occludes the floor behind it.
    let to_blue = (point3(-2.0, 3.0, 0.5) - origin).hat();
    let ray = Ray::new(origin, to_blue).with_extent(20.0);
    let (hit, color) = cast(&scene, &ray).unwrap().unwrap();
    assert_eq!(color, Color::BLUE);
    let expected = origin.distance_to(point3(-2.0, 3.0, 0.5)) - 0.5;
    assert!(hit.distance.dist_to(expected) < 1e-4, "{}", hit);

    // Upwards: nothing in range.
    let ray = Ray::new(origin, Vec3::Z).with_extent(20.0);
    assert_eq!(cast(&scene, &ray).unwrap(), None);

    // Out of sensor range.
    let ray = Ray::new(origin, Vec3::X).with_extent(6.5);
    assert_eq!(cast(&scene, &ray).unwrap(), None);
}

#[test]
fn depth_scan_with_a_box_fails_loudly() {
    let mut scene = room();
    scene.push(Cuboid::new(point3(0.0, 5.0, 1.0), vec3(1.0, 1.0, 1.0)).into());
    // Even a ray that would miss every object cannot be answered.
    let ray = Ray::new(point3(-6.0, 0.0, 1.0), Vec3::Z).with_extent(20.0);
    let err = cast(&scene, &ray).unwrap_err();
    assert_eq!(
        err,
        ShapeError::Unsupported {
            kind: ObjectKind::Cuboid,
            operation: "ray intersection",
        }
    );
    // Distances are still available for the same scene.
    assert!(scene_distance(&scene, point3(0.0, 5.0, 1.0)).dist_to(-1.0) < 1e-6);
}

#[test]
fn concurrent_queries_match_sequential_ones() {
    let mut scene = room();
    scene.push(Cuboid::new(point3(0.0, 5.0, 1.0), vec3(1.0, 0.5, 2.0)).into());

    let mut rng = StdRng::seed_from_u64(7);
    let points = (0..2000)
        .map(|_| {
            point3(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-1.0..5.0),
            )
        })
        .collect::<Vec<_>>();

    let sequential = points
        .iter()
        .map(|p| scene_distance(&scene, *p))
        .collect::<Vec<_>>();
    let parallel = points
        .par_iter()
        .map(|p| scene_distance(&scene, *p))
        .collect::<Vec<_>>();
    assert_eq!(sequential.len(), parallel.len());
    for (a, b) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }

    let rays_scene = room();
    let hits = points
        .par_iter()
        .map(|p| {
            let ray = Ray::new(*p, -Vec3::Z).with_extent(10.0);
            cast(&rays_scene, &ray)
        })
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    for (p, hit) in points.iter().zip(hits.iter()) {
        let expected = cast(&rays_scene, &Ray::new(*p, -Vec3::Z).with_extent(10.0)).unwrap();
        assert_eq!(*hit, expected);
        if p.z < 0.0 {
            assert_eq!(*hit, None, "ray from below the floor at {}", p);
        }
    }
}
