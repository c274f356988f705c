use std::f64::consts::PI;

use super::super::*;

#[test]
fn test_right_angle() {
    let a = interior_angle(
        &R2 { x: 1., y: 0. },
        &R2 { x: 0., y: 0. },
        &R2 { x: 0., y: 1. },
    );
    assert_relative_eq!(a, PI / 2.0, epsilon = 1e-12);
}

#[test]
fn test_collinear_points_give_pi() {
    // Three collinear points: the angle at the middle one is exactly π
    // after clamping.
    let a = interior_angle(
        &R2 { x: 0., y: 0. },
        &R2 { x: 1., y: 0. },
        &R2 { x: 2., y: 0. },
    );
    assert_eq!(a, PI);
}

#[test]
fn test_folded_back_rays_give_zero() {
    // prev and next in the same direction from p
    let a = interior_angle(
        &R2 { x: 2., y: 0. },
        &R2 { x: 0., y: 0. },
        &R2 { x: 1., y: 0. },
    );
    assert_eq!(a, 0.0);
}

#[test]
fn test_nearly_antiparallel_no_nan() {
    // Rays within an ulp of anti-parallel; without clamping the cosine can
    // overshoot past -1 and acos returns NaN.
    let a = interior_angle(
        &R2 { x: -1e8, y: 1e-9 },
        &R2 { x: 0., y: 0. },
        &R2 { x: 1e8, y: 1e-9 },
    );
    assert!(a.is_finite());
    assert_relative_eq!(a, PI, epsilon = 1e-6);
}

#[test]
fn test_regular_ngon_interior_angles() {
    // Every interior angle of a regular n-gon is π·(n−2)/n.
    for n in [3usize, 4, 6, 10] {
        let p = Polygon::regular(n, 1.0);
        let nf = n as f64;
        for i in 0..n {
            let a = interior_angle(
                &p.vertices[(i + n - 1) % n],
                &p.vertices[i],
                &p.vertices[(i + 1) % n],
            );
            assert_relative_eq!(a, PI * (nf - 2.0) / nf, epsilon = 1e-10);
        }
    }
}
