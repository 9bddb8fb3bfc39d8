//! Vec3/Mat4 algebra checked against glam
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use terrain_viewer::math::{Mat4, Vec3};

const EPS: f32 = 1e-4;

fn random_vec(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-50.0..50.0),
        rng.gen_range(-50.0..50.0),
        rng.gen_range(-50.0..50.0),
    )
}

fn assert_mat_eq(ours: Mat4, oracle: glam::Mat4) {
    let ours = glam::Mat4::from(ours);
    assert!(ours.abs_diff_eq(oracle, EPS), "\n{ours}\n!=\n{oracle}");
}

#[test]
fn vector_ops_match_glam() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for _ in 0..1_000 {
        let (a, b) = (random_vec(&mut rng), random_vec(&mut rng));
        let (ga, gb) = (glam::Vec3::from(a), glam::Vec3::from(b));

        assert!(glam::Vec3::from(a + b).abs_diff_eq(ga + gb, EPS));
        assert!(glam::Vec3::from(a - b).abs_diff_eq(ga - gb, EPS));
        assert!(glam::Vec3::from(a.scale(0.25)).abs_diff_eq(ga * 0.25, EPS));
        assert!((a.dot(b) - ga.dot(gb)).abs() < 1e-2);
        assert!(glam::Vec3::from(a.cross(b)).abs_diff_eq(ga.cross(gb), 1e-2));
        assert!(glam::Vec3::from(a.normalize()).abs_diff_eq(ga.normalize(), EPS));
    }
}

#[test]
fn zero_vector_normalizes_to_zero() {
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
}

#[test]
fn constructors_match_glam() {
    let v = Vec3::new(3.0, -2.0, 7.5);
    assert_mat_eq(Mat4::translate(v), glam::Mat4::from_translation(v.into()));
    assert_mat_eq(Mat4::scale(v), glam::Mat4::from_scale(v.into()));
    assert_mat_eq(Mat4::rotate_y(0.7), glam::Mat4::from_rotation_y(0.7));
    assert_mat_eq(
        Mat4::perspective(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0),
        glam::Mat4::perspective_rh_gl(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0),
    );
    assert_mat_eq(
        Mat4::ortho(0.0, 1280.0, 0.0, 720.0, -1.0, 1.0),
        glam::Mat4::orthographic_rh_gl(0.0, 1280.0, 0.0, 720.0, -1.0, 1.0),
    );
}

#[test]
fn look_at_matches_glam_for_random_views() {
    let mut rng = ChaCha8Rng::seed_from_u64(22);
    for _ in 0..500 {
        let eye = random_vec(&mut rng);
        let center = eye + random_vec(&mut rng);
        if (center - eye).length() < 1.0 {
            continue;
        }
        let dir = (center - eye).normalize();
        if dir.y.abs() > 0.99 {
            continue;
        }
        assert_mat_eq(
            Mat4::look_at(eye, center, Vec3::Y),
            glam::Mat4::look_at_rh(eye.into(), center.into(), glam::Vec3::Y),
        );
    }
}

#[test]
fn look_at_basis_is_orthonormal_for_tilted_up() {
    let view = Mat4::look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::new(0.3, 1.0, 0.1));
    let m = glam::Mat4::from(view);
    let rows = [m.row(0).truncate(), m.row(1).truncate(), m.row(2).truncate()];
    for (i, a) in rows.iter().enumerate() {
        assert!((a.length() - 1.0).abs() < EPS);
        for b in &rows[i + 1..] {
            assert!(a.dot(*b).abs() < EPS);
        }
    }
}

#[test]
fn multiplication_is_associative_not_commutative() {
    let a = Mat4::translate(Vec3::new(1.0, 2.0, 3.0));
    let b = Mat4::rotate_y(1.1);
    let c = Mat4::scale(Vec3::new(2.0, 0.5, 4.0));

    assert_mat_eq((a * b) * c, glam::Mat4::from(a * (b * c)));
    assert_ne!(a * b, b * a);
    assert_mat_eq(a * b, glam::Mat4::from(a) * glam::Mat4::from(b));
}

#[test]
fn model_view_projection_matches_glam_pipeline() {
    let model = Mat4::translate(Vec3::new(-25.0, -5.0, -25.0));
    let view = Mat4::look_at(Vec3::new(10.0, 5.0, 30.0), Vec3::new(10.0, 5.0, 29.0), Vec3::Y);
    let proj = Mat4::perspective(45f32.to_radians(), 1280.0 / 720.0, 0.1, 100.0);
    let mvp = proj * view * model;

    let p = Vec3::new(30.0, 2.0, 40.0);
    let ours = mvp.transform_point4(p);
    let oracle = glam::Mat4::from(mvp) * glam::Vec4::new(p.x, p.y, p.z, 1.0);
    for (o, g) in ours.iter().zip(oracle.to_array()) {
        assert!((o - g).abs() < EPS);
    }
    // (30, 2, 40) in model space sits 15 units in front of the camera.
    assert!(ours[3] > 0.0);
}
