use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use voctor::prelude::*;

const ROUNDS: usize = 200;

// Integer-valued components keep add/sub/mul exact
fn int_vec2(rng: &mut StdRng) -> Vec2 {
    Vec2::new(rng.gen_range(-1000..1000) as f64, rng.gen_range(-1000..1000) as f64)
}

fn int_vec3(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-1000..1000) as f64,
        rng.gen_range(-1000..1000) as f64,
        rng.gen_range(-1000..1000) as f64,
    )
}

#[test]
fn add_then_sub_is_identity() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let (a, b) = (int_vec2(&mut rng), int_vec2(&mut rng));
        let s = rng.gen_range(-50..50) as f64;
        assert_eq!(a.add(b).sub(b), a);
        assert_eq!(a.add(s).sub(s), a);

        let (c, d) = (int_vec3(&mut rng), int_vec3(&mut rng));
        assert_eq!(c.add(d).sub(d), c);
        assert_eq!(c.add(s).sub(s), c);
    }
}

#[test]
fn mul_then_div_is_identity() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let a = int_vec3(&mut rng);
        // powers of two keep the round trip exact
        let s = 2f64.powi(rng.gen_range(-8..8));
        assert_eq!(a.mul(s).div(s), a);
    }
}

#[test]
fn double_inversion_is_identity() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let a = Vec2::random_with(&mut rng, 100.0);
        assert_eq!(a.inv().inv(), a);
        let b = Vec3::random_with(&mut rng, 100.0);
        assert_eq!(b.inv().inv(), b);
    }
}

#[test]
fn clone_is_independent() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let mut b = a.clone();
    assert!(b.equals(a));

    b.iadd(1.0);
    assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(b, Vec3::new(2.0, 3.0, 4.0));
}

#[test]
fn len_squared_matches_len_sq() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let a = Vec2::random_with(&mut rng, 50.0);
        assert_relative_eq!(a.len().powi(2), a.len_sq(), max_relative = 1e-12);
        let b = Vec3::random_with(&mut rng, 50.0);
        assert_relative_eq!(b.len().powi(2), b.len_sq(), max_relative = 1e-12);
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let a = Vec2::random_with(&mut rng, 10.0).add(0.1);
        assert_relative_eq!(a.normalize().len(), 1.0, max_relative = 1e-12);
        assert_eq!(a.norm(), a.normalize());

        let mut b = Vec3::random_with(&mut rng, 10.0).sub(20.0);
        let expected = b.normalize();
        b.inorm();
        assert_eq!(b, expected);
        assert_relative_eq!(b.len(), 1.0, max_relative = 1e-12);
    }
}

#[test]
fn in_place_add_returns_the_receiver() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..ROUNDS {
        let mut a = int_vec2(&mut rng);
        let b = int_vec2(&mut rng);
        let expected = a.add(b);

        let a_ptr: *const Vec2 = &a;
        let returned: *const Vec2 = a.iadd(b);
        assert_eq!(returned, a_ptr);
        assert_eq!(a, expected);
    }
}

#[test]
fn pure_ops_leave_operands_untouched() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, 4.0);
    let _ = a.add(b).mul(a).mix(b, 0.3).max(a).normalize();
    assert_eq!(a, Vec2::new(1.0, 2.0));
    assert_eq!(b, Vec2::new(3.0, 4.0));
}

#[test]
fn distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let (a, b) = (int_vec3(&mut rng), int_vec3(&mut rng));
        assert_eq!(a.dist_sq(b), b.dist_sq(a));
        assert_eq!(a.dist_sq(b), a.sub(b).len_sq());
    }
}

#[test]
fn display_round_trips() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..ROUNDS {
        let a = Vec2::random_with(&mut rng, 1e6).sub(5e5);
        assert_eq!(a.to_string().parse::<Vec2>(), Ok(a));
        let b = Vec3::random_with(&mut rng, 1e-3);
        assert_eq!(b.to_string().parse::<Vec3>(), Ok(b));
    }
}

#[test]
fn random_axes_are_sampled_independently() {
    let mut rng = StdRng::seed_from_u64(9);
    let differing = (0..ROUNDS)
        .map(|_| Vec2::random_with(&mut rng, 1.0))
        .filter(|v| v.x != v.y)
        .count();
    assert_eq!(differing, ROUNDS);
}
