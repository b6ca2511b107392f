#[cfg(test)]
mod particle {
    use crate::body::{Particle, Species};
    use ultraviolet::Vec2;

    #[test]
    fn ids_are_unique() {
        let a = Particle::new(Vec2::zero(), Vec2::zero(), Species::N2);
        let b = Particle::new(Vec2::zero(), Vec2::zero(), Species::N2);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn spawn_stays_inside_domain() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, Species::H2, 1.2, 400.0, 300.0);
            assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 300.0);
        }
    }

    #[test]
    fn spawn_speed_envelope_scales_with_temperature() {
        // Per-axis speed is bounded by half the envelope 0.5 + 0.2*T.
        let mut rng = fastrand::Rng::with_seed(7);
        let hot_envelope = 0.5 + 3.0 * 0.2;
        let cold_envelope = 0.5 + 0.8 * 0.2;
        for _ in 0..200 {
            let hot = Particle::spawn(&mut rng, Species::NH3, 3.0, 400.0, 300.0);
            let cold = Particle::spawn(&mut rng, Species::NH3, 0.8, 400.0, 300.0);
            assert!(hot.vel.x.abs() <= hot_envelope / 2.0);
            assert!(hot.vel.y.abs() <= hot_envelope / 2.0);
            assert!(cold.vel.x.abs() <= cold_envelope / 2.0);
            assert!(cold.vel.y.abs() <= cold_envelope / 2.0);
        }
    }

    #[test]
    fn seeded_spawns_are_reproducible() {
        let mut a = fastrand::Rng::with_seed(42);
        let mut b = fastrand::Rng::with_seed(42);
        let pa = Particle::spawn(&mut a, Species::N2, 1.2, 400.0, 300.0);
        let pb = Particle::spawn(&mut b, Species::N2, 1.2, 400.0, 300.0);
        assert_eq!(pa.pos.x, pb.pos.x);
        assert_eq!(pa.pos.y, pb.pos.y);
        assert_eq!(pa.vel.x, pb.vel.x);
        assert_eq!(pa.vel.y, pb.vel.y);
    }
}
