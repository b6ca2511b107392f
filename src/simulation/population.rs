// simulation/population.rs
// Reconciles the particle pool against the chemistry state and advances
// particle kinematics. Counts are the only coupling to the chemistry;
// particles never interact with each other.

use crate::body::{Particle, Species};
use crate::simulation::ReactionState;

/// The particle pool and its random source. The pool is the sole owner of
/// its particles; the renderer only ever sees published copies.
pub struct Population {
    particles: Vec<Particle>,
    rng: fastrand::Rng,
    domain_width: f32,
    domain_height: f32,
}

impl Population {
    pub fn new(seed: u64, domain_width: f32, domain_height: f32) -> Self {
        Self {
            particles: Vec::new(),
            rng: fastrand::Rng::with_seed(seed),
            domain_width,
            domain_height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn count_of(&self, species: Species) -> usize {
        self.particles
            .iter()
            .filter(|p| p.species == species)
            .count()
    }

    pub fn set_domain(&mut self, width: f32, height: f32) {
        self.domain_width = width;
        self.domain_height = height;
    }

    fn target_count(concentration: f32, scale: f32) -> usize {
        (concentration.max(0.0) * scale).floor() as usize
    }

    /// Bring each species' particle count to `floor(concentration * scale)`.
    /// Growth keeps every existing particle and spawns the deficit; shrink
    /// keeps the first `target` particles in pool order and discards the
    /// rest. The truncation is deliberately deterministic so the same
    /// particles persist through a concentration decrease.
    pub fn reconcile(&mut self, state: &ReactionState, scale: f32) {
        let targets = [
            (Species::N2, Self::target_count(state.n2, scale)),
            (Species::H2, Self::target_count(state.h2, scale)),
            (Species::NH3, Self::target_count(state.nh3, scale)),
        ];

        let mut next = Vec::with_capacity(targets.iter().map(|(_, t)| *t).sum());
        for (species, target) in targets {
            let existing = self
                .particles
                .iter()
                .filter(|p| p.species == species)
                .take(target);
            let kept = next.len();
            next.extend(existing);
            for _ in next.len() - kept..target {
                next.push(Particle::spawn(
                    &mut self.rng,
                    species,
                    state.temperature,
                    self.domain_width,
                    self.domain_height,
                ));
            }
        }
        self.particles = next;
    }

    /// Advance every particle by one kinematics frame. Displacement scales
    /// with sqrt(T): kinetic energy tracks temperature, so mean speed goes
    /// as its square root. A coordinate leaving the domain flips that axis'
    /// velocity sign; the position itself is not clamped, so a one-frame
    /// overshoot before the bounce is expected.
    pub fn tick(&mut self, temperature: f32) {
        let speed_multiplier = temperature.sqrt();
        for p in &mut self.particles {
            p.pos += p.vel * speed_multiplier;

            if p.pos.x < 0.0 || p.pos.x > self.domain_width {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.domain_height {
                p.vel.y = -p.vel.y;
            }
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[cfg(test)]
    pub fn push_for_test(
        &mut self,
        pos: ultraviolet::Vec2,
        vel: ultraviolet::Vec2,
        species: Species,
    ) -> u64 {
        let p = Particle::new(pos, vel, species);
        let id = p.id;
        self.particles.push(p);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultraviolet::Vec2;

    fn state(n2: f32, h2: f32, nh3: f32, temperature: f32) -> ReactionState {
        ReactionState {
            n2,
            h2,
            nh3,
            temperature,
        }
    }

    #[test]
    fn reconcile_hits_floor_of_scaled_concentration() {
        let mut pool = Population::new(1, 400.0, 300.0);
        pool.reconcile(&state(1.5, 1.5, 0.5, 1.2), 25.0);
        assert_eq!(pool.count_of(Species::N2), 37); // floor(1.5 * 25)
        assert_eq!(pool.count_of(Species::H2), 37);
        assert_eq!(pool.count_of(Species::NH3), 12); // floor(0.5 * 25)
    }

    #[test]
    fn reconcile_is_idempotent_at_target() {
        let mut pool = Population::new(1, 400.0, 300.0);
        pool.reconcile(&state(1.0, 2.0, 0.4, 1.0), 25.0);
        let ids: Vec<u64> = pool.particles().iter().map(|p| p.id).collect();
        pool.reconcile(&state(1.0, 2.0, 0.4, 1.0), 25.0);
        let after: Vec<u64> = pool.particles().iter().map(|p| p.id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn growth_keeps_existing_particles() {
        let mut pool = Population::new(1, 400.0, 300.0);
        pool.reconcile(&state(1.0, 0.0, 0.0, 1.0), 25.0);
        let ids: Vec<u64> = pool.particles().iter().map(|p| p.id).collect();
        pool.reconcile(&state(2.0, 0.0, 0.0, 1.0), 25.0);
        assert_eq!(pool.count_of(Species::N2), 50);
        let after: Vec<u64> = pool.particles().iter().map(|p| p.id).collect();
        assert_eq!(&after[..ids.len()], &ids[..]);
    }

    #[test]
    fn shrink_keeps_pool_order_prefix() {
        let mut pool = Population::new(1, 400.0, 300.0);
        pool.reconcile(&state(2.0, 0.0, 0.0, 1.0), 25.0);
        let ids: Vec<u64> = pool.particles().iter().map(|p| p.id).collect();
        pool.reconcile(&state(1.0, 0.0, 0.0, 1.0), 25.0);
        let after: Vec<u64> = pool.particles().iter().map(|p| p.id).collect();
        assert_eq!(after.len(), 25);
        assert_eq!(&after[..], &ids[..25]);
    }

    #[test]
    fn species_reconcile_independently() {
        let mut pool = Population::new(1, 400.0, 300.0);
        pool.reconcile(&state(2.0, 1.0, 1.0, 1.0), 25.0);
        let h2_ids: Vec<u64> = pool
            .particles()
            .iter()
            .filter(|p| p.species == Species::H2)
            .map(|p| p.id)
            .collect();
        // Shrink N2, leave H2 and NH3 alone.
        pool.reconcile(&state(0.5, 1.0, 1.0, 1.0), 25.0);
        let h2_after: Vec<u64> = pool
            .particles()
            .iter()
            .filter(|p| p.species == Species::H2)
            .map(|p| p.id)
            .collect();
        assert_eq!(h2_ids, h2_after);
    }

    #[test]
    fn wall_exit_flips_velocity_component() {
        let mut pool = Population::new(1, 400.0, 300.0);
        pool.push_for_test(Vec2::new(-1.0, 150.0), Vec2::new(-2.0, 0.5), Species::N2);
        pool.tick(1.0);
        let p = pool.particles()[0];
        assert!(p.vel.x > 0.0, "outward x velocity must be reflected");
        assert_eq!(p.vel.y, 0.5, "y velocity untouched by an x bounce");
    }

    #[test]
    fn inner_particle_is_not_reflected() {
        let mut pool = Population::new(1, 400.0, 300.0);
        pool.push_for_test(Vec2::new(200.0, 150.0), Vec2::new(1.5, -0.5), Species::H2);
        pool.tick(1.0);
        let p = pool.particles()[0];
        assert_eq!(p.vel.x, 1.5);
        assert_eq!(p.vel.y, -0.5);
    }

    #[test]
    fn displacement_scales_with_sqrt_temperature() {
        let mut pool = Population::new(1, 400.0, 300.0);
        pool.push_for_test(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), Species::NH3);
        pool.tick(4.0);
        let p = pool.particles()[0];
        assert!((p.pos.x - 102.0).abs() < 1.0e-4); // vel * sqrt(4)
    }
}
