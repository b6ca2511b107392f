// body/types.rs
// Contains the Species enum and the Particle struct

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use ultraviolet::Vec2;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Species {
    N2,
    H2,
    NH3,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::N2, Species::H2, Species::NH3];

    /// Display color (RGBA) used by the rendering collaborator.
    pub fn color(&self) -> [u8; 4] {
        match self {
            Species::N2 => [59, 130, 246, 255],
            Species::H2 => [148, 163, 184, 255],
            Species::NH3 => [239, 68, 68, 255],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Species::N2 => "N2",
            Species::H2 => "H2",
            Species::NH3 => "NH3",
        }
    }
}

/// One visual token representing a single molecule instance. Particles carry
/// no chemistry; only their per-species counts track the reaction state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Particle {
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub species: Species,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, species: Species) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            pos,
            vel,
            species,
        }
    }

    /// Spawn a particle at a uniformly random position inside the domain
    /// with a random velocity whose per-axis magnitude envelope grows with
    /// temperature. Randomness comes from the caller's seeded generator so
    /// spawn behavior is reproducible under test.
    pub fn spawn(
        rng: &mut fastrand::Rng,
        species: Species,
        temperature: f32,
        domain_width: f32,
        domain_height: f32,
    ) -> Self {
        let pos = Vec2::new(rng.f32() * domain_width, rng.f32() * domain_height);
        let speed_envelope = config::SPAWN_SPEED_BASE + temperature * config::SPAWN_SPEED_PER_TEMP;
        let vel = Vec2::new(
            (rng.f32() - 0.5) * speed_envelope,
            (rng.f32() - 0.5) * speed_envelope,
        );
        Self::new(pos, vel, species)
    }
}
