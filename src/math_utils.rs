use std::ops::Range;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::SEED_ENV_VAR;

/// Shared RNG for every randomized effect; seedable so runs can be replayed
#[derive(Resource)]
pub struct FxRng(pub StdRng);

impl FxRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seed from `BIO_FX_SEED` when it holds a u64, entropy otherwise
    pub fn from_env() -> Self {
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(seed) => {
                    info!("🎲 Using fixed effect seed {}", seed);
                    Self::seeded(seed)
                }
                Err(_) => {
                    warn!("Ignoring {}={:?}: not a u64 seed", SEED_ENV_VAR, raw);
                    Self(StdRng::from_entropy())
                }
            },
            Err(_) => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for FxRng {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Uniform sample from a half-open range; an empty range yields its start
pub fn random_in(rng: &mut impl Rng, range: &Range<f32>) -> f32 {
    if range.end > range.start {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

/// Offset of length `radius` at `angle` radians, measured from +X
pub fn polar_offset(angle: f32, radius: f32) -> Vec2 {
    Vec2::from_angle(angle) * radius
}

/// Convert a window percentage (0..100 on each axis, top-left origin like CSS)
/// into centred world coordinates with Y up
pub fn percent_to_world(window_size: Vec2, percent: Vec2) -> Vec2 {
    let fraction = percent / 100.0;
    Vec2::new(
        (fraction.x - 0.5) * window_size.x,
        (0.5 - fraction.y) * window_size.y,
    )
}

/// Axis-aligned point-in-box test against a node's global transform
pub fn hit_test(point: Vec2, global: &GlobalTransform, half_extents: Vec2) -> bool {
    let (scale, _, translation) = global.to_scale_rotation_translation();
    let half = half_extents * scale.truncate().abs();
    (point - translation.truncate()).abs().cmple(half).all()
}
