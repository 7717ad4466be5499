// Ephemeral particle emitter - bursts of short-lived sprites that animate outward and remove themselves
use std::f32::consts::TAU;
use std::ops::Range;

use bevy::prelude::*;
use rand::Rng;

use crate::easing::Easing;
use crate::math_utils::{polar_offset, random_in, FxRng};
use crate::tween::{animate_tweens, Track, Tween, Tweens};
use crate::FxSet;

pub struct EmitterPlugin;

impl Plugin for EmitterPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<EmitBurst>()
            .init_resource::<FxRng>()
            .init_resource::<FxStats>()
            .add_systems(Update, emit_bursts.in_set(FxSet::Emit))
            .add_systems(
                Update,
                track_particle_removals.in_set(FxSet::Animate).after(animate_tweens),
            );
    }
}

/// Marks the entity particles are parented to. Without one, bursts are dropped.
#[derive(Component)]
pub struct EmitterMount;

/// A transient burst particle. Lives until its tween completes.
#[derive(Component)]
pub struct Particle;

/// Running totals, used to check that every particle is removed exactly once
#[derive(Resource, Default, Debug)]
pub struct FxStats {
    pub particles_spawned: usize,
    pub particles_removed: usize,
}

impl FxStats {
    pub fn live_particles(&self) -> usize {
        self.particles_spawned.saturating_sub(self.particles_removed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleSpacing {
    /// θ_i = 2π·i/N
    Even,
    Random,
}

/// How each particle's destination offset is chosen
#[derive(Clone, Debug, PartialEq)]
pub enum Trajectory {
    Radial { spacing: AngleSpacing, radius: Range<f32> },
    Scatter { dx: Range<f32>, dy: Range<f32> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleColor {
    Fixed(Color),
    /// Random hue at fixed saturation/lightness, like `hsl(rand, 100%, 50%)`
    RandomHue { saturation: f32, lightness: f32 },
}

impl ParticleColor {
    fn pick(&self, rng: &mut impl Rng) -> Color {
        match *self {
            ParticleColor::Fixed(color) => color,
            ParticleColor::RandomHue { saturation, lightness } => {
                Color::hsl(rng.gen_range(0.0..360.0), saturation, lightness)
            }
        }
    }
}

/// Everything one burst needs. `origin` is in the mount's local space.
#[derive(Clone, Debug, PartialEq)]
pub struct EmissionRequest {
    pub origin: Vec2,
    pub count: usize,
    pub trajectory: Trajectory,
    pub duration: f32,
    pub easing: Easing,
    pub terminal_opacity: f32,
    pub terminal_scale: f32,
    pub size: f32,
    pub color: ParticleColor,
}

impl EmissionRequest {
    /// Evenly spaced ring burst; fades to nothing over one second by default
    pub fn radial(origin: Vec2, count: usize, radius: Range<f32>) -> Self {
        Self {
            origin,
            count,
            trajectory: Trajectory::Radial { spacing: AngleSpacing::Even, radius },
            duration: 1.0,
            easing: Easing::EASE_OUT,
            terminal_opacity: 0.0,
            terminal_scale: 0.0,
            size: 6.0,
            color: ParticleColor::Fixed(Color::WHITE),
        }
    }

    pub fn scatter(origin: Vec2, count: usize, dx: Range<f32>, dy: Range<f32>) -> Self {
        Self {
            trajectory: Trajectory::Scatter { dx, dy },
            ..Self::radial(origin, count, 0.0..0.0)
        }
    }

    pub fn with_duration_ms(mut self, ms: u32) -> Self {
        self.duration = ms as f32 / 1000.0;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_terminal(mut self, opacity: f32, scale: f32) -> Self {
        self.terminal_opacity = opacity;
        self.terminal_scale = scale;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: ParticleColor) -> Self {
        self.color = color;
        self
    }

    #[cfg(test)]
    pub fn with_random_angles(mut self) -> Self {
        if let Trajectory::Radial { spacing, .. } = &mut self.trajectory {
            *spacing = AngleSpacing::Random;
        }
        self
    }
}

/// Fire-and-forget burst request
#[derive(Event, Clone, Debug)]
pub struct EmitBurst(pub EmissionRequest);

/// Destination offset of every particle, relative to the origin
pub fn particle_offsets(request: &EmissionRequest, rng: &mut impl Rng) -> Vec<Vec2> {
    let n = request.count;
    match &request.trajectory {
        Trajectory::Radial { spacing, radius } => (0..n)
            .map(|i| {
                let angle = match spacing {
                    AngleSpacing::Even => TAU * i as f32 / n as f32,
                    AngleSpacing::Random => rng.gen_range(0.0..TAU),
                };
                polar_offset(angle, random_in(rng, radius))
            })
            .collect(),
        Trajectory::Scatter { dx, dy } => (0..n)
            .map(|_| Vec2::new(random_in(rng, dx), random_in(rng, dy)))
            .collect(),
    }
}

/// The single tween a particle runs: out from the origin while fading and shrinking
pub fn particle_tween(request: &EmissionRequest, offset: Vec2) -> Tween {
    Tween::new(request.duration)
        .track(Track::Translation { from: Some(request.origin), to: request.origin + offset })
        .track(Track::Scale { from: Some(1.0), to: request.terminal_scale })
        .track(Track::Opacity { from: Some(1.0), to: request.terminal_opacity })
        .ease(request.easing)
        .despawn_on_complete()
}

/// Spawn one burst under `mount`. No mount or zero count: nothing happens.
pub fn emit(
    commands: &mut Commands,
    mount: Option<Entity>,
    rng: &mut impl Rng,
    stats: &mut FxStats,
    request: &EmissionRequest,
) {
    let Some(mount) = mount else {
        debug!("No emitter mount, dropping burst of {} particles", request.count);
        return;
    };
    if request.count == 0 {
        return;
    }

    for (i, offset) in particle_offsets(request, rng).into_iter().enumerate() {
        let color = request.color.pick(rng);
        commands.spawn((
            Sprite::from_color(color, Vec2::splat(request.size)),
            Transform::from_translation(request.origin.extend(0.0)),
            Particle,
            Tweens::from(particle_tween(request, offset)),
            ChildOf(mount),
            Name::new(format!("Particle_{}", i)),
        ));
    }

    stats.particles_spawned += request.count;
    debug!("✨ Emitted {} particles at {:?}", request.count, request.origin);
}

/// System: turn queued `EmitBurst` events into particles
pub fn emit_bursts(
    mut commands: Commands,
    mut bursts: EventReader<EmitBurst>,
    mounts: Query<Entity, With<EmitterMount>>,
    mut rng: ResMut<FxRng>,
    mut stats: ResMut<FxStats>,
) {
    for EmitBurst(request) in bursts.read() {
        let mount = mounts.iter().next();
        emit(&mut commands, mount, &mut rng.0, &mut stats, request);
    }
}

/// System: count particles as they leave the world
pub fn track_particle_removals(mut removed: RemovedComponents<Particle>, mut stats: ResMut<FxStats>) {
    let count = removed.read().count();
    if count > 0 {
        stats.particles_removed += count;
        debug!("🧹 {} particles finished, {} still live", count, stats.live_particles());
    }
}
