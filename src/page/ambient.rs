// Ambient motion - floating orbs, profile halo, scroll parallax and background glow cycling
use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

use crate::constants::*;
use crate::easing::Easing;
use crate::input::PageScrolled;
use crate::math_utils::{percent_to_world, polar_offset, random_in, FxRng};
use crate::tasks::{spawn_repeating_task, TaskFired};
use crate::tween::{Repeat, Tween, TweenCommandsExt, Tweens};

use super::{BackgroundCycle, Glow, HaloDot, Home, Orb, OrbLayer, ProfileRing};

const GLOW_COLORS: [(u8, u8, u8); GLOW_COUNT] = [(0x66, 0x7e, 0xea), (0x76, 0x4b, 0xa2), (0xf0, 0x93, 0xfb)];

fn range((min, max): (f32, f32)) -> std::ops::Range<f32> {
    min..max
}

// ===== FLOATING ORBS =====

/// Drift around `home` and breathe in scale, both forever
pub fn orb_tweens(rng: &mut impl Rng, home: Vec2) -> [Tween; 2] {
    let drift = Vec2::new(
        rng.gen_range(-ORB_DRIFT..ORB_DRIFT),
        rng.gen_range(-ORB_DRIFT..ORB_DRIFT),
    );
    [
        Tween::new(random_in(rng, &range(ORB_DRIFT_SECS)))
            .translate_to(home + drift)
            .repeat(Repeat::Forever)
            .yoyo()
            .ease(Easing::named(EASE_DRIFT)),
        Tween::new(random_in(rng, &range(ORB_PULSE_SECS)))
            .scale_to(random_in(rng, &range(ORB_PULSE_SCALE)))
            .repeat(Repeat::Forever)
            .yoyo()
            .ease(Easing::named(EASE_DRIFT)),
    ]
}

pub fn spawn_orbs(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    rng: &mut impl Rng,
    window_size: Vec2,
) {
    let layer = commands
        .spawn((
            OrbLayer,
            Transform::from_xyz(0.0, 0.0, Z_ORBS),
            Visibility::default(),
            Name::new("OrbLayer"),
        ))
        .id();
    let material = materials.add(Color::srgba(0.55, 0.6, 1.0, 0.12));

    for i in 0..ORB_COUNT {
        let size = rng.gen_range(ORB_SIZE_MIN..ORB_SIZE_MAX);
        let percent = Vec2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        let home = percent_to_world(window_size, percent);
        let [drift, pulse] = orb_tweens(rng, home);

        let mut tweens = Tweens::from(drift);
        tweens.push(pulse);
        commands.spawn((
            Orb,
            Mesh2d(meshes.add(Circle::new(size * 0.5))),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(home.extend(i as f32 * 0.01)),
            Home(home),
            tweens,
            Name::new(format!("Orb_{}", i)),
            ChildOf(layer),
        ));
    }
}

// ===== PROFILE HALO =====

pub fn halo_position(index: usize) -> Vec2 {
    polar_offset(TAU * index as f32 / HALO_COUNT as f32, HALO_RADIUS)
}

/// Overlapping halo rings around the profile, each dot with its own pulse
pub fn spawn_halo(commands: &mut Commands, rng: &mut impl Rng, profile: Entity) {
    for ring in 0..HALO_RINGS {
        for index in 0..HALO_COUNT {
            let pulse = Tween::new(random_in(rng, &range(HALO_PULSE_SECS)))
                .fade_to(1.0)
                .scale_to(random_in(rng, &range(HALO_PULSE_SCALE)))
                .repeat(Repeat::Forever)
                .yoyo()
                .delay(index as f32 * HALO_PULSE_STAGGER)
                .ease(Easing::named(EASE_DRIFT));
            let spin = Tween::new(HALO_SPIN_SECS)
                .rotate_to(-360.0)
                .repeat(Repeat::Forever)
                .ease(Easing::named(EASE_STEADY));

            let mut tweens = Tweens::from(pulse);
            tweens.push(spin);
            commands.spawn((
                HaloDot { index },
                Sprite::from_color(Color::srgba(0.94, 0.58, 0.98, 0.0), Vec2::splat(HALO_DOT_SIZE)),
                Transform::from_translation(halo_position(index).extend(0.5)),
                tweens,
                Name::new(format!("HaloDot_{}_{}", ring, index)),
                ChildOf(profile),
            ));
        }
    }
}

// ===== PARALLAX =====

/// System: shift the orb layer and turn the profile ring with the scroll offset
pub fn parallax_on_scroll(
    mut commands: Commands,
    mut scrolled: EventReader<PageScrolled>,
    layers: Query<Entity, With<OrbLayer>>,
    rings: Query<Entity, With<ProfileRing>>,
) {
    let Some(last) = scrolled.read().last() else { return };
    let parallax = last.offset * PARALLAX_FACTOR;

    for layer in layers.iter() {
        commands.tween(
            layer,
            Tween::new(PARALLAX_TWEEN_SECS)
                .translate_to(Vec2::new(0.0, parallax))
                .ease(Easing::named(EASE_STEADY)),
        );
    }
    for ring in rings.iter() {
        commands.tween(
            ring,
            Tween::new(PARALLAX_TWEEN_SECS)
                .rotate_to(-parallax)
                .ease(Easing::named(EASE_STEADY)),
        );
    }
}

// ===== BACKGROUND GLOW =====

pub fn spawn_glows(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    rng: &mut impl Rng,
    window_size: Vec2,
) {
    let mesh = meshes.add(Circle::new(GLOW_RADIUS));
    for (i, (r, g, b)) in GLOW_COLORS.into_iter().enumerate() {
        let position = glow_target(rng, window_size);
        commands.spawn((
            Glow,
            Mesh2d(mesh.clone()),
            MeshMaterial2d(materials.add(Color::srgba_u8(r, g, b, (GLOW_ALPHA * 255.0) as u8))),
            Transform::from_translation(position.extend(Z_BACKGROUND + i as f32 * 0.01)),
            Name::new(format!("Glow_{}", i)),
        ));
    }
}

/// Random glow centre inside the 10%..90% band of the window
pub fn glow_target(rng: &mut impl Rng, window_size: Vec2) -> Vec2 {
    let band = range(GLOW_PERCENT_RANGE);
    let percent = Vec2::new(random_in(rng, &band), random_in(rng, &band));
    percent_to_world(window_size, percent)
}

/// System: each run of the background task sends every glow somewhere new
pub fn cycle_background(
    mut commands: Commands,
    mut fired: EventReader<TaskFired>,
    cycle: Res<BackgroundCycle>,
    glows: Query<Entity, With<Glow>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut rng: ResMut<FxRng>,
) {
    let Some(handle) = cycle.0 else {
        fired.clear();
        return;
    };
    if fired.read().filter(|event| event.handle == handle).count() == 0 {
        return;
    }
    let window_size = window_query
        .single()
        .map(Window::size)
        .unwrap_or(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    for glow in glows.iter() {
        let target = glow_target(&mut rng.0, window_size);
        commands.tween(
            glow,
            Tween::new(GLOW_CYCLE_SECS)
                .translate_to(target)
                .ease(Easing::named(EASE_DRIFT)),
        );
    }
    debug!("🌈 Background glows retargeted");
}

/// System: B pauses or resumes the background cycle
pub fn toggle_background_cycle(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cycle: ResMut<BackgroundCycle>,
) {
    if !keyboard.just_pressed(KeyCode::KeyB) {
        return;
    }

    match cycle.0.take() {
        Some(handle) => {
            handle.cancel(&mut commands);
            info!("⏸️ Background cycle stopped");
        }
        None => {
            cycle.0 = Some(spawn_repeating_task(
                &mut commands,
                "BackgroundCycle",
                0.0,
                GLOW_CYCLE_SECS,
            ));
            info!("▶️ Background cycle resumed");
        }
    }
}
