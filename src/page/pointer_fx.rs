// Pointer effects - cursor trail, link hover, click reactions, fireworks and the easter egg
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::*;
use crate::easing::Easing;
use crate::emitter::{EmissionRequest, EmitBurst, ParticleColor};
use crate::input::{ClickCounter, PageClick, PointerState};
use crate::math_utils::hit_test;
use crate::tween::{Repeat, Tween, TweenCommandsExt, TweenCompleted};

use super::{CursorDot, HaloDot, HitBox, Home, LinkCard, PageContainer, ProfileImage};

const HOVER_LIFT: f32 = 10.0;
const HOVER_SHIFT: f32 = 10.0;

/// Where dot `index` of the trail heads when the pointer moves
pub fn trail_tween(index: usize, target: Vec2) -> Tween {
    let i = index as f32;
    Tween::new(CURSOR_LAG_BASE + CURSOR_LAG_STEP * i)
        .translate_to(target)
        .fade_to(1.0 - CURSOR_FADE_STEP * i)
        .scale_to(1.0 - CURSOR_SHRINK_STEP * i)
        .ease(Easing::named(EASE_SMOOTH))
}

/// Ring burst thrown from a window edge when the profile is clicked
pub fn firework_request(origin: Vec2) -> EmissionRequest {
    EmissionRequest::radial(origin, FIREWORK_COUNT, FIREWORK_RADIUS.0..FIREWORK_RADIUS.1)
        .with_duration_ms(FIREWORK_DURATION_MS)
        .with_easing(Easing::named(EASE_FIREWORK))
        .with_terminal(0.0, FIREWORK_TERMINAL_SCALE)
        .with_size(FIREWORK_SIZE)
}

/// Rainbow scatter from the centre of the page
pub fn explosion_request() -> EmissionRequest {
    EmissionRequest::scatter(
        Vec2::ZERO,
        EXPLOSION_COUNT,
        -EXPLOSION_SPREAD..EXPLOSION_SPREAD,
        -EXPLOSION_SPREAD..EXPLOSION_SPREAD,
    )
    .with_duration_ms(EXPLOSION_DURATION_MS)
    .with_easing(Easing::named(EASE_SMOOTH))
    .with_terminal(0.0, 0.0)
    .with_size(EXPLOSION_SIZE)
    .with_color(ParticleColor::RandomHue { saturation: 1.0, lightness: 0.5 })
}

/// Icon pops and tilts on hover, then settles back smoothly
pub fn icon_hover_tween(icon_home: Vec2, inside: bool) -> Tween {
    let (scale, turn, easing) = if inside {
        (1.2, -10.0, EASE_POP)
    } else {
        (1.0, 0.0, EASE_SMOOTH)
    };
    Tween::new(0.4)
        .translate_to(icon_home)
        .scale_to(scale)
        .rotate_to(turn)
        .ease(Easing::named(easing))
}

/// Press-in and release on a clicked link
pub fn link_press_tween() -> Tween {
    Tween::new(0.1)
        .scale_to(0.95)
        .yoyo()
        .repeat(Repeat::Times(1))
        .ease(Easing::named(EASE_SMOOTH))
        .no_overwrite()
}

/// Halo dot `index` swells then settles, staggered around the ring
pub fn halo_burst_tweens(index: usize) -> [Tween; 2] {
    let stagger = HALO_BURST_STAGGER * index as f32;
    [
        Tween::new(0.3)
            .scale_to(2.0)
            .fade_to(1.0)
            .delay(stagger)
            .ease(Easing::named(EASE_SMOOTH))
            .no_overwrite(),
        Tween::new(0.5)
            .scale_to(0.5)
            .fade_to(0.3)
            .delay(0.3 + stagger)
            .ease(Easing::named(EASE_SMOOTH))
            .no_overwrite(),
    ]
}

// ===== CURSOR TRAIL =====

/// System: every time the pointer moves, each trail dot chases it with its own lag
pub fn follow_pointer(
    mut commands: Commands,
    pointer: Res<PointerState>,
    mut last: Local<Option<Vec2>>,
    dots: Query<(Entity, &CursorDot)>,
) {
    if !pointer.seen || *last == Some(pointer.position) {
        return;
    }
    *last = Some(pointer.position);

    for (entity, dot) in dots.iter() {
        commands.tween(entity, trail_tween(dot.index, pointer.position));
    }
}

// ===== LINKS =====

/// System: lift and highlight the link under the pointer, restore the rest
pub fn hover_links(
    mut commands: Commands,
    pointer: Res<PointerState>,
    mut cards: Query<(Entity, &mut LinkCard, &GlobalTransform, &HitBox, &Home)>,
    parts: Query<&Home>,
) {
    if !pointer.seen {
        return;
    }

    for (entity, mut card, global, hit_box, home) in cards.iter_mut() {
        let inside = hit_test(pointer.position, global, hit_box.0);
        if inside == card.hovered {
            continue;
        }
        card.hovered = inside;

        let (card_scale, lift, shift) = if inside {
            (1.05, HOVER_LIFT, HOVER_SHIFT)
        } else {
            (1.0, 0.0, 0.0)
        };

        commands.tween(
            entity,
            Tween::new(0.4)
                .translate_to(home.0 + Vec2::Y * lift)
                .scale_to(card_scale)
                .ease(Easing::named(EASE_SMOOTH)),
        );
        if let Ok(icon_home) = parts.get(card.icon) {
            commands.tween(card.icon, icon_hover_tween(icon_home.0, inside));
        }
        if let Ok(title_home) = parts.get(card.title) {
            commands.tween(
                card.title,
                Tween::new(0.3)
                    .translate_to(title_home.0 + Vec2::X * shift)
                    .ease(Easing::named(EASE_SMOOTH)),
            );
        }
        debug!("🔗 Link {} hovered: {}", card.index, inside);
    }
}

/// System: quick press-in on clicked links
pub fn link_click_effects(
    mut commands: Commands,
    mut clicks: EventReader<PageClick>,
    cards: Query<(Entity, &GlobalTransform, &HitBox), With<LinkCard>>,
) {
    for click in clicks.read() {
        for (entity, global, hit_box) in cards.iter() {
            if hit_test(click.position, global, hit_box.0) {
                commands.tween(entity, link_press_tween());
            }
        }
    }
}

// ===== PROFILE =====

/// System: spin the profile, burst the halo and fire from both window edges
pub fn profile_click_effects(
    mut commands: Commands,
    mut clicks: EventReader<PageClick>,
    profiles: Query<(Entity, &GlobalTransform, &HitBox), With<ProfileImage>>,
    halo: Query<(Entity, &HaloDot)>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut bursts: EventWriter<EmitBurst>,
) {
    let Ok((profile, global, hit_box)) = profiles.single() else {
        clicks.clear();
        return;
    };
    let hits = clicks
        .read()
        .filter(|click| hit_test(click.position, global, hit_box.0))
        .count();
    if hits == 0 {
        return;
    }

    commands.tween(
        profile,
        Tween::new(0.6)
            .scale_to(1.2)
            .rotate_to(-360.0)
            .ease(Easing::named(EASE_POP)),
    );
    commands.tween(
        profile,
        Tween::new(0.6)
            .scale_to(1.0)
            .rotate_to(0.0)
            .delay(0.6)
            .ease(Easing::named(EASE_SMOOTH))
            .tag("profile-spin"),
    );

    let mut dots: Vec<(Entity, usize)> = halo.iter().map(|(e, dot)| (e, dot.index)).collect();
    dots.sort_by_key(|&(_, index)| index);
    for (entity, index) in dots {
        for tween in halo_burst_tweens(index) {
            commands.tween(entity, tween);
        }
    }

    let half_width = window_query
        .single()
        .map(|w| w.width() * 0.5)
        .unwrap_or(WINDOW_WIDTH * 0.5);
    bursts.write(EmitBurst(firework_request(Vec2::new(-half_width, 0.0))));
    bursts.write(EmitBurst(firework_request(Vec2::new(half_width, 0.0))));
    info!("🎆 Profile clicked, fireworks away");
}

// ===== EASTER EGG =====

/// System: every tenth click anywhere shakes the page and throws a rainbow burst
pub fn easter_egg_on_clicks(
    mut commands: Commands,
    mut clicks: EventReader<PageClick>,
    mut counter: ResMut<ClickCounter>,
    containers: Query<Entity, With<PageContainer>>,
    mut bursts: EventWriter<EmitBurst>,
) {
    for _ in clicks.read() {
        if !counter.register() {
            continue;
        }

        for container in containers.iter() {
            commands.tween(
                container,
                Tween::new(0.5)
                    .scale_to(1.1)
                    .ease(Easing::named(EASE_EASTER_EGG))
                    .yoyo()
                    .repeat(Repeat::Times(1))
                    .tag("easter-egg"),
            );
        }
        bursts.write(EmitBurst(explosion_request()));
        info!("🎉 Easter egg found!");
    }
}

/// System: note when a tagged one-shot effect has settled
pub fn report_finished_effects(mut completed: EventReader<TweenCompleted>) {
    for event in completed.read() {
        debug!("✔️ {} settled on {:?}", event.tag, event.entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{EmitterMount, EmitterPlugin, FxStats, Particle, Trajectory};
    use crate::test_utils::{advance, count, headless_app};
    use crate::tween::{NodeState, RotationDegrees, Track, TweenPlugin, Tweens};
    use crate::FxSet;

    fn click_app() -> App {
        let mut app = headless_app(50, 8);
        app.add_plugins((TweenPlugin, EmitterPlugin))
            .add_event::<PageClick>()
            .add_systems(Update, profile_click_effects.in_set(FxSet::Effects));
        app.world_mut()
            .spawn((EmitterMount, Transform::default(), Visibility::default()));
        let at = Transform::from_xyz(0.0, 230.0, 2.0);
        app.world_mut().spawn((
            ProfileImage,
            at,
            GlobalTransform::from(at),
            HitBox(Vec2::splat(60.0)),
        ));
        app
    }

    fn particle_xs(app: &mut App) -> Vec<f32> {
        let world = app.world_mut();
        world
            .query_filtered::<&Transform, With<Particle>>()
            .iter(world)
            .map(|t| t.translation.x)
            .collect()
    }

    fn x_of(app: &App, entity: Entity) -> f32 {
        app.world().get::<Transform>(entity).map_or(f32::NAN, |t| t.translation.x)
    }

    fn y_of(app: &App, entity: Entity) -> f32 {
        app.world().get::<Transform>(entity).map_or(f32::NAN, |t| t.translation.y)
    }

    #[test]
    fn link_press_eases_smoothly() {
        let mut tweens = Tweens::from(link_press_tween());
        let mut state = NodeState::default();
        tweens.step(0.05, &mut state);
        assert!((state.scale - 0.95625).abs() < 1e-4, "{}", state.scale);
    }

    #[test]
    fn halo_burst_swells_with_smooth_ease() {
        let [swell, settle] = halo_burst_tweens(0);
        assert!((settle.start_delay() - 0.3).abs() < 1e-6);

        let mut tweens = Tweens::from(swell);
        let mut state = NodeState::default();
        tweens.step(0.15, &mut state);
        assert!((state.scale - 1.875).abs() < 1e-4, "{}", state.scale);
        assert!((halo_burst_tweens(4)[0].start_delay() - 4.0 * HALO_BURST_STAGGER).abs() < 1e-6);
    }

    #[test]
    fn icon_settles_without_overshoot_on_leave() {
        let mut state = NodeState::default();
        state.rotation = -10.0;
        state.scale = 1.2;
        let mut tweens = Tweens::from(icon_hover_tween(Vec2::ZERO, false));
        tweens.step(0.2, &mut state);
        assert!((state.rotation + 1.25).abs() < 1e-4, "{}", state.rotation);

        // Entering overshoots the tilt
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(icon_hover_tween(Vec2::ZERO, true));
        tweens.step(0.2, &mut state);
        assert!(state.rotation < -10.0, "{}", state.rotation);
    }

    #[test]
    fn profile_click_fires_from_both_window_edges() {
        let mut app = click_app();
        let dot = app
            .world_mut()
            .spawn((HaloDot { index: 0 }, Transform::default()))
            .id();
        app.update();

        app.world_mut().send_event(PageClick { position: Vec2::new(10.0, 240.0) });
        app.update();

        let xs = particle_xs(&mut app);
        assert_eq!(xs.len(), 2 * FIREWORK_COUNT);
        let half = WINDOW_WIDTH * 0.5;
        assert_eq!(xs.iter().filter(|&&x| x < 0.0).count(), FIREWORK_COUNT);
        assert_eq!(xs.iter().filter(|&&x| x > 0.0).count(), FIREWORK_COUNT);
        assert!(xs
            .iter()
            .all(|x| (x.abs() - half).abs() <= FIREWORK_RADIUS.1 + 1e-3));
        assert_eq!(app.world().get::<Tweens>(dot).map(Tweens::len), Some(2));
    }

    #[test]
    fn click_outside_profile_does_nothing() {
        let mut app = click_app();
        app.update();

        app.world_mut().send_event(PageClick { position: Vec2::new(0.0, 100.0) });
        advance(&mut app, 0.2);
        assert_eq!(count::<Particle>(&mut app), 0);
        assert_eq!(count::<Tweens>(&mut app), 0);
    }

    #[test]
    fn hover_lifts_card_and_leave_restores_it() {
        let mut app = headless_app(50, 9);
        app.add_plugins(TweenPlugin)
            .init_resource::<PointerState>()
            .add_systems(Update, hover_links.in_set(FxSet::Effects));

        let icon_home = Vec2::new(-150.0, 0.0);
        let icon = app
            .world_mut()
            .spawn((Home(icon_home), Transform::from_translation(icon_home.extend(0.0))))
            .id();
        let title = app.world_mut().spawn((Home(Vec2::ZERO), Transform::default())).id();
        let home = Vec2::new(0.0, 100.0);
        let at = Transform::from_translation(home.extend(1.0));
        let card = app
            .world_mut()
            .spawn((
                LinkCard { index: 0, icon, title, hovered: false },
                Home(home),
                HitBox(Vec2::new(200.0, 30.0)),
                at,
                GlobalTransform::from(at),
            ))
            .id();

        app.insert_resource(PointerState { position: Vec2::new(20.0, 105.0), seen: true });
        advance(&mut app, 0.5);
        assert!((y_of(&app, card) - (home.y + HOVER_LIFT)).abs() < 1e-3);
        let scale = app.world().get::<Transform>(card).map(|t| t.scale.x);
        assert!(scale.is_some_and(|s| (s - 1.05).abs() < 1e-4));
        let tilt = app.world().get::<RotationDegrees>(icon).map(|r| r.0);
        assert!(tilt.is_some_and(|deg| (deg + 10.0).abs() < 1e-3));
        assert!((x_of(&app, title) - HOVER_SHIFT).abs() < 1e-3);

        app.insert_resource(PointerState { position: Vec2::new(0.0, -300.0), seen: true });
        advance(&mut app, 0.5);
        assert!((y_of(&app, card) - home.y).abs() < 1e-3);
        let scale = app.world().get::<Transform>(card).map(|t| t.scale.x);
        assert!(scale.is_some_and(|s| (s - 1.0).abs() < 1e-4));
        let tilt = app.world().get::<RotationDegrees>(icon).map(|r| r.0);
        assert!(tilt.is_some_and(|deg| deg.abs() < 1e-3));
        assert!(x_of(&app, title).abs() < 1e-3);
        assert!(app.world().get::<LinkCard>(card).is_some_and(|c| !c.hovered));
    }

    #[test]
    fn trail_dots_lag_fade_and_shrink_with_index() {
        let target = Vec2::new(5.0, 7.0);
        let first = trail_tween(0, target);
        let last = trail_tween(CURSOR_DOT_COUNT - 1, target);

        assert!((first.duration() - 0.3).abs() < 1e-6);
        assert!((last.duration() - 0.7).abs() < 1e-6);
        assert!(last.tracks().contains(&Track::Opacity { from: None, to: 1.0 - 0.2 * 4.0 }));
        assert!(last.tracks().contains(&Track::Scale { from: None, to: 1.0 - 0.15 * 4.0 }));
        assert!(first.tracks().contains(&Track::Translation { from: None, to: target }));
    }

    #[test]
    fn firework_is_even_ring_that_half_shrinks() {
        let request = firework_request(Vec2::new(-640.0, 0.0));
        assert_eq!(request.count, 12);
        assert_eq!(request.terminal_opacity, 0.0);
        assert_eq!(request.terminal_scale, 0.5);
        assert!((request.duration - 1.0).abs() < 1e-6);
        match request.trajectory {
            Trajectory::Radial { radius, .. } => assert_eq!(radius, 50.0..200.0),
            other => panic!("unexpected trajectory {other:?}"),
        }
    }

    #[test]
    fn explosion_scatters_rainbow_from_centre() {
        let request = explosion_request();
        assert_eq!(request.origin, Vec2::ZERO);
        assert_eq!(request.count, 20);
        assert_eq!(request.easing, Easing::PowerOut(2));
        assert!(matches!(request.color, ParticleColor::RandomHue { .. }));
    }

    #[test]
    fn tenth_click_sets_off_explosion() {
        let mut app = headless_app(50, 3);
        app.add_plugins((TweenPlugin, EmitterPlugin))
            .add_event::<PageClick>()
            .init_resource::<ClickCounter>()
            .add_systems(Update, easter_egg_on_clicks.in_set(crate::FxSet::Effects));
        app.world_mut().spawn((
            EmitterMount,
            Transform::default(),
            Visibility::default(),
        ));
        let container = app
            .world_mut()
            .spawn((PageContainer, Transform::default()))
            .id();

        for _ in 0..9 {
            app.world_mut().send_event(PageClick { position: Vec2::ZERO });
            app.update();
        }
        assert_eq!(count::<Particle>(&mut app), 0);

        app.world_mut().send_event(PageClick { position: Vec2::ZERO });
        app.update();
        assert_eq!(count::<Particle>(&mut app), EXPLOSION_COUNT);
        assert_eq!(app.world().resource::<ClickCounter>().count, 0);

        advance(&mut app, 0.25);
        let scale = app.world().get::<Transform>(container).map(|t| t.scale.x);
        assert!(scale.is_some_and(|s| s > 1.0));

        advance(&mut app, 1.5);
        assert_eq!(count::<Particle>(&mut app), 0);
        assert_eq!(app.world().resource::<FxStats>().live_particles(), 0);
        let scale = app.world().get::<Transform>(container).map(|t| t.scale.x);
        assert!(scale.is_some_and(|s| (s - 1.0).abs() < 1e-4));
    }
}
