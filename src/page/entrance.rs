// Entrance - the load-in choreography for the profile, texts, links and footer
use bevy::prelude::*;

use crate::constants::*;
use crate::easing::Easing;
use crate::timeline::{Position, Timeline};
use crate::tween::{Track, Tween, TweenCommandsExt};

use super::{Home, LinkCard, PageText, ProfileImage};

const NAME_RISE: f32 = 50.0;
const DETAIL_RISE: f32 = 30.0;
const LINK_DELAY: f32 = 0.5;
const LINK_STAGGER: f32 = 0.1;
const FOOTER_DELAY: f32 = 1.5;

/// Slide up from `rise` below home while fading in
fn rise_in(home: Vec2, rise: f32, duration: f32, easing: Easing) -> Tween {
    Tween::new(duration)
        .track(Track::Translation { from: Some(home - Vec2::Y * rise), to: home })
        .track(Track::Opacity { from: Some(0.0), to: 1.0 })
        .ease(easing)
        .immediate_render()
}

/// Profile, name, then bio and location overlapping the tail of each other
pub fn intro_timeline(profile: Entity, name: (Entity, Vec2), details: &[(Entity, Vec2)]) -> Timeline {
    let mut timeline = Timeline::new();
    timeline.add(
        profile,
        Tween::new(1.2)
            .track(Track::Scale { from: Some(0.0), to: 1.0 })
            .track(Track::Rotation { from: Some(-180.0), to: 0.0 })
            .ease(Easing::named(EASE_PROFILE_ENTRANCE))
            .immediate_render(),
        Position::Sequence,
    );
    timeline.add(
        name.0,
        rise_in(name.1, NAME_RISE, 0.8, Easing::named(EASE_ENTRANCE)),
        Position::Relative(-0.5),
    );

    let targets: Vec<Entity> = details.iter().map(|&(e, _)| e).collect();
    timeline.add_staggered(&targets, 0.2, Position::Relative(-0.3), |i| {
        rise_in(details[i].1, DETAIL_RISE, 0.6, Easing::named(EASE_SMOOTH))
    });
    timeline
}

/// Link `index` floats up to its home and becomes visible
pub fn link_entrance(index: usize, home: Vec2) -> Tween {
    Tween::new(0.8)
        .translate_to(home)
        .fade_to(1.0)
        .delay(LINK_DELAY + LINK_STAGGER * index as f32)
        .ease(Easing::named(EASE_ENTRANCE))
}

pub fn footer_entrance(home: Vec2) -> Tween {
    rise_in(home, DETAIL_RISE, 0.8, Easing::named(EASE_SMOOTH)).delay(FOOTER_DELAY)
}

/// Startup system: queue every entrance tween once the page exists
pub fn play_entrance(
    mut commands: Commands,
    profiles: Query<Entity, With<ProfileImage>>,
    texts: Query<(Entity, &PageText, &Home)>,
    cards: Query<(Entity, &LinkCard, &Home)>,
) {
    let Ok(profile) = profiles.single() else {
        warn!("No profile image, skipping entrance");
        return;
    };

    let mut name = None;
    let mut details = Vec::new();
    let mut footer = None;
    for (entity, role, home) in texts.iter() {
        match role {
            PageText::Name => name = Some((entity, home.0)),
            PageText::Bio | PageText::Location => details.push((*role, entity, home.0)),
            PageText::Footer => footer = Some((entity, home.0)),
        }
    }
    // Bio before location
    details.sort_by_key(|(role, _, _)| matches!(role, PageText::Location));
    let details: Vec<(Entity, Vec2)> = details.into_iter().map(|(_, e, h)| (e, h)).collect();

    if let Some(name) = name {
        intro_timeline(profile, name, &details).play(&mut commands);
    }

    for (entity, card, home) in cards.iter() {
        let tween = link_entrance(card.index, home.0);
        let delay = tween.start_delay();
        commands.tween(entity, tween);
        for part in [card.icon, card.title] {
            commands.tween(
                part,
                Tween::new(0.8)
                    .fade_to(1.0)
                    .delay(delay)
                    .ease(Easing::named(EASE_ENTRANCE)),
            );
        }
    }

    if let Some((entity, home)) = footer {
        commands.tween(entity, footer_entrance(home));
    }

    info!("🎬 Entrance started");
}
