// Page scene - camera, layers and the placeholder nodes every effect animates
use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::*;
use crate::emitter::EmitterMount;
use crate::math_utils::FxRng;
use crate::tasks::spawn_repeating_task;

use super::ambient::{spawn_glows, spawn_halo, spawn_orbs};
use super::*;

const LINK_LABELS: [&str; LINK_COUNT] = ["GitHub", "Portfolio", "Telegram", "Instagram"];
const LINK_ENTRY_DROP: f32 = 30.0;

fn accent() -> Color {
    Color::srgb_u8(0x66, 0x7e, 0xea)
}

fn text_bundle(text: &str, font_size: f32, color: Color) -> impl Bundle {
    (
        Text2d::new(text),
        TextFont { font_size, ..default() },
        TextColor(color),
    )
}

pub fn setup_page(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut rng: ResMut<FxRng>,
    mut background: ResMut<BackgroundCycle>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    info!("🎨 Building bio page...");

    let window_size = window_query
        .single()
        .map(Window::size)
        .unwrap_or(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    commands.spawn((Camera2d, Name::new("PageCamera")));

    spawn_glows(&mut commands, &mut meshes, &mut materials, &mut rng.0, window_size);
    spawn_orbs(&mut commands, &mut meshes, &mut materials, &mut rng.0, window_size);

    let container = commands
        .spawn((
            PageContainer,
            Transform::default(),
            Visibility::default(),
            Name::new("PageContainer"),
        ))
        .id();

    let profile_home = Vec2::new(PROFILE_POSITION.0, PROFILE_POSITION.1);
    commands.spawn((
        ProfileRing,
        Sprite::from_color(accent().with_alpha(0.35), Vec2::splat(PROFILE_RING_SIZE)),
        Transform::from_translation(profile_home.extend(0.0)),
        Name::new("ProfileRing"),
        ChildOf(container),
    ));

    let profile = commands
        .spawn((
            ProfileImage,
            Sprite::from_color(Color::srgb_u8(0x76, 0x4b, 0xa2), Vec2::splat(PROFILE_SIZE)),
            Transform::from_translation(profile_home.extend(1.0)),
            Home(profile_home),
            HitBox(Vec2::splat(PROFILE_SIZE * 0.5)),
            Name::new("ProfileImage"),
            ChildOf(container),
        ))
        .id();
    spawn_halo(&mut commands, &mut rng.0, profile);

    let texts = [
        (PageText::Name, "Your Name", NAME_OFFSET, 32.0),
        (PageText::Bio, "Developer · Designer · Dreamer", BIO_OFFSET, 18.0),
        (PageText::Location, "Somewhere on Earth", LOCATION_OFFSET, 16.0),
    ];
    for (role, text, offset, size) in texts {
        let home = profile_home + Vec2::new(0.0, offset);
        commands.spawn((
            role,
            text_bundle(text, size, Color::WHITE),
            Transform::from_translation(home.extend(1.0)),
            Home(home),
            Name::new(format!("{:?}", role)),
            ChildOf(container),
        ));
    }

    for (index, label) in LINK_LABELS.iter().enumerate() {
        let home = Vec2::new(0.0, LINK_FIRST_Y - LINK_SPACING * index as f32);
        let size = Vec2::new(LINK_SIZE.0, LINK_SIZE.1);

        // Links start lowered and hidden; the entrance brings them up
        let card = commands
            .spawn((
                Sprite::from_color(Color::srgba(1.0, 1.0, 1.0, 0.0), size),
                Transform::from_translation((home - Vec2::Y * LINK_ENTRY_DROP).extend(1.0)),
                Home(home),
                HitBox(size * 0.5),
                Name::new(format!("Link_{}", label)),
                ChildOf(container),
            ))
            .id();
        let icon_home = Vec2::new(LINK_ICON_X, 0.0);
        let icon = commands
            .spawn((
                LinkIcon,
                Sprite::from_color(accent().with_alpha(0.0), Vec2::splat(LINK_ICON_SIZE)),
                Transform::from_translation(icon_home.extend(0.1)),
                Home(icon_home),
                ChildOf(card),
            ))
            .id();
        let title_home = Vec2::new(LINK_TITLE_X, 0.0);
        let title = commands
            .spawn((
                LinkTitle,
                text_bundle(label, 20.0, Color::srgba(0.1, 0.1, 0.18, 0.0)),
                Transform::from_translation(title_home.extend(0.1)),
                Home(title_home),
                ChildOf(card),
            ))
            .id();
        commands.entity(card).insert(LinkCard { index, icon, title, hovered: false });
    }

    let footer_home = Vec2::new(0.0, FOOTER_Y);
    commands.spawn((
        PageText::Footer,
        text_bundle("Made with care", 14.0, Color::srgb(0.7, 0.7, 0.75)),
        Transform::from_translation(footer_home.extend(1.0)),
        Home(footer_home),
        Name::new("Footer"),
        ChildOf(container),
    ));

    commands.spawn((
        EmitterMount,
        Transform::from_xyz(0.0, 0.0, Z_EMITTER),
        Visibility::default(),
        Name::new("FxLayer"),
    ));

    for index in 0..CURSOR_DOT_COUNT {
        commands.spawn((
            CursorDot { index },
            Sprite::from_color(Color::srgba(1.0, 1.0, 1.0, 0.0), Vec2::splat(CURSOR_DOT_SIZE)),
            Transform::from_xyz(0.0, 0.0, Z_CURSOR - index as f32 * 0.1),
            Name::new(format!("CursorDot_{}", index)),
        ));
    }

    background.0 = Some(spawn_repeating_task(
        &mut commands,
        "BackgroundCycle",
        GLOW_FIRST_DELAY,
        GLOW_CYCLE_SECS,
    ));

    info!("✅ Bio page ready: {} links, {} orbs, {} halo dots", LINK_COUNT, ORB_COUNT, HALO_COUNT);
}
