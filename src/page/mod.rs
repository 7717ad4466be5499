// Bio page module - placeholder layout plus the decorative effects wired to it
//
// Submodules:
// - scene: spawns camera, layers and page nodes
// - ambient: orbs, profile halo, parallax, background glow cycling
// - entrance: the load-in timeline
// - pointer_fx: cursor trail, link hover, click reactions, fireworks, easter egg

mod ambient;
mod entrance;
mod pointer_fx;
mod scene;

use bevy::prelude::*;

use crate::tasks::TaskHandle;
use crate::FxSet;

pub struct BioPagePlugin;

impl Plugin for BioPagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BackgroundCycle>()
            .add_systems(Startup, (scene::setup_page, entrance::play_entrance).chain())
            .add_systems(
                Update,
                (
                    pointer_fx::follow_pointer,
                    pointer_fx::hover_links,
                    pointer_fx::profile_click_effects,
                    pointer_fx::link_click_effects,
                    pointer_fx::easter_egg_on_clicks,
                    pointer_fx::report_finished_effects,
                    ambient::parallax_on_scroll,
                    ambient::cycle_background,
                    ambient::toggle_background_cycle,
                )
                    .in_set(FxSet::Effects),
            );
    }
}

// ===== COMPONENTS =====

/// Root of the page content (scaled by the easter egg)
#[derive(Component)]
pub struct PageContainer;

#[derive(Component)]
pub struct ProfileImage;

/// Decorative ring behind the profile image, turned by parallax
#[derive(Component)]
pub struct ProfileRing;

#[derive(Component)]
pub struct HaloDot {
    pub index: usize,
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageText {
    Name,
    Bio,
    Location,
    Footer,
}

#[derive(Component)]
pub struct LinkCard {
    pub index: usize,
    pub icon: Entity,
    pub title: Entity,
    pub hovered: bool,
}

#[derive(Component)]
pub struct LinkIcon;

#[derive(Component)]
pub struct LinkTitle;

/// Parent of the floating orbs; parallax moves the whole layer
#[derive(Component)]
pub struct OrbLayer;

#[derive(Component)]
pub struct Orb;

#[derive(Component)]
pub struct Glow;

#[derive(Component)]
pub struct CursorDot {
    pub index: usize,
}

/// Rest position in the parent's space; offsets are animated around it
#[derive(Component, Clone, Copy, Debug)]
pub struct Home(pub Vec2);

/// Half extents used for pointer hit tests
#[derive(Component, Clone, Copy, Debug)]
pub struct HitBox(pub Vec2);

/// Handle of the running background cycle, if any
#[derive(Resource, Default)]
pub struct BackgroundCycle(pub Option<TaskHandle>);
