// Creative bio page - decorative 2D animations: orbs, halo, cursor trail, entrance,
// hover/click reactions, parallax, background glow cycling and particle bursts
use bevy::log::LogPlugin;
use bevy::prelude::*;

mod constants;
mod easing;
mod emitter;
mod input;
mod math_utils;
mod page;
mod tasks;
mod timeline;
mod tween;

#[cfg(test)]
mod test_utils;

use constants::*;
use emitter::EmitterPlugin;
use input::PageInputPlugin;
use page::BioPagePlugin;
use tasks::RepeatingTaskPlugin;
use tween::TweenPlugin;

/// Per-frame order: read input, react with effects, spawn bursts, then animate
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FxSet {
    Input,
    Effects,
    Emit,
    Animate,
}

/// Everything the page needs on top of `DefaultPlugins`
pub struct BioFxPlugin;

impl Plugin for BioFxPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            TweenPlugin,
            EmitterPlugin,
            RepeatingTaskPlugin,
            PageInputPlugin,
            BioPagePlugin,
        ));
    }
}

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.to_string(),
                        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: LOG_FILTER.to_string(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::srgb_u8(0x0a, 0x0a, 0x0a)))
        .add_plugins(BioFxPlugin)
        .run();
}
