// Headless app helpers for ECS tests
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::math_utils::FxRng;

/// App with a fixed frame step and a seeded RNG. The first `update` has a
/// zero delta; `advance` accounts for that.
pub fn headless_app(step_ms: u64, seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(step_ms)))
        .insert_resource(FxRng::seeded(seed));
    app
}

fn step_secs(app: &App) -> f32 {
    match app.world().resource::<TimeUpdateStrategy>() {
        TimeUpdateStrategy::ManualDuration(step) => step.as_secs_f32(),
        _ => 1.0 / 60.0,
    }
}

/// Run enough frames to move the clock forward by at least `seconds`
pub fn advance(app: &mut App, seconds: f32) {
    let first_frame = app.world().resource::<Time<Real>>().first_update().is_none();
    let frames = (seconds / step_secs(app)).ceil() as usize + usize::from(first_frame);
    for _ in 0..frames {
        app.update();
    }
}

pub fn count<C: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<(), With<C>>().iter(world).count()
}
