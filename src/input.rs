// Page input - pointer, clicks and scroll turned into explicit resources and events
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::*;
use crate::FxSet;

pub struct PageInputPlugin;

impl Plugin for PageInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<ClickCounter>()
            .init_resource::<ScrollState>()
            .add_event::<PageClick>()
            .add_event::<PageScrolled>()
            .add_systems(
                Update,
                (track_pointer, forward_clicks, accumulate_scroll)
                    .chain()
                    .in_set(FxSet::Input),
            );
    }
}

/// Last known pointer position in world space
#[derive(Resource, Default, Debug)]
pub struct PointerState {
    pub position: Vec2,
    pub seen: bool,
}

/// Clicks since the last easter egg
#[derive(Resource, Default, Debug)]
pub struct ClickCounter {
    pub count: u32,
}

impl ClickCounter {
    /// Count a click; true (and reset) when it completes a round of ten
    pub fn register(&mut self) -> bool {
        self.count += 1;
        if self.count >= EASTER_EGG_CLICKS {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// Page scroll offset in pixels, 0 at the top
#[derive(Resource, Default, Debug)]
pub struct ScrollState {
    pub offset: f32,
}

impl ScrollState {
    /// Apply a wheel delta in pixels (positive scrolls down); true when the offset moved
    pub fn scroll_by(&mut self, pixels: f32) -> bool {
        let next = (self.offset + pixels).clamp(0.0, SCROLL_MAX);
        let moved = next != self.offset;
        self.offset = next;
        moved
    }
}

#[derive(Event, Clone, Copy, Debug)]
pub struct PageClick {
    pub position: Vec2,
}

#[derive(Event, Clone, Copy, Debug)]
pub struct PageScrolled {
    pub offset: f32,
}

/// System: follow the cursor through the 2D camera
pub fn track_pointer(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = window_query.single() else { return };
    let Ok((camera, camera_transform)) = camera_query.single() else { return };
    let Some(cursor_pos) = window.cursor_position() else { return };

    if let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) {
        pointer.position = world_pos;
        pointer.seen = true;
    }
}

/// System: left clicks anywhere on the page
pub fn forward_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerState>,
    mut clicks: EventWriter<PageClick>,
) {
    if mouse_button.just_pressed(MouseButton::Left) && pointer.seen {
        clicks.write(PageClick { position: pointer.position });
    }
}

/// System: wheel input into a page scroll offset
pub fn accumulate_scroll(
    mut wheel_events: EventReader<MouseWheel>,
    mut scroll: ResMut<ScrollState>,
    mut scrolled: EventWriter<PageScrolled>,
) {
    let mut moved = false;
    for event in wheel_events.read() {
        let pixels = match event.unit {
            MouseScrollUnit::Line => event.y * SCROLL_LINE_PIXELS,
            MouseScrollUnit::Pixel => event.y,
        };
        // Wheel up is positive, page offset grows downward
        moved |= scroll.scroll_by(-pixels);
    }
    if moved {
        scrolled.write(PageScrolled { offset: scroll.offset });
    }
}
