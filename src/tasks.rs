// Repeating tasks - delayed, periodic triggers that can be cancelled through a handle
use std::time::Duration;

use bevy::prelude::*;

use crate::FxSet;

const MIN_INTERVAL: f32 = 0.001;

pub struct RepeatingTaskPlugin;

impl Plugin for RepeatingTaskPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TaskFired>()
            .add_systems(Update, tick_repeating_tasks.in_set(FxSet::Input));
    }
}

/// Fires once after `delay`, then every `interval` seconds
#[derive(Component, Debug)]
pub struct RepeatingTask {
    /// Wait before the first run
    delay_timer: Timer,
    /// Period of every later run
    interval_timer: Timer,
}

impl RepeatingTask {
    pub fn new(delay: f32, interval: f32) -> Self {
        Self {
            delay_timer: Timer::from_seconds(delay.max(0.0), TimerMode::Once),
            interval_timer: Timer::from_seconds(interval.max(MIN_INTERVAL), TimerMode::Repeating),
        }
    }

    /// Advance the timers; returns how many runs came due
    pub fn tick(&mut self, delta: Duration) -> u32 {
        let mut runs = 0;
        let mut carry = delta;
        if !self.delay_timer.finished() {
            let remaining = self.delay_timer.remaining();
            self.delay_timer.tick(delta);
            if !self.delay_timer.finished() {
                return 0;
            }
            // Time past the delay counts toward the first interval
            runs += 1;
            carry = delta.saturating_sub(remaining);
        }
        self.interval_timer.tick(carry);
        runs + self.interval_timer.times_finished_this_tick()
    }
}

/// Owner's reference to a spawned task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(Entity);

impl TaskHandle {
    /// Stop the task; it will not fire again. Cancelling twice is harmless.
    pub fn cancel(self, commands: &mut Commands) {
        let entity = self.0;
        commands.queue(move |world: &mut World| {
            if let Ok(task) = world.get_entity_mut(entity) {
                task.despawn();
            }
        });
    }
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskFired {
    pub handle: TaskHandle,
}

pub fn spawn_repeating_task(
    commands: &mut Commands,
    name: &'static str,
    delay: f32,
    interval: f32,
) -> TaskHandle {
    let entity = commands
        .spawn((RepeatingTask::new(delay, interval), Name::new(name)))
        .id();
    debug!("⏱️ Scheduled task {} (delay {:.1}s, every {:.1}s)", name, delay, interval);
    TaskHandle(entity)
}

/// System: tick every live task and announce runs that came due
pub fn tick_repeating_tasks(
    time: Res<Time>,
    mut tasks: Query<(Entity, &mut RepeatingTask)>,
    mut fired: EventWriter<TaskFired>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        for _ in 0..task.tick(time.delta()) {
            fired.write(TaskFired { handle: TaskHandle(entity) });
        }
    }
}
