// Timeline - sequences tweens across entities with position parameters and staggers
use bevy::prelude::*;

use crate::tween::{Tween, TweenCommandsExt};

/// Where an entry starts relative to what is already on the timeline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after the previous entry ends
    Sequence,
    /// Previous end plus an offset; `"-=0.5"` is `Relative(-0.5)`
    Relative(f32),
    /// Absolute time from the start of the timeline
    At(f32),
}

#[derive(Clone, Debug)]
struct Entry {
    target: Entity,
    tween: Tween,
    start: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: Vec<Entry>,
    previous_end: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, position: Position) -> f32 {
        match position {
            Position::Sequence => self.previous_end,
            Position::Relative(offset) => (self.previous_end + offset).max(0.0),
            Position::At(time) => time.max(0.0),
        }
    }

    fn end_of(start: f32, tween: &Tween) -> f32 {
        start + tween.start_delay() + tween.active_duration()
    }

    pub fn add(&mut self, target: Entity, tween: Tween, position: Position) -> &mut Self {
        let start = self.resolve(position);
        self.previous_end = Self::end_of(start, &tween);
        self.entries.push(Entry { target, tween, start });
        self
    }

    /// One entry per target, each starting `each` seconds after the last.
    /// `make` builds the tween for the i-th target.
    pub fn add_staggered(
        &mut self,
        targets: &[Entity],
        each: f32,
        position: Position,
        make: impl Fn(usize) -> Tween,
    ) -> &mut Self {
        let start = self.resolve(position);
        let mut latest_end = start;
        for (i, &target) in targets.iter().enumerate() {
            let tween = make(i);
            let entry_start = start + each * i as f32;
            latest_end = latest_end.max(Self::end_of(entry_start, &tween));
            self.entries.push(Entry { target, tween, start: entry_start });
        }
        if !targets.is_empty() {
            self.previous_end = latest_end;
        }
        self
    }

    /// Start time of every entry in insertion order
    pub fn start_times(&self) -> Vec<(Entity, f32)> {
        self.entries.iter().map(|e| (e.target, e.start)).collect()
    }

    /// Time at which the last entry finishes
    pub fn duration(&self) -> f32 {
        self.entries
            .iter()
            .map(|e| Self::end_of(e.start, &e.tween))
            .fold(0.0, f32::max)
    }

    /// Bake start times into tween delays
    pub fn build(self) -> Vec<(Entity, Tween)> {
        self.entries
            .into_iter()
            .map(|e| {
                let delay = e.start + e.tween.start_delay();
                (e.target, e.tween.delay(delay))
            })
            .collect()
    }

    pub fn play(self, commands: &mut Commands) {
        let duration = self.duration();
        let count = self.entries.len();
        for (target, tween) in self.build() {
            commands.tween(target, tween);
        }
        debug!("🎬 Timeline started: {} tweens over {:.2}s", count, duration);
    }
}
