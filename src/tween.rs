// Tween engine - animates translation, scale, rotation and opacity of entities over time
//
// A `Tween` groups property tracks that share timing (duration, delay, repeat,
// yoyo, easing). Entities carry their running tweens in a `Tweens` component
// which `animate_tweens` advances once per frame.
use bevy::color::Alpha;
use bevy::prelude::*;

use crate::easing::Easing;
use crate::FxSet;

pub struct TweenPlugin;

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TweenCompleted>()
            .configure_sets(
                Update,
                (FxSet::Input, FxSet::Effects, FxSet::Emit, FxSet::Animate).chain(),
            )
            .add_systems(Update, animate_tweens.in_set(FxSet::Animate));
    }
}

// ===== TRACKS =====

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackKind {
    Translation,
    Scale,
    Rotation,
    Opacity,
}

impl TrackKind {
    fn bit(self) -> u8 {
        match self {
            TrackKind::Translation => 1,
            TrackKind::Scale => 2,
            TrackKind::Rotation => 4,
            TrackKind::Opacity => 8,
        }
    }
}

/// One animated property. `from: None` means "whatever the entity shows when
/// the tween starts".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Track {
    /// Local X/Y translation; Z is left alone
    Translation { from: Option<Vec2>, to: Vec2 },
    /// Uniform scale
    Scale { from: Option<f32>, to: f32 },
    /// Degrees about Z, counter-clockwise
    Rotation { from: Option<f32>, to: f32 },
    Opacity { from: Option<f32>, to: f32 },
}

impl Track {
    pub fn kind(&self) -> TrackKind {
        match self {
            Track::Translation { .. } => TrackKind::Translation,
            Track::Scale { .. } => TrackKind::Scale,
            Track::Rotation { .. } => TrackKind::Rotation,
            Track::Opacity { .. } => TrackKind::Opacity,
        }
    }

    fn resolve_from(&mut self, state: &NodeState) {
        match self {
            Track::Translation { from, .. } => {
                from.get_or_insert(state.translation);
            }
            Track::Scale { from, .. } => {
                from.get_or_insert(state.scale);
            }
            Track::Rotation { from, .. } => {
                from.get_or_insert(state.rotation);
            }
            Track::Opacity { from, .. } => {
                from.get_or_insert(state.opacity);
            }
        }
    }

    fn render(&self, progress: f32, state: &mut NodeState) {
        match *self {
            Track::Translation { from, to } => {
                let from = from.unwrap_or(state.translation);
                state.set_translation(from.lerp(to, progress));
            }
            Track::Scale { from, to } => {
                let from = from.unwrap_or(state.scale);
                state.set_scale(from + (to - from) * progress);
            }
            Track::Rotation { from, to } => {
                let from = from.unwrap_or(state.rotation);
                state.set_rotation(from + (to - from) * progress);
            }
            Track::Opacity { from, to } => {
                let from = from.unwrap_or(state.opacity);
                state.set_opacity(from + (to - from) * progress);
            }
        }
    }

    /// Show the explicit start value, if any, before the tween starts
    fn render_start(&self, state: &mut NodeState) {
        match *self {
            Track::Translation { from: Some(v), .. } => state.set_translation(v),
            Track::Scale { from: Some(v), .. } => state.set_scale(v),
            Track::Rotation { from: Some(v), .. } => state.set_rotation(v),
            Track::Opacity { from: Some(v), .. } => state.set_opacity(v),
            _ => {}
        }
    }
}

// ===== NODE STATE =====

/// Snapshot of the animatable properties of one entity.
/// Tweens read and write this; only touched properties go back to the ECS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeState {
    pub translation: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub opacity: f32,
    touched: u8,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
            touched: 0,
        }
    }
}

impl NodeState {
    pub fn read(
        transform: &Transform,
        rotation: &RotationDegrees,
        sprite: Option<&Sprite>,
        text: Option<&TextColor>,
    ) -> Self {
        let opacity = sprite
            .map(|s| s.color.alpha())
            .or_else(|| text.map(|t| t.0.alpha()))
            .unwrap_or(1.0);
        Self {
            translation: transform.translation.truncate(),
            scale: transform.scale.x,
            rotation: rotation.0,
            opacity,
            touched: 0,
        }
    }

    pub fn write(
        &self,
        transform: &mut Transform,
        rotation: &mut RotationDegrees,
        sprite: Option<Mut<Sprite>>,
        text: Option<Mut<TextColor>>,
    ) {
        if self.is_touched(TrackKind::Translation) {
            transform.translation.x = self.translation.x;
            transform.translation.y = self.translation.y;
        }
        if self.is_touched(TrackKind::Scale) {
            transform.scale = Vec3::new(self.scale, self.scale, transform.scale.z);
        }
        if self.is_touched(TrackKind::Rotation) {
            rotation.0 = self.rotation;
            transform.rotation = Quat::from_rotation_z(self.rotation.to_radians());
        }
        if self.is_touched(TrackKind::Opacity) {
            let alpha = self.opacity.clamp(0.0, 1.0);
            if let Some(mut sprite) = sprite {
                sprite.color.set_alpha(alpha);
            }
            if let Some(mut text) = text {
                text.0.set_alpha(alpha);
            }
        }
    }

    pub fn is_touched(&self, kind: TrackKind) -> bool {
        self.touched & kind.bit() != 0
    }

    fn set_translation(&mut self, v: Vec2) {
        self.translation = v;
        self.touched |= TrackKind::Translation.bit();
    }

    fn set_scale(&mut self, v: f32) {
        self.scale = v;
        self.touched |= TrackKind::Scale.bit();
    }

    fn set_rotation(&mut self, v: f32) {
        self.rotation = v;
        self.touched |= TrackKind::Rotation.bit();
    }

    fn set_opacity(&mut self, v: f32) {
        self.opacity = v;
        self.touched |= TrackKind::Opacity.bit();
    }
}

/// Rotation in degrees, kept alongside `Transform` so full turns survive
/// (a quaternion cannot tell 0° from 360°)
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationDegrees(pub f32);

// ===== TWEEN =====

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Never,
    Times(u32),
    Forever,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnComplete {
    Nothing,
    Despawn,
}

#[derive(Clone, Debug)]
pub struct Tween {
    tracks: Vec<Track>,
    duration: f32,
    delay: f32,
    easing: Easing,
    repeat: Repeat,
    yoyo: bool,
    overwrite: bool,
    immediate_render: bool,
    on_complete: OnComplete,
    tag: Option<&'static str>,
    elapsed: f32,
    started: bool,
}

impl Tween {
    pub fn new(duration: f32) -> Self {
        Self {
            tracks: Vec::new(),
            duration: duration.max(0.0),
            delay: 0.0,
            easing: Easing::default(),
            repeat: Repeat::Never,
            yoyo: false,
            overwrite: true,
            immediate_render: false,
            on_complete: OnComplete::Nothing,
            tag: None,
            elapsed: 0.0,
            started: false,
        }
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn translate_to(self, to: Vec2) -> Self {
        self.track(Track::Translation { from: None, to })
    }

    pub fn scale_to(self, to: f32) -> Self {
        self.track(Track::Scale { from: None, to })
    }

    pub fn rotate_to(self, to: f32) -> Self {
        self.track(Track::Rotation { from: None, to })
    }

    pub fn fade_to(self, to: f32) -> Self {
        self.track(Track::Opacity { from: None, to })
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Let this tween run alongside others on the same properties
    /// (the one added last wins while both are active)
    pub fn no_overwrite(mut self) -> Self {
        self.overwrite = false;
        self
    }

    /// Hold explicit start values while waiting out the delay
    pub fn immediate_render(mut self) -> Self {
        self.immediate_render = true;
        self
    }

    pub fn despawn_on_complete(mut self) -> Self {
        self.on_complete = OnComplete::Despawn;
        self
    }

    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn start_delay(&self) -> f32 {
        self.delay
    }

    fn iterations(&self) -> Option<u32> {
        match self.repeat {
            Repeat::Never => Some(1),
            Repeat::Times(n) => Some(n.saturating_add(1)),
            Repeat::Forever => None,
        }
    }

    /// Time from start to finish excluding the delay; one cycle when it loops forever
    pub fn active_duration(&self) -> f32 {
        self.duration * self.iterations().unwrap_or(1) as f32
    }

    /// Fold a looping tween's clock back into its first cycle so the f32
    /// keeps frame-sized precision however long the page stays open
    fn wrap_cycle(&mut self) {
        if self.repeat != Repeat::Forever || !self.started {
            return;
        }
        let cycle = if self.yoyo { 2.0 * self.duration } else { self.duration };
        let local = self.local_time();
        if cycle > 0.0 && local >= cycle {
            self.elapsed = self.delay + local % cycle;
        }
    }

    fn local_time(&self) -> f32 {
        self.elapsed - self.delay
    }

    pub fn is_finished(&self) -> bool {
        if self.local_time() < 0.0 {
            return false;
        }
        match self.iterations() {
            Some(n) => self.duration <= 0.0 || self.local_time() >= self.duration * n as f32,
            None => false,
        }
    }

    fn terminal_progress(&self) -> f32 {
        match self.iterations() {
            Some(n) if self.yoyo && n % 2 == 0 => 0.0,
            _ => 1.0,
        }
    }

    /// Eased progress for the current elapsed time, or `None` while delayed
    pub fn progress(&self) -> Option<f32> {
        let t = self.local_time();
        if t < 0.0 {
            return None;
        }
        if self.duration <= 0.0 || self.is_finished() {
            return Some(self.terminal_progress());
        }

        let iteration = (t / self.duration).floor();
        let fraction = (t - iteration * self.duration) / self.duration;
        let backwards = self.yoyo && (iteration as u64) % 2 == 1;
        Some(if backwards {
            self.easing.apply(1.0 - fraction)
        } else {
            self.easing.apply(fraction)
        })
    }
}

// ===== COMPONENT =====

/// Active tweens of one entity, applied in insertion order
#[derive(Component, Clone, Debug, Default)]
#[require(RotationDegrees)]
pub struct Tweens(Vec<Tween>);

impl From<Tween> for Tweens {
    fn from(tween: Tween) -> Self {
        Self(vec![tween])
    }
}

/// What one frame of ticking produced for an entity
#[derive(Debug, Default, PartialEq)]
pub struct StepOutcome {
    pub completed_tags: Vec<&'static str>,
    pub despawn: bool,
}

impl Tweens {
    pub fn push(&mut self, tween: Tween) {
        self.0.push(tween);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Advance every tween by `dt` seconds and render into `state`.
    /// Tweens run in list order, so a tween starting this frame sees the
    /// values rendered by the ones before it.
    pub fn step(&mut self, dt: f32, state: &mut NodeState) -> StepOutcome {
        let mut killed = vec![false; self.0.len()];

        for i in 0..self.0.len() {
            let tween = &mut self.0[i];
            tween.wrap_cycle();
            tween.elapsed += dt;

            let mut starting = false;
            if !tween.started && tween.local_time() >= 0.0 {
                tween.started = true;
                for track in tween.tracks.iter_mut() {
                    track.resolve_from(state);
                }
                starting = true;
            }
            if starting && tween.overwrite {
                self.overwrite_others(i, &mut killed);
            }

            let tween = &self.0[i];
            match tween.progress() {
                Some(progress) => {
                    for track in &tween.tracks {
                        track.render(progress, state);
                    }
                }
                None if tween.immediate_render => {
                    for track in &tween.tracks {
                        track.render_start(state);
                    }
                }
                None => {}
            }
        }

        let mut outcome = StepOutcome::default();
        let mut index = 0;
        self.0.retain(|tween| {
            let dead = killed[index];
            index += 1;
            // Overwritten tweens leave silently, even in the frame they would finish
            if dead {
                return false;
            }
            if tween.is_finished() {
                if let Some(tag) = tween.tag {
                    outcome.completed_tags.push(tag);
                }
                if tween.on_complete == OnComplete::Despawn {
                    outcome.despawn = true;
                }
                return false;
            }
            true
        });
        outcome
    }

    /// Strip the properties claimed by tween `i` from every other running tween
    fn overwrite_others(&mut self, i: usize, killed: &mut [bool]) {
        let claimed = self.0[i].tracks.iter().fold(0u8, |acc, t| acc | t.kind().bit());
        for (j, other) in self.0.iter_mut().enumerate() {
            if j == i || !other.started {
                continue;
            }
            let before = other.tracks.len();
            other.tracks.retain(|t| claimed & t.kind().bit() == 0);
            if before > 0 && other.tracks.is_empty() {
                killed[j] = true;
            }
        }
    }
}

// ===== EVENTS & COMMANDS =====

/// Written when a tagged tween finishes
#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub struct TweenCompleted {
    pub entity: Entity,
    pub tag: &'static str,
}

pub trait TweenCommandsExt {
    /// Queue `tween` on `target`; silently does nothing if the entity is gone
    fn tween(&mut self, target: Entity, tween: Tween);
}

impl TweenCommandsExt for Commands<'_, '_> {
    fn tween(&mut self, target: Entity, tween: Tween) {
        self.queue(move |world: &mut World| {
            let Ok(mut entity) = world.get_entity_mut(target) else {
                return;
            };
            if let Some(mut tweens) = entity.get_mut::<Tweens>() {
                tweens.push(tween);
            } else {
                entity.insert(Tweens::from(tween));
            }
        });
    }
}

// ===== SYSTEMS =====

/// System: advance all tweens, write properties back, handle completion
pub fn animate_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut completed: EventWriter<TweenCompleted>,
    mut query: Query<(
        Entity,
        &mut Tweens,
        &mut Transform,
        &mut RotationDegrees,
        Option<&mut Sprite>,
        Option<&mut TextColor>,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut tweens, mut transform, mut rotation, sprite, text) in query.iter_mut() {
        if tweens.is_empty() {
            continue;
        }

        let mut state = NodeState::read(&transform, &rotation, sprite.as_deref(), text.as_deref());
        let outcome = tweens.step(dt, &mut state);
        state.write(&mut transform, &mut rotation, sprite, text);

        for tag in outcome.completed_tags {
            completed.write(TweenCompleted { entity, tag });
        }
        if outcome.despawn {
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{advance, headless_app};

    #[derive(Resource, Default)]
    struct SeenCompletions(Vec<TweenCompleted>);

    fn collect_completions(mut events: EventReader<TweenCompleted>, mut seen: ResMut<SeenCompletions>) {
        seen.0.extend(events.read().cloned());
    }

    fn run(tweens: &mut Tweens, state: &mut NodeState, seconds: f32, step: f32) -> StepOutcome {
        let mut last = StepOutcome::default();
        let frames = (seconds / step).round() as usize;
        for _ in 0..frames {
            let outcome = tweens.step(step, state);
            last.despawn |= outcome.despawn;
            last.completed_tags.extend(outcome.completed_tags);
        }
        last
    }

    #[test]
    fn to_tween_reads_start_value_when_it_starts() {
        let mut state = NodeState { scale: 2.0, ..default() };
        let mut tweens = Tweens::from(Tween::new(1.0).scale_to(4.0).ease(Easing::Linear));

        tweens.step(0.5, &mut state);
        assert!((state.scale - 3.0).abs() < 1e-5);
    }

    #[test]
    fn delayed_tween_waits_then_finishes_on_target() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(Tween::new(1.0).delay(0.5).fade_to(0.0));

        tweens.step(0.25, &mut state);
        assert_eq!(state.opacity, 1.0);
        assert!(!state.is_touched(TrackKind::Opacity));

        run(&mut tweens, &mut state, 1.5, 0.25);
        assert_eq!(state.opacity, 0.0);
        assert!(tweens.is_empty());
    }

    #[test]
    fn immediate_render_holds_from_values_during_delay() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(
            Tween::new(0.8)
                .delay(1.0)
                .track(Track::Opacity { from: Some(0.0), to: 1.0 })
                .immediate_render(),
        );

        tweens.step(0.1, &mut state);
        assert_eq!(state.opacity, 0.0);
    }

    #[test]
    fn yoyo_with_single_repeat_returns_to_start() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(
            Tween::new(0.1).scale_to(0.95).yoyo().repeat(Repeat::Times(1)).ease(Easing::Linear),
        );

        tweens.step(0.1, &mut state);
        assert!((state.scale - 0.95).abs() < 1e-5);

        run(&mut tweens, &mut state, 0.2, 0.05);
        assert_eq!(state.scale, 1.0);
        assert!(tweens.is_empty());
    }

    #[test]
    fn forever_tween_never_completes() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(Tween::new(1.0).rotate_to(360.0).repeat(Repeat::Forever));

        let outcome = run(&mut tweens, &mut state, 30.0, 0.25);
        assert_eq!(tweens.len(), 1);
        assert!(!outcome.despawn);
    }

    #[test]
    fn zero_duration_completes_on_start() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(Tween::new(0.0).translate_to(Vec2::new(3.0, 4.0)).tag("snap"));

        let outcome = tweens.step(0.0, &mut state);
        assert_eq!(state.translation, Vec2::new(3.0, 4.0));
        assert_eq!(outcome.completed_tags, vec!["snap"]);
    }

    #[test]
    fn starting_tween_takes_over_matching_tracks() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(
            Tween::new(2.0).scale_to(3.0).fade_to(0.0).ease(Easing::Linear),
        );
        tweens.step(0.5, &mut state);

        tweens.push(Tween::new(1.0).scale_to(1.0).ease(Easing::Linear));
        tweens.step(0.5, &mut state);

        // first tween keeps opacity, loses scale; second starts from 2.0
        assert_eq!(tweens.len(), 2);
        assert!((state.opacity - 0.5).abs() < 1e-5);
        assert!((state.scale - 1.5).abs() < 1e-5);
    }

    #[test]
    fn fully_overwritten_tween_is_dropped_without_completing() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(Tween::new(1.0).scale_to(2.0).tag("hover").despawn_on_complete());
        tweens.step(0.1, &mut state);

        tweens.push(Tween::new(1.0).scale_to(1.0));
        let outcome = tweens.step(0.1, &mut state);

        assert_eq!(tweens.len(), 1);
        assert!(outcome.completed_tags.is_empty());
        assert!(!outcome.despawn);
    }

    #[test]
    fn tween_overwritten_in_its_last_frame_leaves_silently() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(
            Tween::new(0.5).scale_to(2.0).tag("grow").despawn_on_complete(),
        );
        tweens.push(Tween::new(1.0).delay(0.5).scale_to(1.0));

        let outcome = tweens.step(0.5, &mut state);
        assert_eq!(tweens.len(), 1);
        assert!(outcome.completed_tags.is_empty());
        assert!(!outcome.despawn);
    }

    #[test]
    fn looping_tween_keeps_pace_after_days_of_uptime() {
        let frame = 1.0 / 60.0;

        let mut state = NodeState::default();
        let mut tweens = Tweens::from(
            Tween::new(1.0).scale_to(2.0).repeat(Repeat::Forever).ease(Easing::Linear),
        );
        tweens.step(0.0, &mut state);
        tweens.0[0].elapsed = 524_288.25;
        run(&mut tweens, &mut state, 0.5, frame);
        assert!((state.scale - 1.75).abs() < 1e-3, "scale {}", state.scale);

        // odd cycle of a yoyo plays backwards
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(
            Tween::new(1.0).scale_to(2.0).repeat(Repeat::Forever).yoyo().ease(Easing::Linear),
        );
        tweens.step(0.0, &mut state);
        tweens.0[0].elapsed = 524_289.25;
        run(&mut tweens, &mut state, 0.5, frame);
        assert!((state.scale - 1.25).abs() < 1e-3, "scale {}", state.scale);
    }

    #[test]
    fn delayed_tween_does_not_overwrite_before_it_starts() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(Tween::new(0.6).scale_to(1.2).ease(Easing::Linear));
        tweens.push(Tween::new(0.6).delay(0.6).scale_to(1.0).ease(Easing::Linear));

        tweens.step(0.6, &mut state);
        assert!((state.scale - 1.2).abs() < 1e-5);

        run(&mut tweens, &mut state, 0.6, 0.1);
        assert!((state.scale - 1.0).abs() < 1e-5);
    }

    #[test]
    fn no_overwrite_tween_wins_while_active() {
        let mut state = NodeState::default();
        let mut tweens = Tweens::from(Tween::new(1.0).fade_to(0.5).repeat(Repeat::Forever));
        tweens.step(0.1, &mut state);

        tweens.push(Tween::new(0.3).fade_to(1.0).no_overwrite());
        tweens.step(0.15, &mut state);
        assert_eq!(tweens.len(), 2);

        // the looping tween resumes once the burst is over
        tweens.step(0.3, &mut state);
        assert_eq!(tweens.len(), 1);
        assert!(state.opacity < 1.0);
    }

    #[test]
    fn two_despawning_tweens_finishing_together_despawn_once() {
        let mut app = headless_app(50, 1);
        app.add_plugins(TweenPlugin);

        let mut tweens = Tweens::from(Tween::new(0.2).fade_to(0.0).despawn_on_complete());
        tweens.push(Tween::new(0.2).scale_to(0.0).despawn_on_complete());
        let entity = app
            .world_mut()
            .spawn((Sprite::from_color(Color::WHITE, Vec2::ONE), Transform::default(), tweens))
            .id();

        advance(&mut app, 0.5);
        assert!(app.world().get_entity(entity).is_err());
    }

    #[test]
    fn system_writes_rotation_and_tagged_completion() {
        let mut app = headless_app(50, 1);
        app.add_plugins(TweenPlugin)
            .init_resource::<SeenCompletions>()
            .add_systems(Update, collect_completions.after(FxSet::Animate));

        let entity = app
            .world_mut()
            .spawn((
                Transform::default(),
                Tweens::from(Tween::new(0.2).rotate_to(360.0).tag("spin").ease(Easing::Linear)),
            ))
            .id();

        advance(&mut app, 0.4);
        let world = app.world();
        assert_eq!(world.get::<RotationDegrees>(entity), Some(&RotationDegrees(360.0)));
        assert!(world.get::<Tweens>(entity).is_some_and(Tweens::is_empty));

        let seen = world.resource::<SeenCompletions>();
        assert_eq!(seen.0, vec![TweenCompleted { entity, tag: "spin" }]);
    }

    #[test]
    fn queued_tween_on_missing_entity_is_ignored() {
        let mut app = headless_app(50, 1);
        app.add_plugins(TweenPlugin);

        let gone = app.world_mut().spawn(Transform::default()).id();
        app.world_mut().despawn(gone);

        app.world_mut().commands().tween(gone, Tween::new(1.0).fade_to(0.0));
        app.world_mut().flush();
        advance(&mut app, 0.1);
    }
}
