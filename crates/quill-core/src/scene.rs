//! A minimal scene: an ordered set of objects plus a playback loop that
//! drives one animation at a time and hands every tick to a callback.

use serde::{Deserialize, Serialize};

use crate::animatable::{Animatable, ObjectId};
use crate::animation::Animation;
use crate::frame::Frame;

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Ticks per second of animation time.
    pub frame_rate: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { frame_rate: 60.0 }
    }
}

/// Objects currently on stage, in draw order.
pub struct Scene<M: Animatable> {
    objects: Vec<M>,
    config: PlaybackConfig,
}

impl<M: Animatable> Default for Scene<M> {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl<M: Animatable> Scene<M> {
    pub fn new(config: PlaybackConfig) -> Self {
        Self { objects: Vec::new(), config }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Put `object` on top. An object with the same id is replaced.
    pub fn add(&mut self, object: M) {
        self.objects.retain(|o| o.id() != object.id());
        self.objects.push(object);
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<M> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        Some(self.objects.remove(index))
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|o| o.id() == id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&M> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn objects(&self) -> &[M] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Run `animation` to completion.
    ///
    /// Ticks are spaced `1 / frame_rate` seconds apart, starting at progress
    /// 0 and ending exactly at progress 1. A zero-length animation gets a
    /// single tick at progress 1. Each tick's frame holds the static scene
    /// objects followed by the animation's composited objects. Returns the
    /// number of frames emitted.
    pub fn play<F>(&mut self, mut animation: Box<dyn Animation<M>>, mut on_frame: F) -> usize
    where
        F: FnMut(&Frame<'_, M>),
    {
        let frame_rate = if self.config.frame_rate > 0.0 {
            self.config.frame_rate
        } else {
            log::warn!(
                "Invalid frame rate {}, falling back to {}",
                self.config.frame_rate,
                PlaybackConfig::default().frame_rate
            );
            PlaybackConfig::default().frame_rate
        };

        animation.begin();
        let run_time = animation.run_time().max(0.0);
        let ticks = if run_time > 0.0 {
            (run_time * frame_rate).ceil() as usize + 1
        } else {
            1
        };
        log::debug!(
            "Playing '{}' on '{}': {:.3}s, {} frames",
            animation.name(),
            animation.mobject().name(),
            run_time,
            ticks
        );

        for index in 0..ticks {
            let time = (index as f32 / frame_rate).min(run_time);
            let alpha = if run_time > 0.0 { (time / run_time).min(1.0) } else { 1.0 };
            animation.interpolate(alpha);

            let composited = animation.composited_objects();
            let mut objects: Vec<&M> = self
                .objects
                .iter()
                .filter(|o| composited.iter().all(|c| c.id() != o.id()))
                .collect();
            objects.extend(composited);
            on_frame(&Frame::new(index, time, alpha, objects));
        }

        animation.finish();
        animation.clean_up_from_scene(self);
        ticks
    }
}
