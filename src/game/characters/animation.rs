// Character animation: shared clip templates and per-character playback

use std::collections::HashMap;
use std::sync::Arc;

use super::state::clips;
use super::AnimationError;

/// A clip template. Immutable once registered in a [`ClipLibrary`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Name the clip is selected by (e.g., "idle", "shoot")
    pub name: String,
    /// Asset the clip was loaded from
    pub asset: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a clip loaded from `<name>.anim`
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            asset: format!("{name}.anim"),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Registry of clip templates keyed by name
#[derive(Debug, Default)]
pub struct ClipLibrary {
    clips: HashMap<String, AnimationClip>,
}

impl ClipLibrary {
    /// Build a library, rejecting duplicate names and unplayable clips
    pub fn new(clips: impl IntoIterator<Item = AnimationClip>) -> Result<Self, AnimationError> {
        let mut library = Self::default();
        for clip in clips {
            if clip.frame_count == 0 {
                return Err(AnimationError::EmptyClip(clip.name));
            }
            if !clip.frame_duration.is_finite() || clip.frame_duration <= 0.0 {
                return Err(AnimationError::InvalidFrameDuration {
                    name: clip.name,
                    duration: clip.frame_duration,
                });
            }
            if library.clips.contains_key(&clip.name) {
                return Err(AnimationError::DuplicateClip(clip.name));
            }
            library.clips.insert(clip.name.clone(), clip);
        }
        Ok(library)
    }

    /// The six soldier clips, shared between characters
    pub fn standard() -> Result<Arc<Self>, AnimationError> {
        Self::new([
            AnimationClip::looping(clips::IDLE, 8, 10.0),
            AnimationClip::looping(clips::WALK, 8, 12.0),
            AnimationClip::looping(clips::RUN, 8, 16.0),
            AnimationClip::looping(clips::CROUCH, 6, 10.0),
            AnimationClip::one_shot(clips::SHOOT, 4, 24.0),
            AnimationClip::one_shot(clips::RELOAD, 12, 10.0),
        ])
        .map(Arc::new)
    }

    pub fn get(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Playback cursor for one play of a clip
#[derive(Debug, Clone)]
struct Playback {
    clip: String,
    frame: usize,
    frame_timer: f32,
    playing: bool,
}

impl Playback {
    fn start(clip: &str) -> Self {
        Self {
            clip: clip.to_string(),
            frame: 0,
            frame_timer: 0.0,
            playing: true,
        }
    }
}

/// Plays clips from a shared library, one at a time
#[derive(Debug)]
pub struct AnimationPlayer {
    library: Arc<ClipLibrary>,
    current: Option<Playback>,
    /// Playback speed multiplier (1.0 = normal)
    playback_speed: f32,
    /// Number of playbacks started
    plays_started: u64,
}

impl AnimationPlayer {
    pub fn new(library: Arc<ClipLibrary>) -> Self {
        Self {
            library,
            current: None,
            playback_speed: 1.0,
            plays_started: 0,
        }
    }

    /// Start `name` from its first frame, replacing whatever was playing.
    /// Unknown names are ignored and the current clip keeps playing.
    pub fn play(&mut self, name: &str) -> bool {
        if !self.library.contains(name) {
            return false;
        }
        self.current = Some(Playback::start(name));
        self.plays_started += 1;
        true
    }

    /// Start `name` unless it is already the current clip
    pub fn play_if_changed(&mut self, name: &str) -> bool {
        if self.current_animation() == Some(name) {
            return false;
        }
        self.play(name)
    }

    /// Set playback speed (1.0 = normal, 2.0 = double speed)
    pub fn set_playback_speed(&mut self, speed: f32) {
        self.playback_speed = speed.max(0.0);
    }

    /// Update the animation (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let Some(playback) = self.current.as_mut() else {
            return;
        };
        if !playback.playing {
            return;
        }
        let Some(clip) = self.library.get(&playback.clip) else {
            return;
        };

        let advance = dt * self.playback_speed;
        if !advance.is_finite() {
            return;
        }
        playback.frame_timer += advance;
        if playback.frame_timer < clip.frame_duration {
            return;
        }

        // Whole frames elapsed; `as` saturates for huge timers
        let frames = (playback.frame_timer / clip.frame_duration).floor() as u64;
        playback.frame_timer = playback.frame_timer.rem_euclid(clip.frame_duration);

        let count = clip.frame_count as u64;
        let target = (playback.frame as u64).saturating_add(frames);
        if target < count {
            playback.frame = target as usize;
        } else if clip.looping {
            playback.frame = (target % count) as usize;
        } else {
            // Stay on last frame
            playback.frame = clip.frame_count - 1;
            playback.frame_timer = 0.0;
            playback.playing = false;
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> Option<&str> {
        self.current.as_ref().map(|p| p.clip.as_str())
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current.as_ref().map_or(0, |p| p.frame)
    }

    /// Check if the animation is playing
    pub fn is_playing(&self) -> bool {
        self.current.as_ref().is_some_and(|p| p.playing)
    }

    /// Check if the current one-shot animation has run to its end
    pub fn is_finished(&self) -> bool {
        let Some(playback) = self.current.as_ref() else {
            return true;
        };
        match self.library.get(&playback.clip) {
            Some(clip) => !clip.looping && !playback.playing,
            None => true,
        }
    }

    /// Number of playbacks started so far
    pub fn plays_started(&self) -> u64 {
        self.plays_started
    }

    /// Get the clip info for the current animation
    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.library.get(self.current_animation()?)
    }

    /// The shared clip library
    pub fn library(&self) -> &Arc<ClipLibrary> {
        &self.library
    }
}
