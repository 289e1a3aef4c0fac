//! A countdown timer driven by explicit time deltas.
//!
//! ```
//! use grabbag::countdown::Countdown;
//!
//! let mut spawn_timer = Countdown::new(true, 2.0);
//! assert!(!spawn_timer.progress(1.5));
//! assert!(spawn_timer.progress(1.0));
//! // Looping timers restart on the next call, carrying over the 0.5s overshoot
//! assert!(!spawn_timer.progress(0.25));
//! assert_eq!(spawn_timer.time_left(), 1.25);
//! ```

use crate::math::clamp01;
use std::fmt::{self, Debug};
use tracing::trace;

/// A callback that picks the duration of the next countdown round.
pub type DurationGenerator = Box<dyn FnMut() -> f32 + Send>;

/// A countdown that can either run once or loop, optionally drawing a fresh duration each round.
pub struct Countdown {
    time_left: f32,
    duration: f32,
    looping: bool,
    generator: Option<DurationGenerator>,
}

impl Countdown {
    /// Construct a countdown starting at `start_duration`.
    pub fn new(looping: bool, start_duration: f32) -> Self {
        Self {
            time_left: start_duration,
            duration: start_duration,
            looping,
            generator: None,
        }
    }

    /// Construct a countdown whose duration is picked by `generator` every time it is reset or
    /// loops. If `start_duration` is `None`, the first duration also comes from `generator`.
    pub fn with_generator<F>(looping: bool, mut generator: F, start_duration: Option<f32>) -> Self
    where
        F: FnMut() -> f32 + Send + 'static,
    {
        let start_duration = start_duration.unwrap_or_else(&mut generator);
        Self {
            time_left: start_duration,
            duration: start_duration,
            looping,
            generator: Some(Box::new(generator)),
        }
    }

    /// Replace (or remove) the duration generator.
    pub fn set_generator(&mut self, generator: Option<DurationGenerator>) {
        self.generator = generator;
    }

    /// The time left in the current round. Negative once the countdown has overshot zero.
    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    /// Overwrite the time left without touching the duration.
    pub fn set_time_left(&mut self, time_left: f32) {
        self.time_left = time_left;
    }

    /// The duration of the current round.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Whether the countdown restarts itself after reaching zero.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Change whether the countdown restarts itself after reaching zero.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Advance the countdown by `delta` seconds. Returns `true` if it reached zero during this
    /// call.
    ///
    /// If it had already reached zero before the call, a looping countdown is refilled first and
    /// then advanced; a one-shot countdown stays where it is and returns `false`. A looping
    /// countdown whose new duration is zero or less stops and returns `false`.
    pub fn progress(&mut self, delta: f32) -> bool {
        if self.reached_zero() {
            if !self.looping {
                return false;
            }

            self.refill();

            // The generator may have picked a non-positive duration
            if self.duration <= 0.0 {
                return false;
            }
        }

        self.time_left -= delta;
        self.reached_zero()
    }

    /// Restart the countdown from its full duration, picking a new duration first if there is a
    /// generator.
    pub fn reset(&mut self) {
        if let Some(generator) = self.generator.as_mut() {
            self.duration = generator();
        }
        self.time_left = self.duration;
    }

    /// Restart the countdown with a new duration.
    pub fn reset_to(&mut self, duration: f32) {
        self.time_left = duration;
        self.duration = duration;
    }

    /// Start the next round by adding the duration to the time left, so an overshoot below zero
    /// is carried into the new round. Picks a new duration first if there is a generator.
    ///
    /// Unlike [`reset`](Self::reset), this is only meant to be called once the countdown has
    /// reached zero.
    pub fn refill(&mut self) {
        let duration = match self.generator.as_mut() {
            Some(generator) => generator(),
            None => self.duration,
        };
        self.refill_with(duration);
    }

    /// Start the next round with a new `duration`, carrying over any overshoot.
    pub fn refill_with(&mut self, duration: f32) {
        trace!(duration, overshoot = -self.time_left, "refilled countdown");
        self.time_left += duration;
        self.duration = duration;
    }

    /// Whether the time left is zero or less.
    pub fn reached_zero(&self) -> bool {
        self.time_left <= 0.0
    }

    /// Whether the time left is above zero.
    pub fn is_running(&self) -> bool {
        self.time_left > 0.0
    }

    /// How much of the current round has passed.
    pub fn time_passed(&self) -> f32 {
        self.duration - self.time_left
    }

    /// `0` when the round has just started, `1` once it is over. `1` if the duration is zero.
    pub fn percent_elapsed(&self) -> f32 {
        1.0 - self.percent_left()
    }

    /// `1` when the round has just started, `0` once it is over. `0` if the duration is zero.
    pub fn percent_left(&self) -> f32 {
        if self.duration == 0.0 {
            return 0.0;
        }
        clamp01(self.time_left / self.duration)
    }
}

impl Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdown")
            .field("time_left", &self.time_left)
            .field("duration", &self.duration)
            .field("looping", &self.looping)
            .field("generator", &self.generator.is_some())
            .finish()
    }
}
