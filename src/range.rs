//! Integer and float ranges with random sampling and interpolation.

use crate::math;
use rand::Rng;

/// A range of integers between `from` and `to`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RangeInt {
    /// The range start
    pub from: i32,
    /// The range end
    pub to: i32,
}

impl RangeInt {
    /// Construct a new range.
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// `to - from`, widened so that it can't overflow.
    pub fn width(&self) -> i64 {
        i64::from(self.to) - i64::from(self.from)
    }

    /// A random value in `[from, to]`. The bounds may be given in either order.
    pub fn random_inclusive<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        let (low, high) = ordered(self.from, self.to);
        rng.gen_range(low..=high)
    }

    /// A random value in `[from, to)`. Returns `from` if the range is empty.
    pub fn random_exclusive<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.from >= self.to {
            self.from
        } else {
            rng.gen_range(self.from..self.to)
        }
    }
}

/// A range of floats between `from` and `to`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeFloat {
    /// The range start
    pub from: f32,
    /// The range end
    pub to: f32,
}

impl RangeFloat {
    /// Construct a new range.
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    /// `to - from`.
    pub fn width(&self) -> f32 {
        self.to - self.from
    }

    /// A random value in `[from, to]`. The bounds may be given in either order.
    pub fn random_inclusive<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let (low, high) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        rng.gen_range(low..=high)
    }

    /// Interpolate from `from` to `to` by `t`, with `t` clamped to `[0, 1]`.
    pub fn lerp(&self, t: f32) -> f32 {
        math::lerp(self.from, self.to, t)
    }

    /// Interpolate from `from` to `to` by `t` without clamping.
    pub fn lerp_unclamped(&self, t: f32) -> f32 {
        math::lerp_unclamped(self.from, self.to, t)
    }

    /// The `t` in `[0, 1]` at which [`lerp`](Self::lerp) returns `value`.
    pub fn inverse_lerp(&self, value: f32) -> f32 {
        math::inverse_lerp(self.from, self.to, value)
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
