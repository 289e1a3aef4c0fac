//! Mapping, angle and easing helpers for per-frame game logic.
//!
//! Nothing here reads a clock: every function that depends on elapsed time takes it as an
//! argument.

/// Clamp `value` to `[0, 1]`.
pub fn clamp01(value: f32) -> f32 {
    value.max(0.0).min(1.0)
}

/// Interpolate from `a` to `b` by `t`, with `t` clamped to `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, clamp01(t))
}

/// Interpolate from `a` to `b` by `t` without clamping, so `t` outside `[0, 1]` extrapolates.
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// The `t` in `[0, 1]` at which `lerp(a, b, t) == value`. Returns `0` when `a == b`.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    clamp01((value - a) / (b - a))
}

/// The shortest signed difference from angle `current` to angle `target`, in degrees within
/// `(-180, 180]`. A half turn is always `180`, never `-180`.
pub fn delta_angle_deg(current: f32, target: f32) -> f32 {
    let delta = normalize_angle_deg_360(target - current);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Map `value` from `[source_from, source_to]` to `[target_from, target_to]`, clamping values
/// outside the source range to its ends.
pub fn map_clamped(value: f32, source_from: f32, source_to: f32, target_from: f32, target_to: f32) -> f32 {
    let source_range = source_to - source_from;
    let target_range = target_to - target_from;
    let percent = clamp01((value - source_from) / source_range);
    target_from + target_range * percent
}

/// Zero out `value` if it lies within `[-deadzone, deadzone]`.
///
/// With `full_range`, the values left over outside the dead zone are stretched so that
/// `[deadzone, 1]` maps to `[0, 1]` and `[-1, -deadzone]` maps to `[-1, 0]`.
pub fn apply_joystick_deadzone(value: f32, deadzone: f32, full_range: bool) -> f32 {
    if value.abs() <= deadzone {
        return 0.0;
    }

    if full_range && deadzone > 0.0 {
        if value < 0.0 {
            map_clamped(value, -1.0, -deadzone, -1.0, 0.0)
        } else {
            map_clamped(value, deadzone, 1.0, 0.0, 1.0)
        }
    } else {
        value
    }
}

/// Map a raw axis reading from `[source_from, source_to]` to `[-1, 1]`, then apply a dead zone
/// if `deadzone` is positive.
pub fn map_clamped_joystick(value: f32, source_from: f32, source_to: f32, deadzone: f32, full_range: bool) -> f32 {
    let mapped = map_clamped(value, source_from, source_to, -1.0, 1.0);
    if deadzone > 0.0 {
        apply_joystick_deadzone(mapped, deadzone, full_range)
    } else {
        mapped
    }
}

/// The angle halfway between two angles, along the shorter arc.
pub fn center_angle_deg(angle1: f32, angle2: f32) -> f32 {
    angle1 + delta_angle_deg(angle1, angle2) / 2.0
}

/// Normalize an angle to `[0, 360)`.
pub fn normalize_angle_deg_360(angle: f32) -> f32 {
    let angle = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Normalize an angle to `[-180, 180)`.
pub fn normalize_angle_deg_180(angle: f32) -> f32 {
    let angle = normalize_angle_deg_360(angle);
    if angle >= 180.0 {
        angle - 360.0
    } else {
        angle
    }
}

/// A frame-rate independent `t` for easing towards a target.
///
/// Calling `current = lerp(current, target, eased_lerp_factor(factor, dt))` every frame covers
/// `factor` of the remaining distance per second, however the second is split into frames.
pub fn eased_lerp_factor(factor: f32, delta_time: f32) -> f32 {
    1.0 - (1.0 - factor).powf(delta_time)
}

/// Ease `current` towards `target`, covering `percent_per_second` of the remaining distance per
/// second of `delta_time`.
pub fn eased_lerp(current: f32, target: f32, percent_per_second: f32, delta_time: f32) -> f32 {
    lerp(current, target, eased_lerp_factor(percent_per_second, delta_time))
}
