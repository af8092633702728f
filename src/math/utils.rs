// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Degrees in a full turn.
    pub const FULL_ANGLE: f64 = 360.0;
    /// Degrees in a half turn.
    pub const STRAIGHT_ANGLE: f64 = 180.0;
    pub const DEG2RAD: f64 = std::f64::consts::TAU / FULL_ANGLE;
    pub const RAD2DEG: f64 = FULL_ANGLE / std::f64::consts::TAU;
    /// Smallest step between two `f64` values around `1.0`.
    pub const EPSILON: f64 = f64::EPSILON;
    pub const INFINITY: f64 = f64::INFINITY;
    pub const NEGATIVE_INFINITY: f64 = f64::NEG_INFINITY;
    pub const GAMMA_TO_LINEAR: f64 = 2.2;
    pub const LINEAR_TO_GAMMA: f64 = 0.45454545;
    pub const SQRT_3: f64 = 1.7320508075688772;
}

/// Vergleichsfunktionen, Interpolation und Rundung
pub mod comparison {
    use super::constants::EPSILON;

    /// Returns true if the two values differ by less than [`EPSILON`].
    pub fn approximately(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Clamps `value` into `[min, max]`. NaN passes through unchanged.
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    pub fn clamp01(value: f64) -> f64 {
        clamp(value, 0.0, 1.0)
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        (b - a) * clamp01(t) + a
    }

    /// Linear interpolation that extrapolates for `t` outside `[0, 1]`.
    pub fn lerp_unclamped(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }

    /// Inverse of [`lerp`]: where `value` lies between `a` and `b`, clamped to `[0, 1]`.
    pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
        if approximately(a, b) {
            return 0.0; // Degenerierter Bereich
        }
        (clamp(value, a.min(b), a.max(b)) - a) / (b - a)
    }

    /// Hermite interpolation between `from` and `to`.
    pub fn smooth_step(from: f64, to: f64, t: f64) -> f64 {
        let t = clamp01(t);
        let t = -2.0 * t * t * t + 3.0 * t * t;
        to * t + from * (1.0 - t)
    }

    /// Moves `current` towards `target` by at most `max_delta`.
    ///
    /// A negative `max_delta` pushes the value away from `target`.
    pub fn move_towards(current: f64, target: f64, max_delta: f64) -> f64 {
        if (target - current).abs() <= max_delta {
            return target;
        }
        current + sign(target - current) * max_delta
    }

    /// `1.0` for zero and positive values, `-1.0` otherwise.
    pub fn sign(value: f64) -> f64 {
        if value >= 0.0 { 1.0 } else { -1.0 }
    }

    /// Rounds to the nearest integer, sending exact halves to the even neighbour.
    pub fn round(value: f64) -> f64 {
        value.round_ties_even()
    }

    /// Loops `t` so that it is never larger than `length` and never smaller than 0.
    pub fn repeat(t: f64, length: f64) -> f64 {
        clamp(t - (t / length).floor() * length, 0.0, length)
    }

    /// Bounces `t` back and forth between `0` and `length`.
    pub fn ping_pong(t: f64, length: f64) -> f64 {
        let t = t.abs();
        let rest = t % length;
        if (t / length).ceil() % 2.0 == 0.0 {
            if rest == 0.0 { 0.0 } else { length - rest }
        } else if rest == 0.0 {
            length
        } else {
            rest
        }
    }
}

/// Winkel-Hilfsfunktionen (in Grad)
pub mod angles {
    use super::comparison::{lerp, move_towards, repeat};
    use super::constants::{FULL_ANGLE, STRAIGHT_ANGLE};

    /// Shortest signed difference from `current` to `target`, in `(-180, 180]`.
    pub fn delta_angle(current: f64, target: f64) -> f64 {
        let mut delta = repeat(target - current, FULL_ANGLE);
        if delta > STRAIGHT_ANGLE {
            delta -= FULL_ANGLE;
        }
        delta
    }

    /// Like [`lerp`], but takes the short way around when the angles are
    /// more than half a turn apart.
    pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
        let target = if (b - a).abs() > STRAIGHT_ANGLE {
            a + repeat(b - a + STRAIGHT_ANGLE, FULL_ANGLE) - STRAIGHT_ANGLE
        } else {
            b
        };
        lerp(a, target, t)
    }

    /// Like [`move_towards`], but wraps correctly around 360 degrees.
    pub fn move_towards_angle(current: f64, target: f64, max_delta: f64) -> f64 {
        let delta = delta_angle(current, target);
        if -max_delta < delta && delta < max_delta {
            return target;
        }
        move_towards(current, current + delta, max_delta)
    }
}

/// Zweierpotenzen
pub mod power_of_two {
    /// Bit test `v & (v - 1) == 0`. Zero counts as a power of two.
    pub fn is_power_of_two(value: i32) -> bool {
        (value & value.wrapping_sub(1)) == 0
    }

    /// Smallest power of two `>= value`. Negative values and zero map to 0.
    pub fn next_power_of_two(value: i32) -> u32 {
        if value < 0 {
            return 0;
        }
        let mut v = (value as u32).wrapping_sub(1);
        v |= v >> 1;
        v |= v >> 2;
        v |= v >> 4;
        v |= v >> 8;
        v |= v >> 16;
        v.wrapping_add(1)
    }

    /// Power of two closest to `value`.
    ///
    /// Falls back to the previous power when `value` sits in the lower three
    /// quarters between two powers.
    pub fn closest_power_of_two(value: i32) -> u32 {
        if value < 0 {
            return 0;
        }
        let next = next_power_of_two(value);
        if next - value as u32 > next >> 2 {
            return next >> 1;
        }
        next
    }

    /// 64-bit variant of [`closest_power_of_two`].
    ///
    /// The candidate is `2 << floor(log2(value))`, so exact powers start from
    /// the power above and fall back to themselves. Zero maps to 1.
    pub fn closest_power_of_two_long(value: i64) -> u64 {
        if value < 0 {
            return 0;
        }
        let value = value as u64;
        let next = if value == 0 {
            2
        } else {
            2u64 << (63 - value.leading_zeros())
        };
        if next - value > next >> 2 {
            return next >> 1;
        }
        next
    }
}

/// Gamma-Konvertierung
pub mod gamma {
    use super::constants::{GAMMA_TO_LINEAR, LINEAR_TO_GAMMA};

    pub fn gamma_to_linear_space(value: f64) -> f64 {
        value.powf(GAMMA_TO_LINEAR)
    }

    pub fn linear_to_gamma_space(value: f64) -> f64 {
        value.powf(LINEAR_TO_GAMMA)
    }
}
