//! Velocity root finding and acceleration zero crossings within one phase.

use libm::{copysign, fabs, sqrt};

/// Slack (seconds) allowed on a root falling just outside a phase.
///
/// Roots within this distance of the interval are clamped into it.
pub const ROOT_TOLERANCE: f64 = 1e-12;

/// Clamp `tau` into `[0, duration]` if it lies within tolerance of it.
#[inline]
fn within(tau: f64, duration: f64) -> Option<f64> {
    if tau >= -ROOT_TOLERANCE && tau <= duration + ROOT_TOLERANCE {
        Some(tau.max(0.0).min(duration))
    } else {
        None
    }
}

/// Earliest local time `τ ∈ [0, duration]` at which velocity reaches `target`.
///
/// Velocity over the phase is `v0 + a0·τ + jerk·τ²/2`. Returns `None` when the
/// target is not reached inside the phase.
pub fn time_to_velocity(v0: f64, a0: f64, jerk: f64, target: f64, duration: f64) -> Option<f64> {
    let c = v0 - target;
    if c == 0.0 {
        return Some(0.0);
    }

    if jerk == 0.0 {
        if a0 == 0.0 {
            return None;
        }
        return within(-c / a0, duration);
    }

    // jerk/2·τ² + a0·τ + c = 0
    let a = 0.5 * jerk;
    let mut disc = a0 * a0 - 4.0 * a * c;
    if disc < 0.0 {
        // Tangent contact loses the last few bits to rounding
        if disc > -ROOT_TOLERANCE * (a0 * a0 + fabs(4.0 * a * c)) {
            disc = 0.0;
        } else {
            return None;
        }
    }

    // Cancellation-free form: q = -(b + sign(b)·√disc)/2, roots q/a and c/q
    let q = -0.5 * (a0 + copysign(sqrt(disc), a0));
    let first = within(q / a, duration);
    let second = if q != 0.0 {
        within(c / q, duration)
    } else {
        None
    };

    match (first, second) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, y) => x.or(y),
    }
}

/// Local time in `[0, duration]` at which acceleration `a0 + jerk·τ` is zero.
pub fn critical_time(a0: f64, jerk: f64, duration: f64) -> Option<f64> {
    if jerk == 0.0 {
        return None;
    }
    within(-a0 / jerk, duration)
}
