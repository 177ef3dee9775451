//! Read-only kinematic queries against a path.

use crate::kinematics::{critical_time, time_to_velocity, MotionState};

use super::segment::Path;

/// State at the end of phase 3.
///
/// Jerk is omitted: the three-phase profiles this crate models bring
/// acceleration back to zero, so the terminal jerk carries no information.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FinalMotion {
    /// Final position.
    pub position: f64,
    /// Final velocity.
    pub velocity: f64,
    /// Final acceleration.
    pub acceleration: f64,
}

/// Point at which a path's velocity falls to a limit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VelocityCrossing {
    /// Elapsed time from the path's reference time.
    pub time: f64,
    /// Motion state at `time`.
    pub state: MotionState,
}

impl Path {
    /// Position, velocity and acceleration at the end of phase 3.
    pub fn final_motion(&self) -> FinalMotion {
        let end = self
            .phase_spans()
            .iter()
            .fold(self.state, |state, span| state.integrate(span.jerk, span.duration));

        FinalMotion {
            position: end.position,
            velocity: end.velocity,
            acceleration: end.acceleration,
        }
    }

    /// Earliest point at which velocity falls to `v_limit`.
    ///
    /// Intended for velocity-reducing paths. Returns `None` when the path
    /// starts below `v_limit` or is still above it at the end of phase 3.
    pub fn motion_under_velocity(&self, v_limit: f64) -> Option<VelocityCrossing> {
        if self.state.velocity < v_limit {
            return None;
        }

        let mut start = self.state;
        for span in self.phase_spans() {
            if span.duration > 0.0 {
                let root = time_to_velocity(
                    start.velocity,
                    start.acceleration,
                    span.jerk,
                    v_limit,
                    span.duration,
                );
                if let Some(tau) = root {
                    return Some(VelocityCrossing {
                        time: span.start + tau,
                        state: start.integrate(span.jerk, tau),
                    });
                }
            }
            start = start.integrate(span.jerk, span.duration);
        }

        // Only reachable when every phase is empty or the crossing was lost to rounding
        if start.velocity <= v_limit {
            Some(VelocityCrossing {
                time: self.total_duration(),
                state: start,
            })
        } else {
            None
        }
    }

    /// Maximum velocity reached over the path.
    ///
    /// Candidates are the start, every phase boundary and every interior
    /// point where acceleration crosses zero.
    pub fn max_velocity(&self) -> f64 {
        let mut start = self.state;
        let mut max = start.velocity;

        for span in self.phase_spans() {
            if let Some(tau) = critical_time(start.acceleration, span.jerk, span.duration) {
                max = max.max(start.velocity_after(span.jerk, tau));
            }
            start = start.integrate(span.jerk, span.duration);
            max = max.max(start.velocity);
        }

        max
    }
}
