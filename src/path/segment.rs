//! Three-phase jerk-limited motion segment.

use core::fmt;

use serde::Deserialize;

use crate::error::{PathError, Result};
use crate::kinematics::MotionState;

/// Number of constant-jerk phases in a path.
pub const PHASE_COUNT: usize = 3;

/// Behavior of [`Path::advance`] once all phase time is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    /// Keep integrating with zero jerk and the last acceleration held.
    #[default]
    HoldAcceleration,
    /// Leave position, velocity and acceleration untouched; jerk drops to zero.
    Freeze,
}

/// Time window of a single phase relative to "now".
#[derive(Debug, Clone, Copy)]
pub(super) struct PhaseSpan {
    /// Elapsed time at which the phase starts.
    pub start: f64,
    /// Remaining duration of the phase (never negative).
    pub duration: f64,
    /// Constant jerk of the phase.
    pub jerk: f64,
}

/// A jerk-limited motion segment.
///
/// Phase end-times are cumulative and relative to the current reference
/// time: phase `i` covers elapsed time `(end[i-1], end[i]]` with `end[0] ≡ 0`.
/// The motion state describes the segment at elapsed time zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Path {
    pub(super) end_times: [f64; PHASE_COUNT],
    pub(super) jerks: [f64; PHASE_COUNT],
    pub(super) state: MotionState,
    pub(super) is_current: bool,
    pub(super) tail_policy: TailPolicy,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// Create an empty path.
    ///
    /// All phases have zero length and zero jerk; position and acceleration
    /// are zero and velocity is one.
    pub const fn new() -> Self {
        Self {
            end_times: [0.0; PHASE_COUNT],
            jerks: [0.0; PHASE_COUNT],
            state: MotionState::new(0.0, 1.0, 0.0, 0.0),
            is_current: false,
            tail_policy: TailPolicy::HoldAcceleration,
        }
    }

    /// Create a path from phase end-times, phase jerks and a starting state.
    ///
    /// The state's jerk is replaced by the jerk of phase 1.
    ///
    /// # Errors
    ///
    /// Returns an error if an end-time is negative, not finite, or smaller
    /// than the one before it.
    pub fn from_parts(
        end_times: [f64; PHASE_COUNT],
        jerks: [f64; PHASE_COUNT],
        state: MotionState,
    ) -> Result<Self> {
        let mut path = Self::new();
        path.state = state;
        path.set_phases(end_times, jerks)?;
        Ok(path)
    }

    /// Builder-style tail policy override.
    #[inline]
    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    // ---------------------------------------------------------------------
    // Getters
    // ---------------------------------------------------------------------

    /// Phases as `[t1, t2, t3, j1, j2, j3]`.
    pub fn phases(&self) -> [f64; 2 * PHASE_COUNT] {
        let [t1, t2, t3] = self.end_times;
        let [j1, j2, j3] = self.jerks;
        [t1, t2, t3, j1, j2, j3]
    }

    /// Phase end-times.
    #[inline]
    pub fn end_times(&self) -> [f64; PHASE_COUNT] {
        self.end_times
    }

    /// Phase jerks.
    #[inline]
    pub fn jerks(&self) -> [f64; PHASE_COUNT] {
        self.jerks
    }

    /// End-time of phase `phase` (1-based).
    #[inline]
    pub fn phase_end_time(&self, phase: usize) -> Option<f64> {
        phase
            .checked_sub(1)
            .and_then(|i| self.end_times.get(i))
            .copied()
    }

    /// Jerk of phase `phase` (1-based).
    #[inline]
    pub fn phase_jerk(&self, phase: usize) -> Option<f64> {
        phase.checked_sub(1).and_then(|i| self.jerks.get(i)).copied()
    }

    /// Position at elapsed time zero.
    #[inline]
    pub fn position(&self) -> f64 {
        self.state.position
    }

    /// Velocity at elapsed time zero.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    /// Acceleration at elapsed time zero.
    #[inline]
    pub fn acceleration(&self) -> f64 {
        self.state.acceleration
    }

    /// Jerk at elapsed time zero.
    #[inline]
    pub fn jerk(&self) -> f64 {
        self.state.jerk
    }

    /// Full motion state at elapsed time zero.
    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Whether this path is the one being executed.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Tail policy applied past the last phase.
    #[inline]
    pub fn tail_policy(&self) -> TailPolicy {
        self.tail_policy
    }

    /// Remaining duration until the end of phase 3.
    #[inline]
    pub fn total_duration(&self) -> f64 {
        self.end_times[PHASE_COUNT - 1]
    }

    /// Check if all phase time has been consumed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.total_duration() <= 0.0
    }

    // ---------------------------------------------------------------------
    // Setters
    // ---------------------------------------------------------------------

    /// Set phase end-times and jerks together.
    ///
    /// # Errors
    ///
    /// Same as [`Path::set_phase_end_times`]. The path is unchanged on error.
    pub fn set_phases(
        &mut self,
        end_times: [f64; PHASE_COUNT],
        jerks: [f64; PHASE_COUNT],
    ) -> Result<()> {
        self.set_phase_end_times(end_times)?;
        self.set_phase_jerks(jerks);
        Ok(())
    }

    /// Set the cumulative phase end-times.
    ///
    /// # Errors
    ///
    /// Returns an error if an end-time is negative, not finite, or smaller
    /// than the one before it. The path is unchanged on error.
    pub fn set_phase_end_times(&mut self, end_times: [f64; PHASE_COUNT]) -> Result<()> {
        validate_end_times(&end_times)?;
        self.end_times = end_times;
        Ok(())
    }

    /// Set the phase jerks.
    ///
    /// The current jerk is reset to the jerk of phase 1.
    pub fn set_phase_jerks(&mut self, jerks: [f64; PHASE_COUNT]) {
        self.jerks = jerks;
        self.state.jerk = jerks[0];
    }

    /// Set the starting position.
    #[inline]
    pub fn set_position(&mut self, position: f64) {
        self.state.position = position;
    }

    /// Set the starting velocity.
    #[inline]
    pub fn set_velocity(&mut self, velocity: f64) {
        self.state.velocity = velocity;
    }

    /// Set the starting acceleration.
    #[inline]
    pub fn set_acceleration(&mut self, acceleration: f64) {
        self.state.acceleration = acceleration;
    }

    /// Mark this path as the current one (or not).
    #[inline]
    pub fn set_current(&mut self, is_current: bool) {
        self.is_current = is_current;
    }

    /// Set the tail policy.
    #[inline]
    pub fn set_tail_policy(&mut self, policy: TailPolicy) {
        self.tail_policy = policy;
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Advance the path by `dt` seconds.
    ///
    /// Integrates the state through the live phases and shifts every phase
    /// end-time down by the consumed time. Time left over once phase 3 is
    /// exhausted is handled according to the [`TailPolicy`].
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidTimeStep` if `dt` is negative or not finite.
    pub fn advance(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PathError::InvalidTimeStep(dt).into());
        }

        let mut remaining = dt;
        for _ in 0..PHASE_COUNT {
            if remaining <= 0.0 {
                break;
            }
            let Some(phase) = self.live_phase() else {
                break;
            };

            let span = self.phase_spans()[phase];
            let consumed = remaining.min(span.duration);
            self.state = self.state.integrate(span.jerk, consumed);
            for end in self.end_times.iter_mut() {
                *end = (*end - consumed).max(0.0);
            }
            remaining -= consumed;
        }

        if remaining > 0.0 {
            self.advance_tail(remaining);
        }

        Ok(())
    }

    fn advance_tail(&mut self, dt: f64) {
        #[cfg(feature = "defmt")]
        defmt::trace!("path advanced {} s past its last phase", dt);

        match self.tail_policy {
            TailPolicy::HoldAcceleration => self.state = self.state.integrate(0.0, dt),
            TailPolicy::Freeze => self.state.jerk = 0.0,
        }
    }

    /// Index of the first phase with time remaining.
    fn live_phase(&self) -> Option<usize> {
        self.phase_spans().iter().position(|span| span.duration > 0.0)
    }

    /// Start, remaining duration and jerk of every phase.
    pub(super) fn phase_spans(&self) -> [PhaseSpan; PHASE_COUNT] {
        let mut spans = [PhaseSpan {
            start: 0.0,
            duration: 0.0,
            jerk: 0.0,
        }; PHASE_COUNT];
        let mut start = 0.0;
        for (i, span) in spans.iter_mut().enumerate() {
            let end = self.end_times[i];
            *span = PhaseSpan {
                start,
                duration: (end - start).max(0.0),
                jerk: self.jerks[i],
            };
            start = end;
        }
        spans
    }
}

fn validate_end_times(end_times: &[f64; PHASE_COUNT]) -> core::result::Result<(), PathError> {
    let mut previous = 0.0;
    for (i, &time) in end_times.iter().enumerate() {
        let phase = i + 1;
        if !time.is_finite() {
            return Err(PathError::NonFinitePhaseTime { phase });
        }
        if time < 0.0 {
            return Err(PathError::NegativePhaseTime { phase, time });
        }
        if time < previous {
            return Err(PathError::UnorderedPhases {
                phase,
                previous,
                time,
            });
        }
        previous = time;
    }
    Ok(())
}

/// Diagnostic dump: `t1,t2,t3,j1,j2,j3,is_current,pos,vel,acc`.
///
/// Meant for tracing only; not a stable format.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [t1, t2, t3] = self.end_times;
        let [j1, j2, j3] = self.jerks;
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{}",
            t1,
            t2,
            t3,
            j1,
            j2,
            j3,
            u8::from(self.is_current),
            self.state.position,
            self.state.velocity,
            self.state.acceleration
        )
    }
}
