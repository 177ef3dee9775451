//! Path execution - fixed-rate ticking of the active path.

use crate::error::{PathError, Result};

use super::segment::Path;

/// Single-owner slot for the path currently being executed.
///
/// Holds exactly one active path, so at most one path carries the current
/// flag at a time. Candidates are evaluated elsewhere and swapped in with
/// [`PathExecutor::replace`].
#[derive(Debug, Clone)]
pub struct PathExecutor {
    /// The path being executed.
    active: Path,

    /// Control-loop sample time in seconds.
    sample_time: f64,

    /// Time elapsed since the active path was installed.
    elapsed: f64,

    /// Duration of the active path when it was installed.
    initial_duration: f64,

    /// Number of ticks since the active path was installed.
    ticks: u32,
}

impl PathExecutor {
    /// Create an executor for `path` ticking every `sample_time` seconds.
    ///
    /// The path is marked current.
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidTimeStep` if `sample_time` is not positive
    /// and finite.
    pub fn new(mut path: Path, sample_time: f64) -> Result<Self> {
        if !sample_time.is_finite() || sample_time <= 0.0 {
            return Err(PathError::InvalidTimeStep(sample_time).into());
        }

        path.set_current(true);
        Ok(Self {
            initial_duration: path.total_duration(),
            active: path,
            sample_time,
            elapsed: 0.0,
            ticks: 0,
        })
    }

    /// Get the active path.
    #[inline]
    pub fn active(&self) -> &Path {
        &self.active
    }

    /// Get the sample time in seconds.
    #[inline]
    pub fn sample_time(&self) -> f64 {
        self.sample_time
    }

    /// Time elapsed on the active path.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Phase time left on the active path.
    #[inline]
    pub fn remaining(&self) -> f64 {
        self.active.total_duration()
    }

    /// Ticks executed on the active path.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Check if the active path has run out of phase time.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.active.is_finished()
    }

    /// Advance the active path by one sample time.
    ///
    /// Returns `true` while phase time remains, `false` once the path is
    /// finished. Ticking a finished path applies its tail policy.
    pub fn tick(&mut self) -> Result<bool> {
        self.active.advance(self.sample_time)?;
        self.elapsed += self.sample_time;
        self.ticks = self.ticks.saturating_add(1);

        Ok(!self.is_complete())
    }

    /// Install `candidate` as the active path and return the previous one.
    ///
    /// The candidate is marked current and the returned path is unmarked.
    pub fn replace(&mut self, mut candidate: Path) -> Path {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "replacing active path after {} ticks, {} s remaining",
            self.ticks,
            self.active.total_duration()
        );

        candidate.set_current(true);
        let mut previous = core::mem::replace(&mut self.active, candidate);
        previous.set_current(false);

        self.initial_duration = self.active.total_duration();
        self.elapsed = 0.0;
        self.ticks = 0;
        previous
    }

    /// Get progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f64 {
        if self.initial_duration <= 0.0 {
            1.0
        } else {
            (1.0 - self.remaining() / self.initial_duration).max(0.0).min(1.0)
        }
    }
}
