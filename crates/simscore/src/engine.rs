//! A scorer whose metric and mismatched-length policy are held on stacks.

use core::ops::{Deref, DerefMut};

use crate::{
    config::Config,
    dispatch,
    error::{Sample, ScoreError, SENTINEL},
    modes::{MismatchMode, SimilarityMode},
    stack::ModeStack,
};

/// Scores pairs of vectors with the current metric and mismatched-length
/// policy.
///
/// Both settings live on a `ModeStack`, so a caller can push an override and
/// pop it to restore whatever was current before. Popping never removes the
/// defaults the engine was created with.
///
/// The engine does no locking. Share it between threads only behind
/// external synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Engine {
    /// The metric overrides.
    sim_modes: ModeStack<SimilarityMode>,
    /// The mismatched-length policy overrides.
    mismatch_modes: ModeStack<MismatchMode>,
}

impl Engine {
    /// Creates an engine defaulting to `Cosine` and `Bail`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine whose defaults are the settings in `config`.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            sim_modes: ModeStack::new(config.metric),
            mismatch_modes: ModeStack::new(config.mismatch),
        }
    }

    /// Makes `mode` the current metric.
    pub fn push_sim_mode(&mut self, mode: SimilarityMode) {
        self.sim_modes.push(mode);
    }

    /// Restores the metric that was current before the last push.
    ///
    /// Does nothing if only the default is left.
    pub fn pop_sim_mode(&mut self) {
        self.sim_modes.pop();
    }

    /// The current metric.
    #[must_use]
    pub fn current_sim_mode(&self) -> Option<SimilarityMode> {
        self.sim_modes.current()
    }

    /// Makes `mode` the current mismatched-length policy.
    pub fn push_mismatch_mode(&mut self, mode: MismatchMode) {
        self.mismatch_modes.push(mode);
    }

    /// Restores the mismatched-length policy that was current before the last
    /// push.
    ///
    /// Does nothing if only the default is left.
    pub fn pop_mismatch_mode(&mut self) {
        self.mismatch_modes.pop();
    }

    /// The current mismatched-length policy.
    #[must_use]
    pub fn current_mismatch_mode(&self) -> Option<MismatchMode> {
        self.mismatch_modes.current()
    }

    /// A snapshot of the current metric and policy.
    #[must_use]
    pub fn config(&self) -> Option<Config> {
        Some(Config::new(
            self.current_sim_mode()?,
            self.current_mismatch_mode()?,
        ))
    }

    /// The settings the engine was created with, which popping never removes.
    #[must_use]
    pub fn defaults(&self) -> Option<Config> {
        Some(Config::new(
            self.sim_modes.default_value()?,
            self.mismatch_modes.default_value()?,
        ))
    }

    /// Pops every override, leaving only the defaults.
    pub fn reset(&mut self) {
        self.sim_modes.truncate_to(1);
        self.mismatch_modes.truncate_to(1);
    }

    /// Pushes `mode` and returns a guard that restores the metric stack when
    /// dropped.
    ///
    /// On drop the stack goes back to the depth it had before the push, so
    /// pushes made through the guard are discarded along with `mode`, and a
    /// pop made through the guard does not cause a second pop.
    pub fn scoped_sim_mode(&mut self, mode: SimilarityMode) -> SimModeGuard<'_> {
        let depth = self.sim_modes.depth();
        self.push_sim_mode(mode);
        SimModeGuard { engine: self, depth }
    }

    /// Pushes `mode` and returns a guard that restores the policy stack when
    /// dropped.
    ///
    /// See [`Engine::scoped_sim_mode`] for how the stack is restored.
    pub fn scoped_mismatch_mode(&mut self, mode: MismatchMode) -> MismatchModeGuard<'_> {
        let depth = self.mismatch_modes.depth();
        self.push_mismatch_mode(mode);
        MismatchModeGuard { engine: self, depth }
    }

    /// Scores `a` against `b` with the current settings.
    ///
    /// # Errors
    ///
    /// * `ScoreError::ConfigurationUnavailable` if there is no current metric
    ///   or policy.
    /// * Any error from [`crate::score`].
    ///
    /// A zero vector under `Cosine` or `Tanimoto` is not rejected. It scores
    /// `Ok(NaN)`.
    pub fn try_compute(&self, a: &[f64], b: &[f64]) -> Result<Sample, ScoreError> {
        let config = self.config().ok_or_else(|| {
            ftlog::debug!("Rejected pair: {}", ScoreError::ConfigurationUnavailable);
            ScoreError::ConfigurationUnavailable
        })?;
        dispatch::score(&config, a, b)
    }

    /// Scores `a` against `b` with the current settings, returning
    /// [`SENTINEL`] if the pair is rejected.
    ///
    /// A cosine similarity of exactly `-1.0` looks the same as a rejection.
    /// Use [`Engine::try_compute`] to tell them apart.
    ///
    /// A zero vector under `Cosine` or `Tanimoto` scores NaN, not
    /// [`SENTINEL`].
    #[must_use]
    pub fn compute(&self, a: &[f64], b: &[f64]) -> Sample {
        self.try_compute(a, b).unwrap_or(SENTINEL)
    }
}

/// Holds a pushed metric and restores the metric stack when dropped.
///
/// Derefs to the `Engine`, so the engine can still be used while the override
/// is in place.
#[derive(Debug)]
#[must_use = "the override is removed as soon as the guard is dropped"]
pub struct SimModeGuard<'a> {
    /// The engine the override was pushed onto.
    engine: &'a mut Engine,
    /// Depth of the stack before the override was pushed.
    depth: usize,
}

impl Deref for SimModeGuard<'_> {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        self.engine
    }
}

impl DerefMut for SimModeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Engine {
        self.engine
    }
}

impl Drop for SimModeGuard<'_> {
    fn drop(&mut self) {
        self.engine.sim_modes.truncate_to(self.depth);
    }
}

/// Holds a pushed mismatched-length policy and restores the policy stack
/// when dropped.
///
/// Derefs to the `Engine`, so the engine can still be used while the override
/// is in place.
#[derive(Debug)]
#[must_use = "the override is removed as soon as the guard is dropped"]
pub struct MismatchModeGuard<'a> {
    /// The engine the override was pushed onto.
    engine: &'a mut Engine,
    /// Depth of the stack before the override was pushed.
    depth: usize,
}

impl Deref for MismatchModeGuard<'_> {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        self.engine
    }
}

impl DerefMut for MismatchModeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Engine {
        self.engine
    }
}

impl Drop for MismatchModeGuard<'_> {
    fn drop(&mut self) {
        self.engine.mismatch_modes.truncate_to(self.depth);
    }
}
