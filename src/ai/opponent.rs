//! Time-gated scripted opponent.
//!
//! The opponent is ticked every frame with the current time and acts at
//! most once per reaction interval. Time is always supplied by the caller,
//! never read from a clock here, so tests can drive it with synthetic
//! timestamps.

use crate::core::{Action, GameConfig, GameState, PlayerId, DEFAULT_AI_REACTION_MS};
use crate::rules::{PlayError, RulesEngine};

use super::policy::{FirstMatch, OpponentPolicy};

/// Scripted opponent seated as `PlayerId::Ai`.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent<P = FirstMatch> {
    policy: P,
    interval_ms: u64,
}

impl Default for ScriptedOpponent<FirstMatch> {
    fn default() -> Self {
        Self::new(FirstMatch, DEFAULT_AI_REACTION_MS)
    }
}

impl ScriptedOpponent<FirstMatch> {
    /// The standard opponent, with the configured reaction interval.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(FirstMatch, config.ai_reaction_ms)
    }
}

impl<P: OpponentPolicy> ScriptedOpponent<P> {
    #[must_use]
    pub fn new(policy: P, interval_ms: u64) -> Self {
        Self {
            policy,
            interval_ms,
        }
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Give the opponent a chance to act at time `now_ms`.
    ///
    /// Does nothing while the game is over or before `interval_ms` has
    /// passed since the last decision. Otherwise records `now_ms` as the
    /// decision time (even if the policy then does nothing) and applies at
    /// most one action. Returns the action applied, if any.
    pub fn tick<E: RulesEngine>(
        &self,
        engine: &mut E,
        state: &mut GameState,
        now_ms: u64,
    ) -> Result<Option<Action>, PlayError> {
        if state.is_over() {
            return Ok(None);
        }
        if now_ms.saturating_sub(state.last_ai_action()) < self.interval_ms {
            return Ok(None);
        }
        state.set_last_ai_action(now_ms);

        let Some(action) = self.policy.select_action(state, PlayerId::Ai) else {
            return Ok(None);
        };
        engine.apply_action(state, PlayerId::Ai, action)?;
        Ok(Some(action))
    }
}
