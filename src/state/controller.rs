//! Operator-side view-model: owns the authoritative game state, validates
//! raw form input and persists every accepted change.

use std::rc::Rc;

use yew::Reducible;

use super::input::{challenge_from_form, parse_multiplier};
use super::store::{GameStore, KeyValueStore};
use crate::config::{MultiplierPolicy, ShowConfig};
use crate::error::InputError;
use crate::model::{GameAction, GameState, Notification};

/// A notification tagged with its position in the session, so views can tell
/// a fresh notice from one they have already shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u64,
    pub notification: Notification,
}

/// Commands sent from the controller view. Text fields arrive raw.
#[derive(Clone, Debug, PartialEq)]
pub enum ControllerCommand {
    AddChallenge { name: String, points: String },
    RemoveChallenge(usize),
    AwardChallenge(usize),
    AdjustPoints(i64),
    NextRound,
    ResetGame,
    SetMultiplier(String),
    /// Swap the multiplier policy after settings change. Produces no notice.
    Configure(MultiplierPolicy),
}

#[derive(Clone, Debug)]
pub struct ControllerViewModel<S> {
    state: GameState,
    store: GameStore<S>,
    policy: MultiplierPolicy,
    notice: Option<Notice>,
    seq: u64,
}

impl<S: KeyValueStore> ControllerViewModel<S> {
    /// Resumes the saved game, or starts a fresh one when nothing usable is
    /// stored.
    pub fn load(backend: S, config: &ShowConfig) -> Self {
        let store = GameStore::new(backend, config.state_key.clone());
        let state = store.read().unwrap_or_default();
        log::info!(
            "controller ready: round {}, {} challenge(s)",
            state.round,
            state.challenges.len()
        );
        Self {
            state,
            store,
            policy: config.multiplier_policy,
            notice: None,
            seq: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The most recent notification, if any action has been applied yet.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[cfg(test)]
    pub fn policy(&self) -> MultiplierPolicy {
        self.policy
    }

    #[cfg(test)]
    pub fn store(&self) -> &GameStore<S> {
        &self.store
    }

    fn dispatch(&mut self, action: GameAction) -> Notification {
        log::debug!("dispatch {action:?}");
        let (next, note) = self.state.apply(action);
        self.state = next;
        // in-memory state stays authoritative even when the write fails
        if let Err(e) = self.store.write(&self.state) {
            log::error!("could not save game: {e}");
        }
        self.seq += 1;
        self.notice = Some(Notice {
            seq: self.seq,
            notification: note.clone(),
        });
        log::info!("{}: {}", note.title, note.description);
        note
    }

    pub fn add_challenge(
        &mut self,
        raw_name: &str,
        raw_points: &str,
    ) -> Result<Notification, InputError> {
        let challenge = challenge_from_form(raw_name, raw_points)?;
        Ok(self.dispatch(GameAction::AddChallenge(challenge)))
    }

    pub fn remove_challenge(&mut self, index: usize) -> Notification {
        self.dispatch(GameAction::RemoveChallenge(index))
    }

    /// Awards the stored points of the challenge at `index`. The challenge
    /// stays listed and can be awarded again.
    pub fn award_challenge(&mut self, index: usize) -> Result<Notification, InputError> {
        let points = self
            .state
            .challenges
            .get(index)
            .map(|c| c.points)
            .ok_or(InputError::UnknownChallenge(index))?;
        Ok(self.dispatch(GameAction::AddPoints(points)))
    }

    pub fn adjust_points(&mut self, delta: i64) -> Notification {
        self.dispatch(GameAction::AddPoints(delta))
    }

    pub fn advance_round(&mut self) -> Notification {
        self.dispatch(GameAction::NextRound)
    }

    pub fn reset_game(&mut self) -> Notification {
        self.dispatch(GameAction::ResetGame)
    }

    pub fn set_multiplier(&mut self, raw: &str) -> Result<Notification, InputError> {
        let value = parse_multiplier(raw, self.policy)?;
        Ok(self.dispatch(GameAction::SetMultiplier(value)))
    }

    pub fn set_policy(&mut self, policy: MultiplierPolicy) {
        self.policy = policy;
    }

    /// Runs one command. `Configure` yields `Ok(None)`.
    pub fn handle(&mut self, cmd: ControllerCommand) -> Result<Option<Notification>, InputError> {
        use ControllerCommand::*;
        let note = match cmd {
            AddChallenge { name, points } => self.add_challenge(&name, &points)?,
            RemoveChallenge(index) => self.remove_challenge(index),
            AwardChallenge(index) => self.award_challenge(index)?,
            AdjustPoints(delta) => self.adjust_points(delta),
            NextRound => self.advance_round(),
            ResetGame => self.reset_game(),
            SetMultiplier(raw) => self.set_multiplier(&raw)?,
            Configure(policy) => {
                self.set_policy(policy);
                return Ok(None);
            }
        };
        Ok(Some(note))
    }
}

impl<S: KeyValueStore + Clone + 'static> Reducible for ControllerViewModel<S> {
    type Action = ControllerCommand;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.handle(action) {
            Ok(_) => Rc::new(next),
            Err(e) => {
                log::debug!("ignored operator input: {e}");
                self
            }
        }
    }
}
