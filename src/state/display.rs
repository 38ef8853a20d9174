//! Audience-side view-model: a read-only mirror of the saved game that
//! notices score increases.

use super::store::{GameStore, KeyValueStore};
use crate::config::ShowConfig;
use crate::model::GameState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// The mirror differs from the previous poll.
    pub changed: bool,
    /// The score went up on this poll.
    pub celebrate: bool,
}

pub struct DisplayViewModel<S> {
    store: GameStore<S>,
    mirror: GameState,
    celebration_ms: f64,
    celebrate_until: Option<f64>,
}

impl<S: KeyValueStore> DisplayViewModel<S> {
    pub fn new(backend: S, config: &ShowConfig) -> Self {
        Self {
            store: GameStore::new(backend, config.state_key.clone()),
            mirror: GameState::default(),
            celebration_ms: config.celebration_ms as f64,
            celebrate_until: None,
        }
    }

    /// Starts from what an earlier display was showing, so the next poll only
    /// celebrates a genuine increase.
    pub fn with_mirror(mut self, mirror: GameState) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn mirror(&self) -> &GameState {
        &self.mirror
    }

    /// Re-reads the saved game at time `now_ms`. A missing or unreadable
    /// record counts as a fresh game.
    pub fn poll(&mut self, now_ms: f64) -> PollOutcome {
        let next = self.store.read().unwrap_or_default();
        let celebrate = next.points > self.mirror.points;
        if celebrate {
            log::info!(
                "score up: {} -> {}",
                self.mirror.points,
                next.points
            );
            self.celebrate_until = Some(now_ms + self.celebration_ms);
        }
        let changed = next != self.mirror;
        self.mirror = next;
        PollOutcome { changed, celebrate }
    }

    /// Whether the celebration raised by an earlier poll is still running.
    pub fn celebration_active(&self, now_ms: f64) -> bool {
        self.celebration_remaining(now_ms).is_some()
    }

    /// Milliseconds left on the running celebration.
    pub fn celebration_remaining(&self, now_ms: f64) -> Option<f64> {
        self.celebrate_until
            .map(|until| until - now_ms)
            .filter(|left| *left > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Challenge;
    use crate::state::{ControllerViewModel, MemoryStore};

    fn write_points(store: &GameStore<MemoryStore>, points: f64) {
        let state = GameState {
            points,
            ..Default::default()
        };
        store.write(&state).unwrap();
    }

    fn pair() -> (GameStore<MemoryStore>, DisplayViewModel<MemoryStore>) {
        let backend = MemoryStore::default();
        let writer = GameStore::new(backend.clone(), "gameState");
        let display = DisplayViewModel::new(backend, &ShowConfig::default());
        (writer, display)
    }

    #[test]
    fn absent_record_mirrors_defaults() {
        let (_, mut display) = pair();
        let outcome = display.poll(0.0);
        assert_eq!(outcome, PollOutcome::default());
        assert_eq!(display.mirror(), &GameState::default());
    }

    #[test]
    fn increase_celebrates_and_decrease_does_not() {
        let (writer, mut display) = pair();
        write_points(&writer, 5.0);
        display.poll(0.0);
        write_points(&writer, 8.0);
        assert!(display.poll(1000.0).celebrate);
        write_points(&writer, 3.0);
        let outcome = display.poll(2000.0);
        assert!(outcome.changed);
        assert!(!outcome.celebrate);
        assert_eq!(display.mirror().points, 3.0);
    }

    #[test]
    fn first_poll_celebrates_existing_score() {
        let (writer, mut display) = pair();
        write_points(&writer, 5.0);
        assert!(display.poll(0.0).celebrate);
    }

    #[test]
    fn celebration_clears_after_duration() {
        let (writer, mut display) = pair();
        write_points(&writer, 1.0);
        display.poll(10_000.0);
        assert!(display.celebration_active(10_000.0));
        assert!(display.celebration_active(12_999.0));
        assert!(!display.celebration_active(13_000.0));
    }

    #[test]
    fn later_increase_extends_celebration() {
        let (writer, mut display) = pair();
        write_points(&writer, 1.0);
        display.poll(0.0);
        write_points(&writer, 2.0);
        display.poll(2000.0);
        assert!(display.celebration_active(4500.0));
        assert!(!display.celebration_active(5000.0));
    }

    #[test]
    fn short_celebration_ends_between_polls() {
        let backend = MemoryStore::default();
        let writer = GameStore::new(backend.clone(), "gameState");
        let cfg = ShowConfig {
            poll_interval_ms: 10_000,
            celebration_ms: 500,
            ..Default::default()
        };
        let mut display = DisplayViewModel::new(backend, &cfg);
        display.poll(0.0);
        write_points(&writer, 4.0);
        assert!(display.poll(10_000.0).celebrate);
        assert_eq!(display.celebration_remaining(10_000.0), Some(500.0));
        assert_eq!(display.celebration_remaining(10_200.0), Some(300.0));
        assert_eq!(display.celebration_remaining(10_500.0), None);
        // well before the next poll at 20_000
        assert!(!display.celebration_active(10_500.0));
    }

    #[test]
    fn seeded_mirror_does_not_celebrate_again() {
        let backend = MemoryStore::default();
        let writer = GameStore::new(backend.clone(), "gameState");
        write_points(&writer, 6.0);
        let mut first = DisplayViewModel::new(backend.clone(), &ShowConfig::default());
        assert!(first.poll(0.0).celebrate);

        let mut rebuilt = DisplayViewModel::new(backend, &ShowConfig::default())
            .with_mirror(first.mirror().clone());
        assert_eq!(rebuilt.poll(1000.0), PollOutcome::default());
        assert!(!rebuilt.celebration_active(1000.0));
        write_points(&writer, 7.0);
        assert!(rebuilt.poll(2000.0).celebrate);
    }

    #[test]
    fn round_and_challenge_changes_do_not_celebrate() {
        let (writer, mut display) = pair();
        display.poll(0.0);
        let state = GameState {
            round: 4,
            multiplier: 3.0,
            challenges: vec![Challenge::new("Trivia", 5)],
            ..Default::default()
        };
        writer.write(&state).unwrap();
        let outcome = display.poll(1000.0);
        assert!(outcome.changed);
        assert!(!outcome.celebrate);
        assert!(!display.celebration_active(1000.0));
    }

    #[test]
    fn unchanged_record_reports_no_change() {
        let (writer, mut display) = pair();
        write_points(&writer, 2.0);
        display.poll(0.0);
        assert_eq!(display.poll(1000.0), PollOutcome::default());
    }

    #[test]
    fn display_never_writes() {
        let backend = MemoryStore::default();
        let mut display = DisplayViewModel::new(backend.clone(), &ShowConfig::default());
        display.poll(0.0);
        assert_eq!(backend.get("gameState").unwrap(), None);
    }

    #[test]
    fn follows_controller_through_shared_store() {
        let backend = MemoryStore::default();
        let cfg = ShowConfig::default();
        let mut controller = ControllerViewModel::load(backend.clone(), &cfg);
        let mut display = DisplayViewModel::new(backend, &cfg);

        controller.add_challenge("Trivia", "5").unwrap();
        assert!(!display.poll(0.0).celebrate);
        controller.award_challenge(0).unwrap();
        // intermediate states between polls are not observed
        controller.adjust_points(-1);
        controller.advance_round();
        assert!(display.poll(1000.0).celebrate);
        assert_eq!(display.mirror(), controller.state());

        controller.adjust_points(-1);
        assert!(!display.poll(2000.0).celebrate);
        assert_eq!(display.mirror().points, 3.0);
    }
}
