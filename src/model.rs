//! Core data model for the scoreboard: the persisted game record, the closed
//! set of operator actions, and the pure reducer that encodes the game rules.

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::format_number;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: i64,
}

impl Challenge {
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// The single record shared between the controller and the display.
///
/// Every field tolerates being missing (or `null`, which is how JSON spells a
/// non-finite number) and falls back to its default, so older or hand-edited
/// records still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub points: f64,
    #[serde(default = "first_round", deserialize_with = "null_as_first_round")]
    pub round: u64,
    #[serde(default = "unit_multiplier", deserialize_with = "null_as_unit")]
    pub multiplier: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub challenges: Vec<Challenge>,
}

fn first_round() -> u64 {
    1
}

fn unit_multiplier() -> f64 {
    1.0
}

fn null_as_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(0.0))
}

fn null_as_first_round<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    Ok(Option::<u64>::deserialize(d)?.unwrap_or_else(first_round))
}

fn null_as_unit<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or_else(unit_multiplier))
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Challenge>, D::Error> {
    Ok(Option::<Vec<Challenge>>::deserialize(d)?.unwrap_or_default())
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            points: 0.0,
            round: first_round(),
            multiplier: unit_multiplier(),
            challenges: Vec::new(),
        }
    }
}

/// Every state transition the operator can request.
#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    AddChallenge(Challenge),
    RemoveChallenge(usize),
    AddPoints(i64),
    NextRound,
    SetMultiplier(f64),
    ResetGame,
}

/// Short operator-facing message describing what an action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl GameState {
    /// Applies `action` to a copy of `self`, returning the next state together
    /// with the notification the operator should see.
    pub fn apply(&self, action: GameAction) -> (GameState, Notification) {
        use GameAction::*;
        let mut next = self.clone();
        let note = match action {
            AddChallenge(challenge) => {
                let note = Notification::new(
                    "New Challenge Added",
                    format!("{} (+{} points)", challenge.name, challenge.points),
                );
                next.challenges.push(challenge);
                note
            }
            RemoveChallenge(index) => {
                if index < next.challenges.len() {
                    next.challenges.remove(index);
                }
                Notification::new(
                    "Challenge Removed",
                    "A challenge has been removed from the list.",
                )
            }
            AddPoints(delta) => {
                // multiplier is read from the pre-update state
                next.points += delta as f64 * self.multiplier;
                let magnitude = delta.unsigned_abs();
                if delta > 0 {
                    Notification::new(
                        "Points Added",
                        format!("{magnitude} points added to the score."),
                    )
                } else {
                    Notification::new(
                        "Points Deducted",
                        format!("{magnitude} points deducted from the score."),
                    )
                }
            }
            NextRound => {
                next.round = next.round.saturating_add(1);
                Notification::new("New Round", format!("Round {} has started!", next.round))
            }
            SetMultiplier(value) => {
                next.multiplier = value;
                Notification::new(
                    "Multiplier Updated",
                    format!("Point multiplier set to {}x", format_number(value)),
                )
            }
            ResetGame => {
                next = GameState::default();
                Notification::new(
                    "Game Reset",
                    "The game has been reset to its initial state.",
                )
            }
        };
        (next, note)
    }

    /// Total of all listed challenge values, shown on the audience view.
    /// Summed as `i128` so any list of `i64` values fits.
    pub fn challenge_total(&self) -> i128 {
        self.challenges.iter().map(|c| i128::from(c.points)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &GameState, actions: Vec<GameAction>) -> GameState {
        actions
            .into_iter()
            .fold(state.clone(), |s, a| s.apply(a).0)
    }

    #[test]
    fn defaults_match_a_fresh_game() {
        let s = GameState::default();
        assert_eq!(s.points, 0.0);
        assert_eq!(s.round, 1);
        assert_eq!(s.multiplier, 1.0);
        assert!(s.challenges.is_empty());
    }

    #[test]
    fn add_points_uses_current_multiplier() {
        let s = GameState {
            points: 10.0,
            multiplier: 2.0,
            ..Default::default()
        };
        let (next, note) = s.apply(GameAction::AddPoints(5));
        assert_eq!(next.points, 20.0);
        assert_eq!(note.title, "Points Added");
        assert_eq!(note.description, "5 points added to the score.");
    }

    #[test]
    fn deduction_wording_uses_raw_delta() {
        let s = GameState {
            multiplier: -3.0,
            ..Default::default()
        };
        let (next, note) = s.apply(GameAction::AddPoints(-1));
        assert_eq!(next.points, 3.0);
        assert_eq!(note.title, "Points Deducted");
        assert_eq!(note.description, "1 points deducted from the score.");
    }

    #[test]
    fn points_may_go_negative() {
        let s = run(
            &GameState::default(),
            vec![GameAction::AddPoints(-1), GameAction::AddPoints(-1)],
        );
        assert_eq!(s.points, -2.0);
    }

    #[test]
    fn awarding_same_challenge_twice_adds_twice() {
        let trivia = Challenge::new("Trivia", 5);
        let s = run(
            &GameState::default(),
            vec![
                GameAction::AddChallenge(trivia.clone()),
                GameAction::AddPoints(trivia.points),
                GameAction::AddPoints(trivia.points),
            ],
        );
        assert_eq!(s.points, 10.0);
        assert_eq!(s.challenges, vec![trivia]);
    }

    #[test]
    fn round_only_moves_forward_by_one() {
        let mut s = GameState::default();
        let actions = vec![
            GameAction::NextRound,
            GameAction::AddPoints(3),
            GameAction::SetMultiplier(0.0),
            GameAction::NextRound,
            GameAction::AddChallenge(Challenge::new("Dance", 2)),
            GameAction::RemoveChallenge(0),
            GameAction::NextRound,
        ];
        let mut expected = 1;
        for a in actions {
            let bumps = a == GameAction::NextRound;
            let before = s.round;
            s = s.apply(a).0;
            assert!(s.round >= before);
            if bumps {
                expected += 1;
            }
            assert_eq!(s.round, expected);
        }
        assert_eq!(s.round, 4);
    }

    #[test]
    fn next_round_announces_new_number() {
        let (s, note) = GameState::default().apply(GameAction::NextRound);
        assert_eq!(s.round, 2);
        assert_eq!(note.description, "Round 2 has started!");
    }

    #[test]
    fn reset_returns_exact_defaults() {
        let busy = GameState {
            points: -42.5,
            round: 9,
            multiplier: f64::NAN,
            challenges: vec![Challenge::new("Quiz", 3)],
        };
        let (s, note) = busy.apply(GameAction::ResetGame);
        assert_eq!(s, GameState::default());
        assert_eq!(note.title, "Game Reset");
    }

    #[test]
    fn add_then_remove_restores_sequence() {
        let start = run(
            &GameState::default(),
            vec![
                GameAction::AddChallenge(Challenge::new("A", 1)),
                GameAction::AddChallenge(Challenge::new("B", 2)),
            ],
        );
        let (added, note) = start.apply(GameAction::AddChallenge(Challenge::new("C", 7)));
        assert_eq!(note.description, "C (+7 points)");
        let restored = added.apply(GameAction::RemoveChallenge(2)).0;
        assert_eq!(restored.challenges, start.challenges);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let start = run(
            &GameState::default(),
            vec![
                GameAction::AddChallenge(Challenge::new("A", 1)),
                GameAction::AddChallenge(Challenge::new("B", 2)),
            ],
        );
        let (s, note) = start.apply(GameAction::RemoveChallenge(5));
        assert_eq!(s.challenges, start.challenges);
        assert_eq!(note.title, "Challenge Removed");
    }

    #[test]
    fn remove_middle_keeps_order() {
        let s = run(
            &GameState::default(),
            vec![
                GameAction::AddChallenge(Challenge::new("A", 1)),
                GameAction::AddChallenge(Challenge::new("B", 2)),
                GameAction::AddChallenge(Challenge::new("C", 3)),
                GameAction::RemoveChallenge(1),
            ],
        );
        let names: Vec<_> = s.challenges.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn multiplier_is_stored_verbatim() {
        let (s, note) = GameState::default().apply(GameAction::SetMultiplier(1.5));
        assert_eq!(s.multiplier, 1.5);
        assert_eq!(note.description, "Point multiplier set to 1.5x");
        let (s, note) = s.apply(GameAction::SetMultiplier(2.0));
        assert_eq!(note.description, "Point multiplier set to 2x");
        let s = s.apply(GameAction::SetMultiplier(-0.5)).0;
        assert_eq!(s.apply(GameAction::AddPoints(4)).0.points, -2.0);
    }

    #[test]
    fn nan_multiplier_poisons_points() {
        let s = run(
            &GameState::default(),
            vec![GameAction::SetMultiplier(f64::NAN), GameAction::AddPoints(1)],
        );
        assert!(s.points.is_nan());
    }

    #[test]
    fn record_round_trips_through_json() {
        let s = GameState {
            points: 12.5,
            round: 3,
            multiplier: 2.0,
            challenges: vec![Challenge::new("Trivia", 5)],
        };
        let raw = serde_json::to_string(&s).unwrap();
        assert!(raw.contains("\"challenges\":[{\"name\":\"Trivia\",\"points\":5}]"));
        let back: GameState = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn missing_and_null_fields_take_defaults() {
        let s: GameState = serde_json::from_str(r#"{"points":7}"#).unwrap();
        assert_eq!(s.points, 7.0);
        assert_eq!(s.round, 1);
        assert_eq!(s.multiplier, 1.0);
        assert!(s.challenges.is_empty());

        let s: GameState =
            serde_json::from_str(r#"{"points":null,"round":null,"multiplier":null,"challenges":null}"#)
                .unwrap();
        assert_eq!(s, GameState::default());
    }

    #[test]
    fn challenge_total_sums_values() {
        let s = run(
            &GameState::default(),
            vec![
                GameAction::AddChallenge(Challenge::new("A", 4)),
                GameAction::AddChallenge(Challenge::new("B", -1)),
            ],
        );
        assert_eq!(s.challenge_total(), 3);
    }

    #[test]
    fn challenge_total_does_not_overflow() {
        let s = run(
            &GameState::default(),
            vec![
                GameAction::AddChallenge(Challenge::new("A", i64::MAX)),
                GameAction::AddChallenge(Challenge::new("B", 1)),
            ],
        );
        assert_eq!(s.challenge_total(), i128::from(i64::MAX) + 1);
    }
}
