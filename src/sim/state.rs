//! Trajectory model and its read-only snapshot
//!
//! A `Game` is one attempt: a fixed start, a fixed hidden goal, a completion
//! threshold and the append-only walked path. Every metric is derived from
//! those four values on demand.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::command::StepCommand;
use super::path::{Line, Path};
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::settings::Settings;

/// Derived progress of an attempt (re-evaluated on every query, never latched)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player is farther than the threshold from the goal
    InProgress,
    /// Player currently stands within the threshold of the goal
    Complete,
}

/// Everything the presentation layer shows after a step, computed from one
/// path snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub steps: usize,
    pub traveled: f64,
    pub from_home: f64,
    pub temperature: f64,
    pub efficiency: f64,
    pub complete: bool,
}

/// One attempt at finding the goal
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    goal: DVec2,
    threshold: f64,
    efficiency_slack: f64,
    path: Path,
}

impl Game {
    /// New attempt from the default start point with default scoring constants
    pub fn new(goal: DVec2) -> Self {
        Self::with_start(DVec2::new(START_X, START_Y), goal)
    }

    /// New attempt from an explicit start point
    pub fn with_start(start: DVec2, goal: DVec2) -> Self {
        Self::with_rules(start, goal, COMPLETION_THRESHOLD, EFFICIENCY_SLACK)
    }

    /// New attempt using the start point and scoring constants from settings
    pub fn from_settings(settings: &Settings, goal: DVec2) -> Self {
        Self::with_rules(
            settings.start,
            goal,
            settings.threshold,
            settings.efficiency_slack,
        )
    }

    /// Fully specified attempt.
    ///
    /// `goal` must differ from `start`, otherwise temperature is undefined.
    pub fn with_rules(start: DVec2, goal: DVec2, threshold: f64, efficiency_slack: f64) -> Self {
        Self {
            goal,
            threshold,
            efficiency_slack,
            path: Path::new(start),
        }
    }

    /// Walk `distance` along `direction_deg` and return the new snapshot.
    ///
    /// No validation: callers must reject non-finite input first (see
    /// [`StepCommand`] and [`try_step`](Self::try_step)).
    pub fn step(&mut self, distance: f64, direction_deg: f64) -> GameState {
        let next = self.current_position() + polar_to_cartesian(distance, direction_deg);
        self.path.push(next);
        log::debug!(
            "step {}: {} @ {}° -> ({:.3}, {:.3})",
            self.steps(),
            distance,
            direction_deg,
            next.x,
            next.y
        );
        self.state()
    }

    /// Apply an already sanitised command
    pub fn apply(&mut self, command: StepCommand) -> GameState {
        self.step(command.distance, command.direction_deg)
    }

    /// Checked step: leaves the game untouched when the input is not finite
    pub fn try_step(&mut self, distance: f64, direction_deg: f64) -> anyhow::Result<GameState> {
        let command = StepCommand::new(distance, direction_deg)?;
        Ok(self.apply(command))
    }

    /// Returns a new game with the step applied, leaving `self` as it was
    pub fn stepped(&self, distance: f64, direction_deg: f64) -> Self {
        let mut next = self.clone();
        next.step(distance, direction_deg);
        next
    }

    pub fn start_position(&self) -> DVec2 {
        self.path.first()
    }

    pub fn current_position(&self) -> DVec2 {
        self.path.last()
    }

    pub fn goal_position(&self) -> DVec2 {
        self.goal
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Visited points, starting with the start point
    pub fn path(&self) -> &[DVec2] {
        self.path.points()
    }

    /// Number of step commands issued so far
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    /// Cumulative walked length (0 before the first step)
    pub fn travel_distance(&self) -> f64 {
        self.path.traveled()
    }

    /// Straight-line displacement from the start (not path length)
    pub fn vector_distance_from_start(&self) -> f64 {
        self.start_position().distance(self.current_position())
    }

    pub fn vector_distance_to_goal(&self) -> f64 {
        self.current_position().distance(self.goal)
    }

    /// Optimal path length for this attempt; constant for its lifetime
    pub fn shortest_distance(&self) -> f64 {
        self.start_position().distance(self.goal)
    }

    /// 1 on the goal, 0 with no net progress, negative when farther away than
    /// the start. NaN when the goal coincides with the start.
    pub fn temperature(&self) -> f64 {
        let shortest = self.shortest_distance();
        (shortest - self.vector_distance_to_goal()) / shortest
    }

    /// Optimal length over walked length (plus slack); 0 before any movement
    pub fn efficiency(&self) -> f64 {
        let traveled = self.travel_distance();
        if traveled <= 0.0 {
            return 0.0;
        }
        self.shortest_distance() / (traveled + self.efficiency_slack)
    }

    /// Strictly inside the threshold right now
    pub fn complete(&self) -> bool {
        self.vector_distance_to_goal() < self.threshold
    }

    pub fn phase(&self) -> GamePhase {
        if self.complete() {
            GamePhase::Complete
        } else {
            GamePhase::InProgress
        }
    }

    /// Walked segments in order, one per step
    pub fn lines(&self) -> Vec<Line> {
        self.path.lines().collect()
    }

    pub fn state(&self) -> GameState {
        GameState {
            steps: self.steps(),
            traveled: self.travel_distance(),
            from_home: self.vector_distance_from_start(),
            temperature: self.temperature(),
            efficiency: self.efficiency(),
            complete: self.complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn board() -> Game {
        Game::with_start(DVec2::new(10.0, -20.0), DVec2::new(40.0, -20.0))
    }

    #[test]
    fn test_fresh_game() {
        let game = board();
        assert_eq!(game.steps(), 0);
        assert_eq!(game.path().len(), 1);
        assert_eq!(game.travel_distance(), 0.0);
        assert_eq!(game.start_position(), DVec2::new(10.0, -20.0));
        assert_eq!(game.current_position(), game.start_position());
        assert_eq!(game.goal_position(), DVec2::new(40.0, -20.0));
        assert_eq!(game.efficiency(), 0.0);
        assert_eq!(game.temperature(), 0.0);
        assert!(game.lines().is_empty());
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_round_trip_cancels_displacement() {
        let mut game = board();
        game.step(3.0, 45.0);
        assert!((game.travel_distance() - 3.0).abs() < EPS);
        game.step(3.0, 225.0);
        assert!((game.travel_distance() - 6.0).abs() < EPS);
        assert!(game.vector_distance_from_start().abs() < EPS);
    }

    #[test]
    fn test_three_four_five() {
        let mut game = board();
        game.step(3.0, 0.0);
        assert!((game.travel_distance() - 3.0).abs() < EPS);
        game.step(4.0, 90.0);
        assert!((game.travel_distance() - 7.0).abs() < EPS);
        assert!((game.vector_distance_from_start() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_negative_distance_walks_backward() {
        let mut game = board();
        game.step(-2.0, 0.0);
        assert!((game.current_position().x - 8.0).abs() < EPS);
        assert!((game.travel_distance() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_direction_is_periodic() {
        let mut a = board();
        let mut b = board();
        a.step(5.0, 30.0);
        b.step(5.0, 30.0 + 720.0);
        assert!(a.current_position().distance(b.current_position()) < EPS);
    }

    #[test]
    fn test_zero_step_counts_but_does_not_travel() {
        let mut game = board();
        let state = game.step(0.0, 123.0);
        assert_eq!(state.steps, 1);
        assert_eq!(state.traveled, 0.0);
        assert_eq!(state.efficiency, 0.0);
        assert_eq!(game.lines().len(), 1);
    }

    #[test]
    fn test_temperature_on_goal_is_one() {
        let mut game = Game::with_start(DVec2::ZERO, DVec2::new(10.0, 0.0));
        game.step(10.0, 0.0);
        assert_eq!(game.current_position(), game.goal_position());
        assert_eq!(game.temperature(), 1.0);
    }

    #[test]
    fn test_temperature_without_progress_is_zero() {
        let mut game = Game::with_start(DVec2::ZERO, DVec2::new(10.0, 0.0));
        // Overshoot to the mirror point: as far from the goal as the start was
        game.step(20.0, 0.0);
        assert_eq!(game.vector_distance_to_goal(), game.shortest_distance());
        assert_eq!(game.temperature(), 0.0);
    }

    #[test]
    fn test_temperature_negative_when_farther() {
        let mut game = Game::with_start(DVec2::ZERO, DVec2::new(10.0, 0.0));
        game.step(5.0, 180.0);
        assert!((game.temperature() - (-0.5)).abs() < EPS);
    }

    #[test]
    fn test_temperature_degenerate_goal_is_nan() {
        let game = Game::with_start(DVec2::ZERO, DVec2::ZERO);
        assert!(game.temperature().is_nan());
    }

    #[test]
    fn test_completion_threshold_boundary() {
        let goal = DVec2::new(10.0, 0.0);

        // Exactly on the threshold is not complete (strict)
        let mut game = Game::with_start(DVec2::ZERO, goal);
        game.step(9.0, 0.0);
        assert_eq!(game.vector_distance_to_goal(), 1.0);
        assert!(!game.complete());

        let mut game = Game::with_start(DVec2::ZERO, goal);
        game.step(8.999, 0.0);
        assert!(!game.complete());

        let mut game = Game::with_start(DVec2::ZERO, goal);
        game.step(9.001, 0.0);
        assert!(game.complete());
        assert_eq!(game.phase(), GamePhase::Complete);
    }

    #[test]
    fn test_completion_is_not_latched() {
        let mut game = Game::with_start(DVec2::ZERO, DVec2::new(10.0, 0.0));
        assert!(game.step(10.0, 0.0).complete);
        // Walking on past the goal is allowed and un-completes
        assert!(!game.step(5.0, 0.0).complete);
        assert_eq!(game.steps(), 2);
    }

    #[test]
    fn test_efficiency_with_slack() {
        let mut game = Game::with_start(DVec2::ZERO, DVec2::new(10.0, 0.0));
        game.step(10.0, 0.0);
        assert!((game.efficiency() - 10.0 / 12.0).abs() < EPS);

        let mut exact = Game::with_rules(DVec2::ZERO, DVec2::new(10.0, 0.0), 1.0, 0.0);
        exact.step(10.0, 0.0);
        assert!((exact.efficiency() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_efficiency_drops_on_detour() {
        let mut game = Game::with_rules(DVec2::ZERO, DVec2::new(10.0, 0.0), 1.0, 0.0);
        game.step(5.0, 90.0);
        game.step(5.0, 0.0);
        game.step(5.0, 270.0);
        game.step(5.0, 0.0);
        assert!(game.complete());
        assert!((game.efficiency() - 0.5).abs() < EPS);
        assert!(game.efficiency() <= 1.0);
    }

    #[test]
    fn test_state_matches_accessors() {
        let mut game = board();
        game.step(7.0, 10.0);
        let state = game.step(2.0, -80.0);
        assert_eq!(state, game.state());
        assert_eq!(state.steps, game.steps());
        assert_eq!(state.traveled, game.travel_distance());
        assert_eq!(state.from_home, game.vector_distance_from_start());
        assert_eq!(state.temperature, game.temperature());
        assert_eq!(state.efficiency, game.efficiency());
        assert_eq!(state.complete, game.complete());
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let json = serde_json::to_string(&board().state()).unwrap();
        assert!(json.contains("\"fromHome\""));
        assert!(json.contains("\"steps\":0"));
    }

    #[test]
    fn test_try_step_rejects_without_mutating() {
        let mut game = board();
        assert!(game.try_step(f64::NAN, 0.0).is_err());
        assert!(game.try_step(1.0, f64::INFINITY).is_err());
        assert_eq!(game.steps(), 0);
        assert_eq!(game.try_step(1.0, 0.0).unwrap().steps, 1);
    }

    #[test]
    fn test_stepped_leaves_receiver() {
        let game = board();
        let next = game.stepped(3.0, 0.0);
        assert_eq!(game.steps(), 0);
        assert_eq!(next.steps(), 1);
        assert_eq!(next.start_position(), game.start_position());
    }

    #[test]
    fn test_from_settings_uses_rules() {
        let settings = Settings {
            threshold: 0.1,
            ..Settings::default()
        };
        let game = Game::from_settings(&settings, DVec2::ZERO);
        assert_eq!(game.threshold(), 0.1);
        assert_eq!(game.start_position(), settings.start);
    }

    proptest! {
        #[test]
        fn steps_extend_path_and_travel(
            moves in prop::collection::vec((-50.0f64..50.0, -720.0f64..720.0), 0..40),
        ) {
            let mut game = board();
            let mut prev = game.travel_distance();
            for (i, &(distance, direction)) in moves.iter().enumerate() {
                let state = game.step(distance, direction);
                prop_assert_eq!(state.steps, i + 1);
                prop_assert_eq!(game.path().len(), i + 2);
                prop_assert!(state.traveled >= prev);
                if distance.abs() > 1e-6 {
                    prop_assert!(state.traveled > prev);
                }
                prev = state.traveled;
            }
            prop_assert_eq!(game.path()[0], game.start_position());
            prop_assert_eq!(game.lines().len(), game.steps());
        }

        #[test]
        fn running_total_matches_measured_path(
            moves in prop::collection::vec((0.0f64..100.0, 0.0f64..360.0), 1..40),
        ) {
            let mut game = board();
            for &(distance, direction) in &moves {
                game.step(distance, direction);
            }
            let measured: f64 = game.lines().iter().map(|l| l.length()).sum();
            prop_assert!((measured - game.travel_distance()).abs() < 1e-6);
            prop_assert!(game.temperature() <= 1.0);
        }
    }
}
