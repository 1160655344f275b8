//! A player's sitting: the current attempt plus what the driver remembers
//! about it.
//!
//! The trajectory model never locks or latches. The session does the
//! bookkeeping a driver needs on top: parsing form input, replacing the game
//! with a fresh goal on reset, and freezing the first solved snapshot so the
//! score stops changing if the player keeps walking.

use rand_pcg::Pcg32;

use crate::cartesian_to_polar;
use crate::settings::Settings;
use crate::sim::{Game, GameState, GoalGenerator, StepCommand, seeded_rng};

#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    generator: GoalGenerator,
    seed: u64,
    rng: Pcg32,
    game: Game,
    /// Games created so far, including the current one
    attempts: u32,
    /// Snapshot at which the current attempt first completed
    solved: Option<GameState>,
}

impl Session {
    /// Start a session with validated settings
    pub fn new(settings: Settings, seed: u64) -> anyhow::Result<Self> {
        settings.validate()?;
        let generator = GoalGenerator::from_settings(&settings)?;
        Ok(Self::build(settings, generator, seed))
    }

    /// Start a session with the default rules
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Settings::default(), GoalGenerator::default(), seed)
    }

    fn build(settings: Settings, generator: GoalGenerator, seed: u64) -> Self {
        let mut rng = seeded_rng(seed);
        let game = Self::spawn(&settings, &generator, &mut rng);
        log::info!("Session started with seed: {}", seed);
        Self {
            settings,
            generator,
            seed,
            rng,
            game,
            attempts: 1,
            solved: None,
        }
    }

    fn spawn(settings: &Settings, generator: &GoalGenerator, rng: &mut Pcg32) -> Game {
        let goal = generator.generate(settings.start, rng);
        let (r, heading) = cartesian_to_polar(goal - settings.start);
        log::debug!("New goal at r={:.2}, heading={:.1}°", r, heading);
        Game::from_settings(settings, goal)
    }

    /// Discard the current game and start a new one with a fresh goal
    pub fn reset(&mut self) -> GameState {
        self.game = Self::spawn(&self.settings, &self.generator, &mut self.rng);
        self.attempts += 1;
        self.solved = None;
        log::info!("Attempt {} started", self.attempts);
        self.game.state()
    }

    /// Apply a sanitised command and latch the first completion
    pub fn apply(&mut self, command: StepCommand) -> GameState {
        let state = self.game.apply(command);
        if state.complete && self.solved.is_none() {
            log::info!(
                "Goal reached in {} steps (traveled {:.2}, efficiency {:.0}%)",
                state.steps,
                state.traveled,
                state.efficiency * 100.0
            );
            self.solved = Some(state);
        }
        state
    }

    /// Checked step from raw numbers; the game is untouched on error
    pub fn step(&mut self, distance: f64, direction_deg: f64) -> anyhow::Result<GameState> {
        let command = StepCommand::new(distance, direction_deg)?;
        Ok(self.apply(command))
    }

    /// Checked step from the two text fields of an input form
    pub fn submit(&mut self, distance: &str, direction: &str) -> anyhow::Result<GameState> {
        let command = StepCommand::try_from((distance, direction))?;
        Ok(self.apply(command))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn state(&self) -> GameState {
        self.game.state()
    }

    /// Score as it stood when the goal was first reached
    pub fn solved_state(&self) -> Option<GameState> {
        self.solved
    }

    /// True once the current attempt has ever been within the threshold
    pub fn solved(&self) -> bool {
        self.solved.is_some()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
