//! Puzzle core
//!
//! Pure, synchronous and single-writer:
//! - No I/O, timers or platform dependencies
//! - Seeded RNG only (goal placement)
//! - Every metric derived from (start, goal, threshold, path)

pub mod command;
pub mod goal;
pub mod path;
pub mod state;

pub use command::StepCommand;
pub use goal::{GoalGenerator, seeded_rng};
pub use path::{Line, Path};
pub use state::{Game, GamePhase, GameState};
