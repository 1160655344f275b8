//! Goal placement
//!
//! Goals are placed on a ring around the start point:
//! - pick a radius uniformly in [min_radius, max_radius]
//! - pick x uniformly in [-r, r]
//! - take the y on the circle of radius r above or below (coin flip)
//!
//! The point always lands ON the chosen circle, so this is not area-uniform
//! over the annulus: goals cluster toward the left/right extremes of each
//! circle and toward the inner ring. That bias is part of the game's feel.

use anyhow::ensure;
use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::Settings;

/// Seeded RNG used for goal placement (reproducible from the seed)
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Samples goal offsets inside a ring around the start point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalGenerator {
    min_radius: f64,
    max_radius: f64,
}

impl Default for GoalGenerator {
    fn default() -> Self {
        Self {
            min_radius: MIN_GOAL_RADIUS,
            max_radius: MAX_GOAL_RADIUS,
        }
    }
}

impl GoalGenerator {
    /// Requires `0 < min_radius < max_radius`, both finite
    pub fn new(min_radius: f64, max_radius: f64) -> anyhow::Result<Self> {
        ensure!(
            min_radius.is_finite() && max_radius.is_finite(),
            "goal radii must be finite (got {} and {})",
            min_radius,
            max_radius
        );
        ensure!(
            min_radius > 0.0,
            "minimum goal radius must be positive (got {})",
            min_radius
        );
        ensure!(
            min_radius < max_radius,
            "minimum goal radius {} must be below maximum {}",
            min_radius,
            max_radius
        );
        Ok(Self {
            min_radius,
            max_radius,
        })
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::new(settings.min_goal_radius, settings.max_goal_radius)
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Random offset from the start point
    pub fn sample_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> DVec2 {
        let r = rng.random_range(self.min_radius..=self.max_radius);
        let x = rng.random_range(-r..=r);
        // Clamp guards against r² - x² rounding just below zero
        let y = (r * r - x * x).max(0.0).sqrt();
        let y = if rng.random_bool(0.5) { -y } else { y };
        DVec2::new(x, y)
    }

    /// Absolute goal position for an attempt starting at `start`
    pub fn generate<R: Rng + ?Sized>(&self, start: DVec2, rng: &mut R) -> DVec2 {
        start + self.sample_offset(rng)
    }
}
