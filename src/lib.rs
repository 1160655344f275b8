//! Hot/Cold - a spatial estimation puzzle
//!
//! Core modules:
//! - `sim`: Trajectory model, goal generation and step commands
//! - `session`: One player's run of attempts (reset, latched completion)
//! - `settings`: Tunable constants (threshold, slack, goal radii)
//! - `platform`: Browser bindings for the presentation layer

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Start point of every attempt, at (R, -R) for the outer goal radius R
    pub const START_X: f64 = 50.0;
    pub const START_Y: f64 = -50.0;

    /// Goal ring bounds, measured from the start point
    pub const MIN_GOAL_RADIUS: f64 = 15.0;
    pub const MAX_GOAL_RADIUS: f64 = 50.0;

    /// Distance-to-goal below which the puzzle counts as solved
    pub const COMPLETION_THRESHOLD: f64 = 1.0;

    /// Free allowance added to traveled distance when scoring efficiency
    /// (covers the final confirming step onto the goal)
    pub const EFFICIENCY_SLACK: f64 = 2.0;
}

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Convert polar (r, heading in degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, degrees: f64) -> DVec2 {
    let theta = degrees.to_radians();
    DVec2::new(theta.cos() * r, theta.sin() * r)
}

/// Convert cartesian (x, y) to polar (r, heading in degrees, [0, 360))
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), normalize_degrees(pos.y.atan2(pos.x).to_degrees()))
}
