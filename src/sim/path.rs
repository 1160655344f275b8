//! Append-only walked path
//!
//! The path always starts with the start point and grows by exactly one
//! point per step. The traveled length is kept as a running total so that
//! queries stay O(1) no matter how long the walk gets.

use glam::DVec2;
use serde::Serialize;

use crate::cartesian_to_polar;

/// One walked segment, from `a` to `b` (view only, derived from the path)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub a: DVec2,
    pub b: DVec2,
}

impl Line {
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Heading of the segment in degrees [0, 360); 0 for a zero-length segment
    pub fn heading(&self) -> f64 {
        cartesian_to_polar(self.b - self.a).1
    }
}

/// Ordered visited points plus the running traveled length
#[derive(Debug, Clone, Serialize)]
pub struct Path {
    points: Vec<DVec2>,
    traveled: f64,
}

impl Path {
    pub fn new(start: DVec2) -> Self {
        Self {
            points: vec![start],
            traveled: 0.0,
        }
    }

    /// Append a visited point and extend the traveled total
    pub fn push(&mut self, point: DVec2) {
        self.traveled += self.last().distance(point);
        self.points.push(point);
    }

    #[inline]
    pub fn first(&self) -> DVec2 {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> DVec2 {
        self.points[self.points.len() - 1]
    }

    /// Number of points (always at least 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true; a path holds at least its start point
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Running sum of segment lengths
    #[inline]
    pub fn traveled(&self) -> f64 {
        self.traveled
    }

    /// Segment lengths summed from scratch (used to check the running total)
    pub fn measure(&self) -> f64 {
        self.lines().map(|line| line.length()).sum()
    }

    /// Consecutive segments in walk order
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.points.windows(2).map(|w| Line::new(w[0], w[1]))
    }
}
