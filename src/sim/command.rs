//! Step commands
//!
//! The trajectory model accepts raw numbers and does no checking of its own.
//! `StepCommand` is the sanitised form a driver builds from player input:
//! once constructed, both fields are finite and safe to apply.

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

/// One player move: walk `distance` units along `direction_deg`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCommand {
    /// Distance to walk (negative walks backward along the heading)
    pub distance: f64,
    /// Heading in degrees, counter-clockwise from +x (any real value)
    pub direction_deg: f64,
}

impl StepCommand {
    /// Build a command, rejecting NaN and infinite inputs
    pub fn new(distance: f64, direction_deg: f64) -> anyhow::Result<Self> {
        ensure!(distance.is_finite(), "distance must be a finite number (got {})", distance);
        ensure!(
            direction_deg.is_finite(),
            "direction must be a finite number (got {})",
            direction_deg
        );
        Ok(Self {
            distance,
            direction_deg,
        })
    }
}

impl std::fmt::Display for StepCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} @ {}°", self.distance, self.direction_deg)
    }
}

/// Parse the two text fields a form collects (distance, direction)
impl TryFrom<(&str, &str)> for StepCommand {
    type Error = anyhow::Error;
    fn try_from((distance, direction): (&str, &str)) -> Result<Self, Self::Error> {
        let distance = distance
            .trim()
            .parse::<f64>()
            .with_context(|| format!("invalid distance: {:?}", distance))?;
        let direction = direction
            .trim()
            .parse::<f64>()
            .with_context(|| format!("invalid direction: {:?}", direction))?;
        Self::new(distance, direction)
    }
}

/// Parse a single `"<distance> <direction>"` line (whitespace or comma separated)
impl TryFrom<&str> for StepCommand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut fields = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty());
        let distance = fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing distance"))?;
        let direction = fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing direction"))?;
        ensure!(fields.next().is_none(), "expected two fields: {:?}", s);
        Self::try_from((distance, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(StepCommand::new(f64::NAN, 0.0).is_err());
        assert!(StepCommand::new(1.0, f64::INFINITY).is_err());
        assert!(StepCommand::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(StepCommand::new(-3.0, 720.0).is_ok());
        assert!(StepCommand::new(0.0, -45.0).is_ok());
    }

    #[test]
    fn test_parse_form_fields() {
        let cmd = StepCommand::try_from((" 3.5", "90 ")).unwrap();
        assert_eq!(cmd.distance, 3.5);
        assert_eq!(cmd.direction_deg, 90.0);

        assert!(StepCommand::try_from(("", "90")).is_err());
        assert!(StepCommand::try_from(("three", "90")).is_err());
        assert!(StepCommand::try_from(("3", "NaN")).is_err());
        assert!(StepCommand::try_from(("inf", "0")).is_err());
    }

    #[test]
    fn test_parse_line() {
        let cmd = StepCommand::try_from("4 270").unwrap();
        assert_eq!(cmd, StepCommand::new(4.0, 270.0).unwrap());
        let cmd = StepCommand::try_from("-2.5, 45").unwrap();
        assert_eq!(cmd.distance, -2.5);

        assert!(StepCommand::try_from("4").is_err());
        assert!(StepCommand::try_from("4 5 6").is_err());
        assert!(StepCommand::try_from("").is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = StepCommand::try_from(("x", "0")).unwrap_err();
        assert!(err.to_string().contains("distance"));
        let err = StepCommand::try_from(("1", "north")).unwrap_err();
        assert!(err.to_string().contains("direction"));
    }
}
