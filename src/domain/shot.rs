// Shot domain model
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShotResult {
    In,
    Out,
    Net,
}

impl ShotResult {
    pub fn label(&self) -> &'static str {
        match self {
            ShotResult::In => "In",
            ShotResult::Out => "Out",
            ShotResult::Net => "Net",
        }
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShotResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(ShotResult::In),
            "out" => Ok(ShotResult::Out),
            "net" => Ok(ShotResult::Net),
            other => Err(format!("unknown shot result '{}'", other)),
        }
    }
}

/// One recorded shot. Coordinates are in the capture system's frame and
/// missing numeric cells stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    pub player: String,
    pub stroke: String,
    pub result: ShotResult,
    pub spin: String,
    pub shot_type: String,
    pub direction: String,
    pub speed_mph: Option<f64>,
    pub bounce_x: Option<f64>,
    pub bounce_y: Option<f64>,
    pub bounce_depth: Option<String>,
}

#[cfg(test)]
impl ShotRecord {
    pub fn new(player: &str, stroke: &str, result: ShotResult) -> Self {
        Self {
            player: player.to_string(),
            stroke: stroke.to_string(),
            result,
            spin: String::new(),
            shot_type: String::new(),
            direction: String::new(),
            speed_mph: None,
            bounce_x: None,
            bounce_y: None,
            bounce_depth: None,
        }
    }

    pub fn with_bounce(mut self, x: f64, y: f64) -> Self {
        self.bounce_x = Some(x);
        self.bounce_y = Some(y);
        self
    }

    pub fn with_speed(mut self, speed_mph: f64) -> Self {
        self.speed_mph = Some(speed_mph);
        self
    }

    pub fn with_spin(mut self, spin: &str) -> Self {
        self.spin = spin.to_string();
        self
    }

    pub fn with_direction(mut self, direction: &str) -> Self {
        self.direction = direction.to_string();
        self
    }

    pub fn with_shot_type(mut self, shot_type: &str) -> Self {
        self.shot_type = shot_type.to_string();
        self
    }

    pub fn with_depth(mut self, depth: &str) -> Self {
        self.bounce_depth = Some(depth.to_string());
        self
    }
}

impl ShotRecord {
    /// Bounce position, if both coordinates were captured.
    pub fn bounce(&self) -> Option<(f64, f64)> {
        match (self.bounce_x, self.bounce_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        }
    }
}
