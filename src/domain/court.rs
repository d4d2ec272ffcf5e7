// Court geometry - static dimensions and zone boundaries
use crate::domain::error::AnalyticsError;
use serde::{Deserialize, Serialize};

/// Half-court dimensions. `court_length` runs from baseline to net and
/// `service_line_offset` is measured from the net.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtDimensions {
    pub court_length: f64,
    pub full_width: f64,
    pub singles_width: f64,
    pub service_line_offset: f64,
}

impl CourtDimensions {
    pub const METRES: Self = Self {
        court_length: 11.89,
        full_width: 10.97,
        singles_width: 8.23,
        service_line_offset: 6.40,
    };

    pub const FEET: Self = Self {
        court_length: 39.0,
        full_width: 36.0,
        singles_width: 27.0,
        service_line_offset: 21.0,
    };

    fn validate(&self) -> Result<(), AnalyticsError> {
        let all_positive = [
            self.court_length,
            self.full_width,
            self.singles_width,
            self.service_line_offset,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);

        if !all_positive {
            return Err(AnalyticsError::InvalidDimensions(
                "all dimensions must be positive".to_string(),
            ));
        }
        if self.singles_width > self.full_width {
            return Err(AnalyticsError::InvalidDimensions(format!(
                "singles width {} exceeds full width {}",
                self.singles_width, self.full_width
            )));
        }
        if self.service_line_offset >= self.court_length {
            return Err(AnalyticsError::InvalidDimensions(format!(
                "service line offset {} must be inside court length {}",
                self.service_line_offset, self.court_length
            )));
        }
        Ok(())
    }
}

/// How raw coordinates are projected onto the canonical court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One receiving half-court, baseline at y=0 and net at y=court_length.
    /// Shots on the far side are reflected into it.
    Mirrored,
    /// One court oriented per observer, net at y=0 and baseline at
    /// y=court_length. Raw ranges are rescaled onto the court span.
    Oriented,
}

/// Which end of the court the observing player is on. Resolved from player
/// names once, so geometry never branches on a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObservingSide {
    Near,
    Far,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourtGeometry {
    pub dimensions: CourtDimensions,
    pub zone_count: usize,
    pub zone_width: f64,
    /// Lateral zone edges, left (Ad) to right (Deuce); `zone_count + 1` entries.
    pub zone_edges: Vec<f64>,
}

impl CourtGeometry {
    pub fn new(dimensions: CourtDimensions, zone_count: usize) -> Result<Self, AnalyticsError> {
        if zone_count != 3 && zone_count != 6 {
            return Err(AnalyticsError::InvalidZoneCount(zone_count));
        }
        dimensions.validate()?;

        let zone_width = dimensions.singles_width / zone_count as f64;
        let left = -dimensions.singles_width / 2.0;
        let zone_edges = (0..=zone_count)
            .map(|i| left + zone_width * i as f64)
            .collect();

        Ok(Self {
            dimensions,
            zone_count,
            zone_width,
            zone_edges,
        })
    }

    pub fn half_singles(&self) -> f64 {
        self.dimensions.singles_width / 2.0
    }

    pub fn net_y(&self, mode: ViewMode) -> f64 {
        match mode {
            ViewMode::Mirrored => self.dimensions.court_length,
            ViewMode::Oriented => 0.0,
        }
    }

    pub fn baseline_y(&self, mode: ViewMode) -> f64 {
        match mode {
            ViewMode::Mirrored => 0.0,
            ViewMode::Oriented => self.dimensions.court_length,
        }
    }

    pub fn service_line_y(&self, mode: ViewMode) -> f64 {
        match mode {
            ViewMode::Mirrored => self.dimensions.court_length - self.dimensions.service_line_offset,
            ViewMode::Oriented => self.dimensions.service_line_offset,
        }
    }

    /// Distance from the net towards the baseline. Negative values are on the
    /// other side of the net.
    pub fn distance_from_net(&self, y: f64, mode: ViewMode) -> f64 {
        match mode {
            ViewMode::Mirrored => self.net_y(mode) - y,
            ViewMode::Oriented => y - self.net_y(mode),
        }
    }

    /// Shots on the service line count as short.
    pub fn is_short(&self, y: f64, mode: ViewMode) -> bool {
        self.distance_from_net(y, mode) <= self.dimensions.service_line_offset
    }

    pub fn within_singles(&self, x: f64) -> bool {
        let half = self.half_singles();
        (-half..=half).contains(&x)
    }

    /// Lateral zone index for `x`, or `None` outside the singles sidelines.
    pub fn lateral_zone(&self, x: f64) -> Option<usize> {
        if !self.within_singles(x) {
            return None;
        }
        let raw = ((x + self.half_singles()) / self.zone_width).floor();
        // x on the right sideline lands exactly on zone_count
        Some((raw.max(0.0) as usize).min(self.zone_count - 1))
    }

    pub fn zone_centres(&self) -> Vec<f64> {
        self.zone_edges
            .windows(2)
            .map(|w| (w[0] + w[1]) / 2.0)
            .collect()
    }

    pub fn zone_names(&self) -> &'static [&'static str] {
        match self.zone_count {
            6 => &[
                "Ad Wide",
                "Ad Mid",
                "Ad Inside",
                "Deuce Inside",
                "Deuce Mid",
                "Deuce Wide",
            ],
            _ => &["Ad", "Center", "Deuce"],
        }
    }

    /// Label anchors half way through the short and deep bands.
    pub fn depth_label_ys(&self, mode: ViewMode) -> (f64, f64) {
        let net = self.net_y(mode);
        let service = self.service_line_y(mode);
        let baseline = self.baseline_y(mode);
        ((net + service) / 2.0, (service + baseline) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unsupported_zone_counts() {
        assert_eq!(
            CourtGeometry::new(CourtDimensions::METRES, 4),
            Err(AnalyticsError::InvalidZoneCount(4))
        );
        assert!(CourtGeometry::new(CourtDimensions::METRES, 3).is_ok());
        assert!(CourtGeometry::new(CourtDimensions::METRES, 6).is_ok());
    }

    #[test]
    fn test_rejects_inconsistent_dimensions() {
        let mut dims = CourtDimensions::FEET;
        dims.singles_width = 40.0;
        assert!(matches!(
            CourtGeometry::new(dims, 3),
            Err(AnalyticsError::InvalidDimensions(_))
        ));

        let mut dims = CourtDimensions::FEET;
        dims.service_line_offset = 39.0;
        assert!(CourtGeometry::new(dims, 3).is_err());

        let mut dims = CourtDimensions::FEET;
        dims.full_width = -1.0;
        assert!(CourtGeometry::new(dims, 3).is_err());
    }

    #[test]
    fn test_zone_edges_span_singles_court() {
        let geometry = CourtGeometry::new(CourtDimensions::FEET, 3).unwrap();
        assert_eq!(geometry.zone_width, 9.0);
        assert_eq!(geometry.zone_edges, vec![-13.5, -4.5, 4.5, 13.5]);
        assert_eq!(geometry.zone_centres(), vec![-9.0, 0.0, 9.0]);

        let six = CourtGeometry::new(CourtDimensions::FEET, 6).unwrap();
        assert_eq!(six.zone_edges.len(), 7);
        assert_eq!(six.zone_names().len(), 6);
    }

    #[test]
    fn test_lateral_zone_clamps_sidelines() {
        let geometry = CourtGeometry::new(CourtDimensions::FEET, 3).unwrap();
        assert_eq!(geometry.lateral_zone(-13.5), Some(0));
        assert_eq!(geometry.lateral_zone(-4.6), Some(0));
        assert_eq!(geometry.lateral_zone(0.0), Some(1));
        assert_eq!(geometry.lateral_zone(13.5), Some(2));
        assert_eq!(geometry.lateral_zone(13.6), None);
        assert_eq!(geometry.lateral_zone(-20.0), None);
    }

    #[test]
    fn test_depth_orientation_per_mode() {
        let geometry = CourtGeometry::new(CourtDimensions::FEET, 3).unwrap();

        assert_eq!(geometry.net_y(ViewMode::Mirrored), 39.0);
        assert_eq!(geometry.service_line_y(ViewMode::Mirrored), 18.0);
        assert!(geometry.is_short(30.0, ViewMode::Mirrored));
        assert!(geometry.is_short(18.0, ViewMode::Mirrored));
        assert!(!geometry.is_short(5.0, ViewMode::Mirrored));
        assert!(!geometry.is_short(-4.0, ViewMode::Mirrored));

        assert_eq!(geometry.net_y(ViewMode::Oriented), 0.0);
        assert!(geometry.is_short(10.0, ViewMode::Oriented));
        assert!(!geometry.is_short(30.0, ViewMode::Oriented));
    }

    #[test]
    fn test_depth_label_anchors() {
        let geometry = CourtGeometry::new(CourtDimensions::FEET, 3).unwrap();
        assert_eq!(geometry.depth_label_ys(ViewMode::Mirrored), (28.5, 9.0));
        assert_eq!(geometry.depth_label_ys(ViewMode::Oriented), (10.5, 30.0));
    }
}
