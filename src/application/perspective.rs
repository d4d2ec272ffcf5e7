// Perspective transformer - raw bounce coordinates into the canonical court frame
use crate::domain::court::{CourtGeometry, ObservingSide, ViewMode};
use crate::domain::error::AnalyticsError;
use crate::domain::shot::{ShotRecord, ShotResult};

/// Bounding box of the raw capture coordinates seen in a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl RawExtent {
    /// Records without coordinates are ignored. An empty dataset gives a
    /// zero-sized extent at the origin.
    pub fn observe(records: &[ShotRecord]) -> Self {
        let mut bounce = records.iter().filter_map(ShotRecord::bounce);
        let Some((x, y)) = bounce.next() else {
            return Self {
                min_x: 0.0,
                max_x: 0.0,
                min_y: 0.0,
                max_y: 0.0,
            };
        };

        bounce.fold(
            Self {
                min_x: x,
                max_x: x,
                min_y: y,
                max_y: y,
            },
            |extent, (x, y)| Self {
                min_x: extent.min_x.min(x),
                max_x: extent.max_x.max(x),
                min_y: extent.min_y.min(y),
                max_y: extent.max_y.max(y),
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Projection {
    Mirrored,
    Oriented(RawExtent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveTransformer {
    geometry: CourtGeometry,
    projection: Projection,
}

impl PerspectiveTransformer {
    pub fn mirrored(geometry: CourtGeometry) -> Self {
        Self {
            geometry,
            projection: Projection::Mirrored,
        }
    }

    pub fn oriented(geometry: CourtGeometry, extent: RawExtent) -> Self {
        Self {
            geometry,
            projection: Projection::Oriented(extent),
        }
    }

    /// Build the transformer for a loaded dataset. The oriented extent is
    /// taken from the whole store so points keep their place across filters.
    pub fn for_records(geometry: CourtGeometry, mode: ViewMode, records: &[ShotRecord]) -> Self {
        match mode {
            ViewMode::Mirrored => Self::mirrored(geometry),
            ViewMode::Oriented => Self::oriented(geometry, RawExtent::observe(records)),
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self.projection {
            Projection::Mirrored => ViewMode::Mirrored,
            Projection::Oriented(_) => ViewMode::Oriented,
        }
    }

    pub fn geometry(&self) -> &CourtGeometry {
        &self.geometry
    }

    /// Map one shot onto the canonical court. `index` only labels the error.
    pub fn transform(
        &self,
        index: usize,
        record: &ShotRecord,
        side: ObservingSide,
    ) -> Result<(f64, f64), AnalyticsError> {
        let (x, y) = record
            .bounce()
            .ok_or(AnalyticsError::MissingCoordinate { index })?;

        let point = match &self.projection {
            Projection::Mirrored => self.mirrored_point(record.result, x, y),
            Projection::Oriented(extent) => self.oriented_point(extent, record.result, x, y, side),
        };
        Ok(point)
    }

    fn mirrored_point(&self, result: ShotResult, x: f64, y: f64) -> (f64, f64) {
        let court_length = self.geometry.dimensions.court_length;

        if result == ShotResult::Net {
            return (x, self.geometry.net_y(ViewMode::Mirrored));
        }
        if y > court_length {
            // no baseline clamp: overhit depth stays visible
            return mirror(x, y, court_length);
        }
        (x, y)
    }

    fn oriented_point(
        &self,
        extent: &RawExtent,
        result: ShotResult,
        x: f64,
        y: f64,
        side: ObservingSide,
    ) -> (f64, f64) {
        let dims = &self.geometry.dimensions;
        let half_width = dims.full_width / 2.0;
        let x = rescale(x, extent.min_x, extent.max_x, -half_width, half_width);

        if result == ShotResult::Net {
            return (x, self.geometry.net_y(ViewMode::Oriented));
        }

        let y = rescale(y, extent.min_y, extent.max_y, 0.0, dims.court_length);
        match side {
            ObservingSide::Near => (x, y),
            ObservingSide::Far => (x, dims.court_length - y),
        }
    }
}

/// Reflect a point through the centre mark: across the centre line and the
/// net line together. Applying it twice is the identity.
pub fn mirror(x: f64, y: f64, court_length: f64) -> (f64, f64) {
    (-x, 2.0 * court_length - y)
}

fn rescale(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let span = from_max - from_min;
    if span.abs() < f64::EPSILON {
        return (to_min + to_max) / 2.0;
    }
    to_min + (value - from_min) / span * (to_max - to_min)
}
