// Zone aggregator - lateral and depth placement statistics
use crate::domain::court::{CourtGeometry, ViewMode};
use crate::domain::shot::ShotResult;
use crate::domain::view::{DepthZoneStat, LateralZoneStat, TransformedPoint, ZoneStatistics};

/// Count transformed points per zone. Percentages use the shots inside the
/// singles sidelines as their base, so alley shots never dilute the zones.
pub fn aggregate(
    points: &[TransformedPoint],
    geometry: &CourtGeometry,
    mode: ViewMode,
) -> ZoneStatistics {
    let mut lateral_counts = vec![0usize; geometry.zone_count];
    let mut short = 0usize;
    let mut deep = 0usize;
    let mut net_shots = 0usize;

    for point in points {
        let Some(zone) = geometry.lateral_zone(point.x) else {
            continue;
        };
        lateral_counts[zone] += 1;

        if point.result == ShotResult::Net {
            net_shots += 1;
        } else if geometry.is_short(point.y, mode) {
            short += 1;
        } else {
            deep += 1;
        }
    }

    let shots_in_analysis_area: usize = lateral_counts.iter().sum();
    let share = |count: usize| percentage(count, shots_in_analysis_area);

    let lateral = geometry
        .zone_names()
        .iter()
        .zip(geometry.zone_centres())
        .zip(&lateral_counts)
        .map(|((&name, label_x), &count)| LateralZoneStat {
            name,
            count,
            percentage: share(count),
            label_x,
        })
        .collect();

    let (short_y, deep_y) = geometry.depth_label_ys(mode);
    let depth = vec![
        DepthZoneStat {
            name: "Short",
            count: short,
            percentage: share(short),
            label_y: short_y,
        },
        DepthZoneStat {
            name: "Deep",
            count: deep,
            percentage: share(deep),
            label_y: deep_y,
        },
    ];

    ZoneStatistics {
        lateral,
        depth,
        net_shots,
        net_percentage: share(net_shots),
        shots_in_analysis_area,
        total_shots: points.len(),
    }
}

/// `None` when there is nothing to divide by.
pub fn percentage(count: usize, base: usize) -> Option<f64> {
    if base == 0 {
        return None;
    }
    Some(count as f64 / base as f64 * 100.0)
}
