// Summary charts - depth, direction and speed distributions of the filtered shots
use crate::application::shot_store::distinct_in_order;
use crate::domain::shot::ShotRecord;
use crate::domain::view::{CategoryShare, SpeedSummary, SummaryCharts};

pub fn summarize(records: &[&ShotRecord]) -> SummaryCharts {
    SummaryCharts {
        depth: category_shares(records.iter().filter_map(|r| r.bounce_depth.as_deref())),
        direction: category_shares(
            records
                .iter()
                .map(|r| r.direction.as_str())
                .filter(|d| !d.trim().is_empty()),
        ),
        speed_by_stroke: speed_by_stroke(records),
    }
}

/// Count labels, most frequent first. Ties keep first-appearance order.
fn category_shares<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CategoryShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let total: usize = counts.iter().map(|(_, c)| c).sum();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(label, count)| CategoryShare {
            label: label.to_string(),
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

fn speed_by_stroke(records: &[&ShotRecord]) -> Vec<SpeedSummary> {
    distinct_in_order(records.iter().map(|r| r.stroke.as_str()))
        .into_iter()
        .filter_map(|stroke| {
            let mut speeds: Vec<f64> = records
                .iter()
                .filter(|r| r.stroke == stroke)
                .filter_map(|r| r.speed_mph)
                .filter(|s| s.is_finite())
                .collect();
            if speeds.is_empty() {
                return None;
            }
            speeds.sort_by(f64::total_cmp);

            let count = speeds.len();
            Some(SpeedSummary {
                stroke: stroke.to_string(),
                count,
                min: speeds[0],
                q1: quantile(&speeds, 0.25),
                median: quantile(&speeds, 0.5),
                q3: quantile(&speeds, 0.75),
                max: speeds[count - 1],
                mean: speeds.iter().sum::<f64>() / count as f64,
            })
        })
        .collect()
}

/// Linear-interpolated quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
