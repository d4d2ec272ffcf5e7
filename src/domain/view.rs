// View model handed to the presentation layer
use serde::Serialize;

use super::shot::ShotResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub symbol: &'static str,
    pub size: f64,
    pub color: String,
}

/// A plottable shot in the canonical frame. `record_index` points back into
/// the shot store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedPoint {
    pub record_index: usize,
    pub x: f64,
    pub y: f64,
    pub result: ShotResult,
    pub color_key: String,
    pub marker: MarkerStyle,
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LateralZoneStat {
    pub name: &'static str,
    pub count: usize,
    pub percentage: Option<f64>,
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthZoneStat {
    pub name: &'static str,
    pub count: usize,
    pub percentage: Option<f64>,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneStatistics {
    /// Ad side to Deuce side.
    pub lateral: Vec<LateralZoneStat>,
    /// Short then deep.
    pub depth: Vec<DepthZoneStat>,
    /// Net results inside the singles sidelines; they have no depth.
    pub net_shots: usize,
    /// Completes short and deep to 100 over the analysis area.
    pub net_percentage: Option<f64>,
    pub shots_in_analysis_area: usize,
    pub total_shots: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedSummary {
    pub stroke: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCharts {
    pub depth: Vec<CategoryShare>,
    pub direction: Vec<CategoryShare>,
    pub speed_by_stroke: Vec<SpeedSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub observing_player: String,
    pub no_data: bool,
    pub points: Vec<TransformedPoint>,
    pub skipped_records: usize,
    pub zone_stats: ZoneStatistics,
    pub summary: SummaryCharts,
    pub legend: Vec<LegendEntry>,
}
