// Marker styling - request-scoped colors, symbols and hover text
use crate::domain::shot::{ShotRecord, ShotResult};
use crate::domain::view::{LegendEntry, MarkerStyle};
use serde::Deserialize;

const PALETTE: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

const MIN_MARKER_SIZE: f64 = 8.0;
const MAX_MARKER_SIZE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ColorBy {
    #[default]
    Player,
    Direction,
    Result,
}

impl ColorBy {
    pub fn key(&self, record: &ShotRecord) -> String {
        match self {
            ColorBy::Player => record.player.clone(),
            ColorBy::Direction => record.direction.clone(),
            ColorBy::Result => record.result.label().to_string(),
        }
    }
}

/// Color assignment for one render. Keys are sorted over the whole store so
/// a value keeps its color whatever the filter.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    color_by: ColorBy,
    keys: Vec<String>,
}

impl ColorScheme {
    pub fn new(color_by: ColorBy, records: &[ShotRecord]) -> Self {
        let mut keys: Vec<String> = records.iter().map(|r| color_by.key(r)).collect();
        keys.sort();
        keys.dedup();
        Self { color_by, keys }
    }

    pub fn key_and_color(&self, record: &ShotRecord) -> (String, String) {
        let key = self.color_by.key(record);
        let color = self.color_for(&key);
        (key, color)
    }

    fn color_for(&self, key: &str) -> String {
        let slot = self.keys.binary_search_by(|k| k.as_str().cmp(key)).unwrap_or(0);
        PALETTE[slot % PALETTE.len()].to_string()
    }

    /// Legend entries for the keys actually present in `records`.
    pub fn legend<'a>(&self, records: impl Iterator<Item = &'a ShotRecord>) -> Vec<LegendEntry> {
        let mut present: Vec<String> = records.map(|r| self.color_by.key(r)).collect();
        present.sort();
        present.dedup();
        present
            .into_iter()
            .map(|label| LegendEntry {
                color: self.color_for(&label),
                label,
            })
            .collect()
    }
}

pub fn marker_symbol(result: ShotResult) -> &'static str {
    match result {
        ShotResult::In => "circle",
        ShotResult::Out => "x",
        ShotResult::Net => "triangle-up",
    }
}

/// Faster shots draw larger; a missing speed gets the smallest marker.
pub fn marker_size(speed_mph: Option<f64>) -> f64 {
    match speed_mph {
        Some(speed) if speed.is_finite() => (speed / 3.0).clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE),
        _ => MIN_MARKER_SIZE,
    }
}

pub fn marker_style(record: &ShotRecord, color: String) -> MarkerStyle {
    MarkerStyle {
        symbol: marker_symbol(record.result),
        size: marker_size(record.speed_mph),
        color,
    }
}

pub fn hover_text(record: &ShotRecord, x: f64, y: f64) -> String {
    let speed = record
        .speed_mph
        .map(|s| format!("{} MPH", s))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "{}\nStroke: {}\nSpeed: {}\nDirection: {}\nResult: {}\nSpin: {}\nShot Type: {}\nCourt Position: ({:.1}, {:.1})",
        record.player,
        record.stroke,
        speed,
        record.direction,
        record.result,
        record.spin,
        record.shot_type,
        x,
        y
    )
}
