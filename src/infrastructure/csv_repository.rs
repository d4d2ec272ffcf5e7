// CSV repository implementation - reads the "Shots" sheet exported as CSV
use crate::application::shot_repository::ShotRepository;
use crate::domain::shot::{ShotRecord, ShotResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CsvShotRepository {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ShotRow {
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "Stroke", default)]
    stroke: String,
    #[serde(rename = "Result")]
    result: String,
    #[serde(rename = "Spin", default)]
    spin: String,
    #[serde(rename = "Type", default)]
    shot_type: String,
    #[serde(rename = "Direction", default)]
    direction: String,
    #[serde(rename = "Speed (MPH)", default)]
    speed: Option<String>,
    #[serde(rename = "Bounce (x)", default)]
    bounce_x: Option<String>,
    #[serde(rename = "Bounce (y)", default)]
    bounce_y: Option<String>,
    #[serde(rename = "Bounce Depth", default)]
    bounce_depth: Option<String>,
}

impl CsvShotRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ShotRepository for CsvShotRepository {
    async fn load_shots(&self) -> Result<Vec<ShotRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read shot export {}", self.path.display()))?;

        let shots = parse_shots(bytes.as_slice())?;
        tracing::info!("Loaded {} shots from {}", shots.len(), self.path.display());
        Ok(shots)
    }
}

/// Parse shot rows. Rows that cannot be read or carry an unknown result are
/// skipped with a warning; numeric cells that do not parse become `None`.
pub fn parse_shots<R: Read>(reader: R) -> Result<Vec<ShotRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read shot export header")?
        .clone();
    for required in ["Player", "Result"] {
        if !headers.iter().any(|h| h == required) {
            anyhow::bail!("Shot export is missing the '{}' column", required);
        }
    }

    let mut shots = Vec::new();
    for (line, row) in csv_reader.deserialize::<ShotRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("Skipping unreadable shot row {}: {}", line + 2, e);
                continue;
            }
        };

        let result = match row.result.parse::<ShotResult>() {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Skipping shot row {}: {}", line + 2, e);
                continue;
            }
        };

        shots.push(ShotRecord {
            player: row.player,
            stroke: row.stroke,
            result,
            spin: row.spin,
            shot_type: row.shot_type,
            direction: row.direction,
            speed_mph: parse_number(row.speed.as_deref()),
            bounce_x: parse_number(row.bounce_x.as_deref()),
            bounce_y: parse_number(row.bounce_y.as_deref()),
            bounce_depth: row.bounce_depth.filter(|d| !d.trim().is_empty()),
        });
    }

    Ok(shots)
}

/// Lenient numeric coercion: anything that is not a finite number is missing.
fn parse_number(cell: Option<&str>) -> Option<f64> {
    cell.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Player,Stroke,Result,Spin,Type,Direction,Speed (MPH),Bounce (x),Bounce (y),Bounce Depth
Ann,Forehand,In,Topspin,Rally,Cross,62.5,1.25,8.5,Deep
Bea,Serve,Out,Flat,First Serve,Line,,-3.0,14.2,
Ann,Backhand,Net,Slice,Rally,Line,n/a,0.4,oops,Short
Bea,Volley,Let,Flat,Rally,Cross,40,0,0,Short
";

    #[test]
    fn test_parses_rows_and_coerces_numbers() {
        let shots = parse_shots(EXPORT.as_bytes()).unwrap();
        assert_eq!(shots.len(), 3);

        let first = &shots[0];
        assert_eq!(first.player, "Ann");
        assert_eq!(first.result, ShotResult::In);
        assert_eq!(first.shot_type, "Rally");
        assert_eq!(first.speed_mph, Some(62.5));
        assert_eq!(first.bounce(), Some((1.25, 8.5)));
        assert_eq!(first.bounce_depth.as_deref(), Some("Deep"));

        let second = &shots[1];
        assert_eq!(second.speed_mph, None);
        assert_eq!(second.bounce_depth, None);

        let third = &shots[2];
        assert_eq!(third.result, ShotResult::Net);
        assert_eq!(third.speed_mph, None);
        assert_eq!(third.bounce_x, Some(0.4));
        assert_eq!(third.bounce_y, None);
    }

    #[test]
    fn test_missing_required_column_fails() {
        let err = parse_shots("Player,Stroke\nAnn,Serve\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Result"));
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let shots = parse_shots("Player,Result\nAnn,In\n".as_bytes()).unwrap();
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].stroke, "");
        assert_eq!(shots[0].bounce(), None);
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number(Some(" 12.5 ")), Some(12.5));
        assert_eq!(parse_number(Some("NaN")), None);
        assert_eq!(parse_number(Some("inf")), None);
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(None), None);
    }

    #[tokio::test]
    async fn test_missing_file_reports_path() {
        let repository = CsvShotRepository::new(PathBuf::from("does/not/exist.csv"));
        let err = repository.load_shots().await.unwrap_err();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
