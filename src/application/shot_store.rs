// Shot store - immutable in-memory table shared by every request
use crate::domain::court::ObservingSide;
use crate::domain::error::AnalyticsError;
use crate::domain::shot::{ShotRecord, ShotResult};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ShotStore {
    records: Arc<[ShotRecord]>,
}

/// Values available to the filter widgets, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub players: Vec<String>,
    pub strokes: Vec<String>,
    pub results: Vec<ShotResult>,
    pub spins: Vec<String>,
}

/// The two players of a singles match, pinned to court ends by order of
/// first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRoster {
    near: String,
    far: String,
}

impl ShotStore {
    pub fn new(records: Vec<ShotRecord>, max_records: usize) -> Result<Self, AnalyticsError> {
        if records.len() > max_records {
            return Err(AnalyticsError::DatasetTooLarge {
                records: records.len(),
                limit: max_records,
            });
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[ShotRecord] {
        &self.records
    }

    pub fn distinct_by<T, F>(&self, field: F) -> Vec<T>
    where
        T: PartialEq,
        F: Fn(&ShotRecord) -> T,
    {
        distinct_in_order(self.records.iter().map(field))
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            players: self.distinct_by(|r| r.player.clone()),
            strokes: self.distinct_by(|r| r.stroke.clone()),
            results: self.distinct_by(|r| r.result),
            spins: self.distinct_by(|r| r.spin.clone()),
        }
    }

    pub fn roster(&self) -> Result<PlayerRoster, AnalyticsError> {
        let players = self.distinct_by(|r| r.player.clone());
        match <[String; 2]>::try_from(players) {
            Ok([near, far]) => Ok(PlayerRoster { near, far }),
            Err(players) => Err(AnalyticsError::InvalidPlayerCount {
                found: players.len(),
            }),
        }
    }
}

impl PlayerRoster {
    pub fn side_of(&self, player: &str) -> Result<ObservingSide, AnalyticsError> {
        if player == self.near {
            Ok(ObservingSide::Near)
        } else if player == self.far {
            Ok(ObservingSide::Far)
        } else {
            Err(AnalyticsError::UnknownPlayer(player.to_string()))
        }
    }

    pub fn players(&self) -> [&str; 2] {
        [&self.near, &self.far]
    }
}

pub(crate) fn distinct_in_order<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(player: &str, stroke: &str, result: ShotResult) -> ShotRecord {
        ShotRecord::new(player, stroke, result)
    }

    #[test]
    fn test_options_keep_first_appearance_order() {
        let store = ShotStore::new(
            vec![
                shot("Bea", "Serve", ShotResult::Out).with_spin("Flat"),
                shot("Ann", "Forehand", ShotResult::In).with_spin("Topspin"),
                shot("Bea", "Forehand", ShotResult::Net).with_spin("Flat"),
            ],
            100,
        )
        .unwrap();

        let options = store.options();
        assert_eq!(options.players, vec!["Bea", "Ann"]);
        assert_eq!(options.strokes, vec!["Serve", "Forehand"]);
        assert_eq!(
            options.results,
            vec![ShotResult::Out, ShotResult::In, ShotResult::Net]
        );
        assert_eq!(options.spins, vec!["Flat", "Topspin"]);
    }

    #[test]
    fn test_roster_requires_two_players() {
        let empty = ShotStore::new(vec![], 10).unwrap();
        assert_eq!(
            empty.roster(),
            Err(AnalyticsError::InvalidPlayerCount { found: 0 })
        );

        let solo = ShotStore::new(vec![shot("Ann", "Serve", ShotResult::In)], 10).unwrap();
        assert_eq!(
            solo.roster(),
            Err(AnalyticsError::InvalidPlayerCount { found: 1 })
        );

        let crowd = ShotStore::new(
            vec![
                shot("Ann", "Serve", ShotResult::In),
                shot("Bea", "Serve", ShotResult::In),
                shot("Cat", "Serve", ShotResult::In),
            ],
            10,
        )
        .unwrap();
        assert_eq!(
            crowd.roster(),
            Err(AnalyticsError::InvalidPlayerCount { found: 3 })
        );
    }

    #[test]
    fn test_roster_sides_follow_first_appearance() {
        let store = ShotStore::new(
            vec![
                shot("Bea", "Serve", ShotResult::In),
                shot("Ann", "Serve", ShotResult::In),
            ],
            10,
        )
        .unwrap();
        let roster = store.roster().unwrap();

        assert_eq!(roster.side_of("Bea"), Ok(ObservingSide::Near));
        assert_eq!(roster.side_of("Ann"), Ok(ObservingSide::Far));
        assert_eq!(
            roster.side_of("Cat"),
            Err(AnalyticsError::UnknownPlayer("Cat".to_string()))
        );
    }

    #[test]
    fn test_rejects_oversized_dataset() {
        let records = vec![shot("Ann", "Serve", ShotResult::In); 3];
        assert_eq!(
            ShotStore::new(records, 2).unwrap_err(),
            AnalyticsError::DatasetTooLarge { records: 3, limit: 2 }
        );
    }
}
