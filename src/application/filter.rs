// Filter engine - conjunctive predicates over the shot store
use crate::domain::shot::{ShotRecord, ShotResult};

/// Selection of values for one categorical field. `Only(vec![])` admits
/// nothing; it is not the same as `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(Vec<T>),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// `None` (field omitted by the caller) means every value.
    pub fn from_option(values: Option<Vec<T>>) -> Self {
        match values {
            Some(values) => Selection::Only(values),
            None => Selection::All,
        }
    }

    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.contains(value),
        }
    }

    /// Collapse a selection that names every known value into `All`.
    pub fn normalized(self, universe: &[T]) -> Self {
        match self {
            Selection::Only(values)
                if !universe.is_empty() && universe.iter().all(|u| values.contains(u)) =>
            {
                Selection::All
            }
            other => other,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Only(values) if values.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub player: String,
    pub strokes: Selection<String>,
    pub results: Selection<ShotResult>,
    pub spins: Selection<String>,
}

impl FilterSpec {
    pub fn for_player(player: &str) -> Self {
        Self {
            player: player.to_string(),
            strokes: Selection::All,
            results: Selection::All,
            spins: Selection::All,
        }
    }

    /// Build a filter from optional widget selections; omitted means all.
    pub fn from_selections(
        player: String,
        strokes: Option<Vec<String>>,
        results: Option<Vec<ShotResult>>,
        spins: Option<Vec<String>>,
    ) -> Self {
        Self {
            player,
            strokes: Selection::from_option(strokes),
            results: Selection::from_option(results),
            spins: Selection::from_option(spins),
        }
    }

    pub fn matches(&self, record: &ShotRecord) -> bool {
        record.player == self.player
            && self.strokes.admits(&record.stroke)
            && self.results.admits(&record.result)
            && self.spins.admits(&record.spin)
    }
}

/// A record that passed the filter, tagged with its position in the store.
#[derive(Debug, Clone, Copy)]
pub struct FilteredShot<'a> {
    pub index: usize,
    pub record: &'a ShotRecord,
}

pub fn filter<'a>(records: &'a [ShotRecord], spec: &FilterSpec) -> Vec<FilteredShot<'a>> {
    if spec.strokes.is_empty() || spec.results.is_empty() || spec.spins.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| spec.matches(record))
        .map(|(index, record)| FilteredShot { index, record })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<ShotRecord> {
        vec![
            ShotRecord::new("Ann", "Forehand", ShotResult::In).with_spin("Topspin"),
            ShotRecord::new("Bea", "Forehand", ShotResult::In).with_spin("Topspin"),
            ShotRecord::new("Ann", "Backhand", ShotResult::Out).with_spin("Slice"),
            ShotRecord::new("Ann", "Serve", ShotResult::Net).with_spin("Flat"),
            ShotRecord::new("Ann", "Forehand", ShotResult::In).with_spin("Flat"),
        ]
    }

    fn indices(shots: &[FilteredShot<'_>]) -> Vec<usize> {
        shots.iter().map(|s| s.index).collect()
    }

    #[test]
    fn test_player_only_keeps_order() {
        let records = dataset();
        let shots = filter(&records, &FilterSpec::for_player("Ann"));
        assert_eq!(indices(&shots), vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let records = dataset();
        let mut spec = FilterSpec::for_player("Ann");
        spec.strokes = Selection::Only(vec!["Forehand".to_string(), "Serve".to_string()]);
        spec.results = Selection::Only(vec![ShotResult::In, ShotResult::Net]);
        spec.spins = Selection::Only(vec!["Flat".to_string()]);

        assert_eq!(indices(&filter(&records, &spec)), vec![3, 4]);
    }

    #[test]
    fn test_empty_result_selection_yields_nothing() {
        let records = dataset();
        let mut spec = FilterSpec::for_player("Ann");
        spec.results = Selection::Only(vec![]);

        assert!(!records.is_empty());
        assert!(filter(&records, &spec).is_empty());
    }

    #[test]
    fn test_empty_stroke_or_spin_selection_yields_nothing() {
        let records = dataset();

        let mut spec = FilterSpec::for_player("Ann");
        spec.strokes = Selection::Only(vec![]);
        assert!(filter(&records, &spec).is_empty());

        let mut spec = FilterSpec::for_player("Ann");
        spec.spins = Selection::Only(vec![]);
        assert!(filter(&records, &spec).is_empty());
    }

    #[test]
    fn test_unknown_player_matches_nothing() {
        let records = dataset();
        assert!(filter(&records, &FilterSpec::for_player("Cat")).is_empty());
    }

    #[test]
    fn test_full_selection_normalizes_to_all() {
        let universe = vec!["Forehand".to_string(), "Backhand".to_string()];

        let full = Selection::Only(vec!["Backhand".to_string(), "Forehand".to_string()]);
        assert_eq!(full.normalized(&universe), Selection::All);

        let partial = Selection::Only(vec!["Backhand".to_string()]);
        assert_eq!(partial.clone().normalized(&universe), partial);

        let none: Selection<String> = Selection::Only(vec![]);
        assert_eq!(none.clone().normalized(&universe), none);
    }

    #[test]
    fn test_from_option_distinguishes_omitted_and_empty() {
        assert_eq!(Selection::<String>::from_option(None), Selection::All);
        assert!(Selection::<String>::from_option(Some(vec![])).is_empty());
    }
}
