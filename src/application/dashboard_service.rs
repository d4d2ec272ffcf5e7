// Dashboard service - Use case for rendering one filtered court view
use crate::application::filter::{filter, FilterSpec};
use crate::application::perspective::PerspectiveTransformer;
use crate::application::shot_store::{FilterOptions, PlayerRoster, ShotStore};
use crate::application::styling::{hover_text, marker_style, ColorBy, ColorScheme};
use crate::application::summary::summarize;
use crate::application::zones::aggregate;
use crate::domain::court::{CourtGeometry, ViewMode};
use crate::domain::error::AnalyticsError;
use crate::domain::view::{TransformedPoint, ViewModel};

/// Renders views over a read-only shot store. Holds no per-request state, so
/// the same filter always produces the same view.
#[derive(Debug, Clone)]
pub struct DashboardService {
    store: ShotStore,
    roster: PlayerRoster,
    transformer: PerspectiveTransformer,
    options: FilterOptions,
}

impl DashboardService {
    pub fn new(
        store: ShotStore,
        geometry: CourtGeometry,
        mode: ViewMode,
    ) -> Result<Self, AnalyticsError> {
        let roster = store.roster()?;
        let transformer = PerspectiveTransformer::for_records(geometry, mode, store.records());
        let options = store.options();
        Ok(Self {
            store,
            roster,
            transformer,
            options,
        })
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Every stroke, result and spin selected, first player observing.
    pub fn default_filter(&self) -> FilterSpec {
        FilterSpec::for_player(self.roster.players()[0])
    }

    pub fn render(&self, spec: &FilterSpec, color_by: ColorBy) -> Result<ViewModel, AnalyticsError> {
        let side = self.roster.side_of(&spec.player)?;
        let spec = self.normalize(spec.clone());

        let records = self.store.records();
        let filtered = filter(records, &spec);
        let scheme = ColorScheme::new(color_by, records);

        let mut points = Vec::with_capacity(filtered.len());
        let mut plotted = Vec::with_capacity(filtered.len());
        let mut skipped_records = 0;
        for shot in &filtered {
            let (x, y) = match self.transformer.transform(shot.index, shot.record, side) {
                Ok(point) => point,
                Err(e) => {
                    tracing::debug!("Skipping shot: {}", e);
                    skipped_records += 1;
                    continue;
                }
            };

            let (color_key, color) = scheme.key_and_color(shot.record);
            plotted.push(shot.record);
            points.push(TransformedPoint {
                record_index: shot.index,
                x,
                y,
                result: shot.record.result,
                color_key,
                marker: marker_style(shot.record, color),
                hover_text: hover_text(shot.record, x, y),
            });
        }

        let zone_stats = aggregate(&points, self.transformer.geometry(), self.transformer.mode());
        let filtered_records: Vec<_> = filtered.iter().map(|s| s.record).collect();

        tracing::debug!(
            "Rendered view for {}: {} filtered, {} plotted, {} in analysis area",
            spec.player,
            filtered.len(),
            points.len(),
            zone_stats.shots_in_analysis_area
        );

        Ok(ViewModel {
            observing_player: spec.player.clone(),
            no_data: filtered.is_empty(),
            points,
            skipped_records,
            zone_stats,
            summary: summarize(&filtered_records),
            legend: scheme.legend(plotted.into_iter()),
        })
    }

    fn normalize(&self, spec: FilterSpec) -> FilterSpec {
        FilterSpec {
            player: spec.player,
            strokes: spec.strokes.normalized(&self.options.strokes),
            results: spec.results.normalized(&self.options.results),
            spins: spec.spins.normalized(&self.options.spins),
        }
    }
}
