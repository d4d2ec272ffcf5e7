// HTTP request handlers
use crate::application::filter::FilterSpec;
use crate::application::shot_store::FilterOptions;
use crate::application::styling::ColorBy;
use crate::domain::shot::ShotResult;
use crate::domain::view::ViewModel;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Omitted selections mean "all"; an empty list selects nothing.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub player: String,
    pub strokes: Option<Vec<String>>,
    pub results: Option<Vec<ShotResult>>,
    pub spins: Option<Vec<String>>,
    #[serde(default)]
    pub color_by: ColorBy,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    #[serde(flatten)]
    pub options: FilterOptions,
    pub default_player: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Values for the filter widgets
pub async fn filter_options(State(state): State<Arc<AppState>>) -> Json<OptionsResponse> {
    let service = &state.dashboard_service;
    Json(OptionsResponse {
        options: service.options().clone(),
        default_player: service.default_filter().player,
    })
}

/// Render the court view for one filter selection
pub async fn render_view(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<ViewModel>, ApiError> {
    let spec = FilterSpec::from_selections(
        request.player,
        request.strokes,
        request.results,
        request.spins,
    );

    let view = state.dashboard_service.render(&spec, request.color_by)?;
    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::shot_store::ShotStore;
    use crate::domain::court::{CourtDimensions, CourtGeometry, ViewMode};
    use crate::domain::error::AnalyticsError;
    use crate::domain::shot::ShotRecord;

    fn state() -> Arc<AppState> {
        let store = ShotStore::new(
            vec![
                ShotRecord::new("Ann", "Forehand", ShotResult::In).with_bounce(0.0, 3.0),
                ShotRecord::new("Bea", "Serve", ShotResult::Out).with_bounce(1.0, 20.0),
            ],
            10,
        )
        .unwrap();
        let geometry = CourtGeometry::new(CourtDimensions::METRES, 3).unwrap();
        let dashboard_service =
            DashboardService::new(store, geometry, ViewMode::Mirrored).unwrap();
        Arc::new(AppState { dashboard_service })
    }

    #[tokio::test]
    async fn test_options_list_default_player() {
        let Json(response) = filter_options(State(state())).await;
        assert_eq!(response.default_player, "Ann");
        assert_eq!(response.options.players, vec!["Ann", "Bea"]);
    }

    #[tokio::test]
    async fn test_render_request_defaults_to_all() {
        let request: RenderRequest = serde_json::from_str(r#"{ "player": "Bea" }"#).unwrap();
        assert_eq!(request.color_by, ColorBy::Player);

        let Json(view) = render_view(State(state()), Json(request)).await.unwrap();
        assert_eq!(view.points.len(), 1);
        // mirrored from beyond the net
        assert_eq!(view.points[0].x, -1.0);
    }

    #[tokio::test]
    async fn test_render_request_empty_results_selects_nothing() {
        let request: RenderRequest =
            serde_json::from_str(r#"{ "player": "Ann", "results": [], "color_by": "Result" }"#)
                .unwrap();

        let Json(view) = render_view(State(state()), Json(request)).await.unwrap();
        assert!(view.no_data);
    }

    #[tokio::test]
    async fn test_render_unknown_player_errors() {
        let request: RenderRequest = serde_json::from_str(r#"{ "player": "Cat" }"#).unwrap();
        let err = render_view(State(state()), Json(request)).await.unwrap_err();
        assert_eq!(err.0, AnalyticsError::UnknownPlayer("Cat".to_string()));
    }
}
