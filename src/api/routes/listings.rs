use axum::extract::{Query, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::fetch::RankingQuery;
use crate::models::{Brawler, Player};

/// `GET /api/brawlers`: roster with display names and images.
pub async fn brawlers(State(state): State<AppState>) -> Result<Json<Vec<Brawler>>, ApiError> {
    let raw = state.source.brawlers().await?;
    Ok(Json(state.statistics.roster(raw)))
}

/// `GET /api/players?countryCode=&brawlerId=`: player ranking.
pub async fn players(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = state.source.rankings(&query).await?;
    Ok(Json(players))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::build_router;
    use crate::api::testing::{get_json, setup_test_state, StubSource};
    use crate::fetch::RankingQuery;
    use crate::models::{Club, Player, RawBrawler};

    #[tokio::test]
    async fn test_brawlers_normalized() {
        let source = StubSource {
            brawlers: Some(vec![
                RawBrawler { id: 16000000, name: "SHELLY".to_string() },
                RawBrawler { id: 16000032, name: "MR. P".to_string() },
            ]),
            ..Default::default()
        };
        let app = build_router(setup_test_state(Arc::new(source)));

        let (status, json) = get_json(app, "/api/brawlers").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!([
                { "id": 16000000, "name": "Shelly", "imageUrl": "https://cdn.brawlify.com/brawler-bs/Shelly.png" },
                { "id": 16000032, "name": "Mr.P", "imageUrl": "https://cdn.brawlify.com/brawler-bs/Mr.P.png" }
            ])
        );
    }

    #[tokio::test]
    async fn test_brawlers_missing_items_is_bad_gateway() {
        let app = build_router(setup_test_state(Arc::new(StubSource::default())));

        let (status, json) = get_json(app, "/api/brawlers").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_players_passes_query() {
        let source = Arc::new(StubSource {
            players: vec![Player {
                tag: "#P1".to_string(),
                rank: 1,
                trophies: 1500,
                name: "Top".to_string(),
                club: Some(Club { name: "Tribe".to_string() }),
            }],
            ..Default::default()
        });
        let app = build_router(setup_test_state(source.clone()));

        let (status, json) = get_json(app, "/api/players?countryCode=jp&brawlerId=16000000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["club"]["name"], "Tribe");
        assert_eq!(json[0]["rank"], 1);
        assert_eq!(
            *source.last_ranking_query.lock().unwrap(),
            Some(RankingQuery {
                country_code: Some("jp".to_string()),
                brawler_id: Some("16000000".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_players_without_query() {
        let source = Arc::new(StubSource::default());
        let app = build_router(setup_test_state(source.clone()));

        let (status, json) = get_json(app, "/api/players").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!([]));
        let query = source.last_ranking_query.lock().unwrap().clone().unwrap();
        assert_eq!(query.country_code(), "global");
    }
}
