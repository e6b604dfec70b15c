use crate::{
    db,
    error::AppError,
    middleware::{auth::AuthUser, team::require_team_member},
    models::*,
    routes::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /teams/{team_id}/datarooms`: 팀의 데이터룸 목록 (최근 생성순)
pub async fn list_datarooms(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(team_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    require_team_member(&state.pool, &team_id, &auth_user).await?;

    let datarooms = db::list_datarooms(&state.pool, &team_id).await?;
    Ok(Json(json!({ "datarooms": datarooms })))
}

pub async fn create_dataroom(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(team_id): Path<String>,
    payload: Result<Json<CreateDataroomRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Dataroom>), AppError> {
    require_team_member(&state.pool, &team_id, &auth_user).await?;

    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Dataroom name is required".to_string()));
    }

    let dataroom = db::create_dataroom(&state.pool, &team_id, name).await?;
    Ok((StatusCode::CREATED, Json(dataroom)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::testing::TestApp;

    #[tokio::test]
    async fn lists_team_datarooms() {
        let app = TestApp::new().await;
        let uri = format!("/api/v1/teams/{}/datarooms", app.team_id);

        let (_, body) = app.request(Method::GET, &uri, &app.token, None).await;
        let datarooms = body["datarooms"].as_array().unwrap();
        assert_eq!(datarooms.len(), 1);
        assert_eq!(datarooms[0]["id"], app.dataroom_id.as_str());
        assert_eq!(datarooms[0]["teamId"], app.team_id.as_str());
    }

    #[tokio::test]
    async fn non_member_cannot_create_dataroom() {
        let app = TestApp::new().await;
        let uri = format!("/api/v1/teams/{}/datarooms", app.team_id);

        let (status, _) = app
            .request(
                Method::POST,
                &uri,
                &app.token_for("outsider"),
                Some(json!({ "name": "Sneaky" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
