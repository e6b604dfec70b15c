use crate::{db, error::AppError, middleware::auth::AuthUser, models::*, routes::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /teams`: 로그인한 사용자가 속한 팀 목록
pub async fn list_teams(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let teams = db::list_user_teams(&state.pool, &auth_user.user_id).await?;
    Ok(Json(json!({ "teams": teams })))
}

/// `POST /teams`: 팀을 만들고 요청한 사용자를 관리자로 등록합니다.
pub async fn create_team(
    State(state): State<AppState>,
    auth_user: AuthUser,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Team>), AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Team name is required".to_string()));
    }

    let team = db::create_team(&state.pool, name, &auth_user.user_id).await?;
    tracing::info!(team_id = %team.id, user_id = %auth_user.user_id, "created team");

    Ok((StatusCode::CREATED, Json(team)))
}
