//! # 문서 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /teams/{team_id}/documents` → 문서 메타데이터 등록
//! - `GET  /teams/{team_id}/datarooms/{id}/documents?folder_path=a/b` → 폴더(없으면 루트)의 문서 링크
//! - `POST /teams/{team_id}/datarooms/{id}/documents` → 문서를 데이터룸 폴더에 배치
//!
//! 파일 내용 업로드는 외부 오브젝트 스토리지가 담당하고, 여기서는 메타데이터만 다룹니다.

use crate::{
    db,
    error::AppError,
    middleware::{
        auth::AuthUser,
        team::{require_dataroom, require_team_member},
    },
    models::*,
    routes::AppState,
    services,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// 슬래시로 구분된 폴더 경로를 폴더 ID로 바꿉니다.
/// 경로가 없으면 루트(None), 경로의 폴더가 없으면 `NotFound`입니다.
async fn resolve_folder_id(
    pool: &SqlitePool,
    dataroom_id: &str,
    folder_path: Option<&str>,
) -> Result<Option<String>, AppError> {
    let Some(path) = services::normalize_path(folder_path) else {
        return Ok(None);
    };

    let folder = db::get_folder_by_path(pool, dataroom_id, &format!("/{}", path))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Some(folder.id))
}

pub async fn create_document(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(team_id): Path<String>,
    payload: Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    require_team_member(&state.pool, &team_id, &auth_user).await?;

    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Document name is required".to_string()));
    }

    let document = db::create_document(&state.pool, &team_id, &req).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// 응답: `{ "documents": [...] }`
pub async fn list_dataroom_documents(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((team_id, dataroom_id)): Path<(String, String)>,
    Query(query): Query<DataroomDocumentsQuery>,
) -> Result<Json<Value>, AppError> {
    require_dataroom(&state.pool, &team_id, &dataroom_id, &auth_user).await?;

    let folder_id =
        resolve_folder_id(&state.pool, &dataroom_id, query.folder_path.as_deref()).await?;
    let documents =
        db::list_folder_documents(&state.pool, &dataroom_id, folder_id.as_deref()).await?;

    Ok(Json(json!({ "documents": documents })))
}

/// 요청 본문: `{ "documentId": "...", "folderPath": "a/b" (선택), "orderIndex": 3 (선택) }`
///
/// 다른 팀의 문서는 배치할 수 없고(404), 이미 데이터룸에 있는 문서는 409입니다.
pub async fn add_dataroom_document(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((team_id, dataroom_id)): Path<(String, String)>,
    payload: Result<Json<CreateDataroomDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataroomDocument>), AppError> {
    require_dataroom(&state.pool, &team_id, &dataroom_id, &auth_user).await?;

    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let document = db::get_team_document(&state.pool, &team_id, &req.document_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let folder_id =
        resolve_folder_id(&state.pool, &dataroom_id, req.folder_path.as_deref()).await?;

    let link = db::create_dataroom_document(
        &state.pool,
        &dataroom_id,
        &document.id,
        folder_id.as_deref(),
        req.order_index,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(link)))
}
