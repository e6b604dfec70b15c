//! # 데이터룸 폴더(Folder) 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | /teams/{team_id}/datarooms/{id}/folders?root=true | 루트 폴더 + 하위 트리 개수 |
//! | GET | /teams/{team_id}/datarooms/{id}/folders?include_documents=true | 루트 문서 + 모든 폴더(문서 포함) |
//! | GET | /teams/{team_id}/datarooms/{id}/folders | 모든 폴더 + 자식 폴더/문서 한 단계 |
//! | POST | /teams/{team_id}/datarooms/{id}/folders | 폴더 생성 |
//! | GET | /teams/{team_id}/datarooms/{id}/folders/{*name} | 경로로 찾은 폴더의 자식 폴더 |
//!
//! 모든 요청은 먼저 팀 멤버십을 확인합니다. 멤버가 아니면 쿼리나 본문과 상관없이 401입니다.
//! 조회 중 DB 오류는 "Error fetching folders" 메시지의 500으로 응답합니다.

use crate::{
    db,
    error::AppError,
    middleware::{auth::AuthUser, team::require_dataroom},
    models::*,
    routes::AppState,
    services::{self, folder_tree},
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::SqlitePool;

const FETCH_ERROR: &str = "Error fetching folders";
const CREATE_ERROR: &str = "Error creating folder";

/// `GET /teams/{team_id}/datarooms/{id}/folders`: 쿼리에 따라 세 가지 모드로 폴더를 조회합니다.
///
/// `root=true`가 `include_documents=true`보다 우선합니다.
/// 해석할 수 없는 쿼리 문자열은 무시하고 기본 모드로 조회합니다.
pub async fn list_folders(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((team_id, dataroom_id)): Path<(String, String)>,
    query: Result<Query<FolderListQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    require_dataroom(&state.pool, &team_id, &dataroom_id, &auth_user)
        .await
        .map_err(|e| e.with_message(FETCH_ERROR))?;

    let mode = match query {
        Ok(Query(query)) => query.mode(),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed folder query");
            FolderListMode::Full
        }
    };

    load_folders(&state.pool, &dataroom_id, mode)
        .await
        .map_err(|e| e.with_message(FETCH_ERROR))
}

async fn load_folders(
    pool: &SqlitePool,
    dataroom_id: &str,
    mode: FolderListMode,
) -> Result<Response, AppError> {
    let response = match mode {
        FolderListMode::Root => {
            let folders = db::list_root_folders(pool, dataroom_id).await?;
            Json(folder_tree::with_counts(pool, folders).await?).into_response()
        }
        FolderListMode::WithDocuments => {
            let folders = db::list_folders(pool, dataroom_id).await?;
            let documents = db::list_dataroom_documents(pool, dataroom_id).await?;
            Json(folder_tree::flat_items(folders, documents)).into_response()
        }
        FolderListMode::Full => {
            let folders = db::list_folders(pool, dataroom_id).await?;
            let documents = db::list_dataroom_documents(pool, dataroom_id).await?;
            Json(folder_tree::full_tree(folders, documents)).into_response()
        }
    };

    Ok(response)
}

/// `POST /teams/{team_id}/datarooms/{id}/folders`: 새 폴더를 생성합니다.
///
/// 요청 본문: `{ "name": "Reports", "path": "finance/q3" (선택) }`
///
/// 같은 경로의 폴더가 이미 있으면 "Reports (1)", "Reports (2)" ... 순서로 이름을 바꿔 만듭니다.
/// 본문 파싱은 멤버십 확인 뒤에 하므로, 멤버가 아니면 본문과 상관없이 401입니다.
pub async fn create_folder(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((team_id, dataroom_id)): Path<(String, String)>,
    payload: Result<Json<CreateFolderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedFolder>), AppError> {
    require_dataroom(&state.pool, &team_id, &dataroom_id, &auth_user)
        .await
        .map_err(|e| e.with_message(CREATE_ERROR))?;

    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let name = req.name.trim();
    if name.is_empty() || !services::is_sluggable(name) {
        return Err(AppError::BadRequest("Folder name is required".to_string()));
    }

    let parent_folder_path = services::parent_folder_path(req.path.as_deref());

    // 부모 폴더가 없으면 데이터룸 루트에 만드는 것으로 취급합니다.
    let parent = db::get_folder_by_path(&state.pool, &dataroom_id, &parent_folder_path)
        .await
        .map_err(|e| e.with_message(CREATE_ERROR))?;

    let folder = db::create_folder(
        &state.pool,
        &dataroom_id,
        name,
        parent.as_ref().map(|p| p.id.as_str()),
        &parent_folder_path,
    )
    .await
    .map_err(|e| e.with_message(CREATE_ERROR))?;

    tracing::info!(
        dataroom_id = %dataroom_id,
        path = %folder.path,
        "created folder"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedFolder {
            folder,
            documents: Vec::new(),
            child_folders: Vec::new(),
            parent_folder_path,
        }),
    ))
}

/// `GET /teams/{team_id}/datarooms/{id}/folders/{*name}`: 경로 `"/" + name`인 폴더의
/// 자식 폴더를 하위 트리 개수와 함께 조회합니다.
pub async fn list_child_folders(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((team_id, dataroom_id, name)): Path<(String, String, String)>,
) -> Result<Json<Vec<FolderWithCounts>>, AppError> {
    require_dataroom(&state.pool, &team_id, &dataroom_id, &auth_user)
        .await
        .map_err(|e| e.with_message(FETCH_ERROR))?;

    let path = services::parent_folder_path(Some(&name));

    let children = async {
        let folder = db::get_folder_by_path(&state.pool, &dataroom_id, &path)
            .await?
            .ok_or(AppError::NotFound)?;
        let children = db::list_child_folders(&state.pool, &folder.id).await?;
        folder_tree::with_counts(&state.pool, children).await
    }
    .await
    .map_err(|e| e.with_message(FETCH_ERROR))?;

    Ok(Json(children))
}

/// 폴더 API에서 GET/POST 외의 메서드
pub async fn folders_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("GET, POST")
}
