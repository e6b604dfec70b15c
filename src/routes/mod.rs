//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `datarooms`: 팀의 데이터룸 생성/목록
//! - `documents`: 문서 메타데이터 등록, 데이터룸에 문서 배치/조회
//! - `folders`: 데이터룸 폴더 목록(세 가지 모드)/생성, 경로로 자식 폴더 조회
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `teams`: 팀 생성/목록

pub mod datarooms;
pub mod documents;
pub mod folders;
pub mod health;
pub mod teams;

pub use datarooms::*;
pub use documents::*;
pub use folders::*;
pub use health::*;
pub use teams::*;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 모든 라우트 핸들러가 공유하는 상태
///
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_secret: String,
}

/// `/api/v1` 아래에 들어갈 API 라우트
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/{team_id}/datarooms",
            get(list_datarooms).post(create_dataroom),
        )
        .route("/teams/{team_id}/documents", post(create_document))
        // 폴더 API. GET/POST 외의 메서드는 `Allow: GET, POST`와 함께 405
        .route(
            "/teams/{team_id}/datarooms/{id}/folders",
            get(list_folders)
                .post(create_folder)
                .fallback(folders_method_not_allowed),
        )
        // {*name}: "finance/q3"처럼 슬래시를 포함하는 나머지 경로 전체
        .route(
            "/teams/{team_id}/datarooms/{id}/folders/{*name}",
            get(list_child_folders),
        )
        .route(
            "/teams/{team_id}/datarooms/{id}/documents",
            get(list_dataroom_documents).post(add_dataroom_document),
        )
        .route("/health", get(health_check))
        .with_state(state)
}

/// 전체 애플리케이션 라우터: API를 `/api/v1`에 중첩하고 CORS, 요청 로깅을 붙입니다.
pub fn app(state: AppState) -> Router {
    // 개발 환경에서는 모든 출처를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
