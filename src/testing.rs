//! 테스트 공용 도구: 인메모리 SQLite + 실제 마이그레이션 + 라우터를 직접 호출하는 헬퍼

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt;

use crate::{
    db,
    middleware::auth::create_access_token,
    models::*,
    routes::{self, AppState},
    services,
};

const SECRET: &str = "test-secret";

/// 팀 하나, 데이터룸 하나, 그 팀의 멤버 한 명이 준비된 애플리케이션
pub struct TestApp {
    pub pool: SqlitePool,
    pub router: Router,
    pub team_id: String,
    pub dataroom_id: String,
    pub token: String,
}

impl TestApp {
    pub async fn new() -> Self {
        // 인메모리 DB는 연결마다 따로 생기므로 연결 하나를 계속 유지합니다.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        let router = routes::app(AppState {
            pool: pool.clone(),
            jwt_secret: SECRET.to_string(),
        });

        let user_id = "member-1";
        let team = db::create_team(&pool, "Acme", user_id).await.unwrap();
        let dataroom = db::create_dataroom(&pool, &team.id, "Deal Room").await.unwrap();

        Self {
            token: create_access_token(user_id, SECRET),
            pool,
            router,
            team_id: team.id,
            dataroom_id: dataroom.id,
        }
    }

    pub fn token_for(&self, user_id: &str) -> String {
        create_access_token(user_id, SECRET)
    }

    pub async fn seed_team(&self, name: &str, owner_id: &str) -> String {
        db::create_team(&self.pool, name, owner_id).await.unwrap().id
    }

    pub async fn seed_dataroom(&self, team_id: &str, name: &str) -> String {
        db::create_dataroom(&self.pool, team_id, name).await.unwrap().id
    }

    /// 문서를 등록하고 `folder_path`(예: "a/b") 폴더에 배치합니다. None이면 루트입니다.
    pub async fn place_document(&self, name: &str, folder_path: Option<&str>) -> DataroomDocument {
        let document = db::create_document(
            &self.pool,
            &self.team_id,
            &CreateDocumentRequest {
                name: name.to_string(),
                doc_type: Some("pdf".to_string()),
            },
        )
        .await
        .unwrap();

        let folder_id = match folder_path {
            Some(path) => {
                let path = services::parent_folder_path(Some(path));
                let folder = db::get_folder_by_path(&self.pool, &self.dataroom_id, &path)
                    .await
                    .unwrap()
                    .unwrap_or_else(|| panic!("no folder at {}", path));
                Some(folder.id)
            }
            None => None,
        };

        db::create_dataroom_document(
            &self.pool,
            &self.dataroom_id,
            &document.id,
            folder_id.as_deref(),
            None,
        )
        .await
        .unwrap()
    }

    /// 빈 토큰이면 Authorization 헤더 없이 보냅니다.
    pub async fn raw_request(
        &self,
        method: Method,
        uri: &str,
        token: &str,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if !token.is_empty() {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.raw_request(method, uri, token, body).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }
}
