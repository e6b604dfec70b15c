//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/v1/health` → `{ "status": "ok" }`
//!
//! 인증 없이 호출할 수 있으며, 로드밸런서나 배포 플랫폼의 상태 확인에 사용됩니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /health`: 서버 상태를 확인합니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::testing::TestApp;

    #[tokio::test]
    async fn health_needs_no_token() {
        let app = TestApp::new().await;

        let (status, body) = app.request(Method::GET, "/api/v1/health", "", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
