use serde::{Deserialize, Serialize};

/// 데이터룸: 외부에 공유하는 문서와 폴더의 묶음. 정확히 하나의 팀에 속합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Dataroom {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateDataroomRequest {
    pub name: String,
}
