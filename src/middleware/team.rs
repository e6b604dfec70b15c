//! # 팀 멤버십 검사
//!
//! 팀 단위 라우트는 모두 인증된 사용자가 해당 팀의 멤버인지 먼저 확인합니다.
//! 멤버가 아니면 데이터룸이 존재하는지와 상관없이 401을 반환합니다.

use sqlx::SqlitePool;

use crate::{db, error::AppError, middleware::auth::AuthUser, models::Dataroom};

/// `(team_id, user_id)` 멤버십이 없으면 `Unauthorized`를 반환합니다.
pub async fn require_team_member(
    pool: &SqlitePool,
    team_id: &str,
    user: &AuthUser,
) -> Result<(), AppError> {
    if db::is_member(pool, team_id, &user.user_id).await? {
        Ok(())
    } else {
        tracing::debug!(team_id, user_id = %user.user_id, "rejected non-member");
        Err(AppError::Unauthorized("Unauthorized".to_string()))
    }
}

/// 멤버십을 확인한 뒤, 데이터룸이 그 팀 소속인지 확인합니다.
///
/// 다른 팀의 데이터룸이거나 없는 데이터룸이면 `NotFound`입니다.
pub async fn require_dataroom(
    pool: &SqlitePool,
    team_id: &str,
    dataroom_id: &str,
    user: &AuthUser,
) -> Result<Dataroom, AppError> {
    require_team_member(pool, team_id, user).await?;

    db::get_team_dataroom(pool, team_id, dataroom_id)
        .await?
        .ok_or(AppError::NotFound)
}
