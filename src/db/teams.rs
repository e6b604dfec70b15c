use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 팀을 만들고, 만든 사용자를 관리자(admin) 멤버로 등록합니다.
/// 두 INSERT는 하나의 트랜잭션으로 묶입니다.
pub async fn create_team(pool: &SqlitePool, name: &str, owner_id: &str) -> Result<Team, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO teams (id, name) VALUES (?, ?)")
        .bind(&id)
        .bind(name)
        .execute(&mut *tx)
        .await?;

    sqlx::query("INSERT INTO user_teams (team_id, user_id, role) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(owner_id)
        .bind(ROLE_ADMIN)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    get_team(pool, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created team".to_string()))
}

pub async fn get_team(pool: &SqlitePool, id: &str) -> Result<Option<Team>, AppError> {
    let team = sqlx::query_as::<_, Team>(
        "SELECT id, name, created_at, updated_at FROM teams WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(team)
}

pub async fn list_user_teams(pool: &SqlitePool, user_id: &str) -> Result<Vec<Team>, AppError> {
    let teams = sqlx::query_as::<_, Team>(
        r#"
        SELECT t.id, t.name, t.created_at, t.updated_at
        FROM teams t
        JOIN user_teams ut ON ut.team_id = t.id
        WHERE ut.user_id = ?
        ORDER BY t.name
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(teams)
}

/// `(team_id, user_id)` 멤버십 행이 있는지 확인합니다.
pub async fn is_member(pool: &SqlitePool, team_id: &str, user_id: &str) -> Result<bool, AppError> {
    let row = sqlx::query_scalar::<_, i64>(
        "SELECT 1 FROM user_teams WHERE team_id = ? AND user_id = ?",
    )
    .bind(team_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}
