use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

pub async fn create_dataroom(
    pool: &SqlitePool,
    team_id: &str,
    name: &str,
) -> Result<Dataroom, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query("INSERT INTO datarooms (id, team_id, name) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(team_id)
        .bind(name)
        .execute(pool)
        .await?;

    get_team_dataroom(pool, team_id, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created dataroom".to_string()))
}

pub async fn list_datarooms(pool: &SqlitePool, team_id: &str) -> Result<Vec<Dataroom>, AppError> {
    let datarooms = sqlx::query_as::<_, Dataroom>(
        r#"
        SELECT id, team_id, name, created_at, updated_at
        FROM datarooms
        WHERE team_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(team_id)
    .fetch_all(pool)
    .await?;

    Ok(datarooms)
}

/// 팀에 속한 데이터룸만 돌려줍니다. 다른 팀의 데이터룸이면 None입니다.
pub async fn get_team_dataroom(
    pool: &SqlitePool,
    team_id: &str,
    id: &str,
) -> Result<Option<Dataroom>, AppError> {
    let dataroom = sqlx::query_as::<_, Dataroom>(
        r#"
        SELECT id, team_id, name, created_at, updated_at
        FROM datarooms
        WHERE id = ? AND team_id = ?
        "#,
    )
    .bind(id)
    .bind(team_id)
    .fetch_optional(pool)
    .await?;

    Ok(dataroom)
}
