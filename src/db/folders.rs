//! # 데이터룸 폴더 쿼리 모듈
//!
//! `dataroom_folders` 테이블에 대한 조회/생성 쿼리와
//! 하위 트리 전체의 문서/폴더 개수를 세는 재귀 쿼리를 담고 있습니다.
//!
//! 폴더 목록은 항상 `order_index` 오름차순(NULL은 마지막), 그 다음 이름순으로 정렬합니다.

use crate::error::AppError;
use crate::models::*;
use crate::services::{candidate_name, child_folder_path, MAX_NAME_RETRIES};
use sqlx::SqlitePool;

/// 데이터룸의 모든 폴더를 조회합니다.
pub async fn list_folders(
    pool: &SqlitePool,
    dataroom_id: &str,
) -> Result<Vec<DataroomFolder>, AppError> {
    let folders = sqlx::query_as::<_, DataroomFolder>(
        r#"
        SELECT id, dataroom_id, parent_id, name, path, order_index, created_at, updated_at
        FROM dataroom_folders
        WHERE dataroom_id = ?
        ORDER BY order_index IS NULL, order_index, name
        "#,
    )
    .bind(dataroom_id)
    .fetch_all(pool)
    .await?;

    Ok(folders)
}

/// 부모가 없는(데이터룸 루트 바로 아래) 폴더만 조회합니다.
pub async fn list_root_folders(
    pool: &SqlitePool,
    dataroom_id: &str,
) -> Result<Vec<DataroomFolder>, AppError> {
    let folders = sqlx::query_as::<_, DataroomFolder>(
        r#"
        SELECT id, dataroom_id, parent_id, name, path, order_index, created_at, updated_at
        FROM dataroom_folders
        WHERE dataroom_id = ? AND parent_id IS NULL
        ORDER BY order_index IS NULL, order_index, name
        "#,
    )
    .bind(dataroom_id)
    .fetch_all(pool)
    .await?;

    Ok(folders)
}

/// 한 폴더 바로 아래의 자식 폴더를 조회합니다.
pub async fn list_child_folders(
    pool: &SqlitePool,
    parent_id: &str,
) -> Result<Vec<DataroomFolder>, AppError> {
    let folders = sqlx::query_as::<_, DataroomFolder>(
        r#"
        SELECT id, dataroom_id, parent_id, name, path, order_index, created_at, updated_at
        FROM dataroom_folders
        WHERE parent_id = ?
        ORDER BY order_index IS NULL, order_index, name
        "#,
    )
    .bind(parent_id)
    .fetch_all(pool)
    .await?;

    Ok(folders)
}

pub async fn get_folder(pool: &SqlitePool, id: &str) -> Result<Option<DataroomFolder>, AppError> {
    let folder = sqlx::query_as::<_, DataroomFolder>(
        r#"
        SELECT id, dataroom_id, parent_id, name, path, order_index, created_at, updated_at
        FROM dataroom_folders
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(folder)
}

/// `(dataroom_id, path)`로 폴더를 찾습니다. 경로는 데이터룸 안에서 유일합니다.
pub async fn get_folder_by_path(
    pool: &SqlitePool,
    dataroom_id: &str,
    path: &str,
) -> Result<Option<DataroomFolder>, AppError> {
    let folder = sqlx::query_as::<_, DataroomFolder>(
        r#"
        SELECT id, dataroom_id, parent_id, name, path, order_index, created_at, updated_at
        FROM dataroom_folders
        WHERE dataroom_id = ? AND path = ?
        "#,
    )
    .bind(dataroom_id)
    .bind(path)
    .fetch_optional(pool)
    .await?;

    Ok(folder)
}

/// 폴더 아래 전체 하위 트리의 문서 수와 폴더 수를 셉니다.
///
/// - `documents`: 이 폴더와 모든 하위 폴더에 있는 문서 링크 수
/// - `child_folders`: 이 폴더 아래의 모든 폴더 수 (자기 자신 제외)
///
/// 매번 DB에서 다시 계산하며, 없는 폴더 ID면 `{0, 0}`을 반환합니다.
pub async fn count_folder_contents(
    pool: &SqlitePool,
    folder_id: &str,
) -> Result<FolderCounts, AppError> {
    let (documents, folders) = sqlx::query_as::<_, (i64, i64)>(
        r#"
        WITH RECURSIVE subtree(id) AS (
            SELECT id FROM dataroom_folders WHERE id = ?
            UNION ALL
            SELECT f.id FROM dataroom_folders f JOIN subtree s ON f.parent_id = s.id
        )
        SELECT
            (SELECT COUNT(*) FROM dataroom_documents
             WHERE folder_id IN (SELECT id FROM subtree)) AS documents,
            (SELECT COUNT(*) FROM subtree) AS folders
        "#,
    )
    .bind(folder_id)
    .fetch_one(pool)
    .await?;

    Ok(FolderCounts {
        documents,
        // subtree에는 시작 폴더 자신이 포함되어 있습니다.
        child_folders: (folders - 1).max(0),
    })
}

/// 새 폴더를 만듭니다.
///
/// 경로가 겹치면 이름에 " (1)", " (2)" ... 를 붙여 다시 시도합니다.
/// 중복 판정은 `UNIQUE (dataroom_id, path)` 제약조건에 맡기므로,
/// 두 요청이 동시에 같은 이름을 만들어도 둘 중 하나는 다음 후보로 넘어갑니다.
///
/// 원래 이름과 `MAX_NAME_RETRIES`개의 변형이 모두 사용 중이면
/// 아무것도 만들지 않고 `BadRequest`를 반환합니다.
pub async fn create_folder(
    pool: &SqlitePool,
    dataroom_id: &str,
    name: &str,
    parent_id: Option<&str>,
    parent_folder_path: &str,
) -> Result<DataroomFolder, AppError> {
    for attempt in 0..=MAX_NAME_RETRIES {
        let candidate = candidate_name(name, attempt);
        let path = child_folder_path(parent_folder_path, &candidate);
        let id = uuid::Uuid::now_v7().to_string();

        let result = sqlx::query(
            r#"
            INSERT INTO dataroom_folders (id, dataroom_id, parent_id, name, path)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(dataroom_id)
        .bind(parent_id)
        .bind(&candidate)
        .bind(&path)
        .execute(pool)
        .await;

        match result {
            Ok(_) => {
                return get_folder(pool, &id).await?.ok_or(AppError::Internal(
                    "Failed to retrieve created folder".to_string(),
                ));
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::debug!(dataroom_id, path = %path, attempt, "folder path taken, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(AppError::BadRequest(
        "Too many similar folder names. Please choose a different name.".to_string(),
    ))
}
