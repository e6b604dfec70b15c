//! # 문서 및 데이터룸 문서 링크 쿼리 모듈
//!
//! `documents` 테이블(문서 메타데이터)과 `dataroom_documents` 테이블(문서를
//! 데이터룸의 폴더에 배치하는 링크)에 대한 쿼리 함수들입니다.
//!
//! 문서 링크 목록은 항상 `order_index` 오름차순(NULL은 마지막), 그 다음 문서 이름순으로 정렬합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

pub async fn create_document(
    pool: &SqlitePool,
    team_id: &str,
    req: &CreateDocumentRequest,
) -> Result<Document, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query("INSERT INTO documents (id, team_id, name, type) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(team_id)
        .bind(&req.name)
        .bind(&req.doc_type)
        .execute(pool)
        .await?;

    get_team_document(pool, team_id, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created document".to_string()))
}

/// 팀에 속한 문서만 돌려줍니다.
pub async fn get_team_document(
    pool: &SqlitePool,
    team_id: &str,
    id: &str,
) -> Result<Option<Document>, AppError> {
    let document = sqlx::query_as::<_, Document>(
        r#"
        SELECT id, team_id, name, type, created_at, updated_at
        FROM documents
        WHERE id = ? AND team_id = ?
        "#,
    )
    .bind(id)
    .bind(team_id)
    .fetch_optional(pool)
    .await?;

    Ok(document)
}

/// 데이터룸의 모든 문서 링크를 조회합니다. (루트 + 모든 폴더)
pub async fn list_dataroom_documents(
    pool: &SqlitePool,
    dataroom_id: &str,
) -> Result<Vec<DataroomDocument>, AppError> {
    let rows = sqlx::query_as::<_, DataroomDocumentRow>(
        r#"
        SELECT dd.id, dd.dataroom_id, dd.document_id, dd.folder_id, dd.order_index,
               dd.created_at, dd.updated_at,
               d.name AS document_name, d.type AS document_type
        FROM dataroom_documents dd
        JOIN documents d ON d.id = dd.document_id
        WHERE dd.dataroom_id = ?
        ORDER BY dd.order_index IS NULL, dd.order_index, d.name
        "#,
    )
    .bind(dataroom_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(DataroomDocument::from).collect())
}

/// 한 폴더 바로 아래의 문서 링크를 조회합니다.
/// `folder_id`가 None이면 데이터룸 루트에 있는 문서 링크를 조회합니다.
pub async fn list_folder_documents(
    pool: &SqlitePool,
    dataroom_id: &str,
    folder_id: Option<&str>,
) -> Result<Vec<DataroomDocument>, AppError> {
    // `folder_id IS ?`는 NULL 바인딩이면 IS NULL, 값이면 = 비교처럼 동작합니다.
    let rows = sqlx::query_as::<_, DataroomDocumentRow>(
        r#"
        SELECT dd.id, dd.dataroom_id, dd.document_id, dd.folder_id, dd.order_index,
               dd.created_at, dd.updated_at,
               d.name AS document_name, d.type AS document_type
        FROM dataroom_documents dd
        JOIN documents d ON d.id = dd.document_id
        WHERE dd.dataroom_id = ? AND dd.folder_id IS ?
        ORDER BY dd.order_index IS NULL, dd.order_index, d.name
        "#,
    )
    .bind(dataroom_id)
    .bind(folder_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(DataroomDocument::from).collect())
}

pub async fn get_dataroom_document(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<DataroomDocument>, AppError> {
    let row = sqlx::query_as::<_, DataroomDocumentRow>(
        r#"
        SELECT dd.id, dd.dataroom_id, dd.document_id, dd.folder_id, dd.order_index,
               dd.created_at, dd.updated_at,
               d.name AS document_name, d.type AS document_type
        FROM dataroom_documents dd
        JOIN documents d ON d.id = dd.document_id
        WHERE dd.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(DataroomDocument::from))
}

/// 문서를 데이터룸에 배치합니다.
///
/// 같은 문서가 이미 데이터룸에 있으면 `Conflict`를 반환합니다.
pub async fn create_dataroom_document(
    pool: &SqlitePool,
    dataroom_id: &str,
    document_id: &str,
    folder_id: Option<&str>,
    order_index: Option<i64>,
) -> Result<DataroomDocument, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    let result = sqlx::query(
        r#"
        INSERT INTO dataroom_documents (id, dataroom_id, document_id, folder_id, order_index)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(dataroom_id)
    .bind(document_id)
    .bind(folder_id)
    .bind(order_index)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::Conflict(
                "Document is already in this dataroom".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    }

    get_dataroom_document(pool, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created dataroom document".to_string()))
}
