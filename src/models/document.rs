use serde::{Deserialize, Serialize};

/// 문서 메타데이터. 실제 파일 내용은 외부 오브젝트 스토리지에 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub team_id: String,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub doc_type: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// 문서 링크에 함께 실리는 문서 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
}

/// `dataroom_documents`와 `documents`를 JOIN한 한 행
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DataroomDocumentRow {
    pub id: String,
    pub dataroom_id: String,
    pub document_id: String,
    pub folder_id: Option<String>,
    pub order_index: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub document_name: String,
    pub document_type: Option<String>,
}

/// 문서 링크: 문서를 데이터룸의 특정 위치(폴더 + 순서)에 배치합니다.
/// `folder_id`가 None이면 데이터룸 루트에 있는 문서입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataroomDocument {
    pub id: String,
    pub dataroom_id: String,
    pub document_id: String,
    pub folder_id: Option<String>,
    pub order_index: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub document: DocumentSummary,
}

impl From<DataroomDocumentRow> for DataroomDocument {
    fn from(row: DataroomDocumentRow) -> Self {
        Self {
            document: DocumentSummary {
                id: row.document_id.clone(),
                name: row.document_name,
                doc_type: row.document_type,
            },
            id: row.id,
            dataroom_id: row.dataroom_id,
            document_id: row.document_id,
            folder_id: row.folder_id,
            order_index: row.order_index,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataroomDocumentRequest {
    pub document_id: String,
    /// 슬래시로 구분된 폴더 경로 (예: "finance/q3"). 없으면 루트에 배치합니다.
    pub folder_path: Option<String>,
    pub order_index: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DataroomDocumentsQuery {
    pub folder_path: Option<String>,
}
