//! # 데이터룸 폴더 모델
//!
//! `DataroomFolder`는 DB의 `dataroom_folders` 테이블 한 행에 대응합니다.
//! 나머지 구조체들은 `GET .../folders`의 세 가지 조회 모드가 돌려주는 응답 형태입니다.

use serde::{Deserialize, Serialize};

use super::DataroomDocument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DataroomFolder {
    pub id: String,
    pub dataroom_id: String,
    /// 부모 폴더 ID. None이면 데이터룸 루트 바로 아래 폴더입니다.
    pub parent_id: Option<String>,
    /// 화면에 보이는 이름
    pub name: String,
    /// 데이터룸 안에서 유일한 slug 경로 (예: "/finance/q3-reports")
    pub path: String,
    pub order_index: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// 폴더 아래 전체 하위 트리의 문서 수와 폴더 수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderCounts {
    pub documents: i64,
    pub child_folders: i64,
}

/// `?root=true` 응답 항목
#[derive(Debug, Clone, Serialize)]
pub struct FolderWithCounts {
    #[serde(flatten)]
    pub folder: DataroomFolder,
    #[serde(rename = "_count")]
    pub count: FolderCounts,
}

/// 폴더 + 바로 아래 문서 링크
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderWithDocuments {
    #[serde(flatten)]
    pub folder: DataroomFolder,
    pub documents: Vec<DataroomDocument>,
}

/// 기본 모드 응답 항목: 폴더 + 바로 아래 문서 + 한 단계 아래 자식 폴더(각자의 문서 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderWithChildren {
    #[serde(flatten)]
    pub folder: DataroomFolder,
    pub documents: Vec<DataroomDocument>,
    pub child_folders: Vec<FolderWithDocuments>,
}

/// `?include_documents=true` 응답 항목.
///
/// 루트 문서 링크와 폴더가 한 배열에 섞이므로 `kind` 필드로 구분합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataroomItem {
    Document(DataroomDocument),
    Folder(FolderWithDocuments),
}

/// `POST .../folders` 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFolder {
    #[serde(flatten)]
    pub folder: DataroomFolder,
    pub documents: Vec<DataroomDocument>,
    pub child_folders: Vec<DataroomFolder>,
    /// 부모 폴더 경로 ("/" 또는 "/finance" 등). 클라이언트 편의를 위해 함께 돌려줍니다.
    pub parent_folder_path: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    /// 부모 폴더 경로 (앞의 "/" 없이, 예: "finance/q3"). 없으면 루트에 생성합니다.
    pub path: Option<String>,
}

/// `GET .../folders` 쿼리 문자열.
///
/// 값은 문자열 그대로 받고, 정확히 `"true"`일 때만 켜진 것으로 봅니다.
/// `?root=1`이나 `?root=yes`는 꺼진 것과 같습니다.
#[derive(Debug, Default, Deserialize)]
pub struct FolderListQuery {
    pub root: Option<String>,
    pub include_documents: Option<String>,
}

/// 폴더 목록 조회 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderListMode {
    /// 루트 폴더만, 하위 항목 개수 포함
    Root,
    /// 루트 문서 링크 + 모든 폴더(각자의 문서 포함)
    WithDocuments,
    /// 모든 폴더 + 한 단계 아래 자식 폴더와 문서
    Full,
}

impl FolderListQuery {
    /// `root`가 `include_documents`보다 우선합니다.
    pub fn mode(&self) -> FolderListMode {
        if is_true(&self.root) {
            FolderListMode::Root
        } else if is_true(&self.include_documents) {
            FolderListMode::WithDocuments
        } else {
            FolderListMode::Full
        }
    }
}

fn is_true(flag: &Option<String>) -> bool {
    flag.as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder() -> DataroomFolder {
        DataroomFolder {
            id: "f1".to_string(),
            dataroom_id: "d1".to_string(),
            parent_id: None,
            name: "Reports".to_string(),
            path: "/reports".to_string(),
            order_index: None,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn root_takes_precedence_over_include_documents() {
        let query = FolderListQuery {
            root: Some("true".to_string()),
            include_documents: Some("true".to_string()),
        };
        assert_eq!(query.mode(), FolderListMode::Root);

        let query = FolderListQuery {
            root: Some("false".to_string()),
            include_documents: Some("true".to_string()),
        };
        assert_eq!(query.mode(), FolderListMode::WithDocuments);

        assert_eq!(FolderListQuery::default().mode(), FolderListMode::Full);
    }

    #[test]
    fn only_literal_true_enables_a_mode() {
        for value in ["1", "yes", "TRUE", ""] {
            let query = FolderListQuery {
                root: Some(value.to_string()),
                include_documents: Some(value.to_string()),
            };
            assert_eq!(query.mode(), FolderListMode::Full, "value {:?}", value);
        }
    }

    #[test]
    fn counts_serialize_under_underscore_count() {
        let value = serde_json::to_value(FolderWithCounts {
            folder: folder(),
            count: FolderCounts {
                documents: 3,
                child_folders: 2,
            },
        })
        .unwrap();

        assert_eq!(value["path"], "/reports");
        assert_eq!(value["parentId"], serde_json::Value::Null);
        assert_eq!(value["_count"]["documents"], 3);
        assert_eq!(value["_count"]["childFolders"], 2);
    }

    #[test]
    fn dataroom_item_is_tagged_by_kind() {
        let value = serde_json::to_value(DataroomItem::Folder(FolderWithDocuments {
            folder: folder(),
            documents: vec![],
        }))
        .unwrap();

        assert_eq!(value["kind"], "folder");
        assert_eq!(value["name"], "Reports");
        assert!(value["documents"].as_array().unwrap().is_empty());
    }
}
