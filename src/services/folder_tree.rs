//! # 폴더 트리 조립
//!
//! DB에서 한 번에 읽어온 폴더 목록과 문서 링크 목록을
//! `GET .../folders` 조회 모드별 응답 형태로 조립합니다.
//! 입력 목록의 정렬 순서는 결과에서도 그대로 유지됩니다.

use std::collections::HashMap;

use futures::future::try_join_all;
use sqlx::SqlitePool;

use crate::{db, error::AppError, models::*};

/// 문서 링크를 (루트 문서, 폴더 ID별 문서)로 나눕니다.
fn split_by_folder(
    documents: Vec<DataroomDocument>,
) -> (Vec<DataroomDocument>, HashMap<String, Vec<DataroomDocument>>) {
    let mut root = Vec::new();
    let mut by_folder: HashMap<String, Vec<DataroomDocument>> = HashMap::new();

    for document in documents {
        match document.folder_id.clone() {
            Some(folder_id) => by_folder.entry(folder_id).or_default().push(document),
            None => root.push(document),
        }
    }

    (root, by_folder)
}

fn with_documents(
    folder: DataroomFolder,
    by_folder: &HashMap<String, Vec<DataroomDocument>>,
) -> FolderWithDocuments {
    let documents = by_folder.get(&folder.id).cloned().unwrap_or_default();
    FolderWithDocuments { folder, documents }
}

/// `?include_documents=true`: 루트 문서 링크 뒤에 모든 폴더(각자의 문서 포함)를 붙입니다.
pub fn flat_items(
    folders: Vec<DataroomFolder>,
    documents: Vec<DataroomDocument>,
) -> Vec<DataroomItem> {
    let (root, by_folder) = split_by_folder(documents);

    root.into_iter()
        .map(DataroomItem::Document)
        .chain(
            folders
                .into_iter()
                .map(|folder| DataroomItem::Folder(with_documents(folder, &by_folder))),
        )
        .collect()
}

/// 기본 모드: 모든 폴더에 바로 아래 문서와 한 단계 아래 자식 폴더를 붙입니다.
pub fn full_tree(
    folders: Vec<DataroomFolder>,
    documents: Vec<DataroomDocument>,
) -> Vec<FolderWithChildren> {
    let (_, by_folder) = split_by_folder(documents);

    let mut children_of: HashMap<&str, Vec<&DataroomFolder>> = HashMap::new();
    for folder in &folders {
        if let Some(parent_id) = folder.parent_id.as_deref() {
            children_of.entry(parent_id).or_default().push(folder);
        }
    }

    folders
        .iter()
        .map(|folder| {
            let child_folders = children_of
                .get(folder.id.as_str())
                .map(|children| {
                    children
                        .iter()
                        .map(|child| with_documents((*child).clone(), &by_folder))
                        .collect()
                })
                .unwrap_or_default();

            FolderWithChildren {
                documents: by_folder.get(&folder.id).cloned().unwrap_or_default(),
                folder: folder.clone(),
                child_folders,
            }
        })
        .collect()
}

/// 폴더마다 하위 트리 개수를 붙입니다.
///
/// 폴더끼리는 서로 의존하지 않으므로 개수 쿼리를 동시에 실행하고 모두 끝날 때까지 기다립니다.
/// 하나라도 실패하면 전체가 실패합니다.
pub async fn with_counts(
    pool: &SqlitePool,
    folders: Vec<DataroomFolder>,
) -> Result<Vec<FolderWithCounts>, AppError> {
    let counts = try_join_all(
        folders
            .iter()
            .map(|folder| db::count_folder_contents(pool, &folder.id)),
    )
    .await?;

    Ok(folders
        .into_iter()
        .zip(counts)
        .map(|(folder, count)| FolderWithCounts { folder, count })
        .collect())
}
