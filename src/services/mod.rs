//! # 비즈니스 로직 모듈
//!
//! - `folder_path`: 폴더 이름 → slug 경로 변환, 이름 중복 시 후보 이름 생성
//! - `folder_tree`: 폴더/문서 목록을 조회 모드별 응답으로 조립, 하위 트리 개수 계산

pub mod folder_path;
pub mod folder_tree;

pub use folder_path::*;
