//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `team`: 팀과 팀 멤버십
//! - `dataroom`: 데이터룸
//! - `document`: 문서 메타데이터와 데이터룸 문서 링크
//! - `folder`: 데이터룸 폴더와 목록 응답 형태
//!
//! 요청/응답 JSON은 camelCase 필드 이름을 사용합니다. (`parentId`, `orderIndex` 등)

pub mod dataroom;
pub mod document;
pub mod folder;
pub mod team;

pub use dataroom::*;
pub use document::*;
pub use folder::*;
pub use team::*;
