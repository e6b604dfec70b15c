//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `datarooms`: 데이터룸 생성/조회
//! - `documents`: 문서 메타데이터와 데이터룸 문서 링크
//! - `folders`: 데이터룸 폴더 조회/생성, 하위 트리 개수 계산
//! - `teams`: 팀 생성과 멤버십 확인

pub mod datarooms;
pub mod documents;
pub mod folders;
pub mod teams;

pub use datarooms::*;
pub use documents::*;
pub use folders::*;
pub use teams::*;
