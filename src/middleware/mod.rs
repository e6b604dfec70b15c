//! # 미들웨어 / 추출자(Extractor)
//!
//! - `auth`: Bearer 토큰 → `AuthUser` 추출
//! - `team`: 팀 멤버십과 데이터룸 소유 팀 확인

pub mod auth;
pub mod team;
