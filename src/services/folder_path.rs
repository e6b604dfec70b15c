//! # 폴더 경로 유틸리티
//!
//! 폴더 이름으로부터 데이터룸 안에서 쓰이는 slug 경로를 만드는 순수 함수들입니다.
//!
//! 이 모듈의 함수들:
//! - `normalize_path()`: 클라이언트가 보낸 경로의 앞뒤 "/" 제거
//! - `parent_folder_path()`: 부모 폴더의 정규 경로 ("/" 또는 "/a/b")
//! - `is_sluggable()`: 이름이 빈 slug가 되지 않는지 확인
//! - `child_folder_path()`: 부모 경로 + slug(이름)
//! - `candidate_name()`: 이름이 겹칠 때 붙이는 " (N)" 변형
//!
//! # 예시
//! ```ignore
//! parent_folder_path(Some("finance")) → "/finance"
//! child_folder_path("/finance", "Q3 Reports") → "/finance/q3-reports"
//! candidate_name("Reports", 2) → "Reports (2)"
//! ```

/// 같은 부모 아래에서 이름 변형을 시도하는 최대 횟수.
/// 원래 이름 1번 + " (1)" ~ " (50)" 50번, 총 51개의 후보를 시도합니다.
pub const MAX_NAME_RETRIES: u32 = 50;

/// 경로 앞뒤의 "/"와 공백을 제거합니다. 남는 것이 없으면 None을 반환합니다.
pub fn normalize_path(raw: Option<&str>) -> Option<String> {
    raw.map(|p| p.trim().trim_matches('/'))
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

/// 부모 폴더의 정규 경로를 계산합니다.
///
/// 경로가 없으면 데이터룸 루트를 뜻하는 "/"를 반환합니다.
pub fn parent_folder_path(path: Option<&str>) -> String {
    match normalize_path(path) {
        Some(p) => format!("/{}", p),
        None => "/".to_string(),
    }
}

/// slug로 바꿨을 때 남는 글자가 있는지 확인합니다. ("!!!"처럼 모두 지워지는 이름은 false)
pub fn is_sluggable(name: &str) -> bool {
    !slug::slugify(name).is_empty()
}

/// 부모 경로 아래에 `name`으로 만들 폴더의 경로를 계산합니다.
pub fn child_folder_path(parent_folder_path: &str, name: &str) -> String {
    format!(
        "{}/{}",
        parent_folder_path.trim_end_matches('/'),
        slug::slugify(name)
    )
}

/// `attempt`번째 후보 이름. 0이면 원래 이름 그대로입니다.
pub fn candidate_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        name.to_string()
    } else {
        format!("{} ({})", name, attempt)
    }
}
