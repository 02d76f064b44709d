//! # 관리자 API 엔드포인트
//!
//! | 리소스 | 경로 |
//! |--------|------|
//! | 채용공고 | /api/admin/jobs |
//! | 기관 | /api/admin/organizations |
//! | 포트폴리오 | /api/admin/portfolio |
//! | 서비스 | /api/admin/services |
//! | 팀원 | /api/admin/team |
//! | 장학금 | /api/admin/scholarships |
//! | 설정 | /api/admin/settings |
//! | 도구 | /api/admin/tools |
//! | 커리큘럼 모듈 | /api/admin/curriculum/modules |
//! | 중요 링크 | /api/admin/important-links |

use std::fmt::Display;

use url::Url;

/// 관리 화면이 다루는 원격 컬렉션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Jobs,
    Organizations,
    Portfolio,
    Services,
    Team,
    Scholarships,
    Settings,
    Tools,
    CurriculumModules,
    ImportantLinks,
}

impl Resource {
    /// 컬렉션 경로
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Jobs => "/api/admin/jobs",
            Resource::Organizations => "/api/admin/organizations",
            Resource::Portfolio => "/api/admin/portfolio",
            Resource::Services => "/api/admin/services",
            Resource::Team => "/api/admin/team",
            Resource::Scholarships => "/api/admin/scholarships",
            Resource::Settings => "/api/admin/settings",
            Resource::Tools => "/api/admin/tools",
            Resource::CurriculumModules => "/api/admin/curriculum/modules",
            Resource::ImportantLinks => "/api/admin/important-links",
        }
    }

    /// 단일 레코드 경로 (예: "/api/admin/jobs/12")
    ///
    /// 설정 키처럼 문자열인 ID는 경로 세그먼트 하나로 퍼센트 인코딩합니다.
    pub fn item_path(&self, id: impl Display) -> String {
        format!("{}/{}", self.path(), encode_segment(&id.to_string()))
    }

    /// 단일 레코드 응답에서 레코드가 들어 있을 수 있는 키 (예: `data.job`)
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Jobs => "job",
            Resource::Organizations => "organization",
            Resource::Portfolio => "portfolio",
            Resource::Services => "service",
            Resource::Team => "member",
            Resource::Scholarships => "scholarship",
            Resource::Settings => "setting",
            Resource::Tools => "tool",
            Resource::CurriculumModules => "module",
            Resource::ImportantLinks => "link",
        }
    }
}

/// `/`, `?`, `#`, 공백 같은 문자를 경로 세그먼트용으로 인코딩합니다.
fn encode_segment(segment: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return segment.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(segment);
    }
    url.path().trim_start_matches('/').to_string()
}

pub const JOB_CATEGORIES: &str = "/api/admin/jobs/categories";
pub const JOB_STATS: &str = "/api/admin/jobs/stats";
pub const SCHOLARSHIP_REGIONS: &str = "/api/scholarships/regions";
pub const SCHOLARSHIP_EDUCATION_LEVELS: &str = "/api/scholarships/education-levels";
pub const TEAM_PHOTO_UPLOAD: &str = "/api/admin/team/upload";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_appends_id() {
        assert_eq!(Resource::Jobs.item_path(12), "/api/admin/jobs/12");
        assert_eq!(
            Resource::ImportantLinks.item_path("abc"),
            "/api/admin/important-links/abc"
        );
    }

    #[test]
    fn text_ids_are_encoded_as_one_segment() {
        assert_eq!(
            Resource::Settings.item_path("theme#dark?v=1"),
            "/api/admin/settings/theme%23dark%3Fv=1"
        );
        assert_eq!(
            Resource::Settings.item_path("a/b c"),
            "/api/admin/settings/a%2Fb%20c"
        );
    }
}
