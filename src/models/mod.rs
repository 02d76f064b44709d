//! # 데이터 모델 모듈
//!
//! 관리 화면에서 편집하는 레코드 구조체들을 정의합니다.
//! 각 하위 모듈은 한 종류의 원격 레코드를 담당합니다:
//! - `job`: 채용공고
//! - `scholarship`: 장학금
//! - `service`, `team`, `portfolio`, `organization`: 회사 소개 콘텐츠
//! - `setting`: 사이트 설정 (key로 식별)
//! - `tool`, `curriculum`, `link`: 자료 모음
//!
//! 공통 타입:
//! - `string_list`: 배열/JSON 문자열/쉼표 문자열 어느 쪽으로 와도 읽는 문자열 목록
//! - `id`: 숫자 또는 문자열 ID
//!
//! `pub use`로 재공개하므로 `crate::models::job::Job` 대신 `crate::models::Job`으로 접근할 수 있습니다.

pub mod curriculum;
pub(crate) mod flex;
pub mod id;
pub mod job;
pub mod link;
pub mod organization;
pub mod portfolio;
pub mod scholarship;
pub mod service;
pub mod setting;
pub mod string_list;
pub mod team;
pub mod tool;

pub use curriculum::CurriculumModule;
pub use id::EntityId;
pub use job::Job;
pub use link::ImportantLink;
pub use organization::Organization;
pub use portfolio::PortfolioItem;
pub use scholarship::Scholarship;
pub use service::Service;
pub use setting::Setting;
pub use string_list::{RawStringList, StringList};
pub use team::TeamMember;
pub use tool::Tool;
