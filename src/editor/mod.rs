//! # 폼 편집 패턴
//!
//! 모든 관리 화면(채용공고, 장학금, 서비스, 팀원 ...)이 공유하는 편집 흐름입니다.
//!
//! 각 하위 모듈:
//! - `entity`: 엔티티별 차이(필드, 필수값, 원격 이름)를 표현하는 트레이트
//! - `draft`: 불러오기/필드 수정/검증/저장을 담당하는 초안 컨트롤러
//! - `confirm`: 삭제 전 확인 단계
//! - `screen`: 목록 + 편집 + 삭제 확인을 묶은 화면 단위

pub mod confirm;
pub mod draft;
pub mod entity;
pub mod screen;

pub use confirm::DeleteGate;
pub use draft::{Editor, Phase};
pub use entity::{normalize_remote, require, Entity};
pub use screen::CrudScreen;
