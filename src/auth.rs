//! # 인증 컨텍스트
//!
//! 관리자 API 호출에 붙일 Bearer 토큰의 생명주기를 관리합니다.
//!
//! - `AuthSession`: 로그인 시 토큰 설정, 로그아웃/만료 시 해제
//! - `RequestContext`: 요청마다 명시적으로 전달되는 인증 정보
//!
//! 토큰을 전역 저장소에서 몰래 읽어오지 않고, 모든 API 호출에
//! `&RequestContext`를 매개변수로 넘깁니다. 테스트에서는 토큰 없는 컨텍스트나
//! 임의의 토큰을 가진 컨텍스트를 그대로 만들어 쓸 수 있습니다.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// JWT 페이로드에서 클라이언트가 관심 있는 클레임
///
/// 서버가 넣는 다른 클레임은 무시합니다.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Claims {
    /// 사용자 ID
    #[serde(default)]
    pub sub: Option<String>,
    /// 만료 시각 (Unix 초)
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
}

/// 로그인 세션. 저장된 관리자 토큰과 그 클레임
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    token: Option<String>,
    claims: Option<Claims>,
}

impl AuthSession {
    /// 로그아웃 상태의 세션
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰으로 로그인 상태를 만듭니다.
    ///
    /// JWT가 아닌 토큰도 받아들입니다. 그런 토큰은 클라이언트에서 만료를 판단할 수 없으므로
    /// 서버가 401을 줄 때까지 유효한 것으로 취급합니다.
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.claims = read_claims(&token);
        if self.claims.is_none() {
            tracing::debug!("admin token is not a JWT; expiry is unknown");
        }
        self.token = Some(token);
        tracing::info!("admin session started");
    }

    /// 토큰을 지웁니다.
    pub fn logout(&mut self) {
        if self.token.take().is_some() {
            tracing::info!("admin session cleared");
        }
        self.claims = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// 주어진 시각 기준으로 토큰이 만료되었는지 확인합니다.
    ///
    /// 토큰이 없으면 만료된 것으로 보지 않습니다 (애초에 로그인하지 않은 상태).
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.claims.as_ref().and_then(|c| c.exp) {
            Some(exp) => exp <= now.timestamp(),
            None => false,
        }
    }

    /// 현재 시각 기준 요청 컨텍스트를 만듭니다.
    pub fn context(&self) -> RequestContext {
        self.context_at(Utc::now())
    }

    /// 주어진 시각 기준 요청 컨텍스트를 만듭니다.
    ///
    /// 만료된 토큰은 붙이지 않습니다. 보호된 엔드포인트는 401로 응답하고,
    /// 화면은 그 메시지를 그대로 보여줍니다.
    pub fn context_at(&self, now: DateTime<Utc>) -> RequestContext {
        if self.is_expired(now) {
            tracing::warn!("admin token expired; sending request without credentials");
            return RequestContext::anonymous();
        }
        RequestContext {
            token: self.token.clone(),
        }
    }
}

/// 요청 하나에 필요한 인증 정보
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    token: Option<String>,
}

impl RequestContext {
    /// 토큰 없는 컨텍스트 (공개 엔드포인트용)
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` 헤더 값 (`Bearer <token>`)
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

/// 서명 검증 없이 JWT 클레임만 읽습니다.
///
/// 비밀키는 서버에만 있으므로 클라이언트는 서명을 검증할 수 없습니다.
/// 여기서 읽은 exp는 "보내봐야 거절될 토큰인지" 판단하는 데만 씁니다.
fn read_claims(token: &str) -> Option<Claims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    // aud가 있는 토큰도 읽어야 만료를 판단할 수 있습니다.
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .ok()
}
