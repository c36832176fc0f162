//! 시세 데이터 Provider 모듈.
//!
//! 외부 제공자에서 원본(미정제) 시세를 가져오는 Provider를 정의합니다.
//! 정제와 단위 변환은 게이트웨이의 책임이므로 Provider는 제공자
//! 원본 단위 그대로를 [`RawQuote`]에 담아 반환합니다.
//!
//! - [`YahooProvider`]: Yahoo Finance quoteSummary/chart API 클라이언트
//! - [`MockQuoteProvider`]: 테스트용 고정 응답 Provider

pub mod mock;
pub mod yahoo;

use async_trait::async_trait;
use screener_core::Candle;

use crate::error::Result;

pub use mock::MockQuoteProvider;
pub use yahoo::YahooProvider;

/// 외부 제공자의 원본 시세 응답.
///
/// 제공자 원본 단위 그대로이며 범위 검증 전 상태입니다.
/// 비율 지표(배당수익률, ROE, 매출 성장률)는 소수 비율(0.025 = 2.5%)로
/// 전달되고 게이트웨이에서 퍼센트로 변환됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQuote {
    /// 종목명 (식별 필드 — 없으면 응답 전체를 무효로 취급)
    pub name: Option<String>,
    /// 섹터
    pub sector: Option<String>,
    /// 시가총액
    pub market_cap: Option<f64>,
    /// PER
    pub per: Option<f64>,
    /// PBR
    pub pbr: Option<f64>,
    /// 배당수익률 (소수 비율)
    pub dividend_yield_fraction: Option<f64>,
    /// ROE (소수 비율)
    pub roe_fraction: Option<f64>,
    /// 매출 성장률 (소수 비율)
    pub revenue_growth_fraction: Option<f64>,
    /// 현재가
    pub current_price: Option<f64>,
    /// 52주 최고가
    pub fifty_two_week_high: Option<f64>,
    /// 52주 최저가
    pub fifty_two_week_low: Option<f64>,
}

/// 시세 Provider trait.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Provider 이름.
    fn name(&self) -> &str;

    /// 종목의 원본 펀더멘털 시세를 가져옵니다.
    ///
    /// 제공자가 해당 종목을 모르거나 응답이 비어 있으면 `Ok(None)`,
    /// 전송/파싱 실패면 `Err`을 반환합니다. 두 경우 모두 게이트웨이에서
    /// "데이터 없음"으로 수렴합니다.
    async fn fetch_quote(&self, ticker: &str) -> Result<Option<RawQuote>>;

    /// 종목의 과거 일봉 시계열을 가져옵니다.
    ///
    /// `period`는 제공자 형식의 기간 문자열입니다 (예: "1y", "6mo").
    async fn fetch_history(&self, ticker: &str, period: &str) -> Result<Vec<Candle>>;
}
