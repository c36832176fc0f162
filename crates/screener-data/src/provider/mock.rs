//! 테스트용 Mock Provider.

use async_trait::async_trait;
use screener_core::Candle;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{QuoteProvider, RawQuote};
use crate::error::{DataError, Result};

/// 고정 응답을 반환하는 테스트용 Provider.
///
/// 네트워크 없이 게이트웨이/스크리닝 로직을 검증할 때 사용합니다.
/// 외부 호출 횟수를 세므로 캐시 동작 검증에도 쓸 수 있습니다.
#[derive(Debug, Default)]
pub struct MockQuoteProvider {
    quotes: HashMap<String, RawQuote>,
    histories: HashMap<String, Vec<Candle>>,
    failing: HashSet<String>,
    call_count: AtomicUsize,
}

impl MockQuoteProvider {
    /// 빈 Mock Provider 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 종목에 대한 고정 시세 응답을 등록합니다.
    pub fn with_quote(mut self, ticker: impl Into<String>, quote: RawQuote) -> Self {
        self.quotes.insert(ticker.into(), quote);
        self
    }

    /// 종목에 대한 고정 과거 시계열을 등록합니다.
    pub fn with_history(mut self, ticker: impl Into<String>, candles: Vec<Candle>) -> Self {
        self.histories.insert(ticker.into(), candles);
        self
    }

    /// 항상 전송 에러를 일으키는 종목을 등록합니다.
    pub fn with_failure(mut self, ticker: impl Into<String>) -> Self {
        self.failing.insert(ticker.into());
        self
    }

    /// 지금까지의 외부 호출 횟수.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProvider for MockQuoteProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_quote(&self, ticker: &str) -> Result<Option<RawQuote>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(ticker) {
            return Err(DataError::Fetch(format!("mock failure: {}", ticker)));
        }
        Ok(self.quotes.get(ticker).cloned())
    }

    async fn fetch_history(&self, ticker: &str, _period: &str) -> Result<Vec<Candle>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(ticker) {
            return Err(DataError::Fetch(format!("mock failure: {}", ticker)));
        }
        Ok(self.histories.get(ticker).cloned().unwrap_or_default())
    }
}

/// 테스트에서 자주 쓰는 정상 응답 샘플.
///
/// 비율 지표는 제공자 원본 단위(소수 비율)라는 점에 주의.
pub fn sample_quote(name: &str, sector: &str) -> RawQuote {
    RawQuote {
        name: Some(name.to_string()),
        sector: Some(sector.to_string()),
        market_cap: Some(1_000_000_000.0),
        per: Some(12.0),
        pbr: Some(1.1),
        dividend_yield_fraction: Some(0.025),
        roe_fraction: Some(0.12),
        revenue_growth_fraction: Some(0.08),
        current_price: Some(2500.0),
        fifty_two_week_high: Some(3000.0),
        fifty_two_week_low: Some(2000.0),
    }
}
