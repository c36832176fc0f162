//! 시장 데이터 게이트웨이.
//!
//! Provider, TTL 캐시, 레이트 리미터를 조합하여 정제된 종목 스냅샷을
//! 제공합니다. 단위 변환과 범위 검증은 이 게이트웨이에서 단 한 번
//! 수행되며, 하위 컴포넌트는 결과를 재검증하지 않습니다.
//!
//! 레이트 리미터와 캐시는 게이트웨이가 소유한 가변 상태이므로
//! 모든 조회 메서드는 `&mut self`를 요구합니다. 동시 호출이 필요하면
//! 게이트웨이 전체를 뮤텍스로 감싸야 호출 간격 보장이 유지됩니다.

use tracing::{debug, warn};

use screener_core::{Candle, DataConfig, StockInfo};

use crate::cache::TtlCache;
use crate::provider::QuoteProvider;
use crate::rate_limit::RateLimiter;
use crate::sanitize::{sanitize_value, MAX_DIVIDEND_YIELD, MAX_PER, MIN_PBR, MIN_PER};

/// 기본 캐시 TTL (시간).
const DEFAULT_CACHE_TTL_HOURS: u64 = 24;
/// 기본 호출 간격 (밀리초).
const DEFAULT_RATE_LIMIT_MS: u64 = 1000;

/// 캐시/레이트 리미트/정제를 갖춘 시장 데이터 게이트웨이.
#[derive(Debug)]
pub struct MarketDataGateway<P> {
    provider: P,
    quote_cache: TtlCache<StockInfo>,
    history_cache: TtlCache<Vec<Candle>>,
    limiter: RateLimiter,
}

impl<P: QuoteProvider> MarketDataGateway<P> {
    /// 기본 설정(24시간 TTL, 1초 간격)으로 게이트웨이를 생성합니다.
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, DEFAULT_CACHE_TTL_HOURS, DEFAULT_RATE_LIMIT_MS)
    }

    /// TTL과 호출 간격을 지정하여 생성합니다.
    pub fn with_settings(provider: P, cache_ttl_hours: u64, rate_limit_ms: u64) -> Self {
        Self {
            provider,
            quote_cache: TtlCache::new(cache_ttl_hours),
            history_cache: TtlCache::new(cache_ttl_hours),
            limiter: RateLimiter::from_millis(rate_limit_ms),
        }
    }

    /// 설정 구조체에서 게이트웨이를 생성합니다.
    pub fn from_config(provider: P, config: &DataConfig) -> Self {
        Self::with_settings(provider, config.cache_ttl_hours, config.rate_limit_ms)
    }

    /// 종목 스냅샷을 조회합니다.
    ///
    /// 유효한 캐시가 있으면 그대로 반환하고, 없으면 레이트 리미트 후
    /// 외부에서 가져와 정제하고 캐시합니다. 제공자 실패, 빈 응답,
    /// 식별 필드(종목명) 누락은 모두 `None`으로 수렴하며 에러를 내지
    /// 않습니다.
    pub async fn get_stock_info(&mut self, ticker: &str) -> Option<StockInfo> {
        if let Some(cached) = self.quote_cache.get(ticker) {
            debug!(ticker = ticker, "시세 캐시 적중");
            return Some(cached);
        }

        self.limiter.acquire().await;

        let raw = match self.provider.fetch_quote(ticker).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(ticker = ticker, "제공자 응답 없음");
                return None;
            }
            Err(e) => {
                warn!(ticker = ticker, error = %e, "시세 조회 실패");
                return None;
            }
        };

        // 종목명은 식별 필드다. 없으면 응답 전체를 무효로 취급한다.
        let Some(name) = raw.name else {
            debug!(ticker = ticker, "식별 필드 누락, 응답 무효 처리");
            return None;
        };

        let info = StockInfo {
            ticker: ticker.to_string(),
            name,
            sector: raw.sector.unwrap_or_default(),
            market_cap: raw.market_cap.unwrap_or(0.0),
            per: sanitize_value(raw.per, Some(MIN_PER), Some(MAX_PER)),
            pbr: sanitize_value(raw.pbr, Some(MIN_PBR), None),
            dividend_yield: sanitize_value(
                raw.dividend_yield_fraction.map(|v| v * 100.0),
                None,
                Some(MAX_DIVIDEND_YIELD),
            ),
            roe: sanitize_value(raw.roe_fraction.map(|v| v * 100.0), None, None),
            revenue_growth: sanitize_value(
                raw.revenue_growth_fraction.map(|v| v * 100.0),
                None,
                None,
            ),
            current_price: sanitize_value(raw.current_price, None, None),
            fifty_two_week_high: sanitize_value(raw.fifty_two_week_high, None, None),
            fifty_two_week_low: sanitize_value(raw.fifty_two_week_low, None, None),
        };

        self.quote_cache.insert(ticker, info.clone());
        Some(info)
    }

    /// 과거 일봉 시계열을 조회합니다.
    ///
    /// 시세 조회와 동일한 캐시/레이트 리미트 규칙을 따르며,
    /// 실패 시 에러 대신 빈 목록을 반환합니다.
    pub async fn get_historical_data(&mut self, ticker: &str, period: &str) -> Vec<Candle> {
        let cache_key = format!("{}_hist_{}", ticker, period);
        if let Some(cached) = self.history_cache.get(&cache_key) {
            debug!(ticker = ticker, period = period, "과거 시세 캐시 적중");
            return cached;
        }

        self.limiter.acquire().await;

        match self.provider.fetch_history(ticker, period).await {
            Ok(candles) => {
                self.history_cache.insert(cache_key, candles.clone());
                candles
            }
            Err(e) => {
                warn!(ticker = ticker, period = period, error = %e, "과거 시세 조회 실패");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::{sample_quote, MockQuoteProvider};
    use crate::provider::RawQuote;
    use chrono::NaiveDate;

    fn gateway_with(provider: MockQuoteProvider) -> MarketDataGateway<MockQuoteProvider> {
        MarketDataGateway::new(provider)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_sanitizes_and_converts_units() {
        let provider =
            MockQuoteProvider::new().with_quote("7203.T", sample_quote("Toyota", "Consumer Cyclical"));
        let mut gateway = gateway_with(provider);

        let info = gateway.get_stock_info("7203.T").await.unwrap();
        assert_eq!(info.name, "Toyota");
        assert_eq!(info.per, Some(12.0));
        // 소수 비율 → 퍼센트 변환
        assert_eq!(info.dividend_yield, Some(2.5));
        assert_eq!(info.roe, Some(12.0));
        assert_eq!(info.revenue_growth, Some(8.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_lookup_served_from_cache() {
        let provider = MockQuoteProvider::new().with_quote("AAPL", sample_quote("Apple", "Technology"));
        let mut gateway = gateway_with(provider);

        let first = gateway.get_stock_info("AAPL").await.unwrap();
        let second = gateway.get_stock_info("AAPL").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(gateway.provider.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_error_collapses_to_none() {
        let provider = MockQuoteProvider::new().with_failure("BAD");
        let mut gateway = gateway_with(provider);

        assert!(gateway.get_stock_info("BAD").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_ticker_is_none() {
        let mut gateway = gateway_with(MockQuoteProvider::new());
        assert!(gateway.get_stock_info("NOPE").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_identity_field_invalidates_response() {
        let quote = RawQuote {
            name: None,
            current_price: Some(100.0),
            ..Default::default()
        };
        let provider = MockQuoteProvider::new().with_quote("ANON", quote);
        let mut gateway = gateway_with(provider);

        assert!(gateway.get_stock_info("ANON").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_metrics_become_absent() {
        let mut quote = sample_quote("Weird Corp", "Technology");
        quote.per = Some(300.0); // > 200
        quote.pbr = Some(0.05); // < 0.1
        quote.dividend_yield_fraction = Some(0.2); // 20% > 15%
        let provider = MockQuoteProvider::new().with_quote("WEIRD", quote);
        let mut gateway = gateway_with(provider);

        let info = gateway.get_stock_info("WEIRD").await.unwrap();
        assert!(info.per.is_none());
        assert!(info.pbr.is_none());
        assert!(info.dividend_yield.is_none());
        // 다른 지표는 영향받지 않는다
        assert_eq!(info.roe, Some(12.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_ticker_not_cached() {
        let provider = MockQuoteProvider::new().with_failure("BAD");
        let mut gateway = gateway_with(provider);

        assert!(gateway.get_stock_info("BAD").await.is_none());
        assert!(gateway.get_stock_info("BAD").await.is_none());
        // 실패 응답은 캐시되지 않으므로 매번 외부 호출이 발생한다
        assert_eq!(gateway.provider.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_history_cache_key_includes_period() {
        let candles = vec![Candle {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: 100.0,
            high: 110.0,
            low: 95.0,
            close: 105.0,
            volume: 10_000,
        }];
        let provider = MockQuoteProvider::new().with_history("7203.T", candles.clone());
        let mut gateway = gateway_with(provider);

        assert_eq!(gateway.get_historical_data("7203.T", "1y").await, candles);
        assert_eq!(gateway.get_historical_data("7203.T", "1y").await, candles);
        // 같은 종목이라도 기간이 다르면 별도 캐시 키이므로 다시 조회한다
        assert_eq!(gateway.get_historical_data("7203.T", "6mo").await, candles);
        assert_eq!(gateway.provider.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_history_failure_is_empty() {
        let provider = MockQuoteProvider::new().with_failure("BAD");
        let mut gateway = gateway_with(provider);

        assert!(gateway.get_historical_data("BAD", "1y").await.is_empty());
    }
}
