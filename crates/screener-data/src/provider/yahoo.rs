//! Yahoo Finance API 클라이언트.
//!
//! quoteSummary(v10) 엔드포인트에서 펀더멘털 지표를,
//! chart(v8) 엔드포인트에서 과거 일봉을 수집합니다.
//! 한국/일본 주식은 접미사 형식으로 조회합니다 (예: "005930.KS", "7203.T").
//!
//! 응답은 엔드포인트별 DTO로 역직렬화한 뒤 필드 단위로 추출합니다.
//! 수치 필드는 `{"raw": ..., "fmt": "..."}` 래핑 형식입니다.

use chrono::DateTime;
use serde::Deserialize;
use tracing::debug;

use async_trait::async_trait;
use screener_core::Candle;

use super::{QuoteProvider, RawQuote};
use crate::error::{DataError, Result};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const QUOTE_SUMMARY_MODULES: &str =
    "price,summaryDetail,defaultKeyStatistics,financialData,assetProfile";

/// Yahoo Finance Provider.
#[derive(Debug, Clone)]
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooProvider {
    /// 새 Provider 생성.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs)
    }

    /// 기본 URL을 지정하여 생성합니다 (테스트용 mock 서버 주입 지원).
    pub fn with_base_url(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| DataError::Connection(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn fetch_quote(&self, ticker: &str) -> Result<Option<RawQuote>> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url, ticker, QUOTE_SUMMARY_MODULES
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DataError::Fetch(format!(
                "quoteSummary {} returned status {}",
                ticker,
                response.status()
            )));
        }

        let body: QuoteSummaryResponse = response.json().await?;
        let Some(result) = body
            .quote_summary
            .and_then(|qs| qs.result)
            .and_then(|r| r.into_iter().next())
        else {
            debug!(ticker = ticker, "quoteSummary 결과 없음");
            return Ok(None);
        };

        Ok(Some(extract_raw_quote(result)))
    }

    async fn fetch_history(&self, ticker: &str, period: &str) -> Result<Vec<Candle>> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, ticker, period
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DataError::Fetch(format!(
                "chart {} returned status {}",
                ticker,
                response.status()
            )));
        }

        let body: ChartResponse = response.json().await?;
        let Some(result) = body
            .chart
            .and_then(|c| c.result)
            .and_then(|r| r.into_iter().next())
        else {
            debug!(ticker = ticker, "chart 결과 없음");
            return Ok(Vec::new());
        };

        Ok(to_candles(result))
    }
}

/// quoteSummary 결과에서 원본 시세를 추출합니다.
fn extract_raw_quote(result: QuoteSummaryResult) -> RawQuote {
    let price = result.price.unwrap_or_default();
    let summary = result.summary_detail.unwrap_or_default();
    let key_stats = result.default_key_statistics.unwrap_or_default();
    let financial = result.financial_data.unwrap_or_default();
    let profile = result.asset_profile.unwrap_or_default();

    RawQuote {
        name: price.long_name.or(price.short_name),
        sector: profile.sector,
        market_cap: price.market_cap.raw.or(summary.market_cap.raw),
        per: summary.trailing_pe.raw,
        pbr: key_stats.price_to_book.raw,
        dividend_yield_fraction: summary.dividend_yield.raw,
        roe_fraction: financial.return_on_equity.raw,
        revenue_growth_fraction: financial.revenue_growth.raw,
        current_price: financial.current_price.raw.or(price.regular_market_price.raw),
        fifty_two_week_high: summary.fifty_two_week_high.raw,
        fifty_two_week_low: summary.fifty_two_week_low.raw,
    }
}

/// chart 결과를 일봉 목록으로 변환합니다. 값이 비어 있는 행은 건너뜁니다.
fn to_candles(result: ChartResult) -> Vec<Candle> {
    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result
        .indicators
        .and_then(|i| i.quote)
        .and_then(|q| q.into_iter().next())
        .unwrap_or_default();

    timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let date = DateTime::from_timestamp(ts, 0)?.date_naive();
            Some(Candle {
                date,
                open: *quote.open.get(i)?.as_ref()?,
                high: *quote.high.get(i)?.as_ref()?,
                low: *quote.low.get(i)?.as_ref()?,
                close: *quote.close.get(i)?.as_ref()?,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
            })
        })
        .collect()
}

// =============================================================================
// 응답 DTO
// =============================================================================

/// `{"raw": ..., "fmt": "..."}` 형식의 수치 래퍼.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct RawValue {
    #[serde(default)]
    raw: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: Option<QuoteSummaryBody>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteSummaryResult {
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "defaultKeyStatistics")]
    default_key_statistics: Option<KeyStatisticsModule>,
    #[serde(rename = "financialData")]
    financial_data: Option<FinancialDataModule>,
    #[serde(rename = "assetProfile")]
    asset_profile: Option<AssetProfileModule>,
}

#[derive(Debug, Default, Deserialize)]
struct PriceModule {
    #[serde(rename = "shortName", default)]
    short_name: Option<String>,
    #[serde(rename = "longName", default)]
    long_name: Option<String>,
    #[serde(rename = "regularMarketPrice", default)]
    regular_market_price: RawValue,
    #[serde(rename = "marketCap", default)]
    market_cap: RawValue,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryDetailModule {
    #[serde(rename = "trailingPE", default)]
    trailing_pe: RawValue,
    #[serde(rename = "dividendYield", default)]
    dividend_yield: RawValue,
    #[serde(rename = "fiftyTwoWeekHigh", default)]
    fifty_two_week_high: RawValue,
    #[serde(rename = "fiftyTwoWeekLow", default)]
    fifty_two_week_low: RawValue,
    #[serde(rename = "marketCap", default)]
    market_cap: RawValue,
}

#[derive(Debug, Default, Deserialize)]
struct KeyStatisticsModule {
    #[serde(rename = "priceToBook", default)]
    price_to_book: RawValue,
}

#[derive(Debug, Default, Deserialize)]
struct FinancialDataModule {
    #[serde(rename = "returnOnEquity", default)]
    return_on_equity: RawValue,
    #[serde(rename = "revenueGrowth", default)]
    revenue_growth: RawValue,
    #[serde(rename = "currentPrice", default)]
    current_price: RawValue,
}

#[derive(Debug, Default, Deserialize)]
struct AssetProfileModule {
    #[serde(default)]
    sector: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Option<ChartBody>,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Option<ChartIndicators>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartIndicators {
    quote: Option<Vec<ChartQuote>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<i64>>,
}

// =============================================================================
// 테스트
// =============================================================================
