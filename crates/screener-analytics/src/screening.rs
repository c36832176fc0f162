//! 스크리닝 오케스트레이터.
//!
//! 시장 유니버스를 게이트웨이로 순회하며 종목별 프리셋 스코어를 계산하고
//! 내림차순으로 정렬합니다. 개별 종목의 조회 실패는 해당 종목만 건너뛰며
//! 일괄 작업 전체를 중단시키지 않습니다.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use screener_core::{Market, ScorePreset, StockInfo};
use screener_data::{market_tickers, MarketDataGateway, QuoteProvider};

use crate::scoring::calculate_preset_score;

/// 스크리닝 결과 레코드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenedStock {
    /// 티커
    pub ticker: String,
    /// 종목명
    pub name: String,
    /// 프리셋 스코어
    pub score: f64,
    /// PER
    pub per: Option<f64>,
    /// PBR
    pub pbr: Option<f64>,
    /// 배당수익률 (%)
    pub dividend_yield: Option<f64>,
    /// ROE (%)
    pub roe: Option<f64>,
    /// 매출 성장률 (%)
    pub revenue_growth: Option<f64>,
}

impl ScreenedStock {
    fn from_info(info: StockInfo, score: f64) -> Self {
        Self {
            ticker: info.ticker,
            name: info.name,
            score,
            per: info.per,
            pbr: info.pbr,
            dividend_yield: info.dividend_yield,
            roe: info.roe,
            revenue_growth: info.revenue_growth,
        }
    }
}

/// 티커 목록을 조회·스코어링합니다. 조회 실패 종목은 건너뜁니다.
async fn fetch_and_score<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    tickers: &[&str],
    preset: ScorePreset,
) -> Vec<ScreenedStock> {
    let mut results = Vec::with_capacity(tickers.len());

    for ticker in tickers {
        let Some(info) = gateway.get_stock_info(ticker).await else {
            debug!(ticker = ticker, "데이터 없음, 건너뜀");
            continue;
        };
        let score = calculate_preset_score(&info, preset);
        results.push(ScreenedStock::from_info(info, score));
    }

    results
}

/// 스코어 내림차순 정렬. 동점은 조회 순서를 유지합니다 (안정 정렬).
fn sort_by_score_desc(results: &mut [ScreenedStock]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// 스크리닝을 실행하고 상위 N 종목을 반환합니다.
///
/// 시장 유니버스 전체를 조회·스코어링한 뒤 스코어 내림차순으로
/// 정렬하고 `top_n`개로 자릅니다.
pub async fn run_screening<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    market: Market,
    preset: ScorePreset,
    top_n: usize,
) -> Vec<ScreenedStock> {
    let tickers = market_tickers(market);
    info!(
        market = %market,
        preset = %preset,
        universe = tickers.len(),
        "스크리닝 시작"
    );

    let mut results = fetch_and_score(gateway, tickers, preset).await;
    sort_by_score_desc(&mut results);
    results.truncate(top_n);

    info!(market = %market, matched = results.len(), "스크리닝 완료");
    results
}

/// 최소 스코어 기준 필터링.
///
/// 스코어가 `min_score` 이상인 종목만 내림차순으로 반환합니다.
/// 상위 N 잘라내기는 하지 않습니다.
pub async fn screen_by_criteria<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    tickers: &[&str],
    min_score: f64,
    preset: ScorePreset,
) -> Vec<ScreenedStock> {
    let mut results = fetch_and_score(gateway, tickers, preset).await;
    results.retain(|r| r.score >= min_score);
    sort_by_score_desc(&mut results);
    results
}
