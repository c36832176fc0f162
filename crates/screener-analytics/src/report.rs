//! 개별 종목 분석 리포트.
//!
//! 지표별 스코어와 종합 밸류 스코어, 판정 등급을 담은 평문 레코드를
//! 생성합니다. 표 형식/색상 등의 표현은 호출자(CLI)의 책임입니다.

use serde::{Deserialize, Serialize};

use screener_core::{ScreenerError, ScreenerResult, StockInfo};
use screener_data::{MarketDataGateway, QuoteProvider};

use crate::scoring::{
    calculate_value_score, score_dividend_yield, score_pbr, score_per, score_revenue_growth,
    score_roe,
};

/// 밸류 스코어에 따른 판정 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// 매우 저평가 (80 이상)
    VeryUndervalued,
    /// 저평가 (60 이상)
    Undervalued,
    /// 적정 (40 이상)
    Fair,
    /// 고평가 (20 이상)
    Overvalued,
    /// 매우 고평가 (20 미만)
    VeryOvervalued,
}

impl Rating {
    /// 밸류 스코어에서 판정 등급을 결정합니다.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Rating::VeryUndervalued
        } else if score >= 60.0 {
            Rating::Undervalued
        } else if score >= 40.0 {
            Rating::Fair
        } else if score >= 20.0 {
            Rating::Overvalued
        } else {
            Rating::VeryOvervalued
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Rating::VeryUndervalued => "매우 저평가",
            Rating::Undervalued => "저평가",
            Rating::Fair => "적정",
            Rating::Overvalued => "고평가",
            Rating::VeryOvervalued => "매우 고평가",
        };
        f.write_str(label)
    }
}

/// 개별 종목 분석 리포트.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReport {
    /// 종목 스냅샷
    pub info: StockInfo,
    /// PER 스코어 (25점 만점)
    pub per_score: f64,
    /// PBR 스코어 (25점 만점)
    pub pbr_score: f64,
    /// 배당수익률 스코어 (20점 만점)
    pub dividend_score: f64,
    /// ROE 스코어 (15점 만점)
    pub roe_score: f64,
    /// 매출 성장률 스코어 (15점 만점)
    pub growth_score: f64,
    /// 밸류 스코어 종합 (100점 만점)
    pub value_score: f64,
    /// 판정 등급
    pub rating: Rating,
}

impl StockReport {
    /// 스냅샷에서 리포트를 생성합니다.
    pub fn from_info(info: StockInfo) -> Self {
        let value_score = calculate_value_score(&info);
        Self {
            per_score: score_per(info.per),
            pbr_score: score_pbr(info.pbr),
            dividend_score: score_dividend_yield(info.dividend_yield),
            roe_score: score_roe(info.roe),
            growth_score: score_revenue_growth(info.revenue_growth),
            value_score,
            rating: Rating::from_score(value_score),
            info,
        }
    }
}

/// 종목 분석 리포트를 생성합니다.
///
/// 데이터를 가져올 수 없으면 [`ScreenerError::InsufficientData`]를
/// 반환합니다.
pub async fn generate_report<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    ticker: &str,
) -> ScreenerResult<StockReport> {
    let info = gateway
        .get_stock_info(ticker)
        .await
        .ok_or_else(|| ScreenerError::InsufficientData(format!("{}의 데이터를 가져올 수 없습니다", ticker)))?;

    Ok(StockReport::from_info(info))
}
