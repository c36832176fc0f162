//! 종목 스냅샷 및 캔들 데이터 구조체.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 한 종목의 특정 시점 펀더멘털 스냅샷.
///
/// 선택 지표는 데이터가 없거나 이상치로 제외된 경우 `None`입니다.
/// 부재(`None`)와 0은 의미가 다르며 혼용하지 않습니다.
/// 단위 변환과 이상치 검증은 데이터 게이트웨이에서 단 한 번 수행되므로
/// 하위 컴포넌트는 재검증하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    /// 티커 심볼 (예: "7203.T", "AAPL")
    pub ticker: String,
    /// 종목명
    pub name: String,
    /// 섹터
    pub sector: String,
    /// 시가총액
    pub market_cap: f64,
    /// PER (주가수익비율)
    pub per: Option<f64>,
    /// PBR (주가순자산비율)
    pub pbr: Option<f64>,
    /// 배당수익률 (%)
    pub dividend_yield: Option<f64>,
    /// ROE (자기자본이익률, %)
    pub roe: Option<f64>,
    /// 매출 성장률 (%)
    pub revenue_growth: Option<f64>,
    /// 현재가
    pub current_price: Option<f64>,
    /// 52주 최고가
    pub fifty_two_week_high: Option<f64>,
    /// 52주 최저가
    pub fifty_two_week_low: Option<f64>,
}

impl StockInfo {
    /// 식별 정보만으로 스냅샷을 생성합니다. 지표는 전부 부재 상태입니다.
    pub fn new(ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            sector: String::new(),
            market_cap: 0.0,
            per: None,
            pbr: None,
            dividend_yield: None,
            roe: None,
            revenue_growth: None,
            current_price: None,
            fifty_two_week_high: None,
            fifty_two_week_low: None,
        }
    }
}

/// 과거 주가 시계열의 한 행 (일봉).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// 일자
    pub date: NaiveDate,
    /// 시가
    pub open: f64,
    /// 고가
    pub high: f64,
    /// 저가
    pub low: f64,
    /// 종가
    pub close: f64,
    /// 거래량
    pub volume: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_info_new_has_absent_metrics() {
        let info = StockInfo::new("TEST", "Test Corp");
        assert_eq!(info.ticker, "TEST");
        assert!(info.per.is_none());
        assert!(info.pbr.is_none());
        assert!(info.dividend_yield.is_none());
        assert!(info.current_price.is_none());
    }

    #[test]
    fn test_stock_info_roundtrip_json() {
        let info = StockInfo {
            ticker: "7203.T".to_string(),
            name: "Toyota Motor".to_string(),
            sector: "Consumer Cyclical".to_string(),
            market_cap: 30_000_000_000_000.0,
            per: Some(10.5),
            pbr: Some(1.2),
            dividend_yield: Some(2.5),
            roe: Some(12.0),
            revenue_growth: Some(8.0),
            current_price: Some(2500.0),
            fifty_two_week_high: Some(3000.0),
            fifty_two_week_low: Some(2000.0),
        };

        let json = serde_json::to_string(&info).unwrap();
        let parsed: StockInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }
}
