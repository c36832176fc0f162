//! 스트레스 테스트 엔진.
//!
//! 8개의 고정 매크로 쇼크 시나리오를 섹터 감응도로 보정하여
//! 현재가 대비 예상 하락폭을 계산합니다. 결과는 호출할 때마다 새로
//! 생성되며 영속화하지 않습니다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use screener_core::{ScreenerError, ScreenerResult};
use screener_data::{MarketDataGateway, QuoteProvider};

/// 스트레스 시나리오 정의.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// 시나리오 이름
    pub name: &'static str,
    /// 설명
    pub description: &'static str,
    /// 기준 쇼크 (%, 항상 음수)
    pub shock_pct: f64,
}

/// 8개 스트레스 테스트 시나리오.
pub const SCENARIOS: [Scenario; 8] = [
    Scenario {
        name: "금리 인상",
        description: "중앙은행이 정책금리를 1% 인상",
        shock_pct: -15.0,
    },
    Scenario {
        name: "경기 침체",
        description: "GDP 2분기 연속 마이너스",
        shock_pct: -25.0,
    },
    Scenario {
        name: "환율 급변",
        description: "기축통화 대비 환율 급락",
        shock_pct: -20.0,
    },
    Scenario {
        name: "팬데믹",
        description: "새로운 팬데믹 발생",
        shock_pct: -35.0,
    },
    Scenario {
        name: "지정학 리스크",
        description: "주요 지역 분쟁 확대",
        shock_pct: -20.0,
    },
    Scenario {
        name: "섹터 쇼크",
        description: "업종 특유의 규제 강화",
        shock_pct: -30.0,
    },
    Scenario {
        name: "유동성 위기",
        description: "신용 시장의 급격한 수축",
        shock_pct: -25.0,
    },
    Scenario {
        name: "기술주 버블 붕괴",
        description: "하이테크 주식의 대폭 조정",
        shock_pct: -40.0,
    },
];

/// 영향도 등급.
///
/// 보정된 쇼크의 절대값 기준: 10% 미만 낮음, 20% 미만 중간,
/// 30% 미만 높음, 그 이상 극심.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    /// 낮음 (10% 미만)
    Low,
    /// 중간 (20% 미만)
    Medium,
    /// 높음 (30% 미만)
    High,
    /// 극심 (30% 이상)
    Extreme,
}

impl ImpactTier {
    /// 변동률(%)에서 영향도 등급을 분류합니다.
    pub fn classify(change_pct: f64) -> Self {
        let abs_change = change_pct.abs();
        if abs_change < 10.0 {
            ImpactTier::Low
        } else if abs_change < 20.0 {
            ImpactTier::Medium
        } else if abs_change < 30.0 {
            ImpactTier::High
        } else {
            ImpactTier::Extreme
        }
    }
}

impl std::fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ImpactTier::Low => "낮음",
            ImpactTier::Medium => "중간",
            ImpactTier::High => "높음",
            ImpactTier::Extreme => "극심",
        };
        f.write_str(label)
    }
}

/// 한 시나리오를 한 종목에 적용한 결과.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// 시나리오 이름
    pub name: String,
    /// 설명
    pub description: String,
    /// 섹터 보정 후 변동률 (%)
    pub price_change_pct: f64,
    /// 예상 주가
    pub estimated_price: f64,
    /// 영향도 등급
    pub impact: ImpactTier,
}

/// 스트레스 테스트 결과 리포트.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressTestReport {
    /// 대상 종목
    pub ticker: String,
    /// 섹터
    pub sector: String,
    /// 테스트 기준 현재가
    pub current_price: f64,
    /// 적용된 섹터 감응도
    pub sensitivity: f64,
    /// 시나리오별 결과 (정의 순서 유지)
    pub results: Vec<ScenarioResult>,
}

impl StressTestReport {
    /// 최악 시나리오 (보정 쇼크가 가장 큰 음수인 것).
    pub fn worst(&self) -> Option<&ScenarioResult> {
        self.results.iter().min_by(|a, b| {
            a.price_change_pct
                .partial_cmp(&b.price_change_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// 섹터별 감응도 계수. 등재되지 않은 섹터는 1.0.
pub fn sector_sensitivity(sector: &str) -> f64 {
    match sector {
        "Technology" => 1.3,
        "Financial Services" => 1.2,
        "Healthcare" => 0.8,
        "Consumer Defensive" => 0.6,
        "Utilities" => 0.5,
        "Energy" => 1.1,
        "Consumer Cyclical" => 1.2,
        "Industrials" => 1.0,
        "Basic Materials" => 1.1,
        "Real Estate" => 1.2,
        "Communication Services" => 1.0,
        _ => 1.0,
    }
}

/// 종목에 8개 시나리오 스트레스 테스트를 실행합니다.
///
/// 현재가를 구할 수 없으면 [`ScreenerError::InsufficientData`]로
/// 즉시 실패합니다 (크래시가 아닌 명시적 "진행 불가" 결과).
pub async fn run_stress_test<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    ticker: &str,
) -> ScreenerResult<StressTestReport> {
    let info = gateway
        .get_stock_info(ticker)
        .await
        .ok_or_else(|| ScreenerError::InsufficientData(format!("{}의 데이터를 가져올 수 없습니다", ticker)))?;

    let Some(current_price) = info.current_price else {
        return Err(ScreenerError::InsufficientData(format!(
            "{}의 현재가가 없습니다",
            ticker
        )));
    };

    let sensitivity = sector_sensitivity(&info.sector);
    debug!(
        ticker = ticker,
        sector = %info.sector,
        sensitivity = sensitivity,
        "스트레스 테스트 실행"
    );

    let results = SCENARIOS
        .iter()
        .map(|scenario| {
            let adjusted_shock = scenario.shock_pct * sensitivity;
            let estimated_price = current_price * (1.0 + adjusted_shock / 100.0);
            ScenarioResult {
                name: scenario.name.to_string(),
                description: scenario.description.to_string(),
                price_change_pct: adjusted_shock,
                estimated_price,
                impact: ImpactTier::classify(adjusted_shock),
            }
        })
        .collect();

    Ok(StressTestReport {
        ticker: ticker.to_string(),
        sector: info.sector,
        current_price,
        sensitivity,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_data::provider::mock::sample_quote;
    use screener_data::{MockQuoteProvider, RawQuote};

    #[test]
    fn test_classify_impact_tiers() {
        assert_eq!(ImpactTier::classify(-5.0), ImpactTier::Low);
        assert_eq!(ImpactTier::classify(-15.0), ImpactTier::Medium);
        assert_eq!(ImpactTier::classify(-25.0), ImpactTier::High);
        assert_eq!(ImpactTier::classify(-35.0), ImpactTier::Extreme);
    }

    #[test]
    fn test_classify_impact_boundaries() {
        // 경계값은 상위 등급에 속한다
        assert_eq!(ImpactTier::classify(-10.0), ImpactTier::Medium);
        assert_eq!(ImpactTier::classify(-20.0), ImpactTier::High);
        assert_eq!(ImpactTier::classify(-30.0), ImpactTier::Extreme);
    }

    #[test]
    fn test_sector_sensitivity_table() {
        assert_eq!(sector_sensitivity("Technology"), 1.3);
        assert_eq!(sector_sensitivity("Consumer Defensive"), 0.6);
        assert_eq!(sector_sensitivity("Utilities"), 0.5);
        assert_eq!(sector_sensitivity("Unknown Sector"), 1.0);
        assert_eq!(sector_sensitivity(""), 1.0);
    }

    #[test]
    fn test_eight_scenarios_all_negative() {
        assert_eq!(SCENARIOS.len(), 8);
        for scenario in SCENARIOS {
            assert!(scenario.shock_pct < 0.0, "{}", scenario.name);
            assert!(!scenario.name.is_empty());
            assert!(!scenario.description.is_empty());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_pandemic_scenario_at_neutral_sensitivity() {
        // 감응도 1.0 섹터, 현재가 2500 → 팬데믹(-35%) 예상가 1625, 극심
        let mut quote = sample_quote("Hitachi", "Industrials");
        quote.current_price = Some(2500.0);
        let provider = MockQuoteProvider::new().with_quote("6501.T", quote);
        let mut gateway = MarketDataGateway::new(provider);

        let report = run_stress_test(&mut gateway, "6501.T").await.unwrap();
        assert_eq!(report.sensitivity, 1.0);

        let pandemic = report
            .results
            .iter()
            .find(|r| r.name == "팬데믹")
            .unwrap();
        assert_eq!(pandemic.price_change_pct, -35.0);
        assert_eq!(pandemic.estimated_price, 2500.0 * 0.65);
        assert_eq!(pandemic.impact, ImpactTier::Extreme);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sensitivity_scales_shocks() {
        // Utilities(0.5): 팬데믹 -35% → -17.5% → 중간 등급
        let mut quote = sample_quote("Kansai Electric", "Utilities");
        quote.current_price = Some(1000.0);
        let provider = MockQuoteProvider::new().with_quote("9503.T", quote);
        let mut gateway = MarketDataGateway::new(provider);

        let report = run_stress_test(&mut gateway, "9503.T").await.unwrap();
        let pandemic = report
            .results
            .iter()
            .find(|r| r.name == "팬데믹")
            .unwrap();
        assert_eq!(pandemic.price_change_pct, -17.5);
        assert_eq!(pandemic.impact, ImpactTier::Medium);
    }

    #[tokio::test(start_paused = true)]
    async fn test_worst_scenario_is_most_negative() {
        let mut quote = sample_quote("Hitachi", "Industrials");
        quote.current_price = Some(2500.0);
        let provider = MockQuoteProvider::new().with_quote("6501.T", quote);
        let mut gateway = MarketDataGateway::new(provider);

        let report = run_stress_test(&mut gateway, "6501.T").await.unwrap();
        let worst = report.worst().unwrap();
        assert_eq!(worst.name, "기술주 버블 붕괴");
        assert_eq!(worst.price_change_pct, -40.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_price_is_insufficient_data() {
        let quote = RawQuote {
            name: Some("No Price Corp".to_string()),
            ..Default::default()
        };
        let provider = MockQuoteProvider::new().with_quote("NOPX", quote);
        let mut gateway = MarketDataGateway::new(provider);

        let err = run_stress_test(&mut gateway, "NOPX").await.unwrap_err();
        assert!(err.is_data_unavailable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_ticker_is_insufficient_data() {
        let mut gateway = MarketDataGateway::new(MockQuoteProvider::new());
        let err = run_stress_test(&mut gateway, "NOPE").await.unwrap_err();
        assert!(err.is_data_unavailable());
    }
}
