//! 스코어링 및 스크리닝 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 지표별 밸류 스코어 계산 (구간 테이블 기반)
//! - 프리셋 가중 종합 스코어
//! - 8개 매크로 시나리오 스트레스 테스트
//! - 스크리닝 오케스트레이터 (유니버스 순회 → 스코어 → 정렬)
//! - 개별 종목 분석 리포트
//!
//! 스코어 함수는 모두 순수 함수이며 `{수치, 부재}` 도메인 전체에서
//! 실패하지 않습니다.

pub mod report;
pub mod scoring;
pub mod screening;
pub mod stress;

// Scoring re-exports
pub use scoring::{
    calculate_preset_score, calculate_value_score, score_dividend_yield, score_pbr, score_per,
    score_revenue_growth, score_roe,
};

// Screening re-exports
pub use screening::{run_screening, screen_by_criteria, ScreenedStock};

// Stress test re-exports
pub use stress::{
    run_stress_test, sector_sensitivity, ImpactTier, Scenario, ScenarioResult, StressTestReport,
    SCENARIOS,
};

// Report re-exports
pub use report::{generate_report, Rating, StockReport};
