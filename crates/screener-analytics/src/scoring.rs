//! 밸류 스코어 계산기.
//!
//! 각 지표를 구간 테이블로 점수화한 뒤 합산합니다.
//!
//! # 스코어 배분
//!
//! - PER: 25점 (낮을수록 고득점)
//! - PBR: 25점 (낮을수록 고득점)
//! - 배당수익률: 20점 (높을수록 고득점)
//! - ROE: 15점 (높을수록 고득점)
//! - 매출 성장률: 15점 (높을수록 고득점)
//!
//! 부재(`None`)이거나 도메인 밖인 입력은 0점입니다.

use screener_core::{ScorePreset, StockInfo};

/// PER 만점.
pub const PER_MAX_SCORE: f64 = 25.0;
/// PBR 만점.
pub const PBR_MAX_SCORE: f64 = 25.0;
/// 배당수익률 만점.
pub const DIVIDEND_MAX_SCORE: f64 = 20.0;
/// ROE 만점.
pub const ROE_MAX_SCORE: f64 = 15.0;
/// 매출 성장률 만점.
pub const REVENUE_GROWTH_MAX_SCORE: f64 = 15.0;

/// PER 스코어 (25점 만점). 낮을수록 저평가.
pub fn score_per(per: Option<f64>) -> f64 {
    let Some(per) = per else { return 0.0 };
    if per <= 0.0 {
        return 0.0;
    }
    if per <= 8.0 {
        25.0
    } else if per <= 12.0 {
        20.0
    } else if per <= 15.0 {
        15.0
    } else if per <= 20.0 {
        10.0
    } else if per <= 30.0 {
        5.0
    } else {
        0.0
    }
}

/// PBR 스코어 (25점 만점). 낮을수록 저평가.
pub fn score_pbr(pbr: Option<f64>) -> f64 {
    let Some(pbr) = pbr else { return 0.0 };
    if pbr <= 0.0 {
        return 0.0;
    }
    if pbr <= 0.5 {
        25.0
    } else if pbr <= 0.8 {
        20.0
    } else if pbr <= 1.0 {
        15.0
    } else if pbr <= 1.5 {
        10.0
    } else if pbr <= 2.0 {
        5.0
    } else {
        0.0
    }
}

/// 배당수익률 스코어 (20점 만점). 높을수록 고득점.
pub fn score_dividend_yield(dividend_yield: Option<f64>) -> f64 {
    let Some(dy) = dividend_yield else { return 0.0 };
    if dy <= 0.0 {
        return 0.0;
    }
    if dy >= 5.0 {
        20.0
    } else if dy >= 4.0 {
        16.0
    } else if dy >= 3.0 {
        12.0
    } else if dy >= 2.0 {
        8.0
    } else if dy >= 1.0 {
        4.0
    } else {
        0.0
    }
}

/// ROE 스코어 (15점 만점). 높을수록 고득점.
pub fn score_roe(roe: Option<f64>) -> f64 {
    let Some(roe) = roe else { return 0.0 };
    if roe >= 20.0 {
        15.0
    } else if roe >= 15.0 {
        12.0
    } else if roe >= 10.0 {
        9.0
    } else if roe >= 8.0 {
        6.0
    } else if roe >= 5.0 {
        3.0
    } else {
        0.0
    }
}

/// 매출 성장률 스코어 (15점 만점). 높을수록 고득점. 역성장은 0점.
pub fn score_revenue_growth(revenue_growth: Option<f64>) -> f64 {
    let Some(growth) = revenue_growth else { return 0.0 };
    if growth >= 30.0 {
        15.0
    } else if growth >= 20.0 {
        12.0
    } else if growth >= 10.0 {
        9.0
    } else if growth >= 5.0 {
        6.0
    } else if growth >= 0.0 {
        3.0
    } else {
        0.0
    }
}

/// 밸류 스코어 종합 (100점 만점). 5개 지표 스코어의 단순 합.
pub fn calculate_value_score(stock: &StockInfo) -> f64 {
    score_per(stock.per)
        + score_pbr(stock.pbr)
        + score_dividend_yield(stock.dividend_yield)
        + score_roe(stock.roe)
        + score_revenue_growth(stock.revenue_growth)
}

/// 프리셋 가중 스코어 (100점 만점 스케일).
///
/// 가중 평균(`Σ(스코어×가중치) / Σ가중치`)을 구한 뒤 100/20을 곱해
/// 100점 만점으로 스케일링합니다. 이 산식은 기존 결과와의 수치 동등성을
/// 위해 그대로 유지해야 합니다.
pub fn calculate_preset_score(stock: &StockInfo, preset: ScorePreset) -> f64 {
    let weights = preset.weights();
    let weighted_sum = score_per(stock.per) * weights.per
        + score_pbr(stock.pbr) * weights.pbr
        + score_dividend_yield(stock.dividend_yield) * weights.dividend_yield
        + score_roe(stock.roe) * weights.roe
        + score_revenue_growth(stock.revenue_growth) * weights.revenue_growth;

    (weighted_sum / weights.total()) * (100.0 / 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// 모든 선택 지표가 채워진 테스트 종목.
    fn stock_with(
        per: Option<f64>,
        pbr: Option<f64>,
        dividend_yield: Option<f64>,
        roe: Option<f64>,
        revenue_growth: Option<f64>,
    ) -> StockInfo {
        StockInfo {
            per,
            pbr,
            dividend_yield,
            roe,
            revenue_growth,
            ..StockInfo::new("TEST", "Test Corp")
        }
    }

    #[test]
    fn test_score_per_bands() {
        assert_eq!(score_per(Some(5.0)), 25.0);
        assert_eq!(score_per(Some(8.0)), 25.0);
        assert_eq!(score_per(Some(10.0)), 20.0);
        assert_eq!(score_per(Some(14.0)), 15.0);
        assert_eq!(score_per(Some(18.0)), 10.0);
        assert_eq!(score_per(Some(25.0)), 5.0);
        assert_eq!(score_per(Some(50.0)), 0.0);
    }

    #[test]
    fn test_score_per_non_positive_or_absent_is_zero() {
        assert_eq!(score_per(None), 0.0);
        assert_eq!(score_per(Some(0.0)), 0.0);
        assert_eq!(score_per(Some(-5.0)), 0.0);
    }

    #[test]
    fn test_score_pbr_bands() {
        assert_eq!(score_pbr(Some(0.4)), 25.0);
        assert_eq!(score_pbr(Some(0.7)), 20.0);
        assert_eq!(score_pbr(Some(1.0)), 15.0);
        assert_eq!(score_pbr(Some(1.2)), 10.0);
        assert_eq!(score_pbr(Some(1.8)), 5.0);
        assert_eq!(score_pbr(Some(3.0)), 0.0);
        assert_eq!(score_pbr(None), 0.0);
    }

    #[test]
    fn test_score_dividend_yield_bands() {
        assert_eq!(score_dividend_yield(Some(6.0)), 20.0);
        assert_eq!(score_dividend_yield(Some(4.5)), 16.0);
        assert_eq!(score_dividend_yield(Some(3.0)), 12.0);
        assert_eq!(score_dividend_yield(Some(2.5)), 8.0);
        assert_eq!(score_dividend_yield(Some(1.0)), 4.0);
        assert_eq!(score_dividend_yield(Some(0.5)), 0.0);
        assert_eq!(score_dividend_yield(Some(0.0)), 0.0);
        assert_eq!(score_dividend_yield(None), 0.0);
    }

    #[test]
    fn test_score_roe_bands() {
        assert_eq!(score_roe(Some(25.0)), 15.0);
        assert_eq!(score_roe(Some(17.0)), 12.0);
        assert_eq!(score_roe(Some(12.0)), 9.0);
        assert_eq!(score_roe(Some(8.0)), 6.0);
        assert_eq!(score_roe(Some(6.0)), 3.0);
        assert_eq!(score_roe(Some(2.0)), 0.0);
        assert_eq!(score_roe(None), 0.0);
    }

    #[test]
    fn test_score_revenue_growth_bands() {
        assert_eq!(score_revenue_growth(Some(35.0)), 15.0);
        assert_eq!(score_revenue_growth(Some(25.0)), 12.0);
        assert_eq!(score_revenue_growth(Some(15.0)), 9.0);
        assert_eq!(score_revenue_growth(Some(7.0)), 6.0);
        assert_eq!(score_revenue_growth(Some(0.0)), 3.0);
        assert_eq!(score_revenue_growth(Some(-10.0)), 0.0);
        assert_eq!(score_revenue_growth(None), 0.0);
    }

    #[test]
    fn test_perfect_inputs_score_exactly_100() {
        let stock = stock_with(Some(5.0), Some(0.3), Some(6.0), Some(25.0), Some(35.0));
        assert_eq!(calculate_value_score(&stock), 100.0);
    }

    #[test]
    fn test_all_absent_scores_exactly_zero() {
        let stock = stock_with(None, None, None, None, None);
        assert_eq!(calculate_value_score(&stock), 0.0);
    }

    #[test]
    fn test_value_score_is_component_sum() {
        let stock = stock_with(Some(10.0), Some(1.2), Some(2.5), Some(12.0), Some(7.0));
        let expected = score_per(stock.per)
            + score_pbr(stock.pbr)
            + score_dividend_yield(stock.dividend_yield)
            + score_roe(stock.roe)
            + score_revenue_growth(stock.revenue_growth);
        assert_eq!(calculate_value_score(&stock), expected);
        assert_eq!(expected, 20.0 + 10.0 + 8.0 + 9.0 + 6.0);
    }

    #[test]
    fn test_unknown_preset_equals_balanced() {
        let stock = stock_with(Some(10.0), Some(1.2), Some(2.5), Some(12.0), Some(7.0));
        let unknown = calculate_preset_score(&stock, ScorePreset::from_name("unknown"));
        let balanced = calculate_preset_score(&stock, ScorePreset::Balanced);
        assert_eq!(unknown, balanced);
    }

    #[test]
    fn test_balanced_preset_score_equals_value_score() {
        // 가중치가 모두 1.0이면 가중 평균 × 5 == 단순 합
        let stock = stock_with(Some(10.0), Some(1.2), Some(2.5), Some(12.0), Some(7.0));
        let preset = calculate_preset_score(&stock, ScorePreset::Balanced);
        let value = calculate_value_score(&stock);
        assert!((preset - value).abs() < 1e-9);
    }

    #[test]
    fn test_value_preset_prefers_low_per() {
        let cheap = stock_with(Some(5.0), Some(1.0), Some(1.0), Some(5.0), Some(0.0));
        let expensive = stock_with(Some(50.0), Some(1.0), Some(1.0), Some(5.0), Some(0.0));

        let cheap_score = calculate_preset_score(&cheap, ScorePreset::Value);
        let expensive_score = calculate_preset_score(&expensive, ScorePreset::Value);
        assert!(cheap_score > expensive_score);
    }

    #[test]
    fn test_perfect_inputs_max_preset_scores() {
        // 모든 지표가 만점이면 어떤 프리셋이든 다음이 성립:
        // Σ(만점_i × w_i) / Σw_i × 5 — 만점이 25/25/20/15/15로 달라
        // 프리셋에 따라 100 근방의 서로 다른 값이 나온다
        let stock = stock_with(Some(5.0), Some(0.3), Some(6.0), Some(25.0), Some(35.0));
        for preset in ScorePreset::ALL {
            let score = calculate_preset_score(&stock, preset);
            assert!(score > 85.0, "{preset}: {score}");
            assert!(score <= 125.0, "{preset}: {score}");
        }
        // balanced는 정확히 100
        assert!((calculate_preset_score(&stock, ScorePreset::Balanced) - 100.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_per_score_in_fixed_bands(per in -50.0f64..300.0) {
            let score = score_per(Some(per));
            prop_assert!([0.0, 5.0, 10.0, 15.0, 20.0, 25.0].contains(&score));
        }

        #[test]
        fn prop_per_score_non_increasing(a in 0.01f64..300.0, b in 0.01f64..300.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score_per(Some(lo)) >= score_per(Some(hi)));
        }

        #[test]
        fn prop_value_score_bounded(
            per in proptest::option::of(-50.0f64..300.0),
            pbr in proptest::option::of(-5.0f64..10.0),
            dy in proptest::option::of(-5.0f64..20.0),
            roe in proptest::option::of(-50.0f64..80.0),
            growth in proptest::option::of(-80.0f64..80.0),
        ) {
            let stock = stock_with(per, pbr, dy, roe, growth);
            let score = calculate_value_score(&stock);
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }
}
