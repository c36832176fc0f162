//! 스코어링 가중치 프리셋.

use serde::{Deserialize, Serialize};

/// 5개 지표에 대한 프리셋 가중치.
///
/// 구조체 필드로 고정되어 있으므로 모든 프리셋은 반드시
/// 5개 지표 전부에 대한 가중치를 정의합니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetWeights {
    /// PER 가중치
    pub per: f64,
    /// PBR 가중치
    pub pbr: f64,
    /// 배당수익률 가중치
    pub dividend_yield: f64,
    /// ROE 가중치
    pub roe: f64,
    /// 매출 성장률 가중치
    pub revenue_growth: f64,
}

impl PresetWeights {
    /// 가중치 합계.
    pub fn total(&self) -> f64 {
        self.per + self.pbr + self.dividend_yield + self.roe + self.revenue_growth
    }
}

/// 종합 스코어를 특정 투자 성향 쪽으로 기울이는 가중치 프리셋.
///
/// 닫힌 열거형으로 모델링하여 가중치 조회가 항상 전수 매칭됩니다.
/// 이름 파싱 시 인식할 수 없는 값은 [`ScorePreset::Balanced`]로 조용히
/// 폴백합니다 (시장 식별자와 달리 에러가 아님).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePreset {
    /// 저평가 (낮은 PER/PBR 중시)
    Value,
    /// 성장 (ROE/매출 성장률 중시)
    Growth,
    /// 배당 (배당수익률 중시)
    Dividend,
    /// 균형 (모든 지표 동일 가중)
    #[default]
    Balanced,
}

impl ScorePreset {
    /// 지원하는 모든 프리셋.
    pub const ALL: [ScorePreset; 4] = [
        ScorePreset::Value,
        ScorePreset::Growth,
        ScorePreset::Dividend,
        ScorePreset::Balanced,
    ];

    /// 이름에서 프리셋을 결정합니다. 인식할 수 없는 이름은 balanced로 폴백.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "value" => ScorePreset::Value,
            "growth" => ScorePreset::Growth,
            "dividend" => ScorePreset::Dividend,
            _ => ScorePreset::Balanced,
        }
    }

    /// 프리셋 이름 문자열 반환.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScorePreset::Value => "value",
            ScorePreset::Growth => "growth",
            ScorePreset::Dividend => "dividend",
            ScorePreset::Balanced => "balanced",
        }
    }

    /// 이 프리셋의 지표별 가중치.
    pub fn weights(&self) -> PresetWeights {
        match self {
            ScorePreset::Value => PresetWeights {
                per: 1.5,
                pbr: 1.5,
                dividend_yield: 1.0,
                roe: 0.5,
                revenue_growth: 0.5,
            },
            ScorePreset::Growth => PresetWeights {
                per: 0.5,
                pbr: 0.5,
                dividend_yield: 0.3,
                roe: 1.2,
                revenue_growth: 1.5,
            },
            ScorePreset::Dividend => PresetWeights {
                per: 0.8,
                pbr: 0.8,
                dividend_yield: 1.8,
                roe: 0.8,
                revenue_growth: 0.3,
            },
            ScorePreset::Balanced => PresetWeights {
                per: 1.0,
                pbr: 1.0,
                dividend_yield: 1.0,
                roe: 1.0,
                revenue_growth: 1.0,
            },
        }
    }
}

impl std::fmt::Display for ScorePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
