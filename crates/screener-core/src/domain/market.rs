//! 대상 시장 정의.

use serde::{Deserialize, Serialize};

use crate::error::ScreenerError;

/// 스크리닝 대상 시장.
///
/// 닫힌 열거형이므로 알 수 없는 시장 식별자는 파싱 단계에서
/// [`ScreenerError::InvalidInput`]으로 즉시 거부됩니다. 데이터 조회 실패와 달리
/// 설정/호출 오류이므로 조용히 넘어가지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    /// 일본거래소 (JPX)
    Jpx,
    /// 미국 시장
    Us,
    /// 아세안 시장 (싱가포르/인도네시아/태국/필리핀)
    Asean,
    /// 홍콩 시장
    Hk,
}

impl Market {
    /// 지원하는 모든 시장.
    pub const ALL: [Market; 4] = [Market::Jpx, Market::Us, Market::Asean, Market::Hk];

    /// 식별자 문자열 반환.
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Jpx => "jpx",
            Market::Us => "us",
            Market::Asean => "asean",
            Market::Hk => "hk",
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Market {
    type Err = ScreenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpx" => Ok(Market::Jpx),
            "us" => Ok(Market::Us),
            "asean" => Ok(Market::Asean),
            "hk" => Ok(Market::Hk),
            other => Err(ScreenerError::InvalidInput(format!(
                "알 수 없는 시장: {}. 사용 가능: jpx, us, asean, hk",
                other
            ))),
        }
    }
}
