//! 스크리닝 시스템의 에러 타입.
//!
//! 이 모듈은 시스템 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 스크리너 에러.
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력 (알 수 없는 시장 식별자 등)
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 데이터 에러
    #[error("데이터 에러: {0}")]
    Data(String),

    /// 분석에 필요한 데이터 부족 (현재가 없음 등)
    #[error("데이터 부족: {0}")]
    InsufficientData(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 스크리너 작업을 위한 Result 타입.
pub type ScreenerResult<T> = Result<T, ScreenerError>;

impl ScreenerError {
    /// 호출자의 입력 문제로 발생한 에러인지 확인합니다.
    ///
    /// 설정/입력 에러는 재시도해도 해결되지 않으므로
    /// 사용법 안내와 함께 즉시 반환해야 합니다.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ScreenerError::InvalidInput(_) | ScreenerError::Config(_)
        )
    }

    /// 특정 종목의 데이터 문제로 발생한 에러인지 확인합니다.
    ///
    /// 일괄 작업에서는 이 에러가 발생한 종목만 건너뛰고 계속 진행합니다.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            ScreenerError::Data(_) | ScreenerError::InsufficientData(_)
        )
    }
}

impl From<serde_json::Error> for ScreenerError {
    fn from(err: serde_json::Error) -> Self {
        ScreenerError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for ScreenerError {
    fn from(err: std::io::Error) -> Self {
        ScreenerError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        let invalid = ScreenerError::InvalidInput("unknown market".to_string());
        assert!(invalid.is_input_error());
        assert!(!invalid.is_data_unavailable());
    }

    #[test]
    fn test_data_error_classification() {
        let missing = ScreenerError::InsufficientData("no price".to_string());
        assert!(missing.is_data_unavailable());
        assert!(!missing.is_input_error());
    }
}
