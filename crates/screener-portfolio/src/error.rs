//! 포트폴리오 모듈 오류 타입.

use thiserror::Error;

/// 포트폴리오/워치리스트 관련 오류.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// 파일 입출력 오류
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 읽기/쓰기 오류
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 보유/등록되지 않은 종목
    #[error("종목을 찾을 수 없음: {0}")]
    NotFound(String),

    /// 보유 수량 부족
    #[error("보유 수량 부족: 보유 {held}주, 매도 요청 {requested}주")]
    InsufficientShares {
        /// 보유 수량
        held: i64,
        /// 매도 요청 수량
        requested: i64,
    },

    /// 잘못된 입력 (0 이하의 수량/가격 등)
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
