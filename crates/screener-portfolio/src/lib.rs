//! 포트폴리오 및 워치리스트 관리.
//!
//! 이 crate는 다음을 제공합니다:
//! - 매매 기록과 평균 단가 추적 (CSV 영속화)
//! - 거래 이력 추가 기록 (append-only)
//! - 보유 종목 손익 평가 (게이트웨이 시세 기반)
//! - 관심 종목 워치리스트
//!
//! 금액 계산은 부동소수점 오차를 피하기 위해 `Decimal`을 사용합니다.

pub mod error;
pub mod portfolio;
pub mod watchlist;

pub use error::{PortfolioError, Result};
pub use portfolio::{
    PortfolioEntry, PortfolioHealth, PortfolioStore, PositionHealth, TradeAction, TradeReceipt,
    Transaction,
};
pub use watchlist::{AddOutcome, WatchlistEntry, WatchlistStore};
