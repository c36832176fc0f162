//! 포트폴리오 관리: 매매 기록과 손익 추적을 CSV로 영속화.
//!
//! `portfolio.csv`에는 현재 보유 현황을, `transactions.csv`에는 거래
//! 이력을 추가 기록(append-only)합니다. 파일이 없으면 헤더와 함께
//! 생성합니다.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use screener_data::{MarketDataGateway, QuoteProvider};

use crate::error::{PortfolioError, Result};

const PORTFOLIO_FILE: &str = "portfolio.csv";
const TRANSACTIONS_FILE: &str = "transactions.csv";

/// 포트폴리오 보유 종목 엔트리.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// 티커
    pub ticker: String,
    /// 보유 수량
    pub shares: i64,
    /// 평균 단가
    pub avg_price: Decimal,
    /// 마지막 갱신 시각
    pub last_updated: DateTime<Utc>,
}

/// 거래 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    /// 매수
    Buy,
    /// 매도
    Sell,
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeAction::Buy => f.write_str("buy"),
            TradeAction::Sell => f.write_str("sell"),
        }
    }
}

/// 거래 이력 레코드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// 체결 시각
    pub date: DateTime<Utc>,
    /// 거래 구분
    pub action: TradeAction,
    /// 티커
    pub ticker: String,
    /// 수량
    pub shares: i64,
    /// 체결 가격
    pub price: Decimal,
}

/// 매수/매도 처리 결과.
#[derive(Debug, Clone)]
pub struct TradeReceipt {
    /// 거래 구분
    pub action: TradeAction,
    /// 티커
    pub ticker: String,
    /// 수량
    pub shares: i64,
    /// 체결 가격
    pub price: Decimal,
    /// 실현 손익 (매도 시에만)
    pub realized_pnl: Option<Decimal>,
}

/// 보유 종목별 평가 결과.
#[derive(Debug, Clone)]
pub struct PositionHealth {
    /// 티커
    pub ticker: String,
    /// 보유 수량
    pub shares: i64,
    /// 평균 단가
    pub avg_price: Decimal,
    /// 취득 원가
    pub cost_basis: Decimal,
    /// 현재가 (시세 조회 실패 시 None)
    pub current_price: Option<Decimal>,
    /// 평가액
    pub current_value: Option<Decimal>,
    /// 평가 손익
    pub pnl: Option<Decimal>,
    /// 평가 손익률 (%)
    pub pnl_pct: Option<Decimal>,
}

/// 포트폴리오 전체 평가 결과.
///
/// 시세를 구하지 못한 종목은 positions에는 남지만 합계에서는 제외됩니다.
#[derive(Debug, Clone)]
pub struct PortfolioHealth {
    /// 종목별 평가
    pub positions: Vec<PositionHealth>,
    /// 합계 평가액
    pub total_value: Decimal,
    /// 합계 취득 원가
    pub total_cost: Decimal,
}

impl PortfolioHealth {
    /// 합계 평가 손익.
    pub fn total_pnl(&self) -> Decimal {
        self.total_value - self.total_cost
    }

    /// 합계 평가 손익률 (%). 원가가 0이면 None.
    pub fn total_pnl_pct(&self) -> Option<Decimal> {
        if self.total_cost > Decimal::ZERO {
            Some(self.total_pnl() / self.total_cost * dec!(100))
        } else {
            None
        }
    }
}

/// CSV 기반 포트폴리오 저장소.
#[derive(Debug, Clone)]
pub struct PortfolioStore {
    data_dir: PathBuf,
}

impl PortfolioStore {
    /// 지정한 디렉토리를 사용하는 저장소를 생성합니다.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn portfolio_path(&self) -> PathBuf {
        self.data_dir.join(PORTFOLIO_FILE)
    }

    fn transactions_path(&self) -> PathBuf {
        self.data_dir.join(TRANSACTIONS_FILE)
    }

    /// CSV 파일이 없으면 헤더와 함께 생성합니다.
    fn ensure_files(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;

        if !self.portfolio_path().exists() {
            let mut writer = csv::Writer::from_path(self.portfolio_path())?;
            writer.write_record(["ticker", "shares", "avg_price", "last_updated"])?;
            writer.flush()?;
        }
        if !self.transactions_path().exists() {
            let mut writer = csv::Writer::from_path(self.transactions_path())?;
            writer.write_record(["date", "action", "ticker", "shares", "price"])?;
            writer.flush()?;
        }
        Ok(())
    }

    /// 보유 현황을 읽어옵니다 (파일 기록 순서 유지).
    pub fn entries(&self) -> Result<Vec<PortfolioEntry>> {
        self.ensure_files()?;
        let mut reader = csv::Reader::from_path(self.portfolio_path())?;
        let mut entries = Vec::new();
        for record in reader.deserialize() {
            entries.push(record?);
        }
        Ok(entries)
    }

    fn save(&self, entries: &[PortfolioEntry]) -> Result<()> {
        self.ensure_files()?;
        let mut writer = csv::Writer::from_path(self.portfolio_path())?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn record_transaction(&self, transaction: &Transaction) -> Result<()> {
        self.ensure_files()?;
        let file = OpenOptions::new()
            .append(true)
            .open(self.transactions_path())?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(transaction)?;
        writer.flush()?;
        Ok(())
    }

    /// 거래 이력을 읽어옵니다 (기록 순서 유지).
    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        self.ensure_files()?;
        let mut reader = csv::Reader::from_path(self.transactions_path())?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    /// 주식을 매수합니다. 기보유 종목은 평균 단가를 재계산합니다.
    pub fn buy(&self, ticker: &str, shares: i64, price: Decimal) -> Result<TradeReceipt> {
        validate_order(shares, price)?;

        let mut entries = self.entries()?;
        let now = Utc::now();

        match entries.iter_mut().find(|e| e.ticker == ticker) {
            Some(existing) => {
                let total_cost = existing.avg_price * Decimal::from(existing.shares)
                    + price * Decimal::from(shares);
                let total_shares = existing.shares + shares;
                existing.avg_price = total_cost / Decimal::from(total_shares);
                existing.shares = total_shares;
                existing.last_updated = now;
            }
            None => {
                entries.push(PortfolioEntry {
                    ticker: ticker.to_string(),
                    shares,
                    avg_price: price,
                    last_updated: now,
                });
            }
        }

        self.save(&entries)?;
        self.record_transaction(&Transaction {
            date: now,
            action: TradeAction::Buy,
            ticker: ticker.to_string(),
            shares,
            price,
        })?;

        info!(ticker = ticker, shares = shares, price = %price, "매수 완료");
        Ok(TradeReceipt {
            action: TradeAction::Buy,
            ticker: ticker.to_string(),
            shares,
            price,
            realized_pnl: None,
        })
    }

    /// 주식을 매도하고 실현 손익을 계산합니다.
    ///
    /// 미보유 종목은 [`PortfolioError::NotFound`], 보유 수량을 넘는 매도는
    /// [`PortfolioError::InsufficientShares`]로 거부됩니다.
    pub fn sell(&self, ticker: &str, shares: i64, price: Decimal) -> Result<TradeReceipt> {
        validate_order(shares, price)?;

        let mut entries = self.entries()?;
        let now = Utc::now();

        let position = entries
            .iter()
            .position(|e| e.ticker == ticker)
            .ok_or_else(|| PortfolioError::NotFound(ticker.to_string()))?;

        let existing = &entries[position];
        if existing.shares < shares {
            return Err(PortfolioError::InsufficientShares {
                held: existing.shares,
                requested: shares,
            });
        }

        let realized_pnl = (price - existing.avg_price) * Decimal::from(shares);
        let remaining = existing.shares - shares;

        if remaining == 0 {
            entries.remove(position);
        } else {
            let entry = &mut entries[position];
            entry.shares = remaining;
            entry.last_updated = now;
        }

        self.save(&entries)?;
        self.record_transaction(&Transaction {
            date: now,
            action: TradeAction::Sell,
            ticker: ticker.to_string(),
            shares,
            price,
        })?;

        info!(ticker = ticker, shares = shares, pnl = %realized_pnl, "매도 완료");
        Ok(TradeReceipt {
            action: TradeAction::Sell,
            ticker: ticker.to_string(),
            shares,
            price,
            realized_pnl: Some(realized_pnl),
        })
    }

    /// 보유 종목을 현재 시세로 평가합니다.
    ///
    /// 시세를 구하지 못한 종목은 평가값 없이 목록에 남고 합계에서
    /// 제외됩니다.
    pub async fn health_check<P: QuoteProvider>(
        &self,
        gateway: &mut MarketDataGateway<P>,
    ) -> Result<PortfolioHealth> {
        let entries = self.entries()?;
        let mut positions = Vec::with_capacity(entries.len());
        let mut total_value = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;

        for entry in entries {
            let cost_basis = entry.avg_price * Decimal::from(entry.shares);
            let current_price = gateway
                .get_stock_info(&entry.ticker)
                .await
                .and_then(|info| info.current_price)
                .and_then(Decimal::from_f64);

            let position = match current_price {
                Some(price) => {
                    let current_value = price * Decimal::from(entry.shares);
                    let pnl = current_value - cost_basis;
                    let pnl_pct = if cost_basis > Decimal::ZERO {
                        Some(pnl / cost_basis * dec!(100))
                    } else {
                        None
                    };

                    total_value += current_value;
                    total_cost += cost_basis;

                    PositionHealth {
                        ticker: entry.ticker,
                        shares: entry.shares,
                        avg_price: entry.avg_price,
                        cost_basis,
                        current_price: Some(price),
                        current_value: Some(current_value),
                        pnl: Some(pnl),
                        pnl_pct,
                    }
                }
                None => {
                    debug!(ticker = %entry.ticker, "시세 조회 실패, 평가 제외");
                    PositionHealth {
                        ticker: entry.ticker,
                        shares: entry.shares,
                        avg_price: entry.avg_price,
                        cost_basis,
                        current_price: None,
                        current_value: None,
                        pnl: None,
                        pnl_pct: None,
                    }
                }
            };
            positions.push(position);
        }

        Ok(PortfolioHealth {
            positions,
            total_value,
            total_cost,
        })
    }
}

fn validate_order(shares: i64, price: Decimal) -> Result<()> {
    if shares <= 0 {
        return Err(PortfolioError::InvalidInput(format!(
            "수량은 1 이상이어야 합니다: {}",
            shares
        )));
    }
    if price <= Decimal::ZERO {
        return Err(PortfolioError::InvalidInput(format!(
            "가격은 0보다 커야 합니다: {}",
            price
        )));
    }
    Ok(())
}
