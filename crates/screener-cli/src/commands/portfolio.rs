//! 포트폴리오 관리 명령.

use indicatif::ProgressBar;
use rust_decimal::Decimal;
use std::time::Duration;

use screener_data::{MarketDataGateway, QuoteProvider};
use screener_portfolio::PortfolioStore;

/// 보유 현황을 출력합니다.
pub fn show(store: &PortfolioStore) -> anyhow::Result<()> {
    let entries = store.entries()?;
    if entries.is_empty() {
        println!("포트폴리오가 비어 있습니다");
        return Ok(());
    }

    println!("{:<12} {:>8} {:>12} {:<12}", "티커", "수량", "평균 단가", "갱신일");
    println!("{}", "-".repeat(48));
    for entry in entries {
        println!(
            "{:<12} {:>8} {:>12.2} {:<12}",
            entry.ticker,
            entry.shares,
            entry.avg_price,
            entry.last_updated.format("%Y-%m-%d"),
        );
    }
    Ok(())
}

/// 매수를 기록합니다.
pub fn buy(store: &PortfolioStore, ticker: &str, shares: i64, price: Decimal) -> anyhow::Result<()> {
    let receipt = store.buy(ticker, shares, price)?;
    println!(
        "매수 완료: {} x {}주 @ {:.2}",
        receipt.ticker, receipt.shares, receipt.price
    );
    Ok(())
}

/// 매도를 기록하고 실현 손익을 출력합니다.
pub fn sell(store: &PortfolioStore, ticker: &str, shares: i64, price: Decimal) -> anyhow::Result<()> {
    let receipt = store.sell(ticker, shares, price)?;
    let pnl = receipt.realized_pnl.unwrap_or(Decimal::ZERO);
    println!(
        "매도 완료: {} x {}주 @ {:.2} | 실현 손익: {:+.2}",
        receipt.ticker, receipt.shares, receipt.price, pnl
    );
    Ok(())
}

/// 보유 종목을 현재 시세로 평가해 출력합니다.
pub async fn health<P: QuoteProvider>(
    store: &PortfolioStore,
    gateway: &mut MarketDataGateway<P>,
) -> anyhow::Result<()> {
    let entries = store.entries()?;
    if entries.is_empty() {
        println!("포트폴리오가 비어 있습니다");
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("보유 종목 시세 조회 중...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let health = store.health_check(gateway).await?;
    spinner.finish_and_clear();

    println!(
        "{:<12} {:>10} {:>12} {:>12} {:>10}",
        "티커", "현재가", "평가액", "손익", "손익률%"
    );
    println!("{}", "-".repeat(62));

    for position in &health.positions {
        match (&position.current_price, &position.current_value, &position.pnl) {
            (Some(price), Some(value), Some(pnl)) => {
                let pnl_pct = position
                    .pnl_pct
                    .map(|p| format!("{:+.1}", p))
                    .unwrap_or_else(|| "N/A".to_string());
                println!(
                    "{:<12} {:>10.2} {:>12.0} {:>+12.0} {:>10}",
                    position.ticker, price, value, pnl, pnl_pct
                );
            }
            _ => {
                println!("{:<12} 시세 조회 실패 (평가 제외)", position.ticker);
            }
        }
    }

    println!();
    let total_pct = health
        .total_pnl_pct()
        .map(|p| format!("{:+.1}%", p))
        .unwrap_or_else(|| "N/A".to_string());
    println!(
        "합계 평가액: {:.0} | 합계 손익: {:+.0} ({})",
        health.total_value,
        health.total_pnl(),
        total_pct
    );
    Ok(())
}
