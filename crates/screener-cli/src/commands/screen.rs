//! 스크리닝 명령.

use indicatif::ProgressBar;
use std::time::Duration;

use screener_analytics::{run_screening, screen_by_criteria, ScreenedStock};
use screener_core::{Market, ScorePreset};
use screener_data::{market_tickers, MarketDataGateway, QuoteProvider};

use super::fmt_opt;

/// 스크리닝을 실행하고 순위표를 출력합니다.
///
/// `min_score`가 지정되면 상위 N 대신 최소 스코어 기준으로 필터링합니다.
pub async fn run<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    market: Market,
    preset: ScorePreset,
    top_n: usize,
    min_score: Option<f64>,
) -> anyhow::Result<()> {
    let universe = market_tickers(market);
    println!(
        "시장: {} | 프리셋: {} | 대상 종목: {}개",
        market,
        preset,
        universe.len()
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("시세 수집 및 스코어링 중...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let results = match min_score {
        Some(min) => screen_by_criteria(gateway, universe, min, preset).await,
        None => run_screening(gateway, market, preset, top_n).await,
    };

    spinner.finish_and_clear();
    print_results(&results);
    Ok(())
}

fn print_results(results: &[ScreenedStock]) {
    if results.is_empty() {
        println!("조건에 맞는 종목이 없습니다");
        return;
    }

    println!(
        "{:<4} {:<10} {:>7} {:>7} {:>6} {:>6} {:>6} {:>6}  종목명",
        "순위", "티커", "스코어", "PER", "PBR", "배당%", "ROE%", "성장%"
    );
    println!("{}", "-".repeat(72));

    for (rank, stock) in results.iter().enumerate() {
        println!(
            "{:<4} {:<10} {:>7.1} {:>7} {:>6} {:>6} {:>6} {:>6}  {}",
            rank + 1,
            stock.ticker,
            stock.score,
            fmt_opt(stock.per, 1),
            fmt_opt(stock.pbr, 2),
            fmt_opt(stock.dividend_yield, 2),
            fmt_opt(stock.roe, 1),
            fmt_opt(stock.revenue_growth, 1),
            stock.name,
        );
    }
}
