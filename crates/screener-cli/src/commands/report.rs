//! 개별 종목 리포트 명령.

use screener_analytics::generate_report;
use screener_data::{MarketDataGateway, QuoteProvider};

use super::fmt_opt;

/// 종목 분석 리포트를 생성하고 출력합니다.
pub async fn run<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    ticker: &str,
) -> anyhow::Result<()> {
    let report = generate_report(gateway, ticker).await?;
    let info = &report.info;

    println!("=== {} ({}) ===", info.name, info.ticker);
    let sector = if info.sector.is_empty() { "N/A" } else { info.sector.as_str() };
    println!("섹터: {}", sector);
    println!("시가총액: {:.0}", info.market_cap);
    println!();
    println!("[밸류에이션 지표]");
    println!(
        "  PER: {}배  (스코어 {:.0}/25)",
        fmt_opt(info.per, 1),
        report.per_score
    );
    println!(
        "  PBR: {}배  (스코어 {:.0}/25)",
        fmt_opt(info.pbr, 2),
        report.pbr_score
    );
    println!();
    println!("[수익성 지표]");
    println!(
        "  배당수익률: {}%  (스코어 {:.0}/20)",
        fmt_opt(info.dividend_yield, 2),
        report.dividend_score
    );
    println!(
        "  ROE: {}%  (스코어 {:.0}/15)",
        fmt_opt(info.roe, 1),
        report.roe_score
    );
    println!(
        "  매출 성장률: {}%  (스코어 {:.0}/15)",
        fmt_opt(info.revenue_growth, 1),
        report.growth_score
    );
    println!();
    println!("[주가 정보]");
    println!("  현재가: {}", fmt_opt(info.current_price, 2));
    println!("  52주 최고가: {}", fmt_opt(info.fifty_two_week_high, 2));
    println!("  52주 최저가: {}", fmt_opt(info.fifty_two_week_low, 2));
    println!();
    println!("밸류 스코어: {:.1} / 100", report.value_score);
    println!("판정: {}", report.rating);

    Ok(())
}
