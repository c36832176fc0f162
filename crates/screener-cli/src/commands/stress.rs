//! 스트레스 테스트 명령.

use screener_analytics::run_stress_test;
use screener_data::{MarketDataGateway, QuoteProvider};

/// 8개 시나리오 스트레스 테스트를 실행하고 결과표를 출력합니다.
pub async fn run<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    ticker: &str,
) -> anyhow::Result<()> {
    let report = run_stress_test(gateway, ticker).await?;

    let sector = if report.sector.is_empty() {
        "N/A"
    } else {
        report.sector.as_str()
    };
    println!(
        "종목: {} | 현재가: {:.2} | 섹터: {} (감응도 {:.1})",
        report.ticker, report.current_price, sector, report.sensitivity,
    );
    println!();
    println!("{:<22} {:>8} {:>12} {:>6}", "시나리오", "변동률", "예상 주가", "영향도");
    println!("{}", "-".repeat(54));

    for result in &report.results {
        println!(
            "{:<22} {:>+7.1}% {:>12.2} {:>6}",
            result.name, result.price_change_pct, result.estimated_price, result.impact
        );
    }

    if let Some(worst) = report.worst() {
        println!();
        println!(
            "최악 시나리오: {} ({:+.1}%) → {:.2}",
            worst.name, worst.price_change_pct, worst.estimated_price
        );
    }

    Ok(())
}
