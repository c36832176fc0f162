//! 과거 시세 조회 명령.

use screener_data::{MarketDataGateway, QuoteProvider};

/// 과거 일봉을 조회하고 최근 구간을 출력합니다.
pub async fn run<P: QuoteProvider>(
    gateway: &mut MarketDataGateway<P>,
    ticker: &str,
    period: &str,
) -> anyhow::Result<()> {
    let candles = gateway.get_historical_data(ticker, period).await;

    if candles.is_empty() {
        println!("{}의 과거 시세를 가져올 수 없습니다 (기간: {})", ticker, period);
        return Ok(());
    }

    let first = &candles[0];
    let last = &candles[candles.len() - 1];
    let change_pct = if first.close > 0.0 {
        (last.close - first.close) / first.close * 100.0
    } else {
        0.0
    };

    println!(
        "종목: {} | 기간: {} | 캔들 수: {} | 기간 수익률: {:+.1}%",
        ticker,
        period,
        candles.len(),
        change_pct
    );
    println!();
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "일자", "시가", "고가", "저가", "종가", "거래량"
    );
    println!("{}", "-".repeat(68));

    // 최근 10일만 표시
    for candle in candles.iter().rev().take(10).rev() {
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
            candle.date, candle.open, candle.high, candle.low, candle.close, candle.volume
        );
    }

    Ok(())
}
