//! 워치리스트 관리 명령.

use screener_portfolio::{AddOutcome, WatchlistStore};

/// 워치리스트를 출력합니다.
pub fn show(store: &WatchlistStore) -> anyhow::Result<()> {
    let entries = store.entries()?;
    if entries.is_empty() {
        println!("워치리스트가 비어 있습니다");
        return Ok(());
    }

    println!("{:<12} {:<30} {:<12}", "티커", "이유", "등록일");
    println!("{}", "-".repeat(56));
    for entry in entries {
        println!(
            "{:<12} {:<30} {:<12}",
            entry.ticker,
            entry.reason,
            entry.added_at.format("%Y-%m-%d"),
        );
    }
    Ok(())
}

/// 종목을 워치리스트에 추가합니다.
pub fn add(store: &WatchlistStore, ticker: &str, reason: &str) -> anyhow::Result<()> {
    match store.add(ticker, reason)? {
        AddOutcome::Added => println!("워치리스트에 추가: {}", ticker),
        AddOutcome::AlreadyWatched => {
            println!("{}는 이미 워치리스트에 등록되어 있습니다", ticker)
        }
    }
    Ok(())
}

/// 종목을 워치리스트에서 제거합니다.
pub fn remove(store: &WatchlistStore, ticker: &str) -> anyhow::Result<()> {
    store.remove(ticker)?;
    println!("워치리스트에서 제거: {}", ticker);
    Ok(())
}
