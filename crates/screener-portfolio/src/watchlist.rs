//! 워치리스트 관리: 관심 종목 추적을 CSV로 영속화.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{PortfolioError, Result};

const WATCHLIST_FILE: &str = "watchlist.csv";

/// 워치리스트 엔트리.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// 티커
    pub ticker: String,
    /// 등록 이유
    pub reason: String,
    /// 등록 시각
    pub added_at: DateTime<Utc>,
}

/// 추가 요청의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// 새로 추가됨
    Added,
    /// 이미 등록되어 있음 (변경 없음)
    AlreadyWatched,
}

/// CSV 기반 워치리스트 저장소.
#[derive(Debug, Clone)]
pub struct WatchlistStore {
    data_dir: PathBuf,
}

impl WatchlistStore {
    /// 지정한 디렉토리를 사용하는 저장소를 생성합니다.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn watchlist_path(&self) -> PathBuf {
        self.data_dir.join(WATCHLIST_FILE)
    }

    fn ensure_file(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        if !self.watchlist_path().exists() {
            let mut writer = csv::Writer::from_path(self.watchlist_path())?;
            writer.write_record(["ticker", "reason", "added_at"])?;
            writer.flush()?;
        }
        Ok(())
    }

    /// 워치리스트를 읽어옵니다 (등록 순서 유지).
    pub fn entries(&self) -> Result<Vec<WatchlistEntry>> {
        self.ensure_file()?;
        let mut reader = csv::Reader::from_path(self.watchlist_path())?;
        let mut entries = Vec::new();
        for record in reader.deserialize() {
            entries.push(record?);
        }
        Ok(entries)
    }

    fn save(&self, entries: &[WatchlistEntry]) -> Result<()> {
        self.ensure_file()?;
        let mut writer = csv::Writer::from_path(self.watchlist_path())?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// 종목을 워치리스트에 추가합니다. 이미 있으면 변경하지 않습니다.
    pub fn add(&self, ticker: &str, reason: &str) -> Result<AddOutcome> {
        let mut entries = self.entries()?;

        if entries.iter().any(|e| e.ticker == ticker) {
            return Ok(AddOutcome::AlreadyWatched);
        }

        entries.push(WatchlistEntry {
            ticker: ticker.to_string(),
            reason: reason.to_string(),
            added_at: Utc::now(),
        });
        self.save(&entries)?;

        info!(ticker = ticker, "워치리스트에 추가");
        Ok(AddOutcome::Added)
    }

    /// 종목을 워치리스트에서 제거합니다.
    ///
    /// 등록되지 않은 종목은 [`PortfolioError::NotFound`]를 반환합니다.
    pub fn remove(&self, ticker: &str) -> Result<()> {
        let mut entries = self.entries()?;
        let before = entries.len();
        entries.retain(|e| e.ticker != ticker);

        if entries.len() == before {
            return Err(PortfolioError::NotFound(ticker.to_string()));
        }

        self.save(&entries)?;
        info!(ticker = ticker, "워치리스트에서 제거");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, WatchlistStore) {
        let dir = TempDir::new().unwrap();
        let store = WatchlistStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_add_and_list() {
        let (_dir, store) = store();
        assert_eq!(store.add("7203.T", "저PER").unwrap(), AddOutcome::Added);

        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ticker, "7203.T");
        assert_eq!(entries[0].reason, "저PER");
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let (_dir, store) = store();
        store.add("7203.T", "저PER").unwrap();
        assert_eq!(
            store.add("7203.T", "다른 이유").unwrap(),
            AddOutcome::AlreadyWatched
        );

        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 1);
        // 기존 등록 이유가 유지된다
        assert_eq!(entries[0].reason, "저PER");
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = store();
        store.add("7203.T", "").unwrap();
        store.add("AAPL", "").unwrap();

        store.remove("7203.T").unwrap();
        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ticker, "AAPL");
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let (_dir, store) = store();
        let err = store.remove("NOPE").unwrap_err();
        assert!(matches!(err, PortfolioError::NotFound(_)));
    }

    #[test]
    fn test_entries_survive_reload() {
        let dir = TempDir::new().unwrap();
        {
            let store = WatchlistStore::new(dir.path());
            store.add("7203.T", "저PER").unwrap();
        }

        let store = WatchlistStore::new(dir.path());
        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ticker, "7203.T");
    }

    #[test]
    fn test_empty_watchlist() {
        let (_dir, store) = store();
        assert!(store.entries().unwrap().is_empty());
    }
}
