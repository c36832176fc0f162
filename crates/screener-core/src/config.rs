//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 파일(TOML)과 환경 변수(`SCREENER__` 접두사)에서 로드할 수 있습니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 데이터 수집 설정
    #[serde(default)]
    pub data: DataConfig,
    /// 스크리닝 기본값 설정
    #[serde(default)]
    pub screening: ScreeningConfig,
    /// 로컬 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 데이터 수집 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// 시세 응답 캐시 TTL (시간)
    pub cache_ttl_hours: u64,
    /// 외부 API 호출 최소 간격 (밀리초)
    pub rate_limit_ms: u64,
    /// HTTP 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            cache_ttl_hours: 24,
            rate_limit_ms: 1000,
            request_timeout_secs: 10,
        }
    }
}

/// 스크리닝 기본값 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScreeningConfig {
    /// 기본 대상 시장
    pub default_market: String,
    /// 기본 스코어링 프리셋
    pub default_preset: String,
    /// 기본 상위 표시 종목 수
    pub default_top_n: usize,
    /// 조건 필터링 기본 최소 스코어
    pub default_min_score: f64,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            default_market: "jpx".to_string(),
            default_preset: "value".to_string(),
            default_top_n: 20,
            default_min_score: 50.0,
        }
    }
}

/// 로컬 저장소 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// 포트폴리오/워치리스트 CSV 디렉토리
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "output".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("SCREENER")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값을 사용합니다.
    pub fn load_or_default() -> Self {
        let path = Path::new("config/default.toml");
        if path.exists() {
            match Self::load(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(error = %e, "설정 파일 로드 실패, 기본값 사용");
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.data.cache_ttl_hours, 24);
        assert_eq!(config.data.rate_limit_ms, 1000);
        assert_eq!(config.screening.default_top_n, 20);
        assert_eq!(config.storage.data_dir, "output");
    }
}
