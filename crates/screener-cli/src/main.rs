//! 주식 스크리닝 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # JPX 시장을 밸류 프리셋으로 스크리닝
//! screener screen -m jpx -p value -n 20
//!
//! # 최소 스코어 기준 필터링
//! screener screen -m us -p dividend --min-score 60
//!
//! # 개별 종목 리포트 / 스트레스 테스트
//! screener report 7203.T
//! screener stress 7203.T
//!
//! # 포트폴리오/워치리스트 관리
//! screener portfolio buy 7203.T 100 2500
//! screener watchlist add 6758.T --reason "저PBR"
//! ```

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::error;

use screener_cli::commands;
use screener_core::{init_logging, AppConfig, LogConfig, Market, ScorePreset};
use screener_data::{MarketDataGateway, YahooProvider};
use screener_portfolio::{PortfolioStore, WatchlistStore};

#[derive(Parser)]
#[command(name = "screener")]
#[command(about = "주식 스크리닝 시스템 - 밸류 스코어 기반 종목 발굴", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 저평가 종목 스크리닝 실행
    Screen {
        /// 대상 시장 (jpx, us, asean, hk)
        #[arg(short, long, default_value = "jpx")]
        market: String,

        /// 스코어링 프리셋 (value, growth, dividend, balanced)
        #[arg(short, long, default_value = "value")]
        preset: String,

        /// 상위 N 종목 표시
        #[arg(short = 'n', long, default_value = "20")]
        top_n: usize,

        /// 최소 스코어 필터링 (지정 시 상위 N 대신 적용)
        #[arg(long)]
        min_score: Option<f64>,
    },

    /// 개별 종목 분석 리포트 생성
    Report {
        /// 분석 대상 티커 (예: 7203.T, AAPL)
        ticker: String,
    },

    /// 스트레스 테스트 (8개 매크로 시나리오)
    Stress {
        /// 대상 티커
        ticker: String,
    },

    /// 과거 일봉 시세 조회
    History {
        /// 대상 티커
        ticker: String,

        /// 조회 기간 (예: 1mo, 6mo, 1y)
        #[arg(short, long, default_value = "1y")]
        period: String,
    },

    /// 포트폴리오 관리
    Portfolio {
        #[command(subcommand)]
        action: PortfolioAction,
    },

    /// 워치리스트 관리
    Watchlist {
        #[command(subcommand)]
        action: WatchlistAction,
    },

    /// 지원 시장 목록 출력
    Markets,
}

#[derive(Subcommand)]
enum PortfolioAction {
    /// 보유 현황 출력
    Show,
    /// 매수 기록
    Buy {
        /// 티커
        ticker: String,
        /// 수량
        shares: i64,
        /// 체결 가격
        price: Decimal,
    },
    /// 매도 기록 (실현 손익 출력)
    Sell {
        /// 티커
        ticker: String,
        /// 수량
        shares: i64,
        /// 체결 가격
        price: Decimal,
    },
    /// 보유 종목 시세 평가
    Health,
}

#[derive(Subcommand)]
enum WatchlistAction {
    /// 워치리스트 출력
    Show,
    /// 종목 추가
    Add {
        /// 티커
        ticker: String,
        /// 등록 이유
        #[arg(short, long, default_value = "")]
        reason: String,
    },
    /// 종목 제거
    Remove {
        /// 티커
        ticker: String,
    },
}

fn build_gateway(config: &AppConfig) -> anyhow::Result<MarketDataGateway<YahooProvider>> {
    let provider = YahooProvider::new(config.data.request_timeout_secs)?;
    Ok(MarketDataGateway::from_config(provider, &config.data))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load_or_default();

    let log_config = LogConfig::new(&config.logging.level)
        .with_format(config.logging.format.parse().unwrap_or_default());
    init_logging(log_config).map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            market,
            preset,
            top_n,
            min_score,
        } => {
            // 알 수 없는 시장은 하드 에러, 알 수 없는 프리셋은 balanced 폴백
            let market: Market = market.parse()?;
            let preset = ScorePreset::from_name(&preset);

            let mut gateway = build_gateway(&config)?;
            if let Err(e) = commands::screen::run(&mut gateway, market, preset, top_n, min_score).await
            {
                error!(error = %e, "스크리닝 실패");
                return Err(e);
            }
        }

        Commands::Report { ticker } => {
            let mut gateway = build_gateway(&config)?;
            commands::report::run(&mut gateway, &ticker).await?;
        }

        Commands::Stress { ticker } => {
            let mut gateway = build_gateway(&config)?;
            commands::stress::run(&mut gateway, &ticker).await?;
        }

        Commands::History { ticker, period } => {
            let mut gateway = build_gateway(&config)?;
            commands::history::run(&mut gateway, &ticker, &period).await?;
        }

        Commands::Portfolio { action } => {
            let store = PortfolioStore::new(&config.storage.data_dir);
            match action {
                PortfolioAction::Show => commands::portfolio::show(&store)?,
                PortfolioAction::Buy {
                    ticker,
                    shares,
                    price,
                } => commands::portfolio::buy(&store, &ticker, shares, price)?,
                PortfolioAction::Sell {
                    ticker,
                    shares,
                    price,
                } => commands::portfolio::sell(&store, &ticker, shares, price)?,
                PortfolioAction::Health => {
                    let mut gateway = build_gateway(&config)?;
                    commands::portfolio::health(&store, &mut gateway).await?;
                }
            }
        }

        Commands::Watchlist { action } => {
            let store = WatchlistStore::new(&config.storage.data_dir);
            match action {
                WatchlistAction::Show => commands::watchlist::show(&store)?,
                WatchlistAction::Add { ticker, reason } => {
                    commands::watchlist::add(&store, &ticker, &reason)?
                }
                WatchlistAction::Remove { ticker } => {
                    commands::watchlist::remove(&store, &ticker)?
                }
            }
        }

        Commands::Markets => {
            println!("{:<8} {:>10}", "시장", "종목 수");
            println!("{}", "-".repeat(20));
            for market in Market::ALL {
                println!(
                    "{:<8} {:>10}",
                    market,
                    screener_data::market_tickers(market).len()
                );
            }
        }
    }

    Ok(())
}
