//! 시장별 티커 유니버스.
//!
//! 실운용에서는 거래소 종목 일람에서 로드하지만, 여기서는 시장별
//! 대표 종목 목록을 제공합니다. 티커는 제공자 형식입니다
//! (비미국 종목은 거래소 접미사 포함).

use screener_core::Market;

/// JPX(일본거래소) 대표 종목.
const JPX_TICKERS: &[&str] = &[
    "7203.T", // トヨタ自動車
    "6758.T", // ソニーグループ
    "9984.T", // ソフトバンクグループ
    "6861.T", // キーエンス
    "8306.T", // 三菱UFJフィナンシャル・グループ
    "9432.T", // 日本電信電話
    "6501.T", // 日立製作所
    "7741.T", // HOYA
    "4063.T", // 信越化学工業
    "8035.T", // 東京エレクトロン
    "6902.T", // デンソー
    "4502.T", // 武田薬品工業
    "6098.T", // リクルートホールディングス
    "7974.T", // 任天堂
    "9433.T", // KDDI
    "6367.T", // ダイキン工業
    "4661.T", // オリエンタルランド
    "6594.T", // 日本電産
    "3382.T", // セブン&アイ・ホールディングス
    "8058.T", // 三菱商事
];

/// 미국 시장 대표 종목.
const US_TICKERS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "BRK-B", "JPM", "JNJ", "V", "PG",
    "UNH", "HD", "MA", "DIS", "BAC", "XOM", "PFE", "KO",
];

/// 아세안 시장 대표 종목.
const ASEAN_TICKERS: &[&str] = &[
    "D05.SI",    // DBS Group (Singapore)
    "O39.SI",    // OCBC Bank (Singapore)
    "U11.SI",    // UOB (Singapore)
    "BBCA.JK",   // Bank Central Asia (Indonesia)
    "TLKM.JK",   // Telkom Indonesia
    "BBRI.JK",   // Bank Rakyat Indonesia
    "PTT.BK",    // PTT (Thailand)
    "SCC.BK",    // Siam Cement (Thailand)
    "ADVANC.BK", // Advanced Info Service (Thailand)
    "TEL.PS",    // PLDT (Philippines)
];

/// 홍콩 시장 대표 종목.
const HK_TICKERS: &[&str] = &[
    "0700.HK", // Tencent
    "9988.HK", // Alibaba
    "0005.HK", // HSBC
    "1299.HK", // AIA Group
    "0941.HK", // China Mobile
    "2318.HK", // Ping An Insurance
    "0388.HK", // HKEX
    "0003.HK", // CK Infrastructure
    "0001.HK", // CK Hutchison
    "1398.HK", // ICBC
];

/// 시장의 티커 유니버스를 반환합니다.
///
/// [`Market`]은 닫힌 열거형이므로 알 수 없는 시장은 파싱 단계에서
/// 이미 거부되어 여기까지 도달하지 않습니다.
pub fn market_tickers(market: Market) -> &'static [&'static str] {
    match market {
        Market::Jpx => JPX_TICKERS,
        Market::Us => US_TICKERS,
        Market::Asean => ASEAN_TICKERS,
        Market::Hk => HK_TICKERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_sizes() {
        assert_eq!(market_tickers(Market::Jpx).len(), 20);
        assert_eq!(market_tickers(Market::Us).len(), 20);
        assert_eq!(market_tickers(Market::Asean).len(), 10);
        assert_eq!(market_tickers(Market::Hk).len(), 10);
    }

    #[test]
    fn test_no_market_is_empty() {
        for market in Market::ALL {
            assert!(!market_tickers(market).is_empty());
        }
    }

    #[test]
    fn test_non_us_tickers_carry_exchange_suffix() {
        assert!(market_tickers(Market::Jpx).iter().all(|t| t.ends_with(".T")));
        assert!(market_tickers(Market::Hk).iter().all(|t| t.ends_with(".HK")));
    }
}
