//! Scan predicate registry.
//!
//! Each scan is a pure function over a universe: filter by the scan's
//! criteria, stable-sort by its ranking key, cap at [`RESULT_CAP`]. The
//! registry is a closed enum keyed by the catalogue's `logic_key` strings,
//! so dispatch is exhaustive and an unknown key surfaces as `None` at the
//! parse step rather than deep inside the pipeline.
//!
//! Missing optional metrics compare as `0.0` here, the same silent-default
//! rule the secondary filter engine applies.

use crate::constants::{ALL_TIME_HIGH_RATIO, NEAR_EXTREME_RATIO, RESULT_CAP};
use crate::models::{AssetRecord, AssetType, NewsSentiment};
use std::cmp::Ordering;

/// Sort direction for a scan's ranking key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Descending,
    Ascending,
}

/// Filter, stable-sort and cap a universe. Ties keep input order, so a scan
/// is reproducible for a given universe snapshot.
fn take_top<P, K>(data: &[AssetRecord], keep: P, key: K, direction: Direction) -> Vec<AssetRecord>
where
    P: Fn(&AssetRecord) -> bool,
    K: Fn(&AssetRecord) -> f64,
{
    let mut matched: Vec<AssetRecord> = data.iter().filter(|a| keep(a)).cloned().collect();
    matched.sort_by(|a, b| {
        let ordering = match direction {
            Direction::Descending => key(b).partial_cmp(&key(a)),
            Direction::Ascending => key(a).partial_cmp(&key(b)),
        };
        ordering.unwrap_or(Ordering::Equal)
    });
    matched.truncate(RESULT_CAP);
    matched
}

fn is_equity(a: &AssetRecord) -> bool {
    a.asset_type == AssetType::Equity
}

fn is_crypto(a: &AssetRecord) -> bool {
    a.asset_type == AssetType::Crypto
}

/// Every scan the registry knows how to run, one variant per logic key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanKind {
    // Directional and activity scans
    TopGainers,
    TopLosers,
    CryptoTopGainers,
    CryptoTopLosers,
    MostActive,
    CryptoMostActive,
    Near52wHigh,
    NearAth,
    LargeDeals,
    WhaleMovements,
    NewsLinkedMoves,
    // Equity screeners
    LowPeHighRoce,
    HighDividendYield,
    HighDividend,
    RsiOversoldScan,
    DebtAllTimeLow,
    PriceAllTimeHigh,
    IpoGainers,
    LowDebtEquity,
    HighEpsGrowth,
    RsiOversold,
    MacdBullishCrossover,
    SmaGoldenCross,
    HighVolume,
    // Crypto screeners
    HighMarketCapCrypto,
    HighVolume24h,
    HealthyTokenomics,
    HighActiveAddresses,
    LowGasFees,
    HighTvl,
    HighStakingRatio,
    CryptoRsiOversold,
    CryptoMacdBullish,
    // Cross-asset screeners
    Momentum,
    Value,
    HighCredibility,
    NewsSentimentPositive,
}

impl ScanKind {
    /// Resolve a catalogue `logic_key` to a scan, if one is registered
    pub fn from_key(key: &str) -> Option<ScanKind> {
        let kind = match key {
            "topGainers" => ScanKind::TopGainers,
            "topLosers" => ScanKind::TopLosers,
            "cryptoTopGainers" => ScanKind::CryptoTopGainers,
            "cryptoTopLosers" => ScanKind::CryptoTopLosers,
            "mostActive" => ScanKind::MostActive,
            "cryptoMostActive" => ScanKind::CryptoMostActive,
            "near52wHigh" => ScanKind::Near52wHigh,
            "nearATH" => ScanKind::NearAth,
            "largeDeals" => ScanKind::LargeDeals,
            "whaleMovements" => ScanKind::WhaleMovements,
            "newsLinkedMoves" => ScanKind::NewsLinkedMoves,
            "lowPE_highROCE" => ScanKind::LowPeHighRoce,
            "highDividendYield" => ScanKind::HighDividendYield,
            "highDividend" => ScanKind::HighDividend,
            "rsiOversoldScan" => ScanKind::RsiOversoldScan,
            "debtAllTimeLow" => ScanKind::DebtAllTimeLow,
            "priceAllTimeHigh" => ScanKind::PriceAllTimeHigh,
            "ipoGainers" => ScanKind::IpoGainers,
            "lowDebtEquity" => ScanKind::LowDebtEquity,
            "highEPSGrowth" => ScanKind::HighEpsGrowth,
            "rsiOversold" => ScanKind::RsiOversold,
            "macdBullishCrossover" => ScanKind::MacdBullishCrossover,
            "smaGoldenCross" => ScanKind::SmaGoldenCross,
            "highVolume" => ScanKind::HighVolume,
            "highMarketCapCrypto" => ScanKind::HighMarketCapCrypto,
            "highVolume24h" => ScanKind::HighVolume24h,
            "healthyTokenomics" => ScanKind::HealthyTokenomics,
            "highActiveAddresses" => ScanKind::HighActiveAddresses,
            "lowGasFees" => ScanKind::LowGasFees,
            "highTVL" => ScanKind::HighTvl,
            "highStakingRatio" => ScanKind::HighStakingRatio,
            "cryptoRSIOversold" => ScanKind::CryptoRsiOversold,
            "cryptoMACDBullish" => ScanKind::CryptoMacdBullish,
            "momentum" => ScanKind::Momentum,
            "value" => ScanKind::Value,
            "highCredibility" => ScanKind::HighCredibility,
            "newsSentimentPositive" => ScanKind::NewsSentimentPositive,
            _ => return None,
        };
        Some(kind)
    }

    /// The catalogue `logic_key` form of this scan
    pub fn key(&self) -> &'static str {
        match self {
            ScanKind::TopGainers => "topGainers",
            ScanKind::TopLosers => "topLosers",
            ScanKind::CryptoTopGainers => "cryptoTopGainers",
            ScanKind::CryptoTopLosers => "cryptoTopLosers",
            ScanKind::MostActive => "mostActive",
            ScanKind::CryptoMostActive => "cryptoMostActive",
            ScanKind::Near52wHigh => "near52wHigh",
            ScanKind::NearAth => "nearATH",
            ScanKind::LargeDeals => "largeDeals",
            ScanKind::WhaleMovements => "whaleMovements",
            ScanKind::NewsLinkedMoves => "newsLinkedMoves",
            ScanKind::LowPeHighRoce => "lowPE_highROCE",
            ScanKind::HighDividendYield => "highDividendYield",
            ScanKind::HighDividend => "highDividend",
            ScanKind::RsiOversoldScan => "rsiOversoldScan",
            ScanKind::DebtAllTimeLow => "debtAllTimeLow",
            ScanKind::PriceAllTimeHigh => "priceAllTimeHigh",
            ScanKind::IpoGainers => "ipoGainers",
            ScanKind::LowDebtEquity => "lowDebtEquity",
            ScanKind::HighEpsGrowth => "highEPSGrowth",
            ScanKind::RsiOversold => "rsiOversold",
            ScanKind::MacdBullishCrossover => "macdBullishCrossover",
            ScanKind::SmaGoldenCross => "smaGoldenCross",
            ScanKind::HighVolume => "highVolume",
            ScanKind::HighMarketCapCrypto => "highMarketCapCrypto",
            ScanKind::HighVolume24h => "highVolume24h",
            ScanKind::HealthyTokenomics => "healthyTokenomics",
            ScanKind::HighActiveAddresses => "highActiveAddresses",
            ScanKind::LowGasFees => "lowGasFees",
            ScanKind::HighTvl => "highTVL",
            ScanKind::HighStakingRatio => "highStakingRatio",
            ScanKind::CryptoRsiOversold => "cryptoRSIOversold",
            ScanKind::CryptoMacdBullish => "cryptoMACDBullish",
            ScanKind::Momentum => "momentum",
            ScanKind::Value => "value",
            ScanKind::HighCredibility => "highCredibility",
            ScanKind::NewsSentimentPositive => "newsSentimentPositive",
        }
    }

    /// Whether the orchestrator wraps this scan with sector-aware diversity
    /// selection. Only the newer screener pages opted in.
    pub fn uses_sector_diversity(&self) -> bool {
        matches!(
            self,
            ScanKind::HighDividend
                | ScanKind::RsiOversoldScan
                | ScanKind::DebtAllTimeLow
                | ScanKind::PriceAllTimeHigh
                | ScanKind::IpoGainers
        )
    }

    /// Run the scan against a universe.
    ///
    /// Pure: the input is never mutated and repeated runs over the same
    /// snapshot return identical output.
    pub fn run(&self, data: &[AssetRecord]) -> Vec<AssetRecord> {
        use Direction::{Ascending, Descending};

        match self {
            ScanKind::TopGainers => take_top(
                data,
                |a| {
                    is_equity(a)
                        && a.daily_change_pct.is_some()
                        && a.daily_change_pct.unwrap_or(0.0) > 0.0
                },
                |a| a.daily_change_pct.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::TopLosers => take_top(
                data,
                |a| {
                    is_equity(a)
                        && a.daily_change_pct.is_some()
                        && a.daily_change_pct.unwrap_or(0.0) < 0.0
                },
                |a| a.daily_change_pct.unwrap_or(0.0),
                Ascending,
            ),
            ScanKind::CryptoTopGainers => take_top(
                data,
                |a| {
                    is_crypto(a)
                        && a.daily_change_pct.is_some()
                        && a.daily_change_pct.unwrap_or(0.0) > 0.0
                },
                |a| a.daily_change_pct.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::CryptoTopLosers => take_top(
                data,
                |a| {
                    is_crypto(a)
                        && a.daily_change_pct.is_some()
                        && a.daily_change_pct.unwrap_or(0.0) < 0.0
                },
                |a| a.daily_change_pct.unwrap_or(0.0),
                Ascending,
            ),
            ScanKind::MostActive => take_top(data, is_equity, |a| a.volume, Descending),
            ScanKind::CryptoMostActive => take_top(
                data,
                is_crypto,
                |a| a.volume_24h.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::Near52wHigh => take_top(
                data,
                |a| is_equity(a) && a.close >= NEAR_EXTREME_RATIO * a.week52_high,
                |a| a.pct_from_52w_high,
                Descending,
            ),
            ScanKind::NearAth => take_top(
                data,
                |a| is_crypto(a) && a.close >= NEAR_EXTREME_RATIO * a.week52_high,
                |a| a.pct_from_52w_high,
                Descending,
            ),
            ScanKind::LargeDeals => take_top(
                data,
                |a| is_equity(a) && a.volume > 1_000_000.0,
                |a| a.volume,
                Descending,
            ),
            ScanKind::WhaleMovements => take_top(
                data,
                |a| is_crypto(a) && a.whale_activity_score.unwrap_or(0.0) > 70.0,
                |a| a.whale_activity_score.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::NewsLinkedMoves => take_top(
                data,
                |a| a.daily_change_pct.unwrap_or(0.0).abs() > 5.0,
                |a| a.daily_change_pct.unwrap_or(0.0).abs(),
                Descending,
            ),
            ScanKind::LowPeHighRoce => take_top(
                data,
                |a| is_equity(a) && a.pe < 20.0 && a.roce > 15.0,
                |a| a.roce,
                Descending,
            ),
            ScanKind::HighDividendYield => take_top(
                data,
                |a| is_equity(a) && a.div_yield > 3.0,
                |a| a.div_yield,
                Descending,
            ),
            ScanKind::HighDividend => take_top(
                data,
                |a| is_equity(a) && a.div_yield > 2.5,
                |a| a.div_yield,
                Descending,
            ),
            ScanKind::RsiOversoldScan => take_top(
                data,
                |a| is_equity(a) && a.rsi14 < 35.0,
                |a| a.rsi14,
                Ascending,
            ),
            ScanKind::DebtAllTimeLow => take_top(
                data,
                |a| is_equity(a) && a.debt_equity.unwrap_or(0.0) < 0.3,
                |a| a.debt_equity.unwrap_or(0.0),
                Ascending,
            ),
            ScanKind::PriceAllTimeHigh => take_top(
                data,
                |a| is_equity(a) && a.close >= ALL_TIME_HIGH_RATIO * a.week52_high,
                |a| a.pct_from_52w_high,
                Descending,
            ),
            ScanKind::IpoGainers => take_top(
                data,
                |a| {
                    is_equity(a)
                        && a.eps_growth.unwrap_or(0.0) > 30.0
                        && a.daily_change_pct.unwrap_or(0.0) > 0.0
                },
                |a| a.eps_growth.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::LowDebtEquity => take_top(
                data,
                |a| is_equity(a) && a.debt_equity.unwrap_or(0.0) < 0.5,
                |a| a.debt_equity.unwrap_or(0.0),
                Ascending,
            ),
            ScanKind::HighEpsGrowth => take_top(
                data,
                |a| is_equity(a) && a.eps_growth.unwrap_or(0.0) > 20.0,
                |a| a.eps_growth.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::RsiOversold => take_top(
                data,
                |a| is_equity(a) && a.rsi14 < 30.0,
                |a| a.rsi14,
                Ascending,
            ),
            ScanKind::MacdBullishCrossover => take_top(
                data,
                |a| is_equity(a) && a.macd_line > a.macd_signal && a.macd_hist > 0.0,
                |a| a.macd_hist,
                Descending,
            ),
            ScanKind::SmaGoldenCross => take_top(
                data,
                |a| is_equity(a) && a.ma50 > a.ma200,
                |a| a.ma50 - a.ma200,
                Descending,
            ),
            ScanKind::HighVolume => take_top(data, is_equity, |a| a.volume, Descending),
            ScanKind::HighMarketCapCrypto => take_top(
                data,
                |a| is_crypto(a) && a.market_cap > 1_000_000_000.0,
                |a| a.market_cap,
                Descending,
            ),
            ScanKind::HighVolume24h => take_top(
                data,
                |a| is_crypto(a) && a.volume_24h.unwrap_or(0.0) > 100_000_000.0,
                |a| a.volume_24h.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::HealthyTokenomics => take_top(
                data,
                |a| is_crypto(a) && a.tokenomics_health.unwrap_or(0.0) > 80.0,
                |a| a.tokenomics_health.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::HighActiveAddresses => take_top(
                data,
                |a| is_crypto(a) && a.active_addresses.unwrap_or(0.0) > 100_000.0,
                |a| a.active_addresses.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::LowGasFees => take_top(
                data,
                |a| is_crypto(a) && a.gas_fees.unwrap_or(0.0) < 1.0,
                |a| a.gas_fees.unwrap_or(0.0),
                Ascending,
            ),
            ScanKind::HighTvl => take_top(
                data,
                |a| is_crypto(a) && a.tvl.unwrap_or(0.0) > 1_000_000_000.0,
                |a| a.tvl.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::HighStakingRatio => take_top(
                data,
                |a| is_crypto(a) && a.staking_ratio.unwrap_or(0.0) > 0.5,
                |a| a.staking_ratio.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::CryptoRsiOversold => take_top(
                data,
                |a| is_crypto(a) && a.rsi14 < 30.0,
                |a| a.rsi14,
                Ascending,
            ),
            ScanKind::CryptoMacdBullish => take_top(
                data,
                |a| is_crypto(a) && a.macd_line > a.macd_signal && a.macd_hist > 0.0,
                |a| a.macd_hist,
                Descending,
            ),
            ScanKind::Momentum => take_top(
                data,
                |a| a.rsi14 > 50.0 && a.close > a.ma50,
                |a| a.rsi14,
                Descending,
            ),
            ScanKind::Value => take_top(
                data,
                |a| is_equity(a) && a.pe > 0.0 && a.pe < 15.0 && a.roce > 10.0,
                |a| a.pe,
                Ascending,
            ),
            ScanKind::HighCredibility => take_top(
                data,
                |a| a.credibility_score.unwrap_or(0.0) > 80.0,
                |a| a.credibility_score.unwrap_or(0.0),
                Descending,
            ),
            ScanKind::NewsSentimentPositive => take_top(
                data,
                |a| a.news_sentiment == Some(NewsSentiment::Positive),
                |a| a.credibility_score.unwrap_or(0.0),
                Descending,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equity(symbol: &str) -> AssetRecord {
        AssetRecord {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: "Technology".to_string(),
            asset_type: AssetType::Equity,
            ..AssetRecord::default()
        }
    }

    fn crypto(symbol: &str) -> AssetRecord {
        AssetRecord {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: "Cryptocurrency".to_string(),
            asset_type: AssetType::Crypto,
            ..AssetRecord::default()
        }
    }

    #[test]
    fn test_key_round_trip_for_every_scan() {
        let kinds = [
            ScanKind::TopGainers,
            ScanKind::CryptoMostActive,
            ScanKind::LowPeHighRoce,
            ScanKind::HighTvl,
            ScanKind::NewsSentimentPositive,
        ];
        for kind in kinds {
            assert_eq!(ScanKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ScanKind::from_key("doesNotExist"), None);
        // Catalogue keys that never had predicates must not resolve
        assert_eq!(ScanKind::from_key("near52wLow"), None);
        assert_eq!(ScanKind::from_key("dividendGrowth"), None);
    }

    #[test]
    fn test_top_gainers_orders_by_change_and_skips_unchanged() {
        let universe = vec![
            AssetRecord {
                daily_change_pct: Some(7.0),
                ..equity("INFY")
            },
            AssetRecord {
                daily_change_pct: Some(12.0),
                ..equity("TCS")
            },
            AssetRecord {
                daily_change_pct: Some(-3.0),
                ..equity("WIPRO")
            },
            crypto("BTC"),
            crypto("ETH"),
            crypto("SOL"),
        ];

        let result = ScanKind::TopGainers.run(&universe);
        let symbols: Vec<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["TCS", "INFY"]);

        // The crypto rows carry no computed change, so the crypto directional
        // scans find nothing in this universe
        assert!(ScanKind::CryptoTopGainers.run(&universe).is_empty());
        assert!(ScanKind::CryptoTopLosers.run(&universe).is_empty());
    }

    #[test]
    fn test_top_losers_most_negative_first() {
        let universe = vec![
            AssetRecord {
                daily_change_pct: Some(-2.0),
                ..equity("A")
            },
            AssetRecord {
                daily_change_pct: Some(-9.0),
                ..equity("B")
            },
            AssetRecord {
                daily_change_pct: Some(4.0),
                ..equity("C")
            },
        ];
        let result = ScanKind::TopLosers.run(&universe);
        let symbols: Vec<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["B", "A"]);
    }

    #[test]
    fn test_rsi_oversold_boundary_is_strict() {
        let universe = vec![
            AssetRecord {
                rsi14: 29.9,
                ..equity("UNDER")
            },
            AssetRecord {
                rsi14: 30.0,
                ..equity("AT")
            },
        ];
        let result = ScanKind::RsiOversold.run(&universe);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "UNDER");
    }

    #[test]
    fn test_cap_invariant_on_large_universe() {
        let universe: Vec<AssetRecord> = (0..200)
            .map(|i| AssetRecord {
                volume: f64::from(i),
                ..equity(&format!("S{i}"))
            })
            .collect();
        let result = ScanKind::MostActive.run(&universe);
        assert_eq!(result.len(), RESULT_CAP);
        // Highest volume first
        assert_eq!(result[0].symbol, "S199");
    }

    #[test]
    fn test_run_does_not_mutate_and_is_deterministic() {
        let universe = vec![
            AssetRecord {
                rsi14: 62.0,
                close: 110.0,
                ma50: 100.0,
                ..equity("A")
            },
            AssetRecord {
                rsi14: 55.0,
                close: 210.0,
                ma50: 200.0,
                ..crypto("B")
            },
        ];
        let before = serde_json::to_string(&universe).expect("serialize");
        let first = ScanKind::Momentum.run(&universe);
        let second = ScanKind::Momentum.run(&universe);
        let after = serde_json::to_string(&universe).expect("serialize");

        assert_eq!(before, after);
        assert_eq!(
            serde_json::to_string(&first).expect("serialize"),
            serde_json::to_string(&second).expect("serialize")
        );
    }

    #[test]
    fn test_missing_debt_metric_passes_low_debt_scan() {
        // Documented silent-default: no debt_equity datum reads as 0.0, which
        // satisfies the "< 0.3" bound
        let universe = vec![equity("NODATA")];
        let result = ScanKind::DebtAllTimeLow.run(&universe);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_macd_bullish_requires_histogram_agreement() {
        let universe = vec![
            AssetRecord {
                macd_line: 2.0,
                macd_signal: 1.0,
                macd_hist: 1.0,
                ..equity("GOOD")
            },
            AssetRecord {
                macd_line: 2.0,
                macd_signal: 1.0,
                macd_hist: -0.5,
                ..equity("DIVERGED")
            },
        ];
        let result = ScanKind::MacdBullishCrossover.run(&universe);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "GOOD");
    }

    #[test]
    fn test_stable_tie_break_preserves_input_order() {
        let universe = vec![
            AssetRecord {
                volume: 500.0,
                ..equity("FIRST")
            },
            AssetRecord {
                volume: 500.0,
                ..equity("SECOND")
            },
        ];
        let result = ScanKind::MostActive.run(&universe);
        let symbols: Vec<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["FIRST", "SECOND"]);
    }
}
