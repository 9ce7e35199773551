//! Merge step: joins the per-source rows into [`AssetRecord`]s.
//!
//! Fundamentals and technicals join by symbol; news sentiment is a majority
//! vote over related articles; credibility and whale-activity scores attach
//! with a neutral default of 50 when no source row covers the symbol.
//!
//! The extended fundamental and technical fields have no real source feed —
//! they are enriched with banded pseudo-random values so every screener has
//! realistic spread to work with. This is the only nondeterministic step in
//! the pipeline; everything downstream of the merged records is pure.

use crate::models::{
    AssetRecord, AssetType, CredibilityScore, CryptoFundamentalRow, FundamentalRow, NewsItem,
    NewsSentiment, ScanCategory, TechnicalRow, Universe, WhaleTransaction,
};
use crate::services::sample_data;
use rand::Rng;

/// Neutral score used when no credibility or whale data covers a symbol
const NEUTRAL_SCORE: f64 = 50.0;

/// Draw from one of several uniform bands, picked by cumulative probability.
/// The last band's cutoff must be 1.0.
fn banded(rng: &mut impl Rng, bands: &[(f64, f64, f64)]) -> f64 {
    let roll: f64 = rng.gen();
    for &(cutoff, lo, hi) in bands {
        if roll < cutoff {
            return rng.gen_range(lo..hi);
        }
    }
    0.0
}

/// Majority vote over the news related to a symbol
fn sentiment_for(symbol: &str, news: &[NewsItem]) -> NewsSentiment {
    let related = news.iter().filter(|n| n.related_assets.iter().any(|s| s == symbol));
    let mut positive = 0usize;
    let mut negative = 0usize;
    for item in related {
        match item.sentiment {
            NewsSentiment::Positive => positive += 1,
            NewsSentiment::Negative => negative += 1,
            NewsSentiment::Neutral => {}
        }
    }
    if positive > negative {
        NewsSentiment::Positive
    } else if negative > positive {
        NewsSentiment::Negative
    } else {
        NewsSentiment::Neutral
    }
}

fn credibility_for(symbol: &str, scores: &[CredibilityScore]) -> f64 {
    scores
        .iter()
        .find(|s| s.asset_symbol == symbol)
        .map(|s| s.overall_score)
        .unwrap_or(NEUTRAL_SCORE)
}

/// Mean credibility of a symbol's observed whale transactions
fn whale_score_for(symbol: &str, whales: &[WhaleTransaction]) -> f64 {
    let scores: Vec<f64> = whales
        .iter()
        .filter(|w| w.asset_symbol == symbol)
        .map(|w| w.credibility_score)
        .collect();
    if scores.is_empty() {
        NEUTRAL_SCORE
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Join equity fundamentals with technicals and enrich the extended fields.
/// Fundamental rows without a matching technical row are skipped.
pub fn merge_equity_assets(
    fundamentals: &[FundamentalRow],
    technicals: &[TechnicalRow],
    news: &[NewsItem],
    credibility: &[CredibilityScore],
) -> Universe {
    let mut rng = rand::thread_rng();
    let mut merged = Vec::with_capacity(fundamentals.len());

    for fund in fundamentals {
        let Some(tech) = technicals.iter().find(|t| t.symbol == fund.symbol) else {
            continue;
        };

        let above_vwap = rng.gen_bool(0.7);
        let below_vwap = rng.gen_bool(0.3);

        merged.push(AssetRecord {
            symbol: fund.symbol.clone(),
            name: fund.name.clone(),
            sector: fund.sector.clone(),
            asset_type: AssetType::Equity,
            price: fund.price,
            market_cap: fund.market_cap,
            volume: tech.volume,
            volume_24h: None,
            daily_change: Some(fund.price - tech.close),
            daily_change_pct: Some(rng.gen_range(-10.0..10.0)),
            pe: fund.pe,
            roe: fund.roe,
            roce: fund.roce,
            div_yield: fund.div_yield,
            debt_equity: fund.debt_equity,
            eps_growth: fund.eps_growth,
            pb_ratio: Some(banded(
                &mut rng,
                &[(0.2, 0.5, 1.0), (0.4, 1.0, 2.0), (0.7, 2.0, 4.0), (1.0, 4.0, 7.0)],
            )),
            ev_ebitda: Some(banded(
                &mut rng,
                &[(0.3, 5.0, 10.0), (0.6, 10.0, 20.0), (1.0, 20.0, 35.0)],
            )),
            current_ratio: Some(banded(
                &mut rng,
                &[(0.2, 0.5, 1.0), (0.5, 1.0, 2.0), (0.8, 2.0, 3.5), (1.0, 3.5, 5.5)],
            )),
            quick_ratio: Some(banded(
                &mut rng,
                &[(0.3, 0.3, 0.8), (0.7, 0.8, 1.5), (1.0, 1.5, 3.0)],
            )),
            revenue_growth_yoy: Some(banded(
                &mut rng,
                &[(0.2, -20.0, 0.0), (0.4, 0.0, 10.0), (0.7, 10.0, 25.0), (1.0, 25.0, 55.0)],
            )),
            revenue_growth_qoq: Some(banded(
                &mut rng,
                &[(0.3, -5.0, 5.0), (0.7, 5.0, 15.0), (1.0, 15.0, 30.0)],
            )),
            profit_margin_net: Some(banded(
                &mut rng,
                &[(0.2, 0.0, 5.0), (0.5, 5.0, 15.0), (0.8, 15.0, 25.0), (1.0, 25.0, 40.0)],
            )),
            profit_margin_operating: Some(banded(
                &mut rng,
                &[(0.1, 0.0, 10.0), (0.4, 10.0, 25.0), (0.8, 25.0, 40.0), (1.0, 40.0, 60.0)],
            )),
            insider_buying: Some(banded(
                &mut rng,
                &[(0.3, 0.0, 30.0), (0.6, 30.0, 70.0), (1.0, 70.0, 100.0)],
            )),
            promoter_holding_change: Some(banded(
                &mut rng,
                &[(0.3, -5.0, 0.0), (0.6, 0.0, 2.0), (1.0, 2.0, 10.0)],
            )),
            institutional_holdings_fii: Some(banded(
                &mut rng,
                &[(0.2, 5.0, 15.0), (0.6, 15.0, 35.0), (1.0, 35.0, 60.0)],
            )),
            institutional_holdings_dii: Some(banded(
                &mut rng,
                &[(0.3, 5.0, 15.0), (0.7, 15.0, 30.0), (1.0, 30.0, 50.0)],
            )),
            close: tech.close,
            ma50: tech.ma50,
            ma200: tech.ma200,
            rsi14: tech.rsi14,
            macd_line: tech.macd_line,
            macd_signal: tech.macd_signal,
            macd_hist: tech.macd_hist,
            week52_high: tech.week52_high,
            week52_low: tech.week52_low,
            pct_from_52w_high: tech.pct_from_52w_high,
            pct_from_52w_low: tech.pct_from_52w_low,
            ma100: Some(
                tech.close
                    * banded(
                        &mut rng,
                        &[(0.3, 0.90, 0.95), (0.7, 0.95, 1.05), (1.0, 1.05, 1.15)],
                    ),
            ),
            ema12: Some(tech.close * banded(&mut rng, &[(0.4, 0.95, 1.0), (1.0, 1.0, 1.05)])),
            ema26: Some(
                tech.close
                    * banded(
                        &mut rng,
                        &[(0.3, 0.9, 1.0), (0.7, 0.95, 1.05), (1.0, 1.05, 1.15)],
                    ),
            ),
            ema50: Some(tech.ma50),
            ema200: Some(tech.ma200),
            bollinger_upper: Some(tech.close * rng.gen_range(1.02..1.10)),
            bollinger_middle: Some(tech.close * rng.gen_range(0.95..1.05)),
            bollinger_lower: Some(tech.close * rng.gen_range(0.90..0.98)),
            atr: Some(
                tech.close
                    * banded(
                        &mut rng,
                        &[(0.3, 0.01, 0.03), (0.7, 0.03, 0.07), (1.0, 0.07, 0.12)],
                    ),
            ),
            volume_surge: Some(banded(
                &mut rng,
                &[(0.4, 1.0, 3.0), (0.7, 3.0, 6.0), (1.0, 6.0, 11.0)],
            )),
            gap_up: Some(rng.gen_bool(0.15)),
            gap_down: Some(rng.gen_bool(0.15)),
            price_above_vwap: Some(above_vwap),
            price_below_vwap: Some(below_vwap),
            vwap: Some(tech.close * rng.gen_range(0.95..1.05)),
            circulating_supply: None,
            total_supply: None,
            max_supply: None,
            tokenomics_health: None,
            active_addresses: None,
            gas_fees: None,
            tvl: None,
            staking_ratio: None,
            credibility_score: Some(credibility_for(&fund.symbol, credibility)),
            news_sentiment: Some(sentiment_for(&fund.symbol, news)),
            whale_activity_score: None,
        });
    }

    merged
}

/// Build crypto records from fundamentals, deriving whale activity from the
/// transaction feed and synthesizing the technical block.
pub fn merge_crypto_assets(
    cryptos: &[CryptoFundamentalRow],
    news: &[NewsItem],
    whales: &[WhaleTransaction],
    credibility: &[CredibilityScore],
) -> Universe {
    let mut rng = rand::thread_rng();
    let mut merged = Vec::with_capacity(cryptos.len());

    for row in cryptos {
        let close = row.price;
        let above_vwap = rng.gen_bool(0.7);
        let below_vwap = rng.gen_bool(0.3);

        merged.push(AssetRecord {
            symbol: row.symbol.clone(),
            name: row.name.clone(),
            sector: "Cryptocurrency".to_string(),
            asset_type: AssetType::Crypto,
            price: row.price,
            market_cap: row.market_cap,
            volume: row.volume_24h,
            volume_24h: Some(row.volume_24h),
            daily_change: Some(rng.gen_range(-10.0..10.0)),
            daily_change_pct: Some(rng.gen_range(-10.0..10.0)),
            // Equity-style fundamentals do not apply to crypto
            pe: 0.0,
            roe: 0.0,
            roce: 0.0,
            div_yield: 0.0,
            debt_equity: None,
            eps_growth: None,
            pb_ratio: Some(banded(
                &mut rng,
                &[(0.2, 1.0, 3.0), (0.5, 3.0, 6.0), (0.8, 6.0, 10.0), (1.0, 10.0, 15.0)],
            )),
            ev_ebitda: Some(banded(
                &mut rng,
                &[(0.3, 10.0, 30.0), (0.6, 30.0, 60.0), (1.0, 60.0, 100.0)],
            )),
            current_ratio: Some(banded(
                &mut rng,
                &[(0.2, 1.0, 3.0), (0.6, 3.0, 6.0), (1.0, 6.0, 10.0)],
            )),
            quick_ratio: Some(banded(
                &mut rng,
                &[(0.3, 1.0, 3.0), (0.7, 3.0, 5.0), (1.0, 5.0, 8.0)],
            )),
            revenue_growth_yoy: Some(banded(
                &mut rng,
                &[(0.2, -30.0, 20.0), (0.5, 20.0, 60.0), (0.8, 60.0, 120.0), (1.0, 120.0, 200.0)],
            )),
            revenue_growth_qoq: Some(banded(
                &mut rng,
                &[(0.3, -10.0, 10.0), (0.7, 10.0, 40.0), (1.0, 40.0, 80.0)],
            )),
            profit_margin_net: Some(banded(
                &mut rng,
                &[(0.2, 10.0, 30.0), (0.6, 30.0, 60.0), (1.0, 60.0, 100.0)],
            )),
            profit_margin_operating: Some(banded(
                &mut rng,
                &[(0.1, 15.0, 35.0), (0.5, 35.0, 70.0), (1.0, 70.0, 100.0)],
            )),
            insider_buying: Some(banded(
                &mut rng,
                &[(0.2, 0.0, 30.0), (0.6, 30.0, 70.0), (1.0, 70.0, 100.0)],
            )),
            promoter_holding_change: Some(banded(
                &mut rng,
                &[(0.3, -10.0, 0.0), (0.6, 0.0, 5.0), (1.0, 5.0, 20.0)],
            )),
            institutional_holdings_fii: Some(banded(
                &mut rng,
                &[(0.2, 20.0, 40.0), (0.6, 40.0, 70.0), (1.0, 70.0, 100.0)],
            )),
            institutional_holdings_dii: Some(banded(
                &mut rng,
                &[(0.3, 10.0, 30.0), (0.7, 30.0, 60.0), (1.0, 60.0, 100.0)],
            )),
            close,
            ma50: close * 0.95,
            ma200: close * 0.90,
            rsi14: rng.gen_range(0.0..100.0),
            macd_line: rng.gen_range(-5.0..5.0),
            macd_signal: rng.gen_range(-4.0..4.0),
            macd_hist: rng.gen_range(-1.0..1.0),
            week52_high: close * 1.5,
            week52_low: close * 0.5,
            pct_from_52w_high: rng.gen_range(-20.0..20.0),
            pct_from_52w_low: rng.gen_range(20.0..80.0),
            ma100: Some(
                close
                    * banded(
                        &mut rng,
                        &[(0.3, 0.85, 0.95), (0.7, 0.95, 1.05), (1.0, 1.05, 1.20)],
                    ),
            ),
            ema12: Some(close * banded(&mut rng, &[(0.4, 0.9, 1.0), (1.0, 1.0, 1.1)])),
            ema26: Some(
                close
                    * banded(
                        &mut rng,
                        &[(0.3, 0.85, 1.0), (0.7, 0.95, 1.10), (1.0, 1.05, 1.20)],
                    ),
            ),
            ema50: Some(close * 0.95),
            ema200: Some(close * 0.90),
            bollinger_upper: Some(close * rng.gen_range(1.02..1.14)),
            bollinger_middle: Some(close * rng.gen_range(0.90..1.10)),
            bollinger_lower: Some(close * rng.gen_range(0.80..0.92)),
            atr: Some(
                close
                    * banded(
                        &mut rng,
                        &[(0.2, 0.02, 0.05), (0.6, 0.05, 0.10), (1.0, 0.10, 0.20)],
                    ),
            ),
            volume_surge: Some(banded(
                &mut rng,
                &[(0.3, 1.0, 4.0), (0.6, 4.0, 9.0), (1.0, 9.0, 19.0)],
            )),
            gap_up: Some(rng.gen_bool(0.2)),
            gap_down: Some(rng.gen_bool(0.2)),
            price_above_vwap: Some(above_vwap),
            price_below_vwap: Some(below_vwap),
            vwap: Some(close * rng.gen_range(0.90..1.10)),
            circulating_supply: Some(row.circulating_supply),
            total_supply: Some(row.total_supply),
            max_supply: row.max_supply,
            tokenomics_health: Some(row.tokenomics_health),
            active_addresses: row.active_addresses,
            gas_fees: row.gas_fees,
            tvl: row.tvl,
            staking_ratio: row.staking_ratio,
            credibility_score: Some(credibility_for(&row.symbol, credibility)),
            news_sentiment: Some(sentiment_for(&row.symbol, news)),
            whale_activity_score: Some(whale_score_for(&row.symbol, whales)),
        });
    }

    merged
}

/// Build the full merged universe for one page view
pub fn universe(dataset: ScanCategory) -> Universe {
    let news = sample_data::news_items();
    let credibility = sample_data::credibility_scores();

    let equities = || {
        merge_equity_assets(
            &sample_data::fundamental_rows(),
            &sample_data::technical_rows(),
            &news,
            &credibility,
        )
    };
    let cryptos = || {
        merge_crypto_assets(
            &sample_data::crypto_fundamental_rows(),
            &news,
            &sample_data::whale_transactions(),
            &credibility,
        )
    };

    match dataset {
        ScanCategory::Equity => equities(),
        ScanCategory::Crypto => cryptos(),
        ScanCategory::CrossAsset => {
            let mut all = equities();
            all.extend(cryptos());
            all
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_data;

    #[test]
    fn test_equity_merge_joins_by_symbol() {
        let fundamentals = sample_data::fundamental_rows();
        let merged = merge_equity_assets(
            &fundamentals,
            &sample_data::technical_rows(),
            &sample_data::news_items(),
            &sample_data::credibility_scores(),
        );
        assert_eq!(merged.len(), fundamentals.len());
        for asset in &merged {
            assert_eq!(asset.asset_type, AssetType::Equity);
            assert!(asset.daily_change_pct.is_some());
        }
    }

    #[test]
    fn test_unmatched_fundamental_rows_are_skipped() {
        let mut fundamentals = sample_data::fundamental_rows();
        let technicals = sample_data::technical_rows();
        fundamentals[0].symbol = "GHOST".to_string();
        let merged = merge_equity_assets(&fundamentals, &technicals, &[], &[]);
        assert_eq!(merged.len(), fundamentals.len() - 1);
        assert!(merged.iter().all(|a| a.symbol != "GHOST"));
    }

    #[test]
    fn test_crypto_merge_zeroes_equity_fundamentals() {
        let merged = merge_crypto_assets(
            &sample_data::crypto_fundamental_rows(),
            &sample_data::news_items(),
            &sample_data::whale_transactions(),
            &sample_data::credibility_scores(),
        );
        for asset in &merged {
            assert_eq!(asset.asset_type, AssetType::Crypto);
            assert_eq!(asset.pe, 0.0);
            assert_eq!(asset.div_yield, 0.0);
            assert_eq!(asset.sector, "Cryptocurrency");
            assert!((0.0..100.0).contains(&asset.rsi14));
            assert!(asset.whale_activity_score.is_some());
        }
    }

    #[test]
    fn test_sentiment_majority_vote() {
        let news = sample_data::news_items();
        // BTC: one positive article, one negative article -> neutral
        assert_eq!(sentiment_for("BTC", &news), NewsSentiment::Neutral);
        // TCS: one positive article, nothing negative
        assert_eq!(sentiment_for("TCS", &news), NewsSentiment::Positive);
        // AVAX: only a negative article
        assert_eq!(sentiment_for("AVAX", &news), NewsSentiment::Negative);
        // Unknown symbols have no news at all
        assert_eq!(sentiment_for("UNKNOWN", &news), NewsSentiment::Neutral);
    }

    #[test]
    fn test_whale_score_is_mean_of_observations() {
        let whales = sample_data::whale_transactions();
        // BTC appears twice: (95 + 92) / 2
        let score = whale_score_for("BTC", &whales);
        assert!((score - 93.5).abs() < f64::EPSILON);
        // No observations falls back to the neutral default
        assert!((whale_score_for("DOT", &whales) - NEUTRAL_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cross_asset_universe_concatenates_both_sets() {
        let equity = universe(ScanCategory::Equity);
        let crypto = universe(ScanCategory::Crypto);
        let all = universe(ScanCategory::CrossAsset);
        assert_eq!(all.len(), equity.len() + crypto.len());
        // Equities first, then cryptos, matching the page layout order
        assert_eq!(all[0].asset_type, AssetType::Equity);
        assert_eq!(all[all.len() - 1].asset_type, AssetType::Crypto);
    }

    #[test]
    fn test_symbols_unique_within_universe() {
        let all = universe(ScanCategory::CrossAsset);
        let mut symbols: Vec<&str> = all.iter().map(|a| a.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), all.len());
    }
}
