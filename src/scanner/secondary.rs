//! Secondary filter engine.
//!
//! Applies a user-adjustable [`FilterState`] on top of any asset list —
//! typically a scan's output. Both passes are pure per-asset predicates and
//! the engine is a conjunction of every active bound: an asset survives only
//! if it satisfies all of them. Input order is preserved and no cap is
//! imposed here.
//!
//! Absent numeric metrics compare as `0.0` and absent booleans as `false`,
//! matching the scan predicates. The one exception is the EMA cross check,
//! which requires both EMAs to be present before it can match.

use crate::constants::{LARGE_CAP_FLOOR, MID_CAP_FLOOR, NEAR_EXTREME_RATIO};
use crate::models::{
    AssetRecord, BollingerSignal, EmaSignal, FilterState, FundamentalFilters, MaSignal,
    MacdDirection, MarketCapRange, TechnicalFilters, VwapSignal, Week52Signal,
};

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

fn passes_fundamental(asset: &AssetRecord, filters: &FundamentalFilters) -> bool {
    match filters.market_cap_range {
        MarketCapRange::All => {}
        MarketCapRange::Large => {
            if asset.market_cap < LARGE_CAP_FLOOR {
                return false;
            }
        }
        MarketCapRange::Mid => {
            if asset.market_cap < MID_CAP_FLOOR || asset.market_cap >= LARGE_CAP_FLOOR {
                return false;
            }
        }
        MarketCapRange::Small => {
            if asset.market_cap >= MID_CAP_FLOOR {
                return false;
            }
        }
    }

    within(asset.pe, filters.pe_ratio_min, filters.pe_ratio_max)
        && within(
            asset.pb_ratio.unwrap_or(0.0),
            filters.pb_ratio_min,
            filters.pb_ratio_max,
        )
        && within(
            asset.ev_ebitda.unwrap_or(0.0),
            filters.ev_ebitda_min,
            filters.ev_ebitda_max,
        )
        && within(
            asset.div_yield,
            filters.dividend_yield_min,
            filters.dividend_yield_max,
        )
        && within(
            asset.debt_equity.unwrap_or(0.0),
            filters.debt_equity_min,
            filters.debt_equity_max,
        )
        && within(
            asset.current_ratio.unwrap_or(0.0),
            filters.current_ratio_min,
            filters.current_ratio_max,
        )
        && within(
            asset.quick_ratio.unwrap_or(0.0),
            filters.quick_ratio_min,
            filters.quick_ratio_max,
        )
        && within(asset.roe, filters.roe_min, filters.roe_max)
        && within(asset.roce, filters.roce_min, filters.roce_max)
        && within(
            asset.eps_growth.unwrap_or(0.0),
            filters.eps_growth_min,
            filters.eps_growth_max,
        )
        && within(
            asset.revenue_growth_yoy.unwrap_or(0.0),
            filters.revenue_growth_yoy_min,
            filters.revenue_growth_yoy_max,
        )
        && within(
            asset.revenue_growth_qoq.unwrap_or(0.0),
            filters.revenue_growth_qoq_min,
            filters.revenue_growth_qoq_max,
        )
        && within(
            asset.profit_margin_net.unwrap_or(0.0),
            filters.profit_margin_net_min,
            filters.profit_margin_net_max,
        )
        && within(
            asset.profit_margin_operating.unwrap_or(0.0),
            filters.profit_margin_operating_min,
            filters.profit_margin_operating_max,
        )
        && within(
            asset.insider_buying.unwrap_or(0.0),
            filters.insider_buying_min,
            filters.insider_buying_max,
        )
        && within(
            asset.promoter_holding_change.unwrap_or(0.0),
            filters.promoter_holding_change_min,
            filters.promoter_holding_change_max,
        )
        && within(
            asset.institutional_holdings_fii.unwrap_or(0.0),
            filters.institutional_holdings_fii_min,
            filters.institutional_holdings_fii_max,
        )
        && within(
            asset.institutional_holdings_dii.unwrap_or(0.0),
            filters.institutional_holdings_dii_min,
            filters.institutional_holdings_dii_max,
        )
}

fn passes_technical(asset: &AssetRecord, filters: &TechnicalFilters) -> bool {
    match filters.week52_high_low {
        Week52Signal::All => {}
        Week52Signal::Breakout => {
            if asset.close < asset.week52_high * NEAR_EXTREME_RATIO {
                return false;
            }
        }
        Week52Signal::Breakdown => {
            if asset.close > asset.week52_low * 1.05 {
                return false;
            }
        }
    }

    let ma_signal = |signal: MaSignal, ma: f64| match signal {
        MaSignal::All => true,
        MaSignal::Above => asset.close > ma,
        MaSignal::Below => asset.close < ma,
    };
    if !ma_signal(filters.ma50_crossover, asset.ma50) {
        return false;
    }
    if !ma_signal(filters.ma100_crossover, asset.ma100.unwrap_or(0.0)) {
        return false;
    }
    if !ma_signal(filters.ma200_crossover, asset.ma200) {
        return false;
    }

    match filters.ema_crossover {
        EmaSignal::All => {}
        EmaSignal::GoldenCross => match (asset.ema50, asset.ema200) {
            (Some(ema50), Some(ema200)) if ema50 > ema200 => {}
            _ => return false,
        },
        EmaSignal::DeathCross => match (asset.ema50, asset.ema200) {
            (Some(ema50), Some(ema200)) if ema50 < ema200 => {}
            _ => return false,
        },
    }

    if filters.rsi_overbought && asset.rsi14 < 70.0 {
        return false;
    }
    if filters.rsi_oversold && asset.rsi14 > 30.0 {
        return false;
    }
    if !within(asset.rsi14, filters.rsi_min, filters.rsi_max) {
        return false;
    }

    match filters.macd_signal {
        MacdDirection::All => {}
        MacdDirection::Bullish => {
            if asset.macd_line <= asset.macd_signal || asset.macd_hist <= 0.0 {
                return false;
            }
        }
        MacdDirection::Bearish => {
            if asset.macd_line >= asset.macd_signal || asset.macd_hist >= 0.0 {
                return false;
            }
        }
    }

    match filters.bollinger_bands {
        BollingerSignal::All => {}
        BollingerSignal::UpperBreak => {
            if asset.close <= asset.bollinger_upper.unwrap_or(0.0) {
                return false;
            }
        }
        BollingerSignal::LowerBreak => {
            if asset.close >= asset.bollinger_lower.unwrap_or(0.0) {
                return false;
            }
        }
    }

    if !within(asset.atr.unwrap_or(0.0), filters.atr_min, filters.atr_max) {
        return false;
    }
    if !within(
        asset.volume_surge.unwrap_or(0.0),
        filters.volume_surge_min,
        filters.volume_surge_max,
    ) {
        return false;
    }

    if filters.gap_up && !asset.gap_up.unwrap_or(false) {
        return false;
    }
    if filters.gap_down && !asset.gap_down.unwrap_or(false) {
        return false;
    }

    match filters.price_vwap {
        VwapSignal::All => true,
        VwapSignal::Above => asset.price_above_vwap.unwrap_or(false),
        VwapSignal::Below => asset.price_below_vwap.unwrap_or(false),
    }
}

/// Keep assets satisfying every configured fundamental bound
pub fn apply_fundamental_filters(
    data: &[AssetRecord],
    filters: &FundamentalFilters,
) -> Vec<AssetRecord> {
    data.iter()
        .filter(|a| passes_fundamental(a, filters))
        .cloned()
        .collect()
}

/// Keep assets satisfying every configured technical signal and bound
pub fn apply_technical_filters(
    data: &[AssetRecord],
    filters: &TechnicalFilters,
) -> Vec<AssetRecord> {
    data.iter()
        .filter(|a| passes_technical(a, filters))
        .cloned()
        .collect()
}

/// Fundamental pass, then technical pass. Equivalent to the logical AND of
/// every active constraint; pass order only changes intermediate sizes.
pub fn apply_all_filters(data: &[AssetRecord], state: &FilterState) -> Vec<AssetRecord> {
    let after_fundamental = apply_fundamental_filters(data, &state.fundamental);
    apply_technical_filters(&after_fundamental, &state.technical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetType;

    fn asset(symbol: &str) -> AssetRecord {
        AssetRecord {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: "Technology".to_string(),
            asset_type: AssetType::Equity,
            ..AssetRecord::default()
        }
    }

    #[test]
    fn test_unset_filters_pass_everything_through() {
        let data = vec![
            AssetRecord {
                pe: 8.0,
                market_cap: 100.0,
                ..asset("A")
            },
            AssetRecord {
                pe: 80.0,
                market_cap: 900_000.0,
                ..asset("B")
            },
        ];
        let result = apply_all_filters(&data, &FilterState::default());
        let symbols: Vec<&str> = result.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "B"]);
    }

    #[test]
    fn test_market_cap_bucket_boundaries() {
        let filters = FundamentalFilters {
            market_cap_range: MarketCapRange::Mid,
            ..FundamentalFilters::default()
        };
        let data = vec![
            AssetRecord {
                market_cap: 5_000.0, // inclusive lower bound
                ..asset("AT_FLOOR")
            },
            AssetRecord {
                market_cap: 20_000.0, // exclusive upper bound
                ..asset("AT_CEILING")
            },
            AssetRecord {
                market_cap: 4_999.0,
                ..asset("BELOW")
            },
        ];
        let result = apply_fundamental_filters(&data, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "AT_FLOOR");
    }

    #[test]
    fn test_all_bounds_must_hold() {
        let filters = FundamentalFilters {
            pe_ratio_max: Some(20.0),
            roce_min: Some(15.0),
            ..FundamentalFilters::default()
        };
        let data = vec![
            AssetRecord {
                pe: 10.0,
                roce: 20.0,
                ..asset("BOTH")
            },
            AssetRecord {
                pe: 10.0,
                roce: 5.0,
                ..asset("CHEAP_ONLY")
            },
            AssetRecord {
                pe: 40.0,
                roce: 25.0,
                ..asset("QUALITY_ONLY")
            },
        ];
        let result = apply_fundamental_filters(&data, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "BOTH");
    }

    #[test]
    fn test_missing_metric_reads_as_zero() {
        // A min bound above zero excludes assets with no datum...
        let filters = FundamentalFilters {
            pb_ratio_min: Some(1.0),
            ..FundamentalFilters::default()
        };
        assert!(apply_fundamental_filters(&[asset("NO_PB")], &filters).is_empty());

        // ...while a max bound admits them, since 0.0 is under any positive max
        let filters = FundamentalFilters {
            debt_equity_max: Some(0.5),
            ..FundamentalFilters::default()
        };
        assert_eq!(
            apply_fundamental_filters(&[asset("NO_DEBT_DATA")], &filters).len(),
            1
        );
    }

    #[test]
    fn test_macd_bullish_needs_both_line_and_histogram() {
        let filters = TechnicalFilters {
            macd_signal: MacdDirection::Bullish,
            ..TechnicalFilters::default()
        };
        let crossed = AssetRecord {
            macd_line: 1.5,
            macd_signal: 1.0,
            macd_hist: 0.5,
            ..asset("CROSSED")
        };
        let hist_negative = AssetRecord {
            macd_line: 1.5,
            macd_signal: 1.0,
            macd_hist: -0.1,
            ..asset("FADING")
        };
        let result = apply_technical_filters(&[crossed, hist_negative], &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "CROSSED");
    }

    #[test]
    fn test_ema_cross_requires_both_emas_present() {
        let filters = TechnicalFilters {
            ema_crossover: EmaSignal::GoldenCross,
            ..TechnicalFilters::default()
        };
        let golden = AssetRecord {
            ema50: Some(110.0),
            ema200: Some(100.0),
            ..asset("GOLDEN")
        };
        let missing = AssetRecord {
            ema50: Some(110.0),
            ema200: None,
            ..asset("NO_EMA200")
        };
        let result = apply_technical_filters(&[golden, missing], &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "GOLDEN");
    }

    #[test]
    fn test_week52_breakout_and_breakdown() {
        let near_high = AssetRecord {
            close: 98.0,
            week52_high: 100.0,
            week52_low: 60.0,
            ..asset("NEAR_HIGH")
        };
        let near_low = AssetRecord {
            close: 61.0,
            week52_high: 100.0,
            week52_low: 60.0,
            ..asset("NEAR_LOW")
        };

        let breakout = TechnicalFilters {
            week52_high_low: Week52Signal::Breakout,
            ..TechnicalFilters::default()
        };
        let result = apply_technical_filters(&[near_high.clone(), near_low.clone()], &breakout);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "NEAR_HIGH");

        let breakdown = TechnicalFilters {
            week52_high_low: Week52Signal::Breakdown,
            ..TechnicalFilters::default()
        };
        let result = apply_technical_filters(&[near_high, near_low], &breakdown);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "NEAR_LOW");
    }

    #[test]
    fn test_rsi_flags_and_bounds() {
        let filters = TechnicalFilters {
            rsi_oversold: true,
            ..TechnicalFilters::default()
        };
        let cold = AssetRecord {
            rsi14: 28.0,
            ..asset("COLD")
        };
        let warm = AssetRecord {
            rsi14: 55.0,
            ..asset("WARM")
        };
        let result = apply_technical_filters(&[cold.clone(), warm.clone()], &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "COLD");

        let bounded = TechnicalFilters {
            rsi_min: Some(50.0),
            rsi_max: Some(60.0),
            ..TechnicalFilters::default()
        };
        let result = apply_technical_filters(&[cold, warm], &bounded);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "WARM");
    }

    #[test]
    fn test_gap_and_vwap_flags() {
        let filters = TechnicalFilters {
            gap_up: true,
            price_vwap: VwapSignal::Above,
            ..TechnicalFilters::default()
        };
        let qualifying = AssetRecord {
            gap_up: Some(true),
            price_above_vwap: Some(true),
            ..asset("GAPPER")
        };
        let no_data = asset("NO_FLAGS");
        let result = apply_technical_filters(&[qualifying, no_data], &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "GAPPER");
    }

    #[test]
    fn test_order_preserved_and_no_cap() {
        let data: Vec<AssetRecord> = (0..80).map(|i| asset(&format!("S{i}"))).collect();
        let result = apply_all_filters(&data, &FilterState::default());
        assert_eq!(result.len(), 80);
        assert_eq!(result[0].symbol, "S0");
        assert_eq!(result[79].symbol, "S79");
    }
}
