//! Scan API endpoints.
//!
//! The scan-results endpoint mirrors one scanner page view: fresh universe,
//! fresh diversity session, orchestrated scan, then any secondary filter
//! bounds the caller passed as query parameters.

use crate::models::{
    find_scan, scan_configs, AssetRecord, BollingerSignal, EmaSignal, FilterState,
    FundamentalFilters, MaSignal, MacdDirection, MarketCapRange, ScanConfig, TechnicalFilters,
    VwapSignal, Week52Signal,
};
use crate::scanner::apply_all_filters;
use crate::server::AppState;
use crate::services;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Secondary filter bounds accepted as flat query parameters, e.g.
/// `/scans/top-gainers?market_cap_range=mid&pe_ratio_max=20&rsi_oversold=true`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScanQuery {
    // Fundamental bounds
    pub market_cap_range: MarketCapRange,
    pub pe_ratio_min: Option<f64>,
    pub pe_ratio_max: Option<f64>,
    pub pb_ratio_min: Option<f64>,
    pub pb_ratio_max: Option<f64>,
    pub ev_ebitda_min: Option<f64>,
    pub ev_ebitda_max: Option<f64>,
    pub dividend_yield_min: Option<f64>,
    pub dividend_yield_max: Option<f64>,
    pub debt_equity_min: Option<f64>,
    pub debt_equity_max: Option<f64>,
    pub current_ratio_min: Option<f64>,
    pub current_ratio_max: Option<f64>,
    pub quick_ratio_min: Option<f64>,
    pub quick_ratio_max: Option<f64>,
    pub roe_min: Option<f64>,
    pub roe_max: Option<f64>,
    pub roce_min: Option<f64>,
    pub roce_max: Option<f64>,
    pub eps_growth_min: Option<f64>,
    pub eps_growth_max: Option<f64>,
    pub revenue_growth_yoy_min: Option<f64>,
    pub revenue_growth_yoy_max: Option<f64>,
    pub revenue_growth_qoq_min: Option<f64>,
    pub revenue_growth_qoq_max: Option<f64>,
    pub profit_margin_net_min: Option<f64>,
    pub profit_margin_net_max: Option<f64>,
    pub profit_margin_operating_min: Option<f64>,
    pub profit_margin_operating_max: Option<f64>,
    pub insider_buying_min: Option<f64>,
    pub insider_buying_max: Option<f64>,
    pub promoter_holding_change_min: Option<f64>,
    pub promoter_holding_change_max: Option<f64>,
    pub institutional_holdings_fii_min: Option<f64>,
    pub institutional_holdings_fii_max: Option<f64>,
    pub institutional_holdings_dii_min: Option<f64>,
    pub institutional_holdings_dii_max: Option<f64>,
    // Technical signals and bounds
    pub week52_high_low: Week52Signal,
    pub ma50_crossover: MaSignal,
    pub ma100_crossover: MaSignal,
    pub ma200_crossover: MaSignal,
    pub ema_crossover: EmaSignal,
    pub rsi_overbought: bool,
    pub rsi_oversold: bool,
    pub rsi_min: Option<f64>,
    pub rsi_max: Option<f64>,
    pub macd_signal: MacdDirection,
    pub bollinger_bands: BollingerSignal,
    pub atr_min: Option<f64>,
    pub atr_max: Option<f64>,
    pub volume_surge_min: Option<f64>,
    pub volume_surge_max: Option<f64>,
    pub gap_up: bool,
    pub gap_down: bool,
    pub price_vwap: VwapSignal,
}

impl ScanQuery {
    fn into_filter_state(self) -> FilterState {
        FilterState {
            fundamental: FundamentalFilters {
                market_cap_range: self.market_cap_range,
                pe_ratio_min: self.pe_ratio_min,
                pe_ratio_max: self.pe_ratio_max,
                pb_ratio_min: self.pb_ratio_min,
                pb_ratio_max: self.pb_ratio_max,
                ev_ebitda_min: self.ev_ebitda_min,
                ev_ebitda_max: self.ev_ebitda_max,
                dividend_yield_min: self.dividend_yield_min,
                dividend_yield_max: self.dividend_yield_max,
                debt_equity_min: self.debt_equity_min,
                debt_equity_max: self.debt_equity_max,
                current_ratio_min: self.current_ratio_min,
                current_ratio_max: self.current_ratio_max,
                quick_ratio_min: self.quick_ratio_min,
                quick_ratio_max: self.quick_ratio_max,
                roe_min: self.roe_min,
                roe_max: self.roe_max,
                roce_min: self.roce_min,
                roce_max: self.roce_max,
                eps_growth_min: self.eps_growth_min,
                eps_growth_max: self.eps_growth_max,
                revenue_growth_yoy_min: self.revenue_growth_yoy_min,
                revenue_growth_yoy_max: self.revenue_growth_yoy_max,
                revenue_growth_qoq_min: self.revenue_growth_qoq_min,
                revenue_growth_qoq_max: self.revenue_growth_qoq_max,
                profit_margin_net_min: self.profit_margin_net_min,
                profit_margin_net_max: self.profit_margin_net_max,
                profit_margin_operating_min: self.profit_margin_operating_min,
                profit_margin_operating_max: self.profit_margin_operating_max,
                insider_buying_min: self.insider_buying_min,
                insider_buying_max: self.insider_buying_max,
                promoter_holding_change_min: self.promoter_holding_change_min,
                promoter_holding_change_max: self.promoter_holding_change_max,
                institutional_holdings_fii_min: self.institutional_holdings_fii_min,
                institutional_holdings_fii_max: self.institutional_holdings_fii_max,
                institutional_holdings_dii_min: self.institutional_holdings_dii_min,
                institutional_holdings_dii_max: self.institutional_holdings_dii_max,
            },
            technical: TechnicalFilters {
                week52_high_low: self.week52_high_low,
                ma50_crossover: self.ma50_crossover,
                ma100_crossover: self.ma100_crossover,
                ma200_crossover: self.ma200_crossover,
                ema_crossover: self.ema_crossover,
                rsi_overbought: self.rsi_overbought,
                rsi_oversold: self.rsi_oversold,
                rsi_min: self.rsi_min,
                rsi_max: self.rsi_max,
                macd_signal: self.macd_signal,
                bollinger_bands: self.bollinger_bands,
                atr_min: self.atr_min,
                atr_max: self.atr_max,
                volume_surge_min: self.volume_surge_min,
                volume_surge_max: self.volume_surge_max,
                gap_up: self.gap_up,
                gap_down: self.gap_down,
                price_vwap: self.price_vwap,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScanListResponse {
    pub total: usize,
    pub scans: Vec<ScanConfig>,
}

#[derive(Debug, Serialize)]
pub struct ScanResultsResponse {
    pub scan: ScanConfig,
    pub related_scans: Vec<ScanConfig>,
    pub total: usize,
    pub last_updated: String,
    pub results: Vec<AssetRecord>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub scan_count: usize,
    pub equity_records: usize,
    pub crypto_records: usize,
}

/// GET /scans - the scan catalogue
pub async fn list_scans_handler() -> impl IntoResponse {
    let scans = scan_configs();
    Json(ScanListResponse {
        total: scans.len(),
        scans,
    })
}

/// GET /scans/{slug} - run one scan page view
///
/// Builds the scan's universe, resets the diversity session, orchestrates
/// the scan and applies any secondary filter bounds from the query string.
pub async fn scan_results_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ScanQuery>,
) -> impl IntoResponse {
    let Some(scan) = find_scan(&slug) else {
        tracing::warn!(slug = %slug, "unknown scan slug");
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("No scan configured for slug: {slug}")
            })),
        )
            .into_response();
    };

    let universe = services::universe(scan.dataset);

    let results = {
        let mut engine = state.engine.lock().await;
        // Fresh page view: diversity applies within this page's scan
        // sequence, not across unrelated visits
        engine.reset_session();
        engine.run(&universe, scan.logic_key)
    };

    let filter_state = params.into_filter_state();
    let results = apply_all_filters(&results, &filter_state);

    let related_scans: Vec<ScanConfig> = scan_configs()
        .into_iter()
        .filter(|s| s.category == scan.category && s.slug != scan.slug)
        .take(5)
        .collect();

    Json(ScanResultsResponse {
        scan,
        related_scans,
        total: results.len(),
        last_updated: Utc::now().to_rfc3339(),
        results,
    })
    .into_response()
}

/// GET /health - liveness plus universe size
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let equity = services::universe(crate::models::ScanCategory::Equity);
    let crypto = services::universe(crate::models::ScanCategory::Crypto);

    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.started_at.elapsed().as_secs(),
        scan_count: scan_configs().len(),
        equity_records: equity.len(),
        crypto_records: crypto.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_query_defaults_impose_nothing() {
        let state = ScanQuery::default().into_filter_state();
        assert_eq!(state.fundamental.market_cap_range, MarketCapRange::All);
        assert!(state.fundamental.pe_ratio_max.is_none());
        assert_eq!(state.technical.price_vwap, VwapSignal::All);
    }

    #[test]
    fn test_scan_query_bounds_carry_over() {
        let query = ScanQuery {
            pe_ratio_max: Some(20.0),
            rsi_oversold: true,
            market_cap_range: MarketCapRange::Mid,
            ..ScanQuery::default()
        };
        let state = query.into_filter_state();
        assert_eq!(state.fundamental.pe_ratio_max, Some(20.0));
        assert_eq!(state.fundamental.market_cap_range, MarketCapRange::Mid);
        assert!(state.technical.rsi_oversold);
    }
}
