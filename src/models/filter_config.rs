//! User-adjustable secondary filter configuration.
//!
//! Every field is optional or carries an `all`/`false` default, so a default
//! configuration imposes no constraint at all. The configuration is entirely
//! independent of any scan; the engine applies it on top of whatever asset
//! list the caller already has.

use serde::{Deserialize, Serialize};

/// Market-cap bucket, in crores: large >= 20000, mid [5000, 20000), small < 5000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCapRange {
    Large,
    Mid,
    Small,
    #[default]
    All,
}

/// Position relative to the 52-week range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Week52Signal {
    /// Close within 5% of the 52-week high
    Breakout,
    /// Close within 5% above the 52-week low
    Breakdown,
    #[default]
    All,
}

/// Close relative to a moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaSignal {
    Above,
    Below,
    #[default]
    All,
}

/// EMA50 versus EMA200 relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmaSignal {
    GoldenCross,
    DeathCross,
    #[default]
    All,
}

/// MACD line/signal/histogram agreement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdDirection {
    Bullish,
    Bearish,
    #[default]
    All,
}

/// Close relative to the Bollinger bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BollingerSignal {
    UpperBreak,
    LowerBreak,
    #[default]
    All,
}

/// Price relative to VWAP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VwapSignal {
    Above,
    Below,
    #[default]
    All,
}

/// Fundamental bounds. Min/max pairs are inclusive on both ends; an asset
/// passes only when it satisfies every configured bound.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FundamentalFilters {
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
}

/// Technical signal selections and bounds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalFilters {
    pub week52_high_low: Week52Signal,
    pub ma50_crossover: MaSignal,
    pub ma100_crossover: MaSignal,
    pub ma200_crossover: MaSignal,
    pub ema_crossover: EmaSignal,
    /// Require RSI >= 70
    pub rsi_overbought: bool,
    /// Require RSI <= 30
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

/// Complete secondary filter state: fundamental pass plus technical pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub fundamental: FundamentalFilters,
    pub technical: TechnicalFilters,
}
