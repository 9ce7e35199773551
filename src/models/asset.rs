use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset class of a merged record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Equity,
    Crypto,
}

impl Default for AssetType {
    fn default() -> Self {
        AssetType::Equity
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Equity => write!(f, "equity"),
            AssetType::Crypto => write!(f, "crypto"),
        }
    }
}

/// Aggregate news sentiment attached to a record during the merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSentiment {
    Positive,
    Negative,
    Neutral,
}

/// Merged per-asset record: fundamentals, technicals and derived enrichment
/// joined into the single shape the scan and filter engine operates on.
///
/// Records are immutable value objects, built fresh per page view. Equity
/// prices are in INR, crypto prices in USD; `market_cap` is in crores for
/// both. A missing optional metric reads as `0.0` (booleans as `false`)
/// wherever a scan or secondary filter consults it, so an asset with no
/// datum for a field can still satisfy bounds that zero satisfies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetRecord {
    // Identity
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub asset_type: AssetType,

    // Market snapshot
    pub price: f64,
    /// Market capitalisation in crores
    pub market_cap: f64,
    pub volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_change_pct: Option<f64>,

    // Core fundamentals (zero on crypto records)
    pub pe: f64,
    pub roe: f64,
    pub roce: f64,
    pub div_yield: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_equity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps_growth: Option<f64>,

    // Extended fundamentals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pb_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ev_ebitda: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_growth_yoy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_growth_qoq: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_margin_net: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_margin_operating: Option<f64>,
    /// Insider buying activity score, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insider_buying: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoter_holding_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institutional_holdings_fii: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institutional_holdings_dii: Option<f64>,

    // Core technicals
    pub close: f64,
    pub ma50: f64,
    pub ma200: f64,
    /// 14-period relative strength index, 0-100
    pub rsi14: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
    pub macd_hist: f64,
    pub week52_high: f64,
    pub week52_low: f64,
    pub pct_from_52w_high: f64,
    pub pct_from_52w_low: f64,

    // Extended technicals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma100: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema12: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema26: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger_upper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger_middle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger_lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    /// Volume relative to its recent average, as a multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_surge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_up: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_down: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_above_vwap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_below_vwap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vwap: Option<f64>,

    // Crypto-native fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circulating_supply: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_supply: Option<f64>,
    /// Tokenomics health score, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenomics_health: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_addresses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_fees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvl: Option<f64>,
    /// Fraction of supply staked, 0-1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staking_ratio: Option<f64>,

    // Derived enrichment
    /// Data credibility score, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credibility_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_sentiment: Option<NewsSentiment>,
    /// Whale activity score, 0-100 (crypto only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whale_activity_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_metrics_omitted_from_json() {
        let record = AssetRecord {
            symbol: "TCS".to_string(),
            name: "Tata Consultancy Services Ltd.".to_string(),
            sector: "Technology".to_string(),
            price: 3750.5,
            close: 3750.5,
            ..AssetRecord::default()
        };

        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"symbol\":\"TCS\""));
        assert!(json.contains("\"asset_type\":\"equity\""));
        // Unset optional metrics must not appear at all
        assert!(!json.contains("pb_ratio"));
        assert!(!json.contains("whale_activity_score"));
    }

    #[test]
    fn test_sentiment_round_trip() {
        let json = "\"positive\"";
        let sentiment: NewsSentiment = serde_json::from_str(json).expect("parse");
        assert_eq!(sentiment, NewsSentiment::Positive);
        assert_eq!(serde_json::to_string(&sentiment).expect("serialize"), json);
    }
}
