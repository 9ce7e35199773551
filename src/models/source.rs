//! Per-source row schemas consumed by the merge step.
//!
//! Each source delivers one row shape; the merge joins them by symbol into
//! [`AssetRecord`](super::AssetRecord)s. Nothing downstream of the merge
//! reads these types.

use crate::models::NewsSentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Equity fundamentals row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalRow {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    /// Last traded price in INR
    pub price: f64,
    /// Market capitalisation in crores
    pub market_cap: f64,
    pub pe: f64,
    pub roe: f64,
    pub roce: f64,
    pub div_yield: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_equity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps_growth: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

/// Daily technicals row for one equity symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalRow {
    pub symbol: String,
    pub close: f64,
    pub volume: f64,
    pub ma50: f64,
    pub ma200: f64,
    pub rsi14: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
    pub macd_hist: f64,
    pub week52_high: f64,
    pub week52_low: f64,
    pub pct_from_52w_high: f64,
    pub pct_from_52w_low: f64,
}

/// Crypto fundamentals row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoFundamentalRow {
    pub symbol: String,
    pub name: String,
    /// Last traded price in USD
    pub price: f64,
    /// Market capitalisation in crores
    pub market_cap: f64,
    pub volume_24h: f64,
    pub circulating_supply: f64,
    pub total_supply: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_supply: Option<f64>,
    /// Tokenomics health score, 0-100
    pub tokenomics_health: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_addresses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_fees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staking_ratio: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

/// One news article with sentiment annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source: String,
    pub sentiment: NewsSentiment,
    /// Annotation confidence, 0-100
    pub confidence: f64,
    pub published_at: DateTime<Utc>,
    pub related_assets: Vec<String>,
}

/// Direction of a large on-chain transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhaleTransactionType {
    Buy,
    Sell,
    Transfer,
}

/// Large on-chain transaction observed for a crypto asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhaleTransaction {
    pub id: String,
    pub asset_symbol: String,
    pub transaction_type: WhaleTransactionType,
    pub amount: f64,
    pub value_usd: f64,
    pub from_address: String,
    pub to_address: String,
    pub timestamp: DateTime<Utc>,
    /// How credible the observation is, 0-100
    pub credibility_score: f64,
}

/// Composite data-credibility assessment for one symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredibilityScore {
    pub asset_symbol: String,
    pub overall_score: f64,
    pub data_source_quality: f64,
    pub news_validation: f64,
    pub institutional_backing: f64,
    pub social_sentiment: f64,
    pub last_updated: DateTime<Utc>,
}
