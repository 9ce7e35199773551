//! Built-in sample dataset.
//!
//! Stands in for the external data feeds so the scanner works out of the
//! box: equity fundamentals and technicals, crypto fundamentals, news with
//! sentiment annotations, whale transactions and credibility scores. A few
//! of the smaller names carry deliberately pronounced metrics so every
//! screener has something to show on the sample universe.

use crate::models::{
    CredibilityScore, CryptoFundamentalRow, FundamentalRow, NewsItem, NewsSentiment, TechnicalRow,
    WhaleTransaction, WhaleTransactionType,
};
use chrono::{DateTime, TimeZone, Utc};

/// Snapshot timestamp all sample rows share
fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[allow(clippy::too_many_arguments)]
fn fundamental(
    symbol: &str,
    name: &str,
    sector: &str,
    price: f64,
    market_cap: f64,
    pe: f64,
    roe: f64,
    roce: f64,
    div_yield: f64,
    debt_equity: f64,
    eps_growth: f64,
) -> FundamentalRow {
    FundamentalRow {
        symbol: symbol.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        price,
        market_cap,
        pe,
        roe,
        roce,
        div_yield,
        debt_equity: Some(debt_equity),
        eps_growth: Some(eps_growth),
        updated_at: as_of(),
    }
}

#[allow(clippy::too_many_arguments)]
fn technical(
    symbol: &str,
    close: f64,
    volume: f64,
    ma50: f64,
    ma200: f64,
    rsi14: f64,
    macd_line: f64,
    macd_signal: f64,
    macd_hist: f64,
    week52_high: f64,
    week52_low: f64,
    pct_from_52w_high: f64,
    pct_from_52w_low: f64,
) -> TechnicalRow {
    TechnicalRow {
        symbol: symbol.to_string(),
        close,
        volume,
        ma50,
        ma200,
        rsi14,
        macd_line,
        macd_signal,
        macd_hist,
        week52_high,
        week52_low,
        pct_from_52w_high,
        pct_from_52w_low,
    }
}

/// Equity fundamentals: large caps across sectors plus a few small caps with
/// pronounced screener-friendly metrics
pub fn fundamental_rows() -> Vec<FundamentalRow> {
    vec![
        fundamental("TCS", "Tata Consultancy Services Ltd.", "Technology", 3750.50, 1_370_000.0, 28.5, 15.2, 18.5, 0.5, 0.15, 8.2),
        fundamental("INFY", "Infosys Ltd.", "Technology", 1580.25, 650_000.0, 32.1, 18.5, 22.1, 0.7, 0.22, 12.5),
        fundamental("HCLTECH", "HCL Technologies Ltd.", "Technology", 1250.80, 340_000.0, 25.8, 12.8, 16.2, 0.0, 0.08, 15.3),
        fundamental("WIPRO", "Wipro Ltd.", "Technology", 420.30, 240_000.0, 65.8, 25.5, 28.9, 0.1, 0.12, 45.2),
        fundamental("MARUTI", "Maruti Suzuki India Ltd.", "Automotive", 10250.15, 310_000.0, 45.2, 8.5, 12.1, 0.0, 0.08, 35.4),
        fundamental("TATAMOTORS", "Tata Motors Ltd.", "Automotive", 485.45, 160_000.0, 8.2, 5.8, 7.2, 4.8, 0.45, -2.1),
        fundamental("HDFCBANK", "HDFC Bank Ltd.", "Financial", 1650.20, 1_250_000.0, 11.5, 12.8, 15.2, 2.8, 0.85, 8.5),
        fundamental("ICICIBANK", "ICICI Bank Ltd.", "Financial", 985.45, 680_000.0, 9.8, 10.2, 12.5, 3.1, 0.92, 6.2),
        fundamental("SBIN", "State Bank of India", "Financial", 585.80, 520_000.0, 8.5, 8.9, 10.8, 3.5, 0.78, 4.8),
        fundamental("SUNPHARMA", "Sun Pharmaceutical Industries Ltd.", "Healthcare", 1085.75, 260_000.0, 15.2, 18.5, 22.1, 2.9, 0.25, 7.8),
        fundamental("CIPLA", "Cipla Ltd.", "Healthcare", 1250.20, 101_000.0, 18.5, 22.8, 25.2, 1.5, 0.28, 12.5),
        fundamental("RELIANCE", "Reliance Industries Ltd.", "Energy", 2580.45, 1_750_000.0, 14.2, 18.5, 22.1, 3.8, 0.22, 15.8),
        fundamental("ONGC", "Oil and Natural Gas Corporation Ltd.", "Energy", 185.80, 230_000.0, 12.5, 15.8, 18.9, 4.2, 0.18, 18.2),
        fundamental("ITC", "ITC Ltd.", "Consumer Goods", 485.20, 600_000.0, 22.5, 28.5, 32.1, 3.2, 0.45, 5.8),
        fundamental("LT", "Larsen & Toubro Ltd.", "Industrial", 3250.80, 450_000.0, 18.5, 8.5, 12.1, 0.0, 0.85, -8.2),
        fundamental("ZOMATO", "Zomato Ltd.", "Technology", 2500.00, 15_000.0, 8.5, 35.0, 40.0, 4.5, 0.1, 45.0),
        fundamental("PAYTM", "One97 Communications Ltd.", "Financial", 1800.00, 25_000.0, 12.0, 25.0, 30.0, 6.0, 0.2, 20.0),
        fundamental("ADANIPORTS", "Adani Ports and SEZ Ltd.", "Infrastructure", 4500.00, 250_000.0, 6.5, 20.0, 25.0, 3.5, 0.3, 15.0),
        fundamental("BIOCON", "Biocon Ltd.", "Healthcare", 3200.00, 8_000.0, 15.0, 45.0, 50.0, 1.5, 0.05, 60.0),
        fundamental("POWERGRID", "Power Grid Corporation of India Ltd.", "Utilities", 1200.00, 12_000.0, 18.0, 15.0, 18.0, 8.5, 0.4, 8.0),
    ]
}

/// Daily technicals matching [`fundamental_rows`] one-to-one
pub fn technical_rows() -> Vec<TechnicalRow> {
    vec![
        technical("TCS", 3750.50, 45_000_000.0, 3700.25, 3650.80, 45.2, 2.15, 1.85, 0.30, 3980.23, 3240.17, -11.5, 41.3),
        technical("INFY", 1580.25, 25_000_000.0, 1575.10, 1560.45, 52.8, 5.25, 4.80, 0.45, 1680.82, 1209.45, -9.6, 22.9),
        technical("HCLTECH", 1250.80, 30_000_000.0, 1240.15, 1235.20, 38.5, 1.25, 1.45, -0.20, 1355.22, 1022.15, -8.0, 39.8),
        technical("WIPRO", 420.30, 35_000_000.0, 410.45, 380.20, 65.8, 8.25, 6.80, 1.45, 474.00, 320.51, -12.7, 142.6),
        technical("MARUTI", 10250.15, 60_000_000.0, 10150.30, 10000.85, 28.2, -2.15, -1.80, -0.35, 11299.29, 8500.80, -26.4, 58.6),
        technical("TATAMOTORS", 485.45, 85_000_000.0, 490.80, 495.25, 35.8, -0.15, -0.05, -0.10, 580.80, 380.45, -21.2, 31.7),
        technical("HDFCBANK", 1650.20, 12_000_000.0, 1640.80, 1620.45, 55.2, 1.25, 0.95, 0.30, 1750.50, 1450.80, -10.9, 31.3),
        technical("ICICIBANK", 985.45, 35_000_000.0, 980.80, 960.25, 52.8, 0.45, 0.35, 0.10, 1080.90, 850.15, -16.6, 29.0),
        technical("SBIN", 585.80, 28_000_000.0, 580.15, 570.85, 48.5, 0.35, 0.25, 0.10, 650.25, 480.80, -11.3, 30.5),
        technical("SUNPHARMA", 1085.75, 8_000_000.0, 1080.20, 1060.80, 58.2, 1.45, 1.20, 0.25, 1180.80, 950.25, -9.7, 9.3),
        technical("CIPLA", 1250.20, 3_500_000.0, 1240.50, 1220.25, 62.8, 2.85, 2.45, 0.40, 1350.80, 1100.15, -7.7, 15.5),
        technical("RELIANCE", 2580.45, 15_000_000.0, 2550.80, 2520.25, 68.5, 1.85, 1.45, 0.40, 2750.80, 2200.20, -13.8, 27.3),
        technical("ONGC", 185.80, 12_000_000.0, 180.25, 175.80, 65.2, 2.15, 1.80, 0.35, 220.25, 150.50, -12.8, 21.8),
        technical("ITC", 485.20, 10_000_000.0, 480.80, 475.25, 52.5, 0.45, 0.35, 0.10, 520.80, 450.15, -11.6, 11.6),
        technical("LT", 3250.80, 18_000_000.0, 3280.50, 3300.80, 38.2, -1.25, -0.85, -0.40, 3650.50, 2850.25, -13.9, 32.7),
        technical("ZOMATO", 2500.00, 5_000_000.0, 2400.00, 2200.00, 25.0, 15.0, 10.0, 5.0, 2800.00, 2000.00, -10.7, 25.0),
        technical("PAYTM", 1800.00, 3_000_000.0, 1750.00, 1600.00, 75.0, 8.0, 12.0, -4.0, 1900.00, 1500.00, -5.3, 20.0),
        technical("ADANIPORTS", 4500.00, 8_000_000.0, 4200.00, 4000.00, 45.0, 20.0, 15.0, 5.0, 4800.00, 3800.00, -6.3, 18.4),
        technical("BIOCON", 3200.00, 2_000_000.0, 3000.00, 2800.00, 30.0, 25.0, 20.0, 5.0, 3500.00, 2500.00, -8.6, 28.0),
        technical("POWERGRID", 1200.00, 1_500_000.0, 1100.00, 1000.00, 80.0, 5.0, 8.0, -3.0, 1300.00, 900.00, -7.7, 33.3),
    ]
}

#[allow(clippy::too_many_arguments)]
fn crypto(
    symbol: &str,
    name: &str,
    price: f64,
    market_cap: f64,
    volume_24h: f64,
    circulating_supply: f64,
    total_supply: f64,
    max_supply: Option<f64>,
    tokenomics_health: f64,
    active_addresses: f64,
    gas_fees: f64,
    tvl: f64,
    staking_ratio: f64,
) -> CryptoFundamentalRow {
    CryptoFundamentalRow {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        market_cap,
        volume_24h,
        circulating_supply,
        total_supply,
        max_supply,
        tokenomics_health,
        active_addresses: Some(active_addresses),
        gas_fees: Some(gas_fees),
        tvl: Some(tvl),
        staking_ratio: Some(staking_ratio),
        updated_at: as_of(),
    }
}

/// Crypto fundamentals for the major networks
pub fn crypto_fundamental_rows() -> Vec<CryptoFundamentalRow> {
    vec![
        crypto("BTC", "Bitcoin", 42_000.00, 85_000.0, 25_000_000_000.0, 19_500_000.0, 19_500_000.0, Some(21_000_000.0), 95.0, 850_000.0, 15.50, 12_000_000_000.0, 0.0),
        crypto("ETH", "Ethereum", 2_800.00, 38_000.0, 15_000_000_000.0, 120_000_000.0, 120_000_000.0, None, 88.0, 1_200_000.0, 25.30, 45_000_000_000.0, 0.15),
        crypto("BNB", "BNB", 280.50, 4_800.0, 1_200_000_000.0, 150_000_000.0, 200_000_000.0, None, 85.0, 280_000.0, 0.50, 5_000_000_000.0, 0.25),
        crypto("XRP", "XRP", 0.58, 3_500.0, 2_000_000_000.0, 54_000_000_000.0, 100_000_000_000.0, None, 75.0, 320_000.0, 0.001, 800_000_000.0, 0.0),
        crypto("SOL", "Solana", 85.50, 4_000.0, 2_000_000_000.0, 420_000_000.0, 500_000_000.0, None, 82.0, 180_000.0, 0.001, 8_000_000_000.0, 0.65),
        crypto("ADA", "Cardano", 0.45, 1_500.0, 800_000_000.0, 35_000_000_000.0, 45_000_000_000.0, None, 78.0, 450_000.0, 0.15, 2_000_000_000.0, 0.70),
        crypto("DOT", "Polkadot", 6.80, 800.0, 500_000_000.0, 1_200_000_000.0, 1_200_000_000.0, None, 85.0, 95_000.0, 0.05, 1_500_000_000.0, 0.55),
        crypto("MATIC", "Polygon", 0.85, 800.0, 600_000_000.0, 9_500_000_000.0, 10_000_000_000.0, None, 80.0, 150_000.0, 0.01, 1_200_000_000.0, 0.40),
        crypto("AVAX", "Avalanche", 28.50, 700.0, 400_000_000.0, 250_000_000.0, 720_000_000.0, None, 83.0, 120_000.0, 0.25, 2_500_000_000.0, 0.60),
        crypto("LINK", "Chainlink", 14.20, 800.0, 300_000_000.0, 560_000_000.0, 1_000_000_000.0, None, 88.0, 85_000.0, 0.10, 500_000_000.0, 0.30),
    ]
}

fn news(
    id: &str,
    title: &str,
    source: &str,
    sentiment: NewsSentiment,
    confidence: f64,
    related: &[&str],
) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        summary: String::new(),
        url: format!("https://news.example.com/{id}"),
        source: source.to_string(),
        sentiment,
        confidence,
        published_at: as_of(),
        related_assets: related.iter().map(|s| s.to_string()).collect(),
    }
}

/// Sample news flow with sentiment annotations
pub fn news_items() -> Vec<NewsItem> {
    use NewsSentiment::{Negative, Neutral, Positive};
    vec![
        news("btc-institutional", "Bitcoin Surges as Institutional Adoption Grows", "CoinDesk", Positive, 85.0, &["BTC"]),
        news("eth-upgrade", "Ethereum Network Upgrade Boosts Transaction Efficiency", "Ethereum Foundation", Positive, 92.0, &["ETH"]),
        news("sol-tvl", "Solana Ecosystem Sees Record TVL Growth", "DeFi Pulse", Positive, 88.0, &["SOL"]),
        news("regulatory-uncertainty", "Market Volatility Concerns Rise Amid Regulatory Uncertainty", "Reuters", Negative, 78.0, &["BTC", "ETH", "SOL"]),
        news("bnb-scrutiny", "Binance Faces Regulatory Scrutiny in Multiple Jurisdictions", "Financial Times", Negative, 75.0, &["BNB"]),
        news("avax-exploit", "Avalanche DeFi Protocol Suffers Smart Contract Exploit", "The Block", Negative, 88.0, &["AVAX"]),
        news("link-expansion", "Chainlink Oracle Network Expands to New Blockchains", "Chainlink Blog", Positive, 85.0, &["LINK"]),
        news("tcs-earnings", "TCS Reports Strong Q3 Results with Bullish Outlook", "Economic Times", Positive, 92.0, &["TCS"]),
        news("infy-cloud", "Infosys Cloud Services See Record Adoption", "Business Standard", Positive, 88.0, &["INFY"]),
        news("maruti-sales", "Maruti Suzuki Vehicle Sales Decline Amid Market Challenges", "Auto News India", Negative, 85.0, &["MARUTI"]),
        news("hdfc-digital", "HDFC Bank Digital Banking Revenues Surge", "Financial Express", Positive, 90.0, &["HDFCBANK"]),
        news("banking-rates", "Banking Sector Faces RBI Policy Rate Pressure", "Mint", Negative, 80.0, &["HDFCBANK", "ICICIBANK", "SBIN"]),
        news("pharma-exports", "Pharmaceutical Sector Shows Strong Export Growth", "Pharma Times", Positive, 85.0, &["SUNPHARMA", "CIPLA", "BIOCON"]),
        news("itc-fmcg", "ITC FMCG Division Shows Mixed Performance", "Business Line", Neutral, 75.0, &["ITC"]),
        news("oil-recovery", "Oil & Gas Sector Benefits from Global Price Recovery", "Energy India", Positive, 83.0, &["RELIANCE", "ONGC"]),
    ]
}

fn whale(
    id: &str,
    symbol: &str,
    transaction_type: WhaleTransactionType,
    amount: f64,
    value_usd: f64,
    credibility_score: f64,
) -> WhaleTransaction {
    WhaleTransaction {
        id: id.to_string(),
        asset_symbol: symbol.to_string(),
        transaction_type,
        amount,
        value_usd,
        from_address: "0x1234...5678".to_string(),
        to_address: "0x8765...4321".to_string(),
        timestamp: as_of(),
        credibility_score,
    }
}

/// Sample whale transactions observed on the major networks
pub fn whale_transactions() -> Vec<WhaleTransaction> {
    use WhaleTransactionType::{Buy, Sell, Transfer};
    vec![
        whale("whale-1", "BTC", Buy, 500.0, 22_500_000.0, 95.0),
        whale("whale-2", "ETH", Sell, 10_000.0, 32_000_000.0, 88.0),
        whale("whale-3", "BTC", Transfer, 200.0, 9_000_000.0, 92.0),
        whale("whale-4", "ETH", Buy, 5_000.0, 16_000_000.0, 85.0),
        whale("whale-5", "SOL", Sell, 100_000.0, 9_550_000.0, 78.0),
        whale("whale-6", "ADA", Buy, 50_000_000.0, 22_500_000.0, 82.0),
        whale("whale-7", "BNB", Transfer, 10_000.0, 3_205_000.0, 90.0),
    ]
}

fn credibility(symbol: &str, overall: f64) -> CredibilityScore {
    CredibilityScore {
        asset_symbol: symbol.to_string(),
        overall_score: overall,
        data_source_quality: (overall - 3.0).clamp(0.0, 100.0),
        news_validation: (overall - 6.0).clamp(0.0, 100.0),
        institutional_backing: (overall + 2.0).clamp(0.0, 100.0),
        social_sentiment: (overall - 10.0).clamp(0.0, 100.0),
        last_updated: as_of(),
    }
}

/// Composite credibility assessments for the better-covered symbols
pub fn credibility_scores() -> Vec<CredibilityScore> {
    vec![
        credibility("BTC", 96.0),
        credibility("ETH", 93.0),
        credibility("BNB", 84.0),
        credibility("SOL", 86.0),
        credibility("ADA", 81.0),
        credibility("LINK", 87.0),
        credibility("TCS", 95.0),
        credibility("INFY", 92.0),
        credibility("HDFCBANK", 94.0),
        credibility("RELIANCE", 91.0),
        credibility("SUNPHARMA", 85.0),
        credibility("ITC", 88.0),
        credibility("ZOMATO", 72.0),
        credibility("BIOCON", 76.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fundamental_row_has_a_technical_row() {
        let technicals: Vec<String> = technical_rows().into_iter().map(|t| t.symbol).collect();
        for row in fundamental_rows() {
            assert!(
                technicals.contains(&row.symbol),
                "no technical row for {}",
                row.symbol
            );
        }
    }

    #[test]
    fn test_sample_scores_stay_in_range() {
        for row in crypto_fundamental_rows() {
            assert!((0.0..=100.0).contains(&row.tokenomics_health));
            if let Some(ratio) = row.staking_ratio {
                assert!((0.0..=1.0).contains(&ratio));
            }
        }
        for score in credibility_scores() {
            assert!((0.0..=100.0).contains(&score.overall_score));
        }
    }
}
